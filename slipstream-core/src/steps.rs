//! Step indicators
//!
//! Two binary visual flags driven by external event signals (lap line,
//! braking zone, and the like). Level-triggered: enabled fills the
//! region with the side color, disabled restores the background.

use crate::layout::{STEP_LEFT_REGION, STEP_RIGHT_REGION, STEP_SIZE};
use crate::palette::{self, Rgb};
use crate::traits::surface::DrawSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepSide {
    Left,
    Right,
}

impl StepSide {
    const fn region(self) -> (i16, i16) {
        match self {
            StepSide::Left => STEP_LEFT_REGION,
            StepSide::Right => STEP_RIGHT_REGION,
        }
    }

    const fn color(self) -> Rgb {
        match self {
            StepSide::Left => palette::STEP_LEFT,
            StepSide::Right => palette::STEP_RIGHT,
        }
    }
}

/// Fill one side's region with its indicator color or the background.
pub fn set_step<S: DrawSurface>(
    surface: &mut S,
    side: StepSide,
    enabled: bool,
) -> Result<(), S::Error> {
    let (x, y) = side.region();
    let color = if enabled { side.color() } else { palette::BACKGROUND };
    surface.fill_rect(x, y, STEP_SIZE, STEP_SIZE, color)
}
