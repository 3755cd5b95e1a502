//! Lap and race progress bars
//!
//! Both bars share the same percentage-to-width mapping and differ only
//! in screen region and in what feeds them: current-lap completion for
//! the top bar, whole-race completion for the bottom one.

use crate::layout::{BAR_H, BAR_W, BAR_X, LAP_BAR_Y, RACE_BAR_Y};
use crate::palette::{self, Rgb};
use crate::traits::surface::DrawSurface;

/// Pixel width per percentage point (bar is 140 px for 100%)
pub const PX_PER_PERCENT: f32 = BAR_W as f32 / 100.0;

/// Pixel width for a completion percentage.
///
/// Out-of-range input clamps to the boundary widths, never rejects.
pub fn fill_width(percent: f32) -> u16 {
    let clamped = percent.clamp(0.0, 100.0);
    (clamped * PX_PER_PERCENT + 0.5) as u16
}

/// One horizontal progress bar at a fixed screen region
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    x: i16,
    y: i16,
}

/// The current-lap completion bar
pub const LAP_BAR: ProgressBar = ProgressBar {
    x: BAR_X,
    y: LAP_BAR_Y,
};

/// The whole-race completion bar
pub const RACE_BAR: ProgressBar = ProgressBar {
    x: BAR_X,
    y: RACE_BAR_Y,
};

impl ProgressBar {
    /// Fill the bar from its left edge for `percent` completion.
    ///
    /// Returns the filled width in pixels.
    pub fn render<S: DrawSurface>(
        &self,
        surface: &mut S,
        percent: f32,
        color: Rgb,
    ) -> Result<u16, S::Error> {
        let width = fill_width(percent);
        if width > 0 {
            surface.fill_rect(self.x, self.y, width, BAR_H, color)?;
        }
        Ok(width)
    }

    /// Clear the whole bar region back to the background (new lap).
    pub fn reset<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_rect(self.x, self.y, BAR_W, BAR_H, palette::BACKGROUND)
    }
}
