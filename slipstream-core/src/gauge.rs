//! Speed gauge: quarter-arc table and needle renderer
//!
//! The gauge sweeps 270° for speeds 0..=250. Instead of storing offsets
//! for every angle, one 91-entry quarter arc is mirrored into four
//! quadrants by sign negation. The renderer never repaints the dial; it
//! erases the previous needle in the background color and draws the new
//! one in the player's accent.

use crate::layout::{GAUGE_CX, GAUGE_CY, GAUGE_FACE_R, GAUGE_LABEL_POS, GAUGE_MASK, GAUGE_RING_R};
use crate::palette::{self, Rgb};
use crate::traits::surface::DrawSurface;

/// Upper bound of the gauge input range
pub const SPEED_MAX: i16 = 250;

/// Raw speed value at the first quarter-arc entry; the sweep's zero point
/// sits below it, mirrored into the upper-left quadrant
pub const SWEEP_ZERO_OFFSET: i16 = 35;

/// Needle length in pixels
pub const NEEDLE_R: i16 = 30;

/// Quarter-arc offsets from the gauge center, index 0..=90.
///
/// dx is non-increasing and dy non-decreasing across the table
/// (monotonic arc traversal).
#[rustfmt::skip]
pub const NEEDLE_ARC: [(i16, i16); 91] = [
    (30, 0), (29, 0), (29, 1), (29, 1), (29, 2), (29, 2), (29, 3), (29, 3), (29, 4), (29, 4),
    (29, 5), (29, 5), (29, 6), (29, 6), (29, 7), (28, 7), (28, 8), (28, 8), (28, 9), (28, 9),
    (28, 10), (28, 10), (27, 11), (27, 11), (27, 12), (27, 12), (26, 13), (26, 13), (26, 14), (26, 14),
    (25, 14), (25, 15), (25, 15), (25, 16), (24, 16), (24, 17), (24, 17), (23, 18), (23, 18), (23, 18),
    (22, 19), (22, 19), (22, 20), (21, 20), (21, 20), (21, 21), (20, 21), (20, 21), (20, 22), (19, 22),
    (19, 22), (18, 23), (18, 23), (18, 23), (17, 24), (17, 24), (16, 24), (16, 25), (15, 25), (15, 25),
    (15, 25), (14, 26), (14, 26), (13, 26), (13, 26), (12, 27), (12, 27), (11, 27), (11, 27), (10, 28),
    (10, 28), (9, 28), (9, 28), (8, 28), (8, 28), (7, 28), (7, 29), (6, 29), (6, 29), (5, 29),
    (5, 29), (4, 29), (4, 29), (3, 29), (3, 29), (2, 29), (2, 29), (1, 29), (1, 29), (0, 29),
    (0, 30),
];

/// Which mirrored quarter of the dial a speed lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quadrant {
    UpperLeft,
    UpperRight,
    LowerRight,
    LowerLeft,
}

/// Map a speed to the needle tip position on screen.
///
/// Total over all inputs: out-of-range speeds clamp to [0, [`SPEED_MAX`]].
pub fn needle_endpoint(speed: i16) -> ((i16, i16), Quadrant) {
    let shifted = speed.clamp(0, SPEED_MAX) - SWEEP_ZERO_OFFSET;

    if shifted < 0 {
        let (dx, dy) = NEEDLE_ARC[(-shifted) as usize];
        ((GAUGE_CX - dx, GAUGE_CY + dy), Quadrant::UpperLeft)
    } else if shifted <= 90 {
        let (dx, dy) = NEEDLE_ARC[shifted as usize];
        ((GAUGE_CX - dx, GAUGE_CY - dy), Quadrant::UpperRight)
    } else if shifted <= 180 {
        let (dx, dy) = NEEDLE_ARC[(180 - shifted) as usize];
        ((GAUGE_CX + dx, GAUGE_CY - dy), Quadrant::LowerRight)
    } else {
        let (dx, dy) = NEEDLE_ARC[(shifted - 180) as usize];
        ((GAUGE_CX + dx, GAUGE_CY + dy), Quadrant::LowerLeft)
    }
}

/// Draw the needle for a speed in one color.
///
/// Two line segments one pixel apart, so the needle reads as 2 px thick
/// without a dedicated thick-line primitive.
pub fn draw_needle<S: DrawSurface>(surface: &mut S, speed: i16, color: Rgb) -> Result<(), S::Error> {
    let ((x, y), _) = needle_endpoint(speed);
    surface.draw_line(x, y, GAUGE_CX, GAUGE_CY, color)?;
    surface.draw_line(x, y + 1, GAUGE_CX, GAUGE_CY + 1, color)
}

/// The speed gauge renderer
///
/// Remembers the last drawn needle position so each update only touches
/// two needle positions instead of repainting the dial.
#[derive(Debug, Clone)]
pub struct SpeedGauge {
    shown: i16,
}

impl Default for SpeedGauge {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeedGauge {
    pub const fn new() -> Self {
        Self { shown: 0 }
    }

    /// Last speed the needle was drawn at.
    pub fn shown(&self) -> i16 {
        self.shown
    }

    /// Draw the static dial: ring, face, sweep-gap mask, and label.
    pub fn draw_dial<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_circle(GAUGE_CX, GAUGE_CY, GAUGE_RING_R, palette::WHITE)?;
        surface.fill_circle(GAUGE_CX, GAUGE_CY, GAUGE_FACE_R, palette::BACKGROUND)?;
        let [(ax, ay), (bx, by), (cx, cy)] = GAUGE_MASK;
        surface.fill_triangle(ax, ay, bx, by, cx, cy, palette::BACKGROUND)?;
        let (lx, ly) = GAUGE_LABEL_POS;
        surface.draw_text(lx, ly, "SPEED", palette::WHITE)
    }

    /// Move the needle: erase the previous position, draw the new one.
    pub fn set_speed<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        speed: i16,
        color: Rgb,
    ) -> Result<(), S::Error> {
        draw_needle(surface, self.shown, palette::BACKGROUND)?;
        draw_needle(surface, speed, color)?;
        self.shown = speed;
        Ok(())
    }
}
