//! Draw surface capability
//!
//! The renderers never talk to display hardware; they draw through this
//! trait. The firmware implements it over an ST7735, tests implement it
//! over a pixel buffer.

use crate::palette::Rgb;

/// Pixel-addressed draw surface, origin top-left
pub trait DrawSurface {
    type Error;

    /// Fill the whole screen with one color
    fn fill_screen(&mut self, color: Rgb) -> Result<(), Self::Error>;

    /// Fill a rectangle
    fn fill_rect(&mut self, x: i16, y: i16, w: u16, h: u16, color: Rgb) -> Result<(), Self::Error>;

    /// Draw a 1-px rectangle outline
    fn draw_rect(&mut self, x: i16, y: i16, w: u16, h: u16, color: Rgb) -> Result<(), Self::Error>;

    /// Draw a 1-px line segment
    fn draw_line(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        color: Rgb,
    ) -> Result<(), Self::Error>;

    /// Fill a circle
    fn fill_circle(&mut self, cx: i16, cy: i16, r: u16, color: Rgb) -> Result<(), Self::Error>;

    /// Fill a triangle
    #[allow(clippy::too_many_arguments)]
    fn fill_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Rgb,
    ) -> Result<(), Self::Error>;

    /// Draw a text label with the baseline at `y`
    fn draw_text(&mut self, x: i16, y: i16, text: &str, color: Rgb) -> Result<(), Self::Error>;
}
