//! Draw surface adapter
//!
//! Bridges the core [`DrawSurface`] capability onto any
//! `embedded-graphics` [`DrawTarget`], so the renderers stay ignorant of
//! the panel and the driver stays ignorant of the dashboard.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;

use slipstream_core::palette::Rgb;
use slipstream_core::traits::DrawSurface;

pub struct DashSurface<D> {
    target: D,
}

impl<D> DashSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Access the underlying target (flushing, teardown).
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    fn color(rgb: Rgb) -> Rgb565 {
        Rgb565::new(rgb.r >> 3, rgb.g >> 2, rgb.b >> 3)
    }
}

impl<D> DrawSurface for DashSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn fill_screen(&mut self, color: Rgb) -> Result<(), Self::Error> {
        self.target.clear(Self::color(color))
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: u16, h: u16, color: Rgb) -> Result<(), Self::Error> {
        Rectangle::new(Point::new(x as i32, y as i32), Size::new(w as u32, h as u32))
            .into_styled(PrimitiveStyle::with_fill(Self::color(color)))
            .draw(&mut self.target)
    }

    fn draw_rect(&mut self, x: i16, y: i16, w: u16, h: u16, color: Rgb) -> Result<(), Self::Error> {
        Rectangle::new(Point::new(x as i32, y as i32), Size::new(w as u32, h as u32))
            .into_styled(PrimitiveStyle::with_stroke(Self::color(color), 1))
            .draw(&mut self.target)
    }

    fn draw_line(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        color: Rgb,
    ) -> Result<(), Self::Error> {
        Line::new(
            Point::new(x0 as i32, y0 as i32),
            Point::new(x1 as i32, y1 as i32),
        )
        .into_styled(PrimitiveStyle::with_stroke(Self::color(color), 1))
        .draw(&mut self.target)
    }

    fn fill_circle(&mut self, cx: i16, cy: i16, r: u16, color: Rgb) -> Result<(), Self::Error> {
        Circle::with_center(Point::new(cx as i32, cy as i32), 2 * r as u32 + 1)
            .into_styled(PrimitiveStyle::with_fill(Self::color(color)))
            .draw(&mut self.target)
    }

    fn fill_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Rgb,
    ) -> Result<(), Self::Error> {
        Triangle::new(
            Point::new(x0 as i32, y0 as i32),
            Point::new(x1 as i32, y1 as i32),
            Point::new(x2 as i32, y2 as i32),
        )
        .into_styled(PrimitiveStyle::with_fill(Self::color(color)))
        .draw(&mut self.target)
    }

    fn draw_text(&mut self, x: i16, y: i16, text: &str, color: Rgb) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(&FONT_6X10, Self::color(color));
        Text::new(text, Point::new(x as i32, y as i32), style)
            .draw(&mut self.target)
            .map(|_| ())
    }
}
