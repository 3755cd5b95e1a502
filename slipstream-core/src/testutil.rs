//! Test support: an in-memory draw surface
//!
//! Records every draw call and rasterizes screen/rect fills into a pixel
//! grid, so tests can assert both call order and region contents.

use core::convert::Infallible;

use heapless::Vec;

use crate::layout::{SCREEN_H, SCREEN_W};
use crate::palette::{Rgb, BLACK};
use crate::traits::surface::DrawSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    FillScreen(Rgb),
    FillRect {
        x: i16,
        y: i16,
        w: u16,
        h: u16,
        color: Rgb,
    },
    DrawRect {
        x: i16,
        y: i16,
        w: u16,
        h: u16,
        color: Rgb,
    },
    Line {
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        color: Rgb,
    },
    Circle {
        cx: i16,
        cy: i16,
        r: u16,
        color: Rgb,
    },
    Triangle(Rgb),
    Text {
        x: i16,
        y: i16,
        color: Rgb,
    },
}

pub struct TraceSurface {
    pub ops: Vec<Op, 2048>,
    pub pixels: [[Rgb; SCREEN_W as usize]; SCREEN_H as usize],
}

impl TraceSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            pixels: [[BLACK; SCREEN_W as usize]; SCREEN_H as usize],
        }
    }

    pub fn pixel(&self, x: i16, y: i16) -> Rgb {
        self.pixels[y as usize][x as usize]
    }

    fn paint_rect(&mut self, x: i16, y: i16, w: u16, h: u16, color: Rgb) {
        for py in y..y + h as i16 {
            for px in x..x + w as i16 {
                if (0..SCREEN_W as i16).contains(&px) && (0..SCREEN_H as i16).contains(&py) {
                    self.pixels[py as usize][px as usize] = color;
                }
            }
        }
    }
}

impl DrawSurface for TraceSurface {
    type Error = Infallible;

    fn fill_screen(&mut self, color: Rgb) -> Result<(), Infallible> {
        self.paint_rect(0, 0, SCREEN_W, SCREEN_H, color);
        let _ = self.ops.push(Op::FillScreen(color));
        Ok(())
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: u16, h: u16, color: Rgb) -> Result<(), Infallible> {
        self.paint_rect(x, y, w, h, color);
        let _ = self.ops.push(Op::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_rect(&mut self, x: i16, y: i16, w: u16, h: u16, color: Rgb) -> Result<(), Infallible> {
        let _ = self.ops.push(Op::DrawRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_line(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        color: Rgb,
    ) -> Result<(), Infallible> {
        let _ = self.ops.push(Op::Line { x0, y0, x1, y1, color });
        Ok(())
    }

    fn fill_circle(&mut self, cx: i16, cy: i16, r: u16, color: Rgb) -> Result<(), Infallible> {
        let _ = self.ops.push(Op::Circle { cx, cy, r, color });
        Ok(())
    }

    fn fill_triangle(
        &mut self,
        _x0: i16,
        _y0: i16,
        _x1: i16,
        _y1: i16,
        _x2: i16,
        _y2: i16,
        color: Rgb,
    ) -> Result<(), Infallible> {
        let _ = self.ops.push(Op::Triangle(color));
        Ok(())
    }

    fn draw_text(&mut self, x: i16, y: i16, _text: &str, color: Rgb) -> Result<(), Infallible> {
        let _ = self.ops.push(Op::Text { x, y, color });
        Ok(())
    }
}
