//! Blocking ST7735 display driver for embassy-rp
//!
//! Drives the 160x128 TFT over SPI with a single RGB565 framebuffer.
//! Rendering goes through the `embedded-graphics` [`DrawTarget`] into the
//! buffer; [`St7735::flush`] pushes the whole buffer to the panel. At
//! 32 MHz SPI a full flush is ~10 ms, well inside the render cadence.

use core::convert::Infallible;

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Display dimensions (landscape after 90° rotation)
pub const WIDTH: usize = 160;
pub const HEIGHT: usize = 128;

/// Framebuffer size in bytes (RGB565)
pub const FRAME_LEN: usize = WIDTH * HEIGHT * 2;

// ST7735 commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MY: u8 = 0x80; // Row address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange

/// ST7735 panel behind a framebuffer
pub struct St7735<'d> {
    spi: Spi<'d, SPI0, Blocking>,
    dc: Output<'d>,
    cs: Output<'d>,
    buf: &'static mut [u8; FRAME_LEN],
}

impl<'d> St7735<'d> {
    pub fn new(
        spi: Spi<'d, SPI0, Blocking>,
        dc: Output<'d>,
        cs: Output<'d>,
        buf: &'static mut [u8; FRAME_LEN],
    ) -> Self {
        Self { spi, dc, cs, buf }
    }

    /// Hardware reset and panel init sequence.
    pub async fn init(&mut self, rst: &mut Output<'d>) {
        rst.set_low();
        Timer::after_millis(10).await;
        rst.set_high();
        Timer::after_millis(10).await;

        self.command(SWRESET, &[]);
        Timer::after_millis(150).await;
        self.command(SLPOUT, &[]);
        Timer::after_millis(120).await;

        self.command(COLMOD, &[0x05]); // 16 bpp
        self.command(MADCTL, &[MADCTL_MV | MADCTL_MY]); // landscape
        self.command(NORON, &[]);
        self.command(DISPON, &[]);
        Timer::after_millis(20).await;
    }

    fn command(&mut self, cmd: u8, args: &[u8]) {
        self.cs.set_low();
        self.dc.set_low();
        let _ = self.spi.blocking_write(&[cmd]);
        if !args.is_empty() {
            self.dc.set_high();
            let _ = self.spi.blocking_write(args);
        }
        self.cs.set_high();
    }

    /// Send the framebuffer to the panel.
    pub fn flush(&mut self) {
        self.command(CASET, &[0, 0, 0, (WIDTH - 1) as u8]);
        self.command(RASET, &[0, 0, 0, (HEIGHT - 1) as u8]);

        self.cs.set_low();
        self.dc.set_low();
        let _ = self.spi.blocking_write(&[RAMWR]);
        self.dc.set_high();
        let _ = self.spi.blocking_write(self.buf);
        self.cs.set_high();
    }
}

impl OriginDimensions for St7735<'_> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for St7735<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                let idx = 2 * (point.y as usize * WIDTH + point.x as usize);
                let raw = RawU16::from(color).into_inner();
                self.buf[idx] = (raw >> 8) as u8;
                self.buf[idx + 1] = raw as u8;
            }
        }
        Ok(())
    }
}
