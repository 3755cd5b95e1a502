//! Slipstream - Racing-Telemetry Dashboard Firmware
//!
//! Main firmware binary for RP2040-based handheld dashboards: an ST7735
//! TFT on SPI0, a radio modem co-processor on UART1, and three embassy
//! tasks (dashboard, modem RX pump, uplink) around a board-agnostic core.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART1;
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use slipstream_core::layout::SCREEN_W;
use slipstream_core::palette;
use slipstream_core::traits::DrawSurface;
use slipstream_protocol::Player;

mod channels;
mod display;
mod modem;
mod st7735;
mod tasks;

use crate::display::DashSurface;
use crate::modem::Modem;
use crate::st7735::{St7735, FRAME_LEN};

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

/// Player slot this unit is built for (selects accent color and topics)
const PLAYER: Player = Player::new(1);

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

// Static cell for the display framebuffer
static FRAME_BUF: StaticCell<[u8; FRAME_LEN]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Slipstream firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // SPI0 display at 32 MHz, TX only
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = 32_000_000;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    let dc = Output::new(p.PIN_16, Level::Low);
    let cs = Output::new(p.PIN_17, Level::High);
    let mut rst = Output::new(p.PIN_20, Level::High);

    let frame = FRAME_BUF.init([0u8; FRAME_LEN]);
    let mut panel = St7735::new(spi, dc, cs, frame);
    panel.init(&mut rst).await;
    info!("Display initialized");

    let mut surface = DashSurface::new(panel);

    // UART1 modem link
    let uart_config = UartConfig::default(); // 115200 baud default
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART1, p.PIN_8, p.PIN_9, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for modem link");

    // The RX pump must run before the handshake so status replies arrive
    spawner
        .spawn(tasks::modem_rx_task(rx, PLAYER.rx_topic()))
        .unwrap();

    let mut modem = Modem::new(tx);

    // Session handshake. Failures are surfaced on screen and drive the
    // retry loop later; the dashboard still comes up receive-only.
    boot_status(&mut surface, "Connecting...");
    match modem.connect(&PLAYER.client_id()).await {
        Ok(()) => {
            info!("Connected as {}", PLAYER.client_id().as_str());
            boot_status(&mut surface, "Connected");
        }
        Err(e) => {
            warn!("Connect failed: {:?}", e);
            boot_status(&mut surface, "Connect failed");
        }
    }

    if let Err(e) = modem.subscribe(&PLAYER.rx_topic()).await {
        warn!("Subscribe to {} failed: {:?}", PLAYER.rx_topic().as_str(), e);
        boot_status(&mut surface, "Subscribe failed");
    }

    spawner.spawn(tasks::uplink_task(modem, PLAYER)).unwrap();
    spawner.spawn(tasks::dashboard_task(surface, PLAYER)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Write a boot status line along the bottom of the screen
fn boot_status(surface: &mut DashSurface<St7735<'static>>, message: &str) {
    let _ = surface.fill_rect(0, 116, SCREEN_W, 12, palette::BLACK);
    let _ = surface.draw_text(2, 125, message, palette::WHITE);
    surface.target_mut().flush();
}
