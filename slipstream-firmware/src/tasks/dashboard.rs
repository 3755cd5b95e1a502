//! Dashboard task
//!
//! The single owner of display state. Boots with the static chrome and a
//! full gauge self-test sweep, then goes telemetry-driven: every decoded
//! sample updates the controller and triggers a redraw. A slow ticker
//! keeps the panel refreshed on stale state when packets stop - nothing
//! on the receive path is fatal to rendering.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker, Timer};

use slipstream_core::config::DEMO_SWEEP_STEP_MS;
use slipstream_core::dashboard::{DashboardController, DemoSweep};
use slipstream_core::steps::StepSide;
use slipstream_protocol::Player;

use crate::channels::TELEMETRY_CHANNEL;
use crate::display::DashSurface;
use crate::st7735::St7735;

/// Refresh period while waiting on telemetry
const REFRESH_MS: u64 = 50;

/// Dashboard task - renders all state changes
#[embassy_executor::task]
pub async fn dashboard_task(mut surface: DashSurface<St7735<'static>>, player: Player) {
    info!("Dashboard task started for player {}", player.number());

    let mut dash = DashboardController::new(player);

    let _ = dash.draw_chrome(&mut surface);
    surface.target_mut().flush();

    // Boot self-test: indicators lit, one full sweep of the gauge
    dash.set_step(StepSide::Left, true);
    dash.set_step(StepSide::Right, true);
    let mut sweep = DemoSweep::new();
    for _ in 0..DemoSweep::CYCLE_STEPS {
        dash.set_speed(sweep.step());
        let _ = dash.render(&mut surface);
        surface.target_mut().flush();
        Timer::after_millis(DEMO_SWEEP_STEP_MS).await;
    }
    dash.set_step(StepSide::Left, false);
    dash.set_step(StepSide::Right, false);
    info!("Self-test sweep complete");

    let mut ticker = Ticker::every(Duration::from_millis(REFRESH_MS));
    loop {
        match select(TELEMETRY_CHANNEL.receive(), ticker.next()).await {
            Either::First(packet) => {
                trace!("Telemetry: speed={} distance={}", packet.speed, packet.distance);
                dash.on_telemetry(packet);
            }
            Either::Second(()) => {
                // Periodic refresh on whatever state we have
            }
        }

        let _ = dash.render(&mut surface);
        surface.target_mut().flush();
    }
}
