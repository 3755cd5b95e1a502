//! Uplink task
//!
//! Fixed-period drain of the outbound mailbox through the retry state
//! machine. Mirrors `PublishRetryLoop::run_cycle`, with the transport
//! calls awaited on the modem: publish while the link is healthy,
//! reconnect in the same tick after a failure, and degrade to the slow
//! poll once the retry ceiling disables the loop.

use defmt::*;
use embassy_time::Timer;

use slipstream_core::config::RETRY_CEILING;
use slipstream_core::uplink::{PublishRetryLoop, TickAction};
use slipstream_protocol::Player;

use crate::channels::MAILBOX;
use crate::modem::Modem;

/// Uplink task - outbound publishing with bounded reconnect retries
#[embassy_executor::task]
pub async fn uplink_task(mut modem: Modem, player: Player) {
    info!("Uplink task started");

    let topic = player.tx_topic();
    let client_id = player.client_id();
    let mut uplink = PublishRetryLoop::new();

    loop {
        match uplink.tick_action() {
            TickAction::Publish => {
                let payload = MAILBOX.lock().await.take();
                let ok = modem.publish(&topic, &payload).await.is_ok();
                uplink.publish_result(ok);
                if !ok {
                    warn!("Publish failed, reconnecting");
                    let reconnected = modem.connect(&client_id).await.is_ok();
                    uplink.reconnect_result(reconnected);
                }
            }
            TickAction::Reconnect => {
                // Drain and drop: payloads are never retried
                let _ = MAILBOX.lock().await.take();
                let reconnected = modem.connect(&client_id).await.is_ok();
                if !reconnected {
                    warn!(
                        "Reconnect failed ({}/{})",
                        uplink.retries() + 1,
                        RETRY_CEILING
                    );
                }
                uplink.reconnect_result(reconnected);
                if !uplink.is_enabled() {
                    warn!("Retry ceiling reached, uplink disabled until restart");
                }
            }
            TickAction::Sleep => {
                // Disabled: receive-only operation
            }
        }

        Timer::after_millis(uplink.period_ms()).await;
    }
}
