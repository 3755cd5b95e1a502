//! Inter-task communication
//!
//! Static embassy-sync primitives shared between tasks. The telemetry
//! channel funnels all inbound samples to the dashboard task (the single
//! owner of display state); the mailbox is the one outbound slot.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;

use slipstream_core::uplink::Mailbox;
use slipstream_protocol::{LinkOp, TelemetryPacket};

/// Channel capacity for decoded telemetry samples
const TELEMETRY_CHANNEL_SIZE: usize = 8;

/// Decoded telemetry from the modem RX pump to the dashboard task
pub static TELEMETRY_CHANNEL: Channel<
    CriticalSectionRawMutex,
    TelemetryPacket,
    TELEMETRY_CHANNEL_SIZE,
> = Channel::new();

/// Command status replies from the RX pump back to the command side
pub static STATUS_CHANNEL: Channel<CriticalSectionRawMutex, (LinkOp, bool), 4> = Channel::new();

/// Outbound mailbox: producers overwrite, the uplink task drains
pub static MAILBOX: Mutex<CriticalSectionRawMutex, Mailbox> = Mutex::new(Mailbox::new());

/// Producer entry point for outbound telemetry.
///
/// Overwrites the single mailbox slot (last write wins). The payload is
/// attempted at most once by the uplink loop; a failed send is dropped,
/// never retried.
pub async fn send(payload: &[u8]) {
    MAILBOX.lock().await.store(payload);
}
