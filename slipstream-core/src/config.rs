//! Race and uplink configuration constants
//!
//! Fixed at compile time; nothing here is user-editable at runtime.

pub use slipstream_protocol::Player;

/// Track length in telemetry distance units
pub const TRACK_LENGTH: i16 = 300;

/// Laps per race
pub const LAPS: i16 = 3;

/// Consecutive reconnect failures tolerated before outbound publishing
/// is disabled for the rest of the process lifetime
pub const RETRY_CEILING: u8 = 10;

/// Publish loop period while the uplink is enabled (ms)
pub const PUBLISH_PERIOD_MS: u64 = 100;

/// Poll period once the uplink has disabled itself (ms)
pub const IDLE_POLL_PERIOD_MS: u64 = 1000;

/// Pace of the boot self-test sweep (ms per gauge step)
pub const DEMO_SWEEP_STEP_MS: u64 = 10;
