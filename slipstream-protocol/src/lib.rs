//! Wire formats for the Slipstream dashboard
//!
//! Two separate formats live here:
//!
//! - The **telemetry packet**: the 4-byte payload carried on the
//!   per-player topics. This is what race producers publish and what the
//!   dashboard decodes into gauge and progress-bar state.
//! - The **modem link protocol**: the framed UART protocol spoken to the
//!   radio co-processor that owns the wireless session. The dashboard
//!   issues connect/subscribe/publish commands and receives delivery
//!   status and inbound messages.
//!
//! # Link frame overview
//!
//! ```text
//! ┌──────┬────────┬────┬─────────────┬──────────┐
//! │ SYNC │ LENGTH │ OP │ BODY        │ CHECKSUM │
//! │ 1B   │ 1B     │ 1B │ 0–48B       │ 1B       │
//! └──────┴────────┴────┴─────────────┴──────────┘
//! ```
//!
//! The modem is a dumb pipe — session setup, TLS, and MQTT handshaking all
//! happen on the co-processor. The dashboard only sees command results and
//! subscribed messages.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;
pub mod telemetry;
pub mod topics;

pub use frame::{FrameError, LinkFrame, LinkParser, LINK_SYNC, MAX_BODY_LEN};
pub use messages::{HostCommand, LinkOp, ModemEvent};
pub use telemetry::{TelemetryError, TelemetryPacket, PACKET_LEN};
pub use topics::{Player, MAX_TOPIC_LEN};
