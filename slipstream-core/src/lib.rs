//! Board-agnostic dashboard logic for the Slipstream handheld
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (draw surface, outbound transport)
//! - Speed gauge needle math and redraw policy
//! - Lap/race progress bars and step indicators
//! - Dashboard controller (state owner, telemetry application)
//! - Outbound mailbox and publish retry state machine
//! - Palette, screen layout, and race configuration constants

#![no_std]
#![deny(unsafe_code)]

pub mod bars;
pub mod config;
pub mod dashboard;
pub mod gauge;
pub mod layout;
pub mod palette;
pub mod steps;
pub mod traits;
pub mod uplink;

#[cfg(test)]
mod testutil;
