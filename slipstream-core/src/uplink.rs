//! Outbound mailbox and publish retry loop
//!
//! Delivery policy is at-most-once by design: the mailbox is a single
//! overwrite slot, and it is rearmed with a sentinel no-op payload at the
//! end of every enabled cycle whether or not the publish went out. A
//! failed send is lost, not queued. This bounds memory and keeps the loop
//! timing flat under a dead link; do not rework it into a retrying queue.

use heapless::Vec;

use slipstream_protocol::messages::MAX_MSG_PAYLOAD;

use crate::config::{IDLE_POLL_PERIOD_MS, PUBLISH_PERIOD_MS, RETRY_CEILING};
use crate::traits::transport::Transport;

/// Sentinel no-op payload the mailbox rearms with after every drain
pub const SENTINEL: &[u8] = b"none";

/// The outbound payload slot type
pub type Payload = Vec<u8, MAX_MSG_PAYLOAD>;

/// Single-slot overwrite buffer for outbound payloads
///
/// Last write wins; an unconsumed payload is simply lost when the next
/// one arrives. An empty (rearmed) slot drains as the sentinel.
#[derive(Debug, Clone)]
pub struct Mailbox {
    slot: Option<Payload>,
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Mailbox {
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Overwrite the slot. Payloads past the slot capacity are truncated.
    pub fn store(&mut self, payload: &[u8]) {
        let len = payload.len().min(MAX_MSG_PAYLOAD);
        let mut slot = Vec::new();
        let _ = slot.extend_from_slice(&payload[..len]);
        self.slot = Some(slot);
    }

    /// Take the current payload and rearm the slot with the sentinel.
    pub fn take(&mut self) -> Payload {
        self.slot.take().unwrap_or_else(|| {
            let mut sentinel = Vec::new();
            let _ = sentinel.extend_from_slice(SENTINEL);
            sentinel
        })
    }
}

/// Publish loop states
///
/// `Disabled` is terminal: once the retry ceiling is hit, outbound
/// publishing stays off until the process restarts. Telemetry receive is
/// unaffected; the dashboard degrades to display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Link assumed healthy; next tick publishes
    Idle,
    /// Last attempt failed; next tick reconnects instead of publishing
    Reconnecting,
    /// Retry ceiling exceeded; no further attempts
    Disabled,
}

/// What the loop should do on the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickAction {
    Publish,
    Reconnect,
    Sleep,
}

/// The publish/reconnect retry state machine
#[derive(Debug, Clone)]
pub struct PublishRetryLoop {
    state: LinkState,
    retries: u8,
}

impl Default for PublishRetryLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishRetryLoop {
    pub const fn new() -> Self {
        Self {
            state: LinkState::Idle,
            retries: 0,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn retries(&self) -> u8 {
        self.retries
    }

    pub fn is_enabled(&self) -> bool {
        self.state != LinkState::Disabled
    }

    /// What this tick should attempt.
    pub fn tick_action(&self) -> TickAction {
        match self.state {
            LinkState::Idle => TickAction::Publish,
            LinkState::Reconnecting => TickAction::Reconnect,
            LinkState::Disabled => TickAction::Sleep,
        }
    }

    /// Tick period for the current state (ms).
    pub fn period_ms(&self) -> u64 {
        if self.is_enabled() {
            PUBLISH_PERIOD_MS
        } else {
            IDLE_POLL_PERIOD_MS
        }
    }

    /// Record a publish outcome.
    ///
    /// A failed publish moves to `Reconnecting`; the same tick should
    /// follow up with a reconnect attempt.
    pub fn publish_result(&mut self, ok: bool) {
        if self.state == LinkState::Idle && !ok {
            self.state = LinkState::Reconnecting;
        }
    }

    /// Record a reconnect outcome.
    pub fn reconnect_result(&mut self, ok: bool) {
        if self.state == LinkState::Disabled {
            return;
        }

        if ok {
            self.retries = 0;
            self.state = LinkState::Idle;
        } else {
            self.retries = self.retries.saturating_add(1);
            if self.retries >= RETRY_CEILING {
                self.state = LinkState::Disabled;
            }
        }
    }

    /// Drive one full tick against a transport.
    ///
    /// The mailbox is drained exactly once per enabled tick, publish
    /// first when the link is healthy, reconnect in the same tick after
    /// a failure.
    pub fn run_cycle<T: Transport>(
        &mut self,
        transport: &mut T,
        mailbox: &mut Mailbox,
        topic: &str,
    ) {
        match self.tick_action() {
            TickAction::Publish => {
                let payload = mailbox.take();
                let ok = transport.publish(topic, &payload).is_ok();
                self.publish_result(ok);
                if !ok {
                    self.reconnect_result(transport.connect().is_ok());
                }
            }
            TickAction::Reconnect => {
                // Payload is dropped, never retried
                let _ = mailbox.take();
                self.reconnect_result(transport.connect().is_ok());
            }
            TickAction::Sleep => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RETRY_CEILING;
    use crate::traits::transport::TransportError;

    /// Transport double with settable outcomes and call accounting
    struct ScriptedTransport {
        connect_ok: bool,
        publish_ok: bool,
        connects: usize,
        publishes: usize,
        last_published: Payload,
    }

    impl ScriptedTransport {
        fn new() -> Self {
            Self {
                connect_ok: true,
                publish_ok: true,
                connects: 0,
                publishes: 0,
                last_published: Vec::new(),
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn connect(&mut self) -> Result<(), TransportError> {
            self.connects += 1;
            if self.connect_ok {
                Ok(())
            } else {
                Err(TransportError::ConnectFailed)
            }
        }

        fn publish(&mut self, _topic: &str, payload: &[u8]) -> Result<(), TransportError> {
            self.publishes += 1;
            self.last_published.clear();
            self.last_published.extend_from_slice(payload).unwrap();
            if self.publish_ok {
                Ok(())
            } else {
                Err(TransportError::PublishFailed)
            }
        }
    }

    #[test]
    fn test_mailbox_overwrite_is_last_write_wins() {
        let mut mailbox = Mailbox::new();
        mailbox.store(b"AAAA");
        mailbox.store(b"BBBB");

        assert_eq!(mailbox.take().as_slice(), b"BBBB");
        // Slot rearmed with the sentinel; A was never observable
        assert_eq!(mailbox.take().as_slice(), SENTINEL);
    }

    #[test]
    fn test_healthy_cycle_publishes_slot() {
        let mut transport = ScriptedTransport::new();
        let mut mailbox = Mailbox::new();
        let mut uplink = PublishRetryLoop::new();

        mailbox.store(&[0x0A, 0x00, 0x2C, 0x01]);
        uplink.run_cycle(&mut transport, &mut mailbox, "player1/tx");

        assert_eq!(transport.publishes, 1);
        assert_eq!(transport.last_published.as_slice(), &[0x0A, 0x00, 0x2C, 0x01]);
        assert_eq!(transport.connects, 0);
        assert_eq!(uplink.state(), LinkState::Idle);

        // Idle cycles publish the sentinel
        uplink.run_cycle(&mut transport, &mut mailbox, "player1/tx");
        assert_eq!(transport.last_published.as_slice(), SENTINEL);
    }

    #[test]
    fn test_failed_publish_reconnects_same_tick() {
        let mut transport = ScriptedTransport::new();
        transport.publish_ok = false;

        let mut mailbox = Mailbox::new();
        let mut uplink = PublishRetryLoop::new();

        uplink.run_cycle(&mut transport, &mut mailbox, "player1/tx");

        assert_eq!(transport.publishes, 1);
        assert_eq!(transport.connects, 1);
        // Reconnect succeeded, so the link is healthy again
        assert_eq!(uplink.state(), LinkState::Idle);
        assert_eq!(uplink.retries(), 0);
    }

    #[test]
    fn test_failed_payload_is_dropped_not_retried() {
        let mut transport = ScriptedTransport::new();
        transport.publish_ok = false;

        let mut mailbox = Mailbox::new();
        let mut uplink = PublishRetryLoop::new();

        mailbox.store(b"LOST");
        uplink.run_cycle(&mut transport, &mut mailbox, "player1/tx");

        // Link recovered; the next publish carries the sentinel, not "LOST"
        transport.publish_ok = true;
        uplink.run_cycle(&mut transport, &mut mailbox, "player1/tx");
        assert_eq!(transport.last_published.as_slice(), SENTINEL);
    }

    #[test]
    fn test_retry_ceiling_disables_permanently() {
        let mut transport = ScriptedTransport::new();
        transport.connect_ok = false;
        transport.publish_ok = false;

        let mut mailbox = Mailbox::new();
        let mut uplink = PublishRetryLoop::new();

        // First tick: publish fails, reconnect fails (retries = 1); nine
        // more reconnect-only ticks reach the ceiling
        for _ in 0..RETRY_CEILING {
            uplink.run_cycle(&mut transport, &mut mailbox, "player1/tx");
        }

        assert_eq!(uplink.state(), LinkState::Disabled);
        assert_eq!(uplink.retries(), RETRY_CEILING);
        assert_eq!(transport.publishes, 1);
        assert_eq!(transport.connects, RETRY_CEILING as usize);

        // The 11th tick performs no attempt at all
        let connects_before = transport.connects;
        let publishes_before = transport.publishes;
        uplink.run_cycle(&mut transport, &mut mailbox, "player1/tx");
        assert_eq!(transport.connects, connects_before);
        assert_eq!(transport.publishes, publishes_before);

        // And a later successful connect cannot re-enable it
        uplink.reconnect_result(true);
        assert_eq!(uplink.state(), LinkState::Disabled);
    }

    #[test]
    fn test_reconnect_success_resets_counter() {
        let mut transport = ScriptedTransport::new();
        transport.connect_ok = false;
        transport.publish_ok = false;

        let mut mailbox = Mailbox::new();
        let mut uplink = PublishRetryLoop::new();

        for _ in 0..3 {
            uplink.run_cycle(&mut transport, &mut mailbox, "player1/tx");
        }
        assert_eq!(uplink.retries(), 3);

        transport.connect_ok = true;
        uplink.run_cycle(&mut transport, &mut mailbox, "player1/tx");
        assert_eq!(uplink.retries(), 0);
        assert_eq!(uplink.state(), LinkState::Idle);
    }

    #[test]
    fn test_poll_period_degrades_when_disabled() {
        let mut uplink = PublishRetryLoop::new();
        assert_eq!(uplink.period_ms(), crate::config::PUBLISH_PERIOD_MS);

        for _ in 0..RETRY_CEILING {
            uplink.reconnect_result(false);
        }
        assert_eq!(uplink.period_ms(), crate::config::IDLE_POLL_PERIOD_MS);
    }
}
