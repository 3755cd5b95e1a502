//! Outbound transport capability
//!
//! The publish retry loop delivers through this trait. Session setup,
//! wireless handshaking, and subscription callbacks belong to the
//! collaborator layer behind it.

/// Transport failures, all recoverable by retry up to the ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Session (re)connection failed
    ConnectFailed,
    /// Publish attempt failed or was never acknowledged
    PublishFailed,
}

/// Publish-side transport operations
pub trait Transport {
    /// (Re)open the session.
    fn connect(&mut self) -> Result<(), TransportError>;

    /// Publish a payload on a topic.
    fn publish(&mut self, topic: &str, payload: &[u8]) -> Result<(), TransportError>;
}
