//! Player identity and topic derivation
//!
//! Each dashboard is bound to one player slot. The slot selects the
//! accent color on screen and the pair of MQTT-style topics the modem
//! uses: `player<N>/tx` outbound, `player<N>/rx` inbound.

use core::fmt::Write;

use heapless::String;

/// Maximum topic string length
pub const MAX_TOPIC_LEN: usize = 16;

/// Maximum client identifier length
pub const MAX_CLIENT_ID_LEN: usize = 24;

/// A player slot (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Player(u8);

impl Player {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub const fn number(&self) -> u8 {
        self.0
    }

    /// Topic this dashboard publishes telemetry on.
    pub fn tx_topic(&self) -> String<MAX_TOPIC_LEN> {
        let mut topic = String::new();
        let _ = write!(topic, "player{}/tx", self.0);
        topic
    }

    /// Topic this dashboard subscribes to for inbound telemetry.
    pub fn rx_topic(&self) -> String<MAX_TOPIC_LEN> {
        let mut topic = String::new();
        let _ = write!(topic, "player{}/rx", self.0);
        topic
    }

    /// Session client identifier handed to the modem on connect.
    pub fn client_id(&self) -> String<MAX_CLIENT_ID_LEN> {
        let mut id = String::new();
        let _ = write!(id, "slipstream-racer-{}", self.0);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_pair() {
        let player = Player::new(3);
        assert_eq!(player.tx_topic().as_str(), "player3/tx");
        assert_eq!(player.rx_topic().as_str(), "player3/rx");
    }

    #[test]
    fn test_client_id() {
        assert_eq!(Player::new(1).client_id().as_str(), "slipstream-racer-1");
    }

    #[test]
    fn test_widest_player_number_fits() {
        // 3-digit player numbers must still fit the bounded strings
        let player = Player::new(255);
        assert_eq!(player.tx_topic().as_str(), "player255/tx");
        assert_eq!(player.client_id().as_str(), "slipstream-racer-255");
    }
}
