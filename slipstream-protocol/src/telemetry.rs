//! The 4-byte telemetry packet
//!
//! Packet layout (little-endian):
//!
//! | offset | field    | type |
//! |--------|----------|------|
//! | 0–1    | speed    | i16  |
//! | 2–3    | distance | i16  |
//!
//! `speed` is the gauge position in [0, 250] (a linear sweep unit, not a
//! physical km/h). `distance` is the cumulative race distance the
//! controller turns into lap and race percentages.

/// Exact wire size of a telemetry packet
pub const PACKET_LEN: usize = 4;

/// Telemetry decode errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TelemetryError {
    /// Payload length is not exactly [`PACKET_LEN`]
    MalformedPacket,
}

/// A decoded telemetry sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryPacket {
    /// Gauge sweep position, expected in [0, 250]
    pub speed: i16,
    /// Cumulative race distance
    pub distance: i16,
}

impl TelemetryPacket {
    /// Decode a packet from raw payload bytes.
    ///
    /// Anything that is not exactly 4 bytes is a [`TelemetryError::MalformedPacket`];
    /// there is no partial decode.
    pub fn decode(bytes: &[u8]) -> Result<Self, TelemetryError> {
        if bytes.len() != PACKET_LEN {
            return Err(TelemetryError::MalformedPacket);
        }

        Ok(Self {
            speed: i16::from_le_bytes([bytes[0], bytes[1]]),
            distance: i16::from_le_bytes([bytes[2], bytes[3]]),
        })
    }

    /// Encode this packet for publishing on the outbound topic.
    pub fn encode(&self) -> [u8; PACKET_LEN] {
        let speed = self.speed.to_le_bytes();
        let distance = self.distance.to_le_bytes();
        [speed[0], speed[1], distance[0], distance[1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_vector() {
        let packet = TelemetryPacket::decode(&[0x0A, 0x00, 0x2C, 0x01]).unwrap();
        assert_eq!(packet.speed, 10);
        assert_eq!(packet.distance, 300);
    }

    #[test]
    fn test_decode_negative_values() {
        // -1 in both fields
        let packet = TelemetryPacket::decode(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(packet.speed, -1);
        assert_eq!(packet.distance, -1);
    }

    #[test]
    fn test_wrong_length_is_malformed() {
        assert_eq!(
            TelemetryPacket::decode(&[]),
            Err(TelemetryError::MalformedPacket)
        );
        assert_eq!(
            TelemetryPacket::decode(&[0x0A, 0x00, 0x2C]),
            Err(TelemetryError::MalformedPacket)
        );
        assert_eq!(
            TelemetryPacket::decode(&[0x0A, 0x00, 0x2C, 0x01, 0x00]),
            Err(TelemetryError::MalformedPacket)
        );
    }

    #[test]
    fn test_encode_matches_decode() {
        let packet = TelemetryPacket {
            speed: 187,
            distance: 723,
        };
        let decoded = TelemetryPacket::decode(&packet.encode()).unwrap();
        assert_eq!(decoded, packet);
    }
}
