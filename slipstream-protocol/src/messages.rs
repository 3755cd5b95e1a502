//! Typed messages over link frames
//!
//! Two directions:
//! - Dashboard → modem: session commands ([`HostCommand`])
//! - Modem → dashboard: command results and subscribed messages
//!   ([`ModemEvent`])

use heapless::{String, Vec};

use crate::frame::{FrameError, LinkFrame, MAX_BODY_LEN};
use crate::topics::MAX_TOPIC_LEN;

// Operation IDs: dashboard → modem
pub const OP_CONNECT: u8 = 0x01;
pub const OP_SUBSCRIBE: u8 = 0x02;
pub const OP_PUBLISH: u8 = 0x03;

// Operation IDs: modem → dashboard
pub const OP_STATUS: u8 = 0x81;
pub const OP_INBOUND: u8 = 0x82;

/// Maximum message payload carried after a topic prefix
pub const MAX_MSG_PAYLOAD: usize = MAX_BODY_LEN - 1 - MAX_TOPIC_LEN;

/// Session operations the modem reports status for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkOp {
    Connect,
    Subscribe,
    Publish,
}

impl LinkOp {
    pub const fn to_byte(self) -> u8 {
        match self {
            LinkOp::Connect => OP_CONNECT,
            LinkOp::Subscribe => OP_SUBSCRIBE,
            LinkOp::Publish => OP_PUBLISH,
        }
    }

    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            OP_CONNECT => Some(LinkOp::Connect),
            OP_SUBSCRIBE => Some(LinkOp::Subscribe),
            OP_PUBLISH => Some(LinkOp::Publish),
            _ => None,
        }
    }
}

/// Commands from the dashboard to the modem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand<'a> {
    /// Open (or re-open) the wireless session
    Connect { client_id: &'a str },
    /// Subscribe to an inbound topic
    Subscribe { topic: &'a str },
    /// Publish a payload on an outbound topic
    Publish { topic: &'a str, payload: &'a [u8] },
}

impl<'a> HostCommand<'a> {
    /// Encode this command into a link frame.
    pub fn to_frame(&self) -> Result<LinkFrame, FrameError> {
        match self {
            HostCommand::Connect { client_id } => LinkFrame::new(OP_CONNECT, client_id.as_bytes()),
            HostCommand::Subscribe { topic } => LinkFrame::new(OP_SUBSCRIBE, topic.as_bytes()),
            HostCommand::Publish { topic, payload } => {
                // Body: [topic_len][topic bytes][payload bytes]
                let topic_bytes = topic.as_bytes();
                if topic_bytes.len() > MAX_TOPIC_LEN {
                    return Err(FrameError::BodyTooLarge);
                }

                let mut body = Vec::<u8, MAX_BODY_LEN>::new();
                body.push(topic_bytes.len() as u8)
                    .map_err(|_| FrameError::BodyTooLarge)?;
                body.extend_from_slice(topic_bytes)
                    .map_err(|_| FrameError::BodyTooLarge)?;
                body.extend_from_slice(payload)
                    .map_err(|_| FrameError::BodyTooLarge)?;

                LinkFrame::new(OP_PUBLISH, &body)
            }
        }
    }
}

/// Events from the modem to the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModemEvent {
    /// Result of a previously issued command
    Status { op: LinkOp, ok: bool },
    /// A message arrived on a subscribed topic
    Inbound {
        topic: String<MAX_TOPIC_LEN>,
        payload: Vec<u8, MAX_MSG_PAYLOAD>,
    },
}

impl ModemEvent {
    /// Parse an event from a modem-originated frame.
    pub fn from_frame(frame: &LinkFrame) -> Result<Self, FrameError> {
        match frame.op {
            OP_STATUS => {
                if frame.body.len() != 2 {
                    return Err(FrameError::Malformed);
                }
                let op = LinkOp::from_byte(frame.body[0]).ok_or(FrameError::Malformed)?;
                Ok(ModemEvent::Status {
                    op,
                    ok: frame.body[1] != 0,
                })
            }
            OP_INBOUND => {
                // Body: [topic_len][topic bytes][payload bytes]
                let (&topic_len, rest) = frame.body.split_first().ok_or(FrameError::Malformed)?;
                let topic_len = topic_len as usize;
                if topic_len > MAX_TOPIC_LEN || topic_len > rest.len() {
                    return Err(FrameError::Malformed);
                }

                let topic_str =
                    core::str::from_utf8(&rest[..topic_len]).map_err(|_| FrameError::Malformed)?;
                let mut topic = String::new();
                topic
                    .push_str(topic_str)
                    .map_err(|_| FrameError::Malformed)?;

                let mut payload = Vec::new();
                payload
                    .extend_from_slice(&rest[topic_len..])
                    .map_err(|_| FrameError::Malformed)?;

                Ok(ModemEvent::Inbound { topic, payload })
            }
            _ => Err(FrameError::Malformed),
        }
    }

    /// Encode this event into a frame (for testing or simulation).
    pub fn to_frame(&self) -> Result<LinkFrame, FrameError> {
        match self {
            ModemEvent::Status { op, ok } => {
                LinkFrame::new(OP_STATUS, &[op.to_byte(), *ok as u8])
            }
            ModemEvent::Inbound { topic, payload } => {
                let mut body = Vec::<u8, MAX_BODY_LEN>::new();
                body.push(topic.len() as u8)
                    .map_err(|_| FrameError::BodyTooLarge)?;
                body.extend_from_slice(topic.as_bytes())
                    .map_err(|_| FrameError::BodyTooLarge)?;
                body.extend_from_slice(payload)
                    .map_err(|_| FrameError::BodyTooLarge)?;
                LinkFrame::new(OP_INBOUND, &body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_body_layout() {
        let cmd = HostCommand::Publish {
            topic: "player1/tx",
            payload: &[0x0A, 0x00, 0x2C, 0x01],
        };
        let frame = cmd.to_frame().unwrap();

        assert_eq!(frame.op, OP_PUBLISH);
        assert_eq!(frame.body[0], 10); // topic length
        assert_eq!(&frame.body[1..11], b"player1/tx");
        assert_eq!(&frame.body[11..], &[0x0A, 0x00, 0x2C, 0x01]);
    }

    #[test]
    fn test_status_roundtrip() {
        let event = ModemEvent::Status {
            op: LinkOp::Publish,
            ok: false,
        };
        let parsed = ModemEvent::from_frame(&event.to_frame().unwrap()).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_inbound_roundtrip() {
        let mut topic = String::new();
        topic.push_str("player2/rx").unwrap();
        let mut payload = Vec::new();
        payload.extend_from_slice(&[1, 2, 3, 4]).unwrap();

        let event = ModemEvent::Inbound { topic, payload };
        let parsed = ModemEvent::from_frame(&event.to_frame().unwrap()).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_status_wrong_body_length() {
        let frame = LinkFrame::new(OP_STATUS, &[OP_PUBLISH]).unwrap();
        assert_eq!(ModemEvent::from_frame(&frame), Err(FrameError::Malformed));
    }

    #[test]
    fn test_inbound_topic_length_past_body() {
        let frame = LinkFrame::new(OP_INBOUND, &[12, b'p', b'1']).unwrap();
        assert_eq!(ModemEvent::from_frame(&frame), Err(FrameError::Malformed));
    }

    #[test]
    fn test_unknown_op_rejected() {
        let frame = LinkFrame::bare(0x7F);
        assert_eq!(ModemEvent::from_frame(&frame), Err(FrameError::Malformed));
    }
}
