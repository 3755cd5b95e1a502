//! Link frame encoding and decoding
//!
//! Every exchange with the radio modem is one frame:
//! - SYNC (1 byte): 0x5A synchronization byte
//! - LENGTH (1 byte): body length (0-48)
//! - OP (1 byte): operation identifier
//! - BODY (0-48 bytes): operation-specific data
//! - CHECKSUM (1 byte): XOR of LENGTH, OP, and all BODY bytes

use heapless::Vec;

/// Frame synchronization byte
pub const LINK_SYNC: u8 = 0x5A;

/// Maximum body size in bytes (topic length byte + topic + packet payload)
pub const MAX_BODY_LEN: usize = 48;

/// Maximum complete frame size (SYNC + LENGTH + OP + MAX_BODY + CHECKSUM)
pub const MAX_FRAME_LEN: usize = 1 + 1 + 1 + MAX_BODY_LEN + 1;

/// Errors raised while encoding or parsing link frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Body exceeds [`MAX_BODY_LEN`]
    BodyTooLarge,
    /// Checksum mismatch on a received frame
    BadChecksum,
    /// Frame structure is invalid (e.g. declared length out of range)
    Malformed,
    /// Destination buffer cannot hold the encoded frame
    BufferTooSmall,
}

/// One link frame, either side of the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFrame {
    /// Operation identifier
    pub op: u8,
    /// Operation-specific body
    pub body: Vec<u8, MAX_BODY_LEN>,
}

impl LinkFrame {
    /// Build a frame with the given op and body.
    pub fn new(op: u8, body: &[u8]) -> Result<Self, FrameError> {
        let mut buf = Vec::new();
        buf.extend_from_slice(body)
            .map_err(|_| FrameError::BodyTooLarge)?;
        Ok(Self { op, body: buf })
    }

    /// Build a body-less frame.
    pub fn bare(op: u8) -> Self {
        Self {
            op,
            body: Vec::new(),
        }
    }

    fn checksum(length: u8, op: u8, body: &[u8]) -> u8 {
        body.iter().fold(length ^ op, |acc, &b| acc ^ b)
    }

    /// Encode into `out`, returning the number of bytes written.
    pub fn encode(&self, out: &mut [u8]) -> Result<usize, FrameError> {
        let total = 4 + self.body.len();
        if out.len() < total {
            return Err(FrameError::BufferTooSmall);
        }

        let length = self.body.len() as u8;
        out[0] = LINK_SYNC;
        out[1] = length;
        out[2] = self.op;
        out[3..3 + self.body.len()].copy_from_slice(&self.body);
        out[3 + self.body.len()] = Self::checksum(length, self.op, &self.body);

        Ok(total)
    }
}

/// Incremental parser for frames arriving from the modem UART
///
/// Bytes are fed one at a time; garbage between frames is skipped until the
/// next SYNC byte. A checksum failure discards the frame and resynchronizes.
#[derive(Debug, Clone)]
pub struct LinkParser {
    stage: Stage,
    body: Vec<u8, MAX_BODY_LEN>,
    want: u8,
    op: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Sync,
    Length,
    Op,
    Body,
    Checksum,
}

impl Default for LinkParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkParser {
    pub fn new() -> Self {
        Self {
            stage: Stage::Sync,
            body: Vec::new(),
            want: 0,
            op: 0,
        }
    }

    /// Discard any partial frame and wait for the next SYNC byte.
    pub fn reset(&mut self) {
        self.stage = Stage::Sync;
        self.body.clear();
        self.want = 0;
        self.op = 0;
    }

    /// Feed one byte.
    ///
    /// Returns `Ok(Some(frame))` when the byte completes a valid frame,
    /// `Ok(None)` when more bytes are needed, or `Err` on a framing error
    /// (after which the parser has already resynchronized).
    pub fn feed(&mut self, byte: u8) -> Result<Option<LinkFrame>, FrameError> {
        match self.stage {
            Stage::Sync => {
                if byte == LINK_SYNC {
                    self.stage = Stage::Length;
                }
                Ok(None)
            }
            Stage::Length => {
                if byte as usize > MAX_BODY_LEN {
                    self.reset();
                    return Err(FrameError::Malformed);
                }
                self.want = byte;
                self.stage = Stage::Op;
                Ok(None)
            }
            Stage::Op => {
                self.op = byte;
                self.body.clear();
                self.stage = if self.want == 0 {
                    Stage::Checksum
                } else {
                    Stage::Body
                };
                Ok(None)
            }
            Stage::Body => {
                // Cannot overflow: want is bounded by MAX_BODY_LEN
                let _ = self.body.push(byte);
                if self.body.len() == self.want as usize {
                    self.stage = Stage::Checksum;
                }
                Ok(None)
            }
            Stage::Checksum => {
                let expected = LinkFrame::checksum(self.want, self.op, &self.body);
                if byte != expected {
                    self.reset();
                    return Err(FrameError::BadChecksum);
                }

                let frame = LinkFrame {
                    op: self.op,
                    body: self.body.clone(),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed a slice, returning the first complete frame found.
    ///
    /// Bytes after the first complete frame are not consumed.
    pub fn feed_slice(&mut self, bytes: &[u8]) -> Result<Option<LinkFrame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}
