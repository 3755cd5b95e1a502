//! Radio modem link, command side
//!
//! The co-processor owns the wireless session; this side writes command
//! frames on the UART and waits for the matching status reply, bounded
//! by a timeout. Inbound traffic is handled by the RX pump task.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embassy_time::{with_timeout, Duration};
use embedded_io_async::Write;

use slipstream_core::traits::TransportError;
use slipstream_protocol::frame::MAX_FRAME_LEN;
use slipstream_protocol::{HostCommand, LinkFrame, LinkOp};

use crate::channels::STATUS_CHANNEL;

/// How long to wait for the modem to acknowledge a command
const STATUS_TIMEOUT: Duration = Duration::from_millis(500);

/// Command half of the modem link
pub struct Modem {
    tx: BufferedUartTx<'static>,
}

impl Modem {
    pub fn new(tx: BufferedUartTx<'static>) -> Self {
        Self { tx }
    }

    /// (Re)open the wireless session.
    pub async fn connect(&mut self, client_id: &str) -> Result<(), TransportError> {
        self.request(HostCommand::Connect { client_id }, LinkOp::Connect)
            .await
            .then_some(())
            .ok_or(TransportError::ConnectFailed)
    }

    /// Subscribe to an inbound topic.
    pub async fn subscribe(&mut self, topic: &str) -> Result<(), TransportError> {
        self.request(HostCommand::Subscribe { topic }, LinkOp::Subscribe)
            .await
            .then_some(())
            .ok_or(TransportError::ConnectFailed)
    }

    /// Publish a payload on an outbound topic.
    pub async fn publish(&mut self, topic: &str, payload: &[u8]) -> Result<(), TransportError> {
        self.request(HostCommand::Publish { topic, payload }, LinkOp::Publish)
            .await
            .then_some(())
            .ok_or(TransportError::PublishFailed)
    }

    /// Send a command and wait for its status reply.
    ///
    /// Returns false on encode failure, write failure, a negative status,
    /// or timeout. Stale status replies for other ops are skipped.
    async fn request(&mut self, command: HostCommand<'_>, op: LinkOp) -> bool {
        let frame = match command.to_frame() {
            Ok(frame) => frame,
            Err(e) => {
                warn!("Command encode failed: {:?}", e);
                return false;
            }
        };

        if !self.send_frame(&frame).await {
            return false;
        }

        let reply = with_timeout(STATUS_TIMEOUT, async {
            loop {
                let (reply_op, ok) = STATUS_CHANNEL.receive().await;
                if reply_op == op {
                    return ok;
                }
                trace!("Stale status for {:?}", reply_op);
            }
        })
        .await;

        match reply {
            Ok(ok) => ok,
            Err(_) => {
                warn!("Timed out waiting for {:?} status", op);
                false
            }
        }
    }

    async fn send_frame(&mut self, frame: &LinkFrame) -> bool {
        let mut buf = [0u8; MAX_FRAME_LEN];
        let len = match frame.encode(&mut buf) {
            Ok(len) => len,
            Err(e) => {
                warn!("Frame encode failed: {:?}", e);
                return false;
            }
        };

        match self.tx.write_all(&buf[..len]).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Modem UART write failed: {:?}", e);
                false
            }
        }
    }
}
