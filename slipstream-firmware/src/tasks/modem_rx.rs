//! Modem UART receive task
//!
//! Pumps raw bytes through the frame parser and dispatches events:
//! status replies to the command side, inbound telemetry to the
//! dashboard. Never blocks on a full channel - the modem's internal
//! processing must not be starved by a slow consumer.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;
use heapless::String;

use slipstream_protocol::{LinkParser, ModemEvent, TelemetryPacket, MAX_TOPIC_LEN};

use crate::channels::{STATUS_CHANNEL, TELEMETRY_CHANNEL};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Modem RX task - receives and parses frames from the radio modem
#[embassy_executor::task]
pub async fn modem_rx_task(mut rx: BufferedUartRx<'static>, rx_topic: String<MAX_TOPIC_LEN>) {
    info!("Modem RX task started");

    let mut parser = LinkParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match ModemEvent::from_frame(&frame) {
                            Ok(event) => handle_event(event, &rx_topic),
                            Err(e) => warn!("Bad modem frame: {:?}", e),
                        },
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Frame parse error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("Modem UART read error: {:?}", e);
            }
        }
    }
}

/// Dispatch a parsed modem event
fn handle_event(event: ModemEvent, rx_topic: &str) {
    match event {
        ModemEvent::Status { op, ok } => {
            trace!("Status: {:?} ok={}", op, ok);
            if STATUS_CHANNEL.try_send((op, ok)).is_err() {
                warn!("Status channel full, dropping reply");
            }
        }
        ModemEvent::Inbound { topic, payload } => {
            if topic.as_str() != rx_topic {
                trace!("Ignoring message on {}", topic.as_str());
                return;
            }

            // Malformed packets are dropped silently: no state change,
            // no surfaced error
            match TelemetryPacket::decode(&payload) {
                Ok(packet) => {
                    if TELEMETRY_CHANNEL.try_send(packet).is_err() {
                        warn!("Telemetry channel full, dropping sample");
                    }
                }
                Err(_) => {
                    trace!("Dropping malformed telemetry ({} bytes)", payload.len());
                }
            }
        }
    }
}
