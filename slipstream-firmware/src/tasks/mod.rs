//! Embassy tasks
//!
//! Three long-running activities:
//! - `dashboard_task`: owns the display and all rendered state
//! - `modem_rx_task`: pumps the modem UART into parsed events
//! - `uplink_task`: fixed-period outbound publish with bounded retries

mod dashboard;
mod modem_rx;
mod uplink;

pub use dashboard::dashboard_task;
pub use modem_rx::modem_rx_task;
pub use uplink::uplink_task;
