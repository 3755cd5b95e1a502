//! Capability traits
//!
//! These traits define the seams between the dashboard logic and the
//! collaborator layers: the pixel surface the renderers draw on, and the
//! transport the publish loop delivers through.

pub mod surface;
pub mod transport;

pub use surface::DrawSurface;
pub use transport::{Transport, TransportError};
