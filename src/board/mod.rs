//! Placement of chips, switches and LEDs on the breadboard and drawing of the wires between them.
mod config;
mod layout;
mod render;
mod resolver;
mod router;
pub use config::*;
pub use layout::*;
pub use render::*;
pub use resolver::resolve;
pub use router::*;
