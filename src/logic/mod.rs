//! The combinational function of a circuit, as a small gate program.
#[macro_use]
mod gate;
mod builder;
mod expr;
mod program;
pub use builder::*;
pub use expr::*;
pub use gate::{GateIndex, OFF, ON};
pub use program::*;
