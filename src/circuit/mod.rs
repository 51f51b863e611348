//! Data model of a breadboard circuit.
mod chip;
mod description;
mod nets;
mod pin_ref;
mod wire;
pub use chip::*;
pub use description::*;
pub use nets::*;
pub use pin_ref::*;
pub use wire::*;
