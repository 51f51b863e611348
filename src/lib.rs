//! A virtual breadboard for 74xx series logic circuits.
//!
//! Circuits are plain [CircuitDescription]s: chips, wires between [PinRef]s and a compiled
//! [logic::Logic] that computes the LEDs from the switches. The [board] module turns a
//! description into coordinates and wire paths, the [evaluator](evaluate) runs its logic.
//!
//! # Example
//! ```
//! # use breadboard::{catalog, evaluate, layout, render_wires, BoardConfig};
//! let full_adder = catalog::get("full_adder").unwrap();
//! assert_eq!(evaluate(full_adder, &[true, false, true]), vec![false, true]);
//!
//! let board = layout(full_adder, &BoardConfig::default());
//! let wires = render_wires(full_adder, &board);
//! assert_eq!(wires.len(), full_adder.wires.len());
//! ```
pub mod board;
pub mod catalog;
pub mod circuit;
pub mod collaborators;
pub mod data_structures;
mod error;
pub mod evaluator;
pub mod exchange;
pub mod logic;
mod session;

pub use board::*;
pub use circuit::*;
pub use collaborators::{explain_circuit, find_circuit, Lookup};
pub use error::{Error, Result};
pub use evaluator::*;
pub use session::Workbench;
