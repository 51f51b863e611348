use super::{resolver, BoardConfig};
use crate::circuit::{Chip, CircuitDescription, Package, PinRef};
use crate::error::Result;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// A point on the board in board cells.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns false for points that haven't been resolved yet,
    /// a zero or non finite component means there is nothing to draw to.
    pub fn is_resolved(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x != 0.0 && self.y != 0.0
    }
}

/// Rectangle covering a structural part of the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub origin: Coordinate,
    pub width: f64,
    pub height: f64,
}

impl Region {
    /// Returns true if `point` lies inside the region, borders included.
    pub fn contains(&self, point: Coordinate) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.height
    }
}

/// Placement of a chip, `origin` is the top left corner of the package.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub origin: Coordinate,
    /// Width in cells, one per pin on each row.
    pub width: usize,
    /// Distance between the two rows of pins.
    pub height: f64,
    pub package: Package,
}

impl Frame {
    /// Places `chip` on the board, there is no auto arranging, chips that overlap
    /// are drawn on top of each other.
    pub fn for_chip(chip: &Chip, config: &BoardConfig) -> Frame {
        let package = chip.package();
        Frame {
            origin: Coordinate::new(config.margin + chip.x_position as f64, config.chip_top_y),
            width: package.width(),
            height: config.chip_bottom_y - config.chip_top_y,
            package,
        }
    }

    /// Returns the position of `pin`, or None if the package has no such pin.
    ///
    /// Pins `1..=N` run left to right on the bottom row, pins `N+1..=2N` come back
    /// right to left on the top row, so pin `2N` sits right above pin 1.
    ///
    /// # Example
    /// ```
    /// # use breadboard::{BoardConfig, Chip, ChipType, Frame};
    /// let config = BoardConfig::default();
    /// let frame = Frame::for_chip(&Chip::new("U1", ChipType::Ic7400, 10), &config);
    ///
    /// let pin1 = frame.pin(1).unwrap();
    /// let pin14 = frame.pin(14).unwrap();
    /// assert_eq!(pin1.x, pin14.x);
    /// assert!(pin14.y < pin1.y);
    /// assert_eq!(frame.pin(7).unwrap().x, frame.pin(8).unwrap().x);
    /// assert_eq!(frame.pin(15), None);
    /// ```
    pub fn pin(&self, pin: u8) -> Option<Coordinate> {
        if !self.package.contains(pin) {
            return None;
        }
        let side = self.package.pins_per_side();
        Some(if pin <= side {
            Coordinate::new(
                self.origin.x + (pin - 1) as f64,
                self.origin.y + self.height,
            )
        } else {
            Coordinate::new(
                self.origin.x + (2 * side - pin) as f64,
                self.origin.y,
            )
        })
    }
}

/// Positions of everything on the board for one circuit.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardLayout {
    /// Chip index -> frame, in chip order.
    pub chip_frames: IndexMap<usize, Frame>,
    /// One switch per input.
    pub switch_bank: Region,
    /// One LED per output.
    pub led_column: Region,
    pub vcc_rail: Region,
    pub gnd_rail: Region,
    pub config: BoardConfig,
}

impl BoardLayout {
    /// Resolves `reference` against the placed chips.
    pub fn resolve(&self, reference: &PinRef) -> Result<Coordinate> {
        resolver::resolve_with(reference, &self.config, |i| {
            self.chip_frames.get(&i).copied()
        })
    }
}

fn bank_length(count: usize, spacing: f64) -> f64 {
    count.saturating_sub(1) as f64 * spacing
}

/// Lays out `circuit` on a board with the given geometry.
///
/// The result only depends on `circuit` and `config`, laying out the same
/// description twice gives identical layouts.
pub fn layout(circuit: &CircuitDescription, config: &BoardConfig) -> BoardLayout {
    let chip_frames: IndexMap<usize, Frame> = circuit
        .chips
        .iter()
        .enumerate()
        .map(|(i, chip)| (i, Frame::for_chip(chip, config)))
        .collect();
    debug!(
        "laid out {:?}: {} chips, {} switches, {} leds",
        circuit.title,
        chip_frames.len(),
        circuit.input_labels.len(),
        circuit.output_labels.len()
    );

    BoardLayout {
        chip_frames,
        switch_bank: Region {
            origin: config.switch_origin,
            width: bank_length(circuit.input_labels.len(), config.switch_spacing),
            height: 0.0,
        },
        led_column: Region {
            origin: config.led_origin,
            width: 0.0,
            height: bank_length(circuit.output_labels.len(), config.led_spacing),
        },
        vcc_rail: Region {
            origin: Coordinate::new(0.0, config.vcc_rail_y),
            width: config.columns as f64,
            height: 0.0,
        },
        gnd_rail: Region {
            origin: Coordinate::new(0.0, config.gnd_rail_y),
            width: config.columns as f64,
            height: 0.0,
        },
        config: config.clone(),
    }
}
