use super::{nets, Chip, PinRef, Wire};
use crate::error::{Error, Result};
use crate::logic::Logic;
use std::collections::HashSet;

/// Everything needed to draw and run one circuit.
///
/// Descriptions are plain data, they are never mutated once authored or decoded.
/// Input and output vectors are index aligned with `input_labels` and `output_labels`.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitDescription {
    pub title: String,
    pub description: String,
    pub explanation: Option<String>,
    pub bill_of_materials: Vec<String>,
    pub chips: Vec<Chip>,
    pub input_labels: Vec<String>,
    pub output_labels: Vec<String>,
    pub wires: Vec<Wire>,
    /// `None` when a generated description came without usable logic.
    pub logic: Option<Logic>,
}

impl CircuitDescription {
    /// Number of inputs, the length every input vector must have.
    pub fn arity(&self) -> usize {
        self.input_labels.len()
    }

    /// The safe default shown whenever the logic can't be evaluated.
    pub fn zero_outputs(&self) -> Vec<bool> {
        vec![false; self.output_labels.len()]
    }

    /// Checks that `reference` points at something that exists on this board.
    ///
    /// Switches and LEDs are not bounded here, an index past the declared inputs
    /// simply lands outside of the visible bank.
    pub fn check_reference(&self, reference: &PinRef) -> Result<()> {
        if let PinRef::ChipPin { chip, pin } = reference {
            let target = self.chips.get(*chip).ok_or_else(|| {
                Error::invalid_reference(
                    reference,
                    format!("there are only {} chips", self.chips.len()),
                )
            })?;
            let package = target.package();
            if !package.contains(*pin) {
                return Err(Error::invalid_reference(
                    reference,
                    format!("{} {} has pins 1 to {}", target.ty, target.id, package.pins),
                ));
            }
        }
        Ok(())
    }

    /// Checks both endpoints of `wire`.
    pub fn check_wire(&self, wire: &Wire) -> Result<()> {
        self.check_reference(&wire.source)?;
        self.check_reference(&wire.destination)
    }

    /// Checks that the logic matches the declared inputs and outputs.
    pub fn check_logic(&self) -> Result<&Logic> {
        let logic = self
            .logic
            .as_ref()
            .ok_or_else(|| Error::MalformedLogic(format!("{:?} has no logic", self.title)))?;
        if logic.arity() != self.arity() {
            return Err(Error::MalformedLogic(format!(
                "logic takes {} inputs but {} are declared",
                logic.arity(),
                self.arity()
            )));
        }
        if logic.output_len() != self.output_labels.len() {
            return Err(Error::MalformedLogic(format!(
                "logic produces {} outputs but {} are declared",
                logic.output_len(),
                self.output_labels.len()
            )));
        }
        Ok(logic)
    }

    /// Validates the whole description: unique chip ids, resolvable wires and
    /// logic matching the declared inputs and outputs.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for chip in &self.chips {
            if !ids.insert(chip.id.as_str()) {
                return Err(Error::invalid_reference(&chip.id, "duplicate chip id"));
            }
        }
        for wire in &self.wires {
            self.check_wire(wire)?;
        }
        self.check_logic().map(|_| ())
    }

    /// Returns the indexes of the chips whose supply pins are not tied to the matching rail.
    pub fn unpowered_chips(&self) -> Vec<usize> {
        let nets = nets(&self.wires);
        let connected = |a: PinRef, b: PinRef| nets.iter().any(|n| n.contains(&a) && n.contains(&b));

        self.chips
            .iter()
            .enumerate()
            .filter(|(i, chip)| {
                let package = chip.package();
                !connected(PinRef::chip(*i, package.vcc), PinRef::VCC)
                    || !connected(PinRef::chip(*i, package.gnd), PinRef::GND)
            })
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{ChipType, WireColor};
    use crate::logic::Expr;

    fn inverter() -> CircuitDescription {
        CircuitDescription {
            title: "NOT".into(),
            description: "inverter".into(),
            explanation: None,
            bill_of_materials: vec![],
            chips: vec![Chip::new("U1", ChipType::Ic7404, 10)],
            input_labels: vec!["A".into()],
            output_labels: vec!["Y".into()],
            wires: vec![
                Wire::new(PinRef::VCC, PinRef::chip(0, 14), WireColor::Red),
                Wire::new(PinRef::GND, PinRef::chip(0, 7), WireColor::Black),
                Wire::new(PinRef::switch(0), PinRef::chip(0, 1), WireColor::Blue),
                Wire::new(PinRef::chip(0, 2), PinRef::led(0), WireColor::Green),
            ],
            logic: Some(Logic::compile(1, &[!Expr::input(0)]).unwrap()),
        }
    }

    #[test]
    fn test_valid() {
        let circuit = inverter();
        circuit.validate().unwrap();
        assert!(circuit.unpowered_chips().is_empty());
    }

    #[test]
    fn test_bad_references() {
        let circuit = inverter();
        assert!(matches!(
            circuit.check_reference(&PinRef::chip(1, 1)),
            Err(Error::InvalidReference { .. })
        ));
        assert!(matches!(
            circuit.check_reference(&PinRef::chip(0, 15)),
            Err(Error::InvalidReference { .. })
        ));
        circuit.check_reference(&PinRef::switch(40)).unwrap();
    }

    #[test]
    fn test_logic_checks() {
        let mut circuit = inverter();
        circuit.output_labels.push("Z".into());
        assert!(matches!(circuit.validate(), Err(Error::MalformedLogic(_))));
        assert_eq!(circuit.zero_outputs(), vec![false, false]);

        circuit.logic = None;
        circuit.output_labels.clear();
        assert!(matches!(circuit.check_logic(), Err(Error::MalformedLogic(_))));
        assert!(circuit.zero_outputs().is_empty());
    }

    #[test]
    fn test_duplicate_ids() {
        let mut circuit = inverter();
        circuit.chips.push(Chip::new("U1", ChipType::Ic7408, 20));
        assert!(matches!(
            circuit.validate(),
            Err(Error::InvalidReference { .. })
        ));
    }

    #[test]
    fn test_unpowered() {
        let mut circuit = inverter();
        circuit.wires.remove(1);
        assert_eq!(circuit.unpowered_chips(), vec![0]);
    }
}
