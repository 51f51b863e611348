use crate::board::{layout, render_wires, BoardConfig, BoardLayout, RoutedWire};
use crate::catalog;
use crate::circuit::CircuitDescription;
use crate::collaborators::Lookup;
use crate::error::{Error, Result};
use crate::evaluator::evaluate;
use log::debug;
use std::borrow::Cow;

/// The circuit currently on the board together with the position of its switches.
///
/// # Example
/// ```
/// # use breadboard::Workbench;
/// let mut bench = Workbench::new("half_adder").unwrap();
/// assert_eq!(bench.outputs(), vec![false, false]);
///
/// bench.toggle(0);
/// bench.toggle(1);
/// assert_eq!(bench.inputs(), &[true, true]);
/// assert_eq!(bench.outputs(), vec![false, true]);
///
/// // Switching circuits puts every switch back off.
/// bench.select("full_adder").unwrap();
/// assert_eq!(bench.inputs(), &[false, false, false]);
/// ```
#[derive(Clone, Debug)]
pub struct Workbench {
    circuit: Cow<'static, CircuitDescription>,
    inputs: Vec<bool>,
}

impl Workbench {
    /// Returns a workbench holding the catalog circuit stored under `key`.
    pub fn new(key: &str) -> Result<Workbench> {
        let circuit = catalog::get(key).ok_or_else(|| Error::NotFound(key.to_string()))?;
        Ok(Self::with_circuit(Cow::Borrowed(circuit)))
    }

    fn with_circuit(circuit: Cow<'static, CircuitDescription>) -> Workbench {
        let inputs = vec![false; circuit.arity()];
        Workbench { circuit, inputs }
    }

    pub fn circuit(&self) -> &CircuitDescription {
        &self.circuit
    }

    /// Replaces the circuit with the catalog circuit stored under `key`, all switches off.
    /// On error the current circuit is kept.
    pub fn select(&mut self, key: &str) -> Result<()> {
        let circuit = catalog::get(key).ok_or_else(|| Error::NotFound(key.to_string()))?;
        debug!("selected {}", key);
        *self = Self::with_circuit(Cow::Borrowed(circuit));
        Ok(())
    }

    /// Replaces the circuit with `circuit`, all switches off.
    pub fn load(&mut self, circuit: CircuitDescription) {
        debug!("loaded {:?}", circuit.title);
        *self = Self::with_circuit(Cow::Owned(circuit));
    }

    /// Replaces the circuit with whatever [find_circuit](crate::find_circuit) found.
    pub fn load_lookup(&mut self, lookup: Lookup) -> Result<()> {
        match lookup {
            Lookup::Catalog(key) => self.select(key),
            Lookup::Generated(circuit) => {
                self.load(*circuit);
                Ok(())
            }
        }
    }

    /// Flips switch `i`, switches past the declared inputs don't exist and are ignored.
    pub fn toggle(&mut self, i: usize) {
        if let Some(input) = self.inputs.get_mut(i) {
            *input = !*input;
        }
    }

    /// Sets switch `i` to `value`, switches past the declared inputs are ignored.
    pub fn set_input(&mut self, i: usize, value: bool) {
        if let Some(input) = self.inputs.get_mut(i) {
            *input = value;
        }
    }

    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    /// Returns the state of the LEDs.
    pub fn outputs(&self) -> Vec<bool> {
        evaluate(&self.circuit, &self.inputs)
    }

    pub fn layout(&self, config: &BoardConfig) -> BoardLayout {
        layout(&self.circuit, config)
    }

    /// Returns every wire that can be drawn on `board`.
    pub fn wires(&self, board: &BoardLayout) -> Vec<RoutedWire> {
        render_wires(&self.circuit, board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange;

    #[test]
    fn test_unknown_key() {
        assert!(matches!(Workbench::new("flux_capacitor"), Err(Error::NotFound(_))));

        let mut bench = Workbench::new("not_gate").unwrap();
        bench.toggle(0);
        assert!(bench.select("flux_capacitor").is_err());
        assert_eq!(bench.circuit().title, "NOT gate");
        assert_eq!(bench.inputs(), &[true]);
    }

    #[test]
    fn test_switches() {
        let mut bench = Workbench::new("not_gate").unwrap();
        assert_eq!(bench.outputs(), vec![true]);
        bench.set_input(0, true);
        assert_eq!(bench.outputs(), vec![false]);
        bench.toggle(7);
        bench.set_input(3, true);
        assert_eq!(bench.inputs(), &[true]);
    }

    #[test]
    fn test_load() {
        let mut bench = Workbench::new("and_from_nand").unwrap();
        bench.toggle(0);
        let mut circuit = catalog::get("or_from_nor").unwrap().clone();
        circuit.title = "Custom OR".into();
        bench.load(circuit);
        assert_eq!(bench.inputs(), &[false, false]);
        bench.toggle(1);
        assert_eq!(bench.outputs(), vec![true]);

        let json = exchange::encode(catalog::get("multiplier_2bit").unwrap()).unwrap();
        bench
            .load_lookup(Lookup::Generated(Box::new(exchange::decode(&json).unwrap())))
            .unwrap();
        bench.set_input(1, true);
        bench.set_input(3, true);
        // 2 * 2
        assert_eq!(bench.outputs(), vec![false, false, true, false]);

        bench.load_lookup(Lookup::Catalog("xor_gate")).unwrap();
        assert_eq!(bench.circuit().title, "XOR gate");
    }

    #[test]
    fn test_board() {
        let bench = Workbench::new("full_adder").unwrap();
        let board = bench.layout(&BoardConfig::default());
        assert_eq!(board.chip_frames.len(), 3);
        assert_eq!(bench.wires(&board).len(), bench.circuit().wires.len());
    }
}
