use super::gate::*;
use super::Logic;
use crate::data_structures::BitIter;
use casey::pascal;
use concat_idents::concat_idents;
use indexmap::IndexSet;
use smallvec::{smallvec, SmallVec};
#[cfg(feature = "debug_gates")]
use std::collections::HashMap;

use GateType::*;

/// Creates gatename1, gatename2 and gatenamex constructors for every gate with variable dependencies.
/// The constructors create gates with 1, 2 and x dependencies respectively.
macro_rules! gate_constructors {
    ($name:ident,$($rest:ident),*) => {
        gate_constructors!($name);
        gate_constructors!($($rest),*);
    };
    ($name:ident) => {
        concat_idents!(name1 = $name, 1 {
            /// Returns the [GateIndex] of a new gate with 1 dependency.
            ///
            /// Providing a good name makes [Logic::to_dot] readable, you can disable the "debug_gates" feature
            /// to drop the names.
            pub fn name1<S: Into<String>>(&mut self, dep: GateIndex, name: S) -> GateIndex {
                self.create_gate(Gate::new(pascal!($name), smallvec![dep]), name)
            }
        });

        concat_idents!(name2 = $name, 2 {
            /// Returns the [GateIndex] of a new gate with 2 dependencies.
            ///
            /// Providing a good name makes [Logic::to_dot] readable, you can disable the "debug_gates" feature
            /// to drop the names.
            pub fn name2<S: Into<String>>(&mut self, dep1: GateIndex, dep2: GateIndex, name: S) -> GateIndex {
                self.create_gate(Gate::new(pascal!($name), smallvec![dep1, dep2]), name)
            }
        });

        concat_idents!(namex = $name, x {
            /// Returns the [GateIndex] of a new gate with x dependencies, the dependencies are taken in order from `iter`.
            ///
            /// Providing a good name makes [Logic::to_dot] readable, you can disable the "debug_gates" feature
            /// to drop the names.
            pub fn namex<S: Into<String>, I: IntoIterator<Item = GateIndex>>(&mut self, iter: I, name: S) -> GateIndex {
                self.create_gate(Gate::new(pascal!($name), iter.into_iter().collect()), name)
            }
        });
    };
}

/// Builds the [Logic] of a circuit out of gates.
///
/// Every gate can only depend on gates that already exist, so the gates always end up
/// in dependency order and the resulting [Logic] can be evaluated in a single pass.
/// Building the same gate twice returns the same [GateIndex].
///
/// # Example
/// Half adder.
/// ```
/// # use breadboard::logic::LogicBuilder;
/// let mut g = LogicBuilder::new(2);
/// let a = g.input(0);
/// let b = g.input(1);
///
/// let sum = g.xor2(a, b, "sum");
/// let carry = g.and2(a, b, "carry");
/// g.output(sum);
/// g.output(carry);
///
/// let logic = g.build();
/// assert_eq!(logic.evaluate(&[true, true]).unwrap(), vec![false, true]);
/// assert_eq!(logic.evaluate(&[true, false]).unwrap(), vec![true, false]);
/// ```
#[derive(Debug, Clone)]
pub struct LogicBuilder {
    nodes: IndexSet<Gate>,
    outputs: SmallVec<[GateIndex; 4]>,
    arity: usize,
    #[cfg(feature = "debug_gates")]
    names: HashMap<GateIndex, String>,
}

impl LogicBuilder {
    /// Returns a new [LogicBuilder] for a circuit with `arity` inputs, containing only [OFF] and [ON].
    pub fn new(arity: usize) -> LogicBuilder {
        let mut nodes = IndexSet::new();
        nodes.insert(Gate::new(Off, smallvec![]));
        nodes.insert(Gate::new(On, smallvec![]));

        #[cfg(feature = "debug_gates")]
        let names = {
            let mut names: HashMap<_, _> = Default::default();
            names.insert(OFF, "OFF".into());
            names.insert(ON, "ON".into());
            names
        };

        LogicBuilder {
            nodes,
            outputs: Default::default(),
            arity,
            #[cfg(feature = "debug_gates")]
            names,
        }
    }

    /// Inserts `gate` unless an identical one exists and saves its name.
    #[allow(unused_variables)]
    fn create_gate<S: Into<String>>(&mut self, gate: Gate, name: S) -> GateIndex {
        debug_assert!(
            gate.dependencies.iter().all(|d| d.idx < self.nodes.len()),
            "gate depends on a gate that doesn't exist yet"
        );
        let (idx, _) = self.nodes.insert_full(gate);
        let idx = gi!(idx);
        #[cfg(feature = "debug_gates")]
        self.names.entry(idx).or_insert_with(|| name.into());
        idx
    }

    /// Returns the [GateIndex] reading input `i` of the input vector.
    ///
    /// # Panics
    ///
    /// Will panic if `i` >= the arity the builder was created with.
    pub fn input(&mut self, i: usize) -> GateIndex {
        assert!(
            i < self.arity,
            "input {} is out of range, the circuit has {} inputs",
            i,
            self.arity
        );
        self.create_gate(Gate::new(Input(i), smallvec![]), format!("in{}", i))
    }

    /// Returns the [GateIndex] of every input in order.
    pub fn inputs(&mut self) -> Vec<GateIndex> {
        (0..self.arity).map(|i| self.input(i)).collect()
    }

    /// Returns the [GateIndex] of a new not gate, constants are folded.
    pub fn not1<S: Into<String>>(&mut self, dep: GateIndex, name: S) -> GateIndex {
        match dep {
            ON => OFF,
            OFF => ON,
            dep => self.create_gate(Gate::new(Not, smallvec![dep]), name),
        }
    }

    // Create constructors for all gate types with variable dependencies.
    gate_constructors!(or, nor, and, nand, xor, xnor);

    /// Returns a [multiplexer](https://en.wikipedia.org/wiki/Multiplexer)
    /// which selects one of the `data` lines by `address`, least significant bit first.
    /// If `data` is not big enough to cover the whole address space, it will get filled by [OFF].
    ///
    /// # Panics
    ///
    /// Will panic if not enough `address` bits are provided to address every `data` line.
    pub fn select<S: Into<String>>(
        &mut self,
        address: &[GateIndex],
        data: &[GateIndex],
        name: S,
    ) -> GateIndex {
        assert!(
            address.len() < usize::BITS as usize && 1usize << address.len() >= data.len(),
            "`address` doesn't have enough bits to address every input, address bits: {} data len: {}",
            address.len(),
            data.len(),
        );
        let dependencies = address.iter().chain(data.iter()).copied().collect();
        self.create_gate(
            Gate::new(
                Select {
                    address_bits: address.len(),
                },
                dependencies,
            ),
            name,
        )
    }

    /// Returns the 2^n output lines of a decoder, line `i` is ON when `address` == i.
    pub fn decoder<S: Into<String>>(&mut self, address: &[GateIndex], name: S) -> Vec<GateIndex> {
        let name = name.into();
        let naddress: Vec<GateIndex> = address
            .iter()
            .map(|bit| self.not1(*bit, name.clone()))
            .collect();

        (0..1usize << address.len())
            .map(|i| {
                let lines: Vec<GateIndex> = BitIter::new(i as u64, address.len())
                    .zip(address.iter().zip(naddress.iter()))
                    .map(|(bit_set, (a, na))| if bit_set { *a } else { *na })
                    .collect();
                self.andx(lines, name.clone())
            })
            .collect()
    }

    /// Appends `gate` to the outputs, outputs keep the order they were added in.
    pub fn output(&mut self, gate: GateIndex) {
        self.outputs.push(gate)
    }

    /// Appends every gate in `gates` to the outputs.
    pub fn outputs(&mut self, gates: &[GateIndex]) {
        self.outputs.extend_from_slice(gates)
    }

    /// Returns the number of gates in the builder, including [ON] and [OFF].
    // The builder always contains OFF and ON.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the finished [Logic].
    pub fn build(self) -> Logic {
        Logic {
            gates: self.nodes.into_iter().collect(),
            outputs: self.outputs,
            arity: self.arity,
            #[cfg(feature = "debug_gates")]
            names: self.names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplication() {
        let mut g = LogicBuilder::new(2);
        let a = g.input(0);
        let b = g.input(1);
        let and1 = g.and2(a, b, "first");
        let len = g.len();
        let and2 = g.and2(a, b, "second");

        assert_eq!(and1, and2);
        assert_eq!(g.len(), len);
        assert_eq!(g.input(0), a);
    }

    #[test]
    fn test_not_folds_constants() {
        let mut g = LogicBuilder::new(0);
        assert_eq!(g.not1(ON, "not"), OFF);
        assert_eq!(g.not1(OFF, "not"), ON);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_decoder() {
        let mut g = LogicBuilder::new(2);
        let address = g.inputs();
        let lines = g.decoder(&address, "dec");
        g.outputs(&lines);
        let logic = g.build();

        assert_eq!(
            logic.evaluate(&[false, false]).unwrap(),
            vec![true, false, false, false]
        );
        assert_eq!(
            logic.evaluate(&[true, false]).unwrap(),
            vec![false, true, false, false]
        );
        assert_eq!(
            logic.evaluate(&[true, true]).unwrap(),
            vec![false, false, false, true]
        );
    }

    #[test]
    fn test_select_fills_with_off() {
        let mut g = LogicBuilder::new(2);
        let address = g.inputs();
        let out = g.select(&address, &[ON, ON, ON], "mux");
        g.output(out);
        let logic = g.build();

        assert_eq!(logic.evaluate(&[false, true]).unwrap(), vec![true]);
        assert_eq!(logic.evaluate(&[true, true]).unwrap(), vec![false]);
    }

    #[test]
    #[should_panic]
    fn test_select_not_enough_address_bits() {
        let mut g = LogicBuilder::new(1);
        let a = g.input(0);
        g.select(&[a], &[ON, OFF, ON], "mux");
    }

    #[test]
    #[should_panic]
    fn test_input_out_of_range() {
        let mut g = LogicBuilder::new(1);
        g.input(1);
    }
}
