use super::gate::*;
use super::Expr;
use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::collections::HashMap;

use GateType::*;

/// A compiled combinational function from an input vector to an output vector.
///
/// A [Logic] is built with a [LogicBuilder](super::LogicBuilder) or
/// [compiled](Logic::compile) from [Expr] trees, it holds no state between evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct Logic {
    // Always in dependency order, OFF and ON first.
    pub(super) gates: Vec<Gate>,
    pub(super) outputs: SmallVec<[GateIndex; 4]>,
    pub(super) arity: usize,
    #[cfg(feature = "debug_gates")]
    pub(super) names: HashMap<GateIndex, String>,
}

// The program always contains OFF and ON.
#[allow(clippy::len_without_is_empty)]
impl Logic {
    /// Number of inputs the logic expects.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of outputs the logic produces.
    pub fn output_len(&self) -> usize {
        self.outputs.len()
    }

    /// Number of gates, including [ON] and [OFF].
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    fn read(state: &[bool], gate: usize, dep: GateIndex) -> Result<bool> {
        state.get(dep.idx).copied().ok_or_else(|| {
            Error::MalformedLogic(format!(
                "gate {} depends on gate {} which comes after it",
                gate, dep
            ))
        })
    }

    /// Accumulates the state of a gate from its dependencies and short circuits out
    /// once the result can't change anymore.
    fn fold(ty: &GateType, state: &[bool], gate: usize, deps: &[GateIndex]) -> Result<bool> {
        let init = ty.init();
        let short = !init;
        let mut result = init;
        for dep in deps {
            result = ty.accumulate(result, Self::read(state, gate, *dep)?);
            if ty.short_circuits() && result == short {
                break;
            }
        }
        Ok(result)
    }

    /// Evaluates every gate once, in order, and returns the state of the outputs.
    ///
    /// # Example
    /// ```
    /// # use breadboard::logic::LogicBuilder;
    /// let mut g = LogicBuilder::new(2);
    /// let a = g.input(0);
    /// let b = g.input(1);
    /// let nand = g.nand2(a, b, "nand");
    /// let and = g.nand2(nand, nand, "and");
    /// g.output(and);
    /// let logic = g.build();
    ///
    /// assert_eq!(logic.evaluate(&[true, true]).unwrap(), vec![true]);
    /// assert_eq!(logic.evaluate(&[false, true]).unwrap(), vec![false]);
    /// assert!(logic.evaluate(&[true]).is_err());
    /// ```
    pub fn evaluate(&self, inputs: &[bool]) -> Result<Vec<bool>> {
        if inputs.len() != self.arity {
            return Err(Error::ArityMismatch {
                expected: self.arity,
                actual: inputs.len(),
            });
        }

        let mut state: SmallVec<[bool; 64]> = SmallVec::with_capacity(self.gates.len());
        for (i, gate) in self.gates.iter().enumerate() {
            let deps = &gate.dependencies;
            let new_state = match &gate.ty {
                Off => false,
                On => true,
                Input(n) => *inputs.get(*n).ok_or_else(|| {
                    Error::MalformedLogic(format!(
                        "gate {} reads input {} of {}",
                        i, n, self.arity
                    ))
                })?,
                Not => {
                    let dep = deps.first().ok_or_else(|| {
                        Error::MalformedLogic(format!("not gate {} has no dependency", i))
                    })?;
                    !Self::read(&state, i, *dep)?
                }
                Select { address_bits } => {
                    let (address, data) = deps.split_at((*address_bits).min(deps.len()));
                    let mut line = 0usize;
                    for (bit, dep) in address.iter().enumerate() {
                        if Self::read(&state, i, *dep)? {
                            line |= 1 << bit;
                        }
                    }
                    match data.get(line) {
                        Some(dep) => Self::read(&state, i, *dep)?,
                        None => false,
                    }
                }
                ty => {
                    let value = Self::fold(ty, &state, i, deps)?;
                    if ty.is_negated() {
                        !value
                    } else {
                        value
                    }
                }
            };
            state.push(new_state);
        }

        self.outputs
            .iter()
            .map(|output| Self::read(&state, self.gates.len(), *output))
            .collect()
    }

    #[cfg(feature = "debug_gates")]
    fn name(&self, gate: GateIndex) -> &str {
        self.names.get(&gate).map(|s| s.as_str()).unwrap_or("")
    }

    /// Returns a label for the gate with its type and name.
    fn full_name(&self, gate: GateIndex) -> String {
        let out = match self.outputs.iter().position(|o| *o == gate) {
            Some(i) => format!("OUT{}:", i),
            None => String::new(),
        };
        #[cfg(feature = "debug_gates")]
        return format!("{}{}:{}", out, self.gates[gate.idx].ty, self.name(gate));
        #[cfg(not(feature = "debug_gates"))]
        format!("{}{}", out, self.gates[gate.idx].ty)
    }

    /// Returns the program in [dot](https://en.wikipedia.org/wiki/DOT_(graph_description_language)) format,
    /// edges point from a dependency to its dependent.
    pub fn to_dot(&self) -> String {
        use petgraph::dot::{Config, Dot};
        let mut graph = petgraph::Graph::<_, ()>::new();
        let mut index = HashMap::new();
        for i in 0..self.gates.len() {
            let label = self.full_name(gi!(i));
            index.insert(i, graph.add_node(label));
        }
        for (i, gate) in self.gates.iter().enumerate() {
            graph.extend_with_edges(
                gate.dependencies
                    .iter()
                    .map(|dependency| (index[&dependency.idx], index[&i])),
            );
        }
        format!("{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }

    fn expr(&self, gate: GateIndex) -> Expr {
        let gate = &self.gates[gate.idx];
        let args = || -> Vec<Expr> { gate.dependencies.iter().map(|d| self.expr(*d)).collect() };
        match gate.ty {
            Off => Expr::Const { value: false },
            On => Expr::Const { value: true },
            Input(index) => Expr::Input { index },
            Not => Expr::Not {
                arg: Box::new(self.expr(gate.dependencies[0])),
            },
            And => Expr::And { args: args() },
            Or => Expr::Or { args: args() },
            Xor => Expr::Xor { args: args() },
            Nand => Expr::Nand { args: args() },
            Nor => Expr::Nor { args: args() },
            Xnor => Expr::Xnor { args: args() },
            Select { address_bits } => {
                let (address, data) = gate.dependencies.split_at(address_bits);
                Expr::Select {
                    address: address.iter().map(|d| self.expr(*d)).collect(),
                    data: data.iter().map(|d| self.expr(*d)).collect(),
                }
            }
        }
    }

    /// Expands the program back into one [Expr] tree per output.
    /// Gates shared between outputs are duplicated in every tree that uses them.
    pub fn to_exprs(&self) -> Vec<Expr> {
        self.outputs.iter().map(|o| self.expr(*o)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::LogicBuilder;
    use super::*;

    fn full_adder() -> Logic {
        let mut g = LogicBuilder::new(3);
        let a = g.input(0);
        let b = g.input(1);
        let cin = g.input(2);
        let x = g.xor2(a, b, "x");
        let sum = g.xor2(x, cin, "sum");
        let a1 = g.and2(a, b, "a1");
        let a2 = g.and2(x, cin, "a2");
        let cout = g.or2(a1, a2, "cout");
        g.outputs(&[sum, cout]);
        g.build()
    }

    #[test]
    fn test_full_adder() {
        let logic = full_adder();
        for i in 0..8u8 {
            let inputs = [i & 1 != 0, i & 2 != 0, i & 4 != 0];
            let total = inputs.iter().filter(|b| **b).count();
            assert_eq!(
                logic.evaluate(&inputs).unwrap(),
                vec![total % 2 == 1, total >= 2]
            );
        }
    }

    #[test]
    fn test_arity_mismatch() {
        let logic = full_adder();
        assert!(matches!(
            logic.evaluate(&[true, false]),
            Err(Error::ArityMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_negated_multi_input() {
        let mut g = LogicBuilder::new(3);
        let inputs = g.inputs();
        let nor = g.norx(inputs.clone(), "nor");
        let xnor = g.xnorx(inputs, "xnor");
        g.outputs(&[nor, xnor]);
        let logic = g.build();

        assert_eq!(
            logic.evaluate(&[false, false, false]).unwrap(),
            vec![true, true]
        );
        assert_eq!(
            logic.evaluate(&[true, true, false]).unwrap(),
            vec![false, true]
        );
        assert_eq!(
            logic.evaluate(&[true, true, true]).unwrap(),
            vec![false, false]
        );
    }

    #[test]
    fn test_idempotent() {
        let logic = full_adder();
        let first = logic.evaluate(&[true, false, true]).unwrap();
        let second = logic.evaluate(&[true, false, true]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_dot() {
        let dot = full_adder().to_dot();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("OUT0:Xor"));
        assert!(dot.contains("OUT1:Or"));
    }

    #[test]
    fn test_to_exprs_round_trip() {
        let logic = full_adder();
        let exprs = logic.to_exprs();
        let compiled = Logic::compile(3, &exprs).unwrap();
        for i in 0..8u8 {
            let inputs = [i & 1 != 0, i & 2 != 0, i & 4 != 0];
            assert_eq!(
                logic.evaluate(&inputs).unwrap(),
                compiled.evaluate(&inputs).unwrap()
            );
        }
    }
}
