use super::{GateIndex, Logic, LogicBuilder, OFF, ON};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Largest address accepted by a `select` expression.
pub const MAX_SELECT_ADDRESS_BITS: usize = 8;

/// A boolean expression over the input vector of a circuit.
///
/// This is the form logic takes in the exchange format, it can only describe
/// combinational functions so it is safe to evaluate whatever a remote generator sends.
///
/// # Example
/// ```
/// # use breadboard::logic::{Expr, Logic};
/// let a = Expr::input(0);
/// let b = Expr::input(1);
/// let or_from_nor = !Expr::Nor { args: vec![a.clone(), b.clone()] };
///
/// let json = serde_json::to_string(&Expr::input(1)).unwrap();
/// assert_eq!(json, r#"{"op":"input","index":1}"#);
///
/// let logic = Logic::compile(2, &[or_from_nor, a ^ b]).unwrap();
/// assert_eq!(logic.evaluate(&[true, false]).unwrap(), vec![true, true]);
/// assert_eq!(logic.evaluate(&[true, true]).unwrap(), vec![true, false]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Expr {
    Const { value: bool },
    Input { index: usize },
    Not { arg: Box<Expr> },
    And { args: Vec<Expr> },
    Or { args: Vec<Expr> },
    Xor { args: Vec<Expr> },
    Nand { args: Vec<Expr> },
    Nor { args: Vec<Expr> },
    Xnor { args: Vec<Expr> },
    /// Picks `data[address]`, `address` is least significant bit first.
    /// Missing data lines read as false.
    Select { address: Vec<Expr>, data: Vec<Expr> },
}

impl Expr {
    pub fn input(index: usize) -> Expr {
        Expr::Input { index }
    }

    pub fn constant(value: bool) -> Expr {
        Expr::Const { value }
    }

    fn lower(&self, g: &mut LogicBuilder, arity: usize) -> Result<GateIndex> {
        let lower_all = |args: &[Expr], g: &mut LogicBuilder| -> Result<Vec<GateIndex>> {
            args.iter().map(|arg| arg.lower(g, arity)).collect()
        };
        Ok(match self {
            Expr::Const { value: true } => ON,
            Expr::Const { value: false } => OFF,
            Expr::Input { index } => {
                if *index >= arity {
                    return Err(Error::MalformedLogic(format!(
                        "input {} is out of range, the circuit has {} inputs",
                        index, arity
                    )));
                }
                g.input(*index)
            }
            Expr::Not { arg } => {
                let arg = arg.lower(g, arity)?;
                g.not1(arg, "not")
            }
            Expr::And { args } => {
                let args = lower_all(args, g)?;
                g.andx(args, "and")
            }
            Expr::Or { args } => {
                let args = lower_all(args, g)?;
                g.orx(args, "or")
            }
            Expr::Xor { args } => {
                let args = lower_all(args, g)?;
                g.xorx(args, "xor")
            }
            Expr::Nand { args } => {
                let args = lower_all(args, g)?;
                g.nandx(args, "nand")
            }
            Expr::Nor { args } => {
                let args = lower_all(args, g)?;
                g.norx(args, "nor")
            }
            Expr::Xnor { args } => {
                let args = lower_all(args, g)?;
                g.xnorx(args, "xnor")
            }
            Expr::Select { address, data } => {
                if address.len() > MAX_SELECT_ADDRESS_BITS || data.len() > 1 << address.len() {
                    return Err(Error::MalformedLogic(format!(
                        "select with {} address bits can't pick from {} data lines",
                        address.len(),
                        data.len()
                    )));
                }
                let address = lower_all(address, g)?;
                let data = lower_all(data, g)?;
                g.select(&address, &data, "select")
            }
        })
    }
}

impl Logic {
    /// Compiles one [Expr] per output into a [Logic] with `arity` inputs.
    ///
    /// Fails with [Error::MalformedLogic] if an expression reads an input outside of
    /// `0..arity` or a `select` doesn't have enough address bits for its data lines.
    pub fn compile(arity: usize, outputs: &[Expr]) -> Result<Logic> {
        let mut g = LogicBuilder::new(arity);
        for output in outputs {
            let gate = output.lower(&mut g, arity)?;
            g.output(gate);
        }
        Ok(g.build())
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not {
            arg: Box::new(self),
        }
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        Expr::And {
            args: vec![self, rhs],
        }
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        Expr::Or {
            args: vec![self, rhs],
        }
    }
}

impl BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Expr) -> Expr {
        Expr::Xor {
            args: vec![self, rhs],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tree() {
        let json = r#"{
            "op": "or",
            "args": [
                {"op": "and", "args": [{"op": "input", "index": 0}, {"op": "not", "arg": {"op": "input", "index": 1}}]},
                {"op": "const", "value": false}
            ]
        }"#;
        let expr: Expr = serde_json::from_str(json).unwrap();
        assert_eq!(
            expr,
            (Expr::input(0) & !Expr::input(1)) | Expr::constant(false)
        );
    }

    #[test]
    fn test_select() {
        let expr = Expr::Select {
            address: vec![Expr::input(0), Expr::input(1)],
            data: vec![
                Expr::input(2),
                Expr::input(3),
                Expr::input(4),
                Expr::input(5),
            ],
        };
        let logic = Logic::compile(6, &[expr]).unwrap();
        assert_eq!(
            logic
                .evaluate(&[true, true, false, false, false, true])
                .unwrap(),
            vec![true]
        );
        assert_eq!(
            logic
                .evaluate(&[false, true, true, true, false, true])
                .unwrap(),
            vec![false]
        );
    }

    #[test]
    fn test_input_out_of_range() {
        let result = Logic::compile(2, &[Expr::input(0) & Expr::input(2)]);
        assert!(matches!(result, Err(Error::MalformedLogic(_))));
    }

    #[test]
    fn test_select_too_many_lines() {
        let expr = Expr::Select {
            address: vec![Expr::input(0)],
            data: vec![Expr::constant(true); 3],
        };
        assert!(matches!(
            Logic::compile(1, &[expr]),
            Err(Error::MalformedLogic(_))
        ));
    }

    #[test]
    fn test_unknown_op() {
        let result = serde_json::from_str::<Expr>(r#"{"op": "eval", "code": "1"}"#);
        assert!(result.is_err());
    }
}
