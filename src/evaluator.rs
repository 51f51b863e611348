use crate::circuit::CircuitDescription;
use crate::data_structures::{BitIter, InputCombinations};
use crate::error::{Error, Result};
use log::{trace, warn};

/// Evaluates the logic of `circuit` for `inputs`, keeping the error.
///
/// Fails with [Error::ArityMismatch] if `inputs` doesn't have one value per input label
/// and with [Error::MalformedLogic] if the logic is missing or doesn't match the labels.
pub fn try_evaluate(circuit: &CircuitDescription, inputs: &[bool]) -> Result<Vec<bool>> {
    if inputs.len() != circuit.arity() {
        return Err(Error::ArityMismatch {
            expected: circuit.arity(),
            actual: inputs.len(),
        });
    }
    let outputs = circuit.check_logic()?.evaluate(inputs)?;
    trace!("{:?}: {:?} -> {:?}", circuit.title, inputs, outputs);
    Ok(outputs)
}

/// Returns the outputs of `circuit` for `inputs`.
///
/// Never fails, whatever goes wrong is logged and replaced by
/// [all zero outputs](CircuitDescription::zero_outputs) so a broken circuit can't take
/// the rest of the board down with it. Broken logic in a circuit that declares no
/// outputs at all gives a single zero.
///
/// # Example
/// ```
/// # use breadboard::{catalog, evaluate};
/// let half_adder = catalog::get("half_adder").unwrap();
///
/// assert_eq!(evaluate(half_adder, &[true, true]), vec![false, true]);
/// assert_eq!(evaluate(half_adder, &[true, false]), vec![true, false]);
///
/// // Too few inputs.
/// assert_eq!(evaluate(half_adder, &[true]), vec![false, false]);
/// ```
pub fn evaluate(circuit: &CircuitDescription, inputs: &[bool]) -> Vec<bool> {
    try_evaluate(circuit, inputs).unwrap_or_else(|e| {
        warn!("evaluating {:?}: {}, showing zeros", circuit.title, e);
        match e {
            Error::MalformedLogic(_) if circuit.output_labels.is_empty() => vec![false],
            _ => circuit.zero_outputs(),
        }
    })
}

/// Evaluates `circuit` with input `i` set to bit `i` of `word`.
pub fn evaluate_word(circuit: &CircuitDescription, word: u64) -> Vec<bool> {
    let inputs: Vec<bool> = BitIter::new(word, circuit.arity()).collect();
    evaluate(circuit, &inputs)
}

/// One line of a truth table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTableRow {
    pub inputs: Vec<bool>,
    pub outputs: Vec<bool>,
}

/// Evaluates `circuit` for every possible input vector, in counting order with
/// input 0 as the least significant bit.
///
/// # Panics
///
/// Will panic if the circuit has 64 inputs or more.
pub fn truth_table(circuit: &CircuitDescription) -> Vec<TruthTableRow> {
    InputCombinations::new(circuit.arity())
        .map(|inputs| {
            let outputs = evaluate(circuit, &inputs);
            TruthTableRow { inputs, outputs }
        })
        .collect()
}
