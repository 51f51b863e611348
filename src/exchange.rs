//! The JSON form circuit descriptions take when they come from, or go to, a generator.
//!
//! ```json
//! {
//!   "title": "NOT gate",
//!   "desc": "One inverter",
//!   "bom": ["1x 7404"],
//!   "chips": [{"id": "U1", "type": "74LS04", "x": 20}],
//!   "inputs": ["A"],
//!   "outputs": ["Y"],
//!   "wires": [
//!     {"s": "VCC", "e": {"c": 0, "p": 14}, "color": "red"},
//!     {"s": "SW_0", "e": {"c": 0, "p": 1}}
//!   ],
//!   "logic": [{"op": "not", "arg": {"op": "input", "index": 0}}]
//! }
//! ```
use crate::circuit::{Chip, ChipType, CircuitDescription, PinRef, PinToken, Wire, WireColor};
use crate::error::{Error, Result};
use crate::logic::{Expr, Logic};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChipRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub x: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireRecord {
    pub s: PinToken,
    pub e: PinToken,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
}

/// A circuit description exactly as it appears on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitRecord {
    pub title: String,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub bom: Vec<String>,
    pub chips: Vec<ChipRecord>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub wires: Vec<WireRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logic: Option<Vec<Expr>>,
}

impl TryFrom<CircuitRecord> for CircuitDescription {
    type Error = Error;

    /// Chips of an unknown type and unreadable pin names are rejected. A wire to a chip
    /// pin that can't exist is dropped on its own. Logic that doesn't compile is
    /// dropped, the circuit can still be drawn and evaluates to zeros.
    fn try_from(record: CircuitRecord) -> Result<Self> {
        let title = record.title.clone();
        let chips = record
            .chips
            .into_iter()
            .map(|c| Ok(Chip::new(c.id, ChipType::parse(&c.ty)?, c.x)))
            .collect::<Result<Vec<_>>>()?;

        let mut wires = Vec::with_capacity(record.wires.len());
        for (i, wire) in record.wires.into_iter().enumerate() {
            let WireRecord { s: source, e: destination, color } = wire;
            let ends = PinRef::try_from(source)
                .and_then(|source| Ok((source, PinRef::try_from(destination)?)));
            let (source, destination) = match ends {
                Ok(ends) => ends,
                Err(e @ Error::InvalidReference { .. }) => {
                    warn!("dropping wire {} of {:?}: {}", i, title, e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            let color = if color.is_empty() {
                WireColor::default()
            } else {
                WireColor::lenient(&color)
            };
            wires.push(Wire::new(source, destination, color));
        }

        let arity = record.inputs.len();
        let logic = record
            .logic
            .and_then(|exprs| match Logic::compile(arity, &exprs) {
                Ok(logic) => Some(logic),
                Err(e) => {
                    warn!("dropping the logic of {:?}: {}", title, e);
                    None
                }
            });

        Ok(CircuitDescription {
            title: record.title,
            description: record.desc,
            explanation: record.explanation,
            bill_of_materials: record.bom,
            chips,
            input_labels: record.inputs,
            output_labels: record.outputs,
            wires,
            logic,
        })
    }
}

impl From<&CircuitDescription> for CircuitRecord {
    fn from(circuit: &CircuitDescription) -> Self {
        CircuitRecord {
            title: circuit.title.clone(),
            desc: circuit.description.clone(),
            explanation: circuit.explanation.clone(),
            bom: circuit.bill_of_materials.clone(),
            chips: circuit
                .chips
                .iter()
                .map(|c| ChipRecord {
                    id: c.id.clone(),
                    ty: c.ty.to_string(),
                    x: c.x_position,
                })
                .collect(),
            inputs: circuit.input_labels.clone(),
            outputs: circuit.output_labels.clone(),
            wires: circuit
                .wires
                .iter()
                .map(|w| WireRecord {
                    s: w.source.into(),
                    e: w.destination.into(),
                    color: w.color.to_string(),
                })
                .collect(),
            logic: circuit.logic.as_ref().map(Logic::to_exprs),
        }
    }
}

/// Generators like to wrap their answer in a markdown code block.
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*\n(.*?)\n?\s*```\s*$").expect("code fence regex is valid")
});

/// Decodes a circuit description, the JSON may be wrapped in a markdown code block.
///
/// # Example
/// ```
/// # use breadboard::{evaluate, exchange};
/// let json = r#"{
///     "title": "AND",
///     "chips": [{"id": "U1", "type": "74HC08", "x": 20}],
///     "inputs": ["A", "B"],
///     "outputs": ["Y"],
///     "wires": [{"s": "SW_0", "e": {"c": 0, "p": 1}, "color": "Teal"}],
///     "logic": [{"op": "and", "args": [{"op": "input", "index": 0}, {"op": "input", "index": 1}]}]
/// }"#;
/// let circuit = exchange::decode(json).unwrap();
/// assert_eq!(evaluate(&circuit, &[true, true]), vec![true]);
/// assert_eq!(evaluate(&circuit, &[true, false]), vec![false]);
/// ```
pub fn decode(json: &str) -> Result<CircuitDescription> {
    let json = match CODE_FENCE.captures(json).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => json,
    };
    let record: CircuitRecord = serde_json::from_str(json)?;
    let circuit = CircuitDescription::try_from(record)?;
    if let Err(e) = circuit.validate() {
        warn!("decoded {:?} has problems: {}", circuit.title, e);
    }
    Ok(circuit)
}

/// Encodes `circuit` with its logic flattened into expression trees.
pub fn encode(circuit: &CircuitDescription) -> Result<String> {
    Ok(serde_json::to_string(&CircuitRecord::from(circuit))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{layout, render_wires, BoardConfig};
    use crate::catalog;
    use crate::evaluator::{evaluate, truth_table};

    const INVERTER: &str = r#"{
        "title": "NOT gate",
        "desc": "One inverter",
        "bom": ["1x 7404"],
        "chips": [{"id": "U1", "type": "74LS04", "x": 20}],
        "inputs": ["A"],
        "outputs": ["Y"],
        "wires": [
            {"s": "VCC", "e": {"c": 0, "p": 14}, "color": "red"},
            {"s": "GND", "e": {"c": 0, "p": 7}, "color": "black"},
            {"s": "SW_0", "e": {"c": 0, "p": 1}},
            {"s": {"c": 0, "p": 2}, "e": "LED_0", "color": "lime"}
        ],
        "logic": [{"op": "not", "arg": {"op": "input", "index": 0}}]
    }"#;

    #[test]
    fn test_decode() {
        let circuit = decode(INVERTER).unwrap();
        circuit.validate().unwrap();
        assert_eq!(circuit.chips[0].ty, ChipType::Ic7404);
        assert_eq!(circuit.wires[0].source, PinRef::VCC);
        assert_eq!(circuit.wires[0].color, WireColor::Red);
        assert_eq!(circuit.wires[2].color, WireColor::Blue);
        assert_eq!(circuit.wires[3].source, PinRef::chip(0, 2));
        assert_eq!(circuit.wires[3].destination, PinRef::Led(0));
        assert_eq!(circuit.wires[3].color, WireColor::Blue);
        assert_eq!(circuit.explanation, None);
        assert_eq!(evaluate(&circuit, &[false]), vec![true]);
    }

    #[test]
    fn test_code_fence() {
        let fenced = format!("```json\n{}\n```", INVERTER);
        assert_eq!(decode(&fenced).unwrap(), decode(INVERTER).unwrap());
    }

    #[test]
    fn test_unknown_chip() {
        let json = INVERTER.replace("74LS04", "NE555");
        assert!(matches!(decode(&json), Err(Error::UnknownChipType(_))));
    }

    #[test]
    fn test_bad_tokens() {
        for token in &[r#""SW_x""#, r#""LED""#] {
            let json = INVERTER.replace(r#""SW_0""#, token);
            assert!(matches!(decode(&json), Err(Error::InvalidToken(_))), "{}", token);
        }
        let json = INVERTER.replace(r#""SW_0""#, "12");
        assert!(matches!(decode(&json), Err(Error::Json(_))));
        assert!(matches!(decode("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_out_of_range_pins_drop_only_their_wire() {
        let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Debug, simplelog::Config::default());
        for token in &[
            r#"{"c": 0, "p": 300}"#,
            r#"{"c": -1, "p": 14}"#,
            r#"{"c": 0, "p": 0}"#,
        ] {
            let json = INVERTER.replace(r#"{"c": 0, "p": 14}"#, token);
            let circuit = decode(&json).unwrap();
            assert_eq!(circuit.wires.len(), 3, "{}", token);
            assert_eq!(circuit.wires[0].source, PinRef::GND, "{}", token);
            assert_eq!(evaluate(&circuit, &[false]), vec![true]);

            let board = layout(&circuit, &BoardConfig::default());
            assert_eq!(render_wires(&circuit, &board).len(), 3, "{}", token);
        }

        // In range for the token but past the package: kept, then skipped when drawn.
        let json = INVERTER.replace(r#"{"c": 0, "p": 14}"#, r#"{"c": 0, "p": 20}"#);
        let circuit = decode(&json).unwrap();
        assert_eq!(circuit.wires.len(), 4);
        let board = layout(&circuit, &BoardConfig::default());
        let routed = render_wires(&circuit, &board);
        assert_eq!(routed.len(), 3);
        assert!(routed.iter().all(|r| r.wire.source != PinRef::VCC));
    }

    #[test]
    fn test_bad_logic_is_dropped() {
        let json = INVERTER.replace(r#""index": 0"#, r#""index": 3"#);
        let circuit = decode(&json).unwrap();
        assert!(circuit.logic.is_none());
        assert_eq!(evaluate(&circuit, &[true]), vec![false]);

        let json = INVERTER.replace(r#""op": "not""#, r#""op": "eval""#);
        assert!(decode(&json).is_err());
    }

    #[test]
    fn test_catalog_survives_encoding() {
        for (key, circuit) in catalog::iter() {
            let decoded = decode(&encode(circuit).unwrap()).unwrap();
            assert_eq!(decoded.chips, circuit.chips, "{}", key);
            assert_eq!(decoded.wires, circuit.wires, "{}", key);
            assert_eq!(truth_table(&decoded), truth_table(circuit), "{}", key);
        }
    }
}
