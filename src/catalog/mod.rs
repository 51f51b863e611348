//! Built in circuits, each one complete with chips, wires and logic.
//!
//! # Example
//! ```
//! # use breadboard::{catalog, evaluate};
//! let key = catalog::match_keyword("a full adder please").unwrap();
//! assert_eq!(key, "full_adder");
//!
//! let adder = catalog::get(key).unwrap();
//! assert_eq!(evaluate(adder, &[true, true, true]), vec![true, true]);
//! ```
use crate::circuit::{Chip, ChipType, CircuitDescription, PinRef, Wire};
use crate::logic::{Logic, LogicBuilder};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Builds a `Vec<Wire>` out of `source => destination, Color;` lines.
macro_rules! wires {
    ($($source:expr => $destination:expr, $color:ident;)*) => {
        vec![$(crate::circuit::Wire::new($source, $destination, crate::circuit::WireColor::$color)),*]
    };
}

mod adder;
mod comparator;
mod d_flip_flop;
mod decoder;
mod gates;
mod jk_flip_flop;
mod keywords;
mod multiplexer;
mod multiplier;
mod subtractor;
pub use keywords::match_keyword;

static CATALOG: Lazy<IndexMap<&'static str, CircuitDescription>> = Lazy::new(|| {
    let mut catalog = IndexMap::new();
    catalog.insert("and_from_nand", gates::and_from_nand());
    catalog.insert("or_from_nor", gates::or_from_nor());
    catalog.insert("not_gate", gates::not_gate());
    catalog.insert("xor_gate", gates::xor_gate());
    catalog.insert("xor_from_nand", gates::xor_from_nand());
    catalog.insert("half_adder", adder::half_adder());
    catalog.insert("full_adder", adder::full_adder());
    catalog.insert("half_subtractor", subtractor::half_subtractor());
    catalog.insert("full_subtractor", subtractor::full_subtractor());
    catalog.insert("multiplier_2bit", multiplier::multiplier_2bit());
    catalog.insert("mux_74153", multiplexer::mux_74153());
    catalog.insert("decoder_74139", decoder::decoder_74139());
    catalog.insert("comparator_7485", comparator::comparator_7485());
    catalog.insert("d_flip_flop", d_flip_flop::d_flip_flop());
    catalog.insert("jk_flip_flop", jk_flip_flop::jk_flip_flop());
    catalog
});

/// Returns the built in circuit stored under `key`.
pub fn get(key: &str) -> Option<&'static CircuitDescription> {
    CATALOG.get(key)
}

/// Returns every key in the catalog, in a stable order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    CATALOG.keys().copied()
}

/// Returns every circuit in the catalog with its key, in the same order as [keys].
pub fn iter() -> impl Iterator<Item = (&'static str, &'static CircuitDescription)> {
    CATALOG.iter().map(|(key, circuit)| (*key, circuit))
}

fn sw(i: usize) -> PinRef {
    PinRef::switch(i)
}

fn led(i: usize) -> PinRef {
    PinRef::led(i)
}

fn pin(chip: usize, pin: u8) -> PinRef {
    PinRef::chip(chip, pin)
}

/// Returns the wires tying every chip to the supply rails followed by `signals`.
fn with_power(chips: &[Chip], signals: Vec<Wire>) -> Vec<Wire> {
    let mut wires: Vec<Wire> = chips
        .iter()
        .enumerate()
        .flat_map(|(i, chip)| {
            let package = chip.package();
            wires![
                PinRef::VCC => pin(i, package.vcc), Red;
                PinRef::GND => pin(i, package.gnd), Black;
            ]
        })
        .collect();
    wires.extend(signals);
    wires
}

fn bill_of_materials(chips: &[Chip], inputs: usize, outputs: usize) -> Vec<String> {
    let mut counts: IndexMap<ChipType, usize> = IndexMap::new();
    for chip in chips {
        *counts.entry(chip.ty).or_default() += 1;
    }
    let mut bom: Vec<String> = counts
        .into_iter()
        .map(|(ty, n)| format!("{}x {} {}", n, ty, ty.package().function))
        .collect();
    bom.push(format!("{}x toggle switch", inputs));
    bom.push(format!("{}x LED with 330 ohm resistor", outputs));
    bom.push("jumper wires".into());
    bom
}

fn circuit(
    title: &str,
    description: &str,
    chips: Vec<Chip>,
    inputs: &[&str],
    outputs: &[&str],
    wires: Vec<Wire>,
    logic: Logic,
) -> CircuitDescription {
    CircuitDescription {
        title: title.into(),
        description: description.into(),
        explanation: None,
        bill_of_materials: bill_of_materials(&chips, inputs.len(), outputs.len()),
        wires: with_power(&chips, wires),
        chips,
        input_labels: inputs.iter().map(|s| s.to_string()).collect(),
        output_labels: outputs.iter().map(|s| s.to_string()).collect(),
        logic: Some(logic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{layout, render_wires, BoardConfig};
    use crate::data_structures::{collect_u64_lossy, InputCombinations};
    use crate::evaluator::{evaluate, truth_table};
    use std::collections::HashSet;

    fn word(bits: &[bool]) -> u64 {
        collect_u64_lossy(bits)
    }

    fn check(key: &str, expected: impl Fn(&[bool]) -> Vec<bool>) {
        let circuit = get(key).unwrap();
        for row in truth_table(circuit) {
            assert_eq!(
                row.outputs,
                expected(&row.inputs),
                "{} with inputs {:?}",
                key,
                row.inputs
            );
        }
    }

    #[test]
    fn test_every_circuit_is_consistent() {
        let config = BoardConfig::default();
        for (key, circuit) in iter() {
            circuit.validate().unwrap_or_else(|e| panic!("{}: {}", key, e));
            assert!(circuit.unpowered_chips().is_empty(), "{} is not powered", key);
            let types: HashSet<_> = circuit.chips.iter().map(|c| c.ty).collect();
            assert_eq!(circuit.bill_of_materials.len(), types.len() + 3, "{}", key);

            let board = layout(circuit, &config);
            let routed = render_wires(circuit, &board);
            assert_eq!(routed.len(), circuit.wires.len(), "{} has undrawable wires", key);
        }
    }

    #[test]
    fn test_keys() {
        assert_eq!(keys().count(), 15);
        assert!(get("full_adder").is_some());
        assert!(get("time_machine").is_none());
        assert_eq!(keys().next(), Some("and_from_nand"));
    }

    #[test]
    fn test_bill_of_materials() {
        let full_adder = get("full_adder").unwrap();
        assert_eq!(
            full_adder.bill_of_materials[0],
            "1x 7486 Quad 2-input XOR"
        );
        let multiplier = get("multiplier_2bit").unwrap();
        assert!(multiplier.bill_of_materials[0].starts_with("2x 7408"));
        assert_eq!(multiplier.bill_of_materials[2], "4x toggle switch");
    }

    #[test]
    fn test_gates() {
        check("and_from_nand", |i| vec![i[0] && i[1]]);
        check("or_from_nor", |i| vec![i[0] || i[1]]);
        check("not_gate", |i| vec![!i[0]]);
        check("xor_gate", |i| vec![i[0] ^ i[1]]);
        check("xor_from_nand", |i| vec![i[0] ^ i[1]]);
    }

    #[test]
    fn test_arithmetic() {
        check("half_adder", |i| vec![i[0] ^ i[1], i[0] && i[1]]);
        check("full_adder", |i| {
            let sum = i.iter().filter(|b| **b).count();
            vec![sum & 1 == 1, sum >= 2]
        });
        check("half_subtractor", |i| vec![i[0] ^ i[1], !i[0] && i[1]]);
        check("full_subtractor", |i| {
            let (a, b, bin) = (i[0] as i32, i[1] as i32, i[2] as i32);
            let d = a - b - bin;
            vec![d & 1 == 1, d < 0]
        });
        let full_adder = get("full_adder").unwrap();
        assert_eq!(evaluate(full_adder, &[true, true, true]), vec![true, true]);
        assert_eq!(evaluate(full_adder, &[true, false, false]), vec![true, false]);

        for inputs in InputCombinations::new(4) {
            let a = word(&inputs[0..2]);
            let b = word(&inputs[2..4]);
            let product = evaluate(get("multiplier_2bit").unwrap(), &inputs);
            assert_eq!(word(&product), a * b, "{} * {}", a, b);
        }
    }

    #[test]
    fn test_mux() {
        // Inputs are A B C0 C1 C2 C3.
        check("mux_74153", |i| {
            let address = word(&i[0..2]) as usize;
            vec![i[2 + address]]
        });
        let mux = get("mux_74153").unwrap();
        for others in InputCombinations::new(3) {
            for c3 in &[false, true] {
                let inputs = [true, true, others[0], others[1], others[2], *c3];
                assert_eq!(evaluate(mux, &inputs), vec![*c3]);
            }
        }
    }

    #[test]
    fn test_decoder() {
        // Inputs are A B G, outputs are active low.
        check("decoder_74139", |i| {
            let address = word(&i[0..2]) as usize;
            (0..4).map(|line| i[2] || line != address).collect()
        });
    }

    #[test]
    fn test_comparator() {
        // Inputs are A0..A3 then B0..B3, outputs are A>B A=B A<B.
        check("comparator_7485", |i| {
            let a = word(&i[0..4]);
            let b = word(&i[4..8]);
            vec![a > b, a == b, a < b]
        });
    }

    #[test]
    fn test_flip_flops() {
        // D CLK PRE CLR, presets and clears are active low.
        check("d_flip_flop", |i| {
            let (d, pre, clr) = (i[0], !i[2], !i[3]);
            vec![pre || (!clr && d), clr || (!pre && !d)]
        });
        // J K CLK PRE CLR.
        check("jk_flip_flop", |i| {
            let (j, pre, clr) = (i[0], !i[3], !i[4]);
            vec![pre || (!clr && j), clr || (!pre && !j)]
        });
        let d = get("d_flip_flop").unwrap();
        assert_eq!(evaluate(d, &[true, true, true, true]), vec![true, false]);
        assert_eq!(evaluate(d, &[false, true, true, true]), vec![false, true]);
    }
}
