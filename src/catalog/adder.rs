use super::*;

fn mkname(name: &str) -> String {
    format!("ADDER:{}", name)
}

pub fn half_adder() -> CircuitDescription {
    let chips = vec![
        Chip::new("U1", ChipType::Ic7486, 8),
        Chip::new("U2", ChipType::Ic7408, 20),
    ];
    let wires = wires![
        sw(0) => pin(0, 1), Blue;
        sw(1) => pin(0, 2), Blue;
        sw(0) => pin(1, 1), Blue;
        sw(1) => pin(1, 2), Blue;
        pin(0, 3) => led(0), Green;
        pin(1, 3) => led(1), Green;
    ];

    let mut g = LogicBuilder::new(2);
    let a = g.input(0);
    let b = g.input(1);
    let sum = g.xor2(a, b, mkname("sum"));
    let carry = g.and2(a, b, mkname("carry"));
    g.outputs(&[sum, carry]);

    circuit(
        "Half adder",
        "Adds two bits, the XOR gives the sum and the AND gives the carry.",
        chips,
        &["A", "B"],
        &["Sum", "Carry"],
        wires,
        g.build(),
    )
}

pub fn full_adder() -> CircuitDescription {
    let chips = vec![
        Chip::new("U1", ChipType::Ic7486, 8),
        Chip::new("U2", ChipType::Ic7408, 20),
        Chip::new("U3", ChipType::Ic7432, 32),
    ];
    let wires = wires![
        // x = A ^ B, Sum = x ^ Cin.
        sw(0) => pin(0, 1), Blue;
        sw(1) => pin(0, 2), Blue;
        pin(0, 3) => pin(0, 4), Yellow;
        sw(2) => pin(0, 5), Blue;
        pin(0, 6) => led(0), Green;
        // A & B and x & Cin.
        sw(0) => pin(1, 1), Blue;
        sw(1) => pin(1, 2), Blue;
        pin(0, 3) => pin(1, 4), Yellow;
        sw(2) => pin(1, 5), Blue;
        // Cout = (A & B) | (x & Cin).
        pin(1, 3) => pin(2, 1), Orange;
        pin(1, 6) => pin(2, 2), Orange;
        pin(2, 3) => led(1), Green;
    ];

    let mut g = LogicBuilder::new(3);
    let a = g.input(0);
    let b = g.input(1);
    let cin = g.input(2);

    let x = g.xor2(a, b, mkname("x"));
    let sum = g.xor2(x, cin, mkname("sum"));
    let and = g.and2(a, b, mkname("a"));
    let and2 = g.and2(x, cin, mkname("a2"));
    let cout = g.or2(and2, and, mkname("cout"));
    g.outputs(&[sum, cout]);

    circuit(
        "Full adder",
        "Adds two bits and a carry in, built from one XOR, one AND and one OR chip.",
        chips,
        &["A", "B", "Cin"],
        &["Sum", "Cout"],
        wires,
        g.build(),
    )
}
