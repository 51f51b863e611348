use super::*;

fn mkname(name: &str) -> String {
    format!("SUBTRACTOR:{}", name)
}

pub fn half_subtractor() -> CircuitDescription {
    let chips = vec![
        Chip::new("U1", ChipType::Ic7486, 8),
        Chip::new("U2", ChipType::Ic7404, 20),
        Chip::new("U3", ChipType::Ic7408, 32),
    ];
    let wires = wires![
        sw(0) => pin(0, 1), Blue;
        sw(1) => pin(0, 2), Blue;
        pin(0, 3) => led(0), Green;
        sw(0) => pin(1, 1), Blue;
        pin(1, 2) => pin(2, 1), Yellow;
        sw(1) => pin(2, 2), Blue;
        pin(2, 3) => led(1), Green;
    ];

    let mut g = LogicBuilder::new(2);
    let a = g.input(0);
    let b = g.input(1);
    let difference = g.xor2(a, b, mkname("difference"));
    let na = g.not1(a, mkname("not a"));
    let borrow = g.and2(na, b, mkname("borrow"));
    g.outputs(&[difference, borrow]);

    circuit(
        "Half subtractor",
        "Computes A - B, the difference is A XOR B and a borrow is needed when A is 0 and B is 1.",
        chips,
        &["A", "B"],
        &["Difference", "Borrow"],
        wires,
        g.build(),
    )
}

pub fn full_subtractor() -> CircuitDescription {
    let chips = vec![
        Chip::new("U1", ChipType::Ic7486, 8),
        Chip::new("U2", ChipType::Ic7404, 20),
        Chip::new("U3", ChipType::Ic7408, 32),
        Chip::new("U4", ChipType::Ic7432, 44),
    ];
    let wires = wires![
        // x = A ^ B, D = x ^ Bin.
        sw(0) => pin(0, 1), Blue;
        sw(1) => pin(0, 2), Blue;
        pin(0, 3) => pin(0, 4), Yellow;
        sw(2) => pin(0, 5), Blue;
        pin(0, 6) => led(0), Green;
        // !A and !x.
        sw(0) => pin(1, 1), Blue;
        pin(0, 3) => pin(1, 3), Yellow;
        // !A & B and !x & Bin.
        pin(1, 2) => pin(2, 1), White;
        sw(1) => pin(2, 2), Blue;
        pin(1, 4) => pin(2, 4), White;
        sw(2) => pin(2, 5), Blue;
        // Bout.
        pin(2, 3) => pin(3, 1), Orange;
        pin(2, 6) => pin(3, 2), Orange;
        pin(3, 3) => led(1), Green;
    ];

    let mut g = LogicBuilder::new(3);
    let a = g.input(0);
    let b = g.input(1);
    let bin = g.input(2);

    let x = g.xor2(a, b, mkname("x"));
    let difference = g.xor2(x, bin, mkname("difference"));
    let na = g.not1(a, mkname("not a"));
    let nx = g.not1(x, mkname("not x"));
    let t1 = g.and2(na, b, mkname("t1"));
    let t2 = g.and2(nx, bin, mkname("t2"));
    let bout = g.or2(t1, t2, mkname("bout"));
    g.outputs(&[difference, bout]);

    circuit(
        "Full subtractor",
        "Computes A - B - Bin with a borrow out, built from XOR, inverter, AND and OR chips.",
        chips,
        &["A", "B", "Bin"],
        &["Difference", "Bout"],
        wires,
        g.build(),
    )
}
