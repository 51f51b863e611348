use super::*;

/// AND built from two NAND gates, the second one wired as an inverter.
pub fn and_from_nand() -> CircuitDescription {
    let chips = vec![Chip::new("U1", ChipType::Ic7400, 20)];
    let wires = wires![
        sw(0) => pin(0, 1), Blue;
        sw(1) => pin(0, 2), Blue;
        // Both inputs of the second gate on the same net.
        pin(0, 3) => pin(0, 4), Yellow;
        pin(0, 3) => pin(0, 5), Yellow;
        pin(0, 6) => led(0), Green;
    ];

    let mut g = LogicBuilder::new(2);
    let a = g.input(0);
    let b = g.input(1);
    let nand = g.nand2(a, b, "nand");
    let and = g.nand2(nand, nand, "inverted nand");
    g.output(and);

    circuit(
        "AND from NAND",
        "An AND gate made of two NAND gates of a 7400, the second one inverts the first.",
        chips,
        &["A", "B"],
        &["Y"],
        wires,
        g.build(),
    )
}

/// OR built from two NOR gates, the second one wired as an inverter.
pub fn or_from_nor() -> CircuitDescription {
    let chips = vec![Chip::new("U1", ChipType::Ic7402, 20)];
    let wires = wires![
        sw(0) => pin(0, 2), Blue;
        sw(1) => pin(0, 3), Blue;
        pin(0, 1) => pin(0, 5), Yellow;
        pin(0, 1) => pin(0, 6), Yellow;
        pin(0, 4) => led(0), Green;
    ];

    let mut g = LogicBuilder::new(2);
    let a = g.input(0);
    let b = g.input(1);
    let nor = g.nor2(a, b, "nor");
    let or = g.nor2(nor, nor, "inverted nor");
    g.output(or);

    circuit(
        "OR from NOR",
        "An OR gate made of two NOR gates of a 7402, the second one inverts the first.",
        chips,
        &["A", "B"],
        &["Y"],
        wires,
        g.build(),
    )
}

pub fn not_gate() -> CircuitDescription {
    let chips = vec![Chip::new("U1", ChipType::Ic7404, 20)];
    let wires = wires![
        sw(0) => pin(0, 1), Blue;
        pin(0, 2) => led(0), Green;
    ];

    let mut g = LogicBuilder::new(1);
    let a = g.input(0);
    let y = g.not1(a, "not");
    g.output(y);

    circuit(
        "NOT gate",
        "One inverter of a 7404, the LED is lit while the switch is off.",
        chips,
        &["A"],
        &["Y"],
        wires,
        g.build(),
    )
}

pub fn xor_gate() -> CircuitDescription {
    let chips = vec![Chip::new("U1", ChipType::Ic7486, 20)];
    let wires = wires![
        sw(0) => pin(0, 1), Blue;
        sw(1) => pin(0, 2), Blue;
        pin(0, 3) => led(0), Green;
    ];

    let mut g = LogicBuilder::new(2);
    let a = g.input(0);
    let b = g.input(1);
    let y = g.xor2(a, b, "xor");
    g.output(y);

    circuit(
        "XOR gate",
        "One exclusive OR gate of a 7486, the LED is lit when exactly one switch is on.",
        chips,
        &["A", "B"],
        &["Y"],
        wires,
        g.build(),
    )
}

/// The classic four NAND exclusive OR.
pub fn xor_from_nand() -> CircuitDescription {
    let chips = vec![Chip::new("U1", ChipType::Ic7400, 20)];
    let wires = wires![
        // Gate 1: n1 = A nand B.
        sw(0) => pin(0, 1), Blue;
        sw(1) => pin(0, 2), Blue;
        // Gate 2: n2 = A nand n1.
        sw(0) => pin(0, 4), Blue;
        pin(0, 3) => pin(0, 5), Yellow;
        // Gate 3: n3 = n1 nand B.
        pin(0, 3) => pin(0, 9), Yellow;
        sw(1) => pin(0, 10), Blue;
        // Gate 4: Y = n2 nand n3.
        pin(0, 6) => pin(0, 12), Orange;
        pin(0, 8) => pin(0, 13), Orange;
        pin(0, 11) => led(0), Green;
    ];

    let mut g = LogicBuilder::new(2);
    let a = g.input(0);
    let b = g.input(1);
    let n1 = g.nand2(a, b, "n1");
    let n2 = g.nand2(a, n1, "n2");
    let n3 = g.nand2(n1, b, "n3");
    let y = g.nand2(n2, n3, "y");
    g.output(y);

    circuit(
        "XOR from NAND",
        "Exclusive OR built from the four NAND gates of a single 7400.",
        chips,
        &["A", "B"],
        &["Y"],
        wires,
        g.build(),
    )
}
