use super::*;

fn mkname(name: &str) -> String {
    format!("MULTIPLIER:{}", name)
}

/// 2x2 bit multiplier, the partial products are summed with two half adders.
pub fn multiplier_2bit() -> CircuitDescription {
    let chips = vec![
        Chip::new("U1", ChipType::Ic7408, 8),
        Chip::new("U2", ChipType::Ic7486, 20),
        Chip::new("U3", ChipType::Ic7408, 32),
    ];
    let wires = wires![
        // Partial products.
        sw(0) => pin(0, 1), Blue;
        sw(2) => pin(0, 2), Blue;
        sw(1) => pin(0, 4), Blue;
        sw(2) => pin(0, 5), Blue;
        sw(0) => pin(0, 9), Blue;
        sw(3) => pin(0, 10), Blue;
        sw(1) => pin(0, 12), Blue;
        sw(3) => pin(0, 13), Blue;
        pin(0, 3) => led(0), Green;
        // P1 and its carry.
        pin(0, 6) => pin(1, 1), Yellow;
        pin(0, 8) => pin(1, 2), Yellow;
        pin(0, 6) => pin(2, 1), Yellow;
        pin(0, 8) => pin(2, 2), Yellow;
        pin(1, 3) => led(1), Green;
        // P2 and P3.
        pin(0, 11) => pin(1, 4), Orange;
        pin(2, 3) => pin(1, 5), White;
        pin(0, 11) => pin(2, 4), Orange;
        pin(2, 3) => pin(2, 5), White;
        pin(1, 6) => led(2), Green;
        pin(2, 6) => led(3), Green;
    ];

    let mut g = LogicBuilder::new(4);
    let a0 = g.input(0);
    let a1 = g.input(1);
    let b0 = g.input(2);
    let b1 = g.input(3);

    let p0 = g.and2(a0, b0, mkname("p0"));
    let t1 = g.and2(a1, b0, mkname("t1"));
    let t2 = g.and2(a0, b1, mkname("t2"));
    let t3 = g.and2(a1, b1, mkname("t3"));
    let p1 = g.xor2(t1, t2, mkname("p1"));
    let c1 = g.and2(t1, t2, mkname("c1"));
    let p2 = g.xor2(t3, c1, mkname("p2"));
    let p3 = g.and2(t3, c1, mkname("p3"));
    g.outputs(&[p0, p1, p2, p3]);

    circuit(
        "2-bit multiplier",
        "Multiplies two 2-bit numbers into a 4-bit product using AND gates for the partial products and XOR gates to add them.",
        chips,
        &["A0", "A1", "B0", "B1"],
        &["P0", "P1", "P2", "P3"],
        wires,
        g.build(),
    )
}
