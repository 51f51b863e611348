use super::*;

fn mkname(name: &str, bit: usize) -> String {
    format!("COMPARATOR:{}{}", name, bit)
}

/// A single 7485 comparing two 4-bit numbers, the cascade inputs say the lower stages are equal.
pub fn comparator_7485() -> CircuitDescription {
    let chips = vec![Chip::new("U1", ChipType::Ic7485, 20)];
    let wires = wires![
        // Cascade inputs.
        PinRef::GND => pin(0, 2), Black;
        PinRef::VCC => pin(0, 3), Red;
        PinRef::GND => pin(0, 4), Black;
        sw(0) => pin(0, 10), Blue;
        sw(1) => pin(0, 12), Blue;
        sw(2) => pin(0, 13), Blue;
        sw(3) => pin(0, 15), Blue;
        sw(4) => pin(0, 9), Yellow;
        sw(5) => pin(0, 11), Yellow;
        sw(6) => pin(0, 14), Yellow;
        sw(7) => pin(0, 1), Yellow;
        pin(0, 5) => led(0), Green;
        pin(0, 6) => led(1), Green;
        pin(0, 7) => led(2), Green;
    ];

    let mut g = LogicBuilder::new(8);
    let inputs = g.inputs();
    let (a, b) = inputs.split_at(4);

    let mut equal = Vec::new();
    let mut greater = Vec::new();
    let mut less = Vec::new();
    for bit in 0..4 {
        let na = g.not1(a[bit], mkname("na", bit));
        let nb = g.not1(b[bit], mkname("nb", bit));
        equal.push(g.xnor2(a[bit], b[bit], mkname("eq", bit)));
        greater.push(g.and2(a[bit], nb, mkname("gt", bit)));
        less.push(g.and2(na, b[bit], mkname("lt", bit)));
    }

    // A bit decides the comparison when every more significant bit is equal.
    let mut decided_greater = Vec::new();
    let mut decided_less = Vec::new();
    for bit in (0..4).rev() {
        let higher_equal = &equal[bit + 1..];
        let gt = higher_equal.iter().copied().chain(Some(greater[bit]));
        decided_greater.push(g.andx(gt, mkname("gt_decided", bit)));
        let lt = higher_equal.iter().copied().chain(Some(less[bit]));
        decided_less.push(g.andx(lt, mkname("lt_decided", bit)));
    }

    let gt = g.orx(decided_greater, "COMPARATOR:A>B");
    let eq = g.andx(equal, "COMPARATOR:A=B");
    let lt = g.orx(decided_less, "COMPARATOR:A<B");
    g.outputs(&[gt, eq, lt]);

    circuit(
        "4-bit magnitude comparator",
        "Compares A3..A0 with B3..B0 and lights exactly one of A>B, A=B and A<B.",
        chips,
        &["A0", "A1", "A2", "A3", "B0", "B1", "B2", "B3"],
        &["A>B", "A=B", "A<B"],
        wires,
        g.build(),
    )
}
