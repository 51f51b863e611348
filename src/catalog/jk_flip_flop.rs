use super::d_flip_flop::settled_outputs;
use super::*;

/// Half of a 7476. From the cleared state a clock pulse can only set Q, so K has no
/// visible effect on a single evaluation.
pub fn jk_flip_flop() -> CircuitDescription {
    let chips = vec![Chip::new("U1", ChipType::Ic7476, 20)];
    let wires = wires![
        PinRef::VCC => pin(0, 7), Red;
        PinRef::VCC => pin(0, 8), Red;
        sw(0) => pin(0, 4), Blue;
        sw(1) => pin(0, 16), Blue;
        sw(2) => pin(0, 1), Purple;
        sw(3) => pin(0, 2), Orange;
        sw(4) => pin(0, 3), Orange;
        pin(0, 15) => led(0), Green;
        pin(0, 14) => led(1), Green;
    ];

    let mut g = LogicBuilder::new(5);
    let j = g.input(0);
    let npreset = g.input(3);
    let nclear = g.input(4);
    let outputs = settled_outputs(&mut g, j, npreset, nclear, "JK_FLIP_FLOP");
    g.outputs(&outputs);

    circuit(
        "JK flip-flop",
        "Half of a 7476, J sets and K resets Q on the clock pulse, PRE and CLR are active low.",
        chips,
        &["J", "K", "CLK", "PRE", "CLR"],
        &["Q", "!Q"],
        wires,
        g.build(),
    )
}
