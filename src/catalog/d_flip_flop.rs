use super::*;
use crate::logic::GateIndex;

/// Builds the state a 7474 settles in after one clock edge from the cleared state.
///
/// Preset and clear are active low and override the clock, with both asserted Q and
/// !Q are high together like on the real part.
pub(super) fn settled_outputs(
    g: &mut LogicBuilder,
    data: GateIndex,
    npreset: GateIndex,
    nclear: GateIndex,
    prefix: &str,
) -> [GateIndex; 2] {
    let name = |n: &str| format!("{}:{}", prefix, n);
    let preset = g.not1(npreset, name("preset"));
    let clear = g.not1(nclear, name("clear"));
    let ndata = g.not1(data, name("not data"));

    let clocked = g.and2(nclear, data, name("clocked q"));
    let q = g.or2(preset, clocked, name("q"));
    let nclocked = g.and2(npreset, ndata, name("clocked nq"));
    let nq = g.or2(clear, nclocked, name("nq"));
    [q, nq]
}

pub fn d_flip_flop() -> CircuitDescription {
    let chips = vec![Chip::new("U1", ChipType::Ic7474, 20)];
    let wires = wires![
        // Keep the second flip-flop out of preset and clear.
        PinRef::VCC => pin(0, 10), Red;
        PinRef::VCC => pin(0, 13), Red;
        sw(0) => pin(0, 2), Blue;
        sw(1) => pin(0, 3), Purple;
        sw(2) => pin(0, 4), Orange;
        sw(3) => pin(0, 1), Orange;
        pin(0, 5) => led(0), Green;
        pin(0, 6) => led(1), Green;
    ];

    let mut g = LogicBuilder::new(4);
    let d = g.input(0);
    let npreset = g.input(2);
    let nclear = g.input(3);
    let outputs = settled_outputs(&mut g, d, npreset, nclear, "D_FLIP_FLOP");
    g.outputs(&outputs);

    circuit(
        "D flip-flop",
        "Half of a 7474, Q takes the value of D on the rising edge of CLK unless PRE or CLR are pulled low.",
        chips,
        &["D", "CLK", "PRE", "CLR"],
        &["Q", "!Q"],
        wires,
        g.build(),
    )
}
