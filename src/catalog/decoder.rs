use super::*;

/// One half of a 74139 with active low outputs and enable.
pub fn decoder_74139() -> CircuitDescription {
    let chips = vec![Chip::new("U1", ChipType::Ic74139, 20)];
    let wires = wires![
        PinRef::VCC => pin(0, 15), Red;
        sw(0) => pin(0, 2), Blue;
        sw(1) => pin(0, 3), Blue;
        sw(2) => pin(0, 1), Purple;
        pin(0, 4) => led(0), Green;
        pin(0, 5) => led(1), Green;
        pin(0, 6) => led(2), Green;
        pin(0, 7) => led(3), Green;
    ];

    let mut g = LogicBuilder::new(3);
    let a = g.input(0);
    let b = g.input(1);
    let enable = g.input(2);
    let enabled = g.not1(enable, "DECODER:enabled");

    let lines = g.decoder(&[a, b], "DECODER:line");
    for line in lines {
        let y = g.nand2(line, enabled, "DECODER:y");
        g.output(y);
    }

    circuit(
        "2-to-4 decoder",
        "Lights every LED except the one selected by A and B, the outputs and the enable G are active low.",
        chips,
        &["A", "B", "G"],
        &["Y0", "Y1", "Y2", "Y3"],
        wires,
        g.build(),
    )
}
