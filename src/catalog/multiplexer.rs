use super::*;

/// One half of a 74153, the two select lines pick which data input reaches the LED.
pub fn mux_74153() -> CircuitDescription {
    let chips = vec![Chip::new("U1", ChipType::Ic74153, 20)];
    let wires = wires![
        // 1G is active low, the second half stays disabled.
        PinRef::GND => pin(0, 1), Black;
        PinRef::VCC => pin(0, 15), Red;
        sw(0) => pin(0, 14), Blue;
        sw(1) => pin(0, 2), Blue;
        sw(2) => pin(0, 6), Yellow;
        sw(3) => pin(0, 5), Yellow;
        sw(4) => pin(0, 4), Yellow;
        sw(5) => pin(0, 3), Yellow;
        pin(0, 7) => led(0), Green;
    ];

    let mut g = LogicBuilder::new(6);
    let inputs = g.inputs();
    let y = g.select(&inputs[0..2], &inputs[2..6], "MUX:1Y");
    g.output(y);

    circuit(
        "4-to-1 multiplexer",
        "Select lines A and B route one of the four data inputs C0 to C3 to the output.",
        chips,
        &["A", "B", "C0", "C1", "C2", "C3"],
        &["Y"],
        wires,
        g.build(),
    )
}
