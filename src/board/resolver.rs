use super::{BoardConfig, Coordinate, Frame};
use crate::circuit::{Chip, PinRef, Polarity};
use crate::error::{Error, Result};

/// Resolves `reference` using `frame` to find the chips.
pub(super) fn resolve_with<F: Fn(usize) -> Option<Frame>>(
    reference: &PinRef,
    config: &BoardConfig,
    frame: F,
) -> Result<Coordinate> {
    match *reference {
        PinRef::PowerRail(Polarity::Vcc) => Ok(config.vcc_point()),
        PinRef::PowerRail(Polarity::Gnd) => Ok(config.gnd_point()),
        PinRef::Switch(i) => Ok(config.switch_point(i)),
        PinRef::Led(i) => Ok(config.led_point(i)),
        PinRef::ChipPin { chip, pin } => {
            let frame =
                frame(chip).ok_or_else(|| Error::invalid_reference(reference, "no such chip"))?;
            frame.pin(pin).ok_or_else(|| {
                Error::invalid_reference(
                    reference,
                    format!("the package has {} pins", frame.package.pins),
                )
            })
        }
    }
}

/// Returns the board position of `reference`.
///
/// Rails, switches and LEDs sit at fixed positions, switch and LED indexes are not
/// bounded and may land outside of the visible board. Chip pins fail with
/// [Error::InvalidReference] if the chip or the pin doesn't exist.
///
/// # Example
/// ```
/// # use breadboard::{resolve, BoardConfig, Chip, ChipType, PinRef};
/// let config = BoardConfig::default();
/// let chips = [Chip::new("U1", ChipType::Ic7400, 10)];
///
/// let pin3 = resolve(&PinRef::chip(0, 3), &chips, &config).unwrap();
/// assert_eq!((pin3.x, pin3.y), (14.0, 22.0));
///
/// assert!(resolve(&PinRef::chip(1, 3), &chips, &config).is_err());
/// ```
pub fn resolve(reference: &PinRef, chips: &[Chip], config: &BoardConfig) -> Result<Coordinate> {
    resolve_with(reference, config, |i| {
        chips.get(i).map(|chip| Frame::for_chip(chip, config))
    })
}
