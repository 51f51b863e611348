use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One of the two power nets spanning the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Polarity {
    Vcc,
    Gnd,
}

/// A single electrical endpoint on the board.
///
/// # Example
/// ```
/// # use breadboard::PinRef;
/// let a: PinRef = "SW_2".parse().unwrap();
/// assert_eq!(a, PinRef::Switch(2));
/// assert_eq!(PinRef::chip(0, 14).to_string(), "chip[0].14");
/// assert_eq!(PinRef::VCC.to_string(), "VCC");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "PinToken", into = "PinToken")]
pub enum PinRef {
    PowerRail(Polarity),
    Switch(usize),
    Led(usize),
    /// `pin` is numbered from 1 following the usual DIP convention.
    ChipPin { chip: usize, pin: u8 },
}

impl PinRef {
    pub const VCC: PinRef = PinRef::PowerRail(Polarity::Vcc);
    pub const GND: PinRef = PinRef::PowerRail(Polarity::Gnd);

    pub const fn switch(index: usize) -> PinRef {
        PinRef::Switch(index)
    }

    pub const fn led(index: usize) -> PinRef {
        PinRef::Led(index)
    }

    pub const fn chip(chip: usize, pin: u8) -> PinRef {
        PinRef::ChipPin { chip, pin }
    }
}

impl Display for PinRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PinRef::PowerRail(Polarity::Vcc) => write!(f, "VCC"),
            PinRef::PowerRail(Polarity::Gnd) => write!(f, "GND"),
            PinRef::Switch(i) => write!(f, "SW_{}", i),
            PinRef::Led(i) => write!(f, "LED_{}", i),
            PinRef::ChipPin { chip, pin } => write!(f, "chip[{}].{}", chip, pin),
        }
    }
}

static INDEXED_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(SW|LED)_(\d+)$").expect("token regex is valid"));

/// Parses the string tokens of the exchange format: `VCC`, `GND`, `SW_<n>` and `LED_<n>`.
/// Chip pins have no string form, they are `{c, p}` objects, see [PinToken].
impl FromStr for PinRef {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let token = token.trim();
        match token {
            "VCC" => return Ok(PinRef::VCC),
            "GND" => return Ok(PinRef::GND),
            _ => {}
        }
        let captures = INDEXED_TOKEN
            .captures(token)
            .ok_or_else(|| Error::InvalidToken(token.to_string()))?;
        let index = captures[2]
            .parse::<usize>()
            .map_err(|_| Error::InvalidToken(token.to_string()))?;
        match &captures[1] {
            "SW" => Ok(PinRef::Switch(index)),
            _ => Ok(PinRef::Led(index)),
        }
    }
}

/// Shape of a wire endpoint in the exchange format.
///
/// Chip indexes and pin numbers are read as plain integers so that a reference to a
/// pin that can't exist is still a well formed token, see [Error::InvalidReference].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PinToken {
    Name(String),
    Chip { c: i64, p: i64 },
}

impl TryFrom<PinToken> for PinRef {
    type Error = Error;

    fn try_from(token: PinToken) -> Result<Self> {
        match token {
            PinToken::Name(name) => name.parse(),
            PinToken::Chip { c, p } => match (usize::try_from(c), u8::try_from(p)) {
                (Ok(chip), Ok(pin)) if pin > 0 => Ok(PinRef::chip(chip, pin)),
                _ => Err(Error::invalid_reference(
                    format!("{{c: {}, p: {}}}", c, p),
                    "no such chip pin",
                )),
            },
        }
    }
}

impl From<PinRef> for PinToken {
    fn from(reference: PinRef) -> Self {
        match reference {
            PinRef::ChipPin { chip, pin } => PinToken::Chip {
                c: chip as i64,
                p: pin as i64,
            },
            other => PinToken::Name(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!("VCC".parse::<PinRef>().unwrap(), PinRef::VCC);
        assert_eq!("GND".parse::<PinRef>().unwrap(), PinRef::GND);
        assert_eq!("SW_0".parse::<PinRef>().unwrap(), PinRef::Switch(0));
        assert_eq!("LED_12".parse::<PinRef>().unwrap(), PinRef::Led(12));
    }

    #[test]
    fn test_bad_tokens() {
        for token in &["vcc", "SW_", "SW_-1", "LED", "SW0", "U1.3", ""] {
            assert!(
                matches!(token.parse::<PinRef>(), Err(Error::InvalidToken(_))),
                "{} should not parse",
                token
            );
        }
    }

    #[test]
    fn test_json_shapes() {
        let refs: Vec<PinRef> =
            serde_json::from_str(r#"["VCC", "SW_3", {"c": 1, "p": 14}, "LED_0"]"#).unwrap();
        assert_eq!(
            refs,
            vec![
                PinRef::VCC,
                PinRef::Switch(3),
                PinRef::chip(1, 14),
                PinRef::Led(0)
            ]
        );

        let json = serde_json::to_string(&refs).unwrap();
        assert_eq!(json, r#"["VCC","SW_3",{"c":1,"p":14},"LED_0"]"#);
    }

    #[test]
    fn test_out_of_range_chip_tokens() {
        for (c, p) in &[(0, 0), (-1, 3), (0, 300), (0, -2)] {
            assert!(matches!(
                PinRef::try_from(PinToken::Chip { c: *c, p: *p }),
                Err(Error::InvalidReference { .. })
            ));
        }
        assert_eq!(
            PinRef::try_from(PinToken::Chip { c: 2, p: 16 }).unwrap(),
            PinRef::chip(2, 16)
        );
    }

    #[test]
    fn test_json_pin_zero() {
        assert!(serde_json::from_str::<PinRef>(r#"{"c": 0, "p": 0}"#).is_err());
        assert!(serde_json::from_str::<PinRef>(r#"{"c": -1, "p": 3}"#).is_err());
    }
}
