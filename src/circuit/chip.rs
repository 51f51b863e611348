use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Part numbers understood by the breadboard.
///
/// Anything outside this list has no known pin geometry, so it is rejected as soon
/// as a [Chip] is decoded.
///
/// # Example
/// ```
/// # use breadboard::ChipType;
/// assert_eq!(ChipType::parse("74LS08").unwrap(), ChipType::Ic7408);
/// assert_eq!(ChipType::parse("sn74hc153n").unwrap(), ChipType::Ic74153);
/// assert_eq!(ChipType::Ic7486.to_string(), "7486");
/// assert!(ChipType::parse("555").is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Display, EnumString, EnumIter)]
pub enum ChipType {
    #[strum(to_string = "7400")]
    Ic7400,
    #[strum(to_string = "7402")]
    Ic7402,
    #[strum(to_string = "7404")]
    Ic7404,
    #[strum(to_string = "7408")]
    Ic7408,
    #[strum(to_string = "7432")]
    Ic7432,
    #[strum(to_string = "7486")]
    Ic7486,
    #[strum(to_string = "7474")]
    Ic7474,
    #[strum(to_string = "7476")]
    Ic7476,
    #[strum(to_string = "7485")]
    Ic7485,
    #[strum(to_string = "74139")]
    Ic74139,
    #[strum(to_string = "74153")]
    Ic74153,
}

/// Matches family prefixes and package suffixes, `SN74LS08N` -> `08`.
static PART_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:SN)?74(?:ALS|AS|HCT|HC|LS|F|S)?(\d{2,3})[A-Z]*$")
        .expect("part number regex is valid")
});

/// Physical description of a dual in-line package.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Package {
    /// Total number of pins.
    pub pins: u8,
    /// Pin that has to be tied to VCC.
    pub vcc: u8,
    /// Pin that has to be tied to GND.
    pub gnd: u8,
    /// Human readable function of the part.
    pub function: &'static str,
}

impl Package {
    const fn dip14(function: &'static str) -> Self {
        Package {
            pins: 14,
            vcc: 14,
            gnd: 7,
            function,
        }
    }

    const fn dip16(function: &'static str) -> Self {
        Package {
            pins: 16,
            vcc: 16,
            gnd: 8,
            function,
        }
    }

    /// Number of pins on each row, pins `1..=N` sit on the bottom row.
    pub fn pins_per_side(&self) -> u8 {
        self.pins / 2
    }

    /// Width of the package in board cells.
    pub fn width(&self) -> usize {
        self.pins_per_side() as usize
    }

    /// Returns true if `pin` is a real pin of this package.
    pub fn contains(&self, pin: u8) -> bool {
        (1..=self.pins).contains(&pin)
    }
}

impl ChipType {
    /// Parses a part number, ignoring the logic family (`LS`, `HC`...), the `SN`
    /// manufacturer prefix and package suffixes.
    pub fn parse(name: &str) -> Result<ChipType> {
        let name = name.trim();
        let digits = PART_NUMBER
            .captures(name)
            .and_then(|c| c.get(1))
            .ok_or_else(|| Error::UnknownChipType(name.to_string()))?;

        ChipType::from_str(&format!("74{}", digits.as_str()))
            .map_err(|_| Error::UnknownChipType(name.to_string()))
    }

    /// Footprint table for every supported part.
    pub fn package(self) -> Package {
        use ChipType::*;
        match self {
            Ic7400 => Package::dip14("Quad 2-input NAND"),
            Ic7402 => Package::dip14("Quad 2-input NOR"),
            Ic7404 => Package::dip14("Hex inverter"),
            Ic7408 => Package::dip14("Quad 2-input AND"),
            Ic7432 => Package::dip14("Quad 2-input OR"),
            Ic7486 => Package::dip14("Quad 2-input XOR"),
            Ic7474 => Package::dip14("Dual D flip-flop with preset and clear"),
            // The 7476 has its supply pins in the middle of the package.
            Ic7476 => Package {
                pins: 16,
                vcc: 5,
                gnd: 13,
                function: "Dual JK flip-flop with preset and clear",
            },
            Ic7485 => Package::dip16("4-bit magnitude comparator"),
            Ic74139 => Package::dip16("Dual 2-to-4 line decoder"),
            Ic74153 => Package::dip16("Dual 4-to-1 line multiplexer"),
        }
    }
}

/// A chip placed on the board.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Chip {
    /// Unique within a circuit, usually `U1`, `U2`...
    pub id: String,
    pub ty: ChipType,
    /// Column offset of pin 1 from the left margin of the board.
    pub x_position: i32,
}

impl Chip {
    pub fn new<S: Into<String>>(id: S, ty: ChipType, x_position: i32) -> Self {
        Self {
            id: id.into(),
            ty,
            x_position,
        }
    }

    pub fn package(&self) -> Package {
        self.ty.package()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_families() {
        assert_eq!(ChipType::parse("7400").unwrap(), ChipType::Ic7400);
        assert_eq!(ChipType::parse("74HCT32").unwrap(), ChipType::Ic7432);
        assert_eq!(ChipType::parse(" 74ls139 ").unwrap(), ChipType::Ic74139);
        assert_eq!(ChipType::parse("SN7476N").unwrap(), ChipType::Ic7476);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for name in &["", "7407", "4011", "74LS", "NE555"] {
            assert!(matches!(
                ChipType::parse(name),
                Err(Error::UnknownChipType(_))
            ));
        }
    }

    #[test]
    fn test_display_round_trip() {
        for ty in ChipType::iter() {
            assert_eq!(ChipType::parse(&ty.to_string()).unwrap(), ty);
        }
    }

    #[test]
    fn test_packages() {
        for ty in ChipType::iter() {
            let package = ty.package();
            assert!(package.pins == 14 || package.pins == 16);
            assert_eq!(package.width() * 2, package.pins as usize);
            assert!(package.contains(package.vcc));
            assert!(package.contains(package.gnd));
            assert!(!package.contains(0));
            assert!(!package.contains(package.pins + 1));
        }
        assert_eq!(ChipType::Ic7474.package().width(), 7);
        assert_eq!(ChipType::Ic74153.package().width(), 8);
        assert_eq!(ChipType::Ic7476.package().vcc, 5);
    }
}
