use super::PinRef;
use log::warn;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Jumper wire colors, purely cosmetic.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumString, EnumIter)]
pub enum WireColor {
    #[strum(to_string = "red")]
    Red,
    #[strum(to_string = "black")]
    Black,
    #[strum(to_string = "blue")]
    Blue,
    #[strum(to_string = "green")]
    Green,
    #[strum(to_string = "yellow")]
    Yellow,
    #[strum(to_string = "orange")]
    Orange,
    #[strum(to_string = "white")]
    White,
    #[strum(to_string = "purple")]
    Purple,
    #[strum(to_string = "gray", serialize = "grey")]
    Gray,
}

impl Default for WireColor {
    fn default() -> Self {
        WireColor::Blue
    }
}

impl WireColor {
    /// Parses a color name case insensitively, unknown names get the default color.
    ///
    /// # Example
    /// ```
    /// # use breadboard::WireColor;
    /// assert_eq!(WireColor::lenient("Red"), WireColor::Red);
    /// assert_eq!(WireColor::lenient("grey"), WireColor::Gray);
    /// assert_eq!(WireColor::lenient("chartreuse"), WireColor::Blue);
    /// ```
    pub fn lenient(name: &str) -> WireColor {
        WireColor::from_str(&name.trim().to_ascii_lowercase()).unwrap_or_else(|_| {
            warn!("unknown wire color {:?}, using {}", name, WireColor::default());
            WireColor::default()
        })
    }
}

/// A jumper between two endpoints.
///
/// Electrically a wire has no direction, `source` and `destination` only fix the
/// order in which the wire is drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Wire {
    pub source: PinRef,
    pub destination: PinRef,
    pub color: WireColor,
}

impl Wire {
    pub fn new(source: PinRef, destination: PinRef, color: WireColor) -> Self {
        Self {
            source,
            destination,
            color,
        }
    }

    pub fn endpoints(&self) -> [PinRef; 2] {
        [self.source, self.destination]
    }
}
