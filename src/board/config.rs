use super::Coordinate;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Fixed geometry of the breadboard, in board cells.
///
/// The defaults describe a 64x40 board with the VCC rail on top, the GND rail at the
/// bottom, chips straddling the center channel, the switch bank below the chips and
/// the LED column on the right edge.
///
/// # Example
/// ```
/// # use breadboard::BoardConfig;
/// let config = BoardConfig::from_json(r#"{"switch_spacing": 4.0}"#).unwrap();
/// assert_eq!(config.switch_spacing, 4.0);
/// assert_eq!(config.columns, BoardConfig::default().columns);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
    /// Column of chip position 0.
    pub margin: f64,
    pub vcc_rail_y: f64,
    pub gnd_rail_y: f64,
    /// Row of pins `N+1..=2N`.
    pub chip_top_y: f64,
    /// Row of pins `1..=N`.
    pub chip_bottom_y: f64,
    pub switch_origin: Coordinate,
    pub switch_spacing: f64,
    pub led_origin: Coordinate,
    pub led_spacing: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: 64,
            rows: 40,
            margin: 2.0,
            vcc_rail_y: 2.0,
            gnd_rail_y: 38.0,
            chip_top_y: 18.0,
            chip_bottom_y: 22.0,
            switch_origin: Coordinate::new(4.0, 32.0),
            switch_spacing: 3.0,
            led_origin: Coordinate::new(60.0, 8.0),
            led_spacing: 3.0,
        }
    }
}

impl BoardConfig {
    /// Reads a configuration from JSON, missing fields take their default value.
    pub fn from_json(json: &str) -> Result<BoardConfig> {
        Ok(serde_json::from_str(json)?)
    }

    /// Where wires to the VCC rail are drawn to.
    pub fn vcc_point(&self) -> Coordinate {
        Coordinate::new(self.margin, self.vcc_rail_y)
    }

    /// Where wires to the GND rail are drawn to.
    pub fn gnd_point(&self) -> Coordinate {
        Coordinate::new(self.margin, self.gnd_rail_y)
    }

    pub fn switch_point(&self, index: usize) -> Coordinate {
        Coordinate::new(
            self.switch_origin.x + index as f64 * self.switch_spacing,
            self.switch_origin.y,
        )
    }

    pub fn led_point(&self, index: usize) -> Coordinate {
        Coordinate::new(
            self.led_origin.x,
            self.led_origin.y + index as f64 * self.led_spacing,
        )
    }
}
