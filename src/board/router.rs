use super::Coordinate;
use smallvec::{smallvec, SmallVec};
use std::fmt::Write;

/// Height offsets available to the middle segment, in cells.
const JITTER_STEPS: i64 = 5;
const JITTER_STEP: f64 = 0.25;

/// Offset of the middle segment for a wire starting at column `x`.
///
/// Wires starting in neighbouring columns get different offsets so that parallel
/// wires don't end up drawn on top of each other.
fn jitter(x: f64) -> f64 {
    let step = (x.floor() as i64).rem_euclid(JITTER_STEPS) - JITTER_STEPS / 2;
    step as f64 * JITTER_STEP
}

/// A drawable wire: a vertical, a horizontal and a vertical segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub points: SmallVec<[Coordinate; 4]>,
}

impl Path {
    /// Returns the path as the `d` attribute of an SVG `<path>`, scaled by `cell` pixels per cell.
    ///
    /// # Example
    /// ```
    /// # use breadboard::{route, Coordinate};
    /// let path = route(Coordinate::new(2.0, 2.0), Coordinate::new(4.0, 6.0)).unwrap();
    /// assert_eq!(path.svg_data(10.0), "M 20 20 L 20 40 L 40 40 L 40 60");
    /// ```
    pub fn svg_data(&self, cell: f64) -> String {
        let mut d = String::new();
        for (i, point) in self.points.iter().enumerate() {
            let command = if i == 0 { "M" } else { " L" };
            // Writing to a String can't fail.
            let _ = write!(d, "{} {} {}", command, point.x * cell, point.y * cell);
        }
        d
    }
}

/// Routes a wire between two points.
///
/// Returns None if either point [is not resolved](Coordinate::is_resolved),
/// such wires are not drawn at all.
///
/// # Example
/// ```
/// # use breadboard::{route, Coordinate};
/// let path = route(Coordinate::new(12.0, 22.0), Coordinate::new(30.0, 18.0)).unwrap();
/// assert_eq!(path.points.len(), 4);
/// assert_eq!(path.points[1].x, 12.0);
/// assert_eq!(path.points[2].x, 30.0);
/// assert_eq!(path.points[1].y, path.points[2].y);
///
/// assert!(route(Coordinate::new(0.0, 22.0), Coordinate::new(30.0, 18.0)).is_none());
/// ```
pub fn route(p1: Coordinate, p2: Coordinate) -> Option<Path> {
    if !p1.is_resolved() || !p2.is_resolved() {
        return None;
    }
    let middle = (p1.y + p2.y) / 2.0 + jitter(p1.x);
    Some(Path {
        points: smallvec![
            p1,
            Coordinate::new(p1.x, middle),
            Coordinate::new(p2.x, middle),
            p2
        ],
    })
}
