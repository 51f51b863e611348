use super::{route, BoardLayout, Coordinate, Path};
use crate::circuit::{CircuitDescription, Wire};
use log::{debug, warn};

/// A wire of the circuit ready to be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutedWire {
    /// Position of the wire in the description's wire list.
    pub index: usize,
    pub wire: Wire,
    pub from: Coordinate,
    pub to: Coordinate,
    pub path: Path,
}

/// Resolves and routes every wire of `circuit`.
///
/// Wires that point at a chip or pin that doesn't exist, or whose endpoints can't be
/// drawn, are left out without affecting the rest of the board.
pub fn render_wires(circuit: &CircuitDescription, board: &BoardLayout) -> Vec<RoutedWire> {
    circuit
        .wires
        .iter()
        .enumerate()
        .filter_map(|(index, wire)| {
            let resolved = board
                .resolve(&wire.source)
                .and_then(|from| board.resolve(&wire.destination).map(|to| (from, to)));
            let (from, to) = match resolved {
                Ok(points) => points,
                Err(e) => {
                    warn!("skipping wire {} of {:?}: {}", index, circuit.title, e);
                    return None;
                }
            };
            let path = match route(from, to) {
                Some(path) => path,
                None => {
                    debug!(
                        "wire {} of {:?} is not drawable yet, {:?} -> {:?}",
                        index, circuit.title, from, to
                    );
                    return None;
                }
            };
            Some(RoutedWire {
                index,
                wire: *wire,
                from,
                to,
                path,
            })
        })
        .collect()
}
