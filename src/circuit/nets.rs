use super::{PinRef, Wire};
use indexmap::{IndexMap, IndexSet};
use petgraph::unionfind::UnionFind;

/// Groups the endpoints of `wires` into electrical nets.
///
/// Nets and the endpoints inside them keep the order in which they first appear in
/// `wires`, so the result is stable for a given description.
///
/// # Example
/// ```
/// # use breadboard::{nets, PinRef, Wire, WireColor};
/// let wires = [
///     Wire::new(PinRef::chip(0, 3), PinRef::chip(0, 4), WireColor::Blue),
///     Wire::new(PinRef::chip(0, 3), PinRef::chip(0, 5), WireColor::Blue),
///     Wire::new(PinRef::VCC, PinRef::chip(0, 14), WireColor::Red),
/// ];
/// let nets = nets(&wires);
/// assert_eq!(nets.len(), 2);
/// assert_eq!(nets[0], vec![PinRef::chip(0, 3), PinRef::chip(0, 4), PinRef::chip(0, 5)]);
/// ```
pub fn nets(wires: &[Wire]) -> Vec<Vec<PinRef>> {
    let endpoints: IndexSet<PinRef> = wires.iter().flat_map(|w| w.endpoints().to_vec()).collect();

    let mut sets = UnionFind::<usize>::new(endpoints.len());
    for wire in wires {
        if let (Some(a), Some(b)) = (
            endpoints.get_index_of(&wire.source),
            endpoints.get_index_of(&wire.destination),
        ) {
            sets.union(a, b);
        }
    }

    let mut nets: IndexMap<usize, Vec<PinRef>> = IndexMap::new();
    for (i, endpoint) in endpoints.iter().enumerate() {
        nets.entry(sets.find_mut(i)).or_default().push(*endpoint);
    }
    nets.into_iter().map(|(_, net)| net).collect()
}
