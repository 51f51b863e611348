use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

/// Represents the index of a gate in a [LogicBuilder](super::LogicBuilder) or a [Logic](super::Logic).
#[repr(transparent)]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub struct GateIndex {
    pub(super) idx: usize,
}

/// Returns a new GateIndex from a provided usize.
macro_rules! gi {
    ( $x:expr ) => {{
        GateIndex::new($x)
    }};
}

/// The [GateIndex] of the OFF constant in any [LogicBuilder](super::LogicBuilder).
pub const OFF: GateIndex = gi!(0);
/// The [GateIndex] of the ON constant in any [LogicBuilder](super::LogicBuilder).
pub const ON: GateIndex = gi!(1);

impl GateIndex {
    pub(super) const fn new(idx: usize) -> GateIndex {
        GateIndex { idx }
    }
}

impl Display for GateIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.idx)
    }
}

/// The operations a logic program is made of.
#[derive(Clone, Debug, Copy, Eq, PartialEq, Hash)]
pub(super) enum GateType {
    Off,
    On,
    /// Reads the input at the given position of the input vector.
    Input(usize),
    Xor,
    Xnor,
    Not,
    Or,
    And,
    Nand,
    Nor,
    /// The first `address_bits` dependencies are the address, least significant first,
    /// the rest are the data lines.
    Select { address_bits: usize },
}
use GateType::*;

impl GateType {
    /// Folds the state of one more dependency into `acc`.
    /// If the gate [is negated](GateType::is_negated) the result has to be negated afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `self` doesn't combine multiple dependencies.
    #[inline(always)]
    pub fn accumulate(&self, acc: bool, b: bool) -> bool {
        match self {
            Or | Nor => acc | b,
            And | Nand => acc & b,
            Xor | Xnor => acc ^ b,
            On | Off | Input(_) | Not | Select { .. } => {
                unreachable!("Accumulate only works on gates with multiple dependencies")
            }
        }
    }

    /// Returns the value the [accumulation](GateType::accumulate) starts from,
    /// the one that doesn't affect the result.
    #[inline(always)]
    pub fn init(&self) -> bool {
        match self {
            Or | Nor | Xor | Xnor => false,
            And | Nand => true,
            On | Off | Input(_) | Not | Select { .. } => {
                unreachable!("Init only works on gates with multiple dependencies")
            }
        }
    }

    /// Returns true if a single dependency can decide the state of the gate,
    /// one ON dependency for or gates, one OFF dependency for and gates.
    #[inline(always)]
    pub fn short_circuits(&self) -> bool {
        matches!(self, Or | Nor | And | Nand)
    }

    /// Returns true if `self` is [Not], [Nor], [Nand] or [Xnor].
    pub fn is_negated(&self) -> bool {
        matches!(self, Nor | Nand | Not | Xnor)
    }
}

impl Display for GateType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            On => write!(f, "On"),
            Off => write!(f, "Off"),
            Input(i) => write!(f, "Input{}", i),
            Not => write!(f, "Not"),
            Or => write!(f, "Or"),
            Nor => write!(f, "Nor"),
            And => write!(f, "And"),
            Nand => write!(f, "Nand"),
            Xor => write!(f, "Xor"),
            Xnor => write!(f, "Xnor"),
            Select { address_bits } => write!(f, "Select{}", address_bits),
        }
    }
}

/// Amount of dependencies kept in the stack for a gate.
/// If a gate has more than GATE_DEPENDENCIES_TINYVEC_SIZE, they will spill into the heap.
pub(super) const GATE_DEPENDENCIES_TINYVEC_SIZE: usize = 2;

/// A node of the logic program with edges to its dependencies.
///
/// Gates are hashed structurally so that building the same expression twice yields
/// the same [GateIndex].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub(super) struct Gate {
    pub ty: GateType,
    pub dependencies: SmallVec<[GateIndex; GATE_DEPENDENCIES_TINYVEC_SIZE]>,
}

impl Gate {
    pub fn new(
        ty: GateType,
        dependencies: SmallVec<[GateIndex; GATE_DEPENDENCIES_TINYVEC_SIZE]>,
    ) -> Self {
        Gate { ty, dependencies }
    }
}
