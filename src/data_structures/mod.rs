mod bit_iter;
pub use bit_iter::*;
