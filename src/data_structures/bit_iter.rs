/// Returns the index and mask necessary to access the bit at `index` in a ```&[u64]```.
///
/// # Example
///
/// ```
/// # use breadboard::data_structures::word_mask_64;
/// let word_slice = [0u64, 1u64];
/// let bit_index = 64;
///
/// let (word_index, mask) = word_mask_64(bit_index);
/// let bit_set = (word_slice[word_index] & mask) != 0;
///
/// assert_eq!(bit_set, true);
/// ```
pub fn word_mask_64(index: usize) -> (usize, u64) {
    let word = index / 64;
    let mask = 1 << (index % 64);
    (word, mask)
}

/// Iterates over the lowest `width` bits of a word, least significant bit first.
///
/// Bits past the 64th read as false.
///
/// # Example
/// ```
/// # use breadboard::data_structures::BitIter;
/// let bits: Vec<bool> = BitIter::new(0b101, 4).collect();
/// assert_eq!(bits, vec![true, false, true, false]);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BitIter {
    word: u64,
    width: usize,
    i: usize,
}

impl BitIter {
    /// Returns a new [BitIter] over the lowest `width` bits of `word`.
    pub fn new(word: u64, width: usize) -> Self {
        Self { word, width, i: 0 }
    }
}

impl Iterator for BitIter {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.width {
            return None;
        }

        let (word_index, word_mask) = word_mask_64(self.i);
        let result = word_index == 0 && self.word & word_mask != 0;
        self.i += 1;

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.width - self.i;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitIter {}

/// Iterates over every input vector of a given width in counting order,
/// input 0 being the least significant bit.
///
/// # Example
/// ```
/// # use breadboard::data_structures::InputCombinations;
/// let all: Vec<Vec<bool>> = InputCombinations::new(2).collect();
/// assert_eq!(
///     all,
///     vec![
///         vec![false, false],
///         vec![true, false],
///         vec![false, true],
///         vec![true, true],
///     ]
/// );
/// ```
///
/// # Panics
///
/// Will panic if `width` >= 64, such a table would never finish anyway.
#[derive(Debug, Clone)]
pub struct InputCombinations {
    width: usize,
    next: u64,
    end: u64,
}

impl InputCombinations {
    pub fn new(width: usize) -> Self {
        assert!(width < 64, "can't enumerate {} inputs", width);
        Self {
            width,
            next: 0,
            end: 1 << width,
        }
    }
}

impl Iterator for InputCombinations {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let bits = BitIter::new(self.next, self.width).collect();
        self.next += 1;
        Some(bits)
    }
}

/// Collects `bits` into an unsigned integer, `bits[0]` being the least significant bit.
///
/// Bits past the 64th are ignored.
///
/// # Example
/// ```
/// # use breadboard::data_structures::collect_u64_lossy;
/// assert_eq!(collect_u64_lossy(&[true, true, false, false]), 3);
/// ```
pub fn collect_u64_lossy(bits: &[bool]) -> u64 {
    let mut output = 0;
    let mut mask = 1;

    for bit in bits.iter().take(64) {
        if *bit {
            output |= mask
        }

        mask <<= 1;
    }

    output
}
