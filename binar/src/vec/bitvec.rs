use crate::bit::{Word, word_count};
use crate::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut};
use sorted_iter::SortedIterator;
use std::ops::{BitAnd, BitOr, BitXor, BitXorAssign, Index};
use std::str::FromStr;

/// A dynamically-sized bit vector.
///
/// `BitVec` stores a sequence of bits packed into 64-bit words. Bits past the
/// logical length are always zero.
///
/// # Construction
///
/// ```
/// use binar::BitVec;
///
/// let zeros = BitVec::zeros(100);
/// let ones = BitVec::ones(100);
/// let from_iter: BitVec = [true, false, true, false].into_iter().collect();
/// let from_support = BitVec::from_support(10, [1, 4, 9]);
/// ```
///
/// # Bit Operations
///
/// ```
/// use binar::{BitVec, Bitwise, BitwiseMut, BitwisePairMut};
///
/// let mut v = BitVec::zeros(10);
/// v.assign_index(3, true);
/// v.assign_index(7, true);
/// assert_eq!(v.weight(), 2);
/// assert_eq!(v.support().collect::<Vec<_>>(), vec![3, 7]);
///
/// v.bitxor_assign(&BitVec::ones(10));
/// assert_eq!(v.weight(), 8);
/// ```
///
/// # See Also
///
/// - [`BitMatrix`](crate::BitMatrix) - 2D matrix of bits, one `BitVec` per row
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVec {
    length: usize,
    words: Vec<Word>,
}

static TRUE: bool = true;
static FALSE: bool = false;

impl BitVec {
    pub fn zeros(length: usize) -> Self {
        Self {
            length,
            words: vec![0; word_count(length)],
        }
    }

    pub fn ones(length: usize) -> Self {
        let mut result = Self {
            length,
            words: vec![Word::MAX; word_count(length)],
        };
        result.clear_padding();
        result
    }

    /// Creates a vector of the given length with ones at the given positions.
    ///
    /// # Panics
    ///
    /// Panics if a position is out of bounds.
    pub fn from_support(length: usize, support: impl IntoIterator<Item = usize>) -> Self {
        let mut result = Self::zeros(length);
        for index in support {
            result.assign_index(index, true);
        }
        result
    }

    /// # Panics
    ///
    /// Panics if `words` is too short to hold `length` bits.
    pub fn from_words(length: usize, words: &[Word]) -> Self {
        let count = word_count(length);
        assert!(words.len() >= count, "{} words cannot hold {length} bits", words.len());
        let mut result = Self {
            length,
            words: words[..count].to_vec(),
        };
        result.clear_padding();
        result
    }

    #[must_use]
    pub fn as_words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        (0..self.length).map(|index| Bitwise::index(self, index))
    }

    /// Appends `other` after the bits of `self`.
    ///
    /// ```
    /// use binar::BitVec;
    ///
    /// let x: BitVec = "101".parse().unwrap();
    /// let z: BitVec = "011".parse().unwrap();
    /// assert_eq!(x.concatenated(&z).to_string(), "101011");
    /// ```
    pub fn concatenated(&self, other: &BitVec) -> Self {
        let mut result = Self::zeros(self.length + other.length);
        result.words[..self.words.len()].copy_from_slice(&self.words);
        for index in other.support() {
            result.assign_index(self.length + index, true);
        }
        result
    }

    /// Copies `length` bits starting at `start` into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if the interval is out of bounds.
    pub fn extract(&self, start: usize, length: usize) -> Self {
        assert!(start + length <= self.length);
        let mut result = Self::zeros(length);
        result.assign_from_interval(self, start, length);
        result
    }

    /// Cyclic shift towards higher indices: bit `i` moves to `(i + shift) mod len`.
    ///
    /// ```
    /// use binar::BitVec;
    ///
    /// let v: BitVec = "1100".parse().unwrap();
    /// assert_eq!(v.rotated(1).to_string(), "0110");
    /// assert_eq!(v.rotated(3).to_string(), "1001");
    /// ```
    pub fn rotated(&self, shift: usize) -> Self {
        if self.length == 0 {
            return self.clone();
        }
        Self::from_support(self.length, self.support().map(|index| (index + shift) % self.length))
    }

    pub fn resize(&mut self, new_length: usize) {
        self.words.resize(word_count(new_length), 0);
        self.length = new_length;
        self.clear_padding();
    }

    fn clear_padding(&mut self) {
        let tail = self.length % (Word::BITS as usize);
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1 << tail) - 1;
            }
        }
    }

    fn assert_same_length(&self, other: &BitVec) {
        assert_eq!(self.length, other.length, "bit vectors must have equal length");
    }
}

impl BitLength for BitVec {
    #[inline]
    fn bit_len(&self) -> usize {
        self.length
    }
}

impl Bitwise for BitVec {
    #[inline]
    fn index(&self, index: usize) -> bool {
        assert!(index < self.length, "index {index} out of bounds for length {}", self.length);
        Bitwise::index(self.words.as_slice(), index)
    }

    fn support(&self) -> impl SortedIterator<Item = usize> {
        self.words.as_slice().support()
    }

    #[inline]
    fn min_support(&self) -> Option<usize> {
        self.words.as_slice().min_support()
    }

    #[inline]
    fn max_support(&self) -> Option<usize> {
        self.words.as_slice().max_support()
    }

    #[inline]
    fn weight(&self) -> usize {
        self.words.as_slice().weight()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.words.as_slice().is_zero()
    }
}

impl BitwiseMut for BitVec {
    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) {
        assert!(index < self.length, "index {index} out of bounds for length {}", self.length);
        self.words.as_mut_slice().assign_index(index, to);
    }

    #[inline]
    fn negate_index(&mut self, index: usize) {
        assert!(index < self.length, "index {index} out of bounds for length {}", self.length);
        self.words.as_mut_slice().negate_index(index);
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.words.as_mut_slice().clear_bits();
    }
}

impl BitwisePair for BitVec {
    #[inline]
    fn dot(&self, other: &Self) -> bool {
        self.assert_same_length(other);
        self.words.as_slice().dot(other.words.as_slice())
    }

    #[inline]
    fn and_weight(&self, other: &Self) -> usize {
        self.assert_same_length(other);
        self.words.as_slice().and_weight(other.words.as_slice())
    }

    #[inline]
    fn or_weight(&self, other: &Self) -> usize {
        self.assert_same_length(other);
        self.words.as_slice().or_weight(other.words.as_slice())
    }

    #[inline]
    fn xor_weight(&self, other: &Self) -> usize {
        self.assert_same_length(other);
        self.words.as_slice().xor_weight(other.words.as_slice())
    }
}

impl BitwisePairMut for BitVec {
    #[inline]
    fn assign(&mut self, other: &Self) {
        self.assert_same_length(other);
        self.words.as_mut_slice().assign(other.words.as_slice());
    }

    #[inline]
    fn bitand_assign(&mut self, other: &Self) {
        self.assert_same_length(other);
        self.words.as_mut_slice().bitand_assign(other.words.as_slice());
    }

    #[inline]
    fn bitor_assign(&mut self, other: &Self) {
        self.assert_same_length(other);
        self.words.as_mut_slice().bitor_assign(other.words.as_slice());
    }

    #[inline]
    fn bitxor_assign(&mut self, other: &Self) {
        self.assert_same_length(other);
        self.words.as_mut_slice().bitxor_assign(other.words.as_slice());
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<Bits: IntoIterator<Item = bool>>(iter: Bits) -> Self {
        let mut words = Vec::new();
        let mut length = 0;
        for bit in iter {
            if length % (Word::BITS as usize) == 0 {
                words.push(0);
            }
            if bit {
                words.as_mut_slice().assign_index(length, true);
            }
            length += 1;
        }
        Self { length, words }
    }
}

impl Index<usize> for BitVec {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        if Bitwise::index(self, index) { &TRUE } else { &FALSE }
    }
}

impl BitXorAssign<&BitVec> for BitVec {
    fn bitxor_assign(&mut self, other: &BitVec) {
        BitwisePairMut::bitxor_assign(self, other);
    }
}

impl BitXor for &BitVec {
    type Output = BitVec;

    fn bitxor(self, other: Self) -> Self::Output {
        let mut clone = self.clone();
        clone ^= other;
        clone
    }
}

impl BitAnd for &BitVec {
    type Output = BitVec;

    fn bitand(self, other: Self) -> Self::Output {
        let mut clone = self.clone();
        BitwisePairMut::bitand_assign(&mut clone, other);
        clone
    }
}

impl BitOr for &BitVec {
    type Output = BitVec;

    fn bitor(self, other: Self) -> Self::Output {
        let mut clone = self.clone();
        BitwisePairMut::bitor_assign(&mut clone, other);
        clone
    }
}

impl std::fmt::Display for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitVec(len={},value={})", self.length, self)
    }
}

/// Parses strings such as `"0110"`; spaces, commas and `-` are ignored.
/// The error is the byte offset of the first unexpected character.
impl FromStr for BitVec {
    type Err = usize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for (offset, char) in s.char_indices() {
            match char {
                '0' | '.' => bits.push(false),
                '1' => bits.push(true),
                ' ' | '-' | ',' => {}
                _ => return Err(offset),
            }
        }
        Ok(bits.into_iter().collect())
    }
}
