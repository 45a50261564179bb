use crate::{Bitwise, BitwiseMut, BitwisePair, BitwisePairMut};
use sorted_iter::SortedIterator;
use sorted_iter::assume::AssumeSortedByItemExt;

pub type Word = u64;

const WORD_BIT_LEN: usize = Word::BITS as usize;

/// Number of words needed to hold `bit_count` bits.
#[inline]
#[must_use]
pub fn word_count(bit_count: usize) -> usize {
    bit_count.div_ceil(WORD_BIT_LEN)
}

#[inline]
fn word_and_bit_index(index: usize) -> (usize, usize) {
    (index / WORD_BIT_LEN, index % WORD_BIT_LEN)
}

struct WordSupport<'life> {
    words: &'life [Word],
    word_index: usize,
    remaining: Word,
}

impl Iterator for WordSupport<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.remaining == 0 {
            self.word_index += 1;
            self.remaining = *self.words.get(self.word_index)?;
        }
        let bit_index = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        Some(self.word_index * WORD_BIT_LEN + bit_index)
    }
}

fn word_support(words: &[Word]) -> impl SortedIterator<Item = usize> + '_ {
    WordSupport {
        words,
        word_index: 0,
        remaining: words.first().copied().unwrap_or(0),
    }
    .assume_sorted_by_item()
}

// Bits beyond the logical length of the owner are kept at zero, so whole-word
// operations below never need masking.

impl Bitwise for [Word] {
    #[inline]
    fn index(&self, index: usize) -> bool {
        let (word_index, bit_index) = word_and_bit_index(index);
        (self[word_index] >> bit_index) & 1 == 1
    }

    fn support(&self) -> impl SortedIterator<Item = usize> {
        word_support(self)
    }

    #[inline]
    fn min_support(&self) -> Option<usize> {
        let (word_index, word) = self.iter().enumerate().find(|(_, word)| **word != 0)?;
        Some(word_index * WORD_BIT_LEN + word.trailing_zeros() as usize)
    }

    #[inline]
    fn max_support(&self) -> Option<usize> {
        let (word_index, word) = self.iter().enumerate().rev().find(|(_, word)| **word != 0)?;
        Some(word_index * WORD_BIT_LEN + (WORD_BIT_LEN - 1 - word.leading_zeros() as usize))
    }

    #[inline]
    fn weight(&self) -> usize {
        self.iter().map(|word| word.count_ones() as usize).sum()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.iter().all(|word| *word == 0)
    }
}

impl BitwiseMut for [Word] {
    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) {
        let (word_index, bit_index) = word_and_bit_index(index);
        let mask = 1 << bit_index;
        if to {
            self[word_index] |= mask;
        } else {
            self[word_index] &= !mask;
        }
    }

    #[inline]
    fn negate_index(&mut self, index: usize) {
        let (word_index, bit_index) = word_and_bit_index(index);
        self[word_index] ^= 1 << bit_index;
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.fill(0);
    }
}

impl BitwisePair for [Word] {
    #[inline]
    fn dot(&self, other: &Self) -> bool {
        let ones: u32 = self.iter().zip(other).map(|(left, right)| (left & right).count_ones()).sum();
        ones % 2 == 1
    }

    #[inline]
    fn and_weight(&self, other: &Self) -> usize {
        zip_weight(self, other, |left, right| left & right)
    }

    #[inline]
    fn or_weight(&self, other: &Self) -> usize {
        zip_weight(self, other, |left, right| left | right)
    }

    #[inline]
    fn xor_weight(&self, other: &Self) -> usize {
        zip_weight(self, other, |left, right| left ^ right)
    }
}

impl BitwisePairMut for [Word] {
    #[inline]
    fn assign(&mut self, other: &Self) {
        self.copy_from_slice(other);
    }

    #[inline]
    fn bitand_assign(&mut self, other: &Self) {
        self.iter_mut().zip(other).for_each(|(left, right)| *left &= right);
    }

    #[inline]
    fn bitor_assign(&mut self, other: &Self) {
        self.iter_mut().zip(other).for_each(|(left, right)| *left |= right);
    }

    #[inline]
    fn bitxor_assign(&mut self, other: &Self) {
        self.iter_mut().zip(other).for_each(|(left, right)| *left ^= right);
    }
}

fn zip_weight(left: &[Word], right: &[Word], combine: impl Fn(Word, Word) -> Word) -> usize {
    left.iter()
        .zip(right)
        .map(|(left, right)| combine(*left, *right).count_ones() as usize)
        .sum()
}

#[test]
fn support_spans_words() {
    let words: [Word; 3] = [0b101, 0, 1 << 63];
    let support: Vec<usize> = words.support().collect();
    assert_eq!(support, vec![0, 2, 191]);
    assert_eq!(words.min_support(), Some(0));
    assert_eq!(words.max_support(), Some(191));
    assert_eq!(words.weight(), 3);
}

#[test]
fn empty_support() {
    let words: [Word; 0] = [];
    assert_eq!(words.support().count(), 0);
    assert_eq!(words.max_support(), None);
    assert!(words.is_zero());
}
