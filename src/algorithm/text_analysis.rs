use crate::{Character, IndexStorage};

use std::cmp::Ordering;
use std::mem;

use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;
use num_traits::NumCast;

pub(crate) struct TextScan<I: IndexStorage> {
    /// One bit per text position, plus one for the virtual sentinel.
    pub s_types: BitVec<I>,
    /// LMS positions, highest first; the leading entry is the virtual sentinel.
    pub lms_positions: Vec<I>,
    /// Per-character occurrence counts, indexed by rank.
    pub histogram: Vec<I>,
}

/// Number of bytes backing the type array of a text of length `text_len`.
pub(crate) fn s_type_backing_bytes<I>(text_len: usize) -> usize {
    (text_len + 1).div_ceil(8 * mem::size_of::<I>()) * mem::size_of::<I>()
}

/// Upper bound for the number of LMS positions: no two can be adjacent, and
/// the virtual sentinel is always emitted.
pub(crate) fn lms_capacity(text_len: usize) -> usize {
    text_len / 2 + 2
}

// A single right-to-left pass decides the type of each position from the type
// of its successor and one character comparison, counts characters into the
// histogram, and emits every S-type position whose predecessor is L-type.
pub(crate) fn scan_types_counts_and_lms<C: Character, I: IndexStorage>(
    text: &[C],
    num_buckets: usize,
) -> TextScan<I> {
    let mut histogram = vec![I::zero(); num_buckets];
    let mut s_types: BitVec<I> = BitVec::repeat(true, text.len() + 1);
    let mut lms_positions = Vec::with_capacity(lms_capacity(text.len()));

    // the virtual sentinel is S-type and smaller than every character
    let mut next_is_s_type = true;
    let mut compared_to_next = Ordering::Greater;

    for position in (0..text.len()).rev() {
        let count = &mut histogram[text[position].rank()];
        *count = *count + I::one();

        let is_s_type = match compared_to_next {
            Ordering::Less => true,
            Ordering::Equal => s_types[position + 1],
            Ordering::Greater => false,
        };
        s_types.set(position, is_s_type);

        if next_is_s_type && !is_s_type {
            lms_positions.push(<I as NumCast>::from(position + 1).unwrap());
        }

        if position == 0 {
            break;
        }

        next_is_s_type = is_s_type;
        compared_to_next = text[position - 1].cmp(&text[position]);
    }

    TextScan {
        s_types,
        lms_positions,
        histogram,
    }
}

// assumes position > 0
#[inline]
pub(crate) fn is_lms<I: IndexStorage>(position: usize, s_types: &BitSlice<I>) -> bool {
    s_types[position] && !s_types[position - 1]
}
