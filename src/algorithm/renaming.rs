use super::text_analysis;
use crate::{Character, IndexStorage};

use std::cmp;

use bitvec::slice::BitSlice;
use num_traits::NumCast;

// After the first induction, walking the suffix array from low to high visits
// the LMS positions in the order of their LMS substrings.
pub(crate) fn sorted_lms_positions<I: IndexStorage>(
    s_types: &BitSlice<I>,
    suffix_array: &[I],
    lms_count: usize,
) -> Vec<I> {
    let mut sorted = Vec::with_capacity(lms_count);

    for &position in suffix_array {
        if position != I::zero() && text_analysis::is_lms(position.as_(), s_types) {
            sorted.push(position);
        }
    }

    sorted
}

pub(crate) struct ReducedText<'a, I> {
    /// LMS substring names in text order, one per LMS position.
    pub names: &'a [I],
    pub distinct_names: usize,
    /// Text position of each LMS substring, in text order.
    pub lms_text_positions: Vec<I>,
}

// Assigns a name to every LMS substring, adjacent equal substrings sharing
// one. The names are written sparsely into the suffix array buffer (whose
// contents are consumed here) and then compacted to its front.
pub(crate) fn name_lms_substrings<'a, C: Character, I: IndexStorage>(
    sorted_lms: &[I],
    suffix_array: &'a mut [I],
    s_types: &BitSlice<I>,
    text: &[C],
) -> ReducedText<'a, I> {
    if sorted_lms.is_empty() {
        return ReducedText {
            names: &suffix_array[..0],
            distinct_names: 0,
            lms_text_positions: Vec::new(),
        };
    }

    suffix_array.fill(I::max_value());
    let mut current_name = I::zero();

    for pair in sorted_lms.windows(2) {
        suffix_array[pair[0].as_()] = current_name;

        if lms_substrings_differ(pair[0].as_(), pair[1].as_(), s_types, text) {
            current_name = current_name + I::one();
        }
    }

    suffix_array[sorted_lms.last().unwrap().as_()] = current_name;

    let mut lms_text_positions = vec![I::zero(); sorted_lms.len()];
    let mut write_index = 0;

    for read_index in 0..suffix_array.len() {
        let name = suffix_array[read_index];

        if name != I::max_value() {
            suffix_array[write_index] = name;
            lms_text_positions[write_index] = <I as NumCast>::from(read_index).unwrap();
            write_index += 1;
        }
    }

    ReducedText {
        names: &suffix_array[..write_index],
        distinct_names: current_name.as_() + 1,
        lms_text_positions,
    }
}

// Replaces each entry of the reduced suffix array with the text position of
// the LMS substring it names, reusing the buffer.
pub(crate) fn map_to_text_positions<I: IndexStorage>(
    mut reduced_suffix_array: Vec<I>,
    lms_text_positions: &[I],
) -> Vec<I> {
    for entry in &mut reduced_suffix_array {
        *entry = lms_text_positions[entry.as_()];
    }

    reduced_suffix_array
}

// Two LMS substrings are equal only if every character up to and including
// their closing LMS character matches; a substring reaching the end of the
// text is unique because of the virtual sentinel.
pub(crate) fn lms_substrings_differ<C: Character, I: IndexStorage>(
    first: usize,
    second: usize,
    s_types: &BitSlice<I>,
    text: &[C],
) -> bool {
    let mut lower = cmp::min(first, second);
    let mut upper = cmp::max(first, second);

    // an LMS position is never the last text position, so upper + 1 is in bounds
    if text[lower] != text[upper] || text[lower + 1] != text[upper + 1] {
        return true;
    }

    // two LMS positions are never adjacent, so the closing LMS character can
    // appear at offset two at the earliest
    lower += 2;
    upper += 2;

    loop {
        if upper == text.len() {
            return true;
        }

        if text[lower] != text[upper] {
            return true;
        }

        let lower_substring_closed = text_analysis::is_lms(lower, s_types);
        let upper_substring_closed = text_analysis::is_lms(upper, s_types);

        if lower_substring_closed || upper_substring_closed {
            return lower_substring_closed != upper_substring_closed;
        }

        lower += 1;
        upper += 1;
    }
}
