use super::buckets;
use crate::{Character, IndexStorage};

use bitvec::slice::BitSlice;
use num_traits::NumCast;

// Seeds the given LMS positions into the tails of their buckets and runs both
// induction passes. Expects every non-seeded slot of the suffix array to hold
// I::max_value(). The seeding order decides the relative order of LMS suffixes
// within a bucket: the last seeded position lands lowest.
pub(crate) fn seed_lms_and_induce<C: Character, I: IndexStorage>(
    suffix_array: &mut [I],
    lms_positions: impl IntoIterator<Item = I>,
    bucket_starts: &[I],
    bucket_cursors: &mut [I],
    s_types: &BitSlice<I>,
    text: &[C],
) {
    buckets::write_bucket_tails(bucket_starts, bucket_cursors, text.len());

    for position in lms_positions {
        let tail = &mut bucket_cursors[text[position.as_()].rank()];

        suffix_array[tail.as_()] = position;

        // the lowest slot of the first bucket would underflow; the cursor is
        // never read again after that placement, so saturating is fine
        *tail = tail.saturating_sub(I::one());
    }

    induce(suffix_array, bucket_starts, bucket_cursors, s_types, text);
}

// Two bucket-respecting passes over the suffix array: left to right induces
// L-type suffixes at bucket heads, right to left induces S-type suffixes at
// bucket tails.
pub(crate) fn induce<C: Character, I: IndexStorage>(
    suffix_array: &mut [I],
    bucket_starts: &[I],
    bucket_cursors: &mut [I],
    s_types: &BitSlice<I>,
    text: &[C],
) {
    bucket_cursors.copy_from_slice(bucket_starts);

    // the virtual sentinel would occupy the very first suffix array slot, so
    // the suffix before it is induced ahead of the scan
    let last_position = <I as NumCast>::from(text.len() - 1).unwrap();
    write_at_bucket_head(last_position, suffix_array, bucket_cursors, text);

    for read_index in 0..suffix_array.len() {
        let position = suffix_array[read_index];

        if position == I::max_value()
            || position == I::zero()
            || s_types[position.as_() - 1]
        {
            continue;
        }

        write_at_bucket_head(position - I::one(), suffix_array, bucket_cursors, text);
    }

    buckets::write_bucket_tails(bucket_starts, bucket_cursors, text.len());

    for read_index in (0..suffix_array.len()).rev() {
        let position = suffix_array[read_index];

        // no empty check needed: every slot has been written by now, L-type
        // in the previous scan and S-type earlier in this one
        if position == I::zero() || !s_types[position.as_() - 1] {
            continue;
        }

        write_at_bucket_tail(position - I::one(), suffix_array, bucket_cursors, text);
    }

    // the virtual sentinel induces nothing in the right-to-left scan, the
    // character before it is always L-type
}

fn write_at_bucket_head<C: Character, I: IndexStorage>(
    position: I,
    suffix_array: &mut [I],
    bucket_cursors: &mut [I],
    text: &[C],
) {
    let head = &mut bucket_cursors[text[position.as_()].rank()];

    suffix_array[head.as_()] = position;
    *head = *head + I::one();
}

fn write_at_bucket_tail<C: Character, I: IndexStorage>(
    position: I,
    suffix_array: &mut [I],
    bucket_cursors: &mut [I],
    text: &[C],
) {
    let tail = &mut bucket_cursors[text[position.as_()].rank()];

    suffix_array[tail.as_()] = position;
    *tail = tail.saturating_sub(I::one());
}
