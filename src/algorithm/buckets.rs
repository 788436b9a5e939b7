use crate::IndexStorage;

use num_traits::NumCast;

// in-place exclusive prefix sum, turning per-character counts into the
// suffix array offset where each character's bucket begins
pub(crate) fn histogram_into_bucket_starts<I: IndexStorage>(histogram: &mut [I]) {
    let mut sum = I::zero();

    for slot in histogram.iter_mut() {
        let count = *slot;
        *slot = sum;
        sum = sum + count;
    }
}

// inclusive last index of each bucket. An empty bucket gets its start minus
// one, which wraps to I::MAX for leading empty buckets; those slots belong to
// characters that do not occur in the text and are never read.
pub(crate) fn write_bucket_tails<I: IndexStorage>(
    bucket_starts: &[I],
    tails: &mut [I],
    text_len: usize,
) {
    for (tail, &next_start) in tails.iter_mut().zip(&bucket_starts[1..]) {
        *tail = next_start.wrapping_sub(&I::one());
    }

    *tails.last_mut().unwrap() = <I as NumCast>::from(text_len - 1).unwrap();
}
