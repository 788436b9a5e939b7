pub(crate) mod buckets;
pub(crate) mod inducing;
pub(crate) mod renaming;
pub(crate) mod text_analysis;


use crate::memory::MemoryGauge;
use crate::{Character, IndexStorage};

use num_traits::NumCast;

// Expects the suffix array buffer to be filled with I::max_value() and of the
// same length as the text. The gauge observes every index array of this level
// and of all recursion levels below it.
pub(crate) fn suffix_array_induced_sort<C: Character, I: IndexStorage>(
    text: &[C],
    max_char: C,
    suffix_array: &mut [I],
    gauge: &MemoryGauge,
) {
    if text.is_empty() {
        return;
    }

    let num_buckets = max_char.rank() + 1;

    let _histogram_claim = gauge.claim_slots::<I>(num_buckets);
    let _s_types_claim = gauge.claim_bytes(text_analysis::s_type_backing_bytes::<I>(text.len()));
    let _lms_claim = gauge.claim_slots::<I>(text_analysis::lms_capacity(text.len()));

    let scan = text_analysis::scan_types_counts_and_lms::<C, I>(text, num_buckets);

    let mut bucket_starts = scan.histogram;
    buckets::histogram_into_bucket_starts(&mut bucket_starts);

    let _cursors_claim = gauge.claim_slots::<I>(num_buckets);
    let mut bucket_cursors = vec![I::zero(); num_buckets];

    // sort the LMS substrings: seeding order within a bucket is irrelevant
    // here, so the text-order LMS list is used directly. Its leading entry is
    // the virtual sentinel, which the induction handles itself.
    inducing::seed_lms_and_induce(
        suffix_array,
        scan.lms_positions.iter().skip(1).copied(),
        &bucket_starts,
        &mut bucket_cursors,
        &scan.s_types,
        text,
    );

    let lms_count = scan.lms_positions.len() - 1;
    let _sorted_lms_claim = gauge.claim_slots::<I>(lms_count);
    let sorted_lms = renaming::sorted_lms_positions(&scan.s_types, suffix_array, lms_count);

    let _positions_claim = gauge.claim_slots::<I>(sorted_lms.len());
    let renaming::ReducedText {
        names,
        distinct_names,
        lms_text_positions,
    } = renaming::name_lms_substrings(&sorted_lms, suffix_array, &scan.s_types, text);

    let _reduced_suffix_array_claim = gauge.claim_slots::<I>(names.len());
    let mut reduced_suffix_array = vec![I::max_value(); names.len()];

    if distinct_names == sorted_lms.len() {
        // every LMS substring is unique: the reduced text consists of distinct
        // characters, whose suffix order is decided by the first character alone
        for (rank, &name) in names.iter().enumerate() {
            reduced_suffix_array[name.as_()] = <I as NumCast>::from(rank).unwrap();
        }
    } else {
        suffix_array_induced_sort(
            names,
            <I as NumCast>::from(distinct_names - 1).unwrap(),
            &mut reduced_suffix_array,
            gauge,
        );
    }

    let lms_in_suffix_order =
        renaming::map_to_text_positions(reduced_suffix_array, &lms_text_positions);

    // re-seed with the now exactly ordered LMS suffixes and induce once more;
    // reversing makes each bucket's tail-downward seeding come out ascending
    suffix_array.fill(I::max_value());

    inducing::seed_lms_and_induce(
        suffix_array,
        lms_in_suffix_order.iter().rev().copied(),
        &bucket_starts,
        &mut bucket_cursors,
        &scan.s_types,
        text,
    );
}
