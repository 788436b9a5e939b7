//! Longest common prefix array construction.
//!
//! `lcp[0]` is always 0; `lcp[i]` for `i ≥ 1` is the length of the longest
//! common prefix of the suffixes at `suffix_array[i - 1]` and
//! `suffix_array[i]`.
//!
//! [`lcp_naive`] and [`lcp_kasai`] accept any text with a valid suffix array.
//! [`lcp_phi`] additionally expects the text to end with a unique smallest
//! character (the sentinel convention of the byte-text driver): its wrap-around
//! Phi seed is only harmless when that seed belongs to the last text position.

use crate::{Character, IndexStorage};

use num_traits::NumCast;

/// Inverts a suffix array into suffix ranks: `isa[sa[rank]] = rank`.
pub fn inverse_suffix_array<I: IndexStorage>(suffix_array: &[I]) -> Vec<I> {
    let mut inverse = vec![I::zero(); suffix_array.len()];

    for (rank, &position) in suffix_array.iter().enumerate() {
        inverse[position.as_()] = <I as NumCast>::from(rank).unwrap();
    }

    inverse
}

/// Character-by-character comparison of adjacent suffixes.
///
/// Quadratic in the worst case; serves as the oracle for the linear
/// constructions and is perfectly fine for small inputs.
pub fn lcp_naive<C: Character, I: IndexStorage>(text: &[C], suffix_array: &[I]) -> Vec<I> {
    let mut lcp = Vec::with_capacity(suffix_array.len());
    lcp.extend(suffix_array.first().map(|_| I::zero()));

    for pair in suffix_array.windows(2) {
        let common = text[pair[0].as_()..]
            .iter()
            .zip(&text[pair[1].as_()..])
            .take_while(|(left, right)| left == right)
            .count();

        lcp.push(<I as NumCast>::from(common).unwrap());
    }

    lcp
}

/// Amortized linear-time construction via the inverse suffix array, after
/// Kasai et al.
///
/// Scans the text in position order; the common prefix length shrinks by at
/// most one between consecutive positions, so re-extension work is amortized
/// over the whole text.
pub fn lcp_kasai<C: Character, I: IndexStorage>(text: &[C], suffix_array: &[I]) -> Vec<I> {
    let inverse = inverse_suffix_array(suffix_array);
    let mut lcp = vec![I::zero(); suffix_array.len()];

    let mut common = 0;
    for (position, &rank) in inverse.iter().enumerate() {
        if rank == I::zero() {
            common = 0;
            continue;
        }

        let preceding = suffix_array[rank.as_() - 1].as_();
        common = common_prefix_from(text, position, preceding, common);

        lcp[rank.as_()] = <I as NumCast>::from(common).unwrap();
        common = common.saturating_sub(1);
    }

    lcp
}

/// Linear-time construction via the Phi array.
///
/// Phi maps each text position to the position of its lexicographic
/// predecessor suffix. A single text-order scan computes the permuted LCP
/// values in place, which a final pass gathers into suffix array order.
pub fn lcp_phi<C: Character, I: IndexStorage>(text: &[C], suffix_array: &[I]) -> Vec<I> {
    if suffix_array.is_empty() {
        return Vec::new();
    }

    // the first suffix has no predecessor; it receives the last one as a
    // placeholder whose value is dropped by the gather below
    let mut phi = vec![I::zero(); suffix_array.len()];
    phi[suffix_array[0].as_()] = *suffix_array.last().unwrap();

    for pair in suffix_array.windows(2) {
        phi[pair[1].as_()] = pair[0];
    }

    let mut common = 0;
    for position in 0..phi.len() {
        let preceding = phi[position].as_();
        common = common_prefix_from(text, position, preceding, common);

        phi[position] = <I as NumCast>::from(common).unwrap();
        common = common.saturating_sub(1);
    }

    let mut lcp = Vec::with_capacity(suffix_array.len());
    lcp.push(I::zero());

    for &position in &suffix_array[1..] {
        lcp.push(phi[position.as_()]);
    }

    lcp
}

// extends a known common prefix of the suffixes at `first` and `second`
fn common_prefix_from<C: Character>(
    text: &[C],
    first: usize,
    second: usize,
    already_matching: usize,
) -> usize {
    let mut common = already_matching;

    while first + common < text.len()
        && second + common < text.len()
        && text[first + common] == text[second + common]
    {
        common += 1;
    }

    common
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEXT: &[u8] = b"mississippi\0";
    static SUFFIX_ARRAY: &[usize] = &[11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2];
    static LCP: &[usize] = &[0, 0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3];

    #[test]
    fn test_inverse_suffix_array() {
        let inverse = inverse_suffix_array(SUFFIX_ARRAY);

        assert_eq!(inverse, [5, 4, 11, 9, 3, 10, 8, 2, 7, 6, 1, 0]);

        for (position, &rank) in inverse.iter().enumerate() {
            assert_eq!(SUFFIX_ARRAY[rank], position);
        }
    }

    #[test]
    fn test_lcp_naive() {
        assert_eq!(lcp_naive(TEXT, SUFFIX_ARRAY), LCP);
    }

    #[test]
    fn test_lcp_kasai() {
        assert_eq!(lcp_kasai(TEXT, SUFFIX_ARRAY), LCP);
    }

    #[test]
    fn test_lcp_phi() {
        assert_eq!(lcp_phi(TEXT, SUFFIX_ARRAY), LCP);
    }

    #[test]
    fn test_single_sentinel_text() {
        let text = [0u8];
        let suffix_array = [0usize];

        assert_eq!(lcp_naive(&text, &suffix_array), [0]);
        assert_eq!(lcp_kasai(&text, &suffix_array), [0]);
        assert_eq!(lcp_phi(&text, &suffix_array), [0]);
    }

    #[test]
    fn test_empty() {
        let text: [u8; 0] = [];
        let suffix_array: [usize; 0] = [];

        assert_eq!(lcp_naive(&text, &suffix_array), [] as [usize; 0]);
        assert_eq!(lcp_kasai(&text, &suffix_array), [] as [usize; 0]);
        assert_eq!(lcp_phi(&text, &suffix_array), [] as [usize; 0]);
    }
}
