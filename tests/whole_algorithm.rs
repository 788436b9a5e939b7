use proptest::prelude::*;
use rand::{RngCore, SeedableRng};

use sais_lcp::lcp::{inverse_suffix_array, lcp_kasai, lcp_naive, lcp_phi};
use sais_lcp::{IndexStorage, SaisBuilder};

fn suffix_array_oracle(text: &[u8]) -> Vec<usize> {
    let mut suffix_array: Vec<_> = (0..text.len()).collect();
    suffix_array.sort_unstable_by_key(|&position| &text[position..]);
    suffix_array
}

fn as_usize<I: IndexStorage>(values: &[I]) -> Vec<usize> {
    values.iter().map(|value| value.as_()).collect()
}

fn assert_is_permutation(suffix_array: &[usize]) {
    let mut sorted = suffix_array.to_vec();
    sorted.sort_unstable();
    let expected: Vec<_> = (0..suffix_array.len()).collect();
    assert_eq!(sorted, expected);
}

fn assert_strictly_increasing_suffixes(text: &[u8], suffix_array: &[usize]) {
    for pair in suffix_array.windows(2) {
        assert!(
            text[pair[0]..] < text[pair[1]..],
            "suffixes at {} and {} are out of order",
            pair[0],
            pair[1]
        );
    }
}

// remap stray NUL bytes and terminate with the unique smallest sentinel, as
// the driver does
fn sanitized_with_sentinel(payload: &[u8]) -> Vec<u8> {
    let mut text: Vec<u8> = payload
        .iter()
        .map(|&byte| if byte == 0 { 3 } else { byte })
        .collect();
    text.push(0);
    text
}

fn seeded_random_text(len: usize, seed: u64) -> Vec<u8> {
    let mut payload = vec![0u8; len];
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    rng.fill_bytes(&mut payload);
    sanitized_with_sentinel(&payload)
}

#[test]
fn test_mississippi() {
    let text = b"mississippi\0";
    let suffix_array: Vec<usize> = SaisBuilder::new().construct_suffix_array(text);

    assert_eq!(suffix_array, [11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);

    let expected_lcp = [0, 0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3];
    assert_eq!(lcp_naive(text, &suffix_array), expected_lcp);
    assert_eq!(lcp_kasai(text, &suffix_array), expected_lcp);
    assert_eq!(lcp_phi(text, &suffix_array), expected_lcp);
}

#[test]
fn test_all_equal_characters() {
    let text = b"aaaaaa\0";
    let suffix_array: Vec<usize> = SaisBuilder::new().construct_suffix_array(text);

    assert_eq!(suffix_array, [6, 5, 4, 3, 2, 1, 0]);

    let expected_lcp = [0, 0, 1, 2, 3, 4, 5];
    assert_eq!(lcp_naive(text, &suffix_array), expected_lcp);
    assert_eq!(lcp_kasai(text, &suffix_array), expected_lcp);
    assert_eq!(lcp_phi(text, &suffix_array), expected_lcp);
}

#[test]
fn test_abracadabra() {
    let text = b"abracadabra\0";
    let suffix_array: Vec<usize> = SaisBuilder::new().construct_suffix_array(text);

    assert_eq!(suffix_array, [11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);

    let oracle = lcp_naive(text, &suffix_array);
    assert_eq!(lcp_kasai(text, &suffix_array), oracle);
    assert_eq!(lcp_phi(text, &suffix_array), oracle);
}

#[test]
fn test_sentinel_only() {
    let text = [0u8];
    let suffix_array: Vec<usize> = SaisBuilder::new().construct_suffix_array(&text);

    assert_eq!(suffix_array, [0]);
    assert_eq!(lcp_naive(&text, &suffix_array), [0]);
    assert_eq!(lcp_kasai(&text, &suffix_array), [0]);
    assert_eq!(lcp_phi(&text, &suffix_array), [0]);
}

#[test]
fn test_two_letter_alternation() {
    let mut text = b"ab".repeat(50_000);
    text.push(0);
    let text_len = text.len();

    let suffix_array: Vec<u32> = SaisBuilder::new().construct_suffix_array(&text);

    // the sentinel first, then all suffixes starting with 'a' by increasing
    // length, then the same for 'b'
    let mut expected = Vec::with_capacity(text_len);
    expected.push(text_len as u32 - 1);
    expected.extend((0..=text_len as u32 - 3).rev().step_by(2));
    expected.extend((1..=text_len as u32 - 2).rev().step_by(2));
    assert_eq!(suffix_array, expected);

    let kasai = lcp_kasai(&text, &suffix_array);
    assert_eq!(lcp_phi(&text, &suffix_array), kasai);

    // the longest overlap is between the suffixes at positions 2 and 0
    let max_lcp = kasai.iter().copied().max().unwrap();
    assert_eq!(max_lcp as usize, text_len - 3);
    assert!((max_lcp as usize) <= text_len - 2);
}

#[test]
fn test_random_ten_kibibyte_text() {
    let text = seeded_random_text(10 * 1024, 0x0DDB1A5E5BAD5EED);

    let suffix_array: Vec<u32> = SaisBuilder::new().construct_suffix_array(&text);
    let suffix_array_usize = as_usize(&suffix_array);

    assert_eq!(suffix_array_usize, suffix_array_oracle(&text));
    assert_is_permutation(&suffix_array_usize);
    assert_strictly_increasing_suffixes(&text, &suffix_array_usize);
    assert_eq!(suffix_array[0] as usize, text.len() - 1);

    let naive = lcp_naive(&text, &suffix_array);
    assert_eq!(lcp_kasai(&text, &suffix_array), naive);
    assert_eq!(lcp_phi(&text, &suffix_array), naive);
}

#[test]
fn test_integer_alphabet() {
    let text = [3u32, 1, 4, 1, 5, 0];

    let suffix_array: Vec<usize> = SaisBuilder::new()
        .with_max_char(5u32)
        .construct_suffix_array(&text);

    assert_eq!(suffix_array, [5, 1, 3, 0, 2, 4]);
}

#[test]
fn test_inverse_round_trip() {
    let text = seeded_random_text(2000, 42);

    let suffix_array: Vec<usize> = SaisBuilder::new().construct_suffix_array(&text);
    let inverse = inverse_suffix_array(&suffix_array);

    for position in 0..text.len() {
        assert_eq!(suffix_array[inverse[position]], position);
    }
}

#[test]
fn test_width_invariance() {
    for text in [
        b"mississippi\0".to_vec(),
        seeded_random_text(5000, 7),
        sanitized_with_sentinel(b"abababab"),
    ] {
        let narrow: Vec<u16> = SaisBuilder::new().construct_suffix_array(&text);
        let medium: Vec<u32> = SaisBuilder::new().construct_suffix_array(&text);
        let wide: Vec<u64> = SaisBuilder::new().construct_suffix_array(&text);

        assert_eq!(as_usize(&narrow), as_usize(&medium));
        assert_eq!(as_usize(&medium), as_usize(&wide));
    }
}

proptest! {
    #[test]
    fn matches_oracle_and_lcps_agree(payload in prop::collection::vec(any::<u8>(), 0..300)) {
        let text = sanitized_with_sentinel(&payload);

        let suffix_array: Vec<u32> = SaisBuilder::new().construct_suffix_array(&text);

        prop_assert_eq!(as_usize(&suffix_array), suffix_array_oracle(&text));

        let naive = lcp_naive(&text, &suffix_array);
        prop_assert_eq!(&lcp_kasai(&text, &suffix_array), &naive);
        prop_assert_eq!(&lcp_phi(&text, &suffix_array), &naive);
    }

    #[test]
    fn doesnt_crash_without_sentinel(text in prop::collection::vec(any::<u8>(), 0..100)) {
        let _: Vec<usize> = SaisBuilder::new().construct_suffix_array(&text);
    }
}
