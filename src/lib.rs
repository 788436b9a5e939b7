//! Suffix array and LCP array construction for byte texts.
//!
//! The suffix array is built in linear time with the induced-sorting algorithm
//! (SA-IS) described in the paper [*Two Efficient Algorithms for Linear Time Suffix
//! Array Construction*](https://ieeexplore.ieee.org/document/5582081) by Nong, Zhang
//! and Chan. The [`lcp`] module offers three constructions of the longest common
//! prefix array on top of it.
//!
//! # Example
//! ```
//! use sais_lcp::SaisBuilder;
//! use sais_lcp::lcp::lcp_kasai;
//!
//! let text = b"mississippi\0";
//!
//! let suffix_array: Vec<usize> = SaisBuilder::new().construct_suffix_array(text);
//! let lcp = lcp_kasai(text, &suffix_array);
//!
//! assert_eq!(suffix_array, [11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
//! assert_eq!(lcp, [0, 0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3]);
//! ```

mod algorithm;
pub mod lcp;
mod memory;

pub use memory::{AllocationClaim, MemoryGauge};

use std::marker::PhantomData;

use bitvec::store::BitStore;
use num::Integer;
use num_traits::{AsPrimitive, NumCast, PrimInt, SaturatingSub, WrappingSub};

pub trait Character: Sized + Copy + Ord {
    fn max_char() -> Self;

    fn rank(&self) -> usize;
}

impl<P: PrimInt> Character for P {
    fn max_char() -> Self {
        P::max_value()
    }

    fn rank(&self) -> usize {
        self.to_usize().unwrap()
    }
}

/// Storage type of suffix array entries and of all internal index arrays.
///
/// `I::max_value()` is reserved as the empty-slot marker during construction,
/// so a text must be strictly shorter than it.
pub trait IndexStorage:
    PrimInt + BitStore + AsPrimitive<usize> + WrappingSub + SaturatingSub + Integer
{
}

impl IndexStorage for u8 {}
impl IndexStorage for u16 {}
impl IndexStorage for u32 {}
impl IndexStorage for u64 {}
impl IndexStorage for usize {}

/// Narrowest [`IndexStorage`] width for a given text length.
///
/// Selecting the width by text length roughly halves the working memory of the
/// construction for small and medium inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexWidth {
    U16,
    U32,
    U64,
}

impl IndexWidth {
    /// Chooses the narrowest width whose signed maximum can hold `text_len`.
    pub fn for_text_len(text_len: usize) -> Self {
        if text_len <= i16::MAX as usize {
            Self::U16
        } else if text_len <= i32::MAX as usize {
            Self::U32
        } else {
            Self::U64
        }
    }
}

pub struct SaisBuilder<'g, C = u8, I = usize> {
    max_char: Option<C>,
    gauge: Option<&'g MemoryGauge>,
    _marker: PhantomData<I>,
}

impl<'g, C: Character, I: IndexStorage> SaisBuilder<'g, C, I> {
    pub fn new() -> Self {
        Self {
            max_char: None,
            gauge: None,
            _marker: PhantomData,
        }
    }

    pub fn with_max_char(&mut self, max_char: C) -> &mut Self {
        assert!(max_char.rank() < <usize as NumCast>::from(I::max_value()).unwrap());
        self.max_char = Some(max_char);
        self
    }

    /// Record the working memory of the construction in `gauge`.
    ///
    /// The gauge observes every internal index array across all recursion
    /// levels, including the suffix array buffer itself.
    pub fn with_memory_gauge(&mut self, gauge: &'g MemoryGauge) -> &mut Self {
        self.gauge = Some(gauge);
        self
    }

    pub fn construct_suffix_array(&self, text: &[C]) -> Vec<I> {
        let unobserved = MemoryGauge::new();
        let gauge = self.gauge.unwrap_or(&unobserved);

        let _suffix_array_claim = gauge.claim_slots::<I>(text.len());
        let mut suffix_array = vec![I::max_value(); text.len()];

        algorithm::suffix_array_induced_sort(text, self.get_max_char(), &mut suffix_array, gauge);

        suffix_array
    }

    fn get_max_char(&self) -> C {
        let max_char = self.max_char.unwrap_or(C::max_char());

        if max_char.rank() > u16::MAX as usize {
            unimplemented!(
                "for large alphabets, create a threshold where the text is scanned for max_char"
            );
        }

        max_char
    }
}

impl<'g, C: Character, I: IndexStorage> Default for SaisBuilder<'g, C, I> {
    fn default() -> Self {
        Self::new()
    }
}
