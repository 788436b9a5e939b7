use std::cell::Cell;
use std::mem;

const MEBIBYTE: usize = 1 << 20;

/// Byte counter for the working memory of index construction.
///
/// Single-threaded, like the construction itself. Claims are taken out for the
/// lifetime of an array and release their bytes when dropped, so the counter
/// returns to its previous value on every exit path, including recursive
/// returns. The peak is the largest value the counter ever reached.
#[derive(Debug, Default)]
pub struct MemoryGauge {
    current_bytes: Cell<usize>,
    peak_bytes: Cell<usize>,
}

impl MemoryGauge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_bytes(&self) -> usize {
        self.current_bytes.get()
    }

    pub fn peak_bytes(&self) -> usize {
        self.peak_bytes.get()
    }

    /// Peak rounded to the nearest mebibyte.
    pub fn peak_mebibytes(&self) -> usize {
        (self.peak_bytes.get() + MEBIBYTE / 2) / MEBIBYTE
    }

    /// Records an array of `count` elements of type `T`.
    pub fn claim_slots<T>(&self, count: usize) -> AllocationClaim<'_> {
        self.claim_bytes(count * mem::size_of::<T>())
    }

    pub fn claim_bytes(&self, bytes: usize) -> AllocationClaim<'_> {
        let current = self.current_bytes.get() + bytes;
        self.current_bytes.set(current);

        if current > self.peak_bytes.get() {
            self.peak_bytes.set(current);
        }

        AllocationClaim { gauge: self, bytes }
    }
}

/// One live allocation observed by a [`MemoryGauge`].
#[must_use = "dropping the claim immediately releases its bytes"]
#[derive(Debug)]
pub struct AllocationClaim<'g> {
    gauge: &'g MemoryGauge,
    bytes: usize,
}

impl Drop for AllocationClaim<'_> {
    fn drop(&mut self) {
        let current = self.gauge.current_bytes.get();
        self.gauge.current_bytes.set(current - self.bytes);
    }
}
