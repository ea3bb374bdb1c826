//! Random source abstraction.

/// Source of uniform random numbers.
///
/// Methods take `&self` so one source can be shared behind an `Arc` between
/// the connectivity holder and the simulated views.
pub trait RandomSource: Send + Sync {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len - 1)
    }
}
