/// Counters gathered while placing words.
///
/// Owned by the engine and handed out by reference: engines in the same
/// process never share instrumentation state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlacementStats {
    /// Attempts discarded because the word fell (partly) outside the canvas
    pub out_of_bounds: usize,
    /// Attempts discarded by the single-slot last-collision cache,
    /// without rescanning all placed words
    pub cache_collisions: usize,
    /// Attempts discarded after a full scan found an overlap
    pub scan_collisions: usize,
    /// Words that reached a final location
    pub words_placed: usize,
    /// Words skipped for any reason (too small, over the cap, budget exhausted)
    pub words_skipped: usize,
}

impl PlacementStats {
    /// Total number of placement attempts that were rejected.
    pub fn rejected_attempts(&self) -> usize {
        self.out_of_bounds + self.cache_collisions + self.scan_collisions
    }
}
