use serde::{Deserialize, Serialize};

/// Configuration for a [`CloudEngine`](crate::engine::CloudEngine),
/// immutable for the engine's lifetime.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct RenderOptions {
    /// Cap on the number of words considered for placement; anything beyond
    /// it is skipped without even building a shape. `None` means no cap.
    #[serde(default)]
    pub max_words: Option<usize>,
    /// Fixed per-word attempt budget. `None` (or 0) derives the budget from
    /// the word's weight: `floor((1 - weight) * 600) + 100`.
    #[serde(default)]
    pub max_attempts: Option<usize>,
    /// Emit a diagnostic log line for every skipped word. Advisory only,
    /// never changes placement outcomes.
    #[serde(default)]
    pub log_skipped: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_words: None,
            max_attempts: None,
            log_skipped: false,
        }
    }
}
