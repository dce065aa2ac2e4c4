use std::fmt::Display;

use anyhow::Result;
use anyhow::ensure;

/// Immutable input word: display text plus normalized importance.
/// Created by the caller, read-only to the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    pub text: String,
    /// Normalized importance in [0, 1], 1.0 being the most important
    pub weight: f32,
}

impl Word {
    pub fn new(text: impl Into<String>, weight: f32) -> Result<Self> {
        let text = text.into();
        ensure!(!text.is_empty(), "word text must not be empty");
        ensure!(
            weight.is_finite() && (0.0..=1.0).contains(&weight),
            "word weight must lie in [0, 1], got {weight} for {text:?}"
        );
        Ok(Word { text, weight })
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({:.2})", self.text, self.weight)
    }
}
