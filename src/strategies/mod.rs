//! The pluggable per-word behaviors the engine consumes but never implements
//! itself: four attribute providers queried once per word at construction
//! ([`Sizer`], [`Angler`], [`Fonter`], [`Colorer`]) and two that drive the
//! position search ([`Placer`], [`Nudger`]).
//!
//! Each is a pure function of its stated inputs; the engine never assumes a
//! concrete variant. The variants in this module are reference
//! implementations, callers are expected to bring their own.

mod random_nudger;
mod spiral_nudger;
mod variants;
mod wave_placer;

pub use random_nudger::RandomNudger;
pub use spiral_nudger::SpiralNudger;
pub use variants::{FixedAngler, SingleColorer, SingleFonter, WeightSizer};
pub use wave_placer::WavePlacer;

use crate::entities::Word;
use crate::geometry::primitives::Point;

/// Opaque handle to a font known to the caller's glyph source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub usize);

/// ARGB color value. Fully opaque to the engine, it is only carried along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// CSS hex string of the RGB channels, e.g. `#1a2b3c`.
    pub fn rgb_hex(&self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// Decides the font size for a word.
pub trait Sizer {
    fn size(&self, word: &Word, rank: usize, n_words: usize) -> f32;
}

/// Decides the rotation angle (radians) for a word.
pub trait Angler {
    fn angle(&self, word: &Word, rank: usize, n_words: usize) -> f32;
}

/// Decides the font for a word.
pub trait Fonter {
    fn font(&self, word: &Word, rank: usize, n_words: usize) -> FontId;
}

/// Decides the color for a word.
pub trait Colorer {
    fn color(&self, word: &Word, rank: usize, n_words: usize) -> Color;
}

/// Decides the desired start location for a word: the seed of the nudge
/// search, not necessarily where the word ends up.
///
/// Takes `&mut self` so stochastic variants can carry their own RNG.
pub trait Placer {
    fn place(
        &mut self,
        word: &Word,
        rank: usize,
        n_words: usize,
        word_dims: (f32, f32),
        canvas_dims: (f32, f32),
    ) -> Point;
}

/// Produces, per attempt, the delta to add to the desired location.
pub trait Nudger {
    fn nudge(&mut self, word: &Word, attempt: usize) -> (f32, f32);
}

/// The full complement of strategies handed to the engine at construction.
pub struct StrategySet {
    pub sizer: Box<dyn Sizer>,
    pub angler: Box<dyn Angler>,
    pub fonter: Box<dyn Fonter>,
    pub colorer: Box<dyn Colorer>,
    pub placer: Box<dyn Placer>,
    pub nudger: Box<dyn Nudger>,
}
