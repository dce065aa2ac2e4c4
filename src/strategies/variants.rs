use crate::entities::Word;
use crate::strategies::{Angler, Color, Colorer, FontId, Fonter, Sizer};

/// Linear interpolation between `min` and `max` font size by word weight.
pub struct WeightSizer {
    pub min: f32,
    pub max: f32,
}

impl Sizer for WeightSizer {
    fn size(&self, word: &Word, _rank: usize, _n_words: usize) -> f32 {
        self.min + (self.max - self.min) * word.weight
    }
}

/// Constant rotation angle for every word; `FixedAngler(0.0)` keeps all words horizontal.
pub struct FixedAngler(pub f32);

impl Angler for FixedAngler {
    fn angle(&self, _word: &Word, _rank: usize, _n_words: usize) -> f32 {
        self.0
    }
}

/// Single font for every word.
pub struct SingleFonter(pub FontId);

impl Fonter for SingleFonter {
    fn font(&self, _word: &Word, _rank: usize, _n_words: usize) -> FontId {
        self.0
    }
}

/// Single color for every word.
pub struct SingleColorer(pub Color);

impl Colorer for SingleColorer {
    fn color(&self, _word: &Word, _rank: usize, _n_words: usize) -> Color {
        self.0
    }
}
