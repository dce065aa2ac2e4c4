//! Shared fixtures: a deterministic glyph source that renders every glyph as
//! a solid box, plus a handful of predictable strategies. No font backend is
//! needed to exercise the engine.
#![allow(dead_code)]

use anyhow::Result;

use wordnest::entities::Word;
use wordnest::geometry::primitives::{Contour, Outline, Point, Rect};
use wordnest::shaper::GlyphSource;
use wordnest::strategies::{
    Color, FixedAngler, FontId, Nudger, Placer, SingleColorer, SingleFonter, StrategySet,
    WeightSizer,
};

/// Renders each non-whitespace character as a solid `0.6 * size` x `size`
/// box, advancing `0.7 * size` per character. Deterministic by construction.
pub struct BlockGlyphs;

impl GlyphSource for BlockGlyphs {
    fn raw_outline(&self, text: &str, _font: FontId, size: f32) -> Result<Outline> {
        let glyph_w = size * 0.6;
        let advance = size * 0.7;

        let mut contours = vec![];
        let mut x = 0.0;
        for ch in text.chars() {
            if !ch.is_whitespace() {
                contours.push(Contour::from(Rect::try_new(x, 0.0, x + glyph_w, size)?));
            }
            x += advance;
        }
        Outline::new(contours)
    }
}

/// Ignores text, font and size: always returns a single box at a fixed spot.
/// Lets tests dial in exact outline dimensions.
pub struct BoxGlyphs {
    pub x_min: f32,
    pub y_min: f32,
    pub width: f32,
    pub height: f32,
}

impl BoxGlyphs {
    pub fn sized(width: f32, height: f32) -> Self {
        BoxGlyphs {
            x_min: 0.0,
            y_min: 0.0,
            width,
            height,
        }
    }
}

impl GlyphSource for BoxGlyphs {
    fn raw_outline(&self, _text: &str, _font: FontId, _size: f32) -> Result<Outline> {
        let rect = Rect::try_new(
            self.x_min,
            self.y_min,
            self.x_min + self.width,
            self.y_min + self.height,
        )?;
        Ok(Outline::from(rect))
    }
}

/// Centers the word's bounding box on the canvas, whatever the word.
pub struct CenterPlacer;

impl Placer for CenterPlacer {
    fn place(
        &mut self,
        _word: &Word,
        _rank: usize,
        _n_words: usize,
        (word_w, word_h): (f32, f32),
        (canvas_w, canvas_h): (f32, f32),
    ) -> Point {
        Point(
            ((canvas_w - word_w) / 2.0).round(),
            ((canvas_h - word_h) / 2.0).round(),
        )
    }
}

/// Never moves the word off its desired location.
pub struct ZeroNudger;

impl Nudger for ZeroNudger {
    fn nudge(&mut self, _word: &Word, _attempt: usize) -> (f32, f32) {
        (0.0, 0.0)
    }
}

/// Pushes every attempt far outside the canvas.
pub struct EjectNudger;

impl Nudger for EjectNudger {
    fn nudge(&mut self, _word: &Word, _attempt: usize) -> (f32, f32) {
        (-1e6, -1e6)
    }
}

pub fn word(text: &str, weight: f32) -> Word {
    Word::new(text, weight).unwrap()
}

/// A full strategy set with fixed attributes and the given search behaviors.
pub fn strategies(placer: Box<dyn Placer>, nudger: Box<dyn Nudger>) -> StrategySet {
    StrategySet {
        sizer: Box::new(WeightSizer {
            min: 14.0,
            max: 24.0,
        }),
        angler: Box::new(FixedAngler(0.0)),
        fonter: Box::new(SingleFonter(FontId(0))),
        colorer: Box::new(SingleColorer(Color(0xff20_4060))),
        placer,
        nudger,
    }
}
