use std::f32::consts::PI;

use crate::entities::Word;
use crate::geometry::primitives::Point;
use crate::strategies::Placer;

/// Sweeps words from the top-left to the bottom-right of the canvas along a
/// sine wave: x is rank interpolated across the canvas width, y is that same
/// interpolation plus a sine offset of amplitude up to a third of the canvas
/// height, with the wave's phase running from π down to −π over the ranks.
pub struct WavePlacer;

impl Placer for WavePlacer {
    fn place(
        &mut self,
        _word: &Word,
        rank: usize,
        n_words: usize,
        _word_dims: (f32, f32),
        (canvas_w, canvas_h): (f32, f32),
    ) -> Point {
        let t = rank as f32 / n_words as f32;

        let phase = PI + t * (-PI - PI);
        let sin_offset = phase.sin() * (canvas_h / 3.0);

        let x = t * canvas_w;
        let y = t * canvas_h + sin_offset;

        Point(x.round(), y.round())
    }
}
