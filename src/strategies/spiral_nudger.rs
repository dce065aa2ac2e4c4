use crate::entities::Word;
use crate::strategies::Nudger;

/// Deterministic Archimedean spiral: successive attempts sweep outward around
/// the desired location, so early attempts stay close to where the placer
/// asked for and later ones cover progressively more canvas.
pub struct SpiralNudger;

impl Nudger for SpiralNudger {
    fn nudge(&mut self, _word: &Word, attempt: usize) -> (f32, f32) {
        //attempt 0 lands exactly on the desired location
        let theta = attempt as f32 * 0.35;
        let r = 0.75 * theta;

        (r * theta.cos(), r * theta.sin())
    }
}
