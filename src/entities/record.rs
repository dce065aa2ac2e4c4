use crate::entities::Word;
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, TransformableFrom};
use crate::geometry::primitives::{Outline, Point};
use crate::strategies::{Color, FontId};

/// Terminal and transient placement states of a [`WordRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementStatus {
    /// Not yet attempted
    Pending,
    /// Final location found, outline and location are frozen
    Placed,
    /// Will never appear on the canvas (too small, or attempt budget exhausted)
    Skipped,
}

/// Per-word mutable layout state: the engine's working unit.
///
/// All attributes are assigned exactly once at engine construction and never
/// recomputed; only `current`, `posed` and `status` change during the record's
/// own placement attempts.
#[derive(Clone, Debug)]
pub struct WordRecord {
    pub word: Word,
    /// Position in the input ordering; placement order and the
    /// collision-eligibility boundary (a word only collides with lower ranks)
    pub rank: usize,
    pub size: f32,
    pub angle: f32,
    pub font: FontId,
    pub color: Color,
    /// Normalized outline with its bbox corner at the origin.
    /// `None` if the rendered shape was rejected as too small.
    pub base: Option<Outline>,
    /// `base` translated to `current`; refreshed on every placement attempt,
    /// frozen once the record is placed
    pub posed: Option<Outline>,
    /// Start location requested from the placement strategy
    pub desired: Point,
    /// Location under trial, top-left corner of the outline's bbox.
    /// Undefined before the first nudge.
    pub current: Point,
    pub status: PlacementStatus,
}

impl WordRecord {
    pub fn new(
        word: Word,
        rank: usize,
        size: f32,
        angle: f32,
        font: FontId,
        color: Color,
        base: Option<Outline>,
    ) -> Self {
        let status = match base {
            Some(_) => PlacementStatus::Pending,
            None => PlacementStatus::Skipped,
        };
        let posed = base.clone();
        WordRecord {
            word,
            rank,
            size,
            angle,
            font,
            color,
            base,
            posed,
            desired: Point(0.0, 0.0),
            current: Point(0.0, 0.0),
            status,
        }
    }

    /// Moves the trial location to `desired` plus the given delta.
    /// Deltas are always relative to the desired location, they do not accumulate.
    pub fn nudge(&mut self, (dx, dy): (f32, f32)) {
        self.current = Point(self.desired.0 + dx, self.desired.1 + dy);
    }

    /// Rebuilds `posed` as `base` translated to the current trial location.
    pub fn pose(&mut self) {
        let t = Transformation::from_translation(self.current.into());
        if let (Some(base), Some(posed)) = (&self.base, &mut self.posed) {
            posed.transform_from(base, &t);
        }
    }

    /// Exact overlap test between the posed outlines of two records.
    pub fn overlaps(&self, other: &WordRecord) -> bool {
        match (&self.posed, &other.posed) {
            (Some(a), Some(b)) => a.collides_with(b),
            _ => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status != PlacementStatus::Pending
    }
}
