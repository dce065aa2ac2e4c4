//! The ordered, stateful placement loop: one word at a time, in rank order,
//! each word nudged around its desired location until it fits or its attempt
//! budget runs out.

mod stats;

pub use stats::PlacementStats;

use anyhow::Result;
use anyhow::ensure;
use log::{debug, info};

use crate::canvas::{Canvas, Compositing};
use crate::config::RenderOptions;
use crate::entities::{PlacementStatus, Word, WordRecord};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Outline, Point};
use crate::shaper::{GlyphSource, WordShaper};
use crate::strategies::{Color, StrategySet};

/// Per-word attempt budget derived from its weight: lower-weight words get
/// fewer attempts, biasing success toward the words that matter most, while
/// everything still gets at least 100 tries.
///
/// weight 1.0 -> 100 attempts, weight 0.0 -> 700 attempts.
pub fn attempt_budget(weight: f32) -> usize {
    ((1.0 - weight) * 600.0) as usize + 100
}

/// View of a finalized word: everything a caller needs to composite it.
pub struct PlacedWord<'a> {
    pub word: &'a Word,
    /// Outline in canvas coordinates
    pub outline: &'a Outline,
    /// Top-left corner of the outline's bounding box
    pub location: Point,
    pub color: Color,
}

/// The word cloud layout engine.
///
/// All shapes are built up front at construction; [`CloudEngine::advance_one`]
/// then settles one word per call (placed or skipped), letting a caller
/// render incrementally between steps. [`CloudEngine::advance_all`] drains
/// the rest.
pub struct CloudEngine {
    canvas: Canvas,
    strategies: StrategySet,
    options: RenderOptions,
    /// One record per retained word, in rank order
    records: Vec<WordRecord>,
    /// Index of the next record to consider
    cursor: usize,
    /// Every word that will never appear on the canvas, in the order the
    /// decision was made
    skipped: Vec<Word>,
    stats: PlacementStats,
}

impl CloudEngine {
    /// Builds all word shapes and readies the engine. No placement happens yet.
    ///
    /// Fails if the canvas cannot composite outlines directly or a shape
    /// cannot be produced; per-word rejections (too small, over the cap) are
    /// recorded as skips, not errors.
    pub fn new(
        canvas: Canvas,
        words: Vec<Word>,
        mut strategies: StrategySet,
        glyphs: &dyn GlyphSource,
        options: RenderOptions,
    ) -> Result<Self> {
        ensure!(
            canvas.compositing == Compositing::Vector,
            "canvas does not support direct outline compositing, a {:?} destination is required",
            Compositing::Vector
        );

        let shaper = WordShaper::new(glyphs);
        let n_words = words.len();
        let cap = options.max_words.unwrap_or(n_words).min(n_words);

        let mut records = Vec::with_capacity(cap);
        let mut skipped = vec![];
        let mut stats = PlacementStats::default();

        let mut words = words.into_iter();
        for (rank, word) in words.by_ref().take(cap).enumerate() {
            let size = strategies.sizer.size(&word, rank, n_words);
            let angle = strategies.angler.angle(&word, rank, n_words);
            let font = strategies.fonter.font(&word, rank, n_words);
            let color = strategies.colorer.color(&word, rank, n_words);

            let base = shaper.shape(&word.text, font, size, angle)?;
            if base.is_none() {
                if options.log_skipped {
                    info!("[SHAPE] too small: {word}");
                }
                skipped.push(word.clone());
                stats.words_skipped += 1;
            }
            records.push(WordRecord::new(word, rank, size, angle, font, color, base));
        }
        //everything over the cap is skipped without building a shape
        for word in words {
            if options.log_skipped {
                info!("[SHAPE] over the limit: {word}");
            }
            skipped.push(word);
            stats.words_skipped += 1;
        }

        Ok(Self {
            canvas,
            strategies,
            options,
            records,
            cursor: 0,
            skipped,
            stats,
        })
    }

    /// True while at least one word still awaits a placement attempt.
    pub fn has_more(&self) -> bool {
        self.records[self.cursor..]
            .iter()
            .any(|r| r.status == PlacementStatus::Pending)
    }

    /// Settles the next pending word: placed or skipped, exactly once.
    pub fn advance_one(&mut self) {
        while self
            .records
            .get(self.cursor)
            .is_some_and(|r| r.is_terminal())
        {
            self.cursor += 1;
        }
        if self.cursor >= self.records.len() {
            return;
        }

        let idx = self.cursor;
        self.cursor += 1;
        self.place_word(idx);
    }

    /// Drains all remaining words.
    pub fn advance_all(&mut self) {
        while self.has_more() {
            self.advance_one();
        }
    }

    /// The placed word whose outline contains the given canvas point, if any.
    /// Scans placed words in rank order, first match wins.
    pub fn word_at(&self, x: f32, y: f32) -> Option<&Word> {
        let point = Point(x, y);
        self.records
            .iter()
            .filter(|r| r.status == PlacementStatus::Placed)
            .find(|r| {
                r.posed
                    .as_ref()
                    .is_some_and(|outline| outline.collides_with(&point))
            })
            .map(|r| &r.word)
    }

    /// Every word that will never appear on the canvas, in the order the
    /// decision was made.
    pub fn skipped_words(&self) -> &[Word] {
        &self.skipped
    }

    /// Fraction of retained words that reached a terminal status, in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.records.is_empty() {
            return 1.0;
        }
        let n_terminal = self.records.iter().filter(|r| r.is_terminal()).count();
        n_terminal as f32 / self.records.len() as f32
    }

    /// All finalized words, ready for compositing by the caller.
    pub fn placed(&self) -> impl Iterator<Item = PlacedWord<'_>> {
        self.records
            .iter()
            .filter(|r| r.status == PlacementStatus::Placed)
            .map(|r| PlacedWord {
                word: &r.word,
                outline: r
                    .posed
                    .as_ref()
                    .expect("placed record always has an outline"),
                location: r.current,
                color: r.color,
            })
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn stats(&self) -> &PlacementStats {
        &self.stats
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The per-word search loop. Returns whether the word was placed.
    ///
    /// Only records with a rank strictly below `idx` and status `Placed` are
    /// collision candidates; a single-slot cache remembers the record of the
    /// last collision, since after a small nudge the same obstacle is by far
    /// the most likely to be hit again.
    fn place_word(&mut self, idx: usize) -> bool {
        let n_words = self.records.len();
        let (lower_ranks, rest) = self.records.split_at_mut(idx);
        let record = &mut rest[0];

        let base_bbox = record
            .base
            .as_ref()
            .expect("pending record always has an outline")
            .bbox;
        let (word_w, word_h) = (base_bbox.width(), base_bbox.height());

        record.desired = self.strategies.placer.place(
            &record.word,
            record.rank,
            n_words,
            (word_w, word_h),
            (self.canvas.width, self.canvas.height),
        );

        let budget = match self.options.max_attempts {
            Some(n) if n > 0 => n,
            _ => attempt_budget(record.word.weight),
        };

        let mut last_collided: Option<usize> = None;
        for attempt in 0..budget {
            record.nudge(self.strategies.nudger.nudge(&record.word, attempt));

            let Point(x, y) = record.current;
            if x < 0.0 || y < 0.0 || x + word_w >= self.canvas.width || y + word_h >= self.canvas.height {
                self.stats.out_of_bounds += 1;
                continue;
            }

            record.pose();

            if let Some(i) = last_collided {
                if record.overlaps(&lower_ranks[i]) {
                    self.stats.cache_collisions += 1;
                    continue;
                }
            }

            let hit = lower_ranks
                .iter()
                .position(|other| other.status == PlacementStatus::Placed && record.overlaps(other));

            match hit {
                Some(i) => {
                    last_collided = Some(i);
                    self.stats.scan_collisions += 1;
                }
                None => {
                    record.status = PlacementStatus::Placed;
                    self.stats.words_placed += 1;
                    debug!(
                        "[PLACE] {} at ({:.1}, {:.1}) after {} attempt(s)",
                        record.word,
                        record.current.x(),
                        record.current.y(),
                        attempt + 1
                    );
                    return true;
                }
            }
        }

        record.status = PlacementStatus::Skipped;
        self.stats.words_skipped += 1;
        if self.options.log_skipped {
            info!("[PLACE] couldn't fit: {}", record.word);
        }
        let word = record.word.clone();
        self.skipped.push(word);
        false
    }
}
