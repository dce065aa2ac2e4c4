use anyhow::Result;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::Outline;
use crate::strategies::FontId;

/// Words whose unrotated outline is narrower or shorter than this many layout
/// units are rejected: they would render as unreadable specks.
pub const MIN_RENDERED_SIZE: f32 = 7.0;

/// Source of raw glyph outlines, supplied by the caller.
///
/// The engine knows nothing about font files or glyph rasterization; it only
/// needs the exact boundary of `text` rendered in `font` at `size`, in
/// whatever coordinate space the backend works in. Implementations must be
/// deterministic: identical inputs yield identical outlines.
pub trait GlyphSource {
    fn raw_outline(&self, text: &str, font: FontId, size: f32) -> Result<Outline>;
}

/// Turns (text, font, size, angle) into a placement-ready outline:
/// normalized so its bounding box starts at the origin, rotated by the
/// word's assigned angle.
pub struct WordShaper<'a> {
    source: &'a dyn GlyphSource,
}

impl<'a> WordShaper<'a> {
    pub fn new(source: &'a dyn GlyphSource) -> Self {
        Self { source }
    }

    /// Returns `Ok(None)` when the rendered shape is below [`MIN_RENDERED_SIZE`].
    ///
    /// The size check runs on the raw, unrotated outline, before any
    /// transform: rejection must not depend on the assigned angle.
    /// Text is shaped as a single run; embedded line breaks get no special
    /// treatment, exactly like the line-oriented callers expect.
    pub fn shape(
        &self,
        text: &str,
        font: FontId,
        size: f32,
        angle: f32,
    ) -> Result<Option<Outline>> {
        let mut outline = self.source.raw_outline(text, font, size)?;

        if outline.width() < MIN_RENDERED_SIZE || outline.height() < MIN_RENDERED_SIZE {
            return Ok(None);
        }

        //rotating by exactly 0.0 would only accumulate floating point drift
        if angle != 0.0 {
            outline.transform(&Transformation::from_rotation(angle));
        }

        let bbox = outline.bbox;
        if bbox.x_min != 0.0 || bbox.y_min != 0.0 {
            outline.transform(&Transformation::from_translation((
                -bbox.x_min,
                -bbox.y_min,
            )));
        }

        Ok(Some(outline))
    }
}
