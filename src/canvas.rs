use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Rect;

/// How the destination surface composites content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compositing {
    /// The destination can draw filled 2D outlines directly
    Vector,
    /// The destination only accepts pre-rasterized pixels
    Bitmap,
}

/// The bounded destination the cloud is laid out in. Placed words always lie
/// entirely within `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    pub compositing: Compositing,
}

impl Canvas {
    pub fn try_new(width: f32, height: f32, compositing: Compositing) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "invalid canvas dimensions: {width} x {height}"
        );
        Ok(Canvas {
            width,
            height,
            compositing,
        })
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }
}
