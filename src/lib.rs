//! `wordnest` lays out a set of weighted words as non-overlapping glyph
//! outlines inside a bounded canvas. Words are converted into exact 2D
//! outlines (not bounding boxes) up front, then placed one by one in rank
//! order: a pluggable [`Placer`](strategies::Placer) seeds a location and a
//! pluggable [`Nudger`](strategies::Nudger) perturbs it until the word fits
//! inside the canvas without overlapping any previously placed word, or its
//! attempt budget runs out.
//!
//! Everything outside the placement problem (font rendering, colors, final
//! compositing) is supplied by the caller through the traits in
//! [`strategies`] and [`shaper`].

pub mod canvas;
pub mod config;
pub mod engine;
pub mod entities;
pub mod geometry;
pub mod io;
pub mod shaper;
pub mod strategies;
