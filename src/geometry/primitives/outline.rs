use anyhow::Result;
use anyhow::ensure;
use itertools::Itertools;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, Transformable, TransformableFrom};
use crate::geometry::primitives::Contour;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// Exact boundary of a rendered word: a set of closed rings (one or more per
/// glyph, including the rings that bound holes), with the filled region
/// defined by the even-odd rule.
///
/// Owned value type, transformed by explicit rotate/translate operations.
/// No geometric state is shared between outlines.
#[derive(Clone, Debug)]
pub struct Outline {
    /// All rings that make up the boundary
    pub contours: Vec<Contour>,
    /// Bounding box of the entire outline
    pub bbox: Rect,
}

impl Outline {
    pub fn new(contours: Vec<Contour>) -> Result<Self> {
        ensure!(!contours.is_empty(), "outline must have at least one ring");
        let bbox = contours
            .iter()
            .map(|c| c.bbox)
            .reduce(Rect::bounding_rect)
            .unwrap();

        Ok(Outline { contours, bbox })
    }

    pub fn width(&self) -> f32 {
        self.bbox.width()
    }

    pub fn height(&self) -> f32 {
        self.bbox.height()
    }

    /// Total number of edges over all rings.
    pub fn num_edges(&self) -> usize {
        self.contours.iter().map(|c| c.num_points()).sum()
    }
}

impl Transformable for Outline {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let Outline { contours, bbox } = self;

        contours.iter_mut().for_each(|c| {
            c.transform(t);
        });

        *bbox = contours
            .iter()
            .map(|c| c.bbox)
            .reduce(Rect::bounding_rect)
            .unwrap();

        self
    }
}

impl TransformableFrom for Outline {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        let Outline { contours, bbox } = self;

        for (c, ref_c) in contours.iter_mut().zip(&reference.contours) {
            c.transform_from(ref_c, t);
        }

        *bbox = contours
            .iter()
            .map(|c| c.bbox)
            .reduce(Rect::bounding_rect)
            .unwrap();

        self
    }
}

impl CollidesWith<Point> for Outline {
    /// Even-odd fill rule over all rings: a point inside a hole is not inside the outline.
    fn collides_with(&self, point: &Point) -> bool {
        match self.bbox.collides_with(point) {
            false => false,
            true => {
                let total_crossings: usize = self
                    .contours
                    .iter()
                    .map(|c| c.ray_crossings(point))
                    .sum();
                total_crossings % 2 == 1
            }
        }
    }
}

impl CollidesWith<Outline> for Outline {
    /// Exact geometric overlap test: true if the boundaries cross or if the
    /// filled region of one contains (part of) the other. Symmetric.
    fn collides_with(&self, other: &Outline) -> bool {
        if !self.bbox.collides_with(&other.bbox) {
            return false;
        }

        //any boundary crossing is an overlap
        let crossing = self
            .contours
            .iter()
            .cartesian_product(&other.contours)
            .filter(|(c_a, c_b)| c_a.bbox.collides_with(&c_b.bbox))
            .any(|(c_a, c_b)| {
                c_a.edge_iter()
                    .any(|e_a| c_b.edge_iter().any(|e_b| e_a.collides_with(&e_b)))
            });

        if crossing {
            return true;
        }

        //no crossings: every ring lies entirely on one side of the other
        //outline, so a single vertex per ring decides containment
        self.contours
            .iter()
            .any(|c| other.collides_with(&c.points[0]))
            || other
                .contours
                .iter()
                .any(|c| self.collides_with(&c.points[0]))
    }
}

impl From<Rect> for Outline {
    fn from(r: Rect) -> Self {
        Outline::new(vec![Contour::from(r)]).expect("rectangle is always a valid outline")
    }
}
