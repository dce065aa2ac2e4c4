use anyhow::Result;
use anyhow::ensure;

use crate::geometry::FPA;
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, Transformable, TransformableFrom};
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// Closed polygonal ring, one of the boundaries of an [`Outline`](crate::geometry::primitives::Outline).
///
/// A ring can bound filled area or a hole; which of the two is decided by the
/// even-odd rule at the outline level, the contour itself carries no winding semantics.
#[derive(Clone, Debug)]
pub struct Contour {
    /// The vertices of the ring, implicitly closed (last connects back to first)
    pub points: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
}

impl Contour {
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        //drop consecutive duplicates, they would form degenerate edges
        points.dedup();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        ensure!(
            points.len() >= 3,
            "contour must have at least 3 distinct points: {points:?}"
        );
        let bbox = Rect::from_points(&points)?;

        Ok(Contour { points, bbox })
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn get_edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.num_points();
        Edge::new(self.points[i], self.points[j])
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.num_points()).map(move |i| self.get_edge(i))
    }

    /// Number of times a horizontal ray, shot from `point` to the right,
    /// crosses the ring. Zero when the ring lies entirely left, above or below the point.
    pub fn ray_crossings(&self, point: &Point) -> usize {
        if point.1 < self.bbox.y_min || point.1 > self.bbox.y_max || point.0 > self.bbox.x_max {
            return 0;
        }

        //endpoint certainly right of the ring
        let point_outside = Point(self.bbox.x_max + self.bbox.width(), point.1);
        let ray = Edge::new(*point, point_outside);

        let mut n_crossings = 0;
        for edge in self.edge_iter() {
            //Check if the ray does not go through (or almost through) a vertex.
            //This can result in funky behaviour, which could give incorrect results.
            //Therefore we handle this case separately.
            let (s_x, s_y) = (FPA(edge.start.0), FPA(edge.start.1));
            let (e_x, e_y) = (FPA(edge.end.0), FPA(edge.end.1));
            let (p_x, p_y) = (FPA(point.0), FPA(point.1));

            if (s_y == p_y && s_x > p_x) || (e_y == p_y && e_x > p_x) {
                //only count an intersection if the edge reaches below the ray
                if s_y < p_y || e_y < p_y {
                    n_crossings += 1;
                }
            } else if ray.collides_with(&edge) {
                n_crossings += 1;
            }
        }
        n_crossings
    }
}

impl Transformable for Contour {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let Contour { points, bbox } = self;

        points.iter_mut().for_each(|p| {
            p.transform(t);
        });

        *bbox = Rect::from_points(points).expect("transformed contour has degenerate bounding box");

        self
    }
}

impl TransformableFrom for Contour {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        let Contour { points, bbox } = self;

        for (p, ref_p) in points.iter_mut().zip(&reference.points) {
            p.transform_from(ref_p, t);
        }

        *bbox = Rect::from_points(points).expect("transformed contour has degenerate bounding box");

        self
    }
}

impl CollidesWith<Point> for Contour {
    fn collides_with(&self, point: &Point) -> bool {
        //ray casting algorithm: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        match self.bbox.collides_with(point) {
            false => false,
            true => self.ray_crossings(point) % 2 == 1,
        }
    }
}

impl From<Rect> for Contour {
    fn from(r: Rect) -> Self {
        Contour::new(vec![
            Point(r.x_min, r.y_min),
            Point(r.x_max, r.y_min),
            Point(r.x_max, r.y_max),
            Point(r.x_min, r.y_max),
        ])
        .expect("rectangle is always a valid contour")
    }
}
