use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, Transformable, TransformableFrom};
use crate::geometry::primitives::Point;

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Edge { start, end }
    }

    pub fn x_min(&self) -> f32 {
        f32::min(self.start.0, self.end.0)
    }

    pub fn y_min(&self) -> f32 {
        f32::min(self.start.1, self.end.1)
    }

    pub fn x_max(&self) -> f32 {
        f32::max(self.start.0, self.end.0)
    }

    pub fn y_max(&self) -> f32 {
        f32::max(self.start.1, self.end.1)
    }

    pub fn length(&self) -> f32 {
        self.start.distance_to(&self.end)
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.start.0 + self.end.0) / 2.0,
            (self.start.1 + self.end.1) / 2.0,
        )
    }
}

impl Transformable for Edge {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Edge { start, end } = self;
        start.transform(t);
        end.transform(t);

        self
    }
}

impl TransformableFrom for Edge {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        let Edge { start, end } = self;
        start.transform_from(&reference.start, t);
        end.transform_from(&reference.end, t);

        self
    }
}

impl CollidesWith<Edge> for Edge {
    #[inline(always)]
    fn collides_with(&self, other: &Edge) -> bool {
        edge_intersection(self, other)
    }
}

#[inline(always)]
fn edge_intersection(e1: &Edge, e2: &Edge) -> bool {
    if f32::max(e1.x_min(), e2.x_min()) > f32::min(e1.x_max(), e2.x_max())
        || f32::max(e1.y_min(), e2.y_min()) > f32::min(e1.y_max(), e2.y_max())
    {
        //bounding boxes do not overlap
        return false;
    }

    //based on: https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection#Given_two_points_on_each_line_segment
    let Point(x1, y1) = e1.start;
    let Point(x2, y2) = e1.end;
    let Point(x3, y3) = e2.start;
    let Point(x4, y4) = e2.end;

    let t_nom = (x2 - x4) * (y4 - y3) - (y2 - y4) * (x4 - x3);
    let t_denom = (x2 - x1) * (y4 - y3) - (y2 - y1) * (x4 - x3);
    let u_nom = (x2 - x4) * (y2 - y1) - (y2 - y4) * (x2 - x1);
    let u_denom = (x2 - x1) * (y4 - y3) - (y2 - y1) * (x4 - x3);

    if t_denom == 0.0 || u_denom == 0.0 {
        //parallel edges
        false
    } else {
        let t = t_nom / t_denom;
        let u = u_nom / u_denom;
        (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
    }
}
