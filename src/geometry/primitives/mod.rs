mod contour;
mod edge;
mod outline;
mod point;
mod rect;

pub use contour::Contour;
pub use edge::Edge;
pub use outline::Outline;
pub use point::Point;
pub use rect::Rect;
