mod fpa;
pub mod geo_traits;
pub mod primitives;
mod transformation;

pub use fpa::FPA;
pub use transformation::Transformation;
