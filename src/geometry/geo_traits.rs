use crate::geometry::Transformation;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can be modified by a [`Transformation`].
pub trait Transformable: Clone {
    /// Applies a transformation to `self`.
    fn transform(&mut self, t: &Transformation) -> &mut Self;

    /// Applies a transformation to a clone.
    fn transform_clone(&self, t: &Transformation) -> Self {
        let mut clone = self.clone();
        clone.transform(t);
        clone
    }
}

/// Trait for types that can be modified based on a reference object with a [`Transformation`] applied.
///
/// Useful when repeatedly transforming a single shape without having to reallocate new memory each time.
pub trait TransformableFrom: Transformable {
    /// Applies a transformation on the reference object and stores the result in `self`.
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self;
}
