mod triangle;
mod shape;

pub use self::triangle::{Triangle, TriangleIter};
pub use self::shape::Shape;
