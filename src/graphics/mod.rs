mod transform;
mod render_target;

pub use self::transform::Transform;
pub use self::render_target::{BlendMode, DrawCommand, DrawList, PrimitiveType, RenderStates, RenderTarget, Vertex};
