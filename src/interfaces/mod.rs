mod updatable;
mod drawable;

pub use self::updatable::Updatable;
pub use self::drawable::{Drawable, SceneAccess};
