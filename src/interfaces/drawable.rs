use crate::graphics::{RenderStates, RenderTarget};

/// Proof that a draw was started by the scene.
///
/// It cannot be built outside this crate, so `Drawable::draw` can be
/// overridden by anyone but only invoked through `Scene::draw` (or by an
/// implementation forwarding the token it was given to a nested drawable).
#[derive(Debug)]
pub struct SceneAccess {
    _private: (),
}

impl SceneAccess {
    pub(crate) fn new() -> Self {
        SceneAccess { _private: () }
    }
}

/// Something that can render itself onto a `RenderTarget`.
pub trait Drawable {
    /// Renders onto `target` using `states`. Empty by default.
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates, access: &SceneAccess) {
        let _ = (target, states, access);
    }
}
