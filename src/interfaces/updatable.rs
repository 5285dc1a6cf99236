/// Something that advances once per simulation step.
pub trait Updatable {
    /// Advances the object by `delta_time` seconds, the time elapsed since
    /// the previous step. Does nothing unless overridden.
    fn update(&mut self, delta_time: f32) {
        let _ = delta_time;
    }
}
