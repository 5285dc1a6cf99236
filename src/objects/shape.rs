use cgmath::{Rad, Vector3};
use cgmath::Zero;

use crate::actors::{Actor, ActorCore};
use crate::graphics::{BlendMode, PrimitiveType, RenderStates, RenderTarget, Vertex};
use crate::interfaces::{Drawable, SceneAccess, Updatable};
use crate::objects::Triangle;

/// A flat-coloured triangle mesh that drifts and spins on its own.
#[derive(Clone, Debug)]
pub struct Shape {
    core: ActorCore,
    vertices: Vec<Vertex>,
    velocity: Vector3<f32>,
    angular_velocity: Rad<f32>,
    blend_mode: Option<BlendMode>,
    frames: u64,
}

impl Shape {
    pub fn new<I>(triangles: I, color: [f32; 4]) -> Self
        where I: IntoIterator<Item = Triangle>
    {
        let vertices = triangles.into_iter()
            .flat_map(|t| t.vertices(color).to_vec())
            .collect();

        Shape {
            core: ActorCore::new(),
            vertices: vertices,
            velocity: Vector3::zero(),
            angular_velocity: Rad(0.0),
            blend_mode: None,
            frames: 0,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector3<f32>) -> Self
    {
        self.velocity = velocity;
        self
    }

    /// Spin around the Z axis, per second.
    pub fn with_angular_velocity<A: Into<Rad<f32>>>(mut self, angular_velocity: A) -> Self
    {
        self.angular_velocity = angular_velocity.into();
        self
    }

    /// Blend with this mode instead of the one handed down by the scene.
    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self
    {
        self.blend_mode = Some(blend_mode);
        self
    }

    pub fn vertices(&self) -> &[Vertex] { &self.vertices }
    pub fn velocity(&self) -> Vector3<f32> { self.velocity }
    pub fn angular_velocity(&self) -> Rad<f32> { self.angular_velocity }

    /// Number of updates received so far.
    pub fn frames(&self) -> u64 { self.frames }
}

impl Updatable for Shape {
    fn update(&mut self, delta_time: f32) {
        let velocity = self.velocity;
        let spin = self.angular_velocity * delta_time;

        let transformable = self.transformable_mut();
        transformable.translate(velocity * delta_time);
        if spin != Rad(0.0) {
            transformable.rotate_z(spin);
        }

        self.frames += 1;
    }
}

impl Drawable for Shape {
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates, _access: &SceneAccess) {
        let mut states = states.combine(&self.get_transform());
        if let Some(blend_mode) = self.blend_mode {
            states = states.with_blend_mode(blend_mode);
        }
        target.draw_vertices(&self.vertices, PrimitiveType::Triangles, &states);
    }
}

impl Actor for Shape {
    fn core(&self) -> &ActorCore { &self.core }
    fn core_mut(&mut self) -> &mut ActorCore { &mut self.core }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Point3};
    use cgmath::InnerSpace;
    use crate::graphics::DrawList;

    #[test]
    fn update_integrates_velocity() {
        let mut shape = Shape::new(vec![Triangle::equilateral(1.0)], [1.0; 4])
            .with_velocity(Vector3::new(2.0, 0.0, 0.0));

        shape.update(0.5);
        shape.update(0.25);

        assert_eq!(shape.transformable().get_position(), Vector3::new(1.5, 0.0, 0.0));
        assert_eq!(shape.frames(), 2);
    }

    #[test]
    fn update_spins_around_z() {
        let mut shape = Shape::new(vec![Triangle::equilateral(1.0)], [1.0; 4])
            .with_angular_velocity(Deg(180.0));

        shape.update(0.5);

        let p = shape.get_transform().transform_point(Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(0.0, 1.0, 0.0)).magnitude() < 1e-5, "{:?}", p);
    }

    #[test]
    fn draws_its_triangles_with_its_transform() {
        let mut shape = Shape::new(vec![Triangle::equilateral(1.0), Triangle::equilateral(0.5)], [1.0; 4]);
        shape.transformable_mut().set_position(Vector3::new(0.0, 0.0, -3.0));

        let mut list = DrawList::new();
        shape.draw(&mut list, RenderStates::default(), &SceneAccess::new());

        assert_eq!(list.len(), 1);
        let command = &list.commands()[0];
        assert_eq!(command.primitive, PrimitiveType::Triangles);
        assert_eq!(command.vertices.len(), 6);
        assert!(command.world_positions().iter().all(|p| p.z == -3.0));
        assert_eq!(command.states.blend_mode, BlendMode::Alpha);
    }

    #[test]
    fn own_blend_mode_overrides_the_inherited_one() {
        let additive = Shape::new(vec![Triangle::equilateral(1.0)], [1.0; 4]).with_blend_mode(BlendMode::Add);
        let plain = Shape::new(vec![Triangle::equilateral(1.0)], [1.0; 4]);
        let inherited = RenderStates::default().with_blend_mode(BlendMode::Multiply);

        let mut list = DrawList::new();
        additive.draw(&mut list, inherited, &SceneAccess::new());
        plain.draw(&mut list, inherited, &SceneAccess::new());

        assert_eq!(list.commands()[0].states.blend_mode, BlendMode::Add);
        assert_eq!(list.commands()[1].states.blend_mode, BlendMode::Multiply);
    }
}
