use cgmath::{Quaternion, Rad, Vector3};
use cgmath::ElementWise;
use cgmath::InnerSpace;
use cgmath::Rotation3;
use cgmath::Zero;

use crate::graphics::Transform;

/// Position, rotation, scale and origin of an object, composed on demand into
/// a `Transform`.
///
/// The origin is the local point the other three components are applied
/// around; it is the point that ends up at `position`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transformable {
    position: Vector3<f32>,
    rotation: Quaternion<f32>,
    scale: Vector3<f32>,
    origin: Vector3<f32>,
}

impl Transformable {
    pub fn new() -> Self
    {
        Transformable {
            position: Vector3::zero(),
            rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
            scale: Vector3 { x: 1.0, y: 1.0, z: 1.0 },
            origin: Vector3::zero(),
        }
    }

    pub fn get_position(&self) -> Vector3<f32> { self.position }
    pub fn get_rotation(&self) -> Quaternion<f32> { self.rotation }
    pub fn get_scale(&self) -> Vector3<f32> { self.scale }
    pub fn get_origin(&self) -> Vector3<f32> { self.origin }

    pub fn set_position(&mut self, position: Vector3<f32>)
    {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quaternion<f32>)
    {
        self.rotation = rotation.normalize();
    }

    pub fn set_scale(&mut self, scale: Vector3<f32>)
    {
        self.scale = scale;
    }

    pub fn set_origin(&mut self, origin: Vector3<f32>)
    {
        self.origin = origin;
    }

    pub fn translate(&mut self, offset: Vector3<f32>)
    {
        self.position += offset;
    }

    /// Applies `delta` on top of the current rotation.
    pub fn rotate(&mut self, delta: Quaternion<f32>)
    {
        self.rotation = (delta * self.rotation).normalize();
    }

    pub fn rotate_z<A: Into<Rad<f32>>>(&mut self, angle: A)
    {
        self.rotate(Quaternion::from_angle_z(angle))
    }

    pub fn scale_by(&mut self, factors: Vector3<f32>)
    {
        self.scale = self.scale.mul_element_wise(factors);
    }

    /// Local -Z, rotated into parent space.
    pub fn forward(&self) -> Vector3<f32>
    {
        self.rotation * Vector3 { x: 0.0, y: 0.0, z: -1.0 }
    }

    pub fn up(&self) -> Vector3<f32>
    {
        self.rotation * Vector3 { x: 0.0, y: 1.0, z: 0.0 }
    }

    pub fn right(&self) -> Vector3<f32>
    {
        self.forward().cross(self.up())
    }

    pub fn move_forward(&mut self, delta: f32)
    {
        self.position += self.forward() * delta;
    }

    pub fn move_up(&mut self, delta: f32)
    {
        self.position += self.up() * delta;
    }

    pub fn move_right(&mut self, delta: f32)
    {
        self.position += self.right() * delta;
    }

    /// `T(position) * R(rotation) * S(scale) * T(-origin)`
    pub fn get_transform(&self) -> Transform
    {
        Transform::translation(self.position)
            * Transform::rotation(self.rotation)
            * Transform::scaling(self.scale)
            * Transform::translation(-self.origin)
    }

    /// `None` when a scale component is zero.
    pub fn get_inverse_transform(&self) -> Option<Transform>
    {
        self.get_transform().inverse()
    }
}

impl Default for Transformable {
    fn default() -> Self { Transformable::new() }
}
