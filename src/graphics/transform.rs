use std::ops::{Mul, MulAssign};

use cgmath::{Matrix4, Point3, Quaternion, Vector3};
use cgmath::SquareMatrix;
use cgmath::Transform as MatrixTransform;

/// An affine 3D transform stored as a column-major 4x4 matrix.
///
/// `a * b` produces the transform that applies `b` first and then `a`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform(Matrix4<f32>);

impl Transform {
    pub fn identity() -> Self
    {
        Transform(Matrix4::identity())
    }

    pub fn from_matrix(matrix: Matrix4<f32>) -> Self
    {
        Transform(matrix)
    }

    pub fn translation(offset: Vector3<f32>) -> Self
    {
        Transform(Matrix4::from_translation(offset))
    }

    pub fn rotation(rotation: Quaternion<f32>) -> Self
    {
        Transform(Matrix4::from(rotation))
    }

    pub fn scaling(factors: Vector3<f32>) -> Self
    {
        Transform(Matrix4::from_nonuniform_scale(factors.x, factors.y, factors.z))
    }

    pub fn matrix(&self) -> &Matrix4<f32>
    {
        &self.0
    }

    /// Returns `self * other`: `other` is applied first.
    pub fn combine(&self, other: &Transform) -> Self
    {
        Transform(self.0 * other.0)
    }

    pub fn transform_point(&self, point: Point3<f32>) -> Point3<f32>
    {
        self.0.transform_point(point)
    }

    /// Transforms a direction, ignoring the translation part.
    pub fn transform_vector(&self, vector: Vector3<f32>) -> Vector3<f32>
    {
        self.0.transform_vector(vector)
    }

    /// `None` when the matrix is singular (e.g. a zero scale).
    pub fn inverse(&self) -> Option<Self>
    {
        self.0.invert().map(Transform)
    }
}

impl Default for Transform {
    fn default() -> Self { Transform::identity() }
}

impl From<Matrix4<f32>> for Transform {
    fn from(matrix: Matrix4<f32>) -> Self { Transform(matrix) }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.combine(&rhs)
    }
}

impl<'a> Mul<&'a Transform> for &'a Transform {
    type Output = Transform;

    fn mul(self, rhs: &'a Transform) -> Transform {
        self.combine(rhs)
    }
}

impl MulAssign for Transform {
    fn mul_assign(&mut self, rhs: Transform) {
        self.0 = self.0 * rhs.0;
    }
}
