use cgmath::Vector3;
use cgmath::InnerSpace;

use crate::graphics::Vertex;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle([Vector3<f32>; 3]);

impl Triangle {
    pub fn new(a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>) -> Self {
        Triangle([a, b, c])
    }

    /// Equilateral triangle in the XY plane, centred on the origin.
    pub fn equilateral(radius: f32) -> Self {
        let corner = |i: usize| {
            let angle = ::std::f32::consts::FRAC_PI_2 + i as f32 * 2.0 * ::std::f32::consts::FRAC_PI_3;
            Vector3 { x: radius * angle.cos(), y: radius * angle.sin(), z: 0.0 }
        };
        Triangle::new(corner(0), corner(1), corner(2))
    }

    pub fn a(&self) -> Vector3<f32> { self.0[0] }
    pub fn b(&self) -> Vector3<f32> { self.0[1] }
    pub fn c(&self) -> Vector3<f32> { self.0[2] }

    pub fn normal(&self) -> Vector3<f32> {
        (self.b() - self.a()).cross(self.c() - self.a()).normalize()
    }

    pub fn centroid(&self) -> Vector3<f32> {
        (self.a() + self.b() + self.c()) / 3.0
    }

    pub fn iter(&self) -> TriangleIter<'_> {
        TriangleIter {
            triangle: self,
            cur: 0,
        }
    }

    pub fn vertices(&self, color: [f32; 4]) -> [Vertex; 3] {
        [
            Vertex::new(self.a().into(), color),
            Vertex::new(self.b().into(), color),
            Vertex::new(self.c().into(), color),
        ]
    }
}

pub struct TriangleIter<'a> {
    triangle: &'a Triangle,
    cur: usize
}

impl<'a> Iterator for TriangleIter<'a> {
    type Item = Vector3<f32>;

    fn next(&mut self) -> Option<Vector3<f32>> {
        let r = match self.cur {
            0 => self.triangle.a(),
            1 => self.triangle.b(),
            2 => self.triangle.c(),
            _ => return None
        };
        self.cur += 1;
        Some(r)
    }
}
