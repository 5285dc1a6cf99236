use cgmath::Point3;

use crate::graphics::Transform;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub texture_coordinate: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Vertex {
            position: position,
            texture_coordinate: [0.0, 0.0],
            color: color,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrimitiveType {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

/// How drawn pixels combine with what the target already holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendMode {
    None,
    Alpha,
    Add,
    Multiply,
}

/// State carried down the draw calls: the transform accumulated so far and
/// how the produced pixels blend with the target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderStates {
    pub transform: Transform,
    pub blend_mode: BlendMode,
}

impl RenderStates {
    pub fn new(transform: Transform) -> Self
    {
        RenderStates {
            transform: transform,
            blend_mode: BlendMode::Alpha,
        }
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self
    {
        self.blend_mode = blend_mode;
        self
    }

    /// Returns these states with `transform` appended, so that `transform`
    /// is applied to vertices before the accumulated one.
    pub fn combine(&self, transform: &Transform) -> Self
    {
        RenderStates {
            transform: self.transform.combine(transform),
            blend_mode: self.blend_mode,
        }
    }
}

impl Default for RenderStates {
    fn default() -> Self { RenderStates::new(Transform::identity()) }
}

/// Anything primitives can be rendered onto.
pub trait RenderTarget {
    fn clear(&mut self, color: [f32; 4]);

    fn draw_vertices(&mut self, vertices: &[Vertex], primitive: PrimitiveType, states: &RenderStates);
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub vertices: Vec<Vertex>,
    pub primitive: PrimitiveType,
    pub states: RenderStates,
}

impl DrawCommand {
    /// Vertex positions after applying the command's transform.
    pub fn world_positions(&self) -> Vec<Point3<f32>>
    {
        self.vertices.iter()
            .map(|v| self.states.transform.transform_point(Point3::new(v.position[0], v.position[1], v.position[2])))
            .collect()
    }
}

/// A render target that records every call instead of rasterising it.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    clear_color: Option<[f32; 4]>,
    clear_count: usize,
}

impl DrawList {
    pub fn new() -> Self {
        DrawList::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear_color(&self) -> Option<[f32; 4]> {
        self.clear_color
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn vertex_count(&self) -> usize {
        self.commands.iter().map(|c| c.vertices.len()).sum()
    }
}

impl RenderTarget for DrawList {
    fn clear(&mut self, color: [f32; 4]) {
        self.commands.clear();
        self.clear_color = Some(color);
        self.clear_count += 1;
    }

    fn draw_vertices(&mut self, vertices: &[Vertex], primitive: PrimitiveType, states: &RenderStates) {
        if vertices.is_empty() {
            return;
        }

        self.commands.push(DrawCommand {
            vertices: vertices.to_vec(),
            primitive: primitive,
            states: *states,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn records_draw_calls_in_order() {
        let mut list = DrawList::new();
        let a = [Vertex::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0, 1.0])];
        let b = [Vertex::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0, 1.0]); 2];

        list.draw_vertices(&a, PrimitiveType::Points, &RenderStates::default());
        list.draw_vertices(&b, PrimitiveType::Lines, &RenderStates::default());

        assert_eq!(list.len(), 2);
        assert_eq!(list.commands()[0].primitive, PrimitiveType::Points);
        assert_eq!(list.commands()[1].primitive, PrimitiveType::Lines);
        assert_eq!(list.vertex_count(), 3);
    }

    #[test]
    fn empty_vertex_slices_are_skipped() {
        let mut list = DrawList::new();
        list.draw_vertices(&[], PrimitiveType::Triangles, &RenderStates::default());
        assert!(list.is_empty());
    }

    #[test]
    fn clear_drops_previous_frame() {
        let mut list = DrawList::new();
        list.draw_vertices(&[Vertex::new([0.0; 3], [1.0; 4])], PrimitiveType::Points, &RenderStates::default());
        list.clear([0.0, 0.0, 0.0, 1.0]);

        assert!(list.is_empty());
        assert_eq!(list.clear_color(), Some([0.0, 0.0, 0.0, 1.0]));
        assert_eq!(list.clear_count(), 1);
    }

    #[test]
    fn blend_mode_is_recorded_and_survives_combine() {
        let mut list = DrawList::new();
        let vertex = [Vertex::new([0.0; 3], [1.0; 4])];
        let modes = [BlendMode::None, BlendMode::Alpha, BlendMode::Add, BlendMode::Multiply];

        for &mode in &modes {
            let states = RenderStates::default()
                .with_blend_mode(mode)
                .combine(&Transform::translation(Vector3::new(1.0, 0.0, 0.0)));
            list.draw_vertices(&vertex, PrimitiveType::Points, &states);
        }

        let recorded: Vec<BlendMode> = list.commands().iter().map(|c| c.states.blend_mode).collect();
        assert_eq!(recorded, modes.to_vec());
        assert_eq!(RenderStates::default().blend_mode, BlendMode::Alpha);
    }

    #[test]
    fn world_positions_use_command_transform() {
        let mut list = DrawList::new();
        let states = RenderStates::default().combine(&Transform::translation(Vector3::new(0.0, 2.0, 0.0)));
        list.draw_vertices(&[Vertex::new([1.0, 0.0, 0.0], [1.0; 4])], PrimitiveType::Points, &states);

        assert_eq!(list.commands()[0].world_positions(), vec![Point3::new(1.0, 2.0, 0.0)]);
    }
}
