//! The per-vertex input attribute.
//!
//! [`Vertex2d`] is the only attribute the stage reads. Its GPU layout:
//!
//! | Attribute | Format    | Offset | Shader Location |
//! |-----------|-----------|--------|-----------------|
//! | position  | Float32x2 | 0      | 0               |
//!
//! This layout is exposed via [`Vertex2d::LAYOUT`] for pipeline creation.

use crate::error::{StageError, StageResult};
use glam::Vec2;

/// A 2D model-space vertex position.
///
/// Uses `#[repr(C)]` and derives [`bytemuck::Pod`] so a slice of vertices can
/// be uploaded or read back as raw bytes without copying.
///
/// # Example
///
/// ```
/// use clipspace::Vertex2d;
///
/// let vertex = Vertex2d::new(1.0, 2.0);
/// assert_eq!(vertex.position, [1.0, 2.0]);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex2d {
    /// Position in model space.
    pub position: [f32; 2],
}

impl Vertex2d {
    /// Name under which the attribute is bound.
    pub const ATTRIBUTE: &'static str = "position";

    /// Shader location of the attribute.
    pub const LOCATION: u32 = 0;

    /// The wgpu vertex buffer layout descriptor for this vertex type.
    ///
    /// - **Array stride**: 8 bytes per vertex
    /// - **Step mode**: Per-vertex
    /// - **Attributes**: position (loc 0)
    ///
    /// ```ignore
    /// let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
    ///     vertex: wgpu::VertexState {
    ///         module: &shader,
    ///         entry_point: Some(clipspace::VERTEX_ENTRY_POINT),
    ///         buffers: &[Vertex2d::LAYOUT],
    ///         compilation_options: Default::default(),
    ///     },
    ///     // ...
    /// });
    /// ```
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex2d>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: Self::LOCATION,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    };

    pub fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    /// Returns the position as a glam vector.
    pub fn position(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }

    /// Views a raw vertex stream as vertices without copying.
    ///
    /// Fails if the byte length is not a multiple of the vertex size or the
    /// buffer is not aligned for `f32`.
    ///
    /// ```
    /// use clipspace::Vertex2d;
    ///
    /// let source = [Vertex2d::new(0.0, 0.0), Vertex2d::new(1.0, 0.0)];
    /// let bytes: &[u8] = bytemuck::cast_slice(&source);
    /// let vertices = Vertex2d::cast_slice(bytes).unwrap();
    /// assert_eq!(vertices, &source);
    /// ```
    pub fn cast_slice(bytes: &[u8]) -> StageResult<&[Vertex2d]> {
        bytemuck::try_cast_slice(bytes).map_err(|e| {
            log::warn!("rejected vertex stream of {} bytes: {}", bytes.len(), e);
            StageError::VertexBytes(e)
        })
    }
}

impl From<Vec2> for Vertex2d {
    fn from(position: Vec2) -> Self {
        Self {
            position: position.to_array(),
        }
    }
}

impl From<[f32; 2]> for Vertex2d {
    fn from(position: [f32; 2]) -> Self {
        Self { position }
    }
}

impl TryFrom<&[f32]> for Vertex2d {
    type Error = StageError;

    fn try_from(components: &[f32]) -> StageResult<Self> {
        match *components {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(StageError::PositionShape {
                len: components.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_struct() {
        assert_eq!(std::mem::size_of::<Vertex2d>(), 8);
        assert_eq!(Vertex2d::LAYOUT.array_stride, 8);
        assert_eq!(Vertex2d::LAYOUT.step_mode, wgpu::VertexStepMode::Vertex);

        let [attr] = Vertex2d::LAYOUT.attributes else {
            panic!("expected a single attribute");
        };
        assert_eq!(attr.offset, 0);
        assert_eq!(attr.shader_location, 0);
        assert_eq!(attr.format, wgpu::VertexFormat::Float32x2);
    }

    #[test]
    fn try_from_slice_checks_shape() {
        let ok = Vertex2d::try_from(&[3.0f32, -4.0] as &[f32]).unwrap();
        assert_eq!(ok.position(), Vec2::new(3.0, -4.0));

        assert_eq!(
            Vertex2d::try_from(&[1.0f32, 2.0, 3.0] as &[f32]),
            Err(StageError::PositionShape { len: 3 })
        );
        assert_eq!(
            Vertex2d::try_from(&[] as &[f32]),
            Err(StageError::PositionShape { len: 0 })
        );
    }

    #[test]
    fn cast_slice_rejects_partial_vertex() {
        let floats = [0.0f32, 1.0, 2.0];
        let bytes: &[u8] = bytemuck::cast_slice(&floats);
        assert!(matches!(
            Vertex2d::cast_slice(bytes),
            Err(StageError::VertexBytes(_))
        ));
    }

    #[test]
    fn converts_from_glam() {
        let vertex: Vertex2d = Vec2::new(5.0, 6.0).into();
        assert_eq!(vertex.position, [5.0, 6.0]);
    }
}
