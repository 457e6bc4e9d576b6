//! The clip-space vertex transform.
//!
//! Every vertex goes through the same two steps:
//!
//! 1. Homogenize the 2D position to `(x, y, 0.0, 1.0)`.
//! 2. Apply the model matrix, then the perspective matrix.
//!
//! The two products are applied one after the other and are never folded into
//! a single `perspective * model` matrix, so results follow the rounding path
//! of two 4×4 matrix-vector products.
//!
//! ```
//! use clipspace::{Mat4, Vec2, Vec3, Vec4, VertexTransformer};
//!
//! let stage = VertexTransformer::new()
//!     .with_model(Mat4::from_translation(Vec3::new(3.0, 0.0, 0.0)));
//!
//! assert_eq!(stage.transform(Vec2::new(1.0, 2.0)), Vec4::new(4.0, 2.0, 0.0, 1.0));
//! ```

use crate::error::{StageError, StageResult};
use crate::uniforms::TransformUniforms;
use crate::vertex::Vertex2d;
use glam::{Mat4, Vec2, Vec4};

/// Per-vertex input position.
pub type Position2D = Vec2;

/// A homogeneous 4×4 transform, column-major.
pub type Transform4x4 = Mat4;

/// Output position handed to the rasterizer.
pub type ClipPosition = Vec4;

/// Lifts a 2D position onto the z = 0 plane as a homogeneous point.
#[inline]
pub fn homogenize(position: Position2D) -> Vec4 {
    position.extend(0.0).extend(1.0)
}

/// Transforms one vertex into clip space.
///
/// Computes `perspective * (model * (x, y, 0, 1))`. Degenerate matrices and
/// non-finite inputs are not rejected; the arithmetic runs unconditionally.
#[inline]
pub fn transform_vertex(
    position: Position2D,
    perspective: &Transform4x4,
    model: &Transform4x4,
) -> ClipPosition {
    let intermediate = model.mul_vec4(homogenize(position));
    perspective.mul_vec4(intermediate)
}

/// The vertex stage with its two bound matrices.
///
/// Both matrices default to identity. Rebinding goes through the builder
/// methods, which consume the stage, so the matrices cannot change while a
/// batch borrows it.
///
/// # Example
///
/// ```
/// use clipspace::{Mat4, Vec3, Vec4, Vertex2d, VertexTransformer};
///
/// let stage = VertexTransformer::new()
///     .with_perspective(Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0)))
///     .with_model(Mat4::from_scale(Vec3::new(2.0, 3.0, 1.0)));
///
/// let clip = stage.transform_batch(&[Vertex2d::new(1.0, 1.0)]);
/// assert_eq!(clip, vec![Vec4::new(2.0, 3.0, 5.0, 1.0)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexTransformer {
    perspective: Transform4x4,
    model: Transform4x4,
}

impl Default for VertexTransformer {
    fn default() -> Self {
        Self {
            perspective: Mat4::IDENTITY,
            model: Mat4::IDENTITY,
        }
    }
}

impl VertexTransformer {
    /// Creates a stage with identity perspective and model matrices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stage from both matrices at once.
    pub fn from_matrices(perspective: Transform4x4, model: Transform4x4) -> Self {
        Self { perspective, model }
    }

    /// Binds the perspective (projection) matrix.
    pub fn with_perspective(mut self, perspective: Transform4x4) -> Self {
        self.perspective = perspective;
        self
    }

    /// Binds the model matrix.
    pub fn with_model(mut self, model: Transform4x4) -> Self {
        self.model = model;
        self
    }

    pub fn perspective(&self) -> Transform4x4 {
        self.perspective
    }

    pub fn model(&self) -> Transform4x4 {
        self.model
    }

    /// Transforms a single position.
    #[inline]
    pub fn transform(&self, position: Position2D) -> ClipPosition {
        transform_vertex(position, &self.perspective, &self.model)
    }

    /// Transforms every vertex of a batch, preserving order.
    pub fn transform_batch(&self, vertices: &[Vertex2d]) -> Vec<ClipPosition> {
        log::trace!("transforming batch of {} vertices", vertices.len());
        vertices
            .iter()
            .map(|vertex| self.transform(vertex.position()))
            .collect()
    }

    /// Transforms a batch into caller-provided output slots.
    ///
    /// `out` must have exactly one slot per vertex. On a length mismatch
    /// nothing is written.
    pub fn transform_into(
        &self,
        vertices: &[Vertex2d],
        out: &mut [ClipPosition],
    ) -> StageResult<()> {
        if out.len() != vertices.len() {
            log::warn!(
                "output slots ({}) do not match vertex count ({})",
                out.len(),
                vertices.len()
            );
            return Err(StageError::OutputLength {
                expected: vertices.len(),
                actual: out.len(),
            });
        }

        log::trace!("transforming batch of {} vertices in place", vertices.len());
        for (slot, vertex) in out.iter_mut().zip(vertices) {
            *slot = self.transform(vertex.position());
        }
        Ok(())
    }
}

impl From<&TransformUniforms> for VertexTransformer {
    fn from(uniforms: &TransformUniforms) -> Self {
        Self::from_matrices(uniforms.perspective(), uniforms.model())
    }
}

impl From<TransformUniforms> for VertexTransformer {
    fn from(uniforms: TransformUniforms) -> Self {
        Self::from(&uniforms)
    }
}
