//! The per-batch uniform block.
//!
//! [`TransformUniforms`] carries both matrices the stage reads, in the byte
//! layout the WGSL shader expects:
//!
//! | Uniform       | WGSL type       | Offset |
//! |---------------|-----------------|--------|
//! | `perspective` | `mat4x4<f32>`   | 0      |
//! | `matrix`      | `mat4x4<f32>`   | 64     |
//!
//! Matrices are stored column-major: each inner `[f32; 4]` is one column, and
//! a translation lives in the last column. This is the layout produced by
//! [`Mat4::to_cols_array_2d`].
//!
//! Uniforms are addressed by name, mirroring how an external binding layer
//! hands them over:
//!
//! ```
//! use clipspace::{Mat4, TransformUniforms, Vec3};
//!
//! let mut uniforms = TransformUniforms::default();
//! uniforms.set("perspective", Mat4::orthographic_rh(0.0, 800.0, 600.0, 0.0, -1.0, 1.0))?;
//! uniforms.set("matrix", Mat4::from_translation(Vec3::new(10.0, 20.0, 0.0)))?;
//!
//! assert!(uniforms.set("view", Mat4::IDENTITY).is_err());
//! # Ok::<(), clipspace::StageError>(())
//! ```

use crate::error::{StageError, StageResult};
use crate::transform::{Transform4x4, VertexTransformer};
use glam::Mat4;

/// Name of the projection uniform.
pub const PERSPECTIVE: &str = "perspective";

/// Name of the model uniform.
pub const MATRIX: &str = "matrix";

/// Uniform block holding the perspective and model matrices.
///
/// Constant across every vertex of a batch. Upload it with
/// `queue.write_buffer(&buffer, 0, uniforms.as_bytes())` between batches.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniforms {
    /// Projection matrix, applied second.
    pub perspective: [[f32; 4]; 4],
    /// Model matrix, applied first.
    pub matrix: [[f32; 4]; 4],
}

impl Default for TransformUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

impl TransformUniforms {
    /// Size of the block in bytes.
    pub const SIZE: usize = std::mem::size_of::<TransformUniforms>();

    /// Bind group layout entry for the block (group 0, binding 0).
    ///
    /// Visible to the vertex stage only.
    pub const LAYOUT_ENTRY: wgpu::BindGroupLayoutEntry = wgpu::BindGroupLayoutEntry {
        binding: crate::shader::UNIFORM_BINDING,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(Self::SIZE as u64),
        },
        count: None,
    };

    pub fn new(perspective: Transform4x4, model: Transform4x4) -> Self {
        Self {
            perspective: perspective.to_cols_array_2d(),
            matrix: model.to_cols_array_2d(),
        }
    }

    pub fn perspective(&self) -> Transform4x4 {
        Mat4::from_cols_array_2d(&self.perspective)
    }

    pub fn model(&self) -> Transform4x4 {
        Mat4::from_cols_array_2d(&self.matrix)
    }

    /// Binds a matrix by uniform name.
    ///
    /// Accepts [`PERSPECTIVE`] and [`MATRIX`]; any other name is rejected and
    /// leaves the block unchanged.
    pub fn set(&mut self, name: &str, value: Transform4x4) -> StageResult<()> {
        let slot = self.slot_mut(name)?;
        *slot = value.to_cols_array_2d();
        log::debug!("bound uniform '{}'", name);
        Ok(())
    }

    /// Binds a matrix by uniform name from 16 column-major floats.
    pub fn set_columns(&mut self, name: &str, columns: &[f32]) -> StageResult<()> {
        let Ok(columns) = <&[f32; 16]>::try_from(columns) else {
            log::warn!(
                "rejected uniform '{}' with {} components",
                name,
                columns.len()
            );
            return Err(StageError::MatrixShape {
                name: name.to_string(),
                len: columns.len(),
            });
        };
        self.set(name, Mat4::from_cols_array(columns))
    }

    /// Reads a matrix back by uniform name.
    pub fn get(&self, name: &str) -> StageResult<Transform4x4> {
        match name {
            PERSPECTIVE => Ok(self.perspective()),
            MATRIX => Ok(self.model()),
            _ => Err(StageError::UnknownUniform(name.to_string())),
        }
    }

    /// Raw bytes of the block, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Decodes a block from raw bytes. The buffer need not be aligned.
    pub fn from_bytes(bytes: &[u8]) -> StageResult<Self> {
        if bytes.len() != Self::SIZE {
            log::warn!("rejected uniform block of {} bytes", bytes.len());
            return Err(StageError::UniformBytes {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// The CPU stage bound to these matrices.
    pub fn transformer(&self) -> VertexTransformer {
        VertexTransformer::from(self)
    }

    fn slot_mut(&mut self, name: &str) -> StageResult<&mut [[f32; 4]; 4]> {
        match name {
            PERSPECTIVE => Ok(&mut self.perspective),
            MATRIX => Ok(&mut self.matrix),
            _ => {
                log::warn!("rejected unknown uniform '{}'", name);
                Err(StageError::UnknownUniform(name.to_string()))
            }
        }
    }
}

impl From<VertexTransformer> for TransformUniforms {
    fn from(stage: VertexTransformer) -> Self {
        Self::new(stage.perspective(), stage.model())
    }
}
