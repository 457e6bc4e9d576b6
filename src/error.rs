//! Errors raised at the binding boundary.
//!
//! The transform itself never fails. These errors only come from shape checks
//! where raw data enters the crate: uniform names, matrix and position slices,
//! raw byte streams, and caller-provided output slots.

use thiserror::Error;

/// Errors that can occur when binding inputs to the transform stage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StageError {
    /// A uniform was addressed by a name the stage does not declare.
    #[error("unknown uniform '{0}' (expected 'perspective' or 'matrix')")]
    UnknownUniform(String),

    /// A matrix was supplied with the wrong number of components.
    #[error("uniform '{name}' needs 16 components, got {len}")]
    MatrixShape { name: String, len: usize },

    /// A position was supplied with the wrong number of components.
    #[error("position needs 2 components, got {len}")]
    PositionShape { len: usize },

    /// A uniform block was decoded from a buffer of the wrong size.
    #[error("uniform block is {expected} bytes, got {actual}")]
    UniformBytes { expected: usize, actual: usize },

    /// A raw vertex stream could not be viewed as vertices.
    #[error("invalid vertex stream: {0}")]
    VertexBytes(bytemuck::PodCastError),

    /// The output slot array does not match the vertex count.
    #[error("output has {actual} slots for {expected} vertices")]
    OutputLength { expected: usize, actual: usize },
}

/// Result type for binding operations.
pub type StageResult<T> = Result<T, StageError>;
