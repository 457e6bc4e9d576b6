//! # Clipspace
//!
//! **The vertex stage that takes 2D geometry to clip space.**
//!
//! Each vertex position `(x, y)` is lifted to `(x, y, 0, 1)`, transformed by
//! the model matrix, then by the perspective matrix. The result goes straight
//! to the rasterizer; perspective division and viewport mapping happen there.
//!
//! ## Quick Start
//!
//! ```
//! use clipspace::*;
//!
//! let stage = VertexTransformer::new()
//!     .with_perspective(Mat4::IDENTITY)
//!     .with_model(Mat4::from_translation(Vec3::new(3.0, 0.0, 0.0)));
//!
//! let clip = stage.transform(Vec2::new(1.0, 2.0));
//! assert_eq!(clip, Vec4::new(4.0, 2.0, 0.0, 1.0));
//! ```
//!
//! ## On the GPU
//!
//! The same stage ships as WGSL together with the layouts it binds:
//!
//! - [`Vertex2d::LAYOUT`] — `position`, `Float32x2` at location 0
//! - [`TransformUniforms::LAYOUT_ENTRY`] — `perspective` and `matrix` at group 0, binding 0
//! - [`VERTEX_SHADER`] / [`shader_module_descriptor`] — entry point [`VERTEX_ENTRY_POINT`]
//!
//! Device creation, buffer upload and pipeline setup belong to the host
//! renderer.

mod error;
mod shader;
mod transform;
mod uniforms;
mod vertex;

pub use error::{StageError, StageResult};
pub use shader::{
    UNIFORM_BINDING, UNIFORM_GROUP, VERTEX_ENTRY_POINT, VERTEX_SHADER, shader_module_descriptor,
};
pub use transform::{
    ClipPosition, Position2D, Transform4x4, VertexTransformer, homogenize, transform_vertex,
};
pub use uniforms::{MATRIX, PERSPECTIVE, TransformUniforms};
pub use vertex::Vertex2d;

// Re-export glam math types for convenience
pub use glam::{Mat4, Vec2, Vec3, Vec4};
