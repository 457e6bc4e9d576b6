//! WGSL source of the vertex stage.
//!
//! The shader mirrors [`transform_vertex`](crate::transform_vertex) on the GPU:
//! it reads [`Vertex2d`](crate::Vertex2d) at location 0 and
//! [`TransformUniforms`](crate::TransformUniforms) at group 0, binding 0, and
//! writes the clip position to `@builtin(position)`.
//!
//! Compiling the module and building the render pipeline are left to the
//! caller:
//!
//! ```ignore
//! let module = device.create_shader_module(clipspace::shader_module_descriptor());
//! let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
//!     label: Some("Transform Uniform Layout"),
//!     entries: &[TransformUniforms::LAYOUT_ENTRY],
//! });
//! ```

/// Vertex entry point in [`VERTEX_SHADER`].
pub const VERTEX_ENTRY_POINT: &str = "vs_main";

/// Bind group holding the uniform block.
pub const UNIFORM_GROUP: u32 = 0;

/// Binding of the uniform block within its group.
pub const UNIFORM_BINDING: u32 = 0;

/// Vertex stage: model first, then perspective.
pub const VERTEX_SHADER: &str = r#"
struct TransformUniforms {
    perspective: mat4x4<f32>,
    model: mat4x4<f32>,
}

@group(0) @binding(0) var<uniform> u: TransformUniforms;

@vertex
fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
    let model_space = u.model * vec4<f32>(position, 0.0, 1.0);
    return u.perspective * model_space;
}
"#;

/// Shader module descriptor for [`VERTEX_SHADER`].
pub fn shader_module_descriptor() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("Clipspace Vertex Shader"),
        source: wgpu::ShaderSource::Wgsl(VERTEX_SHADER.into()),
    }
}
