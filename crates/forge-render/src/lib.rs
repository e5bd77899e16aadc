pub mod backend;
pub mod camera;
pub mod pipeline;

// Re-export main types
pub use backend::{HeadlessRenderer, RenderBackend, RenderHandle};
pub use camera::Camera;
pub use pipeline::{prepare_mesh, GpuVertex, RenderMesh};
