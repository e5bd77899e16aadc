use crate::pipeline::{prepare_mesh, RenderMesh};
use forge_mesh::Mesh;

/// Opaque handle to the per-solid rendering state held by the backend. The
/// editor stores one per solid and never looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(u64);

impl RenderHandle {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RenderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Boundary to the rendering layer. `init_rendering` is called exactly once
/// per newly constructed solid.
pub trait RenderBackend {
    fn init_rendering(&mut self, mesh: &Mesh) -> RenderHandle;
}

/// Backend that packs GPU-shaped buffers without a device. Serves tests and
/// headless tools; a windowed host supplies its own implementation.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    next_handle: u64,
    meshes: Vec<(RenderHandle, RenderMesh)>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of meshes uploaded so far.
    pub fn uploaded(&self) -> usize {
        self.meshes.len()
    }

    /// Look up the prepared buffers behind a handle.
    pub fn mesh(&self, handle: RenderHandle) -> Option<&RenderMesh> {
        self.meshes
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, m)| m)
    }
}

impl RenderBackend for HeadlessRenderer {
    fn init_rendering(&mut self, mesh: &Mesh) -> RenderHandle {
        let handle = RenderHandle(self.next_handle);
        self.next_handle += 1;
        self.meshes.push((handle, prepare_mesh(mesh)));
        handle
    }
}
