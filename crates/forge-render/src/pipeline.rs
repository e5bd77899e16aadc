use forge_math::{Point3, Vector3};
use forge_mesh::Mesh;

/// Vertex with f32 data packed for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl GpuVertex {
    /// Create a GPU vertex from mesh vertex data.
    pub fn from_mesh_vertex(pos: Point3, normal: Vector3) -> Self {
        Self {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            normal: [normal.x as f32, normal.y as f32, normal.z as f32],
        }
    }

    /// Convert vertex array to raw bytes for GPU upload.
    pub fn as_bytes(vertices: &[GpuVertex]) -> Vec<u8> {
        let size = std::mem::size_of::<GpuVertex>() * vertices.len();
        let mut bytes = Vec::with_capacity(size);
        unsafe {
            let ptr = vertices.as_ptr() as *const u8;
            bytes.extend_from_slice(std::slice::from_raw_parts(ptr, size));
        }
        bytes
    }
}

/// Prepared render data ready for GPU upload. Face-packed meshes draw
/// non-indexed, so there is only a vertex buffer.
#[derive(Debug, Clone)]
pub struct RenderMesh {
    pub vertices: Vec<GpuVertex>,
    pub vertex_buffer_bytes: Vec<u8>,
}

/// Convert a face-packed `Mesh` to GPU-ready buffers.
pub fn prepare_mesh(mesh: &Mesh) -> RenderMesh {
    let vertex_count = mesh.positions.len();
    let mut vertices = Vec::with_capacity(vertex_count);

    for i in 0..vertex_count {
        let pos = mesh.positions[i];
        let normal = mesh.normals.get(i).copied().unwrap_or(Vector3::Y);
        vertices.push(GpuVertex::from_mesh_vertex(pos, normal));
    }

    let vertex_buffer_bytes = GpuVertex::as_bytes(&vertices);

    RenderMesh {
        vertices,
        vertex_buffer_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_mesh() -> Mesh {
        Mesh {
            positions: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vector3::new(0.0, 0.0, 1.0); 3],
            face_indices: vec![0, 0, 0],
        }
    }

    #[test]
    fn test_gpu_vertex_size() {
        // 3 floats (position) + 3 floats (normal) = 6 floats = 24 bytes
        assert_eq!(std::mem::size_of::<GpuVertex>(), 24);
    }

    #[test]
    fn test_prepare_mesh_vertex_count() {
        let mesh = create_test_mesh();
        let render_mesh = prepare_mesh(&mesh);
        assert_eq!(render_mesh.vertices.len(), 3);
    }

    #[test]
    fn test_buffer_byte_size() {
        let mesh = create_test_mesh();
        let render_mesh = prepare_mesh(&mesh);

        // 3 vertices * 24 bytes each
        assert_eq!(render_mesh.vertex_buffer_bytes.len(), 3 * 24);
    }

    #[test]
    fn test_gpu_vertex_from_mesh_vertex() {
        let pos = Point3::new(1.0, 2.0, 3.0);
        let normal = Vector3::new(0.0, 1.0, 0.0);

        let vertex = GpuVertex::from_mesh_vertex(pos, normal);

        assert_eq!(vertex.position, [1.0, 2.0, 3.0]);
        assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_mesh_with_missing_normals() {
        let mut mesh = create_test_mesh();
        mesh.normals.clear();

        let render_mesh = prepare_mesh(&mesh);

        // Should fall back to +Y
        assert_eq!(render_mesh.vertices.len(), 3);
        assert_eq!(render_mesh.vertices[0].normal, [0.0, 1.0, 0.0]);
    }
}
