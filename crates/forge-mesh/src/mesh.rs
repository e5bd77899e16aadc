use forge_core::{ForgeError, Result, Tolerance, Validate};
use forge_math::{Point3, Vector3};

/// Face-packed triangle mesh: vertices are stored three per face, in face
/// order, and all three vertices of a face carry the same flat normal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    /// Face number owning each vertex; empty when not assigned.
    pub face_indices: Vec<u32>,
}

impl Mesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn face_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// The three corner positions of face `face`, in winding order.
    pub fn face_positions(&self, face: usize) -> [Point3; 3] {
        [
            self.positions[face * 3],
            self.positions[face * 3 + 1],
            self.positions[face * 3 + 2],
        ]
    }

    /// The flat normal shared by all vertices of face `face`.
    pub fn face_normal(&self, face: usize) -> Vector3 {
        self.normals[face * 3]
    }

    /// Centroid of face `face`.
    pub fn face_centroid(&self, face: usize) -> Point3 {
        let [a, b, c] = self.face_positions(face);
        (a + b + c) / 3.0
    }

    /// Centroid of all vertices. For the face-packed platonic meshes every
    /// distinct vertex occurs the same number of times, so this is also the
    /// solid's centroid.
    pub fn centroid(&self) -> Point3 {
        if self.positions.is_empty() {
            return Point3::ZERO;
        }
        self.positions.iter().sum::<Point3>() / self.positions.len() as f64
    }

    /// Distance from the centroid to a vertex. For regular solids every
    /// vertex is equidistant, so this is the circumsphere radius used as a
    /// coarse broad-phase bound.
    pub fn circumsphere_radius(&self) -> f64 {
        if self.positions.is_empty() {
            return 0.0;
        }
        (self.positions[0] - self.centroid()).length()
    }
}

impl Validate for Mesh {
    fn validate(&self) -> Result<()> {
        if self.positions.len() % 3 != 0 {
            return Err(ForgeError::Mesh(format!(
                "vertex count {} is not a multiple of 3",
                self.positions.len()
            )));
        }
        if self.normals.len() != self.positions.len() {
            return Err(ForgeError::Mesh(format!(
                "normal count {} does not match vertex count {}",
                self.normals.len(),
                self.positions.len()
            )));
        }
        if !self.face_indices.is_empty() && self.face_indices.len() != self.positions.len() {
            return Err(ForgeError::Mesh(format!(
                "face index count {} does not match vertex count {}",
                self.face_indices.len(),
                self.positions.len()
            )));
        }
        let tol = Tolerance::default();
        for (i, n) in self.normals.iter().enumerate() {
            if !tol.linear_eq(n.length_squared(), 1.0) {
                return Err(ForgeError::Mesh(format!("normal {i} is not unit length")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_math::DVec3;

    fn dvec3(x: f64, y: f64, z: f64) -> Point3 {
        DVec3::new(x, y, z)
    }

    fn single_face() -> Mesh {
        Mesh {
            positions: vec![
                dvec3(0.0, 0.0, 0.0),
                dvec3(1.0, 0.0, 0.0),
                dvec3(0.0, 1.0, 0.0),
            ],
            normals: vec![dvec3(0.0, 0.0, 1.0); 3],
            face_indices: vec![0, 0, 0],
        }
    }

    #[test]
    fn test_counts() {
        let mesh = single_face();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_face_accessors() {
        let mesh = single_face();
        let [a, b, c] = mesh.face_positions(0);
        assert_eq!(a, dvec3(0.0, 0.0, 0.0));
        assert_eq!(b, dvec3(1.0, 0.0, 0.0));
        assert_eq!(c, dvec3(0.0, 1.0, 0.0));
        assert_eq!(mesh.face_normal(0), dvec3(0.0, 0.0, 1.0));

        let centroid = mesh.face_centroid(0);
        assert!((centroid - dvec3(1.0 / 3.0, 1.0 / 3.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::default();
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.centroid(), Point3::ZERO);
        assert_eq!(mesh.circumsphere_radius(), 0.0);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        single_face().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_normal_mismatch() {
        let mut mesh = single_face();
        mesh.normals.pop();
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_partial_face() {
        let mut mesh = single_face();
        mesh.positions.pop();
        assert!(mesh.validate().is_err());
    }
}
