//! Regular tetrahedra and octahedra grown from a single seed face.
//!
//! Both builders place the new body on the *negative* side of the seed
//! triangle's own normal, so the seed triangle itself, with its winding
//! unchanged, ends up as an outward-wound face of the finished solid.
//! Callers growing from an existing solid pass the seed face with reversed
//! winding to extend outward.
//!
//! Degenerate seed faces (zero-length edges, collinear points) are not
//! validated and produce NaN normals.

use crate::Mesh;
use forge_math::{Point3, Vector3};

/// Outward normal of a counter-clockwise wound triangle.
pub fn normal_for_face(a: Point3, b: Point3, c: Point3) -> Vector3 {
    (b - a).cross(c - a).normalize()
}

/// One flat normal per face, duplicated across its three vertices.
fn flat_normals(positions: &[Point3]) -> Vec<Vector3> {
    let mut normals = Vec::with_capacity(positions.len());
    for tri in positions.chunks_exact(3) {
        let n = normal_for_face(tri[0], tri[1], tri[2]);
        normals.extend_from_slice(&[n, n, n]);
    }
    normals
}

/// Pack face-ordered vertices into a mesh with flat normals and sequential
/// face indices.
fn face_packed(positions: Vec<Point3>) -> Mesh {
    let normals = flat_normals(&positions);
    let face_indices = (0..positions.len() as u32 / 3)
        .flat_map(|f| [f, f, f])
        .collect();
    Mesh {
        positions,
        normals,
        face_indices,
    }
}

fn tetra_mesh(v0: Point3, v1: Point3, v2: Point3, v3: Point3) -> Mesh {
    face_packed(vec![v0, v2, v3, v0, v1, v2, v0, v3, v1, v1, v3, v2])
}

/// Build a regular tetrahedron with `(a, b, c)` as one face.
///
/// The apex sits below the face centroid at the exact altitude of a regular
/// tetrahedron, `edge * sqrt(6) / 3`.
pub fn tetra_from_face(a: Point3, b: Point3, c: Point3) -> Mesh {
    let n = normal_for_face(a, b, c);
    let centroid = (a + b + c) / 3.0;
    let edge_length = (c - a).length();
    let height = edge_length * 6.0_f64.sqrt() / 3.0;
    let d = centroid - n * height;
    tetra_mesh(a, b, c, d)
}

fn octa_mesh(
    top: Point3,
    bottom: Point3,
    front: Point3,
    back: Point3,
    left: Point3,
    right: Point3,
) -> Mesh {
    face_packed(vec![
        right, top, front, //
        back, top, right, //
        left, top, back, //
        front, top, left, //
        right, front, bottom, //
        back, right, bottom, //
        left, back, bottom, //
        front, left, bottom,
    ])
}

/// Build a regular octahedron with `(front, top, left)` as one face.
///
/// The octahedron's center lies one inscribed-sphere radius
/// (`side * sqrt(6) / 6`) behind the face centroid; the three remaining
/// vertices are point reflections of the seed vertices through that center.
pub fn octa_from_face(front: Point3, top: Point3, left: Point3) -> Mesh {
    let n = normal_for_face(front, top, left);
    let side_length = (left - front).length();
    let inscribed_radius = side_length * 6.0_f64.sqrt() / 6.0;
    let face_center = (front + top + left) / 3.0;
    let center = face_center - n * inscribed_radius;
    let bottom = center - (top - center);
    let back = center - (front - center);
    let right = center - (left - center);
    octa_mesh(top, bottom, front, back, left, right)
}
