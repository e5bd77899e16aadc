use forge_core::Validate;
use forge_math::Transform;
use forge_mesh::{octa_from_face, tetra_from_face, Mesh};
use forge_render::{RenderBackend, RenderHandle};
use serde::{Deserialize, Serialize};

/// The two solid kinds the geometry kernel can grow from a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolidKind {
    Tetrahedron,
    Octahedron,
}

impl SolidKind {
    /// The other kind.
    pub fn toggled(self) -> Self {
        match self {
            Self::Tetrahedron => Self::Octahedron,
            Self::Octahedron => Self::Tetrahedron,
        }
    }
}

/// One constructed polyhedron: geometry plus display state.
///
/// Built only through [`Solid::from_mesh`], which registers the mesh with
/// the render backend exactly once; never mutated in place afterwards.
#[derive(Debug, Clone)]
pub struct Solid {
    pub kind: SolidKind,
    pub mesh: Mesh,
    /// World transform; identity for every solid built through the editor.
    pub transform: Transform,
    pub color: [f32; 3],
    pub alpha: f32,
    /// Distance from the centroid to a vertex, kept as a coarse broad-phase
    /// bound.
    pub circumsphere_radius: f64,
    pub render: RenderHandle,
}

impl Solid {
    pub fn from_mesh(
        kind: SolidKind,
        mesh: Mesh,
        color: [f32; 3],
        alpha: f32,
        backend: &mut dyn RenderBackend,
    ) -> Self {
        debug_assert!(mesh.validate().is_ok());
        let render = backend.init_rendering(&mesh);
        let circumsphere_radius = mesh.circumsphere_radius();
        Self {
            kind,
            mesh,
            transform: Transform::identity(),
            color,
            alpha,
            circumsphere_radius,
            render,
        }
    }
}

/// Grow a new solid of `kind` attached to face `face` of `base`.
///
/// The seed triangle is handed to the builders with reversed winding, so the
/// new body extends outward, away from `base`.
pub fn solid_from_face(
    base: &Solid,
    face: usize,
    kind: SolidKind,
    color: [f32; 3],
    alpha: f32,
    backend: &mut dyn RenderBackend,
) -> Solid {
    let [v0, v2, v1] = base.mesh.face_positions(face);
    let mesh = match kind {
        SolidKind::Tetrahedron => tetra_from_face(v0, v1, v2),
        SolidKind::Octahedron => octa_from_face(v0, v1, v2),
    };
    Solid::from_mesh(kind, mesh, color, alpha, backend)
}
