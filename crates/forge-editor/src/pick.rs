//! Ray-based face picking over the registry.

use crate::registry::SolidRegistry;
use forge_math::{intersect_front_face, Ray};
use serde::{Deserialize, Serialize};

/// A face of a registered solid targeted by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFace {
    pub solid_index: usize,
    pub face_index: usize,
}

/// Scan every face of every registered solid and return the nearest
/// front-facing hit along `ray`, or `None` when nothing is hit.
///
/// The strict `<` comparison on the hit parameter means the first face
/// reaching a given distance wins ties; iteration is registry order then
/// face order, so the result is deterministic. Cost is linear in the total
/// face count; the registries this editor builds stay far too small for an
/// acceleration structure to pay off.
pub fn find_selected_face(registry: &SolidRegistry, ray: &Ray) -> Option<SelectedFace> {
    let mut selected = None;
    let mut min_t = f64::MAX;
    for (solid_index, solid) in registry.solids().iter().enumerate() {
        let mesh = &solid.mesh;
        for face_index in 0..mesh.face_count() {
            let [v0, v1, v2] = mesh.face_positions(face_index);
            let normal = mesh.face_normal(face_index);
            let Some(t) = intersect_front_face(ray, v0, v1, v2, normal) else {
                continue;
            };
            if t < min_t {
                min_t = t;
                selected = Some(SelectedFace {
                    solid_index,
                    face_index,
                });
            }
        }
    }
    selected
}
