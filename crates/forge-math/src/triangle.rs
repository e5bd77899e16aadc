//! Ray/triangle intersection for flat-shaded faces.

use crate::{Point3, Ray, Vector3};

/// Geometric ray/triangle test against a triangle whose face normal is
/// already known (flat-shaded meshes carry one normal per face).
///
/// Returns the ray parameter `t` of the hit, or `None` when the triangle is
/// back-facing with respect to the ray, lies behind its origin, or the plane
/// hit falls outside the triangle. The inside test uses strict edge
/// cross-product signs, so a hit exactly on an edge is rejected.
///
/// See <https://www.scratchapixel.com/lessons/3d-basic-rendering/ray-tracing-rendering-a-triangle/ray-triangle-intersection-geometric-solution>
pub fn intersect_front_face(
    ray: &Ray,
    v0: Point3,
    v1: Point3,
    v2: Point3,
    normal: Vector3,
) -> Option<f64> {
    if normal.dot(ray.direction) >= 0.0 {
        // triangle is facing away from the ray
        return None;
    }

    let plane_distance = normal.dot(v0);
    let t = -(normal.dot(ray.origin) - plane_distance) / normal.dot(ray.direction);
    if t <= 0.0 {
        // triangle is behind the ray
        return None;
    }

    let point = ray.at(t);
    let e0 = v1 - v0;
    let e1 = v2 - v1;
    let e2 = v0 - v2;
    let inside = normal.dot(e0.cross(point - v0)) > 0.0
        && normal.dot(e1.cross(point - v1)) > 0.0
        && normal.dot(e2.cross(point - v2)) > 0.0;

    inside.then_some(t)
}
