use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at parameter t.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_at() {
        let ray = Ray::new(dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0));
        let p = ray.at(5.0);
        assert!((p - dvec3(5.0, 0.0, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_new_normalizes_direction() {
        let ray = Ray::new(dvec3(1.0, 2.0, 3.0), dvec3(0.0, 0.0, 10.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-10);
    }
}
