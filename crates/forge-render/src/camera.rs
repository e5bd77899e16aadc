use forge_math::{Point3, Vector3};

/// A look-at camera, reduced to the surface the editor consumes: a world
/// position and a unit view direction. View/projection matrices and movement
/// controls belong to the host application.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Point3,    // camera position
    pub target: Point3, // look-at target
    pub up: Vector3,    // up vector
}

impl Camera {
    pub fn new(eye: Point3, target: Point3, up: Vector3) -> Self {
        Self { eye, target, up }
    }

    /// Camera at `eye` looking at `target` with +Y up.
    pub fn look_at(eye: Point3, target: Point3) -> Self {
        Self::new(eye, target, Vector3::Y)
    }

    pub fn position(&self) -> Point3 {
        self.eye
    }

    /// Unit view direction, from the eye toward the target.
    pub fn direction(&self) -> Vector3 {
        (self.target - self.eye).normalize()
    }
}

impl Default for Camera {
    /// Eye at (0, 0, 5), looking at the origin.
    fn default() -> Self {
        Self::look_at(Point3::new(0.0, 0.0, 5.0), Point3::ZERO)
    }
}
