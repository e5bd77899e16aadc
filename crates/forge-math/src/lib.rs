pub mod ray;
pub mod transform;
pub mod triangle;

pub use glam::{DMat3, DMat4, DVec2, DVec3, DVec4};
pub use ray::Ray;
pub use transform::Transform;
pub use triangle::intersect_front_face;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
