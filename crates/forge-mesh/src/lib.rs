pub mod mesh;
pub mod platonic;

pub use mesh::Mesh;
pub use platonic::{normal_for_face, octa_from_face, tetra_from_face};
