//! Headless editing session: pick a face of the seed tetrahedron, grow an
//! octahedron on it, then walk the history back and forth.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p forge-editor --example build_session
//! ```

use forge_editor::{Editor, SolidKind};
use forge_math::Point3;
use forge_render::{Camera, HeadlessRenderer};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut backend = HeadlessRenderer::new();
    let mut editor = Editor::new(&mut backend);
    println!("seeded registry: {} solid(s)", editor.registry().len());

    // Look up at the bottom face of the seed tetrahedron.
    let target = editor.registry().solids()[0].mesh.face_centroid(1);
    let camera = Camera::look_at(target + Point3::new(0.0, -4.0, 0.0), target);

    editor.mouse_pick(&camera, &mut backend);
    match editor.selection() {
        Some(face) => println!("picked solid {} face {}", face.solid_index, face.face_index),
        None => println!("picked nothing"),
    }

    editor.add_to_selected_face(SolidKind::Octahedron, &mut backend);
    println!("after add: {} solid(s)", editor.registry().len());

    editor.undo();
    println!("after undo: {} solid(s)", editor.registry().len());

    editor.redo();
    println!("after redo: {} solid(s)", editor.registry().len());

    for (i, solid) in editor.registry().iter().enumerate() {
        println!(
            "solid {i}: {:?}, {} faces, circumsphere radius {:.3}, render {}",
            solid.kind,
            solid.mesh.face_count(),
            solid.circumsphere_radius,
            solid.render
        );
    }
    println!("meshes uploaded to the backend: {}", backend.uploaded());
}
