//! Interactive solid-construction core.
//!
//! A [`SolidRegistry`] holds the constructed polyhedra, [`pick`] targets one
//! of their faces along a camera ray, the geometry kernel in `forge-mesh`
//! grows a new solid from that face, and every registry mutation flows
//! through the [`CommandLog`] so it can be undone and redone. The
//! [`Editor`] controller ties these together for the host's input layer.

pub mod command;
pub mod editor;
pub mod pick;
pub mod registry;
pub mod solid;

pub use command::{AddCommand, Command, CommandLog, RemoveCommand};
pub use editor::{Editor, EditorConfig};
pub use pick::{find_selected_face, SelectedFace};
pub use registry::SolidRegistry;
pub use solid::{solid_from_face, Solid, SolidKind};
