//! Reversible registry commands and the linear undo/redo log.

use crate::registry::SolidRegistry;
use crate::solid::Solid;

/// Command that registers a new solid.
///
/// The registry index a solid receives is only known once the command runs,
/// so the command starts `Pending`, carrying the solid, and becomes
/// `Applied`, carrying the assigned index. Undo recovers the solid from the
/// registry and moves the command back to `Pending`.
#[derive(Debug, Clone)]
pub enum AddCommand {
    Pending { solid: Solid },
    Applied { index: usize },
}

/// Command that removes the solid at an index.
///
/// Apply captures the removed solid so undo can re-insert it. The re-insert
/// goes to the *end* of the registry, not the original index, and the
/// pending index follows the solid to its new position.
#[derive(Debug, Clone)]
pub enum RemoveCommand {
    Pending { index: usize },
    Applied { solid: Solid },
}

#[derive(Debug, Clone)]
pub enum Command {
    Add(AddCommand),
    Remove(RemoveCommand),
}

impl Command {
    fn apply(&mut self, registry: &mut SolidRegistry) {
        match self {
            Command::Add(state) => {
                if let AddCommand::Pending { solid } = state {
                    let index = registry.push(solid.clone());
                    tracing::debug!("apply add: solid registered at index {}", index);
                    *state = AddCommand::Applied { index };
                }
            }
            Command::Remove(state) => {
                if let RemoveCommand::Pending { index } = state {
                    let solid = registry.remove(*index);
                    tracing::debug!("apply remove: solid taken from index {}", index);
                    *state = RemoveCommand::Applied { solid };
                }
            }
        }
    }

    fn undo(&mut self, registry: &mut SolidRegistry) {
        match self {
            Command::Add(state) => {
                if let AddCommand::Applied { index } = state {
                    let solid = registry.remove(*index);
                    tracing::debug!("undo add: solid removed from index {}", index);
                    *state = AddCommand::Pending { solid };
                }
            }
            Command::Remove(state) => {
                if let RemoveCommand::Applied { solid } = state {
                    let index = registry.push(solid.clone());
                    tracing::debug!("undo remove: solid re-registered at index {}", index);
                    *state = RemoveCommand::Pending { index };
                }
            }
        }
    }
}

/// Linear undo/redo history over registry commands.
///
/// `last_applied` is the cursor: every command at or before it has been
/// applied, everything after it is pending or redo history. Pushing a new
/// command discards the redo tail past the cursor.
#[derive(Debug, Default)]
pub struct CommandLog {
    commands: Vec<Command>,
    last_applied: Option<usize>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn applied_len(&self) -> usize {
        self.last_applied.map_or(0, |i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.last_applied.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.applied_len() < self.commands.len()
    }

    /// Append a command, discarding any redo history past the cursor.
    pub fn push(&mut self, command: Command) {
        self.commands.truncate(self.applied_len());
        self.commands.push(command);
    }

    /// Apply every command past the cursor, in order.
    pub fn apply_pending(&mut self, registry: &mut SolidRegistry) {
        for index in self.applied_len()..self.commands.len() {
            self.apply(index, registry);
        }
    }

    fn apply(&mut self, index: usize, registry: &mut SolidRegistry) {
        self.commands[index].apply(registry);
        self.last_applied = Some(index);
    }

    /// Revert the command at the cursor; no-op on empty history.
    pub fn undo(&mut self, registry: &mut SolidRegistry) {
        if let Some(index) = self.last_applied {
            self.commands[index].undo(registry);
            self.last_applied = index.checked_sub(1);
        }
    }

    /// Re-apply the command just past the cursor; no-op at the history end.
    pub fn redo(&mut self, registry: &mut SolidRegistry) {
        let next = self.applied_len();
        if next < self.commands.len() {
            self.apply(next, registry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solid::{Solid, SolidKind};
    use forge_math::Point3;
    use forge_mesh::{octa_from_face, tetra_from_face};
    use forge_render::HeadlessRenderer;

    fn solid(kind: SolidKind, backend: &mut HeadlessRenderer) -> Solid {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.5, 3.0_f64.sqrt() / 2.0, 0.0);
        let mesh = match kind {
            SolidKind::Tetrahedron => tetra_from_face(a, b, c),
            SolidKind::Octahedron => octa_from_face(a, b, c),
        };
        Solid::from_mesh(kind, mesh, [0.1, 0.1, 0.7], 1.0, backend)
    }

    fn add(kind: SolidKind, backend: &mut HeadlessRenderer) -> Command {
        Command::Add(AddCommand::Pending {
            solid: solid(kind, backend),
        })
    }

    #[test]
    fn test_apply_pending_assigns_indices_in_order() {
        let mut backend = HeadlessRenderer::new();
        let mut registry = SolidRegistry::new();
        let mut log = CommandLog::new();

        log.push(add(SolidKind::Tetrahedron, &mut backend));
        log.push(add(SolidKind::Octahedron, &mut backend));
        log.apply_pending(&mut registry);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.solids()[0].kind, SolidKind::Tetrahedron);
        assert_eq!(registry.solids()[1].kind, SolidKind::Octahedron);
        assert!(log.can_undo());
        assert!(!log.can_redo());
    }

    #[test]
    fn test_undo_add_removes_recorded_index() {
        let mut backend = HeadlessRenderer::new();
        let mut registry = SolidRegistry::new();
        let mut log = CommandLog::new();

        log.push(add(SolidKind::Tetrahedron, &mut backend));
        log.apply_pending(&mut registry);
        log.undo(&mut registry);

        assert!(registry.is_empty());
        assert!(!log.can_undo());
        assert!(log.can_redo());
    }

    #[test]
    fn test_redo_reapplies_the_same_solid() {
        let mut backend = HeadlessRenderer::new();
        let mut registry = SolidRegistry::new();
        let mut log = CommandLog::new();

        log.push(add(SolidKind::Octahedron, &mut backend));
        log.apply_pending(&mut registry);
        let before = registry.solids()[0].mesh.clone();

        log.undo(&mut registry);
        log.redo(&mut registry);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.solids()[0].mesh, before);
    }

    #[test]
    fn test_remove_snapshot_round_trip() {
        let mut backend = HeadlessRenderer::new();
        let mut registry = SolidRegistry::new();
        let mut log = CommandLog::new();

        log.push(add(SolidKind::Tetrahedron, &mut backend));
        log.push(add(SolidKind::Octahedron, &mut backend));
        log.apply_pending(&mut registry);

        log.push(Command::Remove(RemoveCommand::Pending { index: 0 }));
        log.apply_pending(&mut registry);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.solids()[0].kind, SolidKind::Octahedron);

        // Undo re-inserts the snapshot at the end of the registry.
        log.undo(&mut registry);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.solids()[0].kind, SolidKind::Octahedron);
        assert_eq!(registry.solids()[1].kind, SolidKind::Tetrahedron);

        // Redo removes it from its new position.
        log.redo(&mut registry);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.solids()[0].kind, SolidKind::Octahedron);
    }

    #[test]
    fn test_push_truncates_redo_tail() {
        let mut backend = HeadlessRenderer::new();
        let mut registry = SolidRegistry::new();
        let mut log = CommandLog::new();

        log.push(add(SolidKind::Tetrahedron, &mut backend));
        log.apply_pending(&mut registry);
        log.undo(&mut registry);

        log.push(add(SolidKind::Octahedron, &mut backend));
        log.apply_pending(&mut registry);

        // The tetrahedron branch is unreachable: redo is a no-op.
        assert_eq!(log.len(), 1);
        log.redo(&mut registry);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.solids()[0].kind, SolidKind::Octahedron);
    }

    #[test]
    fn test_boundary_no_ops() {
        let mut registry = SolidRegistry::new();
        let mut log = CommandLog::new();

        assert!(!log.can_undo());
        assert!(!log.can_redo());
        log.undo(&mut registry);
        log.redo(&mut registry);
        assert!(registry.is_empty());
        assert!(log.is_empty());
    }
}
