//! Editor controller: turns picks into geometry-kernel calls and routes all
//! registry mutations through the command log.

use crate::command::{AddCommand, Command, CommandLog, RemoveCommand};
use crate::pick::{find_selected_face, SelectedFace};
use crate::registry::SolidRegistry;
use crate::solid::{solid_from_face, Solid, SolidKind};
use forge_math::{Point3, Ray};
use forge_mesh::tetra_from_face;
use forge_render::{Camera, RenderBackend};
use serde::{Deserialize, Serialize};

/// Display and seeding knobs for the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Color of committed solids.
    pub solid_color: [f32; 3],
    /// Color of the phantom preview drawn over the selected face.
    pub phantom_color: [f32; 3],
    pub phantom_alpha: f32,
    /// Edge length of the seed tetrahedron.
    pub seed_edge: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            solid_color: [0.1, 0.1, 0.7],
            phantom_color: [0.0, 1.0, 0.0],
            phantom_alpha: 0.3,
            seed_edge: 1.0,
        }
    }
}

/// The editor controller.
///
/// Owns the registry, the selection, and the command log; the camera and the
/// render backend are borrowed per call, so there is no ambient state. The
/// registry always holds at least one solid: construction seeds it with a
/// tetrahedron and removal refuses to take the last one.
pub struct Editor {
    registry: SolidRegistry,
    log: CommandLog,
    selection: Option<SelectedFace>,
    target_kind: SolidKind,
    phantom: Option<Solid>,
    config: EditorConfig,
}

impl Editor {
    pub fn new(backend: &mut dyn RenderBackend) -> Self {
        Self::with_config(EditorConfig::default(), backend)
    }

    pub fn with_config(config: EditorConfig, backend: &mut dyn RenderBackend) -> Self {
        let mut registry = SolidRegistry::new();
        registry.push(seed_tetra(&config, backend));
        Self {
            registry,
            log: CommandLog::new(),
            selection: None,
            target_kind: SolidKind::Tetrahedron,
            phantom: None,
            config,
        }
    }

    pub fn registry(&self) -> &SolidRegistry {
        &self.registry
    }

    pub fn selection(&self) -> Option<SelectedFace> {
        self.selection
    }

    /// Translucent preview of the solid the next add would create, present
    /// exactly while a face is selected.
    pub fn phantom(&self) -> Option<&Solid> {
        self.phantom.as_ref()
    }

    /// The kind the next add and the phantom preview will use.
    pub fn target_kind(&self) -> SolidKind {
        self.target_kind
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    /// Recompute the selection from the camera ray and rebuild the phantom
    /// preview of the would-be-added solid.
    pub fn mouse_pick(&mut self, camera: &Camera, backend: &mut dyn RenderBackend) {
        let ray = Ray::new(camera.position(), camera.direction());
        self.selection = find_selected_face(&self.registry, &ray);
        self.phantom = self.selection.map(|selected| {
            tracing::debug!(
                "picked solid {} face {}",
                selected.solid_index,
                selected.face_index
            );
            solid_from_face(
                &self.registry.solids()[selected.solid_index],
                selected.face_index,
                self.target_kind,
                self.config.phantom_color,
                self.config.phantom_alpha,
                backend,
            )
        });
    }

    /// Construct a solid of `kind` on the selected face and commit it
    /// through the command log. Does nothing without a selection.
    pub fn add_to_selected_face(&mut self, kind: SolidKind, backend: &mut dyn RenderBackend) {
        let Some(selected) = self.selection else {
            tracing::debug!("add ignored: no face selected");
            return;
        };
        // The selection can outlive the solid it pointed at across
        // undo/redo; treat a stale index like a missing selection.
        let Some(base) = self.registry.get(selected.solid_index) else {
            tracing::debug!("add ignored: selection index {} is stale", selected.solid_index);
            return;
        };
        if selected.face_index >= base.mesh.face_count() {
            tracing::debug!("add ignored: face index {} is stale", selected.face_index);
            return;
        }
        let new_solid = solid_from_face(
            base,
            selected.face_index,
            kind,
            self.config.solid_color,
            1.0,
            backend,
        );
        tracing::info!("adding {:?} on solid {} face {}", kind, selected.solid_index, selected.face_index);
        self.commit(Command::Add(AddCommand::Pending { solid: new_solid }));
        self.clear_selection();
    }

    /// Remove the selected solid through the command log. Refused when no
    /// face is selected or when removal would empty the registry.
    pub fn remove_selected_object(&mut self) {
        let Some(selected) = self.selection else {
            tracing::debug!("remove ignored: no face selected");
            return;
        };
        if selected.solid_index >= self.registry.len() {
            tracing::debug!("remove ignored: selection index {} is stale", selected.solid_index);
            return;
        }
        if self.registry.len() <= 1 {
            tracing::debug!("remove ignored: registry would become empty");
            return;
        }
        tracing::info!("removing solid {}", selected.solid_index);
        self.commit(Command::Remove(RemoveCommand::Pending {
            index: selected.solid_index,
        }));
        self.clear_selection();
    }

    pub fn undo(&mut self) {
        self.log.undo(&mut self.registry);
    }

    pub fn redo(&mut self) {
        self.log.redo(&mut self.registry);
    }

    /// Swap the kind the next add and the phantom preview will use.
    pub fn toggle_target_kind(&mut self) {
        self.target_kind = self.target_kind.toggled();
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.phantom = None;
    }

    fn commit(&mut self, command: Command) {
        self.log.push(command);
        self.log.apply_pending(&mut self.registry);
    }
}

/// Seed tetrahedron on the ground plane, wound so the apex points up.
fn seed_tetra(config: &EditorConfig, backend: &mut dyn RenderBackend) -> Solid {
    let e = config.seed_edge;
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(e, 0.0, 0.0);
    let c = Point3::new(e / 2.0, 0.0, e * 3.0_f64.sqrt() / 2.0);
    let mesh = tetra_from_face(a, b, c);
    Solid::from_mesh(
        SolidKind::Tetrahedron,
        mesh,
        config.solid_color,
        1.0,
        backend,
    )
}
