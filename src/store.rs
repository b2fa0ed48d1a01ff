use crate::event::{EditEvent, EditEventKind};
use crate::object::{GameObject, ObjType, ObjectPatch, PropValue};
use crate::project::{ItemKind, Module, Project, Scene};
use rand::Rng;
use thiserror::Error;
use ulid::Ulid;

/// Recoverable store failures. Anything referencing a missing scene or
/// object is a silent no-op instead, since the intended effect is moot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// User input was malformed; the action is refused, never a crash.
    #[error("validation failed: {0}")]
    Validation(&'static str),
}

/// Commands the presentation layer dispatches into the store.
#[derive(Debug, Clone)]
pub enum Command {
    CreateScene {
        name: String,
        description: String,
    },
    CreateModule {
        name: String,
        description: String,
    },
    DeleteItem {
        id: Ulid,
    },
    AddObject {
        scene_id: Ulid,
        obj_type: ObjType,
    },
    DeleteObject {
        scene_id: Ulid,
        object_id: Ulid,
    },
    UpdateObject {
        scene_id: Ulid,
        object_id: Ulid,
        patch: ObjectPatch,
    },
    SetObjectProp {
        scene_id: Ulid,
        object_id: Ulid,
        key: String,
        value: PropValue,
    },
    SetSceneCode {
        scene_id: Ulid,
        code: String,
    },
    RenameScene {
        scene_id: Ulid,
        name: String,
    },
    SetSceneDescription {
        scene_id: Ulid,
        description: String,
    },
    SelectScene {
        id: Ulid,
    },
    SelectObject {
        id: Option<Ulid>,
    },
    ToggleVisibility {
        scene_id: Ulid,
        object_id: Ulid,
    },
}

/// Single source of truth for the live project plus ephemeral selection.
///
/// Every mutation touches only the affected scene/object path; objects in
/// unrelated scenes are never rebuilt or re-identified.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    /// The authoritative project
    project: Project,

    /// At most one active scene
    active_scene: Option<Ulid>,

    /// At most one selected object; always belongs to the active scene
    selected_object: Option<Ulid>,

    /// Event log for history tracking
    events: Vec<EditEvent>,
}

impl ProjectStore {
    /// Create a store over the given project, activating its first scene.
    pub fn new(project: Project) -> Self {
        let active_scene = project.scenes.first().map(|s| s.id);
        Self {
            project,
            active_scene,
            selected_object: None,
            events: Vec::new(),
        }
    }

    // ========== Snapshot access ==========

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn active_scene_id(&self) -> Option<Ulid> {
        self.active_scene
    }

    pub fn active_scene(&self) -> Option<&Scene> {
        self.active_scene.and_then(|id| self.project.scene(id))
    }

    pub fn selected_object_id(&self) -> Option<Ulid> {
        self.selected_object
    }

    pub fn selected_object(&self) -> Option<&GameObject> {
        let id = self.selected_object?;
        self.active_scene()?.object(id)
    }

    pub fn events(&self) -> &[EditEvent] {
        &self.events
    }

    // ========== Command dispatch ==========

    /// Apply a command. Only the create commands can fail; everything else
    /// degrades to a no-op when its target is gone.
    pub fn apply(&mut self, command: Command) -> Result<(), StoreError> {
        match command {
            Command::CreateScene { name, description } => {
                self.create_scene(&name, &description)?;
            }
            Command::CreateModule { name, description } => {
                self.create_module(&name, &description)?;
            }
            Command::DeleteItem { id } => {
                self.delete_item(id);
            }
            Command::AddObject { scene_id, obj_type } => {
                self.add_object(scene_id, obj_type);
            }
            Command::DeleteObject {
                scene_id,
                object_id,
            } => self.delete_object(scene_id, object_id),
            Command::UpdateObject {
                scene_id,
                object_id,
                patch,
            } => self.update_object(scene_id, object_id, patch),
            Command::SetObjectProp {
                scene_id,
                object_id,
                key,
                value,
            } => self.update_object_prop(scene_id, object_id, key, value),
            Command::SetSceneCode { scene_id, code } => self.update_scene_code(scene_id, code),
            Command::RenameScene { scene_id, name } => self.update_scene_name(scene_id, name),
            Command::SetSceneDescription {
                scene_id,
                description,
            } => self.update_scene_description(scene_id, description),
            Command::SelectScene { id } => self.select_scene(id),
            Command::SelectObject { id } => match id {
                Some(id) => self.select_object(id),
                None => self.clear_selection(),
            },
            Command::ToggleVisibility {
                scene_id,
                object_id,
            } => self.toggle_visibility(scene_id, object_id),
        }
        Ok(())
    }

    // ========== Scene / module CRUD ==========

    /// Create a scene and make it the active one.
    pub fn create_scene(&mut self, name: &str, description: &str) -> Result<Ulid, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation("scene name must not be empty"));
        }

        let scene = Scene::new(name, description);
        let id = scene.id;
        self.project.scenes.push(scene);

        self.log_event(EditEventKind::SceneCreated {
            id,
            name: name.to_string(),
        });
        log::info!("created scene {name:?}");

        self.set_active_scene(Some(id));
        Ok(id)
    }

    /// Create a module. Modules never affect the active scene.
    pub fn create_module(&mut self, name: &str, description: &str) -> Result<Ulid, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation("module name must not be empty"));
        }

        let module = Module::new(name, description);
        let id = module.id;
        self.project.modules.push(module);

        self.log_event(EditEventKind::ModuleCreated {
            id,
            name: name.to_string(),
        });
        log::info!("created module {name:?}");

        Ok(id)
    }

    /// Remove the scene or module with the given id. If the active scene was
    /// removed, the first remaining scene becomes active (or none).
    pub fn delete_item(&mut self, id: Ulid) -> Option<ItemKind> {
        if let Some(pos) = self.project.scenes.iter().position(|s| s.id == id) {
            let removed = self.project.scenes.remove(pos);
            self.log_event(EditEventKind::ItemDeleted {
                id,
                kind: ItemKind::Scene,
                name: removed.name,
            });

            if self.active_scene == Some(id) {
                let next = self.project.scenes.first().map(|s| s.id);
                self.set_active_scene(next);
            }
            return Some(ItemKind::Scene);
        }

        if let Some(pos) = self.project.modules.iter().position(|m| m.id == id) {
            let removed = self.project.modules.remove(pos);
            self.log_event(EditEventKind::ItemDeleted {
                id,
                kind: ItemKind::Module,
                name: removed.name,
            });
            return Some(ItemKind::Module);
        }

        log::debug!("delete_item: {id} not found, dropping");
        None
    }

    // ========== Object CRUD ==========

    /// Add a default-initialized object to a scene and select it.
    ///
    /// The name counter uses the scene's total object count, not a per-type
    /// count: adding rectangle, circle, rectangle yields `rectangle1`,
    /// `circle2`, `rectangle3`.
    pub fn add_object(&mut self, scene_id: Ulid, obj_type: ObjType) -> Option<Ulid> {
        let Some(scene) = self.project.scene_mut(scene_id) else {
            log::debug!("add_object: scene {scene_id} not found, dropping");
            return None;
        };

        let name = format!("{}{}", obj_type.tag(), scene.objects.len() + 1);

        // Spawn near the canvas anchor with a little jitter so stacked
        // additions stay distinguishable.
        let mut rng = rand::thread_rng();
        let x = 400.0 + rng.gen_range(-20.0..=20.0);
        let y = 300.0 + rng.gen_range(-20.0..=20.0);

        let object = GameObject::new(name.clone(), obj_type, x, y);
        let id = object.id;
        scene.objects.push(object);

        self.log_event(EditEventKind::ObjectAdded {
            scene_id,
            object_id: id,
            obj_type,
            name,
        });

        // Selection must stay within the active scene
        if self.active_scene == Some(scene_id) {
            self.selected_object = Some(id);
        }
        Some(id)
    }

    /// Remove an object; clears selection if it was selected.
    pub fn delete_object(&mut self, scene_id: Ulid, object_id: Ulid) {
        let Some(scene) = self.project.scene_mut(scene_id) else {
            return;
        };
        let Some(pos) = scene.objects.iter().position(|o| o.id == object_id) else {
            return;
        };

        scene.objects.remove(pos);
        self.log_event(EditEventKind::ObjectRemoved {
            scene_id,
            object_id,
        });

        if self.selected_object == Some(object_id) {
            self.selected_object = None;
        }
    }

    /// Shallow-merge the patch into an object. Locked objects ignore the
    /// transform fields (position/size) but still accept the rest.
    pub fn update_object(&mut self, scene_id: Ulid, object_id: Ulid, patch: ObjectPatch) {
        let Some(object) = self
            .project
            .scene_mut(scene_id)
            .and_then(|s| s.object_mut(object_id))
        else {
            log::debug!("update_object: {object_id} not found, dropping");
            return;
        };

        let transform_allowed = !object.locked;

        if let Some(name) = patch.name {
            object.name = name;
        }
        if let Some(color) = patch.color {
            object.color = color;
        }
        if let Some(visible) = patch.visible {
            object.visible = visible;
        }
        if let Some(locked) = patch.locked {
            object.locked = locked;
        }
        if transform_allowed {
            if let Some(x) = patch.x {
                object.x = x;
            }
            if let Some(y) = patch.y {
                object.y = y;
            }
            if let Some(w) = patch.w {
                object.w = w;
            }
            if let Some(h) = patch.h {
                object.h = h;
            }
        }

        self.log_event(EditEventKind::ObjectUpdated {
            scene_id,
            object_id,
        });
    }

    /// Merge one key into the object's props, preserving all other keys.
    pub fn update_object_prop(
        &mut self,
        scene_id: Ulid,
        object_id: Ulid,
        key: impl Into<String>,
        value: PropValue,
    ) {
        let Some(object) = self
            .project
            .scene_mut(scene_id)
            .and_then(|s| s.object_mut(object_id))
        else {
            return;
        };

        let key = key.into();
        object.props.insert(key.clone(), value);

        self.log_event(EditEventKind::ObjectPropSet {
            scene_id,
            object_id,
            key,
        });
    }

    /// Toggle an object's visibility flag. Works on locked objects too.
    pub fn toggle_visibility(&mut self, scene_id: Ulid, object_id: Ulid) {
        let Some(object) = self
            .project
            .scene(scene_id)
            .and_then(|s| s.object(object_id))
        else {
            return;
        };
        let visible = !object.visible;
        self.update_object(
            scene_id,
            object_id,
            ObjectPatch {
                visible: Some(visible),
                ..Default::default()
            },
        );
    }

    // ========== Scene field updates ==========

    pub fn update_scene_code(&mut self, scene_id: Ulid, code: String) {
        if let Some(scene) = self.project.scene_mut(scene_id) {
            scene.code = code;
            self.log_event(EditEventKind::SceneCodeChanged { scene_id });
        }
    }

    pub fn update_scene_name(&mut self, scene_id: Ulid, name: String) {
        if let Some(scene) = self.project.scene_mut(scene_id) {
            scene.name = name.clone();
            self.log_event(EditEventKind::SceneRenamed {
                scene_id,
                new_name: name,
            });
        }
    }

    pub fn update_scene_description(&mut self, scene_id: Ulid, description: String) {
        if let Some(scene) = self.project.scene_mut(scene_id) {
            scene.description = description;
            self.log_event(EditEventKind::SceneDescriptionChanged { scene_id });
        }
    }

    pub fn update_module_code(&mut self, module_id: Ulid, code: String) {
        if let Some(module) = self.project.module_mut(module_id) {
            module.code = code;
        }
    }

    // ========== Selection ==========

    /// Activate a scene; no-op if the id does not resolve.
    pub fn select_scene(&mut self, id: Ulid) {
        if self.project.scene(id).is_some() {
            self.set_active_scene(Some(id));
        }
    }

    /// Select an object in the active scene; no-op if it is not there.
    pub fn select_object(&mut self, id: Ulid) {
        if self.active_scene().is_some_and(|s| s.object(id).is_some()) {
            self.selected_object = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_object = None;
    }

    /// Selection always belongs to the active scene, so changing the scene
    /// clears it.
    fn set_active_scene(&mut self, id: Option<Ulid>) {
        if self.active_scene != id {
            self.selected_object = None;
        }
        self.active_scene = id;
    }

    // ========== Event logging ==========

    fn log_event(&mut self, kind: EditEventKind) {
        self.events.push(EditEvent::new(kind));
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new(Project::default())
    }
}
