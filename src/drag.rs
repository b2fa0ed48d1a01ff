use crate::object::ObjectPatch;
use crate::store::ProjectStore;
use ulid::Ulid;

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f32 = 0.25;
/// Largest allowed zoom factor.
pub const ZOOM_MAX: f32 = 2.0;
/// Zoom change per explicit zoom-in/zoom-out action.
pub const ZOOM_STEP: f32 = 0.15;

/// An in-progress drag gesture: anchor data captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Scene the dragged object lives in
    pub scene_id: Ulid,
    /// The dragged object
    pub object_id: Ulid,
    /// Pointer position at gesture start, in screen pixels
    pub start: (f32, f32),
    /// Object center at gesture start, in scene units
    pub origin: (f32, f32),
}

/// Converts pointer gestures into selection changes and position updates.
///
/// States: `Idle` (no gesture) and `Dragging` (one gesture). Pointer-down on
/// an unlocked object enters `Dragging`; every pointer-move while dragging
/// issues an immediate position update scaled by the inverse zoom; pointer-up
/// anywhere returns to `Idle`. At most one drag is active system-wide.
#[derive(Debug, Clone)]
pub struct DragController {
    zoom: f32,
    drag: Option<DragGesture>,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            drag: None,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn gesture(&self) -> Option<&DragGesture> {
        self.drag.as_ref()
    }

    // ========== Zoom ==========

    /// Zoom affects the visual scale and the drag divisor only, never the
    /// stored object coordinates.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    // ========== Pointer gestures ==========

    /// Pointer-down on an object. Always selects it; enters `Dragging` only
    /// when it is unlocked. Returns whether a drag started.
    pub fn pointer_down(
        &mut self,
        store: &mut ProjectStore,
        scene_id: Ulid,
        object_id: Ulid,
        screen_pos: (f32, f32),
    ) -> bool {
        let Some(object) = store
            .project()
            .scene(scene_id)
            .and_then(|s| s.object(object_id))
        else {
            return false;
        };

        let locked = object.locked;
        let origin = (object.x, object.y);

        store.select_object(object_id);
        if locked {
            return false;
        }

        self.drag = Some(DragGesture {
            scene_id,
            object_id,
            start: screen_pos,
            origin,
        });
        true
    }

    /// Pointer-down on empty canvas: clears selection, never starts a drag.
    pub fn pointer_down_empty(&mut self, store: &mut ProjectStore) {
        store.clear_selection();
    }

    /// Pointer moved to a new screen position. While dragging, issues an
    /// immediate position update; each move is O(1) in the object count.
    pub fn pointer_move(&mut self, store: &mut ProjectStore, screen_pos: (f32, f32)) {
        let Some(gesture) = self.drag else {
            return;
        };

        // Screen-space delta scaled into scene units by the zoom factor.
        let dx = (screen_pos.0 - gesture.start.0) / self.zoom;
        let dy = (screen_pos.1 - gesture.start.1) / self.zoom;

        store.update_object(
            gesture.scene_id,
            gesture.object_id,
            ObjectPatch::position(
                (gesture.origin.0 + dx).round(),
                (gesture.origin.1 + dy).round(),
            ),
        );
    }

    /// Pointer released anywhere: back to `Idle`, no further side effects.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjType;
    use crate::project::Project;

    fn store_with_object() -> (ProjectStore, Ulid, Ulid) {
        let mut store = ProjectStore::new(Project::empty("test"));
        let scene = store.create_scene("Main", "").unwrap();
        let object = store.add_object(scene, ObjType::Sprite).unwrap();
        // Pin the jittered spawn to a known position
        store.update_object(scene, object, ObjectPatch::position(100.0, 200.0));
        (store, scene, object)
    }

    fn position(store: &ProjectStore, scene: Ulid, object: Ulid) -> (f32, f32) {
        let o = store.project().scene(scene).unwrap().object(object).unwrap();
        (o.x, o.y)
    }

    #[test]
    fn test_drag_at_unity_zoom() {
        let (mut store, scene, object) = store_with_object();
        let mut ctl = DragController::new();

        assert!(ctl.pointer_down(&mut store, scene, object, (500.0, 500.0)));
        ctl.pointer_move(&mut store, (530.0, 480.0));

        assert_eq!(position(&store, scene, object), (130.0, 180.0));

        ctl.pointer_up();
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn test_drag_scales_delta_by_zoom() {
        let (mut store, scene, object) = store_with_object();
        let mut ctl = DragController::new();
        // 1.0 - 3*0.15 = 0.55
        ctl.zoom_out();
        ctl.zoom_out();
        ctl.zoom_out();
        assert!((ctl.zoom() - 0.55).abs() < 1e-6);

        ctl.pointer_down(&mut store, scene, object, (0.0, 0.0));
        ctl.pointer_move(&mut store, (11.0, -22.0));

        // round(100 + 11/0.55) = 120, round(200 - 22/0.55) = 160
        assert_eq!(position(&store, scene, object), (120.0, 160.0));
    }

    #[test]
    fn test_each_move_derives_from_the_original_anchor() {
        let (mut store, scene, object) = store_with_object();
        let mut ctl = DragController::new();

        ctl.pointer_down(&mut store, scene, object, (0.0, 0.0));
        ctl.pointer_move(&mut store, (10.0, 0.0));
        ctl.pointer_move(&mut store, (25.0, 5.0));

        // Not cumulative: the second move replaces the first
        assert_eq!(position(&store, scene, object), (125.0, 205.0));
    }

    #[test]
    fn test_locked_object_selects_but_never_drags() {
        let (mut store, scene, object) = store_with_object();
        store.update_object(
            scene,
            object,
            ObjectPatch {
                locked: Some(true),
                ..Default::default()
            },
        );
        store.clear_selection();

        let mut ctl = DragController::new();
        assert!(!ctl.pointer_down(&mut store, scene, object, (0.0, 0.0)));
        assert!(!ctl.is_dragging());
        assert_eq!(store.selected_object_id(), Some(object));

        ctl.pointer_move(&mut store, (50.0, 50.0));
        assert_eq!(position(&store, scene, object), (100.0, 200.0));
    }

    #[test]
    fn test_empty_canvas_click_clears_selection() {
        let (mut store, scene, object) = store_with_object();
        store.select_object(object);
        let _ = scene;

        let mut ctl = DragController::new();
        ctl.pointer_down_empty(&mut store);
        assert_eq!(store.selected_object_id(), None);
    }

    #[test]
    fn test_drag_of_deleted_object_is_dropped() {
        let (mut store, scene, object) = store_with_object();
        let mut ctl = DragController::new();

        ctl.pointer_down(&mut store, scene, object, (0.0, 0.0));
        store.delete_object(scene, object);

        // The queued move references a dead id; the store drops it
        ctl.pointer_move(&mut store, (40.0, 40.0));
        assert!(store.project().scene(scene).unwrap().objects.is_empty());
    }

    #[test]
    fn test_zoom_bounds() {
        let mut ctl = DragController::new();
        for _ in 0..20 {
            ctl.zoom_in();
        }
        assert_eq!(ctl.zoom(), ZOOM_MAX);

        for _ in 0..40 {
            ctl.zoom_out();
        }
        assert_eq!(ctl.zoom(), ZOOM_MIN);
    }

    #[test]
    fn test_pointer_down_on_missing_object_is_noop() {
        let (mut store, scene, _object) = store_with_object();
        let mut ctl = DragController::new();
        assert!(!ctl.pointer_down(&mut store, scene, Ulid::new(), (0.0, 0.0)));
        assert!(!ctl.is_dragging());
    }
}
