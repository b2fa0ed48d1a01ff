// Scene Studio - Core Library

pub mod drag;
pub mod event;
pub mod insights;
pub mod object;
pub mod project;
pub mod storage;
pub mod store;
pub mod toast;
pub mod ui;

// Re-export main types for convenience
pub use drag::{DragController, DragGesture, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
pub use event::{EditEvent, EditEventKind};
pub use insights::{LayoutRect, ProjectTotals, SceneLoad};
pub use object::{GameObject, ObjType, ObjTypeMeta, ObjectPatch, PropBag, PropValue};
pub use project::{sample_project, ItemKind, Module, Project, ProjectConfig, Scene};
pub use storage::{load_project, save_project};
pub use store::{Command, ProjectStore, StoreError};
pub use toast::{Toast, ToastKind, ToastQueue, TOAST_DURATION};
pub use ui::SceneStudioApp;
