//! Derived, read-only statistics over a project snapshot.
//!
//! Everything here is a pure function recomputed on each query; at the scale
//! of tens of objects there is nothing worth caching.

use crate::object::ObjType;
use crate::project::{Project, ProjectConfig, Scene};
use ulid::Ulid;

/// Headline counters for the project overview card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectTotals {
    pub scenes: usize,
    pub modules: usize,
    pub objects: usize,
    pub code_lines: usize,
}

/// Object count of one scene and its share of the project total.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLoad {
    pub scene_id: Ulid,
    pub name: String,
    pub objects: usize,
    /// In [0, 1]; 0 when the project has no objects at all
    pub fraction: f32,
}

/// A visible object's bounding box in fractional scene coordinates,
/// converted from center-based to top-left semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRect {
    pub object_id: Ulid,
    pub obj_type: ObjType,
    pub color: String,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Sum of object-list lengths across all scenes.
pub fn total_objects(project: &Project) -> usize {
    project.scenes.iter().map(|s| s.objects.len()).sum()
}

/// Line count of every scene and module code blob.
///
/// Counts newline-separated segments, so an empty blob is one line and a
/// trailing newline adds one. This matches how the code editor numbers lines.
pub fn total_code_lines(project: &Project) -> usize {
    let scene_lines: usize = project
        .scenes
        .iter()
        .map(|s| s.code.split('\n').count())
        .sum();
    let module_lines: usize = project
        .modules
        .iter()
        .map(|m| m.code.split('\n').count())
        .sum();
    scene_lines + module_lines
}

/// All headline counters in one pass.
pub fn project_totals(project: &Project) -> ProjectTotals {
    ProjectTotals {
        scenes: project.scenes.len(),
        modules: project.modules.len(),
        objects: total_objects(project),
        code_lines: total_code_lines(project),
    }
}

/// Per-scene object counts with their proportion of the total, in scene
/// order (for the bar visualization).
pub fn objects_per_scene(project: &Project) -> Vec<SceneLoad> {
    let total = total_objects(project);
    project
        .scenes
        .iter()
        .map(|scene| SceneLoad {
            scene_id: scene.id,
            name: scene.name.clone(),
            objects: scene.objects.len(),
            fraction: if total == 0 {
                0.0
            } else {
                scene.objects.len() as f32 / total as f32
            },
        })
        .collect()
}

/// Object counts per type across all scenes, sorted descending by count.
///
/// Only types with at least one object appear. The sort is stable over the
/// enum's declaration order, so equal counts keep that order.
pub fn type_distribution(project: &Project) -> Vec<(ObjType, usize)> {
    let mut buckets: Vec<(ObjType, usize)> = ObjType::ALL
        .iter()
        .map(|&t| {
            let count = project
                .scenes
                .iter()
                .flat_map(|s| &s.objects)
                .filter(|o| o.obj_type == t)
                .count();
            (t, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    buckets.sort_by(|a, b| b.1.cmp(&a.1));
    buckets
}

/// Bounding boxes of a scene's visible objects as fractions of the
/// configured scene size, for the miniature layout map.
pub fn scene_layout(scene: &Scene, config: &ProjectConfig) -> Vec<LayoutRect> {
    scene
        .objects
        .iter()
        .filter(|o| o.visible)
        .map(|o| LayoutRect {
            object_id: o.id,
            obj_type: o.obj_type,
            color: o.color.clone(),
            left: (o.x - o.w / 2.0) / config.width,
            top: (o.y - o.h / 2.0) / config.height,
            width: o.w / config.width,
            height: o.h / config.height,
        })
        .collect()
}
