use crate::drag::DragController;
use crate::insights;
use crate::object::{ObjType, ObjectPatch, PropValue};
use crate::project::{ItemKind, Project};
use crate::store::ProjectStore;
use crate::toast::{ToastKind, ToastQueue};
use egui::{pos2, vec2, Align2, Color32, FontId, Rect, Rounding, Sense, Stroke, Vec2};
use ulid::Ulid;

/// Which editor occupies the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Canvas,
    Code,
}

/// Which tab the right panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RightTab {
    Properties,
    Insights,
}

/// Pending modal dialog, if any.
#[derive(Debug, Clone)]
enum Modal {
    Create {
        kind: ItemKind,
        name: String,
        description: String,
    },
    ConfirmDelete {
        id: Ulid,
        name: String,
        kind: ItemKind,
    },
}

/// Main application state
pub struct SceneStudioApp {
    /// The store owning the live project and selection
    store: ProjectStore,

    /// Zoom plus the in-progress drag gesture
    canvas: DragController,

    /// Transient status messages
    toasts: ToastQueue,

    view_mode: ViewMode,
    right_tab: RightTab,
    modal: Option<Modal>,

    /// Background grid overlay on the canvas
    show_grid: bool,

    /// Name labels on every visible object, not just the selected one
    show_labels: bool,
}

impl SceneStudioApp {
    pub fn new() -> Self {
        Self {
            store: ProjectStore::new(Project::default()),
            canvas: DragController::new(),
            toasts: ToastQueue::new(),
            view_mode: ViewMode::Canvas,
            right_tab: RightTab::Properties,
            modal: None,
            show_grid: true,
            show_labels: true,
        }
    }

    pub fn with_project(project: Project) -> Self {
        Self {
            store: ProjectStore::new(project),
            ..Self::new()
        }
    }

    // ========== Top-level layout ==========

    fn render_ui(&mut self, ctx: &egui::Context) {
        self.toasts.sweep();

        egui::TopBottomPanel::top("topbar").show(ctx, |ui| {
            self.render_topbar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::SidePanel::left("sidebar")
            .default_width(220.0)
            .show(ctx, |ui| {
                self.render_sidebar(ui);
            });

        egui::SidePanel::right("right_panel")
            .default_width(280.0)
            .show(ctx, |ui| {
                self.render_right_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_view_bar(ui);
            ui.separator();
            match (self.view_mode, self.store.active_scene_id()) {
                (ViewMode::Canvas, Some(_)) => self.render_canvas(ui),
                (ViewMode::Code, Some(_)) => self.render_code_editor(ui),
                _ => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Select a scene from the sidebar, or create a new one");
                    });
                }
            }
        });

        self.render_modal(ctx);
        self.render_toasts(ctx);

        // Keep repainting while toasts are pending so sweeps actually run
        if !self.toasts.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn render_topbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(&self.store.project().name);
            ui.separator();
            let cfg = &self.store.project().config;
            ui.label(format!(
                "{}×{} · {} physics{}",
                cfg.width as i32,
                cfg.height as i32,
                cfg.physics,
                if cfg.pixel_art { " · pixel art" } else { "" }
            ));
        });
    }

    fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(scene) = self.store.active_scene() {
                ui.label(format!("{} — {} objects", scene.name, scene.objects.len()));
            } else {
                ui.label("No active scene");
            }
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", self.canvas.zoom() * 100.0));
        });
    }

    // ========== Sidebar (scene/module tree) ==========

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Scenes");
            if ui.small_button("＋").on_hover_text("New scene").clicked() {
                self.modal = Some(Modal::Create {
                    kind: ItemKind::Scene,
                    name: String::new(),
                    description: String::new(),
                });
            }
        });

        let scenes: Vec<(Ulid, String, Vec<(Ulid, String, bool, &'static str)>)> = self
            .store
            .project()
            .scenes
            .iter()
            .map(|s| {
                (
                    s.id,
                    s.name.clone(),
                    s.objects
                        .iter()
                        .map(|o| (o.id, o.name.clone(), o.visible, o.obj_type.meta().icon))
                        .collect(),
                )
            })
            .collect();
        let active = self.store.active_scene_id();
        let selected = self.store.selected_object_id();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (scene_id, scene_name, objects) in scenes {
                let is_active = active == Some(scene_id);
                ui.horizontal(|ui| {
                    if ui.selectable_label(is_active, &scene_name).clicked() {
                        self.store.select_scene(scene_id);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🗑").clicked() {
                            self.modal = Some(Modal::ConfirmDelete {
                                id: scene_id,
                                name: scene_name.clone(),
                                kind: ItemKind::Scene,
                            });
                        }
                    });
                });

                if is_active {
                    for (object_id, name, visible, icon) in objects {
                        ui.horizontal(|ui| {
                            ui.add_space(12.0);
                            let eye = if visible { "👁" } else { "‒" };
                            if ui
                                .small_button(eye)
                                .on_hover_text("Toggle visibility")
                                .clicked()
                            {
                                self.store.toggle_visibility(scene_id, object_id);
                            }
                            let label = format!("{icon} {name}");
                            if ui
                                .selectable_label(selected == Some(object_id), label)
                                .clicked()
                            {
                                self.store.select_object(object_id);
                            }
                        });
                    }
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.strong("Modules");
                if ui.small_button("＋").on_hover_text("New module").clicked() {
                    self.modal = Some(Modal::Create {
                        kind: ItemKind::Module,
                        name: String::new(),
                        description: String::new(),
                    });
                }
            });

            let modules: Vec<(Ulid, String)> = self
                .store
                .project()
                .modules
                .iter()
                .map(|m| (m.id, m.name.clone()))
                .collect();
            for (module_id, name) in modules {
                ui.horizontal(|ui| {
                    ui.label(format!("📄 {name}"));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🗑").clicked() {
                            self.modal = Some(Modal::ConfirmDelete {
                                id: module_id,
                                name,
                                kind: ItemKind::Module,
                            });
                        }
                    });
                });
            }
        });
    }

    // ========== View bar ==========

    fn render_view_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.view_mode, ViewMode::Canvas, "Canvas");
            ui.selectable_value(&mut self.view_mode, ViewMode::Code, "Code");
            ui.separator();

            let scene_id = self.store.active_scene_id();
            ui.menu_button("＋ Add Object", |ui| {
                for obj_type in ObjType::ALL {
                    let meta = obj_type.meta();
                    let entry = format!("{} {}", meta.icon, meta.label);
                    if ui.button(entry).clicked() {
                        if let Some(scene_id) = scene_id {
                            if self.store.add_object(scene_id, obj_type).is_some() {
                                self.toasts
                                    .push(format!("Added {}", meta.label), ToastKind::Ok);
                            }
                        }
                        ui.close_menu();
                    }
                }
            });

            ui.separator();
            if ui.button("−").on_hover_text("Zoom out").clicked() {
                self.canvas.zoom_out();
            }
            ui.label(format!("{:.0}%", self.canvas.zoom() * 100.0));
            if ui.button("＋").on_hover_text("Zoom in").clicked() {
                self.canvas.zoom_in();
            }

            ui.separator();
            ui.toggle_value(&mut self.show_grid, "Grid");
            ui.toggle_value(&mut self.show_labels, "Labels");

            ui.separator();
            let selected = self.store.selected_object().map(|o| (o.id, o.locked));
            match (scene_id, selected) {
                (Some(scene_id), Some((object_id, false))) => {
                    if ui.button("Lock").clicked() {
                        self.store.update_object(
                            scene_id,
                            object_id,
                            ObjectPatch {
                                locked: Some(true),
                                ..Default::default()
                            },
                        );
                    }
                    if ui.button("Delete").clicked() {
                        self.store.delete_object(scene_id, object_id);
                        self.toasts.push("Object removed", ToastKind::Err);
                    }
                }
                (Some(scene_id), Some((object_id, true))) => {
                    if ui.button("Unlock").clicked() {
                        self.store.update_object(
                            scene_id,
                            object_id,
                            ObjectPatch {
                                locked: Some(false),
                                ..Default::default()
                            },
                        );
                    }
                }
                _ => {
                    ui.weak("Click objects to select");
                }
            }
        });
    }

    // ========== Canvas ==========

    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let Some(scene_id) = self.store.active_scene_id() else {
            return;
        };

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let panel_rect = response.rect;

        let zoom = self.canvas.zoom();
        let config = self.store.project().config.clone();
        let scene_size = vec2(config.width, config.height) * zoom;
        let origin = panel_rect.center() - scene_size / 2.0;
        let scene_rect = Rect::from_min_size(origin, scene_size);

        // Scene background and frame
        painter.rect_filled(
            scene_rect,
            Rounding::same(2.0),
            hex_color(&config.background_color).unwrap_or(Color32::from_rgb(26, 26, 46)),
        );
        painter.rect_stroke(
            scene_rect,
            Rounding::same(2.0),
            Stroke::new(1.0, Color32::from_gray(70)),
        );

        if self.show_grid {
            let step = 32.0 * zoom;
            let stroke = Stroke::new(1.0, Color32::from_white_alpha(6));
            let mut x = scene_rect.left() + step;
            while x < scene_rect.right() {
                painter.line_segment(
                    [pos2(x, scene_rect.top()), pos2(x, scene_rect.bottom())],
                    stroke,
                );
                x += step;
            }
            let mut y = scene_rect.top() + step;
            while y < scene_rect.bottom() {
                painter.line_segment(
                    [pos2(scene_rect.left(), y), pos2(scene_rect.right(), y)],
                    stroke,
                );
                y += step;
            }
        }

        let to_screen = |x: f32, y: f32| origin + vec2(x, y) * zoom;

        // Pointer handling before painting so selection outlines are current.
        // Hit testing walks the object list back to front (front item last).
        let pointer_pos = response.hover_pos();
        let (pressed, released, down) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.any_released(),
                i.pointer.primary_down(),
            )
        });

        if pressed && response.hovered() {
            if let Some(pos) = pointer_pos {
                let hit = self.store.active_scene().and_then(|scene| {
                    scene
                        .objects
                        .iter()
                        .rev()
                        .filter(|o| o.visible)
                        .find(|o| {
                            let center = to_screen(o.x, o.y);
                            Rect::from_center_size(center, vec2(o.w, o.h) * zoom).contains(pos)
                        })
                        .map(|o| o.id)
                });

                match hit {
                    Some(object_id) => {
                        self.canvas.pointer_down(
                            &mut self.store,
                            scene_id,
                            object_id,
                            (pos.x, pos.y),
                        );
                    }
                    None => self.canvas.pointer_down_empty(&mut self.store),
                }
            }
        }
        if down && self.canvas.is_dragging() {
            if let Some(pos) = pointer_pos.or_else(|| ui.input(|i| i.pointer.interact_pos())) {
                self.canvas.pointer_move(&mut self.store, (pos.x, pos.y));
            }
        }
        if released {
            self.canvas.pointer_up();
        }

        // Paint objects in list order so later entries land in front
        let selected = self.store.selected_object_id();
        if let Some(scene) = self.store.active_scene() {
            for object in scene.objects.iter().filter(|o| o.visible) {
                let center = to_screen(object.x, object.y);
                let size = vec2(object.w, object.h) * zoom;
                let rect = Rect::from_center_size(center, size);
                let color = hex_color(&object.color).unwrap_or(Color32::GRAY);

                match object.obj_type {
                    ObjType::Circle => {
                        painter.circle_filled(center, size.x.min(size.y) / 2.0, color);
                    }
                    ObjType::Zone => {
                        painter.rect_stroke(
                            rect,
                            Rounding::ZERO,
                            Stroke::new(1.0, color.gamma_multiply(0.8)),
                        );
                    }
                    _ => {
                        painter.rect_filled(rect, Rounding::same(2.0), color);
                    }
                }

                if selected == Some(object.id) {
                    painter.rect_stroke(
                        rect.expand(2.0),
                        Rounding::same(2.0),
                        Stroke::new(1.5, Color32::WHITE),
                    );
                }
                if self.show_labels || selected == Some(object.id) {
                    painter.text(
                        rect.center_top() - vec2(0.0, 6.0),
                        Align2::CENTER_BOTTOM,
                        &object.name,
                        FontId::monospace(10.0),
                        Color32::WHITE,
                    );
                }
                if object.locked {
                    painter.text(
                        rect.right_top(),
                        Align2::RIGHT_TOP,
                        "🔒",
                        FontId::proportional(10.0),
                        Color32::from_gray(200),
                    );
                }
            }
        }
    }

    // ========== Code editor ==========

    fn render_code_editor(&mut self, ui: &mut egui::Ui) {
        let Some(scene) = self.store.active_scene() else {
            return;
        };
        let scene_id = scene.id;
        let mut code = scene.code.clone();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let edit = egui::TextEdit::multiline(&mut code)
                .code_editor()
                .desired_width(f32::INFINITY)
                .desired_rows(24);
            if ui.add(edit).changed() {
                self.store.update_scene_code(scene_id, code);
            }
        });
    }

    // ========== Right panel ==========

    fn render_right_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.right_tab, RightTab::Properties, "Properties");
            ui.selectable_value(&mut self.right_tab, RightTab::Insights, "Insights");
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| match self.right_tab {
            RightTab::Properties => self.render_properties_tab(ui),
            RightTab::Insights => self.render_insights_tab(ui),
        });
    }

    fn render_properties_tab(&mut self, ui: &mut egui::Ui) {
        let Some(scene_id) = self.store.active_scene_id() else {
            ui.label("No scene selected");
            return;
        };

        if let Some(object) = self.store.selected_object().cloned() {
            ui.strong(format!(
                "{} {}",
                object.obj_type.meta().icon,
                object.obj_type.meta().label
            ));
            ui.separator();

            let mut patch = ObjectPatch::default();

            ui.label("Name:");
            let mut name = object.name.clone();
            if ui.text_edit_singleline(&mut name).changed() {
                patch.name = Some(name);
            }

            ui.add_enabled_ui(!object.locked, |ui| {
                ui.horizontal(|ui| {
                    ui.label("x");
                    let mut x = object.x;
                    if ui.add(egui::DragValue::new(&mut x).speed(1.0)).changed() {
                        patch.x = Some(x);
                    }
                    ui.label("y");
                    let mut y = object.y;
                    if ui.add(egui::DragValue::new(&mut y).speed(1.0)).changed() {
                        patch.y = Some(y);
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("w");
                    let mut w = object.w;
                    if ui.add(egui::DragValue::new(&mut w).speed(1.0)).changed() {
                        patch.w = Some(w);
                    }
                    ui.label("h");
                    let mut h = object.h;
                    if ui.add(egui::DragValue::new(&mut h).speed(1.0)).changed() {
                        patch.h = Some(h);
                    }
                });
            });

            ui.label("Color:");
            let mut color = object.color.clone();
            if ui.text_edit_singleline(&mut color).changed() {
                patch.color = Some(color);
            }

            let mut visible = object.visible;
            if ui.checkbox(&mut visible, "Visible").changed() {
                patch.visible = Some(visible);
            }
            let mut locked = object.locked;
            if ui.checkbox(&mut locked, "Locked").changed() {
                patch.locked = Some(locked);
            }

            if patch != ObjectPatch::default() {
                self.store.update_object(scene_id, object.id, patch);
            }

            if !object.props.is_empty() {
                ui.separator();
                ui.label("Props:");
                for (key, value) in &object.props {
                    let mut text = match value {
                        PropValue::Text(s) => s.clone(),
                        PropValue::Number(n) => n.to_string(),
                        PropValue::Bool(b) => b.to_string(),
                    };
                    ui.horizontal(|ui| {
                        ui.monospace(key);
                        if ui.text_edit_singleline(&mut text).changed() {
                            let value = parse_prop_value(&text);
                            self.store
                                .update_object_prop(scene_id, object.id, key.clone(), value);
                        }
                    });
                }
            }

            ui.separator();
            if ui.button("🗑 Delete Object").clicked() {
                self.store.delete_object(scene_id, object.id);
                self.toasts.push("Object removed", ToastKind::Err);
            }
        } else if let Some(scene) = self.store.active_scene() {
            let mut name = scene.name.clone();
            let mut description = scene.description.clone();

            ui.label("Scene name:");
            let name_changed = ui.text_edit_singleline(&mut name).changed();
            ui.label("Description:");
            let desc_changed = ui.text_edit_multiline(&mut description).changed();

            if name_changed {
                self.store.update_scene_name(scene_id, name);
            }
            if desc_changed {
                self.store.update_scene_description(scene_id, description);
            }
        }
    }

    fn render_insights_tab(&mut self, ui: &mut egui::Ui) {
        let project = self.store.project();
        let totals = insights::project_totals(project);

        ui.strong("Project");
        egui::Grid::new("totals_grid").num_columns(2).show(ui, |ui| {
            ui.label("Scenes");
            ui.monospace(totals.scenes.to_string());
            ui.end_row();
            ui.label("Modules");
            ui.monospace(totals.modules.to_string());
            ui.end_row();
            ui.label("Objects");
            ui.monospace(totals.objects.to_string());
            ui.end_row();
            ui.label("Code Lines");
            ui.monospace(totals.code_lines.to_string());
            ui.end_row();
        });

        ui.separator();
        ui.strong("Objects Per Scene");
        for load in insights::objects_per_scene(project) {
            ui.horizontal(|ui| {
                ui.label(&load.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(load.objects.to_string());
                });
            });
            let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 6.0), Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, Rounding::same(2.0), Color32::from_gray(50));
            let mut fill = rect;
            fill.set_width(rect.width() * load.fraction);
            painter.rect_filled(fill, Rounding::same(2.0), Color32::from_rgb(74, 125, 255));
        }

        ui.separator();
        ui.strong("Object Type Distribution");
        for (obj_type, count) in insights::type_distribution(project) {
            let meta = obj_type.meta();
            ui.horizontal(|ui| {
                let (chip, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
                ui.painter().rect_filled(
                    chip,
                    Rounding::same(2.0),
                    hex_color(meta.color).unwrap_or(Color32::GRAY),
                );
                ui.label(meta.label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(count.to_string());
                });
            });
        }

        // Miniature layout map of the active scene
        if let Some(scene) = self.store.active_scene() {
            ui.separator();
            ui.strong(format!("{} — Layout", scene.name));

            let config = &project.config;
            let width = ui.available_width();
            let height = width * config.height / config.width;
            let (map_rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(
                map_rect,
                Rounding::same(2.0),
                hex_color(&config.background_color).unwrap_or(Color32::BLACK),
            );

            for r in insights::scene_layout(scene, config) {
                let rect = Rect::from_min_size(
                    map_rect.min + vec2(r.left * width, r.top * height),
                    vec2(r.width * width, r.height * height),
                );
                let color = hex_color(&r.color)
                    .unwrap_or(Color32::GRAY)
                    .gamma_multiply(0.7);
                match r.obj_type {
                    ObjType::Zone => {
                        painter.rect_stroke(rect, Rounding::ZERO, Stroke::new(1.0, color));
                    }
                    ObjType::Circle => {
                        painter.circle_filled(
                            rect.center(),
                            rect.width().min(rect.height()) / 2.0,
                            color,
                        );
                    }
                    _ => {
                        painter.rect_filled(rect, Rounding::ZERO, color);
                    }
                }
            }
        }
    }

    // ========== Modal dialogs ==========

    fn render_modal(&mut self, ctx: &egui::Context) {
        let Some(modal) = self.modal.clone() else {
            return;
        };

        match modal {
            Modal::Create {
                kind,
                mut name,
                mut description,
            } => {
                let title = match kind {
                    ItemKind::Scene => "Create Scene",
                    ItemKind::Module => "Create Module",
                };
                let mut open = true;
                let mut done = false;

                egui::Window::new(title)
                    .collapsible(false)
                    .resizable(false)
                    .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
                    .open(&mut open)
                    .show(ctx, |ui| {
                        ui.label("Name:");
                        ui.text_edit_singleline(&mut name);
                        ui.label("Description:");
                        ui.text_edit_singleline(&mut description);

                        // Blocked until the name validates, per the store's rule
                        let valid = !name.trim().is_empty();
                        ui.horizontal(|ui| {
                            if ui.add_enabled(valid, egui::Button::new("Create")).clicked() {
                                let result = match kind {
                                    ItemKind::Scene => self.store.create_scene(&name, &description),
                                    ItemKind::Module => {
                                        self.store.create_module(&name, &description)
                                    }
                                };
                                if result.is_ok() {
                                    self.toasts.push(
                                        format!("Created {} \"{}\"", kind.label(), name.trim()),
                                        ToastKind::Ok,
                                    );
                                    done = true;
                                }
                            }
                            if ui.button("Cancel").clicked() {
                                done = true;
                            }
                        });
                    });

                self.modal = if done || !open {
                    None
                } else {
                    Some(Modal::Create {
                        kind,
                        name,
                        description,
                    })
                };
            }
            Modal::ConfirmDelete { id, name, kind } => {
                let mut open = true;
                let mut done = false;

                egui::Window::new("Confirm Delete")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
                    .open(&mut open)
                    .show(ctx, |ui| {
                        ui.label(format!("Delete {} \"{}\"?", kind.label(), name));
                        ui.horizontal(|ui| {
                            if ui.button("Delete").clicked() {
                                if self.store.delete_item(id).is_some() {
                                    self.toasts
                                        .push(format!("Deleted \"{name}\""), ToastKind::Err);
                                }
                                done = true;
                            }
                            if ui.button("Cancel").clicked() {
                                done = true;
                            }
                        });
                    });

                self.modal = if done || !open {
                    None
                } else {
                    Some(Modal::ConfirmDelete { id, name, kind })
                };
            }
        }
    }

    // ========== Toast overlay ==========

    fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-16.0, -32.0))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in self.toasts.iter() {
                    let accent = match toast.kind {
                        ToastKind::Ok => Color32::from_rgb(52, 211, 153),
                        ToastKind::Err => Color32::from_rgb(239, 68, 68),
                        ToastKind::Info => Color32::from_rgb(74, 125, 255),
                    };
                    egui::Frame::popup(ui.style())
                        .stroke(Stroke::new(1.0, accent))
                        .show(ui, |ui| {
                            ui.label(&toast.message);
                        });
                }
            });
    }
}

impl Default for SceneStudioApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for SceneStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_ui(ctx);
    }
}

/// Parse "#rrggbb" into a color; anything else yields `None`.
///
/// The color field is free text, so this must reject arbitrary input
/// (including multi-byte characters) without panicking.
fn hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Props are schemaless; infer the scalar kind from the entered text.
fn parse_prop_value(text: &str) -> PropValue {
    if let Ok(b) = text.parse::<bool>() {
        return PropValue::Bool(b);
    }
    if let Ok(n) = text.parse::<f64>() {
        return PropValue::Number(n);
    }
    PropValue::Text(text.to_string())
}
