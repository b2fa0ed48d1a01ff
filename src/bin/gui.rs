use eframe::egui;
use scene_studio::SceneStudioApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Scene Studio"),
        ..Default::default()
    };

    eframe::run_native(
        "Scene Studio",
        options,
        Box::new(|_cc| Ok(Box::new(SceneStudioApp::new()))),
    )
}
