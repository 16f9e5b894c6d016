use eframe::egui;
use staffscope::gui::StaffscopeApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([820.0, 520.0])
            .with_title("Staffscope"),
        ..Default::default()
    };

    eframe::run_native(
        "staffscope",
        options,
        Box::new(|cc| Ok(Box::new(StaffscopeApp::new(cc)))),
    )
}
