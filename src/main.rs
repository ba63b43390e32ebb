use eframe::egui;
use wordstash::gui::WordstashApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wordstash")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native("Wordstash", options, Box::new(|cc| Ok(Box::new(WordstashApp::new(cc)))))
}
