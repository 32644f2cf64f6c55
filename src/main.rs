use sword_eq::*;

fn main() -> eframe::Result {
    env_logger::init();

    let config = config::Config::load_or_default();
    log::info!(
        "starting with theme {} and {} bands",
        config.theme.to_string(),
        config.bands.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                constants::INIT_WINDOW_SIZE[0] as f32,
                constants::INIT_WINDOW_SIZE[1] as f32,
            ])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "EQ UI (Safe)",
        options,
        Box::new(|_cc| Ok(Box::new(equalizer::SwordEqualizer::new(config)))),
    )
}
