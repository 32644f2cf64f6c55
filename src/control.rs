use crate::*;
use crate::band::{BandRanges, EqBand};
use crate::editor::BandEditor;
use crate::options::ShowOptions;

pub fn add_top_controls(
    ui: &mut egui::Ui,
    editor: &mut BandEditor,
    show_options: &mut ShowOptions,
) {
    ui.horizontal(|ui| {
        if ui.button("Reset Bands").clicked() {
            editor.reset();
        }
        ui.checkbox(&mut show_options.bypass, "Bypass");
        ui.checkbox(&mut show_options.grid, "Show Grid");
        ui.checkbox(&mut show_options.labels, "Show Labels");
        ui.add_enabled(
            !show_options.bypass,
            egui::Checkbox::new(&mut show_options.response_plot, "Show Response"),
        );
    });
}

pub fn add_band_settings(ui: &mut egui::Ui, editor: &mut BandEditor, ranges: &BandRanges) {
    ui.label(egui::RichText::new("Band Settings").strong());
    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if editor.bands().is_empty() {
                ui.label("No bands available");
            }

            let mut delete_index = None;
            for (index, band) in editor.bands_mut().iter_mut().enumerate() {
                ui.push_id(index, |ui| {
                    if add_band_control(ui, index, band, ranges) {
                        delete_index = Some(index);
                    }
                });
            }
            if let Some(index) = delete_index {
                editor.remove(index);
            }

            if ui.button("Add Band").clicked() {
                editor.add_default_band();
            }
        });
}

/// returns whether the band's Delete button was clicked
fn add_band_control(
    ui: &mut egui::Ui,
    index: usize,
    band: &mut EqBand,
    ranges: &BandRanges,
) -> bool {
    let mut log_frequency = utils::frequency_to_log(band.frequency);
    let mut delete = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Band {}", index + 1));
            let frequency_response = ui.add(
                egui::Slider::new(
                    &mut log_frequency,
                    constants::MIN_LOG_FREQUENCY..=constants::MAX_LOG_FREQUENCY,
                )
                .custom_formatter(|log_frequency, _| utils::log_frequency_to_string(log_frequency))
                .custom_parser(utils::string_to_log_frequency)
                .prefix("freq: ")
                .suffix(" Hz"),
            );
            // only write back on edits, the log roundtrip is not exact
            if frequency_response.changed() {
                band.frequency = utils::log_to_frequency(log_frequency)
                    .clamp(ranges.min_frequency, ranges.max_frequency);
            }

            ui.add(
                egui::Slider::new(&mut band.gain_db, ranges.min_gain_db..=ranges.max_gain_db)
                    .fixed_decimals(1)
                    .prefix("gain: ")
                    .suffix(" dB"),
            );

            ui.add(
                egui::Slider::new(&mut band.q, constants::MIN_Q..=constants::MAX_Q)
                    .fixed_decimals(2)
                    .prefix("Q: "),
            );

            delete = ui.button("Delete").clicked();
        });
    });
    delete
}
