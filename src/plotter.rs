use crate::*;
use crate::band::{BandRanges, EqBand};

pub fn make_log_frequency_points<'a>(
    ranges: &BandRanges,
    response: impl Fn(f64) -> f64 + 'a,
) -> egui_plot::PlotPoints<'a> {
    let min_log_frequency = utils::frequency_to_log(ranges.min_frequency as f64);
    let max_log_frequency = utils::frequency_to_log(ranges.max_frequency as f64);
    egui_plot::PlotPoints::from_explicit_callback(
        move |log_frequency| response(utils::log_to_frequency(log_frequency)),
        min_log_frequency..=max_log_frequency,
        constants::CURVE_POINTS * 5,
    )
}

/// Summed bell gain of all bands over a log-frequency axis.
pub fn add_response_plot(ui: &mut egui::Ui, bands: &[EqBand], ranges: &BandRanges, width: f32) {
    let bands = bands.to_vec();
    let min_log_frequency = utils::frequency_to_log(ranges.min_frequency as f64);
    let max_log_frequency = utils::frequency_to_log(ranges.max_frequency as f64);
    let min_gain_db = ranges.min_gain_db as f64;
    let max_gain_db = ranges.max_gain_db as f64;

    egui_plot::Plot::new("Combined Response")
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .width(width)
        .height(constants::RESPONSE_PLOT_HEIGHT)
        .auto_bounds([false, false])
        .custom_x_axes(vec![
            egui_plot::AxisHints::new_x().formatter(utils::log_frequency_formatter),
        ])
        .custom_y_axes(vec![
            egui_plot::AxisHints::new_y().label("Gain (dB)"),
        ])
        .label_formatter(|_, point| {
            format!(
                "{} Hz, {:.2} dB",
                utils::log_to_frequency(point.x) as i32,
                point.y
            )
        })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(egui_plot::PlotBounds::from_min_max(
                [min_log_frequency, min_gain_db],
                [max_log_frequency, max_gain_db],
            ));
            let gain_points = make_log_frequency_points(ranges, move |frequency| {
                band::combined_gain_db(&bands, frequency as f32) as f64
            });
            plot_ui.line(
                egui_plot::Line::new(gain_points)
                    .name("combined")
                    .color(constants::RESPONSE_PLOT_COLOR),
            );
        });
}
