#[cfg(test)]
use assert_approx_eq::assert_approx_eq;
use num_traits::Float;
use num_traits::cast::FromPrimitive;

pub fn frequency_to_log<F: Float>(frequency: F) -> F {
    frequency.log10()
}

pub fn log_to_frequency<F: Float + FromPrimitive>(log_frequency: F) -> F {
    F::from(10).unwrap().powf(log_frequency)
}

/// position of `value` in `min..=max`, mapped to 0..=1 (not clamped)
pub fn normalize<F: Float>(value: F, min: F, max: F) -> F {
    (value - min) / (max - min)
}

/// position of `frequency` on a log axis spanning `min..=max`, mapped to 0..=1
pub fn normalize_log<F: Float>(frequency: F, min: F, max: F) -> F {
    (frequency / min).log10() / (max / min).log10()
}

/// inverse of `normalize_log`
pub fn denormalize_log<F: Float + FromPrimitive>(normalized: F, min: F, max: F) -> F {
    log_to_frequency(normalized * (max / min).log10()) * min
}

pub fn log_frequency_to_string<F: Float + FromPrimitive + std::fmt::Display>(
    log_frequency: F,
) -> String {
    format!("{}", log_to_frequency(log_frequency).round())
}

pub fn string_to_log_frequency<F: Float + std::str::FromStr>(frequency_string: &str) -> Option<F> {
    let trimmed_string = frequency_string.trim().trim_end_matches(&[' ', 'H', 'z']);
    trimmed_string
        .parse::<F>()
        .ok()
        .filter(|frequency| *frequency > F::zero())
        .map(frequency_to_log)
}

/// short axis label, e.g. "20Hz", "1kHz", "20kHz"
pub fn frequency_label(frequency: f32) -> String {
    if frequency >= 1000.0 {
        let khz = frequency / 1000.0;
        if khz.fract().abs() < 1e-3 {
            format!("{}kHz", khz.round())
        } else {
            format!("{:.1}kHz", khz)
        }
    } else {
        format!("{}Hz", frequency.round())
    }
}

pub fn log_frequency_formatter(
    mark: egui_plot::GridMark,
    _range: &std::ops::RangeInclusive<f64>,
) -> String {
    let log_frequency = mark.value;
    if log_frequency.fract().abs() < 1e-6 {
        frequency_label(log_to_frequency(log_frequency) as f32)
    } else {
        String::new()
    }
}

pub fn color(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// maps a 0..=1 channel value to a color byte, saturating
pub fn unit_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use more_asserts::{assert_ge, assert_le};

    use super::*;

    #[test]
    fn roundtrip_log_frequency() {
        for frequency in [20.0_f64, 100.0, 997.3, 12345.0, 20000.0] {
            assert_approx_eq!(frequency, log_to_frequency(frequency_to_log(frequency)), 1e-9);
        }
    }

    #[test]
    fn log_normalization_hits_range_ends() {
        assert_approx_eq!(normalize_log(20.0_f32, 20.0, 20000.0), 0.0);
        assert_approx_eq!(normalize_log(20000.0_f32, 20.0, 20000.0), 1.0);
        // one decade out of three
        assert_approx_eq!(normalize_log(200.0_f32, 20.0, 20000.0), 1.0 / 3.0);
        assert_approx_eq!(denormalize_log(2.0_f64 / 3.0, 20.0, 20000.0), 2000.0, 1e-9);
    }

    #[test]
    fn normalize_linear() {
        assert_approx_eq!(normalize(0.0_f32, -24.0, 24.0), 0.5);
        assert_approx_eq!(normalize(-24.0_f32, -24.0, 24.0), 0.0);
        assert_approx_eq!(normalize(30.0_f32, -24.0, 24.0), 54.0 / 48.0);
    }

    #[test]
    fn parse_frequency_strings() {
        let parsed: f64 = string_to_log_frequency("1000 Hz").unwrap();
        assert_approx_eq!(parsed, 3.0);
        let parsed: f64 = string_to_log_frequency(" 100Hz").unwrap();
        assert_approx_eq!(parsed, 2.0);
        assert_eq!(string_to_log_frequency::<f64>("loud"), None);
        assert_eq!(string_to_log_frequency::<f64>("0"), None);
        assert_eq!(string_to_log_frequency::<f64>("-10 Hz"), None);
    }

    #[test]
    fn format_log_frequency() {
        assert_eq!(log_frequency_to_string(3.0_f64), "1000");
        assert_eq!(log_frequency_to_string(2.0_f32), "100");
    }

    #[test]
    fn frequency_labels() {
        assert_eq!(frequency_label(20.0), "20Hz");
        assert_eq!(frequency_label(100.0), "100Hz");
        assert_eq!(frequency_label(1000.0), "1kHz");
        assert_eq!(frequency_label(2500.0), "2.5kHz");
        assert_eq!(frequency_label(20000.0), "20kHz");
    }

    #[test]
    fn unit_to_byte_saturates() {
        assert_eq!(unit_to_byte(-0.5), 0);
        assert_eq!(unit_to_byte(0.0), 0);
        assert_eq!(unit_to_byte(1.0), 255);
        assert_eq!(unit_to_byte(3.0), 255);
        let middle = unit_to_byte(0.5);
        assert_ge!(middle, 127);
        assert_le!(middle, 128);
    }
}
