use crate::constants;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct EqBand {
    pub frequency: f32,
    pub gain_db: f32,
    #[serde(default = "default_q")]
    pub q: f32,
}

fn default_q() -> f32 {
    constants::DEFAULT_Q
}

/// Allowed parameter ranges; the gain range is configurable, the rest is fixed.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BandRanges {
    pub min_frequency: f32,
    pub max_frequency: f32,
    pub min_gain_db: f32,
    pub max_gain_db: f32,
}

impl Default for BandRanges {
    fn default() -> Self {
        Self::with_gain_range(constants::MIN_GAIN_DB, constants::MAX_GAIN_DB)
    }
}

impl BandRanges {
    pub fn with_gain_range(min_gain_db: f32, max_gain_db: f32) -> Self {
        Self {
            min_frequency: constants::MIN_FREQUENCY,
            max_frequency: constants::MAX_FREQUENCY,
            min_gain_db,
            max_gain_db,
        }
    }
}

impl EqBand {
    pub const fn new(frequency: f32, gain_db: f32, q: f32) -> Self {
        Self {
            frequency,
            gain_db,
            q,
        }
    }

    pub fn frequency_khz(&self) -> f32 {
        self.frequency / 1000.0
    }

    /// Gaussian bell in ln-frequency space, centered on the band frequency.
    /// Q is clamped to 0.1..=10 and the log-domain width is `q * 0.1`.
    pub fn bell_gain_db(&self, frequency: f32) -> f32 {
        let q = self.q.clamp(constants::MIN_Q, constants::MAX_Q);
        let distance = (frequency / self.frequency).ln() / (q * 0.1);
        self.gain_db * (-0.5 * distance * distance).exp()
    }

    pub fn clamped(&self, ranges: &BandRanges) -> Self {
        Self {
            frequency: self
                .frequency
                .clamp(ranges.min_frequency, ranges.max_frequency),
            gain_db: self.gain_db.clamp(ranges.min_gain_db, ranges.max_gain_db),
            q: self.q.clamp(constants::MIN_Q, constants::MAX_Q),
        }
    }

    /// label drawn next to the marker
    pub fn label(&self) -> String {
        format!("{:.1}kHz\n{:.1}dB", self.frequency_khz(), self.gain_db)
    }
}

pub const DEFAULT_BAND: EqBand = EqBand::new(1000.0, 0.0, constants::DEFAULT_Q);

pub fn default_bands() -> Vec<EqBand> {
    [100.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0]
        .into_iter()
        .map(|frequency| EqBand::new(frequency, 0.0, constants::DEFAULT_Q))
        .collect()
}

pub fn combined_gain_db(bands: &[EqBand], frequency: f32) -> f32 {
    bands.iter().map(|band| band.bell_gain_db(frequency)).sum()
}
