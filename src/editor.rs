use crate::band::{self, EqBand};
use crate::constants;
use crate::graph::GraphGeometry;

/// Pointer state for one frame, relative to the canvas' top left corner.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CanvasInput {
    pub pointer: Option<egui::Pos2>,
    pub hovered: bool,
    pub primary_pressed: bool,
    pub primary_down: bool,
    pub primary_released: bool,
    pub secondary_clicked: bool,
}

impl CanvasInput {
    pub fn from_response(ui: &egui::Ui, response: &egui::Response) -> Self {
        let origin = response.rect.min;
        ui.input(|input| {
            let pointer = &input.pointer;
            Self {
                pointer: pointer
                    .interact_pos()
                    .map(|position| (position - origin).to_pos2()),
                hovered: response.hovered(),
                primary_pressed: pointer.button_pressed(egui::PointerButton::Primary),
                primary_down: pointer.primary_down(),
                primary_released: pointer.button_released(egui::PointerButton::Primary),
                secondary_clicked: pointer.button_clicked(egui::PointerButton::Secondary),
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct BandEditor {
    bands: Vec<EqBand>,
    last_bands: Vec<EqBand>,
    dragged: Option<usize>,
}

impl Default for BandEditor {
    fn default() -> Self {
        Self::new(band::default_bands())
    }
}

impl BandEditor {
    pub fn new(bands: Vec<EqBand>) -> Self {
        Self {
            last_bands: bands.clone(),
            bands,
            dragged: None,
        }
    }

    pub fn bands(&self) -> &[EqBand] {
        &self.bands
    }

    pub fn bands_mut(&mut self) -> &mut [EqBand] {
        &mut self.bands
    }

    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    pub fn reset(&mut self) {
        self.bands = band::default_bands();
        self.dragged = None;
        log::debug!("bands reset to defaults");
    }

    pub fn add_default_band(&mut self) {
        self.bands.push(band::DEFAULT_BAND);
        log::debug!("added default band #{}", self.bands.len());
    }

    pub fn remove(&mut self, index: usize) {
        if index >= self.bands.len() {
            return;
        }
        self.bands.remove(index);
        self.dragged = match self.dragged {
            Some(dragged) if dragged == index => None,
            Some(dragged) if dragged > index => Some(dragged - 1),
            dragged => dragged,
        };
        log::debug!("removed band #{}", index + 1);
    }

    /// Index of the band whose marker contains `point`; later bands win.
    pub fn hit_test(&self, geometry: &GraphGeometry, point: egui::Pos2) -> Option<usize> {
        self.bands
            .iter()
            .rposition(|band| geometry.marker_rect(band).contains(point))
    }

    pub fn add_band_at(&mut self, geometry: &GraphGeometry, point: egui::Pos2) {
        let (frequency, gain_db) = geometry.point_to_frequency_gain(point);
        self.bands.push(EqBand::new(frequency, gain_db, constants::DEFAULT_Q));
        log::debug!("added band at {:.1} Hz, {:.1} dB", frequency, gain_db);
    }

    /// Primary press on a marker grabs it, dragging moves it, release drops
    /// it. Secondary click removes the grabbed band, or adds a new band at
    /// the pointer when nothing is grabbed.
    pub fn handle_input(&mut self, geometry: &GraphGeometry, input: &CanvasInput) {
        if input.hovered {
            if let Some(pointer) = input.pointer {
                if input.primary_pressed {
                    if let Some(index) = self.hit_test(geometry, pointer) {
                        self.dragged = Some(index);
                    }
                }
                if input.secondary_clicked && self.dragged.is_none() {
                    self.add_band_at(geometry, pointer);
                    return;
                }
            }
        }

        if let (Some(index), Some(pointer)) = (self.dragged, input.pointer) {
            if input.primary_down {
                let (frequency, gain_db) = geometry.point_to_frequency_gain(pointer);
                let band = &mut self.bands[index];
                band.frequency = frequency;
                band.gain_db = gain_db;
            }
        }

        if input.primary_released {
            self.dragged = None;
        }

        if let Some(index) = self.dragged {
            if input.secondary_clicked {
                self.remove(index);
                self.dragged = None;
            }
        }
    }

    /// Whether the bands differ from the last call, refreshing the snapshot.
    pub fn take_changed(&mut self) -> bool {
        if self.bands == self.last_bands {
            return false;
        }
        self.last_bands.clone_from(&self.bands);
        true
    }
}
