use crate::band::{BandRanges, EqBand};
use crate::constants;
use crate::utils;

/// Maps between band parameters and canvas-local pixel coordinates.
/// The usable area is the canvas shrunk by `margin` on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphGeometry {
    pub size: egui::Vec2,
    pub margin: f32,
    pub ranges: BandRanges,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: egui::Pos2,
    pub to: egui::Pos2,
}

impl Default for GraphGeometry {
    fn default() -> Self {
        Self::new(BandRanges::default())
    }
}

impl GraphGeometry {
    pub fn new(ranges: BandRanges) -> Self {
        Self {
            size: egui::Vec2::from(constants::GRAPH_SIZE),
            margin: constants::GRAPH_MARGIN,
            ranges,
        }
    }

    fn inner_width(&self) -> f32 {
        self.size.x - 2.0 * self.margin
    }

    fn inner_height(&self) -> f32 {
        self.size.y - 2.0 * self.margin
    }

    fn normalized_gain(&self, gain_db: f32) -> f32 {
        utils::normalize(gain_db, self.ranges.min_gain_db, self.ranges.max_gain_db)
    }

    pub fn frequency_to_x(&self, frequency: f32) -> f32 {
        let normalized = utils::normalize_log(
            frequency,
            self.ranges.min_frequency,
            self.ranges.max_frequency,
        );
        self.normalized_to_x(normalized)
    }

    pub fn normalized_to_x(&self, normalized: f32) -> f32 {
        normalized * self.inner_width() + self.margin
    }

    pub fn gain_to_y(&self, gain_db: f32) -> f32 {
        self.size.y - (self.normalized_gain(gain_db) * self.inner_height() + self.margin)
    }

    pub fn band_position(&self, band: &EqBand) -> egui::Pos2 {
        egui::pos2(self.frequency_to_x(band.frequency), self.gain_to_y(band.gain_db))
    }

    pub fn clamp_point(&self, point: egui::Pos2) -> egui::Pos2 {
        egui::pos2(
            point.x.clamp(self.margin, self.size.x - self.margin),
            point.y.clamp(self.margin, self.size.y - self.margin),
        )
    }

    /// Frequency and gain under a canvas-local point, after clamping it
    /// into the usable area.
    pub fn point_to_frequency_gain(&self, point: egui::Pos2) -> (f32, f32) {
        let point = self.clamp_point(point);
        let frequency = utils::denormalize_log(
            (point.x - self.margin) / self.inner_width(),
            self.ranges.min_frequency,
            self.ranges.max_frequency,
        );
        let gain_db = (self.size.y - point.y - self.margin) / self.inner_height()
            * (self.ranges.max_gain_db - self.ranges.min_gain_db)
            + self.ranges.min_gain_db;
        (frequency, gain_db)
    }

    pub fn marker_rect(&self, band: &EqBand) -> egui::Rect {
        egui::Rect::from_center_size(
            self.band_position(band),
            egui::Vec2::splat(2.0 * constants::MARKER_HALF_SIZE),
        )
    }

    pub fn bell_curve_points(&self, band: &EqBand, num_points: usize) -> Vec<egui::Pos2> {
        if num_points == 0 {
            return Vec::new();
        }
        let denominator = (num_points.max(2) - 1) as f32;
        (0..num_points)
            .map(|index| {
                let x_normalized = index as f32 / denominator;
                let frequency = utils::denormalize_log(
                    x_normalized,
                    self.ranges.min_frequency,
                    self.ranges.max_frequency,
                );
                let y_normalized = self
                    .normalized_gain(band.bell_gain_db(frequency))
                    .clamp(0.0, 1.0);
                egui::pos2(
                    self.normalized_to_x(x_normalized),
                    self.inner_height() * (1.0 - y_normalized) + self.margin,
                )
            })
            .collect()
    }

    pub fn grid_lines(&self) -> Vec<GridLine> {
        let mut lines = constants::GRID_FREQUENCIES
            .iter()
            .map(|frequency| {
                let x = self.frequency_to_x(*frequency);
                GridLine {
                    from: egui::pos2(x, self.margin),
                    to: egui::pos2(x, self.size.y - self.margin),
                }
            })
            .collect::<Vec<_>>();

        let span = self.ranges.max_gain_db - self.ranges.min_gain_db;
        let steps = (span / constants::GRID_GAIN_STEP_DB)
            .floor()
            .min(constants::MAX_GAIN_SPAN_DB / constants::GRID_GAIN_STEP_DB);
        if !steps.is_finite() || steps < 0.0 {
            return lines;
        }
        lines.extend((0..=steps as usize).map(|step| {
            let y = self
                .gain_to_y(self.ranges.min_gain_db + step as f32 * constants::GRID_GAIN_STEP_DB);
            GridLine {
                from: egui::pos2(self.margin, y),
                to: egui::pos2(self.size.x - self.margin, y),
            }
        }));
        lines
    }

    /// Higher gain draws a brighter red, the bottom of the range is black.
    pub fn marker_color(&self, band: &EqBand, index: usize, twinkle_time: f32) -> egui::Color32 {
        if band.gain_db == 0.0 {
            return constants::NEUTRAL_MARKER_COLOR;
        }
        let t = self.normalized_gain(band.gain_db);
        let twinkle = 0.8 + 0.2 * (twinkle_time + index as f32).sin();
        let channel = |scale: f32| (scale * t * twinkle).clamp(0.0, 255.0) as u8;
        egui::Color32::from_rgb(channel(255.0), channel(100.0), channel(100.0))
    }
}

pub fn draw_background(painter: &egui::Painter, canvas: egui::Rect, color: egui::Color32) {
    painter.rect_filled(canvas, egui::CornerRadius::ZERO, color);
}

pub fn draw_border(painter: &egui::Painter, canvas: egui::Rect) {
    painter.rect_stroke(
        canvas,
        egui::CornerRadius::ZERO,
        egui::Stroke::new(1.0, constants::BORDER_COLOR),
        egui::StrokeKind::Inside,
    );
}

pub fn draw_grid(painter: &egui::Painter, canvas: egui::Rect, geometry: &GraphGeometry) {
    let stroke = egui::Stroke::new(1.0, utils::color(constants::GRID_RGBA));
    for line in geometry.grid_lines() {
        painter.line_segment(
            [canvas.min + line.from.to_vec2(), canvas.min + line.to.to_vec2()],
            stroke,
        );
    }
}

pub fn draw_bell_curves(
    painter: &egui::Painter,
    canvas: egui::Rect,
    geometry: &GraphGeometry,
    bands: &[EqBand],
) {
    let stroke = egui::Stroke::new(constants::CURVE_WIDTH, utils::color(constants::CURVE_RGBA));
    for band in bands {
        let points = geometry
            .bell_curve_points(band, constants::CURVE_POINTS)
            .into_iter()
            .map(|point| canvas.min + point.to_vec2())
            .collect::<Vec<_>>();
        if points.len() > 1 {
            painter.add(egui::Shape::line(points, stroke));
        }
    }
}

pub fn draw_markers(
    painter: &egui::Painter,
    canvas: egui::Rect,
    geometry: &GraphGeometry,
    bands: &[EqBand],
    twinkle_time: f32,
    show_labels: bool,
) {
    let half = constants::MARKER_HALF_SIZE;
    for (index, band) in bands.iter().enumerate() {
        let center = canvas.min + geometry.band_position(band).to_vec2();
        let stroke = egui::Stroke::new(
            constants::MARKER_WIDTH,
            geometry.marker_color(band, index, twinkle_time),
        );
        painter.line_segment(
            [center + egui::vec2(-half, -half), center + egui::vec2(half, half)],
            stroke,
        );
        painter.line_segment(
            [center + egui::vec2(half, -half), center + egui::vec2(-half, half)],
            stroke,
        );
        if show_labels {
            painter.text(
                center + egui::Vec2::from(constants::LABEL_OFFSET),
                egui::Align2::LEFT_TOP,
                band.label(),
                egui::FontId::proportional(12.0),
                utils::color(constants::LABEL_RGBA),
            );
        }
    }
}

pub fn draw_axis_labels(painter: &egui::Painter, canvas: egui::Rect, geometry: &GraphGeometry) {
    let font = egui::FontId::proportional(12.0);
    let color = painter.ctx().style().visuals.text_color();
    for frequency in constants::GRID_FREQUENCIES {
        let x = canvas.min.x + geometry.frequency_to_x(frequency);
        let align = if frequency <= geometry.ranges.min_frequency {
            egui::Align2::LEFT_TOP
        } else if frequency >= geometry.ranges.max_frequency {
            egui::Align2::RIGHT_TOP
        } else {
            egui::Align2::CENTER_TOP
        };
        painter.text(
            egui::pos2(x, canvas.max.y + 2.0),
            align,
            utils::frequency_label(frequency),
            font.clone(),
            color,
        );
    }
    painter.text(
        canvas.left_top() + egui::vec2(geometry.margin + 2.0, geometry.margin),
        egui::Align2::LEFT_TOP,
        format!("{:.0}dB", geometry.ranges.max_gain_db),
        font.clone(),
        color,
    );
    painter.text(
        canvas.left_bottom() + egui::vec2(geometry.margin + 2.0, -geometry.margin),
        egui::Align2::LEFT_BOTTOM,
        format!("{:.0}dB", geometry.ranges.min_gain_db),
        font,
        color,
    );
}
