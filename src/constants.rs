pub const INIT_WINDOW_SIZE: [u32; 2] = [960, 640]; // [width, height]
pub const EQ_WINDOW_SIZE: [f32; 2] = [900.0, 600.0];

pub const MIN_FREQUENCY: f32 = 20.0;
pub const MAX_FREQUENCY: f32 = 20000.0;
pub const MIN_LOG_FREQUENCY: f32 = 1.30103; // 20.0.log10();
pub const MAX_LOG_FREQUENCY: f32 = 4.30103; // 20000.0.log10();
pub const MIN_GAIN_DB: f32 = -24.0;
pub const MAX_GAIN_DB: f32 = 24.0;
pub const MAX_GAIN_SPAN_DB: f32 = 96.0;
pub const MIN_Q: f32 = 0.1;
pub const MAX_Q: f32 = 10.0;
pub const DEFAULT_Q: f32 = 1.0;

pub const GRAPH_SIZE: [f32; 2] = [800.0, 400.0];
pub const GRAPH_MARGIN: f32 = 10.0;
pub const MARKER_HALF_SIZE: f32 = 8.0;
pub const CURVE_POINTS: usize = 100;
pub const GRID_FREQUENCIES: [f32; 5] = [20.0, 100.0, 1000.0, 10000.0, 20000.0];
pub const GRID_GAIN_STEP_DB: f32 = 6.0;

pub const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(32, 35, 38);
pub const BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 0, 0);
pub const NEUTRAL_MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 0, 0);
// [r, g, b, a], unmultiplied
pub const GRID_RGBA: [u8; 4] = [153, 51, 51, 127];
pub const CURVE_RGBA: [u8; 4] = [204, 51, 51, 204];
pub const LABEL_RGBA: [u8; 4] = [255, 100, 100, 200];
pub const RESPONSE_PLOT_COLOR: egui::Color32 = egui::Color32::from_rgb(204, 51, 51);

pub const CURVE_WIDTH: f32 = 2.0;
pub const MARKER_WIDTH: f32 = 2.0;
pub const LABEL_OFFSET: [f32; 2] = [15.0, -10.0];
pub const RESPONSE_PLOT_HEIGHT: f32 = 160.0;
