use crate::config::Config;
use crate::constants;
use crate::control;
use crate::editor::{BandEditor, CanvasInput};
use crate::graph::{self, GraphGeometry};
use crate::options::ShowOptions;
use crate::plotter;
use crate::scene::Scene;
use crate::theme::Theme;

/// Seconds since the previous frame, from the GUI clock.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn tick(&mut self, time: f64) -> f32 {
        let dt = match self.last_time {
            Some(last_time) if time >= last_time => (time - last_time) as f32,
            _ => 0.0,
        };
        self.last_time = Some(time);
        dt
    }
}

pub struct SwordEqualizer {
    config: Config,
    show_eq_window: bool,
    theme: Theme,
    scene: Scene,
    editor: BandEditor,
    geometry: GraphGeometry,
    show_options: ShowOptions,
    clock: FrameClock,
    title_pulse: f32,
    twinkle_time: f32,
}

impl SwordEqualizer {
    pub fn new(config: Config) -> Self {
        let geometry = GraphGeometry::new(config.ranges());
        Self {
            show_eq_window: config.show_eq_window,
            theme: config.theme,
            scene: Scene::new(config.theme, geometry.size),
            editor: BandEditor::new(config.bands.clone()),
            geometry,
            show_options: config.show_options(),
            clock: FrameClock::default(),
            title_pulse: 0.0,
            twinkle_time: 0.0,
            config,
        }
    }

    /// Current state folded back into the loaded configuration.
    pub fn snapshot_config(&self) -> Config {
        let mut config = self.config.clone();
        config.theme = self.theme;
        config.show_eq_window = self.show_eq_window;
        config.set_show_options(&self.show_options);
        config.bands = self.editor.bands().to_vec();
        config
    }

    fn settings_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Settings")
            .resizable(false)
            .show(ctx, |ui| {
                ui.checkbox(&mut self.show_eq_window, "Show EQ Window");
                egui::ComboBox::from_label("Theme")
                    .selected_text(self.theme.to_string())
                    .show_ui(ui, |ui| {
                        for theme in Theme::ALL.iter() {
                            ui.selectable_value(&mut self.theme, *theme, theme.to_string());
                        }
                    });
            });
    }

    fn advance(&mut self, dt: f32) {
        if self.scene.theme() != self.theme {
            log::info!("switching theme to {}", self.theme.to_string());
            self.scene = Scene::new(self.theme, self.geometry.size);
        }
        self.scene.update(dt);
        self.title_pulse += dt * 2.0;
        self.twinkle_time += dt * 2.0;
    }

    fn eq_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_eq_window;
        egui::Window::new("Sword Equalizer")
            .open(&mut open)
            .default_size(constants::EQ_WINDOW_SIZE)
            .vscroll(false)
            .show(ctx, |ui| self.draw_eq(ui));
        self.show_eq_window = open;
    }

    fn draw_eq(&mut self, ui: &mut egui::Ui) {
        let pulse = 0.7 + 0.3 * self.title_pulse.sin();
        ui.label(
            egui::RichText::new("Sword Equalizer")
                .strong()
                .color(egui::Color32::from_rgb(
                    255,
                    (pulse * 0.3 * 255.0) as u8,
                    (pulse * 0.3 * 255.0) as u8,
                )),
        );

        control::add_top_controls(ui, &mut self.editor, &mut self.show_options);

        self.draw_graph(ui);

        if self.editor.take_changed() {
            log::debug!("bands changed ({} bands)", self.editor.bands().len());
        }

        if self.show_options.show_response_plot() {
            plotter::add_response_plot(
                ui,
                self.editor.bands(),
                &self.geometry.ranges,
                self.geometry.size.x,
            );
        }

        control::add_band_settings(ui, &mut self.editor, &self.geometry.ranges);
    }

    fn draw_graph(&mut self, ui: &mut egui::Ui) {
        // room below the canvas for the frequency labels
        let label_height = 18.0;
        let (response, painter) = ui.allocate_painter(
            self.geometry.size + egui::vec2(0.0, label_height),
            egui::Sense::click_and_drag(),
        );
        let canvas = egui::Rect::from_min_size(response.rect.min, self.geometry.size);

        let input = CanvasInput::from_response(ui, &response);
        self.editor.handle_input(&self.geometry, &input);

        graph::draw_background(&painter, canvas, self.theme.background_color());
        self.scene.draw(&painter.with_clip_rect(canvas), canvas.min);
        graph::draw_border(&painter, canvas);
        if self.show_options.grid {
            graph::draw_grid(&painter, canvas, &self.geometry);
        }
        graph::draw_axis_labels(&painter, canvas, &self.geometry);
        if self.show_options.show_curves() {
            graph::draw_bell_curves(&painter, canvas, &self.geometry, self.editor.bands());
        }
        graph::draw_markers(
            &painter,
            canvas,
            &self.geometry,
            self.editor.bands(),
            self.twinkle_time,
            self.show_options.labels,
        );
    }
}

impl eframe::App for SwordEqualizer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = self.clock.tick(ctx.input(|input| input.time));

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(constants::BACKGROUND_COLOR))
            .show(ctx, |_ui| {});

        self.settings_window(ctx);

        if self.show_eq_window {
            self.advance(dt);
            self.eq_window(ctx);
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if !self.config.save_on_exit {
            return;
        }
        let path = Config::default_path();
        match self.snapshot_config().save(&path) {
            Ok(()) => log::info!("saved config to {}", path.display()),
            Err(error) => log::warn!("{error}"),
        }
    }
}
