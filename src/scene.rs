//! Animated backgrounds drawn behind the graph.

use crate::theme::Theme;
use crate::utils;
use std::f32::consts::{PI, TAU};

const NUM_STARS: usize = 100;
const NUM_MOONS: usize = 3;
const NUM_FISH: usize = 20;
const POPUP_INTERVAL: f32 = 1.0;
const POPUP_LIFETIME: f32 = 1.0;

const MOON_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(118, 118, 150, 150);
const CRATER_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(88, 88, 106, 150);
// (distance from center, radius, phase offset), relative to the moon size
const CRATERS: [(f32, f32, f32); 3] = [(0.3, 0.2, 0.0), (0.5, 0.15, 1.0), (0.4, 0.1, 2.0)];

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: egui::Pos2,
    pub speed: f32,
    pub opacity: f32,
    pub twinkle_phase: f32,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    pub position: egui::Pos2,
    pub size: f32,
    pub speed: f32,
    pub phase: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    pub position: egui::Pos2,
    pub speed: f32,
    pub direction: f32,
    pub wiggle_phase: f32,
    pub size: f32,
    pub color: egui::Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub position: egui::Pos2,
    pub alpha: f32,
    pub age: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Night { stars: Vec<Star>, moons: Vec<Moon> },
    Ocean { fish: Vec<Fish> },
    Popups { popups: Vec<Popup>, timer: f32 },
}

pub struct Scene {
    theme: Theme,
    size: egui::Vec2,
    rng: fastrand::Rng,
    layer: Layer,
}

impl Scene {
    pub fn new(theme: Theme, size: egui::Vec2) -> Self {
        Self::with_rng(theme, size, fastrand::Rng::new())
    }

    pub fn with_rng(theme: Theme, size: egui::Vec2, mut rng: fastrand::Rng) -> Self {
        let layer = match theme {
            _ if theme.is_popup() => Layer::Popups {
                popups: Vec::new(),
                timer: 0.0,
            },
            Theme::Ocean => Layer::Ocean {
                fish: (0..NUM_FISH).map(|_| spawn_fish(&mut rng, size)).collect(),
            },
            _ => Layer::Night {
                stars: (0..NUM_STARS).map(|_| spawn_star(&mut rng, size)).collect(),
                moons: (0..NUM_MOONS).map(|_| spawn_moon(&mut rng, size)).collect(),
            },
        };
        Self {
            theme,
            size,
            rng,
            layer,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let size = self.size;
        let rng = &mut self.rng;
        match &mut self.layer {
            Layer::Night { stars, moons } => {
                for star in stars.iter_mut() {
                    update_star(star, rng, size, dt);
                }
                for moon in moons.iter_mut() {
                    update_moon(moon, rng, size, dt);
                }
            }
            Layer::Ocean { fish } => {
                for f in fish.iter_mut() {
                    update_fish(f, size, dt);
                }
            }
            Layer::Popups { popups, timer } => {
                for popup in popups.iter_mut() {
                    popup.age += dt;
                    popup.alpha = 1.0 - popup.age / POPUP_LIFETIME;
                }
                popups.retain(|popup| popup.age <= POPUP_LIFETIME);

                *timer += dt;
                // at most one popup per frame, long stalls don't pile up
                if *timer >= POPUP_INTERVAL {
                    popups.push(Popup {
                        position: random_position(rng, size),
                        alpha: 1.0,
                        age: 0.0,
                    });
                    *timer = (*timer - POPUP_INTERVAL).min(POPUP_INTERVAL);
                }
            }
        }
    }

    pub fn draw(&self, painter: &egui::Painter, origin: egui::Pos2) {
        match &self.layer {
            Layer::Night { stars, moons } => {
                for star in stars {
                    painter.circle_filled(
                        origin + star.position.to_vec2(),
                        star.size * 0.5,
                        egui::Color32::from_white_alpha(utils::unit_to_byte(star.opacity)),
                    );
                }
                for moon in moons {
                    draw_moon(painter, origin, moon);
                }
            }
            Layer::Ocean { fish } => {
                for f in fish {
                    draw_fish(painter, origin, f);
                }
            }
            Layer::Popups { popups, .. } => {
                let Some(text) = self.theme.popup_text() else {
                    return;
                };
                for popup in popups {
                    painter.text(
                        origin + popup.position.to_vec2(),
                        egui::Align2::LEFT_TOP,
                        text,
                        egui::FontId::proportional(14.0),
                        egui::Color32::from_rgba_unmultiplied(
                            255,
                            0,
                            0,
                            utils::unit_to_byte(popup.alpha),
                        ),
                    );
                }
            }
        }
    }
}

fn random_position(rng: &mut fastrand::Rng, size: egui::Vec2) -> egui::Pos2 {
    egui::pos2(rng.f32() * size.x, rng.f32() * size.y)
}

fn spawn_star(rng: &mut fastrand::Rng, size: egui::Vec2) -> Star {
    Star {
        position: random_position(rng, size),
        speed: 0.5 + rng.f32() * 2.0,
        opacity: 0.5 + rng.f32() * 0.5,
        twinkle_phase: rng.f32() * TAU,
        size: 2.0 + rng.f32() * 3.0,
    }
}

fn spawn_moon(rng: &mut fastrand::Rng, size: egui::Vec2) -> Moon {
    Moon {
        position: egui::pos2(rng.f32() * size.x, -50.0 - rng.f32() * 100.0),
        size: 20.0 + rng.f32() * 30.0,
        speed: 20.0 + rng.f32() * 30.0,
        phase: rng.f32() * TAU,
    }
}

fn spawn_fish(rng: &mut fastrand::Rng, size: egui::Vec2) -> Fish {
    Fish {
        position: random_position(rng, size),
        speed: 20.0 + rng.f32() * 50.0,
        direction: rng.f32() * TAU,
        wiggle_phase: rng.f32() * TAU,
        size: 10.0 + rng.f32() * 20.0,
        color: egui::Color32::from_rgb(
            utils::unit_to_byte(rng.f32() * 0.2),
            utils::unit_to_byte(0.5 + rng.f32() * 0.5),
            255,
        ),
    }
}

fn update_star(star: &mut Star, rng: &mut fastrand::Rng, size: egui::Vec2, dt: f32) {
    star.position.y += star.speed * dt * 50.0;
    if star.position.y > size.y {
        star.position.y -= size.y;
        star.position.x = rng.f32() * size.x;
        star.twinkle_phase = rng.f32() * TAU;
        star.size = 2.0 + rng.f32() * 3.0;
    }
    star.twinkle_phase += dt * 2.0;
    star.opacity = 0.5 + 0.5 * star.twinkle_phase.sin();
}

fn update_moon(moon: &mut Moon, rng: &mut fastrand::Rng, size: egui::Vec2, dt: f32) {
    moon.position.y += moon.speed * dt * 20.0;
    moon.phase += dt * 0.5;
    if moon.position.y > size.y + moon.size * 2.0 {
        moon.position.y = -moon.size;
        moon.position.x = rng.f32() * size.x;
        moon.speed = 20.0 + rng.f32() * 30.0;
    }
}

fn update_fish(fish: &mut Fish, size: egui::Vec2, dt: f32) {
    fish.wiggle_phase += dt * 5.0;
    fish.direction += fish.wiggle_phase.sin() * 0.1 * dt;
    fish.position.x += fish.speed * fish.direction.cos() * dt;
    fish.position.y += fish.speed * fish.direction.sin() * dt;
    if fish.position.x < -fish.size || fish.position.x > size.x + fish.size {
        fish.direction = PI - fish.direction;
        fish.position.x = fish.position.x.clamp(0.0, size.x);
    }
    if fish.position.y < -fish.size || fish.position.y > size.y + fish.size {
        fish.direction = -fish.direction;
        fish.position.y = fish.position.y.clamp(0.0, size.y);
    }
}

fn draw_moon(painter: &egui::Painter, origin: egui::Pos2, moon: &Moon) {
    let center = origin + moon.position.to_vec2();
    painter.circle_filled(center, moon.size, MOON_COLOR);
    for (distance, radius, offset) in CRATERS {
        let angle = moon.phase + offset;
        painter.circle_stroke(
            center + moon.size * distance * egui::vec2(angle.cos(), angle.sin()),
            moon.size * radius,
            egui::Stroke::new(2.0, CRATER_COLOR),
        );
    }
}

fn draw_fish(painter: &egui::Painter, origin: egui::Pos2, fish: &Fish) {
    let center = origin + fish.position.to_vec2();
    let heading = egui::vec2(fish.direction.cos(), fish.direction.sin());
    let normal = egui::vec2(-heading.y, heading.x);
    let wiggle = fish.wiggle_phase.sin() * 0.3 * fish.size;

    // body as a diamond along the heading
    let body = vec![
        center + heading * fish.size * 0.6,
        center + normal * fish.size * 0.25,
        center - heading * fish.size * 0.4,
        center - normal * fish.size * 0.25,
    ];
    painter.add(egui::Shape::convex_polygon(
        body,
        fish.color,
        egui::Stroke::NONE,
    ));

    let tail_root = center - heading * fish.size * 0.4;
    let tail_tip = tail_root - heading * fish.size * 0.35 + normal * wiggle * 0.3;
    let tail = vec![
        tail_root,
        tail_tip + normal * fish.size * 0.25,
        tail_tip - normal * fish.size * 0.25,
    ];
    painter.add(egui::Shape::convex_polygon(
        tail,
        fish.color.gamma_multiply(0.8),
        egui::Stroke::NONE,
    ));
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use more_asserts::{assert_ge, assert_gt, assert_le, assert_lt};

    use super::*;

    fn graph_size() -> egui::Vec2 {
        egui::vec2(800.0, 400.0)
    }

    fn scene(theme: Theme) -> Scene {
        Scene::with_rng(theme, graph_size(), fastrand::Rng::with_seed(7))
    }

    #[test]
    fn demonic_spawns_stars_and_moons() {
        let scene = scene(Theme::Demonic);
        let Layer::Night { stars, moons } = scene.layer() else {
            panic!("expected night layer");
        };
        assert_eq!(stars.len(), NUM_STARS);
        assert_eq!(moons.len(), NUM_MOONS);
        for star in stars {
            assert_ge!(star.speed, 0.5);
            assert_le!(star.speed, 2.5);
            assert_ge!(star.size, 2.0);
            assert_le!(star.size, 5.0);
            assert_lt!(star.position.x, 800.0);
        }
        for moon in moons {
            assert_le!(moon.position.y, -50.0);
            assert_ge!(moon.position.y, -150.0);
        }
    }

    #[test]
    fn ocean_spawns_fish() {
        let scene = scene(Theme::Ocean);
        let Layer::Ocean { fish } = scene.layer() else {
            panic!("expected ocean layer");
        };
        assert_eq!(fish.len(), NUM_FISH);
        for f in fish {
            assert_ge!(f.speed, 20.0);
            assert_le!(f.speed, 70.0);
            assert_eq!(f.color.b(), 255);
            assert_ge!(f.color.g(), 127);
        }
    }

    #[test]
    fn same_seed_same_scene() {
        assert_eq!(scene(Theme::Ocean).layer(), scene(Theme::Ocean).layer());
    }

    #[test]
    fn stars_fall_and_wrap() {
        let mut scene = Scene::with_rng(Theme::Demonic, graph_size(), fastrand::Rng::with_seed(1));
        if let Layer::Night { stars, .. } = &mut scene.layer {
            stars.truncate(1);
            stars[0] = Star {
                position: egui::pos2(100.0, 380.0),
                speed: 1.0,
                opacity: 1.0,
                twinkle_phase: 0.0,
                size: 3.0,
            };
        }
        scene.update(0.1);
        let Layer::Night { stars, .. } = scene.layer() else {
            panic!("expected night layer");
        };
        // 380 + 1 * 0.1 * 50
        assert_approx_eq!(stars[0].position.y, 385.0, 1e-3);
        assert_approx_eq!(stars[0].twinkle_phase, 0.2, 1e-5);
        assert_approx_eq!(stars[0].opacity, 0.5 + 0.5 * 0.2_f32.sin(), 1e-5);

        scene.update(0.4);
        let Layer::Night { stars, .. } = scene.layer() else {
            panic!("expected night layer");
        };
        // 405 wraps to the top
        assert_approx_eq!(stars[0].position.y, 5.0, 1e-3);
        assert_ge!(stars[0].size, 2.0);
        assert_le!(stars[0].size, 5.0);
    }

    #[test]
    fn moons_respawn_above() {
        let mut scene = scene(Theme::Demonic);
        if let Layer::Night { moons, .. } = &mut scene.layer {
            moons[0].position.y = 499.0;
            moons[0].size = 40.0;
            moons[0].speed = 30.0;
        }
        scene.update(0.1);
        let Layer::Night { moons, .. } = scene.layer() else {
            panic!("expected night layer");
        };
        // 499 + 30 * 0.1 * 20 = 559 > 400 + 80
        assert_eq!(moons[0].position.y, -40.0);
        assert_ge!(moons[0].speed, 20.0);
        assert_le!(moons[0].speed, 50.0);
    }

    #[test]
    fn fish_bounce_off_edges() {
        let mut scene = scene(Theme::Ocean);
        if let Layer::Ocean { fish } = &mut scene.layer {
            fish.truncate(1);
            fish[0].position = egui::pos2(815.0, 200.0);
            fish[0].direction = 0.0;
            fish[0].wiggle_phase = 0.0;
            fish[0].speed = 50.0;
            fish[0].size = 10.0;
        }
        scene.update(0.1);
        let Layer::Ocean { fish } = scene.layer() else {
            panic!("expected ocean layer");
        };
        assert_eq!(fish[0].position.x, 800.0);
        // heading flipped to point back into the graph
        assert_lt!(fish[0].direction.cos(), 0.0);
    }

    #[test]
    fn fish_stay_near_graph() {
        let mut scene = scene(Theme::Ocean);
        for _ in 0..2000 {
            scene.update(1.0 / 30.0);
        }
        let Layer::Ocean { fish } = scene.layer() else {
            panic!("expected ocean layer");
        };
        for f in fish {
            assert_ge!(f.position.x, -f.size - 5.0);
            assert_le!(f.position.x, 800.0 + f.size + 5.0);
            assert_ge!(f.position.y, -f.size - 5.0);
            assert_le!(f.position.y, 400.0 + f.size + 5.0);
        }
    }

    #[test]
    fn popups_spawn_every_second_and_fade() {
        let mut scene = scene(Theme::JjPopup);
        scene.update(0.5);
        let Layer::Popups { popups, .. } = scene.layer() else {
            panic!("expected popup layer");
        };
        assert!(popups.is_empty());

        scene.update(0.5);
        let Layer::Popups { popups, timer } = scene.layer() else {
            panic!("expected popup layer");
        };
        assert_eq!(popups.len(), 1);
        assert_approx_eq!(*timer, 0.0);

        scene.update(0.25);
        let Layer::Popups { popups, .. } = scene.layer() else {
            panic!("expected popup layer");
        };
        assert_approx_eq!(popups[0].alpha, 0.75);
        assert_gt!(popups[0].alpha, 0.0);

        scene.update(0.8);
        let Layer::Popups { popups, timer } = scene.layer() else {
            panic!("expected popup layer");
        };
        // the first popup expired, the second was just spawned
        assert_eq!(popups.len(), 1);
        assert_approx_eq!(popups[0].age, 0.0);
        assert_approx_eq!(*timer, 0.05, 1e-5);
    }

    #[test]
    fn long_stall_spawns_one_popup() {
        let mut scene = scene(Theme::BlasphemyPopup);
        scene.update(5.0);
        let Layer::Popups { popups, timer } = scene.layer() else {
            panic!("expected popup layer");
        };
        assert_eq!(popups.len(), 1);
        assert_le!(*timer, POPUP_INTERVAL);

        assert_approx_eq!(popups[0].alpha, 1.0);

        scene.update(0.0);
        let Layer::Popups { popups, timer } = scene.layer() else {
            panic!("expected popup layer");
        };
        // the capped timer is worth one more popup, then it is drained
        assert_eq!(popups.len(), 2);
        assert_approx_eq!(*timer, 0.0);
    }

    #[test]
    fn popup_themes_get_popup_layer() {
        for theme in Theme::ALL {
            let is_popup_layer = matches!(scene(theme).layer(), Layer::Popups { .. });
            assert_eq!(is_popup_layer, theme.is_popup());
        }
    }

    #[test]
    fn bad_frame_deltas_are_ignored() {
        let mut scene = scene(Theme::Ocean);
        let before = scene.layer().clone();
        scene.update(-1.0);
        scene.update(f32::NAN);
        assert_eq!(scene.layer(), &before);
    }
}
