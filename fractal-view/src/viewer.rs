//! Interactive fractal tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`FractalState`] plus the
//! widget values bound to it, and implements [`eframe::App`] to draw the
//! tree and its controls every frame.

use std::f32::consts::{FRAC_PI_2, PI};

use eframe::App;
use fractal_core::{
    config::{Config, Params},
    error::ConfigError,
    state::FractalState,
    style::BranchStyle,
    types::{MAX_DEPTH, MIN_DEPTH},
};
use glam::Vec2;
use rand::rngs::ThreadRng;

/// Share of the central area, per axis, taken up by the drawing canvas.
const CANVAS_FRACTION: f32 = 0.8;

/// Canvas size used until the first frame reports the real one.
const INITIAL_CANVAS: Vec2 = Vec2::new(800.0, 600.0);

/// Main application state for the interactive viewer.
///
/// ### Fields
/// - `state` - Tree, parameters and random source.
/// - `angle` - Value bound to the rotation angle slider.
/// - `depth` - Value bound to the tree depth slider.
/// - `cfg` - Editable copy of the branching constants; committed to
///   `state` when a widget changes it.
pub struct Viewer {
    state: FractalState<ThreadRng>,
    angle: f32,
    depth: usize,
    cfg: Config,
}

impl Viewer {
    /// Creates a viewer with default controls: angle π/4, depth 12, both
    /// toggles off.
    ///
    /// ### Returns
    /// The viewer, or the [`ConfigError`] if `cfg` is rejected.
    pub fn new(cfg: Config) -> Result<Self, ConfigError> {
        let params = Params::default();
        let state = FractalState::new(params, INITIAL_CANVAS, cfg, rand::rng())?;

        Ok(Self {
            angle: params.angle,
            depth: params.depth,
            cfg,
            state,
        })
    }

    /// Pushes the edited configuration into the state.
    ///
    /// A rejected configuration is logged and the editor falls back to the
    /// one currently in use.
    fn commit_config(&mut self) {
        if let Err(err) = self.state.set_config(self.cfg) {
            tracing::warn!(%err, "rejected branching config");
            self.cfg = *self.state.config();
        }
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    ///
    /// ### Returns
    /// `true` if the value was changed this frame.
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) -> bool {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed))
                .changed()
        })
        .inner
    }

    /// Builds the right-hand panel with sliders, toggles and branching constants.
    fn ui_controls_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("controls_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("FRACTAL TREE");

                ui.separator();
                ui.label("Rotation Angle");
                ui.add(egui::Slider::new(&mut self.angle, 0.0..=PI).step_by(0.01));

                ui.label("Tree Depth");
                ui.add(egui::Slider::new(&mut self.depth, MIN_DEPTH..=MAX_DEPTH).step_by(1.0));

                ui.separator();
                ui.horizontal(|ui| {
                    if ui
                        .selectable_label(self.state.params().randomize, "Randomness")
                        .clicked()
                    {
                        self.state.toggle_randomize();
                    }

                    if ui
                        .selectable_label(self.state.params().jitter, "Jitter")
                        .clicked()
                    {
                        self.state.toggle_jitter();
                    }
                });

                ui.separator();
                egui::CollapsingHeader::new("Branching")
                    .default_open(false)
                    .show(ui, |ui| {
                        let mut changed = false;
                        changed |= Self::labeled_drag_f32(
                            ui,
                            "shrink_factor:",
                            &mut self.cfg.shrink_factor,
                            0.05..=0.95,
                            0.005,
                        );
                        changed |= Self::labeled_drag_f32(
                            ui,
                            "random_spread:",
                            &mut self.cfg.random_spread,
                            0.0..=FRAC_PI_2,
                            0.01,
                        );
                        changed |= Self::labeled_drag_f32(
                            ui,
                            "jitter_amplitude:",
                            &mut self.cfg.jitter_amplitude,
                            0.0..=5.0,
                            0.05,
                        );

                        if ui.button("Reset to default").clicked() {
                            self.cfg = Config::default();
                            changed = true;
                        }

                        if changed {
                            self.commit_config();
                        }
                    });
            });
    }

    /// Builds the bottom status bar (segment and leaf counts, max depth, angle).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let tree = self.state.tree();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "angle = {:.1}°",
                    self.state.params().angle.to_degrees()
                ));
                ui.separator();
                ui.label(format!("max depth = {}", tree.max_depth()));
                ui.label(format!("leaves = {}", tree.leaf_count()));
                ui.label(format!("segments = {}", tree.segments.len()));
            });
        });
    }

    /// Builds the central panel: regenerates if needed, draws, then jitters.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let canvas = canvas_rect(response.rect);
            let painter = ui.painter_at(canvas);

            self.state.tick(
                self.angle,
                self.depth,
                Vec2::new(canvas.width(), canvas.height()),
            );

            painter.rect_filled(canvas, 0.0, egui::Color32::from_gray(51));

            for (seg, style) in self.state.styled_segments() {
                let a = canvas_to_screen(seg.begin, canvas);
                let b = canvas_to_screen(seg.end, canvas);
                painter.line_segment(
                    [a, b],
                    egui::Stroke::new(style.stroke_width, style_color(&style)),
                );
            }

            self.state.apply_jitter();

            // Keep the frame loop running so drift and slider drags show up.
            ctx.request_repaint();
        });
    }
}

/// The canvas: [`CANVAS_FRACTION`] of `area` on each axis, centered.
fn canvas_rect(area: egui::Rect) -> egui::Rect {
    egui::Rect::from_center_size(area.center(), area.size() * CANVAS_FRACTION)
}

/// Converts a canvas position (origin top-left, y down) to screen-space.
fn canvas_to_screen(p: Vec2, canvas: egui::Rect) -> egui::Pos2 {
    egui::pos2(canvas.min.x + p.x, canvas.min.y + p.y)
}

/// Converts an HSB [`BranchStyle`] (hue in degrees, saturation and
/// brightness out of 255) to an egui color.
///
/// The HSB values are taken as sRGB (gamma) components, not linear light.
fn style_color(style: &BranchStyle) -> egui::Color32 {
    let [r, g, b] = egui::ecolor::rgb_from_hsv((
        style.hue / 360.0,
        (style.saturation / 255.0).clamp(0.0, 1.0),
        (style.brightness / 255.0).clamp(0.0, 1.0),
    ));
    let to_u8 = |c: f32| (c * 255.0).round() as u8;
    egui::Color32::from_rgb(to_u8(r), to_u8(g), to_u8(b))
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_controls_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(1000.0, 500.0))
    }

    #[test]
    fn canvas_is_centered_and_scaled() {
        let canvas = canvas_rect(test_rect());
        assert_eq!(canvas.size(), egui::vec2(800.0, 400.0));
        assert_eq!(canvas.center(), test_rect().center());
        assert_eq!(canvas.min, egui::pos2(100.0, 50.0));
    }

    #[test]
    fn canvas_to_screen_offsets_by_canvas_origin() {
        let canvas = canvas_rect(test_rect());
        assert_eq!(canvas_to_screen(Vec2::ZERO, canvas), egui::pos2(100.0, 50.0));
        assert_eq!(
            canvas_to_screen(Vec2::new(400.0, 400.0), canvas),
            egui::pos2(500.0, 450.0)
        );
    }

    #[test]
    fn style_color_converts_hsb_in_gamma_space() {
        // HSB(0°, 100/255, 50/255): a dark, muted red.
        let root = style_color(&BranchStyle::for_depth(0, 12));
        assert_eq!(root, egui::Color32::from_rgb(50, 30, 30));

        // Hue 360 wraps to red, fully saturated, brightness 200/255.
        let leaf = style_color(&BranchStyle::for_depth(12, 12));
        assert_eq!(leaf, egui::Color32::from_rgb(200, 0, 0));

        // Hue 180 is cyan: HSB(180°, 177.5/255, 125/255).
        let mid = style_color(&BranchStyle::for_depth(6, 12));
        assert_eq!(mid, egui::Color32::from_rgb(38, 125, 125));
    }

    #[test]
    fn new_uses_default_controls() {
        let viewer = Viewer::new(Config::default()).unwrap();
        assert_eq!(viewer.angle, FRAC_PI_4);
        assert_eq!(viewer.depth, 12);
        assert!(!viewer.state.params().randomize);
        assert!(!viewer.state.params().jitter);
        assert_eq!(viewer.state.tree().segments.len(), 8191);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut cfg = Config::default();
        cfg.min_branch_len = 0.0;
        assert!(Viewer::new(cfg).is_err());
    }

    #[test]
    fn commit_config_applies_valid_and_reverts_invalid() {
        let mut viewer = Viewer::new(Config::default()).unwrap();

        viewer.cfg.shrink_factor = 0.5;
        viewer.commit_config();
        assert_eq!(viewer.state.config().shrink_factor, 0.5);

        viewer.cfg.trunk_ratio = 3.0;
        viewer.commit_config();
        assert_eq!(viewer.cfg, *viewer.state.config());
        assert_eq!(viewer.cfg.trunk_ratio, 0.3);
        assert_eq!(viewer.cfg.shrink_factor, 0.5);
    }
}
