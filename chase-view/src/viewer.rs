//! Interactive chase-game viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the game state (pursuer,
//! evader, configuration, HUD counters) and implements [`eframe::App`]
//! to render and control the chase through an egui UI.

use chase_core::{
    arena::Arena,
    config::Config,
    entity::{Evader, Pursuer},
    trail::Trail,
};
use eframe::App;
use glam::Vec2;

const PURSUER_COLOR: egui::Color32 = egui::Color32::RED;
const EVADER_COLOR: egui::Color32 = egui::Color32::BLUE;
const PURSUER_LABEL: &str = "S";
const EVADER_LABEL: &str = "K";

/// Main application state for the chase game.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Pursuer`], [`Evader`], [`Config`], [`Arena`].
/// - The pointer-to-world plumbing that feeds the pursuer its target.
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Read the pointer position over the arena and store it as the
///    pursuer's target.
/// 2. If `running`, call [`Viewer::step_once`].
/// 3. Render the arena, both trails, both characters, and the HUD.
///
/// ### Fields
/// - `arena` - Fixed play-field bounds for the session.
/// - `cfg` - Live-tunable steering constants.
/// - `pursuer` / `evader` - The two characters.
///
/// - `running` - Whether the game auto-advances every frame.
/// - `target` - Last known pointer position in world space; the Step
///   button reuses it while the pointer is outside the arena.
///
/// - `attempts` - Frames in which the pursuer actually moved.
/// - `start_time` - egui time at session start / last reset.
pub struct Viewer {
    arena: Arena,
    cfg: Config,
    pursuer: Pursuer,
    evader: Evader,

    running: bool,
    target: Vec2,

    attempts: u32,
    start_time: f64,
}

impl Viewer {
    /// Creates a new viewer with both characters at their spawn points.
    ///
    /// The pursuer starts at `(width/4, height/2)`, the evader at
    /// `(3*width/4, height/2)`, mirroring each other across the center.
    /// The initial target equals the pursuer's spawn, so stepping before
    /// the first pointer movement is a no-op (dead zone).
    pub fn new() -> Self {
        let arena = Arena::default();
        let cfg = Config::default();
        let (pursuer_spawn, evader_spawn) = Self::spawn_points(&arena);

        Self {
            arena,
            cfg,
            pursuer: Pursuer::new(pursuer_spawn, &cfg),
            evader: Evader::new(evader_spawn, &cfg),
            running: true,
            target: pursuer_spawn,
            attempts: 0,
            start_time: 0.0,
        }
    }

    /// Spawn positions: quarter points on the horizontal midline.
    fn spawn_points(arena: &Arena) -> (Vec2, Vec2) {
        let mid = arena.height * 0.5;
        (
            Vec2::new(arena.width * 0.25, mid),
            Vec2::new(arena.width * 0.75, mid),
        )
    }

    /// Restores both characters to their spawn points and zeroes the HUD.
    ///
    /// The current `cfg` is kept (including an edited `trail_len`, which
    /// takes effect here since trails are rebuilt). The clock restarts
    /// at `now` and the game pauses until Run is pressed.
    fn reset(&mut self, now: f64) {
        let (pursuer_spawn, evader_spawn) = Self::spawn_points(&self.arena);
        self.pursuer = Pursuer::new(pursuer_spawn, &self.cfg);
        self.evader = Evader::new(evader_spawn, &self.cfg);
        self.target = pursuer_spawn;
        self.attempts = 0;
        self.start_time = now;
        self.running = false;
        log::info!("game reset");
    }

    /// Advances the game by a single frame.
    ///
    /// The pursuer seeks the stored target; only if it actually moved
    /// does the attempt counter tick and the evader get to react to the
    /// pursuer's new position. An idle pursuer therefore freezes the
    /// whole scene.
    fn step_once(&mut self) {
        let moved = self.pursuer.step(self.target, &self.cfg, &self.arena);
        if moved {
            self.attempts += 1;
            self.evader
                .step(self.pursuer.body.pos, &self.cfg, &self.arena);
        }
    }

    /// Converts a world-space position to screen-space.
    ///
    /// The arena is drawn at a fixed 1:1 scale anchored at the top-left
    /// of the central panel; both world and screen have y growing down,
    /// so this is a pure translation.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// Inverse of [`Viewer::world_to_screen`].
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        Vec2::new(p.x - rect.min.x, p.y - rect.min.y)
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run control, stepping, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.step_once();
                }

                if ui.button("Reset").clicked() {
                    let now = ctx.input(|i| i.time);
                    self.reset(now);
                }

                ui.separator();
                ui.label("Move the mouse: the red S follows it, the blue K runs away.");
            });
        });
    }

    /// Builds the bottom status bar (attempts, elapsed time, distance).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let distance = self.pursuer.body.pos.distance(self.evader.body.pos);
                let elapsed = (ctx.input(|i| i.time) - self.start_time).max(0.0) as u64;

                ui.label(format!("distance = {:.0} px", distance));
                ui.separator();
                ui.label(format!("time = {} s", elapsed));
                ui.label(format!("attempts = {}", self.attempts));
            });
        });
    }

    /// Builds the right-hand configuration panel for steering parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Speeds");
                Self::labeled_drag_f32(
                    ui,
                    "pursuer_speed:",
                    &mut self.cfg.pursuer_speed,
                    0.0..=30.0,
                    0.5,
                );
                Self::labeled_drag_f32(
                    ui,
                    "evader_speed:",
                    &mut self.cfg.evader_speed,
                    0.0..=30.0,
                    0.5,
                );
                Self::labeled_drag_f32(
                    ui,
                    "dead_zone:",
                    &mut self.cfg.pursuer_dead_zone,
                    0.0..=20.0,
                    0.5,
                );

                ui.separator();
                ui.label("Evasion thresholds");
                Self::labeled_drag_f32(
                    ui,
                    "safe_distance:",
                    &mut self.cfg.safe_distance,
                    0.0..=400.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "corner_awareness:",
                    &mut self.cfg.corner_awareness,
                    0.0..=300.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "escape_distance:",
                    &mut self.cfg.escape_distance,
                    0.0..=200.0,
                    1.0,
                );

                ui.separator();
                ui.label("Multipliers");
                Self::labeled_drag_f32(
                    ui,
                    "escape_multiplier:",
                    &mut self.cfg.escape_multiplier,
                    1.0..=3.0,
                    0.05,
                );
                Self::labeled_drag_f32(
                    ui,
                    "recovery_factor:",
                    &mut self.cfg.recovery_factor,
                    1.0..=3.0,
                    0.05,
                );

                ui.separator();
                ui.label("Bodies");
                Self::labeled_drag_f32(
                    ui,
                    "body_radius:",
                    &mut self.cfg.body_radius,
                    5.0..=60.0,
                    0.5,
                );
                Self::labeled_drag_f32(ui, "wall_pad:", &mut self.cfg.wall_pad, 0.0..=30.0, 0.5);
                Self::labeled_drag_usize(
                    ui,
                    "trail_len (on reset):",
                    &mut self.cfg.trail_len,
                    0..=20,
                    1.0,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                }
            });
    }

    /// Draws one character's fading trail, oldest positions faintest.
    fn draw_trail(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        trail: &Trail,
        color: egui::Color32,
    ) {
        let n = trail.len();
        for (i, pos) in trail.iter().enumerate() {
            let alpha = (255.0 * (i as f32) / (n as f32)) as u8;
            let faded =
                egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha);
            painter.circle_filled(
                self.world_to_screen(pos, rect),
                self.cfg.body_radius,
                faded,
            );
        }
    }

    /// Draws a character as a filled circle with its letter on top.
    fn draw_character(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        pos: Vec2,
        color: egui::Color32,
        letter: &str,
    ) {
        let p = self.world_to_screen(pos, rect);
        painter.circle_filled(p, self.cfg.body_radius, color);
        painter.text(
            p,
            egui::Align2::CENTER_CENTER,
            letter,
            egui::FontId::proportional(28.0),
            egui::Color32::WHITE,
        );
    }

    /// Builds the central panel: input handling, stepping and rendering.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // The pointer is the pursuer's target; the red circle stands
            // in for the hidden cursor while it hovers the arena.
            if let Some(p) = response.hover_pos() {
                self.target = self.screen_to_world(p, rect);
                ctx.set_cursor_icon(egui::CursorIcon::None);
            }

            if self.running {
                self.step_once();
                ctx.request_repaint();
            }

            // Arena backdrop and outline.
            let arena_rect = egui::Rect::from_min_max(
                self.world_to_screen(Vec2::ZERO, rect),
                self.world_to_screen(Vec2::new(self.arena.width, self.arena.height), rect),
            );
            painter.rect_filled(arena_rect, egui::CornerRadius::ZERO, egui::Color32::BLACK);

            let corners = [
                Vec2::ZERO,
                Vec2::new(self.arena.width, 0.0),
                Vec2::new(self.arena.width, self.arena.height),
                Vec2::new(0.0, self.arena.height),
            ];
            let outline: Vec<egui::Pos2> = corners
                .iter()
                .map(|&c| self.world_to_screen(c, rect))
                .collect();
            painter.add(egui::Shape::closed_line(
                outline,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
            ));

            // Trails first, then the bodies on top.
            self.draw_trail(&painter, rect, &self.pursuer.body.trail, PURSUER_COLOR);
            self.draw_trail(&painter, rect, &self.evader.body.trail, EVADER_COLOR);

            self.draw_character(
                &painter,
                rect,
                self.pursuer.body.pos,
                PURSUER_COLOR,
                PURSUER_LABEL,
            );
            self.draw_character(
                &painter,
                rect,
                self.evader.body.pos,
                EVADER_COLOR,
                EVADER_LABEL,
            );
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Renders the top control bar and status bar.
    /// - Renders the config side panel.
    /// - Draws the central arena view and handles pointer input.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        // Offset origin to make sure the translation is exercised.
        egui::Rect::from_min_size(egui::Pos2::new(50.0, 30.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let viewer = Viewer::new();
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(400.0, 300.0),
            Vec2::new(13.5, 587.25),
        ];

        let eps = 1e-5;

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn new_viewer_starts_at_the_spawn_points() {
        let viewer = Viewer::new();

        assert_eq!(viewer.pursuer.body.pos, Vec2::new(200.0, 300.0));
        assert_eq!(viewer.evader.body.pos, Vec2::new(600.0, 300.0));
        assert_eq!(viewer.attempts, 0);
        // The initial target sits on the pursuer, so stepping is a no-op.
        assert_eq!(viewer.target, viewer.pursuer.body.pos);
    }

    #[test]
    fn step_once_gates_the_evader_on_pursuer_movement() {
        let mut viewer = Viewer::new();
        let evader_before = viewer.evader.body.pos;

        // Target on top of the pursuer: dead zone, nothing happens at
        // all, even though the evader is within the safe distance of a
        // hypothetical mover.
        viewer.step_once();
        assert_eq!(viewer.attempts, 0);
        assert_eq!(viewer.evader.body.pos, evader_before);

        // A far target makes the pursuer move, which both counts an
        // attempt and lets the evader react (the gap of 392 is still
        // outside the safe distance here, so only the counter changes).
        viewer.target = Vec2::new(760.0, 300.0);
        viewer.step_once();
        assert_eq!(viewer.attempts, 1);
        assert_eq!(viewer.pursuer.body.pos, Vec2::new(208.0, 300.0));
        assert_eq!(viewer.evader.body.pos, evader_before);
    }

    #[test]
    fn evader_reacts_once_the_pursuer_closes_in() {
        let mut viewer = Viewer::new();

        // March the pursuer toward the evader until the gap drops below
        // the safe distance; the evader must then give ground.
        viewer.target = viewer.evader.body.pos;
        let evader_spawn = viewer.evader.body.pos;

        for _ in 0..40 {
            viewer.step_once();
        }

        let gap = viewer.pursuer.body.pos.distance(viewer.evader.body.pos);
        assert!(gap < viewer.cfg.safe_distance + viewer.cfg.evader_speed);
        assert!(
            viewer.evader.body.pos.x > evader_spawn.x,
            "evader should have retreated, pos={:?}",
            viewer.evader.body.pos
        );
    }

    #[test]
    fn reset_restores_spawn_state() {
        let mut viewer = Viewer::new();

        // Mutate state to make sure reset actually changes things.
        viewer.target = Vec2::new(700.0, 500.0);
        for _ in 0..10 {
            viewer.step_once();
        }
        assert_ne!(viewer.pursuer.body.pos, Vec2::new(200.0, 300.0));
        assert!(viewer.attempts > 0);

        viewer.reset(12.5);

        assert_eq!(viewer.pursuer.body.pos, Vec2::new(200.0, 300.0));
        assert_eq!(viewer.evader.body.pos, Vec2::new(600.0, 300.0));
        assert_eq!(viewer.attempts, 0);
        assert_eq!(viewer.start_time, 12.5);
        assert!(!viewer.running);

        // Trails are refilled with the spawn position.
        assert!(
            viewer
                .pursuer
                .body
                .trail
                .iter()
                .all(|p| p == viewer.pursuer.body.pos)
        );
    }
}
