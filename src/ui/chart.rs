//! Chart rendering and pointer interaction.
//!
//! Draws the current [`Scene`] with egui_plot. The x axis can be zoomed and
//! panned (never the y axis), hovering a line shows its subject id, and a
//! secondary-button drag brushes a time span for summary statistics.

use eframe::egui;
use egui_plot::{GridMark, Line, Plot, PlotBounds, PlotPoints, Polygon, VLine};

use crate::app::CircaViewApp;
use crate::render::{effective_style, nearest_series, tooltip, Scene};
use crate::state::{LoadingState, DARK_PHASE_COLOR, LIGHT_PHASE_COLOR};
use crate::view::format_tick;
use crate::zoom::clamp_window;

/// Vertical distance in pixels within which a line counts as hovered
const HOVER_TOLERANCE_PX: f64 = 6.0;

/// What the plot reported back for this frame
struct ChartOutcome {
    response: egui::Response,
    window: (f64, f64),
    pointer: Option<[f64; 2]>,
    y_tolerance: f64,
}

fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}

/// Grid marks at fixed tick values
fn grid_marks(values: &[f64]) -> Vec<GridMark> {
    let step = match values {
        [a, b, ..] => (b - a).abs(),
        _ => 1.0,
    };
    values
        .iter()
        .map(|&value| GridMark {
            value,
            step_size: step,
        })
        .collect()
}

impl CircaViewApp {
    /// Render the main chart
    pub fn render_chart(&mut self, ui: &mut egui::Ui) {
        match &self.loading_state {
            LoadingState::Loading(_) => {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }
            LoadingState::Failed(message) => {
                let message = message.clone();
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(format!("Could not load dataset\n{}", message))
                            .size(16.0)
                            .color(egui::Color32::GRAY),
                    );
                });
                return;
            }
            LoadingState::Ready => {}
        }

        // Take the scene out while drawing so `self` stays free for updates
        let Some(mut scene) = self.scene.take() else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Open a data folder to begin")
                        .size(20.0)
                        .color(egui::Color32::GRAY),
                );
            });
            return;
        };

        self.render_chart_header(ui, &scene);
        let outcome = self.draw_scene(ui, &scene);
        self.reset_plot_bounds = false;

        // Zoom only refreshes x ticks; colours and opacity stay as drawn
        let zoom = scene.zoom_to(outcome.window);
        if zoom != self.zoom {
            self.zoom = zoom;
            ui.ctx().request_repaint();
        }

        self.handle_chart_interaction(ui, &scene, outcome);
        self.scene = Some(scene);
    }

    fn render_chart_header(&self, ui: &mut egui::Ui, scene: &Scene) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(self.view_state.metric.label()).strong());
            ui.label(
                egui::RichText::new(format!("{} mice", scene.paths.len()))
                    .color(egui::Color32::GRAY),
            );
            if scene.is_empty() {
                ui.label(
                    egui::RichText::new("No series selected").color(egui::Color32::GRAY),
                );
            }
        });
        ui.add_space(4.0);
    }

    fn draw_scene(&self, ui: &mut egui::Ui, scene: &Scene) -> ChartOutcome {
        let tick_mode = scene.tick_mode;
        let time_unit = scene.time_unit;
        let x_marks: Vec<f64> = scene.x_ticks.iter().map(|t| t.value).collect();
        let y_marks: Vec<f64> = scene.y_ticks.iter().map(|t| t.value).collect();

        let reset = self.reset_plot_bounds;
        let base = scene.base_domain;
        let (y_min, y_max) = scene.y_bounds.unwrap_or((0.0, 1.0));
        let hover = &self.hover;
        let brush = self.brush;

        // X-axis zoom and pan only; secondary drag is reserved for brushing
        let plot = Plot::new("telemetry_chart")
            .allow_zoom([true, false])
            .allow_drag([true, false])
            .allow_scroll([true, false])
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .x_grid_spacer(move |_input| grid_marks(&x_marks))
            .y_grid_spacer(move |_input| grid_marks(&y_marks))
            .x_axis_formatter(move |mark, _range| format_tick(mark.value, tick_mode, time_unit))
            .y_axis_formatter(|mark, _range| format!("{}", mark.value));

        let result = plot.show(ui, |plot_ui| {
            let window = if reset {
                base
            } else {
                let bounds = plot_ui.plot_bounds();
                clamp_window(base, (bounds.min()[0], bounds.max()[0]))
            };
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [window.0, y_min],
                [window.1, y_max],
            ));

            for band in &scene.bands {
                let color = if band.light {
                    LIGHT_PHASE_COLOR
                } else {
                    DARK_PHASE_COLOR
                };
                plot_ui.polygon(
                    Polygon::new(
                        "phase",
                        PlotPoints::from(vec![
                            [band.start, y_min],
                            [band.end, y_min],
                            [band.end, y_max],
                            [band.start, y_max],
                        ]),
                    )
                    .fill_color(rgb(color).gamma_multiply(0.15))
                    .stroke(egui::Stroke::NONE),
                );
            }

            for path in &scene.paths {
                let (stroke, width) = effective_style(path, hover);
                let color = rgb(stroke).gamma_multiply(path.opacity);
                for segment in &path.segments {
                    let points: PlotPoints = segment.iter().copied().collect();
                    plot_ui.line(Line::new(path.id.clone(), points).color(color).width(width));
                }
            }

            if let Some(brush) = brush {
                let edge = egui::Color32::from_rgb(71, 108, 155);
                plot_ui.vline(VLine::new("brush_start", brush.start).color(edge).width(1.5));
                plot_ui.vline(VLine::new("brush_end", brush.end).color(edge).width(1.5));
            }

            (window, plot_ui.pointer_coordinate().map(|p| [p.x, p.y]))
        });

        let (window, pointer) = result.inner;
        ChartOutcome {
            response: result.response,
            window,
            pointer,
            y_tolerance: HOVER_TOLERANCE_PX * result.transform.dvalue_dpos()[1].abs(),
        }
    }

    fn handle_chart_interaction(
        &mut self,
        ui: &mut egui::Ui,
        scene: &Scene,
        outcome: ChartOutcome,
    ) {
        let response = &outcome.response;

        // Hover
        let previous_hover = self.hover.active.clone();
        match outcome.pointer {
            Some(pointer) if response.hovered() => {
                let id = nearest_series(scene, pointer, outcome.y_tolerance).map(str::to_string);
                self.hover.enter(id, pointer);
            }
            _ => self.hover.leave(),
        }
        if self.hover.active != previous_hover {
            ui.ctx().request_repaint();
        }
        if let Some(tip) = tooltip(&self.hover) {
            response.clone().on_hover_ui_at_pointer(|ui| {
                ui.label(tip.text);
            });
        }

        // Brush
        if !self.features.brush_stats {
            return;
        }
        let pointer_x = outcome
            .pointer
            .map(|p| p[0].clamp(outcome.window.0, outcome.window.1));

        if response.drag_started_by(egui::PointerButton::Secondary) {
            self.clear_brush();
            self.brush_drag.start(pointer_x);
        } else if response.drag_stopped_by(egui::PointerButton::Secondary) {
            match self.brush_drag.finish(pointer_x) {
                Some(brush) if brush.width() > 0.0 => self.set_brush(brush),
                _ => self.clear_brush(),
            }
        } else if response.dragged_by(egui::PointerButton::Secondary) {
            if let Some(brush) = self.brush_drag.update(pointer_x) {
                self.brush = Some(brush);
            }
        }
    }
}
