//! Controls panel - data source, filters, highlight and axis options.
//!
//! Widgets never touch the view state directly. Each edit becomes a
//! [`ControlChange`] that is applied after the panel is drawn.

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::CircaViewApp;
use crate::control::ControlChange;
use crate::state::{LoadingState, MetricType, TickMode, TimeUnit};

impl CircaViewApp {
    /// Render the left-hand controls panel
    pub fn render_controls(&mut self, ui: &mut egui::Ui) {
        let mut changes: Vec<ControlChange> = Vec::new();

        ui.heading("Data");
        ui.separator();
        self.render_data_source(ui);

        ui.add_space(12.0);
        ui.heading("View");
        ui.separator();

        let enabled = matches!(self.loading_state, LoadingState::Ready) && self.dataset.is_some();
        ui.add_enabled_ui(enabled, |ui| {
            self.render_view_controls(ui, &mut changes);
        });

        let mut clear_brush = false;
        if let Some(stats) = &self.brush_result {
            ui.add_space(12.0);
            ui.heading("Selection");
            ui.separator();
            if let Some(brush) = &self.brush {
                ui.label(
                    egui::RichText::new(format!("{:.0} - {:.0}", brush.start, brush.end))
                        .small()
                        .color(egui::Color32::GRAY),
                );
            }
            if let Some(id) = &stats.series_id {
                ui.label(format!("Mouse: {}", id));
            }
            ui.label(stats.summary());
            clear_brush = ui.small_button("Clear selection").clicked();
        }
        if clear_brush {
            self.clear_brush();
        }

        for change in changes {
            self.apply(change);
        }
    }

    fn render_data_source(&mut self, ui: &mut egui::Ui) {
        match &self.loading_state {
            LoadingState::Loading(dir) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Loading {}...", dir));
                });
            }
            LoadingState::Ready => {
                ui.label(
                    egui::RichText::new(self.settings.data_dir.display().to_string())
                        .small()
                        .color(egui::Color32::GRAY),
                );
                if let Some(dataset) = &self.dataset {
                    ui.label(
                        egui::RichText::new(format!("{} series loaded", dataset.series_count()))
                            .small()
                            .color(egui::Color32::GRAY),
                    );
                }
            }
            LoadingState::Failed(message) => {
                ui.label(
                    egui::RichText::new(message)
                        .small()
                        .color(egui::Color32::from_rgb(191, 78, 48)),
                );
            }
        }

        ui.add_space(4.0);
        ui.add_enabled_ui(!self.is_loading(), |ui| {
            if ui.button("Open data folder...").clicked() {
                if let Some(dir) = rfd::FileDialog::new()
                    .set_directory(&self.settings.data_dir)
                    .pick_folder()
                {
                    self.change_data_dir(dir);
                }
            }
        });
    }

    fn render_view_controls(&mut self, ui: &mut egui::Ui, changes: &mut Vec<ControlChange>) {
        let view = &self.view_state;

        // Sex filters
        let mut show_male = view.show_male;
        if ui.checkbox(&mut show_male, "Male").changed() {
            changes.push(ControlChange::ShowMale(show_male));
        }
        let mut show_female = view.show_female;
        if ui.checkbox(&mut show_female, "Female").changed() {
            changes.push(ControlChange::ShowFemale(show_female));
        }

        ui.add_space(8.0);

        // Metric
        ui.label("Data type");
        egui::ComboBox::from_id_salt("metric_type")
            .selected_text(view.metric.label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for metric in MetricType::iter() {
                    if ui
                        .selectable_label(view.metric == metric, metric.label())
                        .clicked()
                        && view.metric != metric
                    {
                        changes.push(ControlChange::Metric(metric));
                    }
                }
            });

        ui.add_space(8.0);

        // Highlight
        ui.label("Highlight mouse");
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.highlight_input)
                .hint_text("e.g. m3")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            changes.push(ControlChange::Highlight(self.highlight_input.clone()));
        }

        ui.add_space(8.0);

        // Tick mode
        ui.label("Tick labels");
        egui::ComboBox::from_id_salt("tick_mode")
            .selected_text(view.tick_mode.label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for mode in TickMode::iter() {
                    if ui
                        .selectable_label(view.tick_mode == mode, mode.label())
                        .clicked()
                        && view.tick_mode != mode
                    {
                        changes.push(ControlChange::TickMode(mode));
                    }
                }
            });

        ui.add_space(8.0);

        // Time unit
        ui.label("Time unit");
        egui::ComboBox::from_id_salt("time_unit")
            .selected_text(view.time_unit.label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for unit in TimeUnit::iter() {
                    if ui
                        .selectable_label(view.time_unit == unit, unit.label())
                        .clicked()
                        && view.time_unit != unit
                    {
                        changes.push(ControlChange::TimeUnit(unit));
                    }
                }
            });

        ui.add_space(8.0);

        // Time range
        ui.label("Time range");
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.range_input)
                    .hint_text("start-end")
                    .desired_width(ui.available_width() - 60.0),
            );
            if response.changed() {
                changes.push(ControlChange::TimeRange(self.range_input.clone()));
            }
            if ui.small_button("Reset").clicked() {
                self.range_input.clear();
                changes.push(ControlChange::ResetTimeWindow);
            }
        });

        if let Some(window) = self.view_state.time_window {
            ui.label(
                egui::RichText::new(format!("Showing {} - {}", window.start, window.end))
                    .small()
                    .color(egui::Color32::GRAY),
            );
        }
    }
}
