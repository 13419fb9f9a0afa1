//! Toast notification system for user feedback.

use eframe::egui;

use crate::app::CircaViewApp;

/// Seconds a toast stays on screen
const TOAST_SECONDS: u64 = 3;

impl CircaViewApp {
    /// Render toast notifications in the bottom right corner
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some((message, time, toast_type)) = &self.toast_message else {
            return;
        };

        if time.elapsed().as_secs() >= TOAST_SECONDS {
            self.toast_message = None;
            return;
        }

        let margin = 20.0;
        let bg = toast_type.color();
        let fg = toast_type.text_color();

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, -margin))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(bg[0], bg[1], bg[2]))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .shadow(egui::epaint::Shadow {
                        offset: [2, 2],
                        blur: 8,
                        spread: 0,
                        color: egui::Color32::from_black_alpha(60),
                    })
                    .show(ui, |ui| {
                        ui.set_min_width(200.0);
                        ui.set_max_width(400.0);
                        ui.label(
                            egui::RichText::new(message.as_str())
                                .color(egui::Color32::from_rgb(fg[0], fg[1], fg[2]))
                                .size(14.0),
                        );
                    });
            });

        // Keep repainting so the toast disappears on time
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
