//! Main application state and eframe::App implementation.
//!
//! The app owns the loaded dataset, the current view state and the scene
//! drawn from them. Every control change goes through [`CircaViewApp::apply`],
//! which recomputes the derived view and rebuilds the scene from scratch.

use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::analysis::{brush_stats, Brush, BrushDrag, BrushStats};
use crate::control::{on_control_change, ControlChange};
use crate::dataset::{load_dataset, Dataset};
use crate::render::{build_scene, HoverState, Palette, Scene};
use crate::settings::AppSettings;
use crate::state::{LoadResult, LoadingState, ToastType, ViewState};
use crate::view::{compute, DerivedView, FeatureFlags};
use crate::zoom::ZoomTransform;

/// Main application state
pub struct CircaViewApp {
    pub(crate) settings: AppSettings,
    pub(crate) features: FeatureFlags,
    pub(crate) palette: Palette,
    /// Read-only once loaded
    pub(crate) dataset: Option<Arc<Dataset>>,
    /// Channel for receiving the dataset from the background thread
    load_receiver: Option<Receiver<LoadResult>>,
    pub(crate) loading_state: LoadingState,
    pub(crate) view_state: ViewState,
    // === Control buffers (text boxes edit these, changes are dispatched) ===
    pub(crate) highlight_input: String,
    pub(crate) range_input: String,
    // === Derived per redraw ===
    pub(crate) derived: Option<DerivedView>,
    pub(crate) scene: Option<Scene>,
    // === Interaction ===
    pub(crate) hover: HoverState,
    pub(crate) zoom: ZoomTransform,
    /// Set after a redraw so the plot drops its old bounds
    pub(crate) reset_plot_bounds: bool,
    /// Secondary-button drag in progress
    pub(crate) brush_drag: BrushDrag,
    pub(crate) brush: Option<Brush>,
    pub(crate) brush_result: Option<BrushStats>,
    /// Toast messages for user feedback
    pub(crate) toast_message: Option<(String, Instant, ToastType)>,
}

impl CircaViewApp {
    pub fn new(settings: AppSettings) -> Self {
        let view_state = settings.initial_view_state();
        let mut app = Self {
            features: settings.feature_flags(),
            palette: Palette::from_color_blind_mode(settings.color_blind_mode),
            settings,
            dataset: None,
            load_receiver: None,
            loading_state: LoadingState::Ready,
            highlight_input: String::new(),
            range_input: String::new(),
            view_state,
            derived: None,
            scene: None,
            hover: HoverState::default(),
            zoom: ZoomTransform::IDENTITY,
            reset_plot_bounds: true,
            brush_drag: BrushDrag::default(),
            brush: None,
            brush_result: None,
            toast_message: None,
        };
        app.start_loading();
        app
    }

    /// Start loading the dataset in the background
    pub(crate) fn start_loading(&mut self) {
        let paths = self.settings.dataset_paths();
        let dir = self.settings.data_dir.display().to_string();

        tracing::info!("Loading dataset from {}", dir);
        self.loading_state = LoadingState::Loading(dir);
        self.dataset = None;
        self.derived = None;
        self.scene = None;

        let (sender, receiver): (Sender<LoadResult>, Receiver<LoadResult>) = channel();
        self.load_receiver = Some(receiver);

        thread::spawn(move || {
            let result = match load_dataset(&paths) {
                Ok(dataset) => LoadResult::Success(Box::new(dataset)),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = sender.send(result);
        });
    }

    /// Check for a completed background load
    fn check_loading_complete(&mut self) {
        let Some(result) = self.load_receiver.as_ref().and_then(poll_load) else {
            return;
        };

        match result {
            LoadResult::Success(dataset) => {
                self.dataset = Some(Arc::from(dataset));
                self.loading_state = LoadingState::Ready;
                self.redraw();
                self.show_toast("Dataset loaded", ToastType::Success);
            }
            LoadResult::Error(e) => {
                tracing::error!("Dataset load failed: {}", e);
                self.loading_state = LoadingState::Failed(e.clone());
                self.show_toast(&format!("Error: {}", e), ToastType::Error);
            }
        }
        self.load_receiver = None;
    }

    /// Point the app at a different data directory and reload
    pub(crate) fn change_data_dir(&mut self, dir: PathBuf) {
        self.show_toast(&format!("Loading {}", dir.display()), ToastType::Info);
        self.settings.data_dir = dir;
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {:#}", e);
        }
        self.start_loading();
    }

    /// Apply one control change and redraw
    pub(crate) fn apply(&mut self, change: ControlChange) {
        self.view_state = on_control_change(&self.view_state, change);
        self.redraw();
    }

    /// Recompute the derived view and rebuild the scene
    pub(crate) fn redraw(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };

        let derived = compute(dataset, &self.view_state, &self.features);
        self.scene = Some(build_scene(&derived, &self.view_state, self.palette));
        self.derived = Some(derived);

        self.zoom = ZoomTransform::IDENTITY;
        self.hover.leave();
        self.brush_drag = BrushDrag::default();
        self.brush = None;
        self.brush_result = None;
        self.reset_plot_bounds = true;
    }

    /// Record a brushed span and compute its statistics
    pub(crate) fn set_brush(&mut self, brush: Brush) {
        let Some(derived) = &self.derived else {
            return;
        };
        self.brush_result = brush_stats(
            &derived.visible_series,
            brush,
            self.view_state.highlight_id.as_deref(),
        );
        self.brush = Some(brush);
    }

    pub(crate) fn clear_brush(&mut self) {
        self.brush_drag = BrushDrag::default();
        self.brush = None;
        self.brush_result = None;
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.loading_state, LoadingState::Loading(_))
    }

    /// Show a toast message
    pub(crate) fn show_toast(&mut self, message: &str, toast_type: ToastType) {
        self.toast_message = Some((message.to_string(), Instant::now(), toast_type));
    }
}

/// Non-blocking check on the loader thread.
///
/// A loader that went away without sending a result (it panicked) is
/// reported as a failed load.
fn poll_load(receiver: &Receiver<LoadResult>) -> Option<LoadResult> {
    match receiver.try_recv() {
        Ok(result) => Some(result),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(LoadResult::Error(
            "Dataset loader stopped unexpectedly".to_string(),
        )),
    }
}

impl eframe::App for CircaViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background loads
        self.check_loading_complete();

        // Request repaint while loading (for spinner animation)
        if self.is_loading() {
            ctx.request_repaint();
        }

        // Toast notifications
        self.render_toast(ctx);

        egui::SidePanel::left("controls_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_controls(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_chart(ui);
        });
    }
}
