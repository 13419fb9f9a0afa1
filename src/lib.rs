//! CircaView - an interactive viewer for mouse circadian telemetry.
//!
//! Loads per-mouse body temperature and activity tables, reshapes them into
//! per-subject time series and draws them as a filterable, zoomable
//! multi-line chart.
//!
//! ## Module Structure
//!
//! - [`dataset`] - CSV table parsing, series transformation and loading
//! - [`control`] - Control events and the view state update rule
//! - [`view`] - Derived view: visible series, domains, ticks
//! - [`render`] - Scene construction, styling and hover
//! - [`zoom`] - X-axis zoom transform
//! - [`analysis`] - Brush selection statistics
//! - [`state`] - Core data types and constants
//! - [`settings`] - User settings persistence
//! - [`error`] - Error types
//! - [`app`] - Main application state and eframe::App implementation
//! - [`ui`] - User interface components

pub mod analysis;
pub mod app;
pub mod control;
pub mod dataset;
pub mod error;
pub mod render;
pub mod settings;
pub mod state;
pub mod ui;
pub mod view;
pub mod zoom;
