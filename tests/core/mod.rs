//! Core module tests for the chart pipeline
//!
//! Tests for:
//! - Derived view computation (domains, ticks, line caps)
//! - Control dispatch and the view state update rule
//! - X-axis zoom
//! - Scene styling, hover and tooltips
//! - Brush statistics
//! - Settings persistence

pub mod render_tests;
pub mod settings_tests;
