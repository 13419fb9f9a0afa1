//! UI rendering modules for the CircaView application.
//!
//! - `controls` - Data source and view controls in the left panel
//! - `chart` - Telemetry chart, hover tooltip and brush selection
//! - `toast` - Toast notification system

pub mod chart;
pub mod controls;
pub mod toast;
