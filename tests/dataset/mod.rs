//! Dataset tests
//!
//! Tests for:
//! - CSV table parsing and missing values
//! - Table to series reshaping and back
//! - All-or-nothing directory loading

pub mod loader_tests;
pub mod table_tests;
pub mod transform_tests;
