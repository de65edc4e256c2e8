//! Integration tests for the formula library
//!
//! Tests are organized by topic:
//! - `properties` - Cross-module properties the dashboard relies on
