//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the compositor:
//! - Integer geometry types and containment tests
//! - Tick-rate throttling
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
