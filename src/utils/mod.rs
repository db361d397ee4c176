//! Utility modules for common functionality
//!
//! This module provides the logging and progress-reporting helpers used
//! throughout the application.

pub mod logger;
pub mod progress;
