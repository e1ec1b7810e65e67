//! Utility modules for gwtrun
//!
//! This module provides various utility functions and helpers including:
//! - Structured logging setup and configuration

pub mod logging;

// Re-export commonly used items
pub use logging::{init_from_args, init_logging, LoggingConfig};
