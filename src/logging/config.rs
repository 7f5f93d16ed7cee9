//! Logging configuration
//!
//! Per-component log levels and output destinations for the fusion system.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    pub global_level: String,

    /// Enable console output
    pub console_output: bool,

    /// Directory for log files (None = no file logging)
    pub log_directory: Option<PathBuf>,

    /// Include file location in logs (impacts performance)
    pub include_file_location: bool,

    /// Alignment-engine log level
    pub alignment_level: String,

    /// Fusion-loop log level
    pub fusion_level: String,

    /// Testing framework log level
    pub testing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_level: "info".to_string(),
            console_output: true,
            log_directory: None,
            include_file_location: false,
            alignment_level: "info".to_string(),
            fusion_level: "info".to_string(),
            testing_level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Create a development configuration with verbose logging
    pub fn development() -> Self {
        Self {
            global_level: "debug".to_string(),
            console_output: true,
            log_directory: Some(PathBuf::from("logs")),
            include_file_location: true,
            alignment_level: "trace".to_string(),
            fusion_level: "debug".to_string(),
            testing_level: "trace".to_string(),
        }
    }

    /// Create a production configuration with minimal overhead
    pub fn production() -> Self {
        Self {
            global_level: "warn".to_string(),
            console_output: false,
            log_directory: Some(PathBuf::from("/var/log/scanner-alignment")),
            include_file_location: false,
            alignment_level: "info".to_string(),
            fusion_level: "info".to_string(),
            testing_level: "info".to_string(),
        }
    }

    /// Validate the configuration and provide helpful error messages
    pub fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];

        for (name, level) in [
            ("global_level", &self.global_level),
            ("alignment_level", &self.alignment_level),
            ("fusion_level", &self.fusion_level),
            ("testing_level", &self.testing_level),
        ] {
            if !valid_levels.contains(&level.as_str()) {
                return Err(format!(
                    "Invalid {}: {}. Must be one of: {:?}",
                    name, level, valid_levels
                ));
            }
        }

        // Validate log directory if specified
        if let Some(ref log_dir) = self.log_directory {
            if let Some(parent) = log_dir.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(format!("Log directory parent does not exist: {:?}", parent));
                }
            }
        }

        Ok(())
    }

    /// Get the effective log level for a specific component
    pub fn get_component_level(&self, component: &str) -> &str {
        match component {
            "alignment" | "algorithms" => &self.alignment_level,
            "fusion" => &self.fusion_level,
            "testing" | "test" => &self.testing_level,
            _ => &self.global_level,
        }
    }
}
