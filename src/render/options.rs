//! Rendering options and configuration.

use chrono::{DateTime, Utc};

use crate::parser::TableDetectorConfig;

/// Options for assembling page-indexed Markdown.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Fixed generation timestamp (current time when `None`)
    pub generated_at: Option<DateTime<Utc>>,

    /// Detect table blocks on each page
    pub detect_tables: bool,

    /// Table detection configuration
    pub table_config: TableDetectorConfig,

    /// Whether to assemble pages in parallel
    pub parallel: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp the output with a fixed time, for reproducible output.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Enable or disable table detection.
    pub fn with_table_detection(mut self, enabled: bool) -> Self {
        self.detect_tables = enabled;
        self
    }

    /// Set the table detection configuration.
    pub fn with_table_config(mut self, config: TableDetectorConfig) -> Self {
        self.table_config = config;
        self
    }

    /// Enable or disable parallel page assembly.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Assemble pages sequentially.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            generated_at: None,
            detect_tables: true,
            table_config: TableDetectorConfig::default(),
            parallel: true,
        }
    }
}
