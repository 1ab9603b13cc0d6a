//! Presentation-level configuration

/// Terminal output settings resolved from config file and CLI flags
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Print the processed question before the answer
    pub show_processed: bool,
    /// Show a spinner while waiting for the model
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_processed: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Settings for `--quiet`
    pub fn quiet() -> Self {
        Self {
            show_processed: false,
            show_progress: false,
        }
    }
}
