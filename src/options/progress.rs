use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scroll Progress", inline)]
#[serde(default)]
/// Reading-progress bar pinned to the top of the viewport.
pub struct ProgressOptions {
    /// Whether to inject the bar.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Quiet period after the last scroll/resize before recomputing.
    #[schemars(title = "Debounce (ms)", range(min = 0.0, max = 500.0), extend("step" = 5.0))]
    pub debounce_ms: f64,
    /// Bar height in pixels.
    #[schemars(title = "Height (px)", range(min = 1, max = 20))]
    pub height_px: u32,
    /// CSS background of the bar.
    #[schemars(title = "Background")]
    pub background: String,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: 10.0,
            height_px: 3,
            background: "var(--gradient-button)".into(),
        }
    }
}
