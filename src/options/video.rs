use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Video", inline)]
#[serde(default)]
/// Lazy loading of embedded videos.
pub struct VideoOptions {
    /// Containers observed for visibility.
    #[schemars(title = "Container Selector")]
    pub container_selector: String,
    /// Embed element inside a container.
    #[schemars(title = "Frame Selector")]
    pub frame_selector: String,
    /// Attribute holding the real source until the embed is visible.
    #[schemars(title = "Deferred Attribute")]
    pub deferred_attribute: String,
    /// Visible fraction that loads the embed.
    #[schemars(title = "Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub threshold: f64,
    /// CSS margin shorthand applied to the viewport.
    #[schemars(title = "Root Margin")]
    pub root_margin: String,
}

impl Default for VideoOptions {
    fn default() -> Self {
        Self {
            container_selector: ".video-container".into(),
            frame_selector: "iframe".into(),
            deferred_attribute: "data-src".into(),
            threshold: 0.1,
            root_margin: "50px".into(),
        }
    }
}
