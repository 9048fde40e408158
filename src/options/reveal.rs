use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reveal", inline)]
#[serde(default)]
/// Fade-in of content blocks as they scroll into view.
pub struct RevealOptions {
    /// Elements that fade in.
    #[schemars(title = "Selector")]
    pub selector: String,
    /// Visible fraction that triggers the fade.
    #[schemars(title = "Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub threshold: f64,
    /// CSS margin shorthand applied to the viewport.
    #[schemars(title = "Root Margin")]
    pub root_margin: String,
    /// Class added when the element is revealed.
    #[schemars(title = "Class")]
    pub class: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: ".card, .section".into(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            class: "fade-in-up".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Hover", inline)]
#[serde(default)]
/// Scale feedback on buttons under the pointer.
pub struct HoverOptions {
    /// Buttons that react to hover.
    #[schemars(title = "Selector")]
    pub selector: String,
    /// Scale applied while hovered.
    #[schemars(title = "Scale", range(min = 1.0, max = 1.5), extend("step" = 0.01))]
    pub scale: f64,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            selector: ".btn-primary, .btn-secondary".into(),
            scale: 1.02,
        }
    }
}
