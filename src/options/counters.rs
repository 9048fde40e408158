use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_DURATION_MS;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Counters", inline)]
#[serde(default)]
/// Count-up animation of statistics.
pub struct CounterOptions {
    /// Cards observed for visibility.
    #[schemars(title = "Card Selector")]
    pub card_selector: String,
    /// Number element inside a card.
    #[schemars(title = "Number Selector")]
    pub number_selector: String,
    /// Visible fraction of a card that starts its counter.
    #[schemars(title = "Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub threshold: f64,
    /// Animation length in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0.0, max = 10000.0), extend("step" = 100.0))]
    pub duration_ms: f64,
    /// Progress curve.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            card_selector: ".stat-card".into(),
            number_selector: ".stat-number".into(),
            threshold: 0.5,
            duration_ms: DEFAULT_DURATION_MS,
            easing: EasingFunction::QuarticOut,
        }
    }
}
