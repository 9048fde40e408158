//! Selectors, classes and timing constants for every enhancement.
//!
//! Defaults match the stock site markup. Options serialize to/from TOML so a
//! page can override individual values, e.g. only `[counters] duration_ms`.

mod counters;
mod navigation;
mod progress;
mod reveal;
mod video;

use std::path::Path;

pub use counters::CounterOptions;
pub use navigation::{MobileMenuOptions, NavigationOptions};
pub use progress::ProgressOptions;
pub use reveal::{HoverOptions, RevealOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use video::VideoOptions;

use crate::error::SproutError;
use crate::geometry::RootMargin;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML works.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Active-link highlighting and anchor scrolling.
    pub navigation: NavigationOptions,
    /// Mobile menu toggle.
    pub mobile_menu: MobileMenuOptions,
    /// Fade-in on scroll.
    pub reveal: RevealOptions,
    /// Button hover feedback.
    pub hover: HoverOptions,
    /// Stat counters.
    pub counters: CounterOptions,
    /// Lazy video embeds.
    pub video: VideoOptions,
    /// Scroll progress bar.
    pub progress: ProgressOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SproutError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| SproutError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SproutError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SproutError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SproutError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check ranges and margin syntax.
    pub fn validate(&self) -> Result<(), SproutError> {
        check_fraction("reveal.threshold", self.reveal.threshold)?;
        check_fraction("counters.threshold", self.counters.threshold)?;
        check_fraction("video.threshold", self.video.threshold)?;
        check_non_negative("counters.duration_ms", self.counters.duration_ms)?;
        check_non_negative("progress.debounce_ms", self.progress.debounce_ms)?;
        check_non_negative("hover.scale", self.hover.scale)?;
        let _: RootMargin = self.reveal.root_margin.parse()?;
        let _: RootMargin = self.video.root_margin.parse()?;
        Ok(())
    }
}

fn check_fraction(name: &str, value: f64) -> Result<(), SproutError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SproutError::InvalidOption(format!(
            "{name} = {value} is outside [0, 1]"
        )))
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), SproutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SproutError::InvalidOption(format!(
            "{name} = {value} must be a non-negative number"
        )))
    }
}
