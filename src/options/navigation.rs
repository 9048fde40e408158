use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Active-link highlighting and in-page anchor scrolling.
pub struct NavigationOptions {
    /// Navigation entries whose `href` is compared with the current page.
    #[schemars(title = "Nav Link Selector")]
    pub link_selector: String,
    /// Same-page anchors that scroll smoothly instead of jumping.
    #[schemars(title = "Anchor Selector")]
    pub anchor_selector: String,
    /// Page name used when the URL path ends in `/`.
    #[schemars(title = "Home Page")]
    pub home_page: String,
    /// Class marking the current page's entry.
    #[schemars(title = "Active Class")]
    pub active_class: String,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            link_selector: ".nav-link".into(),
            anchor_selector: r##"a[href^="#"]"##.into(),
            home_page: "index.html".into(),
            active_class: "active".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Mobile Menu", inline)]
#[serde(default)]
/// Collapsible navigation menu for narrow screens.
pub struct MobileMenuOptions {
    /// Whether to inject the toggle button and stylesheet.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// The menu whose visibility the toggle flips.
    #[schemars(title = "Menu Selector")]
    pub menu_selector: String,
    /// Container the toggle is inserted into, before the menu.
    #[schemars(title = "Header Selector")]
    pub header_selector: String,
    /// Class given to the injected toggle button.
    #[schemars(title = "Toggle Class")]
    pub toggle_class: String,
    /// Class toggled on the menu.
    #[schemars(title = "Open Class")]
    pub open_class: String,
    /// Toggle button label.
    #[schemars(title = "Label")]
    pub label: String,
    /// Viewport width (px) at or below which the collapsible menu applies.
    #[schemars(title = "Breakpoint", range(min = 320, max = 1920))]
    pub breakpoint_px: u32,
}

impl Default for MobileMenuOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            menu_selector: ".nav-links".into(),
            header_selector: ".nav-header".into(),
            toggle_class: "nav-toggle".into(),
            open_class: "nav-open".into(),
            label: "\u{2630}".into(),
            breakpoint_px: 768,
        }
    }
}
