//! WASM entry point for the sprout page enhancements.
//!
//! Loading the module installs every enhancement. A page can override
//! selectors, classes or timing by embedding TOML in an element with id
//! [`OPTIONS_ELEMENT_ID`]:
//!
//! ```html
//! <script type="application/toml" id="sprout-options">
//! [counters]
//! duration_ms = 1500.0
//! </script>
//! ```

use sprout::Options;
use wasm_bindgen::prelude::*;

/// Id of the element whose text is read as TOML options.
pub const OPTIONS_ELEMENT_ID: &str = "sprout-options";

/// Install every enhancement with options parsed from TOML. Keys left out
/// keep their defaults.
///
/// Not exported to JavaScript: pages configure through the embedded
/// [`OPTIONS_ELEMENT_ID`] element, which [`start`] reads on load. This is
/// for Rust crates that link this one as an rlib and skip the module start.
pub fn start_with_options(toml: &str) -> Result<(), JsValue> {
    let options = Options::from_toml_str(toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
    run(&options)
}

fn run(options: &Options) -> Result<(), JsValue> {
    let _site = sprout::web::start(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(())
}

/// Module start: set up console logging, then install the enhancements.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    sprout::web::init_logging(log::Level::Info);
    match sprout::web::embedded_text(OPTIONS_ELEMENT_ID) {
        Some(toml) => {
            log::info!("using options from #{OPTIONS_ELEMENT_ID}");
            start_with_options(&toml)
        }
        None => run(&Options::default()),
    }
}
