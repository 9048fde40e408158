//! Crate-level error types.

use std::fmt;

/// Errors produced by the sprout crate.
#[derive(Debug)]
pub enum SproutError {
    /// A host DOM call failed (a thrown `JsValue` in the browser).
    Dom(String),
    /// A root margin string is not valid CSS margin shorthand in `px`.
    InvalidMargin(String),
    /// A selector the simulated DOM cannot parse.
    InvalidSelector(String),
    /// An option value is out of range.
    InvalidOption(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for SproutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
            Self::InvalidMargin(margin) => {
                write!(f, "invalid root margin: {margin:?}")
            }
            Self::InvalidSelector(selector) => {
                write!(f, "unsupported selector: {selector:?}")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SproutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SproutError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for SproutError {
    fn from(e: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{e:?}"))
    }
}
