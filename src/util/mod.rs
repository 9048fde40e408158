//! Shared utilities: easing curves and trailing-edge debouncing.

pub mod debounce;
pub mod easing;
