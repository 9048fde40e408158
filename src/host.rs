//! The browsing context the enhancements run against.
//!
//! [`Host`] is everything the core needs from a document and its window:
//! element lookup and mutation, layout metrics, a clock, and the hooks that
//! make the host deliver [`PageEvent`]s back into
//! [`Site::handle`](crate::site::Site::handle). The browser implementation
//! lives in `web` (feature `web`); [`SimHost`](crate::sim::SimHost) is an
//! in-memory stand-in for tests.

use std::fmt::Debug;

use crate::error::SproutError;
use crate::util::debounce::TimerTicket;
use crate::visibility::{Observation, WatchKind, WatchSpec};

/// Scroll position and document extent, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the document.
    pub scroll_top: f64,
    /// Total scrollable height of the document.
    pub document_height: f64,
    /// Height of the viewport.
    pub viewport_height: f64,
}

/// Which click handler an element is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickRole {
    /// Same-page anchor; the host suppresses the default jump.
    Anchor,
    /// Mobile menu toggle button.
    MenuToggle,
}

/// Events a host delivers to [`Site::handle`](crate::site::Site::handle).
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<N> {
    /// The window scrolled.
    Scroll,
    /// The window was resized.
    Resize,
    /// A timer scheduled with [`Host::set_timer`] elapsed.
    Timer(TimerTicket),
    /// An animation frame requested with [`Host::request_frame`], with its
    /// timestamp in milliseconds on the [`Host::now`] clock.
    Frame(f64),
    /// A visibility notification for an observed element.
    Visibility {
        /// Observer the notification came from.
        kind: WatchKind,
        /// Observed element.
        target: N,
        /// Visible fraction at notification time.
        observation: Observation,
    },
    /// A registered element was clicked.
    Click {
        /// Handler the element was registered with.
        role: ClickRole,
        /// Clicked element.
        target: N,
    },
    /// Pointer entered a hover-registered element.
    PointerEnter(N),
    /// Pointer left a hover-registered element.
    PointerLeave(N),
}

/// A document plus its window.
///
/// Mutating calls return `Err` only when the underlying platform throws.
/// Lookups that find nothing return empty results rather than errors.
pub trait Host {
    /// Element handle. Cheap to clone; equality is identity.
    type Node: Clone + PartialEq + Debug;

    // -- Lookup ----------------------------------------------------------

    /// All elements matching a selector, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Node>, SproutError>;

    /// First element matching a selector.
    fn query(&self, selector: &str) -> Result<Option<Self::Node>, SproutError> {
        Ok(self.query_all(selector)?.into_iter().next())
    }

    /// First descendant of `scope` matching a selector.
    fn query_in(
        &self,
        scope: &Self::Node,
        selector: &str,
    ) -> Result<Option<Self::Node>, SproutError>;

    /// Element with the given id.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    // -- Attributes, text, classes, style --------------------------------

    /// Attribute value, if present.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(
        &self,
        node: &Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), SproutError>;

    /// Remove an attribute (no-op if absent).
    fn remove_attribute(
        &self,
        node: &Self::Node,
        name: &str,
    ) -> Result<(), SproutError>;

    /// Text content.
    fn text(&self, node: &Self::Node) -> String;

    /// Replace the text content.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Add a class.
    fn add_class(&self, node: &Self::Node, class: &str) -> Result<(), SproutError>;

    /// Remove a class.
    fn remove_class(
        &self,
        node: &Self::Node,
        class: &str,
    ) -> Result<(), SproutError>;

    /// Toggle a class; returns whether it is now present.
    fn toggle_class(
        &self,
        node: &Self::Node,
        class: &str,
    ) -> Result<bool, SproutError>;

    /// Set one inline style property.
    fn set_style(
        &self,
        node: &Self::Node,
        property: &str,
        value: &str,
    ) -> Result<(), SproutError>;

    // -- Tree ------------------------------------------------------------

    /// Create a detached element.
    fn create_element(&self, tag: &str) -> Result<Self::Node, SproutError>;

    /// Append to `<body>`.
    fn append_to_body(&self, node: &Self::Node) -> Result<(), SproutError>;

    /// Append to `<head>`.
    fn append_to_head(&self, node: &Self::Node) -> Result<(), SproutError>;

    /// Insert `node` into `parent` before `reference`, or at the end when
    /// `reference` is `None` or not a child of `parent`.
    fn insert_before(
        &self,
        parent: &Self::Node,
        node: &Self::Node,
        reference: Option<&Self::Node>,
    ) -> Result<(), SproutError>;

    /// Smooth-scroll so `node` is aligned to the top of the viewport.
    fn scroll_into_view(&self, node: &Self::Node);

    // -- Window ----------------------------------------------------------

    /// Path component of the page URL.
    fn location_path(&self) -> String;

    /// Current scroll metrics.
    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Milliseconds on the same clock as [`PageEvent::Frame`] timestamps.
    fn now(&self) -> f64;

    // -- Event delivery --------------------------------------------------

    /// Start delivering [`PageEvent::Visibility`] for `node`.
    fn observe(&self, spec: &WatchSpec, node: &Self::Node) -> Result<(), SproutError>;

    /// Stop delivering visibility notifications for `node`.
    fn unobserve(&self, kind: WatchKind, node: &Self::Node) -> Result<(), SproutError>;

    /// Deliver [`PageEvent::Click`] for `node`.
    fn listen_click(
        &self,
        node: &Self::Node,
        role: ClickRole,
    ) -> Result<(), SproutError>;

    /// Deliver pointer enter/leave events for `node`.
    fn listen_hover(&self, node: &Self::Node) -> Result<(), SproutError>;

    /// Deliver [`PageEvent::Scroll`] and [`PageEvent::Resize`].
    fn listen_viewport(&self) -> Result<(), SproutError>;

    /// Deliver one [`PageEvent::Frame`] before the next repaint.
    fn request_frame(&self) -> Result<(), SproutError>;

    /// Deliver [`PageEvent::Timer`] with `ticket` after `delay_ms`.
    fn set_timer(&self, delay_ms: f64, ticket: TimerTicket) -> Result<(), SproutError>;
}
