//! In-memory simulated DOM.
//!
//! [`SimHost`] implements [`Host`] over a small element tree with explicit
//! layout rectangles, a settable clock and scroll position, and recorded
//! event registrations. Nothing is delivered automatically: tests (or the
//! [`Site`] helpers at the bottom of this module) pull due timers, frame
//! requests and visibility notifications and feed them to
//! [`Site::handle`].

mod selector;

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use self::selector::{Matchable, SelectorList};
use crate::error::SproutError;
use crate::geometry::{self, Rect};
use crate::host::{ClickRole, Host, PageEvent, ScrollMetrics};
use crate::site::Site;
use crate::util::debounce::TimerTicket;
use crate::visibility::{WatchKind, WatchSpec};

/// Handle to a simulated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

/// Builder for an element appended with [`SimHost::append`].
#[derive(Debug, Clone, Default)]
pub struct SimElement {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: String,
    rect: Rect,
}

impl SimElement {
    /// Element with the given tag name.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        text.clone_into(&mut self.text);
        self
    }

    /// Set the layout box in document coordinates.
    #[must_use]
    pub fn rect(mut self, x: f64, y: f64, w: f64, h: f64) -> Self {
        self.rect = Rect::new(x, y, w, h);
        self
    }
}

#[derive(Debug, Clone, Default)]
struct SimNode {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    style: Vec<(String, String)>,
    text: String,
    rect: Rect,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SimNode {
    fn style_text(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn set_style_text(&mut self, css: &str) {
        self.style.clear();
        for decl in css.split(';') {
            if let Some((k, v)) = decl.split_once(':') {
                let (k, v) = (k.trim(), v.trim());
                if !k.is_empty() {
                    self.style.push((k.to_owned(), v.to_owned()));
                }
            }
        }
    }
}

impl Matchable for SimNode {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attr(&self, name: &str) -> Option<String> {
        match name {
            "class" => (!self.classes.is_empty()).then(|| self.classes.join(" ")),
            "style" => (!self.style.is_empty()).then(|| self.style_text()),
            _ => self
                .attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone()),
        }
    }
}

#[derive(Debug)]
struct SimState {
    nodes: FxHashMap<NodeId, SimNode>,
    next_id: u32,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    path: String,
    metrics: ScrollMetrics,
    viewport_width: f64,
    now: f64,
    observed: Vec<(WatchSpec, NodeId)>,
    clicks: Vec<(NodeId, ClickRole)>,
    hovers: Vec<NodeId>,
    viewport_listening: bool,
    frame_requested: bool,
    timers: Vec<(f64, TimerTicket)>,
    scrolled_into_view: Vec<NodeId>,
}

impl SimState {
    fn node(&self, id: NodeId) -> Option<&SimNode> {
        self.nodes.get(&id)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut SimNode, SproutError> {
        self.nodes
            .get_mut(&id)
            .ok_or_else(|| SproutError::Dom(format!("no such node {id:?}")))
    }

    fn create(&mut self, el: SimElement) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let node = SimNode {
            tag: el.tag,
            classes: el.classes,
            attrs: el.attrs,
            text: el.text,
            rect: el.rect,
            ..SimNode::default()
        };
        let _ = self.nodes.insert(id, node);
        id
    }

    /// Pre-order descendants of `scope`, excluding `scope`.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(scope)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn select(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, SproutError> {
        let list = SelectorList::parse(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|id| self.node(*id).is_some_and(|n| list.matches(n)))
            .collect())
    }

    fn detach(&mut self, id: NodeId) {
        let parent = self.nodes.get_mut(&id).and_then(|n| n.parent.take());
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|c| *c != id);
        }
    }

    fn insert(
        &mut self,
        parent: NodeId,
        id: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), SproutError> {
        if parent == id || self.descendants(id).contains(&parent) {
            return Err(SproutError::Dom(format!(
                "cannot insert {id:?} into its own subtree"
            )));
        }
        let _ = self.node_mut(parent)?;
        self.detach(id);
        self.node_mut(id)?.parent = Some(parent);
        let parent = self.node_mut(parent)?;
        let pos = reference
            .and_then(|r| parent.children.iter().position(|c| *c == r))
            .unwrap_or(parent.children.len());
        parent.children.insert(pos, id);
        Ok(())
    }

    fn text_of(&self, id: NodeId) -> String {
        let mut text = self.node(id).map(|n| n.text.clone()).unwrap_or_default();
        for child in self.descendants(id) {
            if let Some(node) = self.node(child) {
                text.push_str(&node.text);
            }
        }
        text
    }

    fn viewport(&self) -> Rect {
        Rect::new(
            0.0,
            self.metrics.scroll_top,
            self.viewport_width,
            self.metrics.viewport_height,
        )
    }
}

/// A simulated page: `<html>` with `<head>` and `<body>`, a viewport and a
/// clock.
#[derive(Debug)]
pub struct SimHost {
    state: RefCell<SimState>,
}

impl Default for SimHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SimHost {
    /// Default viewport width in CSS pixels.
    pub const VIEWPORT_WIDTH: f64 = 1280.0;
    /// Default viewport height in CSS pixels.
    pub const VIEWPORT_HEIGHT: f64 = 800.0;

    /// Empty page at path `/`, scrolled to the top, with a document exactly
    /// one viewport tall.
    #[must_use]
    pub fn new() -> Self {
        let mut state = SimState {
            nodes: FxHashMap::default(),
            next_id: 0,
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            path: "/".to_owned(),
            metrics: ScrollMetrics {
                scroll_top: 0.0,
                document_height: Self::VIEWPORT_HEIGHT,
                viewport_height: Self::VIEWPORT_HEIGHT,
            },
            viewport_width: Self::VIEWPORT_WIDTH,
            now: 0.0,
            observed: Vec::new(),
            clicks: Vec::new(),
            hovers: Vec::new(),
            viewport_listening: false,
            frame_requested: false,
            timers: Vec::new(),
            scrolled_into_view: Vec::new(),
        };
        let root = state.create(SimElement::new("html"));
        let head = state.create(SimElement::new("head"));
        let body = state.create(SimElement::new("body"));
        for child in [head, body] {
            if let Some(node) = state.nodes.get_mut(&child) {
                node.parent = Some(root);
            }
            if let Some(node) = state.nodes.get_mut(&root) {
                node.children.push(child);
            }
        }
        state.root = root;
        state.head = head;
        state.body = body;
        Self {
            state: RefCell::new(state),
        }
    }

    /// `<head>`.
    #[must_use]
    pub fn head(&self) -> NodeId {
        self.state.borrow().head
    }

    /// `<body>`.
    #[must_use]
    pub fn body(&self) -> NodeId {
        self.state.borrow().body
    }

    /// Append a new element under `parent` and return its handle. An
    /// unknown parent leaves the element detached.
    pub fn append(&self, parent: NodeId, el: SimElement) -> NodeId {
        let mut state = self.state.borrow_mut();
        let id = state.create(el);
        let _ = state.insert(parent, id, None);
        id
    }

    /// Set the URL path.
    pub fn set_path(&self, path: &str) {
        path.clone_into(&mut self.state.borrow_mut().path);
    }

    /// Set the clock.
    pub fn set_now(&self, now: f64) {
        self.state.borrow_mut().now = now;
    }

    /// Set the total document height.
    pub fn set_document_height(&self, height: f64) {
        self.state.borrow_mut().metrics.document_height = height;
    }

    /// Set the viewport height.
    pub fn set_viewport_height(&self, height: f64) {
        self.state.borrow_mut().metrics.viewport_height = height;
    }

    /// Set the scroll offset (not clamped, to allow overscroll).
    pub fn set_scroll_top(&self, top: f64) {
        self.state.borrow_mut().metrics.scroll_top = top;
    }

    // -- Inspection ------------------------------------------------------

    /// Tag name.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.state.borrow().node(node).map(|n| n.tag.clone())
    }

    /// Whether the element has a class.
    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.state
            .borrow()
            .node(node)
            .is_some_and(|n| n.has_class(class))
    }

    /// Inline style property value.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.state.borrow().node(node).and_then(|n| {
            n.style
                .iter()
                .find(|(k, _)| k == property)
                .map(|(_, v)| v.clone())
        })
    }

    /// Parent element.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.state.borrow().node(node).and_then(|n| n.parent)
    }

    /// Child elements in order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.state
            .borrow()
            .node(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Whether `node` is observed by the `kind` observer.
    #[must_use]
    pub fn is_observed(&self, kind: WatchKind, node: NodeId) -> bool {
        self.state
            .borrow()
            .observed
            .iter()
            .any(|(spec, id)| spec.kind == kind && *id == node)
    }

    /// Elements observed by the `kind` observer.
    #[must_use]
    pub fn observed(&self, kind: WatchKind) -> Vec<NodeId> {
        self.state
            .borrow()
            .observed
            .iter()
            .filter(|(spec, _)| spec.kind == kind)
            .map(|(_, id)| *id)
            .collect()
    }

    /// Whether a click handler with `role` is registered on `node`.
    #[must_use]
    pub fn is_listening_click(&self, node: NodeId, role: ClickRole) -> bool {
        self.state.borrow().clicks.contains(&(node, role))
    }

    /// Whether hover handlers are registered on `node`.
    #[must_use]
    pub fn is_listening_hover(&self, node: NodeId) -> bool {
        self.state.borrow().hovers.contains(&node)
    }

    /// Whether scroll/resize handlers are registered.
    #[must_use]
    pub fn is_listening_viewport(&self) -> bool {
        self.state.borrow().viewport_listening
    }

    /// Elements passed to [`Host::scroll_into_view`], oldest first.
    #[must_use]
    pub fn scrolled_into_view(&self) -> Vec<NodeId> {
        self.state.borrow().scrolled_into_view.clone()
    }

    // -- Event delivery --------------------------------------------------

    /// Consume the pending frame request, if any.
    pub fn take_frame_request(&self) -> bool {
        std::mem::take(&mut self.state.borrow_mut().frame_requested)
    }

    /// Remove and return the tickets of timers due at or before `now`, in
    /// due order.
    pub fn take_due_timers(&self, now: f64) -> Vec<TimerTicket> {
        let mut state = self.state.borrow_mut();
        let mut due: Vec<(f64, TimerTicket)> = Vec::new();
        state.timers.retain(|timer| {
            if timer.0 <= now {
                due.push(*timer);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due.into_iter().map(|(_, ticket)| ticket).collect()
    }

    /// Number of scheduled timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Visibility notifications for every observed element at the current
    /// scroll position.
    #[must_use]
    pub fn visibility_events(&self) -> Vec<PageEvent<NodeId>> {
        let state = self.state.borrow();
        let viewport = state.viewport();
        state
            .observed
            .iter()
            .filter_map(|(spec, id)| {
                let rect = state.node(*id)?.rect;
                Some(PageEvent::Visibility {
                    kind: spec.kind,
                    target: *id,
                    observation: geometry::visible_fraction(
                        rect,
                        viewport,
                        spec.root_margin,
                    ),
                })
            })
            .collect()
    }
}

impl Host for SimHost {
    type Node = NodeId;

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, SproutError> {
        let state = self.state.borrow();
        state.select(state.root, selector)
    }

    fn query_in(
        &self,
        scope: &NodeId,
        selector: &str,
    ) -> Result<Option<NodeId>, SproutError> {
        Ok(self.state.borrow().select(*scope, selector)?.into_iter().next())
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let state = self.state.borrow();
        state.descendants(state.root).into_iter().find(|n| {
            state
                .node(*n)
                .and_then(|node| node.attr("id"))
                .is_some_and(|v| v == id)
        })
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.state.borrow().node(*node).and_then(|n| n.attr(name))
    }

    fn set_attribute(
        &self,
        node: &NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), SproutError> {
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(*node)?;
        match name {
            "class" => {
                node.classes =
                    value.split_whitespace().map(str::to_owned).collect();
            }
            "style" => node.set_style_text(value),
            _ => {
                if let Some(slot) = node.attrs.iter_mut().find(|(n, _)| n == name)
                {
                    value.clone_into(&mut slot.1);
                } else {
                    node.attrs.push((name.to_owned(), value.to_owned()));
                }
            }
        }
        Ok(())
    }

    fn remove_attribute(&self, node: &NodeId, name: &str) -> Result<(), SproutError> {
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(*node)?;
        match name {
            "class" => node.classes.clear(),
            "style" => node.style.clear(),
            _ => node.attrs.retain(|(n, _)| n != name),
        }
        Ok(())
    }

    fn text(&self, node: &NodeId) -> String {
        self.state.borrow().text_of(*node)
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut state = self.state.borrow_mut();
        let children = state.node(*node).map(|n| n.children.clone());
        for child in children.unwrap_or_default() {
            state.detach(child);
        }
        if let Ok(node) = state.node_mut(*node) {
            text.clone_into(&mut node.text);
        }
    }

    fn add_class(&self, node: &NodeId, class: &str) -> Result<(), SproutError> {
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(*node)?;
        if !node.has_class(class) {
            node.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&self, node: &NodeId, class: &str) -> Result<(), SproutError> {
        self.state
            .borrow_mut()
            .node_mut(*node)?
            .classes
            .retain(|c| c != class);
        Ok(())
    }

    fn toggle_class(&self, node: &NodeId, class: &str) -> Result<bool, SproutError> {
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(*node)?;
        if node.has_class(class) {
            node.classes.retain(|c| c != class);
            Ok(false)
        } else {
            node.classes.push(class.to_owned());
            Ok(true)
        }
    }

    fn set_style(
        &self,
        node: &NodeId,
        property: &str,
        value: &str,
    ) -> Result<(), SproutError> {
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(*node)?;
        if let Some(slot) = node.style.iter_mut().find(|(k, _)| k == property) {
            value.clone_into(&mut slot.1);
        } else {
            node.style.push((property.to_owned(), value.to_owned()));
        }
        Ok(())
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, SproutError> {
        Ok(self.state.borrow_mut().create(SimElement::new(tag)))
    }

    fn append_to_body(&self, node: &NodeId) -> Result<(), SproutError> {
        let mut state = self.state.borrow_mut();
        let body = state.body;
        state.insert(body, *node, None)
    }

    fn append_to_head(&self, node: &NodeId) -> Result<(), SproutError> {
        let mut state = self.state.borrow_mut();
        let head = state.head;
        state.insert(head, *node, None)
    }

    fn insert_before(
        &self,
        parent: &NodeId,
        node: &NodeId,
        reference: Option<&NodeId>,
    ) -> Result<(), SproutError> {
        self.state
            .borrow_mut()
            .insert(*parent, *node, reference.copied())
    }

    fn scroll_into_view(&self, node: &NodeId) {
        let mut state = self.state.borrow_mut();
        let Some(top) = state.node(*node).map(|n| n.rect.y) else {
            return;
        };
        let max = (state.metrics.document_height - state.metrics.viewport_height)
            .max(0.0);
        state.metrics.scroll_top = top.clamp(0.0, max);
        state.scrolled_into_view.push(*node);
    }

    fn location_path(&self) -> String {
        self.state.borrow().path.clone()
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.state.borrow().metrics
    }

    fn now(&self) -> f64 {
        self.state.borrow().now
    }

    fn observe(&self, spec: &WatchSpec, node: &NodeId) -> Result<(), SproutError> {
        let mut state = self.state.borrow_mut();
        if !state
            .observed
            .iter()
            .any(|(s, id)| s.kind == spec.kind && id == node)
        {
            state.observed.push((*spec, *node));
        }
        Ok(())
    }

    fn unobserve(&self, kind: WatchKind, node: &NodeId) -> Result<(), SproutError> {
        self.state
            .borrow_mut()
            .observed
            .retain(|(s, id)| !(s.kind == kind && id == node));
        Ok(())
    }

    fn listen_click(&self, node: &NodeId, role: ClickRole) -> Result<(), SproutError> {
        self.state.borrow_mut().clicks.push((*node, role));
        Ok(())
    }

    fn listen_hover(&self, node: &NodeId) -> Result<(), SproutError> {
        self.state.borrow_mut().hovers.push(*node);
        Ok(())
    }

    fn listen_viewport(&self) -> Result<(), SproutError> {
        self.state.borrow_mut().viewport_listening = true;
        Ok(())
    }

    fn request_frame(&self) -> Result<(), SproutError> {
        self.state.borrow_mut().frame_requested = true;
        Ok(())
    }

    fn set_timer(&self, delay_ms: f64, ticket: TimerTicket) -> Result<(), SproutError> {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay_ms.max(0.0);
        state.timers.push((due, ticket));
        Ok(())
    }
}

/// Drivers that play the browser's part for a simulated page.
impl Site<SimHost> {
    /// Deliver a visibility notification for every observed element.
    pub fn sync_visibility(&mut self) {
        for event in self.host().visibility_events() {
            self.handle(event);
        }
    }

    /// Scroll to `top`, then deliver the scroll event and visibility
    /// notifications.
    pub fn scroll_to(&mut self, top: f64) {
        self.host().set_scroll_top(top);
        self.handle(PageEvent::Scroll);
        self.sync_visibility();
    }

    /// Click a registered element.
    pub fn click(&mut self, target: NodeId) {
        let roles = [ClickRole::Anchor, ClickRole::MenuToggle];
        for role in roles {
            if self.host().is_listening_click(target, role) {
                self.handle(PageEvent::Click { role, target });
            }
        }
    }

    /// Advance the clock by `ms` in steps of `frame_ms`, delivering due
    /// timers and requested animation frames at each step.
    pub fn advance(&mut self, ms: f64, frame_ms: f64) {
        let step = frame_ms.max(1.0);
        let end = self.host().now() + ms.max(0.0);
        loop {
            let now = (self.host().now() + step).min(end);
            self.host().set_now(now);
            for ticket in self.host().take_due_timers(now) {
                self.handle(PageEvent::Timer(ticket));
            }
            if self.host().take_frame_request() {
                self.handle(PageEvent::Frame(now));
            }
            if now >= end {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_all_is_in_document_order() {
        let host = SimHost::new();
        let outer = host.append(host.body(), SimElement::new("section").class("card"));
        let inner = host.append(outer, SimElement::new("div").class("card"));
        let after = host.append(host.body(), SimElement::new("div").class("card"));

        assert_eq!(host.query_all(".card").unwrap(), vec![outer, inner, after]);
        assert_eq!(host.query_in(&outer, ".card").unwrap(), Some(inner));
        assert_eq!(host.query_in(&inner, ".card").unwrap(), None);
    }

    #[test]
    fn detached_elements_are_not_found() {
        let host = SimHost::new();
        let el = host.create_element("div").unwrap();
        host.set_attribute(&el, "class", "stray").unwrap();
        assert!(host.query_all(".stray").unwrap().is_empty());
        host.append_to_body(&el).unwrap();
        assert_eq!(host.query_all(".stray").unwrap(), vec![el]);
    }

    #[test]
    fn insert_before_reference() {
        let host = SimHost::new();
        let header = host.append(host.body(), SimElement::new("div"));
        let logo = host.append(header, SimElement::new("span"));
        let menu = host.append(header, SimElement::new("ul"));
        let toggle = host.create_element("button").unwrap();

        host.insert_before(&header, &toggle, Some(&menu)).unwrap();
        assert_eq!(host.children(header), vec![logo, toggle, menu]);
    }

    #[test]
    fn insert_before_foreign_reference_appends() {
        let host = SimHost::new();
        let header = host.append(host.body(), SimElement::new("div"));
        let elsewhere = host.append(host.body(), SimElement::new("ul"));
        let toggle = host.create_element("button").unwrap();

        host.insert_before(&header, &toggle, Some(&elsewhere)).unwrap();
        assert_eq!(host.children(header), vec![toggle]);
    }

    #[test]
    fn inserting_into_own_subtree_fails() {
        let host = SimHost::new();
        let outer = host.append(host.body(), SimElement::new("div"));
        let inner = host.append(outer, SimElement::new("div"));
        assert!(host.insert_before(&inner, &outer, None).is_err());
    }

    #[test]
    fn style_attribute_and_properties_share_storage() {
        let host = SimHost::new();
        let el = host.append(host.body(), SimElement::new("div"));
        host.set_attribute(&el, "style", "position: fixed; width: 0%;").unwrap();
        host.set_style(&el, "width", "40%").unwrap();

        assert_eq!(host.style(el, "position").as_deref(), Some("fixed"));
        assert_eq!(host.style(el, "width").as_deref(), Some("40%"));
        assert_eq!(
            host.attribute(&el, "style").as_deref(),
            Some("position: fixed; width: 40%;")
        );
    }

    #[test]
    fn classes_and_attributes() {
        let host = SimHost::new();
        let el = host.append(
            host.body(),
            SimElement::new("iframe").attr("data-src", "https://example.com/embed"),
        );
        assert!(host.toggle_class(&el, "open").unwrap());
        assert!(host.has_class(el, "open"));
        assert!(!host.toggle_class(&el, "open").unwrap());

        host.remove_attribute(&el, "data-src").unwrap();
        assert_eq!(host.attribute(&el, "data-src"), None);
    }

    #[test]
    fn text_includes_descendants_and_set_text_replaces_them() {
        let host = SimHost::new();
        let p = host.append(host.body(), SimElement::new("p").text("Hello, "));
        let _ = host.append(p, SimElement::new("b").text("world"));
        assert_eq!(host.text(&p), "Hello, world");

        host.set_text(&p, "bye");
        assert_eq!(host.text(&p), "bye");
        assert!(host.children(p).is_empty());
    }

    #[test]
    fn element_by_id() {
        let host = SimHost::new();
        let el = host.append(host.body(), SimElement::new("section").id("impact"));
        assert_eq!(host.element_by_id("impact"), Some(el));
        assert_eq!(host.element_by_id("missing"), None);
    }

    #[test]
    fn timers_come_due_in_order() {
        let host = SimHost::new();
        host.set_timer(20.0, TimerTicket(2)).unwrap();
        host.set_timer(10.0, TimerTicket(1)).unwrap();

        assert!(host.take_due_timers(5.0).is_empty());
        assert_eq!(
            host.take_due_timers(25.0),
            vec![TimerTicket(1), TimerTicket(2)]
        );
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn scroll_into_view_clamps_to_document() {
        let host = SimHost::new();
        host.set_document_height(2000.0);
        let el = host.append(
            host.body(),
            SimElement::new("section").rect(0.0, 1900.0, 100.0, 100.0),
        );
        host.scroll_into_view(&el);
        assert_eq!(host.scroll_metrics().scroll_top, 1200.0);
        assert_eq!(host.scrolled_into_view(), vec![el]);
    }
}
