//! Browser host over `web-sys`.
//!
//! [`WebHost`] implements [`Host`] for a live document. Intersection
//! observers, click/hover/scroll listeners, animation frames and timers all
//! forward into one event queue, which feeds the running [`Site`]. Listener
//! closures live as long as the page, so they are leaked with
//! `Closure::forget`.

mod dispatch;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

pub use self::dispatch::SharedSite;
use self::dispatch::EventQueue;
use crate::error::SproutError;
use crate::host::{ClickRole, Host, PageEvent, ScrollMetrics};
use crate::options::Options;
use crate::site::Site;
use crate::util::debounce::TimerTicket;
use crate::visibility::{Observation, WatchKind, WatchSpec};

thread_local! {
    static RUNNING: RefCell<Option<SharedSite>> = const { RefCell::new(None) };
}

/// The current window and document.
pub struct WebHost {
    window: Window,
    document: Document,
    events: Rc<EventQueue>,
    observers: RefCell<Vec<(WatchKind, IntersectionObserver)>>,
    on_frame: Closure<dyn FnMut(f64)>,
}

impl fmt::Debug for WebHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebHost")
            .field("observers", &self.observers.borrow().len())
            .finish_non_exhaustive()
    }
}

impl WebHost {
    /// Host for the global window.
    pub fn new() -> Result<Self, SproutError> {
        let window = web_sys::window()
            .ok_or_else(|| SproutError::Dom("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| SproutError::Dom("window has no document".into()))?;
        let events = Rc::new(EventQueue::default());
        let frame_events = Rc::clone(&events);
        let on_frame = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            frame_events.push(PageEvent::Frame(timestamp));
        });
        Ok(Self {
            window,
            document,
            events,
            observers: RefCell::new(Vec::new()),
            on_frame,
        })
    }

    fn listen(
        &self,
        target: &web_sys::EventTarget,
        event_type: &str,
        make_event: impl Fn(&Event) -> Option<PageEvent<Element>> + 'static,
        passive: bool,
    ) -> Result<(), SproutError> {
        let events = Rc::clone(&self.events);
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(page_event) = make_event(&event) {
                events.push(page_event);
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        callback.forget();
        Ok(())
    }

    fn observer(&self, spec: &WatchSpec) -> Result<IntersectionObserver, SproutError> {
        if let Some((_, observer)) = self
            .observers
            .borrow()
            .iter()
            .find(|(kind, _)| *kind == spec.kind)
        {
            return Ok(observer.clone());
        }

        let kind = spec.kind;
        let events = Rc::clone(&self.events);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    events.push(PageEvent::Visibility {
                        kind,
                        target: entry.target(),
                        observation: Observation {
                            ratio: entry.intersection_ratio(),
                            intersecting: entry.is_intersecting(),
                        },
                    });
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(spec.threshold));
        init.set_root_margin(&spec.root_margin.to_string());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();
        log::debug!("created {kind:?} observer ({})", spec.root_margin);
        self.observers.borrow_mut().push((kind, observer.clone()));
        Ok(observer)
    }
}

impl Host for WebHost {
    type Node = Element;

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, SproutError> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|_| SproutError::InvalidSelector(selector.to_owned()))?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn query_in(&self, scope: &Element, selector: &str) -> Result<Option<Element>, SproutError> {
        scope
            .query_selector(selector)
            .map_err(|_| SproutError::InvalidSelector(selector.to_owned()))
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), SproutError> {
        Ok(node.set_attribute(name, value)?)
    }

    fn remove_attribute(&self, node: &Element, name: &str) -> Result<(), SproutError> {
        Ok(node.remove_attribute(name)?)
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn add_class(&self, node: &Element, class: &str) -> Result<(), SproutError> {
        Ok(node.class_list().add_1(class)?)
    }

    fn remove_class(&self, node: &Element, class: &str) -> Result<(), SproutError> {
        Ok(node.class_list().remove_1(class)?)
    }

    fn toggle_class(&self, node: &Element, class: &str) -> Result<bool, SproutError> {
        Ok(node.class_list().toggle(class)?)
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<(), SproutError> {
        let element = node
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| SproutError::Dom(format!("<{}> has no inline style", node.tag_name())))?;
        Ok(element.style().set_property(property, value)?)
    }

    fn create_element(&self, tag: &str) -> Result<Element, SproutError> {
        Ok(self.document.create_element(tag)?)
    }

    fn append_to_body(&self, node: &Element) -> Result<(), SproutError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| SproutError::Dom("document has no body".into()))?;
        let _ = body.append_child(node)?;
        Ok(())
    }

    fn append_to_head(&self, node: &Element) -> Result<(), SproutError> {
        let head = self
            .document
            .head()
            .ok_or_else(|| SproutError::Dom("document has no head".into()))?;
        let _ = head.append_child(node)?;
        Ok(())
    }

    fn insert_before(
        &self,
        parent: &Element,
        node: &Element,
        reference: Option<&Element>,
    ) -> Result<(), SproutError> {
        let reference = reference.filter(|r| r.parent_element().as_ref() == Some(parent));
        let _ = match reference {
            Some(reference) => parent.insert_before(node, Some(reference))?,
            None => parent.append_child(node)?,
        };
        Ok(())
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn location_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.window.scroll_y().unwrap_or(0.0),
            document_height: self
                .document
                .document_element()
                .map_or(0.0, |root| f64::from(root.scroll_height())),
            viewport_height: self
                .window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0),
        }
    }

    fn now(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }

    fn observe(&self, spec: &WatchSpec, node: &Element) -> Result<(), SproutError> {
        self.observer(spec)?.observe(node);
        Ok(())
    }

    fn unobserve(&self, kind: WatchKind, node: &Element) -> Result<(), SproutError> {
        if let Some((_, observer)) = self.observers.borrow().iter().find(|(k, _)| *k == kind) {
            observer.unobserve(node);
        }
        Ok(())
    }

    fn listen_click(&self, node: &Element, role: ClickRole) -> Result<(), SproutError> {
        let target = node.clone();
        self.listen(
            node,
            "click",
            move |event| {
                if role == ClickRole::Anchor {
                    event.prevent_default();
                }
                Some(PageEvent::Click {
                    role,
                    target: target.clone(),
                })
            },
            false,
        )
    }

    fn listen_hover(&self, node: &Element) -> Result<(), SproutError> {
        let entered = node.clone();
        self.listen(
            node,
            "mouseenter",
            move |_| Some(PageEvent::PointerEnter(entered.clone())),
            true,
        )?;
        let left = node.clone();
        self.listen(
            node,
            "mouseleave",
            move |_| Some(PageEvent::PointerLeave(left.clone())),
            true,
        )
    }

    fn listen_viewport(&self) -> Result<(), SproutError> {
        self.listen(&self.window, "scroll", |_| Some(PageEvent::Scroll), true)?;
        self.listen(&self.window, "resize", |_| Some(PageEvent::Resize), true)
    }

    fn request_frame(&self) -> Result<(), SproutError> {
        let _ = self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())?;
        Ok(())
    }

    fn set_timer(&self, delay_ms: f64, ticket: TimerTicket) -> Result<(), SproutError> {
        let events = Rc::clone(&self.events);
        let callback = Closure::once_into_js(move || {
            events.push(PageEvent::Timer(ticket));
        });
        let _ = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms.max(0.0).round() as i32,
            )?;
        Ok(())
    }
}

/// Route `log` records to the browser console and report panics there.
/// Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Text of the element with the given id, typically a
/// `<script type="application/toml">` block carrying page options.
pub fn embedded_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
}

/// Install every enhancement on the current page and keep it running.
///
/// Calling this again replaces the previous site; its listeners stay
/// registered but deliver nowhere.
pub fn start(options: &Options) -> Result<SharedSite, SproutError> {
    let host = WebHost::new()?;
    let events = Rc::clone(&host.events);
    let site = Rc::new(RefCell::new(Site::initialize(host, options)?));
    events.attach(&site);
    RUNNING.with(|running| *running.borrow_mut() = Some(Rc::clone(&site)));
    Ok(site)
}
