//! Navigation state: active-link highlighting, in-page anchor scrolling and
//! the mobile menu toggle.

use crate::error::SproutError;
use crate::host::{ClickRole, Host};
use crate::options::{MobileMenuOptions, NavigationOptions};

/// Page name for a URL path: its last segment, or `home` when that is empty.
#[must_use]
pub fn current_page<'a>(path: &'a str, home: &'a str) -> &'a str {
    match path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => home,
    }
}

/// Element id an in-page `href` points at. `None` for a bare `#` or an
/// `href` that is not a fragment.
#[must_use]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Partition the nav links: those whose `href` equals the current page get
/// the active class, every other link loses it. Returns how many are active.
pub fn mark_active<H: Host>(host: &H, opts: &NavigationOptions) -> Result<usize, SproutError> {
    let path = host.location_path();
    let page = current_page(&path, &opts.home_page);
    let mut active = 0;
    for link in host.query_all(&opts.link_selector)? {
        if host.attribute(&link, "href").as_deref() == Some(page) {
            host.add_class(&link, &opts.active_class)?;
            active += 1;
        } else {
            host.remove_class(&link, &opts.active_class)?;
        }
    }
    Ok(active)
}

/// Smooth-scroll to the element an anchor points at. A missing target is a
/// no-op; returns whether a scroll happened.
pub fn scroll_to_anchor<H: Host>(host: &H, anchor: &H::Node) -> bool {
    let Some(href) = host.attribute(anchor, "href") else {
        return false;
    };
    let Some(target) = anchor_target_id(&href).and_then(|id| host.element_by_id(id)) else {
        log::debug!("anchor {href:?} has no target");
        return false;
    };
    host.scroll_into_view(&target);
    true
}

/// Summary of the navigation wiring done at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationSync {
    /// Nav links marked active.
    pub active_links: usize,
    /// In-page anchors registered for smooth scrolling.
    pub anchors: usize,
}

impl NavigationSync {
    /// Highlight the current page and register every in-page anchor.
    pub fn install<H: Host>(host: &H, opts: &NavigationOptions) -> Result<Self, SproutError> {
        let active_links = mark_active(host, opts)?;
        let anchors = host.query_all(&opts.anchor_selector)?;
        for anchor in &anchors {
            host.listen_click(anchor, ClickRole::Anchor)?;
        }
        log::debug!(
            "navigation: {active_links} active links, {} anchors",
            anchors.len()
        );
        Ok(Self {
            active_links,
            anchors: anchors.len(),
        })
    }
}

const TOGGLE_STYLE: &str = "display: none; background: none; border: none; \
                            font-size: 1.5rem; color: var(--text-primary); cursor: pointer;";

/// Stylesheet shown only below the breakpoint: reveals the toggle and turns
/// the menu into a panel that slides in when the open class is set.
#[must_use]
pub fn mobile_stylesheet(opts: &MobileMenuOptions) -> String {
    let toggle = &opts.toggle_class;
    let menu = &opts.menu_selector;
    let open = &opts.open_class;
    format!(
        "@media (max-width: {bp}px) {{
    .{toggle} {{
        display: block !important;
    }}
    {menu} {{
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: rgba(255, 255, 255, 0.98);
        flex-direction: column;
        padding: 1rem;
        transform: translateY(-100%);
        opacity: 0;
        pointer-events: none;
        transition: all 0.3s ease;
    }}
    {menu}.{open} {{
        transform: translateY(0);
        opacity: 1;
        pointer-events: all;
    }}
}}
",
        bp = opts.breakpoint_px,
    )
}

/// Injected toggle button and the menu it opens.
#[derive(Debug)]
pub struct MobileMenu<N> {
    menu: N,
    toggle: N,
    open_class: String,
}

impl<N: Clone> MobileMenu<N> {
    /// Insert the toggle into the nav header before the menu and inject the
    /// mobile stylesheet. `Ok(None)` when the header or menu is missing.
    pub fn install<H>(host: &H, opts: &MobileMenuOptions) -> Result<Option<Self>, SproutError>
    where
        H: Host<Node = N>,
    {
        let (Some(menu), Some(header)) = (
            host.query(&opts.menu_selector)?,
            host.query(&opts.header_selector)?,
        ) else {
            log::debug!("mobile menu: no nav header or menu");
            return Ok(None);
        };

        let toggle = host.create_element("button")?;
        host.set_text(&toggle, &opts.label);
        host.set_attribute(&toggle, "class", &opts.toggle_class)?;
        host.set_attribute(&toggle, "style", TOGGLE_STYLE)?;
        host.insert_before(&header, &toggle, Some(&menu))?;
        host.listen_click(&toggle, ClickRole::MenuToggle)?;

        let style = host.create_element("style")?;
        host.set_text(&style, &mobile_stylesheet(opts));
        host.append_to_head(&style)?;

        Ok(Some(Self {
            menu,
            toggle,
            open_class: opts.open_class.clone(),
        }))
    }

    /// The injected button.
    #[must_use]
    pub fn toggle(&self) -> &N {
        &self.toggle
    }

    /// The menu being opened and closed.
    #[must_use]
    pub fn menu(&self) -> &N {
        &self.menu
    }

    /// Flip the open class on the menu; returns whether it is now open.
    pub fn on_toggle<H>(&self, host: &H) -> bool
    where
        H: Host<Node = N>,
    {
        match host.toggle_class(&self.menu, &self.open_class) {
            Ok(open) => open,
            Err(e) => {
                log::warn!("failed to toggle menu: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimElement, SimHost};

    #[test]
    fn current_page_from_path() {
        assert_eq!(current_page("/site/about.html", "index.html"), "about.html");
        assert_eq!(current_page("about.html", "index.html"), "about.html");
        assert_eq!(current_page("/site/", "index.html"), "index.html");
        assert_eq!(current_page("/", "index.html"), "index.html");
        assert_eq!(current_page("", "index.html"), "index.html");
    }

    #[test]
    fn anchor_ids() {
        assert_eq!(anchor_target_id("#impact"), Some("impact"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("about.html"), None);
    }

    #[test]
    fn home_page_is_active_at_root() {
        let host = SimHost::new();
        let home = host.append(
            host.body(),
            SimElement::new("a").class("nav-link").attr("href", "index.html"),
        );
        let about = host.append(
            host.body(),
            SimElement::new("a")
                .class("nav-link")
                .class("active")
                .attr("href", "about.html"),
        );
        assert_eq!(mark_active(&host, &NavigationOptions::default()).unwrap(), 1);
        assert!(host.has_class(home, "active"));
        assert!(!host.has_class(about, "active"));
    }

    #[test]
    fn anchor_scrolls_to_target() {
        let host = SimHost::new();
        host.set_document_height(3000.0);
        let anchor = host.append(host.body(), SimElement::new("a").attr("href", "#impact"));
        let target = host.append(
            host.body(),
            SimElement::new("section")
                .id("impact")
                .rect(0.0, 1200.0, 1280.0, 400.0),
        );
        assert!(scroll_to_anchor(&host, &anchor));
        assert_eq!(host.scrolled_into_view(), vec![target]);
        assert_eq!(host.scroll_metrics().scroll_top, 1200.0);
    }

    #[test]
    fn anchor_without_target_does_nothing() {
        let host = SimHost::new();
        let bare = host.append(host.body(), SimElement::new("a").attr("href", "#"));
        let dangling = host.append(host.body(), SimElement::new("a").attr("href", "#nowhere"));
        assert!(!scroll_to_anchor(&host, &bare));
        assert!(!scroll_to_anchor(&host, &dangling));
        assert!(host.scrolled_into_view().is_empty());
    }

    #[test]
    fn install_registers_anchors() {
        let host = SimHost::new();
        let anchor = host.append(host.body(), SimElement::new("a").attr("href", "#top"));
        let page_link = host.append(host.body(), SimElement::new("a").attr("href", "about.html"));
        let sync = NavigationSync::install(&host, &NavigationOptions::default()).unwrap();
        assert_eq!(sync.anchors, 1);
        assert!(host.is_listening_click(anchor, ClickRole::Anchor));
        assert!(!host.is_listening_click(page_link, ClickRole::Anchor));
    }

    #[test]
    fn mobile_menu_inserts_toggle_before_menu() {
        let host = SimHost::new();
        let header = host.append(host.body(), SimElement::new("div").class("nav-header"));
        let logo = host.append(header, SimElement::new("a").class("logo"));
        let menu = host.append(header, SimElement::new("ul").class("nav-links"));

        let mobile = MobileMenu::install(&host, &MobileMenuOptions::default())
            .unwrap()
            .unwrap();
        let toggle = *mobile.toggle();
        assert_eq!(*mobile.menu(), menu);
        assert_eq!(host.children(header), vec![logo, toggle, menu]);
        assert_eq!(host.tag(toggle).as_deref(), Some("button"));
        assert_eq!(host.text(&toggle), "\u{2630}");
        assert!(host.has_class(toggle, "nav-toggle"));
        assert_eq!(host.style(toggle, "display").as_deref(), Some("none"));
        assert!(host.is_listening_click(toggle, ClickRole::MenuToggle));

        let sheets = host.children(host.head());
        assert_eq!(sheets.len(), 1);
        assert!(host.text(&sheets[0]).contains("@media (max-width: 768px)"));

        assert!(mobile.on_toggle(&host));
        assert!(host.has_class(menu, "nav-open"));
        assert!(!mobile.on_toggle(&host));
        assert!(!host.has_class(menu, "nav-open"));
    }

    #[test]
    fn mobile_menu_needs_header_and_menu() {
        let host = SimHost::new();
        let _ = host.append(host.body(), SimElement::new("ul").class("nav-links"));
        let mobile = MobileMenu::install(&host, &MobileMenuOptions::default()).unwrap();
        assert!(mobile.is_none());
        assert!(host.children(host.head()).is_empty());
    }

    #[test]
    fn stylesheet_follows_options() {
        let opts = MobileMenuOptions {
            breakpoint_px: 600,
            open_class: "is-open".into(),
            ..MobileMenuOptions::default()
        };
        let css = mobile_stylesheet(&opts);
        assert!(css.contains("@media (max-width: 600px)"));
        assert!(css.contains(".nav-toggle {"));
        assert!(css.contains(".nav-links.is-open {"));
    }
}
