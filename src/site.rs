//! Site - top-level wiring of every enhancement onto one page.
//!
//! [`Site::initialize`] installs each feature against a [`Host`]; the host
//! then feeds [`PageEvent`]s to [`Site::handle`], which routes them to the
//! feature that registered for them. A feature whose markers are absent is
//! simply inert. A feature whose setup fails is logged and left out; the
//! rest of the page still works.

use crate::counter::StatCounters;
use crate::error::SproutError;
use crate::host::{ClickRole, Host, PageEvent};
use crate::navigation::{self, MobileMenu, NavigationSync};
use crate::options::Options;
use crate::progress::ScrollProgress;
use crate::reveal::{HoverFeedback, Reveal};
use crate::video::LazyVideo;
use crate::visibility::WatchKind;

/// Line logged once setup completes.
pub const WELCOME: &str = "\u{1f331} Environmental Awareness website loaded successfully!";

/// Every enhancement installed on one page.
#[derive(Debug)]
pub struct Site<H: Host> {
    host: H,
    navigation: Option<NavigationSync>,
    menu: Option<MobileMenu<H::Node>>,
    reveal: Option<Reveal<H::Node>>,
    hover: Option<HoverFeedback>,
    counters: Option<StatCounters<H::Node>>,
    video: Option<LazyVideo<H::Node>>,
    progress: Option<ScrollProgress<H::Node>>,
}

/// Log a failed feature setup and drop the feature.
fn installed<T>(feature: &str, result: Result<T, SproutError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{feature} disabled: {e}");
            None
        }
    }
}

impl<H: Host> Site<H> {
    /// Validate `options` and install every enabled feature on `host`.
    ///
    /// Only invalid options are an error. Per-feature host failures disable
    /// that feature and are logged.
    pub fn initialize(host: H, options: &Options) -> Result<Self, SproutError> {
        options.validate()?;

        let navigation = installed(
            "navigation",
            NavigationSync::install(&host, &options.navigation),
        );
        let menu = if options.mobile_menu.enabled {
            installed(
                "mobile menu",
                MobileMenu::install(&host, &options.mobile_menu),
            )
            .flatten()
        } else {
            None
        };
        let reveal = installed("reveal", Reveal::install(&host, &options.reveal));
        let hover = installed("hover", HoverFeedback::install(&host, &options.hover));
        let counters = installed(
            "stat counters",
            StatCounters::install(&host, &options.counters),
        );
        let video = installed("lazy video", LazyVideo::install(&host, &options.video));
        let progress = if options.progress.enabled {
            installed(
                "scroll progress",
                ScrollProgress::install(&host, &options.progress),
            )
        } else {
            None
        };

        log::info!("{WELCOME}");
        Ok(Self {
            host,
            navigation,
            menu,
            reveal,
            hover,
            counters,
            video,
            progress,
        })
    }

    /// The browsing context.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Navigation wiring summary, if installed.
    pub fn navigation(&self) -> Option<&NavigationSync> {
        self.navigation.as_ref()
    }

    /// Mobile menu, if the page has a nav header and menu.
    pub fn menu(&self) -> Option<&MobileMenu<H::Node>> {
        self.menu.as_ref()
    }

    /// Fade-in feature, if installed.
    pub fn reveal(&self) -> Option<&Reveal<H::Node>> {
        self.reveal.as_ref()
    }

    /// Stat counters, if installed.
    pub fn counters(&self) -> Option<&StatCounters<H::Node>> {
        self.counters.as_ref()
    }

    /// Lazy video loader, if installed.
    pub fn video(&self) -> Option<&LazyVideo<H::Node>> {
        self.video.as_ref()
    }

    /// Progress bar, if installed.
    pub fn progress(&self) -> Option<&ScrollProgress<H::Node>> {
        self.progress.as_ref()
    }

    /// Route one host event.
    pub fn handle(&mut self, event: PageEvent<H::Node>) {
        let host = &self.host;
        match event {
            PageEvent::Scroll | PageEvent::Resize => {
                if let Some(progress) = &mut self.progress {
                    progress.on_viewport_change(host);
                }
            }
            PageEvent::Timer(ticket) => {
                if let Some(progress) = &mut self.progress {
                    let _ = progress.on_timer(host, ticket);
                }
            }
            PageEvent::Frame(now) => {
                if let Some(counters) = &mut self.counters {
                    counters.on_frame(host, now);
                }
            }
            PageEvent::Visibility {
                kind,
                target,
                observation,
            } => match kind {
                WatchKind::Reveal => {
                    if let Some(reveal) = &mut self.reveal {
                        reveal.on_visible(host, &target, observation);
                    }
                }
                WatchKind::Counter => {
                    if let Some(counters) = &mut self.counters {
                        counters.on_visible(host, &target, observation);
                    }
                }
                WatchKind::Video => {
                    if let Some(video) = &mut self.video {
                        video.on_visible(host, &target, observation);
                    }
                }
            },
            PageEvent::Click {
                role: ClickRole::Anchor,
                target,
            } => {
                let _ = navigation::scroll_to_anchor(host, &target);
            }
            PageEvent::Click {
                role: ClickRole::MenuToggle,
                ..
            } => {
                if let Some(menu) = &self.menu {
                    let _ = menu.on_toggle(host);
                }
            }
            PageEvent::PointerEnter(target) => {
                if let Some(hover) = &self.hover {
                    hover.on_enter(host, &target);
                }
            }
            PageEvent::PointerLeave(target) => {
                if let Some(hover) = &self.hover {
                    hover.on_leave(host, &target);
                }
            }
        }
    }
}
