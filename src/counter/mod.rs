//! Animated stat counters.
//!
//! When half of a stat card becomes visible, its number element counts up
//! from 0 to the value written in the markup, then settles on the exact
//! source text. Each number animates at most once; the
//! [`ANIMATED_ATTRIBUTE`] marker on the element records that.

pub mod animation;
pub mod value;

pub use animation::{CounterAnimation, CounterFrame, DEFAULT_DURATION_MS};
pub use value::{CounterValue, SuffixKind};

use crate::error::SproutError;
use crate::host::Host;
use crate::options::CounterOptions;
use crate::util::easing::EasingFunction;
use crate::visibility::{Observation, VisibilityTrigger, WatchKind, WatchSpec};

/// Attribute set on a number element once its animation has started.
pub const ANIMATED_ATTRIBUTE: &str = "data-animated";

/// The counter feature: one visibility trigger over stat cards plus the
/// animations currently running.
#[derive(Debug)]
pub struct StatCounters<N> {
    trigger: VisibilityTrigger<N>,
    number_selector: String,
    duration_ms: f64,
    easing: EasingFunction,
    running: Vec<(N, CounterAnimation)>,
    frame_pending: bool,
}

impl<N: Clone + PartialEq> StatCounters<N> {
    /// Watch every stat card on the page.
    pub fn install<H>(host: &H, opts: &CounterOptions) -> Result<Self, SproutError>
    where
        H: Host<Node = N>,
    {
        let spec = WatchSpec::new(WatchKind::Counter, opts.threshold, "")?;
        let mut counters = Self {
            trigger: VisibilityTrigger::new(spec),
            number_selector: opts.number_selector.clone(),
            duration_ms: opts.duration_ms,
            easing: opts.easing,
            running: Vec::new(),
            frame_pending: false,
        };
        let cards = host.query_all(&opts.card_selector)?;
        for card in &cards {
            counters.trigger.arm(host, card.clone())?;
        }
        log::debug!("stat counters: watching {} cards", cards.len());
        Ok(counters)
    }

    /// Visibility notification for a stat card.
    pub fn on_visible<H>(&mut self, host: &H, card: &N, observation: Observation)
    where
        H: Host<Node = N>,
    {
        if !self.trigger.notify(host, card, observation) {
            return;
        }
        match host.query_in(card, &self.number_selector) {
            Ok(Some(number)) => {
                let _ = self.animate(host, number);
            }
            Ok(None) => {}
            Err(e) => log::warn!("stat counter lookup failed: {e}"),
        }
    }

    /// Start animating a number element. Returns `false` without touching
    /// the element if it was animated before.
    pub fn animate<H>(&mut self, host: &H, number: N) -> bool
    where
        H: Host<Node = N>,
    {
        if host.attribute(&number, ANIMATED_ATTRIBUTE).is_some() {
            return false;
        }
        if let Err(e) = host.set_attribute(&number, ANIMATED_ATTRIBUTE, "true") {
            log::warn!("failed to mark counter as animated: {e}");
            return false;
        }
        let source = host.text(&number);
        let animation =
            CounterAnimation::new(&source, host.now(), self.duration_ms, self.easing);
        log::debug!("counting up to {source:?}");
        self.running.push((number, animation));
        self.request_frame(host);
        true
    }

    /// Advance every running animation to `now` and write its text.
    pub fn on_frame<H>(&mut self, host: &H, now: f64)
    where
        H: Host<Node = N>,
    {
        self.frame_pending = false;
        self.running.retain(|(node, animation)| {
            let frame = animation.frame(now);
            host.set_text(node, &frame.text);
            !frame.finished
        });
        if !self.running.is_empty() {
            self.request_frame(host);
        }
    }

    /// Number of animations in progress.
    #[must_use]
    pub fn running(&self) -> usize {
        self.running.len()
    }

    /// Stat cards not yet seen.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.trigger.pending()
    }

    fn request_frame<H>(&mut self, host: &H)
    where
        H: Host<Node = N>,
    {
        if self.frame_pending {
            return;
        }
        match host.request_frame() {
            Ok(()) => self.frame_pending = true,
            Err(e) => log::warn!("animation frame request failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{NodeId, SimElement, SimHost};

    fn visible() -> Observation {
        Observation {
            ratio: 1.0,
            intersecting: true,
        }
    }

    fn page() -> (SimHost, NodeId, NodeId) {
        let host = SimHost::new();
        let card = host.append(host.body(), SimElement::new("div").class("stat-card"));
        let number = host.append(card, SimElement::new("span").class("stat-number").text("2.5M"));
        (host, card, number)
    }

    fn run_to_end(counters: &mut StatCounters<NodeId>, host: &SimHost) {
        let mut now = host.now();
        while host.take_frame_request() {
            now += 16.0;
            counters.on_frame(host, now);
        }
    }

    #[test]
    fn install_arms_every_card() {
        let (host, card, _) = page();
        let counters = StatCounters::install(&host, &CounterOptions::default()).unwrap();
        assert_eq!(counters.waiting(), 1);
        assert!(host.is_observed(WatchKind::Counter, card));
    }

    #[test]
    fn visible_card_counts_up_and_ends_on_source() {
        let (host, card, number) = page();
        let mut counters = StatCounters::install(&host, &CounterOptions::default()).unwrap();

        counters.on_visible(&host, &card, visible());
        assert_eq!(counters.running(), 1);
        assert_eq!(host.attribute(&number, ANIMATED_ATTRIBUTE).as_deref(), Some("true"));

        run_to_end(&mut counters, &host);
        assert_eq!(counters.running(), 0);
        assert_eq!(host.text(&number), "2.5M");
    }

    #[test]
    fn animating_twice_is_a_no_op() {
        let (host, _, number) = page();
        let mut counters = StatCounters::install(&host, &CounterOptions::default()).unwrap();
        assert!(counters.animate(&host, number));
        assert!(!counters.animate(&host, number));
        assert_eq!(counters.running(), 1);
    }

    #[test]
    fn pre_marked_numbers_are_left_alone() {
        let host = SimHost::new();
        let card = host.append(host.body(), SimElement::new("div").class("stat-card"));
        let number = host.append(
            card,
            SimElement::new("span")
                .class("stat-number")
                .attr(ANIMATED_ATTRIBUTE, "true")
                .text("85%"),
        );
        let mut counters = StatCounters::install(&host, &CounterOptions::default()).unwrap();
        counters.on_visible(&host, &card, visible());
        assert_eq!(counters.running(), 0);
        assert!(!host.take_frame_request());
        assert_eq!(host.text(&number), "85%");
    }

    #[test]
    fn below_threshold_does_not_start() {
        let (host, card, _) = page();
        let mut counters = StatCounters::install(&host, &CounterOptions::default()).unwrap();
        counters.on_visible(
            &host,
            &card,
            Observation {
                ratio: 0.3,
                intersecting: true,
            },
        );
        assert_eq!(counters.running(), 0);
        assert_eq!(counters.waiting(), 1);
    }

    #[test]
    fn card_without_number_is_skipped() {
        let host = SimHost::new();
        let card = host.append(host.body(), SimElement::new("div").class("stat-card"));
        let mut counters = StatCounters::install(&host, &CounterOptions::default()).unwrap();
        counters.on_visible(&host, &card, visible());
        assert_eq!(counters.running(), 0);
        assert!(!host.is_observed(WatchKind::Counter, card));
    }

    #[test]
    fn concurrent_counters_share_one_frame_request() {
        let host = SimHost::new();
        let a = host.append(host.body(), SimElement::new("span").text("85%"));
        let b = host.append(host.body(), SimElement::new("span").text("150K"));
        let mut counters = StatCounters::install(&host, &CounterOptions::default()).unwrap();

        assert!(counters.animate(&host, a));
        assert!(counters.animate(&host, b));
        assert!(host.take_frame_request());
        assert!(!host.take_frame_request());

        counters.on_frame(&host, 1000.0);
        assert_ne!(host.text(&a), "85%");
        run_to_end(&mut counters, &host);
        assert_eq!(host.text(&a), "85%");
        assert_eq!(host.text(&b), "150K");
    }
}
