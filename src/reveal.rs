//! Fade-in on scroll and button hover feedback.

use crate::error::SproutError;
use crate::host::Host;
use crate::options::{HoverOptions, RevealOptions};
use crate::visibility::{Observation, VisibilityTrigger, WatchKind, WatchSpec};

/// Adds the reveal class to cards and sections the first time they scroll
/// into view.
#[derive(Debug)]
pub struct Reveal<N> {
    trigger: VisibilityTrigger<N>,
    class: String,
}

impl<N: Clone + PartialEq> Reveal<N> {
    /// Watch every matching element.
    pub fn install<H>(host: &H, opts: &RevealOptions) -> Result<Self, SproutError>
    where
        H: Host<Node = N>,
    {
        let spec = WatchSpec::new(WatchKind::Reveal, opts.threshold, &opts.root_margin)?;
        let mut reveal = Self {
            trigger: VisibilityTrigger::new(spec),
            class: opts.class.clone(),
        };
        let targets = host.query_all(&opts.selector)?;
        for target in &targets {
            reveal.trigger.arm(host, target.clone())?;
        }
        log::debug!("reveal: watching {} elements", targets.len());
        Ok(reveal)
    }

    /// Visibility notification for a watched element.
    pub fn on_visible<H>(&mut self, host: &H, target: &N, observation: Observation)
    where
        H: Host<Node = N>,
    {
        if self.trigger.notify(host, target, observation) {
            if let Err(e) = host.add_class(target, &self.class) {
                log::warn!("failed to reveal element: {e}");
            }
        }
    }

    /// Elements not yet revealed.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.trigger.pending()
    }
}

/// Scales buttons up slightly while the pointer is over them.
#[derive(Debug, Clone)]
pub struct HoverFeedback {
    hovered: String,
}

impl HoverFeedback {
    /// Resting transform.
    pub const REST: &'static str = "scale(1)";

    /// Register hover handlers on every matching button.
    pub fn install<H: Host>(host: &H, opts: &HoverOptions) -> Result<Self, SproutError> {
        let buttons = host.query_all(&opts.selector)?;
        for button in &buttons {
            host.listen_hover(button)?;
        }
        log::debug!("hover: {} buttons", buttons.len());
        Ok(Self {
            hovered: format!("scale({})", opts.scale),
        })
    }

    /// Pointer entered a button.
    pub fn on_enter<H: Host>(&self, host: &H, button: &H::Node) {
        Self::apply(host, button, &self.hovered);
    }

    /// Pointer left a button.
    pub fn on_leave<H: Host>(&self, host: &H, button: &H::Node) {
        Self::apply(host, button, Self::REST);
    }

    fn apply<H: Host>(host: &H, button: &H::Node, transform: &str) {
        if let Err(e) = host.set_style(button, "transform", transform) {
            log::warn!("failed to set hover transform: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimElement, SimHost};

    #[test]
    fn reveals_once_past_threshold() {
        let host = SimHost::new();
        let card = host.append(host.body(), SimElement::new("div").class("card"));
        let section = host.append(host.body(), SimElement::new("section").class("section"));
        let mut reveal = Reveal::install(&host, &RevealOptions::default()).unwrap();
        assert_eq!(reveal.waiting(), 2);

        reveal.on_visible(
            &host,
            &card,
            Observation {
                ratio: 0.05,
                intersecting: true,
            },
        );
        assert!(!host.has_class(card, "fade-in-up"));

        reveal.on_visible(
            &host,
            &card,
            Observation {
                ratio: 0.1,
                intersecting: true,
            },
        );
        assert!(host.has_class(card, "fade-in-up"));
        assert!(!host.has_class(section, "fade-in-up"));
        assert_eq!(reveal.waiting(), 1);
        assert!(!host.is_observed(WatchKind::Reveal, card));
    }

    #[test]
    fn bad_margin_fails_install() {
        let host = SimHost::new();
        let opts = RevealOptions {
            root_margin: "1em".into(),
            ..RevealOptions::default()
        };
        assert!(matches!(
            Reveal::<crate::sim::NodeId>::install(&host, &opts),
            Err(SproutError::InvalidMargin(_))
        ));
    }

    #[test]
    fn hover_scales_and_restores() {
        let host = SimHost::new();
        let primary = host.append(host.body(), SimElement::new("a").class("btn-primary"));
        let secondary = host.append(host.body(), SimElement::new("a").class("btn-secondary"));
        let plain = host.append(host.body(), SimElement::new("a").class("btn"));
        let hover = HoverFeedback::install(&host, &HoverOptions::default()).unwrap();

        assert!(host.is_listening_hover(primary));
        assert!(host.is_listening_hover(secondary));
        assert!(!host.is_listening_hover(plain));

        hover.on_enter(&host, &primary);
        assert_eq!(host.style(primary, "transform").as_deref(), Some("scale(1.02)"));
        hover.on_leave(&host, &primary);
        assert_eq!(host.style(primary, "transform").as_deref(), Some("scale(1)"));
    }
}
