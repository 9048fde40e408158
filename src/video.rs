//! Lazy loading of embedded videos.
//!
//! Embeds ship with their real URL in a deferred attribute (`data-src`) and
//! no `src`, so nothing loads until the container nears the viewport.

use crate::error::SproutError;
use crate::host::Host;
use crate::options::VideoOptions;
use crate::visibility::{Observation, VisibilityTrigger, WatchKind, WatchSpec};

/// Moves the deferred source into `src` on first visibility of each video
/// container.
#[derive(Debug)]
pub struct LazyVideo<N> {
    trigger: VisibilityTrigger<N>,
    frame_selector: String,
    deferred_attribute: String,
}

impl<N: Clone + PartialEq> LazyVideo<N> {
    /// Watch every video container.
    pub fn install<H>(host: &H, opts: &VideoOptions) -> Result<Self, SproutError>
    where
        H: Host<Node = N>,
    {
        let spec = WatchSpec::new(WatchKind::Video, opts.threshold, &opts.root_margin)?;
        let mut video = Self {
            trigger: VisibilityTrigger::new(spec),
            frame_selector: opts.frame_selector.clone(),
            deferred_attribute: opts.deferred_attribute.clone(),
        };
        let containers = host.query_all(&opts.container_selector)?;
        for container in &containers {
            video.trigger.arm(host, container.clone())?;
        }
        log::debug!("lazy video: watching {} containers", containers.len());
        Ok(video)
    }

    /// Visibility notification for a container.
    pub fn on_visible<H>(&mut self, host: &H, container: &N, observation: Observation)
    where
        H: Host<Node = N>,
    {
        if !self.trigger.notify(host, container, observation) {
            return;
        }
        let loaded = host
            .query_in(container, &self.frame_selector)
            .and_then(|frame| match frame {
                Some(frame) => load_deferred(host, &frame, &self.deferred_attribute),
                None => Ok(false),
            });
        match loaded {
            Ok(true) => log::debug!("lazy video: embed loaded"),
            Ok(false) => {}
            Err(e) => log::warn!("lazy video: {e}"),
        }
    }

    /// Containers not yet seen.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.trigger.pending()
    }
}

/// Copy a non-empty deferred source into `src` and drop the deferred
/// attribute. Returns whether anything was loaded.
pub fn load_deferred<H: Host>(
    host: &H,
    frame: &H::Node,
    deferred_attribute: &str,
) -> Result<bool, SproutError> {
    match host.attribute(frame, deferred_attribute) {
        Some(src) if !src.is_empty() => {
            host.set_attribute(frame, "src", &src)?;
            host.remove_attribute(frame, deferred_attribute)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
