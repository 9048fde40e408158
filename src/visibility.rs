//! One-shot visibility triggers.
//!
//! A [`VisibilityTrigger`] groups the watches that share one threshold and
//! root margin (one per feature: reveal, counters, video). Each watch moves
//! through [`WatchState::Unarmed`] → [`WatchState::Watching`] →
//! [`WatchState::Fired`] and never leaves `Fired`.

use crate::error::SproutError;
use crate::geometry::RootMargin;
use crate::host::Host;

/// Which feature a watch belongs to. Hosts keep one native observer per
/// kind and tag every notification with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchKind {
    /// Fade-in of cards and sections.
    Reveal,
    /// Stat card counters.
    Counter,
    /// Deferred video embeds.
    Video,
}

/// A single visibility notification for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Visible fraction of the element's area, in `[0, 1]`.
    pub ratio: f64,
    /// Whether the element touches the (margin-adjusted) viewport at all.
    pub intersecting: bool,
}

impl Observation {
    /// Entirely outside the viewport.
    pub const HIDDEN: Self = Self {
        ratio: 0.0,
        intersecting: false,
    };
}

/// Threshold and margin shared by every watch of one kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchSpec {
    /// Feature the watch serves.
    pub kind: WatchKind,
    /// Minimum visible fraction that fires the watch.
    pub threshold: f64,
    /// Margin applied to the viewport before measuring.
    pub root_margin: RootMargin,
}

impl WatchSpec {
    /// Build a spec from option values, parsing the CSS margin shorthand.
    pub fn new(
        kind: WatchKind,
        threshold: f64,
        root_margin: &str,
    ) -> Result<Self, SproutError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SproutError::InvalidOption(format!(
                "{kind:?} threshold {threshold} outside [0, 1]"
            )));
        }
        Ok(Self {
            kind,
            threshold,
            root_margin: root_margin.parse()?,
        })
    }

    /// Whether an observation satisfies this spec.
    #[must_use]
    pub fn is_met(&self, observation: Observation) -> bool {
        observation.intersecting && observation.ratio >= self.threshold
    }
}

/// Lifecycle of a single watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Created but not yet registered with the host.
    Unarmed,
    /// Registered; waiting for a qualifying observation.
    Watching,
    /// Fired once. Terminal.
    Fired,
}

#[derive(Debug)]
struct Watch<N> {
    target: N,
    state: WatchState,
}

/// A set of one-shot watches sharing a [`WatchSpec`].
#[derive(Debug)]
pub struct VisibilityTrigger<N> {
    spec: WatchSpec,
    watches: Vec<Watch<N>>,
}

impl<N: Clone + PartialEq> VisibilityTrigger<N> {
    /// Empty trigger for the given spec.
    #[must_use]
    pub fn new(spec: WatchSpec) -> Self {
        Self {
            spec,
            watches: Vec::new(),
        }
    }

    /// The shared threshold/margin.
    #[must_use]
    pub fn spec(&self) -> &WatchSpec {
        &self.spec
    }

    /// Start watching `target`. Arming an element that already has a watch
    /// (in any state) does nothing.
    pub fn arm<H>(&mut self, host: &H, target: N) -> Result<(), SproutError>
    where
        H: Host<Node = N>,
    {
        if self.watches.iter().any(|w| w.target == target) {
            return Ok(());
        }
        self.watches.push(Watch {
            target,
            state: WatchState::Unarmed,
        });
        let idx = self.watches.len() - 1;
        host.observe(&self.spec, &self.watches[idx].target)?;
        self.watches[idx].state = WatchState::Watching;
        Ok(())
    }

    /// Feed a notification. Returns `true` exactly once per target: on the
    /// first qualifying observation while watching. The host is then told
    /// to stop observing the element.
    pub fn notify<H>(
        &mut self,
        host: &H,
        target: &N,
        observation: Observation,
    ) -> bool
    where
        H: Host<Node = N>,
    {
        let Some(watch) = self.watches.iter_mut().find(|w| w.target == *target)
        else {
            return false;
        };
        if watch.state != WatchState::Watching || !self.spec.is_met(observation)
        {
            return false;
        }

        watch.state = WatchState::Fired;
        if let Err(e) = host.unobserve(self.spec.kind, target) {
            log::warn!("failed to release {:?} watch: {e}", self.spec.kind);
        }
        true
    }

    /// State of the watch on `target`, if one exists.
    #[must_use]
    pub fn state(&self, target: &N) -> Option<WatchState> {
        self.watches
            .iter()
            .find(|w| w.target == *target)
            .map(|w| w.state)
    }

    /// Number of watches still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.watches
            .iter()
            .filter(|w| w.state == WatchState::Watching)
            .count()
    }
}
