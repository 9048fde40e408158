//! Scroll progress bar.
//!
//! A thin fixed bar at the top of the viewport whose width tracks how far
//! the document has been scrolled. Recomputation is debounced; the bar is
//! also filled once at setup so it is right before the first scroll.

use crate::error::SproutError;
use crate::host::{Host, ScrollMetrics};
use crate::options::ProgressOptions;
use crate::util::debounce::{Debouncer, TimerTicket};

/// Scroll position as a percentage of the scrollable range, in `[0, 100]`.
///
/// A document that fits in the viewport has no scrollable range and reports
/// 0.
#[must_use]
pub fn scroll_percent(metrics: ScrollMetrics) -> f64 {
    let range = metrics.document_height - metrics.viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    let percent = metrics.scroll_top / range * 100.0;
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Inline style of the injected bar.
#[must_use]
pub fn bar_style(opts: &ProgressOptions) -> String {
    format!(
        "position: fixed; top: 0; left: 0; width: 0%; height: {}px; \
         background: {}; z-index: 9999; transition: width 0.1s ease;",
        opts.height_px, opts.background
    )
}

/// The injected bar and its debouncer.
#[derive(Debug)]
pub struct ScrollProgress<N> {
    bar: N,
    debouncer: Debouncer,
}

impl<N: Clone> ScrollProgress<N> {
    /// Inject the bar, listen for scroll/resize and fill it once.
    pub fn install<H>(host: &H, opts: &ProgressOptions) -> Result<Self, SproutError>
    where
        H: Host<Node = N>,
    {
        let bar = host.create_element("div")?;
        host.set_attribute(&bar, "style", &bar_style(opts))?;
        host.append_to_body(&bar)?;
        host.listen_viewport()?;

        let progress = Self {
            bar,
            debouncer: Debouncer::new(opts.debounce_ms),
        };
        let _ = progress.update(host);
        Ok(progress)
    }

    /// The injected element.
    #[must_use]
    pub fn bar(&self) -> &N {
        &self.bar
    }

    /// Scroll or resize: restart the quiet period.
    pub fn on_viewport_change<H>(&mut self, host: &H)
    where
        H: Host<Node = N>,
    {
        let ticket = self.debouncer.poke();
        if let Err(e) = host.set_timer(self.debouncer.wait_ms(), ticket) {
            log::warn!("failed to schedule progress update: {e}");
        }
    }

    /// A timer elapsed; recompute if it ended the quiet period. Returns the
    /// new percentage when it did.
    pub fn on_timer<H>(&mut self, host: &H, ticket: TimerTicket) -> Option<f64>
    where
        H: Host<Node = N>,
    {
        self.debouncer.fire(ticket).then(|| self.update(host))
    }

    /// Recompute from the host's current metrics and write the width.
    pub fn update<H>(&self, host: &H) -> f64
    where
        H: Host<Node = N>,
    {
        let percent = scroll_percent(host.scroll_metrics());
        if let Err(e) = host.set_style(&self.bar, "width", &format!("{percent}%")) {
            log::warn!("failed to update progress bar: {e}");
        }
        percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimHost;

    fn metrics(scroll_top: f64, document_height: f64, viewport_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            document_height,
            viewport_height,
        }
    }

    #[test]
    fn percent_of_scrollable_range() {
        assert_eq!(scroll_percent(metrics(0.0, 3000.0, 1000.0)), 0.0);
        assert_eq!(scroll_percent(metrics(1000.0, 3000.0, 1000.0)), 50.0);
        assert_eq!(scroll_percent(metrics(2000.0, 3000.0, 1000.0)), 100.0);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(scroll_percent(metrics(2500.0, 3000.0, 1000.0)), 100.0);
        assert_eq!(scroll_percent(metrics(-40.0, 3000.0, 1000.0)), 0.0);
    }

    #[test]
    fn content_that_fits_reports_zero() {
        assert_eq!(scroll_percent(metrics(0.0, 800.0, 800.0)), 0.0);
        assert_eq!(scroll_percent(metrics(10.0, 600.0, 800.0)), 0.0);
    }

    #[test]
    fn install_injects_styled_bar_and_fills_it() {
        let host = SimHost::new();
        host.set_document_height(1800.0);
        host.set_scroll_top(250.0);
        let progress = ScrollProgress::install(&host, &ProgressOptions::default()).unwrap();

        let bar = *progress.bar();
        assert_eq!(host.children(host.body()), vec![bar]);
        assert_eq!(host.style(bar, "position").as_deref(), Some("fixed"));
        assert_eq!(host.style(bar, "height").as_deref(), Some("3px"));
        assert_eq!(host.style(bar, "z-index").as_deref(), Some("9999"));
        assert_eq!(host.style(bar, "width").as_deref(), Some("25%"));
        assert!(host.is_listening_viewport());
    }

    #[test]
    fn burst_of_scrolls_recomputes_once() {
        let host = SimHost::new();
        host.set_document_height(1800.0);
        let mut progress = ScrollProgress::install(&host, &ProgressOptions::default()).unwrap();

        for top in [100.0, 200.0, 300.0, 400.0] {
            host.set_scroll_top(top);
            progress.on_viewport_change(&host);
        }
        host.set_now(50.0);
        let results: Vec<_> = host
            .take_due_timers(50.0)
            .into_iter()
            .filter_map(|t| progress.on_timer(&host, t))
            .collect();
        assert_eq!(results, vec![40.0]);
        assert_eq!(host.style(*progress.bar(), "width").as_deref(), Some("40%"));
    }
}
