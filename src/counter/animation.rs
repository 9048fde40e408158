//! Time-stepped counter animation.

use super::value::CounterValue;
use crate::util::easing::EasingFunction;

/// Default animation length in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// One step of a counter animation.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    /// Text to display.
    pub text: String,
    /// Whether this is the last step. The final text is always the
    /// source string from the markup.
    pub finished: bool,
}

/// A counter counting up from 0 to the value in its source text.
///
/// The animation is a pure function of elapsed time: the host supplies
/// timestamps and writes the returned text.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    source: String,
    value: CounterValue,
    start_ms: f64,
    duration_ms: f64,
    easing: EasingFunction,
}

impl CounterAnimation {
    /// Animation for `source` starting at `start_ms`.
    #[must_use]
    pub fn new(
        source: &str,
        start_ms: f64,
        duration_ms: f64,
        easing: EasingFunction,
    ) -> Self {
        Self {
            source: source.to_owned(),
            value: CounterValue::parse(source),
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// The literal text the animation ends on.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed target.
    #[must_use]
    pub fn value(&self) -> &CounterValue {
        &self.value
    }

    /// Linear progress `min(elapsed / duration, 1)`. A non-positive
    /// duration is complete immediately.
    #[must_use]
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).min(1.0)
    }

    /// Frame after `elapsed_ms` milliseconds.
    #[must_use]
    pub fn frame_at(&self, elapsed_ms: f64) -> CounterFrame {
        let progress = self.progress_at(elapsed_ms);
        if progress >= 1.0 {
            return CounterFrame {
                text: self.source.clone(),
                finished: true,
            };
        }
        let current = self.value.number * self.easing.evaluate(progress);
        CounterFrame {
            text: self.value.format(current),
            finished: false,
        }
    }

    /// Frame for an absolute timestamp on the start clock.
    #[must_use]
    pub fn frame(&self, now_ms: f64) -> CounterFrame {
        self.frame_at(now_ms - self.start_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(source: &str) -> CounterAnimation {
        CounterAnimation::new(
            source,
            0.0,
            DEFAULT_DURATION_MS,
            EasingFunction::QuarticOut,
        )
    }

    #[test]
    fn millions_end_exactly_on_source() {
        let anim = counter("2.5M");
        assert_eq!(anim.value().suffix, "M");
        assert_eq!(anim.value().number, 2.5);
        assert_eq!(anim.source(), "2.5M");

        // Still just below the target one millisecond before the end.
        assert_eq!(anim.frame_at(1999.0).text, "2M");
        // Rounding the target itself would give "3M", so the last frame
        // writes the literal source instead.
        assert_eq!(anim.value().format(2.5), "3M");
        let last = anim.frame_at(2000.0);
        assert!(last.finished);
        assert_eq!(last.text, "2.5M");
    }

    #[test]
    fn percentages_stay_integral_and_bounded() {
        let anim = counter("85%");
        let mut t = 0.0;
        while t < DEFAULT_DURATION_MS {
            let frame = anim.frame_at(t);
            assert!(!frame.finished);
            let n: u32 = frame.text.trim_end_matches('%').parse().unwrap();
            assert!(n <= 85, "{}", frame.text);
            t += 16.0;
        }
        assert_eq!(anim.frame_at(t).text, "85%");
    }

    #[test]
    fn starts_from_zero() {
        assert_eq!(counter("150K").frame_at(0.0).text, "0K");
        assert_eq!(counter("4.2B").frame_at(0.0).text, "0.0B");
    }

    #[test]
    fn frames_before_start_are_clamped() {
        let anim = CounterAnimation::new("85%", 100.0, 2000.0, EasingFunction::QuarticOut);
        assert_eq!(anim.frame(90.0).text, "0%");
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let anim = CounterAnimation::new("40%", 0.0, 0.0, EasingFunction::QuarticOut);
        let frame = anim.frame_at(0.0);
        assert!(frame.finished);
        assert_eq!(frame.text, "40%");
    }

    #[test]
    fn quartic_midpoint_value() {
        // 100 * (1 - 0.5^4) = 93.75 → 93.8
        assert_eq!(counter("100").frame_at(1000.0).text, "93.8");
    }
}
