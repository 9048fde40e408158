//! Layout geometry for visibility observation.
//!
//! Rectangles are in document coordinates (CSS pixels, y growing downward).
//! Browsers compute visibility natively; these functions back the simulated
//! DOM and define what a visibility observation means.

use std::fmt;
use std::str::FromStr;

use crate::error::SproutError;
use crate::visibility::Observation;

/// An axis-aligned rectangle defined by origin `(x, y)` and size `(w, h)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Rectangle from origin and size.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.h
    }

    /// Area, zero for degenerate rectangles.
    #[inline]
    #[must_use]
    pub fn area(self) -> f64 {
        self.w.max(0.0) * self.h.max(0.0)
    }

    /// Overlap of two rectangles. Edge-adjacent rectangles intersect with
    /// zero area; disjoint ones return `None`.
    #[must_use]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 < x0 || y1 < y0 {
            None
        } else {
            Some(Self::new(x0, y0, x1 - x0, y1 - y0))
        }
    }

    /// Grow each side outward by the margin (negative values shrink).
    #[must_use]
    pub fn expand(self, margin: RootMargin) -> Self {
        Self {
            x: self.x - margin.left,
            y: self.y - margin.top,
            w: self.w + margin.left + margin.right,
            h: self.h + margin.top + margin.bottom,
        }
    }
}

/// Four-sided root margin, in pixels, applied to the viewport before
/// computing visibility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    /// Top edge offset.
    pub top: f64,
    /// Right edge offset.
    pub right: f64,
    /// Bottom edge offset.
    pub bottom: f64,
    /// Left edge offset.
    pub left: f64,
}

impl RootMargin {
    /// No margin.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Same offset on all four sides.
    #[must_use]
    pub const fn uniform(px: f64) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }
}

fn parse_length(token: &str, source: &str) -> Result<f64, SproutError> {
    let number = if token == "0" {
        "0"
    } else {
        token
            .strip_suffix("px")
            .ok_or_else(|| SproutError::InvalidMargin(source.to_owned()))?
    };
    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SproutError::InvalidMargin(source.to_owned()))
}

impl FromStr for RootMargin {
    type Err = SproutError;

    /// Parse CSS margin shorthand (1–4 lengths, `px` or unitless `0`).
    /// An empty string is no margin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|token| parse_length(token, s))
            .collect::<Result<Vec<_>, _>>()?;

        match *values.as_slice() {
            [] => Ok(Self::ZERO),
            [all] => Ok(Self::uniform(all)),
            [vertical, horizontal] => Ok(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(SproutError::InvalidMargin(s.to_owned())),
        }
    }
}

impl fmt::Display for RootMargin {
    /// Four-value CSS form, as accepted by `IntersectionObserver`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Visibility of `target` within `viewport` grown by `margin`.
///
/// The ratio is the intersected fraction of the target's area. A zero-area
/// target that touches the root counts as fully visible.
#[must_use]
pub fn visible_fraction(
    target: Rect,
    viewport: Rect,
    margin: RootMargin,
) -> Observation {
    let root = viewport.expand(margin);
    let Some(overlap) = target.intersection(root) else {
        return Observation::HIDDEN;
    };

    let area = target.area();
    let ratio = if area > 0.0 {
        (overlap.area() / area).clamp(0.0, 1.0)
    } else {
        1.0
    };
    Observation {
        ratio,
        intersecting: true,
    }
}
