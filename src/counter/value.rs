//! Parsing and formatting of counter display strings like `"2.5M"`.

/// How intermediate counter values are formatted, chosen from the suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixKind {
    /// Contains `%`: integer percentage.
    Percent,
    /// Contains `B`: one decimal, billions.
    Billions,
    /// Contains `M`: integer, millions.
    Millions,
    /// Contains `K`: integer, thousands.
    Thousands,
    /// Anything else: one decimal followed by the suffix verbatim.
    Other,
}

impl SuffixKind {
    /// Classify a suffix. Checked in the order `%`, `B`, `M`, `K`.
    #[must_use]
    pub fn of(suffix: &str) -> Self {
        if suffix.contains('%') {
            Self::Percent
        } else if suffix.contains('B') {
            Self::Billions
        } else if suffix.contains('M') {
            Self::Millions
        } else if suffix.contains('K') {
            Self::Thousands
        } else {
            Self::Other
        }
    }
}

/// A counter's numeric target and the text around it.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterValue {
    /// Numeric target; 0 when the source has no number.
    pub number: f64,
    /// Source text with the numeric run removed.
    pub suffix: String,
}

impl CounterValue {
    /// Split a display string into its first run of digits and decimal
    /// points and everything else.
    ///
    /// The run is read as the longest valid leading decimal (`"1.2.3"` is
    /// 1.2); a run without digits, or no run at all, gives 0.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let is_numeric = |c: char| c.is_ascii_digit() || c == '.';
        let Some(start) = source.find(is_numeric) else {
            return Self {
                number: 0.0,
                suffix: source.to_owned(),
            };
        };
        let len = source[start..]
            .find(|c: char| !is_numeric(c))
            .unwrap_or(source.len() - start);
        let run = &source[start..start + len];

        let mut suffix = String::with_capacity(source.len() - len);
        suffix.push_str(&source[..start]);
        suffix.push_str(&source[start + len..]);

        Self {
            number: leading_decimal(run).unwrap_or(0.0),
            suffix,
        }
    }

    /// Formatting rule for this value's suffix.
    #[must_use]
    pub fn kind(&self) -> SuffixKind {
        SuffixKind::of(&self.suffix)
    }

    /// Display string for an intermediate value.
    #[must_use]
    pub fn format(&self, current: f64) -> String {
        match self.kind() {
            SuffixKind::Percent => format!("{:.0}%", round_half_up(current)),
            SuffixKind::Billions => format!("{}B", to_fixed_1(current)),
            SuffixKind::Millions => format!("{:.0}M", round_half_up(current)),
            SuffixKind::Thousands => format!("{:.0}K", round_half_up(current)),
            SuffixKind::Other => format!("{}{}", to_fixed_1(current), self.suffix),
        }
    }
}

/// Longest prefix of `run` of the form `digits [. digits]` with at least
/// one digit.
fn leading_decimal(run: &str) -> Option<f64> {
    let int_len = run.find(|c: char| !c.is_ascii_digit()).unwrap_or(run.len());
    let mut end = int_len;
    if run[int_len..].starts_with('.') {
        let frac = &run[int_len + 1..];
        let frac_len = frac
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(frac.len());
        if int_len > 0 || frac_len > 0 {
            end = int_len + 1 + frac_len;
        }
    }
    let literal = &run[..end];
    if literal.is_empty() {
        return None;
    }
    // `str::parse::<f64>` accepts "5." and ".5".
    literal.parse().ok()
}

/// Round to the nearest integer, ties toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// One decimal place of the exact binary value, ties rounded up.
///
/// `{:.1}` already rounds the exact value but breaks ties to even. A tie at
/// the hundredths is only representable when `4 * v` is an odd integer, and
/// then `10 * v` is exact too.
fn to_fixed_1(v: f64) -> String {
    let quarters = v * 4.0;
    if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
        format!("{:.1}", round_half_up(v * 10.0) / 10.0)
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_and_suffix() {
        let v = CounterValue::parse("2.5M");
        assert_eq!(v.number, 2.5);
        assert_eq!(v.suffix, "M");
        assert_eq!(v.kind(), SuffixKind::Millions);

        let v = CounterValue::parse("85%");
        assert_eq!(v.number, 85.0);
        assert_eq!(v.suffix, "%");
    }

    #[test]
    fn prefix_text_stays_in_suffix() {
        let v = CounterValue::parse("$4.2B raised");
        assert_eq!(v.number, 4.2);
        assert_eq!(v.suffix, "$B raised");
        assert_eq!(v.kind(), SuffixKind::Billions);
    }

    #[test]
    fn only_first_run_is_numeric() {
        let v = CounterValue::parse("1,000+");
        assert_eq!(v.number, 1.0);
        assert_eq!(v.suffix, ",000+");
    }

    #[test]
    fn missing_number_is_zero() {
        let v = CounterValue::parse("many");
        assert_eq!(v.number, 0.0);
        assert_eq!(v.suffix, "many");

        let v = CounterValue::parse("...");
        assert_eq!(v.number, 0.0);
        assert_eq!(v.suffix, "");
    }

    #[test]
    fn leading_decimal_forms() {
        assert_eq!(leading_decimal("1.2.3"), Some(1.2));
        assert_eq!(leading_decimal(".5"), Some(0.5));
        assert_eq!(leading_decimal("5."), Some(5.0));
        assert_eq!(leading_decimal("."), None);
        assert_eq!(leading_decimal("42"), Some(42.0));
    }

    #[test]
    fn suffix_precedence() {
        assert_eq!(SuffixKind::of("%M"), SuffixKind::Percent);
        assert_eq!(SuffixKind::of("BK"), SuffixKind::Billions);
        assert_eq!(SuffixKind::of("MK"), SuffixKind::Millions);
        assert_eq!(SuffixKind::of("K+"), SuffixKind::Thousands);
        assert_eq!(SuffixKind::of("t"), SuffixKind::Other);
        assert_eq!(SuffixKind::of(""), SuffixKind::Other);
    }

    #[test]
    fn formats_by_suffix() {
        assert_eq!(CounterValue::parse("85%").format(42.4), "42%");
        assert_eq!(CounterValue::parse("4.2B").format(1.26), "1.3B");
        assert_eq!(CounterValue::parse("2.5M").format(2.5), "3M");
        assert_eq!(CounterValue::parse("150K").format(74.5), "75K");
        assert_eq!(CounterValue::parse("7 tons").format(3.14), "3.1 tons");
        assert_eq!(CounterValue::parse("12").format(0.0), "0.0");
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(to_fixed_1(0.25), "0.3");
        assert_eq!(to_fixed_1(93.75), "93.8");
    }

    #[test]
    fn one_decimal_rounds_the_stored_value() {
        // 0.15 and 1.45 are stored just below the written tie.
        let tons = CounterValue::parse("7 t");
        assert_eq!(tons.format(0.15), "0.1 t");
        assert_eq!(tons.format(1.45), "1.4 t");
        assert_eq!(tons.format(0.35), "0.3 t");
        // Exact ties go up.
        assert_eq!(tons.format(0.25), "0.3 t");
        assert_eq!(tons.format(0.75), "0.8 t");
    }
}
