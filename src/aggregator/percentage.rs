//! Percentages and labelled shares.
//!
//! Percentages are kept at full precision and only rounded when
//! rendered, always to one decimal place.

use std::fmt;

/// A percentage in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    /// `count / total * 100`, or `None` when `total` is zero
    ///
    /// **Public** - every statistic goes through here, so a zero
    /// denominator can never leak a NaN into a rendered string
    pub fn of(count: usize, total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self((count as f64 / total as f64) * 100.0))
    }

    /// Unrounded value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", round_exact_ties_up(self.0))
    }
}

/// Resolve exact one-decimal ties upward.
///
/// `{:.1}` rounds exact ties to even, so 0.25 would render as "0.2". The
/// only binary values that sit exactly on a one-decimal tie end in .25 or
/// .75, and for those `value * 10` is exact. Everything else is left for
/// the formatter's correctly rounded output.
fn round_exact_ties_up(value: f64) -> f64 {
    let is_quarter = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if is_quarter {
        (value * 10.0).round() / 10.0
    } else {
        value
    }
}

/// A labelled bucket with its share of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    /// Bucket name (state, age range)
    pub label: String,

    /// Records counted in this bucket
    pub count: usize,

    pub percentage: Percentage,
}

impl Share {
    pub fn new(label: impl Into<String>, count: usize, percentage: Percentage) -> Self {
        Self {
            label: label.into(),
            count,
            percentage,
        }
    }

    /// Entry as it appears in a report: `" <label>: <pct>%"`
    pub fn formatted(&self) -> String {
        format!(" {}: {}%", self.label, self.percentage)
    }
}

/// Join formatted entries the way the report sentences embed them
pub fn join_shares(shares: &[Share]) -> String {
    shares
        .iter()
        .map(Share::formatted)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_of() {
        assert_eq!(Percentage::of(1, 4).unwrap().to_string(), "25.0");
        assert_eq!(Percentage::of(2, 3).unwrap().to_string(), "66.7");
        assert_eq!(Percentage::of(1, 3).unwrap().to_string(), "33.3");
        assert_eq!(Percentage::of(7, 12).unwrap().to_string(), "58.3");
        assert_eq!(Percentage::of(0, 5).unwrap().to_string(), "0.0");
        assert_eq!(Percentage::of(5, 5).unwrap().to_string(), "100.0");
    }

    #[test]
    fn test_zero_total_is_none() {
        assert!(Percentage::of(0, 0).is_none());
        assert!(Percentage::of(3, 0).is_none());
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(Percentage(0.25).to_string(), "0.3");
        assert_eq!(Percentage(2.25).to_string(), "2.3");
        assert_eq!(Percentage(12.75).to_string(), "12.8");
        assert_eq!(Percentage(12.5).to_string(), "12.5");
    }

    #[test]
    fn test_share_formatting() {
        let ca = Share::new("CA", 2, Percentage::of(2, 3).unwrap());
        let ny = Share::new("NY", 1, Percentage::of(1, 3).unwrap());

        assert_eq!(ca.formatted(), " CA: 66.7%");
        assert_eq!(join_shares(&[ca, ny]), " CA: 66.7%, NY: 33.3%");
        assert_eq!(join_shares(&[]), "");
    }
}
