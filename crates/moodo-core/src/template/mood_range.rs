//! Tolerant parsing of template mood ranges.
//!
//! A mood range is a comma-separated list of tokens, each either a single
//! value ("5") or an inclusive span ("3-7"). Parsing never fails hard:
//! invalid tokens are dropped, and a string with no valid token at all is
//! treated the same as an absent range (matches any mood, neutral
//! compatibility in the scorer).

use serde::{Deserialize, Serialize};

/// One inclusive sub-range over the 1-10 mood scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRange {
    pub min: u8,
    pub max: u8,
}

impl SubRange {
    /// Whether the sub-range contains the mood value.
    pub fn contains(&self, mood_value: u8) -> bool {
        mood_value >= self.min && mood_value <= self.max
    }

    /// Midpoint of the sub-range.
    pub fn center(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }

    /// Half of the sub-range width. Zero for single-value ranges.
    pub fn half_width(&self) -> f64 {
        f64::from(self.max - self.min) / 2.0
    }
}

/// A parsed mood range: one or more inclusive sub-ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRange(Vec<SubRange>);

impl MoodRange {
    /// Parse a raw mood range string.
    ///
    /// Tokens that don't parse to integers, or whose min exceeds max, are
    /// ignored. Returns `None` when no token survives, which callers treat
    /// as "matches any mood".
    pub fn parse(raw: &str) -> Option<MoodRange> {
        let ranges: Vec<SubRange> = raw
            .split(',')
            .filter_map(|token| parse_token(token.trim()))
            .collect();
        if ranges.is_empty() {
            None
        } else {
            Some(MoodRange(ranges))
        }
    }

    /// Whether any sub-range contains the mood value.
    pub fn contains(&self, mood_value: u8) -> bool {
        self.0.iter().any(|r| r.contains(mood_value))
    }

    /// First sub-range containing the mood value, if any.
    pub fn matching(&self, mood_value: u8) -> Option<&SubRange> {
        self.0.iter().find(|r| r.contains(mood_value))
    }

    /// The parsed sub-ranges.
    pub fn sub_ranges(&self) -> &[SubRange] {
        &self.0
    }
}

fn parse_token(token: &str) -> Option<SubRange> {
    if let Some((lo, hi)) = token.split_once('-') {
        let min: u8 = lo.trim().parse().ok()?;
        let max: u8 = hi.trim().parse().ok()?;
        if min <= max {
            Some(SubRange { min, max })
        } else {
            None
        }
    } else {
        let value: u8 = token.parse().ok()?;
        Some(SubRange {
            min: value,
            max: value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_span_and_single_tokens() {
        let range = MoodRange::parse("1-4, 7, 9-10").unwrap();
        assert_eq!(
            range.sub_ranges(),
            &[
                SubRange { min: 1, max: 4 },
                SubRange { min: 7, max: 7 },
                SubRange { min: 9, max: 10 },
            ]
        );
        assert!(range.contains(2));
        assert!(range.contains(7));
        assert!(range.contains(10));
        assert!(!range.contains(5));
        assert!(!range.contains(8));
    }

    #[test]
    fn drops_invalid_tokens_keeps_valid() {
        let range = MoodRange::parse("3-5,abc").unwrap();
        assert_eq!(range.sub_ranges(), &[SubRange { min: 3, max: 5 }]);
    }

    #[test]
    fn inverted_span_is_invalid() {
        assert!(MoodRange::parse("7-3").is_none());
    }

    #[test]
    fn garbage_is_none() {
        assert!(MoodRange::parse("abc").is_none());
        assert!(MoodRange::parse("").is_none());
        assert!(MoodRange::parse(" , ,").is_none());
    }

    proptest! {
        #[test]
        fn span_containment_matches_interval(min in 1u8..=10, max in 1u8..=10, mood in 0u8..=12) {
            let raw = format!("{min}-{max}");
            match MoodRange::parse(&raw) {
                Some(range) => {
                    prop_assert!(min <= max);
                    prop_assert_eq!(range.contains(mood), mood >= min && mood <= max);
                }
                None => prop_assert!(min > max),
            }
        }

        #[test]
        fn single_value_matches_only_itself(value in 1u8..=10, mood in 0u8..=12) {
            let range = MoodRange::parse(&value.to_string()).unwrap();
            prop_assert_eq!(range.contains(mood), mood == value);
        }
    }
}
