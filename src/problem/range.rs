//! @acp:module "Outcome Range"
//! @acp:summary "Inclusive integer range for operands and results"
//! @acp:domain generation
//! @acp:layer model

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{MathGenError, Result};

/// Inclusive `[min, max]` range; `min <= max` always holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    min: i64,
    max: i64,
}

impl Range {
    /// Create a range, rejecting `min > max`
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(MathGenError::InvalidRange {
                input: format!("{}-{}", min, max),
                reason: "minimum is greater than maximum".to_string(),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Parse `"<min>-<max>"`
    ///
    /// The dash is the separator, so negative bounds cannot be written here.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| MathGenError::InvalidRange {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = input.trim().split('-').collect();
        if parts.len() != 2 {
            return Err(invalid("expected the form <min>-<max>"));
        }

        let min = parts[0]
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid("minimum is not an integer"))?;
        let max = parts[1]
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid("maximum is not an integer"))?;

        if min > max {
            return Err(invalid("minimum is greater than maximum"));
        }
        Ok(Self { min, max })
    }
}

impl FromStr for Range {
    type Err = MathGenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_range() {
        let range = Range::parse("0-20").unwrap();
        assert_eq!(range.min(), 0);
        assert_eq!(range.max(), 20);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(Range::parse(" 3 - 9 \n").unwrap(), Range::new(3, 9).unwrap());
    }

    #[test]
    fn test_parse_single_value_range() {
        let range = Range::parse("7-7").unwrap();
        assert_eq!(range.min(), range.max());
    }

    #[test]
    fn test_parse_rejects_min_above_max() {
        assert!(matches!(
            Range::parse("5-3"),
            Err(MathGenError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_token_count() {
        assert!(Range::parse("5").is_err());
        assert!(Range::parse("1-2-3").is_err());
        assert!(Range::parse("").is_err());
        assert!(Range::parse("-5-3").is_err());
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert!(Range::parse("a-10").is_err());
        assert!(Range::parse("1-ten").is_err());
        assert!(Range::parse("1.5-3").is_err());
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(Range::new(10, 1).is_err());
        assert!(Range::new(-4, -4).is_ok());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let range = Range::new(2, 12).unwrap();
        assert_eq!(range.to_string(), "2-12");
        assert_eq!(range.to_string().parse::<Range>().unwrap(), range);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = Range::new(1, 3).unwrap();
        assert!(range.contains(1));
        assert!(range.contains(3));
        assert!(!range.contains(0));
        assert!(!range.contains(4));
    }
}
