//! Resolve a resolution descriptor into a bucket duration.
//!
//! Two forms are accepted:
//! - Named: a unit tag plus a multiplier, e.g. ("days", 7)
//! - Legacy: a bare duration already expressed in base units
//!
//! Both resolve to one positive `i64` bucket duration before the sweep runs.

use crate::utils::config::{
    NANOS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_MONTH,
    SECONDS_PER_WEEK, SECONDS_PER_YEAR,
};
use crate::utils::error::BurndownError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named bucket unit with a fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    /// Fixed 30-day month
    Months,
    /// Fixed 365-day year
    Years,
}

impl ResolutionUnit {
    /// All supported units, shortest first
    pub const ALL: [ResolutionUnit; 7] = [
        ResolutionUnit::Seconds,
        ResolutionUnit::Minutes,
        ResolutionUnit::Hours,
        ResolutionUnit::Days,
        ResolutionUnit::Weeks,
        ResolutionUnit::Months,
        ResolutionUnit::Years,
    ];

    /// Length of one unit in seconds
    pub fn seconds(self) -> i64 {
        match self {
            ResolutionUnit::Seconds => 1,
            ResolutionUnit::Minutes => SECONDS_PER_MINUTE,
            ResolutionUnit::Hours => SECONDS_PER_HOUR,
            ResolutionUnit::Days => SECONDS_PER_DAY,
            ResolutionUnit::Weeks => SECONDS_PER_WEEK,
            ResolutionUnit::Months => SECONDS_PER_MONTH,
            ResolutionUnit::Years => SECONDS_PER_YEAR,
        }
    }

    /// Length of one unit in the given time base
    pub fn duration_in(self, base: TimeBase) -> i64 {
        // Largest factor is a year in nanoseconds (~3.2e16), well inside i64
        self.seconds() * base.units_per_second()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionUnit::Seconds => "seconds",
            ResolutionUnit::Minutes => "minutes",
            ResolutionUnit::Hours => "hours",
            ResolutionUnit::Days => "days",
            ResolutionUnit::Weeks => "weeks",
            ResolutionUnit::Months => "months",
            ResolutionUnit::Years => "years",
        }
    }
}

impl FromStr for ResolutionUnit {
    type Err = BurndownError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(ResolutionUnit::Seconds),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(ResolutionUnit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(ResolutionUnit::Hours),
            "d" | "day" | "days" => Ok(ResolutionUnit::Days),
            "w" | "wk" | "wks" | "week" | "weeks" => Ok(ResolutionUnit::Weeks),
            "mo" | "mon" | "month" | "months" => Ok(ResolutionUnit::Months),
            "y" | "yr" | "yrs" | "year" | "years" => Ok(ResolutionUnit::Years),
            _ => Err(BurndownError::InvalidResolutionUnit(input.to_string())),
        }
    }
}

impl fmt::Display for ResolutionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base unit of the input instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBase {
    #[default]
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
}

impl TimeBase {
    pub fn units_per_second(self) -> i64 {
        match self {
            TimeBase::Nanoseconds => NANOS_PER_SECOND,
            TimeBase::Microseconds => 1_000_000,
            TimeBase::Milliseconds => 1_000,
            TimeBase::Seconds => 1,
        }
    }
}

/// Bucket granularity descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolutionSpec {
    /// Raw duration in base units
    Legacy { duration: i64 },

    /// Unit tag and multiplier
    Named { unit: ResolutionUnit, multiplier: i64 },
}

impl ResolutionSpec {
    /// Build a named spec from a unit tag string
    ///
    /// # Errors
    /// * `InvalidResolutionUnit` - tag is not one of the supported units
    pub fn named(unit: &str, multiplier: i64) -> Result<Self, BurndownError> {
        Ok(ResolutionSpec::Named {
            unit: unit.parse()?,
            multiplier,
        })
    }

    pub fn legacy(duration: i64) -> Self {
        ResolutionSpec::Legacy { duration }
    }

    /// Resolve to a strictly positive bucket duration in base units
    ///
    /// # Errors
    /// * `InvalidResolutionValue` - multiplier or duration is not positive,
    ///   or the product does not fit in an i64
    pub fn bucket_duration(&self, base: TimeBase) -> Result<i64, BurndownError> {
        match *self {
            ResolutionSpec::Legacy { duration } => {
                if duration <= 0 {
                    return Err(BurndownError::InvalidResolutionValue(duration));
                }
                Ok(duration)
            }
            ResolutionSpec::Named { unit, multiplier } => {
                if multiplier <= 0 {
                    return Err(BurndownError::InvalidResolutionValue(multiplier));
                }
                multiplier
                    .checked_mul(unit.duration_in(base))
                    .ok_or(BurndownError::InvalidResolutionValue(multiplier))
            }
        }
    }
}

impl fmt::Display for ResolutionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionSpec::Legacy { duration } => write!(f, "{} base units", duration),
            ResolutionSpec::Named { unit, multiplier } => write!(f, "{} {}", multiplier, unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("m".parse::<ResolutionUnit>().unwrap(), ResolutionUnit::Minutes);
        assert_eq!("Hours".parse::<ResolutionUnit>().unwrap(), ResolutionUnit::Hours);
        assert_eq!(" DAYS ".parse::<ResolutionUnit>().unwrap(), ResolutionUnit::Days);
        assert_eq!("wk".parse::<ResolutionUnit>().unwrap(), ResolutionUnit::Weeks);
        assert_eq!("mo".parse::<ResolutionUnit>().unwrap(), ResolutionUnit::Months);
        assert_eq!("y".parse::<ResolutionUnit>().unwrap(), ResolutionUnit::Years);
    }

    #[test]
    fn test_parse_unknown_unit() {
        let err = "fortnight".parse::<ResolutionUnit>().unwrap_err();
        assert_eq!(err, BurndownError::InvalidResolutionUnit("fortnight".to_string()));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for unit in ResolutionUnit::ALL {
            assert_eq!(unit.to_string().parse::<ResolutionUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_named_duration_nanoseconds() {
        let spec = ResolutionSpec::named("days", 7).unwrap();
        assert_eq!(
            spec.bucket_duration(TimeBase::Nanoseconds).unwrap(),
            7 * 86_400 * 1_000_000_000
        );
    }

    #[test]
    fn test_named_duration_seconds_base() {
        let spec = ResolutionSpec::named("hours", 2).unwrap();
        assert_eq!(spec.bucket_duration(TimeBase::Seconds).unwrap(), 7_200);
    }

    #[test]
    fn test_non_positive_multiplier() {
        let spec = ResolutionSpec::named("days", 0).unwrap();
        assert_eq!(
            spec.bucket_duration(TimeBase::Nanoseconds),
            Err(BurndownError::InvalidResolutionValue(0))
        );

        let spec = ResolutionSpec::named("days", -3).unwrap();
        assert!(spec.bucket_duration(TimeBase::Nanoseconds).is_err());
    }

    #[test]
    fn test_overflowing_multiplier() {
        let spec = ResolutionSpec::named("years", i64::MAX / 1_000).unwrap();
        assert!(matches!(
            spec.bucket_duration(TimeBase::Nanoseconds),
            Err(BurndownError::InvalidResolutionValue(_))
        ));
    }

    #[test]
    fn test_legacy_duration() {
        assert_eq!(ResolutionSpec::legacy(5).bucket_duration(TimeBase::Seconds).unwrap(), 5);
        assert_eq!(
            ResolutionSpec::legacy(0).bucket_duration(TimeBase::Seconds),
            Err(BurndownError::InvalidResolutionValue(0))
        );
    }
}
