//! Free-text duration parsing ("3 months", "1–2 years", "60 minutes").
//!
//! Durations are stored as the text an operator typed; this module only reads
//! them back for aggregate statistics. Anything it cannot read is skipped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(\d+(?:\.\d+)?)\s*(?:(?:-|–|—|to)\s*(\d+(?:\.\d+)?))?\s*(minutes?|mins?|hours?|hrs?|days?|weeks?|wks?|months?|mos?|years?|yrs?)\b",
    )
    .expect("duration regex compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    /// Length of one unit in minutes. A month is 30 days, a year 12 months.
    fn minutes(self) -> f64 {
        const DAY: f64 = 24.0 * 60.0;
        match self {
            DurationUnit::Minutes => 1.0,
            DurationUnit::Hours => 60.0,
            DurationUnit::Days => DAY,
            DurationUnit::Weeks => 7.0 * DAY,
            DurationUnit::Months => 30.0 * DAY,
            DurationUnit::Years => 360.0 * DAY,
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        let w = word.to_ascii_lowercase();
        let unit = match w.as_str() {
            "minute" | "minutes" | "min" | "mins" => DurationUnit::Minutes,
            "hour" | "hours" | "hr" | "hrs" => DurationUnit::Hours,
            "day" | "days" => DurationUnit::Days,
            "week" | "weeks" | "wk" | "wks" => DurationUnit::Weeks,
            "month" | "months" | "mo" | "mos" => DurationUnit::Months,
            "year" | "years" | "yr" | "yrs" => DurationUnit::Years,
            _ => return None,
        };
        Some(unit)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedDuration {
    pub value: f64,
    pub unit: DurationUnit,
}

impl ParsedDuration {
    /// Parse the leading quantity of `text`; a range yields its midpoint.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = DURATION_RE.captures(text)?;
        let low: f64 = caps.get(1)?.as_str().parse().ok()?;
        let value = match caps.get(2) {
            Some(high) => {
                let high: f64 = high.as_str().parse().ok()?;
                (low + high) / 2.0
            }
            None => low,
        };
        let unit = DurationUnit::from_word(caps.get(3)?.as_str())?;
        Some(Self { value, unit })
    }

    pub fn in_unit(&self, unit: DurationUnit) -> f64 {
        self.value * self.unit.minutes() / unit.minutes()
    }
}
