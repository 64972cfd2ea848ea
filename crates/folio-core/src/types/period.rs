//! Historical request tokens: period (time span) and interval (sampling).

use crate::error::FolioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time span of a historical price request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Period {
    /// One day
    #[serde(rename = "1d")]
    OneDay,
    /// Five days
    #[serde(rename = "5d")]
    FiveDays,
    /// One month
    #[serde(rename = "1mo")]
    OneMonth,
    /// Three months
    #[serde(rename = "3mo")]
    ThreeMonths,
    /// Six months
    #[serde(rename = "6mo")]
    SixMonths,
    /// One year
    #[default]
    #[serde(rename = "1y")]
    OneYear,
    /// Two years
    #[serde(rename = "2y")]
    TwoYears,
    /// Five years
    #[serde(rename = "5y")]
    FiveYears,
    /// Ten years
    #[serde(rename = "10y")]
    TenYears,
    /// Year to date
    #[serde(rename = "ytd")]
    YearToDate,
    /// Full available history
    #[serde(rename = "max")]
    Max,
}

impl Period {
    /// Returns the request token (e.g. "6mo").
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDays => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
            Period::TenYears => "10y",
            Period::YearToDate => "ytd",
            Period::Max => "max",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Period::OneDay => "1 Day",
            Period::FiveDays => "5 Days",
            Period::OneMonth => "1 Month",
            Period::ThreeMonths => "3 Months",
            Period::SixMonths => "6 Months",
            Period::OneYear => "1 Year",
            Period::TwoYears => "2 Years",
            Period::FiveYears => "5 Years",
            Period::TenYears => "10 Years",
            Period::YearToDate => "Year to Date",
            Period::Max => "Max",
        }
    }

    /// All periods, shortest first.
    #[must_use]
    pub fn all() -> &'static [Period] {
        &[
            Period::OneDay,
            Period::FiveDays,
            Period::OneMonth,
            Period::ThreeMonths,
            Period::SixMonths,
            Period::OneYear,
            Period::TwoYears,
            Period::FiveYears,
            Period::TenYears,
            Period::YearToDate,
            Period::Max,
        ]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Period {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Period::all()
            .iter()
            .copied()
            .find(|p| p.token() == token)
            .ok_or_else(|| FolioError::unknown_token("period", s))
    }
}

/// Sampling granularity of a historical price request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// Daily bars
    #[default]
    #[serde(rename = "1d")]
    Daily,
    /// Weekly bars
    #[serde(rename = "1wk")]
    Weekly,
    /// Monthly bars
    #[serde(rename = "1mo")]
    Monthly,
}

impl Interval {
    /// Returns the request token (e.g. "1wk").
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            Interval::Daily => "1d",
            Interval::Weekly => "1wk",
            Interval::Monthly => "1mo",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Interval::Daily => "Daily",
            Interval::Weekly => "Weekly",
            Interval::Monthly => "Monthly",
        }
    }

    /// All intervals, finest first.
    #[must_use]
    pub fn all() -> &'static [Interval] {
        &[Interval::Daily, Interval::Weekly, Interval::Monthly]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Interval {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Interval::all()
            .iter()
            .copied()
            .find(|i| i.token() == token)
            .ok_or_else(|| FolioError::unknown_token("interval", s))
    }
}
