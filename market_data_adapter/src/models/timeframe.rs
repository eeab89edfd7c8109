use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeFrameError {
    #[error("Invalid amount for {:?}: {}", unit, message)]
    InvalidAmount {
        unit: TimeFrameUnit,
        message: String,
    },

    #[error("Invalid input: {}", message)]
    InvalidInput { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFrameUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl TimeFrameUnit {
    /// Wire suffix understood by the upstream bars endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrameUnit::Minute => "Min",
            TimeFrameUnit::Hour => "Hour",
            TimeFrameUnit::Day => "Day",
            TimeFrameUnit::Week => "Week",
            TimeFrameUnit::Month => "Month",
        }
    }
}

/// The time interval covered by one bar, e.g. 5 minutes or 1 day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFrame {
    pub amount: u32,
    pub unit: TimeFrameUnit,
}

impl TimeFrame {
    /// Creates a validated timeframe.
    ///
    /// The allowed ranges follow the upstream bars API: 1-59 for minutes,
    /// 1-23 for hours, exactly 1 for days and weeks, and 1, 2, 3, 6 or 12
    /// for months.
    pub fn new(amount: u32, unit: TimeFrameUnit) -> Result<Self, TimeFrameError> {
        Self::validate(amount, unit.clone())?;
        Ok(Self { amount, unit })
    }

    fn validate(amount: u32, unit: TimeFrameUnit) -> Result<(), TimeFrameError> {
        match unit {
            TimeFrameUnit::Minute if !(1..=59).contains(&amount) => {
                Err(TimeFrameError::InvalidAmount {
                    unit,
                    message: "Second or Minute units can only be used with amounts between 1-59."
                        .into(),
                })
            }
            TimeFrameUnit::Hour if !(1..=23).contains(&amount) => {
                Err(TimeFrameError::InvalidAmount {
                    unit,
                    message: "Hour units can only be used with amounts 1-23".into(),
                })
            }
            TimeFrameUnit::Day | TimeFrameUnit::Week if amount != 1 => {
                Err(TimeFrameError::InvalidAmount {
                    unit,
                    message: "Day and Week units can only be used with amount 1".into(),
                })
            }
            TimeFrameUnit::Month if ![1, 2, 3, 6, 12].contains(&amount) => {
                Err(TimeFrameError::InvalidAmount {
                    unit,
                    message: "Month units can only be used with amount 1, 2, 3, 6 and 12".into(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.as_str())
    }
}

impl FromStr for TimeFrame {
    type Err = TimeFrameError;

    /// Parses wire-format timeframe strings such as `"5Min"` or `"1Day"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, unit) = s.split_at(split);

        let amount: u32 = digits.parse().map_err(|_| TimeFrameError::InvalidInput {
            message: format!("Invalid timeframe amount: {s:?}"),
        })?;

        let unit = match unit.to_lowercase().as_str() {
            "m" | "min" | "minute" => TimeFrameUnit::Minute,
            "h" | "hr" | "hour" => TimeFrameUnit::Hour,
            "d" | "day" => TimeFrameUnit::Day,
            "w" | "wk" | "week" => TimeFrameUnit::Week,
            "mo" | "month" => TimeFrameUnit::Month,
            other => {
                return Err(TimeFrameError::InvalidInput {
                    message: format!("Invalid timeframe unit: {other}"),
                });
            }
        };

        Self::new(amount, unit)
    }
}
