use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Candle sizes understood by the ISS `interval` parameter.
///
/// The discriminant is the wire code, which is not monotonic in duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum CandleInterval {
    Minute = 1,
    TenMinutes = 10,
    Hour = 60,
    Day = 24,
    Week = 7,
    Month = 31,
    Quarter = 4,
}

impl CandleInterval {
    pub const ALL: [Self; 7] = [
        Self::Minute,
        Self::TenMinutes,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
    ];

    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minute => "1m",
            Self::TenMinutes => "10m",
            Self::Hour => "1h",
            Self::Day => "1d",
            Self::Week => "1w",
            Self::Month => "1M",
            Self::Quarter => "1q",
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|interval| interval.code() == code)
    }
}

impl Default for CandleInterval {
    fn default() -> Self {
        Self::Day
    }
}

impl Display for CandleInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CandleInterval> for u32 {
    fn from(interval: CandleInterval) -> Self {
        interval.code()
    }
}

impl TryFrom<u32> for CandleInterval {
    type Error = ValidationError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| ValidationError::InvalidInterval {
            value: code.to_string(),
        })
    }
}

impl FromStr for CandleInterval {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if let Ok(code) = value.parse::<u32>() {
            return Self::try_from(code);
        }

        // "1M" (month) and "1m" (minute) differ only by case.
        match value {
            "1M" => return Ok(Self::Month),
            "1m" => return Ok(Self::Minute),
            _ => {}
        }

        match value.to_ascii_lowercase().as_str() {
            "10m" => Ok(Self::TenMinutes),
            "1h" => Ok(Self::Hour),
            "1d" => Ok(Self::Day),
            "1w" => Ok(Self::Week),
            "1q" => Ok(Self::Quarter),
            other => Err(ValidationError::InvalidInterval {
                value: other.to_owned(),
            }),
        }
    }
}
