use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TourGuideError};

/// Day count used when the caller gives none or something unparseable.
pub const DEFAULT_DAYS: u32 = 3;

/// Raw day count as entered by the caller: free text from a form field or
/// an already-typed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaysInput {
    Text(String),
    Count(i64),
    Missing,
}

impl DaysInput {
    /// Resolve to a positive day count, falling back to [`DEFAULT_DAYS`].
    ///
    /// Text is read like a form field: leading whitespace and an optional sign
    /// are skipped, then the leading run of digits is taken ("5 days" is 5).
    /// Zero, negative and digit-less values resolve to the default.
    pub fn resolve(&self) -> u32 {
        let parsed = match self {
            DaysInput::Text(text) => parse_leading_int(text),
            DaysInput::Count(count) => Some(*count),
            DaysInput::Missing => None,
        };

        match parsed {
            Some(count) if count > 0 => u32::try_from(count).unwrap_or(u32::MAX),
            _ => DEFAULT_DAYS,
        }
    }
}

impl From<&str> for DaysInput {
    fn from(value: &str) -> Self {
        DaysInput::Text(value.to_string())
    }
}

impl From<String> for DaysInput {
    fn from(value: String) -> Self {
        DaysInput::Text(value)
    }
}

impl From<u32> for DaysInput {
    fn from(value: u32) -> Self {
        DaysInput::Count(i64::from(value))
    }
}

impl From<i32> for DaysInput {
    fn from(value: i32) -> Self {
        DaysInput::Count(i64::from(value))
    }
}

impl From<usize> for DaysInput {
    fn from(value: usize) -> Self {
        DaysInput::Count(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<i64> for DaysInput {
    fn from(value: i64) -> Self {
        DaysInput::Count(value)
    }
}

impl<T: Into<DaysInput>> From<Option<T>> for DaysInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DaysInput::Missing)
    }
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let run: &str = &digits[..digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len())];
    if run.is_empty() {
        return None;
    }

    let magnitude = run.bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Body of the outbound itinerary request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItineraryRequest {
    /// Destination, already trimmed and non-empty
    pub city: String,
    /// Requested trip length in days
    pub days: u32,
    /// Identity of the requester, sent as `userId` when known
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<String>,
}

impl ItineraryRequest {
    /// Build a request from raw form input. Fails only when `city` is blank.
    pub fn new(
        city: &str,
        days: impl Into<DaysInput>,
        requester_id: Option<String>,
    ) -> Result<Self> {
        let city = city.trim();
        if city.is_empty() {
            return Err(TourGuideError::Input("City is required".to_string()));
        }

        Ok(Self {
            city: city.to_string(),
            days: days.into().resolve(),
            requester_id,
        })
    }
}
