//! Date window for NeoWs feed queries.

use crate::error::AppError;
use chrono::NaiveDate;

/// Longest window the NeoWs feed accepts, in days.
pub const MAX_NEO_SPAN_DAYS: i64 = 7;

/// Message shown when a requested window violates the NeoWs constraint.
pub const RANGE_MESSAGE: &str = "Please select a date range of 7 days or fewer.";

/// An inclusive calendar date window.
///
/// Construction enforces the NeoWs feed constraints: the end must not precede
/// the start, and the span must not exceed [`MAX_NEO_SPAN_DAYS`]. A window of
/// zero days (start == end) is valid. Invalid windows never reach the
/// network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a validated date window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with a user-facing message when the
    /// end precedes the start or the span exceeds 7 days.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        let span = (end - start).num_days();
        if span < 0 || span > MAX_NEO_SPAN_DAYS {
            return Err(AppError::bad_request(RANGE_MESSAGE));
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Start date formatted the way the upstream expects (`YYYY-MM-DD`).
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End date formatted the way the upstream expects (`YYYY-MM-DD`).
    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
