//! Payroll models.
//!
//! This module defines the calendar-month pay period and the derived
//! payroll result returned by the calculator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Fixed divisor used to derive a daily rate from the monthly salary.
///
/// Dayflow pays against a standard 30-day month regardless of the actual
/// calendar length. This is deliberate payroll policy, not a shortcut.
pub const STANDARD_MONTH_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// A calendar month/year pair scoping payroll and attendance queries.
///
/// Construction validates the month, so every `PayPeriod` value resolves to
/// a well-formed inclusive date range.
///
/// # Example
///
/// ```
/// use dayflow_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(1, 2026).unwrap();
/// let (start, end) = period.date_range();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
/// assert_eq!(period.label(), "1/2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriod {
    month: u32,
    year: i32,
    start: NaiveDate,
    end: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period for the given month and year.
    ///
    /// Fails with a validation error when `month` is outside `1..=12` or
    /// the month cannot be represented as a date range.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::validation(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            EngineError::validation(format!("invalid period {}/{}", month, year))
        })?;

        // First day of the following month, stepped back one day.
        let next_month_start = if month == 12 {
            let next_year = year.checked_add(1).ok_or_else(|| {
                EngineError::validation(format!("invalid period {}/{}", month, year))
            })?;
            NaiveDate::from_ymd_opt(next_year, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let end = next_month_start.and_then(|d| d.pred_opt()).ok_or_else(|| {
            EngineError::validation(format!("invalid period {}/{}", month, year))
        })?;

        Ok(Self {
            month,
            year,
            start,
            end,
        })
    }

    /// The month component (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The inclusive `[first day, last day]` range of the month.
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Checks if a given date falls within this period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Display label in the `month/year` form used by payslips.
    pub fn label(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }
}

/// The derived payout for one employee over one pay period.
///
/// This is a computed value, recomputed per request, and is never stored
/// as authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The employee the payout is for.
    pub employee_id: String,
    /// The employee's full name, for payslip display.
    pub employee_name: String,
    /// The period label in `month/year` form.
    pub period: String,
    /// The monthly base salary the calculation started from.
    pub base_salary: Decimal,
    /// Number of present-status attendance days inside the period.
    pub present_days: u32,
    /// The daily rate, rounded to whole currency units for display.
    pub daily_rate: Decimal,
    /// The final payout, rounded half-up to whole currency units.
    pub payout: Decimal,
}
