//! The module contains the `Expense` type, a single tracked spending entry.
use core::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Format used for [`Expense::date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Represent a recorded expense.
///
/// `id` is assigned by the [`Engine`](crate::Engine) on creation; any value
/// supplied by the caller is overwritten.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub note: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
}

impl Expense {
    /// Create an expense not yet stored. An empty `date` is filled in with
    /// today's date when the expense is stored.
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        note: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            amount,
            category: category.into(),
            note: note.into(),
            date: date.into(),
        }
    }

    /// Check the fields a caller controls.
    ///
    /// The amount must be a positive finite number, the category must not be
    /// blank and a non-blank date must be a valid `YYYY-MM-DD` calendar date.
    pub fn validate(&self) -> ResultEngine<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(EngineError::InvalidInput(
                "amount must be greater than 0".to_string(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(EngineError::InvalidInput("category is required".to_string()));
        }
        if !self.date.trim().is_empty() && !is_calendar_date(&self.date) {
            return Err(EngineError::InvalidInput(
                "date must be formatted as YYYY-MM-DD".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn fill_date(&mut self) {
        if self.date.trim().is_empty() {
            self.date = today();
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {:.2} {}", self.id, self.date, self.amount, self.category)?;
        if !self.note.is_empty() {
            write!(f, " ({})", self.note)?;
        }
        Ok(())
    }
}

/// Current local calendar date, `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

fn is_calendar_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .is_ok_and(|date| date.format(DATE_FORMAT).to_string() == value)
}
