use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::frequency::Frequency;
use crate::schedule::scheduler::compute_next_occurrence;

/// A stored recurring-obligation record as the scheduling pass sees it.
/// Ownership and persistence stay with the caller; the pass only reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledExpense {
    pub id: Uuid,
    pub name: String,
    pub due_date: Option<NaiveDate>,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month_anchor: Option<u32>,
    pub is_active: bool,
}

/// A single due-date replacement the caller should persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedDueDate {
    pub id: Uuid,
    pub previous: NaiveDate,
    pub next: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub updates: Vec<AdvancedDueDate>,
    /// Eligible records whose due date was not yet stale.
    pub current: usize,
    /// Inactive, dateless, or one-off records.
    pub skipped: usize,
    /// Records the scheduler refused; logged and left untouched.
    pub failed: usize,
}

/// Scans a collection of scheduled expenses and computes replacement due
/// dates for every active, recurring record whose date fell before `today`.
///
/// `today` is captured once by the caller and applied to the whole pass, so
/// a run straddling midnight still judges every record against the same day.
/// A record the scheduler rejects is logged and skipped; it never aborts the
/// rest of the batch.
pub fn advance_due_expenses(expenses: &[ScheduledExpense], today: NaiveDate) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for expense in expenses {
        let due_date = match expense.due_date {
            Some(date) if expense.is_active && expense.frequency.is_recurring() => date,
            _ => {
                outcome.skipped += 1;
                continue;
            }
        };
        if due_date >= today {
            outcome.current += 1;
            continue;
        }
        match compute_next_occurrence(
            due_date,
            expense.frequency,
            expense.day_of_month_anchor,
            today,
        ) {
            Ok(next) => outcome.updates.push(AdvancedDueDate {
                id: expense.id,
                previous: due_date,
                next,
            }),
            Err(error) => {
                tracing::warn!(id = %expense.id, name = %expense.name, %error, "skipping schedule that could not be advanced");
                outcome.failed += 1;
            }
        }
    }

    outcome
}
