//! Recurring due-date scheduling: frequency rules, calendar arithmetic, and
//! the roll-forward pass that keeps stale schedules current.

pub mod batch;
pub mod calendar;
pub mod frequency;
pub mod scheduler;

pub use batch::{advance_due_expenses, AdvancedDueDate, BatchOutcome, ScheduledExpense};
pub use calendar::{days_in_month, local_calendar_day, shift_months, shift_years};
pub use frequency::Frequency;
pub use scheduler::{compute_next_occurrence, MAX_ADVANCE_STEPS};
