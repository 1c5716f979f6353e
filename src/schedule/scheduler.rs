use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::ScheduleError;
use crate::schedule::calendar::{days_in_month, shift_months, shift_years};
use crate::schedule::frequency::Frequency;

/// Bound on roll-forward steps; a due date corrupt enough to need more than
/// this is reported instead of chased.
pub const MAX_ADVANCE_STEPS: usize = 1024;

/// Computes the next occurrence of a recurring obligation that is not in the
/// past.
///
/// Applies one advance step for `frequency`, then keeps advancing while the
/// result is still strictly before `today`. The step count is always at least
/// one: a due date already in the future still moves forward a full period,
/// since callers only invoke this for dates they consider due.
///
/// `today` must be captured once per batch pass so every item in the pass is
/// judged against the same calendar day.
///
/// `day_of_month_anchor` pins monthly schedules to a calendar day (1-31),
/// clamped to shorter months. Out-of-range anchors are tolerated and treated
/// as absent, falling back to plain add-one-month arithmetic.
pub fn compute_next_occurrence(
    current_due_date: NaiveDate,
    frequency: Frequency,
    day_of_month_anchor: Option<u32>,
    today: NaiveDate,
) -> Result<NaiveDate, ScheduleError> {
    if !frequency.is_recurring() {
        return Err(ScheduleError::NotRecurring);
    }
    let anchor = sanitize_anchor(day_of_month_anchor);
    if frequency == Frequency::Monthly && anchor.is_none() {
        tracing::warn!(
            %current_due_date,
            "monthly schedule has no day-of-month anchor; advancing with reduced precision"
        );
    }

    let mut date = advance_once(current_due_date, frequency, anchor);
    let mut steps = 1usize;
    while date < today {
        if steps >= MAX_ADVANCE_STEPS {
            return Err(ScheduleError::TooManyIterations(MAX_ADVANCE_STEPS));
        }
        tracing::debug!(%date, %today, steps, "advanced occurrence still in the past, rolling forward");
        date = advance_once(date, frequency, anchor);
        steps += 1;
    }
    Ok(date)
}

/// One advance step. `anchor` is only consulted for monthly frequencies.
fn advance_once(from: NaiveDate, frequency: Frequency, anchor: Option<u32>) -> NaiveDate {
    match frequency {
        Frequency::Weekly => from + Duration::days(7),
        Frequency::Biweekly => from + Duration::days(14),
        Frequency::Monthly => match anchor {
            Some(day) => next_month_on_day(from, day),
            None => shift_months(from, 1),
        },
        Frequency::Bimonthly => shift_months(from, 2),
        Frequency::Quarterly => shift_months(from, 3),
        Frequency::Semiannual => shift_months(from, 6),
        Frequency::Annual => shift_years(from, 1),
        // Guarded by the is_recurring check above.
        Frequency::Once => from,
    }
}

/// First day-`anchor` date in the month after `from`, clamped to the target
/// month's length (anchor 31 in April lands on the 30th).
fn next_month_on_day(from: NaiveDate, anchor: u32) -> NaiveDate {
    let (year, month) = if from.month() == 12 {
        (from.year() + 1, 1)
    } else {
        (from.year(), from.month() + 1)
    };
    let day = anchor.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn sanitize_anchor(anchor: Option<u32>) -> Option<u32> {
    match anchor {
        Some(day) if (1..=31).contains(&day) => Some(day),
        Some(day) => {
            tracing::warn!(day, "day-of-month anchor outside 1-31 ignored");
            None
        }
        None => None,
    }
}
