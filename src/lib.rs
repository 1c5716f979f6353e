#![doc(test(attr(deny(warnings))))]

//! Schedule Core computes next due dates for recurring financial obligations,
//! rolling stale schedules forward past month-length and leap-year edge cases.

pub mod errors;
pub mod schedule;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Schedule Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
