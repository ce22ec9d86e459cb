//! Validation rules for marking a day complete.
//!
//! Only the incomplete → complete transition is gated. Un-marking a day is
//! always allowed and never consults these rules.

use jiff::{SignedDuration, Timestamp};

use crate::{error::ProgressError, models::DayRoutine};

/// Minimum time between completing any two days of the same plan.
pub const COOLDOWN: SignedDuration = SignedDuration::from_secs(20 * 60 * 60);

/// Checks whether `day_index` may be marked complete at `now`.
///
/// The sequence rule is checked first: the previous day must already be
/// complete. The cooldown rule then measures from the latest `completed_at`
/// among all *other* days, not just the previous one.
pub fn check_completion(
    routines: &[DayRoutine],
    day_index: usize,
    now: Timestamp,
) -> Result<(), ProgressError> {
    if day_index >= routines.len() {
        return Err(ProgressError::DayOutOfRange {
            index: day_index,
            len: routines.len(),
        });
    }

    if day_index > 0 && !routines[day_index - 1].is_completed {
        return Err(ProgressError::OutOfSequence {
            blocking_day: day_index,
        });
    }

    if let Some(remaining) = cooldown_remaining(routines, day_index, now) {
        return Err(ProgressError::CooldownActive { remaining });
    }

    Ok(())
}

/// Time left before `day_index` clears the cooldown, or `None` if it already
/// has.
pub fn cooldown_remaining(
    routines: &[DayRoutine],
    day_index: usize,
    now: Timestamp,
) -> Option<SignedDuration> {
    let last = routines
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != day_index)
        .filter_map(|(_, day)| day.completed_at)
        .max()?;

    let elapsed = now.duration_since(last);
    (elapsed < COOLDOWN).then(|| COOLDOWN - elapsed)
}
