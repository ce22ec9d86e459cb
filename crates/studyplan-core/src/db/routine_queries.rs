//! Daily routine queries and the single-day completion update.

use std::time::{Duration, Instant};

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use super::plan_queries::timestamp_column;
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::DayRoutine,
};

const SELECT_ROUTINES_BY_PLAN_SQL: &str = "SELECT title, content, is_completed, completed_at FROM daily_routines WHERE plan_id = ?1 ORDER BY day_index";
const UPDATE_DAY_SQL: &str = "UPDATE daily_routines SET is_completed = ?1, completed_at = ?2 WHERE plan_id = ?3 AND day_index = ?4";
const UPDATE_PLAN_TIMESTAMP_SQL: &str = "UPDATE study_plans SET updated_at = ?1 WHERE id = ?2";

impl super::Database {
    fn build_routine_from_row(row: &rusqlite::Row) -> rusqlite::Result<DayRoutine> {
        let completed_at = match row.get::<_, Option<String>>(3)? {
            Some(_) => Some(timestamp_column(row, 3)?),
            None => None,
        };
        let is_completed: i64 = row.get(2)?;
        if (is_completed != 0) != completed_at.is_some() {
            return Err(rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Integer,
                "completion flag and timestamp disagree".into(),
            ));
        }

        Ok(DayRoutine {
            title: row.get(0)?,
            content: row.get(1)?,
            is_completed: is_completed != 0,
            completed_at,
        })
    }

    /// Retrieves the routines of a plan in day order.
    pub fn get_routines(&self, plan_id: u64) -> Result<Vec<DayRoutine>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ROUTINES_BY_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        let routines = stmt
            .query_map(params![plan_id as i64], Self::build_routine_from_row)
            .db_context("Failed to query daily routines")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read daily routine")?;

        Ok(routines)
    }

    /// Sets one day's completion fields and bumps the plan's `updated_at`.
    ///
    /// Only the row for `(plan_id, day_index)` is written, so updates to
    /// different days never overwrite each other. Returns `false` when no
    /// such day exists.
    pub fn update_day(
        &mut self,
        plan_id: u64,
        day_index: usize,
        is_completed: bool,
        completed_at: Option<Timestamp>,
    ) -> Result<bool> {
        self.write_day(plan_id, day_index, is_completed, completed_at, None)
    }

    /// Like [`Self::update_day`], but gives up with [`PlannerError::Store`]
    /// instead of committing once `deadline` has passed.
    ///
    /// Lock waits are bounded by the time left, and the deadline is checked
    /// again right before commit, so an abandoned update is rolled back
    /// rather than applied late.
    pub fn update_day_before(
        &mut self,
        plan_id: u64,
        day_index: usize,
        is_completed: bool,
        completed_at: Option<Timestamp>,
        deadline: Instant,
    ) -> Result<bool> {
        self.write_day(plan_id, day_index, is_completed, completed_at, Some(deadline))
    }

    fn write_day(
        &mut self,
        plan_id: u64,
        day_index: usize,
        is_completed: bool,
        completed_at: Option<Timestamp>,
        deadline: Option<Instant>,
    ) -> Result<bool> {
        if let Some(remaining) = time_left(deadline)? {
            self.connection
                .busy_timeout(remaining)
                .db_context("Failed to set busy timeout")?;
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let updated = tx
            .execute(
                UPDATE_DAY_SQL,
                params![
                    is_completed,
                    completed_at.map(|at| at.to_string()),
                    plan_id as i64,
                    day_index as i64
                ],
            )
            .db_context("Failed to update day")?;

        if updated == 0 {
            return Ok(false);
        }

        tx.execute(
            UPDATE_PLAN_TIMESTAMP_SQL,
            params![Timestamp::now().to_string(), plan_id as i64],
        )
        .db_context("Failed to update plan timestamp")?;

        // Dropping `tx` on the error path rolls the day back.
        if let Some(remaining) = time_left(deadline)? {
            tx.busy_timeout(remaining)
                .db_context("Failed to set busy timeout")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(true)
    }
}

/// Time left before `deadline`, or a store error once it has passed.
fn time_left(deadline: Option<Instant>) -> Result<Option<Duration>> {
    let Some(deadline) = deadline else {
        return Ok(None);
    };
    match deadline.checked_duration_since(Instant::now()) {
        Some(remaining) if !remaining.is_zero() => Ok(Some(remaining)),
        _ => Err(PlannerError::Store {
            message: "deadline passed before the update was committed".to_string(),
        }),
    }
}
