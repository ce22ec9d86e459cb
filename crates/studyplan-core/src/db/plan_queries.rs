//! Study plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{routine::title_from_content, DayRoutine, StudyPlan},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO study_plans (title, overview, resources, topics, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const INSERT_ROUTINE_SQL: &str = "INSERT INTO daily_routines (plan_id, day_index, title, content, is_completed, completed_at) VALUES (?1, ?2, ?3, ?4, 0, NULL)";
const SELECT_PLAN_SQL: &str = "SELECT id, title, overview, resources, topics, created_at, updated_at FROM study_plans WHERE id = ?1";
const SELECT_PLAN_IDS_SQL: &str = "SELECT id FROM study_plans ORDER BY id DESC";
const DELETE_PLAN_SQL: &str = "DELETE FROM study_plans WHERE id = ?1";

/// Parses an RFC 3339 column into a `Timestamp`.
pub(super) fn timestamp_column(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Creates a new plan with one routine per entry in `daily_routines`.
    ///
    /// Each routine's title is taken from the first line of its content and
    /// every day starts incomplete. The plan and its days are written in a
    /// single transaction.
    pub fn create_plan(
        &mut self,
        title: &str,
        overview: &str,
        resources: &str,
        topics: &str,
        daily_routines: &[String],
    ) -> Result<StudyPlan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![title, overview, resources, topics, &now_str, &now_str],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid() as u64;

        let mut routines = Vec::with_capacity(daily_routines.len());
        for (index, content) in daily_routines.iter().enumerate() {
            let routine_title = title_from_content(content);
            tx.execute(
                INSERT_ROUTINE_SQL,
                params![id as i64, index as i64, &routine_title, content],
            )
            .db_context("Failed to insert daily routine")?;

            routines.push(DayRoutine {
                title: routine_title,
                content: content.clone(),
                is_completed: false,
                completed_at: None,
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(StudyPlan {
            id,
            title: title.into(),
            overview: overview.into(),
            resources: resources.into(),
            topics: topics.into(),
            created_at: now,
            updated_at: now,
            daily_routines: routines,
        })
    }

    /// Retrieves a plan by its ID with its routines in day order.
    pub fn get_plan(&self, id: u64) -> Result<Option<StudyPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        let mut plan = stmt
            .query_row(params![id as i64], |row| {
                Ok(StudyPlan {
                    id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    overview: row.get(2)?,
                    resources: row.get(3)?,
                    topics: row.get(4)?,
                    created_at: timestamp_column(row, 5)?,
                    updated_at: timestamp_column(row, 6)?,
                    daily_routines: Vec::new(),
                })
            })
            .optional()
            .db_context("Failed to query plan")?;

        if let Some(ref mut plan) = plan {
            plan.daily_routines = self.get_routines(plan.id)?;
        }

        Ok(plan)
    }

    /// Lists all plans, newest first.
    ///
    /// Creation order is the row id order. `created_at` is RFC 3339 text with
    /// variable fractional digits, so it does not sort chronologically.
    pub fn list_plans(&self) -> Result<Vec<StudyPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_IDS_SQL)
            .db_context("Failed to prepare query")?;

        let ids = stmt
            .query_map([], |row| row.get::<_, i64>(0))
            .db_context("Failed to list plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan id")?;

        ids.into_iter()
            .map(|id| {
                self.get_plan(id as u64)?
                    .ok_or(PlannerError::PlanNotFound { id: id as u64 })
            })
            .collect()
    }

    /// Deletes a plan and, through the foreign key cascade, all of its days.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete plan")?;

        if deleted == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }

        Ok(())
    }
}
