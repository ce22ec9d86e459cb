//! Plan operations for the Planner.

use log::info;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::StudyPlan,
    params::{CreatePlan, Id},
};

impl Planner {
    /// Validates and stores a new plan. Every day starts incomplete.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use studyplan_core::{params::CreatePlan, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let plan = planner
    ///     .create_plan(&CreatePlan {
    ///         title: "Biology Routine for NEET in 1 days.".to_string(),
    ///         daily_routines: vec!["Cell structure\n- diagrams".to_string()],
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// assert_eq!(plan.daily_routines[0].title, "Cell structure");
    /// # Result::<(), studyplan_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<StudyPlan> {
        params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        let plan = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plan(
                &params.title,
                &params.overview,
                &params.resources,
                &params.topics,
                &params.daily_routines,
            )
        })
        .await
        .map_err(PlannerError::join)??;

        info!(
            "created plan {} with {} days",
            plan.id,
            plan.daily_routines.len()
        );
        Ok(plan)
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<StudyPlan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(PlannerError::join)?
    }

    /// Lists all plans, newest first.
    pub async fn list_plans(&self) -> Result<Vec<StudyPlan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans()
        })
        .await
        .map_err(PlannerError::join)?
    }

    /// Permanently deletes a plan and its days.
    pub async fn delete_plan_by_id(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_plan(plan_id)
        })
        .await
        .map_err(PlannerError::join)?
    }
}
