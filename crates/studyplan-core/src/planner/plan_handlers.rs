//! Plan operations that return display wrappers or need confirmation.

use log::info;

use super::Planner;
use crate::{
    display::PlanSummaries,
    error::{PlannerError, Result},
    models::{PlanSummary, StudyPlan},
    params::{DeletePlan, Id},
};

impl Planner {
    /// Lists all plans as progress summaries.
    pub async fn list_plans_summary(&self) -> Result<PlanSummaries> {
        let plans = self.list_plans().await?;
        let summaries: Vec<PlanSummary> = plans.iter().map(Into::into).collect();
        Ok(PlanSummaries(summaries))
    }

    /// Deletes a plan once the caller has confirmed it.
    ///
    /// Returns the deleted plan, or `None` if it did not exist.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Option<StudyPlan>> {
        if !params.confirmed {
            return Err(PlannerError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.".to_string(),
            });
        }

        let id_params = Id { id: params.id };
        let plan = self.get_plan(&id_params).await?;

        if plan.is_some() {
            self.delete_plan_by_id(&id_params).await?;
            info!("deleted plan {}", params.id);
        }

        Ok(plan)
    }
}
