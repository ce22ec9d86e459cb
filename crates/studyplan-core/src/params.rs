//! Parameter structures for study plan operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. Interfaces wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation for the MCP server is enabled with the `schema`
//! feature.
//!
//! Day numbers in these parameters are 1-indexed, matching what users see.
//! The conversion to a 0-based index happens in [`ToggleDay::day_index`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: u64,
}

/// Parameters for saving a generated study plan.
///
/// Each entry of `daily_routines` is the full content of one day; its first
/// line becomes the day's title.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatePlan {
    /// Title of the plan (required)
    pub title: String,
    /// General overview of the plan
    #[serde(default)]
    pub overview: String,
    /// Recommended resources
    #[serde(default)]
    pub resources: String,
    /// Topics covered
    #[serde(default)]
    pub topics: String,
    /// Content of each day, in order (at least one)
    pub daily_routines: Vec<String>,
}

impl CreatePlan {
    /// Reads a plan from its camelCase JSON form.
    ///
    /// Malformed JSON is reported as [`PlannerError::Serialization`]. The
    /// result is not validated; call [`Self::validate`] or let
    /// [`Planner::create_plan`](crate::Planner::create_plan) do it.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks that the plan has a title and at least one non-blank day.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PlannerError::invalid_input("title").with_reason("Title cannot be empty"));
        }

        if self.daily_routines.is_empty() {
            return Err(PlannerError::invalid_input("daily_routines")
                .with_reason("A plan needs at least one daily routine"));
        }

        if let Some(blank) = self
            .daily_routines
            .iter()
            .position(|content| content.trim().is_empty())
        {
            return Err(PlannerError::invalid_input("daily_routines")
                .with_reason(format!("Day {} has no content", blank + 1)));
        }

        Ok(())
    }
}

/// Parameters for deleting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeletePlan {
    /// ID of the plan to delete
    pub id: u64,
    /// Must be true for the deletion to go ahead
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for toggling the completion of one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ToggleDay {
    /// ID of the plan
    pub plan_id: u64,
    /// Day number, starting at 1
    pub day: usize,
}

impl ToggleDay {
    /// Converts the 1-indexed day number into a routine index.
    pub fn day_index(&self) -> Result<usize> {
        self.day.checked_sub(1).ok_or_else(|| {
            PlannerError::invalid_input("day").with_reason("Day numbers start at 1")
        })
    }
}

/// Parameters for showing a single day of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ShowDay {
    /// ID of the plan
    pub plan_id: u64,
    /// Day number, starting at 1
    pub day: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_params(days: &[&str]) -> CreatePlan {
        CreatePlan {
            title: "Chemistry Routine for NEET in 2 days.".to_string(),
            daily_routines: days.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_plan_validation() {
        assert!(create_params(&["Atoms", "Bonds"]).validate().is_ok());

        let err = create_params(&[]).validate().unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "daily_routines"));

        let err = create_params(&["Atoms", "   "]).validate().unwrap_err();
        assert!(err.to_string().contains("Day 2 has no content"));

        let mut untitled = create_params(&["Atoms"]);
        untitled.title = " ".to_string();
        assert!(untitled.validate().is_err());
    }

    #[test]
    fn test_toggle_day_index_is_zero_based() {
        let params = ToggleDay { plan_id: 1, day: 3 };
        assert_eq!(params.day_index().unwrap(), 2);

        let params = ToggleDay { plan_id: 1, day: 0 };
        assert!(params.day_index().is_err());
    }

    #[test]
    fn test_create_plan_reads_camel_case_json() {
        let json = r#"{
            "title": "Maths Routine",
            "overview": "Algebra then calculus",
            "dailyRoutines": ["Day 1: Algebra\n- quadratics", "Day 2: Limits"]
        }"#;

        let params = CreatePlan::from_json(json).unwrap();
        assert_eq!(params.daily_routines.len(), 2);
        assert_eq!(params.overview, "Algebra then calculus");
        assert!(params.topics.is_empty());
    }

    #[test]
    fn test_create_plan_from_malformed_json() {
        let err = CreatePlan::from_json(r#"{"title": "Maths", "dailyRoutines": ["#).unwrap_err();
        assert!(matches!(err, PlannerError::Serialization { .. }));
        assert!(err.to_string().starts_with("Serialization error"), "{err}");

        // snake_case keys are not the wire form
        let err = CreatePlan::from_json(r#"{"title": "Maths", "daily_routines": ["Day 1"]}"#)
            .unwrap_err();
        assert!(matches!(err, PlannerError::Serialization { .. }));
    }

    #[test]
    fn test_day_params_read_camel_case_json() {
        let toggle: ToggleDay = serde_json::from_str(r#"{"planId": 1, "day": 2}"#).unwrap();
        assert_eq!((toggle.plan_id, toggle.day), (1, 2));

        let show: ShowDay = serde_json::from_str(r#"{"planId": 4, "day": 1}"#).unwrap();
        assert_eq!((show.plan_id, show.day), (4, 1));

        let json = serde_json::to_value(ToggleDay { plan_id: 1, day: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({ "planId": 1, "day": 2 }));
    }
}
