use std::sync::Arc;

use jiff::Timestamp;
use studyplan_core::{params::CreatePlan, ManualClock, Planner, PlannerBuilder};
use tempfile::TempDir;

pub fn t0() -> Timestamp {
    Timestamp::from_second(1_700_000_000).expect("valid timestamp")
}

/// Helper function to create a test planner driven by a manual clock
pub async fn create_test_planner() -> (TempDir, Arc<ManualClock>, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let clock = Arc::new(ManualClock::new(t0()));
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(clock.clone())
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, clock, planner)
}

/// Parameters for a plan with `days` numbered routines
pub fn plan_with_days(days: usize) -> CreatePlan {
    CreatePlan {
        title: format!("Physics Routine for JEE Advanced in {days} days."),
        overview: "Mechanics, then waves.".to_string(),
        resources: "HC Verma, Irodov".to_string(),
        topics: "Kinematics, Waves".to_string(),
        daily_routines: (1..=days)
            .map(|n| format!("Day {n}: Topic {n}\n- read notes\n- solve problems"))
            .collect(),
    }
}
