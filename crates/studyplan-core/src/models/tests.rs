#[cfg(test)]
mod model_tests {
    use jiff::{SignedDuration, Timestamp};

    use crate::{
        display::{DayView, LocalDateTime},
        models::{routine::title_from_content, DayRoutine, DaySyncState, PlanSummary, StudyPlan},
    };

    fn created() -> Timestamp {
        Timestamp::from_second(1640995200).unwrap() // 2022-01-01 00:00:00 UTC
    }

    fn create_test_plan() -> StudyPlan {
        let mut days = vec![
            DayRoutine::new("Atomic structure\n- Bohr model\n- quantum numbers"),
            DayRoutine::new("Chemical bonding"),
            DayRoutine::new("Thermodynamics\n- first law"),
        ];
        days[0].set_completed(Some(created() + SignedDuration::from_hours(2)));
        days[1].set_completed(Some(created() + SignedDuration::from_hours(26)));

        StudyPlan {
            id: 7,
            title: "Chemistry Routine for NEET in 3 days.".to_string(),
            overview: "Physical chemistry first.".to_string(),
            resources: String::new(),
            topics: "Atoms, Bonds, Energy".to_string(),
            created_at: created(),
            updated_at: created() + SignedDuration::from_hours(26),
            daily_routines: days,
        }
    }

    #[test]
    fn test_title_from_content() {
        assert_eq!(title_from_content("  Day 1: Vectors  \n- practice"), "Day 1: Vectors");
        assert_eq!(title_from_content("Single line"), "Single line");
        assert_eq!(title_from_content(""), "");
    }

    #[test]
    fn test_plan_progress_helpers() {
        let plan = create_test_plan();

        assert_eq!(plan.total_days(), 3);
        assert_eq!(plan.completed_days(), 2);
        assert_eq!(plan.next_day_index(), Some(2));
        assert_eq!(
            plan.last_completed_at(),
            Some(created() + SignedDuration::from_hours(26))
        );
    }

    #[test]
    fn test_set_completed_keeps_fields_consistent() {
        let mut day = DayRoutine::new("Kinematics");
        day.set_completed(Some(created()));
        assert!(day.is_completed);
        assert_eq!(day.completed_at, Some(created()));

        day.set_completed(None);
        assert!(!day.is_completed);
        assert_eq!(day.completed_at, None);
    }

    #[test]
    fn test_summary_from_plan() {
        let mut plan = create_test_plan();
        let summary = PlanSummary::from(&plan);

        assert_eq!(summary.id, 7);
        assert_eq!(summary.total_days, 3);
        assert_eq!(summary.completed_days, 2);
        assert_eq!(summary.next_day, Some(3));

        // An un-marked earlier day becomes the next day again
        plan.daily_routines[0].set_completed(None);
        assert_eq!(PlanSummary::from(&plan).next_day, Some(1));

        for day in plan.daily_routines.iter_mut() {
            day.set_completed(Some(created()));
        }
        assert_eq!(PlanSummary::from(&plan).next_day, None);
    }

    #[test]
    fn test_plan_display() {
        let plan = create_test_plan();
        let output = plan.to_string();

        assert!(output.contains("# 7. Chemistry Routine for NEET in 3 days."));
        assert!(output.contains("- Progress: 2/3 days"));
        assert!(output.contains(&format!("- Created: {}", LocalDateTime(&created()))));
        assert!(output.contains("## Overview"));
        assert!(output.contains("## Topics"));
        // Blank sections are omitted
        assert!(!output.contains("## Resources"));
        assert!(output.contains("## Daily Routines"));
        assert!(output.contains("### Day 1: Atomic structure (✓ Completed)"));
        assert!(output.contains("### Day 3: Thermodynamics (○ Not Completed)"));
    }

    #[test]
    fn test_plan_display_without_days() {
        let mut plan = create_test_plan();
        plan.daily_routines.clear();

        let output = plan.to_string();
        assert!(output.contains("No daily routines in this plan."));
        assert!(output.contains("- Progress: 0/0 days"));
    }

    #[test]
    fn test_day_view_display() {
        let plan = create_test_plan();

        let done = DayView::new(0, &plan.daily_routines[0]).to_string();
        assert!(done.starts_with("### Day 1: Atomic structure (✓ Completed)"));
        assert!(done.contains("- Completed: "));
        assert!(done.contains("- Bohr model\n- quantum numbers"));
        // The first line is only rendered in the heading
        assert_eq!(done.matches("Atomic structure").count(), 1);

        let open = DayView::new(2, &plan.daily_routines[2]).to_string();
        assert!(open.contains("### Day 3: Thermodynamics (○ Not Completed)"));
        assert!(!open.contains("- Completed: "));
    }

    #[test]
    fn test_summary_display() {
        let plan = create_test_plan();
        let output = PlanSummary::from(&plan).to_string();

        assert!(output.contains("## Chemistry Routine for NEET in 3 days. (ID: 7) (2/3)"));
        assert!(output.contains("- **Next**: Day 3"));
        assert!(output.contains("- **Last completed**: "));
    }

    #[test]
    fn test_sync_state_busy_and_names() {
        assert!(!DaySyncState::Synced.is_busy());
        assert!(DaySyncState::PendingConfirm.is_busy());
        assert_eq!(DaySyncState::RollbackPending.to_string(), "rollback_pending");
    }

    #[test]
    fn test_routine_serialization() {
        let mut day = DayRoutine::new("Vectors");
        day.set_completed(Some(created()));

        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["title"], "Vectors");
        assert_eq!(json["is_completed"], true);
        assert_eq!(json["completed_at"], "2022-01-01T00:00:00Z");

        let back: DayRoutine = serde_json::from_value(json).unwrap();
        assert_eq!(back, day);
    }
}
