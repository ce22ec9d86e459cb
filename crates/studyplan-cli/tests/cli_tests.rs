use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a test database
fn studyplan_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("studyplan").expect("Failed to find studyplan binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Creates a three-day plan and returns the database path
fn create_three_day_plan(temp_dir: &TempDir) -> std::path::PathBuf {
    let db_path = temp_dir.path().join("cli_test.db");
    studyplan_cmd(&db_path)
        .args([
            "plan",
            "create",
            "Physics Routine for JEE Advanced in 3 days.",
            "--overview",
            "Mechanics first",
            "--day",
            "Vectors\n- 20 problems",
            "--day",
            "Kinematics",
            "--day",
            "Laws of motion",
        ])
        .assert()
        .success();
    db_path
}

#[test]
fn test_cli_create_plan_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    studyplan_cmd(&db_path)
        .args(["plan", "create", "Chemistry Routine", "--day", "Atoms", "--day", "Bonds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains("# 1. Chemistry Routine"))
        .stdout(predicate::str::contains("### Day 2: Bonds (○ Not Completed)"));
}

#[test]
fn test_cli_create_plan_requires_days() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    studyplan_cmd(&db_path)
        .args(["plan", "create", "Empty Routine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one daily routine"));
}

#[test]
fn test_cli_create_plan_from_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let plan_file = temp_dir.path().join("plan.json");
    std::fs::write(
        &plan_file,
        r#"{
            "title": "Biology Routine for NEET in 2 days.",
            "topics": "Cells, Genetics",
            "dailyRoutines": ["Cell structure\n- diagrams", "Mendel's laws"]
        }"#,
    )
    .expect("Failed to write plan file");

    studyplan_cmd(&db_path)
        .args(["plan", "create", "--from-file"])
        .arg(&plan_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Biology Routine for NEET in 2 days."))
        .stdout(predicate::str::contains("## Topics"))
        .stdout(predicate::str::contains("### Day 1: Cell structure"));
}

#[test]
fn test_cli_create_plan_from_malformed_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let plan_file = temp_dir.path().join("plan.json");
    std::fs::write(&plan_file, r#"{"title": "Biology", "dailyRoutines": ["#)
        .expect("Failed to write plan file");

    studyplan_cmd(&db_path)
        .args(["plan", "create", "--from-file"])
        .arg(&plan_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse plan file"))
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    studyplan_cmd(&db_path)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_no_subcommand_lists_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_three_day_plan(&temp_dir);

    studyplan_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "## Physics Routine for JEE Advanced in 3 days. (ID: 1) (0/3)",
        ))
        .stdout(predicate::str::contains("- **Next**: Day 1"));
}

#[test]
fn test_cli_toggle_first_day_then_show() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_three_day_plan(&temp_dir);

    studyplan_cmd(&db_path)
        .args(["day", "toggle", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked Day 1 of plan 1 complete at"));

    studyplan_cmd(&db_path)
        .args(["day", "show", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Day 1: Vectors (✓ Completed)"))
        .stdout(predicate::str::contains("- 20 problems"));

    studyplan_cmd(&db_path)
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Progress: 1/3 days"));
}

#[test]
fn test_cli_out_of_sequence_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_three_day_plan(&temp_dir);

    studyplan_cmd(&db_path)
        .args(["day", "toggle", "1", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("One step at a time!"))
        .stderr(predicate::str::contains(
            "Please complete Day 2 before starting Day 3.",
        ));
}

#[test]
fn test_cli_cooldown_blocks_second_day() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_three_day_plan(&temp_dir);

    studyplan_cmd(&db_path)
        .args(["day", "toggle", "1", "1"])
        .assert()
        .success();

    studyplan_cmd(&db_path)
        .args(["day", "toggle", "1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Slow down!"))
        .stderr(predicate::str::contains("more hours before marking another day complete"));
}

#[test]
fn test_cli_untoggle_is_always_allowed() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_three_day_plan(&temp_dir);

    studyplan_cmd(&db_path)
        .args(["day", "toggle", "1", "1"])
        .assert()
        .success();

    studyplan_cmd(&db_path)
        .args(["day", "toggle", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked Day 1 of plan 1 as not completed"));

    studyplan_cmd(&db_path)
        .args(["day", "show", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(○ Not Completed)"))
        .stdout(predicate::str::contains("- Completed:").not());
}

#[test]
fn test_cli_toggle_missing_plan_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    studyplan_cmd(&db_path)
        .args(["day", "toggle", "42", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load plan 42"));
}

#[test]
fn test_cli_show_missing_day_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_three_day_plan(&temp_dir);

    studyplan_cmd(&db_path)
        .args(["day", "show", "1", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Day 4 of plan 1 not found"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = create_three_day_plan(&temp_dir);

    studyplan_cmd(&db_path)
        .args(["plan", "delete", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Re-run with --confirm"));

    studyplan_cmd(&db_path)
        .args(["plan", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted plan 'Physics Routine for JEE Advanced in 3 days.' (ID: 1)",
        ));

    studyplan_cmd(&db_path)
        .args(["plan", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 1 not found"));
}
