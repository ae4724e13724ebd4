#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A two-day plan, nothing completed yet.
pub const DOCUMENT: &str = r#"{
    "username": "tomcat",
    "first-name": "Tom",
    "days": 2,
    "intensity": "Moderate",
    "plan": {
        "days": [
            {
                "day-number": 1,
                "day-name": "Upper Body",
                "estimated-workout-time": "45 minutes",
                "suggested-calorie-intake": "2200",
                "date-completed": null,
                "workouts": [
                    {"name": "Push-ups", "sets": 3, "reps": 12, "instructions": "Keep your core tight", "completed": null},
                    {"name": "Dumbbell Rows", "sets": 3, "reps": 10, "instructions": "Pull to the hip", "completed": null}
                ]
            },
            {
                "day-number": 2,
                "day-name": "Lower Body",
                "estimated-workout-time": "50 minutes",
                "suggested-calorie-intake": "2400",
                "date-completed": null,
                "workouts": [
                    {"name": "Squats", "sets": 4, "reps": 10, "instructions": "Push through your heels", "completed": null}
                ]
            }
        ]
    }
}"#;

/// Helper function to create a temporary directory holding the document
pub fn create_cli_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("tomcat.json");
    std::fs::write(&path, DOCUMENT).expect("Failed to write document");
    (temp_dir, path)
}

/// Helper function to create a Command with --no-color and an isolated
/// config directory
pub fn burrow_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("burrow").expect("Failed to find burrow binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path());
    cmd.arg("--no-color");
    cmd
}
