//! Tests for the session module.

use std::sync::{Arc, Mutex};

use super::*;
use crate::{
    gateway::InMemoryUserGateway,
    models::{Exercise, REST_DAY_NAME},
};

fn day(number: u32, name: &str, exercises: usize) -> Day {
    Day {
        day_number: number,
        day_name: name.to_string(),
        estimated_workout_time: "40 minutes".to_string(),
        suggested_calorie_intake: "2100".to_string(),
        date_completed: None,
        exercises: (0..exercises)
            .map(|i| Exercise::new(format!("Move {}", i + 1), 3, 12))
            .collect(),
    }
}

fn profile(days: Vec<Day>) -> UserProfile {
    UserProfile {
        first_name: "Tom".to_string(),
        username: Some("tomcat".to_string()),
        days: days.len() as u32,
        intensity: "Moderate".to_string(),
        plan: Some(Plan::new(days)),
    }
}

/// Helper function to create a loaded session over an in-memory gateway
async fn loaded_session(days: Vec<Day>) -> (Arc<InMemoryUserGateway>, Session) {
    let gateway = Arc::new(InMemoryUserGateway::new(profile(days)));
    let mut session = SessionBuilder::new()
        .with_gateway(gateway.clone())
        .with_write_back(true)
        .build()
        .expect("Failed to build session");
    session.load().await.expect("Failed to load session");
    (gateway, session)
}

#[tokio::test]
async fn test_fresh_session_is_not_loaded() {
    let session = SessionBuilder::new()
        .with_gateway(Arc::new(InMemoryUserGateway::unreachable()))
        .build()
        .expect("Failed to build session");

    assert!(!session.is_loaded());
    assert!(matches!(session.roadmap(), Err(BurrowError::NotLoaded)));
    assert!(matches!(session.stats(), Err(BurrowError::NotLoaded)));
    assert_eq!(session.username(), DEFAULT_USERNAME);
}

#[tokio::test]
async fn test_failed_load_keeps_loading_state_and_error() {
    let mut session = SessionBuilder::new()
        .with_gateway(Arc::new(InMemoryUserGateway::unreachable()))
        .build()
        .expect("Failed to build session");

    let err = session.load().await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert!(!session.is_loaded());
    assert!(session.last_error().is_some());
    assert_eq!(session.revision(), 0);
}

#[tokio::test]
async fn test_profile_without_plan_is_placeholder() {
    let mut without_plan = profile(vec![]);
    without_plan.plan = None;
    let mut session = SessionBuilder::new()
        .with_gateway(Arc::new(InMemoryUserGateway::new(without_plan)))
        .build()
        .expect("Failed to build session");

    session.load().await.expect("load");
    assert!(!session.is_loaded());
    assert!(matches!(session.roadmap(), Err(BurrowError::NotLoaded)));

    let stats = session.stats().expect("stats of an empty profile");
    assert_eq!(stats.total_days, 0);
    assert_eq!(stats.level, 1);
}

#[tokio::test]
async fn test_completing_first_day_unlocks_second() {
    let (_gateway, mut session) = loaded_session(vec![day(1, "Push", 3), day(2, "Pull", 1)]).await;

    let states: Vec<_> = session.roadmap().unwrap().iter().map(|n| n.state).collect();
    assert_eq!(states, vec![NodeState::Current, NodeState::Locked]);

    for exercise in 1..=3 {
        session
            .toggle_exercise(&ToggleExercise { day: 1, exercise })
            .expect("toggle");
    }

    let first = session.day(&DayRef { day: 1 }).unwrap();
    assert!(first.date_completed.is_some());

    let states: Vec<_> = session.roadmap().unwrap().iter().map(|n| n.state).collect();
    assert_eq!(states, vec![NodeState::Completed, NodeState::Current]);
}

#[tokio::test]
async fn test_locked_day_is_refused() {
    let (gateway, mut session) = loaded_session(vec![day(1, "Push", 1), day(2, "Pull", 1)]).await;
    let revision = session.revision();

    let err = session
        .toggle_exercise(&ToggleExercise { day: 2, exercise: 1 })
        .unwrap_err();
    assert!(matches!(err, BurrowError::DayLocked { day: 2 }));
    assert_eq!(session.revision(), revision);
    assert!(gateway.pushed_days().is_empty());
}

#[tokio::test]
async fn test_each_toggle_replaces_snapshot_once() {
    let (_gateway, mut session) = loaded_session(vec![day(1, "Push", 2)]).await;
    let before = session.profile().unwrap();
    let revision = session.revision();

    session
        .toggle_exercise(&ToggleExercise { day: 1, exercise: 2 })
        .expect("toggle");

    assert_eq!(session.revision(), revision + 1);
    // The earlier snapshot is untouched.
    assert!(!before.plan.as_ref().unwrap().days[0].exercises[1].completed);
    assert!(session.day(&DayRef { day: 1 }).unwrap().exercises[1].completed);
}

#[tokio::test]
async fn test_listeners_and_write_back_receive_updated_day() {
    let (gateway, mut session) = loaded_session(vec![day(1, "Push", 1)]).await;
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.add_listener(move |index: usize, day: &Day| {
        sink.lock().unwrap().push((index, day.is_completed()));
    });

    let updated = session
        .toggle_exercise(&ToggleExercise { day: 1, exercise: 1 })
        .expect("toggle");

    assert_eq!(*seen.lock().unwrap(), vec![(0, true)]);
    let pushed = gateway.pushed_days();
    assert_eq!(pushed.len(), 1);
    assert_eq!(pushed[0], (0, updated));
}

#[tokio::test]
async fn test_rest_day_stays_completed_after_undo() {
    let (_gateway, mut session) =
        loaded_session(vec![day(1, REST_DAY_NAME, 1), day(2, "Legs", 1)]).await;
    let params = ToggleExercise { day: 1, exercise: 1 };

    session.toggle_exercise(&params).expect("tick");
    let undone = session.toggle_exercise(&params).expect("untick");

    assert!(!undone.exercises[0].completed);
    assert!(undone.date_completed.is_some());
    assert_eq!(
        session.day_state(&DayRef { day: 2 }).unwrap(),
        NodeState::Current
    );
}

#[tokio::test]
async fn test_out_of_range_inputs() {
    let (_gateway, mut session) = loaded_session(vec![day(1, "Push", 2)]).await;

    assert!(matches!(
        session.toggle_exercise(&ToggleExercise { day: 1, exercise: 3 }),
        Err(BurrowError::IndexOutOfRange { index: 2, len: 2 })
    ));
    assert!(matches!(
        session.toggle_exercise(&ToggleExercise { day: 5, exercise: 1 }),
        Err(BurrowError::DayNotFound { day: 5, len: 1 })
    ));
    assert!(matches!(
        session.day(&DayRef { day: 0 }),
        Err(BurrowError::InvalidInput { .. })
    ));
}

#[tokio::test]
async fn test_stats_and_progress_follow_toggles() {
    let (_gateway, mut session) = loaded_session(vec![day(1, "Push", 4)]).await;
    session
        .toggle_exercise(&ToggleExercise { day: 1, exercise: 1 })
        .expect("toggle");

    let stats = session.stats().unwrap();
    assert_eq!(stats.completed_workouts, 1);
    assert_eq!(stats.total_workouts, 4);
    assert_eq!(stats.current_exp, 583);

    let progress = session.progress(&DayRef { day: 1 }).unwrap();
    assert_eq!(progress.percent(), 25);
}

#[tokio::test]
async fn test_discard_ends_session() {
    let (_gateway, mut session) = loaded_session(vec![day(1, "Push", 1)]).await;
    session.discard();
    assert!(!session.is_loaded());
    assert!(session.profile().is_err());
}

#[tokio::test]
async fn test_replace_installs_snapshot_without_gateway() {
    let mut session = SessionBuilder::new()
        .with_gateway(Arc::new(InMemoryUserGateway::unreachable()))
        .build()
        .expect("Failed to build session");
    assert!(session.load().await.is_err());
    assert!(session.last_error().is_some());

    let mut finished = day(1, "Push", 1);
    finished.exercises[0].completed = true;
    session.replace(profile(vec![finished, day(2, "Pull", 2)]));

    assert!(session.is_loaded());
    assert!(session.last_error().is_none());
    assert_eq!(session.revision(), 1);
    let stats = session.stats().expect("stats");
    assert_eq!(stats.completed_workouts, 1);
    assert_eq!(stats.total_workouts, 3);
}

#[test]
fn test_empty_username_rejected() {
    let result = SessionBuilder::new().with_username(" ").build();
    assert!(matches!(result, Err(BurrowError::InvalidInput { .. })));
}
