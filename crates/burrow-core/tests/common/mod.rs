#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    path::PathBuf,
    thread::{self, JoinHandle},
};

use burrow_core::{Session, SessionBuilder};
use tempfile::TempDir;

/// A three-day plan as the backend serves it: a workout day, a rest day and
/// a final workout day, nothing completed yet.
pub const SAMPLE_DOCUMENT: &str = r#"{
    "_id": "665b1f0c9d3e4a0012345678",
    "username": "tomcat",
    "first-name": "Tom",
    "days": 3,
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
                    {"name": "Dumbbell Rows", "sets": 3, "reps": 10, "instructions": "Pull to the hip", "completed": null},
                    {"name": "Shoulder Press", "sets": 3, "reps": 8, "instructions": "Do not arch your back", "completed": null}
                ]
            },
            {
                "day-number": 2,
                "day-name": "Rest",
                "estimated-workout-time": "15 minutes",
                "suggested-calorie-intake": 1900,
                "workouts": [
                    {"name": "Light Stretching", "sets": 1, "reps": 1, "instructions": "Hold each stretch for 30 seconds"}
                ]
            },
            {
                "day-number": 3,
                "day-name": "Lower Body",
                "estimated-workout-time": "50 minutes",
                "suggested-calorie-intake": "2400",
                "date-completed": "",
                "workouts": [
                    {"name": "Squats", "sets": 4, "reps": 10, "instructions": "Push through your heels", "completed": null},
                    {"name": "Lunges", "sets": 3, "reps": 12, "instructions": "Alternate legs", "completed": null}
                ]
            }
        ]
    }
}"#;

/// Helper function to write the sample document into a temporary directory
pub fn create_test_document() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("tomcat.json");
    std::fs::write(&path, SAMPLE_DOCUMENT).expect("Failed to write document");
    (temp_dir, path)
}

/// Helper function to create a session loaded from the sample document
pub async fn create_loaded_session() -> (TempDir, Session) {
    let (temp_dir, path) = create_test_document();
    let mut session = SessionBuilder::new()
        .with_document_path(Some(&path))
        .build()
        .expect("Failed to build session");
    session.load().await.expect("Failed to load session");
    (temp_dir, session)
}

/// Serve a single HTTP response on a local port.
///
/// Returns the base URL to point a gateway at and a handle yielding the
/// request line the server received.
pub fn serve_once(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).expect("read header");
            if header == "\r\n" || header.is_empty() {
                break;
            }
        }

        let reason = if status == 200 { "OK" } else { "Error" };
        write!(
            stream,
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .expect("write response");
        stream.flush().expect("flush response");

        request_line.trim_end().to_string()
    });

    (base_url, handle)
}
