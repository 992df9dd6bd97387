//! Common test utilities for integration tests.
//!
//! ```ignore
//! let mock = mock_backend();
//! let mut app = test_app(&mock);
//! app.initialize();
//! pump_until(&mut app, |app| app.connection_status.is_some()).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use mindwell::adapters::MockHttpClient;
use mindwell::app::App;
use mindwell::backend::BackendClient;
use mindwell::config::Config;
use serde_json::{json, Value};

pub const BASE: &str = "http://mindwell.test";

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

pub fn resource_json(id: &str, title: &str, category: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "category": category,
        "description": format!("About {}", title),
        "content": format!("{} content", title),
        "url": "",
        "timestamp": "2024-05-01T10:00:00"
    })
}

pub fn mood_entry_json(id: &str, level: i64, notes: &str) -> Value {
    json!({
        "id": id,
        "mood_level": level,
        "notes": notes,
        "activities": [],
        "timestamp": "2024-05-01T10:00:00.000000"
    })
}

/// A mock with healthy answers for every endpoint.
pub fn mock_backend() -> MockHttpClient {
    let mock = MockHttpClient::new();
    mock.set_json(&url("/api/health"), json!({"status": "healthy"}));
    mock.set_json(
        &url("/api/resources"),
        json!({"resources": [
            resource_json("1", "Box Breathing", "anxiety"),
            resource_json("2", "Sleep Hygiene", "sleep"),
        ]}),
    );
    mock.set_json(
        &url("/api/resources/categories"),
        json!({"categories": ["anxiety", "sleep", "coping-strategies"]}),
    );
    mock.set_json(
        &url("/api/mood/history"),
        json!({"mood_entries": [mood_entry_json("m1", 7, "walked outside")]}),
    );
    mock.set_json(
        &url("/api/crisis-resources"),
        json!({
            "emergency_contacts": [
                {"name": "National Suicide Prevention Lifeline", "phone": "988", "description": "24/7"}
            ],
            "immediate_steps": ["Reach out for help"]
        }),
    );
    mock
}

pub fn test_app(mock: &MockHttpClient) -> App {
    let client = BackendClient::with_http_client(BASE, Arc::new(mock.clone()));
    App::with_client(Config::default(), Arc::new(client))
}

/// Apply incoming messages until `done` holds. Panics after two seconds.
pub async fn pump_until<F>(app: &mut App, done: F)
where
    F: Fn(&App) -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), async {
        while !done(app) {
            if !app.process_next_message().await {
                break;
            }
        }
    })
    .await
    .expect("timed out waiting for app state");
    assert!(done(app), "message channel closed before condition held");
}
