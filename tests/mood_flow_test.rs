//! Mood logging against a mock backend.

mod common;

use common::{mock_backend, pump_until, test_app, url};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mindwell::app::{AlertKind, Tab, MOOD_FAILED, MOOD_LOGGED};
use mindwell::models::MoodLevel;
use mindwell::traits::HttpError;
use serde_json::json;

fn press(app: &mut mindwell::app::App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[tokio::test]
async fn test_successful_submission_resets_form_and_refetches() {
    let mock = mock_backend();
    mock.set_json(&url("/api/mood"), json!({"message": "Mood entry logged successfully"}));
    let mut app = test_app(&mock);
    app.switch_tab(Tab::Mood);

    app.mood.set_level(MoodLevel::new(8));
    app.mood.notes.set_content("felt good");
    press(&mut app, KeyCode::Enter);
    assert!(app.mood.is_submitting());

    pump_until(&mut app, |app| app.mood.history_loaded()).await;

    let posts = mock.requests_to(&url("/api/mood"));
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].json_body(),
        Some(json!({"mood_level": 8, "notes": "felt good", "activities": []}))
    );

    assert!(!app.mood.is_submitting());
    assert_eq!(app.mood.level(), MoodLevel::DEFAULT);
    assert!(app.mood.notes.is_empty());
    assert_eq!(app.notice.as_ref().map(|n| n.message.as_str()), Some(MOOD_LOGGED));
    assert!(app.alert.is_none());

    assert_eq!(mock.requests_to(&url("/api/mood/history")).len(), 1);
    assert_eq!(app.mood.history().len(), 1);
    assert_eq!(app.mood.history()[0].notes(), Some("walked outside"));
}

#[tokio::test]
async fn test_server_error_keeps_form_and_alerts() {
    let mock = mock_backend();
    mock.set_status(&url("/api/mood"), 500);
    let mut app = test_app(&mock);

    app.mood.set_level(MoodLevel::new(3));
    app.mood.notes.set_content("rough day");
    assert!(app.submit_mood());
    pump_until(&mut app, |app| !app.mood.is_submitting()).await;

    let alert = app.alert.as_ref().expect("failure alert");
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(alert.message, MOOD_FAILED);
    assert_eq!(app.mood.level(), MoodLevel::new(3));
    assert_eq!(app.mood.notes.content(), "rough day");
    assert!(app.notice.is_none());
    assert!(mock.requests_to(&url("/api/mood/history")).is_empty());
}

#[tokio::test]
async fn test_transport_error_alerts() {
    let mock = mock_backend();
    mock.set_error(&url("/api/mood"), HttpError::ConnectionFailed("refused".into()));
    let mut app = test_app(&mock);

    app.mood.notes.set_content("anyone there?");
    assert!(app.submit_mood());
    pump_until(&mut app, |app| !app.mood.is_submitting()).await;

    assert_eq!(app.alert.as_ref().map(|a| a.message.as_str()), Some(MOOD_FAILED));
    assert_eq!(app.mood.notes.content(), "anyone there?");
}

#[tokio::test]
async fn test_alert_blocks_input_until_dismissed() {
    let mock = mock_backend();
    mock.set_status(&url("/api/mood"), 500);
    let mut app = test_app(&mock);
    app.switch_tab(Tab::Mood);

    press(&mut app, KeyCode::Enter);
    pump_until(&mut app, |app| app.alert.is_some()).await;

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab, Tab::Mood);
    assert_eq!(app.mood.level(), MoodLevel::DEFAULT);
    assert!(app.mood.notes.is_empty());

    press(&mut app, KeyCode::Enter);
    assert!(app.alert.is_none());
    // Dismissing does not resubmit.
    assert_eq!(mock.requests_to(&url("/api/mood")).len(), 1);
}

#[tokio::test]
async fn test_double_submit_is_guarded() {
    let mock = mock_backend();
    mock.set_json(&url("/api/mood"), json!({"message": "ok"}));
    let mut app = test_app(&mock);

    assert!(app.submit_mood());
    assert!(!app.submit_mood());
    pump_until(&mut app, |app| app.mood.history_loaded()).await;
    assert_eq!(mock.requests_to(&url("/api/mood")).len(), 1);
}

#[tokio::test]
async fn test_notice_expires_after_ticks() {
    let mock = mock_backend();
    mock.set_json(&url("/api/mood"), json!({"message": "ok"}));
    let mut app = test_app(&mock);

    assert!(app.submit_mood());
    pump_until(&mut app, |app| app.notice.is_some()).await;
    for _ in 0..mindwell::app::NOTICE_TICKS {
        app.tick();
    }
    assert!(app.notice.is_none());
}
