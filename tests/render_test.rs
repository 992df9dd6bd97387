//! Rendering every tab into a TestBackend.

use std::sync::Arc;

use mindwell::adapters::MockHttpClient;
use mindwell::app::{Alert, App, AppMessage, Tab, MOOD_FAILED, MOOD_LOGGED};
use mindwell::backend::BackendClient;
use mindwell::config::Config;
use mindwell::models::{ChatReply, CrisisResources, MoodEntry, Resource};
use mindwell::state::ChatOutcome;
use mindwell::ui::render;
use mindwell::ui::theme::Skin;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::json;

fn app_with_skin(skin: Skin) -> App {
    let client = BackendClient::with_http_client(
        "http://mindwell.test",
        Arc::new(MockHttpClient::new()),
    );
    App::with_client(Config::default().with_skin(skin), Arc::new(client))
}

fn app() -> App {
    app_with_skin(Skin::Flat)
}

/// Render once and return the buffer as one string per row.
fn draw(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_chat_tab_shows_welcome_and_transcript() {
    let mut app = app();
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("MindWell"));
    assert!(screen.contains("connecting"));
    assert!(screen.contains("Conversation"));
    assert!(screen.contains("Welcome to MindWell"));

    app.chat.input.set_content("Hello");
    app.chat.begin_turn().unwrap();
    app.handle_message(AppMessage::ChatSettled(ChatOutcome::Replied(ChatReply {
        session_id: "abc".into(),
        text: "Hi there".into(),
    })));
    app.handle_message(AppMessage::HealthChecked(true));

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Hello"));
    assert!(screen.contains("Hi there"));
    assert!(screen.contains("connected"));
    assert!(!screen.contains("Welcome to MindWell"));
}

#[test]
fn test_mood_tab_shows_form_and_history() {
    let mut app = app();
    app.switch_tab(Tab::Mood);
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("How are you feeling today?"));
    assert!(screen.contains("5/10"));
    assert!(screen.contains("Recent Mood History"));
    assert!(screen.contains("Loading history"));

    let token = app.mood.issue_history_request();
    app.handle_message(AppMessage::MoodHistoryLoaded {
        token,
        entries: vec![serde_json::from_value::<MoodEntry>(json!({
            "id": "1",
            "mood_level": 8,
            "notes": "walked outside",
            "timestamp": "2024-05-01T10:00:00"
        }))
        .unwrap()],
    });
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("8/10"));
    assert!(screen.contains("walked outside"));
}

#[test]
fn test_mood_tab_empty_history() {
    let mut app = app();
    app.switch_tab(Tab::Mood);
    let token = app.mood.issue_history_request();
    app.handle_message(AppMessage::MoodHistoryLoaded {
        token,
        entries: Vec::new(),
    });
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("No mood entries yet. Log your first one!"));
}

#[test]
fn test_resources_tab_lists_and_details() {
    let mut app = app();
    app.switch_tab(Tab::Resources);
    app.resources
        .set_categories(vec!["anxiety".into(), "coping-strategies".into()]);
    let token = app.resources.select_category(Default::default());
    let resource: Resource = serde_json::from_value(json!({
        "id": "1",
        "title": "Box Breathing",
        "category": "anxiety",
        "description": "A calming technique",
        "content": "Breathe in for four counts.",
        "url": "https://example.org/breathing"
    }))
    .unwrap();
    app.handle_message(AppMessage::ResourcesLoaded {
        token,
        resources: vec![resource],
    });

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Coping strategies"));
    assert!(screen.contains("Resources (1)"));
    assert!(screen.contains("Box Breathing"));
    assert!(screen.contains("Details"));
    assert!(screen.contains("A calming technique"));
}

#[test]
fn test_crisis_tab_renders_bundled_and_refreshed_content() {
    let mut app = app();
    app.switch_tab(Tab::Crisis);
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("immediate danger"));
    assert!(screen.contains("Crisis Hotlines"));
    assert!(screen.contains("National Suicide Prevention Lifeline"));

    app.handle_message(AppMessage::CrisisResourcesLoaded(CrisisResources {
        emergency_contacts: vec![serde_json::from_value(json!({
            "name": "Local Warmline",
            "phone": "555-0100",
            "description": "Peer support"
        }))
        .unwrap()],
        immediate_steps: Vec::new(),
    }));
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Local Warmline"));
    assert!(!screen.contains("National Suicide Prevention Lifeline"));
}

#[test]
fn test_alert_overlay() {
    let mut app = app();
    app.alert = Some(Alert::error(MOOD_FAILED));
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains(MOOD_FAILED));
    assert!(screen.contains("Enter/Esc to dismiss"));
}

#[test]
fn test_notice_in_status_bar() {
    let mut app = app();
    app.show_notice(MOOD_LOGGED);
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains(MOOD_LOGGED));
}

#[test]
fn test_both_skins_render_every_tab() {
    for skin in [Skin::Flat, Skin::Glass] {
        let mut app = app_with_skin(skin);
        for tab in Tab::ALL {
            app.switch_tab(tab);
            let screen = draw(&mut app, 100, 30);
            assert!(screen.contains(tab.label()), "{} missing on {}", tab.label(), skin);
            assert!(screen.contains(skin.name()));
        }
    }
}

#[test]
fn test_small_terminals_do_not_panic() {
    for (width, height) in [(60, 20), (40, 12), (20, 8), (1, 1)] {
        let mut app = app();
        app.alert = Some(Alert::error(MOOD_FAILED));
        for tab in Tab::ALL {
            app.switch_tab(tab);
            draw(&mut app, width, height);
        }
    }
}
