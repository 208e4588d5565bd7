//! Rendering checks against ratatui's in-memory backend.

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use roster::app::App;
use roster::tui::widgets::{render, DELETE_QUESTION, EMPTY_GLYPH, EMPTY_SUBTITLE, EMPTY_TITLE};

fn draw(app: &mut App) -> String {
    let backend = TestBackend::new(80, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render(app, f)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer.get(x, y).symbol());
        }
        screen.push('\n');
    }
    screen
}

#[test]
fn empty_roster_shows_empty_state() {
    let mut app = App::default();
    let screen = draw(&mut app);

    assert!(screen.contains("TechAcademy Pro"));
    assert!(screen.contains("Student Management"));
    assert!(screen.contains("Add New Student"));
    assert!(screen.contains("Registered Students (0)"));
    assert!(screen.contains(EMPTY_GLYPH));
    assert!(screen.contains(EMPTY_TITLE));
    assert!(screen.contains(EMPTY_SUBTITLE));
}

#[test]
fn empty_state_disappears_with_students() {
    let mut app = App::default();
    app.roster.create("Ana", "20").unwrap();
    app.roster.create("Luis", "22").unwrap();
    let screen = draw(&mut app);

    assert!(!screen.contains(EMPTY_TITLE));
    assert!(!screen.contains(EMPTY_GLYPH));
    assert!(screen.contains("Registered Students (2)"));
    assert!(screen.contains("Ana"));
    assert!(screen.contains("20 years"));
    assert!(screen.contains("Luis"));
    assert!(screen.contains("22 years"));
}

#[test]
fn empty_state_returns_after_last_delete() {
    let mut app = App::default();
    let id = app.roster.create("Ana", "20").unwrap().id();
    app.request_delete(id);
    app.confirm_delete();

    assert!(draw(&mut app).contains(EMPTY_TITLE));
}

#[test]
fn placeholders_show_in_blank_unfocused_inputs() {
    let mut app = App::default();
    let screen = draw(&mut app);

    // the name input has focus, so only the age placeholder is visible
    assert!(!screen.contains("Student name"));
    assert!(screen.contains("Age"));
    assert!(screen.contains("+ Add Student"));
}

#[test]
fn edit_modal_is_drawn_with_draft() {
    let mut app = App::default();
    let id = app.roster.create("Ana", "20").unwrap().id();
    app.begin_edit(id);
    let screen = draw(&mut app);

    assert!(screen.contains("Edit Student"));
    assert!(screen.contains("Cancel"));
    assert!(screen.contains("Save"));
}

#[test]
fn delete_prompt_names_the_student() {
    let mut app = App::default();
    let id = app.roster.create("Marta", "19").unwrap().id();
    app.request_delete(id);
    let screen = draw(&mut app);

    assert!(screen.contains("Confirm deletion"));
    assert!(screen.contains(DELETE_QUESTION));
    assert!(screen.contains("Marta (19 years)"));
}

#[test]
fn error_notice_is_drawn_on_top() {
    let mut app = App::default();
    app.submit_form();
    let screen = draw(&mut app);

    assert!(screen.contains("Error"));
    assert!(screen.contains("Please fill in all fields"));
    assert!(screen.contains("OK"));
}

#[test]
fn custom_header_from_config() {
    let mut config = roster::config::RosterConfig::default();
    config.header.title = "Night School".to_string();
    let mut app = App::new(&config).unwrap();

    assert!(draw(&mut app).contains("Night School"));
}
