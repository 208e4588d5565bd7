//! # Input Handling Module
//!
//! Translates keyboard and mouse events into `App` operations. Keys are routed
//! to the topmost overlay first: error notice, then delete prompt, then edit
//! modal, then the main screen.

use crate::app::{App, EditFocus, Focus, Overlay};
use crate::tui::mouse;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use ratatui::layout::Rect;

/// Handles a key press based on the current overlay
///
/// Ctrl-C quits from anywhere; other Ctrl/Alt chords are ignored. Characters
/// reported with both Ctrl and Alt held are AltGr input (`@`, `{` on many
/// layouts) and are typed like plain characters.
pub fn handle_key_press(app: &mut App, key: KeyEvent) {
    let ctrl_alt = KeyModifiers::CONTROL | KeyModifiers::ALT;
    let alt_gr_char = key.modifiers.contains(ctrl_alt) && matches!(key.code, KeyCode::Char(_));

    if key.modifiers.intersects(ctrl_alt) && !alt_gr_char {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            app.quit();
        }
        return;
    }

    match app.overlay() {
        Overlay::Notice => handle_notice_input(key.code, app),
        Overlay::ConfirmDelete => handle_confirm_delete_input(key.code, app),
        Overlay::EditModal => handle_edit_modal_input(key.code, app),
        Overlay::None => handle_main_input(key.code, app),
    }
}

/// Handles mouse events by delegating to the mouse module
pub fn handle_mouse_event(
    app: &mut App,
    kind: MouseEventKind,
    col: u16,
    row: u16,
    terminal_size: Rect,
) {
    mouse::handle_mouse_event(app, kind, col, row, terminal_size);
}

/// The notice blocks everything until it is acknowledged
fn handle_notice_input(key_code: KeyCode, app: &mut App) {
    if matches!(key_code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_notice();
    }
}

fn handle_confirm_delete_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => app.toggle_delete_choice(),
        KeyCode::Enter => app.activate_delete_choice(),
        _ => {}
    }
}

fn handle_edit_modal_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Tab | KeyCode::Down => app.edit_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.edit_focus_prev(),
        KeyCode::Enter => match app.edit_focus {
            EditFocus::Cancel => app.cancel_edit(),
            EditFocus::Name | EditFocus::Age | EditFocus::Save => app.commit_edit(),
        },
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.type_char(c),
        _ => {}
    }
}

fn handle_main_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        _ if app.focus == Focus::List => handle_list_input(key_code, app),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Down if app.focus != Focus::AddButton => app.focus_next(),
        KeyCode::Up if app.focus != Focus::Name => app.focus_prev(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.type_char(c),
        _ => {}
    }
}

fn handle_list_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char('e') => app.begin_edit_selected(),
        KeyCode::Delete | KeyCode::Char('d') => app.request_delete_selected(),
        KeyCode::Char('a') => app.set_focus(Focus::Name),
        _ => {}
    }
}

/// Key hints for the footer, matching the handlers above
pub fn key_hints(app: &App) -> &'static str {
    match app.overlay() {
        Overlay::Notice => "Enter/Esc: dismiss",
        Overlay::ConfirmDelete => "y: delete  n/Esc: cancel  Left/Right: choose  Enter: select",
        Overlay::EditModal => "Tab: next field  Enter: save  Esc: cancel",
        Overlay::None => match app.focus {
            Focus::List => "Up/Down: select  e: edit  d: delete  a: add  Tab: next  q: quit",
            Focus::Name | Focus::Age | Focus::AddButton => {
                "Type to fill  Tab: next  Enter: add student  Ctrl-C: quit"
            }
        },
    }
}
