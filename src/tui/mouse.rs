//! # Mouse Module
//!
//! Click and scroll handling. Hit areas come from [`LayoutConfig`], the same
//! geometry the widgets are drawn with.
//!
//! [`LayoutConfig`]: crate::tui::layout::LayoutConfig

use crate::app::{App, DeleteChoice, EditFocus, Focus, Overlay};
use crate::tui::layout::contains;
use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// Handle mouse events for the application
pub fn handle_mouse_event(
    app: &mut App,
    kind: MouseEventKind,
    col: u16,
    row: u16,
    terminal_size: Rect,
) {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => handle_mouse_click(app, col, row, terminal_size),
        MouseEventKind::ScrollUp => handle_mouse_scroll(app, col, row, terminal_size, true),
        MouseEventKind::ScrollDown => handle_mouse_scroll(app, col, row, terminal_size, false),
        _ => {}
    }
}

fn handle_mouse_click(app: &mut App, col: u16, row: u16, terminal_size: Rect) {
    match app.overlay() {
        Overlay::Notice => {
            let dialog = app.layout_config.dialog_layout(terminal_size);
            if contains(dialog.confirm, col, row) {
                app.dismiss_notice();
            }
        }
        Overlay::ConfirmDelete => {
            let dialog = app.layout_config.dialog_layout(terminal_size);
            if contains(dialog.cancel, col, row) {
                app.delete_choice = DeleteChoice::Cancel;
                app.cancel_delete();
            } else if contains(dialog.confirm, col, row) {
                app.delete_choice = DeleteChoice::Delete;
                app.confirm_delete();
            }
        }
        Overlay::EditModal => handle_edit_modal_click(app, col, row, terminal_size),
        Overlay::None => handle_main_click(app, col, row, terminal_size),
    }
}

fn handle_edit_modal_click(app: &mut App, col: u16, row: u16, terminal_size: Rect) {
    let modal = app.layout_config.edit_modal_layout(terminal_size);
    if contains(modal.name, col, row) {
        app.edit_focus = EditFocus::Name;
        app.mark_dirty();
    } else if contains(modal.age, col, row) {
        app.edit_focus = EditFocus::Age;
        app.mark_dirty();
    } else if contains(modal.cancel, col, row) {
        app.cancel_edit();
    } else if contains(modal.save, col, row) {
        app.commit_edit();
    }
}

fn handle_main_click(app: &mut App, col: u16, row: u16, terminal_size: Rect) {
    let layout = app.layout_config;
    let main = layout.main_layout(terminal_size);
    let form = layout.form_layout(main.form);

    if contains(form.name, col, row) {
        app.set_focus(Focus::Name);
    } else if contains(form.age, col, row) {
        app.set_focus(Focus::Age);
    } else if contains(form.button, col, row) {
        app.set_focus(Focus::AddButton);
        app.submit_form();
    } else if let Some(index) = layout.list_row_at(main.list, app.list_state.offset(), col, row) {
        if index < app.roster.len() {
            app.set_focus(Focus::List);
            app.select(index);
        }
    }
}

fn handle_mouse_scroll(app: &mut App, col: u16, row: u16, terminal_size: Rect, up: bool) {
    if app.overlay() != Overlay::None {
        return;
    }
    let main = app.layout_config.main_layout(terminal_size);
    if !contains(main.list, col, row) {
        return;
    }
    if up {
        app.select_prev();
    } else {
        app.select_next();
    }
}
