//! # UI Widgets Module
//!
//! Drawing functions for the roster screen: header, add form, student list,
//! footer, and the overlays stacked on top of them.

use crate::app::{App, DeleteChoice, EditFocus, Focus, Overlay};
use crate::roster::Student;
use crate::tui::input::key_hints;
use crate::tui::layout::DialogAreas;
use crate::tui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

pub const EMPTY_GLYPH: &str = "📚";
pub const EMPTY_TITLE: &str = "No students yet";
pub const EMPTY_SUBTITLE: &str = "Add your first student to get started";
pub const DELETE_QUESTION: &str = "Are you sure you want to delete this student?";

pub fn render(app: &mut App, frame: &mut Frame) {
    let screen = frame.size();
    let main = app.layout_config.main_layout(screen);

    draw_header(frame, app, main.header);
    draw_form(frame, app, main.form);
    draw_list(frame, app, main.list);
    draw_footer(frame, app, main.footer);

    if app.roster.draft().is_some() {
        draw_edit_modal(frame, app, screen);
    }
    if app.roster.is_delete_pending() {
        draw_delete_prompt(frame, app, screen);
    }
    if app.notice.is_some() {
        draw_notice(frame, app, screen);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(app.header.title.as_str(), theme.header_title_style())),
        Line::from(Span::styled(app.header.subtitle.as_str(), theme.header_subtitle_style())),
    ];
    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(theme.header_subtitle_style());
    f.render_widget(header, area);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let form_areas = app.layout_config.form_layout(area);
    let form = app.roster.form();
    let editing_form = app.overlay() == Overlay::None;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .title(Span::styled("Add New Student", theme.section_title_style()));
    f.render_widget(block, area);

    draw_input(
        f,
        theme,
        form_areas.name,
        &form.name,
        "Student name",
        editing_form && app.focus == Focus::Name,
    );
    draw_input(
        f,
        theme,
        form_areas.age,
        &form.age,
        "Age",
        editing_form && app.focus == Focus::Age,
    );

    let button = Paragraph::new("+ Add Student")
        .alignment(Alignment::Center)
        .style(theme.add_button_style(editing_form && app.focus == Focus::AddButton));
    f.render_widget(button, form_areas.button);
}

/// Draws a bordered single-line text input with placeholder and cursor
fn draw_input(f: &mut Frame, theme: &Theme, area: Rect, value: &str, placeholder: &str, focused: bool) {
    let mut spans = Vec::new();
    if value.is_empty() && !focused {
        spans.push(Span::styled(placeholder, theme.muted_style()));
    } else {
        spans.push(Span::styled(value, theme.text_style()));
    }
    if focused {
        spans.push(Span::styled(" ", theme.text_style().add_modifier(Modifier::REVERSED)));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused)),
    );
    f.render_widget(input, area);
}

fn draw_list(f: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == Focus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .title(Span::styled(
            format!("Registered Students ({})", app.roster.len()),
            theme.section_title_style(),
        ));

    if app.roster.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        draw_empty_state(f, theme, inner);
        return;
    }

    let name_width = app
        .roster
        .students()
        .iter()
        .map(|s| s.name().chars().count())
        .max()
        .unwrap_or(0);
    let items: Vec<ListItem> = app
        .roster
        .students()
        .iter()
        .map(|student| student_row(theme, student, name_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight_style())
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn student_row<'a>(theme: &Theme, student: &'a Student, name_width: usize) -> ListItem<'a> {
    ListItem::new(Line::from(vec![
        Span::raw(format!("{:<width$}", student.name(), width = name_width)),
        Span::styled(format!("  {:>9}", student.age_label()), theme.muted_style()),
        Span::styled("   [e] edit", theme.edit_action_style()),
        Span::styled("  [d] delete", theme.delete_action_style()),
    ]))
}

fn draw_empty_state(f: &mut Frame, theme: &Theme, area: Rect) {
    let top_padding = area.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(EMPTY_GLYPH));
    lines.push(Line::from(Span::styled(EMPTY_TITLE, theme.section_title_style())));
    lines.push(Line::from(Span::styled(EMPTY_SUBTITLE, theme.muted_style())));

    let empty = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(empty, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = Paragraph::new(key_hints(app)).style(app.theme.muted_style());
    f.render_widget(hints, area);
}

fn draw_edit_modal(f: &mut Frame, app: &App, screen: Rect) {
    let Some(draft) = app.roster.draft() else {
        return;
    };
    let theme = &app.theme;
    let modal = app.layout_config.edit_modal_layout(screen);
    let active = app.notice.is_none();

    f.render_widget(Clear, modal.outer);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .title(Span::styled("Edit Student", theme.section_title_style()))
        .title_alignment(Alignment::Center);
    f.render_widget(block, modal.outer);

    let focus = app.edit_focus;
    draw_input(f, theme, modal.name, &draft.name, "Student name", active && focus == EditFocus::Name);
    draw_input(f, theme, modal.age, &draft.age, "Age", active && focus == EditFocus::Age);

    let cancel = Paragraph::new("Cancel")
        .alignment(Alignment::Center)
        .style(theme.cancel_button_style(active && focus == EditFocus::Cancel));
    f.render_widget(cancel, modal.cancel);
    let save = Paragraph::new("Save")
        .alignment(Alignment::Center)
        .style(theme.save_button_style(active && focus == EditFocus::Save));
    f.render_widget(save, modal.save);
}

fn draw_delete_prompt(f: &mut Frame, app: &App, screen: Rect) {
    let theme = &app.theme;
    let dialog = app.layout_config.dialog_layout(screen);
    let mut message = vec![Line::from(DELETE_QUESTION)];
    if let Some(student) = app.roster.pending_delete() {
        message.push(Line::from(Span::styled(
            format!("{} ({})", student.name(), student.age_label()),
            theme.muted_style(),
        )));
    }

    draw_dialog_frame(f, theme, &dialog, "Confirm deletion", theme.border_style(true), message);

    let cancel = Paragraph::new("Cancel")
        .alignment(Alignment::Center)
        .style(theme.cancel_button_style(app.delete_choice == DeleteChoice::Cancel));
    f.render_widget(cancel, dialog.cancel);
    let delete = Paragraph::new("Delete")
        .alignment(Alignment::Center)
        .style(theme.delete_button_style(app.delete_choice == DeleteChoice::Delete));
    f.render_widget(delete, dialog.confirm);
}

fn draw_notice(f: &mut Frame, app: &App, screen: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };
    let theme = &app.theme;
    let dialog = app.layout_config.dialog_layout(screen);

    draw_dialog_frame(
        f,
        theme,
        &dialog,
        &notice.title,
        theme.error_style(),
        vec![Line::from(notice.message.as_str())],
    );

    let ok = Paragraph::new("OK")
        .alignment(Alignment::Center)
        .style(theme.save_button_style(true));
    f.render_widget(ok, dialog.confirm);
}

fn draw_dialog_frame(
    f: &mut Frame,
    theme: &Theme,
    dialog: &DialogAreas,
    title: &str,
    border: Style,
    message: Vec<Line>,
) {
    f.render_widget(Clear, dialog.outer);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(title.to_string(), border))
        .title_alignment(Alignment::Center);
    f.render_widget(block, dialog.outer);

    let body = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(theme.text_style())
        .wrap(Wrap { trim: true });
    f.render_widget(body, dialog.message);
}
