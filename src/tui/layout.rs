//! # Layout Module
//!
//! Screen geometry for the roster UI. Rendering and mouse hit-testing both go
//! through these functions, so a click always lands on what was drawn there.
//!
//! ## Regions
//! - **Header**: title bar
//! - **Form**: "Add New Student" inputs and button
//! - **List**: registered students or the empty state
//! - **Footer**: key hints
//! - **Overlays**: edit modal, delete prompt and error notice, centred on screen

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

/// Height of a single-line bordered text input
pub const INPUT_HEIGHT: u16 = 3;

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub header: Rect,
    pub form: Rect,
    pub list: Rect,
    pub footer: Rect,
}

/// Inputs and button inside the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAreas {
    pub name: Rect,
    pub age: Rect,
    pub button: Rect,
}

/// Parts of the edit modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditModalAreas {
    pub outer: Rect,
    pub name: Rect,
    pub age: Rect,
    pub cancel: Rect,
    pub save: Rect,
}

/// Parts of the delete prompt and the error notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogAreas {
    pub outer: Rect,
    pub message: Rect,
    pub cancel: Rect,
    pub confirm: Rect,
}

/// Sizes of the fixed panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Rows taken by the header bar
    pub header_height: u16,
    /// Preferred width of overlays, shrunk on narrow terminals
    pub modal_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 4,
            modal_width: 52,
        }
    }
}

impl LayoutConfig {
    /// Splits the screen into header, form, list and footer
    pub fn main_layout(&self, area: Rect) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.header_height),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        MainAreas {
            header: chunks[0],
            form: chunks[1],
            list: chunks[2],
            footer: chunks[3],
        }
    }

    /// Places the name input, age input and add button inside the form panel
    pub fn form_layout(&self, form: Rect) -> FormAreas {
        let inner = bordered_inner(form);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        FormAreas {
            name: chunks[0],
            age: chunks[1],
            button: chunks[2],
        }
    }

    /// Area inside the list panel border where rows are drawn
    pub fn list_inner(&self, list: Rect) -> Rect {
        bordered_inner(list)
    }

    pub fn edit_modal_layout(&self, screen: Rect) -> EditModalAreas {
        let outer = centered_rect(self.modal_width, EDIT_MODAL_HEIGHT, screen);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(bordered_inner(outer));
        let (cancel, save) = split_buttons(chunks[3]);

        EditModalAreas {
            outer,
            name: chunks[0],
            age: chunks[1],
            cancel,
            save,
        }
    }

    /// Layout shared by the delete prompt and the error notice
    ///
    /// For the notice only `confirm` is used, as its single OK button.
    pub fn dialog_layout(&self, screen: Rect) -> DialogAreas {
        let outer = centered_rect(self.modal_width, DIALOG_HEIGHT, screen);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(bordered_inner(outer));
        let (cancel, confirm) = split_buttons(chunks[1]);

        DialogAreas {
            outer,
            message: chunks[0],
            cancel,
            confirm,
        }
    }

    /// Maps a screen row to a list index, given the first visible index
    pub fn list_row_at(&self, list: Rect, offset: usize, col: u16, row: u16) -> Option<usize> {
        let inner = self.list_inner(list);
        if !contains(inner, col, row) {
            return None;
        }
        Some(offset + (row - inner.y) as usize)
    }
}

/// Form panel: border, two inputs, button row and one spare row
const FORM_HEIGHT: u16 = 2 + INPUT_HEIGHT * 2 + 1 + 1;
const EDIT_MODAL_HEIGHT: u16 = 2 + INPUT_HEIGHT * 2 + 1 + 1;
const DIALOG_HEIGHT: u16 = 7;

/// Returns a `width` x `height` rectangle centred in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Whether a terminal cell lies inside `area`
pub fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

fn bordered_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Splits a button row into two halves with a one-cell gap
fn split_buttons(row: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Percentage(50),
        ])
        .split(row);
    (chunks[0], chunks[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_stacks_regions() {
        let layout = LayoutConfig::default();
        let areas = layout.main_layout(Rect::new(0, 0, 80, 40));

        assert_eq!(areas.header, Rect::new(0, 0, 80, 4));
        assert_eq!(areas.form.y, 4);
        assert_eq!(areas.form.height, FORM_HEIGHT);
        assert_eq!(areas.list.y, 4 + FORM_HEIGHT);
        assert_eq!(areas.footer, Rect::new(0, 39, 80, 1));
    }

    #[test]
    fn test_form_inputs_sit_inside_the_border() {
        let layout = LayoutConfig::default();
        let form = layout.form_layout(Rect::new(0, 4, 80, FORM_HEIGHT));

        assert_eq!(form.name, Rect::new(1, 5, 78, INPUT_HEIGHT));
        assert_eq!(form.age, Rect::new(1, 8, 78, INPUT_HEIGHT));
        assert_eq!(form.button.y, 11);
        assert_eq!(form.button.height, 1);
    }

    #[test]
    fn test_centered_rect_clips_to_small_screens() {
        let rect = centered_rect(52, 10, Rect::new(0, 0, 40, 8));
        assert_eq!(rect, Rect::new(0, 0, 40, 8));

        let rect = centered_rect(20, 4, Rect::new(0, 0, 40, 10));
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }

    #[test]
    fn test_list_row_hit_testing() {
        let layout = LayoutConfig::default();
        let list = Rect::new(0, 14, 80, 10);

        assert_eq!(layout.list_row_at(list, 0, 5, 15), Some(0));
        assert_eq!(layout.list_row_at(list, 0, 5, 17), Some(2));
        assert_eq!(layout.list_row_at(list, 3, 5, 17), Some(5));
        // the border row is not a list row
        assert_eq!(layout.list_row_at(list, 0, 5, 14), None);
        assert_eq!(layout.list_row_at(list, 0, 0, 15), None);
    }

    #[test]
    fn test_edit_modal_buttons_share_the_last_row() {
        let layout = LayoutConfig::default();
        let modal = layout.edit_modal_layout(Rect::new(0, 0, 80, 40));

        assert_eq!(modal.cancel.y, modal.save.y);
        assert!(modal.cancel.x < modal.save.x);
        assert!(contains(modal.outer, modal.name.x, modal.name.y));
    }
}
