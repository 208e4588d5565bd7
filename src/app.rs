//! # Application State
//!
//! `App` wraps the [`RosterManager`] with everything the terminal UI needs on
//! top of it: which widget has focus, the list selection, the choice
//! highlighted in the delete prompt, the error notice, and the dirty flag that
//! tells the event loop to redraw.
//!
//! Every method that changes what is on screen calls `mark_dirty`.

use crate::config::RosterConfig;
use crate::roster::{ModalState, RosterManager, StudentId, ValidationError};
use crate::tui::layout::LayoutConfig;
use crate::tui::theme::Theme;
use anyhow::Result;
use ratatui::widgets::ListState;

/// Focusable widgets of the main screen, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Age,
    AddButton,
    List,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Name, Focus::Age, Focus::AddButton, Focus::List];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }
}

/// Focusable widgets of the edit modal, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditFocus {
    Name,
    Age,
    Cancel,
    Save,
}

impl EditFocus {
    const ORDER: [EditFocus; 4] = [
        EditFocus::Name,
        EditFocus::Age,
        EditFocus::Cancel,
        EditFocus::Save,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(order: &[T], current: T, step: usize) -> T {
    let index = order.iter().position(|f| *f == current).unwrap_or(0);
    order[(index + step) % order.len()]
}

/// Highlighted button of the delete prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteChoice {
    Cancel,
    Delete,
}

impl DeleteChoice {
    pub fn toggle(self) -> Self {
        match self {
            DeleteChoice::Cancel => DeleteChoice::Delete,
            DeleteChoice::Delete => DeleteChoice::Cancel,
        }
    }
}

/// A blocking message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(err: ValidationError) -> Self {
        Self {
            title: "Error".to_string(),
            message: err.to_string(),
        }
    }
}

/// Topmost layer receiving input, from most to least blocking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Notice,
    ConfirmDelete,
    EditModal,
    None,
}

/// Header texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

/// The main application state
pub struct App {
    pub should_quit: bool,
    pub roster: RosterManager,
    pub focus: Focus,
    pub edit_focus: EditFocus,
    pub delete_choice: DeleteChoice,
    pub list_state: ListState,
    pub notice: Option<Notice>,
    pub header: Header,
    pub theme: Theme,
    pub layout_config: LayoutConfig,
    dirty: bool,
}

impl Default for App {
    fn default() -> Self {
        let config = RosterConfig::default();
        Self::with_theme(&config, Theme::default())
    }
}

impl App {
    /// Builds the application from a validated config
    pub fn new(config: &RosterConfig) -> Result<Self> {
        let theme = Theme::from_config(&config.theme)?;
        Ok(Self::with_theme(config, theme))
    }

    fn with_theme(config: &RosterConfig, theme: Theme) -> Self {
        Self {
            should_quit: false,
            roster: RosterManager::new(),
            focus: Focus::Name,
            edit_focus: EditFocus::Name,
            delete_choice: DeleteChoice::Cancel,
            list_state: ListState::default(),
            notice: None,
            header: Header {
                title: config.header.title.clone(),
                subtitle: config.header.subtitle.clone(),
            },
            theme,
            layout_config: LayoutConfig::default(),
            dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether a redraw is due and clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Which layer currently receives input
    pub fn overlay(&self) -> Overlay {
        if self.notice.is_some() {
            Overlay::Notice
        } else if self.roster.is_delete_pending() {
            Overlay::ConfirmDelete
        } else if self.roster.modal_state() == ModalState::Open {
            Overlay::EditModal
        } else {
            Overlay::None
        }
    }

    pub fn show_error(&mut self, err: ValidationError) {
        self.notice = Some(Notice::error(err));
        self.mark_dirty();
    }

    pub fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }

    // Focus

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::List && self.list_state.selected().is_none() && !self.roster.is_empty() {
            self.list_state.select(Some(0));
        }
        self.mark_dirty();
    }

    pub fn edit_focus_next(&mut self) {
        self.edit_focus = self.edit_focus.next();
        self.mark_dirty();
    }

    pub fn edit_focus_prev(&mut self) {
        self.edit_focus = self.edit_focus.prev();
        self.mark_dirty();
    }

    // Text entry

    /// Types a character into whichever input has focus
    ///
    /// Age inputs only take ASCII digits.
    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.focused_input() {
            if field.digits_only && !c.is_ascii_digit() {
                return;
            }
            field.text.push(c);
            self.mark_dirty();
        }
    }

    /// Deletes the last character of the focused input
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_input() {
            if field.text.pop().is_some() {
                self.mark_dirty();
            }
        }
    }

    fn focused_input(&mut self) -> Option<InputRef<'_>> {
        if self.overlay() == Overlay::EditModal {
            let focus = self.edit_focus;
            let draft = self.roster.draft_mut()?;
            return match focus {
                EditFocus::Name => Some(InputRef::text(&mut draft.name)),
                EditFocus::Age => Some(InputRef::digits(&mut draft.age)),
                EditFocus::Cancel | EditFocus::Save => None,
            };
        }
        if self.overlay() != Overlay::None {
            return None;
        }

        let focus = self.focus;
        let form = self.roster.form_mut();
        match focus {
            Focus::Name => Some(InputRef::text(&mut form.name)),
            Focus::Age => Some(InputRef::digits(&mut form.age)),
            Focus::AddButton | Focus::List => None,
        }
    }

    // Roster operations

    /// Adds a student from the form, or shows why it was rejected
    pub fn submit_form(&mut self) {
        match self.roster.submit_form() {
            Ok(_) => {
                self.focus = Focus::Name;
                if self.list_state.selected().is_none() {
                    self.list_state.select(Some(0));
                }
            }
            Err(err) => self.show_error(err),
        }
        self.mark_dirty();
    }

    pub fn selected_student_id(&self) -> Option<StudentId> {
        let index = self.list_state.selected()?;
        self.roster.students().get(index).map(|s| s.id())
    }

    pub fn select_next(&mut self) {
        let len = self.roster.len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.select(next);
    }

    pub fn select_prev(&mut self) {
        if self.roster.is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.select(prev);
    }

    pub fn select(&mut self, index: usize) {
        if index < self.roster.len() {
            self.list_state.select(Some(index));
            self.mark_dirty();
        }
    }

    /// Opens the edit modal for a student
    pub fn begin_edit(&mut self, id: StudentId) {
        if self.roster.begin_edit(id) {
            self.edit_focus = EditFocus::Name;
            self.mark_dirty();
        }
    }

    pub fn begin_edit_selected(&mut self) {
        if let Some(id) = self.selected_student_id() {
            self.begin_edit(id);
        }
    }

    /// Saves the modal, or keeps it open and shows the validation error
    pub fn commit_edit(&mut self) {
        if let Err(err) = self.roster.commit_edit() {
            self.show_error(err);
        }
        self.mark_dirty();
    }

    pub fn cancel_edit(&mut self) {
        if self.roster.cancel_edit() {
            self.mark_dirty();
        }
    }

    /// Opens the delete prompt for a student, with Cancel highlighted
    pub fn request_delete(&mut self, id: StudentId) {
        if self.roster.request_delete(id) {
            self.delete_choice = DeleteChoice::Cancel;
            self.mark_dirty();
        }
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_student_id() {
            self.request_delete(id);
        }
    }

    pub fn toggle_delete_choice(&mut self) {
        self.delete_choice = self.delete_choice.toggle();
        self.mark_dirty();
    }

    /// Activates the highlighted button of the delete prompt
    pub fn activate_delete_choice(&mut self) {
        match self.delete_choice {
            DeleteChoice::Cancel => self.cancel_delete(),
            DeleteChoice::Delete => self.confirm_delete(),
        }
    }

    pub fn confirm_delete(&mut self) {
        if self.roster.confirm_delete().is_some() {
            self.clamp_selection();
        }
        self.mark_dirty();
    }

    pub fn cancel_delete(&mut self) {
        if self.roster.cancel_delete() {
            self.mark_dirty();
        }
    }

    /// Keeps the selection on a valid row after the list shrank
    fn clamp_selection(&mut self) {
        let len = self.roster.len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
        self.list_state.select(selected);
        if len == 0 && self.focus == Focus::List {
            self.focus = Focus::Name;
        }
    }
}

/// Mutable view of one text input
struct InputRef<'a> {
    text: &'a mut String,
    digits_only: bool,
}

impl<'a> InputRef<'a> {
    fn text(text: &'a mut String) -> Self {
        Self { text, digits_only: false }
    }

    fn digits(text: &'a mut String) -> Self {
        Self { text, digits_only: true }
    }
}
