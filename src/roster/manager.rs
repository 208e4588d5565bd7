//! # Roster Manager - Authoritative Roster State
//!
//! The `RosterManager` is the single owner of the student list and of the
//! transient state that surrounds it: the add form inputs, the edit draft
//! behind the modal, and the student waiting for delete confirmation.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        RosterManager                         │
//! │   form ──submit_form──▶ students ◀──commit_edit── draft      │
//! │                            ▲                                 │
//! │                            └──confirm_delete── pending_delete│
//! └──────────────────────────────────────────────────────────────┘
//!              ▲ operations                 │ snapshots
//!              │                            ▼
//!        input handlers               list / form / modal views
//! ```
//!
//! Modal lifecycle: `Closed --begin_edit--> Open --commit_edit | cancel_edit--> Closed`.
//! A commit that fails validation leaves the modal open with the draft intact.
//! The delete prompt has the same two states, driven by `request_delete`
//! and `confirm_delete` / `cancel_delete`.

use crate::roster::student::{IdGenerator, Student, StudentId};
use crate::roster::validation::{validate, ValidationError};
use tracing::{debug, info, warn};

/// Raw contents of the "add student" inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
}

impl StudentForm {
    pub fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.age.is_empty()
    }
}

/// Unsaved edits of one student, live while the edit modal is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    editing: StudentId,
    pub name: String,
    pub age: String,
}

impl EditDraft {
    fn from_student(student: &Student) -> Self {
        Self {
            editing: student.id(),
            name: student.name().to_string(),
            age: student.age().to_string(),
        }
    }

    /// Id of the student being edited
    pub fn editing(&self) -> StudentId {
        self.editing
    }
}

/// Visibility of the edit modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// Owns the roster and every operation that mutates it
#[derive(Debug, Default)]
pub struct RosterManager {
    students: Vec<Student>,
    ids: IdGenerator,
    form: StudentForm,
    draft: Option<EditDraft>,
    pending_delete: Option<StudentId>,
}

impl RosterManager {
    /// Creates an empty roster with a blank form and closed dialogs
    pub fn new() -> Self {
        Self::default()
    }

    /// Students in display order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    /// Display position of a student
    pub fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id() == id)
    }

    pub fn form(&self) -> &StudentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut StudentForm {
        &mut self.form
    }

    /// Validates `name`/`age` and appends a new student at the end
    ///
    /// The roster is left untouched on error.
    pub fn create(&mut self, name: &str, age: &str) -> Result<Student, ValidationError> {
        let valid = validate(name, age).map_err(|err| {
            warn!(%err, "rejected new student");
            err
        })?;

        let student = Student::new(self.ids.next_id(), valid.name, valid.age);
        info!(id = %student.id(), name = student.name(), age = student.age(), "student added");
        self.students.push(student.clone());
        Ok(student)
    }

    /// Runs [`create`](Self::create) with the form inputs
    ///
    /// The inputs are cleared on success and kept as typed on failure.
    pub fn submit_form(&mut self) -> Result<Student, ValidationError> {
        let StudentForm { name, age } = &self.form;
        let (name, age) = (name.clone(), age.clone());
        let student = self.create(&name, &age)?;
        self.form.clear();
        Ok(student)
    }

    pub fn modal_state(&self) -> ModalState {
        if self.draft.is_some() {
            ModalState::Open
        } else {
            ModalState::Closed
        }
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        self.draft.as_mut()
    }

    /// Loads a student into the edit draft and opens the modal
    ///
    /// Returns `false` and leaves everything as is when `id` is unknown.
    pub fn begin_edit(&mut self, id: StudentId) -> bool {
        let Some(student) = self.get(id) else {
            debug!(%id, "edit requested for unknown student");
            return false;
        };

        self.draft = Some(EditDraft::from_student(student));
        debug!(%id, "edit modal opened");
        true
    }

    /// Validates the draft and writes it back to its student
    ///
    /// On success the student keeps its id and position, the modal closes and
    /// the updated student is returned. On a validation error the modal stays
    /// open with the draft unchanged. Returns `Ok(None)` when no edit is open
    /// or the edited student was removed in the meantime; the latter also
    /// closes the modal.
    pub fn commit_edit(&mut self) -> Result<Option<Student>, ValidationError> {
        let Some(draft) = &self.draft else {
            return Ok(None);
        };

        let valid = validate(&draft.name, &draft.age).map_err(|err| {
            warn!(id = %draft.editing, %err, "rejected student edit");
            err
        })?;
        let id = draft.editing;
        self.draft = None;

        let Some(student) = self.students.iter_mut().find(|s| s.id() == id) else {
            debug!(%id, "edited student no longer exists, closing modal");
            return Ok(None);
        };

        student.update(valid.name, valid.age);
        info!(%id, name = student.name(), age = student.age(), "student updated");
        Ok(Some(student.clone()))
    }

    /// Discards the draft without touching the roster. Returns whether an
    /// edit was open.
    pub fn cancel_edit(&mut self) -> bool {
        let was_open = self.draft.take().is_some();
        if was_open {
            debug!("edit modal cancelled");
        }
        was_open
    }

    /// Opens the delete confirmation for `id`
    ///
    /// Unknown ids are ignored and return `false`.
    pub fn request_delete(&mut self, id: StudentId) -> bool {
        if self.get(id).is_none() {
            debug!(%id, "delete requested for unknown student");
            return false;
        }

        self.pending_delete = Some(id);
        debug!(%id, "delete confirmation opened");
        true
    }

    /// Student awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<&Student> {
        self.pending_delete.and_then(|id| self.get(id))
    }

    pub fn is_delete_pending(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Removes the student awaiting confirmation and closes the prompt
    pub fn confirm_delete(&mut self) -> Option<Student> {
        let id = self.pending_delete.take()?;
        let index = self.position(id)?;
        let removed = self.students.remove(index);
        info!(%id, name = removed.name(), "student deleted");
        Some(removed)
    }

    /// Closes the prompt without deleting. Returns whether a prompt was open.
    pub fn cancel_delete(&mut self) -> bool {
        let was_open = self.pending_delete.take().is_some();
        if was_open {
            debug!("delete cancelled");
        }
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with(names: &[(&str, &str)]) -> RosterManager {
        let mut roster = RosterManager::new();
        for (name, age) in names {
            roster.create(name, age).unwrap();
        }
        roster
    }

    /// Id of a student that existed and was deleted
    fn removed_id(roster: &mut RosterManager) -> StudentId {
        let id = roster.create("Ghost", "1").unwrap().id();
        roster.request_delete(id);
        roster.confirm_delete();
        id
    }

    #[test]
    fn test_create_appends_trimmed_student() {
        let mut roster = RosterManager::new();
        let student = roster.create("  Ana  ", "20").unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(student.name(), "Ana");
        assert_eq!(student.age(), 20);
        assert_eq!(roster.students()[0], student);
    }

    #[test]
    fn test_create_rejects_without_touching_roster() {
        let mut roster = roster_with(&[("Ana", "20")]);
        let before = roster.students().to_vec();

        assert_eq!(roster.create("", "20"), Err(ValidationError::MissingField));
        assert_eq!(roster.create("Luis", "abc"), Err(ValidationError::InvalidAge));
        assert_eq!(roster.create("Luis", "0"), Err(ValidationError::InvalidAge));
        assert_eq!(roster.students(), before.as_slice());
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let roster = roster_with(&[("Ana", "20"), ("Luis", "22"), ("Marta", "19")]);
        let names: Vec<&str> = roster.students().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Ana", "Luis", "Marta"]);
    }

    #[test]
    fn test_submit_form_clears_inputs_on_success() {
        let mut roster = RosterManager::new();
        roster.form_mut().name = "Ana".to_string();
        roster.form_mut().age = "20".to_string();

        roster.submit_form().unwrap();

        assert!(roster.form().is_blank());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_submit_form_keeps_inputs_on_failure() {
        let mut roster = RosterManager::new();
        roster.form_mut().name = "Ana".to_string();
        roster.form_mut().age = "-1".to_string();

        assert_eq!(roster.submit_form(), Err(ValidationError::InvalidAge));
        assert_eq!(roster.form().name, "Ana");
        assert_eq!(roster.form().age, "-1");
        assert!(roster.is_empty());
    }

    #[test]
    fn test_edit_round_trip_preserves_id_and_position() {
        let mut roster = roster_with(&[("Ana", "20"), ("Luis", "22"), ("Marta", "19")]);
        let id = roster.students()[1].id();

        assert!(roster.begin_edit(id));
        assert_eq!(roster.modal_state(), ModalState::Open);
        let draft = roster.draft_mut().unwrap();
        assert_eq!(draft.name, "Luis");
        assert_eq!(draft.age, "22");
        draft.name = " Luisa ".to_string();
        draft.age = "23".to_string();

        let updated = roster.commit_edit().unwrap().unwrap();
        assert_eq!(updated.id(), id);
        assert_eq!(roster.position(id), Some(1));
        assert_eq!(roster.students()[1].name(), "Luisa");
        assert_eq!(roster.students()[1].age(), 23);
        assert_eq!(roster.modal_state(), ModalState::Closed);
        assert!(roster.draft().is_none());
    }

    #[test]
    fn test_failed_commit_keeps_modal_open() {
        let mut roster = roster_with(&[("Ana", "20")]);
        let id = roster.students()[0].id();
        roster.begin_edit(id);
        roster.draft_mut().unwrap().age = "zero".to_string();

        assert_eq!(roster.commit_edit(), Err(ValidationError::InvalidAge));
        assert_eq!(roster.modal_state(), ModalState::Open);
        assert_eq!(roster.draft().unwrap().age, "zero");
        assert_eq!(roster.students()[0].age(), 20);
    }

    #[test]
    fn test_cancel_edit_leaves_roster_unchanged() {
        let mut roster = roster_with(&[("Ana", "20"), ("Luis", "22")]);
        let before = roster.students().to_vec();
        roster.begin_edit(before[0].id());
        roster.draft_mut().unwrap().name = "Someone else".to_string();

        assert!(roster.cancel_edit());
        assert_eq!(roster.students(), before.as_slice());
        assert_eq!(roster.modal_state(), ModalState::Closed);
        assert!(!roster.cancel_edit());
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let mut roster = roster_with(&[("Ana", "20")]);
        let ghost = removed_id(&mut roster);
        assert!(!roster.begin_edit(ghost));
        assert_eq!(roster.modal_state(), ModalState::Closed);
    }

    #[test]
    fn test_commit_without_open_modal() {
        let mut roster = roster_with(&[("Ana", "20")]);
        assert_eq!(roster.commit_edit(), Ok(None));
    }

    #[test]
    fn test_confirmed_delete_removes_only_that_student() {
        let mut roster = roster_with(&[("Ana", "20"), ("Luis", "22"), ("Marta", "19")]);
        let target = roster.students()[1].id();

        assert!(roster.request_delete(target));
        assert_eq!(roster.pending_delete().map(|s| s.name()), Some("Luis"));
        let removed = roster.confirm_delete().unwrap();

        assert_eq!(removed.id(), target);
        let names: Vec<&str> = roster.students().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Ana", "Marta"]);
        assert!(!roster.is_delete_pending());
    }

    #[test]
    fn test_cancelled_delete_is_noop() {
        let mut roster = roster_with(&[("Ana", "20")]);
        let id = roster.students()[0].id();

        roster.request_delete(id);
        assert!(roster.cancel_delete());
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.confirm_delete(), None);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut roster = roster_with(&[("Ana", "20")]);
        let ghost = removed_id(&mut roster);

        assert!(!roster.request_delete(ghost));
        assert!(!roster.is_delete_pending());
        assert_eq!(roster.confirm_delete(), None);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_deleting_the_student_under_edit_closes_the_modal_on_commit() {
        let mut roster = roster_with(&[("Ana", "20")]);
        let id = roster.students()[0].id();
        roster.begin_edit(id);
        roster.request_delete(id);
        roster.confirm_delete();

        assert_eq!(roster.commit_edit(), Ok(None));
        assert_eq!(roster.modal_state(), ModalState::Closed);
        assert!(roster.is_empty());
    }
}
