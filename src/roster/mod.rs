//! # Roster Module
//!
//! In-memory CRUD core of the application: the `Student` record, id
//! generation, input validation and the `RosterManager` state machine that
//! the terminal UI drives.

pub mod manager;
pub mod student;
pub mod validation;

pub use manager::{EditDraft, ModalState, RosterManager, StudentForm};
pub use student::{IdGenerator, Student, StudentId};
pub use validation::{validate, ValidStudent, ValidationError};
