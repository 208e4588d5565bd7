//! # Student Roster
//!
//! A single-screen terminal application for keeping a roster of students:
//! add a student (name, age), list students, edit one in a modal, and delete
//! with confirmation. Everything lives in memory for the lifetime of the
//! process.
//!
//! ## Modules
//! - [`roster`]: the CRUD core (`RosterManager`, `Student`, validation)
//! - [`app`]: presentation state on top of the roster (focus, selection, dialogs)
//! - [`tui`]: terminal setup, event loop, input and rendering
//! - [`config`]: TOML configuration
//! - [`logging`]: optional diagnostic log file

pub mod app;
pub mod config;
pub mod logging;
pub mod roster;
pub mod tui;

pub use app::App;
pub use roster::{RosterManager, Student, StudentId, ValidationError};
