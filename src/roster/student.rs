//! Student records and the id generator that stamps them.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Opaque identifier of a student, unique for the lifetime of the process.
///
/// Ids are derived from the wall clock in milliseconds, so they also sort in
/// creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(u64);

impl StudentId {
    /// Raw numeric value of the id
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single roster entry
///
/// Fields are only reachable through accessors so that the roster keeps
/// control over the invariants: the id never changes, the name is trimmed and
/// non-empty, and the age is greater than zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    name: String,
    age: u32,
}

impl Student {
    pub(crate) fn new(id: StudentId, name: String, age: u32) -> Self {
        Self { id, name, age }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Replaces name and age, keeping the id
    pub(crate) fn update(&mut self, name: String, age: u32) {
        self.name = name;
        self.age = age;
    }

    /// Age as shown in the list, e.g. `20 years`
    pub fn age_label(&self) -> String {
        format!("{} years", self.age)
    }
}

/// Hands out time-derived, strictly increasing student ids
///
/// Two students created within the same millisecond (or after the clock
/// stepped backwards) get `last + 1` instead of a duplicate.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh id based on the current time
    pub fn next_id(&mut self) -> StudentId {
        self.next_at(now_millis())
    }

    fn next_at(&mut self, millis: u64) -> StudentId {
        let id = match self.last {
            Some(last) if millis <= last => last.saturating_add(1),
            _ => millis,
        };
        self.last = Some(id);
        StudentId(id)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(whole_millis)
        .unwrap_or(0)
}

/// Whole milliseconds of `elapsed`, saturating at `u64::MAX`
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
