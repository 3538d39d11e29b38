//! Durable storage for student records
//!
//! The [`Repository`] trait is the seam between the domain and the storage
//! engine, so the persistence strategy can be swapped without touching the
//! calculator or the CLI. The provided backend is [`FlatFileStore`], which
//! owns the flat text formats for the user list and the per-student academic
//! files.

pub mod flat_file;

pub use flat_file::FlatFileStore;

use std::io;

use crate::core::models::{Semester, Student};

/// A student's academic data as loaded from disk
///
/// A roll with no academic file on disk loads as the default record: zero
/// semesters and a CGPA of `0.0`. That is the defined state for a newly
/// registered student, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcademicRecord {
    /// Semesters in storage order
    pub semesters: Vec<Semester>,
    /// Persisted cumulative grade point average
    pub cgpa: f32,
}

/// How the store treats a stored subject line that fails to parse
///
/// Named so that tests can assert the lenient behavior explicitly instead of
/// relying on it incidentally.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum MalformedRecordPolicy {
    /// Substitute [`Subject::fallback`](crate::core::models::Subject::fallback)
    /// for the unparseable line and keep reading.
    #[default]
    SubstituteFallback,
}

/// Storage backend for the student roster and academic records
///
/// Loads are lenient and never fail: a missing user list yields an empty
/// roster, a missing academic file yields an empty [`AcademicRecord`], and
/// malformed stored lines degrade per [`MalformedRecordPolicy`]. Writes are
/// whole-file overwrites with no atomicity guarantee and surface `io::Error`.
pub trait Repository {
    /// Load every registered student, hydrated with their academic record.
    fn load_all(&self) -> Vec<Student>;

    /// Overwrite the user list with the given students.
    ///
    /// # Errors
    /// Returns an error if the user list file cannot be written.
    fn save_all(&self, students: &[Student]) -> io::Result<()>;

    /// Load the academic record stored for a roll number.
    fn load_one(&self, roll: &str) -> AcademicRecord;

    /// Overwrite the academic file for the given student.
    ///
    /// # Errors
    /// Returns an error if the academic file cannot be written.
    fn save_one(&self, student: &Student) -> io::Result<()>;
}
