//! Roster service: registration, login, and record mutation
//!
//! Owns the in-memory student list on top of a [`Repository`]. Mutating
//! operations recompute the derived SGPA/CGPA eagerly and persist before
//! returning. Persistence failures inside these flows are logged and do not
//! abort; the anticipated failure paths all degrade rather than raising.

use thiserror::Error;

use crate::core::gpa;
use crate::core::models::{Semester, Student, Subject};
use crate::core::ranking::{self, RankEntry};
use crate::core::store::Repository;

/// Errors surfaced to the shell from roster operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// Registration rejected: the username is already taken. The roster is
    /// left unchanged.
    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),

    /// Login rejected: unknown username or wrong password.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// In-memory roster backed by a storage repository
pub struct Roster<R: Repository> {
    store: R,
    students: Vec<Student>,
}

impl<R: Repository> Roster<R> {
    /// Open the roster, loading every student from the store.
    pub fn open(store: R) -> Self {
        let students = store.load_all();
        Self { store, students }
    }

    /// All registered students, in store order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The student at `idx`
    ///
    /// # Panics
    /// Panics if `idx` is not an index previously returned by [`login`](Self::login).
    #[must_use]
    pub fn student(&self, idx: usize) -> &Student {
        &self.students[idx]
    }

    /// Find a student by roll number.
    #[must_use]
    pub fn find_by_roll(&self, roll: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.roll == roll)
    }

    fn find_index(&self, username: &str) -> Option<usize> {
        self.students.iter().position(|s| s.username == username)
    }

    /// Register a new student.
    ///
    /// Uniqueness is enforced for the username only, against the in-memory
    /// list. On success the user list and an empty academic file are
    /// persisted immediately.
    ///
    /// # Errors
    /// Returns [`RosterError::DuplicateUsername`] if the username is taken;
    /// the roster and the store are left unchanged.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        name: &str,
        roll: &str,
    ) -> Result<&Student, RosterError> {
        if self.find_index(username).is_some() {
            return Err(RosterError::DuplicateUsername(username.to_string()));
        }

        let student = Student::new(
            username.to_string(),
            password.to_string(),
            name.to_string(),
            roll.to_string(),
        );
        self.students.push(student);

        let idx = self.students.len() - 1;
        self.persist_user_list();
        self.persist_academic(idx);

        Ok(&self.students[idx])
    }

    /// Log a student in by plain-text credential comparison.
    ///
    /// On success the student's academic record is re-hydrated from the store
    /// and the student's index is returned for use with the other operations.
    ///
    /// # Errors
    /// Returns [`RosterError::InvalidCredentials`] on an unknown username or
    /// a password mismatch.
    pub fn login(&mut self, username: &str, password: &str) -> Result<usize, RosterError> {
        let idx = self
            .find_index(username)
            .ok_or(RosterError::InvalidCredentials)?;
        if self.students[idx].password != password {
            return Err(RosterError::InvalidCredentials);
        }

        let record = self.store.load_one(&self.students[idx].roll);
        self.students[idx].semesters = record.semesters;
        self.students[idx].cgpa = record.cgpa;

        crate::info!("Login: {username}");
        Ok(idx)
    }

    /// Append a semester to the student at `idx`.
    ///
    /// The semester's SGPA and the student's CGPA are recomputed eagerly and
    /// the academic file is persisted. Semesters are append-only; subjects
    /// are immutable once recorded. Returns the freshly computed
    /// `(sgpa, cgpa)` pair for display.
    ///
    /// # Panics
    /// Panics if `idx` is not an index previously returned by [`login`](Self::login).
    pub fn add_semester(&mut self, idx: usize, number: u32, subjects: Vec<Subject>) -> (f32, f32) {
        let mut semester = Semester::new(number, subjects);
        semester.sgpa = gpa::sgpa(&semester.subjects);
        let sgpa = semester.sgpa;

        let student = &mut self.students[idx];
        student.semesters.push(semester);
        student.cgpa = gpa::cgpa(&student.semesters);
        let cgpa = student.cgpa;

        self.persist_academic(idx);
        (sgpa, cgpa)
    }

    /// End a session for the student at `idx`, persisting the user list and
    /// the student's academic file.
    ///
    /// # Panics
    /// Panics if `idx` is not an index previously returned by [`login`](Self::login).
    pub fn logout(&mut self, idx: usize) {
        self.persist_user_list();
        self.persist_academic(idx);
        crate::info!("Logout: {}", self.students[idx].username);
    }

    /// Overall ranking of the roster by persisted CGPA, descending.
    #[must_use]
    pub fn rank(&self) -> Vec<RankEntry> {
        ranking::rank(&self.store, &self.students)
    }

    fn persist_user_list(&self) {
        if let Err(e) = self.store.save_all(&self.students) {
            crate::warn!("Failed to save user list: {e}");
        }
    }

    fn persist_academic(&self, idx: usize) {
        let student = &self.students[idx];
        if let Err(e) = self.store.save_one(student) {
            crate::warn!("Failed to save academic file for {}: {e}", student.roll);
        }
    }
}
