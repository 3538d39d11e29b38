//! Semester model

use serde::{Deserialize, Serialize};

use super::Subject;

/// Represents one semester of a student's record
///
/// The semester number is caller-supplied and not checked for uniqueness or
/// ordering. Subjects keep their insertion order; that order is also the
/// storage order. The `sgpa` field is derived and must be recomputed whenever
/// the subject list changes (see [`crate::core::gpa::sgpa`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester number as entered by the student
    pub number: u32,

    /// Subjects taken this semester, in insertion order
    pub subjects: Vec<Subject>,

    /// Derived semester grade point average
    pub sgpa: f32,
}

impl Semester {
    /// Create a new semester with a zeroed SGPA
    ///
    /// # Arguments
    /// * `number` - Semester number
    /// * `subjects` - Subjects taken this semester
    #[must_use]
    pub const fn new(number: u32, subjects: Vec<Subject>) -> Self {
        Self {
            number,
            subjects,
            sgpa: 0.0,
        }
    }

    /// Total credits carried by this semester's subjects
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.subjects.iter().map(|s| s.credits).sum()
    }
}
