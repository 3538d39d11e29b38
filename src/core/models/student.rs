//! Student model

use serde::{Deserialize, Serialize};

use super::Semester;

/// Represents a registered student and their academic record
///
/// The username is the key checked for uniqueness at registration; the roll
/// number is the key the academic file is named after. Two students sharing a
/// roll silently share an academic file (last writer wins) - the store does
/// not detect this. The password is stored and compared in plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Login username (must not contain `,`)
    pub username: String,

    /// Login password, plain text
    pub password: String,

    /// Display name (must not contain `,`)
    pub name: String,

    /// Roll number; names the per-student academic file (must not contain `,`)
    pub roll: String,

    /// Semesters in the order they were added
    pub semesters: Vec<Semester>,

    /// Derived cumulative grade point average
    pub cgpa: f32,
}

impl Student {
    /// Create a newly registered student with no semesters and a zeroed CGPA
    #[must_use]
    pub const fn new(username: String, password: String, name: String, roll: String) -> Self {
        Self {
            username,
            password,
            name,
            roll,
            semesters: Vec::new(),
            cgpa: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let student = Student::new(
            "asha".to_string(),
            "secret".to_string(),
            "Asha Rao".to_string(),
            "21CS042".to_string(),
        );

        assert_eq!(student.username, "asha");
        assert_eq!(student.roll, "21CS042");
        assert!(student.semesters.is_empty());
        assert!(student.cgpa.abs() < f32::EPSILON);
    }
}
