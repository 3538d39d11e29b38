//! Subject model

use serde::{Deserialize, Serialize};

/// Represents a single subject taken within a semester
///
/// Subjects have no identity of their own beyond their position inside the
/// owning semester, and are immutable once the semester is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name (free text; must not contain `|`)
    pub name: String,

    /// Credit weight (non-negative)
    pub credits: u32,

    /// Grade point earned (conventionally 0-10, not validated)
    pub grade_point: f32,
}

impl Subject {
    /// Create a new subject
    ///
    /// # Arguments
    /// * `name` - Subject name
    /// * `credits` - Credit weight
    /// * `grade_point` - Grade point earned
    #[must_use]
    pub const fn new(name: String, credits: u32, grade_point: f32) -> Self {
        Self {
            name,
            credits,
            grade_point,
        }
    }

    /// The substitute recorded in place of a stored subject line that cannot
    /// be parsed: name `"SUB"`, zero credits, zero grade point.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new("SUB".to_string(), 0, 0.0)
    }

    /// Credit-weighted grade points contributed by this subject
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn quality_points(&self) -> f32 {
        self.credits as f32 * self.grade_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_creation() {
        let subject = Subject::new("Data Structures".to_string(), 4, 8.5);

        assert_eq!(subject.name, "Data Structures");
        assert_eq!(subject.credits, 4);
        assert!((subject.grade_point - 8.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_quality_points() {
        let subject = Subject::new("Math".to_string(), 4, 8.0);
        assert!((subject.quality_points() - 32.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_credit_subject_contributes_nothing() {
        let subject = Subject::new("Seminar".to_string(), 0, 9.0);
        assert!(subject.quality_points().abs() < f32::EPSILON);
    }

    #[test]
    fn test_fallback_subject() {
        let subject = Subject::fallback();

        assert_eq!(subject.name, "SUB");
        assert_eq!(subject.credits, 0);
        assert!(subject.grade_point.abs() < f32::EPSILON);
    }
}
