//! SGPA and CGPA calculation
//!
//! Pure functions over the data models; no I/O and no stored state. Results
//! are recomputed eagerly after every structural change and persisted by the
//! caller - the calculator never reads back its own prior output.

use crate::core::models::{Semester, Subject};

/// Compute the semester grade point average for a set of subjects.
///
/// The SGPA is the credit-weighted mean of the subjects' grade points:
/// `sum(credits_i * grade_point_i) / sum(credits_i)`.
///
/// When the total credits are zero the result is defined as `0.0` rather than
/// an error.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sgpa(subjects: &[Subject]) -> f32 {
    let total_credits: u32 = subjects.iter().map(|s| s.credits).sum();
    if total_credits == 0 {
        return 0.0;
    }

    let total_points: f32 = subjects.iter().map(Subject::quality_points).sum();
    total_points / total_credits as f32
}

/// Compute the cumulative grade point average for a set of semesters.
///
/// The CGPA is the credit-weighted mean of each semester's stored SGPA:
/// `sum(sgpa_k * credits_k) / sum(credits_k)` where `credits_k` is the
/// semester's total credits. The stored SGPA is trusted as-is; it is not
/// rederived from the subjects here.
///
/// When the total credits are zero the result is defined as `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cgpa(semesters: &[Semester]) -> f32 {
    let total_credits: u32 = semesters.iter().map(Semester::total_credits).sum();
    if total_credits == 0 {
        return 0.0;
    }

    let weighted: f32 = semesters
        .iter()
        .map(|sem| sem.total_credits() as f32 * sem.sgpa)
        .sum();
    weighted / total_credits as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_subjects() -> Vec<Subject> {
        vec![
            Subject::new("Math".to_string(), 4, 8.0),
            Subject::new("Phys".to_string(), 3, 7.0),
        ]
    }

    #[test]
    fn test_sgpa_weighted_mean() {
        // (4*8 + 3*7) / 7 = 53/7
        let value = sgpa(&sample_subjects());
        assert_eq!(format!("{value:.4}"), "7.5714");
    }

    #[test]
    fn test_sgpa_zero_credits_is_zero() {
        let subjects = vec![Subject::new("Seminar".to_string(), 0, 9.0)];
        assert!(sgpa(&subjects).abs() < f32::EPSILON);
        assert!(sgpa(&[]).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cgpa_weighted_by_semester_credits() {
        let mut first = Semester::new(1, sample_subjects());
        first.sgpa = sgpa(&first.subjects);

        let mut second = Semester::new(
            2,
            vec![
                Subject::new("Chem".to_string(), 2, 8.0),
                Subject::new("Prog".to_string(), 3, 8.0),
            ],
        );
        second.sgpa = sgpa(&second.subjects);

        // (7.5714.. * 7 + 8.0 * 5) / 12 = (53 + 40) / 12
        let value = cgpa(&[first, second]);
        assert_eq!(format!("{value:.4}"), "7.7500");
    }

    #[test]
    fn test_cgpa_trusts_stored_sgpa() {
        // The stored SGPA is used even when it disagrees with the subjects.
        let mut semester = Semester::new(1, vec![Subject::new("Math".to_string(), 4, 8.0)]);
        semester.sgpa = 5.0;

        let value = cgpa(std::slice::from_ref(&semester));
        assert_eq!(format!("{value:.4}"), "5.0000");
    }

    #[test]
    fn test_cgpa_zero_credits_is_zero() {
        assert!(cgpa(&[]).abs() < f32::EPSILON);

        let empty = Semester::new(1, Vec::new());
        assert!(cgpa(&[empty]).abs() < f32::EPSILON);
    }
}
