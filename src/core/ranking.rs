//! Overall ranking view
//!
//! A pure read over the roster: CGPAs are reloaded fresh from each student's
//! persisted academic record, never taken from the in-memory models, and
//! nothing is written back.

use std::cmp::Ordering;

use crate::core::models::Student;
use crate::core::store::Repository;

/// One row of the overall ranking table
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    /// 1-based rank position
    pub rank: usize,
    /// Student roll number
    pub roll: String,
    /// Student display name
    pub name: String,
    /// CGPA as persisted in the academic file
    pub cgpa: f32,
}

/// Rank students by persisted CGPA, descending.
///
/// Each student's CGPA is reloaded from their academic file; a student with
/// no file ranks with a CGPA of `0.0`. The sort is stable, so students with
/// equal CGPA keep their relative store order.
#[must_use]
pub fn rank<R: Repository>(store: &R, students: &[Student]) -> Vec<RankEntry> {
    let mut rows: Vec<(String, String, f32)> = students
        .iter()
        .map(|s| (s.roll.clone(), s.name.clone(), store.load_one(&s.roll).cgpa))
        .collect();

    rows.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

    rows.into_iter()
        .enumerate()
        .map(|(i, (roll, name, cgpa))| RankEntry {
            rank: i + 1,
            roll,
            name,
            cgpa,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::AcademicRecord;
    use std::collections::HashMap;
    use std::io;

    /// In-memory repository stub; only `load_one` matters for ranking.
    struct MemoryStore {
        records: HashMap<String, AcademicRecord>,
    }

    impl MemoryStore {
        fn with_cgpas(pairs: &[(&str, f32)]) -> Self {
            let records = pairs
                .iter()
                .map(|(roll, cgpa)| {
                    (
                        (*roll).to_string(),
                        AcademicRecord {
                            semesters: Vec::new(),
                            cgpa: *cgpa,
                        },
                    )
                })
                .collect();
            Self { records }
        }
    }

    impl Repository for MemoryStore {
        fn load_all(&self) -> Vec<Student> {
            Vec::new()
        }

        fn save_all(&self, _students: &[Student]) -> io::Result<()> {
            Ok(())
        }

        fn load_one(&self, roll: &str) -> AcademicRecord {
            self.records.get(roll).cloned().unwrap_or_default()
        }

        fn save_one(&self, _student: &Student) -> io::Result<()> {
            Ok(())
        }
    }

    fn student(username: &str, name: &str, roll: &str) -> Student {
        Student::new(
            username.to_string(),
            "pw".to_string(),
            name.to_string(),
            roll.to_string(),
        )
    }

    #[test]
    fn test_rank_orders_by_cgpa_descending() {
        let store = MemoryStore::with_cgpas(&[("r1", 7.2), ("r2", 9.1), ("r3", 8.0)]);
        let students = vec![
            student("a", "A", "r1"),
            student("b", "B", "r2"),
            student("c", "C", "r3"),
        ];

        let ranking = rank(&store, &students);

        let rolls: Vec<&str> = ranking.iter().map(|e| e.roll.as_str()).collect();
        assert_eq!(rolls, vec!["r2", "r3", "r1"]);
        assert_eq!(ranking[0].rank, 1);
        assert_eq!(ranking[2].rank, 3);
    }

    #[test]
    fn test_rank_ties_keep_store_order() {
        let store = MemoryStore::with_cgpas(&[("r1", 8.0), ("r2", 8.0), ("r3", 8.0)]);
        let students = vec![
            student("a", "A", "r1"),
            student("b", "B", "r2"),
            student("c", "C", "r3"),
        ];

        let ranking = rank(&store, &students);

        let rolls: Vec<&str> = ranking.iter().map(|e| e.roll.as_str()).collect();
        assert_eq!(rolls, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_rank_missing_record_counts_as_zero() {
        let store = MemoryStore::with_cgpas(&[("r1", 6.5)]);
        let students = vec![student("a", "A", "r-missing"), student("b", "B", "r1")];

        let ranking = rank(&store, &students);

        assert_eq!(ranking[0].roll, "r1");
        assert_eq!(ranking[1].roll, "r-missing");
        assert!(ranking[1].cgpa.abs() < f32::EPSILON);
    }

    #[test]
    fn test_rank_ignores_in_memory_cgpa() {
        let store = MemoryStore::with_cgpas(&[("r1", 9.0), ("r2", 5.0)]);
        let mut stale = student("a", "A", "r1");
        stale.cgpa = 1.0; // persisted value must win
        let students = vec![stale, student("b", "B", "r2")];

        let ranking = rank(&store, &students);

        assert_eq!(ranking[0].roll, "r1");
        assert_eq!(format!("{:.1}", ranking[0].cgpa), "9.0");
    }
}
