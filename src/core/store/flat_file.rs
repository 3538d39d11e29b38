//! Flat-file storage backend
//!
//! Owns the two on-disk formats:
//!
//! - the user list `students.txt`, one `username,password,name,roll` line per
//!   student with no escaping;
//! - per-student academic files `student_<roll>.txt`, a line-oriented mix of
//!   counts, subject records (`name|credits|gradePoint`), and derived values.
//!
//! Reads are deliberately lenient: short user lines are skipped, unparseable
//! numbers read as zero, and malformed subject lines are substituted per
//! [`MalformedRecordPolicy`]. Fields containing the delimiters corrupt
//! parsing silently; that is a known limitation of the format.

use std::fs;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::models::{Semester, Student, Subject};
use crate::core::store::{AcademicRecord, MalformedRecordPolicy, Repository};

/// File name of the user list inside the data directory
const USERS_FILE: &str = "students.txt";

/// Flat-file [`Repository`] rooted at a data directory
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    data_dir: PathBuf,
    on_malformed: MalformedRecordPolicy,
}

impl FlatFileStore {
    /// Create a store rooted at `data_dir` with the default malformed-record
    /// policy.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_policy(data_dir, MalformedRecordPolicy::default())
    }

    /// Create a store with an explicit malformed-record policy.
    pub fn with_policy(data_dir: impl Into<PathBuf>, on_malformed: MalformedRecordPolicy) -> Self {
        Self {
            data_dir: data_dir.into(),
            on_malformed,
        }
    }

    /// The directory this store reads and writes under
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The policy applied to unparseable stored subject lines
    #[must_use]
    pub const fn malformed_record_policy(&self) -> MalformedRecordPolicy {
        self.on_malformed
    }

    /// Path of the user list file
    #[must_use]
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    /// Path of the academic file for a roll number
    #[must_use]
    pub fn academic_path(&self, roll: &str) -> PathBuf {
        self.data_dir.join(format!("student_{roll}.txt"))
    }

    /// Parse one stored subject line.
    ///
    /// A valid line splits into exactly three `|`-delimited parts with
    /// numeric credits and grade point. Anything else degrades per the
    /// store's policy.
    fn parse_subject_line(&self, line: Option<&str>) -> Subject {
        let substitute = |policy: MalformedRecordPolicy| match policy {
            MalformedRecordPolicy::SubstituteFallback => Subject::fallback(),
        };

        let Some(line) = line else {
            return substitute(self.on_malformed);
        };

        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != 3 {
            return substitute(self.on_malformed);
        }

        let (Ok(credits), Ok(grade_point)) =
            (parts[1].trim().parse::<u32>(), parts[2].trim().parse::<f32>())
        else {
            return substitute(self.on_malformed);
        };

        Subject::new(parts[0].to_string(), credits, grade_point)
    }
}

/// Parse a numeric line leniently; missing or unparseable input reads as the
/// type's zero value.
fn parse_num<T: FromStr + Default>(line: Option<&str>) -> T {
    line.and_then(|l| l.trim().parse().ok()).unwrap_or_default()
}

impl Repository for FlatFileStore {
    fn load_all(&self) -> Vec<Student> {
        let Ok(content) = fs::read_to_string(self.users_path()) else {
            // No user list yet: an empty roster, not an error.
            return Vec::new();
        };

        let mut students = Vec::new();
        for line in content.lines() {
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < 4 {
                crate::debug!("Skipping short user line: {line}");
                continue;
            }

            let mut student = Student::new(
                fields[0].to_string(),
                fields[1].to_string(),
                fields[2].to_string(),
                fields[3].to_string(),
            );

            let record = self.load_one(&student.roll);
            student.semesters = record.semesters;
            student.cgpa = record.cgpa;
            students.push(student);
        }

        students
    }

    fn save_all(&self, students: &[Student]) -> io::Result<()> {
        let mut file = File::create(self.users_path())?;
        for student in students {
            writeln!(
                file,
                "{},{},{},{}",
                student.username, student.password, student.name, student.roll
            )?;
        }
        Ok(())
    }

    fn load_one(&self, roll: &str) -> AcademicRecord {
        let Ok(content) = fs::read_to_string(self.academic_path(roll)) else {
            // No academic file: the defined state for a new student.
            return AcademicRecord::default();
        };

        let mut lines = content.lines();
        let semester_count: usize = parse_num(lines.next());

        let mut semesters = Vec::new();
        for _ in 0..semester_count {
            let number: u32 = parse_num(lines.next());
            let subject_count: usize = parse_num(lines.next());

            let mut subjects = Vec::new();
            for _ in 0..subject_count {
                subjects.push(self.parse_subject_line(lines.next()));
            }

            let mut semester = Semester::new(number, subjects);
            semester.sgpa = parse_num(lines.next());
            semesters.push(semester);
        }

        let cgpa: f32 = parse_num(lines.next());
        AcademicRecord { semesters, cgpa }
    }

    fn save_one(&self, student: &Student) -> io::Result<()> {
        let mut file = File::create(self.academic_path(&student.roll))?;

        writeln!(file, "{}", student.semesters.len())?;
        for semester in &student.semesters {
            writeln!(file, "{}", semester.number)?;
            writeln!(file, "{}", semester.subjects.len())?;
            for subject in &semester.subjects {
                writeln!(
                    file,
                    "{}|{}|{:.2}",
                    subject.name, subject.credits, subject.grade_point
                )?;
            }
            writeln!(file, "{:.4}", semester.sgpa)?;
        }
        writeln!(file, "{:.4}", student.cgpa)?;

        Ok(())
    }
}
