//! CSV export for a student's academic record

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::models::Student;

/// Column header of the export file
const CSV_HEADER: &str = "Roll,Name,Semester,Subject,Credits,GradePoint,SGPA,CGPA";

/// Export one student's record as CSV, one row per subject across all
/// semesters.
///
/// Subject names are double-quoted; the other fields are written raw and must
/// not contain the delimiter. The SGPA and CGPA columns are populated only on
/// each semester's first subject row and left blank on the rest, so the
/// derived values appear once per semester.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn export_csv(student: &Student, output_path: &Path) -> io::Result<()> {
    let mut file = File::create(output_path)?;
    writeln!(file, "{CSV_HEADER}")?;

    for semester in &student.semesters {
        for (i, subject) in semester.subjects.iter().enumerate() {
            write!(
                file,
                "{},{},{},\"{}\",{},{}",
                student.roll,
                student.name,
                semester.number,
                subject.name,
                subject.credits,
                subject.grade_point
            )?;
            if i == 0 {
                write!(file, ",{:.4},{:.4}", semester.sgpa, student.cgpa)?;
            }
            writeln!(file)?;
        }
    }

    Ok(())
}

/// Export to `export_<roll>.csv` under `dir`, returning the path written.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn export_student_csv(student: &Student, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(format!("export_{}.csv", student.roll));
    export_csv(student, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gpa;
    use crate::core::models::{Semester, Subject};
    use std::fs;
    use tempfile::TempDir;

    fn sample_student() -> Student {
        let mut student = Student::new(
            "asha".to_string(),
            "pw".to_string(),
            "Asha Rao".to_string(),
            "21CS042".to_string(),
        );

        let mut first = Semester::new(
            1,
            vec![
                Subject::new("Math".to_string(), 4, 8.0),
                Subject::new("Phys".to_string(), 3, 7.0),
            ],
        );
        first.sgpa = gpa::sgpa(&first.subjects);

        let mut second = Semester::new(2, vec![Subject::new("Chem".to_string(), 5, 8.0)]);
        second.sgpa = gpa::sgpa(&second.subjects);

        student.semesters = vec![first, second];
        student.cgpa = gpa::cgpa(&student.semesters);
        student
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = TempDir::new().expect("create temp dir");
        let path = export_student_csv(&sample_student(), dir.path()).expect("export");

        assert_eq!(path.file_name().unwrap(), "export_21CS042.csv");

        let contents = fs::read_to_string(path).expect("read export");
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        // one row per subject across both semesters
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_derived_columns_only_on_first_subject_row() {
        let dir = TempDir::new().expect("create temp dir");
        let path = export_student_csv(&sample_student(), dir.path()).expect("export");
        let contents = fs::read_to_string(path).expect("read export");
        let lines: Vec<&str> = contents.lines().collect();

        // First subject of semester 1 carries SGPA and CGPA (8 columns).
        assert_eq!(lines[1].split(',').count(), 8);
        assert!(lines[1].starts_with("21CS042,Asha Rao,1,\"Math\",4,8"));
        assert!(lines[1].ends_with(",7.5714,7.7500"));

        // Second subject of the same semester leaves them blank (6 columns).
        assert_eq!(lines[2].split(',').count(), 6);
        assert!(lines[2].contains("\"Phys\""));

        // First subject of semester 2 carries them again.
        assert!(lines[3].ends_with(",8.0000,7.7500"));
    }

    #[test]
    fn test_export_empty_record_is_header_only() {
        let dir = TempDir::new().expect("create temp dir");
        let student = Student::new(
            "new".to_string(),
            "pw".to_string(),
            "New".to_string(),
            "R0".to_string(),
        );

        let path = export_student_csv(&student, dir.path()).expect("export");
        let contents = fs::read_to_string(path).expect("read export");

        assert_eq!(contents.trim_end(), CSV_HEADER);
    }
}
