//! Markdown performance report generator
//!
//! Renders a student's full record as a Markdown document: one table per
//! semester plus the derived SGPA/CGPA values. These reports render well in
//! GitHub, GitLab, and VS Code.

use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::Student;

/// Embedded Markdown report template
const REPORT_TEMPLATE: &str = include_str!("templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(student: &Student) -> String {
        let mut output = REPORT_TEMPLATE.to_string();

        output = output.replace("{{name}}", &student.name);
        output = output.replace("{{roll}}", &student.roll);
        output = output.replace("{{semester_count}}", &student.semesters.len().to_string());
        output = output.replace("{{cgpa}}", &format!("{:.4}", student.cgpa));
        output = output.replace(
            "{{semester_sections}}",
            &Self::generate_semester_sections(student),
        );

        output
    }

    /// Generate the per-semester subject tables
    fn generate_semester_sections(student: &Student) -> String {
        let mut sections = String::new();

        for semester in &student.semesters {
            let _ = writeln!(sections, "## Semester {}\n", semester.number);
            sections.push_str("| Subject | Credits | Grade Point |\n");
            sections.push_str("|---|---|---|\n");

            for subject in &semester.subjects {
                let _ = writeln!(
                    sections,
                    "| {} | {} | {:.2} |",
                    subject.name, subject.credits, subject.grade_point
                );
            }

            let _ = writeln!(
                sections,
                "\n**SGPA:** {:.4} ({} credits)\n",
                semester.sgpa,
                semester.total_credits()
            );
        }

        sections
    }

    /// Generate the report and write it to `output_path`.
    ///
    /// # Errors
    /// Returns an error if the output file cannot be written.
    pub fn generate(&self, student: &Student, output_path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(output_path, Self::render_template(student))?;
        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the report to `report_<roll>.md` under `dir`, returning the path.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_student_report(student: &Student, dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(format!("report_{}.md", student.roll));
    MarkdownReporter::new().generate(student, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gpa;
    use crate::core::models::{Semester, Subject};
    use tempfile::TempDir;

    fn sample_student() -> Student {
        let mut student = Student::new(
            "asha".to_string(),
            "pw".to_string(),
            "Asha Rao".to_string(),
            "21CS042".to_string(),
        );
        let mut semester = Semester::new(
            1,
            vec![
                Subject::new("Math".to_string(), 4, 8.0),
                Subject::new("Phys".to_string(), 3, 7.0),
            ],
        );
        semester.sgpa = gpa::sgpa(&semester.subjects);
        student.semesters = vec![semester];
        student.cgpa = gpa::cgpa(&student.semesters);
        student
    }

    #[test]
    fn test_report_substitutes_placeholders() {
        let rendered = MarkdownReporter::render_template(&sample_student());

        assert!(rendered.contains("**Student:** Asha Rao"));
        assert!(rendered.contains("**Roll:** 21CS042"));
        assert!(rendered.contains("## Semester 1"));
        assert!(rendered.contains("| Math | 4 | 8.00 |"));
        assert!(rendered.contains("**SGPA:** 7.5714 (7 credits)"));
        assert!(rendered.contains("**CGPA:** 7.5714"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_report_written_to_roll_named_file() {
        let dir = TempDir::new().expect("create temp dir");
        let path = write_student_report(&sample_student(), dir.path()).expect("write report");

        assert_eq!(path.file_name().unwrap(), "report_21CS042.md");
        assert!(path.exists());
    }
}
