//! Interactive menu session
//!
//! Replicates the classic text-menu flow: a top-level loop for registration,
//! login, and ranking, and a per-session loop for recording semesters,
//! viewing performance, and exporting. All prompts read from stdin; numeric
//! input parses leniently (unparseable input reads as zero).

use gradebook::config::Config;
use gradebook::core::models::{Student, Subject};
use gradebook::core::roster::Roster;
use gradebook::core::store::FlatFileStore;
use gradebook::core::export;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Run the interactive menu session.
pub fn run(config: &Config) {
    println!("=== SGPA & CGPA Management ===");

    let store = FlatFileStore::new(&config.paths.data_dir);
    let mut roster = Roster::open(store);

    loop {
        println!("\n1) Register  2) Login  3) Overall Ranking  4) Exit");
        match prompt("Choose: ").as_str() {
            "1" => register(&mut roster),
            "2" => login(&mut roster, config),
            "3" => super::rank::print_table(&roster),
            "4" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid option."),
        }
    }
}

fn register(roster: &mut Roster<FlatFileStore>) {
    let username = prompt("Choose username (no commas): ");
    let password = prompt("Choose password: ");
    let name = prompt("Student Name (no commas): ");
    let roll = prompt("Roll number (no commas): ");

    match roster.register(&username, &password, &name, &roll) {
        Ok(_) => println!("Registered."),
        Err(err) => println!("✗ {err}"),
    }
}

fn login(roster: &mut Roster<FlatFileStore>, config: &Config) {
    let username = prompt("Username: ");
    let password = prompt("Password: ");

    let idx = match roster.login(&username, &password) {
        Ok(idx) => idx,
        Err(err) => {
            println!("✗ {err}");
            return;
        }
    };

    let student = roster.student(idx);
    println!("Login successful. Welcome {} ({})", student.name, student.roll);

    session(roster, idx, config);
}

/// Post-login loop for one student.
fn session(roster: &mut Roster<FlatFileStore>, idx: usize, config: &Config) {
    loop {
        println!("\n1) Add Semester  2) View Performance  3) Export CSV  4) Logout");
        match prompt("Choose: ").as_str() {
            "1" => add_semester(roster, idx),
            "2" => view_performance(roster.student(idx)),
            "3" => export_csv(roster.student(idx), config),
            "4" => {
                roster.logout(idx);
                break;
            }
            _ => println!("Invalid option."),
        }
    }
}

fn add_semester(roster: &mut Roster<FlatFileStore>, idx: usize) {
    let number: u32 = prompt_parse("Enter semester number: ");
    let subject_count: usize = prompt_parse("Number of subjects: ");

    let mut subjects = Vec::with_capacity(subject_count);
    for i in 0..subject_count {
        let name = prompt(&format!("Subject {} name (no '|'): ", i + 1));
        let credits: u32 = prompt_parse("Credits: ");
        let grade_point: f32 = prompt_parse("Grade point (0-10): ");
        subjects.push(Subject::new(name, credits, grade_point));
    }

    let (sgpa, cgpa) = roster.add_semester(idx, number, subjects);
    println!("Saved. SGPA: {sgpa:.4}  CGPA: {cgpa:.4}");
}

fn view_performance(student: &Student) {
    println!("\n--- Performance for {} ({}) ---", student.name, student.roll);
    for semester in &student.semesters {
        println!("Semester {}  SGPA: {:.4}", semester.number, semester.sgpa);
        for subject in &semester.subjects {
            println!(
                "  {} | Credits: {} | GP: {}",
                subject.name, subject.credits, subject.grade_point
            );
        }
    }
    println!("CGPA: {:.4}", student.cgpa);
}

fn export_csv(student: &Student, config: &Config) {
    let exports_dir = PathBuf::from(&config.paths.exports_dir);
    if let Err(e) = fs::create_dir_all(&exports_dir) {
        println!(
            "✗ Failed to create exports directory {}: {e}",
            exports_dir.display()
        );
        return;
    }

    match export::export_student_csv(student, &exports_dir) {
        Ok(path) => println!("✓ Exported CSV to: {}", path.display()),
        Err(e) => println!("✗ Failed to export CSV: {e}"),
    }
}

/// Print a label and read one trimmed line from stdin.
fn prompt(label: &str) -> String {
    print!("{label}");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    response.trim().to_string()
}

/// Prompt and parse; unparseable input reads as the type's zero value.
fn prompt_parse<T: FromStr + Default>(label: &str) -> T {
    prompt(label).parse().unwrap_or_default()
}
