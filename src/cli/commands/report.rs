//! Report command handler

use gradebook::config::Config;
use gradebook::core::report::{self, MarkdownReporter};
use gradebook::core::roster::Roster;
use gradebook::core::store::FlatFileStore;
use gradebook::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Run the report command for one student.
pub fn run(roll: &str, output: Option<&Path>, config: &Config) {
    if let Err(err) = report_single(roll, output, config) {
        error!("Report generation failed for roll {roll}: {err}");
        eprintln!("{err}");
    }
}

fn report_single(roll: &str, output: Option<&Path>, config: &Config) -> Result<(), String> {
    let store = FlatFileStore::new(&config.paths.data_dir);
    let roster = Roster::open(store);

    let student = roster
        .find_by_roll(roll)
        .ok_or_else(|| format!("✗ No student with roll '{roll}'"))?;

    let final_output_path: PathBuf = if let Some(output) = output {
        MarkdownReporter::new()
            .generate(student, output)
            .map_err(|e| format!("✗ Failed to write report to {}: {e}", output.display()))?;
        output.to_path_buf()
    } else {
        let exports_dir = PathBuf::from(&config.paths.exports_dir);
        fs::create_dir_all(&exports_dir).map_err(|e| {
            format!(
                "✗ Failed to create exports directory {}: {e}",
                exports_dir.display()
            )
        })?;
        report::write_student_report(student, &exports_dir)
            .map_err(|e| format!("✗ Failed to write report: {e}"))?
    };

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Report for {roll} written to: {}", final_output_path.display());
    Ok(())
}
