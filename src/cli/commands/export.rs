//! Export command handler

use gradebook::config::Config;
use gradebook::core::export;
use gradebook::core::roster::Roster;
use gradebook::core::store::FlatFileStore;
use gradebook::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Run the export command for one student.
pub fn run(roll: &str, output: Option<&Path>, config: &Config) {
    if let Err(err) = export_single(roll, output, config) {
        error!("CSV export failed for roll {roll}: {err}");
        eprintln!("{err}");
    }
}

fn export_single(roll: &str, output: Option<&Path>, config: &Config) -> Result<(), String> {
    let store = FlatFileStore::new(&config.paths.data_dir);
    let roster = Roster::open(store);

    let student = roster
        .find_by_roll(roll)
        .ok_or_else(|| format!("✗ No student with roll '{roll}'"))?;

    let final_output_path: PathBuf = if let Some(output) = output {
        export::export_csv(student, output)
            .map_err(|e| format!("✗ Failed to export CSV to {}: {e}", output.display()))?;
        output.to_path_buf()
    } else {
        let exports_dir = PathBuf::from(&config.paths.exports_dir);
        fs::create_dir_all(&exports_dir).map_err(|e| {
            format!(
                "✗ Failed to create exports directory {}: {e}",
                exports_dir.display()
            )
        })?;
        export::export_student_csv(student, &exports_dir)
            .map_err(|e| format!("✗ Failed to export CSV: {e}"))?
    };

    println!("✓ Exported CSV to: {}", final_output_path.display());
    info!("Exported record for {roll} to: {}", final_output_path.display());
    Ok(())
}
