//! Rank command handler

use gradebook::config::Config;
use gradebook::core::roster::Roster;
use gradebook::core::store::{FlatFileStore, Repository};
use gradebook::verbose;

/// Run the rank command: print the overall ranking table.
pub fn run(config: &Config) {
    let store = FlatFileStore::new(&config.paths.data_dir);
    let roster = Roster::open(store);

    if roster.students().is_empty() {
        println!("No students registered yet.");
        return;
    }

    verbose!(
        "Ranking {} students from {}",
        roster.students().len(),
        config.paths.data_dir
    );

    print_table(&roster);
}

/// Render the ranking table, CGPA to two decimal places.
pub fn print_table<R: Repository>(roster: &Roster<R>) {
    println!("\n--- Overall Ranking by CGPA ---");
    println!("{:<6}{:<12}{:<20}{:<8}", "Rank", "Roll", "Name", "CGPA");
    for entry in roster.rank() {
        println!(
            "{:<6}{:<12}{:<20}{:.2}",
            entry.rank, entry.roll, entry.name, entry.cgpa
        );
    }
}
