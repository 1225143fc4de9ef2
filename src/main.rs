use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wordbase::process_database;

#[derive(Parser)]
#[command(
    name = "wordbase",
    version,
    about = "Reorder a categorized word database alphabetically and audit its tags"
)]
struct Cli {
    /// Database to normalize
    #[arg(default_value = "words-database.json")]
    input: PathBuf,

    /// Where the normalized copy is written
    #[arg(default_value = "new-words-database.json")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match process_database(&cli.input, &cli.output) {
        Ok(report) => {
            if !report.missing_tags.is_empty() {
                let missing: Vec<&str> = report.missing_tags.iter().map(String::as_str).collect();
                eprintln!(
                    "Warning: tags seen before reordering are no longer present: {}",
                    missing.join(", ")
                );
            }
            println!(
                "Successfully processed and saved data to '{}'",
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
