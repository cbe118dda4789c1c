//! `horaire` CLI — plan conflict-free course schedules from a catalog file.
//!
//! ## Usage
//!
//! ```sh
//! # All complete, conflict-free schedules for two courses
//! horaire plan -c catalog.json -t automne2025 --courses MAT1000,INF1120
//!
//! # Include partial schedules (fewer sections than requested courses)
//! horaire plan -c catalog.json -t automne2025 --courses MAT1000,INF1120 --min 0
//!
//! # Bound the search on big catalogs; output carries "truncated": true
//! horaire plan -c catalog.json -t automne2025 --courses MAT1000 --budget 10000
//!
//! # Write the plan to a file instead of stdout
//! horaire plan -c catalog.json -t automne2025 --courses MAT1000 -o plans.json
//!
//! # Every meeting row of one section
//! horaire details -c catalog.json -s MAT1000-automne2025-A
//!
//! # Course codes available in a term
//! horaire courses -c catalog.json -t automne2025
//! ```
//!
//! Results go to stdout as JSON; diagnostics go to stderr, so output stays
//! pipeable.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use horaire_catalog::{
    course_codes, filter_by_courses, load_catalog, section_details, sections_for_term,
    MeetingRecord,
};
use horaire_engine::{find_schedules_budgeted, Combination};

#[derive(Parser)]
#[command(
    name = "horaire",
    version,
    about = "Conflict-free course timetable planner"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find conflict-free section combinations for the requested courses
    Plan {
        /// Catalog file (JSON array of meeting records)
        #[arg(short, long)]
        catalog: String,
        /// Term to plan in, e.g. "automne2025"
        #[arg(short, long)]
        term: String,
        /// Comma-separated course codes to combine
        #[arg(long, value_delimiter = ',', required = true)]
        courses: Vec<String>,
        /// Keep only combinations with at least this many sections
        /// (defaults to the number of requested courses)
        #[arg(long)]
        min: Option<usize>,
        /// Cap on visited search nodes; output is flagged truncated when hit
        #[arg(long)]
        budget: Option<usize>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show every meeting row of one section
    Details {
        /// Catalog file (JSON array of meeting records)
        #[arg(short, long)]
        catalog: String,
        /// Full section identifier, e.g. "MAT1000-automne2025-A"
        #[arg(short, long)]
        section: String,
    },
    /// List the course codes present in the catalog
    Courses {
        /// Catalog file (JSON array of meeting records)
        #[arg(short, long)]
        catalog: String,
        /// Restrict the listing to one term
        #[arg(short, long)]
        term: Option<String>,
    },
}

/// JSON document the `plan` subcommand emits. Each combination serializes
/// as its sorted identifier array.
#[derive(Serialize)]
struct PlanOutput {
    schedules: Vec<Combination>,
    truncated: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            catalog,
            term,
            courses,
            min,
            budget,
            output,
        } => {
            let codes: Vec<String> = courses
                .iter()
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty())
                .collect();
            if codes.is_empty() {
                anyhow::bail!("at least one course code is required");
            }

            let records = load_records(&catalog)?;
            let pool = filter_by_courses(&sections_for_term(&records, &term), &codes);
            let outcome = find_schedules_budgeted(&pool, budget);
            let truncated = outcome.truncated;

            if truncated {
                eprintln!("warning: search budget exhausted; the schedule list is incomplete");
            }

            let min_sections = min.unwrap_or(codes.len());
            let schedules: Vec<Combination> = outcome
                .combinations
                .into_iter()
                .filter(|combo| combo.len() >= min_sections)
                .collect();

            let report = PlanOutput {
                schedules,
                truncated,
            };
            write_output(output.as_deref(), &serde_json::to_string_pretty(&report)?)?;
        }
        Commands::Details { catalog, section } => {
            let records = load_records(&catalog)?;
            let rows = section_details(&records, &section);
            if rows.is_empty() {
                anyhow::bail!("no section named '{}' in the catalog", section);
            }
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Commands::Courses { catalog, term } => {
            let records = load_records(&catalog)?;
            let codes = course_codes(&records, term.as_deref());
            println!("{}", serde_json::to_string_pretty(&codes)?);
        }
    }

    Ok(())
}

/// Route diagnostics to stderr so stdout carries nothing but results.
///
/// `RUST_LOG` selects the level; engine warnings (e.g. unparseable clock
/// text) surface at the default `warn`.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_records(path: &str) -> Result<Vec<MeetingRecord>> {
    load_catalog(path).with_context(|| format!("failed to load catalog {}", path))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
