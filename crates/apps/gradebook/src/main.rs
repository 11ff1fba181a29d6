use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use compute::{Stats, class_statistics, student_statistics};
use formats::{GradeFile, export_roster, load_roster};
use roster::{SortKey, SortOrder};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gradebook",
    about = "Sorted student roster with descriptive statistics"
)]
struct Cli {
    /// Grade file to read.
    #[arg(long, default_value = "input_list.txt")]
    input: PathBuf,

    /// Name field that orders the roster.
    #[arg(long, value_enum, default_value_t = KeyArg::Family)]
    key: KeyArg,

    /// Direction of the ordering.
    #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
    order: OrderArg,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the ordered roster back out (the default command).
    Write {
        #[arg(long, default_value = "output_list.txt")]
        output: PathBuf,
    },
    /// Descriptive statistics over one student's assignments.
    Student {
        given: String,
        family: String,
        #[arg(long)]
        json: bool,
    },
    /// Descriptive statistics for one assignment across the class.
    Class {
        assignment: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the ordered roster as pretty JSON.
    ExportJson,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum KeyArg {
    Given,
    Family,
}

impl From<KeyArg> for SortKey {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::Given => SortKey::Given,
            KeyArg::Family => SortKey::Family,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let cli = Cli::parse();

    let text =
        fs::read_to_string(&cli.input).map_err(|e| format!("read {:?}: {e}", cli.input))?;
    let file = GradeFile::parse(&text).map_err(|e| format!("parse {:?}: {e}", cli.input))?;
    if file.skipped_records > 0 {
        warn!(
            "skipped {} malformed record(s) in {:?}",
            file.skipped_records, cli.input
        );
    }

    let key = SortKey::from(cli.key);
    let order = SortOrder::from(cli.order);
    let roster = load_roster(&file, key, order);
    info!("loaded {} student(s) from {:?}", roster.len(), cli.input);

    let command = cli.command.unwrap_or(Command::Write {
        output: PathBuf::from("output_list.txt"),
    });

    match command {
        Command::Write { output } => {
            let payload = export_roster(&roster).render();
            fs::write(&output, payload).map_err(|e| format!("write {output:?}: {e}"))?;
            info!("wrote {} record(s) to {}", roster.len(), output.display());
            Ok(())
        }
        Command::Student {
            given,
            family,
            json,
        } => {
            let stats = student_statistics(&roster, &given, &family).map_err(|e| e.to_string())?;
            print_stats(&format!("{given} {family}"), stats, json)
        }
        Command::Class { assignment, json } => {
            let stats = class_statistics(&roster, &assignment).map_err(|e| e.to_string())?;
            print_stats(&assignment, stats, json)
        }
        Command::ExportJson => {
            let payload = export_roster(&roster)
                .to_json_string_pretty()
                .map_err(|e| format!("json: {e}"))?;
            println!("{payload}");
            Ok(())
        }
    }
}

fn print_stats(label: &str, stats: Stats, json: bool) -> Result<(), String> {
    if json {
        let payload =
            serde_json::to_string_pretty(&stats).map_err(|e| format!("json: {e}"))?;
        println!("{payload}");
    } else {
        println!(
            "{label}: mean {:.6}, median {:.6}, stddev {:.6}",
            stats.mean, stats.median, stats.std_dev
        );
    }
    Ok(())
}
