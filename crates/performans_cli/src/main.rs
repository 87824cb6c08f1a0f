//! CLI probe for the Performans core.
//!
//! # Responsibility
//! - Drive one session per invocation and print chart or journal data as text.
//! - Show every failure as a message; only storage errors change the exit code.

use clap::{Parser, Subcommand};
use log::info;
use performans_core::{
    core_version, default_log_level, init_logging, Chart, Notice, Session, SessionConfig,
    Severity, Table,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(author, version, about = "Toy quantum visualizations and an intention journal")]
struct Cli {
    /// Journal file or directory (in-memory when omitted)
    #[arg(long, env = "PERFORMANS_DB", global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files (logging disabled when omitted)
    #[arg(long, env = "PERFORMANS_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "PERFORMANS_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Samples per chart axis (0 means default, capped at 5000)
    #[arg(long, default_value_t = 1000, global = true)]
    samples: usize,

    /// Print every sample instead of a summary
    #[arg(long, global = true)]
    full: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Density before and after the intention-driven collapse
    Collapse {
        #[arg(long, default_value_t = 0.5)]
        intensity: f64,
    },
    /// Damped coherence signal for a coherence time in milliseconds
    Decoherence {
        #[arg(long, default_value_t = 50)]
        coherence_ms: i64,
    },
    /// Ground-state density over a harmonic potential
    Stationary,
    /// Chapter summary and its illustration
    Chapter {
        key: String,
        #[arg(long, default_value_t = 0.5)]
        intensity: f64,
        #[arg(long, default_value_t = 50)]
        coherence_ms: i64,
    },
    /// Phenomena summary table
    Phenomena {
        #[arg(long, default_value_t = 0.5)]
        intensity: f64,
    },
    /// Store an intention and print its affirmation
    Note { text: String },
    /// Show the most recent intentions
    Recent {
        #[arg(long)]
        count: Option<i64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {err}");
        }
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let mut config = SessionConfig {
        db_path: cli.db.clone(),
        sample_count: cli.samples,
        ..SessionConfig::default()
    };
    if let Command::Recent { count: Some(count) } = &cli.command {
        config.recent_count = *count;
    }

    let session = Session::open(config);
    let outcome = run(&session, &cli);
    let closed = session.close();

    let mut code = ExitCode::SUCCESS;
    let close_problem = (closed.severity != Severity::Success).then_some(closed);
    for notice in outcome.into_iter().chain(close_problem) {
        if notice.severity == Severity::Error {
            code = ExitCode::FAILURE;
        }
        print_notice(&notice);
    }
    code
}

fn run(session: &Session, cli: &Cli) -> Option<Notice> {
    match &cli.command {
        Command::Collapse { intensity } => {
            print_chart(&session.collapse_view(*intensity), cli.full);
        }
        Command::Decoherence { coherence_ms } => match session.decoherence_view(*coherence_ms) {
            Ok(chart) => print_chart(&chart, cli.full),
            Err(notice) => return Some(notice),
        },
        Command::Stationary => print_chart(&session.stationary_view(), cli.full),
        Command::Chapter {
            key,
            intensity,
            coherence_ms,
        } => match session.chapter_view(key, *intensity, *coherence_ms) {
            Ok(view) => {
                println!("# {}\n\n{}\n", view.title, view.summary);
                if let Some(chart) = view.chart {
                    print_chart(&chart, cli.full);
                }
            }
            Err(notice) => return Some(notice),
        },
        Command::Phenomena { intensity } => print_table(&session.phenomena_view(*intensity)),
        Command::Note { text } => match session.submit_intention(text) {
            Ok(submission) => {
                println!("{}", submission.affirmation);
                println!(
                    "saved #{} at {}",
                    submission.note.id, submission.note.timestamp
                );
            }
            Err(notice) => return Some(notice),
        },
        Command::Recent { .. } => match session.recent_intentions() {
            Ok(table) if table.is_empty() => println!("(no intentions yet)"),
            Ok(table) => print_table(&table),
            Err(notice) => return Some(notice),
        },
    }
    None
}

fn print_chart(chart: &Chart, full: bool) {
    println!("== {}", chart.title);
    for series in &chart.series {
        match series.peak() {
            Some((x, y)) => println!(
                "{}: {} samples, peak {:.4} at x={:.3}",
                series.name,
                series.y.len(),
                y,
                x
            ),
            None => println!("{}: empty", series.name),
        }
        if full {
            for (x, y) in series.x.iter().zip(&series.y) {
                println!("{x:.6}\t{y:.6}");
            }
        }
    }
}

fn print_table(table: &Table) {
    println!("{}", table.columns.join(" | "));
    for row in &table.rows {
        println!("{}", row.join(" | "));
    }
}

fn print_notice(notice: &Notice) {
    match notice.severity {
        Severity::Success => println!("{}", notice.message),
        Severity::Warning => eprintln!("warning: {}", notice.message),
        Severity::Error => eprintln!("error: {}", notice.message),
    }
}
