mod app;
mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use morning_digest_config::{Config, DELIVERY_TIMES};
use morning_digest_engine::{
    agent::{digest_instruction, extract_analysis_from_str},
    render_markdown,
    sample::{display_analysis, display_tickers},
    schedule::{ExecutionLogResponse, ScheduleResponse},
    watchlist::COMMON_TICKERS,
};
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "morning-digest", version, about = "Watchlist morning digest viewer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a digest in an interactive terminal view
    View {
        /// Markdown file with the analysis, `-` for stdin
        file: Option<PathBuf>,
        /// Use the built-in sample watchlist and analysis
        #[arg(long)]
        sample: bool,
    },
    /// Render a digest to stdout
    Dump {
        file: Option<PathBuf>,
        #[arg(long)]
        sample: bool,
        /// Print the block tree as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Manage the saved watchlist
    Watchlist {
        #[command(subcommand)]
        action: WatchlistAction,
    },
    /// Show or update delivery preferences
    Settings {
        #[arg(long)]
        email: Option<String>,
        /// Delivery time, one of 05:00..09:00 in half-hour steps
        #[arg(long)]
        time: Option<String>,
    },
    /// Print the instruction sent to the analysis agent
    Instruction {
        #[arg(long)]
        sample: bool,
    },
    /// Extract the analysis from an agent response payload and render it
    Extract {
        /// JSON payload file, `-` for stdin
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Display schedule metadata and execution logs from scheduler payloads
    Schedule {
        /// `get schedule` JSON payload, `-` for stdin
        input: PathBuf,
        /// Execution log JSON payload
        #[arg(long)]
        logs: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum WatchlistAction {
    List,
    Add {
        #[arg(required = true)]
        tickers: Vec<String>,
    },
    Remove {
        #[arg(required = true)]
        tickers: Vec<String>,
    },
}

/// Logs at `Info` by default; `filters` (from `RUST_LOG`) override it.
fn logger_builder(filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    builder
}

fn main() -> Result<()> {
    logger_builder(std::env::var("RUST_LOG").ok().as_deref()).init();

    let cli = Cli::parse();
    match cli.command {
        Command::View { file, sample } => view(file.as_deref(), sample),
        Command::Dump { file, sample, json } => {
            let analysis = load_analysis(file.as_deref(), sample)?;
            print_digest(&analysis, json)
        }
        Command::Watchlist { action } => watchlist(action),
        Command::Settings { email, time } => settings(email, time),
        Command::Instruction { sample } => {
            let config = Config::load_or_default()?;
            let tickers = display_tickers(sample, &config.watchlist);
            println!("{}", digest_instruction(&tickers)?);
            Ok(())
        }
        Command::Extract { input, json } => {
            let body = read_input(&input)?;
            let analysis = extract_analysis_from_str(&body)?;
            print_digest(&analysis, json)
        }
        Command::Schedule { input, logs } => schedule(&input, logs.as_deref()),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_analysis(file: Option<&Path>, sample: bool) -> Result<String> {
    let text = match file {
        Some(path) => read_input(path)?,
        None => String::new(),
    };
    let analysis = display_analysis(sample, &text);
    if analysis.is_empty() && file.is_none() {
        bail!("No analysis to show: pass a file or --sample");
    }
    Ok(analysis.to_string())
}

fn print_digest(analysis: &str, json: bool) -> Result<()> {
    let blocks = render_markdown(analysis);
    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        for line in render::plain_lines(&blocks) {
            println!("{line}");
        }
    }
    Ok(())
}

fn view(file: Option<&Path>, sample: bool) -> Result<()> {
    let analysis = load_analysis(file, sample)?;
    let config = Config::load_or_default()?;
    let tickers = display_tickers(sample, &config.watchlist);
    let title = if sample {
        "Morning Digest (sample)"
    } else {
        "Morning Digest"
    };
    log::info!("Opening digest view for {} tickers", tickers.len());
    app::run(app::App::new(title, tickers, &analysis))
}

fn watchlist(action: WatchlistAction) -> Result<()> {
    let mut config = Config::load_or_default()?;
    let mut list = config.watchlist();

    match action {
        WatchlistAction::List => {
            if list.is_empty() {
                println!("Watchlist is empty. Try one of: {}", COMMON_TICKERS.join(", "));
            }
            for t in list.tickers() {
                println!("{t}");
            }
            return Ok(());
        }
        WatchlistAction::Add { tickers } => {
            for t in &tickers {
                if !list.add(t) {
                    log::warn!("Skipping '{t}': empty or already in the watchlist");
                }
            }
        }
        WatchlistAction::Remove { tickers } => {
            for t in &tickers {
                if !list.remove(&t.trim().to_uppercase()) {
                    log::warn!("'{t}' is not in the watchlist");
                }
            }
        }
    }

    config.set_watchlist(&list);
    config.save()?;
    println!("{}", list.tickers().join(", "));
    Ok(())
}

fn settings(email: Option<String>, time: Option<String>) -> Result<()> {
    let mut config = Config::load_or_default()?;
    let changed = email.is_some() || time.is_some();

    if let Some(email) = email {
        config.email = email.trim().to_string();
    }
    if let Some(time) = time {
        config.set_delivery_time(&time)?;
    }
    if changed {
        config.save()?;
    }

    println!("Config:        {}", Config::config_path().display());
    println!(
        "Email:         {}",
        if config.email.is_empty() { "(not set)" } else { config.email.as_str() }
    );
    println!("Delivery time: {}", config.delivery_time);
    if let Some(cron) = config.delivery_cron() {
        println!("Cron:          {cron}");
    }
    if !changed {
        println!("Options:       {}", DELIVERY_TIMES.join(", "));
    }
    Ok(())
}

fn schedule(input: &Path, logs: Option<&Path>) -> Result<()> {
    let resp: ScheduleResponse =
        serde_json::from_str(&read_input(input)?).context("Invalid schedule payload")?;
    let Some(schedule) = resp.schedule.filter(|_| resp.success) else {
        bail!(
            "{}",
            resp.error
                .unwrap_or_else(|| "Failed to fetch schedule".to_string())
        );
    };

    println!("Schedule:  {}", schedule.id);
    println!("Status:    {}", schedule.status_label());
    println!("Runs:      {}", schedule.describe());
    if let Some(tz) = &schedule.timezone {
        println!("Timezone:  {tz}");
    }
    if let Some(next) = &schedule.next_run_time {
        println!("Next run:  {next}");
    }
    match &schedule.last_run_at {
        Some(at) => println!("Last run:  {at} ({})", schedule.last_run_label()),
        None => println!("Last run:  {}", schedule.last_run_label()),
    }

    if let Some(path) = logs {
        let resp: ExecutionLogResponse =
            serde_json::from_str(&read_input(path)?).context("Invalid execution log payload")?;
        println!();
        if !resp.success || resp.executions.is_empty() {
            println!("No executions yet");
        }
        for entry in &resp.executions {
            let status = if entry.success { "ok" } else { "failed" };
            print!("{}  {:<6}  attempt {}", entry.executed_at, status, entry.attempts_label());
            match &entry.error {
                Some(err) => println!("  {err}"),
                None => println!(),
            }
        }
    }
    Ok(())
}
