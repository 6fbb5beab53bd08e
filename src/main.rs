use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::{info, warn};

use goto_target::{load_project, FormatConfig, GotoSession, ProjectView};

mod utils;
mod writer;

use writer::{write_record, TargetRecord};

/// Resolve go-to targets (offsets, labels, addresses) in a disassembly project
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to the JSON project description
    #[clap(short = 'p', long)]
    project: PathBuf,
    /// Where navigation starts from; picks between non-unique labels and overlapping banks
    #[clap(short = 'a', long, default_value = "+0")]
    anchor: String,
    /// Prefix that marks a non-unique label
    #[clap(long, default_value = "@")]
    prefix: char,
    /// Print hex digits in lower case
    #[clap(long)]
    lower_hex: bool,
    /// Emit one JSON object per target instead of colored text
    #[clap(short = 'j', long)]
    json: bool,
    /// Enable verbose logging (use multiple times for more verbosity)
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Targets to resolve; read from stdin, one per line, when omitted
    targets: Vec<String>,
}

fn main() {
    let args = Args::parse();
    utils::init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    let project = load_project(&args.project)
        .with_context(|| format!("failed to load project {}", args.project.display()))?;
    let config = FormatConfig {
        non_unique_label_prefix: args.prefix,
        upper_hex_digits: !args.lower_hex,
    };
    let anchor = utils::resolve_anchor(&args.anchor, &project, &config)?;
    info!("Anchor {:?} is +{:06X}", args.anchor, anchor);

    if !args.json {
        println!(
            "{} {} ({} bytes), anchor +{:06X}",
            "Project:".bright_blue().bold(),
            args.project.display(),
            project.file_data_length(),
            anchor
        );
    }

    let mut session = GotoSession::open(&project, anchor, config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut misses = 0usize;

    let mut submit = |input: &str| -> Result<()> {
        if !session.set_input(input) {
            warn!("No target for {:?}", input.trim());
            misses += 1;
        }
        write_record(&mut out, &TargetRecord::from_session(&session), args.json)
    };

    if args.targets.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            submit(&line)?;
        }
    } else {
        for target in &args.targets {
            submit(target.as_str())?;
        }
    }
    out.flush()?;

    if !args.json {
        let duration = start_time.elapsed();
        println!(
            "\n{} {:.2?} ({} unresolved)",
            "Total execution time:".bright_yellow().bold(),
            duration,
            misses
        );
    }
    Ok(())
}
