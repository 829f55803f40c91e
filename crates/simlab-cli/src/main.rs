//! SimLab command-line front end.
//!
//! Usage:
//!   simlab animals --input input.txt
//!   simlab animals --input input.txt --header-lines 0 --json
//!   simlab home < commands.txt
//!
//! Set `RUST_LOG=debug` to trace the simulation on stderr.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use simlab_logic::config::InputLayout;
use simlab_logic::error::SimError;
use simlab_logic::input::parse_scenario;
use simlab_logic::simulation::{run_simulation, RunReport};
use simlab_logic::smart_home::SmartHome;

#[derive(Parser)]
#[command(name = "simlab")]
#[command(version)]
#[command(about = "Animal ecosystem simulator and smart-home command interpreter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the animal simulation from a population file
    Animals {
        /// Population file
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,

        /// Leading lines to skip before the day count
        #[arg(long, default_value_t = InputLayout::default().header_lines)]
        header_lines: usize,

        /// Print the full run report as JSON instead of sounds
        #[arg(long)]
        json: bool,
    },

    /// Read smart-home commands from stdin until `end`
    Home,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Animals {
            input,
            header_lines,
            json,
        } => run_animals(input, InputLayout { header_lines }, json),
        Commands::Home => run_home(),
    }
}

fn run_animals(input: PathBuf, layout: InputLayout, json: bool) -> anyhow::Result<()> {
    let report = match load_and_run(&input, &layout) {
        Ok(report) => report,
        Err(e) => {
            // A single message and nothing else, whatever went wrong
            println!("{}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report).context("writing JSON report")?;
        writeln!(out)?;
    } else {
        for line in report.hunt_messages() {
            writeln!(out, "{}", line)?;
        }
        for sound in report.sounds() {
            writeln!(out, "{}", sound)?;
        }
    }
    Ok(())
}

fn load_and_run(input: &Path, layout: &InputLayout) -> Result<RunReport, SimError> {
    let text = std::fs::read_to_string(input).map_err(|e| {
        log::error!("Cannot read {}: {}", input.display(), e);
        SimError::InvalidInputs
    })?;
    let scenario = parse_scenario(&text, layout)?;
    run_simulation(&scenario.config, scenario.animals)
}

fn run_home() -> anyhow::Result<()> {
    let mut home = SmartHome::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading command")?;
        let Some(lines) = home.interpret(&line) else {
            break;
        };
        for l in lines {
            writeln!(out, "{}", l)?;
        }
    }
    Ok(())
}
