//! pagesim CLI: places a batch of processes into a fixed pool of page frames and prints
//! how the frame table evolves.

mod logging;
mod render;

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, LevelFilter};
use paging::config::{DEFAULT_FRAME_SIZE, DEFAULT_MEM_SIZE};
use paging::fixture::default_processes;
use paging::{MemoryConfig, ProcessLoader, Scheduler};
use pagesim_error::Error;
use render::{render_statistics, TextRenderer};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Fixed-size paging simulator with round-robin eviction")]
#[command(version)]
struct Cli {
    /// Log level: off, error, warn, info, debug or trace (defaults to $LOG, then warn)
    #[arg(long, global = true, value_parser = logging::parse_level)]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation over a process list
    Run {
        /// Process list (JSON array of {pid, arrival, size})
        #[arg(short, long, default_value = "processes.json")]
        input: PathBuf,

        /// Total physical memory in bytes
        #[arg(long, default_value_t = DEFAULT_MEM_SIZE)]
        mem_size: usize,

        /// Frame (and page) size in bytes
        #[arg(long, default_value_t = DEFAULT_FRAME_SIZE)]
        frame_size: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write the stock 14-process workload as JSON
    Generate {
        /// Output file
        #[arg(short, long, default_value = "processes.json")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn run(input: PathBuf, config: MemoryConfig, format: OutputFormat) -> Result<(), Error> {
    let processes = ProcessLoader::from_file(&input)?;
    info!("loaded {} processes from {}", processes.len(), input.display());
    let mut scheduler = Scheduler::new(config, &processes)?;

    match format {
        OutputFormat::Text => {
            let mut renderer = TextRenderer::new(io::stdout().lock());
            renderer.write_str(&format!("Found {} processes in JSON.\n\n", processes.len()));
            let report = scheduler.run(&mut renderer)?;
            renderer.write_str(&render_statistics(&report.statistics));
            renderer.finish()?;
        }
        OutputFormat::Json => {
            let report = scheduler.run(&mut paging::observer::NoopObserver)?;
            let json = serde_json::to_string_pretty(&report)
                .map_err(|err| Error::InvalidData(err.to_string()))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn generate(output: PathBuf) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(&default_processes())
        .map_err(|err| Error::InvalidData(err.to_string()))?;
    fs::write(&output, json + "\n")?;
    println!("Written to {}", output.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let result = match cli.command {
        Commands::Run {
            input,
            mem_size,
            frame_size,
            format,
        } => run(input, MemoryConfig::new(mem_size, frame_size), format),
        Commands::Generate { output } => generate(output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
