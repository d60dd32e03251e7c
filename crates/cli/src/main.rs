//! Dual-issue core simulator CLI.
//!
//! This binary provides a single entry point for the core model. It performs:
//! 1. **Run:** Load an instruction image (and optional data image), run it from
//!    reset until the program goes idle, and print the run summary.
//! 2. **Disassemble:** Print the disassembly of words given on the command line
//!    or read from an image file.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mipsim_core::Simulator;
use mipsim_core::common::SimResult;
use mipsim_core::config::Config;
use mipsim_core::isa::disassemble;
use mipsim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Dual-issue MIPS-like core simulator",
    long_about = "Run an instruction image on the dual-issue core model, or disassemble words.\n\nExamples:\n  mipsim run program.hex\n  mipsim run program.hex --trace --max-cycles 500\n  mipsim disasm 20010005 0x00221820"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an instruction image from reset until it goes idle.
    Run {
        /// Instruction image (hex text, or raw little-endian with --binary).
        image: PathBuf,

        /// Optional data image loaded at data address 0.
        #[arg(long)]
        data: Option<PathBuf>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every cycle (PC, bundle, registers, data words).
        #[arg(short, long)]
        trace: bool,

        /// Override the cycle guard.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Override the idle-run threshold.
        #[arg(long)]
        idle_threshold: Option<u32>,

        /// Treat images as raw little-endian words.
        #[arg(long)]
        binary: bool,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Disassemble instruction words.
    Disasm {
        /// Hexadecimal words.
        words: Vec<String>,

        /// Read words from an image file instead.
        #[arg(short, long, conflicts_with = "words")]
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(trace);

    let result = match cli.command {
        Commands::Run {
            image,
            data,
            config,
            trace,
            max_cycles,
            idle_threshold,
            binary,
            json,
        } => {
            let opts = RunOptions {
                data,
                config,
                trace,
                max_cycles,
                idle_threshold,
                binary,
                json,
            };
            cmd_run(&image, &opts)
        }
        Commands::Disasm { words, file } => cmd_disasm(&words, file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Installs the fmt subscriber. `RUST_LOG` wins over the default level.
fn init_logging(trace: bool) {
    let default = if trace { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

struct RunOptions {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    trace: bool,
    max_cycles: Option<u64>,
    idle_threshold: Option<u32>,
    binary: bool,
    json: bool,
}

fn load_image(path: &Path, binary: bool) -> SimResult<Vec<u32>> {
    if binary {
        loader::load_binary_file(path)
    } else {
        loader::load_hex_file(path)
    }
}

/// Loads the images, runs from reset, and prints the summary.
fn cmd_run(image: &Path, opts: &RunOptions) -> SimResult<()> {
    let mut config = match &opts.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if opts.trace {
        config.general.trace_instructions = true;
    }
    if let Some(max) = opts.max_cycles {
        config.general.max_cycles = max;
    }
    if let Some(threshold) = opts.idle_threshold {
        config.monitor.idle_threshold = threshold;
    }

    let program = load_image(image, opts.binary)?;
    let mut sim = Simulator::new(config)?;
    sim.cpu.load_program(0, &program)?;
    if let Some(path) = &opts.data {
        let data = load_image(path, opts.binary)?;
        sim.cpu.load_data(0, &data)?;
    }

    info!(image = %image.display(), words = program.len(), "starting run");
    let report = sim.run();

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(())
}

/// Prints one disassembled line per word.
fn cmd_disasm(words: &[String], file: Option<&Path>) -> SimResult<()> {
    let words = match file {
        Some(path) => loader::load_hex_file(path)?,
        None => loader::parse_hex(&words.join("\n"))?,
    };
    for (idx, word) in words.iter().enumerate() {
        println!("{idx:4}: {word:08x}  {}", disassemble(*word));
    }
    Ok(())
}
