//! Single-cycle datapath simulator CLI.
//!
//! This binary drives the simulator from the command line. It performs:
//! 1. **Run:** Load a program description, execute cycles, print the machine state.
//! 2. **Disassemble:** List the loaded instruction memory with mnemonics.
//!
//! Examples:
//!   scsim run programs/sum.txt --cycles 20 --stats
//!   scsim run programs/loop.txt --stop-on-self-loop --trace
//!   scsim disasm programs/sum.txt

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use scsim_core::config::Config;
use scsim_core::core::Cpu;
use scsim_core::isa::disasm::disassemble;
use scsim_core::sim::loader::{self, LoadReport};

/// Cycles executed when `--cycles` is not given.
const DEFAULT_CYCLES: u64 = 100;

#[derive(Parser, Debug)]
#[command(
    name = "scsim",
    author,
    version,
    about = "Single-cycle MIPS-subset datapath simulator",
    long_about = "Load a program description (lines of 'address selector value', selector 1 for \
                  instruction memory and 0 for data memory) and step the single-cycle datapath."
)]
struct Cli {
    /// Log debug detail (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program and execute it.
    Run {
        /// Program description file.
        program: PathBuf,

        /// Number of cycles to execute (upper bound with --stop-on-self-loop).
        #[arg(short, long, default_value_t = DEFAULT_CYCLES)]
        cycles: u64,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Treat register 0 as hard-wired zero.
        #[arg(long)]
        hardwire_zero: bool,

        /// Log every cycle's instruction and next PC.
        #[arg(long)]
        trace: bool,

        /// Print the machine state after every cycle.
        #[arg(long)]
        dump_each: bool,

        /// Stop when an instruction jumps to itself.
        #[arg(long)]
        stop_on_self_loop: bool,

        /// Print run statistics at the end.
        #[arg(long)]
        stats: bool,
    },

    /// List the loaded instruction memory with disassembly.
    Disasm {
        /// Program description file.
        program: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            program,
            cycles,
            config,
            hardwire_zero,
            trace,
            dump_each,
            stop_on_self_loop,
            stats,
        } => {
            let mut config = match config {
                Some(path) => Config::from_file(&path).unwrap_or_else(|e| fail(&e)),
                None => Config::default(),
            };
            config.general.hardwire_zero |= hardwire_zero;
            config.general.trace_instructions |= trace;

            let opts = RunOptions {
                cycles,
                dump_each,
                stop_on_self_loop,
                stats,
            };
            cmd_run(&program, &config, &opts);
        }
        Commands::Disasm { program } => cmd_disasm(&program),
    }
}

/// Installs the tracing subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Prints `err` and exits with status 1.
fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("\n[!] FATAL: {err}");
    process::exit(1);
}

fn load(path: &Path, cpu: &mut Cpu) -> LoadReport {
    let report = loader::load_program(path, cpu).unwrap_or_else(|e| fail(&e));
    if !report.is_clean() {
        eprintln!(
            "[loader] skipped {} malformed line(s) in {}",
            report.skipped.len(),
            path.display()
        );
    }
    report
}

#[derive(Debug)]
struct RunOptions {
    cycles: u64,
    dump_each: bool,
    stop_on_self_loop: bool,
    stats: bool,
}

/// Loads `program`, runs it and prints the final state.
fn cmd_run(program: &Path, config: &Config, opts: &RunOptions) {
    let mut cpu = Cpu::new(config);
    let report = load(program, &mut cpu);
    debug!(
        "{} instruction(s) and {} data word(s) loaded",
        report.instructions, report.data_words
    );

    let mut halted = false;
    let executed = cpu.run_with(opts.cycles, |cpu, cycle| {
        if opts.dump_each {
            println!("--- cycle {} ---", cpu.stats.cycles);
            print!("{}", cpu.dump());
        }
        halted = opts.stop_on_self_loop && cycle.is_self_loop();
        !halted
    });
    if halted {
        println!("[sim] self-loop at {:#010x} after {executed} cycle(s)", cpu.pc);
    }

    print!("{}", cpu.dump());
    let memory = cpu.dmem.dump();
    if !memory.is_empty() {
        println!("DATA MEMORY");
        print!("{memory}");
    }
    if opts.stats {
        print!("{}", cpu.stats);
    }
}

/// Loads `program` and prints every instruction word with its mnemonic.
fn cmd_disasm(program: &Path) {
    let mut cpu = Cpu::default();
    let _ = load(program, &mut cpu);
    for (addr, word) in cpu.imem.words() {
        println!("{addr:08x}:  {word:08x}  {}", disassemble(word));
    }
}
