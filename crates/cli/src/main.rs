//! Single-cycle RISC-V datapath simulator CLI.
//!
//! This binary provides a single entry point for running instruction traces. It performs:
//! 1. **Run:** Load a trace, seed state from an optional JSON config, run to completion,
//!    and print the final architectural state and statistics.
//! 2. **Disassemble:** Print every instruction of a trace with its address and mnemonic.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use rvdp_core::config::Config;
use rvdp_core::isa::abi;
use rvdp_core::isa::disasm::disassemble;
use rvdp_core::sim::loader;
use rvdp_core::sim::{RunOutcome, Simulator};

/// Exit status after a fatal simulation error.
const EXIT_FATAL: i32 = 1;
/// Exit status when the cycle limit stops a run.
const EXIT_CYCLE_LIMIT: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "rvdp",
    author,
    version,
    about = "Single-cycle RV64I datapath simulator",
    long_about = "Run an instruction trace on a single-cycle RV64I datapath.\n\nTraces hold one instruction per line: 0x hex, 0b binary, a bare 32-digit binary word, or assembly.\n\nExamples:\n  rvdp run -f traces/sum.s\n  rvdp run -f traces/sum.s -c traces/seed.json --trace\n  rvdp disasm -f traces/sum.hex"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a trace until the core halts.
    Run {
        /// Instruction trace to execute.
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration (sizes, start PC, initial registers and memory).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop after this many cycles (overrides the configuration).
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Log every retired instruction.
        #[arg(long)]
        trace: bool,

        /// Seed doubleword i of data memory with the value i, for i in 0..16.
        #[arg(long)]
        indexed_memory: bool,
    },

    /// Disassemble a trace.
    Disasm {
        /// Instruction trace to disassemble.
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(trace);

    let code = match cli.command {
        Commands::Run {
            file,
            config,
            max_cycles,
            trace,
            indexed_memory,
        } => cmd_run(&file, config.as_deref(), max_cycles, trace, indexed_memory),
        Commands::Disasm { file } => cmd_disasm(&file),
    };
    process::exit(code);
}

/// Installs the `tracing` subscriber. `RUST_LOG` wins; otherwise `info`, or
/// `trace` when instruction tracing was requested.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads, seeds and runs a trace, then prints the final state.
///
/// Returns the process exit status.
fn cmd_run(
    file: &Path,
    config_path: Option<&Path>,
    max_cycles: Option<u64>,
    trace: bool,
    indexed_memory: bool,
) -> i32 {
    let mut config = match config_path.map(Config::from_json_file).transpose() {
        Ok(c) => c.unwrap_or_default(),
        Err(e) => {
            error!("{e}");
            return EXIT_FATAL;
        }
    };
    if indexed_memory {
        config = config.with_indexed_memory();
    }
    if max_cycles.is_some() {
        config.general.max_cycles = max_cycles;
    }
    config.general.trace_instructions |= trace;

    let program = match loader::load_trace_file(file) {
        Ok(p) => p,
        Err(e) => {
            error!("{e}");
            return EXIT_FATAL;
        }
    };

    println!("[*] Trace: {} ({} instructions)", file.display(), program.entries().len());
    println!(
        "    Registers: {}  Data memory: {} bytes  Start PC: {:#x}",
        config.core.num_regs, config.core.data_memory_bytes, config.general.start_pc
    );

    let mut sim = match Simulator::new(Arc::new(program), &config) {
        Ok(s) => s,
        Err(e) => {
            error!("{e}");
            return EXIT_FATAL;
        }
    };

    let code = match sim.run() {
        Ok(summary) if summary.outcome == RunOutcome::Halted => {
            println!("\n[*] Halted after {} cycles", summary.cycles);
            0
        }
        Ok(summary) => {
            println!("\n[!] Cycle limit reached after {} cycles", summary.cycles);
            EXIT_CYCLE_LIMIT
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            EXIT_FATAL
        }
    };

    print_final_state(&sim);
    code
}

/// Prints PC, clock, non-zero registers, non-zero memory and statistics.
fn print_final_state(sim: &Simulator) {
    let cpu = &sim.cpu;
    println!("\nPC = {:#018x}  clock = {}", cpu.pc(), cpu.clock());

    println!("\nRegisters (non-zero):");
    for (idx, val) in cpu.registers().iter().enumerate().filter(|(_, v)| **v != 0) {
        println!("  x{idx:<2} ({:>4}) = {val:#018x} ({val})", abi::name(idx));
    }

    println!("\nData memory (non-zero doublewords):");
    for (addr, val) in cpu.data_memory().dwords().filter(|(_, v)| *v != 0) {
        println!("  [{addr:#06x}] = {val:#018x} ({val})");
    }
    println!();
    cpu.stats().print();
}

/// Prints `addr: word  mnemonic` for every instruction of a trace.
fn cmd_disasm(file: &Path) -> i32 {
    match loader::load_trace_file(file) {
        Ok(program) => {
            for entry in program.entries() {
                println!("{:#06x}: {:08x}  {}", entry.addr, entry.word, disassemble(entry.word));
            }
            0
        }
        Err(e) => {
            error!("{e}");
            EXIT_FATAL
        }
    }
}
