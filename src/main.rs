// Piet interpreter
// Usage: piet-engine [run|trace|debug] <program> [config]
// Programs are text grids, one symbol per codel: see console_interface::symbol_table.

use anyhow::{Context, bail};
use piet_engine::config::EngineConfig;
use piet_engine::console_interface::ConsoleInput::*;
use piet_engine::console_interface::{cleanup_terminal, handle_input, parse_program, render_debugger, setup_terminal};
use piet_engine::core::{
    ColorGrid, ConsoleIo, DEFAULT_DEBUG_STEP_LIMIT, ENTRY_POINT, MachineState, RunOutcome, StepUpdate, run, run_with, step,
};
use piet_engine::models::DebugRenderState;
use piet_engine::trace::{Trace, TraceInfo, get_json_data};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::fs::OpenOptions;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const USAGE: &str = "Usage: piet-engine [run|trace|debug] <program> [config]";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let switch = args.next().unwrap_or("run".to_string());
    let Some(program_path) = args.next() else {
        bail!(USAGE);
    };
    let config_path = args.next().map(PathBuf::from);

    let (config, config_warnings) = EngineConfig::load(config_path.as_deref());
    init_tracing(&config, switch == "debug");
    for warning in config_warnings {
        tracing::warn!("{warning}");
    }

    let source = std::fs::read_to_string(&program_path)
        .with_context(|| format!("failed to read program {program_path}"))?;
    let grid = parse_program(&source).with_context(|| format!("failed to parse program {program_path}"))?;
    tracing::info!(width = grid.width(), height = grid.height(), "program loaded");

    match switch.as_str() {
        "run" => {
            run_program(&grid, &config)?;
        }
        "trace" => {
            run_traced(&grid, &config)?;
        }
        "debug" => {
            let mut terminal = setup_terminal()?;
            run_debugger(&grid, &config, &mut terminal)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'run', 'trace' or 'debug'. defaulting to run",
                switch
            );
            run_program(&grid, &config)?;
        }
    }

    Ok(())
}

fn init_tracing(config: &EngineConfig, interactive: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter().unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = config.log_file() {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                tracing_subscriber::registry()
                    .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                    .with(env_filter)
                    .init();
                return;
            }
            Err(err) => eprintln!("Failed to open log file {}: {err}", path.display()),
        }
    }

    if interactive {
        // Anything written to the terminal would corrupt the debugger screen.
        tracing_subscriber::registry().with(env_filter).init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(env_filter)
            .init();
    }
}

fn run_program(grid: &ColorGrid, config: &EngineConfig) -> anyhow::Result<RunOutcome> {
    let mut io = ConsoleIo::new(io::stdin().lock(), io::stdout().lock());
    let mut state = MachineState::new(ENTRY_POINT);
    let outcome = run(&mut state, grid, &mut io, config.step_limit()).context("program aborted")?;
    if let RunOutcome::StepLimitReached { steps } = outcome {
        tracing::warn!(steps, "stopped before the program halted");
    }
    Ok(outcome)
}

fn run_traced(grid: &ColorGrid, config: &EngineConfig) -> anyhow::Result<()> {
    let mut trace = Trace::new();
    let result = {
        let mut io = ConsoleIo::new(io::stdin().lock(), io::stdout().lock());
        let mut state = MachineState::new(ENTRY_POINT);
        run_with(&mut state, grid, &mut io, config.step_limit(), |record, state| {
            trace.record(record, state)
        })
    };
    match result {
        Ok(outcome) => trace.finish(outcome),
        Err(err) => tracing::error!("program aborted: {err}"),
    }
    tracing::info!("{}", TraceInfo::new(&trace).to_human_string());

    let json_data = get_json_data(&trace)?;
    match config.trace_output() {
        Some(path) => {
            std::fs::write(path, json_data.as_bytes())
                .with_context(|| format!("failed to write trace to {}", path.display()))?;
            tracing::info!("Trace exported to {}", path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            writeln!(out)?;
            writeln!(out, "{json_data}")?;
        }
    }
    Ok(())
}

fn run_debugger(
    grid: &ColorGrid,
    config: &EngineConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> anyhow::Result<()> {
    let mut io = ConsoleIo::new(Cursor::new(config.input().as_bytes().to_vec()), Vec::new());
    let mut render = DebugRenderState {
        machine: MachineState::new(ENTRY_POINT),
        steps: 0,
        halted: false,
        error: None,
        last_step: None,
        output: String::new(),
    };
    render_debugger(terminal, grid, &render)?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(Step) => {
                debugger_step(&mut render, grid, &mut io);
                render_debugger(terminal, grid, &render)?;
            }
            Ok(RunToEnd) => {
                let limit = config.step_limit().unwrap_or(DEFAULT_DEBUG_STEP_LIMIT);
                let mut taken = 0;
                while taken < limit && !render.halted && render.error.is_none() {
                    debugger_step(&mut render, grid, &mut io);
                    taken += 1;
                }
                render_debugger(terminal, grid, &render)?;
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                tracing::error!("error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}

fn debugger_step(render: &mut DebugRenderState, grid: &ColorGrid, io: &mut ConsoleIo<Cursor<Vec<u8>>, Vec<u8>>) {
    if render.halted || render.error.is_some() {
        return;
    }
    match step(&mut render.machine, grid, io) {
        Ok(StepUpdate::Moved(record)) => {
            render.steps += 1;
            render.last_step = Some(record);
        }
        Ok(StepUpdate::Halted) => render.halted = true,
        Err(err) => render.error = Some(err.to_string()),
    }
    render.output = String::from_utf8_lossy(io.writer()).into_owned();
}
