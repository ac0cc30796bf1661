#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # Tic-Tac-Toe Solver

pub mod cli_options;
pub mod commands;
pub mod config;
pub mod logger;
pub mod setup;
pub mod util;

use crate::{
    cli_options::{
        CliOptions,
        SubCommand,
    },
    commands::{
        analyze,
        best_move,
        self_play,
    },
    config::Config,
};
use anyhow::Context as _;
use minimax::TicTacToeSolver;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// Data from the setup function
#[derive(Debug)]
struct SetupData {
    config: Config,
    subcommand: SubCommand,
    worker_guard: Option<WorkerGuard>,
}

/// Pre-main setup
fn setup(cli_options: CliOptions) -> anyhow::Result<SetupData> {
    let config = setup::load_config(cli_options.config.as_deref())
        .context("failed to load config")?;

    eprintln!("setting up logger...");
    let worker_guard = logger::setup(&config).context("failed to initialize logger")?;

    eprintln!();
    Ok(SetupData {
        config,
        subcommand: cli_options.subcommand,
        worker_guard,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// This allows more things to drop correctly.
/// Setup errors are logged to the stderr, as the loggers are not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options = argh::from_env();

    let setup_data = setup(cli_options)?;
    real_main(setup_data)?;
    Ok(())
}

/// The actual entry point
fn real_main(setup_data: SetupData) -> anyhow::Result<()> {
    let config = setup_data.config;
    let mut solver = TicTacToeSolver::with_capacity(config.cache_capacity());

    let ret = match setup_data.subcommand {
        SubCommand::BestMove(options) => best_move::exec(&mut solver, &config, options),
        SubCommand::Analyze(options) => analyze::exec(&mut solver, &config, options),
        SubCommand::SelfPlay(options) => self_play::exec(&mut solver, &config, options),
    };

    let stats = solver.cache_stats();
    info!(
        entries = stats.entries,
        hits = stats.hits,
        misses = stats.misses,
        "exiting"
    );

    // Flush file logs
    drop(setup_data.worker_guard);

    ret
}
