use crate::commands::{
    analyze,
    best_move,
    self_play,
};
use std::path::PathBuf;

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "Find optimal Tic-Tac-Toe moves")]
pub struct CliOptions {
    #[argh(
        option,
        description = "the path to the config, defaults to ./config.toml if it exists"
    )]
    pub config: Option<PathBuf>,

    #[argh(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
pub enum SubCommand {
    BestMove(best_move::Options),
    Analyze(analyze::Options),
    SelfPlay(self_play::Options),
}
