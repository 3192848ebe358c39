//! s2p CLI - classical AI search, Tic-Tac-Toe and constraint solving
//!
//! This CLI provides a unified interface for:
//! - Searching text-defined graphs and mazes with any of the search algorithms
//! - Asking for the best Tic-Tac-Toe move on a position
//! - Playing against the machine or watching it play itself
//! - Solving small constraint problems

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "s2p")]
#[command(version, about = "Classical AI search toolkit", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path through a graph or a maze
    Search(s2p::cli::commands::search::SearchArgs),

    /// Find the best Tic-Tac-Toe move on a position
    BestMove(s2p::cli::commands::game::BestMoveArgs),

    /// Play Tic-Tac-Toe against the machine
    Play(s2p::cli::commands::game::PlayArgs),

    /// Let the machine play Tic-Tac-Toe against itself
    Selfplay(s2p::cli::commands::game::SelfplayArgs),

    /// Solve a finite-domain constraint problem
    Csp(s2p::cli::commands::csp::CspArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search(args) => s2p::cli::commands::search::execute(args),
        Commands::BestMove(args) => s2p::cli::commands::game::execute_best_move(args),
        Commands::Play(args) => s2p::cli::commands::game::execute_play(args),
        Commands::Selfplay(args) => s2p::cli::commands::game::execute_selfplay(args),
        Commands::Csp(args) => s2p::cli::commands::csp::execute(args),
    }
}
