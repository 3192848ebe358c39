//! Tic-Tac-Toe commands - best move analysis, interactive play and self-play

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    cli::{
        Side,
        config::{AppConfig, GameConfig},
        output::{format_number, print_board, print_kv, print_section, print_stats_table},
    },
    tictactoe::{
        Board, Difficulty, GameOutcome, Player, Session, Square, Strategy, best_move, selfplay,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Find the machine's best move on a position")]
pub struct BestMoveArgs {
    /// Board as 9 cells, row-major (`X`, `O`, `.`); whitespace is ignored
    #[arg(long)]
    pub board: String,

    /// Side to move for (defaults to whoever is on turn)
    #[arg(long, value_enum)]
    pub machine: Option<Side>,

    /// Game-tree search (minimax or alpha-beta)
    #[arg(long, default_value = "alpha-beta")]
    pub strategy: Strategy,
}

#[derive(Parser, Debug)]
#[command(about = "Play a game against the machine")]
pub struct PlayArgs {
    /// Machine strength (easy, medium, hard)
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// The side you play; X moves first
    #[arg(long, value_enum)]
    pub human: Option<Side>,

    /// Random seed for the easy machine
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file with game defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    pub fn resolve(&self, mut config: GameConfig) -> GameConfig {
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(human) = self.human {
            config = config.with_human(human.into());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[derive(Parser, Debug)]
#[command(about = "Let the machine play both sides")]
pub struct SelfplayArgs {
    /// Game-tree search (minimax or alpha-beta)
    #[arg(long, default_value = "alpha-beta")]
    pub strategy: Strategy,
}

pub fn execute_best_move(args: BestMoveArgs) -> Result<()> {
    let mut board = Board::from_string(&args.board).context("invalid --board")?;
    let machine = args.machine.map_or_else(|| board.next_player(), Player::from);

    print_section(&format!("Best move for {machine} ({})", args.strategy));
    print_board(&board);

    let Some(decision) = best_move(&mut board, machine, args.strategy) else {
        let outcome = GameOutcome::of(&board).map_or("over".to_string(), |o| o.to_string());
        println!("\nGame is already over: {outcome}");
        return Ok(());
    };

    println!();
    print_stats_table(&[
        ("Move", &decision.square.to_string()),
        ("Utility", &decision.utility.to_string()),
        ("Nodes", &format_number(decision.stats.nodes as usize)),
        ("Terminals", &format_number(decision.stats.terminals as usize)),
    ]);
    Ok(())
}

pub fn execute_play(args: PlayArgs) -> Result<()> {
    let config = AppConfig::load_or_default(args.config.as_deref())?;
    let game = args.resolve(config.game);

    let mut session = Session::new(game.human, game.difficulty);
    if let Some(seed) = game.seed {
        session = session.with_seed(seed);
    }

    print_section(&format!("Tic-Tac-Toe ({:?})", game.difficulty));
    print_kv("You play", &game.human.to_string());
    println!("Enter moves as 'row col' (0-2), or 'q' to quit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run_game(&mut session, stdin.lock(), &mut stdout)? {
        Some(outcome) => println!("\nResult: {outcome}"),
        None => println!("\nGame abandoned."),
    }
    Ok(())
}

/// Drive `session` to the end, reading the human's moves from `input`.
///
/// Bad input and illegal moves are reported and asked for again. Returns
/// `None` if the human quits or input runs out.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<Option<GameOutcome>> {
    let mut lines = input.lines();
    loop {
        if let Some(outcome) = session.outcome() {
            return Ok(Some(outcome));
        }

        if session.to_move() == session.machine() {
            let square = session.play_machine()?;
            writeln!(out, "Machine ({}) plays {square}", session.machine())?;
            writeln!(out, "{}", session.board())?;
            continue;
        }

        write!(out, "Your move ({}): ", session.human())?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("failed to read move")?;
        let line = line.trim();
        if matches!(line, "q" | "quit") {
            return Ok(None);
        }

        let played =
            parse_square(line).and_then(|square| session.play_human(square).map_err(Into::into));
        match played {
            Ok(()) => writeln!(out, "{}", session.board())?,
            Err(err) => writeln!(out, "{err:#}")?,
        }
    }
}

/// Parse `row col` (also `row,col`) into a square
pub fn parse_square(text: &str) -> Result<Square> {
    let numbers: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    let [row, col] = numbers.as_slice() else {
        bail!("expected 'row col', got '{text}'");
    };
    let row: usize = row.parse().with_context(|| format!("invalid row '{row}'"))?;
    let col: usize = col.parse().with_context(|| format!("invalid column '{col}'"))?;
    Ok(Square::new(row, col)?)
}

pub fn execute_selfplay(args: SelfplayArgs) -> Result<()> {
    let (board, outcome) = selfplay(args.strategy).context("self-play stopped early")?;
    print_section(&format!("Self-play ({})", args.strategy));
    print_board(&board);
    println!();
    print_kv("Result", &outcome.to_string());
    Ok(())
}
