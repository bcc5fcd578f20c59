//! Line-oriented terminal front end.
//!
//! Reads one command per line, drives a [`PlaySession`] and prints the
//! board after every change. Coordinates are typed 1-based.

use crate::session::PlaySession;
use crate::store::BlobStore;
use derive_more::{Display, Error};
use gridtoe::{GameState, GameStatus, HistoryLog, MoveResult, Player, Score, parse_board_size};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  <row> <col>       place a mark (also: move <row> <col>), counting from 1
  new [size]        start a new game, optionally resizing the board
  reset             start a new game on the same board size
  score             show the score
  history           show finished games
  reset-score       set the score back to zero
  help              show this help
  quit              leave";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a mark; 1-based coordinates.
    Move {
        /// Row, counting from 1.
        row: usize,
        /// Column, counting from 1.
        col: usize,
    },
    /// Start a new game, with the raw size text if one was given.
    NewGame(Option<String>),
    /// Start a new game on the current board size.
    Reset,
    /// Show the score.
    Score,
    /// Show finished games.
    History,
    /// Zero the score.
    ResetScore,
    /// Show the help text.
    Help,
    /// Leave.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct ParseCommandError {
    /// What went wrong.
    pub message: String,
}

impl ParseCommandError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn parse_coordinate(token: &str) -> Result<usize, ParseCommandError> {
    match token.parse::<usize>() {
        Ok(0) => Err(ParseCommandError::new("Rows and columns count from 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(ParseCommandError::new(format!("'{}' is not a number", token))),
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let lowered = line.trim().to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();

        match tokens.as_slice() {
            ["new"] => Ok(Command::NewGame(None)),
            ["new", size] => Ok(Command::NewGame(Some((*size).to_string()))),
            ["move", row, col] | [row, col] => Ok(Command::Move {
                row: parse_coordinate(row)?,
                col: parse_coordinate(col)?,
            }),
            ["reset"] => Ok(Command::Reset),
            ["score"] => Ok(Command::Score),
            ["history"] => Ok(Command::History),
            ["reset-score"] => Ok(Command::ResetScore),
            ["help"] | ["?"] => Ok(Command::Help),
            ["quit"] | ["exit"] | ["q"] => Ok(Command::Quit),
            [] => Err(ParseCommandError::new("Type a command, or 'help'")),
            _ => Err(ParseCommandError::new(format!(
                "Unknown command '{}', type 'help'",
                line.trim()
            ))),
        }
    }
}

/// Renders the board followed by whose turn it is or how the game ended.
pub fn render_state(state: &GameState) -> String {
    let status = match state.status() {
        GameStatus::InProgress => format!("{} to move", state.current_player()),
        GameStatus::Won(player) => format!("{} wins!", player),
        GameStatus::Draw => "Draw!".to_string(),
    };
    format!("{}\n{}", state.board().display(), status)
}

/// Renders the scoreboard.
pub fn render_score(score: &Score) -> String {
    Player::iter()
        .enumerate()
        .map(|(i, player)| format!("Player {} ({}): {}", i + 1, player, score.wins(player)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders finished games as a numbered list.
pub fn render_history(history: &HistoryLog) -> String {
    if history.is_empty() {
        return "No finished games yet".to_string();
    }
    history
        .iter()
        .enumerate()
        .map(|(i, outcome)| format!("{}. {}", i + 1, outcome))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs the command loop until `quit` or end of input.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
#[instrument(skip_all)]
pub fn run<S, R, W>(session: &mut PlaySession<S>, input: R, mut output: W) -> std::io::Result<()>
where
    S: BlobStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render_state(session.state()))?;
    writeln!(output, "{}", render_score(session.score()))?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            info!("Input closed");
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Command received");

        if command == Command::Quit {
            break;
        }
        handle(session, command, &mut output)?;

        if let Some(e) = session.take_save_error() {
            writeln!(output, "Warning: score not saved ({})", e.message)?;
        }
    }

    writeln!(output, "Bye!")?;
    Ok(())
}

fn handle<S: BlobStore, W: Write>(
    session: &mut PlaySession<S>,
    command: Command,
    output: &mut W,
) -> std::io::Result<()> {
    match command {
        Command::Move { row, col } => {
            let (Some(row), Some(col)) = (row.checked_sub(1), col.checked_sub(1)) else {
                return writeln!(output, "Rows and columns count from 1");
            };
            match session.apply_move(row, col) {
                MoveResult::Rejected(reason) => writeln!(output, "Ignored: {}", reason)?,
                MoveResult::Continued | MoveResult::Draw => {
                    writeln!(output, "{}", render_state(session.state()))?
                }
                MoveResult::Won(_) => {
                    writeln!(output, "{}", render_state(session.state()))?;
                    writeln!(output, "{}", render_score(session.score()))?;
                }
            }
        }
        Command::NewGame(size) => {
            let size = size
                .as_deref()
                .map(parse_board_size)
                .unwrap_or_else(|| session.state().size());
            let state = session.new_game(size);
            writeln!(output, "{}", render_state(state))?;
        }
        Command::Reset => {
            let size = session.state().size();
            let state = session.new_game(size);
            writeln!(output, "{}", render_state(state))?;
        }
        Command::Score => writeln!(output, "{}", render_score(session.score()))?,
        Command::History => writeln!(output, "{}", render_history(session.history()))?,
        Command::ResetScore => {
            let score = session.reset_score();
            writeln!(output, "{}", render_score(&score))?;
        }
        Command::Help => writeln!(output, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}
