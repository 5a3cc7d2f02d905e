//! Line command parsing.

use board_core::Cell;
use board_engine::Client;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid cell '{0}', expected e.g. 'e2' or '4,6'")]
    InvalidCell(String),
    #[error("{0}")]
    InvalidClient(String),
}

/// Commands read from stdin, one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Press the pointer over a cell.
    Down(Cell),
    /// Move the pointer over a cell.
    Move(Cell),
    /// Release the pointer over a cell.
    Up(Cell),
    /// Press on one cell and release on another.
    Drag(Cell, Cell),
    /// Print the board.
    Show,
    /// Print the held piece's targets.
    Targets,
    /// Print the side to move.
    Turn,
    /// Print the board in placement notation.
    Placement,
    /// Change the client restriction.
    Client(Client),
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    /// Parses one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = parts.next().unwrap_or("");

        match cmd {
            "down" => Ok(Command::Down(cell_arg(parts.next(), "down")?)),
            "move" => Ok(Command::Move(cell_arg(parts.next(), "move")?)),
            "up" => Ok(Command::Up(cell_arg(parts.next(), "up")?)),
            "drag" => {
                let from = cell_arg(parts.next(), "drag")?;
                let to = cell_arg(parts.next(), "drag")?;
                Ok(Command::Drag(from, to))
            }
            "show" => Ok(Command::Show),
            "targets" => Ok(Command::Targets),
            "turn" => Ok(Command::Turn),
            "placement" => Ok(Command::Placement),
            "client" => {
                let name = parts.next().ok_or(CommandError::MissingArgument {
                    command: "client",
                    expected: "both, white, black or none",
                })?;
                name.parse()
                    .map(Command::Client)
                    .map_err(CommandError::InvalidClient)
            }
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Ok(Command::Empty),
            _ => Err(CommandError::Unknown(input.to_string())),
        }
    }
}

/// Parses a cell as algebraic (`e2`) or as `file,rank` (`4,6`).
pub fn parse_cell(s: &str) -> Result<Cell, CommandError> {
    if let Some(cell) = Cell::from_algebraic(s) {
        return Ok(cell);
    }
    let (file, rank) = s
        .split_once(',')
        .ok_or_else(|| CommandError::InvalidCell(s.to_string()))?;
    let file = file.trim().parse::<i8>();
    let rank = rank.trim().parse::<i8>();
    match (file, rank) {
        (Ok(file), Ok(rank)) if Cell::new(file, rank).is_on_board() => Ok(Cell::new(file, rank)),
        _ => Err(CommandError::InvalidCell(s.to_string())),
    }
}

fn cell_arg(arg: Option<&str>, command: &'static str) -> Result<Cell, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument {
        command,
        expected: "a cell",
    })?;
    parse_cell(arg)
}

pub const HELP: &str = "\
commands:
  down <cell>         press the pointer over a cell
  move <cell>         move the pointer over a cell
  up <cell>           release the pointer over a cell
  drag <from> <to>    down on <from>, then up on <to>
  show                print the board
  targets             print the held piece's targets
  turn                print the side to move
  placement           print the board in placement notation
  client <who>        both, white, black or none
  quit
cells are algebraic (e2) or file,rank (4,6)";
