//! Terminal driver for the interactive board.
//!
//! Reads pointer commands from stdin and prints the board after each one,
//! standing in for a canvas front end.

mod command;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use board_engine::{BoardConfig, Client, DropOutcome, Session};
use clap::Parser;
use command::{Command, HELP};
use render::Snapshot;
use tracing::Level;

/// Drive the interactive board with pointer commands on stdin.
#[derive(Parser)]
#[command(name = "board-cli")]
#[command(about = "Drive the interactive board with pointer commands on stdin")]
struct Args {
    /// Path to a board.toml (searched for in the current and parent directories by default)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Colors this client may move: both, white, black, none
    #[arg(long)]
    client: Option<Client>,

    /// Starting layout in placement notation, rank 0 (Black's edge) first
    #[arg(long)]
    layout: Option<String>,

    /// Print JSON snapshots instead of the ASCII board
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::discover()?,
    };
    if let Some(client) = args.client {
        config.client = client;
    }
    if let Some(layout) = args.layout {
        config.layout = Some(layout);
    }
    tracing::info!(client = ?config.client, layout = ?config.layout, "starting session");

    let mut session = Session::with_config(&config).context("failed to set up board")?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    print_state(&mut stdout, &session, args.json)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "error: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Down(cell) => {
                if !session.pointer_down(cell)? {
                    writeln!(stdout, "nothing to pick up on {}", cell)?;
                }
                print_state(&mut stdout, &session, args.json)?;
            }
            Command::Move(cell) => session.pointer_move(cell),
            Command::Up(cell) => {
                report(&mut stdout, session.pointer_up(cell)?)?;
                print_state(&mut stdout, &session, args.json)?;
            }
            Command::Drag(from, to) => {
                session.pointer_down(from)?;
                session.pointer_move(to);
                report(&mut stdout, session.pointer_up(to)?)?;
                print_state(&mut stdout, &session, args.json)?;
            }
            Command::Show => print_state(&mut stdout, &session, args.json)?,
            Command::Targets => writeln!(stdout, "{}", render::targets(&session))?,
            Command::Turn => writeln!(stdout, "{}", session.current_turn())?,
            Command::Placement => writeln!(stdout, "{}", session.board().to_placement())?,
            Command::Client(client) => session.set_client(client),
            Command::Help => writeln!(stdout, "{}", HELP)?,
            Command::Quit => break,
            Command::Empty => {}
        }
    }

    Ok(())
}

fn report(out: &mut impl Write, outcome: DropOutcome) -> io::Result<()> {
    match outcome {
        DropOutcome::Committed(m) => match m.captured {
            Some(victim) => writeln!(
                out,
                "{} -> {} takes {} {}",
                m.from, m.to, victim.color, victim.kind
            ),
            None => writeln!(out, "{} -> {}", m.from, m.to),
        },
        DropOutcome::Cancelled => writeln!(out, "not a legal target, piece returned"),
        DropOutcome::Ignored => writeln!(out, "nothing held"),
    }
}

fn print_state(out: &mut impl Write, session: &Session, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &Snapshot::of(session))?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", render::ascii(session))?;
    }
    Ok(())
}
