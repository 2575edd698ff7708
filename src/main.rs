// Console driver for the sliding tile game model.
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use slide_merge::logging::setup_logging;
use slide_merge::recording::write_events_csv;
use slide_merge::{Board, Direction, EventKind, EventLog, GameEvent};

#[derive(Parser, Debug)]
#[command(name = "slide_merge", version, about)]
struct Config {
    /// Seed for tile spawning; omit for a random game
    #[arg(long)]
    seed: Option<u64>,

    /// Tiles spawned on a fresh board
    #[arg(long, default_value_t = 2)]
    start_tiles: usize,

    /// Moves to play, e.g. "LLURD"; read from stdin when absent
    #[arg(short = 'm', long)]
    moves: Option<String>,

    /// Start from a saved value matrix instead of a fresh board
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the final value matrix here
    #[arg(long)]
    save: Option<PathBuf>,

    /// Write every tile event as CSV here
    #[arg(long)]
    events_csv: Option<PathBuf>,

    /// Print tile events as they happen
    #[arg(long, default_value_t = false)]
    verbose_events: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotating log files to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

/// Apply one move and spawn a tile into the freed space.
/// Returns false once the board is full after the move.
fn play(board: &mut Board, rng: &mut StdRng, direction: Direction) -> bool {
    board.shift(direction);
    if !board.has_empty() {
        return false;
    }
    board.place_tile(rng, None);
    true
}

fn print_board(board: &Board) {
    println!("{board}score: {}", board.score());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let events = EventLog::new();
    let mut board = Board::default();
    board.add_listener(events.listener());
    board.add_tile_listener(events.listener());
    if config.verbose_events {
        let printer = Rc::new(|event: &GameEvent<'_>| {
            println!("  {} {}", event.kind, event.tile);
        });
        board.add_listener(printer.clone());
        board.add_tile_listener(printer);
    }

    match &config.load {
        Some(path) => board.load(path)?,
        None => {
            for _ in 0..config.start_tiles.min(board.rows() * board.cols()) {
                board.place_tile(&mut rng, None);
            }
        }
    }
    print_board(&board);

    let mut moves_played = 0usize;
    match &config.moves {
        Some(script) => {
            for c in script.chars().filter(|c| !c.is_whitespace()) {
                let direction = Direction::from_char(c)?;
                moves_played += 1;
                let open = play(&mut board, &mut rng, direction);
                println!("{direction}:");
                print_board(&board);
                if !open {
                    log::info!("board full after {} moves", moves_played);
                    break;
                }
            }
        }
        None => {
            let stdin = io::stdin();
            print!("move [L/R/U/D, q to quit]> ");
            io::stdout().flush()?;
            'input: for line in stdin.lock().lines() {
                for c in line?.chars().filter(|c| !c.is_whitespace()) {
                    if c.eq_ignore_ascii_case(&'q') {
                        break 'input;
                    }
                    let direction = match Direction::from_char(c) {
                        Ok(direction) => direction,
                        Err(e) => {
                            log::warn!("{}", e);
                            continue;
                        }
                    };
                    moves_played += 1;
                    let open = play(&mut board, &mut rng, direction);
                    print_board(&board);
                    if !open {
                        println!("board full");
                        break 'input;
                    }
                }
                print!("move [L/R/U/D, q to quit]> ");
                io::stdout().flush()?;
            }
        }
    }

    log::info!(
        "game over after {} moves: score {}, {} tiles created, {} merges",
        moves_played,
        board.score(),
        events.count(EventKind::TileCreated),
        events.count(EventKind::TileRemoved)
    );

    if let Some(path) = &config.save {
        board.save(path)?;
    }
    if let Some(path) = &config.events_csv {
        write_events_csv(path, &events)?;
    }
    Ok(())
}
