//! Interactive command loop over generic reader/writer streams.
//!
//! Searches run on a worker thread that shares the engine tables and the
//! search control; `stop` flips the cancellation flag, joins the worker, and
//! reports the best line found. Search lifecycle messages carry wall-clock
//! timestamps.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use chrono::Local;

use crate::board::bitboard::{algebraic_from_square, square_from_algebraic};
use crate::board::fen::{parse_fen, position_to_fen};
use crate::board::position::Position;
use crate::board::types::{Color, PieceKind};
use crate::errors::EngineError;
use crate::interface::long_algebraic::parse_move;
use crate::interface::render::{position_diagram, state_summary};
use crate::movegen::generator::MoveGenerator;
use crate::movegen::perft::perft;
use crate::search::alpha_beta::{run_search, SearchConfig, SearchOutcome};
use crate::search::control::SearchControl;
use crate::search::scoring::{BoardScorer, MaterialScorer};
use crate::tables::engine_tables::EngineTables;

const HELP_TEXT: &str = "\
commands:
  position startpos [moves ...]   set up the initial position
  position fen <FEN> [moves ...]  set up an arbitrary position
  makemove <move>                 play a long-algebraic move (e2e4, e7e8q)
  undo                            take back the last move
  go [depth <n>]                  search on a worker thread
  stop                            cancel the search and report the best line
  perft <depth>                   count the legal move tree
  legal [piece-kind]              list the legal moves, optionally filtered
  attacked <square|color>         which sides attack a square, or every
                                  square a side attacks
  evaluate                        static material score
  print | state | fen             show the board, state, or FEN
  reset                           back to the initial position
  quit                            exit";

pub struct CommandLoop {
    tables: Arc<EngineTables>,
    position: Position,
    control: Arc<SearchControl>,
    active: Option<JoinHandle<SearchOutcome>>,
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

fn piece_kind_from_name(name: &str) -> Option<PieceKind> {
    match name {
        "pawn" => Some(PieceKind::Pawn),
        "knight" => Some(PieceKind::Knight),
        "bishop" => Some(PieceKind::Bishop),
        "rook" => Some(PieceKind::Rook),
        "queen" => Some(PieceKind::Queen),
        "king" => Some(PieceKind::King),
        _ => None,
    }
}

impl CommandLoop {
    pub fn new(tables: Arc<EngineTables>) -> Self {
        Self {
            tables,
            position: Position::start_position(),
            control: SearchControl::new(),
            active: None,
        }
    }

    /// Reads commands until `quit` or end of input. Any search still running
    /// at exit is joined first.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "ready — type 'help' for commands")?;
        for line in input.lines() {
            let line = line?;
            if !self.handle_command(line.trim(), output)? {
                break;
            }
        }
        self.finish_search(output)
    }

    /// Dispatches one command line. Returns `false` when the loop should
    /// exit.
    pub fn handle_command<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<bool> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = tokens.first() else {
            return Ok(true);
        };

        match command {
            "quit" | "exit" => return Ok(false),
            "help" => writeln!(output, "{HELP_TEXT}")?,
            "position" => {
                if let Err(e) = self.cmd_position(&tokens[1..]) {
                    writeln!(output, "error: {e}")?;
                }
            }
            "makemove" => match tokens.get(1) {
                Some(text) => match self.apply_move_text(text) {
                    Ok(applied) => writeln!(output, "played {applied}")?,
                    Err(e) => writeln!(output, "error: {e}")?,
                },
                None => writeln!(output, "error: makemove needs a move")?,
            },
            "undo" => match self.position.undo_move() {
                Ok(mv) => writeln!(output, "took back {mv}")?,
                Err(e) => writeln!(output, "error: {e}")?,
            },
            "go" => self.cmd_go(&tokens[1..], output)?,
            "stop" => self.cmd_stop(output)?,
            "perft" => self.cmd_perft(tokens.get(1), output)?,
            "legal" => self.cmd_legal(tokens.get(1), output)?,
            "attacked" => self.cmd_attacked(tokens.get(1), output)?,
            "evaluate" => {
                let score = MaterialScorer.score(&self.position);
                writeln!(output, "material score {score}")?;
            }
            "print" => write!(output, "{}", position_diagram(&self.position))?,
            "state" => write!(output, "{}", state_summary(&self.position))?,
            "fen" => writeln!(output, "{}", position_to_fen(&self.position))?,
            "reset" => {
                self.position = Position::start_position();
                writeln!(output, "position reset")?;
            }
            _ => writeln!(output, "unknown command: {command}")?,
        }
        Ok(true)
    }

    fn cmd_position(&mut self, args: &[&str]) -> Result<(), EngineError> {
        let (mut position, move_args) = match args.first() {
            Some(&"startpos") => (Position::start_position(), &args[1..]),
            Some(&"fen") => {
                let fen_end = args
                    .iter()
                    .position(|&token| token == "moves")
                    .unwrap_or(args.len());
                let fen = args[1..fen_end].join(" ");
                (parse_fen(&fen)?, &args[fen_end..])
            }
            _ => {
                return Err(EngineError::InvalidFen(
                    "expected 'startpos' or 'fen ...'".to_string(),
                ))
            }
        };

        let moves = match move_args.first() {
            Some(&"moves") => &move_args[1..],
            _ => &[][..],
        };
        let tables = Arc::clone(&self.tables);
        let generator = MoveGenerator::new(&tables);
        for text in moves {
            let mv = parse_move(text, &mut position, &generator)?;
            position.make_move(mv);
        }

        self.position = position;
        Ok(())
    }

    fn apply_move_text(&mut self, text: &str) -> Result<String, EngineError> {
        let tables = Arc::clone(&self.tables);
        let generator = MoveGenerator::new(&tables);
        let mv = parse_move(text, &mut self.position, &generator)?;
        self.position.make_move(mv);
        Ok(mv.to_string())
    }

    fn cmd_go<W: Write>(&mut self, args: &[&str], output: &mut W) -> io::Result<()> {
        // A still-running search is reported before the new one starts.
        self.finish_search(output)?;

        let depth = match args {
            ["depth", value, ..] => match value.parse::<u8>() {
                Ok(depth) if depth > 0 => depth,
                _ => {
                    writeln!(output, "error: bad depth: {value}")?;
                    return Ok(());
                }
            },
            _ => SearchConfig::default().depth,
        };

        self.control.begin_search();
        let tables = Arc::clone(&self.tables);
        let control = Arc::clone(&self.control);
        let mut position = self.position.clone();
        let config = SearchConfig { depth };

        writeln!(output, "[{}] searching to depth {depth}", timestamp())?;
        self.active = Some(thread::spawn(move || {
            let generator = MoveGenerator::new(&tables);
            run_search(&generator, &mut position, &MaterialScorer, &control, config)
        }));
        Ok(())
    }

    fn cmd_stop<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        if self.active.is_none() {
            writeln!(output, "no search in progress")?;
            return Ok(());
        }
        self.control.request_stop();
        self.finish_search(output)
    }

    fn finish_search<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        if let Some(handle) = self.active.take() {
            let outcome = handle.join().expect("search thread panicked");
            match outcome.best_move {
                Some(mv) => writeln!(
                    output,
                    "[{}] bestmove {mv} score {} nodes {}",
                    timestamp(),
                    outcome.score,
                    outcome.nodes
                )?,
                None => writeln!(
                    output,
                    "[{}] bestmove (none) nodes {}",
                    timestamp(),
                    outcome.nodes
                )?,
            }
        }
        Ok(())
    }

    fn cmd_perft<W: Write>(&mut self, depth: Option<&&str>, output: &mut W) -> io::Result<()> {
        let depth = match depth.map(|d| d.parse::<u32>()) {
            Some(Ok(depth)) => depth,
            None => 1,
            Some(Err(_)) => {
                writeln!(output, "error: perft needs a numeric depth")?;
                return Ok(());
            }
        };

        let tables = Arc::clone(&self.tables);
        let generator = MoveGenerator::new(&tables);
        let started = Instant::now();
        let counts = perft(&generator, &mut self.position, depth);
        let elapsed = started.elapsed();
        writeln!(
            output,
            "depth {depth}: nodes {} captures {} ep {} castles {} promotions {} checks {} ({:.3}s)",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            elapsed.as_secs_f64()
        )
    }

    fn cmd_legal<W: Write>(&mut self, kind: Option<&&str>, output: &mut W) -> io::Result<()> {
        let filter = match kind {
            Some(name) => match piece_kind_from_name(name) {
                Some(kind) => Some(kind),
                None => {
                    writeln!(output, "error: unknown piece kind: {name}")?;
                    return Ok(());
                }
            },
            None => None,
        };

        let tables = Arc::clone(&self.tables);
        let generator = MoveGenerator::new(&tables);
        let mut moves = generator.legal_moves(&mut self.position);
        if let Some(kind) = filter {
            moves.retain(|mv| mv.piece == kind);
        }
        let listed: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
        writeln!(output, "{} moves: {}", moves.len(), listed.join(" "))
    }

    fn cmd_attacked<W: Write>(&mut self, target: Option<&&str>, output: &mut W) -> io::Result<()> {
        match target {
            Some(&"white") => self.write_attacked_set(Color::White, output),
            Some(&"black") => self.write_attacked_set(Color::Black, output),
            Some(text) => match square_from_algebraic(text) {
                Some(square) => {
                    let by_white =
                        self.position.square_attacked(square, Color::White, &self.tables);
                    let by_black =
                        self.position.square_attacked(square, Color::Black, &self.tables);
                    writeln!(output, "white: {by_white} black: {by_black}")
                }
                None => writeln!(output, "error: attacked needs a square or a color"),
            },
            None => writeln!(output, "error: attacked needs a square or a color"),
        }
    }

    fn write_attacked_set<W: Write>(&self, by: Color, output: &mut W) -> io::Result<()> {
        let squares: Vec<String> = (0..64u8)
            .filter(|&square| self.position.square_attacked(square, by, &self.tables))
            .map(algebraic_from_square)
            .collect();
        writeln!(output, "{} squares: {}", squares.len(), squares.join(" "))
    }
}
