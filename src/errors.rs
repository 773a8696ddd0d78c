use std::error::Error;
use std::fmt;

/// Represents all error conditions surfaced by the engine core.
/// Malformed input is recoverable; magic generation failure is fatal at
/// startup because the engine cannot operate without slider lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The provided FEN string is invalid or could not be parsed.
    InvalidFen(String),
    /// The provided long-algebraic move text could not be parsed.
    InvalidMoveText(String),
    /// The move text parsed but does not match any legal move.
    IllegalMove(String),
    /// Attempted to undo a move with no moves on the history stack.
    EmptyHistory,
    /// No collision-free magic multiplier was found within the retry budget.
    MagicGeneration { square: u8, attempts: u32 },
    /// A perft reference-vector line could not be parsed.
    PerftVector(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidFen(msg) => write!(f, "invalid FEN string: {msg}"),
            EngineError::InvalidMoveText(text) => write!(f, "invalid move text: {text}"),
            EngineError::IllegalMove(text) => write!(f, "illegal move: {text}"),
            EngineError::EmptyHistory => write!(f, "no moves to undo"),
            EngineError::MagicGeneration { square, attempts } => write!(
                f,
                "no magic multiplier found for square {square} within {attempts} attempts"
            ),
            EngineError::PerftVector(line) => write!(f, "bad perft vector line: {line}"),
        }
    }
}

impl Error for EngineError {}
