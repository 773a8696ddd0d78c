//! Crate root module declarations for the Damson Chess engine.
//!
//! This file exposes the top-level subsystems (board representation, attack
//! and magic tables, move generation, search, and the operator command
//! interface) so the binary, tests, and benches can import stable module
//! paths.

pub mod board {
    pub mod bitboard;
    pub mod fen;
    pub mod position;
    pub mod types;
    pub mod zobrist;
}

pub mod tables {
    pub mod attacks;
    pub mod engine_tables;
    pub mod magics;
}

pub mod movegen {
    pub mod generator;
    pub mod moves;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod control;
    pub mod scoring;
}

pub mod interface {
    pub mod command_loop;
    pub mod long_algebraic;
    pub mod render;
}

pub mod errors;
