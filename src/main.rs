use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::{env, fs};

use damson_chess::interface::command_loop::CommandLoop;
use damson_chess::movegen::generator::MoveGenerator;
use damson_chess::movegen::perft::parse_perft_vectors;
use damson_chess::tables::engine_tables::EngineTables;

fn main() -> ExitCode {
    // Slider lookups are load-bearing; without them there is no engine.
    let tables = match EngineTables::new() {
        Ok(tables) => Arc::new(tables),
        Err(e) => {
            eprintln!("fatal: {e}");
            return ExitCode::FAILURE;
        }
    };

    // With a path argument, replay the perft reference vectors and exit.
    if let Some(path) = env::args().nth(1) {
        return run_perft_vectors(&tables, &path);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut command_loop = CommandLoop::new(tables);
    if let Err(e) = command_loop.run(stdin.lock(), &mut stdout) {
        eprintln!("io error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_perft_vectors(tables: &EngineTables, path: &str) -> ExitCode {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("cannot read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let vectors = match parse_perft_vectors(&text) {
        Ok(vectors) => vectors,
        Err(e) => {
            eprintln!("cannot parse {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let generator = MoveGenerator::new(tables);
    let mut failures = 0usize;
    for vector in &vectors {
        match vector.verify(&generator) {
            Ok(()) => println!("ok   {}", vector.fen),
            Err(e) => {
                failures += 1;
                eprintln!("FAIL {e}");
            }
        }
    }
    if failures == 0 {
        println!("{} vectors passed", vectors.len());
        ExitCode::SUCCESS
    } else {
        eprintln!("{failures} of {} vectors failed", vectors.len());
        ExitCode::FAILURE
    }
}
