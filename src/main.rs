//! Renju engine demo
//!
//! Plays a few scripted positions and a short AI-vs-AI game in the terminal.
//! Set `RUST_LOG=renju=debug` to see every commit and AI decision.

use renju::{AIEngine, Board, Cell, MemoryStore, Session, SessionConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_CONFIG: &str = r#"
enable_ai = true
human_color = "black"
allow_undo = true
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    forbidden_demo();
    session_demo();
    self_play(30);
}

/// Black tries to complete a double three
fn forbidden_demo() {
    println!("== Forbidden move ==");
    let mut session = Session::new(SessionConfig {
        enable_ai: false,
        ..SessionConfig::default()
    });
    for (row, col) in [(7, 6), (0, 0), (7, 8), (0, 2), (6, 7), (0, 4), (8, 7), (0, 6)] {
        if let Err(err) = session.place(row, col) {
            println!("unexpected: {err}");
            return;
        }
    }
    match session.place(7, 7) {
        Ok(_) => println!("(7, 7) was accepted"),
        Err(err) => println!("(7, 7) rejected: {err}"),
    }
    println!("{}", session.board());
}

/// Human against the AI with undo and a save/load cycle
fn session_demo() {
    println!("== Session ==");
    let config = SessionConfig::from_toml_or_default(Some(DEMO_CONFIG));
    let mut session = Session::new(config);
    let mut store = MemoryStore::new();

    for (row, col) in [(7, 7), (6, 8), (8, 6)] {
        match session.place(row, col) {
            Ok(outcome) => {
                let reply = outcome
                    .reply
                    .map_or_else(|| "none".to_string(), |mv| mv.pos.to_string());
                println!("human ({row}, {col}) -> AI {reply}");
            }
            Err(err) => println!("human ({row}, {col}) rejected: {err}"),
        }
        session.tick();
    }

    if let Err(err) = session.save_to(&mut store) {
        println!("save failed: {err}");
        return;
    }
    match session.undo() {
        Ok(removed) => println!("undo removed {} moves", removed.len()),
        Err(err) => println!("undo failed: {err}"),
    }
    match session.load_from(&store) {
        Ok(true) => println!("restored {} moves", session.history().len()),
        Ok(false) => println!("nothing saved"),
        Err(err) => println!("load failed: {err}"),
    }
    if let Some(hint) = session.get_hint() {
        println!("hint for {}: {hint}", session.turn());
    }
    println!("{}", session.board());
}

/// Both sides played by the engine, stopping at a win or after `max_moves`
fn self_play(max_moves: usize) {
    println!("== Self play ==");
    let mut engine = AIEngine::new();
    let mut board = Board::new();
    let mut color = Cell::Black;

    for ply in 0..max_moves {
        let result = engine.get_move_with_stats(&mut board, color);
        let Some(pos) = result.best_move else {
            println!("board full");
            break;
        };
        if let Err(err) = board.set_cell(pos, color) {
            println!("{color} {pos} rejected: {err}");
            break;
        }
        info!(ply, %color, %pos, search_type = ?result.search_type, "self play");

        if let Some(winner) = board.check_win() {
            println!("{winner} wins after {} moves", ply + 1);
            break;
        }
        color = color.opponent();
    }
    println!("{board}");
}
