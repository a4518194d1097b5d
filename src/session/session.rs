//! Game session: board, turn, history and the AI opponent
//!
//! A session is the only owner of its board. Every placement goes through
//! [`Board::set_cell`], so a committed position is always legal; the AI reply
//! (when enabled) is searched and committed within the same `place` call.

use tracing::{debug, info, warn};

use crate::board::{Board, Cell, Pos, CENTER};
use crate::engine::AIEngine;
use crate::error::{SessionError, SessionResult};
use crate::eval::all_valid_moves;

use super::config::SessionConfig;
use super::saved::{SavedGame, SavedMove};
use super::store::GameStore;

/// A committed stone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub color: Cell,
    pub pos: Pos,
    /// Strictly increasing within a session, never reused
    pub id: u32,
}

/// What a successful `place` committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOutcome {
    /// The requested move
    pub placed: Move,
    /// AI answer, if the AI is enabled and had a move
    pub reply: Option<Move>,
    /// Winner after both moves, if the game is over
    pub winner: Option<Cell>,
}

pub struct Session {
    board: Board,
    turn: Cell,
    history: Vec<Move>,
    next_id: u32,
    elapsed: u64,
    waiting: bool,
    winner: Option<Cell>,
    config: SessionConfig,
    engine: AIEngine,
}

impl Session {
    /// Start a session with a fresh game
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            board: Board::new(),
            turn: Cell::Black,
            history: Vec::new(),
            next_id: 0,
            elapsed: 0,
            waiting: false,
            winner: None,
            config,
            engine: AIEngine::new(),
        };
        session.new_game();
        session
    }

    /// Reset to an empty board with Black to move.
    ///
    /// If the AI plays Black it opens at the center immediately.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.turn = Cell::Black;
        self.history.clear();
        self.next_id = 0;
        self.elapsed = 0;
        self.waiting = false;
        self.winner = None;

        if self.config.ai_moves_first() {
            self.board.place_stone(CENTER, Cell::Black);
            self.commit(CENTER, Cell::Black);
        }

        info!(
            enable_ai = self.config.enable_ai,
            human_color = %self.config.human_color,
            "new game"
        );
    }

    /// Place a stone for the side to move, then let the AI answer.
    ///
    /// The AI only replies when it is enabled, the game is not over and it is
    /// the AI's turn after the placement.
    pub fn place(&mut self, row: usize, col: usize) -> SessionResult<PlaceOutcome> {
        if self.waiting {
            return Err(SessionError::Waiting);
        }
        if self.winner.is_some() {
            return Err(SessionError::GameOver);
        }
        let pos = Pos::try_new(row, col).ok_or(SessionError::OutOfBounds { row, col })?;

        let color = self.turn;
        self.board.set_cell(pos, color)?;
        let placed = self.commit(pos, color);
        self.winner = self.board.check_win();

        let reply = if self.ai_to_move() {
            self.ai_reply()
        } else {
            None
        };

        if let Some(winner) = self.winner {
            info!(%winner, moves = self.history.len(), "game over");
        }

        Ok(PlaceOutcome {
            placed,
            reply,
            winner: self.winner,
        })
    }

    /// Take back the last turn and return the removed moves, latest first.
    ///
    /// Without the AI one move is removed. With the AI, moves are removed
    /// until one of the human's has gone, so the AI's reply and the move it
    /// answered go together. The AI's opening stone is never removed alone.
    pub fn undo(&mut self) -> SessionResult<Vec<Move>> {
        if self.waiting {
            return Err(SessionError::Waiting);
        }

        let human = self.config.human_color;
        let with_ai = self.config.enable_ai;
        let undoable = if with_ai {
            self.history.iter().any(|mv| mv.color == human)
        } else {
            !self.history.is_empty()
        };
        if !undoable {
            return Err(SessionError::NoHistory);
        }
        if !self.config.allow_undo {
            return Err(SessionError::RegretNotAllowed);
        }

        let mut removed = Vec::new();
        while let Some(mv) = self.history.pop() {
            self.board.remove_stone(mv.pos);
            removed.push(mv);
            if !with_ai || mv.color == human {
                break;
            }
        }

        if let Some(earliest) = removed.last() {
            self.turn = earliest.color;
        }
        self.winner = None;

        info!(removed = removed.len(), turn = %self.turn, "undo");
        Ok(removed)
    }

    /// Move the AI would play for the side to move. Nothing is committed.
    pub fn get_hint(&mut self) -> Option<Pos> {
        self.engine.get_move(&mut self.board, self.turn)
    }

    /// Advance the game clock by one second
    pub fn tick(&mut self) -> u64 {
        self.elapsed += 1;
        self.elapsed
    }

    pub fn save(&self) -> SavedGame {
        SavedGame {
            board: self.board.to_rows(),
            history: self.history.iter().map(SavedMove::from).collect(),
            whose_turn: self.turn.code(),
            elapsed_time: self.elapsed,
        }
    }

    pub fn save_json(&self) -> SessionResult<String> {
        self.save()
            .to_json()
            .map_err(|e| SessionError::Save(e.to_string()))
    }

    /// Replace the game with `saved`.
    ///
    /// The payload is validated in full first; on error the session is left
    /// exactly as it was. If the loaded game has the AI to move, the AI plays
    /// before this returns.
    pub fn load(&mut self, saved: &SavedGame) -> SessionResult<()> {
        let restored = saved.restore()?;

        self.board = restored.board;
        self.history = restored.history;
        self.turn = restored.turn;
        self.elapsed = restored.elapsed;
        self.next_id = restored.next_id;
        self.waiting = false;
        self.winner = self.board.check_win();

        info!(
            moves = self.history.len(),
            turn = %self.turn,
            elapsed = self.elapsed,
            "game loaded"
        );

        if self.ai_to_move() {
            self.ai_reply();
        }
        Ok(())
    }

    pub fn load_json(&mut self, data: &str) -> SessionResult<()> {
        let saved = SavedGame::from_json(data)?;
        self.load(&saved)
    }

    pub fn save_to(&self, store: &mut dyn GameStore) -> SessionResult<()> {
        store.write(self.save_json()?);
        Ok(())
    }

    /// Load the stored game. Returns `false` if the store is empty.
    pub fn load_from(&mut self, store: &dyn GameStore) -> SessionResult<bool> {
        let Some(data) = store.read() else {
            return Ok(false);
        };
        self.load_json(&data)?;
        Ok(true)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color to move
    #[inline]
    pub fn turn(&self) -> Cell {
        self.turn
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn winner(&self) -> Option<Cell> {
        self.winner
    }

    /// Seconds on the game clock
    #[inline]
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replace the configuration and start a new game under it
    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
        self.new_game();
    }

    /// Record a stone already on the board and pass the turn
    fn commit(&mut self, pos: Pos, color: Cell) -> Move {
        let mv = Move {
            color,
            pos,
            id: self.next_id,
        };
        self.next_id += 1;
        self.history.push(mv);
        self.turn = color.opponent();
        debug!(%color, %pos, id = mv.id, "move committed");
        mv
    }

    fn ai_to_move(&self) -> bool {
        self.winner.is_none() && self.config.enable_ai && self.turn == self.config.ai_color()
    }

    /// Play the AI's move and update the winner
    fn ai_reply(&mut self) -> Option<Move> {
        self.waiting = true;
        let reply = self.ai_move();
        self.waiting = false;
        if reply.is_some() {
            self.winner = self.board.check_win();
        }
        reply
    }

    /// Search and commit the AI's reply.
    ///
    /// If the board rejects the searched move, the best remaining candidate
    /// the board accepts is played instead. With no playable cell the AI
    /// passes the turn back.
    fn ai_move(&mut self) -> Option<Move> {
        let ai = self.config.ai_color();
        let chosen = self.engine.get_move(&mut self.board, ai);

        let played = match chosen {
            Some(pos) => match self.board.set_cell(pos, ai) {
                Ok(()) => Some(pos),
                Err(err) => {
                    warn!(%pos, %err, "AI move rejected, trying next candidate");
                    self.fallback_move(ai, pos)
                }
            },
            None => None,
        };

        match played {
            Some(pos) => Some(self.commit(pos, ai)),
            None => {
                warn!(color = %ai, "AI has no playable move, passing");
                self.turn = ai.opponent();
                None
            }
        }
    }

    /// Commit the first candidate after `rejected` that the board accepts
    fn fallback_move(&mut self, ai: Cell, rejected: Pos) -> Option<Pos> {
        all_valid_moves(&self.board, ai)
            .into_iter()
            .map(|candidate| candidate.pos)
            .filter(|&pos| pos != rejected)
            .find(|&pos| self.board.set_cell(pos, ai).is_ok())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
