//! End-to-end behavior of the public API

use renju::board::TOTAL_CELLS;
use renju::search::Searcher;
use renju::{
    Board, BoardError, Cell, ForbiddenReason, MemoryStore, Pos, Session, SessionConfig,
    SessionError, BOARD_SIZE,
};

fn two_player() -> Session {
    Session::new(SessionConfig {
        enable_ai: false,
        ..SessionConfig::default()
    })
}

#[test]
fn test_occupied_cell_rejected_everywhere() {
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        let (row, col) = (pos.row as usize, pos.col as usize);
        let mut session = two_player();

        session.place(row, col).unwrap();
        let err = session.place(row, col).unwrap_err();
        assert_eq!(err, SessionError::Board(BoardError::Occupied { pos }));
        assert_eq!(session.board().get(pos), Cell::Black, "cell {pos} changed");
    }
}

#[test]
fn test_five_in_a_row_wins() {
    let mut board = Board::new();
    for col in 3..8 {
        board.set_cell(Pos::new(7, col), Cell::Black).unwrap();
    }
    assert_eq!(board.check_win(), Some(Cell::Black));
}

#[test]
fn test_double_three_rejected_and_rolled_back() {
    let mut board = Board::new();
    for (r, c) in [(7, 6), (7, 8), (6, 7), (8, 7)] {
        board.set_cell(Pos::new(r, c), Cell::Black).unwrap();
    }
    let before = board.clone();

    let err = board.set_cell(Pos::new(7, 7), Cell::Black).unwrap_err();
    assert_eq!(err, BoardError::Illegal(ForbiddenReason::DoubleThree));
    assert_eq!(board, before);
}

#[test]
fn test_double_four_rejected() {
    let mut board = Board::new();
    for (r, c) in [(7, 4), (7, 5), (7, 6), (4, 7), (5, 7), (6, 7)] {
        board.set_cell(Pos::new(r, c), Cell::Black).unwrap();
    }
    let err = board.set_cell(Pos::new(7, 7), Cell::Black).unwrap_err();
    assert_eq!(err, BoardError::Illegal(ForbiddenReason::DoubleFour));
    assert!(board.is_empty(Pos::new(7, 7)));
}

#[test]
fn test_overline_black_only() {
    let stones = [(7, 1), (7, 2), (7, 3), (7, 5), (7, 6)];

    let mut black = Board::new();
    let mut white = Board::new();
    for (r, c) in stones {
        black.set_cell(Pos::new(r, c), Cell::Black).unwrap();
        white.set_cell(Pos::new(r, c), Cell::White).unwrap();
    }

    assert_eq!(
        black.set_cell(Pos::new(7, 4), Cell::Black).unwrap_err(),
        BoardError::Illegal(ForbiddenReason::Overline)
    );
    assert!(black.is_empty(Pos::new(7, 4)));

    white.set_cell(Pos::new(7, 4), Cell::White).unwrap();
    assert_eq!(white.check_win(), Some(Cell::White));
}

#[test]
fn test_best_move_is_empty_cell() {
    let mut searcher = Searcher::new();
    let mut board = Board::new();
    let mut color = Cell::Black;

    for _ in 0..12 {
        let pos = searcher.get_best_move(&mut board, color).best_move.unwrap();
        assert!(board.is_empty(pos), "{color} picked occupied {pos}");
        board.place_stone(pos, color);
        if board.check_win().is_some() {
            break;
        }
        color = color.opponent();
    }
}

#[test]
fn test_empty_board_opens_center() {
    let mut searcher = Searcher::new();
    let mut board = Board::new();
    assert_eq!(
        searcher.get_best_move(&mut board, Cell::Black).best_move,
        Some(Pos::new(7, 7))
    );
}

#[test]
fn test_undo_counts() {
    let mut with_ai = Session::default();
    with_ai.place(7, 7).unwrap();
    let cells: Vec<Pos> = with_ai.history().iter().map(|mv| mv.pos).collect();
    assert_eq!(cells.len(), 2);

    assert_eq!(with_ai.undo().unwrap().len(), 2);
    assert!(with_ai.history().is_empty());
    assert!(cells.iter().all(|&pos| with_ai.board().is_empty(pos)));

    let mut without_ai = two_player();
    without_ai.place(7, 7).unwrap();
    without_ai.place(7, 8).unwrap();
    assert_eq!(without_ai.undo().unwrap().len(), 1);
    assert_eq!(without_ai.history().len(), 1);
    assert!(without_ai.board().is_empty(Pos::new(7, 8)));
    assert_eq!(without_ai.board().get(Pos::new(7, 7)), Cell::Black);
}

#[test]
fn test_save_load_round_trip() {
    let mut session = Session::default();
    session.place(7, 7).unwrap();
    session.place(2, 2).unwrap();
    for _ in 0..5 {
        session.tick();
    }

    let mut store = MemoryStore::new();
    session.save_to(&mut store).unwrap();

    let mut fresh = Session::default();
    assert!(fresh.load_from(&store).unwrap());
    assert_eq!(fresh.board(), session.board());
    assert_eq!(fresh.history(), session.history());
    assert_eq!(fresh.turn(), session.turn());
    assert_eq!(fresh.elapsed(), 5);
    assert_eq!(fresh.save(), session.save());
}

#[test]
fn test_corrupt_save_leaves_session_untouched() {
    let mut session = two_player();
    session.place(7, 7).unwrap();
    let before = session.save();

    let mut bad = before.clone();
    bad.board.truncate(BOARD_SIZE - 1);
    assert!(matches!(
        session.load(&bad),
        Err(SessionError::LoadParse(_))
    ));
    assert!(session.load_json("[]").is_err());
    assert_eq!(session.save(), before);
}

#[test]
fn test_ai_plays_white_after_seed() {
    let mut session = Session::new(SessionConfig {
        human_color: Cell::White,
        ..SessionConfig::default()
    });
    assert_eq!(session.turn(), Cell::White);

    let outcome = session.place(6, 6).unwrap();
    let reply = outcome.reply.unwrap();
    assert_eq!(reply.color, Cell::Black);
    assert_eq!(session.turn(), Cell::White);
    assert_eq!(session.history().len(), 3);
}
