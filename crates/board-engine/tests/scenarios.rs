//! End-to-end drag scenarios on the initial layout.

use board_core::{Cell, Color, PieceKind};
use board_engine::{CandidateMove, DropOutcome, Interaction, Session};

fn cell(name: &str) -> Cell {
    Cell::from_algebraic(name).expect("valid cell name")
}

/// Drags from `from` to `to` and returns the drop outcome.
fn drag(session: &mut Session, from: &str, to: &str) -> DropOutcome {
    session.pointer_down(cell(from)).expect("pointer down");
    session.pointer_move(cell(to));
    session.pointer_up(cell(to)).expect("pointer up")
}

fn commit(session: &mut Session, from: &str, to: &str) {
    let outcome = drag(session, from, to);
    assert!(
        matches!(outcome, DropOutcome::Committed(_)),
        "{} -> {} should commit, got {:?}",
        from,
        to,
        outcome
    );
}

#[test]
fn pawn_single_step_commits_and_flips_turn() {
    let mut session = Session::new();
    let origin = Cell::new(4, 6);
    let target = Cell::new(4, 5);
    let pawn = session.board().get(origin).unwrap().unwrap().id;

    assert!(session.pointer_down(origin).unwrap());
    let outcome = session.pointer_up(target).unwrap();

    match outcome {
        DropOutcome::Committed(m) => {
            assert_eq!(m.piece, pawn);
            assert_eq!(m.from, origin);
            assert_eq!(m.to, target);
            assert_eq!(m.captured, None);
        }
        other => panic!("expected commit, got {:?}", other),
    }
    assert_eq!(session.current_turn(), Color::Black);
    assert!(session.board().is_empty(origin).unwrap());
    assert_eq!(session.board().get(target).unwrap().map(|p| p.id), Some(pawn));
    assert_eq!(session.state(), &Interaction::Idle);
    assert!(session.board().is_consistent());
}

#[test]
fn drop_on_origin_is_a_no_op() {
    let mut session = Session::new();
    let before = session.board().clone();

    assert_eq!(drag(&mut session, "e2", "e2"), DropOutcome::Cancelled);
    assert_eq!(session.current_turn(), Color::White);
    assert_eq!(session.board(), &before);
    assert!(session.held_piece().is_none());
}

#[test]
fn drop_on_unreachable_cell_is_a_no_op() {
    let mut session = Session::new();
    let before = session.board().clone();

    assert_eq!(drag(&mut session, "e2", "e5"), DropOutcome::Cancelled);
    assert_eq!(drag(&mut session, "b1", "b3"), DropOutcome::Cancelled);
    assert_eq!(session.current_turn(), Color::White);
    assert_eq!(session.board(), &before);
}

#[test]
fn wrong_color_pick_up_is_ignored() {
    let mut session = Session::new();
    let before = session.board().clone();

    assert!(!session.pointer_down(cell("e7")).unwrap());
    assert_eq!(session.state(), &Interaction::Idle);
    assert!(session.held_piece().is_none());
    assert!(session.legal_targets().is_empty());

    assert_eq!(session.pointer_up(cell("e5")).unwrap(), DropOutcome::Ignored);
    assert_eq!(session.board(), &before);
    assert_eq!(session.current_turn(), Color::White);
}

#[test]
fn black_knight_captures_white_pawn() {
    let mut session = Session::new();
    commit(&mut session, "c2", "c4");
    commit(&mut session, "h7", "h6");
    commit(&mut session, "c4", "c5");
    commit(&mut session, "h6", "h5");
    commit(&mut session, "c5", "c6");

    let knight_cell = Cell::new(1, 0);
    let victim_cell = cell("c6");
    assert_eq!(victim_cell, Cell::new(2, 2));
    let knight = session.board().get(knight_cell).unwrap().unwrap().id;
    let victim = session.board().get(victim_cell).unwrap().unwrap().id;
    assert_eq!(session.current_turn(), Color::Black);

    assert!(session.pointer_down(knight_cell).unwrap());
    assert!(session
        .legal_targets()
        .contains(&CandidateMove::capture(victim_cell)));

    let outcome = session.pointer_up(victim_cell).unwrap();
    let DropOutcome::Committed(m) = outcome else {
        panic!("expected commit, got {:?}", outcome);
    };
    let captured = m.captured.expect("capture");
    assert_eq!(captured.id, victim);
    assert_eq!(captured.kind, PieceKind::Pawn);
    assert_eq!(captured.color, Color::White);

    assert!(session.board().piece(victim).is_none());
    assert_eq!(session.board().piece_count(), 19);
    assert_eq!(session.board().piece(knight).unwrap().cell, victim_cell);
    assert!(session.board().is_empty(knight_cell).unwrap());
    assert_eq!(session.current_turn(), Color::White);
    assert!(session.board().is_consistent());
}

#[test]
fn pawn_loses_two_step_after_leaving_start_rank() {
    let mut session = Session::new();
    commit(&mut session, "e2", "e3");
    commit(&mut session, "a7", "a6");

    session.pointer_down(cell("e3")).unwrap();
    assert_eq!(
        session.legal_targets(),
        &[CandidateMove::quiet(cell("e4"))]
    );
    assert_eq!(drag(&mut session, "e3", "e5"), DropOutcome::Cancelled);
}

#[test]
fn pawn_diagonal_depends_on_occupant() {
    // White pawn on e2 with empty, black-held and white-held diagonals.
    let mut session = Session::new();
    commit(&mut session, "g1", "f3");
    commit(&mut session, "b8", "c6");
    commit(&mut session, "a2", "a3");
    commit(&mut session, "c6", "d4");
    commit(&mut session, "a3", "a4");
    commit(&mut session, "d4", "e6");
    commit(&mut session, "a4", "a5");
    commit(&mut session, "e6", "c5");
    commit(&mut session, "a5", "a6");
    commit(&mut session, "c5", "d3");

    // Black knight on d3, white knight on f3.
    session.pointer_down(cell("e2")).unwrap();
    let targets = session.legal_targets().to_vec();
    assert!(targets.contains(&CandidateMove::capture(cell("d3"))));
    assert!(!targets.iter().any(|m| m.target == cell("f3")));
    assert!(targets.contains(&CandidateMove::quiet(cell("e3"))));

    // Pawn on a6 faces black pawns on a7 and b7; only b7 is a capture.
    session.pointer_down(cell("a6")).unwrap();
    assert_eq!(
        session.legal_targets(),
        &[CandidateMove::capture(cell("b7"))]
    );

    // Pawn on h2 has an empty diagonal on g3.
    session.pointer_down(cell("h2")).unwrap();
    assert!(!session
        .legal_targets()
        .iter()
        .any(|m| m.target == cell("g3")));
}

#[test]
fn legal_targets_are_stable_between_events() {
    let mut session = Session::new();
    session.pointer_down(cell("b1")).unwrap();
    let first = session.legal_targets().to_vec();
    let second = session.legal_targets().to_vec();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn occupancy_reflects_moves() {
    let mut session = Session::new();
    commit(&mut session, "g1", "f3");

    let occupied: Vec<Cell> = session
        .current_occupancy()
        .filter_map(|(cell, piece)| piece.map(|_| cell))
        .collect();
    assert_eq!(occupied.len(), 20);
    assert!(occupied.contains(&cell("f3")));
    assert!(!occupied.contains(&cell("g1")));
}
