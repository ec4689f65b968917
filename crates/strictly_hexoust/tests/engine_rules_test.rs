//! Tests for the HexOust turn controller through the public API.

use strictly_hexoust::{
    Engine, EngineError, HexCoordinate, MoveKind, MoveResult, Occupancy, Rejection, Stone,
    TurnState, layout,
};

fn hex(q: i32, r: i32, s: i32) -> HexCoordinate {
    HexCoordinate::new(q, r, s).expect("valid coordinate")
}

/// Center plus its six neighbors.
fn flower() -> Vec<HexCoordinate> {
    vec![
        hex(0, 0, 0),
        hex(1, -1, 0),
        hex(1, 0, -1),
        hex(0, 1, -1),
        hex(-1, 1, 0),
        hex(-1, 0, 1),
        hex(0, -1, 1),
    ]
}

fn play_all(engine: &mut Engine, moves: &[HexCoordinate]) {
    for coordinate in moves {
        let result = engine.submit_move(*coordinate);
        assert!(result.is_accepted(), "{coordinate} was {result}");
    }
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        Engine::new(Vec::new(), Stone::Red).unwrap_err(),
        EngineError::EmptyBoard
    );
    assert_eq!(
        Engine::new(vec![hex(0, 0, 0), hex(1, -1, 0), hex(0, 0, 0)], Stone::Red).unwrap_err(),
        EngineError::DuplicateCoordinate {
            coordinate: hex(0, 0, 0)
        }
    );
    assert!(matches!(
        Engine::from_triples([[1, 0, 0]], Stone::Red),
        Err(EngineError::InvalidCoordinate { .. })
    ));
}

#[test]
fn test_configured_first_mover() {
    let engine = Engine::new(flower(), Stone::Blue).unwrap();
    assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Blue));
}

#[test]
fn test_seven_cell_capture_wins_without_alternating() {
    let mut engine = Engine::new(flower(), Stone::Red).unwrap();

    // Red opens on the ring.
    assert_eq!(engine.submit_move(hex(1, -1, 0)), MoveResult::Accepted(MoveKind::Placed));
    assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Blue));

    // Blue takes the center next to red: equal groups, so a plain placement.
    assert_eq!(engine.submit_move(hex(0, 0, 0)), MoveResult::Accepted(MoveKind::Placed));
    assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Red));

    // Red on the far side, touching only blue.
    assert_eq!(engine.submit_move(hex(-1, 0, 1)), MoveResult::Accepted(MoveKind::Placed));
    assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Blue));

    // Blue joins the center: a group of two against two lone red stones.
    assert_eq!(
        engine.submit_move(hex(1, 0, -1)),
        MoveResult::Accepted(MoveKind::Captured { groups: 2, stones: 2 })
    );
    assert_eq!(engine.current_turn(), TurnState::Won(Stone::Blue));
    assert_eq!(engine.occupancy_of(hex(1, -1, 0)), Some(Occupancy::Empty));
    assert_eq!(engine.occupancy_of(hex(-1, 0, 1)), Some(Occupancy::Empty));
    assert_eq!(engine.stone_count(Stone::Red), 0);

    // Nothing moves after the game is won.
    let before = engine.snapshot();
    assert_eq!(
        engine.submit_move(hex(0, 1, -1)).rejection(),
        Some(Rejection::GameOver)
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_four_cell_capture_leads_to_win() {
    let coords = vec![hex(0, 0, 0), hex(1, -1, 0), hex(1, 0, -1), hex(0, 1, -1)];
    let mut engine = Engine::new(coords, Stone::Red).unwrap();

    play_all(&mut engine, &[hex(0, 0, 0), hex(1, -1, 0)]);
    assert_eq!(
        engine.submit_move(hex(1, 0, -1)),
        MoveResult::Accepted(MoveKind::Captured { groups: 1, stones: 1 })
    );
    assert!(!engine.submit_move(hex(0, 0, 0)).is_accepted());
    assert!(!engine.submit_move(hex(0, 1, -1)).is_accepted());
    assert_eq!(engine.current_turn(), TurnState::Won(Stone::Red));
}

#[test]
fn test_capture_without_win_repeats_mover() {
    let mut engine = Engine::new(layout::hexagon(2).unwrap(), Stone::Red).unwrap();

    play_all(
        &mut engine,
        &[
            hex(-2, 0, 2), // red, out of the way
            hex(0, 0, 0),  // blue
            hex(1, -1, 0), // red, touching blue one on one
        ],
    );
    assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Blue));

    // Blue pair captures red (1,-1,0); red (-2,0,2) survives.
    assert_eq!(
        engine.submit_move(hex(1, 0, -1)),
        MoveResult::Accepted(MoveKind::Captured { groups: 1, stones: 1 })
    );
    assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Blue));
    assert_eq!(engine.stone_count(Stone::Red), 1);

    // Blue plays again, and a plain placement hands the turn over.
    assert_eq!(engine.submit_move(hex(0, 2, -2)), MoveResult::Accepted(MoveKind::Placed));
    assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Red));
}

#[test]
fn test_own_neighbor_rejects_plain_placement() {
    let mut engine = Engine::new(layout::hexagon(2).unwrap(), Stone::Red).unwrap();
    play_all(&mut engine, &[hex(0, 0, 0), hex(2, 0, -2)]);

    let before = engine.snapshot();
    assert_eq!(
        engine.submit_move(hex(1, -1, 0)).rejection(),
        Some(Rejection::AdjacentToOwnStone(hex(1, -1, 0)))
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_equal_size_boundary_reverts_exactly() {
    let mut engine = Engine::new(layout::hexagon(3).unwrap(), Stone::Red).unwrap();

    play_all(
        &mut engine,
        &[
            hex(2, -1, -1), // red
            hex(1, -1, 0),  // blue, beside red
            hex(-3, 0, 3),  // red, far away
            hex(1, 0, -1),  // blue pair captures (2,-1,-1)
            hex(0, 3, -3),  // blue again, quiet
            hex(-1, 0, 1),  // red, alone
            hex(3, -3, 0),  // blue, quiet
        ],
    );
    assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Red));

    // Red at the center would make a pair touching the blue pair: 2 is not
    // greater than 2, and the cell touches red, so nothing may happen.
    let before = engine.snapshot();
    assert_eq!(
        engine.submit_move(hex(0, 0, 0)),
        MoveResult::Rejected(Rejection::CaptureBlocked {
            group_size: 2,
            blocking_size: 2
        })
    );
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.occupancy_of(hex(0, 0, 0)), Some(Occupancy::Empty));
    assert!(!engine.legal_moves().contains(&hex(0, 0, 0)));
}

#[test]
fn test_queries_are_idempotent() {
    let mut engine = Engine::new(flower(), Stone::Red).unwrap();
    play_all(&mut engine, &[hex(0, 0, 0)]);

    let turn = engine.current_turn();
    let occupancy = engine.occupancy_of(hex(0, 0, 0));
    for _ in 0..3 {
        assert_eq!(engine.current_turn(), turn);
        assert_eq!(engine.occupancy_of(hex(0, 0, 0)), occupancy);
        assert_eq!(engine.occupancy_of(hex(4, -4, 0)), None);
    }
}

#[test]
fn test_neighbors_are_unit_steps_on_board() {
    let engine = Engine::new(layout::hexagon(3).unwrap(), Stone::Red).unwrap();
    for coordinate in layout::hexagon(4).unwrap() {
        let neighbors = engine.neighbors_of(coordinate);
        assert!(neighbors.len() <= 6);
        for neighbor in neighbors {
            assert_ne!(neighbor, coordinate);
            assert_eq!(neighbor.distance(coordinate), 1);
            assert!(engine.occupancy_of(neighbor).is_some());
        }
    }
}
