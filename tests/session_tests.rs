//! Game session integration tests.
//!
//! Full games driven through `GameSession`: turn order, commit-or-reject
//! semantics, wall budgets, win detection, and history replay.

use palisade::core::{Action, BoardConfig, GameState, GameStatus, PlayerId, Position, Wall};
use palisade::rules::has_path_to_goal;
use palisade::GameSession;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn classic() -> GameSession {
    GameSession::new(BoardConfig::default(), "alice", "bob")
}

// =============================================================================
// Scripted Race
// =============================================================================

/// Head-on race down the center file. The pawns meet mid-board, Player Two
/// vaults over with a straight jump and wins the footrace by one ply.
#[test]
fn test_center_file_race() {
    let mut session = classic();

    let script = [
        (PlayerId::One, Position::new(4, 1)),
        (PlayerId::Two, Position::new(4, 7)),
        (PlayerId::One, Position::new(4, 2)),
        (PlayerId::Two, Position::new(4, 6)),
        (PlayerId::One, Position::new(4, 3)),
        (PlayerId::Two, Position::new(4, 5)),
        (PlayerId::One, Position::new(4, 4)),
        (PlayerId::Two, Position::new(4, 3)), // straight jump over (4, 4)
        (PlayerId::One, Position::new(4, 5)),
        (PlayerId::Two, Position::new(4, 2)),
        (PlayerId::One, Position::new(4, 6)),
        (PlayerId::Two, Position::new(4, 1)),
        (PlayerId::One, Position::new(4, 7)),
        (PlayerId::Two, Position::new(4, 0)),
    ];

    for (seat, target) in script {
        assert_eq!(session.state().turn, seat);
        session
            .apply(seat, Action::Move { position: target })
            .unwrap();
    }

    assert_eq!(session.state().status, GameStatus::Completed);
    assert_eq!(session.state().winner, Some(PlayerId::Two));
    assert_eq!(session.state().moves.len(), 14);

    // No play continues past the finish line.
    let late = session.apply(
        PlayerId::One,
        Action::Move {
            position: Position::new(4, 8),
        },
    );
    assert!(late.is_err());
}

/// Replaying a finished game's history into a fresh session reproduces
/// the exact final state.
#[test]
fn test_history_replay_is_deterministic() {
    let mut session = classic();

    let script = [
        (PlayerId::One, Action::Move { position: Position::new(4, 1) }),
        (PlayerId::Two, Action::PlaceWall { wall: Wall::horizontal(3, 1) }),
        (PlayerId::One, Action::Move { position: Position::new(3, 1) }),
        (PlayerId::Two, Action::Move { position: Position::new(4, 7) }),
        (PlayerId::One, Action::PlaceWall { wall: Wall::vertical(5, 6) }),
        (PlayerId::Two, Action::Move { position: Position::new(4, 6) }),
    ];
    for (seat, action) in script {
        session.apply(seat, action).unwrap();
    }

    let mut replay = classic();
    for record in session.state().moves.clone() {
        replay.apply(record.player, record.action).unwrap();
    }

    assert_eq!(replay.state(), session.state());
}

// =============================================================================
// Turn Order and Budgets
// =============================================================================

#[test]
fn test_out_of_turn_actions_are_rejected() {
    let mut session = classic();

    let result = session.apply(
        PlayerId::Two,
        Action::Move {
            position: Position::new(4, 7),
        },
    );
    assert!(result.is_err());

    // State is untouched by the rejection.
    assert_eq!(session.state().turn, PlayerId::One);
    assert!(session.state().moves.is_empty());
}

#[test]
fn test_wall_budget_runs_out() {
    let mut session = GameSession::new(BoardConfig::new(9, 1), "alice", "bob");

    session
        .apply(PlayerId::One, Action::PlaceWall { wall: Wall::horizontal(0, 4) })
        .unwrap();
    assert_eq!(session.state().player(PlayerId::One).walls_remaining, 0);

    // Two still has a wall of their own to spend.
    session
        .apply(PlayerId::Two, Action::PlaceWall { wall: Wall::horizontal(2, 4) })
        .unwrap();

    // One is out of walls; a further placement is refused outright.
    let refused = session.apply(
        PlayerId::One,
        Action::PlaceWall {
            wall: Wall::horizontal(6, 4),
        },
    );
    assert!(refused.is_err());
    assert_eq!(session.state().walls.len(), 2);

    // Pawn moves remain available.
    session
        .apply(PlayerId::One, Action::Move { position: Position::new(4, 1) })
        .unwrap();
}

// =============================================================================
// Snapshots
// =============================================================================

/// A mid-game state survives a JSON round trip intact, and actions are
/// tagged with their wire names.
#[test]
fn test_state_snapshot_round_trips() {
    let mut session = classic();
    session
        .apply(PlayerId::One, Action::Move { position: Position::new(4, 1) })
        .unwrap();
    session
        .apply(PlayerId::Two, Action::PlaceWall { wall: Wall::horizontal(3, 6) })
        .unwrap();

    let json = serde_json::to_string(session.state()).unwrap();
    assert!(json.contains("\"place_wall\""));
    assert!(json.contains("\"in_progress\""));

    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, session.state());
}

#[test]
fn test_seats_resolve_from_user_ids() {
    let mut session = classic();

    let seat = session.seat_of("bob").unwrap();
    assert_eq!(seat, PlayerId::Two);
    assert!(session.seat_of("carol").is_err());

    session.resign(seat).unwrap();
    assert_eq!(session.state().winner, Some(PlayerId::One));
}

// =============================================================================
// Random Playout
// =============================================================================

/// Seeded random playout. Every committed action must leave the state
/// self-consistent: distinct in-bounds pawns, contiguous ply numbers, and
/// above all a goal path for both players.
#[test]
fn test_random_playout_preserves_invariants() {
    let board = BoardConfig::default();
    let mut session = GameSession::new(board, "alice", "bob");
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..400 {
        if session.state().status != GameStatus::InProgress {
            break;
        }
        let seat = session.state().turn;

        let mut committed = false;
        if session.state().player(seat).walls_remaining > 0 && rng.gen_bool(0.25) {
            let x = rng.gen_range(0..8);
            let y = rng.gen_range(0..8);
            let wall = if rng.gen_bool(0.5) {
                Wall::horizontal(x, y)
            } else {
                Wall::vertical(x, y)
            };
            committed = session
                .apply(seat, Action::PlaceWall { wall })
                .is_ok();
        }
        if !committed {
            let moves = session.possible_moves(seat);
            let Some(&target) = moves.as_slice().choose(&mut rng) else {
                break;
            };
            session
                .apply(seat, Action::Move { position: target })
                .unwrap();
        }

        let state = session.state();
        let one = state.player(PlayerId::One);
        let two = state.player(PlayerId::Two);
        assert_ne!(one.position, two.position);
        assert!(board.contains(one.position));
        assert!(board.contains(two.position));
        for seat in PlayerId::both() {
            let player = state.player(seat);
            assert!(has_path_to_goal(
                board,
                &state.walls,
                player.position,
                player.goal_row
            ));
        }
        for (index, record) in state.moves.iter().enumerate() {
            assert_eq!(record.ply as usize, index + 1);
        }
    }

    // However the playout ended, a completed game names a winner standing
    // on their goal row.
    if session.state().status == GameStatus::Completed {
        let winner = session.state().winner.unwrap();
        let pawn = session.state().player(winner);
        assert_eq!(pawn.position.y, pawn.goal_row);
    } else {
        assert!(session.state().winner.is_none());
    }

    // The accumulated wall set is pairwise overlap-free.
    let walls: Vec<Wall> = session.state().walls.iter().copied().collect();
    for (i, a) in walls.iter().enumerate() {
        for b in walls.iter().skip(i + 1) {
            assert!(!a.overlaps(*b));
        }
    }
}
