mod common;

use eight_puzzle::{
    generate_solvable_puzzle, replay, seeded_rng, solve, solve_with_stats, Board, Heuristic,
    HeuristicKind, LinearConflict, Manhattan, MisplacedTiles, Move,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn solved_board_returns_empty_path() {
    for kind in HeuristicKind::ALL {
        assert_eq!(solve(&Board::GOAL, &kind), Some(Vec::new()), "{kind}");
    }
}

#[test]
fn blank_next_to_goal_cell() {
    assert_eq!(solve(&board("1,2,3,4,5,6,7,0,8"), &Manhattan), Some(vec![Move::Right]));
    assert_eq!(
        solve(&board("1,2,3,4,5,6,0,7,8"), &Manhattan),
        Some(vec![Move::Right, Move::Right])
    );
}

#[test]
fn unsolvable_board_exhausts_its_component() {
    let outcome = solve_with_stats(&board("2,1,3,4,5,6,7,8,0"), &Manhattan);
    assert_eq!(outcome.moves, None);
    // The odd-parity component is the same size as the solvable one.
    assert_eq!(outcome.stats.expanded, 181_440);
}

#[test]
fn heuristics_never_overestimate() {
    let table = common::goal_distances();
    // Walk the table in a fixed stride to cover every depth.
    for (board, &dist) in table.iter().step_by(97) {
        for kind in HeuristicKind::ALL {
            assert!(
                kind.estimate(board) <= dist,
                "{kind} overestimates {:?}: {} > {}",
                board.tiles(),
                kind.estimate(board),
                dist
            );
        }
    }
}

#[test]
fn heuristics_are_consistent() {
    let table = common::goal_distances();
    for (board, _) in table.iter().step_by(211) {
        for kind in HeuristicKind::ALL {
            let h = kind.estimate(board);
            for (_, next) in board.successors() {
                assert!(h <= kind.estimate(&next) + 1, "{kind} inconsistent at {:?}", board.tiles());
            }
        }
    }
}

#[test]
fn astar_matches_bfs_length_with_manhattan() {
    let table = common::goal_distances();
    let mut rng = seeded_rng(1);
    for _ in 0..25 {
        let start = generate_solvable_puzzle(&mut rng);
        let moves = solve(&start, &Manhattan).unwrap();
        assert_eq!(moves.len() as u32, table[&start]);
        assert!(replay(&start, &moves).is_goal());
    }
}

#[test]
fn astar_matches_bfs_length_with_linear_conflict() {
    let table = common::goal_distances();
    let mut rng = seeded_rng(2);
    for _ in 0..25 {
        let start = generate_solvable_puzzle(&mut rng);
        let moves = solve(&start, &LinearConflict).unwrap();
        assert_eq!(moves.len() as u32, table[&start]);
        assert!(replay(&start, &moves).is_goal());
    }
}

#[test]
fn astar_matches_bfs_length_with_misplaced_tiles() {
    let table = common::goal_distances();
    // Misplaced tiles expands far more, so stick to shallower boards.
    let starts: Vec<(&Board, u32)> = table
        .iter()
        .filter(|&(_, &d)| (10..=18).contains(&d))
        .step_by(4001)
        .map(|(b, &d)| (b, d))
        .take(10)
        .collect();
    assert!(!starts.is_empty());

    for (start, dist) in starts {
        let moves = solve(start, &MisplacedTiles).unwrap();
        assert_eq!(moves.len() as u32, dist);
        assert!(replay(start, &moves).is_goal());
    }
}

#[test]
fn tighter_heuristic_expands_fewer_nodes() {
    let start = board("8,6,7,2,5,4,3,0,1");
    let manhattan = solve_with_stats(&start, &Manhattan);
    let misplaced = solve_with_stats(&start, &MisplacedTiles);
    let conflict = solve_with_stats(&start, &LinearConflict);

    assert_eq!(manhattan.moves.as_ref().map(Vec::len), Some(31));
    assert_eq!(misplaced.moves.as_ref().map(Vec::len), Some(31));
    assert_eq!(conflict.moves.as_ref().map(Vec::len), Some(31));
    assert!(manhattan.stats.expanded < misplaced.stats.expanded);
}

#[test]
fn same_input_same_solution() {
    let start = generate_solvable_puzzle(&mut seeded_rng(99));
    assert_eq!(solve(&start, &Manhattan), solve(&start, &Manhattan));
}
