//! Test suite for the sliding-block puzzle searches
//! Checks search results against exhaustive reference distances

mod common;

use std::collections::{HashMap, HashSet};

use boardsearch::{
    Error, solve_astar, solve_bfs,
    config::{PuzzleConfig, SearchLimits},
    grid::Position,
    ports::Heuristic,
    search::{a_star, breadth_first},
    sliding::{CLASSIC_START, SlidingBoard},
};

use common::{distances_to_goal, reachable};

fn assert_valid_path(path: &[SlidingBoard]) {
    assert!(path.last().unwrap().is_goal());
    for pair in path.windows(2) {
        assert!(
            pair[0].successors().contains(&pair[1]),
            "{} does not lead to {}",
            pair[0].serialize(),
            pair[1].serialize()
        );
    }
}

mod board_values {
    use super::*;

    #[test]
    fn test_round_trip_over_reachable_boards() {
        let start = SlidingBoard::parse(CLASSIC_START).unwrap();
        for board in reachable(&start) {
            let text = board.serialize();
            assert_eq!(SlidingBoard::parse(&text).unwrap(), board);
            assert_eq!(SlidingBoard::parse(&text).unwrap().serialize(), text);
        }
    }

    #[test]
    fn test_equal_boards_hash_identically() {
        let start = SlidingBoard::parse(CLASSIC_START).unwrap();
        let moved = start
            .clone_with_move('a', Position::new(0, 3))
            .unwrap()
            .clone_with_move('a', Position::new(0, 5))
            .unwrap();
        assert_eq!(moved, start);

        let mut set = HashSet::new();
        set.insert(start.clone());
        assert!(!set.insert(moved));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_successors_are_independent_snapshots() {
        let start = SlidingBoard::parse(CLASSIC_START).unwrap();
        let before = start.serialize();
        let successors = start.successors();
        assert_eq!(start.serialize(), before);
        let distinct: HashSet<String> = successors.iter().map(|b| b.serialize()).collect();
        assert_eq!(distinct.len(), successors.len());
    }

    #[test]
    fn test_malformed_boards_are_rejected() {
        for text in [
            "  o aa|  o   |xxo   |ppp  q|     q",
            "  o aa|  o   |xxo   |ppp  q|     q|    q",
            "  o aa|  o   |xxo   |ppp  q|     q|     Q",
        ] {
            assert!(SlidingBoard::parse(text).unwrap_err().is_malformed_board());
        }
    }
}

mod optimality {
    use super::*;

    #[test]
    fn test_classic_board_bfs_is_shortest() {
        let start = SlidingBoard::parse(CLASSIC_START).unwrap();
        let dist = distances_to_goal(&start);
        let solution = solve_bfs(&start).unwrap();

        assert_eq!(solution.moves(), dist[&start.serialize()]);
        assert_eq!(solution.moves(), 9);
        assert_eq!(solution.path.first(), Some(&start));
        assert_valid_path(&solution.path);
    }

    #[test]
    fn test_classic_board_astar_matches_bfs() {
        let start = SlidingBoard::parse(CLASSIC_START).unwrap();
        let bfs = solve_bfs(&start).unwrap();
        let astar = solve_astar(&start).unwrap();

        assert_eq!(astar.moves(), bfs.moves());
        assert_valid_path(&astar.path);
    }

    #[test]
    fn test_heuristic_never_overestimates() {
        let start = SlidingBoard::parse(CLASSIC_START).unwrap();
        let dist = distances_to_goal(&start);
        for board in reachable(&start) {
            let truth = dist[&board.serialize()];
            assert!(
                board.estimate() <= truth,
                "estimate {} exceeds {} for {}",
                board.estimate(),
                truth,
                board.serialize()
            );
            assert_eq!(board.estimate() == 0, board.is_goal());
        }
    }

    #[test]
    fn test_astar_is_optimal_from_every_reachable_board() {
        let start = SlidingBoard::parse(CLASSIC_START).unwrap();
        let dist: HashMap<String, usize> = distances_to_goal(&start);
        for board in reachable(&start).into_iter().step_by(7) {
            let solution = solve_astar(&board).unwrap();
            assert_eq!(solution.moves(), dist[&board.serialize()]);
        }
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_single_blocker_needs_two_moves() {
        let start = SlidingBoard::parse("      |      |xxa   |  a   |      |      ").unwrap();
        assert_eq!(start.estimate(), 2);

        for solution in [solve_bfs(&start).unwrap(), solve_astar(&start).unwrap()] {
            assert_eq!(solution.moves(), 2);
            assert_valid_path(&solution.path);
            // the blocker leaves the exit row first
            assert_eq!(solution.path[1].cell(2, 2), Some(' '));
            assert_eq!(solution.path[1].cell(2, 0), Some('x'));
        }
    }

    #[test]
    fn test_solved_start_is_a_zero_move_path() {
        let start = SlidingBoard::parse("      |      |    xx|      |      |      ").unwrap();
        let solution = solve_astar(&start).unwrap();
        assert_eq!(solution.moves(), 0);
        assert_eq!(solution.path, vec![start]);
    }

    #[test]
    fn test_permanent_blocker_is_unsolvable() {
        // a four-cell piece always covers the exit row
        let start = SlidingBoard::parse("      |      |xxa   |  a   |  a   |  a   ").unwrap();
        assert_eq!(reachable(&start).len(), 3);

        assert!(matches!(solve_bfs(&start), Err(Error::Unsolvable { expanded: 3 })));
        assert!(matches!(solve_astar(&start), Err(Error::Unsolvable { expanded: 3 })));
    }

    #[test]
    fn test_budget_is_reported_separately() {
        let start = SlidingBoard::parse(CLASSIC_START).unwrap();
        let limits = SearchLimits::unlimited().with_max_expansions(4);
        assert!(matches!(
            breadth_first(&start, limits),
            Err(Error::BudgetExhausted { expanded: 4 })
        ));
        assert!(matches!(
            a_star(&start, limits),
            Err(Error::BudgetExhausted { expanded: 4 })
        ));
    }

    #[test]
    fn test_custom_rules_small_board() {
        // 4x4 board, exit on row 1, target 'x'
        let config = PuzzleConfig::new(4, 4).with_exit_row(1);
        let start = SlidingBoard::parse_with(" b  |xxa |  a |    ", config).unwrap();
        let bfs = solve_bfs(&start).unwrap();
        let astar = solve_astar(&start).unwrap();
        assert_eq!(bfs.moves(), 2);
        assert_eq!(astar.moves(), 2);
        assert_eq!(bfs.goal().unwrap().cell(1, 3), Some('x'));
    }
}
