#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;
    use strum::VariantArray;

    use crate::{
        cheapest_cost, explore, on_best_paths, regions, Coordinate, DenseGrid, Direction,
        DistanceTable, Grid, GridError, SparseGrid,
    };

    #[test]
    fn opposite_is_an_involution() {
        for &direction in Direction::VARIANTS {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn rotation_is_invertible() {
        for &direction in Direction::VARIANTS {
            for left in [false, true] {
                assert_eq!(direction.rotate(left).rotate(!left), direction);
            }
        }
    }

    #[test]
    fn rotation_stays_within_each_subset() {
        for direction in Direction::ORTHOGONAL {
            assert!(Direction::ORTHOGONAL.contains(&direction.rotate(false)));
        }
        for direction in Direction::DIAGONAL {
            assert!(Direction::DIAGONAL.contains(&direction.rotate(true)));
        }
    }

    #[test]
    fn orthogonal_and_diagonal_split_the_compass() {
        let all: FxHashSet<Direction> = Direction::ORTHOGONAL
            .iter()
            .chain(&Direction::DIAGONAL)
            .copied()
            .collect();
        assert_eq!(all.len(), Direction::VARIANTS.len());
        assert!(Direction::ORTHOGONAL.iter().all(|d| !Direction::DIAGONAL.contains(d)));
    }

    #[test]
    fn step_then_step_back_returns_home() {
        let co = Coordinate::new(3, -7);
        for &direction in Direction::VARIANTS {
            assert_eq!(co.step(direction).step(direction.opposite()), co);
        }
    }

    #[test]
    fn negative_step_amount_walks_backward() {
        let co = Coordinate::new(0, 0);
        assert_eq!(co.step_by(Direction::South, -2), co.step_by(Direction::North, 2));
        assert_eq!(co.step_by(Direction::NorthEast, 3), Coordinate::new(-3, 3));
    }

    #[test]
    fn neighbours_cover_the_requested_directions() {
        let co = Coordinate::new(5, 5);
        assert_eq!(co.neighbours(false).count(), 4);
        assert_eq!(co.neighbours(true).count(), 8);
        for (direction, neighbour) in co.neighbours(true) {
            assert_eq!(neighbour, co.step(direction));
        }
        assert!(co.neighbours(false).any(|(d, n)| d == Direction::North && n == Coordinate::new(4, 5)));
    }

    #[test]
    fn manhattan_distance_is_symmetric_and_zero_on_self() {
        let a = Coordinate::new(2, -3);
        let b = Coordinate::new(-1, 4);
        assert_eq!(Coordinate::manhattan_distance(a, b), 10);
        assert_eq!(
            Coordinate::manhattan_distance(a, b),
            Coordinate::manhattan_distance(b, a)
        );
        assert_eq!(Coordinate::manhattan_distance(a, a), 0);
    }

    #[test]
    fn dense_grid_bounds_round_trip() {
        let grid = DenseGrid::from_input("abc\ndef").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        for x in 0..2 {
            for y in 0..3 {
                assert!(grid.is_in_bounds(Coordinate::new(x, y)));
            }
        }
        for outside in [
            Coordinate::new(-1, 0),
            Coordinate::new(0, -1),
            Coordinate::new(2, 0),
            Coordinate::new(0, 3),
        ] {
            assert!(!grid.is_in_bounds(outside));
            assert_eq!(grid.get(outside), None);
        }
        assert_eq!(grid[Coordinate::new(1, 2)], 'f');
    }

    #[test]
    fn dense_grid_rejects_bad_input() {
        assert_eq!(DenseGrid::from_input(""), Err(GridError::Empty));
        assert_eq!(
            DenseGrid::from_rows(vec![vec![1, 2], vec![3]]),
            Err(GridError::Ragged { row: 1 })
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn dense_grid_read_out_of_bounds_fails_fast() {
        let grid = DenseGrid::from_input("ab\ncd").unwrap();
        let _ = grid[Coordinate::new(2, 0)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn dense_grid_write_out_of_bounds_fails_fast() {
        let mut grid = DenseGrid::from_input("ab\ncd").unwrap();
        grid[Coordinate::new(0, 2)] = 'x';
    }

    #[test]
    fn sparse_grid_bounds_follow_inserts() {
        let mut grid = SparseGrid::new();
        assert_eq!(grid.bounds(), None);
        assert!(!grid.is_in_bounds(Coordinate::new(0, 0)));

        grid.insert(Coordinate::new(1, 1), 'a');
        grid.insert(Coordinate::new(-2, 3), 'b');
        assert_eq!(
            grid.bounds(),
            Some((Coordinate::new(-2, 1), Coordinate::new(1, 3)))
        );
        assert!(grid.is_in_bounds(Coordinate::new(0, 2)));
        assert!(!grid.is_in_bounds(Coordinate::new(2, 1)));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn sparse_grid_render_substitutes_the_filler() {
        let mut grid = SparseGrid::new();
        grid.insert(Coordinate::new(1, 1), 'a');
        grid.insert(Coordinate::new(-2, 3), 'b');
        assert_eq!(grid.render('.', |&value| value), "..b\n...\n...\na..\n");
    }

    #[test]
    #[should_panic(expected = "no cell at")]
    fn sparse_grid_missing_key_fails_fast() {
        let mut grid = SparseGrid::new();
        grid.insert(Coordinate::new(0, 0), 'a');
        let _ = grid[Coordinate::new(0, 1)];
    }

    #[test]
    fn unobstructed_search_cost_is_the_manhattan_distance() {
        let grid = DenseGrid::filled(10, 10, ());
        let start = Coordinate::new(1, 2);
        let goal = Coordinate::new(7, 8);
        let cost = cheapest_cost(
            start,
            |&co: &Coordinate| {
                co.neighbours(false)
                    .filter(|&(_, next)| grid.is_in_bounds(next))
                    .map(|(_, next)| (next, 1))
                    .collect::<Vec<_>>()
            },
            |&co| co == goal,
        );
        assert_eq!(cost, Some(Coordinate::manhattan_distance(start, goal)));
    }

    #[test]
    fn unreachable_goal_reports_no_distance() {
        let grid = DenseGrid::from_input("..#.\n..#.\n..#.").unwrap();
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(2, 3);
        let successors = |&co: &Coordinate| {
            co.neighbours(false)
                .filter(|&(_, next)| grid.get(next).is_some_and(|&c| c != '#'))
                .map(|(_, next)| (next, 1))
                .collect::<Vec<_>>()
        };

        assert_eq!(cheapest_cost(start, successors, |&co| co == goal), None);

        let table = explore(start, successors, |&co| co == goal, |_| 0);
        assert_eq!(table.distance(&goal), None);
        assert_eq!(table.best_goal_cost(), None);
        // the near side of the wall was still explored
        assert_eq!(table.distance(&Coordinate::new(2, 1)), Some(3));
    }

    const MAZE: &str = "###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############";

    type ReindeerState = (Coordinate, Direction);

    // Cost model of the turn-penalty maze: walking ahead costs 1, turning 90° costs
    // 1000, and the facing direction is part of the search state.
    fn explore_maze(grid: &DenseGrid<char>) -> (DistanceTable<ReindeerState>, Coordinate) {
        let start = grid.find(|&c| c == 'S').unwrap();
        let goal = grid.find(|&c| c == 'E').unwrap();
        let table = explore(
            (start, Direction::East),
            |&(co, direction): &ReindeerState| {
                let mut next = Vec::with_capacity(3);
                let ahead = co.step(direction);
                if grid.get(ahead).is_some_and(|&c| c != '#') {
                    next.push(((ahead, direction), 1));
                }
                for left in [false, true] {
                    next.push(((co, direction.rotate(left)), 1000));
                }
                next
            },
            |&(co, _)| co == goal,
            |&(co, direction)| {
                // at least one turn per axis still to cover while not facing it
                let mut turns = 0;
                if co.x != goal.x
                    && direction != if co.x < goal.x { Direction::South } else { Direction::North }
                {
                    turns += 1;
                }
                if co.y != goal.y
                    && direction != if co.y < goal.y { Direction::East } else { Direction::West }
                {
                    turns += 1;
                }
                1000 * turns + Coordinate::manhattan_distance(co, goal)
            },
        );
        (table, goal)
    }

    #[test]
    fn turn_penalty_maze_best_cost() {
        let grid = DenseGrid::from_input(MAZE).unwrap();
        let (table, goal) = explore_maze(&grid);
        assert_eq!(table.best_goal_cost(), Some(7036));
        let at_goal = Direction::ORTHOGONAL
            .iter()
            .filter_map(|&direction| table.distance(&(goal, direction)))
            .min();
        assert_eq!(at_goal, Some(7036));
    }

    #[test]
    fn turn_penalty_maze_tiles_on_optimal_paths() {
        let grid = DenseGrid::from_input(MAZE).unwrap();
        let (table, goal) = explore_maze(&grid);
        let states = on_best_paths(
            &table,
            Direction::ORTHOGONAL.map(|direction| (goal, direction)),
            |&(co, direction): &ReindeerState| {
                let mut previous = Vec::with_capacity(3);
                previous.push(((co.step(direction.opposite()), direction), 1));
                for left in [false, true] {
                    previous.push(((co, direction.rotate(left)), 1000));
                }
                previous
            },
        );
        let tiles: FxHashSet<Coordinate> = states.iter().map(|&(co, _)| co).collect();
        assert_eq!(tiles.len(), 45);
    }

    #[test]
    fn region_pricing() {
        let grid = DenseGrid::from_input("AAAA\nBBCD\nBBCC\nEEEC").unwrap();
        let fenced: usize = regions(&grid)
            .iter()
            .map(|(_, region)| region.area() * region.perimeter())
            .sum();
        assert_eq!(fenced, 140);

        let discounted: usize = regions(&grid)
            .iter()
            .map(|(_, region)| region.area() * region.sides())
            .sum();
        assert_eq!(discounted, 80);
    }

    #[test]
    fn regions_partition_every_cell() {
        let grid = DenseGrid::from_input("AAAA\nBBCD\nBBCC\nEEEC").unwrap();
        let found = regions(&grid);
        assert_eq!(found.len(), 5);
        assert_eq!(found.iter().map(|(_, region)| region.area()).sum::<usize>(), 16);

        let mut seen: FxHashSet<Coordinate> = FxHashSet::default();
        for (value, region) in &found {
            for co in region.iter() {
                assert_eq!(grid[co], *value);
                assert!(seen.insert(co), "cell in two regions");
            }
        }
    }

    #[test]
    fn distance_tables_compare_by_contents() {
        let grid = DenseGrid::filled(3, 3, ());
        let table_from = |start: Coordinate| {
            explore(
                start,
                |&co: &Coordinate| {
                    co.neighbours(false)
                        .filter(|&(_, next)| grid.is_in_bounds(next))
                        .map(|(_, next)| (next, 1))
                        .collect::<Vec<_>>()
                },
                |_| false,
                |_| 0,
            )
        };
        assert_eq!(table_from(Coordinate::new(0, 0)), table_from(Coordinate::new(0, 0)));
        assert_ne!(table_from(Coordinate::new(0, 0)), table_from(Coordinate::new(2, 2)));
    }

    #[test]
    fn grouping_and_search_are_deterministic() {
        let grid = DenseGrid::from_input("AAAA\nBBCD\nBBCC\nEEEC").unwrap();
        assert_eq!(regions(&grid), regions(&grid));

        let maze = DenseGrid::from_input(MAZE).unwrap();
        let (first, _) = explore_maze(&maze);
        let (second, _) = explore_maze(&maze);
        assert_eq!(first, second);
        assert_eq!(first.iter().count(), second.iter().count());
    }
}
