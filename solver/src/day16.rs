//! Day 16: the reindeer maze. Walking ahead costs 1, turning 90° costs 1000, so
//! the search state is the position together with the facing direction.

use quadrille::{explore, on_best_paths, Coordinate, DenseGrid, Direction, DistanceTable, Grid};
use rustc_hash::FxHashSet;

type State = (Coordinate, Direction);

fn parse(input: &str) -> (DenseGrid<char>, Coordinate, Coordinate) {
    let grid = DenseGrid::from_input(input).unwrap();
    let start = grid.find(|&cell| cell == 'S').expect("maze has no start");
    let goal = grid.find(|&cell| cell == 'E').expect("maze has no end");
    (grid, start, goal)
}

// Provable lower bound on the remaining cost: one step per Manhattan unit, plus a
// 1000-point turn for each axis still to cover while not facing along it.
fn remaining_cost_bound(co: Coordinate, direction: Direction, goal: Coordinate) -> u64 {
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
}

fn explore_maze(grid: &DenseGrid<char>, start: Coordinate, goal: Coordinate) -> DistanceTable<State> {
    explore(
        (start, Direction::East),
        |&(co, direction): &State| {
            let mut next = Vec::with_capacity(3);
            let ahead = co.step(direction);
            if grid.get(ahead).is_some_and(|&cell| cell != '#') {
                next.push(((ahead, direction), 1));
            }
            for left in [false, true] {
                next.push(((co, direction.rotate(left)), 1000));
            }
            next
        },
        |&(co, _)| co == goal,
        |&(co, direction)| remaining_cost_bound(co, direction, goal),
    )
}

pub fn part1(input: &str) -> u64 {
    let (grid, start, goal) = parse(input);
    explore_maze(&grid, start, goal)
        .best_goal_cost()
        .expect("the end of the maze is unreachable")
}

pub fn part2(input: &str) -> usize {
    let (grid, start, goal) = parse(input);
    let table = explore_maze(&grid, start, goal);
    let states = on_best_paths(
        &table,
        Direction::ORTHOGONAL.map(|direction| (goal, direction)),
        |&(co, direction): &State| {
            let mut previous = Vec::with_capacity(3);
            previous.push(((co.step(direction.opposite()), direction), 1));
            for left in [false, true] {
                previous.push(((co, direction.rotate(left)), 1000));
            }
            previous
        },
    );
    let tiles: FxHashSet<Coordinate> = states.iter().map(|&(co, _)| co).collect();
    tiles.len()
}

pub fn solve(part: u8, input: &str) -> String {
    if part == 1 {
        part1(input).to_string()
    } else {
        part2(input).to_string()
    }
}
