//! Day 6: simulate the guard's patrol, then find every obstacle position that
//! would trap the patrol in a loop.

use quadrille::{Coordinate, DenseGrid, Direction, Grid, SparseGrid};
use rustc_hash::FxHashSet;

enum Patrol {
    Exited { tiles: usize },
    Looped,
}

fn direction_bit(direction: Direction) -> u8 {
    match direction {
        Direction::North => 1,
        Direction::East => 2,
        Direction::South => 4,
        Direction::West => 8,
        _ => unreachable!("the guard only moves orthogonally"),
    }
}

fn mark(visited: &mut SparseGrid<u8>, co: Coordinate, direction: Direction) {
    match visited.get_mut(co) {
        Some(mask) => *mask |= direction_bit(direction),
        None => {
            visited.insert(co, direction_bit(direction));
        }
    }
}

/// Walk until the guard leaves the map, or revisits a tile while facing the same
/// way, which means the patrol loops forever.
fn patrol(
    grid: &DenseGrid<char>,
    mut co: Coordinate,
    mut direction: Direction,
    mut visited: SparseGrid<u8>,
) -> Patrol {
    while grid.is_in_bounds(co) {
        mark(&mut visited, co, direction);

        let next = co.step(direction);
        if !grid.is_in_bounds(next) {
            break;
        }
        if grid[next] == '#' {
            direction = direction.rotate(false);
            continue;
        }
        if visited.get(next).is_some_and(|&mask| mask & direction_bit(direction) != 0) {
            return Patrol::Looped;
        }
        co = next;
    }

    Patrol::Exited { tiles: visited.len() }
}

pub fn part1(input: &str) -> usize {
    let grid = DenseGrid::from_input(input).unwrap();
    let start = grid.find(|&cell| cell == '^').expect("no guard on the map");
    match patrol(&grid, start, Direction::North, SparseGrid::new()) {
        Patrol::Exited { tiles } => tiles,
        Patrol::Looped => panic!("the unobstructed patrol never leaves the map"),
    }
}

pub fn part2(input: &str) -> usize {
    let mut grid = DenseGrid::from_input(input).unwrap();
    let start = grid.find(|&cell| cell == '^').expect("no guard on the map");

    let mut visited = SparseGrid::new();
    let mut loop_starts: FxHashSet<Coordinate> = FxHashSet::default();
    let mut co = start;
    let mut direction = Direction::North;
    while grid.is_in_bounds(co) {
        mark(&mut visited, co, direction);

        let next = co.step(direction);
        if !grid.is_in_bounds(next) {
            break;
        }
        if grid[next] == '#' {
            direction = direction.rotate(false);
            continue;
        }
        // only tiles not yet walked can take an obstacle without rewriting history
        if visited.get(next).is_none() {
            grid[next] = '#';
            if matches!(patrol(&grid, co, direction, visited.clone()), Patrol::Looped) {
                loop_starts.insert(next);
            }
            grid[next] = '.';
        }
        co = next;
    }

    loop_starts.remove(&start);
    loop_starts.len()
}

pub fn solve(part: u8, input: &str) -> String {
    if part == 1 {
        part1(input).to_string()
    } else {
        part2(input).to_string()
    }
}
