//! Day 20: a racetrack with a single route. A cheat disables collision for a few
//! picoseconds, teleporting within a Manhattan radius; count the cheats that save
//! enough time.

use quadrille::{explore, Coordinate, DenseGrid, DistanceTable, Grid};
use rustc_hash::FxHashMap;

fn parse(input: &str) -> (DenseGrid<char>, Coordinate) {
    let grid = DenseGrid::from_input(input).unwrap();
    let start = grid.find(|&cell| cell == 'S').expect("track has no start");
    (grid, start)
}

fn track_distances(grid: &DenseGrid<char>, start: Coordinate) -> DistanceTable<Coordinate> {
    explore(
        start,
        |&co: &Coordinate| {
            co.neighbours(false)
                .filter(|&(_, next)| grid.get(next).is_some_and(|&cell| cell != '#'))
                .map(|(_, next)| (next, 1))
                .collect::<Vec<_>>()
        },
        |_| false,
        |_| 0,
    )
}

/// Histogram of time saved to number of distinct cheats achieving it. A cheat is
/// identified by its start and landing cell, so each `(cell, offset)` pair counts
/// once.
fn time_saves(grid: &DenseGrid<char>, start: Coordinate, cheat_length: i64, threshold: i64) -> FxHashMap<i64, usize> {
    let distances = track_distances(grid, start);

    let mut saves: FxHashMap<i64, usize> = FxHashMap::default();
    for (co, &cell) in grid.iter() {
        if cell == '#' {
            continue;
        }
        let Some(distance) = distances.distance(&co) else {
            continue;
        };
        for x_offset in -cheat_length..=cheat_length {
            let budget = cheat_length - x_offset.abs();
            for y_offset in -budget..=budget {
                if x_offset == 0 && y_offset == 0 {
                    continue;
                }
                let landing = Coordinate::new(co.x + x_offset, co.y + y_offset);
                if grid.get(landing).is_some_and(|&cell| cell != '#') {
                    if let Some(landing_distance) = distances.distance(&landing) {
                        let saved = landing_distance as i64
                            - distance as i64
                            - x_offset.abs()
                            - y_offset.abs();
                        if saved >= threshold {
                            *saves.entry(saved).or_default() += 1;
                        }
                    }
                }
            }
        }
    }
    saves
}

pub fn part1(input: &str) -> usize {
    let (grid, start) = parse(input);
    time_saves(&grid, start, 2, 100).values().sum()
}

pub fn part2(input: &str) -> usize {
    let (grid, start) = parse(input);
    time_saves(&grid, start, 20, 100).values().sum()
}

pub fn solve(part: u8, input: &str) -> String {
    if part == 1 {
        part1(input).to_string()
    } else {
        part2(input).to_string()
    }
}
