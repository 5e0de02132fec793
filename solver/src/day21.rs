//! Day 21: a chain of robots relaying arrow-key presses between keypads. The
//! shortest press sequence is found recursively, one robot layer at a time, with a
//! memo cache scoped to the computation.

use itertools::Itertools;
use quadrille::{Coordinate, Direction};
use rustc_hash::{FxHashMap, FxHashSet};

const NUMERIC_KEYPAD: [(char, Coordinate); 11] = [
    ('7', Coordinate::new(0, 0)),
    ('8', Coordinate::new(0, 1)),
    ('9', Coordinate::new(0, 2)),
    ('4', Coordinate::new(1, 0)),
    ('5', Coordinate::new(1, 1)),
    ('6', Coordinate::new(1, 2)),
    ('1', Coordinate::new(2, 0)),
    ('2', Coordinate::new(2, 1)),
    ('3', Coordinate::new(2, 2)),
    ('0', Coordinate::new(3, 1)),
    ('A', Coordinate::new(3, 2)),
];

const DIRECTIONAL_KEYPAD: [(char, Coordinate); 5] = [
    ('^', Coordinate::new(0, 1)),
    ('A', Coordinate::new(0, 2)),
    ('<', Coordinate::new(1, 0)),
    ('v', Coordinate::new(1, 1)),
    ('>', Coordinate::new(1, 2)),
];

fn arrow(direction: Direction) -> char {
    match direction {
        Direction::North => '^',
        Direction::South => 'v',
        Direction::East => '>',
        Direction::West => '<',
        _ => unreachable!("keypad routes are orthogonal"),
    }
}

/// All minimal press routes from `start` to `goal` that stay on the keypad: every
/// interleaving of the required row and column moves, minus those that wander off
/// a key.
fn routes(start: Coordinate, goal: Coordinate, keys: &FxHashSet<Coordinate>) -> Vec<String> {
    let distance = Coordinate::manhattan_distance(start, goal) as usize;
    let x_direction = if start.x < goal.x { Direction::South } else { Direction::North };
    let y_direction = if start.y < goal.y { Direction::East } else { Direction::West };

    std::iter::repeat(vec![x_direction, y_direction])
        .take(distance)
        .multi_cartesian_product()
        .filter_map(|route| {
            let mut current = start;
            for &direction in &route {
                current = current.step(direction);
                if !keys.contains(&current) {
                    return None;
                }
            }
            (current == goal).then(|| route.into_iter().map(arrow).collect())
        })
        .collect()
}

type Keymap = FxHashMap<(char, char), Vec<String>>;

fn keymap(layout: &[(char, Coordinate)]) -> Keymap {
    let keys: FxHashSet<Coordinate> = layout.iter().map(|&(_, co)| co).collect();
    let mut map = Keymap::default();
    for &(a, co_a) in layout {
        for &(b, co_b) in layout {
            let routes = if a == b { vec![] } else { routes(co_a, co_b, &keys) };
            map.insert((a, b), routes);
        }
    }
    map
}

type Cache = FxHashMap<(String, u8), u64>;

fn shortest_sequence(
    numeric: &Keymap,
    directional: &Keymap,
    cache: &mut Cache,
    code: &str,
    total_robots: u8,
    robot_number: u8,
) -> u64 {
    if robot_number > total_robots {
        return code.len() as u64;
    }
    if let Some(&length) = cache.get(&(code.to_owned(), robot_number)) {
        return length;
    }

    let keymap = if robot_number == 0 { numeric } else { directional };
    let mut total = 0;
    let mut previous = 'A';
    for key in code.chars() {
        total += keymap[&(previous, key)]
            .iter()
            .map(|route| {
                shortest_sequence(
                    numeric,
                    directional,
                    cache,
                    &format!("{route}A"),
                    total_robots,
                    robot_number + 1,
                )
            })
            .min()
            // pressing the same key again is a single confirming press
            .unwrap_or(1);
        previous = key;
    }

    cache.insert((code.to_owned(), robot_number), total);
    total
}

fn total_complexity(input: &str, total_robots: u8) -> u64 {
    let numeric = keymap(&NUMERIC_KEYPAD);
    let directional = keymap(&DIRECTIONAL_KEYPAD);
    let mut cache = Cache::default();
    input
        .lines()
        .map(|code| {
            let numeric_part: u64 = code[..code.len() - 1]
                .parse()
                .expect("codes are digits ending in A");
            numeric_part * shortest_sequence(&numeric, &directional, &mut cache, code, total_robots, 0)
        })
        .sum()
}

pub fn part1(input: &str) -> u64 {
    total_complexity(input, 2)
}

pub fn part2(input: &str) -> u64 {
    total_complexity(input, 25)
}

pub fn solve(part: u8, input: &str) -> String {
    if part == 1 {
        part1(input).to_string()
    } else {
        part2(input).to_string()
    }
}
