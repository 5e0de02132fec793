//! Day 10: hiking trails climb from height 0 to 9 one step at a time. A
//! trailhead's score counts the summits it reaches, its rating the distinct
//! trails to them.

use quadrille::{Coordinate, DenseGrid, Grid};
use rustc_hash::{FxHashMap, FxHashSet};

fn trail_metrics(input: &str) -> (usize, u64) {
    let map = DenseGrid::from_input_with(input, |c| c.to_digit(10).map(|d| d as u8)).unwrap();

    let mut by_height: FxHashMap<u8, Vec<Coordinate>> = FxHashMap::default();
    for (co, cell) in map.iter() {
        if let Some(height) = cell {
            by_height.entry(*height).or_default().push(co);
        }
    }

    // walk the heights downward, carrying per tile the summits it reaches and the
    // number of distinct trails up from it
    let mut summits: FxHashMap<Coordinate, FxHashSet<Coordinate>> = FxHashMap::default();
    let mut trails: FxHashMap<Coordinate, u64> = FxHashMap::default();
    for &co in by_height.get(&9).into_iter().flatten() {
        summits.insert(co, FxHashSet::from_iter([co]));
        trails.insert(co, 1);
    }
    for height in (1..=9u8).rev() {
        let Some(cells) = by_height.get(&height) else {
            continue;
        };
        for &co in cells {
            for (_, neighbour) in co.neighbours(false) {
                if map.get(neighbour).copied().flatten() == Some(height - 1) {
                    let count = trails.get(&co).copied().unwrap_or(0);
                    *trails.entry(neighbour).or_default() += count;
                    let reached = summits.get(&co).cloned().unwrap_or_default();
                    summits.entry(neighbour).or_default().extend(reached);
                }
            }
        }
    }

    let trailheads = by_height.get(&0).into_iter().flatten();
    let (mut score, mut rating) = (0, 0);
    for co in trailheads {
        score += summits.get(co).map_or(0, FxHashSet::len);
        rating += trails.get(co).copied().unwrap_or(0);
    }
    (score, rating)
}

pub fn part1(input: &str) -> usize {
    trail_metrics(input).0
}

pub fn part2(input: &str) -> u64 {
    trail_metrics(input).1
}

pub fn solve(part: u8, input: &str) -> String {
    if part == 1 {
        part1(input).to_string()
    } else {
        part2(input).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";

    #[test]
    fn part1_split_trails() {
        assert_eq!(part1("10..9..\n2...8..\n3...7..\n4567654\n...8..3\n...9..2\n.....01"), 3);
    }

    #[test]
    fn part1_example() {
        assert_eq!(part1(EXAMPLE), 36);
    }

    #[test]
    fn part2_small_maps() {
        assert_eq!(part2(".....0.\n..4321.\n..5..2.\n..6543.\n..7..4.\n..8765.\n..9...."), 3);
        assert_eq!(part2("..90..9\n...1.98\n...2..7\n6543456\n765.987\n876....\n987...."), 13);
        assert_eq!(part2("012345\n123456\n234567\n345678\n4.6789\n56789."), 227);
    }

    #[test]
    fn part2_example() {
        assert_eq!(part2(EXAMPLE), 81);
    }
}
