//! Day 12: price garden fencing per region, by perimeter or by straight side count.

use quadrille::{regions, DenseGrid};

pub fn part1(input: &str) -> usize {
    let grid = DenseGrid::from_input(input).unwrap();
    regions(&grid)
        .iter()
        .map(|(_, region)| region.area() * region.perimeter())
        .sum()
}

pub fn part2(input: &str) -> usize {
    let grid = DenseGrid::from_input(input).unwrap();
    regions(&grid)
        .iter()
        .map(|(_, region)| region.area() * region.sides())
        .sum()
}

pub fn solve(part: u8, input: &str) -> String {
    if part == 1 {
        part1(input).to_string()
    } else {
        part2(input).to_string()
    }
}
