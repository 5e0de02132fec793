//! Day 4: count XMAS words in all eight directions, then crossed MAS pairs.

use quadrille::{Coordinate, DenseGrid, Direction, Grid};
use strum::VariantArray;

fn word_at(grid: &DenseGrid<char>, start: Coordinate, direction: Direction, length: i64) -> Option<String> {
    (0..length)
        .map(|amount| grid.get(start.step_by(direction, amount)).copied())
        .collect()
}

pub fn part1(input: &str) -> usize {
    let grid = DenseGrid::from_input(input).unwrap();
    grid.iter()
        .filter(|&(_, &cell)| cell == 'X')
        .map(|(co, _)| {
            Direction::VARIANTS
                .iter()
                .filter(|&&direction| word_at(&grid, co, direction, 4).as_deref() == Some("XMAS"))
                .count()
        })
        .sum()
}

fn is_crossed_mas(grid: &DenseGrid<char>, centre: Coordinate) -> bool {
    let falling = word_at(grid, centre.step(Direction::NorthWest), Direction::SouthEast, 3);
    let rising = word_at(grid, centre.step(Direction::NorthEast), Direction::SouthWest, 3);
    matches!(falling.as_deref(), Some("MAS" | "SAM")) && matches!(rising.as_deref(), Some("MAS" | "SAM"))
}

pub fn part2(input: &str) -> usize {
    let grid = DenseGrid::from_input(input).unwrap();
    grid.iter()
        .filter(|&(co, &cell)| cell == 'A' && is_crossed_mas(&grid, co))
        .count()
}

pub fn solve(part: u8, input: &str) -> String {
    if part == 1 {
        part1(input).to_string()
    } else {
        part2(input).to_string()
    }
}
