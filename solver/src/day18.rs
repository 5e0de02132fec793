//! Day 18: bytes fall onto a memory grid; find the shortest way out, then the
//! first byte that cuts the exit off entirely.

use quadrille::{cheapest_cost, Coordinate, DenseGrid, Grid};

fn parse_byte(line: &str) -> Coordinate {
    let (x, y) = line.split_once(',').expect("byte positions are comma separated");
    Coordinate::new(x.parse().unwrap(), y.parse().unwrap())
}

fn escape_cost(grid: &DenseGrid<bool>, start: Coordinate, goal: Coordinate) -> Option<u64> {
    cheapest_cost(
        start,
        |&co: &Coordinate| {
            co.neighbours(false)
                .filter(|&(_, next)| grid.get(next) == Some(&false))
                .map(|(_, next)| (next, 1))
                .collect::<Vec<_>>()
        },
        |&co| co == goal,
    )
}

fn part1_sized(input: &str, size: i64, bytes_to_fall: usize) -> u64 {
    let mut grid = DenseGrid::filled(size as usize + 1, size as usize + 1, false);
    for line in input.lines().take(bytes_to_fall) {
        grid[parse_byte(line)] = true;
    }
    escape_cost(&grid, Coordinate::new(0, 0), Coordinate::new(size, size))
        .expect("the exit is unreachable")
}

pub fn part1(input: &str) -> u64 {
    part1_sized(input, 70, 1024)
}

fn part2_sized(input: &str, size: i64) -> String {
    let mut grid = DenseGrid::filled(size as usize + 1, size as usize + 1, false);
    let start = Coordinate::new(0, 0);
    let goal = Coordinate::new(size, size);
    for line in input.lines() {
        let byte = parse_byte(line);
        grid[byte] = true;
        // just try to reach the exit again after every byte; slow but good enough
        if escape_cost(&grid, start, goal).is_none() {
            return format!("{},{}", byte.x, byte.y);
        }
    }
    panic!("the exit is never cut off")
}

pub fn part2(input: &str) -> String {
    part2_sized(input, 70)
}

pub fn solve(part: u8, input: &str) -> String {
    if part == 1 {
        part1(input).to_string()
    } else {
        part2(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0";

    #[test]
    fn part1_example() {
        assert_eq!(part1_sized(EXAMPLE, 6, 12), 22);
    }

    #[test]
    fn part2_example() {
        assert_eq!(part2_sized(EXAMPLE, 6), "6,1");
    }
}
