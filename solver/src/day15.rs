//! Day 15: a robot shoves boxes around a warehouse. Part 2 doubles the map
//! width, so boxes are two tiles wide and a vertical push can move a whole tree
//! of them.

use quadrille::{Coordinate, DenseGrid, Direction};
use rustc_hash::FxHashSet;

fn parse(input: &str) -> (&str, Vec<Direction>) {
    let (map, moves) = input.split_once("\n\n").expect("map and moves are blank-line separated");
    let moves = moves
        .chars()
        .filter(|&c| c != '\n')
        .map(|c| match c {
            '^' => Direction::North,
            'v' => Direction::South,
            '>' => Direction::East,
            '<' => Direction::West,
            _ => unreachable!("moves are arrow characters"),
        })
        .collect();
    (map, moves)
}

fn find_robot(grid: &mut DenseGrid<char>) -> Coordinate {
    let robot = grid.find(|&cell| cell == '@').expect("no robot on the map");
    grid[robot] = '.';
    robot
}

// The map is walled in, so probing along a direction always hits '#' before the edge.
fn push_narrow(grid: &mut DenseGrid<char>, robot: Coordinate, direction: Direction) -> Coordinate {
    let next = robot.step(direction);
    let mut probe = next;
    while grid[probe] == 'O' {
        probe = probe.step(direction);
    }
    if grid[probe] == '#' {
        return robot;
    }
    if probe != next {
        // the whole run shifts by one, which looks like moving the first box to the end
        grid[probe] = 'O';
        grid[next] = '.';
    }
    next
}

fn widen(map: &str) -> String {
    map.chars()
        .map(|c| match c {
            '#' => "##",
            'O' => "[]",
            '@' => "@.",
            '.' => "..",
            '\n' => "\n",
            _ => unreachable!("unexpected map character"),
        })
        .collect()
}

fn push_wide(grid: &mut DenseGrid<char>, robot: Coordinate, direction: Direction) -> Coordinate {
    let next = robot.step(direction);
    match grid[next] {
        '#' => return robot,
        '.' => return next,
        _ => {}
    }

    if matches!(direction, Direction::East | Direction::West) {
        let mut probe = next;
        while matches!(grid[probe], '[' | ']') {
            probe = probe.step(direction);
        }
        if grid[probe] == '#' {
            return robot;
        }
        while probe != next {
            let behind = probe.step(direction.opposite());
            grid[probe] = grid[behind];
            probe = behind;
        }
        grid[next] = '.';
        return next;
    }

    // vertical push: collect the tree of box halves being moved, abort on any wall
    let mut moving: FxHashSet<Coordinate> = FxHashSet::default();
    let mut pending = vec![next];
    while let Some(co) = pending.pop() {
        let partner = match grid[co] {
            '[' => co.step(Direction::East),
            ']' => co.step(Direction::West),
            '#' => return robot,
            _ => continue,
        };
        if moving.insert(co) {
            pending.push(co.step(direction));
        }
        if moving.insert(partner) {
            pending.push(partner.step(direction));
        }
    }

    // move the farthest halves first so nothing is overwritten before it shifts
    let mut halves: Vec<Coordinate> = moving.into_iter().collect();
    halves.sort_unstable_by_key(|co| if direction == Direction::South { -co.x } else { co.x });
    for co in halves {
        grid[co.step(direction)] = grid[co];
        grid[co] = '.';
    }
    next
}

fn gps_sum(grid: &DenseGrid<char>, box_cell: char) -> i64 {
    grid.iter()
        .filter(|&(_, &cell)| cell == box_cell)
        .map(|(co, _)| 100 * co.x + co.y)
        .sum()
}

pub fn part1(input: &str) -> i64 {
    let (map, moves) = parse(input);
    let mut grid = DenseGrid::from_input(map).unwrap();
    let mut robot = find_robot(&mut grid);
    for direction in moves {
        robot = push_narrow(&mut grid, robot, direction);
    }
    gps_sum(&grid, 'O')
}

pub fn part2(input: &str) -> i64 {
    let (map, moves) = parse(input);
    let mut grid = DenseGrid::from_input(&widen(map)).unwrap();
    let mut robot = find_robot(&mut grid);
    for direction in moves {
        robot = push_wide(&mut grid, robot, direction);
    }
    gps_sum(&grid, '[')
}

pub fn solve(part: u8, input: &str) -> String {
    if part == 1 {
        part1(input).to_string()
    } else {
        part2(input).to_string()
    }
}
