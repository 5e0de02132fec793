use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::grid::{DenseGrid, Grid};

/// A maximal set of orthogonally connected cells sharing one value, produced by [`regions`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Region {
    coordinates: FxHashSet<Coordinate>,
}

impl Region {
    /// Number of cells in the region.
    pub fn area(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether `co` belongs to the region.
    pub fn contains(&self, co: Coordinate) -> bool {
        self.coordinates.contains(&co)
    }

    /// The region's coordinates, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coordinates.iter().copied()
    }

    /// Number of cell edges facing out of the region: `4 × area` minus the edges
    /// shared between two region cells.
    pub fn perimeter(&self) -> usize {
        let shared: usize = self
            .coordinates
            .iter()
            .map(|&co| {
                Direction::ORTHOGONAL
                    .iter()
                    .filter(|&&direction| self.contains(co.step(direction)))
                    .count()
            })
            .sum();
        4 * self.area() - shared
    }

    /// Number of straight boundary segments around the region.
    ///
    /// For each boundary direction, the cells fenced on that side are grouped into
    /// the lines perpendicular to it; every maximal run of consecutive cells within
    /// a line is one segment.
    pub fn sides(&self) -> usize {
        let mut sides = 0;
        for direction in Direction::ORTHOGONAL {
            let mut lines: FxHashMap<i64, Vec<i64>> = FxHashMap::default();
            for &co in self.coordinates.iter().filter(|&&co| !self.contains(co.step(direction))) {
                match direction {
                    Direction::North | Direction::South => lines.entry(co.x).or_default().push(co.y),
                    _ => lines.entry(co.y).or_default().push(co.x),
                }
            }

            for cells in lines.values_mut() {
                cells.sort_unstable();
                sides += 1 + cells.iter().tuple_windows().filter(|(a, b)| *b - *a != 1).count();
            }
        }
        sides
    }
}

// Union-find over row-major tile ids. Attaching the larger root under the smaller
// keeps the canonical id of every set equal to its smallest member.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            self.parent[id] = self.parent[self.parent[id]];
            id = self.parent[id];
        }
        id
    }

    fn union(&mut self, a: usize, b: usize) {
        let (a, b) = (self.find(a), self.find(b));
        self.parent[a.max(b)] = a.min(b);
    }
}

fn tile_id(co: Coordinate, cols: usize) -> usize {
    co.x as usize * cols + co.y as usize
}

/// Partition `grid` into its regions of equal-valued, orthogonally connected cells.
///
/// Every cell lands in exactly one region; two cells share a region exactly when a
/// chain of orthogonally adjacent, equal-valued cells links them. Each entry pairs
/// the shared cell value with the region, ordered by the row-major position of the
/// region's first cell, so repeated runs over an unchanged grid yield identical
/// output.
pub fn regions<T>(grid: &DenseGrid<T>) -> Vec<(T, Region)>
where
    T: Copy + Eq,
{
    let cols = grid.cols();
    let mut sets = DisjointSets::new(grid.rows() * cols);
    for (co, value) in grid.iter() {
        // forward directions suffice; the backward pair is seen from the other cell
        for direction in [Direction::South, Direction::East] {
            let neighbour = co.step(direction);
            if grid.get(neighbour) == Some(value) {
                sets.union(tile_id(co, cols), tile_id(neighbour, cols));
            }
        }
    }

    let mut by_root: FxHashMap<usize, Region> = FxHashMap::default();
    for (co, _) in grid.iter() {
        let root = sets.find(tile_id(co, cols));
        by_root
            .entry(root)
            .or_insert_with(|| Region {
                coordinates: FxHashSet::default(),
            })
            .coordinates
            .insert(co);
    }

    by_root
        .into_iter()
        .sorted_unstable_by_key(|&(root, _)| root)
        .map(|(root, region)| {
            let value = grid[Coordinate::new((root / cols) as i64, (root % cols) as i64)];
            (value, region)
        })
        .collect()
}
