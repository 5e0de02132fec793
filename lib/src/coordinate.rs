use strum::VariantArray;

use crate::direction::Direction;

/// A point `(x, y)` on a grid. The origin is the top left corner:
///
/// ```text
/// +------->
/// |      (y)
/// |
/// v (x)
/// ```
///
/// `x` is the row index and grows downward, `y` is the column index and grows rightward.
/// Coordinates are plain values; every operation returns a new instance.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Row index, increasing downward.
    pub x: i64,
    /// Column index, increasing rightward.
    pub y: i64,
}

impl Coordinate {
    /// Construct a coordinate from its row and column indices.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The adjacent coordinate one unit along `direction`.
    ///
    /// Stepping back with the opposite direction returns to the original coordinate.
    pub const fn step(self, direction: Direction) -> Self {
        self.step_by(direction, 1)
    }

    /// Translate by `amount` units along `direction`. A negative `amount` steps backward.
    pub const fn step_by(self, direction: Direction, amount: i64) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx * amount,
            y: self.y + dy * amount,
        }
    }

    /// The adjacent coordinates, keyed by direction: the orthogonal four, or all
    /// eight when `diagonal` is set.
    pub fn neighbours(self, diagonal: bool) -> impl Iterator<Item = (Direction, Coordinate)> {
        let directions: &'static [Direction] = if diagonal {
            Direction::VARIANTS
        } else {
            &Direction::ORTHOGONAL
        };
        directions.iter().map(move |&direction| (direction, self.step(direction)))
    }

    /// Taxicab distance between two coordinates: symmetric, and zero exactly when they are equal.
    pub const fn manhattan_distance(a: Self, b: Self) -> u64 {
        a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
    }
}
