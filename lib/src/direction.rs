use strum::VariantArray;

/// One of the eight compass directions on a grid whose origin sits in the top left corner.
///
/// [`North`](Self::North) decreases the row axis, [`South`](Self::South) increases it;
/// [`West`](Self::West) decreases the column axis, [`East`](Self::East) increases it.
/// The full set of variants is available as `Direction::VARIANTS` via [`strum::VariantArray`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, VariantArray)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The four orthogonal directions.
    ///
    /// Disjoint from [`DIAGONAL`](Self::DIAGONAL); together the two arrays cover the whole compass.
    pub const ORTHOGONAL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The four diagonal directions.
    pub const DIAGONAL: [Self; 4] = [Self::NorthEast, Self::NorthWest, Self::SouthEast, Self::SouthWest];

    /// The unit vector of this direction as a `(row delta, column delta)` pair.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }

    /// The direction 180° away. This is an involution: `d.opposite().opposite() == d`.
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Rotate by 90°, counterclockwise when `left` is set.
    ///
    /// The orthogonal and diagonal directions rotate in two parallel 4-cycles, so
    /// rotation never mixes the two subsets. `d.rotate(left).rotate(!left) == d`.
    pub const fn rotate(self, left: bool) -> Self {
        let clockwise = match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::NorthEast => Self::SouthEast,
            Self::SouthEast => Self::SouthWest,
            Self::SouthWest => Self::NorthWest,
            Self::NorthWest => Self::NorthEast,
        };
        if left {
            clockwise.opposite()
        } else {
            clockwise
        }
    }
}
