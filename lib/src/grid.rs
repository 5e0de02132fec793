use std::ops::{Index, IndexMut};

use itertools::{Itertools, MinMaxResult};
use ndarray::Array2;
use rustc_hash::FxHashMap;

use crate::coordinate::Coordinate;

/// Reasons a grid could not be built from its input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GridError {
    /// The input contained no rows, or rows with no cells.
    Empty,
    /// Not all rows have the same length.
    Ragged {
        /// Index of the first offending row.
        row: usize,
    },
}

/// A 2D field of cells addressed by [`Coordinate`].
///
/// Implementations differ in backing storage: [`DenseGrid`] holds a full rectangle,
/// [`SparseGrid`] holds only the cells that were inserted.
pub trait Grid {
    /// The cell value type.
    type Cell;

    /// The top left and bottom right corner of the occupied extent, or `None`
    /// if no cell exists.
    fn bounds(&self) -> Option<(Coordinate, Coordinate)>;

    /// Checked cell access; `None` for an out-of-bounds or absent coordinate.
    fn get(&self, co: Coordinate) -> Option<&Self::Cell>;

    /// Whether `co` falls inside [`bounds`](Self::bounds). Callers must check this
    /// before indexing, since indexing fails fast on a missing cell.
    fn is_in_bounds(&self, co: Coordinate) -> bool {
        self.bounds().is_some_and(|(min, max)| {
            (min.x..=max.x).contains(&co.x) && (min.y..=max.y).contains(&co.y)
        })
    }

    /// Draw the bounding rectangle row by row, for diagnostics.
    ///
    /// `display` turns a cell into its character; absent cells become `filler`.
    fn render(&self, filler: char, display: impl Fn(&Self::Cell) -> char) -> String {
        let Some((min, max)) = self.bounds() else {
            return String::new();
        };

        let mut out = String::with_capacity(((max.x - min.x + 1) * (max.y - min.y + 2)) as usize);
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                out.push(self.get(Coordinate::new(x, y)).map_or(filler, &display));
            }
            out.push('\n');
        }

        out
    }
}

/// A rectangular grid backed by a dense 2D array. Every cell inside the bounds exists.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseGrid<T> {
    cells: Array2<T>,
}

impl DenseGrid<char> {
    /// Parse line-delimited text into a grid of characters, one cell per character, row-major.
    pub fn from_input(input: &str) -> Result<Self, GridError> {
        Self::from_input_with(input, |c| c)
    }
}

impl<T> DenseGrid<T> {
    /// Parse line-delimited text, mapping every character through `cast`.
    pub fn from_input_with(input: &str, mut cast: impl FnMut(char) -> T) -> Result<Self, GridError> {
        Self::from_rows(
            input
                .lines()
                .map(|line| line.chars().map(&mut cast).collect())
                .collect(),
        )
    }

    /// Build a grid from pre-split rows. All rows must have the same nonzero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        if let Some(row) = rows.iter().position(|row| row.len() != width) {
            return Err(GridError::Ragged { row });
        }

        let cells = Array2::from_shape_vec((height, width), rows.into_iter().flatten().collect())
            .expect("row dimensions were validated above");
        Ok(Self { cells })
    }

    /// A `rows × cols` grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: Array2::from_elem((rows, cols), value),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    fn index_of(&self, co: Coordinate) -> Option<(usize, usize)> {
        let x = usize::try_from(co.x).ok()?;
        let y = usize::try_from(co.y).ok()?;
        (x < self.rows() && y < self.cols()).then_some((x, y))
    }

    /// Checked mutable cell access.
    pub fn get_mut(&mut self, co: Coordinate) -> Option<&mut T> {
        let index = self.index_of(co)?;
        self.cells.get_mut(index)
    }

    /// All `(coordinate, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), value)| (Coordinate::new(x as i64, y as i64), value))
    }

    /// Coordinate of the first cell satisfying `predicate`, in row-major order.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Coordinate> {
        self.iter().find(|(_, value)| predicate(value)).map(|(co, _)| co)
    }
}

impl<T> Grid for DenseGrid<T> {
    type Cell = T;

    fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        Some((
            Coordinate::new(0, 0),
            Coordinate::new(self.rows() as i64 - 1, self.cols() as i64 - 1),
        ))
    }

    fn get(&self, co: Coordinate) -> Option<&T> {
        let index = self.index_of(co)?;
        self.cells.get(index)
    }
}

impl<T> Index<Coordinate> for DenseGrid<T> {
    type Output = T;

    fn index(&self, co: Coordinate) -> &T {
        Grid::get(self, co)
            .unwrap_or_else(|| panic!("coordinate ({}, {}) is out of bounds", co.x, co.y))
    }
}

impl<T> IndexMut<Coordinate> for DenseGrid<T> {
    fn index_mut(&mut self, co: Coordinate) -> &mut T {
        self.get_mut(co)
            .unwrap_or_else(|| panic!("coordinate ({}, {}) is out of bounds", co.x, co.y))
    }
}

/// A grid backed by a coordinate-to-value map. The bounds are the rectangle spanned
/// by the keys present, so inserting can grow the effective extent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SparseGrid<T> {
    cells: FxHashMap<Coordinate, T>,
}

impl<T> SparseGrid<T> {
    /// An empty grid. Its bounds are `None` until the first insert.
    pub fn new() -> Self {
        Self {
            cells: FxHashMap::default(),
        }
    }

    /// Set the cell at `co`, returning the previous value if one was present.
    pub fn insert(&mut self, co: Coordinate, value: T) -> Option<T> {
        self.cells.insert(co, value)
    }

    /// Checked mutable access to a present cell.
    pub fn get_mut(&mut self, co: Coordinate) -> Option<&mut T> {
        self.cells.get_mut(&co)
    }

    /// Number of cells present.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is present.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All present `(coordinate, value)` pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        self.cells.iter().map(|(&co, value)| (co, value))
    }
}

impl<T> Default for SparseGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn axis_extent(values: impl Iterator<Item = i64>) -> Option<(i64, i64)> {
    match values.minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

impl<T> Grid for SparseGrid<T> {
    type Cell = T;

    fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let (min_x, max_x) = axis_extent(self.cells.keys().map(|co| co.x))?;
        let (min_y, max_y) = axis_extent(self.cells.keys().map(|co| co.y))?;
        Some((Coordinate::new(min_x, min_y), Coordinate::new(max_x, max_y)))
    }

    fn get(&self, co: Coordinate) -> Option<&T> {
        self.cells.get(&co)
    }
}

impl<T> Index<Coordinate> for SparseGrid<T> {
    type Output = T;

    fn index(&self, co: Coordinate) -> &T {
        self.cells
            .get(&co)
            .unwrap_or_else(|| panic!("no cell at ({}, {})", co.x, co.y))
    }
}
