#![warn(missing_docs)]

//! # `quadrille`
//!
//! Primitives for solving small text puzzles played out on a 2D grid: a compass
//! [`Direction`] model, an immutable [`Coordinate`] value, dense and sparse [`Grid`]
//! backings, a generic weighted shortest-path search, and connected-component
//! [`regions`] grouping.
//!
//! The crate takes already-split input (rows of characters, or explicit
//! coordinate/value pairs) and hands data values back; reading files and printing
//! answers belong to the caller.
//!
//! # Internals
//! The search in [`explore`] and [`cheapest_cost`] is a classic uniform-cost
//! (Dijkstra-style) exploration over a caller-defined state type, so the same
//! primitive serves a plain walk over cells, a maze where turning carries its own
//! cost and the facing direction is part of the state, and anything else the
//! injected successor and cost closures can express. [`explore`] returns the whole
//! best-distance table, from which [`on_best_paths`] reconstructs every state lying
//! on some optimal path by walking the table backward.
//!
//! Region grouping uses a union-find over per-cell tile identifiers: unioning
//! same-valued orthogonal neighbours and keeping the lower tile id as the canonical
//! name of each set makes the resulting partition, and its output order,
//! deterministic.

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use grid::{DenseGrid, Grid, GridError, SparseGrid};
pub use region::{regions, Region};
pub use search::{cheapest_cost, explore, on_best_paths, DistanceTable};

mod coordinate;
mod direction;
mod grid;
mod region;
mod search;
mod tests;
