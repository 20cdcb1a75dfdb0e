//! Core of gridmaze: randomly walled grids and breadth/depth-first path finding on them.

pub mod array;
pub mod coord;
pub mod error;
pub mod generator;
pub mod grid;
pub mod solver;

pub use coord::Coord;
pub use error::{Endpoint, GridError};
pub use generator::{seeded_random, Generator, Random, DEFAULT_OPEN_PROBABILITY};
pub use grid::{Cell, CellKind, Grid};
pub use solver::{Algorithm, SolveReport};
