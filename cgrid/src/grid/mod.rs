pub mod board;
pub use board::Grid;
pub mod cell;
pub use cell::{Cell, CellKind};

mod parse;
