use std::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Position in the grid as `(row, column)`.
///
/// Signed so that neighbour offsets can step outside of the grid without wrapping, bounds are
/// checked by the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub i32, pub i32);

impl Coord {
    pub const ZERO: Coord = Coord(0, 0);

    pub const UP: Coord = Coord(-1, 0);
    pub const DOWN: Coord = Coord(1, 0);
    pub const LEFT: Coord = Coord(0, -1);
    pub const RIGHT: Coord = Coord(0, 1);

    /// Neighbour offsets in the order they are explored: up, down, left, right.
    pub const NEIGHBOR_OFFSETS: [Coord; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Manhattan distance between two positions.
    pub fn distance(self, other: Coord) -> i32 {
        (self - other).abs_sum()
    }

    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Self::NEIGHBOR_OFFSETS.into_iter().map(move |off| self + off)
    }

    /// Iterates over every position in `0..rows` x `0..cols`, row by row.
    pub fn iter_fill(size: Coord) -> impl Iterator<Item = Coord> {
        (0..size.0).flat_map(move |r| (0..size.1).map(move |c| Coord(r, c)))
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, other: Coord) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Coord {
    fn sub_assign(&mut self, other: Coord) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl From<(i32, i32)> for Coord {
    fn from(tuple: (i32, i32)) -> Self {
        Coord(tuple.0, tuple.1)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(coord: Coord) -> Self {
        (coord.0, coord.1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
