use crate::coord::Coord;

/// What occupies a single position of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Wall,
    #[default]
    Open,
    Start,
    End,
    SolutionPath,
}

impl CellKind {
    pub const ALL: [CellKind; 5] = [
        CellKind::Wall,
        CellKind::Open,
        CellKind::Start,
        CellKind::End,
        CellKind::SolutionPath,
    ];

    pub fn glyph(self) -> char {
        match self {
            CellKind::Wall => 'X',
            CellKind::Open => ' ',
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::SolutionPath => '+',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.glyph() == glyph)
    }

    pub fn is_wall(self) -> bool {
        matches!(self, CellKind::Wall)
    }

    pub fn is_passable(self) -> bool {
        !self.is_wall()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    visited: bool,
    pub(crate) coord: Coord,
}

impl Cell {
    pub fn new(coord: Coord) -> Cell {
        Cell {
            kind: CellKind::Open,
            visited: false,
            coord,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn is_wall(&self) -> bool {
        self.kind.is_wall()
    }

    /// Whether the last traversal reached this cell.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn get_coord(&self) -> Coord {
        self.coord
    }

    pub fn glyph(&self) -> char {
        self.kind.glyph()
    }

    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }

    pub(crate) fn unvisit(&mut self) {
        self.visited = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_roundtrip() {
        for kind in CellKind::ALL {
            assert_eq!(CellKind::from_glyph(kind.glyph()), Some(kind));
        }
        assert_eq!(CellKind::from_glyph('?'), None);
    }

    #[test]
    fn new_cell_is_open_and_unvisited() {
        let cell = Cell::new(Coord(3, 4));
        assert_eq!(cell.kind(), CellKind::Open);
        assert!(!cell.is_visited());
        assert_eq!(cell.get_coord(), Coord(3, 4));
    }
}
