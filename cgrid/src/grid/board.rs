use std::fmt;

use log::{debug, trace};
use rand::{seq::SliceRandom as _, Rng as _};

use crate::{
    array::Array2D,
    coord::Coord,
    error::{Endpoint, GridError, Result},
    generator::Random,
    grid::cell::{Cell, CellKind},
};

/// How many random draws per cell [`Grid::choose_random_start_and_end`] makes before it falls
/// back to enumerating every candidate.
const SAMPLES_PER_CELL: usize = 4;

#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) cells: Array2D<Cell>,
    pub(crate) start: Option<Coord>,
    pub(crate) end: Option<Coord>,
}

impl Grid {
    /// Creates a grid of open cells surrounded by a wall border.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let fits = rows
            .checked_mul(columns)
            .is_some_and(|count| i32::try_from(count).is_ok());
        if rows < 1 || columns < 1 || !fits {
            return Err(GridError::InvalidDimension { rows, columns });
        }

        let mut cells = Array2D::from_fn(rows, columns, Cell::new);

        let (last_row, last_col) = (rows as i32 - 1, columns as i32 - 1);
        for cell in cells.iter_mut() {
            let Coord(r, c) = cell.coord;
            if r == 0 || r == last_row || c == 0 || c == last_col {
                cell.set_kind(CellKind::Wall);
            }
        }

        Ok(Grid {
            cells,
            start: None,
            end: None,
        })
    }

    /// Returns `(rows, columns)`.
    pub fn size(&self) -> Coord {
        self.cells.size()
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn columns(&self) -> usize {
        self.cells.cols()
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        self.cells.is_in_bounds(pos)
    }

    pub fn is_border(&self, pos: Coord) -> bool {
        let Coord(rows, cols) = self.size();
        self.is_in_bounds(pos)
            && (pos.0 == 0 || pos.1 == 0 || pos.0 == rows - 1 || pos.1 == cols - 1)
    }

    fn check_bounds(&self, pos: Coord) -> Result<()> {
        if self.is_in_bounds(pos) {
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds {
                pos,
                size: self.size(),
            })
        }
    }

    pub fn get_cell(&self, pos: Coord) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn cell(&self, pos: Coord) -> Result<&Cell> {
        self.check_bounds(pos)?;
        Ok(&self.cells[pos])
    }

    pub fn kind(&self, pos: Coord) -> Result<CellKind> {
        self.cell(pos).map(Cell::kind)
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    /// In bounds and not a wall.
    pub fn is_passable(&self, pos: Coord) -> bool {
        self.get_cell(pos).is_some_and(|cell| !cell.is_wall())
    }

    /// Passable 4-neighbours of `pos`, in the order up, down, left, right.
    pub fn neighbors(&self, pos: Coord) -> impl Iterator<Item = Coord> + '_ {
        pos.neighbors().filter(|&n| self.is_passable(n))
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind() == kind).count()
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    pub fn endpoints(&self) -> Result<(Coord, Coord)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(GridError::EndpointsNotSet),
        }
    }

    pub fn set_wall(&mut self, pos: Coord) -> Result<()> {
        self.check_bounds(pos)?;
        self.release_endpoint(pos);
        self.cells[pos].set_kind(CellKind::Wall);
        Ok(())
    }

    pub fn set_open(&mut self, pos: Coord) -> Result<()> {
        self.check_bounds(pos)?;
        self.release_endpoint(pos);
        self.cells[pos].set_kind(CellKind::Open);
        Ok(())
    }

    /// Places the start, opening the cell if it was a wall. The previous start cell becomes open.
    pub fn set_start(&mut self, pos: Coord) -> Result<()> {
        self.check_bounds(pos)?;
        if let Some(old) = self.start.replace(pos) {
            self.revert_tag(old, pos, CellKind::Start);
        }
        self.cells[pos].set_kind(CellKind::Start);
        Ok(())
    }

    /// Places the end, opening the cell if it was a wall. The previous end cell becomes open.
    pub fn set_end(&mut self, pos: Coord) -> Result<()> {
        self.check_bounds(pos)?;
        if let Some(old) = self.end.replace(pos) {
            self.revert_tag(old, pos, CellKind::End);
        }
        self.cells[pos].set_kind(CellKind::End);
        Ok(())
    }

    fn revert_tag(&mut self, old: Coord, new: Coord, tag: CellKind) {
        if old != new && self.cells[old].kind() == tag {
            self.cells[old].set_kind(CellKind::Open);
        }
    }

    /// Forgets the endpoint(s) located at `pos`, the cell is about to be retagged.
    fn release_endpoint(&mut self, pos: Coord) {
        if self.start == Some(pos) {
            debug!("start at {} overwritten, clearing it", pos);
            self.start = None;
        }
        if self.end == Some(pos) {
            debug!("end at {} overwritten, clearing it", pos);
            self.end = None;
        }
    }

    /// Picks a random open start and a distinct random open end and places them.
    ///
    /// Fails with [`GridError::NoOpenCells`] if either of them can't be placed, the grid is
    /// left untouched in that case.
    pub fn choose_random_start_and_end(&mut self, rng: &mut Random) -> Result<(Coord, Coord)> {
        let start = self
            .random_open_cell(rng, None)
            .ok_or(GridError::NoOpenCells(Endpoint::Start))?;
        let end = self
            .random_open_cell(rng, Some(start))
            .ok_or(GridError::NoOpenCells(Endpoint::End))?;

        self.set_start(start)?;
        self.set_end(end)?;
        debug!("placed start at {} and end at {}", start, end);

        Ok((start, end))
    }

    fn random_open_cell(&self, rng: &mut Random, exclude: Option<Coord>) -> Option<Coord> {
        let is_candidate = |pos: Coord| Some(pos) != exclude && self.is_passable(pos);

        // bounded, a closed grid has no candidate to hit
        let Coord(rows, cols) = self.size();
        let attempts = self.cells.len() * SAMPLES_PER_CELL;
        for _ in 0..attempts {
            let pos = Coord(rng.gen_range(0..rows), rng.gen_range(0..cols));
            if is_candidate(pos) {
                return Some(pos);
            }
        }

        trace!(
            "no open cell after {} samples, enumerating candidates",
            attempts
        );
        let candidates = self
            .cells
            .iter_pos()
            .filter(|&pos| is_candidate(pos))
            .collect::<Vec<_>>();
        candidates.choose(rng).copied()
    }

    pub(crate) fn visit(&mut self, pos: Coord) {
        self.cells[pos].visit();
    }

    pub(crate) fn is_visited(&self, pos: Coord) -> bool {
        self.cells.get(pos).is_some_and(Cell::is_visited)
    }

    pub(crate) fn mark_solution(&mut self, pos: Coord) {
        self.cells[pos].set_kind(CellKind::SolutionPath);
    }

    /// Removes everything a previous traversal left behind: visited flags, solution marks, and
    /// restores the end tag that the solution overwrote.
    pub fn clear_solution(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.unvisit();
            if cell.kind() == CellKind::SolutionPath {
                cell.set_kind(CellKind::Open);
            }
        }

        if let Some(end) = self.end {
            if self.start != Some(end) {
                self.cells[end].set_kind(CellKind::End);
            }
        }
    }

    /// One line per row, glyphs separated by a single space.
    pub fn render(&self) -> Vec<String> {
        self.cells
            .rows_iter()
            .map(|row| {
                let mut line = String::with_capacity(row.len() * 2);
                for (i, cell) in row.iter().enumerate() {
                    if i > 0 {
                        line.push(' ');
                    }
                    line.push(cell.glyph());
                }
                line
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
