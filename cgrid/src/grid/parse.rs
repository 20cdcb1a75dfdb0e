use std::str::FromStr;

use crate::{
    coord::Coord,
    error::GridError,
    grid::{board::Grid, cell::CellKind},
};

/// Reads a grid back from the format produced by [`Grid::render`]: one line per row, glyphs
/// separated by a single space.
///
/// The border is taken as written, it is *not* forced to walls.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .enumerate()
            .map(|(row, line)| split_glyphs(row, line))
            .collect::<Result<Vec<_>, _>>()?;

        let columns = rows.first().map_or(0, Vec::len);
        let mut grid = Grid::new(rows.len(), columns)?;

        for (r, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != columns {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: columns,
                    found: glyphs.len(),
                });
            }

            for (c, &glyph) in glyphs.iter().enumerate() {
                let pos = Coord(r as i32, c as i32);
                let kind = CellKind::from_glyph(glyph)
                    .ok_or(GridError::InvalidGlyph { glyph, pos })?;

                match kind {
                    CellKind::Wall => grid.set_wall(pos)?,
                    CellKind::Open => grid.set_open(pos)?,
                    CellKind::Start => grid.set_start(pos)?,
                    CellKind::End => grid.set_end(pos)?,
                    CellKind::SolutionPath => {
                        grid.set_open(pos)?;
                        grid.mark_solution(pos);
                    }
                }
            }
        }

        Ok(grid)
    }
}

fn split_glyphs(row: usize, line: &str) -> Result<Vec<char>, GridError> {
    let mut glyphs = Vec::with_capacity(line.len() / 2 + 1);
    for (i, ch) in line.chars().enumerate() {
        if i % 2 == 0 {
            glyphs.push(ch);
        } else if ch != ' ' {
            return Err(GridError::InvalidGlyph {
                glyph: ch,
                pos: Coord(row as i32, (i / 2) as i32),
            });
        }
    }
    Ok(glyphs)
}
