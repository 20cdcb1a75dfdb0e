use std::io::{self, Write};

use cgrid::{CellKind, Grid};
use colored::{ColoredString, Colorize as _};

fn paint(kind: CellKind) -> ColoredString {
    let glyph = kind.glyph().to_string();
    match kind {
        CellKind::Wall => glyph.dimmed(),
        CellKind::Open => glyph.normal(),
        CellKind::Start => glyph.green().bold(),
        CellKind::End => glyph.red().bold(),
        CellKind::SolutionPath => glyph.yellow(),
    }
}

/// Same layout as [`Grid::render`], with every glyph tinted by its kind.
pub fn render_colored(grid: &Grid) -> Vec<String> {
    grid.get_cells()
        .rows_iter()
        .map(|row| {
            row.iter()
                .map(|cell| paint(cell.kind()).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn print_grid(out: &mut impl Write, grid: &Grid, color: bool) -> io::Result<()> {
    let lines = if color {
        render_colored(grid)
    } else {
        grid.render()
    };

    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
