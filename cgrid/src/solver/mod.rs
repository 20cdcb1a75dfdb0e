mod breadth_first_search;
mod depth_first_search;
mod path;

use std::{fmt, str::FromStr};

use log::{debug, trace};

use crate::{coord::Coord, error::Result, grid::Grid};
pub use breadth_first_search::BreadthFirstSearch;
pub use depth_first_search::DepthFirstSearch;
pub use path::PathMap;

/// Pending cells of a traversal. The order in which they come out decides the search.
pub trait Frontier: Default {
    fn push(&mut self, pos: Coord);

    fn pop(&mut self) -> Option<Coord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dfs];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm `{}`, expected `bfs` or `dfs`", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Result of one solve. Not finding a path is a regular outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub algorithm: Algorithm,
    /// Start to end, both included.
    pub path: Option<Vec<Coord>>,
    /// Cells taken out of the frontier.
    pub explored: usize,
}

impl SolveReport {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of steps of the found path.
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }
}

impl Grid {
    /// Breadth-first search from start to end, marks the shortest path on success.
    pub fn solve_bfs(&mut self) -> Result<bool> {
        self.solve(Algorithm::Bfs).map(|report| report.found())
    }

    /// Depth-first search from start to end, marks the found path on success.
    pub fn solve_dfs(&mut self) -> Result<bool> {
        self.solve(Algorithm::Dfs).map(|report| report.found())
    }

    pub fn solve(&mut self, algorithm: Algorithm) -> Result<SolveReport> {
        match algorithm {
            Algorithm::Bfs => traverse::<BreadthFirstSearch>(self, algorithm),
            Algorithm::Dfs => traverse::<DepthFirstSearch>(self, algorithm),
        }
    }
}

/// Runs the search with the given frontier discipline.
///
/// Leftovers of a previous solve are cleared first. A cell is marked visited and gets its
/// predecessor when it's pushed, so no cell enters the frontier twice.
pub fn traverse<F: Frontier>(grid: &mut Grid, algorithm: Algorithm) -> Result<SolveReport> {
    let (start, end) = grid.endpoints()?;
    grid.clear_solution();

    let mut frontier = F::default();
    let mut paths = PathMap::new(start);
    grid.visit(start);
    frontier.push(start);

    let mut explored = 0;
    while let Some(current) = frontier.pop() {
        explored += 1;

        if current == end {
            paths.mark_path(grid, end);
            let path = paths.path_to(end);
            debug!(
                "{} reached {} from {} in {} steps, explored {} cells",
                algorithm,
                end,
                start,
                path.as_ref().map_or(0, |p| p.len() - 1),
                explored
            );
            return Ok(SolveReport {
                algorithm,
                path,
                explored,
            });
        }

        let unvisited = grid
            .neighbors(current)
            .filter(|&n| !paths.contains(n) && !grid.is_visited(n))
            .collect::<Vec<_>>();

        for next in unvisited {
            grid.visit(next);
            paths.insert(next, current);
            frontier.push(next);
        }
        trace!("{} frontier holds {} cells", algorithm, frontier.len());
    }

    debug!(
        "{} found no path from {} to {}, explored {} cells",
        algorithm, start, end, explored
    );
    Ok(SolveReport {
        algorithm,
        path: None,
        explored,
    })
}
