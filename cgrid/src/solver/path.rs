use hashbrown::HashMap;

use crate::{coord::Coord, grid::Grid};

/// Predecessor of every cell reached by a single traversal, keyed by position.
///
/// The start maps to `None`, every other entry points one step closer to the start.
#[derive(Debug, Clone)]
pub struct PathMap {
    start: Coord,
    prev: HashMap<Coord, Option<Coord>>,
}

impl PathMap {
    pub fn new(start: Coord) -> Self {
        let mut prev = HashMap::new();
        prev.insert(start, None);
        Self { start, prev }
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn contains(&self, pos: Coord) -> bool {
        self.prev.contains_key(&pos)
    }

    /// Records `from` as the predecessor of `pos`, unless `pos` was already reached.
    ///
    /// Returns whether it was inserted, an existing predecessor is never overwritten.
    pub fn insert(&mut self, pos: Coord, from: Coord) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.prev.insert(pos, Some(from));
        true
    }

    pub fn predecessor(&self, pos: Coord) -> Option<Coord> {
        self.prev.get(&pos).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.prev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prev.is_empty()
    }

    /// Positions from the start to `end`, both included, or `None` if `end` wasn't reached.
    pub fn path_to(&self, end: Coord) -> Option<Vec<Coord>> {
        if !self.contains(end) {
            return None;
        }

        let mut path = vec![end];
        let mut next = end;
        while let Some(before) = self.predecessor(next) {
            path.push(before);
            next = before;
        }
        path.reverse();

        Some(path)
    }

    /// Walks back from `end` and marks every cell as part of the solution, except the start.
    pub fn mark_path(&self, grid: &mut Grid, end: Coord) {
        let mut current = Some(end);
        while let Some(pos) = current {
            if pos == self.start {
                break;
            }
            grid.mark_solution(pos);
            current = self.predecessor(pos);
        }
    }
}
