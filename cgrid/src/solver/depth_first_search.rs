use super::Frontier;
use crate::coord::Coord;

/// Last in, first out. Finds a path, not necessarily the shortest one.
#[derive(Debug, Default)]
pub struct DepthFirstSearch {
    stack: Vec<Coord>,
}

impl Frontier for DepthFirstSearch {
    fn push(&mut self, pos: Coord) {
        self.stack.push(pos);
    }

    fn pop(&mut self) -> Option<Coord> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
