use std::collections::VecDeque;

use super::Frontier;
use crate::coord::Coord;

/// First in, first out. The first time the end is taken out, the recorded path is a shortest one.
#[derive(Debug, Default)]
pub struct BreadthFirstSearch {
    queue: VecDeque<Coord>,
}

impl Frontier for BreadthFirstSearch {
    fn push(&mut self, pos: Coord) {
        self.queue.push_back(pos);
    }

    fn pop(&mut self) -> Option<Coord> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
