use std::ops;

use crate::coord::Coord;

/// Row-major 2D storage, indexed by [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(Coord) -> T) -> Self {
        let buf = Coord::iter_fill(Coord(rows as i32, cols as i32))
            .map(f)
            .collect();

        Self { buf, rows, cols }
    }

    pub fn size(&self) -> Coord {
        Coord(self.rows as i32, self.cols as i32)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        self.dim_to_idx(pos).is_some()
    }

    pub fn dim_to_idx(&self, pos: Coord) -> Option<usize> {
        let Coord(r, c) = pos;
        if r < 0 || c < 0 {
            return None;
        }

        let (r, c) = (r as usize, c as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }

        Some(r * self.cols + c)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Coord> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Coord((idx / self.cols) as i32, (idx % self.cols) as i32))
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Coord) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    /// Rows as slices, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        // `max(1)` only matters for the empty array, `chunks` panics on zero
        self.buf.chunks(self.cols.max(1))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, rows: usize, cols: usize) -> Self {
        Self {
            buf: vec![item; rows * cols],
            rows,
            cols,
        }
    }

    pub fn fill(&mut self, item: T) {
        self.buf.fill(item);
    }
}

impl<T> ops::Index<Coord> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

impl<T> ops::IndexMut<Coord> for Array2D<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_conversion() {
        let arr = Array2D::new(0u8, 3, 4);
        assert_eq!(arr.dim_to_idx(Coord(0, 0)), Some(0));
        assert_eq!(arr.dim_to_idx(Coord(1, 0)), Some(4));
        assert_eq!(arr.dim_to_idx(Coord(2, 3)), Some(11));
        assert_eq!(arr.dim_to_idx(Coord(3, 0)), None);
        assert_eq!(arr.dim_to_idx(Coord(0, 4)), None);
        assert_eq!(arr.dim_to_idx(Coord(-1, 0)), None);

        assert_eq!(arr.idx_to_dim(5), Some(Coord(1, 1)));
        assert_eq!(arr.idx_to_dim(12), None);
    }

    #[test]
    fn from_fn_sees_positions() {
        let arr = Array2D::from_fn(2, 2, |pos| pos);
        for pos in arr.iter_pos() {
            assert_eq!(arr[pos], pos);
        }
    }

    #[test]
    fn rows_iter() {
        let arr = Array2D::from_fn(2, 3, |Coord(r, c)| r * 10 + c);
        let rows = arr.rows_iter().collect::<Vec<_>>();
        assert_eq!(rows, vec![&[0, 1, 2][..], &[10, 11, 12][..]]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let arr = Array2D::new(0u8, 2, 2);
        let _ = arr[Coord(2, 0)];
    }
}
