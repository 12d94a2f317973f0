use ndarray::Array2;

use crate::cell::Cell;

/// Fixed L×L grid of [`Cell`]s with toroidal hexagonal topology.
///
/// The six neighbors of `(i, j)` are `(i+1,j)`, `(i-1,j)`, `(i,j+1)`,
/// `(i,j-1)`, `(i-1,j+1)`, `(i+1,j-1)`, each reduced modulo `L` in both
/// coordinates. There are no boundary cells: every lookup wraps.
#[derive(Debug, Clone)]
pub struct Lattice {
    cells: Array2<Cell>,
    l: usize,
}

/// Neighbor order: N, S, W, E, NE, SW, matching §4.1 of the design spec.
pub type Neighbors = [(usize, usize); 6];

impl Lattice {
    pub fn new(l: usize) -> Self {
        Self {
            cells: Array2::from_elem((l, l), Cell::default()),
            l,
        }
    }

    pub fn from_cells(cells: Array2<Cell>) -> Self {
        let l = cells.shape()[0];
        debug_assert_eq!(cells.shape()[1], l, "lattice must be square");
        Self { cells, l }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.l
    }

    #[inline]
    pub fn center(&self) -> (usize, usize) {
        (self.l / 2, self.l / 2)
    }

    #[inline]
    pub fn at(&self, i: usize, j: usize) -> &Cell {
        &self.cells[[i % self.l, j % self.l]]
    }

    #[inline]
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut Cell {
        &mut self.cells[[i % self.l, j % self.l]]
    }

    #[inline]
    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut Array2<Cell> {
        &mut self.cells
    }

    /// The six neighbors of `(i, j)`, in the fixed order N, S, W, E, NE, SW,
    /// each component wrapped modulo `L`.
    #[inline]
    pub fn neighbors(&self, i: usize, j: usize) -> Neighbors {
        let l = self.l;
        [
            ((i + 1) % l, j),
            ((i + l - 1) % l, j),
            (i, (j + 1) % l),
            (i, (j + l - 1) % l),
            ((i + l - 1) % l, (j + 1) % l),
            ((i + 1) % l, (j + l - 1) % l),
        ]
    }

    /// Count of neighbors of `(i, j)` currently attached to the crystal.
    #[inline]
    pub fn attached_neighbor_count(&self, i: usize, j: usize) -> u8 {
        self.neighbors(i, j)
            .iter()
            .filter(|&&(ni, nj)| self.at(ni, nj).attached)
            .count() as u8
    }

    /// `L∞` distance from `(i, j)` to the center, `max(|i-cx|, |j-cy|)`.
    /// Matches the original `norm_inf` helper: a plain (unwrapped) max-abs,
    /// since every in-bounds index is already within `L/2` of the center.
    pub fn linf_distance_from_center(&self, i: i64, j: i64) -> u32 {
        let (cx, cy) = self.center();
        let di = (i - cx as i64).unsigned_abs();
        let dj = (j - cy as i64).unsigned_abs();
        di.max(dj) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_wrap_at_edges() {
        let lattice = Lattice::new(5);
        let ns = lattice.neighbors(0, 0);
        assert_eq!(
            ns,
            [(1, 0), (4, 0), (0, 1), (0, 4), (4, 1), (1, 4)]
        );
    }

    #[test]
    fn attached_neighbor_count_reflects_state() {
        let mut lattice = Lattice::new(5);
        lattice.at_mut(1, 0).attached = true;
        lattice.at_mut(0, 1).attached = true;
        assert_eq!(lattice.attached_neighbor_count(0, 0), 2);
    }

    #[test]
    fn center_of_even_and_odd_sides() {
        assert_eq!(Lattice::new(11).center(), (5, 5));
        assert_eq!(Lattice::new(10).center(), (5, 5));
    }
}
