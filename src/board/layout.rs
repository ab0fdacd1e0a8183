//! Static map layout.
//!
//! The cell graph is read once at startup and never changes: cell kinds,
//! neighbor indices, and both players' base cells. Cells live in a boxed
//! slice indexed by cell id; neighbor and parent relations elsewhere in the
//! crate are plain indices into that slice.

use super::cell::{CellKind, NEIGHBOR_SLOTS};

/// One cell of the static layout.
#[derive(Debug, Clone)]
pub struct Cell {
    pub kind: CellKind,
    /// Present neighbors only; absent slots are dropped at parse time.
    pub neighbors: Box<[usize]>,
}

/// The full static map: all cells plus both players' bases.
#[derive(Debug, Clone)]
pub struct Layout {
    pub cells: Box<[Cell]>,
    pub my_bases: Box<[usize]>,
    pub enemy_bases: Box<[usize]>,
}

impl Layout {
    /// Builds a layout, checking that every neighbor and base index is in
    /// range and that no cell exceeds the hexagonal neighbor limit.
    pub fn new(
        cells: Vec<Cell>,
        my_bases: Vec<usize>,
        enemy_bases: Vec<usize>,
    ) -> Result<Layout, String> {
        let n = cells.len();
        for (id, cell) in cells.iter().enumerate() {
            if cell.neighbors.len() > NEIGHBOR_SLOTS {
                return Err(format!(
                    "cell {} has {} neighbors, limit is {}",
                    id,
                    cell.neighbors.len(),
                    NEIGHBOR_SLOTS
                ));
            }
            for &nb in cell.neighbors.iter() {
                if nb >= n {
                    return Err(format!("cell {} has out-of-range neighbor {}", id, nb));
                }
            }
        }
        for &base in my_bases.iter().chain(enemy_bases.iter()) {
            if base >= n {
                return Err(format!("base index {} out of range for {} cells", base, n));
            }
        }
        Ok(Layout {
            cells: cells.into_boxed_slice(),
            my_bases: my_bases.into_boxed_slice(),
            enemy_bases: enemy_bases.into_boxed_slice(),
        })
    }

    /// Number of cells on the map.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn kind(&self, cell: usize) -> CellKind {
        self.cells[cell].kind
    }

    pub fn neighbors(&self, cell: usize) -> &[usize] {
        &self.cells[cell].neighbors
    }
}
