//! Distance field over the static map.
//!
//! A single multi-source BFS from all owned bases, run once at startup.
//! For every cell it records the distance to the nearest base, which base
//! that is, and the parent cell on the shortest path back to it. The graph
//! never changes during a run, so the field is computed once and read by
//! every subsequent turn.
//!
//! All edges have unit weight, so first-settlement order equals
//! shortest-path order: a cell is fixed the first time it is dequeued and
//! later arrivals are discarded. Bases are seeded in input order, which is
//! also the tie-break between bases reaching a cell at equal distance.

use std::collections::VecDeque;

use crate::board::Layout;

/// Distance sentinel for cells no base can reach.
pub const UNREACHABLE: i32 = -1;

/// Per-cell shortest-path data rooted at the owned bases.
#[derive(Debug, Clone)]
pub struct DistanceField {
    dist: Box<[i32]>,
    base: Box<[usize]>,
    parent: Box<[usize]>,
    /// Reachable cells, ascending by (distance, id).
    order: Box<[usize]>,
}

impl DistanceField {
    /// Runs the multi-source BFS from `bases` over `layout`.
    pub fn compute(layout: &Layout, bases: &[usize]) -> DistanceField {
        let n = layout.len();
        let mut dist = vec![UNREACHABLE; n];
        let mut base = vec![usize::MAX; n];
        let mut parent = vec![usize::MAX; n];

        let mut queue = VecDeque::with_capacity(n);
        for &b in bases {
            if dist[b] != UNREACHABLE {
                continue;
            }
            dist[b] = 0;
            base[b] = b;
            parent[b] = b;
            queue.push_back(b);
        }

        while let Some(cur) = queue.pop_front() {
            let next_dist = dist[cur] + 1;
            for &nb in layout.neighbors(cur) {
                if dist[nb] != UNREACHABLE {
                    continue;
                }
                dist[nb] = next_dist;
                base[nb] = base[cur];
                parent[nb] = cur;
                queue.push_back(nb);
            }
        }

        let mut order: Vec<usize> = (0..n).filter(|&c| dist[c] != UNREACHABLE).collect();
        order.sort_by_key(|&c| (dist[c], c));

        DistanceField {
            dist: dist.into_boxed_slice(),
            base: base.into_boxed_slice(),
            parent: parent.into_boxed_slice(),
            order: order.into_boxed_slice(),
        }
    }

    /// Distance in steps to the nearest base, or [`UNREACHABLE`].
    pub fn distance(&self, cell: usize) -> i32 {
        self.dist[cell]
    }

    pub fn is_reachable(&self, cell: usize) -> bool {
        self.dist[cell] != UNREACHABLE
    }

    /// The base whose BFS settled this cell, if any base reaches it.
    pub fn nearest_base(&self, cell: usize) -> Option<usize> {
        self.is_reachable(cell).then(|| self.base[cell])
    }

    /// The next cell toward the base. A base is its own parent.
    pub fn parent(&self, cell: usize) -> Option<usize> {
        self.is_reachable(cell).then(|| self.parent[cell])
    }

    /// Reachable cells in ascending (distance, id) order.
    pub fn by_distance(&self) -> &[usize] {
        &self.order
    }

    pub fn reachable_count(&self) -> usize {
        self.order.len()
    }

    pub fn unreachable_count(&self) -> usize {
        self.dist.len() - self.order.len()
    }

    /// Walks the parent chain from `from` to its base, yielding every cell
    /// on the path including both endpoints. Empty if `from` is unreachable.
    pub fn path_to_base(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        let mut next = self.is_reachable(from).then_some(from);
        std::iter::from_fn(move || {
            let current = next?;
            let parent = self.parent[current];
            next = if parent == current { None } else { Some(parent) };
            Some(current)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, CellKind, Layout};

    /// Builds a layout from (kind, neighbors) pairs with bases for "me" only.
    fn layout_of(cells: &[(CellKind, &[usize])], my_bases: &[usize]) -> Layout {
        let cells = cells
            .iter()
            .map(|(kind, neighbors)| Cell {
                kind: *kind,
                neighbors: neighbors.to_vec().into_boxed_slice(),
            })
            .collect();
        Layout::new(cells, my_bases.to_vec(), vec![]).unwrap()
    }

    /// A 5-cell path 0-1-2-3-4.
    fn path5() -> Layout {
        layout_of(
            &[
                (CellKind::Empty, &[1]),
                (CellKind::Empty, &[0, 2]),
                (CellKind::Empty, &[1, 3]),
                (CellKind::Empty, &[2, 4]),
                (CellKind::Crystals, &[3]),
            ],
            &[0],
        )
    }

    #[test]
    fn distances_along_a_path() {
        let layout = path5();
        let field = DistanceField::compute(&layout, &layout.my_bases);
        for cell in 0..5 {
            assert_eq!(field.distance(cell), cell as i32);
            assert_eq!(field.nearest_base(cell), Some(0));
        }
    }

    #[test]
    fn base_is_its_own_parent() {
        let layout = path5();
        let field = DistanceField::compute(&layout, &layout.my_bases);
        assert_eq!(field.parent(0), Some(0));
    }

    #[test]
    fn parent_chain_length_equals_distance() {
        let layout = path5();
        let field = DistanceField::compute(&layout, &layout.my_bases);
        for cell in 0..5 {
            let path: Vec<usize> = field.path_to_base(cell).collect();
            assert_eq!(path.len() as i32, field.distance(cell) + 1);
            assert_eq!(path.first(), Some(&cell));
            assert_eq!(path.last(), Some(&0));
        }
    }

    #[test]
    fn ordering_ascends_by_distance_then_id() {
        let layout = path5();
        let field = DistanceField::compute(&layout, &layout.my_bases);
        assert_eq!(field.by_distance(), &[0, 1, 2, 3, 4]);
        let a = DistanceField::compute(&layout, &layout.my_bases);
        assert_eq!(a.by_distance(), field.by_distance());
    }

    #[test]
    fn disconnected_cell_is_unreachable_and_excluded() {
        // 0-1 connected, 2 isolated.
        let layout = layout_of(
            &[
                (CellKind::Empty, &[1]),
                (CellKind::Eggs, &[0]),
                (CellKind::Crystals, &[]),
            ],
            &[0],
        );
        let field = DistanceField::compute(&layout, &layout.my_bases);
        assert_eq!(field.distance(2), UNREACHABLE);
        assert!(!field.is_reachable(2));
        assert_eq!(field.nearest_base(2), None);
        assert_eq!(field.parent(2), None);
        assert_eq!(field.by_distance(), &[0, 1]);
        assert_eq!(field.reachable_count(), 2);
        assert_eq!(field.unreachable_count(), 1);
        assert_eq!(field.path_to_base(2).count(), 0);
    }

    #[test]
    fn equidistant_tie_goes_to_base_seeded_first() {
        // 0 and 2 are bases; 1 sits between them at distance 1 from both.
        let layout = layout_of(
            &[
                (CellKind::Empty, &[1]),
                (CellKind::Eggs, &[0, 2]),
                (CellKind::Empty, &[1]),
            ],
            &[0, 2],
        );
        let field = DistanceField::compute(&layout, &layout.my_bases);
        assert_eq!(field.distance(1), 1);
        assert_eq!(field.nearest_base(1), Some(0));

        // Seeding order flipped: the other base wins the tie.
        let flipped = DistanceField::compute(&layout, &[2, 0]);
        assert_eq!(flipped.nearest_base(1), Some(2));
    }

    #[test]
    fn multi_source_takes_the_nearer_base() {
        // Path 0-1-2-3-4 with bases at both ends.
        let layout = layout_of(
            &[
                (CellKind::Empty, &[1]),
                (CellKind::Empty, &[0, 2]),
                (CellKind::Empty, &[1, 3]),
                (CellKind::Empty, &[2, 4]),
                (CellKind::Empty, &[3]),
            ],
            &[0, 4],
        );
        let field = DistanceField::compute(&layout, &layout.my_bases);
        assert_eq!(field.distance(1), 1);
        assert_eq!(field.nearest_base(1), Some(0));
        assert_eq!(field.distance(3), 1);
        assert_eq!(field.nearest_base(3), Some(4));
        assert_eq!(field.distance(2), 2);
    }
}
