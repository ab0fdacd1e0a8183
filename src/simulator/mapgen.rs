//! Arena map generation.
//!
//! Produces mirrored hexagonal maps for offline play: a parallelogram of
//! axial-coordinate hex cells with resources and bases placed under point
//! symmetry, the way arena maps are balanced between the two players.
//! Generation is fully driven by the caller's seeded rng.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Cell, CellKind, Layout, Snapshot};

/// Knobs for generated maps.
#[derive(Debug, Clone)]
pub struct MapParams {
    /// Cells per axial row.
    pub width: usize,
    /// Number of axial rows.
    pub height: usize,
    /// Chance a cell holds eggs.
    pub egg_chance: f64,
    /// Chance a cell holds crystals.
    pub crystal_chance: f64,
    /// Resource amount range on non-empty cells.
    pub min_resources: i32,
    pub max_resources: i32,
    /// Starting ants on each player's base.
    pub base_ants: i32,
}

impl Default for MapParams {
    fn default() -> Self {
        MapParams {
            width: 8,
            height: 5,
            egg_chance: 0.15,
            crystal_chance: 0.25,
            min_resources: 10,
            max_resources: 60,
            base_ants: 10,
        }
    }
}

/// Axial-coordinate neighbor offsets of a hex cell.
const HEX_OFFSETS: [(i32, i32); 6] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, -1), (-1, 1)];

/// Generates a mirrored map and its first-turn snapshot.
///
/// Cell ids are row-major over the parallelogram; the mirror of cell `i`
/// is `n - 1 - i`, a point reflection that preserves hex adjacency.
pub fn generate(params: &MapParams, rng: &mut SmallRng) -> (Layout, Snapshot) {
    let width = params.width.max(2);
    let height = params.height.max(1);
    let n = width * height;

    let mut kinds = vec![CellKind::Empty; n];
    let mut resources = vec![0i32; n];
    for id in 0..n {
        let mirror = n - 1 - id;
        if id > mirror {
            // Already filled from the mirrored half.
            continue;
        }
        let roll: f64 = rng.gen();
        let kind = if roll < params.egg_chance {
            CellKind::Eggs
        } else if roll < params.egg_chance + params.crystal_chance {
            CellKind::Crystals
        } else {
            CellKind::Empty
        };
        let amount = if kind == CellKind::Empty {
            0
        } else {
            rng.gen_range(params.min_resources..=params.max_resources)
        };
        kinds[id] = kind;
        resources[id] = amount;
        kinds[mirror] = kind;
        resources[mirror] = amount;
    }

    // Bases sit on mirrored cells in the first half, forced empty.
    let my_base = rng.gen_range(0..n / 2);
    let enemy_base = n - 1 - my_base;
    for id in [my_base, enemy_base] {
        kinds[id] = CellKind::Empty;
        resources[id] = 0;
    }

    let cells: Vec<Cell> = (0..n)
        .map(|id| {
            let q = (id % width) as i32;
            let r = (id / width) as i32;
            let neighbors: Vec<usize> = HEX_OFFSETS
                .iter()
                .filter_map(|&(dq, dr)| {
                    let (nq, nr) = (q + dq, r + dr);
                    if nq < 0 || nr < 0 || nq >= width as i32 || nr >= height as i32 {
                        return None;
                    }
                    Some((nr * width as i32 + nq) as usize)
                })
                .collect();
            Cell {
                kind: kinds[id],
                neighbors: neighbors.into_boxed_slice(),
            }
        })
        .collect();

    let layout = Layout::new(cells, vec![my_base], vec![enemy_base])
        .expect("generated map must be valid");

    let mut snap = Snapshot::empty(n);
    snap.resources.copy_from_slice(&resources);
    snap.my_ants[my_base] = params.base_ants;
    snap.enemy_ants[enemy_base] = params.base_ants;

    (layout, snap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn generated(seed: u64) -> (Layout, Snapshot) {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate(&MapParams::default(), &mut rng)
    }

    #[test]
    fn same_seed_same_map() {
        let (a_layout, a_snap) = generated(7);
        let (b_layout, b_snap) = generated(7);
        assert_eq!(a_layout.len(), b_layout.len());
        for id in 0..a_layout.len() {
            assert_eq!(a_layout.kind(id), b_layout.kind(id));
            assert_eq!(a_layout.neighbors(id), b_layout.neighbors(id));
            assert_eq!(a_snap.resources[id], b_snap.resources[id]);
        }
        assert_eq!(&*a_layout.my_bases, &*b_layout.my_bases);
    }

    #[test]
    fn map_is_point_symmetric() {
        let (layout, snap) = generated(11);
        let n = layout.len();
        for id in 0..n {
            assert_eq!(layout.kind(id), layout.kind(n - 1 - id));
            assert_eq!(snap.resources[id], snap.resources[n - 1 - id]);
        }
        assert_eq!(layout.enemy_bases[0], n - 1 - layout.my_bases[0]);
    }

    #[test]
    fn adjacency_is_symmetric_and_hexagonal() {
        let (layout, _) = generated(3);
        for id in 0..layout.len() {
            let neighbors = layout.neighbors(id);
            assert!(neighbors.len() <= 6);
            for &nb in neighbors {
                assert!(
                    layout.neighbors(nb).contains(&id),
                    "edge {} -> {} has no reverse",
                    id,
                    nb
                );
            }
        }
    }

    #[test]
    fn bases_are_empty_cells_with_starting_ants() {
        let (layout, snap) = generated(5);
        let my_base = layout.my_bases[0];
        let enemy_base = layout.enemy_bases[0];
        assert_eq!(layout.kind(my_base), CellKind::Empty);
        assert_eq!(layout.kind(enemy_base), CellKind::Empty);
        assert_eq!(snap.my_ants[my_base], 10);
        assert_eq!(snap.enemy_ants[enemy_base], 10);
    }

    #[test]
    fn whole_map_is_connected_from_base() {
        use crate::pathing::DistanceField;
        let (layout, _) = generated(9);
        let field = DistanceField::compute(&layout, &layout.my_bases);
        assert_eq!(field.unreachable_count(), 0, "parallelogram has no holes");
    }
}
