//! Reduces a polycube to its canonical representative: the lexicographic
//! minimum over the 24 rotations, under the convention that an occupied
//! cell (bit value 1) outranks an empty one. Candidate orientations are
//! eliminated lazily as the scan progresses, rather than materialized and
//! compared in full, so the whole sweep runs in one pass over the cells.

use crate::polycube::Polycube;
use crate::rotation::{project, ROTATIONS};

const NUM_ROTATIONS: usize = ROTATIONS.len();

/// Returns the canonical form of `cube`: extents reordered to a
/// descending triple and the bitmap rewritten under the winning
/// orientation. Total over any valid, non-empty polycube.
pub fn canonicalize(cube: &Polycube) -> Polycube {
    let source_lens = [cube.bx as usize, cube.by as usize, cube.bz as usize];
    let total = source_lens[0] * source_lens[1] * source_lens[2];

    let mut active = [true; NUM_ROTATIONS];
    let mut length_checked = [false; NUM_ROTATIONS];
    let mut found = [false; NUM_ROTATIONS];

    let mut index = 0;
    while index < total && active.iter().filter(|&&a| a).count() > 1 {
        let mut found_count = 0usize;

        for r in 0..NUM_ROTATIONS {
            if !active[r] {
                continue;
            }

            if !length_checked[r] {
                length_checked[r] = true;
                let spec = &ROTATIONS[r];
                let a0 = spec.axis_order[0];
                let a1 = spec.axis_order[1];
                let a2 = 3 - a0 - a1;
                // Orientations that cannot yield descending extents can
                // never be the canonical winner; prune them on first use.
                if source_lens[a0] < source_lens[a1] || source_lens[a1] < source_lens[a2] {
                    active[r] = false;
                    continue;
                }
            }

            let p = project(&ROTATIONS[r], index, source_lens);
            let occupied = cube.get(p[0], p[1], p[2]);
            found[r] = occupied;
            if occupied {
                found_count += 1;
            }
        }

        let active_count = active.iter().filter(|&&a| a).count();
        if found_count >= 1 && found_count < active_count {
            for r in 0..NUM_ROTATIONS {
                if active[r] && !found[r] {
                    active[r] = false;
                }
            }
        }

        index += 1;
    }

    // Every valid, non-empty polycube leaves at least one active
    // orientation; ties (genuine symmetries) resolve to the first
    // survivor in table order, which all produce the identical bitmap.
    let winner = active
        .iter()
        .position(|&a| a)
        .expect("canonicalizer: no orientation survived pruning");

    build_canonical(cube, winner, source_lens)
}

fn build_canonical(cube: &Polycube, winner: usize, source_lens: [usize; 3]) -> Polycube {
    let spec = &ROTATIONS[winner];
    let a0 = spec.axis_order[0];
    let a1 = spec.axis_order[1];
    let a2 = 3 - a0 - a1;
    let out_lens = [source_lens[a0], source_lens[a1], source_lens[a2]];

    let mut out = Polycube::new_empty(out_lens[0] as u8, out_lens[1] as u8, out_lens[2] as u8);
    let total = out_lens[0] * out_lens[1] * out_lens[2];
    for index in 0..total {
        let x = index / (out_lens[1] * out_lens[2]);
        let rem = index % (out_lens[1] * out_lens[2]);
        let y = rem / out_lens[2];
        let z = rem % out_lens[2];

        let p = project(spec, index, source_lens);
        if cube.get(p[0], p[1], p[2]) {
            out.set(x, y, z, true);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domino() -> Polycube {
        let mut p = Polycube::new_empty(2, 1, 1);
        p.set(0, 0, 0, true);
        p.set(1, 0, 0, true);
        p
    }

    #[test]
    fn canonical_extents_are_descending() {
        let c = canonicalize(&domino());
        assert!(c.bx >= c.by && c.by >= c.bz);
        assert_eq!((c.bx, c.by, c.bz), (2, 1, 1));
        assert_eq!(c.occupied_count(), 2);
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let c1 = canonicalize(&domino());
        let c2 = canonicalize(&c1);
        assert_eq!(c1.key(), c2.key());
    }

    #[test]
    fn canonicalization_is_rotation_invariant() {
        let base = domino();
        let base_key = canonicalize(&base).key();

        // Rotate the domino's coordinates 90 degrees about the x axis by
        // re-deriving extents/bits from a permuted read of the source.
        for spec in &ROTATIONS {
            let a0 = spec.axis_order[0];
            let a1 = spec.axis_order[1];
            let a2 = 3 - a0 - a1;
            let lens = [base.bx as usize, base.by as usize, base.bz as usize];
            let out_lens = [lens[a0], lens[a1], lens[a2]];
            let mut rotated =
                Polycube::new_empty(out_lens[0] as u8, out_lens[1] as u8, out_lens[2] as u8);
            for index in 0..(out_lens[0] * out_lens[1] * out_lens[2]) {
                let x = index / (out_lens[1] * out_lens[2]);
                let rem = index % (out_lens[1] * out_lens[2]);
                let y = rem / out_lens[2];
                let z = rem % out_lens[2];
                let p = project(spec, index, lens);
                if base.get(p[0], p[1], p[2]) {
                    rotated.set(x, y, z, true);
                }
            }
            assert_eq!(canonicalize(&rotated).key(), base_key);
        }
    }

    #[test]
    fn l_triomino_canonicalizes_to_a_2x2x1_box() {
        // L-triomino: (0,0,0) (1,0,0) (1,1,0) inside a 2x2x1 box.
        let mut p = Polycube::new_empty(2, 2, 1);
        p.set(0, 0, 0, true);
        p.set(1, 0, 0, true);
        p.set(1, 1, 0, true);
        let c = canonicalize(&p);
        assert_eq!((c.bx, c.by, c.bz), (2, 2, 1));
        assert_eq!(c.occupied_count(), 3);
        assert!(c.has_tight_bounding_box());
    }

    #[test]
    fn straight_triomino_canonicalizes_to_a_3x1x1_box() {
        let mut p = Polycube::new_empty(1, 3, 1);
        p.set(0, 0, 0, true);
        p.set(0, 1, 0, true);
        p.set(0, 2, 0, true);
        let c = canonicalize(&p);
        assert_eq!((c.bx, c.by, c.bz), (3, 1, 1));
    }
}
