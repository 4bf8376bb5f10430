//! Generates every valid (N+1)-cube candidate (pre-canonicalization) from
//! a canonical N-cube, by trying each adjacent empty cell on a
//! one-cell-padded view of the shape. Growth at a zero face shifts the
//! whole shape by one cell along that axis; growth at a far face or an
//! interior pocket extends or fills the box in place.

use crate::polycube::Polycube;

/// Bounds-checked occupancy lookup: any coordinate outside `[0, bx) x
/// [0, by) x [0, bz)` reads as empty. This is exactly the "cell outside
/// the bounding box is trivially unoccupied" rule the padded-grid scan
/// relies on.
#[inline]
fn occupied(cube: &Polycube, x: isize, y: isize, z: isize) -> bool {
    if x < 0 || y < 0 || z < 0 {
        return false;
    }
    let (x, y, z) = (x as usize, y as usize, z as usize);
    if x >= cube.bx as usize || y >= cube.by as usize || z >= cube.bz as usize {
        return false;
    }
    cube.get(x, y, z)
}

/// Every growth candidate obtainable by adding one face-adjacent cube
/// to `cube`. Candidates are not canonicalized and are not deduplicated
/// against one another — the caller's dedup set handles that.
pub fn generate_candidates(cube: &Polycube) -> Vec<Polycube> {
    let (bx, by, bz) = (cube.bx as usize, cube.by as usize, cube.bz as usize);
    let mut candidates = Vec::new();

    for i in 0..=(bx + 1) {
        for j in 0..=(by + 1) {
            for k in 0..=(bz + 1) {
                let (sx, sy, sz) = (i as isize - 1, j as isize - 1, k as isize - 1);

                if occupied(cube, sx, sy, sz) {
                    continue; // already part of the shape
                }

                let adjacent = occupied(cube, sx - 1, sy, sz)
                    || occupied(cube, sx + 1, sy, sz)
                    || occupied(cube, sx, sy - 1, sz)
                    || occupied(cube, sx, sy + 1, sz)
                    || occupied(cube, sx, sy, sz - 1)
                    || occupied(cube, sx, sy, sz + 1);
                if !adjacent {
                    continue;
                }

                candidates.push(build_candidate(cube, i, j, k, bx, by, bz));
            }
        }
    }

    candidates
}

fn build_candidate(
    cube: &Polycube,
    i: usize,
    j: usize,
    k: usize,
    bx: usize,
    by: usize,
    bz: usize,
) -> Polycube {
    if i == 0 {
        shifted(cube, bx + 1, by, bz, 1, 0, 0, 0, j - 1, k - 1)
    } else if j == 0 {
        shifted(cube, bx, by + 1, bz, 0, 1, 0, i - 1, 0, k - 1)
    } else if k == 0 {
        shifted(cube, bx, by, bz + 1, 0, 0, 1, i - 1, j - 1, 0)
    } else if i == bx + 1 {
        grown_same(cube, bx + 1, by, bz, bx, j - 1, k - 1)
    } else if j == by + 1 {
        grown_same(cube, bx, by + 1, bz, i - 1, by, k - 1)
    } else if k == bz + 1 {
        grown_same(cube, bx, by, bz + 1, i - 1, j - 1, bz)
    } else {
        let mut candidate = cube.clone();
        candidate.set(i - 1, j - 1, k - 1, true);
        candidate
    }
}

/// Builds a candidate for growth at the zero face of one axis: the
/// whole shape shifts by +1 along that axis, and the new cell is set at
/// the vacated origin slot.
#[allow(clippy::too_many_arguments)]
fn shifted(
    cube: &Polycube,
    new_bx: usize,
    new_by: usize,
    new_bz: usize,
    dx: usize,
    dy: usize,
    dz: usize,
    set_x: usize,
    set_y: usize,
    set_z: usize,
) -> Polycube {
    let mut candidate = Polycube::new_empty(new_bx as u8, new_by as u8, new_bz as u8);
    for x in 0..cube.bx as usize {
        for y in 0..cube.by as usize {
            for z in 0..cube.bz as usize {
                if cube.get(x, y, z) {
                    candidate.set(x + dx, y + dy, z + dz, true);
                }
            }
        }
    }
    candidate.set(set_x, set_y, set_z, true);
    candidate
}

/// Builds a candidate for growth at the far face of one axis: the
/// bounding box extends by one cell but no existing cell moves.
fn grown_same(
    cube: &Polycube,
    new_bx: usize,
    new_by: usize,
    new_bz: usize,
    set_x: usize,
    set_y: usize,
    set_z: usize,
) -> Polycube {
    let mut candidate = Polycube::new_empty(new_bx as u8, new_by as u8, new_bz as u8);
    for x in 0..cube.bx as usize {
        for y in 0..cube.by as usize {
            for z in 0..cube.bz as usize {
                if cube.get(x, y, z) {
                    candidate.set(x, y, z, true);
                }
            }
        }
    }
    candidate.set(set_x, set_y, set_z, true);
    candidate
}
