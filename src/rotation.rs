//! The 24 proper rotations of the cube, represented as data rather than
//! hand-unrolled coordinate transforms.
//!
//! Each entry names, for one rotation, which sign of each axis is negated
//! and in what order the two "major" output axes are visited. A linear
//! scan index is decomposed along that axis order and mapped back to a
//! coordinate in the un-rotated source polycube by [`project`]. Keeping
//! "visit order" separate from "source coordinate" lets the canonicalizer
//! compare all 24 orientations with a single linear sweep instead of
//! materializing 24 rotated copies of the shape.

pub const AXIS_X: usize = 0;
pub const AXIS_Y: usize = 1;
pub const AXIS_Z: usize = 2;

/// One of the 24 proper rotations of the cube. `neg[axis]` reflects that
/// axis's coordinate (`len - coord - 1`) after the index decomposition.
/// `axis_order` names the two most-significant axes of the scan; the
/// third is inferred (`3 - axis_order[0] - axis_order[1]`).
#[derive(Clone, Copy, Debug)]
pub struct RotationSpec {
    pub neg: [bool; 3],
    pub axis_order: [usize; 2],
}

/// The 24 proper rotations, grouped by which axis sign pattern they apply.
/// Reflections are deliberately absent; this is the full octahedral
/// rotation group and nothing more.
pub const ROTATIONS: [RotationSpec; 24] = [
    RotationSpec { neg: [false, false, false], axis_order: [AXIS_X, AXIS_Y] },
    RotationSpec { neg: [false, false, false], axis_order: [AXIS_Y, AXIS_Z] },
    RotationSpec { neg: [false, false, false], axis_order: [AXIS_Z, AXIS_X] },
    RotationSpec { neg: [true, false, false], axis_order: [AXIS_Y, AXIS_X] },
    RotationSpec { neg: [true, false, false], axis_order: [AXIS_X, AXIS_Z] },
    RotationSpec { neg: [true, false, false], axis_order: [AXIS_Z, AXIS_Y] },
    RotationSpec { neg: [false, true, false], axis_order: [AXIS_Y, AXIS_X] },
    RotationSpec { neg: [false, true, false], axis_order: [AXIS_X, AXIS_Z] },
    RotationSpec { neg: [false, true, false], axis_order: [AXIS_Z, AXIS_Y] },
    RotationSpec { neg: [false, false, true], axis_order: [AXIS_Y, AXIS_X] },
    RotationSpec { neg: [false, false, true], axis_order: [AXIS_X, AXIS_Z] },
    RotationSpec { neg: [false, false, true], axis_order: [AXIS_Z, AXIS_Y] },
    RotationSpec { neg: [true, true, false], axis_order: [AXIS_X, AXIS_Y] },
    RotationSpec { neg: [true, true, false], axis_order: [AXIS_Y, AXIS_Z] },
    RotationSpec { neg: [true, true, false], axis_order: [AXIS_Z, AXIS_X] },
    RotationSpec { neg: [true, false, true], axis_order: [AXIS_X, AXIS_Y] },
    RotationSpec { neg: [true, false, true], axis_order: [AXIS_Y, AXIS_Z] },
    RotationSpec { neg: [true, false, true], axis_order: [AXIS_Z, AXIS_X] },
    RotationSpec { neg: [false, true, true], axis_order: [AXIS_X, AXIS_Y] },
    RotationSpec { neg: [false, true, true], axis_order: [AXIS_Y, AXIS_Z] },
    RotationSpec { neg: [false, true, true], axis_order: [AXIS_Z, AXIS_X] },
    RotationSpec { neg: [true, true, true], axis_order: [AXIS_Y, AXIS_X] },
    RotationSpec { neg: [true, true, true], axis_order: [AXIS_X, AXIS_Z] },
    RotationSpec { neg: [true, true, true], axis_order: [AXIS_Z, AXIS_Y] },
];

/// Maps a linear scan index (decomposed along `spec`'s axis order, with
/// extents taken from `lens`) to the `(x, y, z)` source coordinate it
/// corresponds to under this rotation. Pure and total for
/// `index < lens[0] * lens[1] * lens[2]`.
#[inline]
pub fn project(spec: &RotationSpec, index: usize, lens: [usize; 3]) -> [usize; 3] {
    let a0 = spec.axis_order[0];
    let a1 = spec.axis_order[1];
    let a2 = 3 - a0 - a1;

    let minor = lens[a1] * lens[a2];
    let mut proj = [0usize; 3];
    proj[a0] = index / minor;
    let rem = index % minor;
    proj[a1] = rem / lens[a2];
    proj[a2] = rem % lens[a2];

    for (axis, &negate) in spec.neg.iter().enumerate() {
        if negate {
            proj[axis] = lens[axis] - proj[axis] - 1;
        }
    }
    proj
}
