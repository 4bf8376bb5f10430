//! Textual rendering of a polycube for the `-d`/`--dump` CLI output: `by`
//! lines, each line `bz` space-separated `bx`-digit binary groups. Within
//! a group, digit position is `x`; groups left-to-right are `z`; lines
//! top-to-bottom are `y`.

use std::fmt::Write as _;

use crate::polycube::Polycube;

/// Renders one polycube as its documented multi-line form, without a
/// trailing blank separator line (the caller adds that between shapes).
pub fn render_polycube(cube: &Polycube) -> String {
    let (bx, by, bz) = (cube.bx as usize, cube.by as usize, cube.bz as usize);
    let mut out = String::new();
    for y in 0..by {
        for z in 0..bz {
            if z > 0 {
                out.push(' ');
            }
            for x in 0..bx {
                let bit = if cube.get(x, y, z) { '1' } else { '0' };
                out.push(bit);
            }
        }
        out.push('\n');
    }
    out
}

/// Renders a full generation: each polycube's rendering followed by a
/// blank line, then one further blank line terminating the generation.
pub fn render_generation(cubes: &[Polycube]) -> String {
    let mut out = String::new();
    for cube in cubes {
        let _ = write!(out, "{}", render_polycube(cube));
        out.push('\n');
    }
    out.push('\n');
    out
}
