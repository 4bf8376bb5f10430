//! The top-level sequencer: owns one `Vec<Arc<Polycube>>` per size and
//! grows them in order, size 1 up through whatever size was last asked
//! for.

use std::sync::Arc;

use anyhow::{bail, Result};

use crate::growth::grow;
use crate::polycube::Polycube;

/// Largest size this enumerator has a known-good count to validate
/// against (see [`known_count`]); also the practical ceiling communicated
/// to CLI users. Not a hard limit on what the core can compute.
pub const MAX_VALIDATED_SIZE: u8 = 18;

/// Rejects a requested `max_size` that the core cannot sensibly grow to:
/// zero (growth has nothing to seed from) or larger than
/// [`MAX_VALIDATED_SIZE`] (a size this enumerator has never been run to
/// completion against). Exposed as a library function, not inlined into
/// a CLI handler, so it can be exercised directly by tests without
/// spawning a subprocess.
pub fn validate_max_size(n: u8) -> Result<()> {
    if n == 0 {
        bail!("max_size must be at least 1");
    }
    if n > MAX_VALIDATED_SIZE {
        bail!(
            "max_size {n} exceeds the largest size this enumerator has been validated against ({MAX_VALIDATED_SIZE})"
        );
    }
    Ok(())
}

/// Known free-polycube counts, `A000162`, indexed by size (`known_count(1) == Some(1)`).
/// Useful as a correctness check against a freshly grown generation.
pub fn known_count(n: u8) -> Option<u64> {
    match n {
        1 => Some(1),
        2 => Some(1),
        3 => Some(2),
        4 => Some(8),
        5 => Some(29),
        6 => Some(166),
        7 => Some(1023),
        8 => Some(6922),
        9 => Some(48311),
        10 => Some(346543),
        11 => Some(2522522),
        12 => Some(18598427),
        13 => Some(139333147),
        14 => Some(1056657611),
        15 => Some(8107839447),
        16 => Some(62709211271),
        17 => Some(489997729602),
        18 => Some(3847265309118),
        _ => None,
    }
}

/// Holds every generation computed so far, indexed from size 1. A fresh
/// `Generations` holds nothing; call [`Generations::grow_to`] to populate
/// it up to the requested size.
pub struct Generations {
    sizes: Vec<Vec<Arc<Polycube>>>,
    pool: Option<rayon::ThreadPool>,
}

impl Generations {
    pub fn new() -> Self {
        Generations { sizes: Vec::new(), pool: None }
    }

    /// Pins every [`grow_to`](Generations::grow_to) call on this sequencer
    /// to a dedicated `rayon` thread pool of `n` worker threads, instead of
    /// rayon's process-wide global pool. This is the ambient concurrency
    /// knob the CLI's `-j`/`--threads` flag wires up; a driver that never
    /// calls `threads` gets rayon's default (the global pool, sized to the
    /// number of logical CPUs).
    pub fn threads(mut self, n: usize) -> Self {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .expect("building a dedicated rayon thread pool");
        self.pool = Some(pool);
        self
    }

    /// The largest size currently computed, or 0 if none.
    pub fn max_size(&self) -> u8 {
        self.sizes.len() as u8
    }

    /// Shapes of the given size, if it has been computed.
    pub fn shapes(&self, size: u8) -> Option<&[Arc<Polycube>]> {
        if size == 0 {
            return None;
        }
        self.sizes.get(size as usize - 1).map(|v| v.as_slice())
    }

    pub fn count(&self, size: u8) -> Option<usize> {
        self.shapes(size).map(|s| s.len())
    }

    /// Grows every missing generation from the current `max_size` up to
    /// and including `target`. `on_generation` is called after each size
    /// finishes, with the size and a slice of its shapes, for progress
    /// reporting and optional dumping; `on_parent_done` is forwarded to
    /// [`grow`] for per-parent progress within a single generation.
    ///
    /// Runs on the dedicated pool installed via [`Generations::threads`],
    /// if any, so a driver that wants a fixed worker count gets it without
    /// touching rayon's global pool.
    pub fn grow_to<G, P>(&mut self, target: u8, mut on_generation: G, on_parent_done: P)
    where
        G: FnMut(u8, &[Arc<Polycube>]) + Send,
        P: Fn() + Sync + Send,
    {
        if self.sizes.is_empty() && target >= 1 {
            self.sizes.push(vec![Arc::new(Polycube::unit_cube())]);
            on_generation(1, &self.sizes[0]);
        }

        let sizes = &mut self.sizes;
        let run = move || {
            while sizes.len() < target as usize {
                let previous = sizes.last().expect("seeded with size 1 above");
                let next = grow(previous, &on_parent_done);
                let size = sizes.len() as u8 + 1;
                sizes.push(next);
                on_generation(size, sizes.last().unwrap());
            }
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

impl Default for Generations {
    fn default() -> Self {
        Self::new()
    }
}
