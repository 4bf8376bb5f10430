//! Drives one generation step: from every shape of size `N`, generate
//! candidates, canonicalize each, and fold them into a deduplicated set
//! of size-`(N+1)` shapes. Runs data-parallel over the previous
//! generation; deduplication itself is handled by [`crate::dedup_set`].

use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::candidates::generate_candidates;
use crate::canonicalize::canonicalize;
use crate::dedup_set::DedupSet;
use crate::polycube::Polycube;

/// Grows `previous` (all distinct shapes of some size `N`) into the set
/// of distinct shapes of size `N + 1`. `on_parent_done`, if given, is
/// called once per parent processed, useful for driving a progress bar.
pub fn grow<F>(previous: &[Arc<Polycube>], on_parent_done: F) -> Vec<Arc<Polycube>>
where
    F: Fn() + Sync,
{
    let set = DedupSet::sized_for_generation(previous.len().saturating_mul(6));
    let new_count = AtomicUsize::new(0);

    previous.par_iter().for_each(|parent| {
        for candidate in generate_candidates(parent) {
            let canonical = canonicalize(&candidate);
            let key = canonical.key();
            let value = Arc::new(canonical);
            let stored = set.insert_or_get(key, Arc::clone(&value));
            if Arc::ptr_eq(&stored, &value) {
                new_count.fetch_add(1, AtomicOrdering::Relaxed);
            }
        }
        on_parent_done();
    });

    debug!(
        "grow: {} parents -> {} distinct children",
        previous.len(),
        new_count.load(AtomicOrdering::Relaxed)
    );
    set.drain_into_vec()
}
