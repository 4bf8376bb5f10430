//! A concurrent, canonical-form deduplicating set: a fixed-size array of
//! mutex-guarded buckets keyed by variable-length byte strings. Insertion
//! either stores a brand-new entry or hands back the one already there,
//! so callers can tell new shapes from rediscovered ones by pointer
//! identity alone.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use crate::polycube::Polycube;

struct Entry {
    key: Vec<u8>,
    value: Arc<Polycube>,
}

/// A chained hash table over byte-string keys, safe to insert into from
/// many threads at once. Each bucket is independent: no global lock.
pub struct DedupSet {
    buckets: Vec<Mutex<Vec<Entry>>>,
}

fn key_order(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// DJB2 hash, exactly as specified: `h = 5381; h = h*33 + byte`.
fn djb2(key: &[u8]) -> u64 {
    let mut hash: u64 = 5381;
    for &byte in key {
        hash = hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(byte as u64);
    }
    hash
}

impl DedupSet {
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        DedupSet {
            buckets: (0..bucket_count).map(|_| Mutex::new(Vec::new())).collect(),
        }
    }

    /// Picks a bucket count from a hint about how many entries the set
    /// will end up holding: larger generations get a larger table so
    /// per-bucket chains stay short under concurrent insertion.
    pub fn sized_for_generation(expected_entries_hint: usize) -> Self {
        let bucket_count = if expected_entries_hint > 50_000 { 4096 } else { 256 };
        Self::with_bucket_count(bucket_count)
    }

    fn bucket_for(&self, key: &[u8]) -> &Mutex<Vec<Entry>> {
        let index = (djb2(key) % self.buckets.len() as u64) as usize;
        &self.buckets[index]
    }

    /// If no entry with this key exists, inserts `value` and returns it
    /// back. Otherwise returns the pre-existing entry's value, leaving
    /// the set unmodified. Callers detect "was this new?" via
    /// `Arc::ptr_eq(&returned, &value)`.
    pub fn insert_or_get(&self, key: Vec<u8>, value: Arc<Polycube>) -> Arc<Polycube> {
        let mut bucket = self.bucket_for(&key).lock().unwrap();
        if let Some(entry) = bucket.iter().find(|e| key_order(&e.key, &key) == Ordering::Equal) {
            return Arc::clone(&entry.value);
        }
        bucket.push(Entry { key, value: Arc::clone(&value) });
        value
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.lock().unwrap().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains every bucket, transferring ownership of each stored
    /// polycube to the returned vector. Consumes the set.
    pub fn drain_into_vec(self) -> Vec<Arc<Polycube>> {
        self.buckets
            .into_iter()
            .flat_map(|bucket| bucket.into_inner().unwrap().into_iter().map(|e| e.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn djb2_matches_the_reference_constants() {
        // h = 5381; for each byte: h = h*33 + byte
        let mut expected: u64 = 5381;
        for &b in b"abc" {
            expected = expected.wrapping_mul(33).wrapping_add(b as u64);
        }
        assert_eq!(djb2(b"abc"), expected);
    }

    #[test]
    fn key_order_compares_length_before_bytes() {
        assert_eq!(key_order(&[1, 2], &[1, 2, 0]), Ordering::Less);
        assert_eq!(key_order(&[2, 0], &[1, 9]), Ordering::Greater);
        assert_eq!(key_order(&[1, 2, 3], &[1, 2, 3]), Ordering::Equal);
    }

    #[test]
    fn repeated_insert_returns_the_original_value_and_size_grows_once() {
        let set = DedupSet::with_bucket_count(4);
        let key = vec![1, 1, 1, 0b1000_0000];
        let first = Arc::new(Polycube::unit_cube());
        let second = Arc::new(Polycube::unit_cube());

        let stored_first = set.insert_or_get(key.clone(), Arc::clone(&first));
        assert!(Arc::ptr_eq(&stored_first, &first));
        assert_eq!(set.len(), 1);

        let stored_second = set.insert_or_get(key, Arc::clone(&second));
        assert!(Arc::ptr_eq(&stored_second, &first));
        assert!(!Arc::ptr_eq(&stored_second, &second));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn distinct_keys_both_survive() {
        let set = DedupSet::with_bucket_count(4);
        let a = Arc::new(Polycube::unit_cube());
        let b = Arc::new(Polycube::unit_cube());
        set.insert_or_get(vec![1, 1, 1, 1], Arc::clone(&a));
        set.insert_or_get(vec![1, 1, 1, 2], Arc::clone(&b));
        assert_eq!(set.len(), 2);
        let drained = set.drain_into_vec();
        assert_eq!(drained.len(), 2);
    }
}
