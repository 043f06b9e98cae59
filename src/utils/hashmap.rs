//! A hash-map that behaves deterministically when the
//! `enhanced-determinism` feature is enabled.

/// Deterministic hashmap using [`indexmap::IndexMap`]
#[cfg(feature = "enhanced-determinism")]
pub type HashMap<K, V> = indexmap::IndexMap<K, V>;

/// Hashmap using [`hashbrown::HashMap`]
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V>;

/// Hashset using [`hashbrown::HashSet`].
///
/// Sets are only probed, never iterated in an order-sensitive way, so they do
/// not need the deterministic variant.
pub type HashSet<K> = hashbrown::hash_set::HashSet<K>;

/// Removes `key` from `map`, preserving the insertion order of the remaining
/// entries when that order is tracked.
#[inline]
pub fn remove_entry<K, V>(map: &mut HashMap<K, V>, key: &K) -> Option<V>
where
    K: core::hash::Hash + Eq,
{
    #[cfg(feature = "enhanced-determinism")]
    return map.shift_remove(key);
    #[cfg(not(feature = "enhanced-determinism"))]
    return map.remove(key);
}
