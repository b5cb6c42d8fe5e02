use alloc::collections::BTreeMap;
use alloc::string::String;

// -----------------------------------------------------------------------------
// Mapping

/// The keyed container behind a mapping-shaped node.
///
/// Keys are strings and unique. Writes through a path rebuild the mapping
/// with one key inserted or removed, so only these operations are needed.
pub trait Mapping<V>: Clone + Default {
    /// Returns the value bound to `key`.
    fn get(&self, key: &str) -> Option<&V>;

    /// Binds `key` to `value`, replacing any previous binding.
    fn insert(&mut self, key: String, value: V);

    /// Removes the binding for `key` and returns its value.
    fn remove(&mut self, key: &str) -> Option<V>;

    /// Returns the number of bindings.
    fn len(&self) -> usize;
}

// -----------------------------------------------------------------------------
// Implementation

impl<V: Clone> Mapping<V> for BTreeMap<String, V> {
    #[inline]
    fn get(&self, key: &str) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    #[inline]
    fn insert(&mut self, key: String, value: V) {
        BTreeMap::insert(self, key, value);
    }

    #[inline]
    fn remove(&mut self, key: &str) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

crate::cfg::std! {
    use core::hash::BuildHasher;
    use std::collections::HashMap;

    impl<V: Clone, S: BuildHasher + Default + Clone> Mapping<V> for HashMap<String, V, S> {
        #[inline]
        fn get(&self, key: &str) -> Option<&V> {
            HashMap::get(self, key)
        }

        #[inline]
        fn insert(&mut self, key: String, value: V) {
            HashMap::insert(self, key, value);
        }

        #[inline]
        fn remove(&mut self, key: &str) -> Option<V> {
            HashMap::remove(self, key)
        }

        #[inline]
        fn len(&self) -> usize {
            HashMap::len(self)
        }
    }
}

crate::cfg::hashbrown! {
    impl<V: Clone, S: core::hash::BuildHasher + Default + Clone> Mapping<V>
        for hashbrown::HashMap<String, V, S>
    {
        #[inline]
        fn get(&self, key: &str) -> Option<&V> {
            hashbrown::HashMap::get(self, key)
        }

        #[inline]
        fn insert(&mut self, key: String, value: V) {
            hashbrown::HashMap::insert(self, key, value);
        }

        #[inline]
        fn remove(&mut self, key: &str) -> Option<V> {
            hashbrown::HashMap::remove(self, key)
        }

        #[inline]
        fn len(&self) -> usize {
            hashbrown::HashMap::len(self)
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
