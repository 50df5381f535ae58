//! Unordered pair: a two-element multiset keyed independently of order.
//!
//! Typical use is deduplicating undirected edges by their endpoint indices,
//! e.g. `HashSet<UnorderedPair<usize>>`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Pair with `(x, y) == (y, x)` and a swap-invariant hash.
#[derive(Clone, Copy, Debug)]
pub struct UnorderedPair<T> {
    item1: T,
    item2: T,
}

impl<T> UnorderedPair<T> {
    #[inline]
    pub fn new(item1: T, item2: T) -> Self {
        Self { item1, item2 }
    }

    #[inline]
    pub fn item1(&self) -> &T {
        &self.item1
    }

    #[inline]
    pub fn item2(&self) -> &T {
        &self.item2
    }

    /// Elements in construction order.
    #[inline]
    pub fn into_tuple(self) -> (T, T) {
        (self.item1, self.item2)
    }
}

impl<T: Eq> UnorderedPair<T> {
    /// Equal iff the elements match in either order.
    pub fn equals(&self, other: &Self) -> bool {
        (self.item1 == other.item1 && self.item2 == other.item2)
            || (self.item1 == other.item2 && self.item2 == other.item1)
    }

    #[inline]
    pub fn contains(&self, x: &T) -> bool {
        self.item1 == *x || self.item2 == *x
    }
}

impl<T: Hash> UnorderedPair<T> {
    /// Swap-invariant hash. Each element is hashed on its own with a fixed-key
    /// hasher, then combined commutatively (product plus sum, so a zero element
    /// hash does not send every pair to zero).
    pub fn hash_code(&self) -> u64 {
        let h1 = element_hash(&self.item1);
        let h2 = element_hash(&self.item2);
        h1.wrapping_mul(h2).wrapping_add(h1.wrapping_add(h2))
    }
}

fn element_hash<T: Hash>(x: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

impl<T: Eq> PartialEq for UnorderedPair<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq> Eq for UnorderedPair<T> {}

impl<T: Hash> Hash for UnorderedPair<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}
