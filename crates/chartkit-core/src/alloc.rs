//! Hash collections used across chartkit.
//!
//! Layout code keys small sparse tables by integer indices, where AHash is
//! considerably faster than SipHash.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_integer_keys() {
        let mut map = HashMap::new();
        map.insert(-3_i64, "before grid start");
        map.insert(12_i64, "second week");
        assert_eq!(map.get(&12), Some(&"second week"));
        assert_eq!(map.get(&0), None);
    }

    #[test]
    fn test_hashset_contains() {
        let mut set = HashSet::new();
        set.insert(4_usize);
        assert!(set.contains(&4));
        assert!(!set.contains(&5));
    }
}
