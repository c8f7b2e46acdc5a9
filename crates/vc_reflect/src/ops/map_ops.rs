use alloc::boxed::Box;

use crate::Reflect;

/// A reflected key-value map.
///
/// Iteration order is the storage order of the underlying map, consumers
/// that need a canonical order have to sort.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_reflect::ops::Map;
///
/// let map = BTreeMap::from([(1_u8, 'a')]);
/// let value = Map::get(&map, &1_u8).unwrap();
/// assert_eq!(value.downcast_ref::<char>(), Some(&'a'));
/// ```
pub trait Map: Reflect {
    /// Returns the value for `key`, `None` if absent or of another key type.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the entries.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}
