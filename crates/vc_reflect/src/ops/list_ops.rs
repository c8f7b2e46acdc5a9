use core::iter::FusedIterator;

use crate::Reflect;
use crate::ops::PrimitiveSlice;

// -----------------------------------------------------------------------------
// List

/// A reflected growable sequence.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::{List, PrimitiveSlice};
///
/// let v = vec![1_u16, 2];
/// assert_eq!(v.get(1).unwrap().downcast_ref::<u16>(), Some(&2));
/// assert!(matches!(v.as_primitive_slice(), Some(PrimitiveSlice::U16(&[1, 2]))));
/// ```
pub trait List: Reflect {
    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the list has no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the items.
    fn iter(&self) -> ListItemIter<'_>;

    /// Returns the items as a contiguous primitive slice, if possible.
    ///
    /// Returns `None` for non-primitive items and for storage that is not
    /// contiguous at the moment, such as a wrapped `VecDeque`.
    #[inline]
    fn as_primitive_slice(&self) -> Option<PrimitiveSlice<'_>> {
        None
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    /// Creates a new [`ListItemIter`].
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.list.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
impl FusedIterator for ListItemIter<'_> {}
