use core::iter::FusedIterator;

use crate::Reflect;
use crate::ops::PrimitiveSlice;

// -----------------------------------------------------------------------------
// Array

/// A reflected fixed size array.
pub trait Array: Reflect {
    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the fixed number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the array has no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the items.
    fn iter(&self) -> ArrayItemIter<'_>;

    /// Returns the items as a contiguous primitive slice, if possible.
    #[inline]
    fn as_primitive_slice(&self) -> Option<PrimitiveSlice<'_>> {
        None
    }
}

// -----------------------------------------------------------------------------
// ArrayItemIter

/// An iterator over the items of an [`Array`].
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl<'a> ArrayItemIter<'a> {
    /// Creates a new [`ArrayItemIter`].
    #[inline(always)]
    pub const fn new(array: &'a dyn Array) -> Self {
        Self { array, index: 0 }
    }
}

impl<'a> Iterator for ArrayItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.array.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for ArrayItemIter<'_> {}
impl FusedIterator for ArrayItemIter<'_> {}
