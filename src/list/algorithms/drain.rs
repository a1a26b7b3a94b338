use crate::{CircularList, IntoIter};
use std::fmt;
use std::marker::PhantomData;

/// A draining iterator over the elements of a `CircularList`.
///
/// This `struct` is created by [`CircularList::drain`]. The list is emptied
/// when the `Drain` is created; the elements not yet yielded are dropped
/// together with it.
pub struct Drain<'a, T: 'a> {
    iter: IntoIter<T>,
    _marker: PhantomData<&'a mut CircularList<T>>,
}

impl<'a, T: 'a> Drain<'a, T> {
    pub(crate) fn new(taken: CircularList<T>) -> Self {
        Self {
            iter: taken.into_iter(),
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.iter).finish()
    }
}
