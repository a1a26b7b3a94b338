use crate::list::CircularList;
use std::fmt;
use std::fmt::Formatter;
use std::ptr;

/// A read-only cursor over a `CircularList`.
///
/// A `Cursor` is an explicit, independent version of the list's own cursor: it
/// holds a position in the ring and moves forward over it, wrapping around from
/// the last element to the first. Any number of cursors can be created over the
/// same list, and moving one of them moves neither the others nor the list's
/// own cursor (the one driving [`CircularList::next`]).
///
/// A cursor borrows the list, so the list cannot be changed while it is alive.
///
/// # Examples
///
/// ```
/// use circular_list::CircularList;
///
/// let mut list = CircularList::from(['A', 'B', 'C']);
/// list.next();
///
/// // A cursor at the list's own cursor: [ A|B C ] (index = 1)
/// let mut cursor = list.cursor();
/// assert_eq!(cursor.current(), Some(&'B'));
/// assert_eq!(cursor.index(), 1);
///
/// // Another cursor at the start: [|A B C ] (index = 0)
/// let mut other = list.cursor_start();
/// other.seek_forward(5);
/// assert_eq!(other.current(), Some(&'C'));
///
/// // Moving forward wraps around: [|A B C ] (index = 0)
/// cursor.move_next();
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&'A'));
/// assert_eq!(cursor.index(), 0);
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    current: Option<usize>,
    list: &'a CircularList<T>,
}

/// Compare cursors by their position.
///
/// Only cursors over the same list and at the same node are considered equal.
///
/// # Examples
/// ```
/// use circular_list::CircularList;
///
/// let list = CircularList::from([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next();
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// assert_ne!(cursor1, another_list.cursor_start());
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            current: self.current,
            list: self.list,
        }
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a CircularList<T>, current: Option<usize>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Returns the logical index of the cursor, or 0 if the list is empty.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the `CircularList` is empty. See [`CircularList::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the length of the `CircularList`. See [`CircularList::len`].
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Provides a reference to the element under the cursor, or `None` if the
    /// list is empty.
    pub fn current(&self) -> Option<&'a T> {
        let list = self.list;
        self.current.map(|key| &list.node(key).element)
    }

    /// Provides a reference to the element after the cursor, which is the
    /// current one again in a list of one element.
    pub fn peek_next(&self) -> Option<&'a T> {
        let list = self.list;
        self.current
            .map(|key| &list.node(list.node(key).next).element)
    }

    /// Move the cursor to the next element, wrapping around to the start after
    /// the last one. Does nothing on an empty list.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_next(&mut self) {
        if let Some(key) = self.current {
            self.current = Some(self.list.node(key).next);
            self.index = (self.index + 1) % self.list.len();
        }
    }

    /// Move the cursor `steps` elements forward, wrapping around as needed.
    ///
    /// This operation should compute in *O*(`steps` mod *n*) time.
    pub fn seek_forward(&mut self, steps: usize) {
        if let Some(key) = self.current {
            let len = self.list.len();
            let steps = steps % len;
            self.current = Some(self.list.walk(key, steps));
            self.index = (self.index + steps) % len;
        }
    }

    /// Provides a reference to the cursor's list.
    pub fn view(&self) -> &'a CircularList<T> {
        self.list
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("current", &self.current())
            .finish()
    }
}

/// `CursorIter` provides a cursor-like iterator that is cyclic and not fused.
///
/// It only returns `None` when the list is empty. If you are looking for an
/// iterator that stops after one round, see [`Iter`].
///
/// # Examples
///
/// ```
/// use circular_list::CircularList;
///
/// let list = CircularList::from([1, 2, 3]);
/// let mut cursor_iter = list.cursor_start().into_iter();
/// assert_eq!(cursor_iter.next(), Some(&1));
/// assert_eq!(cursor_iter.next(), Some(&2));
/// assert_eq!(cursor_iter.next(), Some(&3));
/// assert_eq!(cursor_iter.next(), Some(&1)); // Not fused and cyclic
///
/// // Convert back to a cursor
/// let cursor = cursor_iter.into_cursor();
/// assert_eq!(cursor.current(), Some(&2));
/// ```
///
/// [`Iter`]: crate::Iter
pub struct CursorIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

impl<'a, T: 'a> CursorIter<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.current()
    }
}

impl<'a, T: 'a> From<CursorIter<'a, T>> for Cursor<'a, T> {
    fn from(iter: CursorIter<'a, T>) -> Self {
        iter.into_cursor()
    }
}

#[cfg(test)]
mod tests {
    use crate::CircularList;

    #[test]
    fn cursor_independent_of_list_cursor() {
        let mut list = CircularList::from([1, 2, 3, 4]);
        list.next();
        {
            let mut a = list.cursor_start();
            let mut b = list.cursor();
            assert_eq!(a.current(), Some(&1));
            assert_eq!(b.current(), Some(&2));
            a.move_next();
            assert_eq!(a, b);
            b.move_next();
            assert_eq!(a.current(), Some(&2));
            assert_eq!(b.current(), Some(&3));
            assert_eq!(b.peek_next(), Some(&4));
        }
        assert_eq!(list.peek(), Some(&2));
    }

    #[test]
    fn cursor_index_wraps() {
        let list = CircularList::from(['a', 'b', 'c']);
        let mut cursor = list.cursor_at(-1).unwrap();
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.current(), Some(&'c'));
        cursor.move_next();
        assert_eq!(cursor.index(), 0);
        cursor.seek_forward(7);
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.current(), Some(&'b'));
        assert_eq!(cursor.view().len(), 3);
    }

    #[test]
    fn cursor_on_empty_list() {
        let list = CircularList::<i32>::new();
        assert!(list.cursor_at(0).is_err());
        let mut cursor = list.cursor();
        assert!(cursor.is_empty());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek_next(), None);
        cursor.move_next();
        cursor.seek_forward(3);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn cursor_single_element() {
        let list = CircularList::from([7]);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.peek_next(), Some(&7));
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&7));
        assert_eq!(cursor.index(), 0);
    }
}
