use std::convert::TryFrom;
use std::fmt::{Debug, Formatter};
use std::ops::Index;

use slab::Slab;

use crate::error::ListError;
use crate::list::cursor::Cursor;
use crate::Iter;

pub use algorithms::Drain;

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `CircularList` is a singly-linked list whose last node links back to the
/// first one. Inserting or removing an element at a logical index takes *O*(*n*)
/// time, since the node before it has to be reached by following the links from
/// the start node.
///
/// Nodes live in an arena and refer to their successor by key, so the ring never
/// forms an ownership cycle. The list owns all of its nodes; only elements and
/// integer indices cross its boundary.
///
/// Beside the start node, the list keeps a persistent *cursor* that drives
/// [`CircularList::next`]. The cursor survives insertions and removals: it is
/// moved along when its node is removed, and it follows the start node when an
/// element is inserted in front of it.
///
/// The list is meant to be used from one thread at a time. It holds no locks, so
/// sharing it between threads for mutation needs external synchronization.
///
/// # Naming Conventions
///
/// - *position*: an exact slot in `0..=len`, used by insertions;
/// - *index*: any `isize`, taken modulo the length of the list, used by reads
///   and removals.
pub struct CircularList<T> {
    nodes: Slab<Node<T>>,
    /// the node at logical index 0
    start: Option<usize>,
    /// the node [`CircularList::next`] returns on its following call
    cursor: Option<usize>,
}

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: usize,
}

// private methods
impl<T> CircularList<T> {
    pub(crate) fn node(&self, key: usize) -> &Node<T> {
        &self.nodes[key]
    }

    /// Follow `steps` links forward from the node `key`.
    pub(crate) fn walk(&self, mut key: usize, steps: usize) -> usize {
        for _ in 0..steps {
            key = self.nodes[key].next;
        }
        key
    }

    /// Key of the node at the (normalized) `index`.
    fn locate(&self, index: isize) -> Result<usize, ListError> {
        match self.start {
            Some(start) => Ok(self.walk(start, self.normalize(index)?)),
            None => Err(ListError::OutOfRange { index, len: 0 }),
        }
    }

    /// Key of the node before the one at `position`, which must be in `0..len`.
    fn predecessor(&self, start: usize, position: usize) -> usize {
        let steps = match position {
            0 => self.len() - 1,
            _ => position - 1,
        };
        self.walk(start, steps)
    }

    /// Create the only node of an empty list, linked to itself.
    pub(crate) fn link_sole(&mut self, element: T) -> usize {
        debug_assert!(self.is_empty());
        let entry = self.nodes.vacant_entry();
        let key = entry.key();
        entry.insert(Node { element, next: key });
        self.start = Some(key);
        self.cursor = Some(key);
        key
    }

    /// Link a new node between `before` and its successor.
    pub(crate) fn link_after(&mut self, before: usize, element: T) -> usize {
        let next = self.nodes[before].next;
        let key = self.nodes.insert(Node { element, next });
        self.nodes[before].next = key;
        key
    }

    pub(crate) fn into_parts(self) -> (Slab<Node<T>>, Option<usize>) {
        (self.nodes, self.start)
    }
}

impl<T> CircularList<T> {
    /// Create an empty `CircularList`.
    ///
    /// # Examples
    /// ```
    /// use circular_list::CircularList;
    /// let list: CircularList<u32> = CircularList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            start: None,
            cursor: None,
        }
    }

    /// Returns `true` if the `CircularList` is empty.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of elements in the ring.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Map any integer to a logical index in `0..len`.
    ///
    /// Negative indices count backwards from the start, and indices past the end
    /// wrap around, so `normalize(i)`, `normalize(i + len)` and `normalize(i - len)`
    /// are all equal.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if the list is empty, since no index is
    /// valid in an empty ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let list = CircularList::from(['a', 'b', 'c']);
    /// assert_eq!(list.normalize(4), Ok(1));
    /// assert_eq!(list.normalize(-1), Ok(2));
    /// assert_eq!(list.normalize(-3), Ok(0));
    ///
    /// let empty: CircularList<char> = CircularList::new();
    /// assert!(empty.normalize(0).is_err());
    /// ```
    pub fn normalize(&self, index: isize) -> Result<usize, ListError> {
        let len = self.len();
        if len == 0 {
            return Err(ListError::OutOfRange { index, len });
        }
        // A slab never holds more than `isize::MAX` nodes.
        Ok(index.rem_euclid(len as isize) as usize)
    }

    /// Insert `element` so that it ends up at `position`, shifting the element
    /// that was there (and everything after it) one step further from the start.
    ///
    /// `position == len` appends. Inserting at position 0 makes the new element
    /// the start of the ring; if the cursor was at the old start, it moves to
    /// the new element, so [`CircularList::next`] returns it next.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `position > len`. The list is left
    /// untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from([1, 3]);
    /// list.insert(2, 1).unwrap();
    /// list.insert(4, 3).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    ///
    /// assert!(list.insert(5, 6).is_err());
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn insert(&mut self, element: T, position: usize) -> Result<(), ListError> {
        let len = self.len();
        if position > len {
            let index = isize::try_from(position).unwrap_or(isize::MAX);
            return Err(ListError::OutOfRange { index, len });
        }
        match self.start {
            None => {
                self.link_sole(element);
            }
            Some(start) => {
                let before = self.predecessor(start, position % len);
                let key = self.link_after(before, element);
                if position == 0 {
                    if self.cursor == Some(start) {
                        trace_event!(cursor = key, "cursor follows the new start");
                        self.cursor = Some(key);
                    }
                    self.start = Some(key);
                }
            }
        }
        trace_event!(position, len = self.len(), "inserted element");
        Ok(())
    }

    /// Append `element` to the end of the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// list.add('a');
    /// list.add('b');
    /// assert_eq!(list.to_vec(), vec!['a', 'b']);
    /// ```
    pub fn add(&mut self, element: T) {
        match self.start {
            None => {
                self.link_sole(element);
            }
            Some(start) => {
                let back = self.walk(start, self.len() - 1);
                self.link_after(back, element);
            }
        }
        trace_event!(position = self.len() - 1, len = self.len(), "appended element");
    }

    /// Insert `element` in front of the first element equal to `before`.
    ///
    /// Returns `false`, without changing the list, if `before` is not in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from([1, 3]);
    /// assert!(list.insert_before(2, &3));
    /// assert!(!list.insert_before(0, &7));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn insert_before(&mut self, element: T, before: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(before) {
            Some(position) => self.insert(element, position).is_ok(),
            None => false,
        }
    }

    /// Insert `element` right after the first element equal to `after`.
    ///
    /// Returns `false`, without changing the list, if `after` is not in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from([1, 3]);
    /// assert!(list.insert_after(4, &3));
    /// assert!(!list.insert_after(0, &7));
    /// assert_eq!(list.to_vec(), vec![1, 3, 4]);
    /// ```
    pub fn insert_after(&mut self, element: T, after: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(after) {
            Some(position) => self.insert(element, position + 1).is_ok(),
            None => false,
        }
    }

    /// Returns the logical index of the first element equal to `element`, or
    /// `None` after a full traversal without a match.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let list = CircularList::from(['a', 'b', 'c', 'b']);
    /// assert_eq!(list.index_of(&'b'), Some(1));
    /// assert_eq!(list.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_by(|e| e == element)
    }

    /// Like [`CircularList::index_of`], with the equality relation supplied by
    /// the caller.
    pub fn index_of_by<F>(&self, mut matches: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(|e| matches(e))
    }

    /// Returns a new list holding, in ascending order, every logical index whose
    /// element equals `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let list = CircularList::from(['a', 'b', 'a', 'c', 'a']);
    /// assert_eq!(list.occurrences(&'a').to_vec(), vec![0, 2, 4]);
    /// assert!(list.occurrences(&'z').is_empty());
    /// ```
    pub fn occurrences(&self, element: &T) -> CircularList<usize>
    where
        T: PartialEq,
    {
        self.occurrences_by(|e| e == element)
    }

    /// Like [`CircularList::occurrences`], with the equality relation supplied by
    /// the caller.
    pub fn occurrences_by<F>(&self, mut matches: F) -> CircularList<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|&(_, e)| matches(e))
            .map(|(index, _)| index)
            .collect()
    }

    /// Provides a reference to the element at the (normalized) `index`.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let list = CircularList::from([10, 20, 30]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(4), Ok(&20));
    /// assert_eq!(list.get(-1), Ok(&30));
    /// ```
    pub fn get(&self, index: isize) -> Result<&T, ListError> {
        let key = self.locate(index)?;
        Ok(&self.nodes[key].element)
    }

    /// Provides a mutable reference to the element at the (normalized) `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if the list is empty.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, ListError> {
        let key = self.locate(index)?;
        Ok(&mut self.nodes[key].element)
    }

    /// The write half of indexing: **inserts** `value` at `position`.
    ///
    /// Unlike a slice, writing through an index does not overwrite the element
    /// at that position; it shifts it (and everything after it) one step
    /// further. Use [`CircularList::get_mut`] to overwrite in place.
    ///
    /// # Errors
    ///
    /// Same as [`CircularList::insert`].
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from(['a', 'b']);
    /// list.set(1, 'x').unwrap();
    /// assert_eq!(list.to_vec(), vec!['a', 'x', 'b']);
    /// ```
    pub fn set(&mut self, position: usize, value: T) -> Result<(), ListError> {
        self.insert(value, position)
    }

    /// Remove the element at the (normalized) `index` and return it.
    ///
    /// If the cursor or the start of the ring was on the removed node, it moves
    /// to the node that followed it.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from([1, 2, 3]);
    /// assert_eq!(list.remove_at(-1), Ok(3));
    /// assert_eq!(list.remove_at(0), Ok(1));
    /// assert_eq!(list.remove_at(5), Ok(2));
    /// assert!(list.remove_at(0).is_err());
    /// ```
    pub fn remove_at(&mut self, index: isize) -> Result<T, ListError> {
        let start = match self.start {
            Some(start) => start,
            None => return Err(ListError::OutOfRange { index, len: 0 }),
        };
        if self.len() == 1 {
            let node = self.nodes.remove(start);
            self.start = None;
            self.cursor = None;
            trace_event!(index, len = 0, "removed the last element");
            return Ok(node.element);
        }

        let position = self.normalize(index)?;
        let before = self.predecessor(start, position);
        let key = self.nodes[before].next;
        let Node { element, next } = self.nodes.remove(key);
        self.nodes[before].next = next;

        if self.cursor == Some(key) {
            trace_event!(cursor = next, "cursor moves past the removed node");
            self.cursor = Some(next);
        }
        if self.start == Some(key) {
            self.start = Some(next);
        }
        trace_event!(position, len = self.len(), "removed element");
        Ok(element)
    }

    /// Remove the first element equal to `element`.
    ///
    /// Returns `false`, without changing the list, if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from([1, 2, 1]);
    /// assert!(list.remove(&1));
    /// assert!(!list.remove(&5));
    /// assert_eq!(list.to_vec(), vec![2, 1]);
    /// ```
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(element) {
            // An index from `index_of` is already in `0..len`.
            Some(index) => self.remove_at(index as isize).is_ok(),
            None => false,
        }
    }

    /// Removes all elements from the `CircularList`, releasing every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from([1, 2]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.try_next(), None);
    /// ```
    pub fn clear(&mut self) {
        trace_event!(len = self.len(), "clearing list");
        self.nodes.clear();
        self.start = None;
        self.cursor = None;
    }

    /// Returns the element under the cursor and advances the cursor to its
    /// successor.
    ///
    /// This traversal never ends: after the last element it starts over from
    /// the first one. Calling it `len` times in a row visits every element once
    /// and brings the cursor back where it was.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty. Check [`CircularList::is_empty`] first, or
    /// use [`CircularList::try_next`].
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from(['a', 'b', 'c']);
    /// assert_eq!(list.next(), &'a');
    /// assert_eq!(list.next(), &'b');
    /// assert_eq!(list.next(), &'c');
    /// assert_eq!(list.next(), &'a');
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &T {
        match self.try_next() {
            Some(element) => element,
            None => panic!("called `CircularList::next` on an empty list"),
        }
    }

    /// Like [`CircularList::next`], but returns `None` on an empty list.
    pub fn try_next(&mut self) -> Option<&T> {
        let key = self.cursor?;
        let node = &self.nodes[key];
        self.cursor = Some(node.next);
        Some(&node.element)
    }

    /// Provides the element [`CircularList::next`] would return, without moving
    /// the cursor.
    pub fn peek(&self) -> Option<&T> {
        self.cursor.map(|key| &self.nodes[key].element)
    }

    /// Returns the logical index of the cursor, or `None` if the list is empty.
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn cursor_position(&self) -> Option<usize> {
        let (start, cursor) = (self.start?, self.cursor?);
        let mut key = start;
        let mut position = 0;
        while key != cursor {
            key = self.nodes[key].next;
            position += 1;
        }
        Some(position)
    }

    /// Move the cursor back to the start of the ring.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.start;
    }

    /// Move the cursor to the (normalized) `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from([1, 2, 3]);
    /// list.seek_cursor(-1).unwrap();
    /// assert_eq!(list.next(), &3);
    /// assert_eq!(list.next(), &1);
    /// ```
    pub fn seek_cursor(&mut self, index: isize) -> Result<(), ListError> {
        self.cursor = Some(self.locate(index)?);
        Ok(())
    }

    /// Calls `action` on each element, in ring order from the start.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action)
    }

    /// Returns the first element, in ring order from the start, that satisfies
    /// `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if no element matches, which is always
    /// the case for an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, ListError};
    ///
    /// let list = CircularList::from([1, 4, 6, 9]);
    /// assert_eq!(list.find_where(|x| x % 2 == 0), Ok(&4));
    /// assert_eq!(list.find_where(|x| *x > 10), Err(ListError::NotFound));
    /// ```
    pub fn find_where<F>(&self, mut predicate: F) -> Result<&T, ListError>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .find(|&e| predicate(e))
            .ok_or(ListError::NotFound)
    }

    /// Provides a reference to the element at the start of the ring, or `None`
    /// if the list is empty.
    pub fn first(&self) -> Option<&T> {
        self.start.map(|key| &self.nodes[key].element)
    }

    /// Provides a reference to the element right before the start of the ring,
    /// or `None` if the list is empty.
    pub fn last(&self) -> Option<&T> {
        self.get(-1).ok()
    }

    /// Provides a read-only cursor at the node under the list's own cursor.
    ///
    /// Any number of these cursors may exist at once; they borrow the list, so
    /// it cannot change while they are alive.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.cursor, self.cursor_position().unwrap_or(0))
    }

    /// Provides a read-only cursor at the start of the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let list = CircularList::from([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.start, 0)
    }

    /// Provides a read-only cursor at the (normalized) `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if the list is empty.
    pub fn cursor_at(&self, index: isize) -> Result<Cursor<'_, T>, ListError> {
        let position = self.normalize(index)?;
        let key = self.locate(index)?;
        Ok(Cursor::new(self, Some(key), position))
    }

    /// Provides an iterator over the elements, starting at the start of the
    /// ring and yielding each element exactly once.
    ///
    /// The iterator does not touch the list's cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from([1, 2, 3]);
    /// list.next();
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// assert_eq!(list.peek(), Some(&2));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.start)
    }

    /// Removes every element, yielding them in ring order from the start.
    ///
    /// The list is empty as soon as the `Drain` is created; elements the
    /// iterator did not yield are dropped with it.
    pub fn drain(&mut self) -> Drain<'_, T> {
        trace_event!(len = self.len(), "draining list");
        Drain::new(std::mem::take(self))
    }
}

impl<T> Index<isize> for CircularList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the list is empty.
    fn index(&self, index: isize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::tests::assert_ring;
    use crate::CircularList;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(usize, i32),
        Add(i32),
        RemoveAt(isize),
        Remove(i32),
        Next,
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0usize..20, any::<i32>()).prop_map(|(p, v)| Op::Insert(p, v)),
            4 => (0i32..8).prop_map(Op::Add),
            3 => (-30isize..30).prop_map(Op::RemoveAt),
            2 => (0i32..8).prop_map(Op::Remove),
            3 => Just(Op::Next),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn normalize_stays_in_range(len in 1usize..40, index in -1000isize..1000) {
            let list: CircularList<usize> = (0..len).collect();
            let n = list.normalize(index).unwrap();
            let step = len as isize;
            prop_assert!(n < len);
            prop_assert_eq!(Ok(n), list.normalize(index + step));
            prop_assert_eq!(Ok(n), list.normalize(index - step));
        }

        #[test]
        fn insert_then_get(len in 0usize..20, position in 0usize..21, value in any::<i64>()) {
            let mut list: CircularList<i64> = (0..len as i64).collect();
            let position = position.min(len);
            list.insert(value, position).unwrap();
            prop_assert_eq!(list.get(position as isize), Ok(&value));
            prop_assert_eq!(list.len(), len + 1);
            assert_ring(&list);
        }

        #[test]
        fn remove_at_shrinks_by_one(len in 1usize..20, index in -40isize..40) {
            let mut list: CircularList<usize> = (0..len).collect();
            let expected = *list.get(index).unwrap();
            prop_assert_eq!(list.remove_at(index), Ok(expected));
            prop_assert_eq!(list.len(), len - 1);
            assert_ring(&list);
        }

        #[test]
        fn behaves_like_a_vec(ops in prop::collection::vec(op(), 0..64)) {
            let mut list = CircularList::new();
            let mut model: Vec<i32> = Vec::new();
            let mut cursor = 0usize;

            for op in ops {
                match op {
                    Op::Insert(position, value) => {
                        let result = list.insert(value, position);
                        if position > model.len() {
                            prop_assert!(result.is_err());
                        } else {
                            prop_assert!(result.is_ok());
                            if position == 0 {
                                // cursor at the old start follows the new start
                                if cursor != 0 {
                                    cursor += 1;
                                }
                            } else if position <= cursor {
                                cursor += 1;
                            }
                            model.insert(position, value);
                        }
                    }
                    Op::Add(value) => {
                        list.add(value);
                        model.push(value);
                    }
                    Op::RemoveAt(index) => {
                        if model.is_empty() {
                            prop_assert!(list.remove_at(index).is_err());
                        } else {
                            let position = index.rem_euclid(model.len() as isize) as usize;
                            let removed = model.remove(position);
                            prop_assert_eq!(list.remove_at(index), Ok(removed));
                            if position < cursor {
                                cursor -= 1;
                            }
                            if !model.is_empty() {
                                cursor %= model.len();
                            } else {
                                cursor = 0;
                            }
                        }
                    }
                    Op::Remove(value) => {
                        let found = model.iter().position(|e| *e == value);
                        prop_assert_eq!(list.remove(&value), found.is_some());
                        if let Some(position) = found {
                            model.remove(position);
                            if position < cursor {
                                cursor -= 1;
                            }
                            if !model.is_empty() {
                                cursor %= model.len();
                            } else {
                                cursor = 0;
                            }
                        }
                    }
                    Op::Next => {
                        if model.is_empty() {
                            prop_assert_eq!(list.try_next(), None);
                        } else {
                            prop_assert_eq!(list.try_next(), Some(&model[cursor]));
                            cursor = (cursor + 1) % model.len();
                        }
                    }
                    Op::Clear => {
                        list.clear();
                        model.clear();
                        cursor = 0;
                    }
                }
                assert_ring(&list);
                prop_assert_eq!(list.to_vec(), model.clone());
                if model.is_empty() {
                    prop_assert_eq!(list.cursor_position(), None);
                } else {
                    prop_assert_eq!(list.cursor_position(), Some(cursor));
                }
            }
        }
    }
}
