use crate::list::cursor::{Cursor, CursorIter};
use crate::list::{CircularList, Node};
use slab::Slab;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a `CircularList`.
///
/// It starts at the start of the ring and stops after yielding every element
/// once, unlike [`CircularList::next`] and the [`CursorIter`], which cycle
/// forever. Creating it does not move the list's cursor.
///
/// The `Iter` borrows the list immutably, so the list cannot be changed while
/// it is in use.
///
/// # Examples
///
/// ```compile_fail
/// use circular_list::CircularList;
///
/// let mut list = CircularList::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.add(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a CircularList<T>,
    current: Option<usize>,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a CircularList<T>, current: Option<usize>) -> Self {
        let len = list.len();
        Self { list, current, len }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        for element in self.clone() {
            f.field(element);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.current?);
        self.current = Some(node.next);
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `CircularList`, in ring order
/// from the start.
///
/// This `struct` is created by the [`into_iter`] method on [`CircularList`]
/// (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: CircularList::into_iter
pub struct IntoIter<T> {
    nodes: Slab<Node<T>>,
    current: Option<usize>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.nodes.len())
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // The ring is not walked again, so links into taken nodes may dangle.
        let Node { element, next } = self.nodes.try_remove(self.current?)?;
        self.current = Some(next);
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.nodes.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for CircularList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (nodes, current) = self.into_parts();
        IntoIter { nodes, current }
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CircularList<T> {
    /// Appends every item; the end of the ring is found once, not per item.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();
        let mut back = match self.start {
            Some(start) => self.walk(start, self.len() - 1),
            None => match iter.next() {
                Some(item) => self.link_sole(item),
                None => return,
            },
        };
        for item in iter {
            back = self.link_after(back, item);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<'a, T: 'a> Iterator for CursorIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.current();
        self.cursor.move_next();
        current
    }
}

/// Convert the cursor to an iterator, which is cyclic and not fused.
impl<'a, T: 'a> IntoIterator for Cursor<'a, T> {
    type Item = &'a T;
    type IntoIter = CursorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter { cursor: self }
    }
}

#[cfg(test)]
mod tests {
    use crate::CircularList;
    use std::iter::FromIterator;

    #[test]
    fn test_iter() {
        fn test_case(len: usize) {
            let vec = Vec::from_iter(0..len);
            let mut list = CircularList::from_iter(vec.clone());
            // moving the cursor does not change where iteration starts
            if !list.is_empty() {
                list.next();
            }
            let mut iter = list.iter();
            for (i, item) in vec.iter().enumerate() {
                assert_eq!(iter.len(), len - i);
                assert_eq!(iter.next(), Some(item));
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);
            assert_eq!(iter.len(), 0);

            // restartable
            assert_eq!(list.iter().count(), len);
            assert_eq!(Vec::from_iter(list.iter().copied()), vec);
            assert_eq!(Vec::from_iter(list), vec);
        }
        test_case(0);
        test_case(1);
        test_case(2);
        test_case(10);
    }

    #[test]
    fn test_iter_after_head_changes() {
        let mut list = CircularList::from_iter(1..4);
        list.insert(0, 0).unwrap();
        list.remove_at(-1).unwrap();
        assert_eq!(Vec::from_iter(&list), vec![&0, &1, &2]);
    }

    #[test]
    fn test_into_iter_partial() {
        let list = CircularList::from(vec![String::from("a"), String::from("b")]);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.len(), 1);
        drop(iter);
    }

    #[test]
    fn test_extend() {
        let mut list = CircularList::<i32>::new();
        list.extend(Vec::<i32>::new());
        assert!(list.is_empty());
        list.extend(vec![1, 2]);
        list.extend(&[3, 4]);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(list.peek(), Some(&1));
    }

    #[test]
    fn test_cursor_iter_cycles() {
        let list = CircularList::from(['a', 'b', 'c']);
        let taken: String = list.cursor_start().into_iter().take(7).collect();
        assert_eq!(taken, "abcabca");

        let empty = CircularList::<char>::new();
        let mut iter = empty.cursor_start().into_iter();
        assert_eq!(iter.next(), None);
    }
}
