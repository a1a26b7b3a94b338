use crate::list::CircularList;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

mod drain;

pub use drain::Drain;

/// Two lists are equal when they hold equal elements in the same ring order,
/// counted from their start nodes. Cursor positions are not compared.
impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Clone> Clone for CircularList<T> {
    /// Clones the elements, keeping the cursor at the same logical index.
    fn clone(&self) -> Self {
        let mut list: Self = self.iter().cloned().collect();
        if let (Some(position), Some(start)) = (self.cursor_position(), list.start) {
            list.cursor = Some(list.walk(start, position));
        }
        list
    }
}

impl<T: Hash> Hash for CircularList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> From<Vec<T>> for CircularList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_iter(items)
    }
}

impl<T, const N: usize> From<[T; N]> for CircularList<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_iter(items)
    }
}

impl<T> CircularList<T> {
    /// Returns `true` if the `CircularList` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new();
    ///
    /// list.add(0);
    /// list.add(1);
    /// list.add(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Copies the elements into a `Vec`, in ring order from the start.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Moves the elements into a `Vec`, in ring order from the start.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::CircularList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq_ignores_cursor() {
        let a = CircularList::from([1, 2, 3]);
        let mut b = CircularList::from(vec![1, 2, 3]);
        b.next();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, CircularList::from([2, 3, 1]));
        assert_ne!(a, CircularList::from([1, 2]));
    }

    #[test]
    fn list_clone_keeps_cursor() {
        let mut list = CircularList::from(['a', 'b', 'c']);
        list.next();
        list.next();
        let mut cloned = list.clone();
        assert_eq!(cloned, list);
        assert_eq!(cloned.cursor_position(), Some(2));
        assert_eq!(*cloned.next(), 'c');

        let empty = CircularList::<char>::new();
        assert!(empty.clone().is_empty());
    }

    #[test]
    fn list_conversions() {
        let list = CircularList::from(vec![String::from("x"), String::from("y")]);
        assert!(list.contains(&String::from("y")));
        assert!(!list.contains(&String::from("z")));
        assert_eq!(list.to_vec(), vec!["x", "y"]);
        assert_eq!(list.into_vec(), vec!["x", "y"]);
        assert_eq!(format!("{:?}", CircularList::from([1, 2])), "[1, 2]");
    }
}
