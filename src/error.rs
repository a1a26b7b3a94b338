use std::fmt;

/// Errors returned by the fallible operations of a [`CircularList`].
///
/// Note that not every "missing element" case is reported through this type:
/// [`CircularList::index_of`], [`CircularList::remove`],
/// [`CircularList::insert_before`] and [`CircularList::insert_after`] signal
/// absence with `None`/`false` instead, and only
/// [`CircularList::find_where`] fails with [`ListError::NotFound`].
///
/// [`CircularList`]: crate::CircularList
/// [`CircularList::index_of`]: crate::CircularList::index_of
/// [`CircularList::remove`]: crate::CircularList::remove
/// [`CircularList::insert_before`]: crate::CircularList::insert_before
/// [`CircularList::insert_after`]: crate::CircularList::insert_after
/// [`CircularList::find_where`]: crate::CircularList::find_where
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The index does not address a slot of the list. Raised for any index
    /// on an empty list, and for insert positions past the end.
    OutOfRange { index: isize, len: usize },

    /// No element satisfied the predicate.
    NotFound,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ListError::OutOfRange { index, len } => {
                write!(f, "index {} is out of range for a list of length {}", index, len)
            }
            ListError::NotFound => f.write_str("item is not in the list"),
        }
    }
}

impl std::error::Error for ListError {}
