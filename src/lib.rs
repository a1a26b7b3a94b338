//! This crate provides a singly-linked circular list with owned nodes and a
//! persistent traversal cursor.
//!
//! The [`CircularList`] is a sequence whose last element is followed by its
//! first one. Elements are addressed by *logical index*, the number of links
//! followed from the start node; any integer is accepted and taken modulo the
//! length of the list, so `-1` is the last element. Reaching an index takes
//! *O*(*n*) time, since the list has no random access.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use circular_list::CircularList;
//!
//! let mut list = CircularList::from([1, 2, 3]);
//!
//! list.insert(0, 0).unwrap(); // insert 0 at the beginning of the list
//! assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);
//! assert_eq!(list.get(-1), Ok(&3));
//!
//! assert_eq!(list.remove_at(2), Ok(2));
//! assert_eq!(list.index_of(&3), Some(2));
//!
//! // `next` never runs out: it starts over after the last element
//! assert_eq!(list.next(), &0);
//! assert_eq!(list.next(), &1);
//! assert_eq!(list.next(), &3);
//! assert_eq!(list.next(), &0);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!        ┌──────────────────────────────────────────────────────────┐
//!        ↓                                                          │
//!  ╔═══════════╗      ╔═══════════╗                ╔═══════════╗    │
//!  ║ element T ║      ║ element T ║                ║ element T ║    │
//!  ╟───────────╢      ╟───────────╢                ╟───────────╢    │
//!  ║   next    ║ ───→ ║   next    ║ ───→ ┄┄ ───→   ║   next    ║ ───┘
//!  ╚═══════════╝      ╚═══════════╝                ╚═══════════╝
//!     Node 0              Node 1                     Node n - 1
//!        ↑                  ↑
//!  ╔═══════════╗            │
//!  ║   start   ║            │
//!  ╟───────────╢            │
//!  ║  cursor   ║ ───────────┘
//!  ╟───────────╢
//!  ║   nodes   ║  (arena owning every node)
//!  ╚═══════════╝
//!   CircularList
//! ```
//! The `CircularList` contains:
//! - an arena `nodes` owning every node; a node refers to its successor by its
//!   key in the arena, so the ring never forms an ownership cycle;
//! - the key `start` of the node at logical index 0;
//! - the key `cursor` of the node that [`CircularList::next`] returns next.
//!
//! Both keys are absent exactly when the list is empty.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IntoIter`] iterators. They
//! start at the start node and stop after one round, and they never move the
//! list's cursor.
//!
//! ```
//! use circular_list::CircularList;
//!
//! let list = CircularList::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//! ```
//!
//! # Cursors
//!
//! The list's own cursor is advanced by [`CircularList::next`]. It is kept valid
//! across mutation: removing the node under it moves it to the following node,
//! and inserting at position 0 while it sits on the start node moves it to the
//! new start.
//!
//! Independent read-only cursors are provided by [`Cursor`]. They can be turned
//! into cyclic iterators that never end on a non-empty list.
//!
//! ```
//! use circular_list::CircularList;
//!
//! let list = CircularList::from([1, 2, 3]);
//! let mut cursor_iter = list.cursor_start().into_iter();
//! assert_eq!(cursor_iter.next(), Some(&1));
//! assert_eq!(cursor_iter.next(), Some(&2));
//! assert_eq!(cursor_iter.next(), Some(&3));
//! assert_eq!(cursor_iter.next(), Some(&1)); // Not fused and cyclic
//! ```
//!
//! # Errors
//!
//! Reads and removals on an empty list, and insertions past the end, fail with
//! [`ListError::OutOfRange`]. [`CircularList::find_where`] fails with
//! [`ListError::NotFound`], while the other searches report a missing element
//! with `None` or `false`.
//!
//! # Features
//!
//! - `tracing` (default): emit `trace` level events for insertions, removals
//!   and cursor moves through the `tracing` crate.
//!
//! [`Cursor`]: crate::list::cursor::Cursor

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

#[doc(inline)]
pub use error::ListError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{CircularList, Drain};

mod error;
pub mod list;
