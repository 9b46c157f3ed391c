//! This crate provides three linked-list shapes with owned nodes — singly,
//! doubly and circular — together with comparator-driven sorting algorithms
//! over each of them and a small benchmarking harness.
//!
//! The [`DoublyList`] supports inserting and removing elements at both ends
//! in constant time. The [`SinglyList`] prepends in constant time but walks
//! the chain to append. The [`CircularList`] keeps its nodes on a closed
//! ring with no cached tail, so insertion at either end is *O*(*n*) and
//! traversal terminates by returning to the head. [`Stack`] and [`Queue`]
//! are restricted LIFO/FIFO views over a doubly-linked list.
//!
//! Here is a quick example showing how the lists work.
//!
//! ```
//! use chainsort::DoublyList;
//! use std::iter::FromIterator;
//!
//! let mut list = DoublyList::from_iter([5, 3, 8, 1]);
//!
//! list.push_front(0);
//! assert_eq!(list.front(), Some(&0));
//! assert_eq!(list.pop_front(), Some(0));
//!
//! list.bubble_sort_by(i32::cmp);
//! assert_eq!(Vec::from_iter(list), vec![1, 3, 5, 8]);
//! ```
//!
//! # Memory Layout
//!
//! The doubly-linked list is a cyclic chain around a *ghost* node with no
//! payload: `ghost.next` is the front of the list, `ghost.prev` is the back,
//! and in an empty list both point at the ghost itself. This removes every
//! head/tail special case from insertion and removal. The singly and
//! circular shapes hold a plain `head` pointer; the last singly node's
//! `next` is `None`, while the last circular node's `next` points back at
//! the head (a one-element ring points at itself). Every shape caches its
//! length, updated with each structural change.
//!
//! # Iteration
//!
//! Iterating is by the usual `iter`/`iter_mut`/`into_iter` families. The
//! doubly-linked iterators are double-ended; the circular iterator makes
//! exactly one trip around the ring and is fused.
//!
//! ```
//! use chainsort::CircularList;
//! use std::iter::FromIterator;
//!
//! let mut list = CircularList::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None); // one trip only, then fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Sorting
//!
//! Each shape carries five sorting entry points, all driven by a comparator
//! `FnMut(&T, &T) -> Ordering` so elements never need to be `Ord`:
//!
//! - `bubble_sort_by`, `selection_sort_by`, `insertion_sort_by` sort in
//!   place by swapping element values between nodes, leaving node
//!   identities (and, for the circular shape, the ring structure) intact;
//! - `merge_sort_by` and `quick_sort_by` take `&self`, require `T: Clone`,
//!   and return a freshly built sorted list, leaving the input untouched.
//!
//! ```
//! use chainsort::SinglyList;
//! use std::iter::FromIterator;
//!
//! let list = SinglyList::from_iter([5, 3, 8, 1]);
//! let sorted = list.merge_sort_by(i32::cmp);
//! assert_eq!(Vec::from_iter(sorted), vec![1, 3, 5, 8]);
//! ```
//!
//! # Benchmarking
//!
//! The [`bench`] module times single sort invocations over seeded random
//! lists and summarizes the samples (arithmetic, geometric and harmonic
//! means, population variance and standard deviation) in a
//! [`bench::Report`]. The `bench_sorts` binary drives the full shape ×
//! algorithm matrix from the command line.

#[doc(inline)]
pub use adapters::{Queue, Stack};
#[doc(inline)]
pub use circular::CircularList;
#[doc(inline)]
pub use doubly::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use doubly::DoublyList;
#[doc(inline)]
pub use singly::SinglyList;

pub mod adapters;
pub mod bench;
pub mod circular;
pub mod doubly;
pub mod singly;
