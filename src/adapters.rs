//! LIFO and FIFO adapters over a doubly-linked list.

use std::fmt::{self, Debug, Formatter};
use std::iter::FromIterator;

use crate::DoublyList;

/// A last-in-first-out stack backed by a [`DoublyList`].
///
/// Pushing, popping and peeking all happen at the back of the underlying
/// list, so every operation is *O*(1).
///
/// # Examples
///
/// ```
/// use chainsort::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T> {
    list: DoublyList<T>,
}

impl<T> Stack<T> {
    /// Create an empty `Stack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            list: DoublyList::new(),
        }
    }

    /// Returns `true` if the `Stack` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of elements on the `Stack`.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Pushes an element onto the top of the stack.
    #[inline]
    pub fn push(&mut self, elt: T) {
        self.list.push_back(elt);
    }

    /// Removes the most recently pushed element and returns it, or `None` if
    /// the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Provides a reference to the most recently pushed element, or `None`
    /// if the stack is empty.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.list.back()
    }

    /// Removes all elements from the `Stack`.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("list", &self.list).finish()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the elements in iteration order, so the last one ends up on
    /// top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: DoublyList::from_iter(iter),
        }
    }
}

/// A first-in-first-out queue backed by a [`DoublyList`].
///
/// Elements enter at the back and leave at the front, both *O*(1).
///
/// # Examples
///
/// ```
/// use chainsort::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct Queue<T> {
    list: DoublyList<T>,
}

impl<T> Queue<T> {
    /// Create an empty `Queue`.
    #[inline]
    pub fn new() -> Self {
        Self {
            list: DoublyList::new(),
        }
    }

    /// Returns `true` if the `Queue` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of elements in the `Queue`.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Adds an element to the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, elt: T) {
        self.list.push_back(elt);
    }

    /// Removes the element at the front of the queue and returns it, or
    /// `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Provides a reference to the element at the front of the queue, or
    /// `None` if the queue is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Provides a reference to the element at the back of the queue, or
    /// `None` if the queue is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }

    /// Removes all elements from the `Queue`.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("list", &self.list).finish()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Enqueues the elements in iteration order, so the first one is at the
    /// front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: DoublyList::from_iter(iter),
        }
    }
}
