use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::doubly::iterator::{IntoIter, Iter, IterMut};

pub mod iterator;

pub(crate) mod sort;

/// A doubly-linked list with owned nodes, implemented as a cyclic chain
/// around a ghost node.
///
/// The `DoublyList` contains:
/// - a pointer `ghost` that points to the ghost node;
/// - a length field `len` caching the number of element nodes.
///
/// `ghost.next` is the front of the list and `ghost.prev` is the back, so
/// pushing and popping at either end is *O*(1). For every node (the ghost
/// included), `node.next.prev == node`.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct DoublyList<T> {
    ghost: Box<Node<Erased>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

#[derive(Default)]
struct Erased;

// private methods
impl<T> DoublyList<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.ghost.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first
        // element of the chain).
        NonNull::from(unsafe { self.ghost_node().as_ref().next.as_ref() })
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last
        // element of the chain).
        NonNull::from(unsafe { self.ghost_node().as_ref().prev.as_ref() })
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belong
    /// to the list, or whether `prev` and `next` are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }
}

impl<T> DoublyList<T> {
    /// Create an empty `DoublyList`.
    ///
    /// # Examples
    /// ```
    /// use chainsort::DoublyList;
    /// let list: DoublyList<u32> = DoublyList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: new_ghost(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `DoublyList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the length of the `DoublyList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `DoublyList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the front node is a non-ghost node
        // holding a valid element.
        unsafe { Some(&self.front_node().as_ref().element) }
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the front node is a non-ghost node
        // holding a valid element.
        unsafe { Some(&mut self.front_node().as_mut().element) }
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the back node is a non-ghost node
        // holding a valid element.
        unsafe { Some(&self.back_node().as_ref().element) }
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the back node is a non-ghost node
        // holding a valid element.
        unsafe { Some(&mut self.back_node().as_mut().element) }
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: `ghost` and `ghost.next` are valid adjacent nodes of the list.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) };
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the front node is a valid non-ghost
        // node of the list.
        let node = unsafe { self.detach_node(self.front_node()) };
        Some(node.element)
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: `ghost.prev` and `ghost` are valid adjacent nodes of the list.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the back node is a valid non-ghost
        // node of the list.
        let node = unsafe { self.detach_node(self.back_node()) };
        Some(node.element)
    }

    /// Moves all elements from `other` to the back of the list, leaving
    /// `other` empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time: the two chains are
    /// spliced at the ghost nodes, no element is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([1, 2]);
    /// let mut other = DoublyList::from_iter([3, 4]);
    ///
    /// list.append(&mut other);
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        let front = other.front_node();
        let back = other.back_node();
        let other_ghost = other.ghost_node();
        // SAFETY: `front..=back` is the whole element chain of `other`;
        // splicing it between `self`'s back and ghost keeps both cyclic
        // chains well-formed, with `other`'s ghost closing on itself.
        unsafe {
            connect(self.back_node(), front);
            connect(back, self.ghost_node());
            connect(other_ghost, other_ghost);
        }
        self.len += other.len;
        other.len = 0;
    }

    /// Removes the first node whose element equals `elt`, and returns whether
    /// such a node was found.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([1, 2, 3, 2]);
    ///
    /// assert!(list.remove(&2));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 3, 2]);
    /// assert!(!list.remove(&7));
    /// ```
    pub fn remove(&mut self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        let ghost = self.ghost_node();
        let mut current = self.front_node();
        while current != ghost {
            // SAFETY: `current` is a non-ghost node of the list, so its element
            // and its `next` link are valid.
            unsafe {
                if current.as_ref().element == *elt {
                    self.detach_node(current);
                    return true;
                }
                current = current.as_ref().next;
            }
        }
        false
    }

    /// Returns the position of the first node whose element equals `elt`,
    /// or `None` if there is no such node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyList::from_iter([1, 2, 3]);
    /// assert_eq!(list.position(&3), Some(2));
    /// assert_eq!(list.position(&7), None);
    /// ```
    pub fn position(&self, elt: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == elt)
    }

    /// Returns `true` if the `DoublyList` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyList::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == elt)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    ///
    /// let mut list = DoublyList::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for DoublyList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for DoublyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for DoublyList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyList<T> {}

impl<T: Clone> Clone for DoublyList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        // SAFETY:
        // - `node.element` is manually written, so it is safe;
        // - `node.prev` and `node.next` are dangling, but need unsafe blocks for
        //   dereference, so it is also safe.
        NonNull::from(unsafe {
            // `node.prev` and `node.next` will not be read before the node is
            // attached, so it is ok for them to be uninitialized. `node.element`
            // is initialized manually by `ptr::write`.
            #[allow(invalid_value, clippy::uninit_assumed_init)]
            let node = Box::<Node<T>>::leak(Box::new(MaybeUninit::uninit().assume_init()));
            std::ptr::write(&mut node.element, element);
            node
        })
    }
}

pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

fn new_ghost() -> Box<Node<Erased>> {
    let ghost_ptr = Node::new_detached(Erased::default());
    // SAFETY:
    // - `ghost.next`, `ghost.prev` are initialized immediately after creating `ghost`.
    // - `ghost.element` is never read, so it is erased out.
    let mut ghost = unsafe { Box::from_raw(ghost_ptr.as_ptr()) };
    ghost.next = ghost_ptr;
    ghost.prev = ghost_ptr;
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for DoublyList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for DoublyList<T> {}

unsafe impl<T: Sync> Sync for DoublyList<T> {}

// Ensure that `DoublyList` and its read-only iterators are covariant in their
// type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: DoublyList<&'static str>) -> DoublyList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

// Walks the chain and checks that `len` matches and that every back-link is
// consistent, the ghost's included.
#[cfg(test)]
pub(crate) fn check_links<T>(list: &DoublyList<T>) {
    let ghost = list.ghost_node();
    let mut count = 0;
    let mut current = list.front_node();
    while current != ghost {
        unsafe {
            let next: NonNull<_> = current.as_ref().next;
            assert_eq!(next.as_ref().prev, current);
            current = next;
        }
        count += 1;
    }
    assert_eq!(count, list.len());
    unsafe {
        assert_eq!(ghost.as_ref().next.as_ref().prev, ghost);
        assert_eq!(ghost.as_ref().prev.as_ref().next, ghost);
    }
}

#[cfg(test)]
mod tests {
    use super::{check_links, DoublyList};
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = DoublyList::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl<'a> Drop for DropChecker<'a> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut list = DoublyList::new();
        for value in 1..=3 {
            list.push_back(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = DoublyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        check_links(&list);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_remove_and_search() {
        let mut list = DoublyList::from_iter([1, 2, 3, 2]);

        assert_eq!(list.position(&2), Some(1));
        assert!(list.contains(&3));
        assert!(!list.contains(&7));

        assert!(list.remove(&2));
        check_links(&list);
        assert_eq!(list.len(), 3);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 3, 2]);

        assert!(!list.remove(&7));
        assert_eq!(list.len(), 3);

        assert!(list.remove(&1));
        assert!(list.remove(&2));
        assert!(list.remove(&3));
        assert!(list.is_empty());
        check_links(&list);
    }

    #[test]
    fn list_append() {
        let mut list = DoublyList::from_iter(0..3);
        let mut other = DoublyList::from_iter(3..6);

        list.append(&mut other);
        check_links(&list);
        check_links(&other);
        assert!(other.is_empty());
        assert_eq!(list.len(), 6);
        assert_eq!(Vec::from_iter(list.iter().copied()), Vec::from_iter(0..6));

        // appending an empty list is a no-op
        let mut empty = DoublyList::new();
        list.append(&mut empty);
        assert_eq!(list.len(), 6);

        // appending onto an empty list moves everything
        let mut target = DoublyList::new();
        target.append(&mut list);
        check_links(&target);
        assert_eq!(Vec::from_iter(target), Vec::from_iter(0..6));
    }

    #[test]
    fn list_front_and_back_mut() {
        let mut list = DoublyList::from_iter([1, 2, 3]);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        assert_eq!(Vec::from_iter(list), vec![10, 2, 30]);
    }

    #[test]
    fn list_eq_and_clone() {
        let list = DoublyList::from_iter(0..5);
        let cloned = list.clone();
        assert_eq!(list, cloned);
        check_links(&cloned);

        let shorter = DoublyList::from_iter(0..4);
        assert_ne!(list, shorter);
    }
}
