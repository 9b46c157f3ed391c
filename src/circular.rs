//! A circular singly-linked list.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A circular singly-linked list with owned nodes.
///
/// The nodes form a closed ring: the last node's `next` points back at the
/// head, and a one-element ring points at itself. There is no cached tail
/// pointer, so insertion at either end walks the ring to find the node before
/// the head; traversals terminate by returning to the head, never by reaching
/// a null link.
pub struct CircularList<T> {
    head: Option<NonNull<Node<T>>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

struct Node<T> {
    next: NonNull<Node<T>>,
    element: T,
}

impl<T> Node<T> {
    /// Create a one-node ring holding `element`, pointing at itself.
    fn new_ring(element: T) -> NonNull<Node<T>> {
        let node = Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            element,
        }));
        let ptr = NonNull::from(&mut *node);
        node.next = ptr;
        ptr
    }
}

// private methods
impl<T> CircularList<T> {
    /// Returns the node before the head, walking the ring.
    ///
    /// For a one-element ring this is the head itself.
    fn tail_node(&self) -> Option<NonNull<Node<T>>> {
        let head = self.head?;
        let mut current = head;
        // SAFETY: every node on the ring is live, and the walk ends when the
        // ring closes back on the head.
        while unsafe { current.as_ref().next } != head {
            current = unsafe { current.as_ref().next };
        }
        Some(current)
    }

    /// Splice a fresh node holding `elt` between `tail` and the head, keeping
    /// the ring closed, and return the new node.
    ///
    /// It is unsafe because it does not check whether `tail` is the node
    /// before the head. Passing any other node makes the ring ill-formed.
    unsafe fn splice_before_head(&mut self, tail: Option<NonNull<Node<T>>>, elt: T) -> NonNull<Node<T>> {
        let node = Node::new_ring(elt);
        match (self.head, tail) {
            (Some(head), Some(mut tail)) => {
                debug_assert_eq!(tail.as_ref().next, head);
                (*node.as_ptr()).next = head;
                tail.as_mut().next = node;
            }
            _ => {
                debug_assert!(self.head.is_none());
                self.head = Some(node);
            }
        }
        self.len += 1;
        node
    }
}

impl<T> CircularList<T> {
    /// Create an empty `CircularList`.
    ///
    /// # Examples
    /// ```
    /// use chainsort::CircularList;
    /// let list: CircularList<u32> = CircularList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `CircularList` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `CircularList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `CircularList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        let mut current = match self.head.take() {
            Some(head) => head,
            None => return,
        };
        // The ring is never reclosed while freeing; counting `len` nodes
        // visits each exactly once.
        for _ in 0..self.len {
            // SAFETY: each node is owned by the ring and freed exactly once.
            let node = unsafe { Box::from_raw(current.as_ptr()) };
            current = node.next;
        }
        self.len = 0;
    }

    /// Provides a reference to the head element, or `None` if the ring is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the head node, when present, is a live node of this ring.
        self.head.map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the head element, or `None` if the
    /// ring is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the head node, when present, is a live node of this ring.
        self.head.map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Inserts an element before the current head and makes it the new head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: with no cached tail
    /// the ring is walked to find the node before the head, whose link must
    /// be updated to keep the ring closed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let tail = self.tail_node();
        // SAFETY: `tail` is the node before the head (or `None` on an empty
        // ring).
        let node = unsafe { self.splice_before_head(tail, elt) };
        self.head = Some(node);
    }

    /// Appends an element before the head, leaving the head unchanged, so it
    /// becomes the last element of the traversal order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let tail = self.tail_node();
        // SAFETY: `tail` is the node before the head (or `None` on an empty
        // ring).
        unsafe { self.splice_before_head(tail, elt) };
    }

    /// Removes the head element and returns it, or `None` if the ring is
    /// empty. The head's successor becomes the new head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: the node before the
    /// head must be relinked to keep the ring closed.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let mut tail = self.tail_node()?;
        // SAFETY: `head` is a live node owned by the ring; `tail.next` is
        // relinked (or the ring becomes empty) before anyone can observe the
        // freed node.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        if tail == head {
            self.head = None;
        } else {
            unsafe { tail.as_mut().next = node.next };
            self.head = Some(node.next);
        }
        self.len -= 1;
        Some(node.element)
    }

    /// Removes the first node (in traversal order from the head) whose
    /// element equals `elt`, and returns whether such a node was found. The
    /// ring stays closed around the removed node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter([1, 3, 5]);
    /// assert!(list.remove(&3));
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(Vec::from_iter(list), vec![1, 5]);
    /// ```
    pub fn remove(&mut self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        let head = match self.head {
            Some(head) => head,
            None => return false,
        };
        let mut prev = match self.tail_node() {
            Some(tail) => tail,
            None => return false,
        };
        let mut current = head;
        // SAFETY: the walk visits each live ring node once, bounded by `len`;
        // `prev` always precedes `current` on the ring.
        unsafe {
            for _ in 0..self.len {
                if current.as_ref().element == *elt {
                    let node = Box::from_raw(current.as_ptr());
                    if prev == current {
                        self.head = None;
                    } else {
                        prev.as_mut().next = node.next;
                        if current == head {
                            self.head = Some(node.next);
                        }
                    }
                    self.len -= 1;
                    return true;
                }
                prev = current;
                current = current.as_ref().next;
            }
        }
        false
    }

    /// Returns the position (in traversal order from the head) of the first
    /// node whose element equals `elt`, or `None` if there is no such node.
    pub fn position(&self, elt: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == elt)
    }

    /// Returns `true` if the ring contains an element equal to the given
    /// value.
    pub fn contains(&self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == elt)
    }

    /// Provides an iterator that makes exactly one trip around the ring,
    /// starting at the head.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Provides a mutable iterator over one trip around the ring.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            current: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> CircularList<T> {
    /// Sorts the ring in place with the bubble sort algorithm.
    ///
    /// Passes start at the head and stop where the ring closes; the pair
    /// across the head seam is never compared, so the sorted order is the
    /// traversal order from the head. Node identities and the ring structure
    /// are untouched; only element values move.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter([5, 3, 8, 1]);
    /// list.bubble_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5, 8]);
    /// ```
    pub fn bubble_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let head = match self.head {
            Some(head) if self.len > 1 => head,
            _ => return,
        };
        // `stop` is the first settled node; it begins at the head, meaning a
        // full trip around the ring.
        let mut stop = head;
        // SAFETY: the walks stay on live ring nodes and are bounded by
        // returning to `stop`, a node of this ring.
        unsafe {
            loop {
                let mut swapped = false;
                let mut current = head;
                while current.as_ref().next != stop {
                    let next = current.as_ref().next;
                    if compare(&current.as_ref().element, &next.as_ref().element)
                        == Ordering::Greater
                    {
                        swap_elements(current, next);
                        swapped = true;
                    }
                    current = next;
                }
                stop = current;
                if !swapped || stop == head {
                    break;
                }
            }
        }
    }

    /// Sorts the ring in place with the selection sort algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter([5, 3, 8, 1]);
    /// list.selection_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5, 8]);
    /// ```
    pub fn selection_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let head = match self.head {
            Some(head) if self.len > 1 => head,
            _ => return,
        };
        let mut current = head;
        // SAFETY: both walks stay on live ring nodes and stop where the ring
        // closes back on the head.
        unsafe {
            while current.as_ref().next != head {
                let mut min = current;
                let mut rest = current.as_ref().next;
                while rest != head {
                    if compare(&rest.as_ref().element, &min.as_ref().element) == Ordering::Less {
                        min = rest;
                    }
                    rest = rest.as_ref().next;
                }
                if min != current {
                    swap_elements(min, current);
                }
                current = current.as_ref().next;
            }
        }
    }

    /// Sorts the ring in place with a self-selecting insertion sort variant.
    ///
    /// Every later element (up to the ring seam) that compares before the
    /// current one is swapped into the current position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter([5, 3, 8, 1]);
    /// list.insertion_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5, 8]);
    /// ```
    pub fn insertion_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let head = match self.head {
            Some(head) if self.len > 1 => head,
            _ => return,
        };
        let mut current = head;
        // SAFETY: both walks stay on live ring nodes; the outer walk visits
        // each node once, bounded by `len`.
        unsafe {
            for _ in 0..self.len {
                let mut rest = current.as_ref().next;
                while rest != head {
                    if compare(&current.as_ref().element, &rest.as_ref().element)
                        == Ordering::Greater
                    {
                        swap_elements(current, rest);
                    }
                    rest = rest.as_ref().next;
                }
                current = current.as_ref().next;
            }
        }
    }

    /// Sorts with the merge sort algorithm, returning a new ring.
    ///
    /// The input ring is left untouched; *O*(*n* log *n*) comparisons. The
    /// result is a closed ring at every step of construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let list = CircularList::from_iter([5, 3, 8, 1]);
    /// let sorted = list.merge_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(sorted), vec![1, 3, 5, 8]);
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn merge_sort_by<F>(&self, mut compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort_parts(Ring::from_list(self.clone()), &mut compare).into_list()
    }

    /// Sorts with the quicksort algorithm, returning a new ring.
    ///
    /// First-element pivot, strict-less partition to the left, ties to the
    /// right. Recursion depth is capped at roughly `2 * log2(len)`; beyond
    /// the cap a sub-ring is finished with the in-place pairwise sort. The
    /// input ring is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let list = CircularList::from_iter([5, 3, 8, 1]);
    /// let sorted = list.quick_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(sorted), vec![1, 3, 5, 8]);
    /// ```
    pub fn quick_sort_by<F>(&self, mut compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let depth = crate::doubly::sort::depth_limit(self.len());
        quick_sort_parts(Ring::from_list(self.clone()), &mut compare, depth).into_list()
    }
}

unsafe fn swap_elements<T>(mut a: NonNull<Node<T>>, mut b: NonNull<Node<T>>) {
    std::mem::swap(&mut a.as_mut().element, &mut b.as_mut().element)
}

/// A `CircularList` paired with its tail node, giving the sort helpers *O*(1)
/// pops and appends while the ring stays closed at every step.
struct Ring<T> {
    list: CircularList<T>,
    tail: Option<NonNull<Node<T>>>,
}

impl<T> Ring<T> {
    fn new() -> Self {
        Self {
            list: CircularList::new(),
            tail: None,
        }
    }

    fn from_list(list: CircularList<T>) -> Self {
        let tail = list.tail_node();
        Self { list, tail }
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn front(&self) -> Option<&T> {
        self.list.front()
    }

    fn pop_front(&mut self) -> Option<T> {
        let head = self.list.head?;
        let mut tail = self.tail?;
        // SAFETY: `tail` precedes `head` on the ring; the ring is reclosed
        // (or emptied) before the freed node can be observed.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        if tail == head {
            self.list.head = None;
            self.tail = None;
        } else {
            unsafe { tail.as_mut().next = node.next };
            self.list.head = Some(node.next);
        }
        self.list.len -= 1;
        Some(node.element)
    }

    fn push_back(&mut self, elt: T) {
        // SAFETY: `tail` tracks the node before the head across appends.
        self.tail = Some(unsafe { self.list.splice_before_head(self.tail, elt) });
    }

    fn append(&mut self, mut other: Ring<T>) {
        while let Some(elt) = other.pop_front() {
            self.push_back(elt);
        }
    }

    fn into_list(self) -> CircularList<T> {
        self.list
    }
}

fn merge_sort_parts<T, F>(mut ring: Ring<T>, compare: &mut F) -> Ring<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if ring.len() < 2 {
        return ring;
    }
    let mid = ring.len() / 2;
    let mut left = Ring::new();
    while left.len() < mid {
        if let Some(elt) = ring.pop_front() {
            left.push_back(elt);
        }
    }
    let left = merge_sort_parts(left, compare);
    let right = merge_sort_parts(ring, compare);
    merge(left, right, compare)
}

fn merge<T, F>(mut left: Ring<T>, mut right: Ring<T>, compare: &mut F) -> Ring<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = Ring::new();
    loop {
        let take_left = match (left.front(), right.front()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Less,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let elt = if take_left {
            left.pop_front()
        } else {
            right.pop_front()
        };
        if let Some(elt) = elt {
            result.push_back(elt);
        }
    }
    result
}

fn quick_sort_parts<T, F>(mut ring: Ring<T>, compare: &mut F, depth: usize) -> Ring<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if ring.len() < 2 {
        return ring;
    }
    if depth == 0 {
        ring.list.insertion_sort_by(|a, b| compare(a, b));
        return Ring::from_list(ring.into_list());
    }
    let pivot = match ring.pop_front() {
        Some(pivot) => pivot,
        None => return ring,
    };
    let mut left = Ring::new();
    let mut right = Ring::new();
    while let Some(elt) = ring.pop_front() {
        if compare(&elt, &pivot) == Ordering::Less {
            left.push_back(elt);
        } else {
            right.push_back(elt);
        }
    }
    let mut result = quick_sort_parts(left, compare, depth - 1);
    result.push_back(pivot);
    result.append(quick_sort_parts(right, compare, depth - 1));
    result
}

/// An iterator making one trip around a `CircularList`, starting at the head.
pub struct Iter<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a CircularList<T>>,
}

impl<'a, T: Debug + 'a> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        let mut ptr = self.current;
        for _ in 0..self.remaining {
            if let Some(node) = ptr {
                // SAFETY: every node on the ring is a live node of the
                // borrowed list.
                let node = unsafe { node.as_ref() };
                f.field(&node.element);
                ptr = Some(node.next);
            }
        }
        f.finish()
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: `remaining > 0` implies `current` is a live node of the
        // borrowed ring.
        let node = unsafe { self.current?.as_ref() };
        self.current = Some(node.next);
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator making one trip around a `CircularList`.
pub struct IterMut<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a mut CircularList<T>>,
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: `remaining > 0` implies `current` is a live node of the
        // mutably borrowed ring, and one trip yields each node at most once.
        let node = unsafe { self.current?.as_mut() };
        self.current = Some(node.next);
        self.remaining -= 1;
        Some(&mut node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `CircularList`.
pub struct IntoIter<T> {
    ring: Ring<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.ring.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for CircularList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            ring: Ring::from_list(self),
        }
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Ring::new();
        for elt in iter {
            ring.push_back(elt);
        }
        ring.into_list()
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // One scan for the current tail, then O(1) per appended element.
        let mut ring = Ring::from_list(std::mem::take(self));
        for elt in iter {
            ring.push_back(elt);
        }
        *self = ring.into_list();
    }
}

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for CircularList<T> {}

unsafe impl<T: Sync> Sync for CircularList<T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::CircularList;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    // Walks `len` links from the head and checks the walk lands back on the
    // head, so the ring is closed with exactly `len` nodes.
    fn check_ring<T>(list: &CircularList<T>) {
        let head = match list.head {
            Some(head) => head,
            None => return,
        };
        let mut current = head;
        for _ in 0..list.len() {
            current = unsafe { current.as_ref().next };
        }
        assert_eq!(current, head);
    }

    #[test]
    fn singleton_points_at_itself() {
        let mut list = CircularList::new();
        list.push_back(7);
        let head = list.head.unwrap();
        assert_eq!(unsafe { head.as_ref().next }, head);
        assert_eq!(list.len(), 1);
        assert_eq!(list.pop_front(), Some(7));
        assert!(list.is_empty());
    }

    #[test]
    fn ring_drop() {
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
        let mut list = CircularList::new();
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
    fn push_front_and_back_keep_ring_closed() {
        let mut list = CircularList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        check_ring(&list);
        assert_eq!(list.len(), 3);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
    }

    #[test]
    fn remove_keeps_ring_closed() {
        let mut list = CircularList::from_iter([1, 3, 5]);

        assert!(list.remove(&3));
        assert_eq!(list.len(), 2);
        check_ring(&list);
        // head -> next -> next lands back on head
        let head = list.head.unwrap();
        assert_eq!(unsafe { head.as_ref().next.as_ref().next }, head);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 5]);

        assert!(!list.remove(&7));

        // removing the head moves the head to its successor
        assert!(list.remove(&1));
        check_ring(&list);
        assert_eq!(list.front(), Some(&5));

        assert!(list.remove(&5));
        assert!(list.is_empty());
    }

    #[test]
    fn iter_makes_exactly_one_trip() {
        let list = CircularList::from_iter(0..4);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(Vec::from_iter(iter.by_ref().copied()), vec![0, 1, 2, 3]);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn search_operations() {
        let list = CircularList::from_iter([1, 3, 5]);
        assert_eq!(list.position(&5), Some(2));
        assert_eq!(list.position(&7), None);
        assert!(list.contains(&1));
        assert!(!list.contains(&2));
    }

    #[test]
    fn ring_eq_and_clone() {
        let list = CircularList::from_iter(0..5);
        let cloned = list.clone();
        check_ring(&cloned);
        assert_eq!(list, cloned);
        assert_ne!(list, CircularList::from_iter(0..4));
    }

    fn sorted_vecs(input: &[i32]) -> Vec<(&'static str, Vec<i32>)> {
        let list = CircularList::from_iter(input.iter().copied());

        let mut bubble = list.clone();
        bubble.bubble_sort_by(i32::cmp);
        check_ring(&bubble);
        let mut selection = list.clone();
        selection.selection_sort_by(i32::cmp);
        check_ring(&selection);
        let mut insertion = list.clone();
        insertion.insertion_sort_by(i32::cmp);
        check_ring(&insertion);
        let merged = list.merge_sort_by(i32::cmp);
        check_ring(&merged);
        let quicked = list.quick_sort_by(i32::cmp);
        check_ring(&quicked);

        vec![
            ("bubble", Vec::from_iter(bubble)),
            ("selection", Vec::from_iter(selection)),
            ("insertion", Vec::from_iter(insertion)),
            ("merge", Vec::from_iter(merged)),
            ("quick", Vec::from_iter(quicked)),
        ]
    }

    #[test]
    fn all_algorithms_sort_and_terminate() {
        let input = [5, 3, 8, 1];
        for (name, output) in sorted_vecs(&input) {
            assert_eq!(output, vec![1, 3, 5, 8], "{} sort", name);
        }
    }

    #[test]
    fn all_algorithms_handle_duplicates() {
        let input = [2, 2, 1, 3, 1, 2];
        let mut expected = input.to_vec();
        expected.sort();
        for (name, output) in sorted_vecs(&input) {
            assert_eq!(output, expected, "{} sort", name);
        }
    }

    #[test]
    fn trivial_inputs_are_unchanged() {
        for input in [&[][..], &[42][..]] {
            for (name, output) in sorted_vecs(input) {
                assert_eq!(output, input.to_vec(), "{} sort", name);
            }
        }
    }

    #[test]
    fn sorted_input_stays_sorted() {
        let input = Vec::from_iter(0..20);
        for (name, output) in sorted_vecs(&input) {
            assert_eq!(output, input, "{} sort", name);
        }
    }

    #[test]
    fn quick_sort_survives_descending_input() {
        let list = CircularList::from_iter((0..200).rev());
        let sorted = list.quick_sort_by(i32::cmp);
        check_ring(&sorted);
        assert_eq!(Vec::from_iter(sorted), Vec::from_iter(0..200));
    }

    #[test]
    fn merge_sort_leaves_input_untouched() {
        let list = CircularList::from_iter([2, 1, 3]);
        let sorted = list.merge_sort_by(i32::cmp);
        check_ring(&list);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 1, 3]);
        assert_eq!(Vec::from_iter(sorted), vec![1, 2, 3]);
    }
}
