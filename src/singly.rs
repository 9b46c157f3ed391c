//! A singly-linked list with owned nodes.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::DoublyList;

/// A singly-linked list with owned nodes.
///
/// The `SinglyList` holds only a head pointer, so pushing at the front is
/// *O*(1) while appending at the back walks the whole chain. The chain is
/// `None`-terminated; a cached `len` tracks the number of nodes.
pub struct SinglyList<T> {
    head: Option<NonNull<Node<T>>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

struct Node<T> {
    next: Option<NonNull<Node<T>>>,
    element: T,
}

impl<T> Node<T> {
    /// Create a detached node with the given element.
    fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            element,
        })))
    }
}

// private methods
impl<T> SinglyList<T> {
    /// Returns the last node of the chain, walking from the head.
    fn back_node(&self) -> Option<NonNull<Node<T>>> {
        let mut current = self.head?;
        // SAFETY: every node reachable from `head` is a live node of this
        // list, so it can be read.
        while let Some(next) = unsafe { current.as_ref().next } {
            current = next;
        }
        Some(current)
    }

    /// Attach a fresh node holding `elt` after `tail`, or as the new head if
    /// `tail` is `None`, and return the attached node.
    ///
    /// It is unsafe because it does not check whether `tail` is the last node
    /// of this list. Passing any other node makes the list ill-formed; the
    /// caller threads the return value back in as the next `tail` to keep
    /// repeated appends *O*(1).
    unsafe fn append_after(
        &mut self,
        tail: Option<NonNull<Node<T>>>,
        elt: T,
    ) -> Option<NonNull<Node<T>>> {
        let node = Node::new_detached(elt);
        match tail {
            Some(mut tail) => {
                debug_assert!(tail.as_ref().next.is_none());
                tail.as_mut().next = Some(node);
            }
            None => {
                debug_assert!(self.head.is_none());
                self.head = Some(node);
            }
        }
        self.len += 1;
        Some(node)
    }
}

impl<T> SinglyList<T> {
    /// Create an empty `SinglyList`.
    ///
    /// # Examples
    /// ```
    /// use chainsort::SinglyList;
    /// let list: SinglyList<u32> = SinglyList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `SinglyList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `SinglyList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `SinglyList`.
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
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the head node, when present, is a live node of this list.
        self.head.map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the head node, when present, is a live node of this list.
        self.head.map(|mut node| unsafe { &mut node.as_mut().element })
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
    /// use chainsort::SinglyList;
    ///
    /// let mut list = SinglyList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let mut node = Node::new_detached(elt);
        // SAFETY: `node` is detached and owned here.
        unsafe { node.as_mut().next = self.head };
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: with no tail pointer
    /// the whole chain is walked to find the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::SinglyList;
    ///
    /// let mut list = SinglyList::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let tail = self.back_node();
        // SAFETY: `tail` is the last node of this list (or `None` when the
        // list is empty).
        unsafe { self.append_after(tail, elt) };
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: the head node is a live node of this list, allocated via
        // `Box`, and nothing else points to it once `head` is replaced.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        self.len -= 1;
        Some(node.element)
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
    /// use chainsort::SinglyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SinglyList::from_iter([1, 2, 3, 2]);
    /// assert!(list.remove(&2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 2]);
    /// ```
    pub fn remove(&mut self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        // `link` is the location holding the pointer to the current node, so
        // unlinking is a single overwrite whether at the head or mid-chain.
        let mut link: NonNull<Option<NonNull<Node<T>>>> = NonNull::from(&mut self.head);
        // SAFETY: `link` always points either at `self.head` or at the `next`
        // field of a live node of this list.
        unsafe {
            while let Some(current) = *link.as_ref() {
                if current.as_ref().element == *elt {
                    let node = Box::from_raw(current.as_ptr());
                    *link.as_mut() = node.next;
                    self.len -= 1;
                    return true;
                }
                link = NonNull::from(&mut (*current.as_ptr()).next);
            }
        }
        false
    }

    /// Returns the position of the first node whose element equals `elt`,
    /// or `None` if there is no such node.
    pub fn position(&self, elt: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == elt)
    }

    /// Returns `true` if the `SinglyList` contains an element equal to the
    /// given value.
    pub fn contains(&self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == elt)
    }

    /// Provides a forward iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            current: self.head,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> SinglyList<T> {
    /// Sorts the list in place with the bubble sort algorithm.
    ///
    /// Adjacent out-of-order elements are swapped in repeated passes; a pass
    /// without swaps ends the sort and each pass shrinks the unsorted suffix
    /// by one node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::SinglyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SinglyList::from_iter([5, 3, 8, 1]);
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
        // `stop` is the first node of the settled suffix; `None` means the
        // chain end.
        let mut stop = None;
        loop {
            let mut swapped = false;
            let mut current = head;
            // SAFETY: the walk stays on live nodes of this list and halts at
            // `stop`, which is `None` or a node of this list.
            unsafe {
                while current.as_ref().next != stop {
                    let next = match current.as_ref().next {
                        Some(next) => next,
                        None => break,
                    };
                    if compare(&current.as_ref().element, &next.as_ref().element)
                        == Ordering::Greater
                    {
                        swap_elements(current, next);
                        swapped = true;
                    }
                    current = next;
                }
            }
            stop = Some(current);
            if !swapped {
                break;
            }
        }
    }

    /// Sorts the list in place with the selection sort algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::SinglyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SinglyList::from_iter([5, 3, 8, 1]);
    /// list.selection_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5, 8]);
    /// ```
    pub fn selection_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut current = match self.head {
            Some(head) if self.len > 1 => head,
            _ => return,
        };
        // SAFETY: the walk stays on live nodes of this list.
        unsafe {
            loop {
                let mut min = current;
                let mut rest = current.as_ref().next;
                while let Some(node) = rest {
                    if compare(&node.as_ref().element, &min.as_ref().element) == Ordering::Less {
                        min = node;
                    }
                    rest = node.as_ref().next;
                }
                if min != current {
                    swap_elements(min, current);
                }
                current = match current.as_ref().next {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    /// Sorts the list in place with a self-selecting insertion sort variant.
    ///
    /// Every later element that compares before the current one is swapped
    /// into the current position. Unconditionally *O*(*n*²) comparisons and
    /// not stable, but the result is sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::SinglyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SinglyList::from_iter([5, 3, 8, 1]);
    /// list.insertion_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5, 8]);
    /// ```
    pub fn insertion_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut current = match self.head {
            Some(head) if self.len > 1 => head,
            _ => return,
        };
        // SAFETY: the walk stays on live nodes of this list.
        unsafe {
            loop {
                let mut rest = current.as_ref().next;
                while let Some(node) = rest {
                    if compare(&current.as_ref().element, &node.as_ref().element)
                        == Ordering::Greater
                    {
                        swap_elements(current, node);
                    }
                    rest = node.as_ref().next;
                }
                current = match current.as_ref().next {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    /// Sorts with the merge sort algorithm, returning a new list.
    ///
    /// The input list is left untouched; *O*(*n* log *n*) comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::SinglyList;
    /// use std::iter::FromIterator;
    ///
    /// let list = SinglyList::from_iter([5, 3, 8, 1]);
    /// let sorted = list.merge_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(sorted), vec![1, 3, 5, 8]);
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn merge_sort_by<F>(&self, mut compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort_parts(self.clone(), &mut compare)
    }

    /// Sorts with the quicksort algorithm, returning a new list.
    ///
    /// First-element pivot, strict-less partition to the left, ties to the
    /// right. Recursion depth is capped at roughly `2 * log2(len)`; beyond
    /// the cap a sub-list is finished with the in-place pairwise sort. The
    /// input list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::SinglyList;
    /// use std::iter::FromIterator;
    ///
    /// let list = SinglyList::from_iter([5, 3, 8, 1]);
    /// let sorted = list.quick_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(sorted), vec![1, 3, 5, 8]);
    /// ```
    pub fn quick_sort_by<F>(&self, mut compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        quick_sort_parts(
            self.clone(),
            &mut compare,
            crate::doubly::sort::depth_limit(self.len()),
        )
    }
}

unsafe fn swap_elements<T>(mut a: NonNull<Node<T>>, mut b: NonNull<Node<T>>) {
    std::mem::swap(&mut a.as_mut().element, &mut b.as_mut().element)
}

/// A `SinglyList` under construction paired with its tail node, so repeated
/// appends stay *O*(1) despite the list itself having no tail pointer.
struct Appender<T> {
    list: SinglyList<T>,
    tail: Option<NonNull<Node<T>>>,
}

impl<T> Appender<T> {
    fn new() -> Self {
        Self {
            list: SinglyList::new(),
            tail: None,
        }
    }

    fn push(&mut self, elt: T) {
        // SAFETY: `tail` is the last node of `list` by construction.
        self.tail = unsafe { self.list.append_after(self.tail, elt) };
    }

    fn into_list(self) -> SinglyList<T> {
        self.list
    }
}

fn merge_sort_parts<T, F>(mut list: SinglyList<T>, compare: &mut F) -> SinglyList<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.len() < 2 {
        return list;
    }
    let mid = list.len() / 2;
    let mut left = Appender::new();
    while left.list.len() < mid {
        if let Some(elt) = list.pop_front() {
            left.push(elt);
        }
    }
    let left = merge_sort_parts(left.into_list(), compare);
    let right = merge_sort_parts(list, compare);
    merge(left, right, compare)
}

fn merge<T, F>(mut left: SinglyList<T>, mut right: SinglyList<T>, compare: &mut F) -> SinglyList<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = Appender::new();
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
            result.push(elt);
        }
    }
    result.into_list()
}

fn quick_sort_parts<T, F>(mut list: SinglyList<T>, compare: &mut F, depth: usize) -> SinglyList<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.len() < 2 {
        return list;
    }
    if depth == 0 {
        list.insertion_sort_by(|a, b| compare(a, b));
        return list;
    }
    let pivot = match list.pop_front() {
        Some(pivot) => pivot,
        None => return list,
    };
    let mut left = Appender::new();
    let mut right = Appender::new();
    while let Some(elt) = list.pop_front() {
        if compare(&elt, &pivot) == Ordering::Less {
            left.push(elt);
        } else {
            right.push(elt);
        }
    }
    let mut result = quick_sort_parts(left.into_list(), compare, depth - 1);
    let mut tail = result.back_node();
    // SAFETY: `tail` tracks the last node of `result` across appends.
    unsafe {
        tail = result.append_after(tail, pivot);
        let mut right = quick_sort_parts(right.into_list(), compare, depth - 1);
        while let Some(elt) = right.pop_front() {
            tail = result.append_after(tail, elt);
        }
    }
    result
}

/// An iterator over the elements of a `SinglyList`.
pub struct Iter<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a SinglyList<T>>,
}

impl<'a, T: Debug + 'a> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        let mut ptr = self.current;
        while let Some(node) = ptr {
            // SAFETY: every node reachable from `current` is a live node of
            // the borrowed list.
            let node = unsafe { node.as_ref() };
            f.field(&node.element);
            ptr = node.next;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: `current`, when present, is a live node of the borrowed
        // list.
        let node = unsafe { self.current?.as_ref() };
        self.current = node.next;
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `SinglyList`.
pub struct IterMut<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut SinglyList<T>>,
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: `current`, when present, is a live node of the mutably
        // borrowed list, and each node is yielded at most once.
        let node = unsafe { self.current?.as_mut() };
        self.current = node.next;
        self.len -= 1;
        Some(&mut node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `SinglyList`.
pub struct IntoIter<T> {
    list: SinglyList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for SinglyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // One scan for the current tail, then O(1) per appended element.
        let mut tail = self.back_node();
        for elt in iter {
            // SAFETY: `tail` tracks the last node of this list across
            // appends.
            tail = unsafe { self.append_after(tail, elt) };
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for SinglyList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Debug> Debug for SinglyList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for SinglyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for SinglyList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyList<T> {}

impl<T: Clone> Clone for SinglyList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for SinglyList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for SinglyList<T> {}

unsafe impl<T: Sync> Sync for SinglyList<T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T> From<SinglyList<T>> for DoublyList<T> {
    /// Rebuilds the chain as a doubly-linked list, preserving element order.
    fn from(list: SinglyList<T>) -> Self {
        list.into_iter().collect()
    }
}

impl<T> From<DoublyList<T>> for SinglyList<T> {
    /// Rebuilds the chain as a singly-linked list, preserving element order.
    fn from(list: DoublyList<T>) -> Self {
        list.into_iter().collect()
    }
}

// Ensure that `SinglyList` and its read-only iterator are covariant in their
// type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: SinglyList<&'static str>) -> SinglyList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::SinglyList;
    use crate::DoublyList;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    // Walks the chain to its `None` terminator and checks the reachable-node
    // count matches the cached `len`.
    fn check_chain<T>(list: &SinglyList<T>) {
        let mut count = 0;
        let mut current = list.head;
        while let Some(node) = current {
            current = unsafe { node.as_ref().next };
            count += 1;
        }
        assert!(current.is_none());
        assert_eq!(count, list.len());
    }

    #[test]
    fn list_create() {
        let mut list = SinglyList::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.push_front(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_front(), Some(1));
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
        let mut list = SinglyList::new();
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
    fn push_front_prepends() {
        let mut list = SinglyList::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    }

    #[test]
    fn push_back_appends() {
        let mut list = SinglyList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.len(), 3);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    }

    #[test]
    fn list_remove_and_search() {
        let mut list = SinglyList::from_iter([1, 2, 3, 2]);

        assert_eq!(list.position(&2), Some(1));
        assert!(list.contains(&3));
        assert!(!list.contains(&7));

        assert!(list.remove(&2));
        assert_eq!(list.len(), 3);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 3, 2]);

        assert!(!list.remove(&7));

        // removing the head relinks through `self.head`
        assert!(list.remove(&1));
        assert_eq!(list.front(), Some(&3));

        assert!(list.remove(&2));
        assert!(list.remove(&3));
        assert!(list.is_empty());
    }

    #[test]
    fn iter_and_iter_mut() {
        let mut list = SinglyList::from_iter(0..4);
        assert_eq!(list.iter().len(), 4);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 2, 3]);
        for element in list.iter_mut() {
            *element *= 2;
        }
        assert_eq!(Vec::from_iter(list), vec![0, 2, 4, 6]);
    }

    #[test]
    fn list_eq_and_clone() {
        let list = SinglyList::from_iter(0..5);
        let cloned = list.clone();
        assert_eq!(list, cloned);
        assert_ne!(list, SinglyList::from_iter(0..4));
    }

    #[test]
    fn converts_to_and_from_doubly() {
        let list = SinglyList::from_iter([1, 2, 3]);
        let doubly = DoublyList::from(list);
        assert_eq!(Vec::from_iter(doubly.iter().copied()), vec![1, 2, 3]);
        let back = SinglyList::from(doubly);
        assert_eq!(Vec::from_iter(back), vec![1, 2, 3]);
    }

    // Sorts `input` with every algorithm, checking the chain invariants of
    // each result before flattening them for comparison.
    fn sorted_vecs(input: &[i32]) -> Vec<Vec<i32>> {
        let list = SinglyList::from_iter(input.iter().copied());

        let mut bubble = list.clone();
        bubble.bubble_sort_by(i32::cmp);
        check_chain(&bubble);
        let mut selection = list.clone();
        selection.selection_sort_by(i32::cmp);
        check_chain(&selection);
        let mut insertion = list.clone();
        insertion.insertion_sort_by(i32::cmp);
        check_chain(&insertion);
        let merged = list.merge_sort_by(i32::cmp);
        check_chain(&merged);
        let quicked = list.quick_sort_by(i32::cmp);
        check_chain(&quicked);
        check_chain(&list);

        vec![
            Vec::from_iter(bubble),
            Vec::from_iter(selection),
            Vec::from_iter(insertion),
            Vec::from_iter(merged),
            Vec::from_iter(quicked),
        ]
    }

    #[test]
    fn all_algorithms_sort() {
        let input = [5, 3, 8, 1];
        for output in sorted_vecs(&input) {
            assert_eq!(output, vec![1, 3, 5, 8]);
        }
    }

    #[test]
    fn all_algorithms_handle_duplicates() {
        let input = [4, 2, 4, 1, 2, 4];
        let mut expected = input.to_vec();
        expected.sort();
        for output in sorted_vecs(&input) {
            assert_eq!(output, expected);
        }
    }

    #[test]
    fn trivial_inputs_are_unchanged() {
        for input in [&[][..], &[42][..]] {
            for output in sorted_vecs(input) {
                assert_eq!(output, input.to_vec());
            }
        }
    }

    #[test]
    fn sorted_input_stays_sorted() {
        let input = Vec::from_iter(0..20);
        for output in sorted_vecs(&input) {
            assert_eq!(output, input);
        }
    }

    #[test]
    fn quick_sort_survives_descending_input() {
        let list = SinglyList::from_iter((0..300).rev());
        let sorted = list.quick_sort_by(i32::cmp);
        assert_eq!(Vec::from_iter(sorted), Vec::from_iter(0..300));
    }

    #[test]
    fn merge_sort_leaves_input_untouched() {
        let list = SinglyList::from_iter([2, 1, 3]);
        let sorted = list.merge_sort_by(i32::cmp);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 1, 3]);
        assert_eq!(Vec::from_iter(sorted), vec![1, 2, 3]);
    }
}
