use crate::doubly::{DoublyList, Node};
use std::cmp::Ordering;
use std::ptr::NonNull;

impl<T> DoublyList<T> {
    /// Sorts the list in place with the bubble sort algorithm.
    ///
    /// Repeated passes swap the elements of adjacent nodes whenever the
    /// comparator says the left one belongs after the right one. A pass
    /// without swaps terminates the sort, and each completed pass shrinks
    /// the unsorted suffix by one. Node identities are preserved; only
    /// element values move.
    ///
    /// # Complexity
    ///
    /// *O*(*n*²) worst case, *O*(*n*) on already sorted input.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([5, 3, 8, 1]);
    /// list.bubble_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5, 8]);
    /// ```
    pub fn bubble_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return;
        }
        // SAFETY: `front..ghost` is the full live range of a non-trivial list.
        unsafe { bubble_sort_range(self.front_node(), self.ghost_node(), &mut compare) }
    }

    /// Sorts the list in place with the selection sort algorithm.
    ///
    /// For each position, the remaining suffix is scanned for the minimum
    /// element under the comparator, which is then swapped into place.
    /// Not stable; always *O*(*n*²) comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([5, 3, 8, 1]);
    /// list.selection_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5, 8]);
    /// ```
    pub fn selection_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return;
        }
        // SAFETY: `front..ghost` is the full live range of a non-trivial list.
        unsafe { selection_sort_range(self.front_node(), self.ghost_node(), &mut compare) }
    }

    /// Sorts the list in place with a self-selecting insertion sort variant.
    ///
    /// For each node, every later element that compares before it is swapped
    /// into the current position, keeping the lesser value in place. This is
    /// not textbook insertion sort: it performs *O*(*n*²) comparisons
    /// unconditionally and is not stable, but converges to sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyList::from_iter([5, 3, 8, 1]);
    /// list.insertion_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5, 8]);
    /// ```
    pub fn insertion_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return;
        }
        // SAFETY: `front..ghost` is the full live range of a non-trivial list.
        unsafe { pairwise_sort_range(self.front_node(), self.ghost_node(), &mut compare) }
    }

    /// Sorts with the merge sort algorithm, returning a new list.
    ///
    /// The list is split at `len / 2` into two freshly built sub-lists,
    /// each is sorted recursively, and the halves are merged by repeatedly
    /// appending the comparator-lesser head. The input list is left
    /// untouched; discarding it when no longer needed is the caller's
    /// responsibility.
    ///
    /// # Complexity
    ///
    /// *O*(*n* log *n*) comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyList::from_iter([5, 3, 8, 1]);
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
    /// The first element is the pivot; strictly lesser elements are
    /// partitioned into a left sub-list and everything else (ties included)
    /// into a right one, each sorted recursively and concatenated around the
    /// pivot. The input list is left untouched.
    ///
    /// Recursion depth is capped at roughly `2 * log2(len)`; beyond the cap
    /// a sub-list is finished with the in-place pairwise sort, so adversarial
    /// inputs degrade to *O*(*n*²) comparisons without exhausting the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsort::DoublyList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyList::from_iter([5, 3, 8, 1]);
    /// let sorted = list.quick_sort_by(i32::cmp);
    /// assert_eq!(Vec::from_iter(sorted), vec![1, 3, 5, 8]);
    /// ```
    pub fn quick_sort_by<F>(&self, mut compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        quick_sort_parts(self.clone(), &mut compare, depth_limit(self.len()))
    }
}

/// Maximum quicksort recursion depth for a list of `len` elements, roughly
/// twice the depth of a perfectly balanced partition tree.
pub(crate) fn depth_limit(len: usize) -> usize {
    let log2 = (usize::BITS - 1 - len.max(1).leading_zeros()) as usize;
    2 * log2 + 1
}

unsafe fn swap_elements<T>(mut a: NonNull<Node<T>>, mut b: NonNull<Node<T>>) {
    std::mem::swap(&mut a.as_mut().element, &mut b.as_mut().element)
}

/// Bubble sort over the node range `start..end`.
///
/// It is unsafe because it does not check whether `start..end` is a valid
/// non-trivial range of a list. The caller must guarantee the range holds at
/// least two nodes.
unsafe fn bubble_sort_range<T, F>(
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    compare: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    // `stop` is one past the settled suffix; it starts at `end` and walks
    // backwards one node per pass.
    let mut stop = end;
    loop {
        let mut swapped = false;
        let mut current = start;
        while current.as_ref().next != stop {
            let next = current.as_ref().next;
            if compare(&current.as_ref().element, &next.as_ref().element) == Ordering::Greater {
                swap_elements(current, next);
                swapped = true;
            }
            current = next;
        }
        stop = current;
        if !swapped {
            break;
        }
    }
}

/// Selection sort over the node range `start..end`.
///
/// Same range contract as [`bubble_sort_range`].
unsafe fn selection_sort_range<T, F>(
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    compare: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut current = start;
    while current.as_ref().next != end {
        let mut min = current;
        let mut rest = current.as_ref().next;
        while rest != end {
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

/// The self-selecting pairwise sort over the node range `start..end`.
///
/// Same range contract as [`bubble_sort_range`].
unsafe fn pairwise_sort_range<T, F>(
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    compare: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut current = start;
    while current != end {
        let mut rest = current.as_ref().next;
        while rest != end {
            if compare(&current.as_ref().element, &rest.as_ref().element) == Ordering::Greater {
                swap_elements(current, rest);
            }
            rest = rest.as_ref().next;
        }
        current = current.as_ref().next;
    }
}

fn merge_sort_parts<T, F>(mut list: DoublyList<T>, compare: &mut F) -> DoublyList<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.len() < 2 {
        return list;
    }
    let mid = list.len() / 2;
    let mut left = DoublyList::new();
    while left.len() < mid {
        if let Some(elt) = list.pop_front() {
            left.push_back(elt);
        }
    }
    let left = merge_sort_parts(left, compare);
    let right = merge_sort_parts(list, compare);
    merge(left, right, compare)
}

fn merge<T, F>(mut left: DoublyList<T>, mut right: DoublyList<T>, compare: &mut F) -> DoublyList<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = DoublyList::new();
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

fn quick_sort_parts<T, F>(mut list: DoublyList<T>, compare: &mut F, depth: usize) -> DoublyList<T>
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
    let mut left = DoublyList::new();
    let mut right = DoublyList::new();
    while let Some(elt) = list.pop_front() {
        if compare(&elt, &pivot) == Ordering::Less {
            left.push_back(elt);
        } else {
            right.push_back(elt);
        }
    }
    let mut result = quick_sort_parts(left, compare, depth - 1);
    result.push_back(pivot);
    result.append(&mut quick_sort_parts(right, compare, depth - 1));
    result
}

#[cfg(test)]
mod tests {
    use crate::doubly::check_links;
    use crate::DoublyList;
    use std::iter::FromIterator;

    // Sorts `input` with every algorithm, checking the link invariants of
    // each result (the in-place lists and the fresh merge/quick ones) before
    // flattening them for comparison.
    fn sorted_vecs(input: &[i32]) -> Vec<Vec<i32>> {
        let list = DoublyList::from_iter(input.iter().copied());

        let mut bubble = list.clone();
        bubble.bubble_sort_by(i32::cmp);
        check_links(&bubble);
        let mut selection = list.clone();
        selection.selection_sort_by(i32::cmp);
        check_links(&selection);
        let mut insertion = list.clone();
        insertion.insertion_sort_by(i32::cmp);
        check_links(&insertion);
        let merged = list.merge_sort_by(i32::cmp);
        check_links(&merged);
        let quicked = list.quick_sort_by(i32::cmp);
        check_links(&quicked);
        check_links(&list);

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
        let input = [9, 1, 8, 2, 7, 3, 6, 4, 5, 0];
        let mut expected = input.to_vec();
        expected.sort();
        for output in sorted_vecs(&input) {
            assert_eq!(output, expected);
        }
    }

    #[test]
    fn all_algorithms_handle_duplicates() {
        let input = [3, 1, 3, 2, 1, 3];
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
    fn reverse_comparator_sorts_descending() {
        let mut list = DoublyList::from_iter([1, 5, 2, 4, 3]);
        list.bubble_sort_by(|a, b| b.cmp(a));
        assert_eq!(Vec::from_iter(list), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn quick_sort_survives_descending_input() {
        // Descending input picks the maximum as pivot at every level, the
        // pathological case for first-element pivots.
        let list = DoublyList::from_iter((0..500).rev());
        let sorted = list.quick_sort_by(i32::cmp);
        assert_eq!(Vec::from_iter(sorted), Vec::from_iter(0..500));
    }

    #[test]
    fn merge_sort_leaves_input_untouched() {
        let list = DoublyList::from_iter([2, 1, 3]);
        let sorted = list.merge_sort_by(i32::cmp);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 1, 3]);
        assert_eq!(Vec::from_iter(sorted), vec![1, 2, 3]);
    }

    #[test]
    fn sorting_empty_list_yields_empty_list() {
        let list = DoublyList::<i32>::new();
        assert!(list.merge_sort_by(i32::cmp).is_empty());
        assert!(list.quick_sort_by(i32::cmp).is_empty());
    }
}
