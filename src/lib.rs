//! A growable circular array.
//!
//! Elements are appended at the logical end of the current rotation and can
//! be read back by logical index in `O(1)`. Rotating the array by any amount,
//! in either direction and for any number of laps, is also `O(1)`: it only
//! moves the slot that is treated as index 0, never the elements themselves.
//!
//! Appending inserts the new element physically just before that slot, so it
//! costs a shift of the elements stored after it, like `Vec::insert`.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! circular-array = "0.1"
//! ```
//!
//! # Examples
//! ```
//! use circular_array::CircularArray;
//!
//! let mut circ = CircularArray::new();
//! circ.append("harry");
//! circ.append("hermione");
//! circ.append("ginny");
//! circ.append("ron");
//!
//! assert_eq!(circ.len(), 4);
//! assert_eq!(circ.get(2), Some(&"ginny"));
//! assert_eq!(circ.get(15), None);
//! ```
//!
//! # Rotate
//!
//! Positive amounts move the start of the array to higher indexes, negative
//! amounts to lower ones. Amounts larger than the length keep going around.
//!
//! ```
//! use circular_array::CircularArray;
//!
//! let mut circ: CircularArray<_> = vec!["harry", "hermione", "ginny", "ron"]
//!     .into_iter()
//!     .collect();
//!
//! circ.rotate(1);
//! assert_eq!(circ, vec!["hermione", "ginny", "ron", "harry"]);
//!
//! circ.rotate(-2);
//! assert_eq!(circ, vec!["ron", "harry", "hermione", "ginny"]);
//!
//! circ.rotate(-16);
//! assert_eq!(circ.get(1), Some(&"harry"));
//! ```
//!
//! # Append after rotation
//!
//! A new element always lands at the end of the current rotation.
//!
//! ```
//! use circular_array::CircularArray;
//!
//! let mut circ: CircularArray<_> = vec!["harry", "hermione", "ginny", "ron"]
//!     .into_iter()
//!     .collect();
//!
//! circ.rotate(-2);
//! circ.append("dobby");
//!
//! assert_eq!(circ, vec!["ginny", "ron", "harry", "hermione", "dobby"]);
//! ```
//!
//! # Iterator
//! ```
//! use circular_array::CircularArray;
//!
//! let mut circ: CircularArray<_> = (0..5).collect();
//! circ.rotate(3);
//!
//! let items: Vec<_> = circ.iter().cloned().collect();
//! assert_eq!(items, vec![3, 4, 0, 1, 2]);
//!
//! let items: Vec<_> = circ.into_iter().rev().collect();
//! assert_eq!(items, vec![2, 1, 0, 4, 3]);
//! ```

#![deny(missing_docs)]

use std::cmp;

use log::trace;

pub use odds::IndexRange as RangeArgument;

pub mod error;
mod iter;
pub mod selfcheck;
mod trait_impls;
mod utils;

pub use error::SelfCheckError;
pub use iter::{IntoIter, Iter, IterMut};
use utils::*;

/// `CircularArray` is a growable array whose start can be rotated in `O(1)`.
///
/// The elements live in one contiguous buffer. `head` is the physical slot
/// holding logical index 0, and logical index `i` maps to physical slot
/// `(head + i) % len`. An empty array has no head at all.
pub struct CircularArray<T> {
    xs: Vec<T>,
    head: Option<usize>,
}

impl<T> CircularArray<T> {
    /// Creates an empty `CircularArray`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let circ: CircularArray<usize> = CircularArray::new();
    /// assert!(circ.is_empty());
    /// ```
    #[inline]
    pub fn new() -> CircularArray<T> {
        CircularArray {
            xs: Vec::new(),
            head: None,
        }
    }

    /// Creates an empty `CircularArray` with space for at least `capacity`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let circ: CircularArray<u32> = CircularArray::with_capacity(10);
    /// assert!(circ.is_empty());
    /// assert!(circ.capacity() >= 10);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> CircularArray<T> {
        CircularArray {
            xs: Vec::with_capacity(capacity),
            head: None,
        }
    }

    /// Returns the number of elements the array can hold without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ = CircularArray::with_capacity(2);
    /// circ.extend(vec![1, 2, 3]);
    /// assert!(circ.capacity() >= 3);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.capacity()
    }

    /// Returns the number of elements in the `CircularArray`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ = CircularArray::new();
    /// assert_eq!(circ.len(), 0);
    /// circ.append(1);
    /// circ.rotate(5);
    /// assert_eq!(circ.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the array contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ = CircularArray::new();
    /// assert!(circ.is_empty());
    /// circ.append("a");
    /// assert!(!circ.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Maps a logical index to its physical slot.
    #[inline]
    fn slot(&self, index: usize) -> Option<usize> {
        let head = self.head?;
        let len = self.xs.len();
        if index < len {
            Some(wrap_add(head, index, len))
        } else {
            None
        }
    }

    /// Appends an element at the end of the current rotation.
    ///
    /// Every element already in the array keeps its logical index; the new
    /// one gets index `len() - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ = CircularArray::new();
    /// circ.append(1);
    /// circ.append(2);
    /// circ.rotate(1);
    /// circ.append(3);
    /// assert_eq!(circ, vec![2, 1, 3]);
    /// ```
    pub fn append(&mut self, element: T) {
        match self.head {
            None => {
                debug_assert!(self.xs.is_empty());
                self.xs.push(element);
                self.head = Some(0);
                trace!("append: first element, head=0");
            }
            Some(head) => {
                // Inserting at the head slot puts the element right before
                // logical index 0, which is the end of the rotation.
                self.xs.insert(head, element);
                self.head = Some(head + 1);
                trace!("append: slot={} head={}", head, head + 1);
            }
        }
    }

    /// Retrieves an element by logical index.
    ///
    /// Returns `None` if `index >= len()`. The index itself never wraps
    /// around; only [`rotate`](#method.rotate) does.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = vec![3, 4, 5].into_iter().collect();
    /// assert_eq!(circ.get(1), Some(&4));
    /// circ.rotate(-1);
    /// assert_eq!(circ.get(1), Some(&3));
    /// assert_eq!(circ.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot(index).map(|slot| &self.xs[slot])
    }

    /// Retrieves an element mutably by logical index.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = vec![3, 4, 5].into_iter().collect();
    /// circ.rotate(2);
    /// if let Some(elem) = circ.get_mut(0) {
    ///     *elem = 7;
    /// }
    ///
    /// assert_eq!(circ, vec![7, 3, 4]);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slot(index) {
            Some(slot) => Some(&mut self.xs[slot]),
            None => None,
        }
    }

    /// Provides a reference to the element at logical index 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(circ.front(), Some(&1));
    /// circ.rotate(-1);
    /// assert_eq!(circ.front(), Some(&3));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a reference to the last element of the current rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(circ.back(), Some(&3));
    /// circ.rotate(1);
    /// assert_eq!(circ.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    /// Rotates the start of the array by `delta` positions.
    ///
    /// A positive `delta` makes the element at logical index `delta` the new
    /// front; a negative one rotates the other way. Any amount is accepted
    /// and taken modulo the length. Rotating an empty array does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = vec![1, 2, 3, 4].into_iter().collect();
    /// circ.rotate(-17);
    /// assert_eq!(circ, vec![4, 1, 2, 3]);
    /// circ.rotate(17);
    /// assert_eq!(circ, vec![1, 2, 3, 4]);
    /// ```
    pub fn rotate(&mut self, delta: isize) {
        if let Some(head) = self.head {
            let new_head = wrap_shift(head, delta, self.xs.len());
            trace!("rotate: delta={} head {} -> {}", delta, head, new_head);
            self.head = Some(new_head);
        }
    }

    /// Swaps the elements at logical indices `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = vec![3, 4, 5].into_iter().collect();
    /// circ.rotate(1);
    /// circ.swap(0, 2);
    /// assert_eq!(circ, vec![3, 5, 4]);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) {
        match (self.slot(i), self.slot(j)) {
            (Some(ri), Some(rj)) => self.xs.swap(ri, rj),
            _ => {
                panic!("swap out of bounds: the len is {} but the indices are {} and {}",
                       self.len(),
                       i,
                       j)
            }
        }
    }

    /// Returns a front-to-back iterator in logical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = vec![5, 3, 4].into_iter().collect();
    /// circ.rotate(1);
    /// let b: &[_] = &[&3, &4, &5];
    /// let c: Vec<&i32> = circ.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.as_slices();
        Iter::new(first, second)
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = vec![5, 3, 4].into_iter().collect();
    /// circ.rotate(2);
    /// for num in circ.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(circ, vec![2, 3, 1]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.as_mut_slices();
        IterMut::new(first, second)
    }

    /// Returns an iterator over a sub-range of logical indices.
    ///
    /// # Panics
    ///
    /// Panics if the start of the range is greater than its end, or if the
    /// end is greater than the length of the array.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = (0..6).collect();
    /// circ.rotate(4);
    ///
    /// let middle: Vec<_> = circ.range(1..4).cloned().collect();
    /// assert_eq!(middle, vec![5, 0, 1]);
    ///
    /// let tail: Vec<_> = circ.range(3..).cloned().collect();
    /// assert_eq!(tail, vec![1, 2, 3]);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
        where R: RangeArgument<usize>
    {
        let len = self.len();
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end,
                "range start {} is greater than range end {}",
                start,
                end);
        assert!(end <= len, "range end {} is out of bounds for length {}", end, len);

        let (first, second) = self.as_slices();
        let split = first.len();
        let first = &first[cmp::min(start, split)..cmp::min(end, split)];
        let second = &second[start.saturating_sub(split)..end.saturating_sub(split)];
        Iter::new(first, second)
    }

    /// Returns a pair of slices which contain, in logical order, the contents
    /// of the `CircularArray`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = vec![0, 1, 2].into_iter().collect();
    /// assert_eq!(circ.as_slices(), (&[0][..], &[1, 2][..]));
    ///
    /// circ.rotate(2);
    /// assert_eq!(circ.as_slices(), (&[2, 0][..], &[1][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (second, first) = self.xs.split_at(self.head.unwrap_or(0));
        (first, second)
    }

    /// Returns a pair of mutable slices which contain, in logical order, the
    /// contents of the `CircularArray`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::CircularArray;
    ///
    /// let mut circ: CircularArray<_> = vec![0, 1, 2].into_iter().collect();
    /// circ.rotate(2);
    ///
    /// circ.as_mut_slices().0[0] = 42;
    /// circ.as_mut_slices().1[0] = 24;
    /// assert_eq!(circ, vec![42, 0, 24]);
    /// ```
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (second, first) = self.xs.split_at_mut(self.head.unwrap_or(0));
        (first, second)
    }

    /// Consumes the array, returning its elements in logical order.
    pub(crate) fn into_logical_vec(self) -> Vec<T> {
        let mut xs = self.xs;
        if let Some(head) = self.head {
            xs.rotate_left(head);
        }
        xs
    }
}
