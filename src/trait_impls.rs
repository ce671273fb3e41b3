use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::Index;
use std::ops::IndexMut;

use super::CircularArray;
use super::iter::{IntoIter, Iter, IterMut};

impl<T> Clone for CircularArray<T>
    where T: Clone
{
    fn clone(&self) -> CircularArray<T> {
        CircularArray {
            xs: self.xs.clone(),
            head: self.head,
        }
    }
}

impl<T> Default for CircularArray<T> {
    #[inline]
    fn default() -> CircularArray<T> {
        CircularArray::new()
    }
}

impl<T> PartialEq for CircularArray<T>
    where T: PartialEq
{
    fn eq(&self, other: &CircularArray<T>) -> bool {
        // Heads may split the two buffers at different slots, so compare in
        // logical order rather than slice by slice.
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for CircularArray<T> where T: Eq {}

impl<'b, T> PartialEq<&'b [T]> for CircularArray<T>
    where T: PartialEq
{
    fn eq(&self, other: &&'b [T]) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (first, second) = self.as_slices();
        let (other_first, other_second) = other.split_at(first.len());
        first == other_first && second == other_second
    }
}

impl<T> PartialEq<Vec<T>> for CircularArray<T>
    where T: PartialEq
{
    #[inline]
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == &other[..]
    }
}

impl<T> PartialOrd for CircularArray<T>
    where T: PartialOrd
{
    fn partial_cmp(&self, other: &CircularArray<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for CircularArray<T>
    where T: Ord
{
    #[inline]
    fn cmp(&self, other: &CircularArray<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for CircularArray<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        // Elements one by one, so that the split point between the two
        // slices does not leak into the hash.
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

impl<T> Index<usize> for CircularArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(elem) => elem,
            None => {
                panic!("index out of bounds: the len is {} but the index is {}",
                       self.len(),
                       index)
            }
        }
    }
}

impl<T> IndexMut<usize> for CircularArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(elem) => elem,
            None => {
                panic!("index out of bounds: the len is {} but the index is {}",
                       len,
                       index)
            }
        }
    }
}

impl<T> iter::FromIterator<T> for CircularArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut array = CircularArray::with_capacity(iter.size_hint().0);
        array.extend(iter);
        array
    }
}

impl<T> IntoIterator for CircularArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_logical_vec())
    }
}

impl<'a, T> IntoIterator for &'a CircularArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Extend the `CircularArray` with an iterator.
///
/// Each element is appended at the end of the current rotation, in order.
impl<T> Extend<T> for CircularArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.append(elt);
        }
    }
}

impl<T> fmt::Debug for CircularArray<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Prints the elements in logical order, one per line.
impl<T> fmt::Display for CircularArray<T>
    where T: fmt::Display
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for elem in self {
            writeln!(f, "{}", elem)?;
        }
        Ok(())
    }
}
