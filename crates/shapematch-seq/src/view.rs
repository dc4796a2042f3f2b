use std::iter::FusedIterator;
use std::ops::Index;

/// Error types for building sequence views.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ViewError {
    /// An index table must have one entry per element of the viewed sequence.
    #[error("Index table has {indices_len} entries but the sequence has {source_len} elements")]
    MismatchedLengths {
        /// Length of the viewed sequence
        source_len: usize,
        /// Length of the index table
        indices_len: usize,
    },

    /// An index table entry points past the end of the viewed sequence.
    #[error("Index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Length of the viewed sequence
        len: usize,
    },
}

/// A fixed-length, index-addressable sequence whose elements may be computed on demand.
///
/// Views hand out elements by value so that adapters such as [`Mapped`] can produce them lazily.
/// Slices, arrays and vectors are views over their own elements, and every adapter in this module
/// is itself a view, so adapters compose without copying the backing data.
///
/// Accessors are named `at`, `view_iter` and `collect_vec` so the inherent `get`, `iter` and
/// `to_vec` of slices and vectors keep returning references while the trait is in scope.
///
/// ```
/// use shapematch_seq::SeqView;
///
/// let values = [10, 20, 30];
/// let order = [2, 0, 1];
/// let view = values.remapped(&order)?;
/// assert_eq!(view.collect_vec(), vec![30, 10, 20]);
/// # Ok::<(), shapematch_seq::ViewError>(())
/// ```
pub trait SeqView {
    /// Element type produced by the view.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn at(&self, index: usize) -> Option<Self::Item>;

    /// Whether the view has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the elements in order.
    fn view_iter(&self) -> ViewIter<'_, Self> {
        ViewIter {
            view: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Collect the elements into a vector.
    fn collect_vec(&self) -> Vec<Self::Item> {
        self.view_iter().collect()
    }

    /// View the elements in the order given by `indices`: element `i` of the result is
    /// element `indices[i]` of `self`.
    fn remapped<'a>(&'a self, indices: &'a [usize]) -> Result<Remapped<'a, Self>, ViewError> {
        Remapped::new(self, indices)
    }

    /// View the elements transformed by `map`.
    fn mapped<U, F>(&self, map: F) -> Mapped<'_, Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Mapped { source: self, map }
    }

    /// View `self` followed by `other`.
    fn concatenated<'a, R>(&'a self, other: &'a R) -> Concat<'a, Self, R>
    where
        R: SeqView<Item = Self::Item> + ?Sized,
    {
        Concat {
            left: self,
            right: other,
        }
    }
}

impl<T: Clone> SeqView for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }
}

impl<T: Clone, const N: usize> SeqView for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

impl<T: Clone> SeqView for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

impl<V: SeqView + ?Sized> SeqView for &V {
    type Item = V::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&self, index: usize) -> Option<Self::Item> {
        (**self).at(index)
    }
}

/// Iterator over the elements of a [`SeqView`].
#[derive(Debug)]
pub struct ViewIter<'a, V: ?Sized> {
    view: &'a V,
    front: usize,
    back: usize,
}

impl<V: SeqView + ?Sized> Iterator for ViewIter<'_, V> {
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.view.at(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<V: SeqView + ?Sized> DoubleEndedIterator for ViewIter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.view.at(self.back)
    }
}

impl<V: SeqView + ?Sized> ExactSizeIterator for ViewIter<'_, V> {}

impl<V: SeqView + ?Sized> FusedIterator for ViewIter<'_, V> {}

/// Index-remapped view: element `i` is `source[indices[i]]`.
#[derive(Debug)]
pub struct Remapped<'a, V: ?Sized> {
    source: &'a V,
    indices: &'a [usize],
}

impl<'a, V: SeqView + ?Sized> Remapped<'a, V> {
    /// Create a remapped view, checking that `indices` has one in-range entry per element.
    pub fn new(source: &'a V, indices: &'a [usize]) -> Result<Self, ViewError> {
        let len = source.len();
        if indices.len() != len {
            return Err(ViewError::MismatchedLengths {
                source_len: len,
                indices_len: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(ViewError::IndexOutOfBounds { index, len });
        }
        Ok(Self { source, indices })
    }

    /// The index table of the view.
    pub fn indices(&self) -> &'a [usize] {
        self.indices
    }
}

impl<V: ?Sized> Clone for Remapped<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized> Copy for Remapped<'_, V> {}

impl<V: SeqView + ?Sized> SeqView for Remapped<'_, V> {
    type Item = V::Item;

    fn len(&self) -> usize {
        self.indices.len()
    }

    fn at(&self, index: usize) -> Option<Self::Item> {
        self.indices
            .get(index)
            .and_then(|&inner| self.source.at(inner))
    }
}

impl<V: Index<usize> + ?Sized> Index<usize> for Remapped<'_, V> {
    type Output = V::Output;

    fn index(&self, index: usize) -> &Self::Output {
        &self.source[self.indices[index]]
    }
}

/// Element-mapped view: element `i` is `map(source[i])`, computed on every access.
pub struct Mapped<'a, V: ?Sized, F> {
    source: &'a V,
    map: F,
}

impl<V: ?Sized, F> std::fmt::Debug for Mapped<'_, V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapped").finish_non_exhaustive()
    }
}

impl<'a, V: SeqView + ?Sized, F> Mapped<'a, V, F> {
    /// Create a mapped view over `source`.
    pub fn new(source: &'a V, map: F) -> Self {
        Self { source, map }
    }
}

impl<V, F, U> SeqView for Mapped<'_, V, F>
where
    V: SeqView + ?Sized,
    F: Fn(V::Item) -> U,
{
    type Item = U;

    fn len(&self) -> usize {
        self.source.len()
    }

    fn at(&self, index: usize) -> Option<U> {
        self.source.at(index).map(&self.map)
    }
}

/// Concatenated view: all elements of `left` followed by all elements of `right`.
#[derive(Debug)]
pub struct Concat<'a, L: ?Sized, R: ?Sized> {
    left: &'a L,
    right: &'a R,
}

impl<L: ?Sized, R: ?Sized> Clone for Concat<'_, L, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ?Sized, R: ?Sized> Copy for Concat<'_, L, R> {}

impl<L, R> SeqView for Concat<'_, L, R>
where
    L: SeqView + ?Sized,
    R: SeqView<Item = L::Item> + ?Sized,
{
    type Item = L::Item;

    fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    fn at(&self, index: usize) -> Option<Self::Item> {
        let split = self.left.len();
        if index < split {
            self.left.at(index)
        } else {
            self.right.at(index - split)
        }
    }
}

impl<L, R, T> Index<usize> for Concat<'_, L, R>
where
    L: SeqView + Index<usize, Output = T> + ?Sized,
    R: Index<usize, Output = T> + ?Sized,
    T: ?Sized,
{
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let split = self.left.len();
        if index < split {
            &self.left[index]
        } else {
            &self.right[index - split]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_view() {
        let v = vec![1, 2, 3];
        assert_eq!(SeqView::len(&v), 3);
        assert_eq!(v.at(1), Some(2));
        assert_eq!(v.at(3), None);
        assert_eq!(v.as_slice().view_iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_std_accessors_still_borrow() {
        let v = vec![1, 2, 3];
        let arr = [4, 5];

        // slice methods keep handing out references with the trait in scope
        let doubled = v.iter().map(|&x| x * 2).collect::<Vec<_>>();
        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!(v.get(1), Some(&2));
        assert_eq!(arr.get(0), Some(&4));
        for (i, &x) in arr.iter().enumerate() {
            assert_eq!(x, arr[i]);
        }
        assert_eq!(v.to_vec(), vec![1, 2, 3]);
        assert_eq!(v.collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_remapped() -> Result<(), ViewError> {
        let values = ['a', 'b', 'c', 'd'];
        let order = [3, 1, 0, 2];
        let view = values.remapped(&order)?;
        assert_eq!(view.len(), 4);
        assert_eq!(view.at(0), Some('d'));
        assert_eq!(view[3], 'c');
        assert_eq!(view.collect_vec(), vec!['d', 'b', 'a', 'c']);
        assert_eq!(view.indices(), &order);
        assert_eq!(view.at(4), None);
        Ok(())
    }

    #[test]
    fn test_remapped_rejects_bad_tables() {
        let values = [1.0, 2.0];
        assert_eq!(
            values.remapped(&[0]).unwrap_err(),
            ViewError::MismatchedLengths {
                source_len: 2,
                indices_len: 1
            }
        );
        assert_eq!(
            values.remapped(&[0, 2]).unwrap_err(),
            ViewError::IndexOutOfBounds { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_remapped_composes() -> Result<(), ViewError> {
        let values = vec![10, 20, 30];
        let first = [2, 1, 0];
        let second = [1, 2, 0];
        let outer_source = values.remapped(&first)?;
        let outer = outer_source.remapped(&second)?;
        // outer[i] = values[first[second[i]]]
        assert_eq!(outer.collect_vec(), vec![20, 10, 30]);
        assert_eq!(outer[0], 20);
        Ok(())
    }

    #[test]
    fn test_mapped() {
        let values = [1, 2, 3];
        let offset = 10;
        let view = values.mapped(|v| v * 2 + offset);
        assert_eq!(view.len(), 3);
        assert_eq!(view.at(2), Some(16));
        assert_eq!(view.at(3), None);
        assert_eq!(view.view_iter().collect::<Vec<_>>(), vec![12, 14, 16]);
    }

    #[test]
    fn test_concat() {
        let left = vec![1, 2];
        let right = [3, 4, 5];
        let view = left.concatenated(&right);
        assert_eq!(view.len(), 5);
        assert_eq!(view.at(1), Some(2));
        assert_eq!(view.at(2), Some(3));
        assert_eq!(view.at(5), None);
        assert_eq!(view[4], 5);
        assert_eq!(view.collect_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_views() {
        let empty: [u8; 0] = [];
        assert!(empty.is_empty());
        assert!(empty.concatenated(&empty).is_empty());
        assert_eq!(empty.mapped(|v| v + 1).view_iter().next(), None);
    }

    #[test]
    fn test_iter_is_exact_size() {
        let values = [1, 2, 3, 4];
        let mut iter = SeqView::view_iter(&values);
        assert_eq!(iter.len(), 4);
        iter.next();
        iter.next_back();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    }
}
