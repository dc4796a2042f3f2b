use std::iter::FusedIterator;

/// Number of permutations of `n` elements, or `None` if it does not fit in a `usize`.
///
/// ```
/// use shapematch_seq::factorial;
///
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(0), Some(1));
/// ```
pub fn factorial(n: usize) -> Option<usize> {
    (2..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// Iterator over every ordering of a list using [Heap's algorithm](https://en.wikipedia.org/wiki/Heap%27s_algorithm).
///
/// The first ordering produced is the input itself; every following ordering differs from the
/// previous one by a single swap. Each iterator owns its working copy, so two iterators over the
/// same input never interfere. Once exhausted the iterator stays exhausted.
///
/// Use [`Permutations::advance`] to borrow each ordering without allocating, or the [`Iterator`]
/// implementation to receive owned copies.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    // current ordering, permuted in place
    working: Vec<T>,
    // Heap's per-level swap counters
    control: Vec<usize>,
    index: usize,
    started: bool,
    emitted: usize,
}

impl<T> Permutations<T> {
    /// Create a new generator over `items`.
    pub fn new(items: Vec<T>) -> Self {
        let n = items.len();
        Self {
            working: items,
            control: vec![0; n],
            index: 1,
            started: false,
            emitted: 0,
        }
    }

    /// Step to the next ordering and borrow it.
    ///
    /// Returns `None` once all `n!` orderings have been produced.
    pub fn advance(&mut self) -> Option<&[T]> {
        if !self.started {
            self.started = true;
            self.emitted += 1;
            return Some(&self.working);
        }

        let n = self.working.len();
        while self.index < n {
            let i = self.index;
            if self.control[i] < i {
                // zero-based: even levels swap with the head, odd levels with their counter
                if i % 2 == 0 {
                    self.working.swap(0, i);
                } else {
                    self.working.swap(self.control[i], i);
                }
                self.control[i] += 1;
                self.index = 1;
                self.emitted += 1;
                return Some(&self.working);
            }

            self.control[i] = 0;
            self.index += 1;
        }

        None
    }

    /// Number of orderings produced so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn remaining(&self) -> Option<usize> {
        if self.started && self.index >= self.working.len() {
            return Some(0);
        }
        factorial(self.working.len()).map(|total| total - self.emitted)
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[T]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

/// All orderings of a copy of `items`.
pub fn permutations<T: Clone>(items: &[T]) -> Permutations<T> {
    Permutations::new(items.to_vec())
}

/// All orderings of the indices `0..n`, starting with the identity.
///
/// ```
/// use shapematch_seq::index_permutations;
///
/// let all: Vec<Vec<usize>> = index_permutations(3).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1, 2]);
/// ```
pub fn index_permutations(n: usize) -> Permutations<usize> {
    Permutations::new((0..n).collect())
}
