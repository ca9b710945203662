use crate::heap;
use std::cmp::Ordering;
use std::fmt;

/// Comparator used by [`TopN::by_ord`].
pub type OrdFn<T> = fn(&T, &T) -> Ordering;

/// A bounded accumulator that keeps the `capacity` greatest elements added to it.
///
/// Elements are appended unordered until the buffer is full. The first add past that point
/// arranges the buffer into a min-heap so the smallest retained element sits at the root and
/// every later element is either rejected with a single comparison or swapped in for it.
/// [`TopN::take`] hands back the retained elements in descending order and leaves the
/// accumulator empty, ready for another collection.
#[derive(Clone)]
pub struct TopN<T, F = OrdFn<T>> {
    buffer: Vec<T>,
    capacity: usize,
    cmp: F,
    heapified: bool,
}

impl<T, F> TopN<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Create an accumulator keeping the top `capacity` elements according to `cmp`.
    ///
    /// A capacity of zero is valid and discards every element.
    pub fn new(capacity: usize, cmp: F) -> Self {
        Self {
            buffer: Vec::new(),
            capacity,
            cmp,
            heapified: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// True once `capacity` elements are retained and every further add competes for a slot.
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.buffer.len() == self.capacity
    }

    /// Add an element.
    ///
    /// Below capacity the element is kept unconditionally. At capacity it is dropped if it is
    /// strictly less than the current minimum, otherwise it replaces that minimum.
    pub fn add(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.buffer.len() < self.capacity {
            self.buffer.push(item);
            return;
        }
        self.ensure_heap();
        if (self.cmp)(&item, &self.buffer[0]) == Ordering::Less {
            return;
        }
        // the root is the minimum of the retained set and item is not below it, so evicting the
        // root removes the minimum of retained ∪ {item}
        self.buffer[0] = item;
        heap::sift_down(&mut self.buffer, 0, &mut self.cmp);
    }

    /// The element the next accepted add would evict, or `None` while the buffer is still
    /// filling (including when the capacity is zero).
    pub fn threshold(&mut self) -> Option<&T> {
        if !self.is_full() {
            return None;
        }
        self.ensure_heap();
        self.buffer.first()
    }

    /// Whether [`TopN::add`] would currently retain `item`.
    pub fn would_retain(&mut self, item: &T) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.buffer.len() < self.capacity {
            return true;
        }
        self.ensure_heap();
        (self.cmp)(item, &self.buffer[0]) != Ordering::Less
    }

    /// Take the retained elements out, greatest first, resetting the accumulator.
    ///
    /// Elements that compare equal come out in unspecified order.
    #[tracing::instrument(skip_all, fields(capacity = self.capacity, retained = self.buffer.len()))]
    pub fn take(&mut self) -> Vec<T> {
        let cmp = &mut self.cmp;
        self.buffer.sort_unstable_by(|a, b| cmp(b, a));
        self.heapified = false;
        std::mem::take(&mut self.buffer)
    }

    fn ensure_heap(&mut self) {
        if self.heapified {
            return;
        }
        tracing::trace!(capacity = self.capacity, "heapifying full buffer");
        heap::heapify(&mut self.buffer, &mut self.cmp);
        self.heapified = true;
    }
}

impl<T: Ord> TopN<T> {
    /// Create an accumulator keeping the top `capacity` elements by their natural order.
    pub fn by_ord(capacity: usize) -> Self {
        Self::new(capacity, Ord::cmp)
    }
}

impl<T> TopN<T> {
    /// Create an accumulator ranking elements by `key`, like [`slice::sort_by_key`].
    pub fn by_key<K, G>(capacity: usize, mut key: G) -> TopN<T, impl FnMut(&T, &T) -> Ordering>
    where
        K: Ord,
        G: FnMut(&T) -> K,
    {
        TopN::new(capacity, move |a: &T, b: &T| key(a).cmp(&key(b)))
    }
}

impl<T, F> Extend<T> for TopN<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T, F> fmt::Debug for TopN<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopN")
            .field("capacity", &self.capacity)
            .field("len", &self.buffer.len())
            .field("heapified", &self.heapified)
            .finish()
    }
}
