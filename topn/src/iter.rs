use crate::TopN;
use std::cmp::Ordering;

/// Collect the greatest elements of an iterator through a [`TopN`].
pub trait TopNExt: Iterator + Sized {
    /// The `n` greatest items, greatest first.
    fn top_n(self, n: usize) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut top = TopN::by_ord(n);
        top.extend(self);
        top.take()
    }

    fn top_n_by<F>(self, n: usize, cmp: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut top = TopN::new(n, cmp);
        top.extend(self);
        top.take()
    }

    fn top_n_by_key<K, G>(self, n: usize, key: G) -> Vec<Self::Item>
    where
        K: Ord,
        G: FnMut(&Self::Item) -> K,
    {
        let mut top = TopN::by_key(n, key);
        top.extend(self);
        top.take()
    }
}

impl<I: Iterator> TopNExt for I {}
