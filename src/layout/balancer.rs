//! ColumnBalancer: greedy masonry balancing over a responsive column count.
//!
//! Each item is appended, in input order, to whichever column currently
//! has the lowest score, where a column's score is the sum of its item
//! weights multiplied by its item count. This is an online heuristic, not
//! an optimal bin-packing. Ties resolve to the leftmost column, which makes
//! the result fully deterministic for a given item list and width.

use super::breakpoints::Breakpoints;
use super::masonry::Masonry;
use super::weight::utf16_len;
use crate::resource::Resource;
use std::fmt;
use std::marker::PhantomData;

/// Plain function weigher, the default for resource records.
pub type WeighFn<T> = fn(&T) -> usize;

/// Balances items into columns using a weight extraction function.
pub struct ColumnBalancer<T, W = WeighFn<T>> {
    breakpoints: Breakpoints,
    weigh: W,
    _item: PhantomData<fn(&T)>,
}

impl<T, W> ColumnBalancer<T, W>
where
    W: Fn(&T) -> usize,
{
    /// Create a balancer with the default breakpoints.
    pub fn new(weigh: W) -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            weigh,
            _item: PhantomData,
        }
    }

    /// Replace the breakpoint table.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// The breakpoint table in use.
    pub const fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Number of columns for a viewport width. Always at least one.
    pub fn column_count(&self, width: f64) -> usize {
        self.breakpoints.columns_for_width(width)
    }

    /// Weight of a single item.
    #[inline]
    pub fn weigh(&self, item: &T) -> u64 {
        (self.weigh)(item) as u64
    }

    /// Score a column: total item weight times item count.
    pub fn score_column<'a, I>(&self, column: I) -> u64
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let (sum, count) = column
            .into_iter()
            .fold((0u64, 0u64), |(sum, count), item| {
                (sum.saturating_add(self.weigh(item)), count + 1)
            });
        sum.saturating_mul(count)
    }

    /// Index of the lowest-scoring column, leftmost on ties.
    ///
    /// Returns `None` when `columns` is empty.
    pub fn shortest_column(&self, columns: &[Vec<&T>]) -> Option<usize> {
        columns
            .iter()
            .enumerate()
            .min_by_key(|(_, column)| self.score_column(column.iter().copied()))
            .map(|(index, _)| index)
    }

    /// Balance items into an index-based layout.
    pub fn plan(&self, items: &[T], width: f64) -> Masonry {
        let mut masonry = Masonry::new(self.column_count(width), width);
        for (index, item) in items.iter().enumerate() {
            let placed = masonry.place(index, self.weigh(item));
            debug_assert!(placed.is_some(), "breakpoints yield at least one column");
        }
        masonry
    }

    /// Balance items into columns of references.
    pub fn layout<'a>(&self, items: &'a [T], width: f64) -> Vec<Vec<&'a T>> {
        self.plan(items, width).resolve(items)
    }
}

impl<R: Resource> ColumnBalancer<R> {
    /// Balancer weighing records by the UTF-16 length of their address.
    pub fn for_resources() -> Self {
        Self::new(address_weight::<R>)
    }
}

impl<R: Resource> Default for ColumnBalancer<R> {
    fn default() -> Self {
        Self::for_resources()
    }
}

fn address_weight<R: Resource>(item: &R) -> usize {
    utf16_len(item.weight_text())
}

impl<T, W: Clone> Clone for ColumnBalancer<T, W> {
    fn clone(&self) -> Self {
        Self {
            breakpoints: self.breakpoints.clone(),
            weigh: self.weigh.clone(),
            _item: PhantomData,
        }
    }
}

impl<T, W> fmt::Debug for ColumnBalancer<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnBalancer")
            .field("breakpoints", &self.breakpoints)
            .finish_non_exhaustive()
    }
}
