//! Masonry: an index-based column layout produced by one balancing pass.
//!
//! Columns hold positions into the item list they were balanced from,
//! so a layout can be published alongside a shared item list without
//! cloning records.

/// One column of a masonry layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    /// Positions into the source item list, top to bottom.
    indices: Vec<usize>,
    /// Running sum of item weights.
    weight: u64,
}

impl Column {
    /// Create an empty column.
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
            weight: 0,
        }
    }

    /// Append an item position with its weight.
    pub fn push(&mut self, index: usize, weight: u64) {
        self.indices.push(index);
        self.weight = self.weight.saturating_add(weight);
    }

    /// Item positions in render order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of items in the column.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if the column has no items.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sum of item weights.
    pub const fn weight(&self) -> u64 {
        self.weight
    }

    /// Estimated height: total weight times item count.
    pub fn score(&self) -> u64 {
        self.weight.saturating_mul(self.indices.len() as u64)
    }
}

/// A complete balanced layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Masonry {
    columns: Vec<Column>,
    /// Viewport width the layout was computed for.
    width: f64,
}

impl Masonry {
    /// Create a layout of `count` empty columns.
    pub fn new(count: usize, width: f64) -> Self {
        Self {
            columns: vec![Column::new(); count],
            width,
        }
    }

    /// Columns left to right.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Viewport width this layout was computed for.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Total number of placed items.
    pub fn item_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Index of the lowest-scoring column; ties go to the leftmost.
    pub fn shortest(&self) -> Option<usize> {
        self.columns
            .iter()
            .enumerate()
            .min_by_key(|(_, column)| column.score())
            .map(|(index, _)| index)
    }

    /// Append an item to the shortest column, returning that column.
    ///
    /// Returns `None` only for a layout with zero columns.
    pub fn place(&mut self, index: usize, weight: u64) -> Option<usize> {
        let target = self.shortest()?;
        self.columns[target].push(index, weight);
        Some(target)
    }

    /// Column holding the item at `index`, if placed.
    pub fn column_of(&self, index: usize) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.indices.contains(&index))
    }

    /// Resolve positions against the item list the layout was built from.
    ///
    /// Positions outside `items` are skipped.
    pub fn resolve<'a, T>(&self, items: &'a [T]) -> Vec<Vec<&'a T>> {
        self.columns
            .iter()
            .map(|column| column.indices.iter().filter_map(|&i| items.get(i)).collect())
            .collect()
    }
}
