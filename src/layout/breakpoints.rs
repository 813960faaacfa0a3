//! Breakpoints: the viewport width to column count step function.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Fallback column count for widths below every tier.
pub const MIN_COLUMNS: usize = 2;

/// One step of the breakpoint table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Smallest viewport width (inclusive) this tier applies to.
    pub min_width: f64,
    /// Number of columns laid out at this width.
    pub columns: usize,
}

impl Tier {
    /// Create a new tier.
    pub const fn new(min_width: f64, columns: usize) -> Self {
        Self { min_width, columns }
    }
}

/// Responsive column breakpoints.
///
/// Tiers are kept sorted by descending `min_width`, so lookup is a linear
/// scan for the first tier the width reaches. Widths below every tier
/// (including zero, negative and NaN) use the fallback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BreakpointsRepr", into = "BreakpointsRepr")]
pub struct Breakpoints {
    tiers: Vec<Tier>,
    fallback: usize,
}

impl Breakpoints {
    /// Build a breakpoint table.
    ///
    /// Tiers may be given in any order, but column counts must not shrink
    /// as the width grows, and the fallback must not exceed the narrowest
    /// tier.
    pub fn new(mut tiers: Vec<Tier>, fallback: usize) -> Result<Self, LayoutError> {
        if fallback == 0 {
            return Err(LayoutError::ZeroColumns);
        }
        for tier in &tiers {
            if tier.columns == 0 {
                return Err(LayoutError::ZeroColumns);
            }
            if !tier.min_width.is_finite() {
                return Err(LayoutError::NonFiniteWidth(tier.min_width));
            }
        }

        tiers.sort_by(|a, b| b.min_width.total_cmp(&a.min_width));
        if let Some(pair) = tiers.windows(2).find(|w| w[0].min_width == w[1].min_width) {
            return Err(LayoutError::DuplicateTier(pair[0].min_width));
        }
        if let Some(pair) = tiers.windows(2).find(|w| w[0].columns < w[1].columns) {
            return Err(LayoutError::DecreasingColumns {
                width: pair[0].min_width,
            });
        }
        if tiers.last().is_some_and(|narrowest| narrowest.columns < fallback) {
            return Err(LayoutError::DecreasingColumns { width: 0.0 });
        }

        Ok(Self { tiers, fallback })
    }

    /// Number of columns for the given viewport width.
    pub fn columns_for_width(&self, width: f64) -> usize {
        self.tiers
            .iter()
            .find(|tier| width >= tier.min_width)
            .map_or(self.fallback, |tier| tier.columns)
    }

    /// Largest column count any width can produce.
    pub fn max_columns(&self) -> usize {
        self.tiers
            .iter()
            .map(|tier| tier.columns)
            .fold(self.fallback, usize::max)
    }

    /// Tiers, widest first.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Column count below the narrowest tier.
    pub const fn fallback(&self) -> usize {
        self.fallback
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tiers: vec![Tier::new(1200.0, 8), Tier::new(992.0, 6), Tier::new(768.0, 4)],
            fallback: MIN_COLUMNS,
        }
    }
}

/// Column count for a viewport width using the default table.
///
/// | width       | columns |
/// |-------------|---------|
/// | >= 1200     | 8       |
/// | 992..1200   | 6       |
/// | 768..992    | 4       |
/// | < 768       | 2       |
pub fn column_count_for_width(width: f64) -> usize {
    if width >= 1200.0 {
        8
    } else if width >= 992.0 {
        6
    } else if width >= 768.0 {
        4
    } else {
        MIN_COLUMNS
    }
}

#[derive(Serialize, Deserialize)]
struct BreakpointsRepr {
    tiers: Vec<Tier>,
    #[serde(default = "default_fallback")]
    fallback: usize,
}

const fn default_fallback() -> usize {
    MIN_COLUMNS
}

impl TryFrom<BreakpointsRepr> for Breakpoints {
    type Error = LayoutError;

    fn try_from(repr: BreakpointsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.tiers, repr.fallback)
    }
}

impl From<Breakpoints> for BreakpointsRepr {
    fn from(breakpoints: Breakpoints) -> Self {
        Self {
            tiers: breakpoints.tiers,
            fallback: breakpoints.fallback,
        }
    }
}
