//! Layout module: responsive masonry balancing for resource cards.
//!
//! Layouts are recomputed wholesale whenever the item list or the viewport
//! width changes. There is no incremental update: a [`Masonry`] is a flat
//! list of columns holding positions into the item list.

mod balancer;
mod breakpoints;
mod masonry;
mod weight;

pub use balancer::{ColumnBalancer, WeighFn};
pub use breakpoints::{column_count_for_width, Breakpoints, Tier, MIN_COLUMNS};
pub use masonry::{Column, Masonry};
pub use weight::{display_width, utf16_len};
