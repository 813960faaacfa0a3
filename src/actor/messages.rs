//! Message types for actor communication.
//!
//! These define the protocol between the viewport source, the resource
//! controllers and the board actor.

use crate::layout::Masonry;
use bitflags::bitflags;
use std::sync::Arc;

bitflags! {
    /// What caused a layout recomputation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Trigger: u8 {
        /// The item list was replaced or gained/lost an item.
        const ITEMS = 0b0000_0001;
        /// The viewport width changed.
        const VIEWPORT = 0b0000_0010;
    }
}

/// Events sent to the board actor.
#[derive(Debug, Clone)]
pub enum BoardEvent<R> {
    /// The viewport width changed.
    Viewport {
        /// New width in pixels.
        width: f64,
    },

    /// Replace the whole item list (initial load, reload, fetch failure).
    Replace(Vec<R>),

    /// Insert an item at the front (optimistic create).
    Prepend(R),

    /// Drop the front item (rollback of a failed create).
    ShiftFront,

    /// Remove the item at a position.
    Remove {
        /// Position in the current list.
        index: usize,
    },

    /// Remove the item with a backend id, wherever it currently sits.
    RemoveId {
        /// Backend id of the record.
        id: u64,
    },

    /// Stop the board actor.
    Shutdown,
}

/// A published layout together with the list it was balanced from.
#[derive(Debug)]
pub struct BoardSnapshot<R> {
    /// Item list at the time of the recomputation.
    pub items: Arc<Vec<R>>,
    /// Balanced columns of positions into `items`.
    pub masonry: Masonry,
    /// Why the layout was recomputed.
    pub trigger: Trigger,
    /// Recomputation counter, starting at zero for the initial layout.
    pub generation: u64,
}

impl<R> BoardSnapshot<R> {
    /// Columns of item references, left to right.
    pub fn columns(&self) -> Vec<Vec<&R>> {
        self.masonry.resolve(&self.items)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.masonry.column_count()
    }

    /// Viewport width the layout was computed for.
    pub const fn width(&self) -> f64 {
        self.masonry.width()
    }
}

impl<R> Clone for BoardSnapshot<R> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            masonry: self.masonry.clone(),
            trigger: self.trigger,
            generation: self.generation,
        }
    }
}
