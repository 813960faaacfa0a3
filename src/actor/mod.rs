//! Actor Model: message-passing between viewport, controllers and boards.
//!
//! Layout recomputation is driven by explicit events rather than polling:
//! - **Viewport Actor**: polls terminal resizes, forwards widths to a board
//! - **Resource Controller**: talks to the backend, forwards list changes
//! - **Board Actor**: owns the list, rebalances, publishes snapshots
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   Viewport { width }   ┌──────────────┐  BoardSnapshot  ┌──────────┐
//! │Viewport Actor│ ─────────────────────▶ │              │ ──────────────▶ │ Renderer │
//! └──────────────┘                        │ Board Actor  │                 └──────────┘
//! ┌──────────────┐ Replace/Prepend/Remove │              │
//! │  Controller  │ ─────────────────────▶ │              │
//! └──────────────┘                        └──────────────┘
//!        │ Request/Response
//!        ▼
//! ┌──────────────┐
//! │  Transport   │
//! └──────────────┘
//! ```

mod board;
mod controller;
mod messages;
mod viewport;

pub use board::{Board, BoardActor};
pub use controller::ResourceController;
pub use messages::{BoardEvent, BoardSnapshot, Trigger};
pub use viewport::{current_width, terminal_width_px, ViewportActor};
