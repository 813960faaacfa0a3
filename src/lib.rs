//! # WinGrade Console
//!
//! Presentation model for the WinGrade VDI/VCenter management console.
//!
//! Resource cards are laid out in a responsive masonry grid: the viewport
//! width picks a column count, and each card is appended to the column
//! whose estimated height is currently lowest.
//!
//! ## Core Concepts
//!
//! - **Column balancing**: greedy, deterministic, recomputed from scratch
//! - **Resource services**: one REST collection mapped onto a transport
//! - **Board actor**: owns the card list, rebalances on every list or width event
//! - **Snackbar**: user-visible notices for every backend outcome
//!
//! ## Example
//!
//! ```rust
//! use wingrade::{ColumnBalancer, Vdi};
//!
//! let balancer = ColumnBalancer::<Vdi>::for_resources();
//! let vdis = vec![
//!     Vdi::new("aaa", "admin", "CORP"),
//!     Vdi::new("a", "admin", "CORP"),
//!     Vdi::new("aa", "admin", "CORP"),
//! ];
//!
//! let columns = balancer.layout(&vdis, 2000.0);
//! assert_eq!(columns.len(), 8);
//! assert_eq!(columns[2][0].address, "aa");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod config;
pub mod error;
pub mod ffi;
pub mod layout;
pub mod notify;
pub mod resource;
pub mod service;

// Re-exports for convenience
pub use actor::{Board, BoardActor, BoardEvent, BoardSnapshot, ResourceController, Trigger, ViewportActor};
pub use config::ConsoleConfig;
pub use error::{ConsoleError, LayoutError, Result};
pub use layout::{column_count_for_width, Breakpoints, Column, ColumnBalancer, Masonry, Tier};
pub use notify::{Notice, NoticeLevel, RecordingSnackbar, Snackbar, TracingSnackbar};
pub use resource::{Account, Resource, VCenter, VCenterDraft, Vdi, VdiDraft};
pub use service::{MemoryTransport, Method, Request, ResourceService, Response, Transport};
