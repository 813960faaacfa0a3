//! Service module: REST collections mapped onto a pluggable transport.
//!
//! The console never speaks HTTP itself. A [`Transport`] delivers
//! [`Request`]s and returns [`Response`]s; [`ResourceService`] turns one
//! collection's verbs into typed calls and maps failure statuses onto
//! [`ConsoleError`](crate::ConsoleError) variants.

mod memory;
mod resources;
mod transport;

pub use memory::MemoryTransport;
pub use resources::{ResourceService, DEFAULT_API_ROOT};
pub use transport::{Method, Request, Response, Transport};
