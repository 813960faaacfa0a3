//! Transport: the request/response contract with the REST backend.

use crate::error::Result;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// HTTP verbs used by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a collection or record.
    Get,
    /// Create a record.
    Post,
    /// Replace a record.
    Put,
    /// Remove a record.
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// An outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    /// Verb.
    pub method: Method,
    /// Absolute path, e.g. `/api/v1/vdis/`.
    pub path: String,
    /// JSON body for `POST` and `PUT`.
    pub body: Option<Value>,
}

impl Request {
    /// Request without a body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A response from the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body (`Null` when empty).
    pub body: Value,
}

impl Response {
    /// Create a response.
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Check for a 2xx status.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Server-provided error text (`error` or `detail` field).
    pub fn error_message(&self) -> Option<&str> {
        ["error", "detail", "message"]
            .iter()
            .find_map(|key| self.body.get(key).and_then(Value::as_str))
    }
}

/// Delivers requests to the REST backend.
///
/// Implementations return `Err` only when the request could not be
/// delivered at all; HTTP failure statuses come back as a [`Response`].
pub trait Transport: Send + Sync {
    /// Send a request and wait for its response.
    fn send(&self, request: Request) -> Result<Response>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: Request) -> Result<Response> {
        (**self).send(request)
    }
}
