//! ResourceService: one REST collection, five typed calls.

use super::transport::{Method, Request, Response, Transport};
use crate::error::{ConsoleError, Result};
use crate::resource::{Resource, Vdi};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// API root used when none is configured.
pub const DEFAULT_API_ROOT: &str = "/api/v1";

/// Typed access to the collection of `R` records.
pub struct ResourceService<R, T> {
    transport: T,
    api_root: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, T: Transport> ResourceService<R, T> {
    /// Create a service under [`DEFAULT_API_ROOT`].
    pub fn new(transport: T) -> Self {
        Self::with_api_root(transport, DEFAULT_API_ROOT)
    }

    /// Create a service under a custom API root.
    pub fn with_api_root(transport: T, api_root: &str) -> Self {
        Self {
            transport,
            api_root: api_root.trim_end_matches('/').to_string(),
            _resource: PhantomData,
        }
    }

    /// Path of the collection, e.g. `/api/v1/vdis/`.
    pub fn collection_path(&self) -> String {
        format!("{}/{}/", self.api_root, R::COLLECTION)
    }

    /// Path of a single record, e.g. `/api/v1/vdis/3/`.
    pub fn record_path(&self, id: u64) -> String {
        format!("{}/{}/{id}/", self.api_root, R::COLLECTION)
    }

    /// The underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET` the whole collection.
    pub fn all(&self) -> Result<Vec<R>> {
        self.fetch(Request::new(Method::Get, self.collection_path()))
    }

    /// `GET` one record.
    pub fn get(&self, id: u64) -> Result<R> {
        self.fetch(Request::new(Method::Get, self.record_path(id)))
    }

    /// `POST` a new record; returns the record as stored by the server.
    pub fn create(&self, draft: &R::Draft) -> Result<R> {
        let body = serde_json::to_value(draft)?;
        self.fetch(Request::new(Method::Post, self.collection_path()).with_body(body))
    }

    /// `PUT` a full replacement of a record.
    pub fn update(&self, id: u64, record: &R) -> Result<R> {
        let body = serde_json::to_value(record)?;
        self.fetch(Request::new(Method::Put, self.record_path(id)).with_body(body))
    }

    /// `DELETE` a record.
    pub fn destroy(&self, id: u64) -> Result<()> {
        self.execute(Request::new(Method::Delete, self.record_path(id)))
            .map(drop)
    }

    fn fetch<D: DeserializeOwned>(&self, request: Request) -> Result<D> {
        let body = self.execute(request)?;
        Ok(serde_json::from_value(body)?)
    }

    fn execute(&self, request: Request) -> Result<Value> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, kind = R::KIND, "sending request");

        let response = self.transport.send(request)?;
        check_status(&path, response).inspect_err(|err| {
            warn!(%method, %path, error = %err, "request failed");
        })
    }
}

impl<T: Transport> ResourceService<Vdi, T> {
    /// `GET` the VDIs owned by an account.
    pub fn for_account(&self, username: &str) -> Result<Vec<Vdi>> {
        let path = format!(
            "{}/accounts/{}/vdis/",
            self.api_root,
            urlencoding::encode(username)
        );
        self.fetch(Request::new(Method::Get, path))
    }
}

impl<R, T: Clone> Clone for ResourceService<R, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            api_root: self.api_root.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource, T> fmt::Debug for ResourceService<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("kind", &R::KIND)
            .field("api_root", &self.api_root)
            .finish_non_exhaustive()
    }
}

/// Map a response onto its body or a typed error.
fn check_status(path: &str, response: Response) -> Result<Value> {
    if response.is_success() {
        return Ok(response.body);
    }
    let message = response
        .error_message()
        .map_or_else(|| format!("request failed with status {}", response.status), str::to_string);

    Err(match response.status {
        404 => ConsoleError::NotFound {
            path: path.to_string(),
        },
        401 | 403 => ConsoleError::Unauthorized(message),
        status => ConsoleError::Status { status, message },
    })
}
