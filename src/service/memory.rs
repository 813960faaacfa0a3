//! MemoryTransport: an in-process REST backend for tests and demos.
//!
//! Collections are keyed by path (`/api/v1/vdis/`) and hold raw JSON
//! records. Identifiers are assigned per collection on `POST`. Owner
//! listings (`/api/v1/accounts/{username}/vdis/`) filter the collection
//! by `author.username`.

use super::transport::{Method, Request, Response, Transport};
use crate::error::Result;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct State {
    collections: HashMap<String, Vec<Value>>,
    failures: VecDeque<Response>,
    log: Vec<Request>,
}

/// In-memory transport with failure injection and a request log.
#[derive(Default)]
pub struct MemoryTransport {
    state: Mutex<State>,
}

impl MemoryTransport {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the records of a collection.
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        self.lock().collections.insert(collection.to_string(), records);
    }

    /// Answer the next request with an error status instead of routing it.
    pub fn fail_next(&self, status: u16, message: &str) {
        self.lock()
            .failures
            .push_back(Response::new(status, json!({ "error": message })));
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.lock().log.clone()
    }

    /// Current records of a collection.
    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.lock()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for MemoryTransport {
    fn send(&self, request: Request) -> Result<Response> {
        let mut state = self.lock();
        state.log.push(request.clone());
        if let Some(failure) = state.failures.pop_front() {
            return Ok(failure);
        }
        Ok(route(&mut state.collections, request))
    }
}

fn collection_key(segments: &[&str]) -> String {
    format!("/{}/", segments.join("/"))
}

fn record_id(record: &Value) -> Option<u64> {
    record.get("id").and_then(Value::as_u64)
}

fn not_found() -> Response {
    Response::new(404, json!({ "detail": "Not found." }))
}

fn route(collections: &mut HashMap<String, Vec<Value>>, request: Request) -> Response {
    let path = request.path.clone();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if let Some(pos) = segments.iter().position(|s| *s == "accounts") {
        if segments.len() == pos + 3 && request.method == Method::Get {
            let mut key_segments = segments[..pos].to_vec();
            key_segments.push(segments[pos + 2]);
            let owner = urlencoding::decode(segments[pos + 1]).unwrap_or_default();
            let owned: Vec<Value> = collections
                .get(&collection_key(&key_segments))
                .map(|records| {
                    records
                        .iter()
                        .filter(|r| r.pointer("/author/username").and_then(Value::as_str) == Some(&*owner))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            return Response::new(200, Value::Array(owned));
        }
        return not_found();
    }

    if let Some((last, rest)) = segments.split_last() {
        if let Ok(id) = last.parse::<u64>() {
            let records = collections.entry(collection_key(rest)).or_default();
            return record_route(records, id, request);
        }
    }

    let records = collections.entry(collection_key(&segments)).or_default();
    collection_route(records, request)
}

fn collection_route(records: &mut Vec<Value>, request: Request) -> Response {
    match request.method {
        Method::Get => Response::new(200, Value::Array(records.clone())),
        Method::Post => {
            let Some(Value::Object(mut object)) = request.body else {
                return Response::new(400, json!({ "error": "expected a JSON object" }));
            };
            let id = records.iter().filter_map(record_id).max().unwrap_or(0) + 1;
            object.insert("id".to_string(), json!(id));
            let record = Value::Object(object);
            records.push(record.clone());
            Response::new(201, record)
        }
        Method::Put | Method::Delete => {
            Response::new(405, json!({ "detail": "Method not allowed." }))
        }
    }
}

fn record_route(records: &mut Vec<Value>, id: u64, request: Request) -> Response {
    let Some(position) = records.iter().position(|r| record_id(r) == Some(id)) else {
        return not_found();
    };

    match request.method {
        Method::Get => Response::new(200, records[position].clone()),
        Method::Put => {
            let Some(Value::Object(mut object)) = request.body else {
                return Response::new(400, json!({ "error": "expected a JSON object" }));
            };
            object.insert("id".to_string(), json!(id));
            records[position] = Value::Object(object);
            Response::new(200, records[position].clone())
        }
        Method::Delete => {
            records.remove(position);
            Response::new(204, Value::Null)
        }
        Method::Post => Response::new(405, json!({ "detail": "Method not allowed." })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_assigns_sequential_ids() {
        let transport = MemoryTransport::new();
        transport.seed("/api/v1/vdis/", vec![json!({"id": 7, "address": "x"})]);

        let response = transport
            .send(Request::new(Method::Post, "/api/v1/vdis/").with_body(json!({"address": "y"})))
            .unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.body["id"], 8);
        assert_eq!(transport.records("/api/v1/vdis/").len(), 2);
    }

    #[test]
    fn test_unknown_record_is_404() {
        let transport = MemoryTransport::new();
        let response = transport
            .send(Request::new(Method::Get, "/api/v1/vcenters/3/"))
            .unwrap();
        assert_eq!(response.status, 404);
    }

    #[test]
    fn test_failure_injection_is_one_shot() {
        let transport = MemoryTransport::new();
        transport.fail_next(500, "boom");

        let first = transport.send(Request::new(Method::Get, "/api/v1/vdis/")).unwrap();
        assert_eq!(first.status, 500);
        let second = transport.send(Request::new(Method::Get, "/api/v1/vdis/")).unwrap();
        assert_eq!(second.status, 200);
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_delete_removes_record() {
        let transport = MemoryTransport::new();
        transport.seed("/api/v1/vdis/", vec![json!({"id": 1, "address": "x"})]);
        let response = transport
            .send(Request::new(Method::Delete, "/api/v1/vdis/1/"))
            .unwrap();
        assert_eq!(response.status, 204);
        assert!(transport.records("/api/v1/vdis/").is_empty());
    }
}
