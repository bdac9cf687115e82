// STOR Rust SDK for the STOR Object Storage Service
// Copyright 2025 STOR Rust SDK Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An in-process STOR server for tests.
//!
//! Keeps buckets, objects, multipart uploads and archives in memory and speaks the same
//! HTTP/JSON dialect as the real service. Every request is recorded, and faults (a forced
//! status and body, or a delay) can be injected to exercise the client's error paths.

use axum::body::{Body, to_bytes};
use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

type Params = HashMap<String, String>;

/// A request as received by the mock server.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    /// Percent-encoded path, as sent on the wire
    pub path: String,
    pub query: Params,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

#[derive(Clone, Debug)]
struct Fault {
    status: StatusCode,
    body: String,
}

struct StoredObject {
    data: Bytes,
    content_type: String,
    etag: String,
    created_at: DateTime<Utc>,
}

struct StoredBucket {
    created_at: DateTime<Utc>,
    objects: BTreeMap<String, StoredObject>,
}

struct Upload {
    bucket: String,
    key: String,
    content_type: String,
    parts: BTreeMap<u32, (String, Bytes)>,
}

struct Archive {
    bucket: String,
    key: String,
    entries: Vec<(String, String)>,
    state: String,
}

#[derive(Default)]
struct Inner {
    buckets: BTreeMap<String, StoredBucket>,
    uploads: HashMap<String, Upload>,
    archives: HashMap<String, Archive>,
    requests: Vec<RecordedRequest>,
    faults: VecDeque<Fault>,
    delay: Option<Duration>,
}

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    inner: Arc<Mutex<Inner>>,
}

impl AppState {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("mock server state poisoned")
    }
}

/// Handle to a running mock server. The server stops when the handle is dropped.
pub struct MockServer {
    addr: SocketAddr,
    state: AppState,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Starts a server on an ephemeral local port that accepts `Bearer {api_key}`.
    pub async fn start(api_key: &str) -> Self {
        let state = AppState {
            api_key: Arc::from(api_key),
            inner: Arc::new(Mutex::new(Inner::default())),
        };
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let addr = listener.local_addr().expect("mock server has no address");
        let app = router(state.clone());
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                log::error!("mock server stopped: {e}");
            }
        });
        log::debug!("mock server listening on {addr}");
        MockServer {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.lock().requests.last().cloned()
    }

    pub fn clear_requests(&self) {
        self.state.lock().requests.clear();
    }

    /// The next request is answered with `status` and `body`, whatever it asks for.
    pub fn fail_next(&self, status: StatusCode, body: impl Into<String>) {
        self.state.lock().faults.push_back(Fault {
            status,
            body: body.into(),
        });
    }

    /// Holds every response back by `delay`.
    pub fn set_delay(&self, delay: Option<Duration>) {
        self.state.lock().delay = delay;
    }

    pub fn object_data(&self, bucket: &str, key: &str) -> Option<Bytes> {
        let inner = self.state.lock();
        let obj = inner.buckets.get(bucket)?.objects.get(key)?;
        Some(obj.data.clone())
    }

    pub fn bucket_exists(&self, bucket: &str) -> bool {
        self.state.lock().buckets.contains_key(bucket)
    }

    pub fn upload_count(&self) -> usize {
        self.state.lock().uploads.len()
    }

    /// Moves an archive to another processing state, e.g. `failed`.
    pub fn set_archive_state(&self, archive_id: &str, state: &str) {
        if let Some(archive) = self.state.lock().archives.get_mut(archive_id) {
            archive.state = state.to_string();
        }
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(service_handler))
        .route("/{bucket}", any(bucket_handler))
        .route("/{bucket}/{*key}", any(object_handler))
        .layer(middleware::from_fn_with_state(state.clone(), admit))
        .with_state(state)
}

/// Records the request, applies injected faults and checks the bearer token.
async fn admit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let body = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };
    let query = Query::<Params>::try_from_uri(&parts.uri)
        .map(|Query(q)| q)
        .unwrap_or_default();

    let (fault, delay) = {
        let mut inner = state.lock();
        inner.requests.push(RecordedRequest {
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            query,
            headers: parts.headers.clone(),
            body: body.clone(),
        });
        (inner.faults.pop_front(), inner.delay)
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    if let Some(fault) = fault {
        return (fault.status, fault.body).into_response();
    }

    let expected = format!("Bearer {}", state.api_key);
    let given = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if given != Some(expected.as_str()) {
        return error_response(
            StatusCode::UNAUTHORIZED,
            "InvalidCredentials",
            "the API key is missing or invalid",
        );
    }

    next.run(Request::from_parts(parts, Body::from(body))).await
}

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (status, Json(json!({ "code": code, "message": message }))).into_response()
}

fn no_such_bucket() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "NoSuchBucket",
        "the specified bucket does not exist",
    )
}

fn precondition_failed() -> Response {
    error_response(
        StatusCode::PRECONDITION_FAILED,
        "PreconditionFailed",
        "the object already exists",
    )
}

fn if_none_match(headers: &HeaderMap) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        == Some("*")
}

fn new_etag() -> String {
    format!("\"{}\"", Uuid::new_v4().simple())
}

fn bucket_json(name: &str, bucket: &StoredBucket) -> Value {
    json!({
        "name": name,
        "objects": bucket.objects.len(),
        "size": bucket.objects.values().map(|o| o.data.len()).sum::<usize>(),
        "createdAt": bucket.created_at.to_rfc3339(),
    })
}

fn object_json(key: &str, obj: &StoredObject) -> Value {
    json!({
        "key": key,
        "contentType": obj.content_type,
        "size": obj.data.len(),
        "createdAt": obj.created_at.to_rfc3339(),
    })
}

async fn service_handler(
    State(state): State<AppState>,
    method: Method,
    Query(q): Query<Params>,
) -> Response {
    if method != Method::GET {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    let start_after = q.get("start-after").map(String::as_str).unwrap_or_default();
    let max = q
        .get("max-buckets")
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(usize::MAX);

    let inner = state.lock();
    let mut buckets: Vec<Value> = inner
        .buckets
        .iter()
        .filter(|(name, _)| name.as_str() > start_after)
        .map(|(name, b)| bucket_json(name, b))
        .collect();
    let is_truncated = buckets.len() > max;
    buckets.truncate(max);
    Json(json!({ "buckets": buckets, "isTruncated": is_truncated })).into_response()
}

#[derive(Deserialize)]
struct KeyRef {
    key: String,
}

#[derive(Deserialize)]
struct DeleteRequest {
    objects: Vec<KeyRef>,
}

async fn bucket_handler(
    State(state): State<AppState>,
    method: Method,
    Path(bucket): Path<String>,
    Query(q): Query<Params>,
    body: Bytes,
) -> Response {
    let mut guard = state.lock();
    let inner = &mut *guard;
    match method {
        Method::PUT => {
            if inner.buckets.contains_key(&bucket) {
                return error_response(
                    StatusCode::CONFLICT,
                    "BucketAlreadyExists",
                    "the bucket already exists",
                );
            }
            let created = StoredBucket {
                created_at: Utc::now(),
                objects: BTreeMap::new(),
            };
            let resp = bucket_json(&bucket, &created);
            inner.buckets.insert(bucket, created);
            (StatusCode::CREATED, Json(resp)).into_response()
        }
        Method::DELETE => match inner.buckets.get(&bucket) {
            None => no_such_bucket(),
            Some(b) if !b.objects.is_empty() => error_response(
                StatusCode::CONFLICT,
                "BucketNotEmpty",
                "the bucket still contains objects",
            ),
            Some(_) => {
                inner.buckets.remove(&bucket);
                StatusCode::NO_CONTENT.into_response()
            }
        },
        Method::GET => match inner.buckets.get(&bucket) {
            None => no_such_bucket(),
            Some(b) => list_objects(&bucket, b, &q),
        },
        Method::POST if q.contains_key("delete") => {
            let Ok(req) = serde_json::from_slice::<DeleteRequest>(&body) else {
                return error_response(StatusCode::BAD_REQUEST, "MalformedJSON", "bad body");
            };
            let Some(b) = inner.buckets.get_mut(&bucket) else {
                return no_such_bucket();
            };
            let results: Vec<Value> = req
                .objects
                .into_iter()
                .map(|KeyRef { key }| match b.objects.remove(&key) {
                    Some(_) => json!({ "key": key, "deleted": true }),
                    None => json!({
                        "key": key,
                        "deleted": false,
                        "error": { "code": "NoSuchKey", "message": "the key does not exist" },
                    }),
                })
                .collect();
            Json(json!({ "results": results })).into_response()
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

fn list_objects(name: &str, bucket: &StoredBucket, q: &Params) -> Response {
    let max_keys = q
        .get("max-keys")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(1000);
    let prefix = q.get("prefix").map(String::as_str).unwrap_or_default();
    let delimiter = q.get("delimiter").map(String::as_str).unwrap_or_default();
    let start_after = q.get("start-after").map(String::as_str);

    let mut objects = Vec::new();
    let mut common_prefixes = BTreeSet::new();
    let mut is_truncated = false;
    for (key, obj) in &bucket.objects {
        if start_after.is_some_and(|s| key.as_str() <= s) || !key.starts_with(prefix) {
            continue;
        }
        if !delimiter.is_empty()
            && let Some(i) = key[prefix.len()..].find(delimiter)
        {
            common_prefixes.insert(key[..prefix.len() + i + delimiter.len()].to_string());
            continue;
        }
        if objects.len() == max_keys {
            is_truncated = true;
            break;
        }
        objects.push(object_json(key, obj));
    }

    Json(json!({
        "name": name,
        "isTruncated": is_truncated,
        "maxKeys": max_keys,
        "keyCount": objects.len(),
        "startAfter": start_after,
        "objects": objects,
        "commonPrefixes": common_prefixes,
    }))
    .into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartRef {
    etag: String,
    part_number: u32,
}

#[derive(Deserialize)]
struct CompleteRequest {
    parts: Vec<PartRef>,
}

#[derive(Deserialize)]
struct EntryRef {
    key: String,
    name: String,
}

#[derive(Deserialize)]
struct EntriesRequest {
    entries: Vec<EntryRef>,
}

async fn object_handler(
    State(state): State<AppState>,
    method: Method,
    Path((bucket, key)): Path<(String, String)>,
    Query(q): Query<Params>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut guard = state.lock();
    let inner = &mut *guard;
    let upload_id = q.get("upload-id");
    let archive_id = q.get("archive-id");

    match method {
        Method::GET if archive_id.is_some() => {
            match archive_id.and_then(|id| inner.archives.get(id).map(|a| (id, a))) {
                Some((id, a)) if a.bucket == bucket && a.key == key => {
                    Json(json!({ "id": id, "state": a.state, "type": "zip" })).into_response()
                }
                _ => StatusCode::NOT_FOUND.into_response(),
            }
        }
        Method::GET => {
            let Some(obj) = inner.buckets.get(&bucket).and_then(|b| b.objects.get(&key)) else {
                return StatusCode::NOT_FOUND.into_response();
            };
            (
                [
                    (header::CONTENT_TYPE, obj.content_type.clone()),
                    (header::ETAG, obj.etag.clone()),
                ],
                obj.data.clone(),
            )
                .into_response()
        }
        Method::PUT if upload_id.is_some() => {
            let Some(upload) = upload_id.and_then(|id| inner.uploads.get_mut(id)) else {
                return error_response(StatusCode::NOT_FOUND, "NoSuchUpload", "unknown upload");
            };
            let Some(part_number) = q.get("part-number").and_then(|v| v.parse::<u32>().ok())
            else {
                return error_response(StatusCode::BAD_REQUEST, "InvalidPart", "bad part number");
            };
            let etag = new_etag();
            upload.parts.insert(part_number, (etag.clone(), body));
            ([(header::ETAG, etag)], ()).into_response()
        }
        Method::PUT if archive_id.is_some() => {
            let Some(archive) = archive_id.and_then(|id| inner.archives.get_mut(id)) else {
                return error_response(StatusCode::NOT_FOUND, "NoSuchArchive", "unknown archive");
            };
            let Ok(req) = serde_json::from_slice::<EntriesRequest>(&body) else {
                return error_response(StatusCode::BAD_REQUEST, "MalformedJSON", "bad body");
            };
            archive
                .entries
                .extend(req.entries.into_iter().map(|e| (e.key, e.name)));
            StatusCode::OK.into_response()
        }
        Method::PUT => {
            let Some(b) = inner.buckets.get_mut(&bucket) else {
                return no_such_bucket();
            };
            if if_none_match(&headers) && b.objects.contains_key(&key) {
                return precondition_failed();
            }
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("application/octet-stream")
                .to_string();
            let etag = new_etag();
            b.objects.insert(
                key,
                StoredObject {
                    data: body,
                    content_type,
                    etag: etag.clone(),
                    created_at: Utc::now(),
                },
            );
            (StatusCode::NO_CONTENT, [(header::ETAG, etag)]).into_response()
        }
        Method::POST if q.contains_key("uploads") => {
            if !inner.buckets.contains_key(&bucket) {
                return no_such_bucket();
            }
            let upload_id = Uuid::new_v4().to_string();
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("application/octet-stream")
                .to_string();
            inner.uploads.insert(
                upload_id.clone(),
                Upload {
                    bucket: bucket.clone(),
                    key: key.clone(),
                    content_type,
                    parts: BTreeMap::new(),
                },
            );
            Json(json!({ "bucket": bucket, "key": key, "uploadId": upload_id })).into_response()
        }
        Method::POST if upload_id.is_some() => {
            complete_upload(inner, &bucket, &key, upload_id, &headers, &body)
        }
        Method::POST if q.contains_key("archives") => {
            if !inner.buckets.contains_key(&bucket) {
                return no_such_bucket();
            }
            if q.get("type").map(String::as_str) != Some("zip") {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "InvalidArchiveType",
                    "only zip archives are supported",
                );
            }
            let archive_id = Uuid::new_v4().to_string();
            inner.archives.insert(
                archive_id.clone(),
                Archive {
                    bucket: bucket.clone(),
                    key: key.clone(),
                    entries: Vec::new(),
                    state: "pending".into(),
                },
            );
            Json(json!({ "bucket": bucket, "key": key, "archiveId": archive_id })).into_response()
        }
        Method::POST if archive_id.is_some() => {
            let Some(archive) = archive_id.and_then(|id| inner.archives.get_mut(id)) else {
                return error_response(StatusCode::NOT_FOUND, "NoSuchArchive", "unknown archive");
            };
            let Some(b) = inner.buckets.get_mut(&archive.bucket) else {
                return no_such_bucket();
            };
            if if_none_match(&headers) && b.objects.contains_key(&archive.key) {
                return precondition_failed();
            }
            // a listing of the entries stands in for the zip payload
            let listing: String = archive
                .entries
                .iter()
                .map(|(key, name)| format!("{name} <- {key}\n"))
                .collect();
            b.objects.insert(
                archive.key.clone(),
                StoredObject {
                    data: Bytes::from(listing),
                    content_type: "application/zip".into(),
                    etag: new_etag(),
                    created_at: Utc::now(),
                },
            );
            archive.state = "complete".into();
            StatusCode::NO_CONTENT.into_response()
        }
        Method::POST if q.contains_key("nonces") => {
            let Some(b) = inner.buckets.get(&bucket) else {
                return no_such_bucket();
            };
            if !b.objects.contains_key(&key) {
                return error_response(StatusCode::NOT_FOUND, "NoSuchKey", "the key does not exist");
            }
            let Some(ttl) = q.get("ttl").and_then(|v| v.parse::<i64>().ok()).filter(|v| *v > 0)
            else {
                return error_response(StatusCode::BAD_REQUEST, "InvalidTtl", "bad ttl");
            };
            let expires_at = Utc::now() + chrono::Duration::seconds(ttl);
            (
                StatusCode::CREATED,
                Json(json!({
                    "nonce": Uuid::new_v4().simple().to_string(),
                    "expiresAt": expires_at.to_rfc3339(),
                })),
            )
                .into_response()
        }
        Method::DELETE if upload_id.is_some() => {
            match upload_id.and_then(|id| inner.uploads.remove(id)) {
                Some(_) => StatusCode::NO_CONTENT.into_response(),
                None => error_response(StatusCode::NOT_FOUND, "NoSuchUpload", "unknown upload"),
            }
        }
        Method::DELETE if archive_id.is_some() => {
            match archive_id.and_then(|id| inner.archives.remove(id)) {
                Some(_) => StatusCode::NO_CONTENT.into_response(),
                None => error_response(StatusCode::NOT_FOUND, "NoSuchArchive", "unknown archive"),
            }
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

fn complete_upload(
    inner: &mut Inner,
    bucket: &str,
    key: &str,
    upload_id: Option<&String>,
    headers: &HeaderMap,
    body: &Bytes,
) -> Response {
    let Some(upload_id) = upload_id.filter(|id| {
        inner
            .uploads
            .get(*id)
            .is_some_and(|u| u.bucket == bucket && u.key == key)
    }) else {
        return error_response(StatusCode::NOT_FOUND, "NoSuchUpload", "unknown upload");
    };
    let Ok(req) = serde_json::from_slice::<CompleteRequest>(body) else {
        return error_response(StatusCode::BAD_REQUEST, "MalformedJSON", "bad body");
    };
    let Some(b) = inner.buckets.get_mut(bucket) else {
        return no_such_bucket();
    };
    if if_none_match(headers) && b.objects.contains_key(key) {
        return precondition_failed();
    }
    let Some(upload) = inner.uploads.remove(upload_id) else {
        return error_response(StatusCode::NOT_FOUND, "NoSuchUpload", "unknown upload");
    };

    let mut data = Vec::new();
    for part in &req.parts {
        match upload.parts.get(&part.part_number) {
            Some((etag, bytes)) if *etag == part.etag => data.extend_from_slice(bytes),
            _ => {
                // keep the upload so the caller can retry with the right parts
                inner.uploads.insert(upload_id.clone(), upload);
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "InvalidPart",
                    "a part is missing or its etag does not match",
                );
            }
        }
    }

    let etag = new_etag();
    b.objects.insert(
        key.to_string(),
        StoredObject {
            data: Bytes::from(data),
            content_type: upload.content_type,
            etag: etag.clone(),
            created_at: Utc::now(),
        },
    );
    Json(json!({ "bucket": bucket, "key": key, "etag": etag })).into_response()
}
