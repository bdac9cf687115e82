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

//! Resource types exchanged with the service, with their JSON field names.

use crate::error_response::ErrorResponse;
use crate::utils::UtcTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bucket with its usage counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub name: String,
    /// Number of objects stored in the bucket
    pub objects: i64,
    /// Total size of all objects in bytes
    pub size: i64,
    pub created_at: UtcTime,
}

/// Contains information of an item of [list_objects()](crate::client::StorClient::list_objects) API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Object {
    pub key: String,
    #[serde(default)]
    pub content_type: String,
    pub size: u64,
    pub created_at: UtcTime,
}

/// Refers to an object by key, as used in bulk delete requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectReference {
    pub key: String,
}

impl From<&str> for ObjectReference {
    fn from(key: &str) -> Self {
        Self { key: key.into() }
    }
}

impl From<String> for ObjectReference {
    fn from(key: String) -> Self {
        Self { key }
    }
}

/// Part number and etag of an uploaded part, used to complete a multipart upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartReference {
    pub etag: String,
    pub part_number: u32,
}

impl PartReference {
    pub fn new(part_number: u32, etag: impl Into<String>) -> Self {
        Self {
            etag: etag.into(),
            part_number,
        }
    }
}

/// An entry of an archive under construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Key of the object to add to the archive
    pub key: String,
    /// Name of the resulting file inside the archive
    pub name: String,
}

impl ArchiveEntry {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveType {
    #[default]
    Zip,
}

impl ArchiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveType::Zip => "zip",
        }
    }
}

impl fmt::Display for ArchiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing state of an archive as reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveState {
    Pending,
    Processing,
    Complete,
    Failed,
    /// A state this client does not know about.
    #[serde(other)]
    Unknown,
}

impl ArchiveState {
    /// Returns true once the server stopped working on the archive.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ArchiveState::Complete | ArchiveState::Failed)
    }
}

/// Per-key outcome of a bulk delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub key: String,
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}
