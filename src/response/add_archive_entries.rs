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

use crate::response_traits::{HasBucket, HasObject};
use crate::types::StorRequest;
use crate::{impl_from_stor_response, impl_has_stor_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [add_archive_entries()](crate::client::StorClient::add_archive_entries) API
#[derive(Debug)]
pub struct AddArchiveEntriesResponse {
    request: StorRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_stor_response!(AddArchiveEntriesResponse);
impl_has_stor_fields!(AddArchiveEntriesResponse);

impl HasBucket for AddArchiveEntriesResponse {}
impl HasObject for AddArchiveEntriesResponse {}
