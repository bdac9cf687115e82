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

use crate::client::StorClient;
use crate::error::ValidationErr;
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::response::ListObjectsResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use crate::utils::check_bucket_name;
use typed_builder::TypedBuilder;

/// Page size used when `max_keys` is not set or below 1. Also the largest page the
/// server returns.
pub const DEFAULT_MAX_KEYS: u32 = 1000;

/// Argument builder for the [`list_objects()`](StorClient::list_objects) API.
///
/// With a `delimiter`, keys sharing a prefix up to the delimiter are rolled up into
/// [`common_prefixes`](crate::response::ListObjectsResult::common_prefixes).
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListObjects {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(default, setter(into, strip_option))]
    start_after: Option<String>,
    #[builder(default, setter(strip_option))]
    max_keys: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    delimiter: Option<String>,
    #[builder(default, setter(into, strip_option))]
    prefix: Option<String>,
}

impl StorApi for ListObjects {
    type StorResponse = ListObjectsResponse;
}

/// Builder type alias for [`ListObjects`].
pub type ListObjectsBldr = ListObjectsBuilder<((StorClient,), (String,), (), (), (), ())>;

impl ToStorRequest for ListObjects {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let max_keys = match self.max_keys {
            Some(v) if v >= 1 => v,
            _ => DEFAULT_MAX_KEYS,
        };

        let mut query_params = Multimap::new();
        query_params.set("max-keys", max_keys.to_string());
        if let Some(v) = self.start_after
            && !v.is_empty()
        {
            query_params.set("start-after", v);
        }
        if let Some(v) = self.delimiter
            && !v.is_empty()
        {
            query_params.set("delimiter", v);
        }
        if let Some(v) = self.prefix
            && !v.is_empty()
        {
            query_params.set("prefix", v);
        }

        Ok(StorRequest::builder()
            .client(self.client)
            .bucket(self.bucket)
            .query_params(query_params)
            .build())
    }
}
