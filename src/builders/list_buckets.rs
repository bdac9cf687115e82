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
use crate::response::ListBucketsResponse;
use crate::types::{StorApi, StorRequest, ToStorRequest};
use typed_builder::TypedBuilder;

/// Argument builder for the [`list_buckets()`](StorClient::list_buckets) API.
///
/// Buckets are returned in name order; pass the last name seen as `start_after`
/// to fetch the next page.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListBuckets {
    #[builder(!default)] // force required
    client: StorClient,
    #[builder(default, setter(into, strip_option))]
    start_after: Option<String>,
    /// Zero leaves the page size to the server.
    #[builder(default, setter(strip_option))]
    max_buckets: Option<u32>,
}

impl StorApi for ListBuckets {
    type StorResponse = ListBucketsResponse;
}

/// Builder type alias for [`ListBuckets`].
pub type ListBucketsBldr = ListBucketsBuilder<((StorClient,), (), ())>;

impl ToStorRequest for ListBuckets {
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr> {
        let mut query_params = Multimap::new();
        if let Some(v) = self.start_after
            && !v.is_empty()
        {
            query_params.set("start-after", v);
        }
        if let Some(v) = self.max_buckets
            && v != 0
        {
            query_params.set("max-buckets", v.to_string());
        }

        Ok(StorRequest::builder()
            .client(self.client)
            .query_params(query_params)
            .build())
    }
}
