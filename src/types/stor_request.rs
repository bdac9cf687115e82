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

//! StorRequest struct and implementation for executing HTTP requests.

use crate::client::StorClient;
use crate::error::{Error, StorError};
use crate::multimap_ext::Multimap;
use crate::object_content::ObjectContent;
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Generic STOR request
///
/// Describes a single call: the target resource, query, headers, optional body and the
/// single status code that counts as success.
#[derive(Debug, TypedBuilder)]
pub struct StorRequest {
    #[builder(!default)] // force required
    pub(crate) client: StorClient,

    #[builder(default = Method::GET)]
    pub(crate) method: Method,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    pub(crate) headers: Multimap,

    /// Taken by [`StorRequest::execute`]
    #[builder(default, setter(into))]
    pub(crate) body: Option<ObjectContent>,

    #[builder(default, setter(into))]
    pub(crate) content_type: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) content_length: Option<u64>,

    /// The only status code treated as success.
    #[builder(default = StatusCode::OK)]
    pub(crate) expected_status: StatusCode,

    /// Domain error reported for a 404 without looking at the body.
    #[builder(default, setter(into))]
    pub(crate) not_found: Option<StorError>,

    /// Leave the response body unread so it can be streamed by the caller.
    #[builder(default = false)]
    pub(crate) streaming: bool,
}

impl StorRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    /// Execute the request, returning the response. Only used in [`StorApi::send()`](crate::types::StorApi::send)
    ///
    /// The response status has already been checked against the expected status.
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        let client = self.client.clone();
        client.execute(self).await
    }
}
