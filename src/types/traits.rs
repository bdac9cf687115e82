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

//! Core traits for STOR request and response handling.

use super::stor_request::StorRequest;
use crate::error::{Error, ValidationErr};
use async_trait::async_trait;

/// Trait for converting a request builder into a concrete STOR HTTP request.
///
/// Implemented by every request builder. Validation of bucket names, object keys and
/// identifiers happens here, before any network I/O.
pub trait ToStorRequest: Sized {
    /// Consumes this request builder and returns a [`StorRequest`].
    fn to_stor_request(self) -> Result<StorRequest, ValidationErr>;
}

/// Trait for converting HTTP responses into strongly typed STOR response objects.
///
/// Implementations decode the body eagerly, so a malformed success body surfaces as
/// [`Error::Decode`] from [`StorApi::send`].
#[async_trait]
pub trait FromStorResponse: Sized {
    /// Converts the outcome of [`StorRequest::execute`] into a typed response.
    async fn from_stor_response(
        request: StorRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Trait that defines a common interface for all STOR API request builders.
///
/// # Type Parameters
///
/// * `StorResponse` - The specific response type associated with this request builder.
pub trait StorApi: ToStorRequest {
    /// The response type associated with this request builder.
    type StorResponse: FromStorResponse;

    /// Sends the request and returns the corresponding typed response.
    ///
    /// Converts the builder with [`ToStorRequest::to_stor_request`], executes the request
    /// and converts the outcome with [`FromStorResponse::from_stor_response`].
    fn send(self) -> impl std::future::Future<Output = Result<Self::StorResponse, Error>> + Send
    where
        Self: Sized + Send,
    {
        async {
            let mut request: StorRequest = self.to_stor_request()?;
            let response: Result<reqwest::Response, Error> = request.execute().await;
            Self::StorResponse::from_stor_response(request, response).await
        }
    }
}
