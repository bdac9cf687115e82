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

//! Trait composition for response accessors.

use crate::header_constants::ETAG;
use crate::types::StorRequest;
use bytes::Bytes;
use http::HeaderMap;

#[macro_export]
/// Implements the `FromStorResponse` trait for responses without a decoded body.
///
/// Stores the request, headers and raw body in the response struct.
macro_rules! impl_from_stor_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::types::FromStorResponse for $ty {
                async fn from_stor_response(
                    request: $crate::types::StorRequest,
                    response: Result<reqwest::Response, $crate::error::Error>,
                ) -> Result<Self, $crate::error::Error> {
                    let mut resp = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp
                            .bytes()
                            .await
                            .map_err($crate::error::NetworkError::from)?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `FromStorResponse` trait for responses with a JSON body.
///
/// The body is decoded into the `result` field while the response is built, so a
/// malformed body fails the call with [`Error::Decode`](crate::error::Error::Decode).
macro_rules! impl_from_stor_response_json {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::types::FromStorResponse for $ty {
                async fn from_stor_response(
                    request: $crate::types::StorRequest,
                    response: Result<reqwest::Response, $crate::error::Error>,
                ) -> Result<Self, $crate::error::Error> {
                    let mut resp = response?;
                    let headers = std::mem::take(resp.headers_mut());
                    let body = resp
                        .bytes()
                        .await
                        .map_err($crate::error::NetworkError::from)?;
                    let result = serde_json::from_slice(&body).map_err($crate::error::Error::Decode)?;
                    Ok(Self {
                        request,
                        headers,
                        body,
                        result,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasStorFields` trait for the specified types.
macro_rules! impl_has_stor_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::response_traits::HasStorFields for $ty {
                /// The request that was sent to the service.
                #[inline]
                fn request(&self) -> &$crate::types::StorRequest {
                    &self.request
                }

                /// HTTP headers returned by the server.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                /// The response body returned by the server, as raw bytes.
                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

pub trait HasStorFields {
    /// The request that was sent to the service.
    fn request(&self) -> &StorRequest;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the server, as raw bytes.
    fn body(&self) -> &Bytes;
}

/// Returns the name of the bucket the request targeted.
pub trait HasBucket: HasStorFields {
    #[inline]
    fn bucket(&self) -> &str {
        self.request().bucket().unwrap_or_default()
    }
}

/// Returns the object key the request targeted.
pub trait HasObject: HasStorFields {
    #[inline]
    fn object(&self) -> &str {
        self.request().object().unwrap_or_default()
    }
}

/// Returns the value of the `ETag` response header.
pub trait HasEtagFromHeaders: HasStorFields {
    /// The value is returned exactly as sent, quotes included, so it can be passed back
    /// unchanged in a [`PartReference`](crate::types::PartReference).
    #[inline]
    fn etag(&self) -> &str {
        self.headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}
