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

//! # STOR Rust SDK (`stor`)
//!
//! A strongly-typed, async interface to the STOR object storage service.
//!
//! Each operation has a request builder (e.g. [`builders::CreateBucket`], [`builders::PutObject`],
//! [`builders::UploadPart`]) configured through a fluent builder pattern. All request builders
//! implement the [`types::StorApi`] trait, whose async [`send`](crate::types::StorApi::send)
//! method executes the request and returns a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use stor::client::StorClientBuilder;
//! use stor::types::StorApi;
//! use stor::response::CreateBucketResponse;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = StorClientBuilder::new("https://stor.example.com".parse().unwrap())
//!         .api_key("my-api-key")
//!         .build()
//!         .unwrap();
//!
//!     let resp: CreateBucketResponse = client
//!         .create_bucket("my-bucket")
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     println!("created bucket {} at {}", resp.bucket_info().name, resp.bucket_info().created_at);
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`client::StorClient`] returns a builder struct
//! - Builders implement [`types::ToStorRequest`] for request conversion and [`types::StorApi`] for execution
//! - Responses implement [`types::FromStorResponse`] and decode their body eagerly
//! - Failures surface as [`error::Error`]; service error codes map to [`error::StorError`]

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]

pub mod builders;
pub mod client;
pub mod creds;
pub mod error;
pub mod error_response;
pub mod header_constants;
pub mod http;
pub mod multimap_ext;
pub mod object_content;
pub mod response;
pub mod response_traits;
pub mod types;
pub mod utils;

pub use client::{StorClient, StorClientBuilder};

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
