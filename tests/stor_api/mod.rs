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

//! STOR API Integration Tests

// Client configuration and transport
mod client_config;
mod error_mapping;

// Bucket operations
mod bucket;
mod list_objects;

// Object operations
mod delete_objects;
mod object_get;
mod object_put;

// Multipart, archives and nonces
mod archive;
mod multipart_upload;
mod nonce;
