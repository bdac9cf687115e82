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

use std::time::Duration;
use stor::error::{Error, ValidationErr};
use stor::response::CreateNonceResponse;
use stor::types::StorApi;
use stor::utils::utc_now;
use stor_common::test_context::TestContext;
use stor_common::utils::rand_object_name;

#[stor_macros::test]
async fn create_nonce(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    ctx.client
        .put_object(&bucket_name, &object_name, "report")
        .build()
        .send()
        .await
        .unwrap();

    let before = utc_now();
    let resp: CreateNonceResponse = ctx
        .client
        .create_nonce(&bucket_name, &object_name, Duration::from_secs(300))
        .build()
        .send()
        .await
        .unwrap();
    assert!(!resp.nonce().nonce.is_empty());
    assert!(resp.nonce().expires_at > before);

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.method, http::Method::POST);
    assert_eq!(req.query_value("nonces"), Some(""));
    assert_eq!(req.query_value("ttl"), Some("300"));
}

#[stor_macros::test]
async fn create_nonce_for_missing_object(ctx: TestContext, bucket_name: String) {
    let err = ctx
        .client
        .create_nonce(&bucket_name, "missing", Duration::from_secs(60))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err:?}");
}

#[stor_macros::test(no_bucket)]
async fn create_nonce_rejects_sub_second_ttl(ctx: TestContext) {
    let err = ctx
        .client
        .create_nonce("b1", "k", Duration::from_millis(999))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationErr::InvalidTtl(_))));
    assert!(ctx.server.requests().is_empty());
}
