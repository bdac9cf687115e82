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
use stor::client::StorClientBuilder;
use stor::error::{ConfigErr, Error, StorError, ValidationErr};
use stor::types::StorApi;
use stor_common::test_context::TestContext;
use stor_common::utils::rand_object_name;

#[stor_macros::test(no_bucket)]
async fn bearer_token_is_sent(ctx: TestContext) {
    ctx.client.list_buckets().build().send().await.unwrap();

    let req = ctx.server.last_request().unwrap();
    assert_eq!(req.method, http::Method::GET);
    assert_eq!(req.path, "/");
    let expected = format!("Bearer {}", ctx.api_key);
    assert_eq!(req.header("authorization"), Some(expected.as_str()));
    assert!(req.header("user-agent").unwrap().starts_with("STOR ("));
}

#[stor_macros::test(no_bucket)]
async fn wrong_api_key_is_rejected(ctx: TestContext) {
    let client = ctx.client_with_api_key("not-the-key");
    let err = client.list_buckets().build().send().await.unwrap_err();
    assert_eq!(err.stor_error(), Some(&StorError::InvalidCredentials));
}

#[stor_macros::test(no_bucket)]
async fn missing_settings_fail_before_any_request(ctx: TestContext) {
    let err = StorClientBuilder::default()
        .api_key(&ctx.api_key)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::Config(ConfigErr::MissingHost))
    ));

    let err = StorClientBuilder::new(ctx.base_url.clone())
        .api_key("")
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::Config(ConfigErr::MissingApiKey))
    ));
    assert!(ctx.server.requests().is_empty());
}

#[stor_macros::test(no_bucket)]
async fn slow_buffered_call_times_out(ctx: TestContext) {
    let client = ctx.client_with_timeout(Duration::from_millis(100));
    ctx.server.set_delay(Some(Duration::from_millis(1000)));

    let err = client.list_buckets().build().send().await.unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {err:?}");

    ctx.server.set_delay(None);
}

#[stor_macros::test]
async fn slow_streaming_call_times_out(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    ctx.client
        .put_object(&bucket_name, &object_name, "payload")
        .build()
        .send()
        .await
        .unwrap();

    let client = ctx.client_with_timeout(Duration::from_millis(100));
    ctx.server.set_delay(Some(Duration::from_millis(1000)));
    let err = client
        .get_object(&bucket_name, &object_name)
        .build()
        .send()
        .await
        .unwrap_err();
    ctx.server.set_delay(None);

    assert!(err.is_timeout(), "unexpected error: {err:?}");
}

#[stor_macros::test(no_bucket)]
async fn zero_timeout_disables_the_deadline(ctx: TestContext) {
    let client = ctx.client_with_timeout(Duration::ZERO);
    assert_eq!(client.timeout(), None);
    ctx.server.set_delay(Some(Duration::from_millis(300)));

    let resp = client.list_buckets().build().send().await;
    ctx.server.set_delay(None);

    assert!(resp.is_ok());
}
