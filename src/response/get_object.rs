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

use crate::error::Error;
use crate::header_constants::{CONTENT_LENGTH, CONTENT_TYPE};
use crate::object_content::{ByteStream, ObjectContent, Size};
use crate::types::{FromStorResponse, StorRequest};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt, TryStreamExt};
use http::HeaderMap;
use std::fmt;
use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

/// An open object body.
///
/// The connection stays open until the body was read to the end, [`close`](Self::close)
/// was called or the reader is dropped. Closing is idempotent; a closed reader yields
/// no more data.
pub struct ObjectReader {
    stream: Option<ByteStream>,
}

impl ObjectReader {
    pub(crate) fn new(stream: ByteStream) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    /// Returns the next chunk of the body, or `None` at the end or once closed.
    pub async fn chunk(&mut self) -> Result<Option<Bytes>, Error> {
        let Some(stream) = self.stream.as_mut() else {
            return Ok(None);
        };
        match stream.next().await {
            Some(chunk) => Ok(Some(chunk?)),
            None => {
                self.close();
                Ok(None)
            }
        }
    }

    /// Reads the remaining body into memory and closes the reader.
    pub async fn read_to_end(&mut self) -> Result<Bytes, Error> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.chunk().await? {
            buf.extend_from_slice(&chunk);
        }
        Ok(buf.freeze())
    }

    /// Releases the connection. Calling it again has no effect.
    pub fn close(&mut self) {
        self.stream = None;
    }

    pub fn is_closed(&self) -> bool {
        self.stream.is_none()
    }
}

impl Stream for ObjectReader {
    type Item = std::io::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match this.stream.as_mut() {
            Some(stream) => stream.as_mut().poll_next(cx),
            None => Poll::Ready(None),
        }
    }
}

impl fmt::Debug for ObjectReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectReader")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Response of [get_object()](crate::client::StorClient::get_object) API
///
/// Headers have been received; the body is read through [`reader`](Self::reader).
#[derive(Debug)]
pub struct GetObjectResponse {
    request: StorRequest,
    headers: HeaderMap,
    content_type: Option<String>,
    content_length: Option<u64>,
    reader: ObjectReader,
}

#[async_trait]
impl FromStorResponse for GetObjectResponse {
    async fn from_stor_response(
        request: StorRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = std::mem::take(resp.headers_mut());

        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let content_length = headers
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .or_else(|| resp.content_length());

        let stream = resp.bytes_stream().map_err(std::io::Error::other);

        Ok(Self {
            request,
            headers,
            content_type,
            content_length,
            reader: ObjectReader::new(Box::pin(stream)),
        })
    }
}

impl GetObjectResponse {
    pub fn bucket(&self) -> &str {
        self.request.bucket().unwrap_or_default()
    }

    pub fn object(&self) -> &str {
        self.request.object().unwrap_or_default()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Length announced by the server, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    pub fn reader(&mut self) -> &mut ObjectReader {
        &mut self.reader
    }

    pub fn into_reader(self) -> ObjectReader {
        self.reader
    }

    /// Releases the connection without reading the rest of the body.
    pub fn close(&mut self) {
        self.reader.close();
    }

    /// Reads the whole body into memory.
    pub async fn bytes(mut self) -> Result<Bytes, Error> {
        self.reader.read_to_end().await
    }

    /// Converts the body into [`ObjectContent`], e.g. to upload it elsewhere.
    pub fn into_content(self) -> ObjectContent {
        let size = Size::from(self.content_length);
        ObjectContent::new_from_stream(self.reader, size)
    }

    /// Writes the body to a file, returning the number of bytes written.
    pub async fn to_file(self, file_path: &Path) -> Result<u64, Error> {
        Ok(self.into_content().to_file(file_path).await?)
    }
}
