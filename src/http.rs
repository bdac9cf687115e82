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

//! Base URL parsing and request URL construction

use crate::error::ConfigErr;
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::utils::urlencode_object_key;
use hyper::Uri;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, Default)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }
        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents the base URL of a STOR endpoint, optionally with a path prefix
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    base_path: String,
}

impl FromStr for BaseUrl {
    type Err = ConfigErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use stor::http::BaseUrl;
    ///
    /// // Scheme defaults to https
    /// let base_url: BaseUrl = "stor.example.com".parse().unwrap();
    /// // host:port
    /// let base_url: BaseUrl = "http://localhost:8080".parse().unwrap();
    /// // with a path prefix
    /// let base_url: BaseUrl = "https://api.example.com/stor".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ConfigErr> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConfigErr::MissingHost);
        }
        let url = s
            .parse::<Uri>()
            .map_err(|e| ConfigErr::InvalidBaseUrl(format!("{s}: {e}")))?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(ConfigErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let host = match url.host() {
            Some(h) if !h.is_empty() => h,
            _ => {
                return Err(ConfigErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let host = if host.parse::<std::net::Ipv6Addr>().is_ok() {
            format!("[{host}]")
        } else {
            host.to_string()
        };

        let mut port = match url.port() {
            Some(p) => p.as_u16(),
            _ => 0u16,
        };
        if (https && port == 443) || (!https && port == 80) {
            port = 0u16;
        }

        if url.query().is_some() {
            return Err(ConfigErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        Ok(BaseUrl {
            https,
            host,
            port,
            base_path: url.path().trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let scheme = if self.https { "https" } else { "http" };
        if self.port > 0 {
            write!(f, "{scheme}://{}:{}{}", self.host, self.port, self.base_path)
        } else {
            write!(f, "{scheme}://{}{}", self.host, self.base_path)
        }
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds the URL `{base}/{bucket}/{object}?{query}` for one request.
    ///
    /// The path is empty for bucket listing. Bucket and object are percent-encoded here;
    /// query values are encoded when the URL is rendered.
    pub fn build_url(
        &self,
        query: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Url {
        let mut path = format!("{}/", self.base_path);
        if let Some(bucket) = bucket_name {
            path.push_str(&urlencode_object_key(bucket));
            if let Some(object) = object_name {
                path.push('/');
                path.push_str(&urlencode_object_key(object));
            }
        }

        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path,
            query: query.clone(),
        }
    }
}
