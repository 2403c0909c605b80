// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::AWS_URI_ENCODE_SET;
use crate::endpoint::AddressingStyle;
use percent_encoding::utf8_percent_encode;
use s3verb_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// ResourcePath identifies one object as `/bucket/key`.
///
/// The key may itself contain `/`. Paths are validated on parse, so a
/// `ResourcePath` always has a non-empty bucket and key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    bucket: String,
    key: String,
}

impl ResourcePath {
    /// Parse and validate a `/bucket/key` path.
    pub fn parse(path: &str) -> Result<Self> {
        let Some(rest) = path.strip_prefix('/') else {
            return Err(Error::invalid_resource_path(format!(
                "resource path must start with '/': {path}"
            )));
        };
        let Some((bucket, key)) = rest.split_once('/') else {
            return Err(Error::invalid_resource_path(format!(
                "resource path has no object key: {path}"
            )));
        };
        if bucket.is_empty() {
            return Err(Error::invalid_resource_path(format!(
                "resource path has no bucket: {path}"
            )));
        }
        if key.is_empty() {
            return Err(Error::invalid_resource_path(format!(
                "resource path has no object key: {path}"
            )));
        }

        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key, without the leading `/`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The encoded path sent on the wire and used as canonical URI.
    pub fn canonical_uri(&self, style: AddressingStyle) -> String {
        match style {
            AddressingStyle::Path => uri_encode(&format!("/{}/{}", self.bucket, self.key)),
            AddressingStyle::VirtualHosted => uri_encode(&format!("/{}", self.key)),
        }
    }
}

impl FromStr for ResourcePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.bucket, self.key)
    }
}

/// Percent encode every path segment as RFC 3986 requires, keeping `/`.
///
/// The input is taken literally: a `%` in a key is encoded as `%25`.
pub fn uri_encode(path: &str) -> String {
    utf8_percent_encode(path, &AWS_URI_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;
    use s3verb_core::ErrorKind;
    use test_case::test_case;

    #[test_case("/bucket/key" ; "simple")]
    #[test_case("/bucket/dir/sub/file.ext" ; "nested key")]
    #[test_case("/bucket/dir/" ; "directory marker")]
    fn test_parse_accepts(path: &str) {
        let rp = ResourcePath::parse(path).expect("must be valid");
        assert_eq!(rp.bucket(), "bucket");
        assert_eq!(rp.to_string(), path);
    }

    #[test_case("" ; "empty")]
    #[test_case("bucket/key" ; "no leading slash")]
    #[test_case("/bucket" ; "no key")]
    #[test_case("/bucket/" ; "empty key")]
    #[test_case("//key" ; "empty bucket")]
    fn test_parse_rejects(path: &str) {
        let err = ResourcePath::parse(path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResourcePath);
    }

    #[test]
    fn test_canonical_uri() {
        let rp = ResourcePath::parse("/mybucket/photos/my file+1~(v2).jpg").unwrap();
        assert_eq!(
            rp.canonical_uri(AddressingStyle::Path),
            "/mybucket/photos/my%20file%2B1~%28v2%29.jpg"
        );
        assert_eq!(
            rp.canonical_uri(AddressingStyle::VirtualHosted),
            "/photos/my%20file%2B1~%28v2%29.jpg"
        );
    }

    #[test]
    fn test_uri_encode_survives_decoding() {
        let cases = vec![
            "/b/k1/k2",
            "/b/k 1/k$2",
            "/b/ünïcödé/ключ",
            "/b/a%2Fb/100%",
            "/b/already%20encoded",
        ];

        for path in cases {
            let encoded = uri_encode(path);
            let decoded = percent_decode_str(&encoded)
                .decode_utf8()
                .expect("encoded path must decode to utf-8");
            assert_eq!(decoded, path, "Failed on path: {path}");
            assert_eq!(uri_encode(&decoded), encoded, "Failed on path: {path}");
        }
    }

    #[test_case("/mybucket/report%41.txt", "/mybucket/report%2541.txt" ; "escape like key")]
    #[test_case("/mybucket/a%FFb", "/mybucket/a%25FFb" ; "invalid escape")]
    #[test_case("/mybucket/100%", "/mybucket/100%25" ; "trailing percent")]
    fn test_literal_percent_is_encoded(path: &str, expected: &str) {
        let rp = ResourcePath::parse(path).unwrap();
        assert_eq!(rp.canonical_uri(AddressingStyle::Path), expected);
    }

    #[test]
    fn test_uri_encode_non_ascii() {
        assert_eq!(uri_encode("/b/é"), "/b/%C3%A9");
    }
}
