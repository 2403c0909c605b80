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

use crate::constants::DEFAULT_DOMAIN;
use http::uri::Scheme;

/// How the bucket is placed in the request url.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressingStyle {
    /// `scheme://host/bucket/key`
    #[default]
    Path,
    /// `scheme://bucket.host/key`
    VirtualHosted,
}

/// Endpoint the signed request is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Region bound into the credential scope.
    pub region: String,
    /// Domain of the S3 compatible service, `amazonaws.com` by default.
    pub domain: String,
    /// `http` only when the insecure flag is set.
    pub scheme: Scheme,
    /// Path or virtual-hosted addressing.
    pub addressing_style: AddressingStyle,
}

impl Endpoint {
    /// Host serving the whole service, without any bucket.
    ///
    /// AWS itself is reached through its regional S3 endpoint; any other
    /// domain is an S3-compatible server addressed as given.
    pub fn service_host(&self) -> String {
        if self.domain == DEFAULT_DOMAIN {
            format!("s3.{}.{}", self.region, self.domain)
        } else {
            self.domain.clone()
        }
    }

    /// Host that receives requests for `bucket`.
    pub fn host(&self, bucket: &str) -> String {
        match self.addressing_style {
            AddressingStyle::Path => self.service_host(),
            AddressingStyle::VirtualHosted => format!("{bucket}.{}", self.service_host()),
        }
    }
}
