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

use crate::{classify, dispatch, Config, RequestSigner, ResourcePath, Success};
use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue, Method};
use log::info;
use s3verb_core::{Context, Result};

/// Client runs one object operation per call.
///
/// Every call resolves credentials, validates the path, signs, sends and
/// classifies from scratch, so calls never share signing state.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    config: Config,
}

impl Client {
    /// Create a new client.
    ///
    /// `config` is used as given; apply [`Config::from_env`] first to pick up
    /// environment defaults.
    pub fn new(ctx: Context, config: Config) -> Self {
        Self { ctx, config }
    }

    /// Delete the object at `/bucket/key`.
    pub async fn delete_object(&self, path: &str) -> Result<Success> {
        self.execute(Method::DELETE, path, HeaderMap::new(), Bytes::new())
            .await
    }

    /// Fetch the object at `/bucket/key`.
    pub async fn get_object(&self, path: &str) -> Result<Success> {
        self.execute(Method::GET, path, HeaderMap::new(), Bytes::new())
            .await
    }

    /// Upload `body` to `/bucket/key`.
    pub async fn put_object(
        &self,
        path: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<Success> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(content_type)?);
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(body.len()));
        self.execute(Method::PUT, path, headers, body).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Success> {
        let path = ResourcePath::parse(path)?;
        let (cred, endpoint) = self.config.resolve(&self.ctx).await?;
        info!("{method} {path} in {}", endpoint.region);

        let signed = RequestSigner::new(&endpoint.region).sign_request(
            &cred,
            method,
            &endpoint.host(path.bucket()),
            path.canonical_uri(endpoint.addressing_style),
            headers,
            body,
        )?;
        let outcome = dispatch(&self.ctx, signed, &endpoint).await;

        classify(outcome)
    }
}
