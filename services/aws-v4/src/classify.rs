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

use crate::RequestOutcome;
use bytes::Bytes;
use http::StatusCode;
use log::warn;
use s3verb_core::{Error, Result};

/// A request that completed with a 2xx status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success {
    /// Response status.
    pub status: StatusCode,
    /// Response body, passed through unchanged.
    pub body: Bytes,
}

/// Map an outcome onto success or one error of the taxonomy.
///
/// The result depends only on the transport error, the status and the
/// body. A 404 is always reported as `NotFound`, deletes included; callers
/// wanting idempotent deletes match on it themselves.
pub fn classify(outcome: RequestOutcome) -> Result<Success> {
    let RequestOutcome {
        url,
        status,
        body,
        transport_error,
    } = outcome;

    if let Some(err) = transport_error {
        warn!("request to {url} failed before any response: {err}");
        return Err(Error::network(format!("request to {url} failed: {}", err.message()))
            .with_source(err));
    }
    let Some(status) = status else {
        return Err(Error::network(format!("no response from {url}")));
    };

    if status.is_success() {
        return Ok(Success { status, body });
    }

    let err = match status.as_u16() {
        403 => Error::authentication(format!("access to {url} denied")),
        404 => Error::not_found(format!("{url} does not exist")),
        400 | 409 => Error::request(format!("{url} rejected the request")),
        code if code >= 500 => Error::server(format!("{url} failed to handle the request")),
        _ => Error::unknown_status(format!("{url} answered with unexpected status")),
    };
    warn!("{url} answered {status}");

    Err(err.with_response(status, body))
}
