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

use crate::{Endpoint, SignedRequest};
use bytes::Bytes;
use http::StatusCode;
use log::debug;
use s3verb_core::{Context, Error};

/// What came back from the single attempt at sending a request.
///
/// Produced once per request; never retried or cached.
#[derive(Debug)]
pub struct RequestOutcome {
    /// Url the request was sent to.
    pub url: String,
    /// Response status, `None` if no response arrived.
    pub status: Option<StatusCode>,
    /// Raw response body.
    pub body: Bytes,
    /// Why no response arrived.
    pub transport_error: Option<Error>,
}

impl RequestOutcome {
    /// An HTTP response was received, whatever its status.
    pub fn response(url: impl Into<String>, status: StatusCode, body: Bytes) -> Self {
        Self {
            url: url.into(),
            status: Some(status),
            body,
            transport_error: None,
        }
    }

    /// The request failed before any response was received.
    pub fn transport_failure(url: impl Into<String>, err: Error) -> Self {
        Self {
            url: url.into(),
            status: None,
            body: Bytes::new(),
            transport_error: Some(err),
        }
    }
}

/// Send `req` exactly once and capture whatever happens.
///
/// Nothing here fails: transport errors are recorded in the outcome so that
/// the classifier sees every failure the same way.
pub async fn dispatch(ctx: &Context, req: SignedRequest, endpoint: &Endpoint) -> RequestOutcome {
    let url = format!("{}://{}", endpoint.scheme, req.host());
    let (method, path_and_query, headers, body) = req.into_parts();
    let url = url + &path_and_query;
    debug!("sending {method} {url}");

    let mut builder = http::Request::builder().method(method).uri(&url);
    if let Some(h) = builder.headers_mut() {
        *h = headers;
    }
    let http_req = match builder.body(body) {
        Ok(r) => r,
        Err(e) => return RequestOutcome::transport_failure(url, Error::from(e)),
    };

    match ctx.http_send(http_req).await {
        Ok(resp) => {
            let (parts, body) = resp.into_parts();
            debug!("received {} from {url} with {} bytes", parts.status, body.len());
            RequestOutcome::response(url, parts.status, body)
        }
        Err(err) => RequestOutcome::transport_failure(url, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddressingStyle, Credential, RequestSigner};
    use http::uri::Scheme;
    use http::{HeaderMap, Method};
    use s3verb_core::ErrorKind;
    use s3verb_http_send_reqwest::ReqwestHttpSend;

    fn signed_for(host: &str) -> SignedRequest {
        let cred = Credential {
            access_key_id: "access_key_id".to_string(),
            secret_access_key: "secret_access_key".to_string(),
            session_token: None,
        };
        RequestSigner::new("eu-central-1")
            .sign_request(
                &cred,
                Method::DELETE,
                host,
                "/mybucket/file.ext".to_string(),
                HeaderMap::new(),
                Bytes::new(),
            )
            .expect("sign must succeed")
    }

    fn endpoint(domain: &str) -> Endpoint {
        Endpoint {
            region: "eu-central-1".to_string(),
            domain: domain.to_string(),
            scheme: Scheme::HTTP,
            addressing_style: AddressingStyle::Path,
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_signed_headers() {
        let mut server = mockito::Server::new_async().await;
        let host = server.host_with_port();
        let mock = server
            .mock("DELETE", "/mybucket/file.ext")
            .match_header("authorization", mockito::Matcher::Regex(
                "^AWS4-HMAC-SHA256 Credential=access_key_id/[0-9]{8}/eu-central-1/s3/aws4_request, ".to_string(),
            ))
            .match_header("x-amz-date", mockito::Matcher::Any)
            .match_header("x-amz-content-sha256", crate::constants::EMPTY_STRING_SHA256)
            .with_status(204)
            .create_async()
            .await;

        let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
        let outcome = dispatch(&ctx, signed_for(&host), &endpoint(&host)).await;

        mock.assert_async().await;
        assert_eq!(outcome.url, format!("http://{host}/mybucket/file.ext"));
        assert_eq!(outcome.status, Some(StatusCode::NO_CONTENT));
        assert!(outcome.transport_error.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_captures_transport_error() {
        let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
        let outcome = dispatch(&ctx, signed_for("127.0.0.1:9"), &endpoint("127.0.0.1:9")).await;

        assert_eq!(outcome.status, None);
        let err = outcome.transport_error.expect("must fail to connect");
        assert_eq!(err.kind(), ErrorKind::Network);
    }
}
