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

//! Signed S3 object operations.
//!
//! One call runs, in order:
//!
//! 1. [`Config::resolve`]: credential and endpoint from flags, environment
//!    and secret file.
//! 2. [`RequestSigner::build_canonical_request`]: canonical request and
//!    string to sign.
//! 3. [`sign`]: SigV4 key derivation and signature, wrapped into a
//!    [`SignedRequest`] by [`RequestSigner::sign_request`].
//! 4. [`dispatch`]: one HTTP round trip.
//! 5. [`classify`]: success or a typed [`Error`](s3verb_core::Error).
//!
//! [`Client`] chains these for delete, get and put.

mod constants;
pub use constants::DEFAULT_DOMAIN;
pub use constants::EMPTY_STRING_SHA256;

mod credential;
pub use credential::Credential;

mod endpoint;
pub use endpoint::AddressingStyle;
pub use endpoint::Endpoint;

mod config;
pub use config::Config;

mod resource;
pub use resource::uri_encode;
pub use resource::ResourcePath;

mod sign_request;
pub use sign_request::canonical_query_string;
pub use sign_request::generate_signing_key;
pub use sign_request::sign;
pub use sign_request::CanonicalRequest;
pub use sign_request::RequestSigner;
pub use sign_request::SignedRequest;

mod dispatch;
pub use dispatch::dispatch;
pub use dispatch::RequestOutcome;

mod classify;
pub use classify::classify;
pub use classify::Success;

mod client;
pub use client::Client;
