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

//! Core components for signed S3 object operations.
//!
//! This crate provides the foundational types shared by the s3verb engine and
//! its command line front ends.
//!
//! ## Overview
//!
//! - **Context**: a container holding implementations for file reading, HTTP
//!   sending and environment access. The engine performs every side effect
//!   through it, so tests can swap in [`StaticEnv`] or a mock HTTP endpoint.
//! - **Error**: a single [`Error`] type whose [`ErrorKind`] is the complete
//!   failure taxonomy of an invocation.
//! - **SigningCredential**: the validity check a credential must pass before
//!   a request may be signed.
//!
//! ## Utilities
//!
//! - [`hash`]: SHA256 and HMAC-SHA256 helpers
//! - [`time`]: timestamp capture and SigV4 time formats
//! - [`utils`]: secret redaction for logs

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::FileRead;
pub use context::HttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod api;
pub use api::SigningCredential;

mod error;
pub use error::{CredentialField, Error, ErrorKind, Result};
