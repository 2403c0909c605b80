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

use bytes::Bytes;
use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// Maximum number of response body bytes rendered by `Display`.
const DISPLAY_BODY_LIMIT: usize = 1024;

/// The error type for s3verb operations
#[derive(Error, Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    body: Option<Bytes>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The credential field that could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    /// `AWS_ACCESS_KEY_ID` or `--key`.
    AccessKeyId,
    /// `AWS_SECRET_ACCESS_KEY` or `--secret`.
    SecretAccessKey,
    /// `AWS_DEFAULT_REGION` or `--region`.
    Region,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required credential or endpoint field is empty after resolution.
    MissingCredential(CredentialField),

    /// The secret file does not exist, is unreadable or holds no secret.
    CredentialFile,

    /// The resource path is not of the `/bucket/key` shape.
    InvalidResourcePath,

    /// The request never produced an HTTP response (DNS, connect, TLS).
    Network,

    /// HTTP 403: signature mismatch or expired credentials.
    Authentication,

    /// HTTP 404: the resource path does not exist.
    NotFound,

    /// HTTP 400 or 409.
    Request,

    /// HTTP 5xx.
    Server,

    /// Any other non-success status.
    UnknownStatus,

    /// Unexpected internal errors (header encoding, I/O, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the HTTP response that caused this error.
    pub fn with_response(mut self, status: StatusCode, body: Bytes) -> Self {
        self.status = Some(status);
        self.body = Some(body);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message without response details.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Verbatim response body, if one was received.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Check if this error was caused by a bad invocation rather than a failed request.
    ///
    /// Usage errors are always detected before any network call.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MissingCredential(_)
                | ErrorKind::CredentialFile
                | ErrorKind::InvalidResourcePath
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a missing credential error for the given field.
    pub fn missing_credential(field: CredentialField) -> Self {
        Self::new(
            ErrorKind::MissingCredential(field),
            format!("{field} is not set"),
        )
    }

    /// Create a credential file error
    pub fn credential_file(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialFile, message)
    }

    /// Create an invalid resource path error
    pub fn invalid_resource_path(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidResourcePath, message)
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a request error
    pub fn request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Request, message)
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Server, message)
    }

    /// Create an unknown status error
    pub fn unknown_status(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownStatus, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(status) = self.status {
            write!(f, " (status {})", status.as_u16())?;
        }
        if let Some(body) = self.body.as_ref().filter(|b| !b.is_empty()) {
            let shown = &body[..body.len().min(DISPLAY_BODY_LIMIT)];
            write!(f, "\n{}", String::from_utf8_lossy(shown))?;
            if body.len() > DISPLAY_BODY_LIMIT {
                write!(f, "... ({} bytes truncated)", body.len() - DISPLAY_BODY_LIMIT)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialField::AccessKeyId => write!(f, "access key id"),
            CredentialField::SecretAccessKey => write!(f, "secret access key"),
            CredentialField::Region => write!(f, "region"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingCredential(_) => write!(f, "missing credential"),
            ErrorKind::CredentialFile => write!(f, "credential file error"),
            ErrorKind::InvalidResourcePath => write!(f, "invalid resource path"),
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::Authentication => write!(f, "authentication failed"),
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::Request => write!(f, "request rejected"),
            ErrorKind::Server => write!(f, "server error"),
            ErrorKind::UnknownStatus => write!(f, "unknown status"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
