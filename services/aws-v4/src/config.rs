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

use crate::constants::*;
use crate::{AddressingStyle, Credential, Endpoint};
use http::uri::Scheme;
use log::debug;
use s3verb_core::utils::Redact;
use s3verb_core::{Context, CredentialField, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config carries the explicit values given on the command line.
///
/// Every field left as `None` may be filled from the environment by
/// [`Config::from_env`]. Resolution into a [`Credential`] and an
/// [`Endpoint`] happens in [`Config::resolve`].
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - the first non-empty line of `secret_key_file` if it's `is_some`
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// Path of a file holding the secret access key.
    pub secret_key_file: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECURITY_TOKEN`]
    pub session_token: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// `domain` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`S3_DEFAULT_DOMAIN`]
    /// - default to [`DEFAULT_DOMAIN`]
    pub domain: Option<String>,
    /// Send plain `http` instead of `https`.
    pub insecure: bool,
    /// Path style unless told otherwise.
    pub addressing_style: AddressingStyle,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("secret_key_file", &self.secret_key_file)
            .field("session_token", &Redact::from(&self.session_token))
            .field("region", &self.region)
            .field("domain", &self.domain)
            .field("insecure", &self.insecure)
            .field("addressing_style", &self.addressing_style)
            .finish()
    }
}

impl Config {
    /// Fill every unset field from the environment.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        if self.access_key_id.is_none() {
            self.access_key_id = envs.get(AWS_ACCESS_KEY_ID).cloned();
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = envs.get(AWS_SECRET_ACCESS_KEY).cloned();
        }
        if self.session_token.is_none() {
            self.session_token = envs.get(AWS_SECURITY_TOKEN).cloned();
        }
        if self.region.is_none() {
            self.region = envs.get(AWS_DEFAULT_REGION).cloned();
        }
        if self.domain.is_none() {
            self.domain = envs.get(S3_DEFAULT_DOMAIN).cloned();
        }

        self
    }

    /// Resolve the credential and endpoint for one invocation.
    ///
    /// The secret file, if configured, is the only thing read here.
    pub async fn resolve(&self, ctx: &Context) -> Result<(Credential, Endpoint)> {
        let secret_access_key = match &self.secret_key_file {
            Some(path) => read_secret_file(ctx, path).await?,
            None => self.secret_access_key.clone().unwrap_or_default(),
        };
        let access_key_id = self.access_key_id.clone().unwrap_or_default();
        let region = self.region.clone().unwrap_or_default();

        if access_key_id.is_empty() {
            return Err(Error::missing_credential(CredentialField::AccessKeyId));
        }
        if secret_access_key.is_empty() {
            return Err(Error::missing_credential(CredentialField::SecretAccessKey));
        }
        if region.is_empty() {
            return Err(Error::missing_credential(CredentialField::Region));
        }

        let cred = Credential {
            access_key_id,
            secret_access_key,
            session_token: self.session_token.clone().filter(|v| !v.is_empty()),
        };
        let endpoint = Endpoint {
            region,
            domain: self
                .domain
                .clone()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            scheme: if self.insecure {
                Scheme::HTTP
            } else {
                Scheme::HTTPS
            },
            addressing_style: self.addressing_style,
        };
        debug!("resolved credential {cred:?} for endpoint {endpoint:?}");

        Ok((cred, endpoint))
    }
}

async fn read_secret_file(ctx: &Context, path: &str) -> Result<String> {
    let content = ctx.file_read_as_string(path).await.map_err(|e| {
        Error::credential_file(format!("failed to read secret file {path}")).with_source(e)
    })?;

    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::credential_file(format!("secret file {path} holds no secret")))
}
