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

//! Flag parsing, logging and exit-code glue shared by the `s3-*` binaries.

use clap::Args;
use log::debug;
use s3verb_aws_v4::{AddressingStyle, Client, Config, Success};
use s3verb_core::{Context, Error, OsEnv, Result};
use s3verb_file_read_tokio::TokioFileRead;
use s3verb_http_send_reqwest::ReqwestHttpSend;

/// Exit code of a fully successful invocation.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code when a request was sent and failed.
pub const EXIT_OPERATION_ERROR: u8 = 1;
/// Exit code for a bad invocation detected before any request.
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Flags accepted by every verb.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Access key id [default: $AWS_ACCESS_KEY_ID]
    #[arg(short = 'k', long = "key", value_name = "KEY")]
    pub key: Option<String>,

    /// File whose first non-empty line is the secret access key
    /// [default: $AWS_SECRET_ACCESS_KEY]
    #[arg(short = 's', long = "secret", value_name = "FILE")]
    pub secret: Option<String>,

    /// Security token for temporary credentials [default: $AWS_SECURITY_TOKEN]
    #[arg(short = 't', long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// Region [default: $AWS_DEFAULT_REGION]
    #[arg(short = 'r', long)]
    pub region: Option<String>,

    /// Domain of the object store [default: $S3_DEFAULT_DOMAIN or amazonaws.com]
    #[arg(long)]
    pub domain: Option<String>,

    /// Use http instead of https
    #[arg(short, long)]
    pub insecure: bool,

    /// Address the bucket as a subdomain instead of the first path segment
    #[arg(long)]
    pub virtual_host: bool,

    /// Log each request
    #[arg(short, long)]
    pub verbose: bool,

    /// Log canonical requests and signing details
    #[arg(long)]
    pub debug: bool,
}

impl CommonArgs {
    /// Default log filter implied by `--verbose` and `--debug`.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    /// Initialise `env_logger`; `RUST_LOG` still takes precedence.
    pub fn init_logging(&self) {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level()),
        )
        .try_init();
    }

    /// Build the engine configuration: flags first, then the environment.
    pub fn config(&self, ctx: &Context) -> Config {
        Config {
            access_key_id: self.key.clone(),
            secret_key_file: self.secret.clone(),
            session_token: self.token.clone(),
            region: self.region.clone(),
            domain: self.domain.clone(),
            insecure: self.insecure,
            addressing_style: if self.virtual_host {
                AddressingStyle::VirtualHosted
            } else {
                AddressingStyle::Path
            },
            ..Default::default()
        }
        .from_env(ctx)
    }

    /// Client wired to the real file system, network and environment.
    pub fn client(&self) -> Client {
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_http_send(ReqwestHttpSend::default())
            .with_env(OsEnv);
        let config = self.config(&ctx);
        debug!("using {config:?}");

        Client::new(ctx, config)
    }
}

/// Map one operation result to a process exit code.
pub fn exit_code(result: &Result<Success>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(err) if err.is_usage_error() => EXIT_USAGE_ERROR,
        Err(_) => EXIT_OPERATION_ERROR,
    }
}

/// Exit code of a batch: the worst code of any of its results.
pub fn worst_exit_code<'a>(results: impl IntoIterator<Item = &'a Result<Success>>) -> u8 {
    results
        .into_iter()
        .map(exit_code)
        .max()
        .unwrap_or(EXIT_SUCCESS)
}

/// Print a failed operation for the operator.
pub fn report(verb: &str, path: &str, err: &Error) {
    eprintln!("{verb}: {path}: {err}");
}
