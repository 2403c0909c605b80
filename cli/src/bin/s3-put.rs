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

use std::process::ExitCode;

use bytes::Bytes;
use clap::Parser;
use log::info;
use s3verb_cli::{exit_code, report, CommonArgs, EXIT_USAGE_ERROR};

/// Upload a local file to an S3-compatible store.
#[derive(Debug, Parser)]
#[command(name = "s3-put", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Local file to upload
    #[arg(short = 'T', long = "upload-file", value_name = "FILE")]
    upload_file: String,

    /// Content type stored with the object
    #[arg(short = 'c', long, default_value = "application/octet-stream")]
    content_type: String,

    /// Destination, as /bucket/key
    #[arg(value_name = "PATH")]
    path: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.common.init_logging();

    let body = match tokio::fs::read(&cli.upload_file).await {
        Ok(content) => Bytes::from(content),
        Err(err) => {
            eprintln!("s3-put: cannot read {}: {err}", cli.upload_file);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let size = body.len();
    let result = cli
        .common
        .client()
        .put_object(&cli.path, body, &cli.content_type)
        .await;
    match &result {
        Ok(success) => info!("uploaded {} to {} ({})", size, cli.path, success.status),
        Err(err) => report("s3-put", &cli.path, err),
    }

    ExitCode::from(exit_code(&result))
}
