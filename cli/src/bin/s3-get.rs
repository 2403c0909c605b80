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

use clap::Parser;
use log::info;
use s3verb_cli::{exit_code, report, CommonArgs, EXIT_OPERATION_ERROR};
use tokio::io::AsyncWriteExt;

/// Fetch an object from an S3-compatible store and write it to stdout.
#[derive(Debug, Parser)]
#[command(name = "s3-get", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Object to fetch, as /bucket/key
    #[arg(value_name = "PATH")]
    path: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.common.init_logging();

    let result = cli.common.client().get_object(&cli.path).await;
    let success = match &result {
        Ok(success) => success,
        Err(err) => {
            report("s3-get", &cli.path, err);
            return ExitCode::from(exit_code(&result));
        }
    };
    info!("fetched {} ({} bytes)", cli.path, success.body.len());

    let mut stdout = tokio::io::stdout();
    let written = match stdout.write_all(&success.body).await {
        Ok(()) => stdout.flush().await,
        Err(err) => Err(err),
    };
    if let Err(err) = written {
        eprintln!("s3-get: {}: failed to write to stdout: {err}", cli.path);
        return ExitCode::from(EXIT_OPERATION_ERROR);
    }

    ExitCode::from(exit_code(&result))
}
