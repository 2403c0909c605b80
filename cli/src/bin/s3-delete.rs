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
use s3verb_cli::{report, worst_exit_code, CommonArgs};

/// Delete objects from an S3-compatible store.
#[derive(Debug, Parser)]
#[command(name = "s3-delete", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Objects to delete, as /bucket/key
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.common.init_logging();

    let client = cli.common.client();
    let mut results = Vec::with_capacity(cli.paths.len());
    for path in &cli.paths {
        let result = client.delete_object(path).await;
        match &result {
            Ok(success) => info!("deleted {path} ({})", success.status),
            Err(err) => report("s3-delete", path, err),
        }
        results.push(result);
    }

    ExitCode::from(worst_exit_code(&results))
}
