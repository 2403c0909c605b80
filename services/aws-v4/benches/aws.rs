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
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use http::HeaderMap;
use http::Method;
use s3verb_aws_v4::{generate_signing_key, uri_encode, Credential, RequestSigner};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("aws_v4");

    let cred = Credential {
        access_key_id: "access_key_id".to_string(),
        secret_access_key: "secret_access_key".to_string(),
        ..Default::default()
    };
    let signer = RequestSigner::new("test");

    group.bench_function("sign_delete", |b| {
        b.iter(|| {
            signer
                .sign_request(
                    &cred,
                    Method::DELETE,
                    "127.0.0.1:9000",
                    uri_encode("/bucket/hello"),
                    HeaderMap::new(),
                    Bytes::new(),
                )
                .expect("must success")
        })
    });

    let payload = Bytes::from(vec![b'x'; 1024 * 1024]);
    group.bench_function("sign_put_1mib", |b| {
        b.iter(|| {
            signer
                .sign_request(
                    &cred,
                    Method::PUT,
                    "127.0.0.1:9000",
                    uri_encode("/bucket/hello"),
                    HeaderMap::new(),
                    payload.clone(),
                )
                .expect("must success")
        })
    });

    group.bench_function("signing_key", |b| {
        b.iter(|| generate_signing_key("secret_access_key", "20130524", "test", "s3"))
    });

    group.bench_function("uri_encode", |b| {
        b.iter(|| uri_encode("/bucket/dir/some file with $pecial chars & ünïcode.txt"))
    });

    group.finish()
}
