//! Benchmarks for DSN rendering and parsing.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use crdb_config::{Connection, Options, Parameters, SslMode};
use crdb_dsn::{parse, render};

fn full_connection() -> Connection {
    Connection::new("user", "password", "127.0.0.1", 26257, "defaultdb").with_parameters(
        Parameters::new()
            .application_name("application_name")
            .ssl_mode(SslMode::VerifyFull)
            .ssl_cert("path/to/ssl/cert")
            .ssl_key("path/to/ssl/key")
            .ssl_root_cert("path/to/ssl/root")
            .options(Options::new().cluster("cluster_id").variable("name", "value")),
    )
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let bare = full_connection().without_parameters();
    group.bench_function("without_parameters", |b| {
        b.iter(|| black_box(render(black_box(&bare))))
    });

    let full = full_connection();
    group.bench_function("all_parameters", |b| {
        b.iter(|| black_box(render(black_box(&full))))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let dsn = render(&full_connection()).expect("full connection renders");

    c.bench_function("parse/all_parameters", |b| {
        b.iter(|| black_box(parse(black_box(&dsn))))
    });
}

criterion_group!(benches, bench_render, bench_parse);
criterion_main!(benches);
