//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package marlc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use marlc_lex::lex;

fn token_count(source: &str) -> usize {
    lex("bench", source).map(|tokens| tokens.len()).unwrap_or(0)
}

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "local x = 42; { a: x, b: x + 1 }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_local", |b| {
        b.iter(|| token_count(black_box("local x = 42;")))
    });

    group.bench_function("small_object", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_document");

    // A representative config document exercising every lexeme class.
    let source = r#"
        // Deployment description
        local replicas = 3;
        local image = "registry.example.com/app:v1.2";

        {
            name: "app",
            replicas: replicas,
            scale: replicas * 2.5e1,
            root_name: $.name,
            banner: |||
              started
                ok
            |||,
            path: @"C:\share\data",
            env: [
                { key: "MODE", value: if replicas > 1 then "ha" else "single" },
                { key: "LIMIT", value: "" + 0.25 },
            ],
            /* computed elsewhere */
            checksum: null,
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("config_document", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    let repeated = source.repeat(64);
    group.throughput(Throughput::Bytes(repeated.len() as u64));
    group.bench_function("config_document_x64", |b| {
        b.iter(|| token_count(black_box(repeated.as_str())))
    });

    group.finish();
}

criterion_group!(benches, bench_lexer_simple, bench_lexer_document);
criterion_main!(benches);
