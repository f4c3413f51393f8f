use criterion::{criterion_group, criterion_main};

mod client;
mod parser;

criterion_group!(
    benches,
    parser::bench_parse_single_chunk,
    parser::bench_parse_fragmented_body,
    client::bench_request_cycle
);
criterion_main!(benches);
