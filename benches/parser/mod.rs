use criterion::{Criterion, Throughput};
use evhttp::parser::{Parsed, ResponseParser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BODY_LEN: usize = 4096;

const HEAD: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n";

pub fn bench_parse_single_chunk(c: &mut Criterion) {
    let mut response = HEAD.to_vec();
    response.extend(core::iter::repeat(0xA5u8).take(BODY_LEN));

    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes(response.len() as u64));
    group.bench_function("single_chunk", |b| {
        b.iter(|| {
            let mut parser = ResponseParser::new();
            match parser.feed(&response) {
                Ok(Parsed::Status(code)) => assert_eq!(code, 200),
                other => panic!("unexpected step: {:?}", other),
            }
            parser.accept_status();
            match parser.feed(&response) {
                Ok(Parsed::Body(body)) => assert_eq!(body.len(), BODY_LEN),
                other => panic!("unexpected step: {:?}", other),
            }
        })
    });
    group.finish();
}

pub fn bench_parse_fragmented_body(c: &mut Criterion) {
    let body = vec![0xA5u8; BODY_LEN];

    // Fixed seed so every run sees the same fragmentation.
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut chunks: Vec<&[u8]> = Vec::new();
    let mut at = 0;
    while at < body.len() {
        let next = (at + rng.gen_range(1..=256)).min(body.len());
        chunks.push(&body[at..next]);
        at = next;
    }

    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes((HEAD.len() + BODY_LEN) as u64));
    group.bench_function("fragmented_body", |b| {
        b.iter(|| {
            let mut parser = ResponseParser::new();
            parser.feed(HEAD).unwrap();
            parser.accept_status();
            parser.feed(HEAD).unwrap();
            let mut received = 0;
            for chunk in &chunks {
                match parser.feed(chunk) {
                    Ok(Parsed::Body(fragment)) => received += fragment.len(),
                    other => panic!("unexpected step: {:?}", other),
                }
            }
            assert_eq!(received, BODY_LEN);
        })
    });
    group.finish();
}
