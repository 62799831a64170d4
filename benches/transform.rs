//! A benchmark for the forward and reverse passes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use follower::pipeline::{FollowerDecoder, FollowerEncoder};
use follower::{Context, Decoder, Encoder};

fn get_large_array(items: usize) -> Vec<u8> {
    let mut input = Vec::new();
    let mut v = 0;
    for i in 0..items {
        v += 3;
        // Long runs of zeros, with some noise.
        let noise = if i % 16 < 4 { (i ^ v) as u8 } else { 0 };
        input.push(noise);
    }
    input
}

fn encode_buffer(input: &[u8]) {
    let mut output = Vec::new();
    let written = FollowerEncoder::new(input, &mut output, Context::default())
        .encode()
        .unwrap();
    black_box(written);
}

fn decode_buffer(input: &[u8]) {
    let mut output = Vec::new();
    let stat = FollowerDecoder::new(input, &mut output, Context::default())
        .decode()
        .unwrap();
    black_box(stat);
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let input = get_large_array(1_000_000);
    let mut encoded = Vec::new();
    let _ = FollowerEncoder::new(&input, &mut encoded, Context::default())
        .encode()
        .unwrap();

    c.bench_function("encode 1mb", |b| b.iter(|| encode_buffer(&input)));
    c.bench_function("decode 1mb", |b| b.iter(|| decode_buffer(&encoded)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
