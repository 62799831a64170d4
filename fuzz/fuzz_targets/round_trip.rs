#![no_main]

use follower::pipeline::{FollowerDecoder, FollowerEncoder};
use follower::{Context, Decoder, Encoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut transformed = Vec::new();
    let mut restored = Vec::new();
    let ctx = Context::new(1 + data.len() % 64);

    let written = FollowerEncoder::new(data, &mut transformed, ctx)
        .encode()
        .unwrap();
    assert_eq!(written, data.len());
    assert_eq!(transformed.len(), data.len());

    let (read, written) = FollowerDecoder::new(&transformed, &mut restored, ctx)
        .decode()
        .unwrap();
    assert_eq!(restored, data);
    assert_eq!(read, transformed.len());
    assert_eq!(written, restored.len());
});
