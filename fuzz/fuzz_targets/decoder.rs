#![no_main]

use follower::pipeline::{FollowerDecoder, FollowerEncoder};
use follower::{Context, Decoder, Encoder};
use libfuzzer_sys::fuzz_target;

// Any buffer is a valid transformed stream. Decoding and then encoding it again
// must give back the same buffer.
fuzz_target!(|data: &[u8]| {
    let mut restored = Vec::new();
    let mut transformed = Vec::new();
    let ctx = Context::default();

    let _ = FollowerDecoder::new(data, &mut restored, ctx)
        .decode()
        .unwrap();
    let _ = FollowerEncoder::new(&restored, &mut transformed, ctx)
        .encode()
        .unwrap();
    assert_eq!(transformed, data);
});
