#![no_main]
use elias_fano::{decode, encode, max_encoded_len};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|gaps: Vec<u16>| {
    if gaps.is_empty() || gaps.len() > 4096 {
        return;
    }

    let mut sorted = Vec::with_capacity(gaps.len());
    let mut last: u64 = 0;
    for &gap in &gaps {
        last += u64::from(gap) + 1;
        if last > u64::from(u32::MAX) {
            return;
        }
        sorted.push(last as u32);
    }

    let mut buf = vec![0u8; max_encoded_len(sorted.len())];
    let used = encode(&sorted, &mut buf).expect("encode of a well-formed sequence must succeed");

    let mut dst = vec![0u32; sorted.len()];
    let written = decode(&buf, used, &mut dst).expect("decode of our own encoding must succeed");

    assert_eq!(written, sorted.len());
    assert_eq!(dst, sorted);
});
