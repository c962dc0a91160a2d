#![no_main]
use elias_fano::decode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // decode must never panic on arbitrary bytes: it either succeeds or
    // returns one of EliasFanoError's variants.
    let mut dst = vec![0u32; 1 << 16];
    let _ = decode(data, data.len(), &mut dst);
});
