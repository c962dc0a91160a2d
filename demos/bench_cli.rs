//! Minimal benchmark driver (external collaborator, not part of the core
//! codec) — mirrors the shape of a quick ad-hoc timing run rather than a
//! full criterion report; see `benches/codec_benchmark.rs` for the latter.

use std::time::Instant;

use elias_fano::{decode, encode, max_encoded_len};
use rand::prelude::*;

fn main() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut sequence: Vec<u32> = (0..1_000_000u32)
        .map(|_| rng.gen_range(1, 1_000_000_000))
        .collect();
    sequence.sort_unstable();
    sequence.dedup();

    let mut buf = vec![0u8; max_encoded_len(sequence.len())];

    let pre = Instant::now();
    let used = encode(&sequence, &mut buf).unwrap();
    println!("encode: {:?} ({} bytes for {} elements)", pre.elapsed(), used, sequence.len());

    let mut dst = vec![0u32; sequence.len()];
    let pre = Instant::now();
    for _ in 0..20 {
        decode(&buf, used, &mut dst).unwrap();
    }
    println!("decode: {:?} (20 iterations)", pre.elapsed());
}
