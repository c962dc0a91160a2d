//! Self-test driver (external collaborator, not part of the core codec).
//!
//! Exercises a geometric progression of `n` from 10 up to 10^9 against a
//! fixed universe `u = 10^9`: for each `n`, draws a random strictly
//! increasing sequence, round-trips it through [`elias_fano::encode`] /
//! [`elias_fano::decode`], and asserts equality. Progress is reported
//! through `tracing`; the final summary table is plain stdout.

use std::time::Instant;

use elias_fano::{decode, encode, max_encoded_len};
use rand::prelude::*;
use tracing::info;

const UNIVERSE: u32 = 1_000_000_000;
const MAX_N: u64 = 1_000_000_000;

fn random_sorted_sequence(n: usize, universe: u32, rng: &mut impl Rng) -> Vec<u32> {
    // Reservoir-free approximate sampling: draw n/|universe| spaced
    // candidates and perturb, which is sufficient for a self-test (exact
    // uniform sampling without replacement over a 10^9 universe for the
    // largest n values would itself dominate the benchmark's run time).
    let stride = (u64::from(universe) / n as u64).max(1);
    let mut values = Vec::with_capacity(n);
    let mut cursor = 0u64;
    for _ in 0..n {
        cursor += rng.gen_range(1, stride + 1);
        if cursor > u64::from(universe) {
            break;
        }
        values.push(cursor as u32);
    }
    values
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut rng = StdRng::seed_from_u64(0x5E1F_7E57);
    let mut summary = Vec::new();

    let mut n: u64 = 10;
    while n <= MAX_N {
        let pre = Instant::now();
        let sequence = random_sorted_sequence(n as usize, UNIVERSE, &mut rng);
        let actual_n = sequence.len();

        let mut buf = vec![0u8; max_encoded_len(actual_n)];
        let used = encode(&sequence, &mut buf).expect("encode should succeed in self-test");

        let mut dst = vec![0u32; actual_n];
        let written = decode(&buf, used, &mut dst).expect("decode should succeed in self-test");

        assert_eq!(written, actual_n, "decoded count mismatch for n = {n}");
        assert_eq!(dst, sequence, "round-trip mismatch for n = {n}");

        let elapsed = pre.elapsed();
        let bits_per_element = (used * 8) as f64 / actual_n.max(1) as f64;

        info!(
            n = actual_n,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            bits_per_element,
            "round-trip verified"
        );
        summary.push((actual_n, elapsed, bits_per_element));

        n *= 10;
    }

    println!("{:>12} {:>14} {:>16}", "n", "elapsed", "bits/element");
    for (n, elapsed, bits_per_element) in summary {
        println!("{n:>12} {elapsed:>14?} {bits_per_element:>16.3}");
    }
}
