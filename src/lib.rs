#![forbid(unsafe_code)]

//! Quasi-succinct Elias-Fano encoding for strictly increasing sequences of
//! non-negative 32-bit integers — the archetypal use case being a posting
//! list of document identifiers in an inverted index.
//!
//! The codec is a pure, in-memory transform: callers own both the input
//! sequence and the output buffers on either side. See [`encode`] and
//! [`decode`] for the two operations, and [`EliasFanoError`] for the
//! error model.

pub mod decode;
pub mod encode;
pub mod error;
pub mod params;
pub mod table;

pub use decode::{decode, peek_len};
pub use encode::encode;
pub use error::EliasFanoError;
pub use params::{derive_params, derive_params_with_universe, max_encoded_len, Params};
pub use table::{build_decoding_tables, DecodingTables};

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(sorted: &[u32]) {
        let mut buf = vec![0u8; max_encoded_len(sorted.len())];
        let used = encode(sorted, &mut buf).expect("encode should succeed");
        let mut dst = vec![0u32; sorted.len()];
        let written = decode(&buf, used, &mut dst).expect("decode should succeed");
        assert_eq!(written, sorted.len());
        assert_eq!(&dst, sorted);
    }

    #[test]
    fn public_api_roundtrips_the_spec_examples() {
        roundtrip(&[1]);
        roundtrip(&[1, 2, 3, 4, 5, 6, 7, 8]);
        roundtrip(&[2, 3, 5, 7, 11]);
        roundtrip(&[1_000_000]);
    }

    #[test]
    fn public_api_roundtrips_a_random_ten_thousand_element_sequence() {
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let mut rng = rand::rngs::StdRng::seed_from_u64(0xE1135_FA70);
        let mut universe: Vec<u32> = (1..=1_000_000_000u32).step_by(99_991).collect();
        universe.shuffle(&mut rng);
        let mut sample: Vec<u32> = universe.into_iter().take(10_000).collect();
        sample.sort_unstable();
        sample.dedup();

        roundtrip(&sample);
    }

    #[test]
    fn build_decoding_tables_is_safe_to_call_before_any_decode() {
        build_decoding_tables();
        roundtrip(&[3, 9, 27, 81, 243]);
    }
}
