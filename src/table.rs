//! Decoding tables (part of component C): a 256-entry lookup table built
//! once and shared read-only by every decode call.

use std::sync::OnceLock;

/// Process-wide decoding tables, indexed by byte value.
pub struct DecodingTables {
    /// `dnum[b]`: number of 1-bits in `b`.
    pub dnum: [u8; 256],
    /// `hi[b][k]`: number of 0-bits preceding the k-th 1-bit in `b`,
    /// scanning MSB to LSB. Only `0..dnum[b]` entries are meaningful.
    pub hi: [[u8; 8]; 256],
    /// `carry[b]`: trailing zero bits after the last 1-bit (8 if `b == 0`).
    pub carry: [u8; 256],
}

impl DecodingTables {
    fn build() -> Self {
        let mut dnum = [0u8; 256];
        let mut hi = [[0u8; 8]; 256];
        let mut carry = [0u8; 256];

        for b in 0..=255u8 {
            let mut zeros = 0u8;
            let mut count = 0usize;
            for bit_pos in (0..8).rev() {
                if (b >> bit_pos) & 1 == 1 {
                    hi[b as usize][count] = zeros;
                    count += 1;
                    zeros = 0;
                } else {
                    zeros += 1;
                }
            }
            dnum[b as usize] = count as u8;
            carry[b as usize] = zeros;
        }

        DecodingTables { dnum, hi, carry }
    }
}

static TABLES: OnceLock<DecodingTables> = OnceLock::new();

/// Builds the decoding tables if they have not been built yet, and returns
/// a reference to the process-wide, read-only instance.
///
/// Idempotent and safe to call from multiple threads; [`crate::decode`]
/// also calls this internally, so calling it up front is an optimization
/// (avoids paying the one-time build cost on the decode call's critical
/// path) rather than a correctness requirement.
pub fn build_decoding_tables() -> &'static DecodingTables {
    TABLES.get_or_init(DecodingTables::build)
}
