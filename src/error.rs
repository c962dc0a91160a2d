use thiserror::Error;

/// Errors produced by [`crate::encode`] and [`crate::decode`].
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum EliasFanoError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    #[error("buffer too small: needed {needed} bytes/elements, only {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("truncated input: needed at least {needed} bytes, only {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("decode overflow while reconstructing element {at_index}: corrupted input")]
    DecodeOverflow { at_index: usize },
}
