//! Type-level errors.

use thiserror::Error;

/// Errors from encoding a proposal name into its fixed-width form.
#[derive(Debug, Error)]
pub enum NameError {
    #[error("proposal name is {len} bytes, exceeds the {max}-byte width")]
    TooLong { len: usize, max: usize },

    #[error("proposal name contains the NUL padding sentinel")]
    EmbeddedNul,
}
