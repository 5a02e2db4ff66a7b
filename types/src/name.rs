//! Fixed-width proposal names.
//!
//! Proposal names cross the driver boundary as fixed-width 32-byte text:
//! encoded by padding with trailing NUL bytes, decoded by trimming them.
//! The engine stores the exact encoded bytes and returns them verbatim, so
//! a name round-trips through the wire format without corruption. Interior
//! NUL bytes are rejected at construction, so the padding sentinel cannot
//! appear inside a name.

use crate::error::NameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed byte length of an encoded proposal name.
pub const NAME_LEN: usize = 32;

/// A proposal name in its fixed-width encoded form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalName([u8; NAME_LEN]);

impl ProposalName {
    /// Encode a UTF-8 string as a fixed-width name.
    pub fn new(s: &str) -> Result<Self, NameError> {
        let bytes = s.as_bytes();
        if bytes.len() > NAME_LEN {
            return Err(NameError::TooLong {
                len: bytes.len(),
                max: NAME_LEN,
            });
        }
        if bytes.contains(&0) {
            return Err(NameError::EmbeddedNul);
        }
        let mut buf = [0u8; NAME_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self(buf))
    }

    /// The raw encoded bytes, padding included.
    pub fn as_bytes(&self) -> &[u8; NAME_LEN] {
        &self.0
    }

    /// Decode by trimming the trailing padding.
    pub fn as_str(&self) -> &str {
        let end = self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        std::str::from_utf8(&self.0[..end]).unwrap_or("")
    }
}

impl fmt::Debug for ProposalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProposalName({:?})", self.as_str())
    }
}

impl fmt::Display for ProposalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProposalName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
