//! Sequence normalization and MD5 digests.
//!
//! Dictionary checksums are computed over the *normalized* sequence: only
//! printable, non-space ASCII bytes (`!` through `~`) are kept, and lowercase
//! letters are folded to uppercase. Line breaks, spaces, tabs and control
//! characters never contribute to either the length or the digest.

use std::fmt;

/// First byte kept by normalization (`!`).
const FIRST_PRINTABLE: u8 = b'!';

/// Last byte kept by normalization (`~`).
const LAST_PRINTABLE: u8 = b'~';

/// A sequence reduced to printable, uppercase bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedSequence {
    bases: Vec<u8>,
}

impl NormalizedSequence {
    /// Normalize raw sequence bytes, reusing the allocation.
    #[must_use]
    pub fn from_raw(mut raw: Vec<u8>) -> Self {
        raw.retain(|b| (FIRST_PRINTABLE..=LAST_PRINTABLE).contains(b));
        raw.make_ascii_uppercase();
        Self { bases: raw }
    }

    /// Number of retained bytes (the `LN` value).
    #[must_use]
    pub fn len(&self) -> u64 {
        self.bases.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    /// Compute the MD5 digest of the normalized bytes.
    #[must_use]
    pub fn digest(&self) -> SequenceDigest {
        SequenceDigest(md5::compute(&self.bases))
    }
}

/// 128-bit MD5 checksum of a normalized sequence (the `M5` value).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SequenceDigest(md5::Digest);

impl fmt::Display for SequenceDigest {
    /// Lowercase hex, 32 characters, no separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl fmt::Debug for SequenceDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SequenceDigest({:x})", self.0)
    }
}
