/*
 * ApkSig Registry v1.0.0
 * Copyright (c) 2026 Tiash H Kabir / @MrCarb0n.
 * Licensed under the MIT License.
 */

use ring::digest;
use std::fmt;

/// Message digest named by a signature scheme or a content digest kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Standard (JCA) name, e.g. `SHA-256`.
    pub const fn jca_name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => digest::SHA256_OUTPUT_LEN,
            HashAlgorithm::Sha512 => digest::SHA512_OUTPUT_LEN,
        }
    }

    pub fn ring_algorithm(self) -> &'static digest::Algorithm {
        match self {
            HashAlgorithm::Sha256 => &digest::SHA256,
            HashAlgorithm::Sha512 => &digest::SHA512,
        }
    }

    pub(crate) const fn same_as(self, other: HashAlgorithm) -> bool {
        matches!(
            (self, other),
            (HashAlgorithm::Sha256, HashAlgorithm::Sha256)
                | (HashAlgorithm::Sha512, HashAlgorithm::Sha512)
        )
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.jca_name())
    }
}
