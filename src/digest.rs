/*
 * ApkSig Registry v1.0.0
 * Copyright (c) 2026 Tiash H Kabir / @MrCarb0n.
 * Licensed under the MIT License.
 */

//! Content digest kinds of the APK Signing Block.
//!
//! These only describe how signed content is digested; computing the digests
//! is left to the signing and verification engines.

use crate::hash::HashAlgorithm;
use std::fmt;

const ONE_MIB: usize = 1024 * 1024;
const VERITY_BLOCK_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentDigestAlgorithm {
    /// SHA2-256 over 1 MB chunks of the signed sections.
    ChunkedSha256,
    /// SHA2-512 over 1 MB chunks of the signed sections.
    ChunkedSha512,
    /// SHA2-256 over 4 KB blocks, fs-verity style. The root hash is followed
    /// by the content length as 8 little-endian bytes.
    VerityChunkedSha256,
}

impl ContentDigestAlgorithm {
    pub const ALL: [ContentDigestAlgorithm; 3] = [
        ContentDigestAlgorithm::ChunkedSha256,
        ContentDigestAlgorithm::ChunkedSha512,
        ContentDigestAlgorithm::VerityChunkedSha256,
    ];

    pub const fn id(self) -> u32 {
        match self {
            ContentDigestAlgorithm::ChunkedSha256 => 1,
            ContentDigestAlgorithm::ChunkedSha512 => 2,
            ContentDigestAlgorithm::VerityChunkedSha256 => 3,
        }
    }

    pub const fn hash(self) -> HashAlgorithm {
        match self {
            ContentDigestAlgorithm::ChunkedSha256 => HashAlgorithm::Sha256,
            ContentDigestAlgorithm::ChunkedSha512 => HashAlgorithm::Sha512,
            ContentDigestAlgorithm::VerityChunkedSha256 => HashAlgorithm::Sha256,
        }
    }

    pub const fn jca_message_digest_algorithm(self) -> &'static str {
        self.hash().jca_name()
    }

    /// Size in bytes of the digest of a single chunk.
    pub const fn chunk_digest_output_size(self) -> usize {
        self.hash().output_len()
    }

    pub const fn chunk_size(self) -> usize {
        match self {
            ContentDigestAlgorithm::ChunkedSha256 | ContentDigestAlgorithm::ChunkedSha512 => {
                ONE_MIB
            }
            ContentDigestAlgorithm::VerityChunkedSha256 => VERITY_BLOCK_SIZE,
        }
    }

    pub const fn is_verity(self) -> bool {
        matches!(self, ContentDigestAlgorithm::VerityChunkedSha256)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ContentDigestAlgorithm::ChunkedSha256 => "CHUNKED_SHA256",
            ContentDigestAlgorithm::ChunkedSha512 => "CHUNKED_SHA512",
            ContentDigestAlgorithm::VerityChunkedSha256 => "VERITY_CHUNKED_SHA256",
        }
    }

    pub fn find_by_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|alg| alg.id() == id)
    }
}

impl fmt::Display for ContentDigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
