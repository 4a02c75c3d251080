/*
 * ApkSig Registry v1.0.0
 * Copyright (c) 2026 Tiash H Kabir / @MrCarb0n.
 * Licensed under the MIT License.
 */

//! APK Signing Block signature algorithms.
//!
//! The catalog is a closed, static table. Ids are part of the signing block
//! wire format and are never renumbered or reused.

use crate::{digest::ContentDigestAlgorithm, error::RegistryError, hash::HashAlgorithm, sdk};
use std::{fmt, str::FromStr};

/// PSS trailer byte (`0xBC`), trailerField 1 in ASN.1 terms.
pub const PSS_TRAILER_BC: u8 = 0xbc;

/// Key family a signature algorithm requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    Rsa,
    Ec,
    Dsa,
}

impl KeyAlgorithm {
    /// JCA key algorithm name: `RSA`, `EC` or `DSA`.
    pub const fn jca_name(self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => "RSA",
            KeyAlgorithm::Ec => "EC",
            KeyAlgorithm::Dsa => "DSA",
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.jca_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskGeneration {
    Mgf1(HashAlgorithm),
}

impl MaskGeneration {
    pub const fn hash(self) -> HashAlgorithm {
        match self {
            MaskGeneration::Mgf1(h) => h,
        }
    }
}

impl fmt::Display for MaskGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskGeneration::Mgf1(h) => write!(f, "MGF1 with {}", h),
        }
    }
}

/// RSASSA-PSS parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PssParameters {
    pub digest: HashAlgorithm,
    pub mgf: MaskGeneration,
    /// Salt length in bytes.
    pub salt_len: usize,
    /// Trailer byte appended to the encoded message.
    pub trailer: u8,
}

impl PssParameters {
    /// The only PSS shape the signing block uses: one hash for message and
    /// MGF1, salt as long as the digest, trailer 0xBC. Table entries spell
    /// their parameters out and are checked against this at compile time.
    pub const fn for_hash(hash: HashAlgorithm) -> Self {
        Self {
            digest: hash,
            mgf: MaskGeneration::Mgf1(hash),
            salt_len: hash.output_len(),
            trailer: PSS_TRAILER_BC,
        }
    }

    /// ASN.1 `trailerField` value. Only `1` (trailer byte 0xBC) is defined.
    pub const fn trailer_field(&self) -> u32 {
        1
    }
}

/// Signature scheme with its parameters. Only PSS carries explicit ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    RsaPss(PssParameters),
    RsaPkcs1V15(HashAlgorithm),
    Ecdsa(HashAlgorithm),
    Dsa(HashAlgorithm),
}

impl SignatureScheme {
    pub const fn name(&self) -> &'static str {
        match self {
            SignatureScheme::RsaPss(_) => "RSA-PSS",
            SignatureScheme::RsaPkcs1V15(_) => "RSA-PKCS1v1.5",
            SignatureScheme::Ecdsa(_) => "ECDSA",
            SignatureScheme::Dsa(_) => "DSA",
        }
    }

    pub const fn hash(&self) -> HashAlgorithm {
        match self {
            SignatureScheme::RsaPss(p) => p.digest,
            SignatureScheme::RsaPkcs1V15(h)
            | SignatureScheme::Ecdsa(h)
            | SignatureScheme::Dsa(h) => *h,
        }
    }

    /// Key family the scheme operates on.
    pub const fn key_algorithm(&self) -> KeyAlgorithm {
        match self {
            SignatureScheme::RsaPss(_) | SignatureScheme::RsaPkcs1V15(_) => KeyAlgorithm::Rsa,
            SignatureScheme::Ecdsa(_) => KeyAlgorithm::Ec,
            SignatureScheme::Dsa(_) => KeyAlgorithm::Dsa,
        }
    }

    pub const fn parameters(&self) -> Option<&PssParameters> {
        match self {
            SignatureScheme::RsaPss(p) => Some(p),
            _ => None,
        }
    }

    /// JCA `Signature` algorithm name, e.g. `SHA256withRSA/PSS`.
    pub const fn jca_name(&self) -> &'static str {
        match self {
            SignatureScheme::RsaPss(p) => match p.digest {
                HashAlgorithm::Sha256 => "SHA256withRSA/PSS",
                HashAlgorithm::Sha512 => "SHA512withRSA/PSS",
            },
            SignatureScheme::RsaPkcs1V15(h) => match h {
                HashAlgorithm::Sha256 => "SHA256withRSA",
                HashAlgorithm::Sha512 => "SHA512withRSA",
            },
            SignatureScheme::Ecdsa(h) => match h {
                HashAlgorithm::Sha256 => "SHA256withECDSA",
                HashAlgorithm::Sha512 => "SHA512withECDSA",
            },
            SignatureScheme::Dsa(h) => match h {
                HashAlgorithm::Sha256 => "SHA256withDSA",
                HashAlgorithm::Sha512 => "SHA512withDSA",
            },
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureScheme::RsaPss(p) => write!(
                f,
                "{} ({}, {}, salt {} bytes, trailer {:#04x})",
                self.name(),
                p.digest,
                p.mgf,
                p.salt_len,
                p.trailer
            ),
            _ => write!(f, "{} with {}", self.name(), self.hash()),
        }
    }
}

/// APK Signing Block signature algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// RSASSA-PSS with SHA2-256 digest, SHA2-256 MGF1, 32 bytes of salt,
    /// trailer 0xbc. Content digested using SHA2-256 in 1 MB chunks.
    RsaPssWithSha256,
    /// RSASSA-PSS with SHA2-512 digest, SHA2-512 MGF1, 64 bytes of salt,
    /// trailer 0xbc. Content digested using SHA2-512 in 1 MB chunks.
    RsaPssWithSha512,
    /// RSASSA-PKCS1-v1_5 with SHA2-256, content in 1 MB SHA2-256 chunks.
    RsaPkcs1V15WithSha256,
    /// RSASSA-PKCS1-v1_5 with SHA2-512, content in 1 MB SHA2-512 chunks.
    RsaPkcs1V15WithSha512,
    /// ECDSA with SHA2-256, content in 1 MB SHA2-256 chunks.
    EcdsaWithSha256,
    /// ECDSA with SHA2-512, content in 1 MB SHA2-512 chunks.
    EcdsaWithSha512,
    /// DSA with SHA2-256, content in 1 MB SHA2-256 chunks.
    DsaWithSha256,
    /// RSASSA-PKCS1-v1_5 with SHA2-256, content digested in 4 KB blocks the
    /// way fs-verity does, followed by the content length.
    VerityRsaPkcs1V15WithSha256,
    /// ECDSA with SHA2-256 over the verity content digest.
    VerityEcdsaWithSha256,
    /// DSA with SHA2-256 over the verity content digest.
    VerityDsaWithSha256,
}

/// One catalog entry. All fields are given explicitly in the table.
#[derive(Debug, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    algorithm: SignatureAlgorithm,
    id: u32,
    name: &'static str,
    content_digest: ContentDigestAlgorithm,
    key_algorithm: KeyAlgorithm,
    scheme: SignatureScheme,
    min_sdk_version: u32,
}

impl AlgorithmDescriptor {
    pub const fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Canonical constant name, e.g. `RSA_PSS_WITH_SHA256`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn content_digest_algorithm(&self) -> ContentDigestAlgorithm {
        self.content_digest
    }

    pub const fn key_algorithm(&self) -> KeyAlgorithm {
        self.key_algorithm
    }

    pub const fn signature_scheme(&self) -> &SignatureScheme {
        &self.scheme
    }

    pub const fn min_sdk_version(&self) -> u32 {
        self.min_sdk_version
    }
}

const SIGNATURE_ALGORITHM_COUNT: usize = 10;

const DESCRIPTORS: [AlgorithmDescriptor; SIGNATURE_ALGORITHM_COUNT] = [
    AlgorithmDescriptor {
        algorithm: SignatureAlgorithm::RsaPssWithSha256,
        id: 0x0101,
        name: "RSA_PSS_WITH_SHA256",
        content_digest: ContentDigestAlgorithm::ChunkedSha256,
        key_algorithm: KeyAlgorithm::Rsa,
        scheme: SignatureScheme::RsaPss(PssParameters {
            digest: HashAlgorithm::Sha256,
            mgf: MaskGeneration::Mgf1(HashAlgorithm::Sha256),
            salt_len: 256 / 8,
            trailer: PSS_TRAILER_BC,
        }),
        min_sdk_version: sdk::N,
    },
    AlgorithmDescriptor {
        algorithm: SignatureAlgorithm::RsaPssWithSha512,
        id: 0x0102,
        name: "RSA_PSS_WITH_SHA512",
        content_digest: ContentDigestAlgorithm::ChunkedSha512,
        key_algorithm: KeyAlgorithm::Rsa,
        scheme: SignatureScheme::RsaPss(PssParameters {
            digest: HashAlgorithm::Sha512,
            mgf: MaskGeneration::Mgf1(HashAlgorithm::Sha512),
            salt_len: 512 / 8,
            trailer: PSS_TRAILER_BC,
        }),
        min_sdk_version: sdk::N,
    },
    AlgorithmDescriptor {
        algorithm: SignatureAlgorithm::RsaPkcs1V15WithSha256,
        id: 0x0103,
        name: "RSA_PKCS1_V1_5_WITH_SHA256",
        content_digest: ContentDigestAlgorithm::ChunkedSha256,
        key_algorithm: KeyAlgorithm::Rsa,
        scheme: SignatureScheme::RsaPkcs1V15(HashAlgorithm::Sha256),
        min_sdk_version: sdk::N,
    },
    AlgorithmDescriptor {
        algorithm: SignatureAlgorithm::RsaPkcs1V15WithSha512,
        id: 0x0104,
        name: "RSA_PKCS1_V1_5_WITH_SHA512",
        content_digest: ContentDigestAlgorithm::ChunkedSha512,
        key_algorithm: KeyAlgorithm::Rsa,
        scheme: SignatureScheme::RsaPkcs1V15(HashAlgorithm::Sha512),
        min_sdk_version: sdk::N,
    },
    AlgorithmDescriptor {
        algorithm: SignatureAlgorithm::EcdsaWithSha256,
        id: 0x0201,
        name: "ECDSA_WITH_SHA256",
        content_digest: ContentDigestAlgorithm::ChunkedSha256,
        key_algorithm: KeyAlgorithm::Ec,
        scheme: SignatureScheme::Ecdsa(HashAlgorithm::Sha256),
        min_sdk_version: sdk::N,
    },
    AlgorithmDescriptor {
        algorithm: SignatureAlgorithm::EcdsaWithSha512,
        id: 0x0202,
        name: "ECDSA_WITH_SHA512",
        content_digest: ContentDigestAlgorithm::ChunkedSha512,
        key_algorithm: KeyAlgorithm::Ec,
        scheme: SignatureScheme::Ecdsa(HashAlgorithm::Sha512),
        min_sdk_version: sdk::N,
    },
    AlgorithmDescriptor {
        algorithm: SignatureAlgorithm::DsaWithSha256,
        id: 0x0301,
        name: "DSA_WITH_SHA256",
        content_digest: ContentDigestAlgorithm::ChunkedSha256,
        key_algorithm: KeyAlgorithm::Dsa,
        scheme: SignatureScheme::Dsa(HashAlgorithm::Sha256),
        min_sdk_version: sdk::N,
    },
    AlgorithmDescriptor {
        algorithm: SignatureAlgorithm::VerityRsaPkcs1V15WithSha256,
        id: 0x0421,
        name: "VERITY_RSA_PKCS1_V1_5_WITH_SHA256",
        content_digest: ContentDigestAlgorithm::VerityChunkedSha256,
        key_algorithm: KeyAlgorithm::Rsa,
        scheme: SignatureScheme::RsaPkcs1V15(HashAlgorithm::Sha256),
        min_sdk_version: sdk::P,
    },
    AlgorithmDescriptor {
        algorithm: SignatureAlgorithm::VerityEcdsaWithSha256,
        id: 0x0423,
        name: "VERITY_ECDSA_WITH_SHA256",
        content_digest: ContentDigestAlgorithm::VerityChunkedSha256,
        key_algorithm: KeyAlgorithm::Ec,
        scheme: SignatureScheme::Ecdsa(HashAlgorithm::Sha256),
        min_sdk_version: sdk::P,
    },
    AlgorithmDescriptor {
        algorithm: SignatureAlgorithm::VerityDsaWithSha256,
        id: 0x0425,
        name: "VERITY_DSA_WITH_SHA256",
        content_digest: ContentDigestAlgorithm::VerityChunkedSha256,
        key_algorithm: KeyAlgorithm::Dsa,
        scheme: SignatureScheme::Dsa(HashAlgorithm::Sha256),
        min_sdk_version: sdk::P,
    },
];

// A malformed table fails to compile.
const _: () = check_descriptors(&DESCRIPTORS);

static TABLE: [AlgorithmDescriptor; SIGNATURE_ALGORITHM_COUNT] = DESCRIPTORS;

const fn check_descriptors(table: &[AlgorithmDescriptor]) {
    let mut i = 0;
    while i < table.len() {
        let d = &table[i];
        assert!(d.algorithm as usize == i, "table order must follow the enum");
        assert!(
            d.scheme.hash().same_as(d.content_digest.hash()),
            "signature hash differs from content digest hash"
        );
        assert!(
            matches!(
                (d.scheme.key_algorithm(), d.key_algorithm),
                (KeyAlgorithm::Rsa, KeyAlgorithm::Rsa)
                    | (KeyAlgorithm::Ec, KeyAlgorithm::Ec)
                    | (KeyAlgorithm::Dsa, KeyAlgorithm::Dsa)
            ),
            "key family does not match the signature scheme"
        );
        if let SignatureScheme::RsaPss(p) = &d.scheme {
            let expected = PssParameters::for_hash(p.digest);
            assert!(
                p.mgf.hash().same_as(expected.mgf.hash()),
                "MGF1 hash differs from PSS hash"
            );
            assert!(p.salt_len == expected.salt_len, "PSS salt length mismatch");
            assert!(p.trailer == expected.trailer, "unsupported PSS trailer");
        }
        let mut j = i + 1;
        while j < table.len() {
            assert!(table[j].id != d.id, "duplicate signature algorithm id");
            j += 1;
        }
        i += 1;
    }
}

impl SignatureAlgorithm {
    /// Every algorithm in the catalog, in id order.
    pub const ALL: [SignatureAlgorithm; SIGNATURE_ALGORITHM_COUNT] = [
        SignatureAlgorithm::RsaPssWithSha256,
        SignatureAlgorithm::RsaPssWithSha512,
        SignatureAlgorithm::RsaPkcs1V15WithSha256,
        SignatureAlgorithm::RsaPkcs1V15WithSha512,
        SignatureAlgorithm::EcdsaWithSha256,
        SignatureAlgorithm::EcdsaWithSha512,
        SignatureAlgorithm::DsaWithSha256,
        SignatureAlgorithm::VerityRsaPkcs1V15WithSha256,
        SignatureAlgorithm::VerityEcdsaWithSha256,
        SignatureAlgorithm::VerityDsaWithSha256,
    ];

    pub fn all() -> impl Iterator<Item = SignatureAlgorithm> {
        Self::ALL.into_iter()
    }

    pub fn descriptor(self) -> &'static AlgorithmDescriptor {
        &TABLE[self as usize]
    }

    /// Looks up the algorithm with the given wire-format id.
    pub fn find_by_id(id: u32) -> Option<Self> {
        TABLE.iter().find(|d| d.id == id).map(|d| d.algorithm)
    }

    /// Id of this algorithm in the APK Signature Scheme v2/v3 wire format.
    pub fn id(self) -> u32 {
        self.descriptor().id
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn content_digest_algorithm(self) -> ContentDigestAlgorithm {
        self.descriptor().content_digest
    }

    pub fn key_algorithm(self) -> KeyAlgorithm {
        self.descriptor().key_algorithm
    }

    /// JCA key algorithm the signer's key must have.
    pub fn jca_key_algorithm(self) -> &'static str {
        self.key_algorithm().jca_name()
    }

    pub fn signature_scheme(self) -> &'static SignatureScheme {
        &self.descriptor().scheme
    }

    /// JCA `Signature` algorithm and its parameters, `None` when the scheme
    /// takes none.
    pub fn jca_signature_algorithm_and_params(
        self,
    ) -> (&'static str, Option<&'static PssParameters>) {
        let scheme = self.signature_scheme();
        (scheme.jca_name(), scheme.parameters())
    }

    /// Lowest platform API level that accepts this algorithm.
    pub fn min_sdk_version(self) -> u32 {
        self.descriptor().min_sdk_version
    }

    pub fn is_verity(self) -> bool {
        self.content_digest_algorithm().is_verity()
    }
}

/// Looks up the algorithm with the given wire-format id.
pub fn find_by_id(id: u32) -> Option<SignatureAlgorithm> {
    SignatureAlgorithm::find_by_id(id)
}

impl TryFrom<u32> for SignatureAlgorithm {
    type Error = RegistryError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::find_by_id(id).ok_or(RegistryError::UnknownAlgorithm(id))
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a canonical name (`ECDSA_WITH_SHA256`, any case) or an id given as
/// `0x0201` or in decimal.
impl FromStr for SignatureAlgorithm {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RegistryError::Parse("empty algorithm".into()));
        }

        if let Some(alg) = TABLE.iter().find(|d| d.name.eq_ignore_ascii_case(s)) {
            return Ok(alg.algorithm);
        }

        let id = parse_id(s).ok_or_else(|| {
            RegistryError::Parse(format!("'{}' is neither an algorithm name nor an id", s))
        })?;
        Self::try_from(id)
    }
}

fn parse_id(s: &str) -> Option<u32> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}
