/*
 * ApkSig Registry v1.0.0
 * Copyright (c) 2026 Tiash H Kabir / @MrCarb0n.
 * Licensed under the MIT License.
 */

//! Maps catalog entries onto `ring` primitives.
//!
//! Only the translation lives here. Keys, certificates and the decision of
//! which algorithm to use belong to the signing and verification engines.
//! `ring` has no DSA and no ECDSA over SHA-512; those entries map to `None`.

use crate::algorithm::{KeyAlgorithm, SignatureAlgorithm, SignatureScheme};
use crate::hash::HashAlgorithm;
use ring::signature::{self, EcdsaSigningAlgorithm, RsaEncoding, VerificationAlgorithm};
use std::fmt;

/// Named curve of an EC signing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    P256,
    P384,
}

impl fmt::Display for EcCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcCurve::P256 => f.write_str("P-256"),
            EcCurve::P384 => f.write_str("P-384"),
        }
    }
}

impl SignatureAlgorithm {
    /// `ring` verification algorithm for signatures of this kind.
    ///
    /// RSA entries ignore `curve`. EC entries need the curve of the signer's
    /// key, as ring binds curve and hash together.
    pub fn ring_verification_algorithm(
        self,
        curve: Option<EcCurve>,
    ) -> Option<&'static dyn VerificationAlgorithm> {
        let alg: &'static dyn VerificationAlgorithm = match (*self.signature_scheme(), curve) {
            (SignatureScheme::RsaPss(p), _) => match p.digest {
                HashAlgorithm::Sha256 => &signature::RSA_PSS_2048_8192_SHA256,
                HashAlgorithm::Sha512 => &signature::RSA_PSS_2048_8192_SHA512,
            },
            (SignatureScheme::RsaPkcs1V15(h), _) => match h {
                HashAlgorithm::Sha256 => &signature::RSA_PKCS1_2048_8192_SHA256,
                HashAlgorithm::Sha512 => &signature::RSA_PKCS1_2048_8192_SHA512,
            },
            (SignatureScheme::Ecdsa(HashAlgorithm::Sha256), Some(EcCurve::P256)) => {
                &signature::ECDSA_P256_SHA256_ASN1
            }
            (SignatureScheme::Ecdsa(HashAlgorithm::Sha256), Some(EcCurve::P384)) => {
                &signature::ECDSA_P384_SHA256_ASN1
            }
            _ => return None,
        };
        Some(alg)
    }

    /// Padding scheme to pass to `RsaKeyPair::sign`, for RSA entries only.
    pub fn ring_rsa_encoding(self) -> Option<&'static dyn RsaEncoding> {
        let encoding: &'static dyn RsaEncoding = match *self.signature_scheme() {
            SignatureScheme::RsaPss(p) => match p.digest {
                HashAlgorithm::Sha256 => &signature::RSA_PSS_SHA256,
                HashAlgorithm::Sha512 => &signature::RSA_PSS_SHA512,
            },
            SignatureScheme::RsaPkcs1V15(HashAlgorithm::Sha256) => &signature::RSA_PKCS1_SHA256,
            SignatureScheme::RsaPkcs1V15(HashAlgorithm::Sha512) => &signature::RSA_PKCS1_SHA512,
            _ => return None,
        };
        Some(encoding)
    }

    /// ECDSA signing algorithm (ASN.1 DER signatures) for a key on `curve`.
    pub fn ring_ecdsa_signing(self, curve: EcCurve) -> Option<&'static EcdsaSigningAlgorithm> {
        match (*self.signature_scheme(), curve) {
            (SignatureScheme::Ecdsa(HashAlgorithm::Sha256), EcCurve::P256) => {
                Some(&signature::ECDSA_P256_SHA256_ASN1_SIGNING)
            }
            _ => None,
        }
    }

    /// Whether `ring` can verify this algorithm for some key of its family.
    pub fn has_ring_verifier(self) -> bool {
        match self.key_algorithm() {
            KeyAlgorithm::Rsa => self.ring_verification_algorithm(None).is_some(),
            KeyAlgorithm::Ec => [EcCurve::P256, EcCurve::P384]
                .into_iter()
                .any(|c| self.ring_verification_algorithm(Some(c)).is_some()),
            KeyAlgorithm::Dsa => false,
        }
    }
}
