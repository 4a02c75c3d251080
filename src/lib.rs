/*
 * ApkSig Registry v1.0.0
 * Copyright (c) 2026 Tiash H Kabir / @MrCarb0n.
 * Licensed under the MIT License.
 */

//! # ApkSig Registry Library
//!
//! The signature algorithm catalog of the Android APK Signing Block. Each
//! wire-format algorithm id maps to the content digest, key family, exact
//! signature scheme parameters and minimum platform version that signers and
//! verifiers must agree on. The `apksig-registry` command-line tool is a thin
//! inspector on top of it.

pub mod algorithm;
pub mod backend;
pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod hash;
pub mod sdk;
pub mod ui;

pub use algorithm::{
    find_by_id, AlgorithmDescriptor, KeyAlgorithm, MaskGeneration, PssParameters,
    SignatureAlgorithm, SignatureScheme,
};
pub use backend::EcCurve;
pub use cli::{build_command, run};
pub use digest::ContentDigestAlgorithm;
pub use error::RegistryError;
pub use hash::HashAlgorithm;

pub const APP_NAME: &str = "ApkSigRegistry";
pub const APP_BIN_NAME: &str = "apksig-registry";
pub const APP_VERSION: &str = "1.0.0";
pub const APP_AUTHOR: &str = "Tiash H Kabir / @MrCarb0n";
pub const APP_ABOUT: &str = "Inspect the signature algorithms of the Android APK Signing Block.";

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;
