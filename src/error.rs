/*
 * ApkSig Registry v1.0.0
 * Copyright (c) 2026 Tiash H Kabir / @MrCarb0n.
 * Licensed under the MIT License.
 */

//! Error types for the registry and its command-line front end.
//!
//! A lookup that misses is not an error: `find_by_id` answers `None`. These
//! variants cover the conversions and the CLI, where a miss has to be
//! reported to the user.

use std::{fmt, io};

#[derive(Debug)]
pub enum RegistryError {
    /// No catalog entry carries this id
    UnknownAlgorithm(u32),
    /// Text that names no algorithm, or is not a valid id
    Parse(String),
    /// Invalid command-line usage
    Config(String),
    /// I/O errors while writing reports
    Io(io::Error),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownAlgorithm(id) => {
                write!(f, "Unknown signature algorithm: {:#06x}", id)
            }
            RegistryError::Parse(s) => write!(f, "Parse Error: {}", s),
            RegistryError::Config(s) => write!(f, "Configuration Error: {}", s),
            RegistryError::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RegistryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
