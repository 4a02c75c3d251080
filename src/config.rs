/*
 * ApkSig Registry v1.0.0
 * Copyright (c) 2026 Tiash H Kabir / @MrCarb0n.
 * Licensed under the MIT License.
 */

//! Configuration parsing and validation for the registry CLI.

use crate::{algorithm::SignatureAlgorithm, error::RegistryError, sdk, ui::Ui};
use clap::ArgMatches;

/// Execution mode for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the catalog, optionally only entries usable on `min_sdk`
    List { min_sdk: Option<u32> },
    /// Print the full descriptor of one algorithm
    Show { algorithm: SignatureAlgorithm },
}

/// Application configuration parsed from command-line arguments.
#[derive(Debug)]
pub struct Config {
    /// What to print
    pub mode: Mode,
    /// Verbosity level (0 = off, 1 = verbose, 2 = very verbose, 3+ = debug)
    pub verbosity_level: u8,
}

impl Config {
    /// Parse configuration from command-line argument matches.
    pub fn from_matches(matches: &ArgMatches, ui: &Ui) -> Result<Self, RegistryError> {
        let verbosity_level = matches.get_count("verbose");

        let mode = match matches.subcommand() {
            Some(("list", sub_matches)) => Self::parse_list(sub_matches, ui)?,
            Some(("show", sub_matches)) => Self::parse_show(sub_matches, ui)?,
            _ => {
                return Err(RegistryError::Config(
                    "No subcommand provided. Use 'list' or 'show'.".into(),
                ))
            }
        };

        Ok(Self {
            mode,
            verbosity_level,
        })
    }

    fn parse_list(matches: &ArgMatches, ui: &Ui) -> Result<Mode, RegistryError> {
        let min_sdk = match matches.get_one::<String>("min_sdk") {
            Some(raw) => {
                let level = Self::parse_sdk_level(raw)?;
                ui.debug(&format!("Filtering for API level {}", sdk::describe(level)));
                Some(level)
            }
            None => None,
        };
        Ok(Mode::List { min_sdk })
    }

    fn parse_show(matches: &ArgMatches, ui: &Ui) -> Result<Mode, RegistryError> {
        let raw = matches
            .get_one::<String>("algorithm")
            .ok_or_else(|| RegistryError::Config("No algorithm specified".into()))?;
        let algorithm: SignatureAlgorithm = raw.parse()?;
        ui.debug(&format!("Resolved '{}' to {}", raw, algorithm));
        Ok(Mode::Show { algorithm })
    }

    /// Accepts a number (`28`) or a known codename letter (`P`).
    fn parse_sdk_level(raw: &str) -> Result<u32, RegistryError> {
        let raw = raw.trim();
        if let Ok(level) = raw.parse::<u32>() {
            return Ok(level);
        }
        sdk::level_for_codename(raw).ok_or_else(|| {
            RegistryError::Config(format!("Invalid API level: {}", raw))
        })
    }
}
