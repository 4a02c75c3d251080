/*
 * ApkSig Registry v1.0.0
 * Copyright (c) 2026 Tiash H Kabir / @MrCarb0n.
 * Licensed under the MIT License.
 */

use crate::{
    algorithm::{SignatureAlgorithm, SignatureScheme},
    backend::EcCurve,
    config::{Config, Mode},
    error::RegistryError,
    sdk,
    ui::Ui,
    APP_ABOUT, APP_AUTHOR, APP_BIN_NAME, APP_NAME, APP_VERSION,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};

pub fn build_command() -> Command {
    Command::new(APP_NAME)
        .bin_name(APP_BIN_NAME)
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .disable_version_flag(true)
        .help_template("{about-with-newline}{usage-heading} {usage}\n\n{all-args}\n")
        .subcommand(
            Command::new("list")
                .about("List every signature algorithm in the catalog")
                .arg(
                    Arg::new("min_sdk")
                        .long("min-sdk")
                        .value_name("LEVEL")
                        .help("Only show algorithms accepted at this API level (e.g. 24 or N)"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show the full descriptor of one algorithm")
                .arg_required_else_help(true)
                .arg(
                    Arg::new("algorithm")
                        .required(true)
                        .help("Algorithm id (0x0101, 257) or name (RSA_PSS_WITH_SHA256)")
                        .index(1),
                ),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Set verbosity level (-v for verbose, -vv for more verbose, -vvv for debug)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Suppress all output except errors and reports"),
        )
        .arg(
            Arg::new("version_custom")
                .short('V')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print version information"),
        )
}

/// Entry point of the binary: parses the process arguments and runs.
pub fn run_from_env() -> Result<(), RegistryError> {
    let binary_name = std::env::args()
        .next()
        .and_then(|p| {
            std::path::Path::new(&p)
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| APP_BIN_NAME.to_string());

    let matches = build_command()
        .bin_name(binary_name)
        .arg_required_else_help(true)
        .get_matches();

    run(&matches)
}

/// Runs parsed arguments, writing reports to stdout.
pub fn run(matches: &ArgMatches) -> Result<(), RegistryError> {
    if matches.get_flag("version_custom") {
        let mut ui = Ui::new(false, false, false, false, true);
        ui.enable_colors_if_supported();
        ui.print_version_info();
        return Ok(());
    }

    let verbosity_level = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");
    let mut ui = Ui::from_verbosity_level(verbosity_level, quiet, true);
    ui.enable_colors_if_supported();
    ui.print_banner();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(matches, &ui, &mut out)
}

/// Runs parsed arguments, writing reports to `out`.
pub fn run_with<W: Write>(
    matches: &ArgMatches,
    ui: &Ui,
    out: &mut W,
) -> Result<(), RegistryError> {
    let config = Config::from_matches(matches, ui)?;
    ui.debug(&format!("Verbosity level: {}", config.verbosity_level));

    match config.mode {
        Mode::List { min_sdk } => {
            ui.print_mode_header("CATALOG");
            list(min_sdk, ui, out)?;
        }
        Mode::Show { algorithm } => {
            ui.print_mode_header("DESCRIPTOR");
            show(algorithm, ui, out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn list<W: Write>(min_sdk: Option<u32>, ui: &Ui, out: &mut W) -> Result<(), RegistryError> {
    let selected: Vec<SignatureAlgorithm> = SignatureAlgorithm::all()
        .filter(|alg| min_sdk.map_or(true, |level| alg.min_sdk_version() <= level))
        .collect();

    if let Some(level) = min_sdk {
        ui.success(&format!(
            "{} of {} algorithms accepted at API level {}",
            selected.len(),
            SignatureAlgorithm::ALL.len(),
            sdk::describe(level)
        ));
        if selected.is_empty() {
            ui.warn("No signature algorithm is accepted at this API level.");
        }
    }

    let rows: Vec<Vec<String>> = selected
        .iter()
        .map(|alg| {
            vec![
                format!("{:#06x}", alg.id()),
                alg.name().to_string(),
                alg.jca_key_algorithm().to_string(),
                alg.content_digest_algorithm().to_string(),
                alg.signature_scheme().name().to_string(),
                alg.min_sdk_version().to_string(),
            ]
        })
        .collect();

    ui.verbose(&format!("Listing {} algorithms", rows.len()));
    ui.write_table(out, &["ID", "NAME", "KEY", "DIGEST", "SCHEME", "MIN SDK"], &rows)?;
    Ok(())
}

fn show<W: Write>(alg: SignatureAlgorithm, ui: &Ui, out: &mut W) -> Result<(), RegistryError> {
    let digest = alg.content_digest_algorithm();
    let scheme = alg.signature_scheme();
    let (jca_sig, _) = alg.jca_signature_algorithm_and_params();
    ui.verbose(&format!("Resolved {:#06x} to {}", alg.id(), alg));

    let mut fields = vec![
        ("Id", format!("{:#06x}", alg.id())),
        ("Name", alg.name().to_string()),
        ("Key", alg.jca_key_algorithm().to_string()),
        (
            "Digest",
            format!(
                "{} ({}, {} byte chunks)",
                digest,
                digest.jca_message_digest_algorithm(),
                digest.chunk_size()
            ),
        ),
        ("Scheme", scheme.name().to_string()),
        ("JCA", jca_sig.to_string()),
    ];

    match scheme {
        SignatureScheme::RsaPss(p) => {
            fields.push(("Hash", p.digest.to_string()));
            fields.push(("MGF", p.mgf.to_string()));
            fields.push(("Salt", format!("{} bytes", p.salt_len)));
            fields.push(("Trailer", format!("{:#04x}", p.trailer)));
        }
        _ => {
            fields.push(("Hash", scheme.hash().to_string()));
            fields.push(("Params", "none".to_string()));
        }
    }

    fields.push(("Min SDK", sdk::describe(alg.min_sdk_version())));
    fields.push(("ring", ring_support(alg)));

    ui.very_verbose(&format!("Descriptor: {:?}", alg.descriptor()));
    ui.write_summary(out, "Signature Algorithm", &fields)?;
    Ok(())
}

fn ring_support(alg: SignatureAlgorithm) -> String {
    if !alg.has_ring_verifier() {
        return "unsupported".to_string();
    }
    if alg.ring_verification_algorithm(None).is_some() {
        return "verify".to_string();
    }
    let curves: Vec<String> = [EcCurve::P256, EcCurve::P384]
        .into_iter()
        .filter(|c| alg.ring_verification_algorithm(Some(*c)).is_some())
        .map(|c| c.to_string())
        .collect();
    format!("verify ({})", curves.join(", "))
}
