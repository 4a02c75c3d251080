/*
 * ApkSig Registry v1.0.0
 * Copyright (c) 2026 Tiash H Kabir / @MrCarb0n.
 * Licensed under the MIT License.
 */

//! Android platform API levels referenced by the algorithm catalog.

/// Android 2.3.
pub const GINGERBREAD: u32 = 9;
/// Android 4.3.
pub const JELLY_BEAN_MR2: u32 = 18;
/// Android 7.0, first platform verifying APK Signature Scheme v2.
pub const N: u32 = 24;
/// Android 8.0.
pub const O: u32 = 26;
/// Android 9, first platform accepting verity-chunked content digests.
pub const P: u32 = 28;
/// Android 10.
pub const Q: u32 = 29;
/// Android 11.
pub const R: u32 = 30;
/// Android 12.
pub const S: u32 = 31;
/// Android 13.
pub const T: u32 = 33;

const CODENAMES: [(u32, &str); 9] = [
    (GINGERBREAD, "Gingerbread"),
    (JELLY_BEAN_MR2, "Jelly Bean MR2"),
    (N, "N"),
    (O, "O"),
    (P, "P"),
    (Q, "Q"),
    (R, "R"),
    (S, "S"),
    (T, "T"),
];

/// Short name of a known API level, `None` for levels not listed here.
pub fn codename(level: u32) -> Option<&'static str> {
    CODENAMES
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, name)| *name)
}

/// Reverse of [`codename`], ignoring case.
pub fn level_for_codename(name: &str) -> Option<u32> {
    CODENAMES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(l, _)| *l)
}

/// Formats an API level as `28 (P)`, or just the number if it has no name.
pub fn describe(level: u32) -> String {
    match codename(level) {
        Some(name) => format!("{} ({})", level, name),
        None => level.to_string(),
    }
}
