/*
 * ApkSig Registry v1.0.0
 * Copyright (c) 2026 Tiash H Kabir / @MrCarb0n.
 * Licensed under the MIT License.
 */

use crate::{APP_AUTHOR, APP_NAME, APP_VERSION};
use colored::*;
use std::io::{self, Write};

pub struct Ui {
    pub verbose: bool,
    pub very_verbose: bool,
    pub debug: bool,
    silent: bool,
    colors: bool,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(false, false, false, false, true)
    }
}

impl Ui {
    pub fn new(v: bool, vv: bool, d: bool, s: bool, c: bool) -> Self {
        Self {
            verbose: v,
            very_verbose: vv,
            debug: d,
            silent: s,
            colors: c,
        }
    }

    pub fn from_verbosity_level(level: u8, s: bool, c: bool) -> Self {
        Self::new(level >= 1, level >= 2, level >= 3, s, c)
    }

    /// Plain, colorless and quiet. Used when output is captured.
    pub fn silent() -> Self {
        Self::new(false, false, false, true, false)
    }

    fn paint(&self, icon: &str, msg: &str, color: &str, is_error: bool, is_dim: bool) {
        if self.silent && !is_error {
            return;
        }
        let tw = self.term_width();
        let indent_size = if tw < 40 { 2 } else { icon.len() + 1 };
        let indent = " ".repeat(indent_size);
        let wrapped = self.wrap_msg(msg, indent_size);

        for (i, line) in wrapped.split('\n').enumerate() {
            let out = if self.supports_color() {
                let ic = match color {
                    "31" => icon.red().bold(),
                    "32" => icon.green().bold(),
                    "33" => icon.yellow().bold(),
                    "34" => icon.blue().bold(),
                    _ => icon.bold(),
                };
                match (i == 0, is_dim) {
                    (true, true) => format!("{} {}", ic.dimmed(), line.dimmed()),
                    (true, false) => format!("{} {}", ic, line.normal()),
                    (false, true) => format!("{}{}", indent, line.dimmed()),
                    (false, false) => format!("{}{}", indent, line.normal()),
                }
            } else if i == 0 {
                format!("{} {}", icon, line)
            } else {
                format!("{}{}", indent, line)
            };
            eprintln!("{}", out);
        }
    }

    pub fn print_banner(&self) {
        if !self.silent && self.verbose {
            self.print_rich_banner();
        }
    }

    pub fn print_rich_banner(&self) {
        let title = format!(" {} v{} ", APP_NAME, APP_VERSION);
        let width = title.len();
        let tw = self.term_width();

        if tw < width + 4 {
            if self.colors {
                eprintln!("{}", title.cyan().bold());
            } else {
                eprintln!("{}", title);
            }
        } else {
            let border = "-".repeat(width);
            if self.colors {
                let tb = format!("+-{}-+", border).magenta().bold();
                let mid = format!("| {} |", title.cyan().bold()).blue();
                eprintln!("{}\n{}\n{}", tb, mid, tb);
            } else {
                eprintln!("+-{}-+\n| {} |\n+-{}-+", border, title, border);
            }
        }
    }

    pub fn print_version_info(&self) {
        self.print_rich_banner();
        if self.colors {
            println!("{}", format!("Author:      {}", APP_AUTHOR).yellow());
            println!("{}", "License:     MIT".green());
            println!(
                "{}",
                "Description: APK Signing Block signature algorithm registry.".magenta()
            );
        } else {
            println!(
                "Author:      {}\nLicense:     MIT\nDescription: APK Signing Block signature algorithm registry.",
                APP_AUTHOR
            );
        }
    }

    fn supports_color(&self) -> bool {
        std::env::var("NO_COLOR").is_err() && self.colors && {
            #[cfg(windows)]
            {
                if !colored::control::SHOULD_COLORIZE.should_colorize() {
                    colored::control::set_override(true);
                }
            }
            true
        }
    }

    pub fn enable_colors_if_supported(&mut self) {
        #[cfg(windows)]
        if self.colors {
            colored::control::set_override(true);
        }
    }

    pub fn print_mode_header(&self, title: &str) {
        if self.silent || !self.verbose {
            return;
        }
        eprintln!();
        let header = format!("-- {} --", title);
        let shown = if self.term_width() < header.len() {
            title.to_string()
        } else {
            header
        };
        if self.colors {
            eprintln!("{}", shown.yellow().bold());
        } else {
            eprintln!("{}", shown);
        }
    }

    pub fn info(&self, msg: &str) {
        if self.verbose {
            self.paint("[i]", msg, "34", false, false);
        }
    }
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            self.paint("[v]", msg, "2", false, true);
        }
    }
    pub fn very_verbose(&self, msg: &str) {
        if self.very_verbose {
            self.paint("[vv]", msg, "2", false, true);
        }
    }
    pub fn debug(&self, msg: &str) {
        if self.debug {
            self.paint("[dbg]", msg, "2", false, true);
        }
    }
    pub fn success(&self, msg: &str) {
        if !self.silent {
            self.paint("[+]", msg, "32", false, false);
        }
    }
    pub fn warn(&self, msg: &str) {
        if !self.silent {
            self.paint("[!]", msg, "33", true, false);
        }
    }
    pub fn error(&self, msg: &str) {
        self.paint("[x]", msg, "31", true, false);
    }

    /// Writes a titled key/value report. Reports are the tool's output, so
    /// they go to `out` and are printed even in quiet mode.
    pub fn write_summary<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        fields: &[(&str, String)],
    ) -> io::Result<()> {
        let colored = self.supports_color();
        if colored {
            writeln!(out, "{}", format!("{}:", title).green().bold())?;
        } else {
            writeln!(out, "{}:", title)?;
        }

        let key_width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        let base_indent = key_width + 3;

        for (key, val) in fields {
            let wrapped = self.wrap_msg(val, base_indent);
            for (i, line) in wrapped.split('\n').enumerate() {
                if i > 0 {
                    writeln!(out, "{}{}", " ".repeat(base_indent), line)?;
                } else if colored {
                    let padded = format!("{:<width$}", key, width = key_width);
                    writeln!(out, "  {} {}", padded.cyan().bold(), line)?;
                } else {
                    writeln!(out, "  {:<width$} {}", key, line, width = key_width)?;
                }
            }
        }
        Ok(())
    }

    /// Writes rows as left-aligned columns under a header line.
    pub fn write_table<W: Write>(
        &self,
        out: &mut W,
        header: &[&str],
        rows: &[Vec<String>],
    ) -> io::Result<()> {
        let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let render = |cells: Vec<String>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:<width$}", c, width = *w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let head = render(header.iter().map(|h| h.to_string()).collect());
        if self.supports_color() {
            writeln!(out, "{}", head.bold())?;
        } else {
            writeln!(out, "{}", head)?;
        }
        for row in rows {
            writeln!(out, "{}", render(row.clone()))?;
        }
        Ok(())
    }

    fn wrap_msg(&self, msg: &str, indent: usize) -> String {
        let max_width = self.term_width();
        let effective_width = if max_width > 20 {
            max_width.saturating_sub(indent).max(20)
        } else {
            max_width.saturating_sub(indent).max(10)
        };
        let mut lines = Vec::new();
        let mut current_line = String::with_capacity(effective_width);

        for word in msg.split_whitespace() {
            let word_len = word.chars().count();
            let needed = if current_line.is_empty() {
                word_len
            } else {
                current_line.chars().count() + 1 + word_len
            };

            if needed <= effective_width {
                if !current_line.is_empty() {
                    current_line.push(' ');
                }
                current_line.push_str(word);
            } else {
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                }
                current_line.push_str(word);
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
        lines.join("\n")
    }

    fn term_width(&self) -> usize {
        std::env::var("COLUMNS")
            .ok()
            .and_then(|s| s.parse().ok())
            .or_else(|| terminal_size::terminal_size().map(|(w, _)| w.0 as usize))
            .unwrap_or(80)
    }
}
