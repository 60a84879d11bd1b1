// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Terminal output that never fails the program
//!
//! Some terminals cannot show non-ASCII text (the check report uses emoji and
//! the config may hold non-ASCII file names). [`init_output_encoding`] decides
//! once per process whether stdout can take UTF-8, and [`Console`] writes
//! lines accordingly, replacing what it cannot show with `?`.

use std::io::{self, Write};
use std::sync::OnceLock;

/// Variable forcing the output mode (`utf-8` or `ascii`)
pub const OUTPUT_ENCODING_ENV: &str = "OCR_OUTPUT_ENCODING";

/// Placeholder written in place of characters the terminal cannot show
pub const REPLACEMENT_CHAR: char = '?';

/// How text is written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEncoding {
    Utf8,
    /// Non-ASCII characters become [`REPLACEMENT_CHAR`]
    AsciiReplace,
}

static OUTPUT_ENCODING: OnceLock<OutputEncoding> = OnceLock::new();

/// Decide the process output encoding; later calls return the first decision
///
/// Best effort and infallible: anything unexpected falls back to
/// [`OutputEncoding::AsciiReplace`] rather than erroring.
pub fn init_output_encoding() -> OutputEncoding {
    *OUTPUT_ENCODING.get_or_init(|| {
        let lookup = |key: &str| std::env::var(key).ok();
        let encoding = detect_encoding(&lookup, cfg!(windows));

        if encoding == OutputEncoding::Utf8 && locale_unset(&lookup) && !cfg!(windows) {
            // Give child processes and libc a UTF-8 character class too
            std::env::set_var("LC_CTYPE", "C.UTF-8");
        }

        tracing::debug!("Console output encoding: {:?}", encoding);
        encoding
    })
}

/// Pick an encoding from environment values
///
/// An explicit [`OUTPUT_ENCODING_ENV`] wins. Windows consoles receive UTF-16
/// from the standard library, so UTF-8 text is always safe there. Elsewhere
/// the first set of `LC_ALL`, `LC_CTYPE`, `LANG` decides; no locale at all is
/// treated as UTF-8.
pub fn detect_encoding<F>(lookup: &F, is_windows: bool) -> OutputEncoding
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(forced) = lookup(OUTPUT_ENCODING_ENV) {
        match forced.trim().to_lowercase().as_str() {
            "utf-8" | "utf8" => return OutputEncoding::Utf8,
            "ascii" => return OutputEncoding::AsciiReplace,
            _ => {}
        }
    }

    if is_windows {
        return OutputEncoding::Utf8;
    }

    match active_locale(lookup) {
        Some(locale) if is_utf8_locale(&locale) => OutputEncoding::Utf8,
        Some(_) => OutputEncoding::AsciiReplace,
        None => OutputEncoding::Utf8,
    }
}

fn active_locale<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
}

fn locale_unset<F>(lookup: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    active_locale(lookup).is_none()
}

fn is_utf8_locale(locale: &str) -> bool {
    let lower = locale.to_lowercase();
    lower.contains("utf-8") || lower.contains("utf8")
}

/// Replace every non-ASCII character with [`REPLACEMENT_CHAR`]
pub fn to_ascii_lossy(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() { c } else { REPLACEMENT_CHAR })
        .collect()
}

/// Line writer honoring an [`OutputEncoding`]
pub struct Console<W: Write> {
    writer: W,
    encoding: OutputEncoding,
}

impl Console<io::Stdout> {
    /// Console on stdout using the process encoding
    pub fn stdout() -> Self {
        Console::new(io::stdout(), init_output_encoding())
    }
}

impl<W: Write> Console<W> {
    pub fn new(writer: W, encoding: OutputEncoding) -> Self {
        Self { writer, encoding }
    }

    /// Write one line
    ///
    /// A UTF-8 write that fails before any byte went out is retried in ASCII
    /// form. A write that fails part way is abandoned so nothing is printed
    /// twice. Output problems never reach the caller.
    pub fn write_line(&mut self, line: &str) {
        let rendered = match self.encoding {
            OutputEncoding::Utf8 => format!("{}\n", line),
            OutputEncoding::AsciiReplace => format!("{}\n", to_ascii_lossy(line)),
        };

        match self.write_bytes(rendered.as_bytes()) {
            Ok(()) => {}
            Err(0) if self.encoding == OutputEncoding::Utf8 => {
                let _ = self.write_bytes(format!("{}\n", to_ascii_lossy(line)).as_bytes());
            }
            Err(_) => {}
        }
    }

    /// Like `write_all`, but reports how many bytes went out before an error
    fn write_bytes(&mut self, mut buf: &[u8]) -> Result<(), usize> {
        let mut written = 0;
        while !buf.is_empty() {
            match self.writer.write(buf) {
                Ok(0) => return Err(written),
                Ok(n) => {
                    written += n;
                    buf = &buf[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(_) => return Err(written),
            }
        }
        Ok(())
    }

    /// Write each line of a multi-line block
    pub fn write_block(&mut self, text: &str) {
        for line in text.lines() {
            self.write_line(line);
        }
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
