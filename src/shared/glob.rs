//! Glob pattern utilities
//!
//! Excluded paths are glob patterns. The registry only checks that they
//! compile; matching files against them is left to the hook runner.

use anyhow::Result;
use globset::Glob;

/// Normalise an ignore-style pattern: `target/` covers everything below it.
pub fn normalize_pattern(pattern: &str) -> String {
    if pattern.ends_with('/') {
        format!("{pattern}**")
    } else {
        pattern.to_string()
    }
}

/// Compile a single pattern, as a validity check or for matching.
pub fn compile_pattern(pattern: &str) -> Result<Glob, globset::Error> {
    Glob::new(&normalize_pattern(pattern))
}

/// Translate glob patterns into one regular expression in the dialect
/// pre-commit uses for `exclude`.
///
/// Returns `None` when there is nothing to exclude.
pub fn exclude_regex<S: AsRef<str>>(patterns: &[S]) -> Result<Option<String>> {
    let mut alternatives = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let glob = compile_pattern(pattern.as_ref())?;
        // globset emits a leading `(?-u)` that Python's `re` rejects
        let regex = glob.regex().trim_start_matches("(?-u)");
        alternatives.push(decode_utf8_escapes(regex));
    }

    if alternatives.is_empty() {
        return Ok(None);
    }
    Ok(Some(alternatives.join("|")))
}

/// globset matches bytes and writes non-ASCII characters as `\xNN` runs of
/// their UTF-8 encoding. Python's `re` reads those as code points, so turn
/// each run back into the characters it encodes.
fn decode_utf8_escapes(regex: &str) -> String {
    let mut out = String::with_capacity(regex.len());
    let mut pending = Vec::new();
    let mut chars = regex.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_bytes(&mut out, &mut pending);
            out.push(c);
            continue;
        }

        let mut lookahead = chars.clone();
        if lookahead.next() == Some('x') {
            let hex: String = lookahead.take(2).collect();
            if hex.len() == 2 && hex.chars().all(|h| h.is_ascii_hexdigit()) {
                if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                    if !byte.is_ascii() {
                        pending.push(byte);
                        chars.nth(2);
                        continue;
                    }
                }
            }
        }

        // Any other escape is copied as a pair so `\\x..` stays literal
        flush_bytes(&mut out, &mut pending);
        out.push(c);
        if let Some(escaped) = chars.next() {
            out.push(escaped);
        }
    }
    flush_bytes(&mut out, &mut pending);
    out
}

fn flush_bytes(out: &mut String, pending: &mut Vec<u8>) {
    if pending.is_empty() {
        return;
    }
    match std::str::from_utf8(pending) {
        Ok(text) => out.push_str(text),
        Err(_) => {
            for byte in pending.iter() {
                out.push_str(&format!("\\x{byte:02x}"));
            }
        }
    }
    pending.clear();
}
