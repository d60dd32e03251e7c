//! Program Image Loader.
//!
//! This module reads instruction and data images from disk. It performs:
//! 1. **Text images:** Hexadecimal words in the style of `$readmemh`: one or more
//!    words per line, optional `0x` prefix and `_` separators, `//` and `#`
//!    comments, and `@addr` directives moving the load cursor.
//! 2. **Binary images:** Raw little-endian 32-bit words; a trailing partial
//!    word is zero-padded.
//!
//! Gaps left by `@addr` directives are filled with the idle word.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::IDLE_WORD;
use crate::common::{SimError, SimResult};

/// Largest image the loader will materialize, in words.
pub const MAX_IMAGE_WORDS: usize = 1 << 20;

/// Bytes per instruction word.
const WORD_BYTES: usize = 4;

/// Parses a hexadecimal text image.
///
/// # Errors
///
/// Returns [`SimError::ImageParse`] for tokens that are not hexadecimal words
/// or address directives, and [`SimError::ImageTooLarge`] when the image
/// would exceed [`MAX_IMAGE_WORDS`].
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_hex;
///
/// let words = parse_hex("20010005 // addi $1, $0, 5\n@4\n0x0000_0000\n").unwrap();
/// assert_eq!(words, vec![0x2001_0005, 0, 0, 0, 0]);
/// ```
pub fn parse_hex(text: &str) -> SimResult<Vec<u32>> {
    let mut words = Vec::new();
    let mut cursor = 0usize;

    for (idx, raw_line) in text.lines().enumerate() {
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }
        let parse_err = || SimError::ImageParse {
            line: idx + 1,
            text: line.to_string(),
        };

        for token in line.split_whitespace() {
            if let Some(addr) = token.strip_prefix('@') {
                cursor = parse_hex_u32(addr).ok_or_else(parse_err)? as usize;
                continue;
            }
            let word = parse_hex_u32(token).ok_or_else(parse_err)?;
            if cursor >= MAX_IMAGE_WORDS {
                return Err(SimError::ImageTooLarge {
                    words: cursor + 1,
                    capacity: MAX_IMAGE_WORDS,
                });
            }
            if words.len() <= cursor {
                words.resize(cursor + 1, IDLE_WORD);
            }
            words[cursor] = word;
            cursor += 1;
        }
    }

    Ok(words)
}

/// Converts raw little-endian bytes into words.
pub fn parse_binary(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(WORD_BYTES)
        .map(|chunk| {
            let mut buf = [0u8; WORD_BYTES];
            buf[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(buf)
        })
        .collect()
}

/// Reads and parses a hexadecimal text image.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, otherwise as [`parse_hex`].
pub fn load_hex_file(path: impl AsRef<Path>) -> SimResult<Vec<u32>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_hex(&text)?;
    debug!(path = %path.display(), words = words.len(), "loaded text image");
    Ok(words)
}

/// Reads a raw little-endian binary image.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read and
/// [`SimError::ImageTooLarge`] if it exceeds [`MAX_IMAGE_WORDS`].
pub fn load_binary_file(path: impl AsRef<Path>) -> SimResult<Vec<u32>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = bytes.len().div_ceil(WORD_BYTES);
    if words > MAX_IMAGE_WORDS {
        return Err(SimError::ImageTooLarge {
            words,
            capacity: MAX_IMAGE_WORDS,
        });
    }
    debug!(path = %path.display(), words, "loaded binary image");
    Ok(parse_binary(&bytes))
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find("//"), line.find('#')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

fn parse_hex_u32(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
        .replace('_', "");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}
