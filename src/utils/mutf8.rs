/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Length-prefixed modified UTF-8.
//!
//! This is the text format used by the byte sources and sinks of this crate
//! to implement [`ByteRead::read_utf`](crate::traits::ByteRead::read_utf) and
//! [`ByteWrite::write_utf`](crate::traits::ByteWrite::write_utf). A string is
//! stored as a big-endian `u16` containing the length in bytes of the
//! encoding, followed by the encoding of each UTF-16 code unit of the string:
//!
//! - `U+0001..=U+007F` uses one byte;
//! - `U+0000` and `U+0080..=U+07FF` use two bytes;
//! - all other code units, including each half of a surrogate pair, use three
//!   bytes.
//!
//! As a consequence, an encoded string never contains a zero byte.

use alloc::string::String;
use alloc::vec::Vec;

/// The maximum length in bytes of an encoded string, prefix excluded.
pub const MAX_ENCODED_LEN: usize = u16::MAX as usize;

/// Errors in the encoding or decoding of modified UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModifiedUtf8Error {
    /// The encoding would be longer than [`MAX_ENCODED_LEN`] bytes.
    #[error("Encoded string too long: {len} bytes (at most 65535)")]
    TooLong { len: usize },
    /// The byte at position `pos` does not start or continue a valid
    /// sequence, or the decoded code units are not valid UTF-16.
    #[error("Malformed modified UTF-8 input around byte {pos}")]
    Malformed { pos: usize },
    /// The data ended before the whole string could be read.
    #[error("Unexpected end of data: expected {expected} bytes, read {actual}")]
    Truncated { expected: usize, actual: usize },
}

#[cfg(feature = "std")]
impl From<ModifiedUtf8Error> for std::io::Error {
    fn from(e: ModifiedUtf8Error) -> Self {
        let kind = match e {
            ModifiedUtf8Error::Truncated { .. } => std::io::ErrorKind::UnexpectedEof,
            _ => std::io::ErrorKind::InvalidData,
        };
        std::io::Error::new(kind, e)
    }
}

#[inline(always)]
fn unit_len(unit: u16) -> usize {
    match unit {
        0x0001..=0x007f => 1,
        0x0000 | 0x0080..=0x07ff => 2,
        _ => 3,
    }
}

/// Returns the length in bytes of the encoding of `text`, prefix excluded.
pub fn encoded_len(text: &str) -> usize {
    text.encode_utf16().map(unit_len).sum()
}

/// Encodes `text`, length prefix included.
///
/// # Examples
/// ```
/// use le_datastream::utils::mutf8;
///
/// assert_eq!(mutf8::encode("a\0").unwrap(), [0, 3, b'a', 0xc0, 0x80]);
/// ```
pub fn encode(text: &str) -> Result<Vec<u8>, ModifiedUtf8Error> {
    let len = encoded_len(text);
    if len > MAX_ENCODED_LEN {
        return Err(ModifiedUtf8Error::TooLong { len });
    }
    let mut bytes = Vec::with_capacity(2 + len);
    bytes.extend_from_slice(&(len as u16).to_be_bytes());
    for unit in text.encode_utf16() {
        match unit_len(unit) {
            1 => bytes.push(unit as u8),
            2 => {
                bytes.push(0xc0 | ((unit >> 6) & 0x1f) as u8);
                bytes.push(0x80 | (unit & 0x3f) as u8);
            }
            _ => {
                bytes.push(0xe0 | ((unit >> 12) & 0x0f) as u8);
                bytes.push(0x80 | ((unit >> 6) & 0x3f) as u8);
                bytes.push(0x80 | (unit & 0x3f) as u8);
            }
        }
    }
    Ok(bytes)
}

/// Decodes the body of an encoded string, that is, the bytes following the
/// length prefix.
pub fn decode(bytes: &[u8]) -> Result<String, ModifiedUtf8Error> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut pos = 0;
    let continuation = |pos: usize| match bytes.get(pos) {
        Some(&b) if b & 0xc0 == 0x80 => Ok((b & 0x3f) as u16),
        Some(_) => Err(ModifiedUtf8Error::Malformed { pos }),
        None => Err(ModifiedUtf8Error::Malformed { pos: pos - 1 }),
    };
    while pos < bytes.len() {
        let b = bytes[pos];
        match b >> 4 {
            0..=7 => {
                units.push(b as u16);
                pos += 1;
            }
            12 | 13 => {
                let c1 = continuation(pos + 1)?;
                units.push((((b & 0x1f) as u16) << 6) | c1);
                pos += 2;
            }
            14 => {
                let c1 = continuation(pos + 1)?;
                let c2 = continuation(pos + 2)?;
                units.push((((b & 0x0f) as u16) << 12) | (c1 << 6) | c2);
                pos += 3;
            }
            _ => return Err(ModifiedUtf8Error::Malformed { pos }),
        }
    }
    String::from_utf16(&units).map_err(|_| ModifiedUtf8Error::Malformed { pos: bytes.len() })
}

/// Reads a length-prefixed string using `read`, a function with the
/// semantics of [`ByteRead::read_bytes`](crate::traits::ByteRead::read_bytes).
pub fn read_from<E, F>(mut read: F) -> Result<String, E>
where
    E: From<ModifiedUtf8Error>,
    F: FnMut(&mut [u8]) -> Result<usize, E>,
{
    let mut prefix = [0u8; 2];
    fill(&mut read, &mut prefix)?;
    let len = u16::from_be_bytes(prefix) as usize;
    let mut body = alloc::vec![0u8; len];
    fill(&mut read, &mut body)?;
    Ok(decode(&body)?)
}

fn fill<E, F>(read: &mut F, buf: &mut [u8]) -> Result<(), E>
where
    E: From<ModifiedUtf8Error>,
    F: FnMut(&mut [u8]) -> Result<usize, E>,
{
    let mut filled = 0;
    while filled < buf.len() {
        match read(&mut buf[filled..])? {
            0 => {
                return Err(ModifiedUtf8Error::Truncated {
                    expected: buf.len(),
                    actual: filled,
                }
                .into());
            }
            n => filled += n,
        }
    }
    Ok(())
}
