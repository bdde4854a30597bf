/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::string::String;
use core::error::Error;

use crate::codec::bounds::{BoundsError, check_range};

/// Sequential reads of typed primitive values.
///
/// Multi-byte values are decoded in the byte order of the implementation.
/// Chars are UTF-16 code units.
pub trait DataRead {
    type Error: Error + Send + Sync + 'static;

    /// Reads a byte and returns whether it is nonzero.
    fn read_boolean(&mut self) -> Result<bool, Self::Error>;

    fn read_byte(&mut self) -> Result<i8, Self::Error>;

    fn read_unsigned_byte(&mut self) -> Result<u8, Self::Error>;

    fn read_short(&mut self) -> Result<i16, Self::Error>;

    fn read_unsigned_short(&mut self) -> Result<u16, Self::Error>;

    fn read_char(&mut self) -> Result<u16, Self::Error>;

    fn read_int(&mut self) -> Result<i32, Self::Error>;

    fn read_long(&mut self) -> Result<i64, Self::Error>;

    /// Reads a float from the raw bit pattern of an int.
    fn read_float(&mut self) -> Result<f32, Self::Error>;

    /// Reads a double from the raw bit pattern of a long.
    fn read_double(&mut self) -> Result<f64, Self::Error>;

    /// Fills `buf` with raw bytes, failing if the data ends before.
    fn read_fully(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Fills the `len` bytes of `buf` starting at `offset` with raw bytes.
    ///
    /// The range is checked before anything is read, so on a range error
    /// nothing is consumed.
    fn read_fully_at(&mut self, buf: &mut [u8], offset: usize, len: usize) -> Result<(), Self::Error>
    where
        Self::Error: From<BoundsError>,
    {
        check_range(buf.len(), offset, len)?;
        self.read_fully(&mut buf[offset..offset + len])
    }

    /// Reads a length-prefixed modified UTF-8 string.
    fn read_utf(&mut self) -> Result<String, Self::Error>;

    /// Skips up to `n` bytes, returning the number of bytes skipped, which
    /// might be smaller than `n`.
    fn skip_bytes(&mut self, n: i64) -> Result<u64, Self::Error>;
}

/// Sequential writes of typed primitive values.
///
/// Multi-byte values are encoded in the byte order of the implementation.
pub trait DataWrite {
    type Error: Error + Send + Sync + 'static;

    /// Writes `true` as a one and `false` as a zero byte.
    fn write_boolean(&mut self, value: bool) -> Result<(), Self::Error>;

    fn write_byte(&mut self, value: i8) -> Result<(), Self::Error>;

    fn write_short(&mut self, value: i16) -> Result<(), Self::Error>;

    fn write_char(&mut self, value: u16) -> Result<(), Self::Error>;

    fn write_int(&mut self, value: i32) -> Result<(), Self::Error>;

    fn write_long(&mut self, value: i64) -> Result<(), Self::Error>;

    /// Writes the raw bit pattern of `value` as an int.
    fn write_float(&mut self, value: f32) -> Result<(), Self::Error>;

    /// Writes the raw bit pattern of `value` as a long.
    fn write_double(&mut self, value: f64) -> Result<(), Self::Error>;

    /// Writes the low byte of each UTF-16 code unit of `text`.
    ///
    /// This is lossy outside the range `U+0000..=U+00FF`.
    fn write_bytes(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Writes each UTF-16 code unit of `text` as a char.
    fn write_chars(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Writes `text` as a length-prefixed modified UTF-8 string.
    fn write_utf(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Returns the number of bytes written so far.
    fn size(&self) -> u64;

    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// The error returned by [`DataReader`](crate::impls::DataReader) and
/// [`DataWriter`](crate::impls::DataWriter).
///
/// `E` is the error type of the underlying byte source or sink, whose errors
/// are passed through unchanged in the [`Io`](DataError::Io) variant.
#[derive(Debug, thiserror::Error)]
pub enum DataError<E: Error + Send + Sync + 'static> {
    /// The data ended before a value could be read completely.
    #[error("Expected to read {expected} bytes but read {actual} bytes")]
    InsufficientData { expected: usize, actual: usize },
    /// An argument was rejected before any side effect took place.
    #[error("Invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: i64 },
    /// A range does not fit in the buffer it refers to.
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    /// The underlying byte source or sink failed.
    #[error(transparent)]
    Io(E),
}
