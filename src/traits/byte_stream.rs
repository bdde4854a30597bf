/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::string::String;
use core::error::Error;

/// Sequential, streaming byte-by-byte reads.
///
/// This is the source a [`DataReader`](crate::impls::DataReader) draws
/// bytes from. Implementations decide how to decode the length-prefixed
/// modified UTF-8 text returned by [`read_utf`](ByteRead::read_utf); the
/// ones in this crate use [`mutf8`](crate::utils::mutf8).
pub trait ByteRead {
    type Error: Error + Send + Sync + 'static;

    /// Reads a byte and advances the current position, returning `None` at
    /// the end of the data.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Reads at most `buf.len()` bytes into `buf`, returning the number of
    /// bytes obtained.
    ///
    /// The result is zero only if `buf` is empty or the data ended; a
    /// short, nonzero result does not imply the end of the data.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Skips at most `n` bytes, returning the number of bytes actually
    /// skipped.
    fn skip(&mut self, n: u64) -> Result<u64, Self::Error>;

    /// Reads a length-prefixed modified UTF-8 string.
    fn read_utf(&mut self) -> Result<String, Self::Error>;
}

/// Sequential, streaming byte-by-byte writes.
///
/// This is the sink a [`DataWriter`](crate::impls::DataWriter) pushes
/// bytes into.
pub trait ByteWrite {
    type Error: Error + Send + Sync + 'static;

    /// Writes a byte and advances the current position.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Writes all the bytes of `buf`.
    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    /// Writes `text` as a length-prefixed modified UTF-8 string.
    fn write_utf(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Returns the number of bytes written so far.
    fn bytes_written(&self) -> u64;

    /// Flushes the stream.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<B: ByteRead + ?Sized> ByteRead for &mut B {
    type Error = B::Error;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read_bytes(buf)
    }

    #[inline(always)]
    fn skip(&mut self, n: u64) -> Result<u64, Self::Error> {
        (**self).skip(n)
    }

    #[inline(always)]
    fn read_utf(&mut self) -> Result<String, Self::Error> {
        (**self).read_utf()
    }
}

impl<B: ByteWrite + ?Sized> ByteWrite for &mut B {
    type Error = B::Error;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    #[inline(always)]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(buf)
    }

    #[inline(always)]
    fn write_utf(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).write_utf(text)
    }

    #[inline(always)]
    fn bytes_written(&self) -> u64 {
        (**self).bytes_written()
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}
