/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use crate::utils::mutf8::{self, ModifiedUtf8Error};
use alloc::vec::Vec;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`ByteWrite`] appending to a [`Vec<u8>`].
///
/// The vector can be owned or borrowed mutably. Writes never fail, except for
/// strings whose encoding is too long for
/// [`write_utf`](ByteWrite::write_utf).
///
/// # Examples
/// ```
/// use le_datastream::prelude::*;
///
/// let mut bytes = vec![0xff];
/// let mut writer = MemByteWriterVec::new(&mut bytes);
/// writer.write_bytes(&[1, 2]).unwrap();
/// writer.write_utf("ok").unwrap();
/// // only the bytes written through the writer are counted
/// assert_eq!(writer.bytes_written(), 6);
/// assert_eq!(bytes, [0xff, 1, 2, 0, 2, b'o', b'k']);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteWriterVec<B: AsMut<Vec<u8>>> {
    data: B,
    written: u64,
}

impl<B: AsMut<Vec<u8>>> MemByteWriterVec<B> {
    /// Creates a new [`MemByteWriterVec`] appending to `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data, written: 0 }
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsMut<Vec<u8>>> ByteWrite for MemByteWriterVec<B> {
    type Error = ModifiedUtf8Error;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.data.as_mut().push(byte);
        self.written += 1;
        Ok(())
    }

    #[inline]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.data.as_mut().extend_from_slice(buf);
        self.written += buf.len() as u64;
        Ok(())
    }

    fn write_utf(&mut self, text: &str) -> Result<(), Self::Error> {
        let encoded = mutf8::encode(text)?;
        self.write_bytes(&encoded)
    }

    #[inline(always)]
    fn bytes_written(&self) -> u64 {
        self.written
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
