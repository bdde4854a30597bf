/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use crate::utils::mutf8::{self, ModifiedUtf8Error};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// A [`ByteWrite`] discarding everything it receives.
///
/// Bytes are still counted, so a [`DataWriter`](crate::impls::DataWriter)
/// over a [`NullWriter`] computes the size of a sequence of writes without
/// storing it.
///
/// # Examples
/// ```
/// use le_datastream::prelude::*;
///
/// let mut writer = BigEndianWriter::new(NullWriter::new());
/// writer.write_long(0).unwrap();
/// writer.write_utf("\u{20ac}").unwrap();
/// assert_eq!(writer.size(), 8 + 2 + 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize), mem_size(flat))]
pub struct NullWriter {
    written: u64,
}

impl NullWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ByteWrite for NullWriter {
    type Error = ModifiedUtf8Error;

    #[inline(always)]
    fn write_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
        self.written += 1;
        Ok(())
    }

    #[inline(always)]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.written += buf.len() as u64;
        Ok(())
    }

    fn write_utf(&mut self, text: &str) -> Result<(), Self::Error> {
        let len = mutf8::encoded_len(text);
        if len > mutf8::MAX_ENCODED_LEN {
            return Err(ModifiedUtf8Error::TooLong { len });
        }
        self.written += 2 + len as u64;
        Ok(())
    }

    #[inline(always)]
    fn bytes_written(&self) -> u64 {
        self.written
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
