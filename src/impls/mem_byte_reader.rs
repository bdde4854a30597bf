/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use crate::utils::mutf8::{self, ModifiedUtf8Error};
use alloc::string::String;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`ByteRead`] for a slice.
///
/// The only possible error is a malformed or truncated string in
/// [`read_utf`](ByteRead::read_utf); the end of the slice is reported as the
/// end of the data.
///
/// # Examples
/// ```
/// use le_datastream::prelude::*;
///
/// let mut reader = MemByteReader::new([1u8, 2, 3]);
/// assert_eq!(reader.read_byte().unwrap(), Some(1));
/// assert_eq!(reader.skip(10).unwrap(), 2);
/// assert_eq!(reader.read_byte().unwrap(), None);
///
/// reader.set_position(1);
/// assert_eq!(reader.read_byte().unwrap(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteReader<B: AsRef<[u8]>> {
    data: B,
    pos: usize,
}

impl<B: AsRef<[u8]>> MemByteReader<B> {
    /// Creates a new [`MemByteReader`] from a slice of data
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Sets the current position.
    ///
    /// Positions beyond the end of the data are clamped to the end.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.data.as_ref().len());
    }

    pub fn into_inner(self) -> B {
        self.data
    }

    #[inline(always)]
    fn remaining(&self) -> &[u8] {
        &self.data.as_ref()[self.pos..]
    }
}

impl<B: AsRef<[u8]>> ByteRead for MemByteReader<B> {
    type Error = ModifiedUtf8Error;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let byte = self.remaining().first().copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = self.remaining();
        let len = buf.len().min(remaining.len());
        buf[..len].copy_from_slice(&remaining[..len]);
        self.pos += len;
        Ok(len)
    }

    fn skip(&mut self, n: u64) -> Result<u64, Self::Error> {
        let len = n.min(self.remaining().len() as u64);
        self.pos += len as usize;
        Ok(len)
    }

    fn read_utf(&mut self) -> Result<String, Self::Error> {
        mutf8::read_from(|buf| self.read_bytes(buf))
    }
}
