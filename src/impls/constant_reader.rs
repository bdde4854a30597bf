/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use crate::utils::mutf8::{self, ModifiedUtf8Error};
use alloc::string::String;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An endless [`ByteRead`] returning always the same byte.
///
/// Reads always fill the whole buffer, and skips always skip the requested
/// number of bytes.
///
/// # Examples
/// ```
/// use le_datastream::prelude::*;
///
/// let mut reader = LittleEndianReader::new(ConstantReader::new(0x01));
/// assert_eq!(reader.read_int().unwrap(), 0x01010101);
/// assert_eq!(reader.skip_bytes(i64::MAX).unwrap(), i64::MAX as u64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize), mem_size(flat))]
pub struct ConstantReader {
    constant: u8,
}

impl ConstantReader {
    pub fn new(constant: u8) -> Self {
        Self { constant }
    }

    pub fn constant(&self) -> u8 {
        self.constant
    }
}

impl ByteRead for ConstantReader {
    type Error = ModifiedUtf8Error;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(Some(self.constant))
    }

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        buf.fill(self.constant);
        Ok(buf.len())
    }

    #[inline(always)]
    fn skip(&mut self, n: u64) -> Result<u64, Self::Error> {
        Ok(n)
    }

    /// Reads a string whose length prefix and body are made of the constant
    /// byte; this fails unless the constant is an ASCII character or zero.
    fn read_utf(&mut self) -> Result<String, Self::Error> {
        mutf8::read_from(|buf| self.read_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read() {
        let mut reader = ConstantReader::new(27);
        for _ in 0..1000 {
            assert_eq!(reader.read_byte().unwrap(), Some(27));
        }
        let mut buf = [1u8, 2, 3, 4];
        assert_eq!(reader.read_bytes(&mut buf[1..3]).unwrap(), 2);
        assert_eq!(buf, [1, 27, 27, 4]);
        assert_eq!(reader.skip(u64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn test_read_utf() {
        assert_eq!(ConstantReader::new(0).read_utf().unwrap(), "");
        // 0x0101 = 257 copies of U+0001
        let text = ConstantReader::new(1).read_utf().unwrap();
        assert_eq!(text.len(), 257);
        assert!(text.chars().all(|c| c == '\u{1}'));
        assert!(matches!(
            ConstantReader::new(0x80).read_utf(),
            Err(ModifiedUtf8Error::Malformed { pos: 0 })
        ));
    }

    #[cfg(feature = "mem_dbg")]
    #[test]
    fn test_mem_size() {
        use mem_dbg::{MemSize, SizeFlags};
        let reader = ConstantReader::new(3);
        assert_eq!(
            reader.mem_size(SizeFlags::default()),
            core::mem::size_of::<ConstantReader>()
        );
    }
}
