/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::scratch::{SCRATCH_LEN, ScratchGuard};
use crate::codec::bits::{self, BYTES_IN_CHAR, BYTES_IN_INT, BYTES_IN_LONG, BYTES_IN_SHORT};
use crate::traits::*;
use alloc::string::String;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`DataRead`] for a [`ByteRead`].
///
/// Endianness can be selected using the parameter `E`; the type aliases
/// [`LittleEndianReader`] and [`BigEndianReader`] fix it.
///
/// Multi-byte values are first collected in a small scratch buffer owned by
/// the reader, and then assembled using the [`bits`] functions selected by
/// `E`. The scratch buffer is zeroed after every operation, successful or
/// not, so no byte of a value survives into the next operation.
///
/// The reader takes its source by value: to keep using a source after the
/// reader is gone, pass a mutable reference, or use
/// [`into_inner`](DataReader::into_inner). All operations require a mutable
/// reference, so the same reader cannot be used concurrently.
///
/// # Examples
/// ```
/// use le_datastream::prelude::*;
///
/// let mut reader = LittleEndianReader::new(MemByteReader::new([0x78u8, 0x56, 0x34, 0x12]));
/// assert_eq!(reader.read_int().unwrap(), 0x12345678);
/// assert!(matches!(
///     reader.read_short(),
///     Err(DataError::InsufficientData { expected: 2, actual: 0 })
/// ));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct DataReader<E: Endianness, R> {
    /// The source from which we read bytes.
    backend: R,
    /// Where multi-byte values are collected before assembly.
    scratch: [u8; SCRATCH_LEN],
    _marker: core::marker::PhantomData<E>,
}

/// A [`DataReader`] decoding little-endian values.
pub type LittleEndianReader<R> = DataReader<LittleEndian, R>;

/// A [`DataReader`] decoding big-endian values.
pub type BigEndianReader<R> = DataReader<BigEndian, R>;

impl<E: Endianness, R> DataReader<E, R> {
    /// Creates a new [`DataReader`] reading from `backend`.
    #[must_use]
    pub fn new(backend: R) -> Self {
        Self {
            backend,
            scratch: [0; SCRATCH_LEN],
            _marker: core::marker::PhantomData,
        }
    }

    /// Returns a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.backend
    }

    /// Returns a mutable reference to the underlying source.
    ///
    /// Reading directly from the source advances the position of this
    /// reader, too.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.backend
    }

    pub fn into_inner(self) -> R {
        self.backend
    }
}

/// Reads exactly `buf.len()` bytes from `backend`.
///
/// The source is asked repeatedly for the missing bytes until either `buf` is
/// full or the source reports the end of the data.
fn fill<R: ByteRead>(backend: &mut R, buf: &mut [u8]) -> Result<(), DataError<R::Error>> {
    let mut filled = 0;
    while filled < buf.len() {
        match backend.read_bytes(&mut buf[filled..]).map_err(DataError::Io)? {
            0 => {
                return Err(DataError::InsufficientData {
                    expected: buf.len(),
                    actual: filled,
                });
            }
            n => filled += n,
        }
    }
    Ok(())
}

impl<E: Endianness, R: ByteRead> DataRead for DataReader<E, R> {
    type Error = DataError<R::Error>;

    #[inline]
    fn read_boolean(&mut self) -> Result<bool, Self::Error> {
        Ok(self.read_byte()? != 0)
    }

    #[inline]
    fn read_byte(&mut self) -> Result<i8, Self::Error> {
        match self.backend.read_byte().map_err(DataError::Io)? {
            Some(byte) => Ok(byte as i8),
            None => Err(DataError::InsufficientData {
                expected: bits::BYTES_IN_BYTE,
                actual: 0,
            }),
        }
    }

    #[inline]
    fn read_unsigned_byte(&mut self) -> Result<u8, Self::Error> {
        Ok(bits::unsigned_byte(self.read_byte()?) as u8)
    }

    #[inline]
    fn read_short(&mut self) -> Result<i16, Self::Error> {
        let mut scratch = ScratchGuard::new(&mut self.scratch);
        fill(&mut self.backend, &mut scratch[..BYTES_IN_SHORT])?;
        let [b0, b1, ..] = *scratch;
        Ok(E::make_short(&[b0, b1]))
    }

    #[inline]
    fn read_unsigned_short(&mut self) -> Result<u16, Self::Error> {
        Ok(bits::unsigned_short(self.read_short()?) as u16)
    }

    #[inline]
    fn read_char(&mut self) -> Result<u16, Self::Error> {
        let mut scratch = ScratchGuard::new(&mut self.scratch);
        fill(&mut self.backend, &mut scratch[..BYTES_IN_CHAR])?;
        let [b0, b1, ..] = *scratch;
        Ok(E::make_char(&[b0, b1]))
    }

    #[inline]
    fn read_int(&mut self) -> Result<i32, Self::Error> {
        let mut scratch = ScratchGuard::new(&mut self.scratch);
        fill(&mut self.backend, &mut scratch[..BYTES_IN_INT])?;
        let [b0, b1, b2, b3, ..] = *scratch;
        Ok(E::make_int(&[b0, b1, b2, b3]))
    }

    #[inline]
    fn read_long(&mut self) -> Result<i64, Self::Error> {
        let mut scratch = ScratchGuard::new(&mut self.scratch);
        fill(&mut self.backend, &mut scratch[..BYTES_IN_LONG])?;
        Ok(E::make_long(&scratch))
    }

    #[inline]
    fn read_float(&mut self) -> Result<f32, Self::Error> {
        Ok(f32::from_bits(self.read_int()? as u32))
    }

    #[inline]
    fn read_double(&mut self) -> Result<f64, Self::Error> {
        Ok(f64::from_bits(self.read_long()? as u64))
    }

    fn read_fully(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        fill(&mut self.backend, buf)
    }

    fn read_utf(&mut self) -> Result<String, Self::Error> {
        self.backend.read_utf().map_err(DataError::Io)
    }

    fn skip_bytes(&mut self, n: i64) -> Result<u64, Self::Error> {
        if n < 0 {
            return Err(DataError::InvalidArgument {
                name: "skip count",
                value: n,
            });
        }
        let n = n as u64;
        let mut skipped = 0;
        while skipped < n {
            match self.backend.skip(n - skipped).map_err(DataError::Io)? {
                0 => break,
                s => skipped += s,
            }
        }
        Ok(skipped)
    }
}
