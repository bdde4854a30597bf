/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::scratch::{SCRATCH_LEN, ScratchGuard};
use crate::codec::bits::{BYTES_IN_CHAR, BYTES_IN_INT, BYTES_IN_LONG, BYTES_IN_SHORT};
use crate::traits::*;
use alloc::vec::Vec;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`DataWrite`] for a [`ByteWrite`].
///
/// Endianness can be selected using the parameter `E`; the type aliases
/// [`LittleEndianWriter`] and [`BigEndianWriter`] fix it.
///
/// Multi-byte values are disassembled into a small scratch buffer owned by
/// the writer, which is then passed to the sink with a single call and zeroed
/// immediately afterwards, even if the sink fails.
///
/// The size of the stream is the number of bytes written into the sink, as
/// reported by [`ByteWrite::bytes_written`]; if the sink was already used
/// before being wrapped, its previous writes are counted, too.
///
/// # Examples
/// ```
/// use le_datastream::prelude::*;
///
/// let mut writer = BigEndianWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
/// writer.write_short(0x1234).unwrap();
/// writer.write_boolean(true).unwrap();
/// assert_eq!(writer.size(), 3);
/// assert_eq!(writer.into_inner().into_inner(), [0x12, 0x34, 0x01]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct DataWriter<E: Endianness, W> {
    /// The sink to which we write bytes.
    backend: W,
    /// Where multi-byte values are disassembled before being written.
    scratch: [u8; SCRATCH_LEN],
    _marker: core::marker::PhantomData<E>,
}

/// A [`DataWriter`] encoding little-endian values.
pub type LittleEndianWriter<W> = DataWriter<LittleEndian, W>;

/// A [`DataWriter`] encoding big-endian values.
pub type BigEndianWriter<W> = DataWriter<BigEndian, W>;

impl<E: Endianness, W> DataWriter<E, W> {
    /// Creates a new [`DataWriter`] writing into `backend`.
    #[must_use]
    pub fn new(backend: W) -> Self {
        Self {
            backend,
            scratch: [0; SCRATCH_LEN],
            _marker: core::marker::PhantomData,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.backend
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.backend
    }

    /// Returns the underlying sink.
    ///
    /// The sink is not flushed.
    pub fn into_inner(self) -> W {
        self.backend
    }
}

impl<E: Endianness, W: ByteWrite> DataWriter<E, W> {
    #[inline(always)]
    fn write_scratch(
        &mut self,
        len: usize,
        fill: impl FnOnce(&mut [u8]) -> Result<(), crate::codec::BoundsError>,
    ) -> Result<(), DataError<W::Error>> {
        let mut scratch = ScratchGuard::new(&mut self.scratch);
        fill(&mut scratch[..])?;
        self.backend
            .write_bytes(&scratch[..len])
            .map_err(DataError::Io)
    }
}

impl<E: Endianness, W: ByteWrite> DataWrite for DataWriter<E, W> {
    type Error = DataError<W::Error>;

    #[inline]
    fn write_boolean(&mut self, value: bool) -> Result<(), Self::Error> {
        self.backend
            .write_byte(value as u8)
            .map_err(DataError::Io)
    }

    #[inline]
    fn write_byte(&mut self, value: i8) -> Result<(), Self::Error> {
        self.backend
            .write_byte(value as u8)
            .map_err(DataError::Io)
    }

    #[inline]
    fn write_short(&mut self, value: i16) -> Result<(), Self::Error> {
        self.write_scratch(BYTES_IN_SHORT, |buf| E::break_short_into(value, buf, 0))
    }

    #[inline]
    fn write_char(&mut self, value: u16) -> Result<(), Self::Error> {
        self.write_scratch(BYTES_IN_CHAR, |buf| E::break_char_into(value, buf, 0))
    }

    #[inline]
    fn write_int(&mut self, value: i32) -> Result<(), Self::Error> {
        self.write_scratch(BYTES_IN_INT, |buf| E::break_int_into(value, buf, 0))
    }

    #[inline]
    fn write_long(&mut self, value: i64) -> Result<(), Self::Error> {
        self.write_scratch(BYTES_IN_LONG, |buf| E::break_long_into(value, buf, 0))
    }

    #[inline]
    fn write_float(&mut self, value: f32) -> Result<(), Self::Error> {
        self.write_int(value.to_bits() as i32)
    }

    #[inline]
    fn write_double(&mut self, value: f64) -> Result<(), Self::Error> {
        self.write_long(value.to_bits() as i64)
    }

    fn write_bytes(&mut self, text: &str) -> Result<(), Self::Error> {
        let bytes: Vec<u8> = text.encode_utf16().map(|unit| unit as u8).collect();
        self.backend.write_bytes(&bytes).map_err(DataError::Io)
    }

    fn write_chars(&mut self, text: &str) -> Result<(), Self::Error> {
        for unit in text.encode_utf16() {
            self.write_char(unit)?;
        }
        Ok(())
    }

    fn write_utf(&mut self, text: &str) -> Result<(), Self::Error> {
        self.backend.write_utf(text).map_err(DataError::Io)
    }

    #[inline(always)]
    fn size(&self) -> u64 {
        self.backend.bytes_written()
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.backend.flush().map_err(DataError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{MemByteWriterVec, NullWriter};

    #[test]
    fn test_write_le() {
        let mut writer = LittleEndianWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
        writer.write_boolean(true).unwrap();
        writer.write_byte(-1).unwrap();
        writer.write_char(0xbbaa).unwrap();
        writer.write_short(-2).unwrap();
        writer.write_int(0x12345678).unwrap();
        writer.write_long(0x1234567890abcdef).unwrap();
        assert_eq!(writer.size(), 1 + 1 + 2 + 2 + 4 + 8);
        assert_eq!(writer.scratch, [0; SCRATCH_LEN]);
        assert_eq!(
            writer.into_inner().into_inner(),
            [
                0x01, 0xff, 0xaa, 0xbb, 0xfe, 0xff, 0x78, 0x56, 0x34, 0x12, 0xef, 0xcd, 0xab,
                0x90, 0x78, 0x56, 0x34, 0x12
            ]
        );
    }

    #[test]
    fn test_write_be() {
        let mut writer = BigEndianWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
        writer.write_char(0xaabb).unwrap();
        writer.write_int(0x12345678).unwrap();
        assert_eq!(
            writer.into_inner().into_inner(),
            [0xaa, 0xbb, 0x12, 0x34, 0x56, 0x78]
        );
    }

    #[test]
    fn test_write_float_raw_bits() {
        let nan = f32::from_bits(0x7fc0_0001);
        let mut writer = LittleEndianWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
        writer.write_float(nan).unwrap();
        writer.write_double(-0.0).unwrap();
        let bytes = writer.into_inner().into_inner();
        assert_eq!(bytes[..4], 0x7fc0_0001_u32.to_le_bytes());
        assert_eq!(bytes[4..], (-0.0f64).to_bits().to_le_bytes());
    }

    #[test]
    fn test_write_text() {
        let mut writer = LittleEndianWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
        // the low byte of U+20AC is 0xac
        writer.write_bytes("a\u{e9}\u{20ac}").unwrap();
        writer.write_chars("a\u{20ac}").unwrap();
        writer.write_utf("a\0").unwrap();
        assert_eq!(writer.size(), 3 + 4 + 2 + 3);
        assert_eq!(
            writer.into_inner().into_inner(),
            [
                b'a', 0xe9, 0xac, b'a', 0x00, 0xac, 0x20, 0x00, 0x03, b'a', 0xc0, 0x80
            ]
        );
    }

    #[test]
    fn test_size_counts_previous_writes() {
        let mut sink = NullWriter::new();
        sink.write_bytes(&[0; 10]).unwrap();
        let mut writer = LittleEndianWriter::new(&mut sink);
        assert_eq!(writer.size(), 10);
        writer.write_long(0).unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.size(), 18);
        assert_eq!(sink.bytes_written(), 18);
    }

    #[derive(thiserror::Error, Debug)]
    #[error("sink is full")]
    struct Full;

    /// A sink accepting `room` bytes; later writes fail without writing.
    struct FullSink {
        room: usize,
        data: Vec<u8>,
    }

    impl ByteWrite for FullSink {
        type Error = Full;

        fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
            self.write_bytes(&[byte])
        }

        fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            if self.data.len() + buf.len() > self.room {
                return Err(Full);
            }
            self.data.extend_from_slice(buf);
            Ok(())
        }

        fn write_utf(&mut self, _text: &str) -> Result<(), Self::Error> {
            Err(Full)
        }

        fn bytes_written(&self) -> u64 {
            self.data.len() as u64
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_failing_sink_clears_scratch() {
        let mut writer = BigEndianWriter::new(FullSink {
            room: 6,
            data: Vec::new(),
        });
        writer.write_short(0x0102).unwrap();
        assert!(matches!(writer.write_long(-1), Err(DataError::Io(Full))));
        assert_eq!(writer.scratch, [0; SCRATCH_LEN]);
        assert_eq!(writer.size(), 2);
        assert!(matches!(writer.write_double(1.5), Err(DataError::Io(Full))));
        assert_eq!(writer.scratch, [0; SCRATCH_LEN]);
        writer.write_int(0x0a0b0c0d).unwrap();
        assert!(matches!(writer.write_char(0xffff), Err(DataError::Io(Full))));
        assert_eq!(writer.scratch, [0; SCRATCH_LEN]);
        assert_eq!(writer.size(), 6);
        assert_eq!(
            writer.into_inner().data,
            [0x01, 0x02, 0x0a, 0x0b, 0x0c, 0x0d]
        );
    }
}
