/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use crate::utils::mutf8;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};
use std::io::{ErrorKind, Read, Write};

/// An adapter from [`Read`] and [`Write`] to [`ByteRead`] and [`ByteWrite`],
/// respectively.
///
/// Instances of this struct can be created using [`ByteAdapter::new`]. They
/// turn every standard source or destination of bytes (such as
/// [`std::fs::File`], [`std::io::BufReader`], sockets, etc.) into a byte
/// source or sink for [`DataReader`](crate::impls::DataReader) and
/// [`DataWriter`](crate::impls::DataWriter).
///
/// Interrupted reads and writes are retried. Bytes written through the
/// adapter are counted, so [`bytes_written`](ByteWrite::bytes_written) starts
/// from zero irrespective of the position of the backend.
///
/// No buffering is performed: wrap the backend in a [`std::io::BufReader`]
/// or [`std::io::BufWriter`] when it is expensive to access.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct ByteAdapter<B> {
    backend: B,
    written: u64,
}

impl<B> ByteAdapter<B> {
    /// Create a new ByteAdapter
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            written: 0,
        }
    }

    pub fn get_ref(&self) -> &B {
        &self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B: Read> ByteRead for ByteAdapter<B> {
    type Error = std::io::Error;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut byte = [0u8; 1];
        Ok(match self.read_bytes(&mut byte)? {
            0 => None,
            _ => Some(byte[0]),
        })
    }

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.backend.read(buf) {
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                result => return result,
            }
        }
    }

    fn skip(&mut self, n: u64) -> Result<u64, Self::Error> {
        std::io::copy(&mut (&mut self.backend).take(n), &mut std::io::sink())
    }

    fn read_utf(&mut self) -> Result<String, Self::Error> {
        mutf8::read_from(|buf| self.read_bytes(buf))
    }
}

impl<B: Write> ByteWrite for ByteAdapter<B> {
    type Error = std::io::Error;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_bytes(&[byte])
    }

    #[inline]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.backend.write_all(buf)?;
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
        self.backend.flush()
    }
}

#[cfg(test)]
mod test {
    use crate::prelude::*;
    use std::io::Cursor;

    #[test]
    fn test_byte_adapter() {
        let path = std::env::temp_dir().join("test_byte_adapter");
        {
            let file = std::fs::File::create(&path).unwrap();
            let mut writer = LittleEndianWriter::new(ByteAdapter::new(file));
            for value in [0x12345678, -1, 0, i32::MIN] {
                writer.write_int(value).unwrap();
            }
            writer.write_utf("caf\u{e9}").unwrap();
            assert_eq!(writer.size(), 4 * 4 + 2 + 5);
            writer.flush().unwrap();
        }
        {
            let file = std::fs::File::open(&path).unwrap();
            let mut reader = LittleEndianReader::new(ByteAdapter::new(file));
            assert_eq!(reader.read_int().unwrap(), 0x12345678);
            assert_eq!(reader.skip_bytes(4).unwrap(), 4);
            assert_eq!(reader.read_int().unwrap(), 0);
            assert_eq!(reader.read_int().unwrap(), i32::MIN);
            assert_eq!(reader.read_utf().unwrap(), "caf\u{e9}");
            assert_eq!(reader.skip_bytes(10).unwrap(), 0);
        }
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_io_errors() {
        let mut reader = ByteAdapter::new(Cursor::new([0u8, 5, b'a']));
        let err = reader.read_utf().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);

        let mut reader = ByteAdapter::new(Cursor::new([0u8, 1, 0xff]));
        let err = reader.read_utf().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);

        // a full fixed-size sink
        let mut buf = [0u8; 3];
        let mut writer = BigEndianWriter::new(ByteAdapter::new(&mut buf[..]));
        match writer.write_int(1) {
            Err(DataError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::WriteZero),
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(writer.size(), 0);
    }
}
