/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codec::BoundsError;
use crate::traits::*;
use alloc::string::String;
use core::fmt::{Debug, Display};
use log::{debug, warn};

#[inline]
fn report<T: Debug, E: Display>(op: &str, result: Result<T, E>) -> Result<T, E> {
    match &result {
        Ok(value) => debug!("{}: {:?}", op, value),
        Err(e) => warn!("{} failed: {}", op, e),
    }
    result
}

/// A wrapper over a [`DataRead`] that logs all operations performed and
/// their results.
///
/// Successful operations are logged at the debug level, failures at the
/// warn level.
#[derive(Debug)]
pub struct DbgDataReader<R> {
    reader: R,
}

impl<R> DbgDataReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: DataRead> DataRead for DbgDataReader<R> {
    type Error = R::Error;

    fn read_boolean(&mut self) -> Result<bool, Self::Error> {
        report("read_boolean()", self.reader.read_boolean())
    }

    fn read_byte(&mut self) -> Result<i8, Self::Error> {
        report("read_byte()", self.reader.read_byte())
    }

    fn read_unsigned_byte(&mut self) -> Result<u8, Self::Error> {
        report("read_unsigned_byte()", self.reader.read_unsigned_byte())
    }

    fn read_short(&mut self) -> Result<i16, Self::Error> {
        report("read_short()", self.reader.read_short())
    }

    fn read_unsigned_short(&mut self) -> Result<u16, Self::Error> {
        report("read_unsigned_short()", self.reader.read_unsigned_short())
    }

    fn read_char(&mut self) -> Result<u16, Self::Error> {
        report("read_char()", self.reader.read_char())
    }

    fn read_int(&mut self) -> Result<i32, Self::Error> {
        report("read_int()", self.reader.read_int())
    }

    fn read_long(&mut self) -> Result<i64, Self::Error> {
        report("read_long()", self.reader.read_long())
    }

    fn read_float(&mut self) -> Result<f32, Self::Error> {
        report("read_float()", self.reader.read_float())
    }

    fn read_double(&mut self) -> Result<f64, Self::Error> {
        report("read_double()", self.reader.read_double())
    }

    fn read_fully(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        let result = self.reader.read_fully(buf);
        match &result {
            Ok(()) => debug!("read_fully({}): {:02x?}", buf.len(), buf),
            Err(e) => warn!("read_fully({}) failed: {}", buf.len(), e),
        }
        result
    }

    fn read_fully_at(&mut self, buf: &mut [u8], offset: usize, len: usize) -> Result<(), Self::Error>
    where
        Self::Error: From<BoundsError>,
    {
        let result = self.reader.read_fully_at(buf, offset, len);
        match &result {
            Ok(()) => debug!(
                "read_fully_at({}, {}): {:02x?}",
                offset,
                len,
                &buf[offset..offset + len]
            ),
            Err(e) => warn!("read_fully_at({}, {}) failed: {}", offset, len, e),
        }
        result
    }

    fn read_utf(&mut self) -> Result<String, Self::Error> {
        report("read_utf()", self.reader.read_utf())
    }

    fn skip_bytes(&mut self, n: i64) -> Result<u64, Self::Error> {
        let result = self.reader.skip_bytes(n);
        match &result {
            Ok(skipped) => debug!("skip_bytes({}): {}", n, skipped),
            Err(e) => warn!("skip_bytes({}) failed: {}", n, e),
        }
        result
    }
}

/// A wrapper over a [`DataWrite`] that logs all operations performed,
/// together with the size of the stream after each of them.
#[derive(Debug)]
pub struct DbgDataWriter<W> {
    writer: W,
}

impl<W> DbgDataWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: DataWrite> DbgDataWriter<W> {
    fn report(
        &self,
        op: core::fmt::Arguments<'_>,
        result: Result<(), W::Error>,
    ) -> Result<(), W::Error> {
        match &result {
            Ok(()) => debug!("{} (size = {})", op, self.writer.size()),
            Err(e) => warn!("{} failed: {}", op, e),
        }
        result
    }
}

impl<W: DataWrite> DataWrite for DbgDataWriter<W> {
    type Error = W::Error;

    fn write_boolean(&mut self, value: bool) -> Result<(), Self::Error> {
        let result = self.writer.write_boolean(value);
        self.report(format_args!("write_boolean({})", value), result)
    }

    fn write_byte(&mut self, value: i8) -> Result<(), Self::Error> {
        let result = self.writer.write_byte(value);
        self.report(format_args!("write_byte({})", value), result)
    }

    fn write_short(&mut self, value: i16) -> Result<(), Self::Error> {
        let result = self.writer.write_short(value);
        self.report(format_args!("write_short({})", value), result)
    }

    fn write_char(&mut self, value: u16) -> Result<(), Self::Error> {
        let result = self.writer.write_char(value);
        self.report(format_args!("write_char({:#06x})", value), result)
    }

    fn write_int(&mut self, value: i32) -> Result<(), Self::Error> {
        let result = self.writer.write_int(value);
        self.report(format_args!("write_int({})", value), result)
    }

    fn write_long(&mut self, value: i64) -> Result<(), Self::Error> {
        let result = self.writer.write_long(value);
        self.report(format_args!("write_long({})", value), result)
    }

    fn write_float(&mut self, value: f32) -> Result<(), Self::Error> {
        let result = self.writer.write_float(value);
        self.report(
            format_args!("write_float({} = {:#010x})", value, value.to_bits()),
            result,
        )
    }

    fn write_double(&mut self, value: f64) -> Result<(), Self::Error> {
        let result = self.writer.write_double(value);
        self.report(
            format_args!("write_double({} = {:#018x})", value, value.to_bits()),
            result,
        )
    }

    fn write_bytes(&mut self, text: &str) -> Result<(), Self::Error> {
        let result = self.writer.write_bytes(text);
        self.report(format_args!("write_bytes({:?})", text), result)
    }

    fn write_chars(&mut self, text: &str) -> Result<(), Self::Error> {
        let result = self.writer.write_chars(text);
        self.report(format_args!("write_chars({:?})", text), result)
    }

    fn write_utf(&mut self, text: &str) -> Result<(), Self::Error> {
        let result = self.writer.write_utf(text);
        self.report(format_args!("write_utf({:?})", text), result)
    }

    fn size(&self) -> u64 {
        self.writer.size()
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let result = self.writer.flush();
        self.report(format_args!("flush()"), result)
    }
}
