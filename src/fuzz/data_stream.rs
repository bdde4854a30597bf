/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::string::String;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone)]
pub enum RandomCommand {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Char(u16),
    Int(i32),
    Long(i64),
    Float(u32),
    Double(u64),
    Utf(String),
    Skip(u8),
}

/// Writes all commands in both byte orders, checks that the two encodings are
/// one the reverse of the other value by value, and reads everything back.
pub fn harness(data: FuzzCase) {
    let mut le = LittleEndianWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
    let mut be = BigEndianWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
    let mut written = Vec::new();

    for command in &data.commands {
        let le_start = le.size() as usize;
        let (l, b) = match command {
            RandomCommand::Boolean(v) => (le.write_boolean(*v), be.write_boolean(*v)),
            RandomCommand::Byte(v) => (le.write_byte(*v), be.write_byte(*v)),
            RandomCommand::Short(v) => (le.write_short(*v), be.write_short(*v)),
            RandomCommand::Char(v) => (le.write_char(*v), be.write_char(*v)),
            RandomCommand::Int(v) => (le.write_int(*v), be.write_int(*v)),
            RandomCommand::Long(v) => (le.write_long(*v), be.write_long(*v)),
            RandomCommand::Float(v) => (
                le.write_float(f32::from_bits(*v)),
                be.write_float(f32::from_bits(*v)),
            ),
            RandomCommand::Double(v) => (
                le.write_double(f64::from_bits(*v)),
                be.write_double(f64::from_bits(*v)),
            ),
            RandomCommand::Utf(s) => (le.write_utf(s), be.write_utf(s)),
            RandomCommand::Skip(n) => {
                let padding = alloc::vec![0xaa; *n as usize];
                (
                    le.get_mut().write_bytes(&padding).map_err(DataError::Io),
                    be.get_mut().write_bytes(&padding).map_err(DataError::Io),
                )
            }
        };
        assert_eq!(l.is_ok(), b.is_ok());
        assert_eq!(le.size(), be.size());
        if l.is_ok() {
            written.push((command.clone(), le_start));
        }
    }

    let le_bytes = le.into_inner().into_inner();
    let be_bytes = be.into_inner().into_inner();
    assert_eq!(le_bytes.len(), be_bytes.len());

    let mut le = LittleEndianReader::new(MemByteReader::new(&le_bytes));
    let mut be = BigEndianReader::new(MemByteReader::new(&be_bytes));
    for (command, start) in written {
        assert_eq!(le.get_ref().position(), start);
        match command {
            RandomCommand::Boolean(v) => {
                assert_eq!(le.read_boolean().unwrap(), v);
                assert_eq!(be.read_boolean().unwrap(), v);
            }
            RandomCommand::Byte(v) => {
                assert_eq!(le.read_byte().unwrap(), v);
                assert_eq!(be.read_byte().unwrap(), v);
            }
            RandomCommand::Short(v) => {
                let end = start + 2;
                assert_eq!(le_bytes[start..end], bits::break_short_le(v));
                assert_eq!(be_bytes[start..end], bits::break_short(v));
                assert_eq!(le.read_short().unwrap(), v);
                assert_eq!(be.read_short().unwrap(), v);
            }
            RandomCommand::Char(v) => {
                assert_eq!(le.read_char().unwrap(), v);
                assert_eq!(be.read_char().unwrap(), v);
            }
            RandomCommand::Int(v) => {
                let end = start + 4;
                assert_eq!(le_bytes[start..end], bits::break_int_le(v));
                assert_eq!(be_bytes[start..end], bits::break_int(v));
                assert_eq!(le.read_int().unwrap(), v);
                assert_eq!(be.read_int().unwrap(), v);
            }
            RandomCommand::Long(v) => {
                let end = start + 8;
                let mut reversed = be_bytes[start..end].to_vec();
                reversed.reverse();
                assert_eq!(le_bytes[start..end], reversed[..]);
                assert_eq!(le.read_long().unwrap(), v);
                assert_eq!(be.read_long().unwrap(), v);
            }
            RandomCommand::Float(v) => {
                assert_eq!(le.read_float().unwrap().to_bits(), v);
                assert_eq!(be.read_float().unwrap().to_bits(), v);
            }
            RandomCommand::Double(v) => {
                assert_eq!(le.read_double().unwrap().to_bits(), v);
                assert_eq!(be.read_double().unwrap().to_bits(), v);
            }
            RandomCommand::Utf(s) => {
                assert_eq!(le.read_utf().unwrap(), s);
                assert_eq!(be.read_utf().unwrap(), s);
            }
            RandomCommand::Skip(n) => {
                assert_eq!(le.skip_bytes(n as i64).unwrap(), n as u64);
                assert_eq!(be.skip_bytes(n as i64).unwrap(), n as u64);
            }
        }
    }
    assert!(le.read_byte().is_err());
    assert!(be.read_byte().is_err());
}
