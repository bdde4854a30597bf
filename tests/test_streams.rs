/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use le_datastream::prelude::*;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::io::Cursor;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_constant_reader() -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BigEndianReader::new(ConstantReader::new(0x80));
    assert_eq!(reader.read_short()?, 0x8080_u16 as i16);
    assert_eq!(reader.read_unsigned_short()?, 0x8080);
    assert_eq!(reader.read_long()?, 0x8080808080808080_u64 as i64);
    assert_eq!(reader.read_unsigned_byte()?, 0x80);
    assert_eq!(reader.read_byte()?, i8::MIN);
    assert!(reader.read_boolean()?);
    assert_eq!(reader.skip_bytes(i64::MAX)?, i64::MAX as u64);
    assert!(reader.skip_bytes(-10).is_err());

    let mut buf = [0u8; 1000];
    for _ in 0..10 {
        reader.read_fully(&mut buf)?;
        assert!(buf.iter().all(|&b| b == 0x80));
    }

    let mut reader = LittleEndianReader::new(ConstantReader::new(0));
    assert!(!reader.read_boolean()?);
    assert_eq!(reader.read_double()?.to_bits(), 0);
    assert_eq!(reader.read_utf()?, "");
    Ok(())
}

#[test]
fn test_random_reader() -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = LittleEndianReader::new(RandomReader::new(SmallRng::seed_from_u64(0)));
    let mut r = SmallRng::seed_from_u64(0);
    for _ in 0..100 {
        let expected = i32::from_le_bytes([
            r.next_u32() as u8,
            r.next_u32() as u8,
            r.next_u32() as u8,
            r.next_u32() as u8,
        ]);
        assert_eq!(reader.read_int()?, expected);
    }

    // skipping consumes the generator exactly as reading does
    let mut a = RandomReader::new(SmallRng::seed_from_u64(1));
    let mut b = RandomReader::new(SmallRng::seed_from_u64(1));
    let mut buf = [0u8; 100];
    a.read_bytes(&mut buf)?;
    let mut b = BigEndianReader::new(&mut b);
    assert_eq!(b.skip_bytes(98)?, 98);
    assert_eq!(b.read_char()?, u16::from_be_bytes([buf[98], buf[99]]));
    Ok(())
}

#[test]
fn test_null_writer() -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = LittleEndianWriter::new(NullWriter::new());
    writer.write_boolean(true)?;
    writer.write_short(1)?;
    writer.write_char(2)?;
    writer.write_int(3)?;
    writer.write_long(4)?;
    writer.write_float(5.0)?;
    writer.write_double(6.0)?;
    writer.write_bytes("abc")?;
    writer.write_chars("abc")?;
    writer.write_utf("abc")?;
    writer.flush()?;
    assert_eq!(writer.size(), 1 + 2 + 2 + 4 + 8 + 4 + 8 + 3 + 6 + 5);
    assert!(writer.write_utf(&"\u{800}".repeat(30000)).is_err());
    assert_eq!(writer.size(), 43);
    Ok(())
}

#[test]
fn test_dbg() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let mut writer = DbgDataWriter::new(BigEndianWriter::new(ByteAdapter::new(Vec::<u8>::new())));
    writer.write_boolean(false)?;
    writer.write_byte(-3)?;
    writer.write_short(-4)?;
    writer.write_char(0xffff)?;
    writer.write_int(5)?;
    writer.write_long(-6)?;
    writer.write_float(f32::NAN)?;
    writer.write_double(-0.0)?;
    writer.write_bytes("xy")?;
    writer.write_chars("z")?;
    writer.write_utf("w")?;
    writer.flush()?;
    assert_eq!(writer.size(), 1 + 1 + 2 + 2 + 4 + 8 + 4 + 8 + 2 + 2 + 3);
    let bytes = writer.into_inner().into_inner().into_inner();

    let mut reader = DbgDataReader::new(BigEndianReader::new(ByteAdapter::new(Cursor::new(bytes))));
    assert!(!reader.read_boolean()?);
    assert_eq!(reader.read_byte()?, -3);
    assert_eq!(reader.read_short()?, -4);
    assert_eq!(reader.read_unsigned_short()?, 0xffff);
    assert_eq!(reader.read_int()?, 5);
    assert_eq!(reader.read_long()?, -6);
    assert_eq!(reader.read_float()?.to_bits(), f32::NAN.to_bits());
    assert_eq!(reader.read_double()?.to_bits(), (-0.0f64).to_bits());
    let mut buf = [0u8; 4];
    assert!(matches!(
        reader.read_fully_at(&mut buf, 3, 2),
        Err(DataError::Bounds(_))
    ));
    reader.read_fully_at(&mut buf, 1, 2)?;
    assert_eq!(&buf, b"\0xy\0");
    assert_eq!(reader.read_char()?, 'z' as u16);
    assert_eq!(reader.read_utf()?, "w");
    assert_eq!(reader.skip_bytes(5)?, 0);
    // failures are passed through unchanged
    match reader.read_int() {
        Err(DataError::InsufficientData { expected, actual }) => {
            assert_eq!((expected, actual), (4, 0));
        }
        other => panic!("unexpected result {:?}", other),
    }
    Ok(())
}
