/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    init: Vec<u8>,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    ReadByte,
    ReadBytes(u8),
    ReadLong,
    ReadFully(u8),
    Skip(i16),
    SetPosition(usize),
}

/// Checks a [`DataReader`] over a [`MemByteReader`] against a plain slice.
pub fn harness(data: FuzzCase) {
    let mut idx = 0;
    let len = data.init.len();
    let mut reader = BigEndianReader::new(MemByteReader::new(&data.init));
    for command in data.commands {
        let remaining = len - idx;
        match command {
            RandomCommand::ReadByte => match reader.read_unsigned_byte() {
                Ok(byte) => {
                    assert_eq!(byte, data.init[idx]);
                    idx += 1;
                }
                Err(_) => assert_eq!(remaining, 0),
            },
            RandomCommand::ReadBytes(n) => {
                let mut buf = alloc::vec![0; n as usize];
                let read = reader.get_mut().read_bytes(&mut buf).unwrap();
                assert_eq!(read, remaining.min(n as usize));
                assert_eq!(buf[..read], data.init[idx..idx + read]);
                idx += read;
            }
            RandomCommand::ReadLong => match reader.read_long() {
                Ok(value) => {
                    let mut expected = [0; 8];
                    expected.copy_from_slice(&data.init[idx..idx + 8]);
                    assert_eq!(value, i64::from_be_bytes(expected));
                    idx += 8;
                }
                Err(DataError::InsufficientData { expected, actual }) => {
                    assert_eq!(expected, 8);
                    assert_eq!(actual, remaining);
                    idx = len;
                }
                Err(e) => panic!("unexpected error {}", e),
            },
            RandomCommand::ReadFully(n) => {
                let mut buf = alloc::vec![0; n as usize];
                match reader.read_fully(&mut buf) {
                    Ok(()) => {
                        assert_eq!(buf[..], data.init[idx..idx + n as usize]);
                        idx += n as usize;
                    }
                    Err(_) => {
                        assert!(remaining < n as usize);
                        idx = len;
                    }
                }
            }
            RandomCommand::Skip(n) => match reader.skip_bytes(n as i64) {
                Ok(skipped) => {
                    assert_eq!(skipped, (n as usize).min(remaining) as u64);
                    idx += skipped as usize;
                }
                Err(_) => assert!(n < 0),
            },
            RandomCommand::SetPosition(pos) => {
                reader.get_mut().set_position(pos);
                idx = pos.min(len);
            }
        }
        assert_eq!(reader.get_ref().position(), idx);
    }
}
