/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codec::bits;
use crate::codec::bounds::BoundsError;

/// Inner private trait used to make implementing [`Endianness`]
/// impossible for other structs.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Endianness {}
}

/// Endianness selector types.
///
/// Its only implementations are [`LittleEndian`] and [`BigEndian`]. The
/// associated functions pick the [`bits`] entry points matching the byte
/// order: `make_*` assemble a value from bytes given in stream order, and
/// `break_*_into` lay out a value in stream order.
pub trait Endianness: private::Endianness + 'static {
    /// The name of the byte order, for diagnostics.
    const NAME: &'static str;

    fn make_short(bytes: &[u8; 2]) -> i16;
    fn make_char(bytes: &[u8; 2]) -> u16;
    fn make_int(bytes: &[u8; 4]) -> i32;
    fn make_long(bytes: &[u8; 8]) -> i64;

    fn break_short_into(value: i16, dest: &mut [u8], offset: usize) -> Result<(), BoundsError>;
    fn break_char_into(value: u16, dest: &mut [u8], offset: usize) -> Result<(), BoundsError>;
    fn break_int_into(value: i32, dest: &mut [u8], offset: usize) -> Result<(), BoundsError>;
    fn break_long_into(value: i64, dest: &mut [u8], offset: usize) -> Result<(), BoundsError>;
}

/// Selector type for little-endian streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LittleEndian;

/// Selector type for big-endian streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigEndian;

/// Alias for [`BigEndian`]
pub type BE = BigEndian;

/// Alias for [`LittleEndian`]
pub type LE = LittleEndian;

impl private::Endianness for LittleEndian {}
impl private::Endianness for BigEndian {}

// In a little-endian stream the byte arriving last is the most significant
// one, so assembly reads the stream bytes backwards.
impl Endianness for LittleEndian {
    const NAME: &'static str = "little";

    #[inline(always)]
    fn make_short(&[b0, b1]: &[u8; 2]) -> i16 {
        bits::make_short(b1, b0)
    }

    #[inline(always)]
    fn make_char(&[b0, b1]: &[u8; 2]) -> u16 {
        bits::make_char(b1, b0)
    }

    #[inline(always)]
    fn make_int(&[b0, b1, b2, b3]: &[u8; 4]) -> i32 {
        bits::make_int(b3, b2, b1, b0)
    }

    #[inline(always)]
    fn make_long(&[b0, b1, b2, b3, b4, b5, b6, b7]: &[u8; 8]) -> i64 {
        bits::make_long(b7, b6, b5, b4, b3, b2, b1, b0)
    }

    #[inline(always)]
    fn break_short_into(value: i16, dest: &mut [u8], offset: usize) -> Result<(), BoundsError> {
        bits::break_short_le_into(value, dest, offset)
    }

    #[inline(always)]
    fn break_char_into(value: u16, dest: &mut [u8], offset: usize) -> Result<(), BoundsError> {
        bits::break_char_le_into(value, dest, offset)
    }

    #[inline(always)]
    fn break_int_into(value: i32, dest: &mut [u8], offset: usize) -> Result<(), BoundsError> {
        bits::break_int_le_into(value, dest, offset)
    }

    #[inline(always)]
    fn break_long_into(value: i64, dest: &mut [u8], offset: usize) -> Result<(), BoundsError> {
        bits::break_long_le_into(value, dest, offset)
    }
}

impl Endianness for BigEndian {
    const NAME: &'static str = "big";

    #[inline(always)]
    fn make_short(&[b0, b1]: &[u8; 2]) -> i16 {
        bits::make_short(b0, b1)
    }

    #[inline(always)]
    fn make_char(&[b0, b1]: &[u8; 2]) -> u16 {
        bits::make_char(b0, b1)
    }

    #[inline(always)]
    fn make_int(&[b0, b1, b2, b3]: &[u8; 4]) -> i32 {
        bits::make_int(b0, b1, b2, b3)
    }

    #[inline(always)]
    fn make_long(&[b0, b1, b2, b3, b4, b5, b6, b7]: &[u8; 8]) -> i64 {
        bits::make_long(b0, b1, b2, b3, b4, b5, b6, b7)
    }

    #[inline(always)]
    fn break_short_into(value: i16, dest: &mut [u8], offset: usize) -> Result<(), BoundsError> {
        bits::break_short_into(value, dest, offset)
    }

    #[inline(always)]
    fn break_char_into(value: u16, dest: &mut [u8], offset: usize) -> Result<(), BoundsError> {
        bits::break_char_into(value, dest, offset)
    }

    #[inline(always)]
    fn break_int_into(value: i32, dest: &mut [u8], offset: usize) -> Result<(), BoundsError> {
        bits::break_int_into(value, dest, offset)
    }

    #[inline(always)]
    fn break_long_into(value: i64, dest: &mut [u8], offset: usize) -> Result<(), BoundsError> {
        bits::break_long_into(value, dest, offset)
    }
}
