/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Assembly and disassembly of primitive values.
//!
//! All `make_*` functions take their bytes most significant first, that is, in
//! big-endian order. Every `break_*` function comes in three flavors: one
//! returning a fixed-size array, one (`_into`) writing into a caller-provided
//! buffer at a given offset after checking the range, and one (`_vec`)
//! allocating a new vector of `offset` zeros followed by the bytes of the
//! value. The `_le` variants lay out the same bytes in reverse order.
//!
//! A *char* is a UTF-16 code unit, represented as a [`u16`].
//!
//! Floating-point values are converted through [`f32::to_bits`],
//! [`f32::from_bits`], [`f64::to_bits`], and [`f64::from_bits`], which never
//! touch the bit pattern: NaN payloads and the sign of zero are preserved.

use alloc::vec::Vec;
use num_traits::PrimInt;

use super::bounds::{BoundsError, check_range};

/// Number of bytes used by a byte.
pub const BYTES_IN_BYTE: usize = 1;
/// Number of bytes used by a short.
pub const BYTES_IN_SHORT: usize = 2;
/// Number of bytes used by a char (a UTF-16 code unit).
pub const BYTES_IN_CHAR: usize = 2;
/// Number of bytes used by an int.
pub const BYTES_IN_INT: usize = 4;
/// Number of bytes used by a long.
pub const BYTES_IN_LONG: usize = 8;
/// Number of bytes used by a float.
pub const BYTES_IN_FLOAT: usize = 4;
/// Number of bytes used by a double.
pub const BYTES_IN_DOUBLE: usize = 8;

/// Rotates `value` to the left by `shift` bits.
///
/// The result is `(value << shift) | (value >>> (width - shift))`, where
/// `>>>` is a logical shift. `shift` must be smaller than the width of `T`;
/// larger values are reduced modulo the width, unless the `checks` feature is
/// enabled, in which case this function panics.
///
/// # Examples
/// ```
/// use le_datastream::codec::rotate_left;
///
/// assert_eq!(rotate_left(0xaabbccdd_u32 as i32, 8), 0xbbccddaa_u32 as i32);
/// ```
#[inline]
pub fn rotate_left<T: PrimInt>(value: T, shift: u32) -> T {
    let width = T::zero().count_zeros();
    let shift = check_shift(shift, width);
    if shift == 0 {
        return value;
    }
    (value << shift as usize) | value.unsigned_shr(width - shift)
}

/// Rotates `value` to the right by `shift` bits.
///
/// The result is `(value >>> shift) | (value << (width - shift))`, where
/// `>>>` is a logical shift. The same constraints of [`rotate_left`] apply to
/// `shift`.
#[inline]
pub fn rotate_right<T: PrimInt>(value: T, shift: u32) -> T {
    let width = T::zero().count_zeros();
    let shift = check_shift(shift, width);
    if shift == 0 {
        return value;
    }
    value.unsigned_shr(shift) | (value << (width - shift) as usize)
}

#[inline(always)]
fn check_shift(shift: u32, width: u32) -> u32 {
    #[cfg(feature = "checks")]
    assert!(
        shift < width,
        "Rotation distance {} is not smaller than the width {}",
        shift,
        width
    );
    shift & (width - 1)
}

/// Returns the value of the byte `b` interpreted as unsigned.
///
/// The result is always non-negative.
#[inline(always)]
pub const fn unsigned_byte(b: i8) -> i16 {
    (b as i16) & 0xff
}

/// Returns the value of the short `s` interpreted as unsigned.
///
/// The result is always non-negative.
#[inline(always)]
pub const fn unsigned_short(s: i16) -> i32 {
    (s as i32) & 0xffff
}

/// Returns the value of the int `i` interpreted as unsigned.
///
/// The result is always non-negative.
#[inline(always)]
pub const fn unsigned_int(i: i32) -> i64 {
    (i as i64) & 0xffff_ffff
}

/// Assembles a short from two bytes, most significant first.
#[inline]
pub const fn make_short(b1: u8, b2: u8) -> i16 {
    (((b1 as u16) << 8) | b2 as u16) as i16
}

/// Assembles a char from two bytes, most significant first.
#[inline]
pub const fn make_char(b1: u8, b2: u8) -> u16 {
    make_short(b1, b2) as u16
}

/// Assembles an int from four bytes, most significant first.
#[inline]
pub const fn make_int(b1: u8, b2: u8, b3: u8, b4: u8) -> i32 {
    (((b1 as u32) << 24) | ((b2 as u32) << 16) | ((b3 as u32) << 8) | b4 as u32) as i32
}

/// Assembles a long from eight bytes, most significant first.
///
/// # Examples
/// ```
/// use le_datastream::codec::make_long;
///
/// assert_eq!(
///     make_long(0x11, 0x33, 0x55, 0x77, 0x99, 0xbb, 0xdd, 0xff),
///     0x1133557799bbddff
/// );
/// ```
#[allow(clippy::too_many_arguments)]
#[inline]
pub const fn make_long(b1: u8, b2: u8, b3: u8, b4: u8, b5: u8, b6: u8, b7: u8, b8: u8) -> i64 {
    (((b1 as u64) << 56)
        | ((b2 as u64) << 48)
        | ((b3 as u64) << 40)
        | ((b4 as u64) << 32)
        | ((b5 as u64) << 24)
        | ((b6 as u64) << 16)
        | ((b7 as u64) << 8)
        | b8 as u64) as i64
}

/// Assembles a float from the four bytes of its bit pattern, most significant
/// first.
#[inline]
pub const fn make_float(b1: u8, b2: u8, b3: u8, b4: u8) -> f32 {
    f32::from_bits(make_int(b1, b2, b3, b4) as u32)
}

/// Assembles a double from the eight bytes of its bit pattern, most
/// significant first.
#[allow(clippy::too_many_arguments)]
#[inline]
pub const fn make_double(b1: u8, b2: u8, b3: u8, b4: u8, b5: u8, b6: u8, b7: u8, b8: u8) -> f64 {
    f64::from_bits(make_long(b1, b2, b3, b4, b5, b6, b7, b8) as u64)
}

/// Breaks a short into its bytes, most significant first.
#[inline]
pub const fn break_short(s: i16) -> [u8; BYTES_IN_SHORT] {
    [(s >> 8) as u8, s as u8]
}

/// Breaks a short into its bytes, least significant first.
#[inline]
pub const fn break_short_le(s: i16) -> [u8; BYTES_IN_SHORT] {
    [s as u8, (s >> 8) as u8]
}

/// Breaks a char into its bytes, most significant first.
#[inline]
pub const fn break_char(c: u16) -> [u8; BYTES_IN_CHAR] {
    break_short(c as i16)
}

/// Breaks a char into its bytes, least significant first.
#[inline]
pub const fn break_char_le(c: u16) -> [u8; BYTES_IN_CHAR] {
    break_short_le(c as i16)
}

/// Breaks an int into its bytes, most significant first.
#[inline]
pub const fn break_int(i: i32) -> [u8; BYTES_IN_INT] {
    [(i >> 24) as u8, (i >> 16) as u8, (i >> 8) as u8, i as u8]
}

/// Breaks an int into its bytes, least significant first.
///
/// # Examples
/// ```
/// use le_datastream::codec::break_int_le;
///
/// assert_eq!(break_int_le(0x12345678), [0x78, 0x56, 0x34, 0x12]);
/// ```
#[inline]
pub const fn break_int_le(i: i32) -> [u8; BYTES_IN_INT] {
    [i as u8, (i >> 8) as u8, (i >> 16) as u8, (i >> 24) as u8]
}

/// Breaks a long into its bytes, most significant first.
#[inline]
pub const fn break_long(l: i64) -> [u8; BYTES_IN_LONG] {
    [
        (l >> 56) as u8,
        (l >> 48) as u8,
        (l >> 40) as u8,
        (l >> 32) as u8,
        (l >> 24) as u8,
        (l >> 16) as u8,
        (l >> 8) as u8,
        l as u8,
    ]
}

/// Breaks a long into its bytes, least significant first.
#[inline]
pub const fn break_long_le(l: i64) -> [u8; BYTES_IN_LONG] {
    [
        l as u8,
        (l >> 8) as u8,
        (l >> 16) as u8,
        (l >> 24) as u8,
        (l >> 32) as u8,
        (l >> 40) as u8,
        (l >> 48) as u8,
        (l >> 56) as u8,
    ]
}

/// Breaks the bit pattern of a float into its bytes, most significant first.
#[inline]
pub const fn break_float(f: f32) -> [u8; BYTES_IN_FLOAT] {
    break_int(f.to_bits() as i32)
}

/// Breaks the bit pattern of a float into its bytes, least significant first.
#[inline]
pub const fn break_float_le(f: f32) -> [u8; BYTES_IN_FLOAT] {
    break_int_le(f.to_bits() as i32)
}

/// Breaks the bit pattern of a double into its bytes, most significant first.
#[inline]
pub const fn break_double(d: f64) -> [u8; BYTES_IN_DOUBLE] {
    break_long(d.to_bits() as i64)
}

/// Breaks the bit pattern of a double into its bytes, least significant
/// first.
#[inline]
pub const fn break_double_le(d: f64) -> [u8; BYTES_IN_DOUBLE] {
    break_long_le(d.to_bits() as i64)
}

macro_rules! impl_break_into {
    ($($ty:ty, $n:expr, $break:ident, $into:ident, $vec:ident);* $(;)?) => {$(
        #[doc = concat!("Writes the bytes of [`", stringify!($break), "`] into `dest` starting at `offset`.")]
        ///
        /// The range `[offset, offset + width)` is checked before anything is
        /// written: on error `dest` is left untouched. Bytes outside the range
        /// are never modified.
        #[inline]
        pub fn $into(value: $ty, dest: &mut [u8], offset: usize) -> Result<(), BoundsError> {
            check_range(dest.len(), offset, $n)?;
            dest[offset..offset + $n].copy_from_slice(&$break(value));
            Ok(())
        }

        #[doc = concat!("Returns a new vector containing `offset` zeros followed by the bytes of [`", stringify!($break), "`].")]
        pub fn $vec(value: $ty, offset: usize) -> Vec<u8> {
            let mut bytes = alloc::vec![0; offset + $n];
            bytes[offset..].copy_from_slice(&$break(value));
            bytes
        }
    )*};
}

impl_break_into!(
    i16, BYTES_IN_SHORT, break_short, break_short_into, break_short_vec;
    i16, BYTES_IN_SHORT, break_short_le, break_short_le_into, break_short_le_vec;
    u16, BYTES_IN_CHAR, break_char, break_char_into, break_char_vec;
    u16, BYTES_IN_CHAR, break_char_le, break_char_le_into, break_char_le_vec;
    i32, BYTES_IN_INT, break_int, break_int_into, break_int_vec;
    i32, BYTES_IN_INT, break_int_le, break_int_le_into, break_int_le_vec;
    i64, BYTES_IN_LONG, break_long, break_long_into, break_long_vec;
    i64, BYTES_IN_LONG, break_long_le, break_long_le_into, break_long_le_vec;
    f32, BYTES_IN_FLOAT, break_float, break_float_into, break_float_vec;
    f32, BYTES_IN_FLOAT, break_float_le, break_float_le_into, break_float_le_vec;
    f64, BYTES_IN_DOUBLE, break_double, break_double_into, break_double_vec;
    f64, BYTES_IN_DOUBLE, break_double_le, break_double_le_into, break_double_le_vec;
);

macro_rules! impl_break_byte {
    ($($ty:ty, $break:ident => $($byte:ident: $i:literal),+);* $(;)?) => {$($(
        #[doc = concat!("Returns the byte at index ", stringify!($i), " of [`", stringify!($break), "`].")]
        #[inline]
        pub const fn $byte(value: $ty) -> u8 {
            $break(value)[$i]
        }
    )+)*};
}

impl_break_byte!(
    i16, break_short => break_short_1: 0, break_short_2: 1;
    u16, break_char => break_char_1: 0, break_char_2: 1;
    i32, break_int => break_int_1: 0, break_int_2: 1, break_int_3: 2, break_int_4: 3;
    i64, break_long => break_long_1: 0, break_long_2: 1, break_long_3: 2, break_long_4: 3,
        break_long_5: 4, break_long_6: 5, break_long_7: 6, break_long_8: 7;
    f32, break_float => break_float_1: 0, break_float_2: 1, break_float_3: 2, break_float_4: 3;
    f64, break_double => break_double_1: 0, break_double_2: 1, break_double_3: 2,
        break_double_4: 3, break_double_5: 4, break_double_6: 5, break_double_7: 6,
        break_double_8: 7;
);
