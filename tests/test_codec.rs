/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use le_datastream::codec::bits::*;
use le_datastream::codec::{BoundsError, check_range, fill};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn reversed<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    bytes.reverse();
    bytes
}

#[test]
fn test_cross_encoding() {
    let mut r = SmallRng::seed_from_u64(0);
    for _ in 0..10_000 {
        let l: i64 = r.gen_range(i64::MIN..=i64::MAX);
        assert_eq!(reversed(break_short(l as i16)), break_short_le(l as i16));
        assert_eq!(reversed(break_char(l as u16)), break_char_le(l as u16));
        assert_eq!(reversed(break_int(l as i32)), break_int_le(l as i32));
        assert_eq!(reversed(break_long(l)), break_long_le(l));

        let f = f32::from_bits(l as u32);
        let d = f64::from_bits(l as u64);
        assert_eq!(reversed(break_float(f)), break_float_le(f));
        assert_eq!(reversed(break_double(d)), break_double_le(d));
        assert_eq!(break_float(f), break_int(l as i32));
        assert_eq!(break_double(d), break_long(l));
    }
}

#[test]
fn test_make_break() {
    let mut r = SmallRng::seed_from_u64(1);
    for _ in 0..10_000 {
        let l: i64 = r.gen_range(i64::MIN..=i64::MAX);

        let [b1, b2] = break_short(l as i16);
        assert_eq!(make_short(b1, b2), l as i16);
        let [b1, b2] = break_char(l as u16);
        assert_eq!(make_char(b1, b2), l as u16);
        let [b1, b2, b3, b4] = break_int(l as i32);
        assert_eq!(make_int(b1, b2, b3, b4), l as i32);
        assert_eq!(make_float(b1, b2, b3, b4).to_bits(), l as u32);
        let [b1, b2, b3, b4, b5, b6, b7, b8] = break_long(l);
        assert_eq!(make_long(b1, b2, b3, b4, b5, b6, b7, b8), l);
        assert_eq!(
            make_double(b1, b2, b3, b4, b5, b6, b7, b8).to_bits(),
            l as u64
        );
    }
}

#[test]
fn test_into_and_vec_agree() -> Result<(), BoundsError> {
    let mut r = SmallRng::seed_from_u64(2);
    for _ in 0..1000 {
        let l: i64 = r.gen_range(i64::MIN..=i64::MAX);
        let offset = r.gen_range(0..8);
        let mut buf = vec![0u8; offset + 8];

        break_long_le_into(l, &mut buf, offset)?;
        assert_eq!(buf, break_long_le_vec(l, offset));
        assert_eq!(buf[offset..], break_long_le(l));

        buf.fill(0);
        break_int_into(l as i32, &mut buf, offset)?;
        assert_eq!(buf[..offset + 4], break_int_vec(l as i32, offset)[..]);
        assert_eq!(buf[offset + 4..], [0, 0, 0, 0]);
    }
    Ok(())
}

#[test]
fn test_bounds() {
    let mut buf = [0xffu8; 6];
    assert_eq!(
        break_long_into(0, &mut buf, 0),
        Err(BoundsError {
            len: 6,
            offset: 0,
            count: 8
        })
    );
    assert!(break_int_le_into(0, &mut buf, 3).is_err());
    assert_eq!(buf, [0xff; 6]);
    assert!(break_short_le_into(0, &mut buf, 4).is_ok());
    assert_eq!(buf, [0xff, 0xff, 0xff, 0xff, 0, 0]);

    assert!(check_range(10, 10, 0).is_ok());
    assert!(check_range(10, usize::MAX, 2).is_err());
    let mut values = [1u32; 5];
    fill(&mut values, 7, 1, 3).unwrap();
    assert_eq!(values, [1, 7, 7, 7, 1]);
    assert!(fill(&mut values, 0, 3, 3).is_err());
    assert_eq!(values, [1, 7, 7, 7, 1]);
}

#[test]
fn test_rotate() {
    let mut r = SmallRng::seed_from_u64(3);
    for _ in 0..1000 {
        let l: u64 = r.gen_range(0..=u64::MAX);
        let shift = r.gen_range(0..64);
        assert_eq!(rotate_left(l, shift), l.rotate_left(shift));
        assert_eq!(rotate_right(l, shift), l.rotate_right(shift));
        assert_eq!(rotate_left(l as i32, shift % 32), (l as i32).rotate_left(shift % 32));
        assert_eq!(rotate_right(rotate_left(l, shift), shift), l);
    }
}
