/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// The error returned when a range does not fit in a buffer.
///
/// `offset` and `count` describe the requested range `[offset, offset +
/// count)`, and `len` is the length of the buffer it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("range [{offset}, {offset} + {count}) is not within a buffer of length {len}")]
pub struct BoundsError {
    pub len: usize,
    pub offset: usize,
    pub count: usize,
}

/// Checks that the range `[offset, offset + count)` lies within a buffer of
/// length `len`.
///
/// Empty ranges are accepted at any offset up to `len` included, matching
/// slice indexing.
#[inline]
pub fn check_range(len: usize, offset: usize, count: usize) -> Result<(), BoundsError> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(BoundsError { len, offset, count }),
    }
}

/// Sets the `count` elements of `array` starting at `offset` to `value`.
///
/// The range is validated before anything is written, so on error the array
/// is left untouched.
pub fn fill<T: Copy>(
    array: &mut [T],
    value: T,
    offset: usize,
    count: usize,
) -> Result<(), BoundsError> {
    check_range(array.len(), offset, count)?;
    array[offset..offset + count].fill(value);
    Ok(())
}
