/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Pure byte-order conversions.

[`bits`] assembles primitive values from their bytes and breaks them apart,
in big-endian order (functions `make_*` and `break_*`) or in little-endian
order (functions `break_*_le`). Conversions of floating-point values always
go through the raw bit pattern, so they are exact for every value, NaN
payloads included.

[`bounds`] contains the range checks used when writing into caller-provided
buffers.

*/

pub mod bits;
pub use bits::*;

pub mod bounds;
pub use bounds::{BoundsError, check_range, fill};
