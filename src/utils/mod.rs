/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Helpers.

[`DbgDataReader`] and [`DbgDataWriter`] log, through the [`log`] facade, all
operations performed by a [`DataRead`](crate::traits::DataRead) or
[`DataWrite`](crate::traits::DataWrite), respectively.

[`mutf8`] implements the length-prefixed modified UTF-8 text format used by
the byte sources and sinks of this crate.

*/

mod dbg;
pub use dbg::*;

pub mod mutf8;
pub use mutf8::ModifiedUtf8Error;
