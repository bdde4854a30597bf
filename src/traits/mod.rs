/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits

*/

mod byte_stream;
pub use byte_stream::*;

mod data_stream;
pub use data_stream::*;

mod endianness;
pub use endianness::*;
