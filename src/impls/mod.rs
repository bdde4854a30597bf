/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of byte sources and sinks, and of typed data streams.

If you need to read or write typed values from a file or any backend
implementing [`std::io::Read`] or [`std::io::Write`] you just need to wrap it
in a [`ByteAdapter`].

If instead you want to read or write directly from memory, you can use
[`MemByteReader`] and [`MemByteWriterVec`]. [`ConstantReader`] and
[`RandomReader`] are endless sources, and [`NullWriter`] is a sink that
discards everything but keeps count of what it receives.

Once you have a way to access bytes, you can use [`DataReader`] and
[`DataWriter`] to read or write typed values. Both have a statically
selectable endianness; the type aliases [`LittleEndianReader`],
[`LittleEndianWriter`], [`BigEndianReader`], and [`BigEndianWriter`] fix it.

*/

mod scratch;

mod data_reader;
pub use data_reader::*;

mod data_writer;
pub use data_writer::*;

mod mem_byte_reader;
pub use mem_byte_reader::*;

mod mem_byte_writer;
pub use mem_byte_writer::*;

mod constant_reader;
pub use constant_reader::*;

mod null_writer;
pub use null_writer::*;

#[cfg(feature = "std")]
mod byte_adapter;
#[cfg(feature = "std")]
pub use byte_adapter::*;

#[cfg(feature = "random")]
mod random_reader;
#[cfg(feature = "random")]
pub use random_reader::*;
