/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fuzzing harnesses, shared by the `cargo fuzz` targets and by the tests
//! replaying their corpora.

pub mod data_stream;
pub mod mem_byte_reader;
