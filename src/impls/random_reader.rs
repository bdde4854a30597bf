/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use crate::utils::mutf8::{self, ModifiedUtf8Error};
use alloc::string::String;
use rand::RngCore;

/// An endless [`ByteRead`] returning bytes drawn from a random number
/// generator.
///
/// Reads always fill the whole buffer. Skipping `n` bytes draws and discards
/// `n` bytes, so the sequence of bytes returned does not depend on how it is
/// consumed.
///
/// # Examples
/// ```
/// use le_datastream::prelude::*;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut a = RandomReader::new(SmallRng::seed_from_u64(0));
/// let mut b = RandomReader::new(SmallRng::seed_from_u64(0));
/// let mut buf = [0u8; 4];
/// a.read_bytes(&mut buf).unwrap();
/// assert_eq!(b.skip(3).unwrap(), 3);
/// assert_eq!(b.read_byte().unwrap(), Some(buf[3]));
/// ```
#[derive(Debug, Clone)]
pub struct RandomReader<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandomReader<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomReader<R> {
    // One draw per byte, so that reads and skips consume the generator
    // in the same way.
    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        self.rng.next_u32() as u8
    }
}

impl<R: RngCore> ByteRead for RandomReader<R> {
    type Error = ModifiedUtf8Error;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(Some(self.next_byte()))
    }

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        for byte in buf.iter_mut() {
            *byte = self.next_byte();
        }
        Ok(buf.len())
    }

    fn skip(&mut self, n: u64) -> Result<u64, Self::Error> {
        for _ in 0..n {
            self.next_byte();
        }
        Ok(n)
    }

    /// Reads a string made of random bytes, which usually fails since random
    /// bytes are rarely valid modified UTF-8.
    fn read_utf(&mut self) -> Result<String, Self::Error> {
        mutf8::read_from(|buf| self.read_bytes(buf))
    }
}
