/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::ops::{Deref, DerefMut};

/// Size of the scratch buffer of readers and writers: enough for a long.
pub(crate) const SCRATCH_LEN: usize = crate::codec::bits::BYTES_IN_LONG;

/// Exclusive access to a scratch buffer, which is zeroed when the guard is
/// dropped, whether the operation using it succeeded, failed, or panicked.
pub(crate) struct ScratchGuard<'a>(&'a mut [u8; SCRATCH_LEN]);

impl<'a> ScratchGuard<'a> {
    #[inline(always)]
    pub(crate) fn new(scratch: &'a mut [u8; SCRATCH_LEN]) -> Self {
        Self(scratch)
    }
}

impl Deref for ScratchGuard<'_> {
    type Target = [u8; SCRATCH_LEN];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl DerefMut for ScratchGuard<'_> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0
    }
}

impl Drop for ScratchGuard<'_> {
    #[inline(always)]
    fn drop(&mut self) {
        self.0.fill(0);
    }
}
