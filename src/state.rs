// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::error::Error;
use crate::events::{Decremented, EventSink, Incremented};

/// Counter contract state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    /// Current count value. Never negative by construction.
    value: u64,
}

impl Counter {
    /// Initialize a new counter with zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Restores a counter from a previously persisted value.
    #[must_use]
    pub const fn with_value(value: u64) -> Self {
        Self { value }
    }

    /// Get the current count.
    #[must_use]
    pub const fn get_count(&self) -> u64 {
        self.value
    }

    /// Increment the counter by one, emitting [`Incremented`].
    pub fn increment(&mut self, sink: &mut impl EventSink) {
        self.value += 1;
        sink.emit(Incremented { value: self.value }.into());
    }

    /// Increment the counter by one, failing instead of overflowing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if the counter is at `u64::MAX`.
    /// The counter is left unchanged and no event is emitted.
    pub fn try_increment(&mut self, sink: &mut impl EventSink) -> Result<(), Error> {
        if self.value == u64::MAX {
            return Err(Error::increment_past_max());
        }
        self.increment(sink);
        Ok(())
    }

    /// Decrement the counter by one, emitting [`Decremented`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if the counter is zero. The
    /// counter is left unchanged and no event is emitted.
    pub fn decrement(&mut self, sink: &mut impl EventSink) -> Result<(), Error> {
        if self.value == 0 {
            return Err(Error::decrement_below_zero());
        }
        self.value -= 1;
        sink.emit(Decremented { value: self.value }.into());
        Ok(())
    }
}
