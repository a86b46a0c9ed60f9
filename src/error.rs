// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use thiserror::Error;

/// Reason given when a decrement is attempted on a zero counter.
pub const DECREMENT_BELOW_ZERO: &str = "cannot decrement below zero";

/// Reason given when an increment would exceed `u64::MAX`.
pub const INCREMENT_PAST_MAX: &str = "cannot increment past the maximum count";

/// Errors returned by counter operations.
///
/// A failed operation leaves the counter untouched and emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation is not allowed in the current state.
    #[error("Counter: {reason}")]
    InvalidOperation {
        /// Human-readable reason.
        reason: &'static str,
    },
}

impl Error {
    /// The error raised by `decrement` on a zero counter.
    #[must_use]
    pub const fn decrement_below_zero() -> Self {
        Self::InvalidOperation {
            reason: DECREMENT_BELOW_ZERO,
        }
    }

    /// The error raised by a checked increment on a counter at `u64::MAX`.
    #[must_use]
    pub const fn increment_past_max() -> Self {
        Self::InvalidOperation {
            reason: INCREMENT_PAST_MAX,
        }
    }

    /// Returns the reason carried by the error.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidOperation { reason } => reason,
        }
    }
}
