// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Host-side execution of counter calls.
//!
//! A [`Session`] owns one contract instance and executes calls against it
//! one at a time, returning a [`CallReceipt`] for each. A call either
//! commits fully or fails with no effect on the instance.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::events::CounterEvent;
use crate::state::Counter;

/// A call to one of the counter's exported functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    /// `get_count`
    GetCount,
    /// `increment`
    Increment,
    /// `decrement`
    Decrement,
}

impl Call {
    /// All callable functions, in schema order.
    pub const ALL: [Call; 3] = [Call::GetCount, Call::Increment, Call::Decrement];

    /// Exported function name, as listed in the contract schema.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetCount => "get_count",
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }

    /// Whether the call leaves the state untouched.
    #[must_use]
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::GetCount)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a [`Call`] from an unknown function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFunction;

impl fmt::Display for UnknownFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown contract function")
    }
}

impl core::error::Error for UnknownFunction {}

impl FromStr for Call {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|call| call.name() == s)
            .ok_or(UnknownFunction)
    }
}

/// The outcome of a successful call.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CallReceipt {
    /// Returned data. `Some` for `get_count`, `None` for calls returning `()`.
    pub data: Option<u64>,
    /// Events emitted by the call, in order.
    pub events: Vec<CounterEvent>,
}

/// An executor owning a single counter instance.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: Counter,
}

impl Session {
    /// Instantiates a fresh counter with value zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Counter::new(),
        }
    }

    /// Resumes execution on an existing instance.
    #[must_use]
    pub const fn from_state(state: Counter) -> Self {
        Self { state }
    }

    /// Borrows the instance state.
    #[must_use]
    pub const fn state(&self) -> &Counter {
        &self.state
    }

    /// Executes one call.
    ///
    /// The call runs against a scratch copy of the state, which replaces
    /// the instance only when the call succeeds.
    ///
    /// # Errors
    ///
    /// Returns the contract's [`Error`] when the call is rejected. The
    /// instance is unchanged in that case.
    pub fn call(&mut self, call: Call) -> Result<CallReceipt, Error> {
        let mut next = self.state;
        let mut events = Vec::new();

        let data = match call {
            Call::GetCount => Some(next.get_count()),
            Call::Increment => {
                next.try_increment(&mut events)?;
                None
            }
            Call::Decrement => {
                next.decrement(&mut events)?;
                None
            }
        };

        self.state = next;
        Ok(CallReceipt { data, events })
    }
}
