// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use alloc::vec::Vec;
use core::fmt;

use bytecheck::CheckBytes;
use rkyv::{Archive, Deserialize, Serialize};

/// Event emitted after a successful increment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Archive,
    Serialize,
    Deserialize,
    serde::Serialize,
    serde::Deserialize,
)]
#[archive_attr(derive(CheckBytes))]
pub struct Incremented {
    /// Counter value after the increment.
    pub value: u64,
}

impl Incremented {
    /// Event topic.
    pub const TOPIC: &'static str = "incremented";
}

/// Event emitted after a successful decrement.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Archive,
    Serialize,
    Deserialize,
    serde::Serialize,
    serde::Deserialize,
)]
#[archive_attr(derive(CheckBytes))]
pub struct Decremented {
    /// Counter value after the decrement.
    pub value: u64,
}

impl Decremented {
    /// Event topic.
    pub const TOPIC: &'static str = "decremented";
}

/// Any event the counter emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event")]
pub enum CounterEvent {
    /// See [`Incremented`].
    Incremented(Incremented),
    /// See [`Decremented`].
    Decremented(Decremented),
}

impl CounterEvent {
    /// Topic under which the event is emitted.
    #[must_use]
    pub const fn topic(&self) -> &'static str {
        match self {
            Self::Incremented(_) => Incremented::TOPIC,
            Self::Decremented(_) => Decremented::TOPIC,
        }
    }

    /// The counter value carried by the event.
    #[must_use]
    pub const fn value(&self) -> u64 {
        match self {
            Self::Incremented(e) => e.value,
            Self::Decremented(e) => e.value,
        }
    }
}

impl From<Incremented> for CounterEvent {
    fn from(event: Incremented) -> Self {
        Self::Incremented(event)
    }
}

impl From<Decremented> for CounterEvent {
    fn from(event: Decremented) -> Self {
        Self::Decremented(event)
    }
}

impl fmt::Display for CounterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incremented(e) => write!(f, "Incremented({})", e.value),
            Self::Decremented(e) => write!(f, "Decremented({})", e.value),
        }
    }
}

/// Receives the events emitted by counter operations.
///
/// On-chain the sink forwards to the host's event log. On the host any
/// `Vec<CounterEvent>` collects them in emission order.
pub trait EventSink {
    /// Records one event.
    fn emit(&mut self, event: CounterEvent);
}

impl EventSink for Vec<CounterEvent> {
    fn emit(&mut self, event: CounterEvent) {
        self.push(event);
    }
}
