// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Schema types for contract metadata.
//!
//! These describe the functions a contract exports and the events it emits,
//! so that off-chain tools can present and encode calls without reading the
//! contract source.

use serde::Serialize;

use crate::events::{Decremented, Incremented};

/// Schema for a contract function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Function {
    /// Function name.
    pub name: &'static str,
    /// Documentation string.
    pub doc: &'static str,
    /// Input type name (or "()" for no input).
    pub input: &'static str,
    /// Output type name (or "()" for no output).
    pub output: &'static str,
    /// Whether the function only reads state.
    pub read_only: bool,
}

/// Schema for a contract event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Event topic string.
    pub topic: &'static str,
    /// Event data type name.
    pub data: &'static str,
}

/// Complete schema for a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contract {
    /// Contract name.
    pub name: &'static str,
    /// List of contract functions.
    pub functions: &'static [Function],
    /// List of contract events.
    pub events: &'static [Event],
}

impl Contract {
    /// Returns an iterator over all functions.
    pub fn iter_functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.iter()
    }

    /// Returns an iterator over all events.
    pub fn iter_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Find a function by name.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Find an event by topic.
    #[must_use]
    pub fn get_event(&self, topic: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.topic == topic)
    }
}

/// Schema of the counter contract.
pub const CONTRACT_SCHEMA: Contract = Contract {
    name: "Counter",
    functions: &[
        Function {
            name: "get_count",
            doc: "Get the current count.",
            input: "()",
            output: "u64",
            read_only: true,
        },
        Function {
            name: "increment",
            doc: "Increment the counter by one.",
            input: "()",
            output: "()",
            read_only: false,
        },
        Function {
            name: "decrement",
            doc: "Decrement the counter by one. Fails when the counter is zero.",
            input: "()",
            output: "()",
            read_only: false,
        },
    ],
    events: &[
        Event {
            topic: Incremented::TOPIC,
            data: "Incremented",
        },
        Event {
            topic: Decremented::TOPIC,
            data: "Decremented",
        },
    ],
};
