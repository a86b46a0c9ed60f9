// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! A non-negative counter contract for Dusk.
//!
//! The counter starts at zero, increments by one, and decrements by one but
//! never below zero. Every successful mutation emits one event carrying the
//! new value.
//!
//! The same state machine runs on-chain (see the `contract` feature, which
//! exports the WASM entry points) and on the host through [`Session`], which
//! the tests and the `counter-forge` tool use as a local instance.

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unused_must_use)]
#![deny(clippy::pedantic)]
#![warn(missing_debug_implementations, unreachable_pub, rustdoc::all)]

extern crate alloc;

// The host `cdylib` needs std's panic handler; on WASM `dusk-core` provides it.
#[cfg(not(target_family = "wasm"))]
extern crate std;

/// Contract error type.
pub mod error;
/// Events emitted by the counter.
pub mod events;
/// Contract schema types and the counter's schema.
pub mod schema;
/// Host-side execution of contract calls.
pub mod session;

mod state;

#[cfg(all(target_family = "wasm", feature = "contract"))]
mod contract;

pub use error::Error;
pub use events::{CounterEvent, Decremented, EventSink, Incremented};
pub use schema::CONTRACT_SCHEMA;
pub use session::{Call, CallReceipt, Session};
pub use state::Counter;
