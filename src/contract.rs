// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! WASM entry points of the counter contract.
//!
//! Each export decodes its argument, runs the method on the static state,
//! and encodes the result through `abi::wrap_call`. A rejected call panics,
//! which makes the VM revert it.

use core::ptr::addr_of_mut;

use dusk_core::abi;

use crate::events::{CounterEvent, EventSink};
use crate::state::Counter;

/// Static contract state.
static mut STATE: Counter = Counter::new();

/// Forwards events to the host's event log.
struct AbiSink;

impl EventSink for AbiSink {
    fn emit(&mut self, event: CounterEvent) {
        match event {
            CounterEvent::Incremented(data) => abi::emit(event.topic(), data),
            CounterEvent::Decremented(data) => abi::emit(event.topic(), data),
        }
    }
}

#[no_mangle]
unsafe extern "C" fn get_count(arg_len: u32) -> u32 {
    abi::wrap_call(arg_len, |(): ()| (*addr_of_mut!(STATE)).get_count())
}

#[no_mangle]
unsafe extern "C" fn increment(arg_len: u32) -> u32 {
    abi::wrap_call(arg_len, |(): ()| {
        (*addr_of_mut!(STATE)).increment(&mut AbiSink);
    })
}

#[no_mangle]
unsafe extern "C" fn decrement(arg_len: u32) -> u32 {
    abi::wrap_call(arg_len, |(): ()| {
        if let Err(err) = (*addr_of_mut!(STATE)).decrement(&mut AbiSink) {
            panic!("{err}");
        }
    })
}
