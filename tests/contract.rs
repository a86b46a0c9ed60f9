// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Counter contract behavior, driven through a host session.

use dusk_counter::{
    Call, CallReceipt, Counter, CounterEvent, Decremented, Error, Incremented, Session,
    CONTRACT_SCHEMA,
};

fn get_count(session: &mut Session) -> u64 {
    session
        .call(Call::GetCount)
        .expect("get_count call should succeed")
        .data
        .expect("get_count should return data")
}

fn increment(session: &mut Session) -> CallReceipt {
    session
        .call(Call::Increment)
        .expect("increment call should succeed")
}

fn decrement(session: &mut Session) -> CallReceipt {
    session
        .call(Call::Decrement)
        .expect("decrement call should succeed")
}

#[test]
fn test_contract_deploys_with_zero_state() {
    let mut session = Session::new();
    assert_eq!(get_count(&mut session), 0);
}

#[test]
fn test_increment_by_one() {
    let mut session = Session::new();
    increment(&mut session);
    assert_eq!(get_count(&mut session), 1);
}

#[test]
fn test_increment_multiple_times() {
    let mut session = Session::new();
    increment(&mut session);
    increment(&mut session);
    increment(&mut session);
    assert_eq!(get_count(&mut session), 3);
}

#[test]
fn test_increment_emits_event() {
    let mut session = Session::new();
    let receipt = increment(&mut session);

    assert_eq!(receipt.data, None);
    assert_eq!(
        receipt.events,
        vec![CounterEvent::Incremented(Incremented { value: 1 })]
    );
}

#[test]
fn test_decrement_by_one() {
    let mut session = Session::new();
    increment(&mut session);
    increment(&mut session);
    let receipt = decrement(&mut session);

    assert_eq!(get_count(&mut session), 1);
    assert_eq!(
        receipt.events,
        vec![CounterEvent::Decremented(Decremented { value: 1 })]
    );
}

#[test]
fn test_decrement_emits_event_with_new_value() {
    let mut session = Session::new();
    increment(&mut session);
    let receipt = decrement(&mut session);

    assert_eq!(
        receipt.events,
        vec![CounterEvent::Decremented(Decremented { value: 0 })]
    );
}

#[test]
fn test_decrement_below_zero_fails() {
    let mut session = Session::new();

    let err = session
        .call(Call::Decrement)
        .expect_err("decrement on zero should fail");

    assert_eq!(err, Error::decrement_below_zero());
    assert_eq!(err.reason(), "cannot decrement below zero");
    assert_eq!(err.to_string(), "Counter: cannot decrement below zero");
    assert_eq!(get_count(&mut session), 0);
}

#[test]
fn test_failed_decrement_emits_nothing() {
    let mut counter = Counter::new();
    let mut events = Vec::new();

    assert!(counter.decrement(&mut events).is_err());
    assert!(events.is_empty());
    assert_eq!(counter.get_count(), 0);
}

#[test]
fn test_multiple_increments_and_decrements() {
    let mut session = Session::new();

    increment(&mut session);
    increment(&mut session);
    increment(&mut session);
    assert_eq!(get_count(&mut session), 3);

    decrement(&mut session);
    assert_eq!(get_count(&mut session), 2);

    increment(&mut session);
    assert_eq!(get_count(&mut session), 3);

    decrement(&mut session);
    decrement(&mut session);
    assert_eq!(get_count(&mut session), 1);
}

#[test]
fn test_get_count_is_read_only() {
    let mut session = Session::from_state(Counter::with_value(7));

    let first = session.call(Call::GetCount).expect("get_count should succeed");
    let second = session.call(Call::GetCount).expect("get_count should succeed");

    assert_eq!(first, second);
    assert_eq!(first.data, Some(7));
    assert!(first.events.is_empty());
    assert_eq!(session.state().get_count(), 7);
}

#[test]
fn test_session_resumes_from_state() {
    let mut session = Session::from_state(Counter::with_value(1));
    decrement(&mut session);

    let err = session
        .call(Call::Decrement)
        .expect_err("second decrement should fail");
    assert_eq!(err, Error::decrement_below_zero());
    assert_eq!(*session.state(), Counter::new());
}

#[test]
fn test_call_names_match_schema() {
    for call in Call::ALL {
        let function = CONTRACT_SCHEMA
            .get_function(call.name())
            .expect("every call should be in the schema");
        assert_eq!(function.read_only, call.is_read_only());
        assert_eq!(call.name().parse::<Call>(), Ok(call));
    }

    assert!("reset".parse::<Call>().is_err());
    assert_eq!(CONTRACT_SCHEMA.iter_functions().count(), Call::ALL.len());
}

#[test]
fn test_schema_lists_events() {
    let incremented = CONTRACT_SCHEMA
        .get_event(Incremented::TOPIC)
        .expect("incremented event should be in the schema");
    assert_eq!(incremented.data, "Incremented");

    let decremented = CONTRACT_SCHEMA
        .get_event("decremented")
        .expect("decremented event should be in the schema");
    assert_eq!(decremented.data, "Decremented");

    assert_eq!(CONTRACT_SCHEMA.iter_events().count(), 2);
    assert!(CONTRACT_SCHEMA.get_event("count_changed").is_none());
}

#[test]
fn test_receipt_json_shape() {
    let mut session = Session::new();
    let receipt = increment(&mut session);

    let json = serde_json::to_value(&receipt).expect("receipt should serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "data": null,
            "events": [{ "event": "Incremented", "value": 1 }],
        })
    );

    let event = receipt.events[0];
    assert_eq!(event.topic(), "incremented");
    assert_eq!(event.value(), 1);
    assert_eq!(event.to_string(), "Incremented(1)");
}

#[test]
fn test_increment_at_max_is_rejected() {
    let mut session = Session::from_state(Counter::with_value(u64::MAX));

    let err = session
        .call(Call::Increment)
        .expect_err("increment at u64::MAX should fail");

    assert_eq!(err, Error::increment_past_max());
    assert_eq!(
        err.to_string(),
        "Counter: cannot increment past the maximum count"
    );
    assert_eq!(session.state().get_count(), u64::MAX);

    decrement(&mut session);
    assert_eq!(get_count(&mut session), u64::MAX - 1);
}
