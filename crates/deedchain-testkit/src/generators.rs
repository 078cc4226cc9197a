//! Proptest strategies for deedchain types.

use proptest::prelude::*;

use deedchain_core::{Action, Chain, Record};

/// Strategy over both actions.
pub fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Register), Just(Action::Transfer)]
}

/// Strategy over well-formed records with short printable fields.
pub fn record_strategy() -> impl Strategy<Value = Record> {
    (
        "[A-Z][0-9]{1,3}",
        "[A-Za-z]{1,12}",
        action_strategy(),
        proptest::option::of("[ -~]{0,24}"),
    )
        .prop_map(|(property_id, owner, action, note)| match action {
            Action::Register => Record::register(property_id, owner, note),
            Action::Transfer => Record::transfer(property_id, owner, note),
        })
}

/// Strategy over chains built solely via `append`, up to `max_len`
/// blocks, all signed under [`PROP_SECRET`].
pub fn chain_strategy(max_len: usize) -> impl Strategy<Value = Chain> {
    proptest::collection::vec(record_strategy(), 0..=max_len).prop_map(|records| {
        let mut chain = Chain::new();
        for record in records {
            chain.append(record, PROP_SECRET);
        }
        chain
    })
}

/// The secret used by [`chain_strategy`].
pub const PROP_SECRET: &str = "prop-secret";
