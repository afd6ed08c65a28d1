// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Property-based tests for subscription reconciliation.
//!
//! These tests drive the manager with random operation sequences and check it against a
//! simple model:
//! - Every request carries exactly the minimal delta, and nothing is sent for an empty delta
//! - The subscribed set always equals the model after each call
//! - Failed sends leave the subscribed set untouched

mod common;

use std::collections::BTreeSet;

use common::mocks::{ManagerFixture, instrument_universe};
use nautilus_fxcm::{FxcmSymbolMapper, Instrument, InstrumentId, SubscriptionRequestType};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Clone, Debug)]
enum Op {
    Subscribe(Vec<usize>),
    Unsubscribe(Vec<usize>),
    ResubscribeAll,
}

fn op_strategy(universe_len: usize) -> impl Strategy<Value = (Op, bool)> {
    let indices = prop::collection::vec(0..universe_len, 0..8);
    let op = prop_oneof![
        4 => indices.clone().prop_map(Op::Subscribe),
        3 => indices.prop_map(Op::Unsubscribe),
        1 => Just(Op::ResubscribeAll),
    ];
    (op, prop::bool::weighted(0.15))
}

/// The expected FXCM symbols for a request, first occurrence order, given the model state.
fn expected_delta(
    instruments: &[&Instrument],
    model: &BTreeSet<InstrumentId>,
    request_type: SubscriptionRequestType,
) -> Vec<String> {
    let mapper = FxcmSymbolMapper::new();
    let mut seen = BTreeSet::new();
    instruments
        .iter()
        .filter(|instrument| seen.insert(instrument.id))
        .filter(|instrument| match request_type {
            SubscriptionRequestType::Subscribe => !model.contains(&instrument.id),
            SubscriptionRequestType::Unsubscribe => model.contains(&instrument.id),
        })
        .filter(|instrument| {
            request_type == SubscriptionRequestType::Unsubscribe
                || (instrument.asset_class.is_supported()
                    && !instrument.label.to_ascii_uppercase().contains("-UNIVERSE-"))
        })
        .filter_map(|instrument| mapper.fxcm_symbol(instrument))
        .map(|symbol| symbol.to_string())
        .collect()
}

fn run_model(ops: &[(Op, bool)]) -> Result<(), TestCaseError> {
    let universe = instrument_universe();
    let fixture = ManagerFixture::default();
    let mut model: BTreeSet<InstrumentId> = BTreeSet::new();

    for (op, fail_send) in ops {
        fixture.gateway.set_failing(*fail_send);
        let sent_before = fixture.gateway.requests().len();

        let (result, expected, request_type) = match op {
            Op::Subscribe(indices) => {
                let batch: Vec<&Instrument> = indices.iter().map(|i| &universe[*i]).collect();
                let expected =
                    expected_delta(&batch, &model, SubscriptionRequestType::Subscribe);
                let result = fixture.manager.subscribe(batch.iter().copied());
                if result.is_ok() {
                    let mapper = FxcmSymbolMapper::new();
                    for instrument in &batch {
                        if expected.iter().any(|symbol| {
                            mapper
                                .fxcm_symbol(instrument)
                                .is_some_and(|s| s.as_str() == symbol)
                        }) {
                            model.insert(instrument.id);
                        }
                    }
                }
                (result.map(|()| expected.len()), expected, SubscriptionRequestType::Subscribe)
            }
            Op::Unsubscribe(indices) => {
                let batch: Vec<&Instrument> = indices.iter().map(|i| &universe[*i]).collect();
                let expected =
                    expected_delta(&batch, &model, SubscriptionRequestType::Unsubscribe);
                let result = fixture.manager.unsubscribe(batch.iter().copied());
                if result.is_ok() {
                    for instrument in &batch {
                        model.remove(&instrument.id);
                    }
                }
                (result.map(|()| expected.len()), expected, SubscriptionRequestType::Unsubscribe)
            }
            Op::ResubscribeAll => {
                let subscribed: Vec<&Instrument> = universe
                    .iter()
                    .filter(|instrument| model.contains(&instrument.id))
                    .collect();
                let mut expected = expected_delta(
                    &subscribed,
                    &BTreeSet::new(),
                    SubscriptionRequestType::Subscribe,
                );
                expected.sort();
                let result = fixture.manager.resubscribe_all();
                if let Ok(count) = result {
                    prop_assert_eq!(count, expected.len());
                }
                (result, expected, SubscriptionRequestType::Subscribe)
            }
        };

        let requests = fixture.gateway.requests();

        if expected.is_empty() {
            prop_assert!(result.is_ok());
            prop_assert_eq!(requests.len(), sent_before, "request sent for empty delta");
        } else if *fail_send {
            prop_assert!(result.is_err());
            prop_assert_eq!(requests.len(), sent_before);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(requests.len(), sent_before + 1);
            let request = &requests[sent_before];
            prop_assert_eq!(request.request_type, request_type);
            let mut symbols: Vec<String> =
                request.symbols.iter().map(ToString::to_string).collect();
            if matches!(op, Op::ResubscribeAll) {
                symbols.sort();
            }
            prop_assert_eq!(symbols, expected);
        }

        let actual: BTreeSet<InstrumentId> = fixture
            .manager
            .subscribed_instruments()
            .iter()
            .map(|instrument| instrument.id)
            .collect();
        prop_assert_eq!(&actual, &model);
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: The manager tracks the model exactly across arbitrary operation sequences.
    #[rstest]
    fn manager_matches_model(
        ops in prop::collection::vec(op_strategy(instrument_universe().len()), 1..40)
    ) {
        run_model(&ops)?;
    }

    /// Property: Repeating a subscribe never sends a second request.
    #[rstest]
    fn repeated_subscribe_is_idempotent(
        indices in prop::collection::vec(0..instrument_universe().len(), 1..12)
    ) {
        let universe = instrument_universe();
        let fixture = ManagerFixture::default();
        let batch: Vec<&Instrument> = indices.iter().map(|i| &universe[*i]).collect();

        fixture.manager.subscribe(batch.iter().copied()).unwrap();
        let sent = fixture.gateway.requests().len();
        prop_assert!(sent <= 1);

        fixture.manager.subscribe(batch.iter().copied()).unwrap();
        prop_assert_eq!(fixture.gateway.requests().len(), sent);
    }
}

#[rstest]
fn test_model_subscribe_then_fail_then_unsubscribe() {
    let ops = vec![
        (Op::Subscribe(vec![0, 1, 8, 9, 10]), false),
        (Op::Subscribe(vec![2, 0]), true),
        (Op::Unsubscribe(vec![1, 2]), false),
        (Op::ResubscribeAll, false),
        (Op::Unsubscribe(vec![0]), true),
    ];
    run_model(&ops).unwrap();
}

#[rstest]
fn test_placeholder_never_reaches_the_wire() {
    let universe = instrument_universe();
    let fixture = ManagerFixture::default();

    fixture.manager.subscribe(&universe).unwrap();
    fixture.manager.unsubscribe(&universe).unwrap();

    for request in fixture.gateway.requests() {
        assert!(
            request
                .symbols
                .iter()
                .all(|symbol| !symbol.as_str().contains("UNIVERSE"))
        );
    }
    assert_eq!(
        fixture
            .gateway
            .symbols_sent(SubscriptionRequestType::Unsubscribe)
            .len(),
        8
    );
}
