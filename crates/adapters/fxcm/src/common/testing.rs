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

//! Stub collaborators and fixture functions for testing the subscription machinery.

#![allow(clippy::missing_panics_doc)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use ahash::AHashSet;
use chrono_tz::Tz;
use rstest::fixture;

use super::{
    enums::FxcmAssetClass,
    instrument::{FxcmSymbol, Instrument, InstrumentId},
    market_hours::{MarketHoursProvider, StaticMarketHours},
    symbology::{FxcmSymbolMapper, InstrumentResolver},
};
use crate::subscription::{gateway::GatewayChannel, request::MarketDataRequest};

// ---- Instruments ----

#[fixture]
pub fn eurusd() -> Instrument {
    Instrument::new(InstrumentId::from("EURUSD"), FxcmAssetClass::Forex, "EURUSD")
}

#[fixture]
pub fn gbpusd() -> Instrument {
    Instrument::new(InstrumentId::from("GBPUSD"), FxcmAssetClass::Forex, "GBPUSD")
}

#[fixture]
pub fn usdjpy() -> Instrument {
    Instrument::new(InstrumentId::from("USDJPY"), FxcmAssetClass::Forex, "USDJPY")
}

#[fixture]
pub fn spx500() -> Instrument {
    Instrument::new(InstrumentId::from("SPX500USD"), FxcmAssetClass::Cfd, "SPX500USD")
}

#[fixture]
pub fn jp225() -> Instrument {
    Instrument::new(InstrumentId::from("JP225JPY"), FxcmAssetClass::Cfd, "JP225JPY")
}

/// An equity, which FXCM never streams.
#[fixture]
pub fn aapl() -> Instrument {
    Instrument::new(InstrumentId::from("AAPL"), FxcmAssetClass::Equity, "AAPL")
}

/// A universe placeholder that looks like an FX pair.
#[fixture]
pub fn forex_universe() -> Instrument {
    Instrument::new(
        InstrumentId::from("FXCM-UNIVERSE-FOREX"),
        FxcmAssetClass::Forex,
        "FXCM-UNIVERSE-FOREX",
    )
}

/// An FX pair with no FXCM mapping.
#[fixture]
pub fn unmapped_forex() -> Instrument {
    Instrument::new(InstrumentId::from("USDRUB"), FxcmAssetClass::Forex, "USDRUB")
}

// ---- Collaborators ----

/// A resolver backed by [`FxcmSymbolMapper`] which can be switched into an unavailable state.
#[derive(Debug, Default)]
pub struct StubResolver {
    mapper: FxcmSymbolMapper,
    unavailable: AtomicBool,
}

impl StubResolver {
    pub fn set_unavailable(&self, value: bool) {
        self.unavailable.store(value, Ordering::SeqCst);
    }
}

impl InstrumentResolver for StubResolver {
    fn resolve(&self, instrument: &Instrument) -> anyhow::Result<Option<FxcmSymbol>> {
        anyhow::ensure!(
            !self.unavailable.load(Ordering::SeqCst),
            "symbol mapping service unavailable"
        );
        self.mapper.resolve(instrument)
    }
}

/// A market hours database which counts lookups and can fail for chosen instruments.
#[derive(Debug, Default)]
pub struct StubMarketHours {
    inner: StaticMarketHours,
    lookups: AtomicUsize,
    failing: Mutex<AHashSet<InstrumentId>>,
}

impl StubMarketHours {
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn fail_for(&self, instrument_id: InstrumentId) {
        self.failing.lock().unwrap().insert(instrument_id);
    }
}

impl MarketHoursProvider for StubMarketHours {
    fn exchange_time_zone(
        &self,
        market: &str,
        instrument_id: &InstrumentId,
        asset_class: FxcmAssetClass,
    ) -> anyhow::Result<Tz> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        anyhow::ensure!(
            !self.failing.lock().unwrap().contains(instrument_id),
            "market hours database unavailable"
        );
        self.inner
            .exchange_time_zone(market, instrument_id, asset_class)
    }
}

/// A gateway channel which records every request it is asked to send.
///
/// Clones share the same record, so a handle can be kept after the channel is moved.
#[derive(Clone, Debug, Default)]
pub struct RecordingGateway {
    pub sent: Arc<Mutex<Vec<MarketDataRequest>>>,
    pub fail_sends: Arc<AtomicBool>,
}

impl RecordingGateway {
    #[must_use]
    pub fn requests(&self) -> Vec<MarketDataRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl GatewayChannel for RecordingGateway {
    fn send(&mut self, request: &MarketDataRequest) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.fail_sends.load(Ordering::SeqCst),
            "gateway connection lost"
        );
        self.sent.lock().unwrap().push(request.clone());
        Ok(())
    }
}
