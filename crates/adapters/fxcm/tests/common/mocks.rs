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

//! Mock collaborators for the subscription manager integration tests.

#![allow(dead_code)]

use std::{
    sync::{
        Arc, Condvar, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use chrono_tz::Tz;
use nautilus_fxcm::{
    FxcmAssetClass, FxcmDataClientConfig, FxcmSubscriptionManager, FxcmSymbolMapper,
    GatewayChannel, Instrument, InstrumentId, MarketDataRequest, MarketHoursProvider,
    StaticMarketHours, SubscriptionRequestType,
};

/// A gateway channel which records every accepted request and can be told to fail or stall.
#[derive(Clone, Debug, Default)]
pub struct MockGateway {
    pub recorder: Arc<Mutex<Vec<MarketDataRequest>>>,
    pub fail_sends: Arc<AtomicBool>,
    pub send_delay: Option<Duration>,
}

impl MockGateway {
    /// Creates a new [`MockGateway`] which sleeps for `delay` inside every send.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            send_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, value: bool) {
        self.fail_sends.store(value, Ordering::SeqCst);
    }

    #[must_use]
    pub fn requests(&self) -> Vec<MarketDataRequest> {
        self.recorder.lock().unwrap().clone()
    }

    /// Returns the symbols of every recorded request of the given type, flattened.
    #[must_use]
    pub fn symbols_sent(&self, request_type: SubscriptionRequestType) -> Vec<String> {
        self.requests()
            .iter()
            .filter(|request| request.request_type == request_type)
            .flat_map(|request| request.symbols.iter().map(ToString::to_string))
            .collect()
    }
}

impl GatewayChannel for MockGateway {
    fn send(&mut self, request: &MarketDataRequest) -> anyhow::Result<()> {
        if let Some(delay) = self.send_delay {
            thread::sleep(delay);
        }
        anyhow::ensure!(
            !self.fail_sends.load(Ordering::SeqCst),
            "gateway connection lost"
        );
        self.recorder.lock().unwrap().push(request.clone());
        Ok(())
    }
}

/// A gate which holds lookups until opened, recording how many callers are waiting.
#[derive(Debug, Default)]
pub struct LookupGate {
    waiting: AtomicUsize,
    open: Mutex<bool>,
    cvar: Condvar,
}

impl LookupGate {
    fn pass(&self) {
        self.waiting.fetch_add(1, Ordering::SeqCst);
        let mut open = self.open.lock().unwrap();
        while !*open {
            open = self.cvar.wait(open).unwrap();
        }
    }

    pub fn open(&self) {
        *self.open.lock().unwrap() = true;
        self.cvar.notify_all();
    }

    /// Spins until at least `count` callers are held at the gate.
    pub fn wait_for_waiters(&self, count: usize) {
        while self.waiting.load(Ordering::SeqCst) < count {
            thread::yield_now();
        }
    }
}

/// A market hours provider which counts lookups and can stall or gate each one.
#[derive(Debug, Default)]
pub struct MockMarketHours {
    inner: StaticMarketHours,
    pub lookups: AtomicUsize,
    pub lookup_delay: Option<Duration>,
    pub gate: Option<Arc<LookupGate>>,
}

impl MockMarketHours {
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            lookup_delay: Some(delay),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_gate(gate: Arc<LookupGate>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl MarketHoursProvider for MockMarketHours {
    fn exchange_time_zone(
        &self,
        market: &str,
        instrument_id: &InstrumentId,
        asset_class: FxcmAssetClass,
    ) -> anyhow::Result<Tz> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.lookup_delay {
            thread::sleep(delay);
        }
        if let Some(gate) = &self.gate {
            gate.pass();
        }
        self.inner
            .exchange_time_zone(market, instrument_id, asset_class)
    }
}

/// A manager wired to mocks, with handles kept for assertions.
#[derive(Debug)]
pub struct ManagerFixture {
    pub manager: FxcmSubscriptionManager,
    pub gateway: MockGateway,
    pub market_hours: Arc<MockMarketHours>,
}

impl ManagerFixture {
    #[must_use]
    pub fn new(gateway: MockGateway, market_hours: MockMarketHours) -> Self {
        let market_hours = Arc::new(market_hours);
        let manager = FxcmSubscriptionManager::new(
            FxcmDataClientConfig::default(),
            Arc::new(FxcmSymbolMapper::new()),
            market_hours.clone(),
            Arc::new(Mutex::new(gateway.clone())),
        );
        Self {
            manager,
            gateway,
            market_hours,
        }
    }
}

impl Default for ManagerFixture {
    fn default() -> Self {
        Self::new(MockGateway::default(), MockMarketHours::default())
    }
}

#[must_use]
pub fn forex(id: &str) -> Instrument {
    Instrument::new(InstrumentId::from(id), FxcmAssetClass::Forex, id)
}

#[must_use]
pub fn cfd(id: &str) -> Instrument {
    Instrument::new(InstrumentId::from(id), FxcmAssetClass::Cfd, id)
}

/// Every FX pair and CFD the default symbol mapper knows, plus filtered instruments.
#[must_use]
pub fn instrument_universe() -> Vec<Instrument> {
    vec![
        forex("EURUSD"),
        forex("GBPUSD"),
        forex("USDJPY"),
        forex("AUDUSD"),
        forex("USDCHF"),
        cfd("SPX500USD"),
        cfd("JP225JPY"),
        cfd("XAUUSD"),
        Instrument::new(InstrumentId::from("AAPL"), FxcmAssetClass::Equity, "AAPL"),
        Instrument::new(
            InstrumentId::from("FXCM-UNIVERSE-FOREX"),
            FxcmAssetClass::Forex,
            "FXCM-UNIVERSE-FOREX",
        ),
        forex("USDRUB"),
    ]
}
