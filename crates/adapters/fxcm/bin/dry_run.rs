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

//! Dry run of the FXCM subscription manager against a gateway which only logs requests.
//!
//! Subscribes a mixed batch of instruments (including ones that are filtered out), adds to it,
//! simulates a reconnect, then unsubscribes. Run with `RUST_LOG=debug` to see skipped
//! instruments and time zone loads.

use std::sync::{Arc, Mutex};

use nautilus_fxcm::{
    FxcmAssetClass, FxcmDataClientConfig, FxcmSubscriptionManager, FxcmSymbolMapper,
    GatewayChannel, Instrument, InstrumentId, MarketDataRequest, StaticMarketHours,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Gateway channel which logs each request as it would appear on the wire.
#[derive(Debug, Default)]
struct LoggingGateway {
    sent: usize,
}

impl GatewayChannel for LoggingGateway {
    fn send(&mut self, request: &MarketDataRequest) -> anyhow::Result<()> {
        self.sent += 1;
        info!(component = "dry_run", seq = self.sent, "--> {}", request.to_json()?);
        Ok(())
    }
}

fn instrument(id: &str, asset_class: FxcmAssetClass) -> Instrument {
    Instrument::new(InstrumentId::from(id), asset_class, id)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env).init();

    let config = match std::env::var("FXCM_CONFIG_JSON") {
        Ok(json) => FxcmDataClientConfig::from_json(&json)?,
        Err(_) => FxcmDataClientConfig::default(),
    };
    info!(component = "dry_run", ?config, "Starting");

    let manager = FxcmSubscriptionManager::new(
        config,
        Arc::new(FxcmSymbolMapper::new()),
        Arc::new(StaticMarketHours::new()),
        Arc::new(Mutex::new(LoggingGateway::default())),
    );

    let eurusd = instrument("EURUSD", FxcmAssetClass::Forex);
    let usdjpy = instrument("USDJPY", FxcmAssetClass::Forex);
    let spx500 = instrument("SPX500USD", FxcmAssetClass::Cfd);
    let jp225 = instrument("JP225JPY", FxcmAssetClass::Cfd);
    let aapl = instrument("AAPL", FxcmAssetClass::Equity);
    let universe = instrument("FXCM-UNIVERSE-FOREX", FxcmAssetClass::Forex);
    let unmapped = instrument("USDRUB", FxcmAssetClass::Forex);

    manager.subscribe([&eurusd, &spx500, &aapl, &universe, &unmapped])?;
    manager.subscribe([&eurusd, &usdjpy, &jp225])?;

    for instrument in manager.subscribed_instruments() {
        let tz = manager.cached_time_zone(&instrument.id);
        info!(component = "dry_run", "{instrument} exchange time zone {tz:?}");
    }

    let resent = manager.resubscribe_all()?;
    info!(component = "dry_run", "Resubscribed {resent} symbol(s) after reconnect");

    manager.unsubscribe([&spx500, &aapl, &usdjpy])?;
    info!(
        component = "dry_run",
        "{} instrument(s) remain subscribed",
        manager.subscription_count()
    );

    Ok(())
}
