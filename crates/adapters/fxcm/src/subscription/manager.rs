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

//! Subscription reconciliation and dispatch for the FXCM market data gateway.

use std::{
    fmt::Debug,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use chrono_tz::Tz;
use indexmap::IndexMap;

use super::{
    eligibility::is_eligible,
    error::FxcmSubscriptionError,
    gateway::SharedGatewayChannel,
    request::MarketDataRequest,
    state::SubscribedSet,
    timezone::TimeZoneCache,
};
use crate::{
    common::{
        instrument::{FxcmSymbol, Instrument, InstrumentId},
        market_hours::MarketHoursProvider,
        symbology::InstrumentResolver,
    },
    config::FxcmDataClientConfig,
};

/// Deduplicates `instruments` by identifier, keeping request order and only those passing `keep`.
fn select_instruments<'a, I, F>(instruments: I, keep: F) -> Vec<&'a Instrument>
where
    I: IntoIterator<Item = &'a Instrument>,
    F: Fn(&Instrument) -> bool,
{
    let mut selected: IndexMap<InstrumentId, &'a Instrument> = IndexMap::new();
    for instrument in instruments {
        if !selected.contains_key(&instrument.id) && keep(instrument) {
            selected.insert(instrument.id, instrument);
        }
    }
    selected.into_values().collect()
}

/// Tracks the instruments streaming from the FXCM gateway and dispatches the minimal
/// batched subscribe/unsubscribe requests when they change.
///
/// Construct one manager per gateway session and share it by reference (or `Arc`) with every
/// component that needs to change subscriptions.
///
/// # Concurrency
///
/// Each subscribe, unsubscribe or resubscribe call holds the subscribed set lock across its
/// authoritative filter, the send and the state update, so concurrent requests for the same
/// instrument produce a single wire request. The gateway channel lock is taken only for the
/// send itself. Subscribe resolves symbols and loads exchange time zones before taking the
/// subscribed set lock, so slow market hours lookups never block other callers.
pub struct FxcmSubscriptionManager {
    config: FxcmDataClientConfig,
    resolver: Arc<dyn InstrumentResolver>,
    market_hours: Arc<dyn MarketHoursProvider>,
    gateway: SharedGatewayChannel,
    subscribed: Mutex<SubscribedSet>,
    time_zones: TimeZoneCache,
}

impl Debug for FxcmSubscriptionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(FxcmSubscriptionManager))
            .field("config", &self.config)
            .field("subscribed", &self.lock_subscribed().len())
            .field("time_zones", &self.time_zones.len())
            .finish_non_exhaustive()
    }
}

impl FxcmSubscriptionManager {
    /// Creates a new [`FxcmSubscriptionManager`] instance with an empty subscribed set.
    #[must_use]
    pub fn new(
        config: FxcmDataClientConfig,
        resolver: Arc<dyn InstrumentResolver>,
        market_hours: Arc<dyn MarketHoursProvider>,
        gateway: SharedGatewayChannel,
    ) -> Self {
        Self {
            config,
            resolver,
            market_hours,
            gateway,
            subscribed: Mutex::new(SubscribedSet::new()),
            time_zones: TimeZoneCache::new(),
        }
    }

    /// Returns the manager configuration.
    #[must_use]
    pub fn config(&self) -> &FxcmDataClientConfig {
        &self.config
    }

    // The set is only mutated after a successful send, so a poisoned guard is still consistent
    fn lock_subscribed(&self) -> MutexGuard<'_, SubscribedSet> {
        self.subscribed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns `true` if the instrument is a valid FXCM subscription candidate.
    #[must_use]
    pub fn is_eligible(&self, instrument: &Instrument) -> bool {
        is_eligible(instrument, &self.config.placeholder_marker)
    }

    /// Returns `true` if the instrument is believed to be streaming from the gateway.
    #[must_use]
    pub fn is_subscribed(&self, instrument_id: &InstrumentId) -> bool {
        self.lock_subscribed().contains(instrument_id)
    }

    /// Returns the number of subscribed instruments.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.lock_subscribed().len()
    }

    /// Returns a snapshot of the subscribed instruments, sorted by identifier.
    #[must_use]
    pub fn subscribed_instruments(&self) -> Vec<Instrument> {
        self.lock_subscribed().snapshot()
    }

    /// Returns the exchange time zone for the instrument, loading and caching it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the market hours lookup fails.
    pub fn exchange_time_zone(&self, instrument: &Instrument) -> Result<Tz, FxcmSubscriptionError> {
        self.time_zones
            .get_or_load(instrument, &self.config.market, self.market_hours.as_ref())
            .map_err(|e| FxcmSubscriptionError::TimeZoneLookup {
                instrument_id: instrument.id,
                message: format!("{e:#}"),
            })
    }

    /// Returns the cached exchange time zone for the instrument, without loading.
    #[must_use]
    pub fn cached_time_zone(&self, instrument_id: &InstrumentId) -> Option<Tz> {
        self.time_zones.get(instrument_id)
    }

    /// Returns a handle to the exchange time zone cache for downstream data timestamping.
    #[must_use]
    pub fn time_zone_cache(&self) -> TimeZoneCache {
        self.time_zones.clone()
    }

    /// Subscribes to market data for every eligible, not yet subscribed instrument.
    ///
    /// Already subscribed, ineligible and unmapped instruments are silently skipped, and no
    /// request is sent when nothing remains. Otherwise exactly one subscribe request is sent
    /// and, once accepted, its instruments are recorded as subscribed.
    ///
    /// # Errors
    ///
    /// Returns an error if symbol resolution or an exchange time zone lookup fails, or if the
    /// gateway rejects the request. The subscribed set is unchanged in every error case.
    pub fn subscribe<'a, I>(&self, instruments: I) -> Result<(), FxcmSubscriptionError>
    where
        I: IntoIterator<Item = &'a Instrument>,
    {
        let candidates = {
            let subscribed = self.lock_subscribed();
            select_instruments(instruments, |instrument| {
                !subscribed.contains(&instrument.id) && self.is_eligible(instrument)
            })
        };

        if candidates.is_empty() {
            return Ok(());
        }

        let resolved = self.resolve_all(candidates)?;

        // Consumers must see the time zone before the first tick arrives
        for (instrument, _) in &resolved {
            self.exchange_time_zone(instrument)?;
        }

        let mut subscribed = self.lock_subscribed();

        // Another caller may have subscribed some of these since the candidates were selected
        let batch: Vec<(&Instrument, FxcmSymbol)> = resolved
            .into_iter()
            .filter(|(instrument, _)| !subscribed.contains(&instrument.id))
            .collect();

        if batch.is_empty() {
            return Ok(());
        }

        let request =
            MarketDataRequest::subscribe(batch.iter().map(|(_, symbol)| *symbol).collect());
        self.dispatch(&request)?;

        subscribed.insert_all(batch.iter().map(|(instrument, _)| *instrument));
        tracing::info!(
            "Subscribed to {} instrument(s), {} now subscribed",
            batch.len(),
            subscribed.len()
        );

        Ok(())
    }

    /// Unsubscribes from market data for every currently subscribed instrument given.
    ///
    /// Instruments which are not subscribed or no longer resolve to an FXCM symbol are
    /// silently skipped. Exchange time zone entries are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if symbol resolution fails or the gateway rejects the request.
    /// The subscribed set is unchanged in every error case.
    pub fn unsubscribe<'a, I>(&self, instruments: I) -> Result<(), FxcmSubscriptionError>
    where
        I: IntoIterator<Item = &'a Instrument>,
    {
        let mut subscribed = self.lock_subscribed();

        let candidates =
            select_instruments(instruments, |instrument| subscribed.contains(&instrument.id));

        if candidates.is_empty() {
            return Ok(());
        }

        let batch = self.resolve_all(candidates)?;

        if batch.is_empty() {
            return Ok(());
        }

        let request =
            MarketDataRequest::unsubscribe(batch.iter().map(|(_, symbol)| *symbol).collect());
        self.dispatch(&request)?;

        subscribed.remove_all(batch.iter().map(|(instrument, _)| *instrument));
        tracing::info!(
            "Unsubscribed from {} instrument(s), {} now subscribed",
            batch.len(),
            subscribed.len()
        );

        Ok(())
    }

    /// Re-sends a single subscribe request covering every subscribed instrument.
    ///
    /// Intended for use after the gateway connection has been re-established. The subscribed
    /// set is not modified. Returns the number of symbols sent.
    ///
    /// # Errors
    ///
    /// Returns an error if symbol resolution fails or the gateway rejects the request.
    pub fn resubscribe_all(&self) -> Result<usize, FxcmSubscriptionError> {
        let subscribed = self.lock_subscribed();
        let instruments = subscribed.snapshot();

        if instruments.is_empty() {
            return Ok(0);
        }

        let batch = self.resolve_all(instruments.iter().collect())?;

        if batch.is_empty() {
            return Ok(0);
        }

        let request =
            MarketDataRequest::subscribe(batch.iter().map(|(_, symbol)| *symbol).collect());
        self.dispatch(&request)?;

        tracing::info!("Resubscribed to {} instrument(s)", request.len());

        Ok(request.len())
    }

    /// Resolves each instrument to its FXCM symbol, dropping those without a mapping.
    fn resolve_all<'a>(
        &self,
        instruments: Vec<&'a Instrument>,
    ) -> Result<Vec<(&'a Instrument, FxcmSymbol)>, FxcmSubscriptionError> {
        let mut resolved = Vec::with_capacity(instruments.len());

        for instrument in instruments {
            match self.resolver.resolve(instrument) {
                Ok(Some(symbol)) => resolved.push((instrument, symbol)),
                Ok(None) => tracing::debug!("No FXCM symbol for {instrument}, skipping"),
                Err(e) => {
                    return Err(FxcmSubscriptionError::Resolution {
                        instrument_id: instrument.id,
                        message: format!("{e:#}"),
                    });
                }
            }
        }

        Ok(resolved)
    }

    /// Sends the request while holding exclusive access to the gateway channel.
    fn dispatch(&self, request: &MarketDataRequest) -> Result<(), FxcmSubscriptionError> {
        let mut gateway = self
            .gateway
            .lock()
            .map_err(|_| FxcmSubscriptionError::GatewayPoisoned)?;

        tracing::debug!("Sending {request}");

        gateway.send(request).map_err(|e| {
            tracing::warn!("Failed to send {request}: {e:#}");
            FxcmSubscriptionError::Send {
                request_type: request.request_type,
                count: request.len(),
                message: format!("{e:#}"),
            }
        })
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
