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

//! Process-wide cache of instrument exchange time zones.

use std::sync::Arc;

use chrono_tz::Tz;
use dashmap::DashMap;

use crate::common::{
    instrument::{Instrument, InstrumentId},
    market_hours::MarketHoursProvider,
};

/// Lazily populated mapping from instrument to exchange time zone.
///
/// Entries are written once on first load and never evicted. Concurrent misses for the same
/// instrument may each perform the lookup; the lookup is deterministic so the last write wins
/// with the same value. Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct TimeZoneCache {
    entries: Arc<DashMap<InstrumentId, Tz>>,
}

impl TimeZoneCache {
    /// Creates a new empty [`TimeZoneCache`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached time zone for the instrument, without loading.
    #[must_use]
    pub fn get(&self, instrument_id: &InstrumentId) -> Option<Tz> {
        self.entries.get(instrument_id).map(|entry| *entry.value())
    }

    /// Returns the cached time zone for the instrument, loading it from `provider` on a miss.
    ///
    /// The market hours lookup runs without holding any cache shard lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails; nothing is cached in that case.
    pub fn get_or_load(
        &self,
        instrument: &Instrument,
        market: &str,
        provider: &dyn MarketHoursProvider,
    ) -> anyhow::Result<Tz> {
        if let Some(tz) = self.get(&instrument.id) {
            return Ok(tz);
        }

        let tz = provider.exchange_time_zone(market, &instrument.id, instrument.asset_class)?;
        self.entries.insert(instrument.id, tz);
        tracing::debug!("Cached exchange time zone {tz} for {}", instrument.id);
        Ok(tz)
    }

    /// Returns `true` if an entry exists for the instrument.
    #[must_use]
    pub fn contains(&self, instrument_id: &InstrumentId) -> bool {
        self.entries.contains_key(instrument_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
