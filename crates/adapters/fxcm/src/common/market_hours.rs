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

//! Exchange time zone lookups for the FXCM market.

use ahash::AHashMap;
use chrono_tz::Tz;
use ustr::Ustr;

use super::{
    consts::{FXCM_FOREX_TIME_ZONE, FXCM_MARKET},
    enums::FxcmAssetClass,
    instrument::InstrumentId,
};

/// Looks up the exchange time zone of an instrument in a market hours database.
///
/// Implementations may perform I/O and be slow; callers cache the results.
pub trait MarketHoursProvider: Send + Sync {
    /// Returns the exchange time zone for the instrument on the given market.
    ///
    /// # Errors
    ///
    /// Returns an error if no entry exists or the database is unavailable.
    fn exchange_time_zone(
        &self,
        market: &str,
        instrument_id: &InstrumentId,
        asset_class: FxcmAssetClass,
    ) -> anyhow::Result<Tz>;
}

/// CFD exchange time zones on the FXCM market.
const CFD_TIME_ZONES: &[(&str, Tz)] = &[
    ("AU200AUD", chrono_tz::Australia::Sydney),
    ("BCOUSD", chrono_tz::Europe::London),
    ("DE30EUR", chrono_tz::Europe::Berlin),
    ("ES35EUR", chrono_tz::Europe::Madrid),
    ("EU50EUR", chrono_tz::Europe::Berlin),
    ("FR40EUR", chrono_tz::Europe::Paris),
    ("HKHKD", chrono_tz::Asia::Hong_Kong),
    ("JP225JPY", chrono_tz::Asia::Tokyo),
    ("NAS100USD", chrono_tz::America::New_York),
    ("NGASUSD", chrono_tz::America::New_York),
    ("SPX500USD", chrono_tz::America::New_York),
    ("UK100GBP", chrono_tz::Europe::London),
    ("US30USD", chrono_tz::America::New_York),
    ("WTICOUSD", chrono_tz::America::New_York),
    ("XAGUSD", chrono_tz::America::New_York),
    ("XAUUSD", chrono_tz::America::New_York),
];

/// In-memory market hours database for a single market.
///
/// FX pairs share the market-wide FX time zone, CFDs need an explicit per-instrument entry.
#[derive(Clone, Debug)]
pub struct StaticMarketHours {
    market: Ustr,
    forex_time_zone: Tz,
    entries: AHashMap<InstrumentId, Tz>,
}

impl Default for StaticMarketHours {
    fn default() -> Self {
        let entries = CFD_TIME_ZONES
            .iter()
            .map(|(code, tz)| (InstrumentId::from(*code), *tz))
            .collect();

        Self {
            market: Ustr::from(FXCM_MARKET),
            forex_time_zone: FXCM_FOREX_TIME_ZONE,
            entries,
        }
    }
}

impl StaticMarketHours {
    /// Creates a new [`StaticMarketHours`] preloaded with the FXCM market entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the time zone entry for an instrument.
    #[must_use]
    pub fn with_entry(mut self, instrument_id: InstrumentId, time_zone: Tz) -> Self {
        self.entries.insert(instrument_id, time_zone);
        self
    }
}

impl MarketHoursProvider for StaticMarketHours {
    fn exchange_time_zone(
        &self,
        market: &str,
        instrument_id: &InstrumentId,
        asset_class: FxcmAssetClass,
    ) -> anyhow::Result<Tz> {
        anyhow::ensure!(
            market.eq_ignore_ascii_case(self.market.as_str()),
            "No market hours entry for market '{market}'"
        );

        if let Some(tz) = self.entries.get(instrument_id) {
            return Ok(*tz);
        }

        match asset_class {
            FxcmAssetClass::Forex => Ok(self.forex_time_zone),
            _ => anyhow::bail!(
                "No market hours entry for {instrument_id} ({asset_class}) on market '{market}'"
            ),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
