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

//! Mapping between internal instrument identifiers and FXCM gateway symbols.

use ahash::AHashMap;

use super::{
    enums::FxcmAssetClass,
    instrument::{FxcmSymbol, Instrument, InstrumentId},
};

/// Resolves internal instruments to gateway-native FXCM symbols.
pub trait InstrumentResolver: Send + Sync {
    /// Returns the FXCM symbol for `instrument`, or `None` when the instrument has no mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping service itself is unavailable.
    fn resolve(&self, instrument: &Instrument) -> anyhow::Result<Option<FxcmSymbol>>;
}

/// FX pairs quoted by FXCM, as internal six letter codes.
const KNOWN_FOREX_PAIRS: &[&str] = &[
    "AUDCAD", "AUDCHF", "AUDJPY", "AUDNZD", "AUDUSD", "CADCHF", "CADJPY", "CHFJPY", "EURAUD",
    "EURCAD", "EURCHF", "EURGBP", "EURJPY", "EURNOK", "EURNZD", "EURSEK", "EURTRY", "EURUSD",
    "GBPAUD", "GBPCAD", "GBPCHF", "GBPJPY", "GBPNZD", "GBPUSD", "NZDCAD", "NZDCHF", "NZDJPY",
    "NZDUSD", "TRYJPY", "USDCAD", "USDCHF", "USDCNH", "USDHKD", "USDJPY", "USDMXN", "USDNOK",
    "USDSEK", "USDTRY", "USDZAR", "ZARJPY",
];

/// CFDs quoted by FXCM, as (internal identifier, FXCM symbol).
const KNOWN_CFDS: &[(&str, &str)] = &[
    ("AU200AUD", "AUS200"),
    ("BCOUSD", "UKOil"),
    ("DE30EUR", "GER30"),
    ("ES35EUR", "ESP35"),
    ("EU50EUR", "EUSTX50"),
    ("FR40EUR", "FRA40"),
    ("HKHKD", "HKG33"),
    ("JP225JPY", "JPN225"),
    ("NAS100USD", "NAS100"),
    ("NGASUSD", "NGAS"),
    ("SPX500USD", "SPX500"),
    ("UK100GBP", "UK100"),
    ("US30USD", "US30"),
    ("WTICOUSD", "USOil"),
    ("XAGUSD", "XAG/USD"),
    ("XAUUSD", "XAU/USD"),
];

/// Formats a six letter currency pair code into the FXCM `BASE/QUOTE` form.
fn forex_symbol(code: &str) -> Option<FxcmSymbol> {
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    let (base, quote) = code.split_at(3);
    Some(FxcmSymbol::new(format!("{base}/{quote}")))
}

/// Table-driven [`InstrumentResolver`] for the instruments FXCM is known to quote.
#[derive(Clone, Debug)]
pub struct FxcmSymbolMapper {
    symbols: AHashMap<(InstrumentId, FxcmAssetClass), FxcmSymbol>,
}

impl Default for FxcmSymbolMapper {
    fn default() -> Self {
        let mut symbols = AHashMap::with_capacity(KNOWN_FOREX_PAIRS.len() + KNOWN_CFDS.len());

        for code in KNOWN_FOREX_PAIRS {
            if let Some(symbol) = forex_symbol(code) {
                symbols.insert((InstrumentId::from(*code), FxcmAssetClass::Forex), symbol);
            }
        }

        for (code, symbol) in KNOWN_CFDS {
            symbols.insert(
                (InstrumentId::from(*code), FxcmAssetClass::Cfd),
                FxcmSymbol::from(*symbol),
            );
        }

        Self { symbols }
    }
}

impl FxcmSymbolMapper {
    /// Creates a new [`FxcmSymbolMapper`] preloaded with the known FXCM symbols.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a mapping for the given instrument identifier and asset class.
    #[must_use]
    pub fn with_symbol(
        mut self,
        instrument_id: InstrumentId,
        asset_class: FxcmAssetClass,
        symbol: FxcmSymbol,
    ) -> Self {
        self.symbols.insert((instrument_id, asset_class), symbol);
        self
    }

    /// Returns `true` if a mapping exists for the instrument.
    #[must_use]
    pub fn is_known(&self, instrument: &Instrument) -> bool {
        self.symbols
            .contains_key(&(instrument.id, instrument.asset_class))
    }

    /// Returns the FXCM symbol for the instrument, if known.
    #[must_use]
    pub fn fxcm_symbol(&self, instrument: &Instrument) -> Option<FxcmSymbol> {
        self.symbols
            .get(&(instrument.id, instrument.asset_class))
            .copied()
    }
}

impl InstrumentResolver for FxcmSymbolMapper {
    fn resolve(&self, instrument: &Instrument) -> anyhow::Result<Option<FxcmSymbol>> {
        Ok(self.fxcm_symbol(instrument))
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
