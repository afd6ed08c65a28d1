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

//! Batched market data requests sent to the FXCM gateway.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{
    enums::{MarketDataEntryScope, SubscriptionRequestType},
    instrument::FxcmSymbol,
};

/// A single subscribe or unsubscribe request covering one or more FXCM symbols.
///
/// One request is built per manager call and never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataRequest {
    /// Unique identifier correlating gateway acknowledgements with this request.
    pub request_id: Uuid,
    /// Whether the symbols are being subscribed or unsubscribed.
    pub request_type: SubscriptionRequestType,
    /// The market data entry types requested.
    pub entry_scope: MarketDataEntryScope,
    /// The gateway-native symbols, in request order.
    pub symbols: Vec<FxcmSymbol>,
}

impl MarketDataRequest {
    /// Creates a new [`MarketDataRequest`] for all market data entry types.
    #[must_use]
    pub fn new(request_type: SubscriptionRequestType, symbols: Vec<FxcmSymbol>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            request_type,
            entry_scope: MarketDataEntryScope::All,
            symbols,
        }
    }

    /// Creates a new subscribe request.
    #[must_use]
    pub fn subscribe(symbols: Vec<FxcmSymbol>) -> Self {
        Self::new(SubscriptionRequestType::Subscribe, symbols)
    }

    /// Creates a new unsubscribe request.
    #[must_use]
    pub fn unsubscribe(symbols: Vec<FxcmSymbol>) -> Self {
        Self::new(SubscriptionRequestType::Unsubscribe, symbols)
    }

    /// Returns the number of symbols in the request.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the request carries no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Serializes the request into its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Display for MarketDataRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let symbols: Vec<&str> = self.symbols.iter().map(FxcmSymbol::as_str).collect();
        write!(
            f,
            "{}(id={}, scope={}, symbols=[{}])",
            self.request_type,
            self.request_id,
            self.entry_scope,
            symbols.join(", ")
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
