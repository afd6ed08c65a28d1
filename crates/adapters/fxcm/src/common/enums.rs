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

//! Enumerations for the FXCM market data gateway.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::consts::FXCM_SUPPORTED_ASSET_CLASSES;

/// Represents the asset class of an instrument.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FxcmAssetClass {
    /// Spot foreign exchange currency pair.
    Forex,
    /// Contract for difference.
    Cfd,
    /// Equity / stock.
    Equity,
    /// Listed option.
    Option,
    /// Listed future.
    Future,
    /// Cryptocurrency.
    Crypto,
    /// Physical commodity.
    Commodity,
    /// Index.
    Index,
}

impl FxcmAssetClass {
    /// Returns `true` if the FXCM gateway streams market data for this asset class.
    #[must_use]
    pub fn is_supported(self) -> bool {
        FXCM_SUPPORTED_ASSET_CLASSES.contains(&self)
    }
}

/// Represents the operation carried by a market data request.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionRequestType {
    /// Start streaming the listed symbols.
    Subscribe,
    /// Stop streaming the listed symbols.
    Unsubscribe,
}

/// Represents the set of market data entry types requested.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketDataEntryScope {
    /// Every market data entry type (bid, offer, high, low, ...).
    #[default]
    All,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
