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

//! Core constants shared across the FXCM adapter components.

use super::enums::FxcmAssetClass;

/// The market designation used for market hours lookups.
pub const FXCM_MARKET: &str = "fxcm";

/// Label marker identifying synthetic universe/basket placeholders rather than tradable
/// instruments.
pub const FXCM_PLACEHOLDER_MARKER: &str = "-UNIVERSE-";

/// Asset classes which the FXCM market data gateway streams.
pub const FXCM_SUPPORTED_ASSET_CLASSES: [FxcmAssetClass; 2] =
    [FxcmAssetClass::Forex, FxcmAssetClass::Cfd];

/// Exchange time zone for every FX pair quoted on the FXCM market.
pub const FXCM_FOREX_TIME_ZONE: chrono_tz::Tz = chrono_tz::America::New_York;
