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

//! Live market data subscription management for the FXCM gateway.
//!
//! The [`manager::FxcmSubscriptionManager`] owns the set of instruments believed to be
//! streaming and the exchange time zone cache. Each subscribe or unsubscribe call computes
//! the delta against that set and dispatches at most one [`request::MarketDataRequest`]
//! over the shared [`gateway::GatewayChannel`].

pub mod eligibility;
pub mod error;
pub mod gateway;
pub mod manager;
pub mod request;
pub mod state;
pub mod timezone;
