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

//! [NautilusTrader](http://nautilustrader.io) market data subscription management for the
//! [FXCM](https://www.fxcm.com) gateway.
//!
//! The `nautilus-fxcm` crate tracks which instruments are currently streaming from the FXCM
//! market data gateway, computes the minimal delta when subscriptions change, and dispatches
//! one batched subscribe or unsubscribe request per change over the single shared gateway
//! connection. Exchange time zones are resolved once per instrument on first subscription and
//! cached for the downstream timestamping logic.
//!
//! The symbol mapping service, the market hours database and the gateway connection itself are
//! external collaborators, modelled as the [`InstrumentResolver`], [`MarketHoursProvider`] and
//! [`GatewayChannel`] traits.
//!
//! # Platform
//!
//! [NautilusTrader](http://nautilustrader.io) is an open-source, high-performance, production-grade
//! algorithmic trading platform, providing quantitative traders with the ability to backtest
//! portfolios of automated trading strategies on historical data with an event-driven engine,
//! and also deploy those same strategies live, with no code changes.
//!
//! # Feature flags
//!
//! - `stubs`: Exposes test stubs and `rstest` fixtures under `common::testing`.
//! - `dry-run`: Builds the `fxcm-subscriptions-dry-run` binary.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod config;
pub mod subscription;

// Re-exports
pub use crate::{
    common::{
        enums::{FxcmAssetClass, MarketDataEntryScope, SubscriptionRequestType},
        instrument::{FxcmSymbol, Instrument, InstrumentId},
        market_hours::{MarketHoursProvider, StaticMarketHours},
        symbology::{FxcmSymbolMapper, InstrumentResolver},
    },
    config::FxcmDataClientConfig,
    subscription::{
        error::FxcmSubscriptionError,
        gateway::{GatewayChannel, SharedGatewayChannel},
        manager::FxcmSubscriptionManager,
        request::MarketDataRequest,
    },
};
