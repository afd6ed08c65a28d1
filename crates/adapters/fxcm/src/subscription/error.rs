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

//! Error types produced by the FXCM subscription manager.

use thiserror::Error;

use crate::common::{enums::SubscriptionRequestType, instrument::InstrumentId};

/// A typed error enumeration for the FXCM subscription manager.
///
/// Already subscribed, ineligible and unmapped instruments are not errors; they are dropped
/// from the batch.
#[derive(Debug, Clone, Error)]
pub enum FxcmSubscriptionError {
    /// The symbol mapping service failed (as opposed to reporting no mapping).
    #[error("Symbol resolution failed for {instrument_id}: {message}")]
    Resolution {
        instrument_id: InstrumentId,
        message: String,
    },
    /// The market hours database could not provide an exchange time zone.
    #[error("Exchange time zone lookup failed for {instrument_id}: {message}")]
    TimeZoneLookup {
        instrument_id: InstrumentId,
        message: String,
    },
    /// The gateway channel rejected the request.
    #[error("Failed to send {request_type} request for {count} symbol(s): {message}")]
    Send {
        request_type: SubscriptionRequestType,
        count: usize,
        message: String,
    },
    /// A previous holder of the gateway channel panicked while sending.
    #[error("Gateway channel lock poisoned")]
    GatewayPoisoned,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
