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

//! The send path to the FXCM market data gateway connection.

use std::sync::{Arc, Mutex};

use super::request::MarketDataRequest;

/// A connection to the FXCM gateway capable of sending market data requests.
///
/// Connection lifecycle (login, heartbeats, reconnection) is owned by the implementor.
/// A send which returns `Ok` has been accepted for delivery; acknowledgement is not awaited.
pub trait GatewayChannel: Send {
    /// Sends a single batched request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be handed to the connection.
    fn send(&mut self, request: &MarketDataRequest) -> anyhow::Result<()>;
}

/// A gateway channel shared by every component that writes to the connection.
///
/// Holding the lock is the exclusive right to write, so no two requests interleave on the wire.
pub type SharedGatewayChannel = Arc<Mutex<dyn GatewayChannel>>;
