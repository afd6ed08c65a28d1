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

//! The authoritative record of instruments believed to be streaming from the gateway.

use ahash::AHashMap;

use crate::common::instrument::{Instrument, InstrumentId};

/// Set of instruments currently subscribed at the gateway, unique by [`InstrumentId`].
///
/// Entries are added only after a subscribe request for them was accepted by the gateway
/// channel, and removed only after an unsubscribe request was accepted. State is updated
/// on send, not on acknowledgement.
#[derive(Clone, Debug, Default)]
pub struct SubscribedSet {
    instruments: AHashMap<InstrumentId, Instrument>,
}

impl SubscribedSet {
    /// Creates a new empty [`SubscribedSet`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the instrument is subscribed.
    #[must_use]
    pub fn contains(&self, instrument_id: &InstrumentId) -> bool {
        self.instruments.contains_key(instrument_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Records the instruments as subscribed.
    pub fn insert_all<'a, I>(&mut self, instruments: I)
    where
        I: IntoIterator<Item = &'a Instrument>,
    {
        for instrument in instruments {
            self.instruments.insert(instrument.id, instrument.clone());
        }
    }

    /// Removes the instruments from the set.
    pub fn remove_all<'a, I>(&mut self, instruments: I)
    where
        I: IntoIterator<Item = &'a Instrument>,
    {
        for instrument in instruments {
            self.instruments.remove(&instrument.id);
        }
    }

    /// Returns a snapshot of the subscribed instruments, sorted by identifier.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Instrument> {
        let mut instruments: Vec<Instrument> = self.instruments.values().cloned().collect();
        instruments.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        instruments
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
