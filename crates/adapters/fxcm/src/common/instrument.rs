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

//! Instrument and identifier types used by the FXCM subscription machinery.

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use super::enums::FxcmAssetClass;

/// Represents an internal instrument identifier, e.g. `EURUSD` or `SPX500USD`.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(Ustr);

impl InstrumentId {
    /// Creates a new [`InstrumentId`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is empty or contains whitespace.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        anyhow::ensure!(!value.is_empty(), "invalid `InstrumentId`: value was empty");
        anyhow::ensure!(
            !value.chars().any(char::is_whitespace),
            "invalid `InstrumentId` '{value}': contained whitespace"
        );
        Ok(Self(Ustr::from(value)))
    }

    #[must_use]
    pub fn from_str_unchecked<T: AsRef<str>>(s: T) -> Self {
        Self(Ustr::from(s.as_ref()))
    }

    /// Returns the inner value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for InstrumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0.as_str())
    }
}

impl Display for InstrumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for InstrumentId {
    fn from(value: &str) -> Self {
        Self::from_str_unchecked(value)
    }
}

/// Represents a gateway-native FXCM symbol, e.g. `EUR/USD` or `SPX500`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FxcmSymbol(Ustr);

impl FxcmSymbol {
    /// Creates a new [`FxcmSymbol`] instance.
    #[must_use]
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self(Ustr::from(value.as_ref()))
    }

    /// Returns the inner value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for FxcmSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for FxcmSymbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// An instrument as seen by the subscription machinery.
///
/// Instruments are owned by the wider system and treated as immutable values here; two
/// instruments with the same [`InstrumentId`] are the same subscription.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instrument {
    /// The internal instrument identifier.
    pub id: InstrumentId,
    /// The asset class of the instrument.
    pub asset_class: FxcmAssetClass,
    /// The human readable label, which also carries placeholder markers.
    pub label: Ustr,
}

impl Instrument {
    /// Creates a new [`Instrument`] instance.
    #[must_use]
    pub fn new(id: InstrumentId, asset_class: FxcmAssetClass, label: &str) -> Self {
        Self {
            id,
            asset_class,
            label: Ustr::from(label),
        }
    }
}

impl Display for Instrument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.asset_class)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
