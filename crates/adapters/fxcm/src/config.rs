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

//! Configuration structures for the FXCM subscription manager.

use serde::{Deserialize, Serialize};

use crate::common::consts::{FXCM_MARKET, FXCM_PLACEHOLDER_MARKER};

/// Configuration for the FXCM data client subscription manager.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FxcmDataClientConfig {
    /// Market designation used for exchange time zone lookups.
    pub market: String,
    /// Label marker identifying synthetic universe/basket placeholders.
    pub placeholder_marker: String,
}

impl Default for FxcmDataClientConfig {
    fn default() -> Self {
        Self {
            market: FXCM_MARKET.to_string(),
            placeholder_marker: FXCM_PLACEHOLDER_MARKER.to_string(),
        }
    }
}

impl FxcmDataClientConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is malformed, has unknown fields, or names an empty market.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the market designation or the placeholder marker is empty.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.market.trim().is_empty(),
            "invalid `FxcmDataClientConfig`: `market` was empty"
        );
        // An empty marker matches no label, which would let placeholders through
        anyhow::ensure!(
            !self.placeholder_marker.trim().is_empty(),
            "invalid `FxcmDataClientConfig`: `placeholder_marker` was empty"
        );
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
