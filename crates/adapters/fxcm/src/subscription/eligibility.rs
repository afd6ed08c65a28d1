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

//! Subscription eligibility predicate.

use crate::common::instrument::Instrument;

/// Returns `true` if `label` contains `marker`, ignoring ASCII case.
fn contains_marker(label: &str, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }

    let label = label.as_bytes();
    let marker = marker.as_bytes();
    label
        .windows(marker.len())
        .any(|window| window.eq_ignore_ascii_case(marker))
}

/// Returns `true` if the instrument is a valid FXCM subscription candidate.
///
/// The asset class must be streamed by FXCM (spot FX or CFD) and the label must not carry
/// the `placeholder_marker` used for synthetic universe/basket instruments.
#[must_use]
pub fn is_eligible(instrument: &Instrument, placeholder_marker: &str) -> bool {
    instrument.asset_class.is_supported()
        && !contains_marker(instrument.label.as_str(), placeholder_marker)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
