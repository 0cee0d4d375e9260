// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BandError {
    #[error("The central frequency {frequency_mhz} MHz is out of the valid range. Valid ranges are:\n{valid_ranges}")]
    UnsupportedFrequency {
        frequency_mhz: u32,
        valid_ranges: String,
    },
}
