// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeightingError {
    #[error("There are no weighting factors for a {length_m} m configuration")]
    UnknownConfiguration { length_m: u32 },

    #[error("Unrecognised weighting scheme '{got}'; please use one of: {valid}")]
    UnknownScheme { got: String, valid: String },
}
