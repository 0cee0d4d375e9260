// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("Cannot interpolate at {freq_mhz} MHz; the table only covers {low} - {high} MHz")]
    OutOfRange { freq_mhz: f64, low: f64, high: f64 },
}
