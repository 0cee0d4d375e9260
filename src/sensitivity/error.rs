// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::{
    array::ArrayConfigurationError,
    band::{Band, BandError},
    table::InterpolationError,
    tsys::GeometryError,
    weighting::WeightingError,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensitivityError {
    #[error("No channels within {bandwidth_mhz} MHz of {centre_freq_mhz} MHz in the {band} band have system temperatures; was the measured Tsys file for this band supplied?")]
    NoChannelData {
        band: Band,
        centre_freq_mhz: f64,
        bandwidth_mhz: f64,
    },

    #[error("Couldn't get the antenna efficiency at {freq_mhz} MHz: {err}")]
    Efficiency {
        freq_mhz: u32,
        err: InterpolationError,
    },

    #[error("The system temperature multiplier must be positive (got {0})")]
    NonPositiveTsysScale(f64),

    #[error(transparent)]
    Band(#[from] BandError),

    #[error(transparent)]
    Array(#[from] ArrayConfigurationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Weighting(#[from] WeightingError),
}
