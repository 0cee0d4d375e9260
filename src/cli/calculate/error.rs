// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum SensCalcArgsError {
    #[error("No central frequency was supplied")]
    NoFrequency,

    #[error("Unrecognised correlator mode '{got}'; please use one of: {valid}")]
    BadCorrelatorMode { got: String, valid: String },

    #[error("Unrecognised report format '{got}'; please use one of: {valid}")]
    BadReportFormat { got: String, valid: String },

    #[cfg(not(feature = "plotting"))]
    #[error("senscalc was not compiled with the \"plotting\" feature.\nYou need to compile senscalc from source with this feature to plot the RMS spectrum.")]
    NoPlottingFeature,

    #[cfg(feature = "plotting")]
    #[error("Error from the plotters library: {0}")]
    Draw(#[from] crate::cli::plot::DrawError),
}
