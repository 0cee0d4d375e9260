// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all senscalc-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::calculate::SensCalcArgsError;
use crate::{
    array::ArrayConfigurationError, io::ReadTsysError, sensitivity::SensitivityError,
    weighting::WeightingError,
};

/// The *only* publicly visible error from senscalc. Each error message should
/// include a hint, unless it's "generic".
#[derive(Error, Debug)]
pub enum SensCalcError {
    /// An error related to the observing frequency.
    #[error("{0}\n\nCentral frequencies are given in MHz (e.g. -f 5500)")]
    Band(String),

    /// An error related to the array configuration or weighting.
    #[error("{0}\n\nRun with --help to see the accepted configurations and weighting schemes")]
    Array(String),

    /// An error related to where the source is and when it can be observed.
    #[error("{0}\n\nCheck the declination (-d), the elevation limit (-e) and the hour-angle limit (-a)")]
    Geometry(String),

    /// An error related to system temperatures.
    #[error("{0}\n\nMeasured system temperature files hold lines of 'frequency_GHz log10(Tsys)'; point --systemps-dir at the directory holding them, or give one with --tsys-file")]
    Tsys(String),

    /// An error related to command-line arguments.
    #[error("{0}\n\nRun with --help to see the available options")]
    Args(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files can be made with --save-toml")]
    ArgFile(String),

    /// An error related to plotting.
    #[error("{0}")]
    Plot(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<SensCalcArgsError> for SensCalcError {
    fn from(e: SensCalcArgsError) -> Self {
        let s = e.to_string();
        match e {
            SensCalcArgsError::NoFrequency
            | SensCalcArgsError::BadCorrelatorMode { .. }
            | SensCalcArgsError::BadReportFormat { .. } => Self::Args(s),
            #[cfg(not(feature = "plotting"))]
            SensCalcArgsError::NoPlottingFeature => Self::Plot(s),
            #[cfg(feature = "plotting")]
            SensCalcArgsError::Draw(_) => Self::Plot(s),
        }
    }
}

impl From<SensitivityError> for SensCalcError {
    fn from(e: SensitivityError) -> Self {
        let s = e.to_string();
        match e {
            SensitivityError::Band(_) => Self::Band(s),
            SensitivityError::Array(e) => Self::from(e),
            SensitivityError::Weighting(e) => Self::from(e),
            SensitivityError::Geometry(_) => Self::Geometry(s),
            SensitivityError::NoChannelData { .. } => Self::Tsys(s),
            SensitivityError::Efficiency { .. } => Self::Band(s),
            SensitivityError::NonPositiveTsysScale(_) => Self::Args(s),
        }
    }
}

impl From<ReadTsysError> for SensCalcError {
    fn from(e: ReadTsysError) -> Self {
        let s = e.to_string();
        match e {
            ReadTsysError::DoesNotExist(_) | ReadTsysError::NoSamples(_) => Self::Tsys(s),
            ReadTsysError::IO(e) => Self::from(e),
        }
    }
}

impl From<ArrayConfigurationError> for SensCalcError {
    fn from(e: ArrayConfigurationError) -> Self {
        Self::Array(e.to_string())
    }
}

impl From<WeightingError> for SensCalcError {
    fn from(e: WeightingError) -> Self {
        Self::Array(e.to_string())
    }
}

impl From<serde_json::Error> for SensCalcError {
    fn from(e: serde_json::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<toml::ser::Error> for SensCalcError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<std::io::Error> for SensCalcError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
