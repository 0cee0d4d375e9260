// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Sensitivity calculator for the Australia Telescope Compact Array (ATCA).

Given an observing frequency, array configuration, correlator mode, source
declination and time on source, the RMS noise, brightness temperature
sensitivity and synthesised beam of an observation are calculated for good,
average and poor weather.
 */

pub mod array;
pub mod band;
mod cli;
pub mod constants;
pub mod correlator;
pub mod io;
pub mod params;
pub mod sensitivity;
pub mod spectrum;
pub mod table;
pub mod tsys;
pub mod weather;
pub mod weighting;

// Re-exports.
pub use cli::{SensCalc, SensCalcError};
pub use params::{ObservationSpec, SensitivityParams};
pub use sensitivity::SensitivityResult;
pub use weather::{PerWeather, Weather};
