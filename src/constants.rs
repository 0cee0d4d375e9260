// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Calculations should be done in
double precision throughout.
 */

/// Speed of light \[metres/second\]
pub const VEL_C: f64 = 299_792_458.0;

/// The diameter of an ATCA antenna \[metres\].
pub const DISH_DIAMETER_M: f64 = 22.0;

/// The latitude of the ATCA \[degrees\].
pub const ATCA_LAT_DEG: f64 = -30.31288472;

/// The physical temperature of the atmosphere \[K\]. This is about 13-20 K
/// below the ambient temperature on the ground (TMS equation 13.120).
pub const ATMOSPHERE_TEMPERATURE_K: f64 = 270.0;

/// The temperature of the cosmic microwave background \[K\].
pub const CMB_TEMPERATURE_K: f64 = 2.7;

/// The number of hour angles sampled when integrating the system temperature
/// over an observation.
pub const NUM_HOUR_ANGLE_SAMPLES: usize = 100;

/// The number of polarisation products combined into the final image. XX and
/// YY make Stokes I.
pub const NUM_POL_PRODUCTS_COMBINED: u32 = 2;

/// The number of channels in each zoom band.
pub const NUM_ZOOM_CHANNELS: u32 = 2048;

/// The bandwidth of a single continuum band \[MHz\].
pub const CONTINUUM_BANDWIDTH_MHZ: f64 = 2048.0;

/// The leading coefficient of the RMS noise equation (AT/01.17/025). The
/// correlator efficiency is assumed to be 1.
pub const RMS_COEFFICIENT: f64 = 300.0;

/// The leading coefficient of the system sensitivity equation
/// (AT/01.17/025).
pub const SYSTEM_SENSITIVITY_COEFFICIENT: f64 = 3514.0;

/// The leading coefficient of the brightness temperature sensitivity
/// equation (AT/01.17/025 uses 1.46).
pub const BRIGHTNESS_TEMPERATURE_COEFFICIENT: f64 = 1.36;

/// The number of antennas normally used; CA06 makes the sixth.
pub const NUM_ANTENNAS_WITHOUT_CA06: usize = 5;

/// The longest baseline available without CA06 \[metres\].
pub const MAX_BASELINE_WITHOUT_CA06_M: u32 = 3000;

/// The longest baseline available with CA06 \[metres\].
pub const MAX_BASELINE_WITH_CA06_M: u32 = 6000;

pub const MHZ_TO_HZ: f64 = 1e6;
pub const M_TO_KM: f64 = 1e-3;
pub const M_TO_CM: f64 = 100.0;
pub const DEG_TO_ARCMIN: f64 = 60.0;
pub const DEG_TO_ARCSEC: f64 = 3600.0;

/// Elevation limits below this value are unusual \[degrees\].
pub const MIN_ELEVATION_LIMIT_DEG: f64 = 12.0;

/// Hour-angle limits above this value are meaningless \[hours\].
pub const MAX_HOUR_ANGLE_LIMIT_HOURS: f64 = 12.0;

pub const DEFAULT_CONFIGURATION: &str = "6000";
pub const DEFAULT_DEC_DEG: f64 = -30.0;
pub const DEFAULT_INTEGRATION_MIN: f64 = 720.0;
pub const DEFAULT_ELEVATION_LIMIT_DEG: f64 = 12.0;
pub const DEFAULT_HOUR_ANGLE_LIMIT_HOURS: f64 = 6.0;
pub const DEFAULT_TSYS_SCALE: f64 = 1.0;
