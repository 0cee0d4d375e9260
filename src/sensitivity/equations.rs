// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Radiometer and beam equations. Unless noted, these come from AT technical
//! document AT/01.17/025.

use serde::Serialize;

use crate::constants::{
    BRIGHTNESS_TEMPERATURE_COEFFICIENT, DEG_TO_ARCMIN, DEG_TO_ARCSEC, DISH_DIAMETER_M, MHZ_TO_HZ,
    M_TO_CM, M_TO_KM, NUM_POL_PRODUCTS_COMBINED, RMS_COEFFICIENT, SYSTEM_SENSITIVITY_COEFFICIENT,
    VEL_C,
};

/// The full width at half maximum of a synthesised beam \[arcsec\].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeamSize {
    pub east_west_arcsec: f64,
    pub north_south_arcsec: f64,
}

impl BeamSize {
    /// The product of the two axes \[arcsec²\].
    pub fn area_arcsec2(&self) -> f64 {
        self.east_west_arcsec * self.north_south_arcsec
    }
}

/// Everything fixed about an observation that goes into the RMS noise
/// equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseInputs {
    /// The weighting scheme's noise penalty relative to natural weighting.
    pub noise_factor: f64,
    pub efficiency: f64,
    pub integration_min: f64,
    pub num_baselines: u32,
}

/// The RMS noise \[mJy/beam\] for a system temperature \[K\] over a
/// bandwidth \[MHz\]. The correlator efficiency is taken to be 1, and both
/// linear polarisations are combined into Stokes I.
pub fn rms_noise_mjy(inputs: &NoiseInputs, tsys_k: f64, bandwidth_mhz: f64) -> f64 {
    RMS_COEFFICIENT * tsys_k * inputs.noise_factor
        / (inputs.efficiency
            * DISH_DIAMETER_M.powi(2)
            * (bandwidth_mhz
                * inputs.integration_min
                * f64::from(inputs.num_baselines)
                * f64::from(NUM_POL_PRODUCTS_COMBINED))
            .sqrt())
}

/// The system equivalent flux density of a single antenna \[Jy\].
pub fn antenna_sensitivity_jy(tsys_k: f64, efficiency: f64) -> f64 {
    SYSTEM_SENSITIVITY_COEFFICIENT * tsys_k / (efficiency * DISH_DIAMETER_M.powi(2))
}

/// The system equivalent flux density of `num_antennas` antennas combined
/// \[Jy\]. The antennas are treated as a single dish with the same total
/// collecting area.
pub fn array_sensitivity_jy(tsys_k: f64, efficiency: f64, num_antennas: u32) -> f64 {
    let effective_diameter = DISH_DIAMETER_M * f64::from(num_antennas).sqrt();
    SYSTEM_SENSITIVITY_COEFFICIENT * tsys_k / (efficiency * effective_diameter.powi(2))
}

/// The brightness temperature sensitivity \[K\] of an RMS noise level
/// \[mJy/beam\] with a synthesised beam.
pub fn brightness_temperature_k(rms_mjy: f64, wavelength_sq_cm2: f64, beam: &BeamSize) -> f64 {
    BRIGHTNESS_TEMPERATURE_COEFFICIENT * rms_mjy * wavelength_sq_cm2 / beam.area_arcsec2()
}

/// The synthesised beam at a frequency \[MHz\] for a baseline \[metres\].
/// East-west arrays have their north-south axis stretched by the
/// declination; hybrid arrays don't.
pub fn synthesised_beam(
    freq_mhz: f64,
    baseline_m: u32,
    beam_factor: f64,
    declination_deg: f64,
    hybrid: bool,
) -> BeamSize {
    let east_west_arcsec = (beam_factor * VEL_C / (freq_mhz * MHZ_TO_HZ * f64::from(baseline_m)))
        .to_degrees()
        * DEG_TO_ARCSEC;
    let north_south_arcsec = if hybrid {
        east_west_arcsec
    } else {
        east_west_arcsec / declination_deg.to_radians().sin().abs()
    };
    BeamSize {
        east_west_arcsec,
        north_south_arcsec,
    }
}

/// The FWHM of an antenna's primary beam \[arcmin\].
pub fn primary_beam_fwhm_arcmin(freq_mhz: f64) -> f64 {
    (VEL_C / DISH_DIAMETER_M / (freq_mhz * MHZ_TO_HZ)).to_degrees() * DEG_TO_ARCMIN
}

/// The velocity width \[km/s\] of a bandwidth \[MHz\] at a frequency \[MHz\].
pub fn velocity_width_kms(bandwidth_mhz: f64, freq_mhz: f64) -> f64 {
    VEL_C * M_TO_KM * bandwidth_mhz / freq_mhz
}

/// The square of the wavelength at a frequency \[MHz\], in cm².
pub fn wavelength_sq_cm2(freq_mhz: f64) -> f64 {
    (VEL_C * M_TO_CM / MHZ_TO_HZ / freq_mhz).powi(2)
}
