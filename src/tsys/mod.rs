// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The system-temperature model. The atmosphere's contribution to the system
//! temperature depends on the elevation of the source, so it is integrated
//! over the hour-angle range of the observation.

mod error;
#[cfg(test)]
mod tests;

pub use error::{GeometryError, GeometryWarning};

use serde::Serialize;

use crate::constants::{
    ATCA_LAT_DEG, ATMOSPHERE_TEMPERATURE_K, CMB_TEMPERATURE_K, MAX_HOUR_ANGLE_LIMIT_HOURS,
    MIN_ELEVATION_LIMIT_DEG, NUM_HOUR_ANGLE_SAMPLES,
};

/// Where the source is, and the limits on how it is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObservationGeometry {
    /// \[degrees\]
    pub declination_deg: f64,

    /// The source is observed from transit out to this hour angle \[hours\].
    pub hour_angle_limit_hours: f64,

    /// The source is not observed below this elevation \[degrees\].
    pub elevation_limit_deg: f64,

    /// The latitude of the array \[degrees\].
    pub latitude_deg: f64,
}

impl ObservationGeometry {
    pub fn new(
        declination_deg: f64,
        hour_angle_limit_hours: f64,
        elevation_limit_deg: f64,
    ) -> ObservationGeometry {
        ObservationGeometry {
            declination_deg,
            hour_angle_limit_hours,
            elevation_limit_deg,
            latitude_deg: ATCA_LAT_DEG,
        }
    }

    /// Check the elevation and hour-angle limits. Odd limits don't stop a
    /// calculation, so these are only warnings.
    pub fn check_limits(&self) -> Vec<GeometryWarning> {
        let mut warnings = vec![];
        if !(MIN_ELEVATION_LIMIT_DEG..=90.0).contains(&self.elevation_limit_deg) {
            warnings.push(GeometryWarning::ElevationLimit(self.elevation_limit_deg));
        }
        if self.hour_angle_limit_hours <= 0.0
            || self.hour_angle_limit_hours > MAX_HOUR_ANGLE_LIMIT_HOURS
        {
            warnings.push(GeometryWarning::HourAngleLimit(self.hour_angle_limit_hours));
        }
        warnings
    }

    /// The sine of the source's elevation at an hour angle \[radians\].
    pub fn sin_elevation(&self, hour_angle_rad: f64) -> f64 {
        let (sin_lat, cos_lat) = self.latitude_deg.to_radians().sin_cos();
        let (sin_dec, cos_dec) = self.declination_deg.to_radians().sin_cos();
        sin_lat * sin_dec + cos_lat * cos_dec * hour_angle_rad.cos()
    }

    /// The hour angle up to which the source is actually observed \[hours\].
    /// This is the hour-angle limit, unless the source sets below the
    /// elevation limit first.
    pub fn usable_hour_angle_hours(&self) -> Result<f64, GeometryError> {
        let (sin_lat, cos_lat) = self.latitude_deg.to_radians().sin_cos();
        let (sin_dec, cos_dec) = self.declination_deg.to_radians().sin_cos();
        let sin_el_limit = self.elevation_limit_deg.to_radians().sin();

        let cos_ha_at_limit = (sin_el_limit - sin_dec * sin_lat) / (cos_dec * cos_lat);
        if cos_ha_at_limit > 1.0 {
            // Even at transit the source is below the elevation limit.
            return Err(GeometryError::NeverAboveElevationLimit {
                declination_deg: self.declination_deg,
                elevation_limit_deg: self.elevation_limit_deg,
            });
        }
        if cos_ha_at_limit < -1.0 {
            // The source never drops below the elevation limit.
            return Ok(self.hour_angle_limit_hours);
        }

        let ha_at_limit_hours = cos_ha_at_limit.acos().to_degrees() / 15.0;
        Ok(ha_at_limit_hours.min(self.hour_angle_limit_hours))
    }
}

/// The instantaneous system temperature \[K\] for a receiver temperature
/// \[K\] and zenith opacity, looking through the atmosphere at an elevation
/// whose sine is `sin_el` (TMS equation 13.119).
pub fn instantaneous_system_temperature(receiver_temp_k: f64, opacity: f64, sin_el: f64) -> f64 {
    let transmission = (-opacity / sin_el).exp();
    receiver_temp_k
        + ATMOSPHERE_TEMPERATURE_K * (1.0 - transmission)
        + CMB_TEMPERATURE_K * transmission
}

/// The system temperature \[K\] of an observation, averaged over the hour
/// angles the source is tracked.
///
/// The hour-angle range is sampled [`NUM_HOUR_ANGLE_SAMPLES`] times. The
/// samples are combined both as a plain time average and as a natural
/// (inverse-square) weighted average; the result is the mean of these two.
pub fn system_temperature(
    geometry: &ObservationGeometry,
    receiver_temp_k: f64,
    opacity: f64,
) -> Result<f64, GeometryError> {
    let max_ha_rad = geometry.usable_hour_angle_hours()? * std::f64::consts::PI / 12.0;

    let mut uniform = 0.0;
    let mut natural = 0.0;
    for i in 0..NUM_HOUR_ANGLE_SAMPLES {
        let ha = max_ha_rad * i as f64 / NUM_HOUR_ANGLE_SAMPLES as f64;
        let sin_el = geometry.sin_elevation(ha);
        if sin_el <= 0.0 {
            return Err(GeometryError::BelowHorizon {
                declination_deg: geometry.declination_deg,
                hour_angle_hours: ha * 12.0 / std::f64::consts::PI,
            });
        }

        let tsys = instantaneous_system_temperature(receiver_temp_k, opacity, sin_el);
        uniform += tsys;
        natural += 1.0 / (tsys * tsys);
    }
    let n = NUM_HOUR_ANGLE_SAMPLES as f64;
    let uniform = uniform / n;
    let natural = 1.0 / (natural / n).sqrt();

    Ok(0.5 * (uniform + natural))
}
