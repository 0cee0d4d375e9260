// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters for a sensitivity calculation.
//!
//! The code here is kind of "mirroring" the code within the `cli` module; the
//! idea is that `cli` is unparsed, user-facing code, whereas parameters have
//! been checked and are ready to be used directly.


use log::debug;
use serde::Serialize;

use crate::{
    array::{AntennaSelection, ArrayConfiguration},
    band::{select_band, BandProfile, ANTENNA_EFFICIENCY},
    constants::{
        DEFAULT_DEC_DEG, DEFAULT_ELEVATION_LIMIT_DEG, DEFAULT_HOUR_ANGLE_LIMIT_HOURS,
        DEFAULT_INTEGRATION_MIN,
    },
    correlator::CorrelatorMode,
    sensitivity::{aggregate, NoiseInputs, SensitivityError, SensitivityResult},
    spectrum::{build_spectrum, ChannelLayout, MeasuredTsys},
    tsys::{GeometryError, GeometryWarning, ObservationGeometry},
    weighting::{configuration_weights, ConfigurationWeights, WeightingScheme},
};

/// What is to be observed and how, as given by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSpec {
    /// \[MHz\]
    pub frequency_mhz: u32,

    pub configuration: ArrayConfiguration,

    /// \[degrees\]
    pub declination_deg: f64,

    pub use_ca06: bool,

    /// Time on source \[minutes\].
    pub integration_min: f64,

    /// \[degrees\]
    pub elevation_limit_deg: f64,

    /// \[hours\]
    pub hour_angle_limit_hours: f64,

    pub correlator: CorrelatorMode,
    pub weighting: WeightingScheme,

    /// Replaces the band's default system temperature multiplication factor.
    pub tsys_scale: Option<f64>,

    /// Use two 2 GHz continuum bands.
    pub wide_continuum: bool,

    /// Put a zoom band at this frequency \[MHz\].
    pub zoom_freq_mhz: Option<f64>,
}

impl ObservationSpec {
    /// An observation at `frequency_mhz` with everything else at its
    /// default.
    pub fn new(frequency_mhz: u32) -> ObservationSpec {
        ObservationSpec {
            frequency_mhz,
            configuration: ArrayConfiguration::default(),
            declination_deg: DEFAULT_DEC_DEG,
            use_ca06: false,
            integration_min: DEFAULT_INTEGRATION_MIN,
            elevation_limit_deg: DEFAULT_ELEVATION_LIMIT_DEG,
            hour_angle_limit_hours: DEFAULT_HOUR_ANGLE_LIMIT_HOURS,
            correlator: CorrelatorMode::default(),
            weighting: WeightingScheme::default(),
            tsys_scale: None,
            wide_continuum: false,
            zoom_freq_mhz: None,
        }
    }

    /// Check everything and work out the parameters for the calculation.
    pub fn into_params(self) -> Result<SensitivityParams, SensitivityError> {
        let mut profile = select_band(self.frequency_mhz)?;
        if let Some(tsys_scale) = self.tsys_scale {
            if tsys_scale <= 0.0 || !tsys_scale.is_finite() {
                return Err(SensitivityError::NonPositiveTsysScale(tsys_scale));
            }
            profile = profile.with_tsys_scale(tsys_scale);
        }
        let antennas = AntennaSelection::new(self.configuration, self.use_ca06, &profile);

        if self.declination_deg == 0.0 && !self.configuration.hybrid {
            return Err(GeometryError::ZeroDeclination.into());
        }
        if !(-90.0..=90.0).contains(&self.declination_deg) {
            return Err(GeometryError::DeclinationOutOfRange(self.declination_deg).into());
        }
        if self.integration_min <= 0.0 || self.integration_min.is_nan() {
            return Err(GeometryError::NonPositiveIntegration(self.integration_min).into());
        }
        // Below the horizon there's no elevation to integrate over.
        if self.elevation_limit_deg < 0.0 || self.elevation_limit_deg.is_nan() {
            return Err(GeometryError::NegativeElevationLimit(self.elevation_limit_deg).into());
        }
        let geometry = ObservationGeometry::new(
            self.declination_deg,
            self.hour_angle_limit_hours,
            self.elevation_limit_deg,
        );
        let warnings = geometry.check_limits();
        for w in &warnings {
            debug!("{w}");
        }
        // Every band needs the source to be visible, not just those using the
        // atmosphere model.
        let usable_ha = geometry.usable_hour_angle_hours()?;
        debug!("The source is tracked out to an hour angle of {usable_ha:.2}h");

        let weights = configuration_weights(self.configuration, self.weighting)?;
        let efficiency = ANTENNA_EFFICIENCY
            .interpolate(f64::from(self.frequency_mhz))
            .map_err(|err| SensitivityError::Efficiency {
                freq_mhz: self.frequency_mhz,
                err,
            })?;

        let wide_continuum = self.wide_continuum && profile.supports_wide_continuum();
        if self.wide_continuum && !wide_continuum {
            debug!(
                "The {} band doesn't support the 4 GHz continuum mode; using 2 GHz",
                profile.band
            );
        }
        let layout = self
            .correlator
            .layout(f64::from(self.frequency_mhz), wide_continuum);

        let zoom_freq_mhz = self.zoom_freq_mhz.filter(|&f| {
            let in_band = f >= layout.low_freq_mhz() && f <= layout.high_freq_mhz();
            if !in_band {
                debug!("The zoom frequency {f} MHz is outside the observing band; ignoring it");
            }
            in_band
        });

        Ok(SensitivityParams {
            profile,
            centre_freq_mhz: self.frequency_mhz,
            configuration: self.configuration,
            antennas,
            geometry,
            warnings,
            integration_min: self.integration_min,
            correlator: self.correlator,
            wide_continuum,
            layout,
            weighting: self.weighting,
            weights,
            efficiency,
            zoom_freq_mhz,
        })
    }
}

/// Checked parameters for a sensitivity calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityParams {
    #[serde(skip)]
    pub profile: BandProfile,

    /// \[MHz\]
    pub centre_freq_mhz: u32,

    pub configuration: ArrayConfiguration,
    pub antennas: AntennaSelection,
    pub geometry: ObservationGeometry,

    /// Odd observation limits that were accepted anyway.
    #[serde(skip)]
    pub warnings: Vec<GeometryWarning>,

    /// \[minutes\]
    pub integration_min: f64,

    pub correlator: CorrelatorMode,

    /// Whether the 4 GHz continuum mode is actually used; only some bands
    /// support it.
    pub wide_continuum: bool,

    pub layout: ChannelLayout,
    pub weighting: WeightingScheme,
    pub weights: ConfigurationWeights,

    /// The antenna efficiency at the centre frequency.
    pub efficiency: f64,

    /// Only set if the requested zoom frequency is inside the band \[MHz\].
    pub zoom_freq_mhz: Option<f64>,
}

impl SensitivityParams {
    pub(crate) fn noise_inputs(&self) -> NoiseInputs {
        NoiseInputs {
            noise_factor: self.weights.noise_factor,
            efficiency: self.efficiency,
            integration_min: self.integration_min,
            num_baselines: self.antennas.num_baselines,
        }
    }

    /// Do the calculation. `measured` holds the measured system temperatures
    /// for the band, if there are any.
    pub fn run(
        &self,
        measured: Option<&[MeasuredTsys]>,
    ) -> Result<SensitivityResult, SensitivityError> {
        debug!(
            "Calculating the sensitivity at {} MHz in the {} band",
            self.centre_freq_mhz, self.profile.band
        );
        let spectrum = build_spectrum(
            &self.profile,
            &self.layout,
            &self.geometry,
            measured,
            &self.antennas.antennas,
        )?;
        aggregate(&spectrum, self)
    }
}
