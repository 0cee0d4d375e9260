// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turn a channel spectrum of system temperatures into sensitivities.

mod equations;
mod error;

pub use equations::*;
pub use error::SensitivityError;

use log::{debug, warn};
use serde::Serialize;

use crate::{
    constants::NUM_ZOOM_CHANNELS,
    params::SensitivityParams,
    spectrum::ChannelSpectrum,
    weather::{PerWeather, Weather},
};

/// A value for each of the bandwidths the correlator provides.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BandwidthValues {
    /// Over the whole band.
    pub continuum: f64,

    /// Over a single continuum channel.
    pub spectral: f64,

    /// Over a single zoom channel.
    pub zoom: f64,
}

/// The sensitivity of the array in one weather state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WeatherSensitivity {
    /// \[K\]
    pub system_temperature_k: f64,

    /// \[Jy\]
    pub antenna_sensitivity_jy: f64,

    /// \[Jy\]
    pub array_sensitivity_jy: f64,

    /// \[mJy/beam\]
    pub rms_mjy: BandwidthValues,

    /// \[K\]
    pub brightness_temperature_k: BandwidthValues,
}

/// Results for a zoom band placed at a particular frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpecificZoom {
    /// \[MHz\]
    pub freq_mhz: f64,

    pub beam: BeamSize,

    /// \[km/s\]
    pub velocity_resolution_kms: f64,

    /// \[K\]
    pub system_temperature_k: PerWeather<f64>,

    /// \[mJy/beam\]
    pub rms_mjy: PerWeather<f64>,

    /// \[K\]
    pub brightness_temperature_k: PerWeather<f64>,
}

/// The RMS noise in a single continuum channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelRms {
    /// The low edge of the channel \[MHz\].
    pub freq_mhz: f64,

    /// \[mJy/beam\]
    pub rms_mjy: PerWeather<f64>,
}

/// Quantities that follow directly from the observation setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedQuantities {
    /// The antenna efficiency at the centre frequency.
    pub efficiency: f64,

    pub primary_beam_fwhm_arcmin: f64,

    pub bandwidth_mhz: f64,
    pub num_channels: usize,
    pub channel_width_mhz: f64,
    pub num_zoom_channels: u32,
    pub zoom_channel_width_mhz: f64,

    /// The velocity span of the whole band \[km/s\].
    pub velocity_width_kms: f64,

    /// \[km/s\]
    pub velocity_resolution_kms: f64,

    /// \[km/s\]
    pub zoom_velocity_resolution_kms: f64,

    /// \[cm²\]
    pub wavelength_sq_cm2: f64,
}

impl DerivedQuantities {
    pub fn new(params: &SensitivityParams) -> DerivedQuantities {
        let freq = f64::from(params.centre_freq_mhz);
        let layout = &params.layout;
        let zoom_channel_width_mhz = params.correlator.zoom_channel_width_mhz();
        DerivedQuantities {
            efficiency: params.efficiency,
            primary_beam_fwhm_arcmin: primary_beam_fwhm_arcmin(freq),
            bandwidth_mhz: layout.bandwidth_mhz,
            num_channels: layout.num_channels(),
            channel_width_mhz: layout.channel_width_mhz,
            num_zoom_channels: NUM_ZOOM_CHANNELS,
            zoom_channel_width_mhz,
            velocity_width_kms: velocity_width_kms(layout.bandwidth_mhz, freq),
            velocity_resolution_kms: velocity_width_kms(layout.channel_width_mhz, freq),
            zoom_velocity_resolution_kms: velocity_width_kms(zoom_channel_width_mhz, freq),
            wavelength_sq_cm2: wavelength_sq_cm2(freq),
        }
    }
}

/// Everything calculated for an observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityResult {
    pub weather: PerWeather<WeatherSensitivity>,

    /// The synthesised beam with the tracked baseline.
    pub beam: BeamSize,

    /// The synthesised beam with the longest baseline, if that isn't the
    /// tracked baseline.
    pub best_beam: Option<BeamSize>,

    pub specific_zoom: Option<SpecificZoom>,

    /// Only channels with data are included.
    pub channel_rms: Vec<ChannelRms>,

    pub derived: DerivedQuantities,

    /// Without the atmosphere model, every weather state has the same
    /// system temperature.
    pub atmosphere_model: bool,
}

impl SensitivityResult {
    /// The weather states worth showing.
    pub fn reported_weather(&self) -> &'static [Weather] {
        if self.atmosphere_model {
            &Weather::ALL
        } else {
            &[Weather::Good]
        }
    }
}

/// System temperatures summed over the spectrum channels falling in one
/// continuum-channel-wide window.
#[derive(Debug, Clone, Copy, Default)]
struct Window {
    sum: PerWeather<f64>,
    count: usize,
}

impl Window {
    fn mean(&self) -> Option<PerWeather<f64>> {
        (self.count > 0).then(|| self.sum.map(|s| s / self.count as f64))
    }
}

/// Average the spectrum into continuum channels and work out the
/// sensitivities.
pub fn aggregate(
    spectrum: &ChannelSpectrum,
    params: &SensitivityParams,
) -> Result<SensitivityResult, SensitivityError> {
    let layout = &params.layout;
    let mut windows = vec![Window::default(); layout.num_channels()];
    for channel in spectrum.channels() {
        let (Some(tsys), Some(i_window)) = (channel.tsys_k, layout.window_index(channel.freq_mhz))
        else {
            continue;
        };
        let window = &mut windows[i_window];
        for (w, t) in tsys.iter() {
            window.sum[w] += t;
        }
        window.count += 1;
    }

    let noise_inputs = params.noise_inputs();
    let mut channel_rms = vec![];
    let mut tsys_sum = PerWeather::splat(0.0);
    for (i_window, window) in windows.iter().enumerate() {
        let Some(mean) = window.mean() else { continue };
        if mean[Weather::Good] <= 0.0 {
            continue;
        }
        for (w, t) in mean.iter() {
            tsys_sum[w] += t;
        }
        channel_rms.push(ChannelRms {
            freq_mhz: layout.low_freq_mhz() + i_window as f64 * layout.channel_width_mhz,
            rms_mjy: mean.map(|&t| rms_noise_mjy(&noise_inputs, t, layout.channel_width_mhz)),
        });
    }
    if channel_rms.is_empty() {
        return Err(SensitivityError::NoChannelData {
            band: params.profile.band,
            centre_freq_mhz: layout.centre_freq_mhz,
            bandwidth_mhz: layout.bandwidth_mhz,
        });
    }
    let tsys = tsys_sum.map(|s| s / channel_rms.len() as f64);
    debug!(
        "{} of {} channels have data; Tsys {:?}",
        channel_rms.len(),
        windows.len(),
        tsys.0
    );

    let derived = DerivedQuantities::new(params);
    let freq = f64::from(params.centre_freq_mhz);
    let dec = params.geometry.declination_deg;
    let hybrid = params.configuration.hybrid;
    let beam_factor = params.weights.beam_factor;
    let beam = synthesised_beam(
        freq,
        params.antennas.track_baseline_m,
        beam_factor,
        dec,
        hybrid,
    );
    let best_beam = (params.antennas.max_baseline_m != params.antennas.track_baseline_m).then(|| {
        synthesised_beam(
            freq,
            params.antennas.max_baseline_m,
            beam_factor,
            dec,
            hybrid,
        )
    });

    let weather = tsys.map(|&t| {
        let rms_mjy = BandwidthValues {
            continuum: rms_noise_mjy(&noise_inputs, t, layout.bandwidth_mhz),
            spectral: rms_noise_mjy(&noise_inputs, t, layout.channel_width_mhz),
            zoom: rms_noise_mjy(&noise_inputs, t, derived.zoom_channel_width_mhz),
        };
        let bt = |rms| brightness_temperature_k(rms, derived.wavelength_sq_cm2, &beam);
        WeatherSensitivity {
            system_temperature_k: t,
            antenna_sensitivity_jy: antenna_sensitivity_jy(t, params.efficiency),
            array_sensitivity_jy: array_sensitivity_jy(
                t,
                params.efficiency,
                params.antennas.num_antennas,
            ),
            rms_mjy,
            brightness_temperature_k: BandwidthValues {
                continuum: bt(rms_mjy.continuum),
                spectral: bt(rms_mjy.spectral),
                zoom: bt(rms_mjy.zoom),
            },
        }
    });

    let specific_zoom = params.zoom_freq_mhz.and_then(|zoom_freq| {
        let zoom_tsys = layout
            .window_index(zoom_freq)
            .and_then(|i| windows[i].mean());
        let Some(zoom_tsys) = zoom_tsys else {
            warn!("There are no system temperatures around the zoom frequency {zoom_freq} MHz; not reporting on it");
            return None;
        };

        let beam = synthesised_beam(
            zoom_freq,
            params.antennas.track_baseline_m,
            beam_factor,
            dec,
            hybrid,
        );
        let rms_mjy =
            zoom_tsys.map(|&t| rms_noise_mjy(&noise_inputs, t, derived.zoom_channel_width_mhz));
        // The wavelength stays at the centre frequency.
        let brightness_temperature_k =
            rms_mjy.map(|&rms| brightness_temperature_k(rms, derived.wavelength_sq_cm2, &beam));
        Some(SpecificZoom {
            freq_mhz: zoom_freq,
            beam,
            velocity_resolution_kms: velocity_width_kms(derived.zoom_channel_width_mhz, zoom_freq),
            system_temperature_k: zoom_tsys,
            rms_mjy,
            brightness_temperature_k,
        })
    });

    Ok(SensitivityResult {
        weather,
        beam,
        best_beam,
        specific_zoom,
        channel_rms,
        derived,
        atmosphere_model: params.profile.use_atmosphere_model(),
    })
}
