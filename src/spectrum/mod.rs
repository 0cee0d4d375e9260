// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-channel system temperatures across the observing band.


use log::{debug, trace};
use serde::Serialize;
use vec1::Vec1;

use crate::{
    band::BandProfile,
    tsys::{system_temperature, GeometryError, ObservationGeometry},
    weather::PerWeather,
};

/// A measured system temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasuredTsys {
    /// \[MHz\]
    pub freq_mhz: f64,

    /// \[K\]
    pub tsys_k: f64,
}

/// How the observing band is divided into channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelLayout {
    /// \[MHz\]
    pub centre_freq_mhz: f64,

    /// \[MHz\]
    pub bandwidth_mhz: f64,

    /// \[MHz\]
    pub channel_width_mhz: f64,
}

impl ChannelLayout {
    /// The number of whole channels that fit in the band.
    pub fn num_channels(&self) -> usize {
        (self.bandwidth_mhz / self.channel_width_mhz) as usize
    }

    /// The lowest frequency in the band \[MHz\].
    pub fn low_freq_mhz(&self) -> f64 {
        self.centre_freq_mhz - self.bandwidth_mhz / 2.0
    }

    /// The highest frequency in the band \[MHz\].
    pub fn high_freq_mhz(&self) -> f64 {
        self.centre_freq_mhz + self.bandwidth_mhz / 2.0
    }

    /// The centre frequency of channel `i_chan` \[MHz\].
    pub fn channel_freq_mhz(&self, i_chan: usize) -> f64 {
        let half = (self.num_channels() / 2) as f64;
        self.centre_freq_mhz + (i_chan as f64 - half) * self.channel_width_mhz
    }

    /// The index of the channel-wide window, counting up from the bottom of
    /// the band, that contains `freq_mhz`. Windows are closed at their lower
    /// edge and open at their upper edge.
    pub fn window_index(&self, freq_mhz: f64) -> Option<usize> {
        let offset = ((freq_mhz - self.low_freq_mhz()) / self.channel_width_mhz).floor();
        if offset >= 0.0 && offset < self.num_channels() as f64 {
            Some(offset as usize)
        } else {
            None
        }
    }
}

/// The system temperature of a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Channel {
    /// \[MHz\]
    pub freq_mhz: f64,

    /// The number of measurements that contributed to this channel. This is
    /// 0 for channels that come purely from the atmosphere model.
    pub num_samples: usize,

    /// The system temperature for each weather state \[K\]. `None` means that
    /// there was nothing to derive a value from; such channels must not be
    /// averaged in as zero.
    pub tsys_k: Option<PerWeather<f64>>,
}

/// The channels for a single antenna.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AntennaSpectrum {
    /// The antenna number, e.g. 1 for CA01.
    pub antenna: usize,
    pub channels: Vec<Channel>,
}

/// The per-antenna, per-channel system temperatures of an observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSpectrum {
    pub layout: ChannelLayout,
    pub antennas: Vec1<AntennaSpectrum>,
}

impl ChannelSpectrum {
    /// Every channel of every antenna.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.antennas.iter().flat_map(|a| a.channels.iter())
    }
}

/// How an antenna's system temperatures relate to those derived for the
/// array as a whole.
pub trait AntennaModel {
    fn channels_for(&self, antenna: usize, derived: &[Channel]) -> Vec<Channel>;
}

/// All antennas are assumed to behave identically, so every antenna gets a
/// copy of the derived channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedAntennaModel;

impl AntennaModel for SharedAntennaModel {
    fn channels_for(&self, _antenna: usize, derived: &[Channel]) -> Vec<Channel> {
        derived.to_vec()
    }
}

/// Build the channel spectrum with every antenna sharing the same system
/// temperatures.
pub fn build_spectrum(
    profile: &BandProfile,
    layout: &ChannelLayout,
    geometry: &ObservationGeometry,
    measured: Option<&[MeasuredTsys]>,
    antennas: &Vec1<usize>,
) -> Result<ChannelSpectrum, GeometryError> {
    build_spectrum_with_model(
        profile,
        layout,
        geometry,
        measured,
        antennas,
        &SharedAntennaModel,
    )
}

/// Build the channel spectrum.
///
/// If measurements are supplied, each channel is the average of the
/// measurements that fall inside it; with the atmosphere model, each
/// measurement is treated as a receiver temperature and put through the
/// atmosphere first. Without measurements, the atmosphere model is applied to
/// the band's tabulated receiver temperatures. Bands without either produce
/// channels with no data.
pub fn build_spectrum_with_model(
    profile: &BandProfile,
    layout: &ChannelLayout,
    geometry: &ObservationGeometry,
    measured: Option<&[MeasuredTsys]>,
    antennas: &Vec1<usize>,
    model: &dyn AntennaModel,
) -> Result<ChannelSpectrum, GeometryError> {
    let num_channels = layout.num_channels();
    debug!(
        "Building a {num_channels} channel spectrum ({} measurements, atmosphere model: {})",
        measured.map(|m| m.len()).unwrap_or(0),
        profile.use_atmosphere_model()
    );

    let derived = (0..num_channels)
        .map(|i_chan| {
            let freq_mhz = layout.channel_freq_mhz(i_chan);
            match measured {
                Some(measured) => binned_channel(profile, layout, geometry, measured, freq_mhz),
                None => modelled_channel(profile, geometry, freq_mhz),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    trace!(
        "{} of {num_channels} channels have data",
        derived.iter().filter(|c| c.tsys_k.is_some()).count()
    );

    let antennas = antennas.mapped_ref(|&antenna| AntennaSpectrum {
        antenna,
        channels: model.channels_for(antenna, &derived),
    });
    Ok(ChannelSpectrum {
        layout: *layout,
        antennas,
    })
}

fn binned_channel(
    profile: &BandProfile,
    layout: &ChannelLayout,
    geometry: &ObservationGeometry,
    measured: &[MeasuredTsys],
    freq_mhz: f64,
) -> Result<Channel, GeometryError> {
    let half_width = layout.channel_width_mhz / 2.0;
    let low = freq_mhz - half_width;
    let high = freq_mhz + half_width;

    // The opacities only depend on the channel, not the measurement.
    let opacities = profile
        .atmosphere
        .map(|a| PerWeather::from_fn(|w| a.opacity(w).interpolate_clamped(freq_mhz)));

    let mut sum = PerWeather::splat(0.0);
    let mut num_samples = 0;
    for m in measured.iter().filter(|m| m.freq_mhz >= low && m.freq_mhz < high) {
        let tsys = match opacities {
            Some(tau) => PerWeather::try_from_fn(|w| {
                system_temperature(geometry, m.tsys_k, tau[w]).map(|t| profile.tsys_scale * t)
            })?,
            None => PerWeather::splat(profile.tsys_scale * m.tsys_k),
        };
        for (w, t) in tsys.iter() {
            sum[w] += t;
        }
        num_samples += 1;
    }

    Ok(Channel {
        freq_mhz,
        num_samples,
        tsys_k: (num_samples > 0).then(|| sum.map(|s| s / num_samples as f64)),
    })
}

fn modelled_channel(
    profile: &BandProfile,
    geometry: &ObservationGeometry,
    freq_mhz: f64,
) -> Result<Channel, GeometryError> {
    let tsys_k = match profile.atmosphere {
        Some(a) => {
            let receiver_temp = a.receiver_temperature.interpolate_clamped(freq_mhz);
            Some(PerWeather::try_from_fn(|w| {
                let tau = a.opacity(w).interpolate_clamped(freq_mhz);
                system_temperature(geometry, receiver_temp, tau).map(|t| profile.tsys_scale * t)
            })?)
        }
        None => None,
    };
    Ok(Channel {
        freq_mhz,
        num_samples: 0,
        tsys_k,
    })
}
