// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! ATCA receiver bands, and selecting one for an observing frequency.

mod error;
mod tables;

pub use error::BandError;
pub use tables::ANTENNA_EFFICIENCY;

use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{constants::DEFAULT_TSYS_SCALE, table::FrequencyTable, weather::Weather};

/// The ATCA receiver bands. The iteration order is the order in which
/// frequency ranges are checked when selecting a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Band {
    #[strum(serialize = "3mm")]
    #[serde(rename = "3mm")]
    ThreeMm,

    #[strum(serialize = "7mm")]
    #[serde(rename = "7mm")]
    SevenMm,

    #[strum(serialize = "12mm")]
    #[serde(rename = "12mm")]
    TwelveMm,

    #[strum(serialize = "3cm")]
    #[serde(rename = "3cm")]
    ThreeCm,

    #[strum(serialize = "6cm")]
    #[serde(rename = "6cm")]
    SixCm,

    #[strum(serialize = "13cm")]
    #[serde(rename = "13cm")]
    ThirteenCm,

    #[strum(serialize = "20cm")]
    #[serde(rename = "20cm")]
    TwentyCm,
}

impl Band {
    /// The (inclusive) range of centre frequencies this band accepts \[MHz\].
    pub const fn frequency_range_mhz(self) -> (u32, u32) {
        match self {
            Band::ThreeMm => (83857, 104785),
            Band::SevenMm => (30000, 50000),
            Band::TwelveMm => (16000, 25000),
            Band::ThreeCm => (8501, 9499),
            Band::SixCm => (5125, 5999),
            Band::ThirteenCm => (1730, 2999),
            Band::TwentyCm => (1430, 1729),
        }
    }

    pub fn contains(self, frequency_mhz: u32) -> bool {
        let (low, high) = self.frequency_range_mhz();
        (low..=high).contains(&frequency_mhz)
    }

    /// The receiver-temperature and opacity curves for this band. Only the
    /// millimetre bands have them; the centimetre bands rely solely on
    /// measured system temperatures.
    pub fn atmosphere_tables(self) -> Option<&'static AtmosphereTables> {
        match self {
            Band::ThreeMm => Some(&tables::THREE_MM),
            Band::SevenMm => Some(&tables::SEVEN_MM),
            Band::TwelveMm => Some(&tables::TWELVE_MM),
            Band::ThreeCm | Band::SixCm | Band::ThirteenCm | Band::TwentyCm => None,
        }
    }

    /// The name of the file holding measured system temperatures for this
    /// band, if there are any. Both low-frequency bands share the 21cm
    /// measurements.
    pub fn measured_tsys_file(self) -> Option<&'static str> {
        match self {
            Band::ThreeMm => None,
            Band::SevenMm => Some("ca02_7mm.avg"),
            Band::TwelveMm => Some("12mm_recvtemps.avg"),
            Band::ThreeCm => Some("ca03_3cm_x_polarisation_run1.avg"),
            Band::SixCm => Some("ca04_6cm_x_polarisation_run1.avg"),
            Band::ThirteenCm | Band::TwentyCm => Some("ca02_21cm_x_polarisation.avg"),
        }
    }
}

/// Receiver temperature and per-weather opacity curves for a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereTables {
    /// Receiver temperature \[K\].
    pub receiver_temperature: FrequencyTable,

    /// Zenith opacity, indexed by [`Weather`].
    pub opacity: [FrequencyTable; 3],
}

impl AtmosphereTables {
    pub fn opacity(&self, weather: Weather) -> &FrequencyTable {
        &self.opacity[weather.index()]
    }
}

/// Everything band-specific needed for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandProfile {
    pub band: Band,

    /// Present when the atmosphere model is used for this band.
    pub atmosphere: Option<&'static AtmosphereTables>,

    /// System temperatures are multiplied by this factor.
    pub tsys_scale: f64,
}

impl BandProfile {
    pub fn new(band: Band) -> BandProfile {
        BandProfile {
            band,
            atmosphere: band.atmosphere_tables(),
            tsys_scale: DEFAULT_TSYS_SCALE,
        }
    }

    /// Replace the default system temperature multiplication factor.
    pub fn with_tsys_scale(self, tsys_scale: f64) -> BandProfile {
        BandProfile { tsys_scale, ..self }
    }

    pub fn use_atmosphere_model(&self) -> bool {
        self.atmosphere.is_some()
    }

    pub fn frequency_range_mhz(&self) -> (u32, u32) {
        self.band.frequency_range_mhz()
    }

    /// CA06 cannot observe at 3mm.
    pub fn allows_sixth_antenna(&self) -> bool {
        self.band != Band::ThreeMm
    }

    /// Only the millimetre bands can use the 4 GHz continuum mode.
    pub fn supports_wide_continuum(&self) -> bool {
        matches!(self.band, Band::ThreeMm | Band::SevenMm | Band::TwelveMm)
    }
}

/// Select the receiver band for a centre frequency \[MHz\].
pub fn select_band(frequency_mhz: u32) -> Result<BandProfile, BandError> {
    match Band::iter().find(|b| b.contains(frequency_mhz)) {
        Some(band) => {
            log::debug!("{frequency_mhz} MHz is in the {band} band");
            Ok(BandProfile::new(band))
        }
        None => Err(BandError::UnsupportedFrequency {
            frequency_mhz,
            valid_ranges: valid_ranges(),
        }),
    }
}

/// A human-readable list of the frequency ranges of each band, lowest
/// frequency first.
pub fn valid_ranges() -> String {
    Band::iter()
        .rev()
        .map(|b| {
            let (low, high) = b.frequency_range_mhz();
            format!("{b:>4}: {low} - {high} MHz")
        })
        .join("\n")
}
