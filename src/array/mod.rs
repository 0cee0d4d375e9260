// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Array configurations and the antennas used with them.

mod error;

pub use error::ArrayConfigurationError;

use std::str::FromStr;

use itertools::Itertools;
use serde::Serialize;
use vec1::Vec1;

use crate::{
    band::BandProfile,
    constants::{MAX_BASELINE_WITHOUT_CA06_M, MAX_BASELINE_WITH_CA06_M, NUM_ANTENNAS_WITHOUT_CA06},
};

/// Every accepted configuration name, its longest baseline \[metres\] and
/// whether it is a hybrid (north-south) array.
const CONFIGURATION_NAMES: [(&str, u32, bool); 18] = [
    ("6000", 6000, false),
    ("6km", 6000, false),
    ("3000", 3000, false),
    ("3km", 3000, false),
    ("1500", 1500, false),
    ("1.5km", 1500, false),
    ("750", 750, false),
    ("750m", 750, false),
    ("367", 367, false),
    ("EW352", 367, false),
    ("EW367", 367, false),
    ("EW352/367", 367, false),
    ("h214", 214, true),
    ("H214", 214, true),
    ("h168", 168, true),
    ("H168", 168, true),
    ("h75", 75, true),
    ("H75", 75, true),
];

/// An ATCA array configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArrayConfiguration {
    /// The nominal configuration length \[metres\]. This is the key into the
    /// weighting tables.
    pub length_m: u32,

    /// Hybrid arrays have north-south baselines, so their synthesised beam
    /// is not stretched by the declination.
    pub hybrid: bool,
}

impl Default for ArrayConfiguration {
    fn default() -> Self {
        ArrayConfiguration {
            length_m: MAX_BASELINE_WITH_CA06_M,
            hybrid: false,
        }
    }
}

impl ArrayConfiguration {
    /// All of the names that [`ArrayConfiguration::from_str`] accepts.
    pub fn valid_names() -> impl Iterator<Item = &'static str> {
        CONFIGURATION_NAMES.iter().map(|(name, _, _)| *name)
    }
}

impl FromStr for ArrayConfiguration {
    type Err = ArrayConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CONFIGURATION_NAMES
            .iter()
            .find(|(name, _, _)| *name == s)
            .map(|&(_, length_m, hybrid)| ArrayConfiguration { length_m, hybrid })
            .ok_or_else(|| ArrayConfigurationError::Unrecognised {
                got: s.to_string(),
                valid: ArrayConfiguration::valid_names().join(", "),
            })
    }
}

/// The antennas and baselines used for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AntennaSelection {
    pub num_baselines: u32,
    pub num_antennas: u32,

    /// The longest baseline available \[metres\].
    pub max_baseline_m: u32,

    /// The baseline that sets the synthesised beam of a tracked observation
    /// \[metres\].
    pub track_baseline_m: u32,

    /// Antenna numbers, starting from 1 (CA01).
    pub antennas: Vec1<usize>,
}

impl AntennaSelection {
    /// Work out which antennas are used. CA06 is only used when asked for,
    /// and never in bands that it can't observe.
    pub fn new(
        configuration: ArrayConfiguration,
        use_ca06: bool,
        profile: &BandProfile,
    ) -> AntennaSelection {
        let use_ca06 = if use_ca06 && !profile.allows_sixth_antenna() {
            log::debug!("CA06 can't observe in the {} band; excluding it", profile.band);
            false
        } else {
            use_ca06
        };

        let (num_antennas, max_baseline_m, track_baseline_m) = if use_ca06 {
            (
                NUM_ANTENNAS_WITHOUT_CA06 + 1,
                MAX_BASELINE_WITH_CA06_M,
                configuration.length_m,
            )
        } else {
            let max = if configuration.length_m == MAX_BASELINE_WITH_CA06_M {
                MAX_BASELINE_WITHOUT_CA06_M
            } else {
                configuration.length_m
            };
            (NUM_ANTENNAS_WITHOUT_CA06, max, max)
        };

        let mut antennas = Vec1::new(1);
        antennas.extend(2..=num_antennas);
        AntennaSelection {
            num_baselines: (num_antennas * (num_antennas - 1) / 2) as u32,
            num_antennas: num_antennas as u32,
            max_baseline_m,
            track_baseline_m,
            antennas,
        }
    }

    pub fn includes_ca06(&self) -> bool {
        self.num_antennas as usize > NUM_ANTENNAS_WITHOUT_CA06
    }
}
