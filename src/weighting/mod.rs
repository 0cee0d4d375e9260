// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Imaging weighting schemes and how they change the noise and the
//! synthesised beam.

mod error;
mod tables;

pub use error::WeightingError;

use std::str::FromStr;

use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::array::ArrayConfiguration;
use tables::{CONFIGURATION_LENGTHS, HYBRID, STANDARD};

pub(crate) const NUM_WEIGHTING_SCHEMES: usize = <WeightingScheme as strum::EnumCount>::COUNT;

/// Imaging weighting schemes, named by their short codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    EnumCount,
    Serialize,
)]
pub enum WeightingScheme {
    #[default]
    #[strum(serialize = "N")]
    #[serde(rename = "N")]
    Natural,

    #[strum(serialize = "R2")]
    #[serde(rename = "R2")]
    Robust2,

    #[strum(serialize = "R1")]
    #[serde(rename = "R1")]
    Robust1,

    #[strum(serialize = "R0")]
    #[serde(rename = "R0")]
    Robust0,

    #[strum(serialize = "R-1")]
    #[serde(rename = "R-1")]
    RobustMinus1,

    #[strum(serialize = "R-2")]
    #[serde(rename = "R-2")]
    RobustMinus2,

    #[strum(serialize = "U")]
    #[serde(rename = "U")]
    Uniform,

    #[strum(serialize = "SU")]
    #[serde(rename = "SU")]
    Superuniform,
}

impl WeightingScheme {
    pub fn description(self) -> &'static str {
        match self {
            WeightingScheme::Natural => "Natural",
            WeightingScheme::Robust2 => "Robust=2",
            WeightingScheme::Robust1 => "Robust=1",
            WeightingScheme::Robust0 => "Robust=0",
            WeightingScheme::RobustMinus1 => "Robust=-1",
            WeightingScheme::RobustMinus2 => "Robust=-2",
            WeightingScheme::Uniform => "Uniform",
            WeightingScheme::Superuniform => "Superuniform",
        }
    }

    /// Parse a weighting code, with an error listing the valid codes.
    pub fn parse(s: &str) -> Result<WeightingScheme, WeightingError> {
        WeightingScheme::from_str(s).map_err(|_| WeightingError::UnknownScheme {
            got: s.to_string(),
            valid: WeightingScheme::iter().join(", "),
        })
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// How a weighting scheme changes the noise and the beam relative to natural
/// weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfigurationWeights {
    /// The RMS noise is multiplied by this.
    pub noise_factor: f64,

    /// The synthesised beam size is multiplied by this.
    pub beam_factor: f64,
}

/// Look up the weighting factors for a configuration. Hybrid arrays have
/// their own factors.
pub fn configuration_weights(
    configuration: ArrayConfiguration,
    scheme: WeightingScheme,
) -> Result<ConfigurationWeights, WeightingError> {
    let i_config = CONFIGURATION_LENGTHS
        .iter()
        .position(|&l| l == configuration.length_m)
        .ok_or(WeightingError::UnknownConfiguration {
            length_m: configuration.length_m,
        })?;
    let set = if configuration.hybrid {
        &HYBRID
    } else {
        &STANDARD
    };

    let weights = ConfigurationWeights {
        noise_factor: set.noise[scheme.index()][i_config],
        beam_factor: set.beam[scheme.index()][i_config],
    };
    log::trace!(
        "{} weighting for a {} m configuration: {weights:?}",
        scheme.description(),
        configuration.length_m
    );
    Ok(weights)
}
