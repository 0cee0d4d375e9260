// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! CABB correlator presets.


use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    constants::{CONTINUUM_BANDWIDTH_MHZ, NUM_ZOOM_CHANNELS},
    spectrum::ChannelLayout,
};

/// The continuum channel widths the correlator can be configured with.
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
    Serialize,
    Deserialize,
)]
pub enum CorrelatorMode {
    #[default]
    CFB1M,
    CFB4M,
    CFB16M,
    CFB64M,
}

impl CorrelatorMode {
    /// The continuum channel width \[MHz\].
    pub fn channel_width_mhz(self) -> f64 {
        match self {
            CorrelatorMode::CFB1M => 1.0,
            CorrelatorMode::CFB4M => 4.0,
            CorrelatorMode::CFB16M => 16.0,
            CorrelatorMode::CFB64M => 64.0,
        }
    }

    /// The number of continuum channels across a single 2 GHz band.
    pub fn num_channels(self) -> u32 {
        (CONTINUUM_BANDWIDTH_MHZ / self.channel_width_mhz()) as u32
    }

    /// The name of the mode along with the zoom resolution it gives.
    pub fn description(self) -> &'static str {
        match self {
            CorrelatorMode::CFB1M => "CFB1M-0.5k",
            CorrelatorMode::CFB4M => "CFB4M-2k",
            CorrelatorMode::CFB16M => "CFB16M-8k",
            CorrelatorMode::CFB64M => "CFB64M-32k",
        }
    }

    /// The channel layout of an observation centred at `centre_freq_mhz`.
    /// The 4 GHz wide-continuum mode puts two continuum bands side by side.
    pub fn layout(self, centre_freq_mhz: f64, wide_continuum: bool) -> ChannelLayout {
        let num_bands = if wide_continuum { 2.0 } else { 1.0 };
        ChannelLayout {
            centre_freq_mhz,
            bandwidth_mhz: num_bands * CONTINUUM_BANDWIDTH_MHZ,
            channel_width_mhz: self.channel_width_mhz(),
        }
    }

    /// The width of a single zoom channel \[MHz\].
    pub fn zoom_channel_width_mhz(self) -> f64 {
        self.channel_width_mhz() / NUM_ZOOM_CHANNELS as f64
    }
}
