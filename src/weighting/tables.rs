// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Noise and beam factors for each weighting scheme, measured per
//! configuration.

use super::NUM_WEIGHTING_SCHEMES;

pub(super) const NUM_CONFIGURATIONS: usize = 10;

/// The configuration lengths \[metres\] the factors are indexed by.
pub(super) const CONFIGURATION_LENGTHS: [u32; NUM_CONFIGURATIONS] =
    [75, 122, 168, 214, 367, 375, 750, 1500, 3000, 6000];

type Factors = [f64; NUM_CONFIGURATIONS];

/// Factors for every scheme, in [`super::WeightingScheme`] order.
pub(super) struct FactorSet {
    pub(super) noise: [Factors; NUM_WEIGHTING_SCHEMES],
    pub(super) beam: [Factors; NUM_WEIGHTING_SCHEMES],
}

const ONES: Factors = [1.0; NUM_CONFIGURATIONS];
const NOISE_R1: Factors = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.01, 1.01, 1.01];
const BEAM_NATURAL: Factors = [0.77, 0.95, 0.75, 0.74, 1.09, 0.97, 0.96, 0.96, 0.97, 1.32];

pub(super) static HYBRID: FactorSet = FactorSet {
    noise: [
        ONES,
        ONES,
        NOISE_R1,
        [1.37, 1.33, 1.34, 1.18, 1.22, 1.25, 1.21, 1.18, 1.16, 1.16],
        [1.63, 1.82, 2.22, 1.52, 1.63, 1.74, 1.42, 1.33, 1.23, 1.22],
        [1.63, 1.84, 2.31, 1.54, 1.65, 1.76, 1.43, 1.33, 1.24, 1.22],
        [1.63, 1.84, 2.32, 1.54, 1.65, 1.77, 1.43, 1.33, 1.24, 1.22],
        [3.43, 4.00, 1.85, 1.65, 1.80, 1.77, 1.54, 1.44, 1.33, 1.32],
    ],
    beam: [
        BEAM_NATURAL,
        BEAM_NATURAL,
        [0.76, 0.91, 0.74, 0.73, 1.00, 0.90, 0.88, 0.88, 0.89, 1.32],
        [0.58, 0.61, 0.61, 0.64, 0.68, 0.62, 0.62, 0.64, 0.66, 0.84],
        [0.53, 0.55, 0.59, 0.62, 0.64, 0.58, 0.59, 0.62, 0.64, 0.80],
        [0.53, 0.55, 0.59, 0.62, 0.64, 0.58, 0.59, 0.62, 0.64, 0.80],
        [0.53, 0.55, 0.59, 0.62, 0.64, 0.58, 0.59, 0.62, 0.64, 0.80],
        [0.52, 0.54, 0.59, 0.59, 0.61, 0.59, 0.60, 0.61, 0.63, 0.76],
    ],
};

pub(super) static STANDARD: FactorSet = FactorSet {
    noise: [
        ONES,
        ONES,
        NOISE_R1,
        [1.37, 1.33, 1.34, 1.17, 1.22, 1.25, 1.21, 1.18, 1.16, 1.16],
        [1.63, 1.82, 2.22, 1.33, 1.63, 1.74, 1.42, 1.33, 1.23, 1.22],
        [1.63, 1.84, 2.31, 1.33, 1.65, 1.76, 1.43, 1.33, 1.24, 1.22],
        [1.63, 1.84, 2.32, 1.33, 1.65, 1.77, 1.43, 1.33, 1.24, 1.22],
        [3.43, 4.00, 1.85, 1.78, 1.80, 1.77, 1.54, 1.44, 1.33, 1.32],
    ],
    beam: [
        BEAM_NATURAL,
        BEAM_NATURAL,
        [0.76, 0.91, 0.74, 0.91, 1.00, 0.90, 0.88, 0.88, 0.89, 1.32],
        [0.58, 0.61, 0.61, 0.69, 0.68, 0.62, 0.62, 0.64, 0.66, 0.84],
        [0.53, 0.55, 0.59, 0.67, 0.64, 0.58, 0.59, 0.62, 0.64, 0.80],
        [0.53, 0.55, 0.59, 0.67, 0.64, 0.58, 0.59, 0.62, 0.64, 0.80],
        [0.53, 0.55, 0.59, 0.67, 0.64, 0.58, 0.59, 0.62, 0.64, 0.80],
        [0.52, 0.54, 0.59, 0.62, 0.61, 0.59, 0.60, 0.61, 0.63, 0.76],
    ],
};
