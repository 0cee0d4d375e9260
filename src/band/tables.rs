// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Static receiver, atmosphere and antenna curves.

use super::AtmosphereTables;
use crate::table::FrequencyTable;

/// Antenna (aperture) efficiency as a function of frequency.
pub static ANTENNA_EFFICIENCY: FrequencyTable = FrequencyTable::new(
    &[
        1200.0, 1500.0, 1800.0, 2100.0, 2300.0, 2500.0, 4400.0, 5900.0, 7400.0, 8800.0, 10600.0,
        16000.0, 16500.0, 17000.0, 17500.0, 18000.0, 18500.0, 19000.0, 19500.0, 20000.0, 20500.0,
        21000.0, 21500.0, 22000.0, 22500.0, 23000.0, 23500.0, 24000.0, 24500.0, 25000.0, 25400.0,
        30000.0, 31000.0, 32000.0, 33000.0, 34000.0, 35000.0, 36000.0, 37000.0, 38000.0, 39000.0,
        40000.0, 41000.0, 42000.0, 43000.0, 44000.0, 45000.0, 46000.0, 47000.0, 48000.0, 49000.0,
        50000.0, 83781.1, 85556.2, 86834.3, 88680.5, 90526.6, 91946.7, 94005.9, 95852.1, 97272.2,
        98976.3, 100254.4, 102200.0, 102300.0, 106432.0,
    ],
    &[
        0.66, 0.69, 0.62, 0.52, 0.51, 0.53, 0.65, 0.72, 0.65, 0.64, 0.65, //
        0.58, 0.62, 0.63, 0.65, 0.67, 0.70, 0.68, 0.64, 0.64, 0.60, //
        0.53, 0.55, 0.54, 0.51, 0.51, 0.53, 0.49, 0.49, 0.46, 0.47, //
        0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, //
        0.60, 0.59, 0.58, 0.57, 0.56, 0.55, 0.54, 0.53, 0.52, 0.51, //
        0.50, 0.3297, 0.3065, 0.3020, 0.2856, 0.2689, 0.2670, 0.2734, 0.2727, 0.2521, //
        0.2403, 0.2336, 0.2322, 0.14, 0.14,
    ],
);

const THREE_MM_FREQS: &[f64] = &[
    83857.0, 85785.0, 87571.0, 89714.0, 91857.0, 95071.0, 97285.0, 99071.0, 101214.0, 102928.0,
    104785.0,
];

pub(super) static THREE_MM: AtmosphereTables = AtmosphereTables {
    receiver_temperature: FrequencyTable::new(
        THREE_MM_FREQS,
        &[
            280.0, 255.0, 220.0, 178.0, 143.0, 140.0, 150.0, 155.0, 163.0, 182.0, 192.0,
        ],
    ),
    opacity: [
        FrequencyTable::new(
            THREE_MM_FREQS,
            &[
                0.140, 0.136, 0.134, 0.133, 0.134, 0.137, 0.140, 0.145, 0.150, 0.157, 0.166,
            ],
        ),
        FrequencyTable::new(
            THREE_MM_FREQS,
            &[
                0.173, 0.171, 0.171, 0.172, 0.174, 0.180, 0.185, 0.191, 0.199, 0.208, 0.219,
            ],
        ),
        FrequencyTable::new(
            THREE_MM_FREQS,
            &[
                0.220, 0.221, 0.222, 0.226, 0.231, 0.240, 0.248, 0.257, 0.267, 0.279, 0.293,
            ],
        ),
    ],
};

const SEVEN_MM_FREQS: &[f64] = &[
    30000.0, 31000.0, 32000.0, 33000.0, 34000.0, 35000.0, 36000.0, 37000.0, 38000.0, 39000.0,
    40000.0, 41000.0, 42000.0, 43000.0, 44000.0, 45000.0, 46000.0, 47000.0, 48000.0, 49000.0,
    50000.0,
];

pub(super) static SEVEN_MM: AtmosphereTables = AtmosphereTables {
    receiver_temperature: FrequencyTable::new(
        SEVEN_MM_FREQS,
        &[
            40.0, 32.0, 32.0, 32.0, 32.0, 32.0, 32.0, 32.0, 32.0, 32.0, 32.0, 32.0, 32.0, 32.0,
            32.0, 32.0, 32.0, 32.0, 32.0, 32.0, 32.0,
        ],
    ),
    opacity: [
        FrequencyTable::new(
            SEVEN_MM_FREQS,
            &[
                0.040, 0.041, 0.042, 0.044, 0.047, 0.050, 0.053, 0.057, 0.062, 0.067, 0.073,
                0.081, 0.089, 0.100, 0.113, 0.129, 0.148, 0.174, 0.208, 0.255, 0.325,
            ],
        ),
        FrequencyTable::new(
            SEVEN_MM_FREQS,
            &[
                0.048, 0.048, 0.050, 0.052, 0.054, 0.057, 0.061, 0.065, 0.070, 0.075, 0.082,
                0.089, 0.099, 0.110, 0.123, 0.139, 0.160, 0.186, 0.221, 0.270, 0.342,
            ],
        ),
        FrequencyTable::new(
            SEVEN_MM_FREQS,
            &[
                0.059, 0.059, 0.060, 0.062, 0.065, 0.068, 0.071, 0.076, 0.081, 0.087, 0.094,
                0.101, 0.112, 0.123, 0.136, 0.153, 0.174, 0.201, 0.237, 0.286, 0.359,
            ],
        ),
    ],
};

const TWELVE_MM_FREQS: &[f64] = &[
    16000.0, 16500.0, 17000.0, 17500.0, 18000.0, 18500.0, 19000.0, 19500.0, 20000.0, 20500.0,
    21000.0, 21500.0, 22000.0, 22500.0, 23000.0, 23500.0, 24000.0, 24500.0, 25000.0, 25400.0,
];

pub(super) static TWELVE_MM: AtmosphereTables = AtmosphereTables {
    receiver_temperature: FrequencyTable::new(
        TWELVE_MM_FREQS,
        &[
            30.0, 25.9, 23.2, 22.0, 21.2, 21.4, 22.4, 22.9, 23.6, 22.6, 20.3, 19.4, 19.9, 19.2,
            19.1, 18.6, 17.8, 20.1, 22.7, 28.3,
        ],
    ),
    opacity: [
        FrequencyTable::new(
            TWELVE_MM_FREQS,
            &[
                0.017, 0.018, 0.019, 0.021, 0.023, 0.026, 0.030, 0.034, 0.040, 0.047, 0.056,
                0.064, 0.072, 0.075, 0.073, 0.068, 0.062, 0.057, 0.053, 0.049,
            ],
        ),
        FrequencyTable::new(
            TWELVE_MM_FREQS,
            &[
                0.019, 0.021, 0.023, 0.025, 0.029, 0.033, 0.037, 0.044, 0.052, 0.062, 0.074,
                0.087, 0.097, 0.101, 0.098, 0.091, 0.083, 0.075, 0.068, 0.063,
            ],
        ),
        FrequencyTable::new(
            TWELVE_MM_FREQS,
            &[
                0.023, 0.025, 0.028, 0.032, 0.036, 0.041, 0.048, 0.057, 0.069, 0.083, 0.101,
                0.119, 0.133, 0.139, 0.134, 0.124, 0.111, 0.100, 0.090, 0.082,
            ],
        ),
    ],
};
