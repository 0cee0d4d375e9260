// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tabulated curves as a function of frequency, and piecewise-linear lookups
//! into them.

mod error;

pub use error::InterpolationError;

/// An ordered table of (frequency, value) pairs. Frequencies are in MHz and
/// must be strictly increasing; this is verified by the tests for every
/// static table in this crate.
///
/// Tables are only ever built from static data. The length checks in
/// [`FrequencyTable::new`] run at compile time when used to initialise a
/// `static` or `const`, so a table whose key and value arrays disagree does
/// not build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyTable {
    freqs_mhz: &'static [f64],
    values: &'static [f64],
}

impl FrequencyTable {
    pub const fn new(freqs_mhz: &'static [f64], values: &'static [f64]) -> FrequencyTable {
        assert!(
            freqs_mhz.len() == values.len(),
            "frequency table keys and values have different lengths"
        );
        assert!(
            freqs_mhz.len() >= 2,
            "frequency tables need at least 2 points"
        );
        FrequencyTable { freqs_mhz, values }
    }

    pub fn len(&self) -> usize {
        self.freqs_mhz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs_mhz.is_empty()
    }

    pub fn freqs_mhz(&self) -> &'static [f64] {
        self.freqs_mhz
    }

    pub fn values(&self) -> &'static [f64] {
        self.values
    }

    /// The lowest and highest tabulated frequencies \[MHz\].
    pub fn domain(&self) -> (f64, f64) {
        (self.freqs_mhz[0], self.freqs_mhz[self.len() - 1])
    }

    /// Look up the value at `freq_mhz`. If `freq_mhz` is exactly a tabulated
    /// frequency, that point's value is returned untouched; otherwise the
    /// value is linearly interpolated between the two bracketing points.
    /// Frequencies outside the table are an error.
    pub fn interpolate(&self, freq_mhz: f64) -> Result<f64, InterpolationError> {
        for (f, v) in self.freqs_mhz.windows(2).zip(self.values.windows(2)) {
            if freq_mhz == f[0] {
                return Ok(v[0]);
            }
            if f[0] < freq_mhz && freq_mhz < f[1] {
                let slope = (v[1] - v[0]) / (f[1] - f[0]);
                return Ok(v[0] + slope * (freq_mhz - f[0]));
            }
        }

        let (low, high) = self.domain();
        if freq_mhz == high {
            return Ok(self.values[self.len() - 1]);
        }
        Err(InterpolationError::OutOfRange {
            freq_mhz,
            low,
            high,
        })
    }

    /// As with [`FrequencyTable::interpolate`], but frequencies outside the
    /// table take the value of the nearest endpoint.
    pub fn interpolate_clamped(&self, freq_mhz: f64) -> f64 {
        match self.interpolate(freq_mhz) {
            Ok(v) => v,
            Err(_) if freq_mhz < self.freqs_mhz[0] => self.values[0],
            Err(_) => self.values[self.len() - 1],
        }
    }
}
