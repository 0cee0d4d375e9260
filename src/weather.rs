// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Weather states and per-weather values.

use std::ops::{Index, IndexMut};

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// The number of weather states every calculation is done for.
pub const NUM_WEATHER_STATES: usize = 3;

/// Atmospheric conditions. Each has its own opacity curve in the bands that
/// use the atmosphere model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Weather {
    Good = 0,
    Average = 1,
    Poor = 2,
}

impl Weather {
    pub const ALL: [Weather; NUM_WEATHER_STATES] = [Weather::Good, Weather::Average, Weather::Poor];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One value for each [`Weather`] state, indexed good, average, poor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PerWeather<T>(pub [T; NUM_WEATHER_STATES]);

impl<T> PerWeather<T> {
    pub fn from_fn<F: FnMut(Weather) -> T>(mut f: F) -> PerWeather<T> {
        PerWeather([
            f(Weather::Good),
            f(Weather::Average),
            f(Weather::Poor),
        ])
    }

    pub fn try_from_fn<E, F: FnMut(Weather) -> Result<T, E>>(mut f: F) -> Result<PerWeather<T>, E> {
        Ok(PerWeather([
            f(Weather::Good)?,
            f(Weather::Average)?,
            f(Weather::Poor)?,
        ]))
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> PerWeather<U> {
        PerWeather::from_fn(|w| f(&self[w]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weather, &T)> {
        Weather::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Copy> PerWeather<T> {
    /// The same value for every weather state.
    pub fn splat(value: T) -> PerWeather<T> {
        PerWeather([value; NUM_WEATHER_STATES])
    }
}

impl<T> Index<Weather> for PerWeather<T> {
    type Output = T;

    fn index(&self, weather: Weather) -> &T {
        &self.0[weather.index()]
    }
}

impl<T> IndexMut<Weather> for PerWeather<T> {
    fn index_mut(&mut self, weather: Weather) -> &mut T {
        &mut self.0[weather.index()]
    }
}
