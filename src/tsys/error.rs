// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::constants::{MAX_HOUR_ANGLE_LIMIT_HOURS, MIN_ELEVATION_LIMIT_DEG};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("A declination of exactly 0 degrees is only supported by hybrid arrays")]
    ZeroDeclination,

    #[error("The declination ({0} degrees) must be between -90 and 90 degrees")]
    DeclinationOutOfRange(f64),

    #[error("The integration time must be positive (got {0} minutes)")]
    NonPositiveIntegration(f64),

    #[error("The elevation limit ({0} degrees) must not be below the horizon")]
    NegativeElevationLimit(f64),

    #[error("A source at declination {declination_deg} degrees never rises above the elevation limit ({elevation_limit_deg} degrees)")]
    NeverAboveElevationLimit {
        declination_deg: f64,
        elevation_limit_deg: f64,
    },

    #[error("A source at declination {declination_deg} degrees is below the horizon at hour angle {hour_angle_hours:.2}h; is the elevation limit sensible?")]
    BelowHorizon {
        declination_deg: f64,
        hour_angle_hours: f64,
    },
}

/// Problems with the observation limits that don't stop a calculation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryWarning {
    #[error("The elevation limit ({0} degrees) should be between {MIN_ELEVATION_LIMIT_DEG} and 90 degrees")]
    ElevationLimit(f64),

    #[error("The hour-angle limit ({0} hours) should be positive and no more than {MAX_HOUR_ANGLE_LIMIT_HOURS} hours")]
    HourAngleLimit(f64),
}
