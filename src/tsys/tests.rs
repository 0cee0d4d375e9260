// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use super::*;

fn geometry(dec: f64) -> ObservationGeometry {
    ObservationGeometry::new(dec, 6.0, 12.0)
}

#[test]
fn test_instantaneous_tsys_at_zero_opacity() {
    // No atmosphere; only the receiver and the CMB.
    assert_abs_diff_eq!(
        instantaneous_system_temperature(30.0, 0.0, 1.0),
        30.0 + CMB_TEMPERATURE_K
    );
}

#[test]
fn test_instantaneous_tsys_at_zenith() {
    let tau: f64 = 0.1;
    let expected =
        50.0 + ATMOSPHERE_TEMPERATURE_K * (1.0 - (-tau).exp()) + CMB_TEMPERATURE_K * (-tau).exp();
    assert_abs_diff_eq!(instantaneous_system_temperature(50.0, tau, 1.0), expected);
}

#[test]
fn test_zero_opacity_gives_constant_tsys() {
    // Without any atmosphere, the elevation doesn't matter and both averages
    // agree.
    let tsys = system_temperature(&geometry(-45.0), 30.0, 0.0).unwrap();
    assert_relative_eq!(tsys, 30.0 + CMB_TEMPERATURE_K, max_relative = 1e-12);
}

#[test]
fn test_tsys_is_monotonic_in_opacity() {
    let g = geometry(-30.0);
    let mut last = 0.0;
    for i in 0..=40 {
        let tau = i as f64 * 0.01;
        let tsys = system_temperature(&g, 100.0, tau).unwrap();
        assert!(tsys >= last, "tau {tau}: {tsys} < {last}");
        last = tsys;
    }
}

#[test]
fn test_tsys_is_bounded_by_transit_and_limit() {
    // The source passes through the zenith at transit, so the averaged Tsys
    // must be at least the zenith value.
    let g = geometry(ATCA_LAT_DEG);
    let tau = 0.2;
    let zenith = instantaneous_system_temperature(100.0, tau, 1.0);
    let tsys = system_temperature(&g, 100.0, tau).unwrap();
    assert!(tsys > zenith);
    let at_limit = instantaneous_system_temperature(100.0, tau, 12.0_f64.to_radians().sin());
    assert!(tsys < at_limit);
}

#[test]
fn test_usable_hour_angle_uses_elevation_limit() {
    // A northern source sets well before 6 hours.
    let g = geometry(20.0);
    let ha = g.usable_hour_angle_hours().unwrap();
    assert!(ha > 0.0 && ha < 6.0, "{ha}");
    // At that hour angle, the source is at the elevation limit.
    let sin_el = g.sin_elevation(ha * 15.0_f64.to_radians());
    assert_abs_diff_eq!(sin_el, 12.0_f64.to_radians().sin(), epsilon = 1e-10);
}

#[test]
fn test_usable_hour_angle_uses_hour_angle_limit() {
    // This source is circumpolar above 12 degrees.
    let g = geometry(-80.0);
    assert_abs_diff_eq!(g.usable_hour_angle_hours().unwrap(), 6.0);
    let g = ObservationGeometry::new(-80.0, 2.5, 12.0);
    assert_abs_diff_eq!(g.usable_hour_angle_hours().unwrap(), 2.5);

    // Toward the south celestial pole the source is always at the same
    // elevation.
    let g = geometry(-90.0);
    assert_abs_diff_eq!(g.usable_hour_angle_hours().unwrap(), 6.0);
}

#[test]
fn test_source_never_rising_is_an_error() {
    let g = geometry(70.0);
    assert!(matches!(
        g.usable_hour_angle_hours(),
        Err(GeometryError::NeverAboveElevationLimit { .. })
    ));
    assert!(system_temperature(&g, 30.0, 0.1).is_err());
}

#[test]
fn test_below_horizon_is_an_error() {
    // A negative elevation limit lets the source go below the horizon.
    let g = ObservationGeometry::new(40.0, 12.0, -10.0);
    assert!(matches!(
        system_temperature(&g, 30.0, 0.1),
        Err(GeometryError::BelowHorizon { .. })
    ));
}

#[test]
fn test_limit_warnings() {
    assert!(geometry(-30.0).check_limits().is_empty());
    assert_eq!(
        ObservationGeometry::new(-30.0, 6.0, 5.0).check_limits(),
        vec![GeometryWarning::ElevationLimit(5.0)]
    );
    assert_eq!(
        ObservationGeometry::new(-30.0, 13.0, 95.0).check_limits(),
        vec![
            GeometryWarning::ElevationLimit(95.0),
            GeometryWarning::HourAngleLimit(13.0)
        ]
    );
    assert_eq!(
        ObservationGeometry::new(-30.0, 0.0, 12.0).check_limits(),
        vec![GeometryWarning::HourAngleLimit(0.0)]
    );
}
