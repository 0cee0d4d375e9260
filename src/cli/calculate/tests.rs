// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{fs::File, io::Write};

use approx::assert_abs_diff_eq;
use indoc::indoc;
use tempfile::{tempdir, Builder};

use super::*;
use crate::band::Band;

fn parse_from(args: &[&str]) -> Result<CalculateParams, SensCalcError> {
    CalculateArgs::parse_from(std::iter::once("atca_senscalc").chain(args.iter().copied()))
        .parse()
}

/// Measured system temperatures of 30 K (log10 = 1.4771...) across the 6cm
/// band.
fn write_6cm_measurements(file: &Path) {
    let mut f = File::create(file).unwrap();
    writeln!(f, "# freq_GHz log10(Tsys)").unwrap();
    for i in 0..2200 {
        writeln!(f, "{} {}", 4.4 + i as f64 / 1000.0, 30.0_f64.log10()).unwrap();
    }
}

#[test]
fn test_defaults() {
    let p = parse_from(&["-f", "5500"]).unwrap();
    assert_eq!(p.configuration_name, DEFAULT_CONFIGURATION);
    assert_eq!(p.params.centre_freq_mhz, 5500);
    assert_eq!(p.params.profile.band, Band::SixCm);
    assert_eq!(p.params.correlator, CorrelatorMode::CFB1M);
    assert_eq!(p.params.weighting, WeightingScheme::Natural);
    assert_abs_diff_eq!(p.params.geometry.declination_deg, DEFAULT_DEC_DEG);
    assert_abs_diff_eq!(p.params.integration_min, DEFAULT_INTEGRATION_MIN);
    assert_eq!(p.format, ReportFormat::Text);
    assert!(p.plot.is_none());
}

#[test]
fn test_observation_args() {
    let p = parse_from(&[
        "-f", "43000", "-d", "-45.5", "-t", "60", "-e", "20", "-a", "4", "-c", "h214", "--ca06",
        "-b", "CFB64M", "-w", "R-1", "--wide-continuum", "-z", "43100",
    ])
    .unwrap();
    assert_eq!(p.configuration_name, "h214");
    assert!(p.params.configuration.hybrid);
    assert_eq!(p.params.configuration.length_m, 214);
    assert!(p.params.antennas.includes_ca06());
    assert_abs_diff_eq!(p.params.geometry.declination_deg, -45.5);
    assert_abs_diff_eq!(p.params.integration_min, 60.0);
    assert_abs_diff_eq!(p.params.geometry.elevation_limit_deg, 20.0);
    assert_abs_diff_eq!(p.params.geometry.hour_angle_limit_hours, 4.0);
    assert_eq!(p.params.correlator, CorrelatorMode::CFB64M);
    assert_eq!(p.params.weighting, WeightingScheme::RobustMinus1);
    assert!(p.params.wide_continuum);
    assert_eq!(p.params.zoom_freq_mhz, Some(43100.0));
}

#[test]
fn test_old_argument_names() {
    let p = parse_from(&[
        "-f",
        "94000",
        "--halimit",
        "3",
        "--ellimit",
        "15",
        "--corrconfig",
        "CFB16M",
        "--zoomfreq",
        "94500",
        "--4ghz",
        "--mfactor",
        "1.2",
    ])
    .unwrap();
    assert_abs_diff_eq!(p.params.geometry.hour_angle_limit_hours, 3.0);
    assert_abs_diff_eq!(p.params.geometry.elevation_limit_deg, 15.0);
    assert_eq!(p.params.correlator, CorrelatorMode::CFB16M);
    assert_eq!(p.params.zoom_freq_mhz, Some(94500.0));
    assert!(p.params.wide_continuum);
    assert_abs_diff_eq!(p.params.profile.tsys_scale, 1.2);
}

#[test]
fn test_bad_args() {
    assert!(matches!(parse_from(&[]), Err(SensCalcError::Args(_))));

    let result = parse_from(&["-f", "5500", "-b", "CFB2M"]);
    match result {
        Err(SensCalcError::Args(s)) => assert!(s.contains("CFB1M, CFB4M, CFB16M, CFB64M")),
        Err(e) => panic!("Unexpected error: {e}"),
        Ok(_) => panic!("Expected an error"),
    }

    assert!(matches!(
        parse_from(&["-f", "5500", "-w", "R3"]),
        Err(SensCalcError::Array(_))
    ));
    assert!(matches!(
        parse_from(&["-f", "5500", "-c", "5km"]),
        Err(SensCalcError::Array(_))
    ));
    assert!(matches!(
        parse_from(&["-f", "5500", "--format", "pdf"]),
        Err(SensCalcError::Args(_))
    ));
    assert!(matches!(
        parse_from(&["-f", "5500", "--tsys-scale", "0"]),
        Err(SensCalcError::Args(_))
    ));
    assert!(matches!(
        parse_from(&["-f", "12000"]),
        Err(SensCalcError::Band(_))
    ));
    assert!(matches!(
        parse_from(&["-f", "5500", "-d", "0"]),
        Err(SensCalcError::Geometry(_))
    ));
    assert!(matches!(
        parse_from(&["-f", "5500", "-d", "70"]),
        Err(SensCalcError::Geometry(_))
    ));
    assert!(matches!(
        parse_from(&["-f", "94000", "-e", "-5", "-a", "12"]),
        Err(SensCalcError::Geometry(_))
    ));
}

#[test]
fn test_format_is_case_insensitive() {
    let p = parse_from(&["-f", "94000", "--format", "HTML"]).unwrap();
    assert_eq!(p.format, ReportFormat::Html);
    let p = parse_from(&["-f", "94000", "--format", "json"]).unwrap();
    assert_eq!(p.format, ReportFormat::Json);
}

#[cfg(not(feature = "plotting"))]
#[test]
fn test_plot_needs_the_plotting_feature() {
    assert!(matches!(
        parse_from(&["-f", "94000", "-o", "rms.png"]),
        Err(SensCalcError::Plot(_))
    ));
}

#[test]
fn test_systemps_dir() {
    let dir = tempdir().unwrap();
    write_6cm_measurements(&dir.path().join("ca04_6cm_x_polarisation_run1.avg"));
    let dir_str = dir.path().display().to_string();

    let p = parse_from(&["-f", "5500", "--systemps-dir", &dir_str]).unwrap();
    let measured = p.measured.as_ref().unwrap();
    assert_eq!(measured.len(), 2200);
    assert_abs_diff_eq!(measured[0].freq_mhz, 4400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(measured[0].tsys_k, 30.0, epsilon = 1e-9);

    // The 3cm band's file isn't there.
    assert!(matches!(
        parse_from(&["-f", "9000", "--systemps-dir", &dir_str]),
        Err(SensCalcError::Tsys(_))
    ));

    // The 3mm band has no measurements to look for.
    let p = parse_from(&["-f", "94000", "--systemps-dir", &dir_str]).unwrap();
    assert!(p.measured.is_none());
}

#[test]
fn test_tsys_file() {
    let mut file = Builder::new().suffix(".avg").tempfile().unwrap();
    write!(
        file,
        "{}",
        indoc! {"
            5.499 1.5
            5.500 1.5
        "}
    )
    .unwrap();
    let path = file.path().display().to_string();
    let p = parse_from(&["-f", "5500", "--tsys-file", &path]).unwrap();
    assert_eq!(p.measured.as_ref().unwrap().len(), 2);

    assert!(matches!(
        parse_from(&["-f", "5500", "--tsys-file", "/does/not/exist.avg"]),
        Err(SensCalcError::Tsys(_))
    ));
}

#[test]
fn test_run() {
    let dir = tempdir().unwrap();
    write_6cm_measurements(&dir.path().join("ca04_6cm_x_polarisation_run1.avg"));
    let dir_str = dir.path().display().to_string();
    let p = parse_from(&["-f", "5500", "-d", "-45", "--systemps-dir", &dir_str]).unwrap();
    assert!(p.run().is_ok());
}

#[test]
fn test_toml_arg_file() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        "{}",
        indoc! {r#"
            frequency = 94000
            configuration = "h214"
            ca06 = true
            dec = -60.0
            weighting = "U"
        "#}
    )
    .unwrap();

    let args = CalculateArgs {
        args_file: Some(file.path().to_path_buf()),
        configuration: Some("750".to_string()),
        ..Default::default()
    }
    .merge()
    .unwrap();
    assert!(args.args_file.is_none());
    assert_eq!(args.frequency, Some(94000));
    // The command line wins.
    assert_eq!(args.configuration.as_deref(), Some("750"));
    assert!(args.ca06);
    assert_eq!(args.dec, Some(-60.0));
    assert_eq!(args.weighting.as_deref(), Some("U"));
    assert!(args.integration.is_none());

    let p = args.parse().unwrap();
    assert_eq!(p.params.configuration.length_m, 750);
    assert_eq!(p.params.weighting, WeightingScheme::Uniform);
}

#[test]
fn test_json_arg_file() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        "{}",
        indoc! {r#"
            {
                "frequency": 22000,
                "corr_config": "CFB4M",
                "integration": 30.0
            }
        "#}
    )
    .unwrap();

    let args = CalculateArgs {
        args_file: Some(file.path().to_path_buf()),
        integration: Some(90.0),
        ..Default::default()
    }
    .merge()
    .unwrap();
    assert_eq!(args.frequency, Some(22000));
    assert_eq!(args.corr_config.as_deref(), Some("CFB4M"));
    assert_eq!(args.integration, Some(90.0));
}

#[test]
fn test_bad_arg_files() {
    let file = Builder::new().suffix(".yaml").tempfile().unwrap();
    let result = CalculateArgs {
        args_file: Some(file.path().to_path_buf()),
        ..Default::default()
    }
    .merge();
    assert!(matches!(result, Err(SensCalcError::ArgFile(_))));

    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "frequency = \"lots\"").unwrap();
    let result = CalculateArgs {
        args_file: Some(file.path().to_path_buf()),
        ..Default::default()
    }
    .merge();
    assert!(matches!(result, Err(SensCalcError::ArgFile(_))));
}

#[test]
fn test_saved_toml_can_be_read_back() {
    let args = CalculateArgs {
        frequency: Some(5500),
        configuration: Some("EW352".to_string()),
        wide_continuum: true,
        zoom_freq: Some(5600.0),
        ..Default::default()
    };
    let toml_str = toml::to_string(&args).unwrap();
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(toml_str.as_bytes()).unwrap();

    let read_back = CalculateArgs {
        args_file: Some(file.path().to_path_buf()),
        ..Default::default()
    }
    .merge()
    .unwrap();
    assert_eq!(read_back.frequency, Some(5500));
    assert_eq!(read_back.configuration.as_deref(), Some("EW352"));
    assert!(read_back.wide_continuum);
    assert_eq!(read_back.zoom_freq, Some(5600.0));
}
