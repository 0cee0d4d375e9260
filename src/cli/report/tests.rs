// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::*;
use crate::{
    params::ObservationSpec, sensitivity::SensitivityResult, spectrum::MeasuredTsys,
    weighting::WeightingScheme,
};

fn measurements() -> Vec<MeasuredTsys> {
    (0..2200)
        .map(|i| MeasuredTsys {
            freq_mhz: 4400.0 + i as f64,
            tsys_k: 30.0,
        })
        .collect()
}

fn calculate(spec: ObservationSpec) -> (SensitivityParams, SensitivityResult) {
    let params = spec.into_params().unwrap();
    let measured = measurements();
    let result = params.run(Some(measured.as_slice())).unwrap();
    (params, result)
}

fn spec_5500() -> ObservationSpec {
    let mut spec = ObservationSpec::new(5500);
    spec.declination_deg = -45.0;
    spec
}

#[test]
fn test_brightness_temperature_precision() {
    assert_eq!(format_brightness_temperature(12.345), "12.3");
    assert_eq!(format_brightness_temperature(0.5), "0.50");
    assert_eq!(format_brightness_temperature(0.05), "0.050");
    assert_eq!(format_brightness_temperature(0.0012), "0.0012");
    assert_eq!(format_brightness_temperature(0.00034), "0.00034");
    assert_eq!(format_brightness_temperature(2e-6), "0.0000020");
    assert_eq!(format_brightness_temperature(5e-8), "5.00e-8");
}

#[test]
fn test_primary_beam_units() {
    assert_eq!(format_primary_beam(46.845934290689975), "46.85'");
    assert_eq!(format_primary_beam(1.5), "90.00\"");
}

#[test]
fn test_beam_format() {
    let beam = BeamSize {
        east_west_arcsec: 1.234,
        north_south_arcsec: 5.0,
    };
    assert_eq!(format_beam(&beam), "1.23\" x 5.00\"");
}

#[test]
fn test_text_report_without_atmosphere_model() {
    let (params, result) = calculate(spec_5500());
    let text = Report::new("6000", &params, &result)
        .render(ReportFormat::Text)
        .unwrap();

    assert!(text.starts_with("Configuration\n"));
    assert!(text.contains("CA01, CA02, CA03, CA04, CA05"));
    assert!(text.contains("5500 MHz (6cm band)"));
    assert!(text.contains("-45.000°"));
    assert!(text.contains("Natural (N)"));
    assert!(text.contains("1.000 x Natural"));
    assert!(text.contains("Sensitivity (Good weather)"));
    assert!(!text.contains("Sensitivity (Average weather)"));
    assert!(!text.contains("Sensitivity (Poor weather)"));
    assert!(text.contains("30.0 K"));
    assert!(text.contains(" (C) / "));
    assert!(!text.contains("(SZ)"));
    // 6 km without CA06 tracks the 3 km baseline, which is also the longest.
    assert!(!text.contains("Best beam size"));
}

#[test]
fn test_text_report_with_atmosphere_model() {
    let mut spec = ObservationSpec::new(94000);
    spec.weighting = WeightingScheme::Uniform;
    let params = spec.into_params().unwrap();
    let result = params.run(None).unwrap();
    let text = Report::new("6000", &params, &result)
        .render(ReportFormat::Text)
        .unwrap();
    for weather in ["Good", "Average", "Poor"] {
        assert!(text.contains(&format!("Sensitivity ({weather} weather)")));
    }
    assert!(text.contains("Uniform (U)"));
    assert!(text.contains("(3mm band)"));
}

#[test]
fn test_specific_zoom_is_reported() {
    let mut spec = spec_5500();
    spec.zoom_freq_mhz = Some(5600.0);
    spec.use_ca06 = true;
    let (params, result) = calculate(spec);
    let text = Report::new("6km", &params, &result)
        .render(ReportFormat::Text)
        .unwrap();
    assert!(text.contains("Array configuration:"));
    assert!(text.contains("6km"));
    assert!(text.contains("CA06"));
    assert!(text.contains(" (SZ) mJy/beam"));
    assert!(text.contains("Specific zoom beam size"));
    assert!(text.contains("km/s at 5600 MHz"));
}

#[test]
fn test_html_report() {
    let (params, result) = calculate(spec_5500());
    let html = Report::new("6000", &params, &result)
        .render(ReportFormat::Html)
        .unwrap();
    assert!(html.starts_with("<div class=\"senscalc\">"));
    assert!(html.trim_end().ends_with("</div>"));
    assert!(html.contains("<h3>Source &amp; Imaging</h3>"));
    assert!(html.contains("<tr><th>Baselines</th><td>10</td></tr>"));
    assert_eq!(html.matches("<table>").count(), html.matches("</table>").count());
}

#[test]
fn test_json_report() {
    let (params, result) = calculate(spec_5500());
    let json = Report::new("6000", &params, &result)
        .render(ReportFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["configuration"], "6000");
    assert_eq!(value["band"], "6cm");
    assert_eq!(value["parameters"]["centre_freq_mhz"], 5500);
    assert_eq!(value["parameters"]["correlator"], "CFB1M");
    assert_eq!(
        value["results"]["channel_rms"].as_array().unwrap().len(),
        result.channel_rms.len()
    );
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("plain"), "plain");
    assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
}
