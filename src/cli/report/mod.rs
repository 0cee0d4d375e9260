// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render the results of a sensitivity calculation for people (plain text and
//! HTML) or for machines (JSON).

#[cfg(test)]
mod tests;

use std::{borrow::Cow, fmt};

use itertools::Itertools;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    band::Band,
    params::SensitivityParams,
    sensitivity::{BandwidthValues, BeamSize, SensitivityResult},
    SensCalcError,
};

/// Brightness temperatures above each of these thresholds get one more
/// decimal place than those above the previous threshold.
const BRIGHTNESS_TEMPERATURE_THRESHOLDS_K: [f64; 7] = [1.0, 0.1, 0.01, 1e-3, 1e-4, 1e-5, 1e-6];

/// Primary beams larger than this are shown in arcminutes, otherwise in
/// arcseconds \[arcmin\].
const PRIMARY_BEAM_ARCMIN_THRESHOLD: f64 = 2.0;

const ARCMIN_TO_ARCSEC: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
pub(crate) enum ReportFormat {
    #[default]
    #[strum(serialize = "text")]
    Text,

    #[strum(serialize = "html")]
    Html,

    #[strum(serialize = "json")]
    Json,
}

/// Everything known about a finished calculation.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    /// The array configuration, as named by the user.
    pub(crate) configuration: &'a str,
    pub(crate) band: Band,
    pub(crate) parameters: &'a SensitivityParams,
    pub(crate) results: &'a SensitivityResult,
}

struct Section {
    title: Cow<'static, str>,
    rows: Vec<(&'static str, String)>,
}

impl<'a> Report<'a> {
    pub(crate) fn new(
        configuration: &'a str,
        parameters: &'a SensitivityParams,
        results: &'a SensitivityResult,
    ) -> Report<'a> {
        Report {
            configuration,
            band: parameters.profile.band,
            parameters,
            results,
        }
    }

    pub(crate) fn render(&self, format: ReportFormat) -> Result<String, SensCalcError> {
        let s = match format {
            ReportFormat::Text => TextReport(self).to_string(),
            ReportFormat::Html => HtmlReport(self).to_string(),
            ReportFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(s)
    }

    fn sections(&self) -> Vec<Section> {
        let p = self.parameters;
        let r = self.results;
        let d = &r.derived;

        let configuration = Section {
            title: "Configuration".into(),
            rows: vec![
                ("Array configuration", self.configuration.to_string()),
                ("Hybrid", yes_no(p.configuration.hybrid).to_string()),
                (
                    "Antennas included",
                    p.antennas
                        .antennas
                        .iter()
                        .map(|a| format!("CA{a:02}"))
                        .join(", "),
                ),
                ("Baselines", p.antennas.num_baselines.to_string()),
                ("Longest baseline", format!("{} m", p.antennas.max_baseline_m)),
                (
                    "Central frequency",
                    format!("{} MHz ({} band)", p.centre_freq_mhz, self.band),
                ),
                ("Correlator mode", p.correlator.description().to_string()),
                ("Antenna efficiency", format!("{:.3}", d.efficiency)),
            ],
        };

        let mut imaging = Section {
            title: "Source & Imaging".into(),
            rows: vec![
                (
                    "Declination",
                    format!("{:.3}°", p.geometry.declination_deg),
                ),
                (
                    "Elevation limit",
                    format!("{:.1}°", p.geometry.elevation_limit_deg),
                ),
                (
                    "Hour-angle limit",
                    format!("{:.2} h", p.geometry.hour_angle_limit_hours),
                ),
                ("Time on source", format!("{:.1} min", p.integration_min)),
                (
                    "Weighting scheme",
                    format!("{} ({})", p.weighting.description(), p.weighting),
                ),
                (
                    "Weighting factor",
                    format!("{:.3} x Natural", p.weights.noise_factor),
                ),
                ("Field of view", format_primary_beam(d.primary_beam_fwhm_arcmin)),
                ("Synthesised beam size", format_beam(&r.beam)),
            ],
        };
        if let Some(best_beam) = &r.best_beam {
            imaging.rows.push(("Best beam size", format_beam(best_beam)));
        }
        if let Some(zoom) = &r.specific_zoom {
            imaging
                .rows
                .push(("Specific zoom beam size", format_beam(&zoom.beam)));
        }

        let continuum = Section {
            title: "Continuum".into(),
            rows: vec![
                ("Effective bandwidth", format!("{:.0} MHz", d.bandwidth_mhz)),
                ("Channels", d.num_channels.to_string()),
                (
                    "Channels with data",
                    format!("{} of {}", r.channel_rms.len(), d.num_channels),
                ),
                ("Channel bandwidth", format!("{:.3} MHz", d.channel_width_mhz)),
                (
                    "Spectral bandwidth",
                    format!("{:.3} km/s", d.velocity_width_kms),
                ),
                (
                    "Channel resolution",
                    format!("{:.3} km/s", d.velocity_resolution_kms),
                ),
            ],
        };

        let mut zoom_band = Section {
            title: "Zoom band".into(),
            rows: vec![
                ("Channels", d.num_zoom_channels.to_string()),
                (
                    "Channel bandwidth",
                    format!("{:.3} kHz", d.zoom_channel_width_mhz * 1e3),
                ),
                (
                    "Channel resolution",
                    format!("{:.3} km/s", d.zoom_velocity_resolution_kms),
                ),
            ],
        };
        if let Some(zoom) = &r.specific_zoom {
            zoom_band.rows.push((
                "Specific zoom resolution",
                format!(
                    "{:.3} km/s at {} MHz",
                    zoom.velocity_resolution_kms, zoom.freq_mhz
                ),
            ));
        }

        let mut sections = vec![configuration, imaging, continuum, zoom_band];
        for &weather in r.reported_weather() {
            let s = &r.weather[weather];
            let zoom = r.specific_zoom.as_ref();
            let mut rows = vec![
                (
                    "System temperature",
                    format!("{:.1} K", s.system_temperature_k),
                ),
                (
                    "Antenna sensitivity",
                    format!("{:.0} Jy", s.antenna_sensitivity_jy),
                ),
                (
                    "Array sensitivity",
                    format!("{:.0} Jy", s.array_sensitivity_jy),
                ),
                (
                    "RMS noise",
                    format!(
                        "{} mJy/beam",
                        bandwidth_line(
                            &s.rms_mjy,
                            zoom.map(|z| z.rms_mjy[weather]),
                            |v| format!("{v:.3}")
                        )
                    ),
                ),
                (
                    "Brightness temperature",
                    format!(
                        "{} K",
                        bandwidth_line(
                            &s.brightness_temperature_k,
                            zoom.map(|z| z.brightness_temperature_k[weather]),
                            format_brightness_temperature
                        )
                    ),
                ),
            ];
            if let Some(zoom) = zoom {
                rows.push((
                    "Specific zoom system temperature",
                    format!("{:.1} K", zoom.system_temperature_k[weather]),
                ));
            }
            sections.push(Section {
                title: format!("Sensitivity ({weather} weather)").into(),
                rows,
            });
        }

        sections
    }
}

struct TextReport<'a, 'b>(&'b Report<'a>);

impl fmt::Display for TextReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.0.sections().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.title)?;
            for (label, value) in section.rows {
                writeln!(f, "  {:<34}{value}", format!("{label}:"))?;
            }
        }
        Ok(())
    }
}

struct HtmlReport<'a, 'b>(&'b Report<'a>);

impl fmt::Display for HtmlReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<div class=\"senscalc\">")?;
        for section in self.0.sections() {
            writeln!(f, "<h3>{}</h3>", escape_html(&section.title))?;
            writeln!(f, "<table>")?;
            for (label, value) in section.rows {
                writeln!(
                    f,
                    "<tr><th>{}</th><td>{}</td></tr>",
                    escape_html(label),
                    escape_html(&value)
                )?;
            }
            writeln!(f, "</table>")?;
        }
        writeln!(f, "</div>")
    }
}

fn escape_html(s: &str) -> Cow<str> {
    if !s.contains(['&', '<', '>']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// The continuum, spectral and zoom values, followed by the specific zoom
/// value if there is one.
fn bandwidth_line<F: Fn(f64) -> String>(
    values: &BandwidthValues,
    specific_zoom: Option<f64>,
    format: F,
) -> String {
    let mut s = format!(
        "{} (C) / {} (S) / {} (Z)",
        format(values.continuum),
        format(values.spectral),
        format(values.zoom)
    );
    if let Some(sz) = specific_zoom {
        s.push_str(&format!(" / {} (SZ)", format(sz)));
    }
    s
}

pub(crate) fn format_brightness_temperature(bt: f64) -> String {
    match BRIGHTNESS_TEMPERATURE_THRESHOLDS_K
        .iter()
        .position(|&threshold| bt > threshold)
    {
        Some(i) => format!("{bt:.precision$}", precision = i + 1),
        None => format!("{bt:.2e}"),
    }
}

pub(crate) fn format_primary_beam(fwhm_arcmin: f64) -> String {
    if fwhm_arcmin > PRIMARY_BEAM_ARCMIN_THRESHOLD {
        format!("{fwhm_arcmin:.2}'")
    } else {
        format!("{:.2}\"", fwhm_arcmin * ARCMIN_TO_ARCSEC)
    }
}

pub(crate) fn format_beam(beam: &BeamSize) -> String {
    format!(
        "{:.2}\" x {:.2}\"",
        beam.east_west_arcsec, beam.north_south_arcsec
    )
}
