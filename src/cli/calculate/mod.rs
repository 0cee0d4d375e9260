// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the sensitivity of an ATCA observation.

mod error;
#[cfg(test)]
mod tests;

pub(crate) use error::SensCalcArgsError;

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use clap::Parser;
use itertools::Itertools;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::{
    common::{display_warnings, InfoPrinter, Warn, ARG_FILE_HELP},
    report::{Report, ReportFormat},
};
use crate::{
    array::ArrayConfiguration,
    constants::{
        DEFAULT_CONFIGURATION, DEFAULT_DEC_DEG, DEFAULT_ELEVATION_LIMIT_DEG,
        DEFAULT_HOUR_ANGLE_LIMIT_HOURS, DEFAULT_INTEGRATION_MIN,
    },
    correlator::CorrelatorMode,
    io::read_tsys_file,
    params::{ObservationSpec, SensitivityParams},
    spectrum::MeasuredTsys,
    weighting::WeightingScheme,
    SensCalcError,
};

/// Where measured system temperature files are looked for if no directory is
/// given.
const DEFAULT_SYSTEMPS_DIR: &str = "systemps";

lazy_static::lazy_static! {
    static ref CONFIGURATION_HELP: String =
        format!("The array configuration. Valid configurations: {}. Default: {DEFAULT_CONFIGURATION}", ArrayConfiguration::valid_names().join(", "));

    static ref DEC_HELP: String =
        format!("The declination of the source [degrees]. Default: {DEFAULT_DEC_DEG}");

    static ref INTEGRATION_HELP: String =
        format!("The time on source [minutes]. Default: {DEFAULT_INTEGRATION_MIN}");

    static ref ELEVATION_LIMIT_HELP: String =
        format!("The source is not observed below this elevation [degrees]. Default: {DEFAULT_ELEVATION_LIMIT_DEG}");

    static ref HOUR_ANGLE_LIMIT_HELP: String =
        format!("The source is observed out to this hour angle either side of transit [hours]. Default: {DEFAULT_HOUR_ANGLE_LIMIT_HOURS}");

    static ref CORRELATOR_HELP: String =
        format!("The correlator configuration, which sets the continuum channel width. Valid modes: {}. Default: {}", CorrelatorMode::iter().join(", "), CorrelatorMode::default());

    static ref WEIGHTING_HELP: String =
        format!("The image weighting scheme. Valid schemes: {}. Default: {}",
                WeightingScheme::iter().map(|w| format!("{w} ({})", w.description())).join(", "),
                WeightingScheme::default());

    static ref SYSTEMPS_DIR_HELP: String =
        format!("The directory holding the measured system temperature files for each band. Default: {DEFAULT_SYSTEMPS_DIR}");

    static ref FORMAT_HELP: String =
        format!("How the results are written to stdout. Valid formats: {}. Default: {}", ReportFormat::iter().join(", "), ReportFormat::default());
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct CalculateArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    #[serde(skip)]
    pub(super) args_file: Option<PathBuf>,

    /// The central frequency of the observation [MHz].
    #[clap(short, long, help_heading = "OBSERVATION")]
    pub(super) frequency: Option<u32>,

    #[clap(short, long, allow_hyphen_values = true, help = DEC_HELP.as_str(), help_heading = "OBSERVATION")]
    pub(super) dec: Option<f64>,

    #[clap(short = 't', long, help = INTEGRATION_HELP.as_str(), help_heading = "OBSERVATION")]
    pub(super) integration: Option<f64>,

    #[clap(short, long, alias = "ellimit", allow_hyphen_values = true, help = ELEVATION_LIMIT_HELP.as_str(), help_heading = "OBSERVATION")]
    pub(super) elevation_limit: Option<f64>,

    #[clap(short = 'a', long, alias = "halimit", help = HOUR_ANGLE_LIMIT_HELP.as_str(), help_heading = "OBSERVATION")]
    pub(super) hour_angle_limit: Option<f64>,

    /// Calculate the sensitivity of a zoom band at this frequency [MHz]. It
    /// is ignored if it lies outside the observing band.
    #[clap(short, long, alias = "zoomfreq", help_heading = "OBSERVATION")]
    pub(super) zoom_freq: Option<f64>,

    #[clap(short, long, help = CONFIGURATION_HELP.as_str(), help_heading = "ARRAY")]
    pub(super) configuration: Option<String>,

    /// Include CA06 in the calculation. CA06 cannot observe at 3mm.
    #[clap(long, help_heading = "ARRAY")]
    #[serde(default)]
    pub(super) ca06: bool,

    #[clap(short = 'b', long, alias = "corrconfig", help = CORRELATOR_HELP.as_str(), help_heading = "CORRELATOR")]
    pub(super) corr_config: Option<String>,

    /// Use two 2 GHz continuum bands side by side. Only the millimetre bands
    /// support this.
    #[clap(long, alias = "4ghz", help_heading = "CORRELATOR")]
    #[serde(default)]
    pub(super) wide_continuum: bool,

    #[clap(short, long, allow_hyphen_values = true, help = WEIGHTING_HELP.as_str(), help_heading = "IMAGING")]
    pub(super) weighting: Option<String>,

    /// Multiply all system temperatures by this factor.
    #[clap(long, alias = "mfactor", help_heading = "SYSTEM TEMPERATURES")]
    pub(super) tsys_scale: Option<f64>,

    #[clap(long, help = SYSTEMPS_DIR_HELP.as_str(), help_heading = "SYSTEM TEMPERATURES")]
    pub(super) systemps_dir: Option<PathBuf>,

    /// Use the measured system temperatures in this file, rather than the
    /// band's file in the system temperature directory.
    #[clap(long, help_heading = "SYSTEM TEMPERATURES")]
    pub(super) tsys_file: Option<PathBuf>,

    #[clap(long, help = FORMAT_HELP.as_str(), help_heading = "OUTPUT")]
    pub(super) format: Option<String>,

    /// Plot the RMS noise of each continuum channel to this PNG file. Only
    /// available if compiled with the "plotting" feature.
    #[clap(short = 'o', long, help_heading = "OUTPUT")]
    pub(super) plot: Option<PathBuf>,
}

impl CalculateArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<CalculateArgs, SensCalcError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file.clone() {
            let file_args: CalculateArgs = unpack_arg_file!(arg_file);
            Ok(cli_args.merge_with(file_args))
        } else {
            Ok(cli_args)
        }
    }

    fn merge_with(self, other: Self) -> Self {
        Self {
            args_file: None,
            frequency: self.frequency.or(other.frequency),
            dec: self.dec.or(other.dec),
            integration: self.integration.or(other.integration),
            elevation_limit: self.elevation_limit.or(other.elevation_limit),
            hour_angle_limit: self.hour_angle_limit.or(other.hour_angle_limit),
            zoom_freq: self.zoom_freq.or(other.zoom_freq),
            configuration: self.configuration.or(other.configuration),
            ca06: self.ca06 || other.ca06,
            corr_config: self.corr_config.or(other.corr_config),
            wide_continuum: self.wide_continuum || other.wide_continuum,
            weighting: self.weighting.or(other.weighting),
            tsys_scale: self.tsys_scale.or(other.tsys_scale),
            systemps_dir: self.systemps_dir.or(other.systemps_dir),
            tsys_file: self.tsys_file.or(other.tsys_file),
            format: self.format.or(other.format),
            plot: self.plot.or(other.plot),
        }
    }

    fn parse(self) -> Result<CalculateParams, SensCalcError> {
        debug!("{:#?}", self);

        // Expose all the struct fields to ensure they're all used.
        let CalculateArgs {
            args_file: _,
            frequency,
            dec,
            integration,
            elevation_limit,
            hour_angle_limit,
            zoom_freq,
            configuration,
            ca06,
            corr_config,
            wide_continuum,
            weighting,
            tsys_scale,
            systemps_dir,
            tsys_file,
            format,
            plot,
        } = self;

        let frequency = frequency.ok_or(SensCalcArgsError::NoFrequency)?;
        let configuration_name =
            configuration.unwrap_or_else(|| DEFAULT_CONFIGURATION.to_string());
        let mut spec = ObservationSpec::new(frequency);
        spec.configuration = configuration_name.parse::<ArrayConfiguration>()?;
        spec.use_ca06 = ca06;
        if let Some(dec) = dec {
            spec.declination_deg = dec;
        }
        if let Some(integration) = integration {
            spec.integration_min = integration;
        }
        if let Some(elevation_limit) = elevation_limit {
            spec.elevation_limit_deg = elevation_limit;
        }
        if let Some(hour_angle_limit) = hour_angle_limit {
            spec.hour_angle_limit_hours = hour_angle_limit;
        }
        if let Some(corr_config) = corr_config {
            spec.correlator = CorrelatorMode::from_str(&corr_config).map_err(|_| {
                SensCalcArgsError::BadCorrelatorMode {
                    got: corr_config.clone(),
                    valid: CorrelatorMode::iter().join(", "),
                }
            })?;
        }
        if let Some(weighting) = weighting {
            spec.weighting = WeightingScheme::parse(&weighting)?;
        }
        spec.tsys_scale = tsys_scale;
        spec.wide_continuum = wide_continuum;
        spec.zoom_freq_mhz = zoom_freq;

        let format = match format {
            Some(f) => ReportFormat::from_str(&f.to_lowercase()).map_err(|_| {
                SensCalcArgsError::BadReportFormat {
                    got: f.clone(),
                    valid: ReportFormat::iter().join(", "),
                }
            })?,
            None => ReportFormat::default(),
        };
        #[cfg(not(feature = "plotting"))]
        if plot.is_some() {
            return Err(SensCalcArgsError::NoPlottingFeature.into());
        }

        let params = spec.into_params()?;

        let mut printer = InfoPrinter::new(
            format!(
                "Calculating the sensitivity at {} MHz ({} band)",
                params.centre_freq_mhz, params.profile.band
            )
            .into(),
        );
        printer.push_block(vec![
            format!(
                "Configuration {configuration_name}, {} antennas, {} baselines",
                params.antennas.num_antennas, params.antennas.num_baselines
            )
            .into(),
            format!(
                "Longest baseline {} m, tracked baseline {} m",
                params.antennas.max_baseline_m, params.antennas.track_baseline_m
            )
            .into(),
        ]);
        printer.push_block(vec![
            format!(
                "Declination {}°, {} minutes on source",
                params.geometry.declination_deg, params.integration_min
            )
            .into(),
            format!(
                "Elevation limit {}°, hour-angle limit {} h",
                params.geometry.elevation_limit_deg, params.geometry.hour_angle_limit_hours
            )
            .into(),
        ]);
        printer.push_line(
            format!(
                "{} ({} x {} MHz channels), {} weighting",
                params.correlator.description(),
                params.layout.num_channels(),
                params.layout.channel_width_mhz,
                params.weighting.description()
            )
            .into(),
        );
        if params.profile.use_atmosphere_model() {
            printer.push_line("Using the atmosphere model".into());
        }
        printer.display();

        for w in &params.warnings {
            w.to_string().warn();
        }
        if ca06 && !params.antennas.includes_ca06() {
            format!(
                "CA06 cannot observe in the {} band; it has been excluded",
                params.profile.band
            )
            .warn();
        }
        if wide_continuum && !params.wide_continuum {
            format!(
                "The {} band doesn't support the 4 GHz continuum mode; using 2 GHz",
                params.profile.band
            )
            .warn();
        }
        if let (Some(f), None) = (zoom_freq, params.zoom_freq_mhz) {
            format!("The zoom frequency {f} MHz is outside the observing band; ignoring it").warn();
        }

        let measured = match (tsys_file, params.profile.band.measured_tsys_file()) {
            (Some(file), _) => Some(read_tsys_file(file)?),
            (None, None) => None,
            (None, Some(name)) => {
                measured_tsys_from_dir(systemps_dir.as_deref(), name, &params)?
            }
        };
        display_warnings();

        Ok(CalculateParams {
            configuration_name,
            params,
            measured,
            format,
            plot,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), SensCalcError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()
    }
}

/// Look for the band's measured system temperatures in a directory. If no
/// directory was given and the default one doesn't have the file, the
/// calculation carries on without measurements.
fn measured_tsys_from_dir(
    systemps_dir: Option<&Path>,
    name: &str,
    params: &SensitivityParams,
) -> Result<Option<Vec<MeasuredTsys>>, SensCalcError> {
    match systemps_dir {
        Some(dir) => Ok(Some(read_tsys_file(dir.join(name))?)),
        None => {
            let file = Path::new(DEFAULT_SYSTEMPS_DIR).join(name);
            if file.exists() {
                Ok(Some(read_tsys_file(file)?))
            } else {
                let message = format!(
                    "No measured system temperatures found for the {} band ({} does not exist)",
                    params.profile.band,
                    file.display()
                );
                if params.profile.use_atmosphere_model() {
                    message.warn();
                } else {
                    debug!("{message}");
                }
                Ok(None)
            }
        }
    }
}

/// Parameters for a run, along with how to report on it.
struct CalculateParams {
    configuration_name: String,
    params: SensitivityParams,
    measured: Option<Vec<MeasuredTsys>>,
    format: ReportFormat,
    plot: Option<PathBuf>,
}

impl CalculateParams {
    fn run(self) -> Result<(), SensCalcError> {
        let result = self.params.run(self.measured.as_deref())?;

        let report = Report::new(&self.configuration_name, &self.params, &result);
        println!("{}", report.render(self.format)?);

        #[cfg(feature = "plotting")]
        if let Some(plot) = self.plot {
            let title = format!(
                "RMS noise at {} MHz, {} configuration",
                self.params.centre_freq_mhz, self.configuration_name
            );
            super::plot::plot_rms_spectrum(&result, &title, &plot)
                .map_err(SensCalcArgsError::from)?;
            info!("Wrote {}", plot.display());
        }
        #[cfg(not(feature = "plotting"))]
        if self.plot.is_some() {
            return Err(SensCalcArgsError::NoPlottingFeature.into());
        }

        Ok(())
    }
}
