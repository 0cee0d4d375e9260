// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Plot the RMS noise of each continuum channel against frequency.

use std::path::Path;

use log::debug;
use plotters::prelude::*;
use thiserror::Error;

use crate::{sensitivity::SensitivityResult, weather::Weather};

/// The number of X pixels on the plot.
const X_PIXELS: u32 = 1600;
/// The number of Y pixels on the plot.
const Y_PIXELS: u32 = 900;

fn colour(weather: Weather) -> RGBColor {
    match weather {
        Weather::Good => BLUE,
        Weather::Average => GREEN,
        Weather::Poor => RED,
    }
}

/// The smallest and largest of some values, widened a little so that lines
/// don't sit on the plot edges. A single value gets a range around it.
fn padded_range<I: Iterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
    if min > max {
        return None;
    }
    let pad = if max > min {
        (max - min) * 0.05
    } else {
        min.abs().max(1.0) * 0.05
    };
    Some((min - pad, max + pad))
}

pub(crate) fn plot_rms_spectrum(
    result: &SensitivityResult,
    title: &str,
    file: &Path,
) -> Result<(), DrawError> {
    let weathers = result.reported_weather();
    let (min_freq, max_freq) =
        padded_range(result.channel_rms.iter().map(|c| c.freq_mhz)).ok_or(DrawError::NoData)?;
    let (min_rms, max_rms) = padded_range(
        result
            .channel_rms
            .iter()
            .flat_map(|c| weathers.iter().map(move |&w| c.rms_mjy[w])),
    )
    .ok_or(DrawError::NoData)?;
    debug!(
        "Plotting {} channels to {}",
        result.channel_rms.len(),
        file.display()
    );

    let root_area = BitMapBackend::new(file, (X_PIXELS, Y_PIXELS)).into_drawing_area();
    root_area
        .fill(&WHITE)
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;

    let mut cc = ChartBuilder::on(&root_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(min_freq..max_freq, min_rms..max_rms)
        .map_err(|e| DrawError::Chart(e.to_string()))?;
    cc.configure_mesh()
        .x_desc("Frequency [MHz]")
        .y_desc("RMS noise [mJy/beam]")
        .light_line_style(&WHITE)
        .draw()
        .map_err(|e| DrawError::Chart(e.to_string()))?;

    for &weather in weathers {
        let colour = colour(weather);
        cc.draw_series(LineSeries::new(
            result
                .channel_rms
                .iter()
                .map(|c| (c.freq_mhz, c.rms_mjy[weather])),
            &colour,
        ))
        .map_err(|e| DrawError::Chart(e.to_string()))?
        .label(format!("{weather} weather"))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
    }
    cc.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| DrawError::Chart(e.to_string()))?;

    root_area
        .present()
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;
    Ok(())
}

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("There are no channels to plot")]
    NoData,

    #[error("While plotting the RMS spectrum: {0}")]
    Chart(String),

    #[error("Error from the plotters library: {0}")]
    Plotters(Box<dyn std::error::Error>),
}
