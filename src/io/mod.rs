// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading measured system temperatures.
//!
//! Each line of a measured Tsys file holds a frequency \[GHz\] and the base-10
//! logarithm of the system temperature \[K\], separated by whitespace. Lines
//! that don't start with two numbers (e.g. headers) are skipped.

mod error;

pub use error::ReadTsysError;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, trace};

use crate::spectrum::MeasuredTsys;

/// Read the measured system temperatures in a file.
pub fn read_tsys_file<P: AsRef<Path>>(path: P) -> Result<Vec<MeasuredTsys>, ReadTsysError> {
    fn inner(path: &Path) -> Result<Vec<MeasuredTsys>, ReadTsysError> {
        if !path.exists() {
            return Err(ReadTsysError::DoesNotExist(path.to_path_buf()));
        }
        debug!("Reading measured system temperatures from {}", path.display());
        let mut buf = BufReader::new(File::open(path)?);
        let measured = parse_tsys(&mut buf)?;
        if measured.is_empty() {
            return Err(ReadTsysError::NoSamples(path.to_path_buf()));
        }
        debug!("Read {} measurements", measured.len());
        Ok(measured)
    }
    inner(path.as_ref())
}

/// Parse measured system temperatures, converting the frequencies to MHz
/// and the temperatures to K.
pub fn parse_tsys<T: BufRead>(buf: &mut T) -> Result<Vec<MeasuredTsys>, std::io::Error> {
    let mut measured = vec![];
    let mut line = String::new();
    let mut line_num: u32 = 0;
    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        let mut items = line.split_whitespace().map(|s| s.parse::<f64>());
        match (items.next(), items.next()) {
            (Some(Ok(freq_ghz)), Some(Ok(log_tsys))) => measured.push(MeasuredTsys {
                freq_mhz: freq_ghz * 1000.0,
                tsys_k: 10.0_f64.powf(log_tsys),
            }),
            _ => trace!("Skipping line {line_num}: {}", line.trim_end()),
        }
        line.clear();
    }
    Ok(measured)
}
