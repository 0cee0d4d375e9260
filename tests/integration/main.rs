// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod arg_files;
mod calculate;

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};

fn senscalc() -> Command {
    Command::cargo_bin("atca_senscalc").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

fn make_file_in_dir<T: AsRef<Path>, U: AsRef<Path>>(filename: T, dir: U) -> (PathBuf, File) {
    let path = dir.as_ref().join(filename);
    let f = File::create(&path).expect("couldn't make file");
    (path, f)
}

/// Write a measured system temperature file for the 6cm band into `dir`. All
/// samples are `tsys_k`.
fn make_6cm_systemps<P: AsRef<Path>>(dir: P, tsys_k: f64) -> PathBuf {
    let (path, mut f) = make_file_in_dir("ca04_6cm_x_polarisation_run1.avg", dir);
    for i in 0..2200 {
        writeln!(f, "{:.4} {}", 4.4 + i as f64 / 1000.0, tsys_k.log10()).unwrap();
    }
    path
}
