// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use crate::*;

#[test]
fn test_3mm() {
    let cmd = senscalc()
        .args(["-f", "94000", "-d", "-30", "-c", "h214"])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");

    assert!(stdout.contains("(3mm band)"), "{stdout}");
    for weather in ["Good", "Average", "Poor"] {
        assert!(
            stdout.contains(&format!("Sensitivity ({weather} weather)")),
            "{stdout}"
        );
    }
    assert!(stdout.contains("mJy/beam"), "{stdout}");
    // Logging doesn't get mixed into the report.
    assert!(!stdout.contains("INFO"), "{stdout}");
    assert!(stderr.contains("atca_senscalc complete."), "{stderr}");
}

#[test]
fn test_bad_frequency() {
    let cmd = senscalc().args(["-f", "12000"]).ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.is_empty(), "{stdout}");
    assert!(stderr.contains("12000 MHz is out of the valid range"), "{stderr}");
    assert!(stderr.contains("6cm: 5125 - 5999 MHz"), "{stderr}");
}

#[test]
fn test_no_frequency() {
    let cmd = senscalc().ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No central frequency was supplied"), "{stderr}");
}

#[test]
fn test_zero_declination() {
    let cmd = senscalc().args(["-f", "5500", "-d", "0"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Check the declination"), "{stderr}");
}

#[test]
fn test_6cm_with_measurements() {
    let dir = TempDir::new().unwrap();
    make_6cm_systemps(dir.path(), 30.0);

    let cmd = senscalc()
        .args(["-f", "5500", "-d", "-45", "--systemps-dir"])
        .arg(dir.path())
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");

    assert!(stdout.contains("(6cm band)"), "{stdout}");
    assert!(stdout.contains("30.0 K"), "{stdout}");
    // Without the atmosphere model, only good weather is reported.
    assert!(stdout.contains("Sensitivity (Good weather)"), "{stdout}");
    assert!(!stdout.contains("Sensitivity (Poor weather)"), "{stdout}");
}

#[test]
fn test_missing_measurements_in_dir() {
    let dir = TempDir::new().unwrap();
    let cmd = senscalc()
        .args(["-f", "5500", "--systemps-dir"])
        .arg(dir.path())
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("does not exist"), "{stderr}");
}

#[test]
fn test_formats() {
    let cmd = senscalc()
        .args(["-f", "22000", "--format", "html"])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    assert!(stdout.starts_with("<div class=\"senscalc\">"), "{stdout}");
    assert!(stdout.contains("<h3>Configuration</h3>"), "{stdout}");

    let cmd = senscalc()
        .args(["-f", "22000", "--format", "json"])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    assert!(stdout.trim_start().starts_with('{'), "{stdout}");
    assert!(stdout.contains("\"centre_freq_mhz\": 22000"), "{stdout}");
    assert!(stdout.contains("\"band\": \"12mm\""), "{stdout}");

    let cmd = senscalc().args(["-f", "22000", "--format", "pdf"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("text, html, json"), "{stderr}");
}

#[test]
fn test_dry_run() {
    let cmd = senscalc().args(["-f", "43000", "--dry-run"]).ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    assert!(stdout.is_empty(), "{stdout}");
    assert!(stderr.contains("Dry run -- exiting now."), "{stderr}");
}

#[test]
fn test_warnings_go_to_stderr() {
    let cmd = senscalc()
        .args(["-f", "94000", "--ca06", "-z", "80000"])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    assert!(stderr.contains("CA06 cannot observe in the 3mm band"), "{stderr}");
    assert!(stderr.contains("outside the observing band"), "{stderr}");
    assert!(!stdout.contains("CA06 cannot"), "{stdout}");
}
