// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use indoc::indoc;
use tempfile::TempDir;

use crate::*;

#[test]
fn test_toml_arg_file() {
    let dir = TempDir::new().unwrap();
    let (args_file, mut f) = make_file_in_dir("args.toml", dir.path());
    write!(
        f,
        "{}",
        indoc! {r#"
            frequency = 94000
            dec = -60.0
            configuration = "750"
            weighting = "R0"
            format = "json"
        "#}
    )
    .unwrap();
    drop(f);

    let cmd = senscalc().arg(&args_file).ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    assert!(stdout.contains("\"centre_freq_mhz\": 94000"), "{stdout}");
    assert!(stdout.contains("\"weighting\": \"R0\""), "{stdout}");

    // Command-line arguments take precedence.
    let cmd = senscalc().arg(&args_file).args(["--format", "text"]).ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    assert!(stdout.contains("Robust=0 (R0)"), "{stdout}");
}

#[test]
fn test_bad_arg_file() {
    let dir = TempDir::new().unwrap();
    let (args_file, mut f) = make_file_in_dir("args.yaml", dir.path());
    writeln!(f, "frequency: 5500").unwrap();
    drop(f);

    let cmd = senscalc().arg(&args_file).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Argument files can be made with --save-toml"), "{stderr}");
}

#[test]
fn test_save_toml() {
    let dir = TempDir::new().unwrap();
    let toml = dir.path().join("saved.toml");

    let cmd = senscalc()
        .args(["-f", "43000", "-c", "h168", "-w", "U", "--dry-run", "--save-toml"])
        .arg(&toml)
        .ok();
    let ok = cmd.is_ok();
    let (_, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    let contents = std::fs::read_to_string(&toml).unwrap();
    assert!(contents.contains("frequency = 43000"), "{contents}");
    assert!(contents.contains("configuration = \"h168\""), "{contents}");

    // The saved file reproduces the run.
    let cmd = senscalc().arg(&toml).ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    assert!(stdout.contains("h168"), "{stdout}");
    assert!(stdout.contains("Uniform (U)"), "{stdout}");
}
