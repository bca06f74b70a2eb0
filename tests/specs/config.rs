// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for printutils.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > `verbose = 1` in printutils.toml enables output
#[test]
fn config_file_enables_output() {
    let temp = Project::with_verbose("1");
    cli("message")
        .pwd(temp.path())
        .args(&["configured"])
        .passes()
        .stdout_has(lines_match(&[message_re("configured")]));
}

/// > Config is discovered from a subdirectory up to the git root
#[test]
fn config_discovered_from_subdirectory() {
    let temp = Project::with_verbose("1");
    temp.file("nested/dir/.keep", "");
    cli("line")
        .pwd(temp.path().join("nested/dir"))
        .passes()
        .stdout_has(lines_match(&[separator_re()]));
}

/// > `verbose = true` is not the level 1 and stays silent
#[test]
fn boolean_true_is_silent() {
    let temp = Project::with_verbose("true");
    cli("line").pwd(temp.path()).passes().stdout_eq("");
}

/// > --verbose overrides the config file
#[test]
fn flag_overrides_config() {
    let temp = Project::with_verbose("1");
    cli("line")
        .pwd(temp.path())
        .verbose(0)
        .passes()
        .stdout_eq("");
}

/// > -C selects an explicit config file
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\nverbose = 1\n");
    cli("message")
        .pwd(temp.path())
        .args(&["-C", "custom.toml", "explicit"])
        .passes()
        .stdout_has(lines_match(&[message_re("explicit")]));
}

/// > Missing explicit config is a config error (exit code 2)
#[test]
fn missing_explicit_config_exits_2() {
    let temp = Project::empty();
    cli("line")
        .pwd(temp.path())
        .args(&["-C", "absent.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

/// > A string `verbose` is an invalid configuration shape
#[test]
fn string_verbose_exits_2() {
    let temp = Project::with_verbose("\"yes\"");
    cli("line")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("printutils: config error");
}

/// > Missing version is a config error
#[test]
fn missing_version_exits_2() {
    let temp = Project::empty();
    temp.file("printutils.toml", "verbose = 1\n");
    cli("line")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("missing required field: version");
}

/// > Unknown keys warn but do not fail
#[test]
fn unknown_key_warns() {
    let temp = Project::empty();
    temp.config("verbose = 1\nstyle = \"fancy\"\n");
    cli("line")
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `style`")
        .stdout_has(lines_match(&[separator_re()]));
}

/// > -C naming a directory is a config error, not an I/O failure
#[test]
fn explicit_config_directory_exits_2() {
    let temp = Project::empty();
    temp.file("settings/.keep", "");
    cli("line")
        .pwd(temp.path())
        .args(&["-C", "settings"])
        .exits(2)
        .stderr_has("config path is a directory");
}

/// > `verbose = 1.0` equals the level 1 and prints
#[test]
fn float_one_enables_output() {
    let temp = Project::with_verbose("1.0");
    cli("line")
        .pwd(temp.path())
        .passes()
        .stdout_has(lines_match(&[separator_re()]));
}
