//! Tests for check, render, completions, man.

use super::parse;
use crate::cli::CliCommand;
use std::path::PathBuf;

#[test]
fn cli_parse_check_defaults() {
    match parse(&["docredir", "check"]) {
        CliCommand::Check { redirects, targets } => {
            assert!(redirects.is_none());
            assert!(targets.is_none());
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_paths() {
    match parse(&[
        "docredir",
        "check",
        "--redirects",
        "doc/redirects.json",
        "--targets",
        "out/xrefs.json",
    ]) {
        CliCommand::Check { redirects, targets } => {
            assert_eq!(redirects, Some(PathBuf::from("doc/redirects.json")));
            assert_eq!(targets, Some(PathBuf::from("out/xrefs.json")));
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_render_site_wide() {
    match parse(&["docredir", "render"]) {
        CliCommand::Render { page, out, .. } => {
            assert!(page.is_none());
            assert!(out.is_none());
        }
        _ => panic!("expected Render"),
    }
}

#[test]
fn cli_parse_render_page_to_file() {
    match parse(&[
        "docredir",
        "render",
        "--page",
        "index.html",
        "-o",
        "redirects.js",
    ]) {
        CliCommand::Render { page, out, .. } => {
            assert_eq!(page.as_deref(), Some("index.html"));
            assert_eq!(out, Some(PathBuf::from("redirects.js")));
        }
        _ => panic!("expected Render with --page"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["docredir", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["docredir", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
