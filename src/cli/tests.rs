//! Unit tests for CLI argument parsing

use crate::cli::{Cli, Commands};
use crate::config::Flavor;
use clap::Parser;

#[test]
fn test_serve_defaults() {
    let cli = Cli::try_parse_from(["specdocs", "serve", "openapi.json"]).unwrap();

    match cli.command {
        Commands::Serve {
            spec,
            base_path,
            flavor,
            doc_url,
            no_open,
            no_ui,
            flatten,
            host,
            path,
            source_url,
            ..
        } => {
            assert_eq!(spec, "openapi.json");
            assert_eq!(base_path, "");
            assert_eq!(flavor, Flavor::Redoc);
            assert!(doc_url.is_none());
            assert!(!no_open);
            assert!(!no_ui);
            assert!(!flatten);
            assert_eq!(host, "0.0.0.0");
            assert_eq!(path, "docs");
            assert!(source_url.is_none());
        }
    }
}

#[test]
fn test_serve_missing_spec_is_usage_error() {
    assert!(Cli::try_parse_from(["specdocs", "serve"]).is_err());
}

#[test]
fn test_serve_short_flags() {
    let cli = Cli::try_parse_from([
        "specdocs",
        "serve",
        "spec.yaml",
        "-F",
        "swagger",
        "-p",
        "8080",
        "-S",
        "https://example.com/assets",
    ])
    .unwrap();

    match cli.command {
        Commands::Serve {
            flavor,
            port,
            source_url,
            ..
        } => {
            assert_eq!(flavor, Flavor::Swagger);
            assert_eq!(port, 8080);
            assert_eq!(source_url.as_deref(), Some("https://example.com/assets"));
        }
    }
}

#[test]
fn test_serve_long_flags() {
    let cli = Cli::try_parse_from([
        "specdocs",
        "serve",
        "spec.yaml",
        "--base-path",
        "/api",
        "--flavor",
        "redoc",
        "--doc-url",
        "https://example.com/spec",
        "--no-open",
        "--no-ui",
        "--flatten",
        "--host",
        "127.0.0.1",
        "--path",
        "api-docs",
        "--source_url",
        "https://example.com/assets",
    ])
    .unwrap();

    match cli.command {
        Commands::Serve {
            base_path,
            flavor,
            doc_url,
            no_open,
            no_ui,
            flatten,
            host,
            path,
            source_url,
            ..
        } => {
            assert_eq!(base_path, "/api");
            assert_eq!(flavor, Flavor::Redoc);
            assert_eq!(doc_url.as_deref(), Some("https://example.com/spec"));
            assert!(no_open);
            assert!(no_ui);
            assert!(flatten);
            assert_eq!(host, "127.0.0.1");
            assert_eq!(path, "api-docs");
            assert_eq!(source_url.as_deref(), Some("https://example.com/assets"));
        }
    }
}

#[test]
fn test_invalid_flavor_rejected() {
    assert!(Cli::try_parse_from(["specdocs", "serve", "spec.yaml", "-F", "rapidoc"]).is_err());
}
