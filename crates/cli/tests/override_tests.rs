//! Integration tests for the varsub CLI crate
//!
//! These tests drive the argument structures and override merging the same
//! way the binary does, then resolve values through the core.

use clap::Parser;
use varsub_cli::cli_args::Args;
use varsub_cli::overrides::apply_overrides;
use varsub_core::diagnostics::NullSink;
use varsub_core::interpolation::resolve_variables;
use varsub_core::property_sources::PropertySources;

fn sources_from_args(args: &Args) -> PropertySources {
    let mut sources = PropertySources::new();
    apply_overrides(
        &mut sources,
        &args.properties,
        &args.defaults,
        &args.directories,
    )
    .unwrap();
    sources
}

#[test]
fn test_ad_hoc_properties_resolve_values() {
    let args = Args::parse_from([
        "varsub",
        "-p",
        "root=/opt",
        "-p",
        "a.dir=${root}/lib",
        "${a.dir}/x.jar",
    ]);

    let sources = sources_from_args(&args);

    let resolved = resolve_variables(&NullSink, &args.values[0], &sources);
    assert_eq!(resolved, Some("/opt/lib/x.jar".to_string()));
}

#[test]
fn test_directory_flag_shadows_property_flag() {
    let args = Args::parse_from([
        "varsub",
        "-p",
        "lib.dir=/ignored",
        "-d",
        "lib.dir=/usr/lib",
        "${lib.dir}/a",
    ]);

    let sources = sources_from_args(&args);

    let resolved = resolve_variables(&NullSink, &args.values[0], &sources);
    assert_eq!(resolved, Some("/usr/lib/a".to_string()));
}

#[test]
fn test_default_flag_is_fallback_only() {
    let args = Args::parse_from([
        "varsub",
        "-p",
        "root=/opt",
        "-D",
        "root=/fallback",
        "${root}",
    ]);

    let sources = sources_from_args(&args);

    let resolved = resolve_variables(&NullSink, &args.values[0], &sources);
    assert_eq!(resolved, Some("/opt".to_string()));
}

#[test]
fn test_unresolvable_value_yields_none() {
    let args = Args::parse_from(["varsub", "-p", "root=/opt", "${missing}/lib"]);

    let sources = sources_from_args(&args);

    let resolved = resolve_variables(&NullSink, &args.values[0], &sources);
    assert_eq!(resolved, None);
}

#[test]
fn test_bad_mapping_is_reported() {
    let args = Args::parse_from(["varsub", "-p", "no-equals-here", "${root}"]);

    let mut sources = PropertySources::new();
    let result = apply_overrides(
        &mut sources,
        &args.properties,
        &args.defaults,
        &args.directories,
    );

    assert!(result.is_err());
}
