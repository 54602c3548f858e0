use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::debug;
use varsub_core::diagnostics::LogSink;
use varsub_core::error::{Error, Result};
use varsub_core::interpolation::resolve_variables;
use varsub_core::property_sources::PropertySources;
use varsub_core::{config, file_handling};

use varsub_cli::cli_args::Args;
use varsub_cli::overrides::apply_overrides;

/// Load the property sources and apply command-line overrides
fn initialize_sources(args: &Args) -> Result<PropertySources> {
    let sources_path = config::get_sources_path(&args.sources_path);
    debug!("Sources path: `{}`", sources_path);

    // An explicitly given file must exist; the default path is optional.
    let mut sources = if args.sources_path.is_some() {
        file_handling::load_property_sources(&sources_path)?
    } else {
        file_handling::load_optional_property_sources(&sources_path)?.unwrap_or_default()
    };

    apply_overrides(
        &mut sources,
        &args.properties,
        &args.defaults,
        &args.directories,
    )?;

    Ok(sources)
}

fn log_effective_sources(sources: &PropertySources) {
    for (name, value) in sources.properties.iter().sorted() {
        debug!("property `{name}` = `{value}`");
    }
    for (name, value) in sources.defaults.iter().sorted() {
        debug!("default `{name}` = `{value}`");
    }
    for (name, path) in sources.directories.iter().sorted() {
        debug!("directory `{name}` = `{}`", path.display());
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let sources = initialize_sources(&args)?;
    log_effective_sources(&sources);

    let sink = LogSink;

    for value in &args.values {
        match resolve_variables(&sink, value, &sources) {
            Some(resolved) => println!("{resolved}"),
            None => return Err(Error::Unresolved(value.clone())),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
