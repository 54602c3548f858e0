//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;

/// Command-line arguments for the varsub CLI tool.
///
/// This structure defines all available command-line options and arguments
/// that can be passed to the `varsub` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use varsub_cli::cli_args::Args;
///
/// // Parse arguments from command line
/// let args = Args::parse();
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the property sources YAML file.
    ///
    /// If not provided, defaults to `~/.varsub/sources.yml`. A missing
    /// default file means empty sources; an explicitly given file must
    /// exist.
    #[arg(long, short = 's')]
    pub sources_path: Option<String>,

    /// Explicit property in the format key=value.
    ///
    /// Multiple properties can be provided with repeated `-p` flags.
    /// Entries override same-named properties from the sources file.
    ///
    /// # Examples
    /// ```bash
    /// varsub -p root=/opt -p a.dir='${root}/lib' '${a.dir}/x.jar'
    /// ```
    #[arg(long = "property", short = 'p', action = clap::ArgAction::Append)]
    pub properties: Vec<String>,

    /// Default (fallback) property in the format key=value.
    ///
    /// Consulted only when a name has no explicit property value.
    #[arg(long = "default", short = 'D', action = clap::ArgAction::Append)]
    pub defaults: Vec<String>,

    /// Directory table entry in the format name=path.
    ///
    /// Directory entries shadow same-named properties and defaults.
    #[arg(long = "dir", short = 'd', action = clap::ArgAction::Append)]
    pub directories: Vec<String>,

    /// Configuration values to resolve.
    ///
    /// Each value is resolved independently and printed on its own line.
    /// The run fails on the first value that cannot be resolved.
    pub values: Vec<String>,
}
