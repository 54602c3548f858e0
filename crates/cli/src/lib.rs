//! Varsub CLI Library
//!
//! This crate provides the command-line interface for varsub, a
//! configuration value resolution tool. It handles argument parsing,
//! loading property sources from disk and merging command-line overrides
//! over them.
//!
//! # Key Features
//!
//! - **Source Loading**: Read property sources from a YAML file, with a
//!   default location under `~/.varsub`
//! - **Overrides**: Repeatable `key=value` flags for properties, defaults
//!   and directory table entries
//! - **Batch Resolution**: Resolve any number of values in one invocation,
//!   failing the run on the first unresolvable value
//!
//! # Examples
//!
//! The CLI binary (`varsub`) can be used in several ways:
//!
//! ```bash
//! # Resolve against the default sources file
//! varsub '${server.config.dir}/server.xml'
//!
//! # Resolve against an explicit sources file
//! varsub --sources-path ./sources.yml '${a.dir}/x.jar'
//!
//! # Ad-hoc properties without a sources file
//! varsub -p root=/opt -p a.dir='${root}/lib' '${a.dir}/x.jar'
//!
//! # Directory table entries shadow properties of the same name
//! varsub -d lib.dir=/usr/lib -p lib.dir=/ignored '${lib.dir}/a'
//! ```

pub mod cli_args;
pub mod overrides;
