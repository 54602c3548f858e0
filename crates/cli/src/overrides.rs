//! Command-line overrides for property sources.
//!
//! The `--property`, `--default` and `--dir` flags each carry repeatable
//! `key=value` mappings. This module parses them and merges them over the
//! sources loaded from disk, with the flag winning on key collision.

use std::path::PathBuf;

use varsub_core::error::Error::{EmptyMappingKey, MappingFormat};
use varsub_core::error::Result;
use varsub_core::property_sources::PropertySources;

/// Merge command-line mappings over the loaded property sources.
///
/// # Errors
///
/// Returns an error if any mapping is not in `key=value` format or has an
/// empty key.
pub fn apply_overrides(
    sources: &mut PropertySources,
    properties: &[String],
    defaults: &[String],
    directories: &[String],
) -> Result<()> {
    for (key, value) in parse_mappings(properties)? {
        sources.properties.insert(key, value);
    }

    for (key, value) in parse_mappings(defaults)? {
        sources.defaults.insert(key, value);
    }

    for (key, value) in parse_mappings(directories)? {
        sources.directories.insert(key, PathBuf::from(value));
    }

    Ok(())
}

/// Parse mappings in the format key=value
fn parse_mappings(mappings: &[String]) -> Result<Vec<(String, String)>> {
    let mut parsed = Vec::new();

    for mapping in mappings {
        let parts: Vec<&str> = mapping.split('=').collect();
        if parts.len() != 2 {
            return Err(MappingFormat(mapping.to_string()));
        }

        let key = parts[0];
        if key.is_empty() {
            return Err(EmptyMappingKey(mapping.to_string()));
        }

        parsed.push((key.to_string(), parts[1].to_string()));
    }

    Ok(parsed)
}
