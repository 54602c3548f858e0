//! File handling and validation for varsub property sources.
//!
//! This module provides functions for reading property sources from a YAML
//! file, along with validation of the property names found in it.

use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};
use crate::property_sources::PropertySources;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn validate_source_names<'a, I>(names: I, path: &str) -> Result<()>
where
    I: Iterator<Item = &'a String>,
{
    for name in names {
        if name.is_empty() {
            return Err(Error::EmptyPropertyName {
                path: path.to_string(),
            });
        }

        // A name containing a brace could never be referenced by a
        // placeholder, since the scan stops at the first closing brace.
        if name.contains('{') || name.contains('}') {
            return Err(Error::PropertyNameWithBrace {
                name: name.clone(),
                path: path.to_string(),
            });
        }
    }

    Ok(())
}

fn validate_sources(sources: &PropertySources, path: &str) -> Result<()> {
    validate_source_names(sources.properties.keys(), path)?;
    validate_source_names(sources.defaults.keys(), path)?;
    validate_source_names(sources.directories.keys(), path)?;

    Ok(())
}

/// Loads and validates property sources from a YAML file.
///
/// The file is a mapping with optional `properties`, `defaults` and
/// `directories` sections; omitted sections are treated as empty.
///
/// # Arguments
///
/// * `sources_path` - Path to the YAML sources file
///
/// # Returns
///
/// The property sources read from the file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - A property or directory name is empty or contains a brace
///
/// # Examples
///
/// ```no_run
/// use varsub_core::file_handling::load_property_sources;
///
/// let sources = load_property_sources(&"~/.varsub/sources.yml".to_string())?;
/// println!("Loaded {} properties", sources.properties.len());
/// # Ok::<(), varsub_core::error::Error>(())
/// ```
pub fn load_property_sources(sources_path: &String) -> Result<PropertySources> {
    let sources_reader = get_reader("sources", sources_path)?;

    let parsing_result: serde_yaml::Result<PropertySources> =
        serde_yaml::from_reader(sources_reader);

    let sources = parsing_result.map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "sources".to_string(),
            sources_path.clone(),
            e,
        )
    })?;

    validate_sources(&sources, sources_path)?;

    Ok(sources)
}

/// Loads property sources from a YAML file that may not exist.
///
/// Returns `None` if the file doesn't exist, so callers using the default
/// sources path can fall back to empty sources.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed or
/// validated.
pub fn load_optional_property_sources(sources_path: &String) -> Result<Option<PropertySources>> {
    if !Path::exists(Path::new(sources_path)) {
        return Ok(None);
    }

    load_property_sources(sources_path).map(Some)
}
