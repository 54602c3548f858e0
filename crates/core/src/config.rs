//! Configuration path utilities for varsub.
//!
//! This module provides functions for resolving the property sources file
//! path and expanding shell variables like `~` in paths.

/// Default path for the property sources file
const DEFAULT_SOURCES_PATH: &str = "~/.varsub/sources.yml";

/// Resolves the property sources file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// sources path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `sources_path_arg` - Optional custom sources file path
///
/// # Returns
///
/// The resolved path to the sources file
///
/// # Examples
///
/// ```
/// use varsub_core::config::get_sources_path;
///
/// // Use default path
/// let default_path = get_sources_path(&None);
///
/// // Use custom path
/// let custom_path = get_sources_path(&Some("/path/to/sources.yml".to_string()));
/// ```
pub fn get_sources_path(sources_path_arg: &Option<String>) -> String {
    let sources_path = match sources_path_arg {
        Some(sources_path) => sources_path,
        None => DEFAULT_SOURCES_PATH,
    };

    shellexpand::tilde(sources_path).to_string()
}
