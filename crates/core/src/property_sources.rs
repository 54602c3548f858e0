use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The layered lookup tables a resolution runs against.
///
/// Variables are looked up in the directory table first, then in the
/// explicit properties, then in the defaults. All three tables are
/// read-only for the duration of a resolution.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PropertySources {
    /// Explicit property values.
    #[serde(default)]
    pub properties: HashMap<String, String>,
    /// Fallback values consulted when a property has no explicit value.
    #[serde(default)]
    pub defaults: HashMap<String, String>,
    /// Variables whose value is always a filesystem path. Entries here
    /// shadow same-named properties and defaults.
    #[serde(default)]
    pub directories: HashMap<String, PathBuf>,
}

impl PropertySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the literal, unresolved value of a variable.
    ///
    /// A directory-table entry takes absolute precedence and is rendered to
    /// its string form. Otherwise the explicit properties are consulted,
    /// then the defaults. A name starting with `env.` that has no value
    /// under its exact key is retried with the prefix stripped. A value
    /// wrapped in a matching pair of double quotes has exactly one layer
    /// stripped, except for the bare value `""` which is returned as is.
    ///
    /// Returns `None` if no source has a value for the name.
    pub fn lookup(&self, name: &str) -> Option<String> {
        let value = if let Some(directory) = self.directories.get(name) {
            Some(directory.display().to_string())
        } else {
            let mut value = self.get_property(name);

            if value.is_none() {
                if let Some(unprefixed) = name.strip_prefix("env.") {
                    // Environment-style names may also be stored without
                    // the prefix.
                    if !unprefixed.is_empty() {
                        value = self.get_property(unprefixed);
                    }
                }
            }

            value
        };

        value.map(strip_enclosing_quotes)
    }

    fn get_property(&self, name: &str) -> Option<String> {
        self.properties
            .get(name)
            .or_else(|| self.defaults.get(name))
            .cloned()
    }
}

/// Removes one layer of surrounding double quotes, if present.
///
/// Both ends must be a `"` character and the value must be longer than two
/// characters, so `""` is left untouched. This is not general unescaping.
fn strip_enclosing_quotes(value: String) -> String {
    if value.len() > 2 && value.starts_with('"') && value.ends_with('"') {
        value[1..value.len() - 1].to_string()
    } else {
        value
    }
}
