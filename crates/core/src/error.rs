use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not resolve the configuration value `{}`.", .0)]
    Unresolved(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Invalid mapping `{}`: expected `key=value`.", .0)]
    MappingFormat(String),

    #[error("Invalid mapping `{}`: key may not be empty.", .0)]
    EmptyMappingKey(String),

    #[error("Property name may not be empty in sources file at `{}`.", .path)]
    EmptyPropertyName { path: String },

    #[error("Property name `{}` in sources file at `{}` may not contain braces.", .name, .path)]
    PropertyNameWithBrace { name: String, path: String },
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
