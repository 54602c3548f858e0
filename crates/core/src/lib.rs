//! Varsub Core Library
//!
//! This crate provides the core functionality for varsub, a configuration
//! value resolution tool that expands `${name}` placeholders in string
//! values against layered property sources, recursively, until a fully
//! literal string is produced.
//!
//! # Key Features
//!
//! - **Recursive Resolution**: Variable values may reference further
//!   variables; cyclic references are detected and rejected
//! - **Layered Sources**: Directory table, explicit properties and default
//!   properties consulted in a fixed fallback order
//! - **Diagnostics**: Failure causes reported through an injected sink
//!   without affecting the resolution outcome
//! - **Source Loading**: Read and validate property sources from YAML files
//! - **Error Handling**: Dedicated error types for all failure modes
//!
//! # Examples
//!
//! Resolving a value against in-memory sources:
//!
//! ```
//! use varsub_core::diagnostics::NullSink;
//! use varsub_core::interpolation::resolve_variables;
//! use varsub_core::property_sources::PropertySources;
//!
//! let mut sources = PropertySources::new();
//! sources.properties.insert("a.dir".to_string(), "${root}/lib".to_string());
//! sources.properties.insert("root".to_string(), "/opt".to_string());
//!
//! let resolved = resolve_variables(&NullSink, "${a.dir}/x.jar", &sources);
//! assert_eq!(resolved, Some("/opt/lib/x.jar".to_string()));
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod file_handling;
pub mod interpolation;
pub mod property_sources;
