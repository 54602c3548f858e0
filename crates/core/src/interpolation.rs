//! Recursive resolution of `${name}` placeholders in configuration values.
//!
//! A variable's value may itself reference further variables; resolution
//! recurses until a fully literal string is produced or fails as a whole.
//! A resolution chain tracks the names being expanded along the current
//! branch so that cyclic references are rejected instead of recursing
//! forever. Failure is all-or-nothing: a single unresolvable placeholder
//! invalidates the entire input string.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostics::DiagnosticSink;
use crate::property_sources::PropertySources;

/// Non-greedy, so adjacent placeholders are captured separately.
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(.*?)\}").unwrap()
});

/// Resolves every `${name}` placeholder in `value` to a literal string.
///
/// Each distinct placeholder is looked up in `sources` and its raw value is
/// recursively resolved before being substituted back into `value`.
/// Backslashes are normalized to forward slashes in the input and in every
/// substituted value, keeping the result stable across path-separator
/// conventions.
///
/// Returns `None` when any placeholder is cyclic, has no value in any
/// source, or has a value that itself fails to resolve. The reason for a
/// failure is reported to `sink` only; a successful result never contains
/// an unresolved placeholder.
pub fn resolve_variables(
    sink: &dyn DiagnosticSink,
    value: &str,
    sources: &PropertySources,
) -> Option<String> {
    resolve_with_chain(sink, value, None, sources)
}

fn resolve_with_chain(
    sink: &dyn DiagnosticSink,
    value: &str,
    chain: Option<&HashSet<String>>,
    sources: &PropertySources,
) -> Option<String> {
    let mut resolved = value.replace('\\', "/");

    // Scan the original input, not the normalized copy. Duplicate
    // placeholders are collected once; the set of names found in one string
    // is treated as unordered, and every name is checked against the same
    // chain snapshot.
    let mut names_to_resolve = HashSet::new();

    for captures in VAR_PATTERN.captures_iter(value) {
        let name = &captures[1];
        if chain.is_some_and(|chain| chain.contains(name)) {
            sink.debug(&format!(
                "Found a recursive variable reference when resolving ${{{name}}}"
            ));
            return None;
        }
        names_to_resolve.insert(name.to_string());
    }

    for name in &names_to_resolve {
        let raw_value = sources.lookup(name);

        let Some(raw_value) = raw_value.filter(|value| !value.is_empty()) else {
            sink.debug(&format!("Variable {name} cannot be resolved."));
            return None;
        };

        // Each branch extends its own copy of the chain, so resolving two
        // independent variables in the same string cannot trigger a false
        // cycle between unrelated branches.
        let mut branch_chain = HashSet::new();
        branch_chain.insert(name.clone());
        if let Some(chain) = chain {
            branch_chain.extend(chain.iter().cloned());
        }

        match resolve_with_chain(sink, &raw_value, Some(&branch_chain), sources) {
            Some(resolved_value) => {
                let resolved_value = resolved_value.replace('\\', "/");
                // Literal replacement: the name is never treated as a
                // pattern even though the enclosing scan is pattern-based.
                resolved = resolved.replace(&format!("${{{name}}}"), &resolved_value);
            }
            None => {
                sink.debug(&format!(
                    "Could not resolve the value {raw_value} for variable ${{{name}}}"
                ));
                return None;
            }
        }
    }

    sink.debug(&format!(
        "Expression {value} evaluated and replaced with {resolved}"
    ));

    Some(resolved)
}
