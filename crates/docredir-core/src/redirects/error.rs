//! Error types for redirect declaration validation.

use thiserror::Error;

/// Why a set of redirect declarations was rejected.
///
/// Set-valued variants hold sorted items so messages are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    #[error("following identifiers missing in source: {}", .0.join(", "))]
    MissingInSource(Vec<String>),

    #[error("following identifiers don't have a redirect: {}", .0.join(", "))]
    MissingRedirect(Vec<String>),

    #[error("the first location of '{identifier}' must be its current output path")]
    WrongCurrentPath { identifier: String },

    #[error("following paths redirect to different locations: {}", .0.join(", "))]
    Divergent(Vec<String>),

    #[error("following anchors found that conflict with identifiers: {}", .0.join(", "))]
    ConflictingAnchors(Vec<String>),

    #[error(
        "following paths have server-side redirects, please modify them to represent their final paths:{}",
        format_transitive(.0)
    )]
    Transitive(Vec<(String, String)>),
}

fn format_transitive(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(source, dest)| format!("\n\t{source} -> {dest}"))
        .collect()
}
