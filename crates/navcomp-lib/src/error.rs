use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the navcomp library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a body name could not be matched against the catalog.
    #[error("unknown body name: {name}{}", format_suggestions(.suggestions))]
    UnknownBody {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no hub leg could be computed for a body during routing.
    #[error("unable to route from {body} to any gates")]
    NoRouteToHubs { body: String },

    /// Raised when the line-of-sight search exhausts its radius ladder.
    #[error("no bodies found along line")]
    NoBodiesFound,

    /// Raised when a named region frame is absent from the catalog.
    #[error("unable to find frame {frame}")]
    FrameNotFound { frame: String },

    /// Raised when a query carries arguments the core cannot work with.
    #[error("invalid query: {message}")]
    InvalidQuery { message: String },

    /// Raised when the catalog file does not exist.
    #[error("catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// Raised when the catalog file is not a valid navcomp document.
    #[error("failed to parse catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when a persisted route cache cannot be decoded.
    #[error("failed to parse route cache {path}: {source}")]
    CacheParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when the route cache cannot be written back to disk.
    #[error("unable to write route cache to {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the route cache")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors outside of file loading.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
