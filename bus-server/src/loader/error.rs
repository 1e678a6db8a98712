//! Loader error types.
//!
//! Two disjoint families: I/O-class errors for problems reaching the
//! file at all, and validation errors for content that violates the
//! data file format. Every error is terminal for the load attempt; a
//! malformed file rejects the entire dataset.

use std::path::PathBuf;

use super::config::{MAX_ROUTES, MAX_STATIONS_PER_ROUTE, MAX_UNIQUE_STATIONS};

/// A content validation failure.
///
/// Each kind carries a stable numeric code and a corrective-action hint
/// so a rejected file can be fixed without reading the loader source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    /// Header count and actual route line count disagree
    #[error("declared route count in the header does not match the number of route lines")]
    RoutesCountMismatch,

    /// Two route lines share the same route id
    #[error("duplicate route ids found in the data file")]
    DuplicateRouteIds,

    /// Declared route count is over the configured limit
    #[error("number of routes exceeds the allowed limit")]
    MaxRoutesExceeded,

    /// Too many distinct stations across all routes
    #[error("number of unique stations across all routes exceeds the allowed limit")]
    MaxUniqueStationsExceeded,

    /// A route line has fewer than route id + 2 stations
    #[error("a route line has fewer than two stations")]
    InsufficientStationsPerRoute,

    /// A station repeats within one route's stop sequence
    #[error("a route visits the same station more than once")]
    DuplicateStationsInRoute,

    /// A single route has too many stations
    #[error("a route has more stations than the allowed limit")]
    MaxStationsPerRouteExceeded,
}

impl ValidationErrorKind {
    /// Stable numeric code for this kind.
    pub fn code(self) -> u16 {
        match self {
            Self::RoutesCountMismatch => 1000,
            Self::DuplicateRouteIds => 1001,
            Self::MaxRoutesExceeded => 1002,
            Self::MaxUniqueStationsExceeded => 1003,
            Self::InsufficientStationsPerRoute => 1004,
            Self::DuplicateStationsInRoute => 1005,
            Self::MaxStationsPerRouteExceeded => 1006,
        }
    }

    /// Suggested fix for the rejected file.
    ///
    /// Limit hints quote the default limits.
    pub fn corrective_action(self) -> String {
        match self {
            Self::RoutesCountMismatch => {
                "make sure the header count matches the route lines present".to_string()
            }
            Self::DuplicateRouteIds => "make sure every route has a unique id".to_string(),
            Self::MaxRoutesExceeded => {
                format!("keep the number of routes at or below {MAX_ROUTES}")
            }
            Self::MaxUniqueStationsExceeded => {
                format!("keep the number of unique stations at or below {MAX_UNIQUE_STATIONS}")
            }
            Self::InsufficientStationsPerRoute => {
                "provide at least 2 stations per route".to_string()
            }
            Self::DuplicateStationsInRoute => {
                "make sure the stations within one route are unique".to_string()
            }
            Self::MaxStationsPerRouteExceeded => {
                format!("keep the stations per route at or below {MAX_STATIONS_PER_ROUTE}")
            }
        }
    }
}

/// Errors from one attempt to load a route data file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The path does not exist
    #[error("route data file '{0}' does not exist")]
    NotFound(PathBuf),

    /// The path names a directory, not a file
    #[error("route data path '{0}' is a directory, not a file")]
    IsDirectory(PathBuf),

    /// The file exists but could not be read
    #[error("route data file '{path}' is not readable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contains something other than whitespace-separated
    /// non-negative integers
    #[error("malformed route data file: {0}")]
    Malformed(String),

    /// The file parses but violates the data file format rules
    #[error(
        "invalid route data file (error {code}): {kind}; {action}",
        code = .0.code(),
        kind = .0,
        action = .0.corrective_action()
    )]
    Validation(#[from] ValidationErrorKind),
}
