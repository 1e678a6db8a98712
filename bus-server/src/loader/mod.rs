//! Validator and loader for the route data file.
//!
//! The file is read exactly once, at startup. Its structure is checked
//! against the fixed format below; the first failing check rejects the
//! whole dataset and nothing is retained. On success the parsed route
//! records are streamed into the adjacency index, which then serves
//! queries for the rest of the process lifetime.
//!
//! Format (UTF-8, newline-delimited, tokens separated by whitespace):
//!
//! ```text
//! <declared_route_count>
//! <route_id> <station_id_1> <station_id_2> ... <station_id_n>
//! ...
//! ```
//!
//! Lines are trimmed and blank lines are ignored; the first non-blank
//! line is the header.

mod config;
mod error;

pub use config::{LoadLimits, MAX_ROUTES, MAX_STATIONS_PER_ROUTE, MAX_UNIQUE_STATIONS};
pub use error::{LoadError, ValidationErrorKind};

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::domain::{RouteId, RouteRecord, StationId};
use crate::index::AdjacencyIndex;

/// Load, validate and index a route data file.
///
/// This is the bootstrap entry point: either a fully built
/// [`AdjacencyIndex`] comes back, or the load attempt failed and the
/// process must not serve queries.
pub fn load(path: impl AsRef<Path>, limits: &LoadLimits) -> Result<AdjacencyIndex, LoadError> {
    let records = load_records(path, limits)?;
    Ok(AdjacencyIndex::from_records(&records))
}

/// Load and validate a route data file into route records, preserving
/// file order.
pub fn load_records(
    path: impl AsRef<Path>,
    limits: &LoadLimits,
) -> Result<Vec<RouteRecord>, LoadError> {
    let path = path.as_ref();
    check_file_access(path)?;

    let contents = fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_and_validate(&contents, limits)?;
    info!(routes = records.len(), path = %path.display(), "route data file loaded");
    Ok(records)
}

/// File-access preconditions, checked before any content validation.
fn check_file_access(path: &Path) -> Result<(), LoadError> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if metadata.is_dir() {
        return Err(LoadError::IsDirectory(path.to_path_buf()));
    }

    Ok(())
}

fn parse_and_validate(contents: &str, limits: &LoadLimits) -> Result<Vec<RouteRecord>, LoadError> {
    let mut lines = contents.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = lines.next().ok_or_else(|| {
        LoadError::Malformed("missing header line with the declared route count".into())
    })?;
    let declared: usize = header.parse().map_err(|_| {
        LoadError::Malformed(format!("header '{header}' is not a non-negative integer"))
    })?;

    let data_lines: Vec<&str> = lines.collect();

    // The count check runs on raw lines, before any token parsing.
    if data_lines.len() != declared {
        return Err(ValidationErrorKind::RoutesCountMismatch.into());
    }

    let rows = tokenize(&data_lines)?;
    validate(&rows, declared, limits)?;

    Ok(rows
        .into_iter()
        .map(|row| {
            RouteRecord::new(
                RouteId(row[0]),
                row[1..].iter().copied().map(StationId).collect(),
            )
        })
        .collect())
}

fn tokenize(lines: &[&str]) -> Result<Vec<Vec<u64>>, LoadError> {
    lines
        .iter()
        .map(|line| {
            line.split_whitespace()
                .map(|token| {
                    token.parse::<u64>().map_err(|_| {
                        LoadError::Malformed(format!(
                            "non-numeric token '{token}' in route line '{line}'"
                        ))
                    })
                })
                .collect()
        })
        .collect()
}

/// Content checks in priority order; the first violation wins.
fn validate(
    rows: &[Vec<u64>],
    declared: usize,
    limits: &LoadLimits,
) -> Result<(), ValidationErrorKind> {
    // Route checks. Every row has at least one token: blank lines were
    // filtered before tokenizing.
    let unique_route_ids: HashSet<u64> = rows.iter().map(|row| row[0]).collect();
    if unique_route_ids.len() != rows.len() {
        return Err(ValidationErrorKind::DuplicateRouteIds);
    }
    if declared > limits.max_routes {
        return Err(ValidationErrorKind::MaxRoutesExceeded);
    }

    // Station checks.
    let unique_stations: HashSet<u64> = rows
        .iter()
        .flat_map(|row| row[1..].iter().copied())
        .collect();
    if unique_stations.len() > limits.max_unique_stations {
        return Err(ValidationErrorKind::MaxUniqueStationsExceeded);
    }

    // Per-route checks.
    if rows.iter().any(|row| row.len() < 3) {
        return Err(ValidationErrorKind::InsufficientStationsPerRoute);
    }
    if rows.iter().any(|row| {
        let stations = &row[1..];
        stations.iter().collect::<HashSet<_>>().len() != stations.len()
    }) {
        return Err(ValidationErrorKind::DuplicateStationsInRoute);
    }
    if rows
        .iter()
        .any(|row| row.len() - 1 > limits.max_stations_per_route)
    {
        return Err(ValidationErrorKind::MaxStationsPerRouteExceeded);
    }

    Ok(())
}
