//! Numeric policy constants for overlay decisions (internal).
//!
//! Policy
//! - Defaults are fixed constants; the overlay engine relies on them being the
//!   same for every call, so they are not threaded through as parameters.

/// Number of grid cells a safe envelope is padded by under a fixed precision model.
/// Covers the largest coordinate shift rounding can introduce during noding.
pub const SAFE_ENV_EXPAND_FACTOR: f64 = 3.0;

/// Fraction of the smaller envelope extent used as padding under a floating model.
pub const FLOATING_EXPAND_FRACTION: f64 = 0.1;

/// Relative slack for the result-area sanity heuristic.
pub const AREA_HEURISTIC_TOLERANCE: f64 = 0.1;

/// Suffix appended to diagnostic edge labels for result-area edges.
pub(crate) const RESULT_AREA_LABEL_SUFFIX: &str = " Res";
