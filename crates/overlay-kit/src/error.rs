//! Error type for constructors and parsers.
//!
//! The decision procedures themselves are total; errors only arise when
//! converting untrusted values (op names, dimension codes, scales) into the
//! crate's types.

/// Errors raised while building overlay inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OverlayError {
    /// Op name or numeric code does not denote an overlay operation.
    #[error("unknown overlay operation `{0}`")]
    UnknownOpCode(String),
    /// Dimension code outside -1..=2.
    #[error("invalid dimension code {0} (expected -1, 0, 1 or 2)")]
    InvalidDimension(i32),
    /// Fixed precision scale must be finite and strictly positive.
    #[error("invalid precision scale {0} (must be finite and > 0)")]
    InvalidScale(f64),
    /// Asked for an empty result of the undefined dimension.
    #[error("unable to determine overlay result geometry dimension")]
    UndeterminedDimension,
    /// Envelope text could not be parsed.
    #[error("malformed envelope `{0}` (expected minx,miny,maxx,maxy or `empty`)")]
    MalformedEnvelope(String),
}
