//! Validation failures raised while constructing domain values.

use thiserror::Error;

/// A byte value fell outside [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("byte value cannot be lower than 0 (0x00)")]
    BelowMinimum,

    #[error("byte value cannot exceed 255 (0xFF)")]
    AboveMaximum,
}

/// Structural rule broken by a textual address or number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("input does not look like an IPv6 address")]
    NotIpv6,

    #[error("an IPv6 address can only have 1 group of collapsed zeros (::)")]
    MultipleCollapsedGroups,

    #[error("an IPv6 address must have 8 groups")]
    GroupCount,

    #[error("IPv6 group is empty")]
    EmptyGroup,

    #[error("IPv6 group has more than 4 hex digits")]
    GroupTooLong,

    #[error("IPv6 group contains a non-hex digit")]
    InvalidHexDigit,

    #[error("an IPv4 address must be in the format N.N.N.N")]
    NotIpv4,

    #[error("IPv4 octet must be a decimal integer")]
    InvalidOctet,

    #[error("byte value must be a decimal integer")]
    NotAnInteger,
}

/// Every way constructing a domain value can fail.
///
/// The display text of each variant is the user-facing message; callers
/// match on the variant and may show the message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error(transparent)]
    OutOfRange(#[from] RangeError),

    #[error(transparent)]
    InvalidFormat(#[from] FormatError),

    /// Carries the rejected (trimmed) input verbatim.
    #[error("unknown US state: {0}")]
    UnknownState(String),
}

pub type Result<T, E = ValueError> = std::result::Result<T, E>;
