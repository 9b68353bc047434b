//! Error classification shared across the crate.
//!
//! Lookup misses during randomized search are not errors and travel as
//! `Option` through [`crate::cost::CostsOracle`]. The error types here cover
//! the remaining cases: inconsistencies that invalidate a whole allocation
//! call.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid caller input; rejected without retry.
    Validation,

    /// The cost tables are corrupt or incomplete; the call cannot proceed
    /// and retrying with the same oracle will fail the same way.
    Fatal,
}

impl ErrorSeverity {
    /// Human-readable name of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// True when the underlying data source is unusable.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}
