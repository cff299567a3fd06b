//! Error codes for global-environment diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E2xxx: Type environment / import errors
//! - E9xxx: Internal compiler errors

use std::fmt;

/// Error codes reported by the global type environment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// A system type or attribute could not be found when it was needed
    E2101,
    /// A resolved compilation unit does not define the requested type
    E2102,
    /// The attribute is not on the embeddable allow-list
    E2103,
    /// No built-in witness exists for a trait constraint shape
    E9101,
    /// The environment configuration was rejected
    E9102,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E2101,
        ErrorCode::E2102,
        ErrorCode::E2103,
        ErrorCode::E9101,
        ErrorCode::E9102,
    ];

    /// The code as written in output, e.g. `"E2101"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2101 => "E2101",
            ErrorCode::E2102 => "E2102",
            ErrorCode::E2103 => "E2103",
            ErrorCode::E9101 => "E9101",
            ErrorCode::E9102 => "E9102",
        }
    }

    /// Internal errors indicate a compiler bug rather than a user mistake.
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("E9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
