//! Errors raised by the global environment.

use std::fmt;
use std::path::PathBuf;

use lumen_diagnostic::{Diagnostic, ErrorCode};

use crate::config::LangVersion;

/// Operand and result arity of a trait-constraint witness request.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct WitnessShape {
    pub operands: usize,
    pub has_result: bool,
}

impl fmt::Display for WitnessShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = if self.has_result { "a result" } else { "no result" };
        write!(f, "{} operand(s) and {result}", self.operands)
    }
}

/// Rejected configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base path `{}` must be absolute", .0.display())]
    RelativeBasePath(PathBuf),
    #[error("language version {version} is outside the supported range {min}..={latest}")]
    UnsupportedLanguageVersion {
        version: LangVersion,
        min: LangVersion,
        latest: LangVersion,
    },
}

/// Failure reported by a global-environment operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GlobalsError {
    /// A deferred sentinel was forced. The message names the missing type.
    #[error("{diagnostic}")]
    DeferredResolution { diagnostic: String },

    /// The compilation unit resolved, but does not define the type.
    #[error("type `{path}` is not defined by compilation unit `{unit}`")]
    TypeNotFound { path: String, unit: String },

    #[error("no built-in witness for `{trait_name}` with {shape}")]
    UnsupportedWitness {
        trait_name: String,
        shape: WitnessShape,
    },

    #[error("attribute `{name}` is not available and cannot be embedded")]
    NotEmbeddable { name: String },

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

impl GlobalsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GlobalsError::DeferredResolution { .. } => ErrorCode::E2101,
            GlobalsError::TypeNotFound { .. } => ErrorCode::E2102,
            GlobalsError::NotEmbeddable { .. } => ErrorCode::E2103,
            GlobalsError::UnsupportedWitness { .. } => ErrorCode::E9101,
            GlobalsError::InvalidConfig(_) => ErrorCode::E9102,
        }
    }

    /// Convert to a user-facing diagnostic.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            GlobalsError::DeferredResolution { .. } => diag
                .with_note("the type was referenced while building the global environment"),
            GlobalsError::TypeNotFound { .. } => {
                diag.with_note("the referenced compilation unit may be out of date")
            }
            GlobalsError::NotEmbeddable { .. } => {
                diag.with_note("only compiler-emitted marker attributes can be embedded")
            }
            GlobalsError::UnsupportedWitness { .. } => {
                diag.with_note("the constraint solver requested a witness with no built-in shape")
            }
            GlobalsError::InvalidConfig(_) => diag,
        }
    }
}
