//! Session configuration for the global environment.
//!
//! A `GlobalsConfig` is fixed when the environment is constructed. Nothing
//! here can change afterwards, so every consumer thread sees the same flags.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// How the compiler session is being driven.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum CompilationMode {
    /// One-shot command line compilation.
    #[default]
    Batch,
    /// Interactive evaluation session.
    Interactive,
    /// Long-running editor service.
    Service,
}

impl CompilationMode {
    pub fn is_interactive(self) -> bool {
        matches!(self, CompilationMode::Interactive)
    }
}

/// Language features whose availability depends on the language version.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LangFeature {
    /// Value tuples decompile to source struct tuples.
    StructTuples,
    /// Marker attributes missing from the runtime are defined locally.
    EmbeddedAttributes,
    NullnessChecking,
}

impl LangFeature {
    /// First language version that ships this feature.
    pub const fn min_version(self) -> LangVersion {
        match self {
            LangFeature::StructTuples => LangVersion::new(1, 1),
            LangFeature::EmbeddedAttributes => LangVersion::new(2, 0),
            LangFeature::NullnessChecking => LangVersion::new(3, 0),
        }
    }
}

/// A `major.minor` language version.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct LangVersion {
    pub major: u16,
    pub minor: u16,
}

impl LangVersion {
    pub const MIN: LangVersion = LangVersion::new(1, 0);
    pub const LATEST: LangVersion = LangVersion::new(3, 1);

    pub const fn new(major: u16, minor: u16) -> Self {
        LangVersion { major, minor }
    }

    pub fn supports(self, feature: LangFeature) -> bool {
        self >= feature.min_version()
    }

    pub fn is_supported(self) -> bool {
        (LangVersion::MIN..=LangVersion::LATEST).contains(&self)
    }
}

impl Default for LangVersion {
    fn default() -> Self {
        LangVersion::LATEST
    }
}

impl fmt::Display for LangVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Configuration captured by the global environment at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalsConfig {
    /// The unit being compiled is the language's own standard library.
    pub compiling_std_lib: bool,
    /// Track nullness on reference types.
    pub null_tracking: bool,
    pub mode: CompilationMode,
    pub lang_version: LangVersion,
    /// Directory relative source paths are resolved against. Empty means none.
    pub base_path: PathBuf,
    /// Omit debugger-only attributes from generated members.
    pub suppress_debug_attributes: bool,
    /// Assembly-level name of the standard library.
    pub std_lib_name: String,
}

impl Default for GlobalsConfig {
    fn default() -> Self {
        GlobalsConfig {
            compiling_std_lib: false,
            null_tracking: false,
            mode: CompilationMode::Batch,
            lang_version: LangVersion::LATEST,
            base_path: PathBuf::new(),
            suppress_debug_attributes: false,
            std_lib_name: "Lumen.Core".to_owned(),
        }
    }
}

impl GlobalsConfig {
    #[must_use]
    pub fn with_std_lib(mut self, compiling_std_lib: bool) -> Self {
        self.compiling_std_lib = compiling_std_lib;
        self
    }

    #[must_use]
    pub fn with_null_tracking(mut self, null_tracking: bool) -> Self {
        self.null_tracking = null_tracking;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: CompilationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_lang_version(mut self, lang_version: LangVersion) -> Self {
        self.lang_version = lang_version;
        self
    }

    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    #[must_use]
    pub fn with_suppress_debug_attributes(mut self, suppress: bool) -> Self {
        self.suppress_debug_attributes = suppress;
        self
    }

    /// Check the configuration before an environment is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.as_os_str().is_empty() && !self.base_path.is_absolute() {
            return Err(ConfigError::RelativeBasePath(self.base_path.clone()));
        }
        if !self.lang_version.is_supported() {
            return Err(ConfigError::UnsupportedLanguageVersion {
                version: self.lang_version,
                min: LangVersion::MIN,
                latest: LangVersion::LATEST,
            });
        }
        Ok(())
    }

    /// Null tracking is only honoured when the language version supports it.
    pub fn effective_null_tracking(&self) -> bool {
        self.null_tracking && self.lang_version.supports(LangFeature::NullnessChecking)
    }

    #[inline]
    pub fn supports(&self, feature: LangFeature) -> bool {
        self.lang_version.supports(feature)
    }

    /// Resolve a source path against the base path.
    ///
    /// Absolute paths, and every path when no base is configured, come back unchanged.
    pub fn resolve_source_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() || self.base_path.as_os_str().is_empty() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}
