//! Diagnostic values for the Lumen compiler.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Notes (why, and what was requested)
//! - An optional source file, resolved against the session base path
//!
//! Rendering to a terminal or a machine format is the driver's job; this
//! crate only provides the values and a plain `Display`.

mod diagnostic;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
