//! # code-launcher-core - Core Domain Types
//!
//! Foundation crate for the code launcher. Provides error handling, logging
//! setup, host platform identification, and the launch target model.
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum; [`Error::LaunchFailure`] carries the OS spawn error
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Platform (`platform`)
//! - [`OsFamily`] - Windows / Macintosh / Linux / Other
//! - [`PlatformContext`] - OS, architecture and launcher directory, injected into resolution
//!
//! ### Targets (`target`)
//! - [`Target`] - A file (optionally at a line) or a project directory
//! - [`LaunchRequest`] - Targets accumulated between `begin()` and `end()`
//! - [`ExecutableLocation`] - Resolved editor binary

pub mod error;
pub mod logging;
pub mod platform;
pub mod target;

/// Prelude for common imports used throughout the launcher crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use platform::{encode_arg, OsFamily, PlatformContext};
pub use target::{ExecutableLocation, LaunchRequest, Target};
