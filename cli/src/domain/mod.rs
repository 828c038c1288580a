//! Domain layer: pure types, validation, and settings resolution.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod help;
pub mod settings;

pub use error::{DiscoveryError, RunError, SettingsError};
pub use help::{HelpCapture, HelpWarning};
pub use settings::{DEFAULT_CONFIG_DIR, DisplayMode, Settings, SettingsFile, SettingsOverrides};
