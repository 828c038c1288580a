//! Application service: settings use-cases.

use anyhow::Result;

use crate::application::ports::SettingsStore;
use crate::domain::{Settings, SettingsOverrides};

/// Load the settings file and merge command-line overrides into it.
///
/// # Errors
///
/// Returns an error if the settings file exists but cannot be parsed, or if
/// the merged values fail validation.
pub fn resolve_settings(
    store: &impl SettingsStore,
    overrides: SettingsOverrides,
) -> Result<Settings> {
    let file = store.load()?;
    Settings::resolve(&file, overrides)
}
