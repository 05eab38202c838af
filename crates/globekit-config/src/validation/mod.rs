//! Full configuration validation.
//!
//! Each section has its own submodule. `sanitize` repairs a config field by
//! field; `validate` reports the same problems without touching anything.

mod helpers;
mod measure;
mod sync;

#[cfg(test)]
mod tests;

use crate::schema::GlobekitConfig;
use globekit_common::ConfigError;

/// Reset every out-of-range field to its default. Returns one message per
/// field that was reset; the rest of the config is kept as loaded.
pub fn sanitize(config: &mut GlobekitConfig) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    sync::sanitize_sync(&mut errors, &mut config.sync);
    sync::sanitize_overlay(&mut errors, &mut config.overlay);
    measure::sanitize_measure(&mut errors, &mut config.measure);

    errors
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlobekitConfig) -> Result<(), ConfigError> {
    let errors = sanitize(&mut config.clone());

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
